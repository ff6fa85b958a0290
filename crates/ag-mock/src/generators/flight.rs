use ag_classifier::CityPair;
use ag_core::payload::Flight;
use chrono::{Duration, NaiveDateTime, NaiveTime};
use rand::Rng;

use super::pick;

const AIRLINES: &[&str] = &[
    "Аэрофлот",
    "Air China",
    "China Eastern",
    "S7 Airlines",
    "Hainan Airlines",
    "China Southern",
    "Ural Airlines",
    "Sichuan Airlines",
    "JAL",
    "ANA",
];

/// 3 to 5 flights on the route, cheapest first.
pub fn generate<R: Rng + ?Sized>(rng: &mut R, now: NaiveDateTime, route: &CityPair) -> Vec<Flight> {
    let count = rng.gen_range(3..=5);
    let mut flights: Vec<Flight> = (0..count).map(|_| flight(rng, now, route)).collect();
    flights.sort_by_key(|f| f.price);
    flights
}

fn flight<R: Rng + ?Sized>(rng: &mut R, now: NaiveDateTime, route: &CityPair) -> Flight {
    let airline = pick(rng, AIRLINES);
    let code: String = airline.chars().take(2).collect::<String>().to_uppercase();
    let flight_number = format!("{code}{}", rng.gen_range(100..1100));

    let day = now.date() + Duration::days(rng.gen_range(0..30));
    let time = NaiveTime::from_hms_opt(rng.gen_range(6..22), rng.gen_range(0..60), 0)
        .unwrap_or(NaiveTime::MIN);
    let departure = day.and_time(time);
    let duration_minutes: u32 = rng.gen_range(420..540);

    Flight {
        airline: airline.to_string(),
        flight_number,
        origin: route.origin.clone(),
        destination: route.destination.clone(),
        departure,
        arrival: departure + Duration::minutes(i64::from(duration_minutes)),
        duration_minutes,
        stops: rng.gen_range(0..2),
        price: rng.gen_range(30_000..80_000),
        available: rng.gen_range(1..=30),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn route() -> CityPair {
        CityPair {
            origin: "Москва".into(),
            destination: "Пекин".into(),
        }
    }

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 16)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn flights_are_sorted_and_in_range() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let flights = generate(&mut rng, now(), &route());
            assert!((3..=5).contains(&flights.len()));
            assert!(flights.windows(2).all(|w| w[0].price <= w[1].price));
            for f in &flights {
                assert!((30_000..80_000).contains(&f.price));
                assert!((420..540).contains(&f.duration_minutes));
                assert!((6..22).contains(&f.departure.hour()));
                assert!(f.stops <= 1);
                assert!((1..=30).contains(&f.available));
                assert_eq!(
                    f.arrival - f.departure,
                    Duration::minutes(i64::from(f.duration_minutes))
                );
                assert_eq!(f.origin, "Москва");
            }
        }
    }

    #[test]
    fn flight_number_uses_airline_prefix() {
        let mut rng = StdRng::seed_from_u64(7);
        for f in generate(&mut rng, now(), &route()) {
            let prefix: String = f.airline.chars().take(2).collect::<String>().to_uppercase();
            assert!(f.flight_number.starts_with(&prefix));
            let digits: u32 = f.flight_number[prefix.len()..].parse().unwrap();
            assert!((100..1100).contains(&digits));
        }
    }
}
