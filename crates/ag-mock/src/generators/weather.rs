use ag_core::payload::{CurrentConditions, DailyForecast, WeatherReport};
use chrono::{Datelike, Duration, NaiveDate};
use rand::Rng;

use super::pick;
use crate::format::date_label;

const FORECAST_DAYS: i64 = 5;

const CONDITIONS: &[&str] = &[
    "Солнечно",
    "Переменная облачность",
    "Облачно",
    "Пасмурно",
    "Небольшой дождь",
    "Дождь",
    "Ливень",
    "Гроза",
    "Небольшой снег",
    "Снег",
    "Метель",
    "Туман",
];

/// Current conditions plus a five-day forecast starting `today`.
pub fn generate<R: Rng + ?Sized>(rng: &mut R, today: NaiveDate, location: &str) -> WeatherReport {
    let forecast: Vec<DailyForecast> = (0..FORECAST_DAYS)
        .map(|offset| day(rng, today + Duration::days(offset)))
        .collect();

    let first = &forecast[0];
    let current = CurrentConditions {
        temp: draw_between(rng, first.temp_min, first.temp_max),
        condition: first.condition.clone(),
        humidity: first.humidity,
        wind_speed: first.wind_speed,
        feels_like: draw_between(rng, first.temp_min, first.temp_max) - 2,
    };

    WeatherReport {
        location: location.to_string(),
        current,
        forecast,
    }
}

fn day<R: Rng + ?Sized>(rng: &mut R, date: NaiveDate) -> DailyForecast {
    let (temp_min, temp_max) = seasonal_range(rng, date.month());
    DailyForecast {
        date,
        label: date_label(date),
        temp_min,
        temp_max,
        condition: pick(rng, CONDITIONS).to_string(),
        humidity: rng.gen_range(40..90),
        wind_speed: rng.gen_range(1..=10),
    }
}

/// Min/max temperature band for the month (1-based).
fn seasonal_range<R: Rng + ?Sized>(rng: &mut R, month: u32) -> (i32, i32) {
    let (base, min_spread, gap, max_spread) = match month {
        12 | 1 | 2 => (-15, 10, 3, 5),
        3..=5 => (0, 10, 5, 7),
        6..=8 => (15, 8, 5, 10),
        _ => (5, 10, 4, 6),
    };
    let min = base + rng.gen_range(0..min_spread);
    let max = min + gap + rng.gen_range(0..max_spread);
    (min, max)
}

fn draw_between<R: Rng + ?Sized>(rng: &mut R, low: i32, high: i32) -> i32 {
    if high > low {
        rng.gen_range(low..high)
    } else {
        low
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn five_consecutive_days_from_today() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let report = generate(&mut rng, today, "Москва");

        assert_eq!(report.location, "Москва");
        assert_eq!(report.forecast.len(), 5);
        for (i, day) in report.forecast.iter().enumerate() {
            assert_eq!(day.date, today + Duration::days(i as i64));
            assert!(day.temp_min < day.temp_max);
            assert!((40..90).contains(&day.humidity));
            assert!((1..=10).contains(&day.wind_speed));
            assert!(CONDITIONS.contains(&day.condition.as_str()));
        }
        assert_eq!(report.forecast[0].label, "пятница, 16 октября");
    }

    #[test]
    fn current_temperature_within_first_day() {
        let today = NaiveDate::from_ymd_opt(2026, 1, 10).unwrap();
        for seed in 0..30 {
            let mut rng = StdRng::seed_from_u64(seed);
            let report = generate(&mut rng, today, "Казань");
            let first = &report.forecast[0];
            assert!(report.current.temp >= first.temp_min);
            assert!(report.current.temp <= first.temp_max);
            assert!(report.current.feels_like <= first.temp_max - 2);
            assert_eq!(report.current.condition, first.condition);
        }
    }

    #[test]
    fn season_bands() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..100 {
            let (min, max) = seasonal_range(&mut rng, 1);
            assert!((-15..-5).contains(&min));
            assert!(max >= min + 3 && max < min + 8);

            let (min, max) = seasonal_range(&mut rng, 7);
            assert!((15..23).contains(&min));
            assert!(max >= min + 5 && max < min + 15);
        }
    }
}
