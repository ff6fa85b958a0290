use ag_core::payload::{PricePoint, PriceRange, StockQuote};
use chrono::{Duration, NaiveDate};
use rand::Rng;

use crate::format::{is_weekend, round2};

/// Calendar days covered by the price walk, today included.
const HISTORY_DAYS: i64 = 31;

const COMPANIES: &[(&str, &str)] = &[
    ("AAPL", "Apple Inc."),
    ("MSFT", "Microsoft Corporation"),
    ("GOOGL", "Alphabet Inc."),
    ("AMZN", "Amazon.com, Inc."),
    ("META", "Meta Platforms, Inc."),
    ("TSLA", "Tesla, Inc."),
    ("NVDA", "NVIDIA Corporation"),
    ("JPM", "JPMorgan Chase & Co."),
    ("V", "Visa Inc."),
    ("JNJ", "Johnson & Johnson"),
    ("WMT", "Walmart Inc."),
    ("PG", "Procter & Gamble Company"),
    ("MA", "Mastercard Incorporated"),
    ("UNH", "UnitedHealth Group Incorporated"),
    ("HD", "The Home Depot, Inc."),
    ("BAC", "Bank of America Corporation"),
    ("XOM", "Exxon Mobil Corporation"),
    ("DIS", "The Walt Disney Company"),
    ("NFLX", "Netflix, Inc."),
    ("INTC", "Intel Corporation"),
];

pub fn company_name(symbol: &str) -> String {
    COMPANIES
        .iter()
        .find(|(s, _)| *s == symbol)
        .map(|(_, name)| name.to_string())
        .unwrap_or_else(|| format!("{symbol} Corporation"))
}

pub fn generate<R: Rng + ?Sized>(rng: &mut R, today: NaiveDate, symbol: &str) -> StockQuote {
    let base = f64::from(rng.gen_range(10..500u32));
    let history = price_walk(rng, today, base);

    let current = history.last().map_or(base, |p| p.price);
    let previous = history
        .len()
        .checked_sub(2)
        .and_then(|i| history.get(i))
        .map_or(current, |p| p.price);
    let (price_change, price_change_percent) = daily_change(current, previous);

    let (low, high) = history
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
            (lo.min(p.price), hi.max(p.price))
        });

    StockQuote {
        symbol: symbol.to_string(),
        company_name: company_name(symbol),
        current_price: current,
        price_change,
        price_change_percent,
        previous_close: previous,
        open: round2(previous + rng.gen_range(-1.0..1.0)),
        day_range: PriceRange {
            low: round2(current * 0.98),
            high: round2(current * 1.02),
        },
        week52_range: PriceRange {
            low: round2(low * 0.9),
            high: round2(high * 1.1),
        },
        market_cap: rng.gen_range(1..=2000u64) * 1_000_000_000,
        volume: rng.gen_range(1..=50u64) * 1_000_000,
        pe_ratio: f64::from(rng.gen_range(10..40u32)),
        dividend_yield: round2(rng.gen_range(0.0..5.0)),
        history,
    }
}

/// Absolute and percent change between two closes, each rounded on its own.
fn daily_change(current: f64, previous: f64) -> (f64, f64) {
    let delta = current - previous;
    let percent = if previous > 0.0 {
        round2(delta / previous * 100.0)
    } else {
        0.0
    };
    (round2(delta), percent)
}

/// Weekday closes over the last `HISTORY_DAYS` days, oldest first. The first
/// close is `base`; each later one moves the previous by up to ±5 %.
fn price_walk<R: Rng + ?Sized>(rng: &mut R, today: NaiveDate, base: f64) -> Vec<PricePoint> {
    let mut history: Vec<PricePoint> = Vec::new();

    for back in (0..HISTORY_DAYS).rev() {
        let date = today - Duration::days(back);
        if is_weekend(date) {
            continue;
        }
        let price = match history.last() {
            None => base,
            Some(prev) => prev.price * (1.0 + rng.gen_range(-5.0..5.0) / 100.0),
        };
        history.push(PricePoint {
            date,
            price: round2(price),
        });
    }

    history
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
    }

    #[test]
    fn walk_covers_weekdays_only() {
        let mut rng = StdRng::seed_from_u64(1);
        let history = price_walk(&mut rng, today(), 100.0);
        // 31 calendar days ending on a Saturday hold 22 weekdays
        assert_eq!(history.len(), 22);
        assert_eq!(history[0].price, 100.0);
        assert!(history.iter().all(|p| p.date.weekday().num_days_from_monday() < 5));
        assert!(history.windows(2).all(|w| w[0].date < w[1].date));
        for w in history.windows(2) {
            let ratio = w[1].price / w[0].price;
            assert!((0.94..=1.06).contains(&ratio), "ratio {ratio}");
        }
    }

    #[test]
    fn quote_is_consistent_with_history() {
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let quote = generate(&mut rng, today(), "TSLA");
            let n = quote.history.len();

            assert_eq!(quote.company_name, "Tesla, Inc.");
            assert_eq!(quote.current_price, quote.history[n - 1].price);
            assert_eq!(quote.previous_close, quote.history[n - 2].price);
            assert_eq!(
                quote.price_change,
                round2(quote.current_price - quote.previous_close)
            );
            assert!(quote.day_range.low < quote.current_price);
            assert!(quote.day_range.high > quote.current_price);
            assert!(quote.week52_range.low <= quote.current_price);
            assert!(quote.week52_range.high >= quote.current_price);
            assert!((1_000_000_000..=2_000_000_000_000).contains(&quote.market_cap));
            assert!((10.0..40.0).contains(&quote.pe_ratio));
            assert!((0.0..=5.0).contains(&quote.dividend_yield));
        }
    }

    #[test]
    fn percent_uses_the_unrounded_change() {
        // 0.004 rounds to a zero change but is still 0.13 % of 3.00
        assert_eq!(daily_change(3.004, 3.0), (0.0, 0.13));
        assert_eq!(daily_change(95.0, 100.0), (-5.0, -5.0));
        assert_eq!(daily_change(5.0, 0.0), (5.0, 0.0));
    }

    #[test]
    fn unknown_symbol_gets_generic_company_name() {
        assert_eq!(company_name("XYZ"), "XYZ Corporation");
        assert_eq!(company_name("NVDA"), "NVIDIA Corporation");
    }
}
