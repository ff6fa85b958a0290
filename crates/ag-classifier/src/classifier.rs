//! Task Classifier: rule-based classification of task text into a category.

use crate::rules::{contains_any, CityPair, CITY_PAIRS, FLIGHT_KEYWORDS, RULES};
use ag_core::category::TaskCategory;

/// Classify task text. Never fails; text no rule recognises is `General`.
pub fn classify(text: &str) -> TaskCategory {
    let lower = text.to_lowercase();

    if is_flight_search_query(&lower) {
        tracing::debug!(category = "flight_search", "matched flight keyword and city pair");
        return TaskCategory::FlightSearch;
    }

    let category = RULES
        .iter()
        .find(|rule| rule.matches(&lower))
        .map(|rule| rule.category)
        .unwrap_or(TaskCategory::General);

    tracing::debug!(category = category.as_str(), "classified task");
    category
}

/// A flight query needs both a flight keyword and a known city pair.
pub fn is_flight_search_query(text: &str) -> bool {
    let lower = text.to_lowercase();

    if !contains_any(&lower, FLIGHT_KEYWORDS) {
        return false;
    }

    find_city_pair(&lower).is_some()
}

/// First allow-listed pair whose both names occur in the text.
pub fn extract_flight_cities(text: &str) -> Option<CityPair> {
    find_city_pair(&text.to_lowercase()).map(|(origin, destination)| CityPair {
        origin: origin.to_string(),
        destination: destination.to_string(),
    })
}

fn find_city_pair(lower: &str) -> Option<(&'static str, &'static str)> {
    CITY_PAIRS
        .iter()
        .copied()
        .find(|(origin, destination)| lower.contains(origin) && lower.contains(destination))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_is_general() {
        assert_eq!(classify(""), TaskCategory::General);
    }

    #[test]
    fn classify_weather() {
        assert_eq!(classify("погода в Москве"), TaskCategory::Weather);
        assert_eq!(classify("ПОГОДА В МОСКВЕ"), TaskCategory::Weather);
    }

    #[test]
    fn classify_flight_with_city_pair() {
        assert_eq!(classify("рейс москва пекин"), TaskCategory::FlightSearch);
        assert_eq!(
            classify("Найди авиабилет Санкт-Петербург Токио"),
            TaskCategory::FlightSearch
        );
    }

    #[test]
    fn flight_keyword_without_pair_falls_through() {
        assert_eq!(classify("I dreamed about a plane crash"), TaskCategory::General);
        assert_ne!(classify("купить билет в Сочи"), TaskCategory::FlightSearch);
        assert!(!is_flight_search_query("flight to the moon"));
    }

    #[test]
    fn city_pair_without_keyword_is_not_a_flight() {
        assert!(!is_flight_search_query("москва и пекин — столицы"));
    }

    #[test]
    fn flight_case_beats_every_rule() {
        assert_eq!(
            classify("погода и билет москва лондон"),
            TaskCategory::FlightSearch
        );
    }

    #[test]
    fn earlier_rule_wins() {
        // weather before question_answering
        assert_eq!(classify("какая погода завтра"), TaskCategory::Weather);
        // translation before question_answering
        assert_eq!(
            classify("как сказать спасибо по-английски"),
            TaskCategory::Translation
        );
        // calculation before question_answering
        assert_eq!(classify("сколько будет 2 * 3"), TaskCategory::Calculation);
        // coding before content_creation
        assert_eq!(
            classify("напиши функцию на python"),
            TaskCategory::Coding
        );
        // question_answering before stock_price
        assert_eq!(
            classify("what is the stock price of AAPL"),
            TaskCategory::QuestionAnswering
        );
        // news before sports
        assert_eq!(classify("новости спорта"), TaskCategory::News);
    }

    #[test]
    fn classify_symbols_as_calculation() {
        assert_eq!(classify("2+2"), TaskCategory::Calculation);
    }

    #[test]
    fn classify_recipe() {
        assert_eq!(classify("рецепт борща"), TaskCategory::Recipe);
    }

    #[test]
    fn extract_known_pair() {
        let pair = extract_flight_cities("Билеты Москва — Дубай на май").unwrap();
        assert_eq!(pair.origin, "москва");
        assert_eq!(pair.destination, "дубай");
        assert!(extract_flight_cities("билет в Казань").is_none());
    }
}
