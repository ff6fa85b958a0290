//! ag-classifier: Task text → TaskCategory classifier
//!
//! Pipeline: flight city-pair check → ordered keyword rules → `general`.
//! Extractors pull category-specific parameters out of the same text and
//! fall back to fixed defaults when their patterns do not match.

pub mod classifier;
pub mod extract;
pub mod rules;

pub use classifier::{classify, extract_flight_cities, is_flight_search_query};
pub use extract::{
    extract_dish, extract_expression, extract_flight_route, extract_movie_title,
    extract_music_query, extract_news_query, extract_sports_query, extract_stock_symbol,
    extract_translation, extract_weather_location, MusicKind, SportsKind, TranslationRequest,
};
pub use rules::{CityPair, ClassificationRule};
