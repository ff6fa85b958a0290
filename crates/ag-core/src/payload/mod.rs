//! Payload types: the structured data attached to a task result, one shape per category.

use crate::category::TaskCategory;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// TaskPayload: sum type over every generating category
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "category", content = "data", rename_all = "snake_case")]
pub enum TaskPayload {
    FlightSearch(Vec<Flight>),
    Weather(WeatherReport),
    StockPrice(StockQuote),
    Translation(Translation),
    Calculation(Calculation),
    News(NewsDigest),
    Recipe(Recipe),
    MovieInfo(MovieInfo),
    MusicInfo(MusicInfo),
    Sports(SportsInfo),
}

impl TaskPayload {
    /// The category that owns this payload shape.
    pub fn category(&self) -> TaskCategory {
        match self {
            TaskPayload::FlightSearch(_) => TaskCategory::FlightSearch,
            TaskPayload::Weather(_) => TaskCategory::Weather,
            TaskPayload::StockPrice(_) => TaskCategory::StockPrice,
            TaskPayload::Translation(_) => TaskCategory::Translation,
            TaskPayload::Calculation(_) => TaskCategory::Calculation,
            TaskPayload::News(_) => TaskCategory::News,
            TaskPayload::Recipe(_) => TaskCategory::Recipe,
            TaskPayload::MovieInfo(_) => TaskCategory::MovieInfo,
            TaskPayload::MusicInfo(_) => TaskCategory::MusicInfo,
            TaskPayload::Sports(_) => TaskCategory::Sports,
        }
    }

    /// True when the payload carries no entries worth summarising.
    pub fn is_empty(&self) -> bool {
        match self {
            TaskPayload::FlightSearch(flights) => flights.is_empty(),
            TaskPayload::News(digest) => digest.articles.is_empty(),
            TaskPayload::Weather(report) => report.forecast.is_empty(),
            _ => false,
        }
    }
}

// ---------------------------------------------------------------------------
// Flight search
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Flight {
    pub airline: String,
    pub flight_number: String,
    pub origin: String,
    pub destination: String,
    pub departure: NaiveDateTime,
    /// Always `departure + duration_minutes`.
    pub arrival: NaiveDateTime,
    pub duration_minutes: u32,
    /// 0 (direct) or 1.
    pub stops: u8,
    /// Ticket price in roubles.
    pub price: u32,
    pub available: u32,
}

impl Flight {
    /// Duration in the "7ч 25м" form.
    pub fn duration_label(&self) -> String {
        format!("{}ч {}м", self.duration_minutes / 60, self.duration_minutes % 60)
    }
}

// ---------------------------------------------------------------------------
// Weather
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherReport {
    pub location: String,
    pub current: CurrentConditions,
    pub forecast: Vec<DailyForecast>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CurrentConditions {
    pub temp: i32,
    pub condition: String,
    pub humidity: u8,
    pub wind_speed: u8,
    pub feels_like: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyForecast {
    pub date: NaiveDate,
    /// Localised label, e.g. "пятница, 17 октября".
    pub label: String,
    pub temp_min: i32,
    pub temp_max: i32,
    pub condition: String,
    pub humidity: u8,
    pub wind_speed: u8,
}

// ---------------------------------------------------------------------------
// Stock quote
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StockQuote {
    pub symbol: String,
    pub company_name: String,
    pub current_price: f64,
    pub price_change: f64,
    pub price_change_percent: f64,
    pub previous_close: f64,
    pub open: f64,
    pub day_range: PriceRange,
    pub week52_range: PriceRange,
    pub market_cap: u64,
    pub volume: u64,
    pub pe_ratio: f64,
    /// Percent.
    pub dividend_yield: f64,
    pub history: Vec<PricePoint>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PriceRange {
    pub low: f64,
    pub high: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub price: f64,
}

// ---------------------------------------------------------------------------
// Translation
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Translation {
    pub original_text: String,
    pub translated_text: String,
    /// ISO 639-1 code.
    pub source_lang: String,
    /// ISO 639-1 code.
    pub target_lang: String,
    #[serde(default)]
    pub alternatives: Vec<String>,
}

// ---------------------------------------------------------------------------
// Calculation
// ---------------------------------------------------------------------------

/// Outcome of evaluating an arithmetic expression. Exactly one of
/// `result` and `error` is set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Calculation {
    pub expression: String,
    pub sanitized: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub steps: Vec<String>,
}

// ---------------------------------------------------------------------------
// News
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewsDigest {
    pub query: String,
    /// Newest first.
    pub articles: Vec<NewsArticle>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewsArticle {
    pub title: String,
    pub description: String,
    pub source: String,
    pub published_at: NaiveDateTime,
    pub url: String,
}

// ---------------------------------------------------------------------------
// Recipe
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Recipe {
    pub name: String,
    pub description: String,
    pub cook_minutes: u32,
    pub servings: u32,
    pub difficulty: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub tips: Vec<String>,
}

// ---------------------------------------------------------------------------
// Movie
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieInfo {
    pub title: String,
    pub year: u16,
    pub director: String,
    pub genres: Vec<String>,
    /// Out of 10, one decimal.
    pub rating: f32,
    pub runtime_minutes: u32,
    pub plot: String,
    pub cast: Vec<String>,
    pub reviews: Vec<Review>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Review {
    pub text: String,
    pub author: String,
    pub source: String,
}

// ---------------------------------------------------------------------------
// Music
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MusicInfo {
    Artist {
        name: String,
        genres: Vec<String>,
        bio: String,
        popular_tracks: Vec<PopularTrack>,
    },
    Album {
        name: String,
        artist: String,
        year: u16,
        genre: String,
        description: String,
        tracks: Vec<AlbumTrack>,
    },
    Track {
        name: String,
        artist: String,
        album: String,
        year: u16,
        genre: String,
        description: String,
        lyrics: String,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PopularTrack {
    pub name: String,
    pub album: String,
    pub year: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AlbumTrack {
    pub name: String,
    /// "m:ss".
    pub duration: String,
}

// ---------------------------------------------------------------------------
// Sports
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SportsInfo {
    Match {
        title: String,
        team1: String,
        team2: String,
        score1: u8,
        score2: u8,
        status: String,
        league: String,
        /// Ordered by minute.
        events: Vec<MatchEvent>,
    },
    Standings {
        title: String,
        table: Vec<StandingRow>,
    },
    Schedule {
        title: String,
        matches: Vec<ScheduledMatch>,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchEvent {
    pub minute: u8,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StandingRow {
    pub position: u8,
    pub name: String,
    pub played: u8,
    pub won: u8,
    pub drawn: u8,
    pub lost: u8,
    pub goals_for: u16,
    pub goals_against: u16,
    pub points: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScheduledMatch {
    pub date: NaiveDate,
    /// "HH:MM".
    pub time: String,
    pub team1: String,
    pub team2: String,
    pub league: String,
    pub venue: String,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_flight() -> Flight {
        let departure = NaiveDate::from_ymd_opt(2026, 10, 20)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();
        Flight {
            airline: "S7 Airlines".into(),
            flight_number: "S7512".into(),
            origin: "Москва".into(),
            destination: "Пекин".into(),
            departure,
            arrival: departure + chrono::Duration::minutes(445),
            duration_minutes: 445,
            stops: 0,
            price: 41_200,
            available: 12,
        }
    }

    #[test]
    fn payload_is_tagged_by_category() {
        let payload = TaskPayload::FlightSearch(vec![sample_flight()]);
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["category"], "flight_search");
        assert_eq!(json["data"][0]["flight_number"], "S7512");

        let back: TaskPayload = serde_json::from_value(json).unwrap();
        assert_eq!(back.category(), TaskCategory::FlightSearch);
    }

    #[test]
    fn duration_label_splits_hours_and_minutes() {
        assert_eq!(sample_flight().duration_label(), "7ч 25м");
    }

    #[test]
    fn empty_flight_list_is_empty() {
        assert!(TaskPayload::FlightSearch(vec![]).is_empty());
        assert!(!TaskPayload::FlightSearch(vec![sample_flight()]).is_empty());
    }

    #[test]
    fn music_variants_carry_type_tag() {
        let info = MusicInfo::Album {
            name: "Night Drive".into(),
            artist: "Исполнитель".into(),
            year: 2019,
            genre: "Джаз".into(),
            description: String::new(),
            tracks: vec![],
        };
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["type"], "album");
    }

    #[test]
    fn calculation_omits_absent_fields() {
        let calc = Calculation {
            expression: "2+2".into(),
            sanitized: "2+2".into(),
            result: Some(4.0),
            error: None,
            steps: vec![],
        };
        let json = serde_json::to_value(&calc).unwrap();
        assert!(json.get("error").is_none());
    }
}
