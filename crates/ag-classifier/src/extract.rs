//! Parameter extractors: pull category-specific values out of the task text.
//!
//! Every extractor is total: when its patterns do not match it returns the
//! documented default for that category.

use crate::classifier::extract_flight_cities;
use crate::rules::CityPair;
use regex::Regex;
use serde::{Deserialize, Serialize};

const DEFAULT_ORIGIN: &str = "москва";
const DEFAULT_DESTINATION: &str = "пекин";
const DEFAULT_WEATHER_LOCATION: &str = "Москва";
const DEFAULT_STOCK_SYMBOL: &str = "AAPL";
const DEFAULT_TARGET_LANG: &str = "en";
const DEFAULT_NEWS_QUERY: &str = "общие";
const DEFAULT_DISH: &str = "блюдо";
const DEFAULT_MOVIE: &str = "фильм";
const DEFAULT_MUSIC: &str = "музыка";
const DEFAULT_SPORTS: &str = "спорт";

/// Locative (and nominative) city forms mapped to the display name.
const CITY_NAMES: &[(&str, &str)] = &[
    ("москва", "Москва"),
    ("москве", "Москва"),
    ("санкт-петербург", "Санкт-Петербург"),
    ("санкт-петербурге", "Санкт-Петербург"),
    ("петербурге", "Санкт-Петербург"),
    ("пекине", "Пекин"),
    ("шанхае", "Шанхай"),
    ("токио", "Токио"),
    ("нью-йорке", "Нью-Йорк"),
    ("лондоне", "Лондон"),
    ("париже", "Париж"),
    ("берлине", "Берлин"),
    ("стамбуле", "Стамбул"),
    ("дубае", "Дубай"),
    ("риме", "Рим"),
    ("мадриде", "Мадрид"),
    ("амстердаме", "Амстердам"),
    ("сеуле", "Сеул"),
    ("бангкоке", "Бангкок"),
    ("сингапуре", "Сингапур"),
    ("дели", "Дели"),
    ("тель-авиве", "Тель-Авив"),
    ("казани", "Казань"),
    ("новосибирске", "Новосибирск"),
    ("екатеринбурге", "Екатеринбург"),
    ("сочи", "Сочи"),
    ("new york", "New York"),
];

const LANGUAGES: &[(&str, &str)] = &[
    ("русский", "ru"),
    ("russian", "ru"),
    ("английский", "en"),
    ("english", "en"),
    ("французский", "fr"),
    ("french", "fr"),
    ("немецкий", "de"),
    ("german", "de"),
    ("испанский", "es"),
    ("spanish", "es"),
    ("итальянский", "it"),
    ("italian", "it"),
    ("китайский", "zh"),
    ("chinese", "zh"),
    ("японский", "ja"),
    ("japanese", "ja"),
];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TranslationRequest {
    pub text: String,
    pub source_lang: String,
    pub target_lang: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MusicKind {
    Artist,
    Album,
    Track,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SportsKind {
    Match,
    Standings,
    Schedule,
}

// ---- Flight ----

/// Origin and destination for a flight search, display-cased.
pub fn extract_flight_route(text: &str) -> CityPair {
    let (origin, destination) = match extract_flight_cities(text) {
        Some(pair) => (pair.origin, pair.destination),
        None => {
            let pattern = r"(?i)([а-яА-Яa-zA-Z\s-]+)\s+(?:в|to)\s+([а-яА-Яa-zA-Z\s-]+)";
            match Regex::new(pattern).ok().and_then(|re| re.captures(text)) {
                Some(c) => (c[1].trim().to_string(), c[2].trim().to_string()),
                None => (DEFAULT_ORIGIN.to_string(), DEFAULT_DESTINATION.to_string()),
            }
        }
    };

    CityPair {
        origin: title_case(&origin),
        destination: title_case(&destination),
    }
}

// ---- Weather ----

pub fn extract_weather_location(text: &str) -> String {
    let found = first_match(
        text,
        &[
            r"(?i)погода\s+в\s+([а-яА-Яa-zA-Z\s-]+)",
            r"(?i)прогноз\s+в\s+([а-яА-Яa-zA-Z\s-]+)",
            r"(?i)погода\s+([а-яА-Яa-zA-Z\s-]+)",
            r"(?i)weather\s+in\s+([a-zA-Z\s-]+)",
        ],
    );

    match found.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        Some(location) => normalize_city(location),
        None => DEFAULT_WEATHER_LOCATION.to_string(),
    }
}

/// Display name for a captured location. Known city forms are looked up
/// anywhere in the capture; otherwise the words after the last "в"/"in"
/// are kept with the first letter upper-cased.
fn normalize_city(raw: &str) -> String {
    let lower = raw.to_lowercase();
    let words: Vec<&str> = lower.split_whitespace().collect();
    let lookup = |key: &str| {
        CITY_NAMES
            .iter()
            .find(|(form, _)| *form == key)
            .map(|(_, name)| name.to_string())
    };

    if let Some(name) = lookup(&words.join(" ")) {
        return name;
    }
    let known = words
        .windows(2)
        .find_map(|pair| lookup(&pair.join(" ")))
        .or_else(|| words.iter().copied().find_map(|word| lookup(word)));
    if let Some(name) = known {
        return name;
    }

    let tail = raw
        .split_whitespace()
        .collect::<Vec<_>>()
        .rsplit(|w| w.eq_ignore_ascii_case("in") || w.to_lowercase() == "в")
        .next()
        .map(|rest| rest.join(" "))
        .filter(|rest| !rest.is_empty())
        .unwrap_or_else(|| raw.trim().to_string());
    capitalize_first(&tail)
}

// ---- Stock ----

pub fn extract_stock_symbol(text: &str) -> String {
    first_match(
        text,
        &[
            r"(?i)акции\s+([A-Z]+)",
            r"(?i)stock\s+([A-Z]+)",
            r"(?i)([A-Z]{1,5})\s+stock",
            r"(?i)([A-Z]{1,5})\s+акции",
        ],
    )
    .map(|s| s.to_uppercase())
    .unwrap_or_else(|| DEFAULT_STOCK_SYMBOL.to_string())
}

// ---- Translation ----

pub fn extract_translation(text: &str) -> TranslationRequest {
    let phrase = first_match(
        text,
        &[
            r#"(?i)перевести\s+["'](.+?)["']"#,
            r#"(?i)перевод\s+["'](.+?)["']"#,
            r#"(?i)translate\s+["'](.+?)["']"#,
            r"(?i)перевести\s+(.+?)\s+на",
        ],
    )
    .unwrap_or_else(|| remove_words(text, r"(?i)перевести|перевод|translate"));

    let target_lang = first_match(
        text,
        &[
            r"(?i)на\s+(русский|английский|французский|немецкий|испанский|итальянский|китайский|японский)",
            r"(?i)to\s+(russian|english|french|german|spanish|italian|chinese|japanese)",
        ],
    )
    .and_then(|name| {
        let name = name.to_lowercase();
        LANGUAGES
            .iter()
            .find(|(lang, _)| *lang == name)
            .map(|(_, code)| code.to_string())
    })
    .unwrap_or_else(|| DEFAULT_TARGET_LANG.to_string());

    let source_lang = if target_lang == "en" { "ru" } else { "en" };

    TranslationRequest {
        text: phrase,
        source_lang: source_lang.to_string(),
        target_lang,
    }
}

// ---- Calculation ----

pub fn extract_expression(text: &str) -> String {
    first_match(
        text,
        &[
            r"(?i)посчитай\s+(.+)",
            r"(?i)вычисли\s+(.+)",
            r"(?i)calculate\s+(.+)",
            r"(?i)сколько\s+будет\s+(.+)",
        ],
    )
    .unwrap_or_else(|| text.to_string())
}

// ---- News ----

pub fn extract_news_query(text: &str) -> String {
    non_empty_or(
        remove_words(text, r"(?i)новости|news|события|events"),
        DEFAULT_NEWS_QUERY,
    )
}

// ---- Recipe / movie ----

pub fn extract_dish(text: &str) -> String {
    first_match(
        text,
        &[
            r"(?i)рецепт\s+(.+)",
            r"(?i)как\s+приготовить\s+(.+)",
            r"(?i)recipe\s+for\s+(.+)",
        ],
    )
    .map(|s| non_empty_or(s, DEFAULT_DISH))
    .unwrap_or_else(|| DEFAULT_DISH.to_string())
}

pub fn extract_movie_title(text: &str) -> String {
    first_match(
        text,
        &[
            r"(?i)фильм\s+(.+)",
            r"(?i)movie\s+(.+)",
            r"(?i)информация\s+о\s+фильме\s+(.+)",
        ],
    )
    .map(|s| non_empty_or(s, DEFAULT_MOVIE))
    .unwrap_or_else(|| DEFAULT_MOVIE.to_string())
}

// ---- Music ----

pub fn extract_music_query(text: &str) -> (String, MusicKind) {
    let query = first_match(
        text,
        &[
            r"(?i)песня\s+(.+)",
            r"(?i)song\s+(.+)",
            r"(?i)исполнитель\s+(.+)",
            r"(?i)artist\s+(.+)",
            r"(?i)альбом\s+(.+)",
            r"(?i)album\s+(.+)",
        ],
    )
    .unwrap_or_else(|| remove_words(text, r"(?i)музыка|music"));

    let lower = text.to_lowercase();
    let kind = if lower.contains("исполнитель") || lower.contains("artist") {
        MusicKind::Artist
    } else if lower.contains("альбом") || lower.contains("album") {
        MusicKind::Album
    } else {
        MusicKind::Track
    };

    (non_empty_or(query, DEFAULT_MUSIC), kind)
}

// ---- Sports ----

pub fn extract_sports_query(text: &str) -> (String, SportsKind) {
    let query = first_match(
        text,
        &[
            r"(?i)матч\s+(.+)",
            r"(?i)match\s+(.+)",
            r"(?i)таблица\s+(.+)",
            r"(?i)standings\s+(.+)",
            r"(?i)расписание\s+(.+)",
            r"(?i)schedule\s+(.+)",
        ],
    )
    .unwrap_or_else(|| remove_words(text, r"(?i)спорт|sport"));

    let lower = text.to_lowercase();
    let kind = if lower.contains("таблица") || lower.contains("standings") {
        SportsKind::Standings
    } else if lower.contains("расписание") || lower.contains("schedule") {
        SportsKind::Schedule
    } else {
        SportsKind::Match
    };

    (non_empty_or(query, DEFAULT_SPORTS), kind)
}

// ---- Helpers ----

fn extract_pattern(text: &str, pattern: &str) -> Option<String> {
    Regex::new(pattern).ok()?.captures(text).map(|c| c[1].to_string())
}

fn first_match(text: &str, patterns: &[&str]) -> Option<String> {
    patterns.iter().find_map(|p| extract_pattern(text, p))
}

fn remove_words(text: &str, pattern: &str) -> String {
    match Regex::new(pattern) {
        Ok(re) => re.replace_all(text, "").trim().to_string(),
        Err(_) => text.trim().to_string(),
    }
}

fn non_empty_or(value: String, default: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Upper-case the first letter of every space- or hyphen-separated part.
fn capitalize_first(s: &str) -> String {
    let mut chars = s.trim().chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for ch in s.trim().chars() {
        if at_word_start {
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
        at_word_start = ch == ' ' || ch == '-';
    }
    out
}
