//! Renderer registry: per-category text views of a task payload.

use ag_core::category::TaskCategory;
use ag_core::payload::{MusicInfo, SportsInfo, TaskPayload};
use ag_mock::format::{format_datetime, format_large_number, format_rub};
use std::collections::HashMap;

/// Renders a payload as display lines. Returns nothing for a payload of
/// another category.
pub type Renderer = fn(&TaskPayload) -> Vec<String>;

#[derive(Default)]
pub struct RendererRegistry {
    renderers: HashMap<TaskCategory, Renderer>,
}

impl RendererRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with a renderer for every payload-bearing category.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(TaskCategory::FlightSearch, render_flights);
        registry.register(TaskCategory::Weather, render_weather);
        registry.register(TaskCategory::StockPrice, render_stock);
        registry.register(TaskCategory::Translation, render_translation);
        registry.register(TaskCategory::Calculation, render_calculation);
        registry.register(TaskCategory::News, render_news);
        registry.register(TaskCategory::Recipe, render_recipe);
        registry.register(TaskCategory::MovieInfo, render_movie);
        registry.register(TaskCategory::MusicInfo, render_music);
        registry.register(TaskCategory::Sports, render_sports);
        registry
    }

    /// Register a renderer. Overwrites any existing one for the category.
    pub fn register(&mut self, category: TaskCategory, renderer: Renderer) {
        self.renderers.insert(category, renderer);
    }

    pub fn get(&self, category: TaskCategory) -> Option<Renderer> {
        self.renderers.get(&category).copied()
    }

    /// Lines for `payload`, or none when no renderer is registered.
    pub fn render(&self, payload: &TaskPayload) -> Vec<String> {
        self.get(payload.category())
            .map(|render| render(payload))
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.renderers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.renderers.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Renderers
// ---------------------------------------------------------------------------

fn render_flights(payload: &TaskPayload) -> Vec<String> {
    let TaskPayload::FlightSearch(flights) = payload else {
        return Vec::new();
    };
    flights
        .iter()
        .map(|f| {
            let stops = if f.stops == 0 {
                "прямой".to_string()
            } else {
                format!("пересадок: {}", f.stops)
            };
            format!(
                "{} {}  {} → {}  {}  {}  {}  {}  мест: {}",
                f.airline,
                f.flight_number,
                f.origin,
                f.destination,
                format_datetime(&f.departure),
                f.duration_label(),
                stops,
                format_rub(f.price),
                f.available
            )
        })
        .collect()
}

fn render_weather(payload: &TaskPayload) -> Vec<String> {
    let TaskPayload::Weather(report) = payload else {
        return Vec::new();
    };
    let c = &report.current;
    let mut lines = vec![format!(
        "{}: {}°C (ощущается как {}°C), {}, влажность {}%, ветер {} м/с",
        report.location, c.temp, c.feels_like, c.condition, c.humidity, c.wind_speed
    )];
    lines.extend(report.forecast.iter().map(|d| {
        format!(
            "  {}: {}..{}°C, {}",
            d.label, d.temp_min, d.temp_max, d.condition
        )
    }));
    lines
}

fn render_stock(payload: &TaskPayload) -> Vec<String> {
    let TaskPayload::StockPrice(q) = payload else {
        return Vec::new();
    };
    vec![
        format!("{} ({})", q.company_name, q.symbol),
        format!(
            "  ${:.2}  {:+.2} ({:+.2}%)",
            q.current_price, q.price_change, q.price_change_percent
        ),
        format!(
            "  открытие ${:.2}, пред. закрытие ${:.2}",
            q.open, q.previous_close
        ),
        format!(
            "  день ${:.2} - {:.2}, 52 недели ${:.2} - {:.2}",
            q.day_range.low, q.day_range.high, q.week52_range.low, q.week52_range.high
        ),
        format!(
            "  капитализация {}, объем {}, P/E {:.0}, дивиденды {:.2}%",
            format_large_number(q.market_cap as f64),
            format_large_number(q.volume as f64),
            q.pe_ratio,
            q.dividend_yield
        ),
    ]
}

fn render_translation(payload: &TaskPayload) -> Vec<String> {
    let TaskPayload::Translation(t) = payload else {
        return Vec::new();
    };
    let mut lines = vec![format!(
        "{} → {}: {}",
        t.source_lang, t.target_lang, t.translated_text
    )];
    lines.extend(t.alternatives.iter().map(|a| format!("  {a}")));
    lines
}

fn render_calculation(payload: &TaskPayload) -> Vec<String> {
    let TaskPayload::Calculation(c) = payload else {
        return Vec::new();
    };
    c.steps.clone()
}

fn render_news(payload: &TaskPayload) -> Vec<String> {
    let TaskPayload::News(digest) = payload else {
        return Vec::new();
    };
    digest
        .articles
        .iter()
        .map(|a| {
            format!(
                "{}  {} ({})",
                format_datetime(&a.published_at),
                a.title,
                a.source
            )
        })
        .collect()
}

fn render_recipe(payload: &TaskPayload) -> Vec<String> {
    let TaskPayload::Recipe(r) = payload else {
        return Vec::new();
    };
    let mut lines = vec![format!(
        "{}: {} мин, порций {}, {}",
        r.name, r.cook_minutes, r.servings, r.difficulty
    )];
    lines.extend(r.ingredients.iter().map(|i| format!("  - {i}")));
    lines.extend(
        r.instructions
            .iter()
            .enumerate()
            .map(|(n, step)| format!("  {}. {step}", n + 1)),
    );
    lines
}

fn render_movie(payload: &TaskPayload) -> Vec<String> {
    let TaskPayload::MovieInfo(m) = payload else {
        return Vec::new();
    };
    vec![
        format!(
            "{} ({}), {} мин, рейтинг {:.1}",
            m.title, m.year, m.runtime_minutes, m.rating
        ),
        format!("  режиссер: {}", m.director),
        format!("  жанр: {}", m.genres.join(", ")),
        format!("  в ролях: {}", m.cast.join(", ")),
    ]
}

fn render_music(payload: &TaskPayload) -> Vec<String> {
    let TaskPayload::MusicInfo(info) = payload else {
        return Vec::new();
    };
    match info {
        MusicInfo::Artist {
            name,
            genres,
            popular_tracks,
            ..
        } => {
            let mut lines = vec![format!("{name} ({})", genres.join(", "))];
            lines.extend(
                popular_tracks
                    .iter()
                    .map(|t| format!("  {} — {} ({})", t.name, t.album, t.year)),
            );
            lines
        }
        MusicInfo::Album {
            name,
            artist,
            year,
            tracks,
            ..
        } => {
            let mut lines = vec![format!("{name} — {artist} ({year})")];
            lines.extend(tracks.iter().map(|t| format!("  {} {}", t.name, t.duration)));
            lines
        }
        MusicInfo::Track {
            name,
            artist,
            album,
            year,
            ..
        } => vec![format!("{name} — {artist}, «{album}» ({year})")],
    }
}

fn render_sports(payload: &TaskPayload) -> Vec<String> {
    let TaskPayload::Sports(info) = payload else {
        return Vec::new();
    };
    match info {
        SportsInfo::Match {
            title,
            team1,
            team2,
            score1,
            score2,
            status,
            events,
            ..
        } => {
            let mut lines = vec![
                title.clone(),
                format!("  {team1} {score1}:{score2} {team2} ({status})"),
            ];
            lines.extend(
                events
                    .iter()
                    .map(|e| format!("  {}' {}", e.minute, e.description)),
            );
            lines
        }
        SportsInfo::Standings { title, table } => {
            let mut lines = vec![title.clone()];
            lines.extend(table.iter().map(|row| {
                format!(
                    "  {:>2}. {:<10} {:>2} {:>2} {:>2} {:>2}  {}:{}  {:>3}",
                    row.position,
                    row.name,
                    row.played,
                    row.won,
                    row.drawn,
                    row.lost,
                    row.goals_for,
                    row.goals_against,
                    row.points
                )
            }));
            lines
        }
        SportsInfo::Schedule { title, matches } => {
            let mut lines = vec![title.clone()];
            lines.extend(matches.iter().map(|m| {
                format!(
                    "  {} {}  {} - {}  ({})",
                    m.date.format("%d.%m.%Y"),
                    m.time,
                    m.team1,
                    m.team2,
                    m.venue
                )
            }));
            lines
        }
    }
}
