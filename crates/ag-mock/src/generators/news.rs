use ag_core::payload::{NewsArticle, NewsDigest};
use chrono::{Duration, NaiveDateTime, NaiveTime};
use rand::Rng;

use super::pick;

const SOURCES: &[&str] = &[
    "РИА Новости",
    "ТАСС",
    "Интерфакс",
    "Коммерсантъ",
    "Ведомости",
    "РБК",
    "Газета.ru",
    "Лента.ru",
    "Медуза",
    "BBC News Русская служба",
];

/// 5 to 10 articles from the last 7 days, newest first.
pub fn generate<R: Rng + ?Sized>(rng: &mut R, now: NaiveDateTime, query: &str) -> NewsDigest {
    let count = rng.gen_range(5..=10);
    let mut articles: Vec<NewsArticle> = (1..=count)
        .map(|n| NewsArticle {
            title: format!("Новость о \"{query}\" {n}"),
            description: format!(
                "Это подробное описание новости о \"{query}\". Здесь содержится основная \
                 информация о событии, которое произошло недавно и связано с запросом \
                 пользователя."
            ),
            source: pick(rng, SOURCES).to_string(),
            published_at: published_at(rng, now),
            url: format!("https://example.com/news/{n}"),
        })
        .collect();

    articles.sort_by(|a, b| b.published_at.cmp(&a.published_at));

    NewsDigest {
        query: query.to_string(),
        articles,
    }
}

/// A random minute within the past week, never later than `now`.
fn published_at<R: Rng + ?Sized>(rng: &mut R, now: NaiveDateTime) -> NaiveDateTime {
    let day = now.date() - Duration::days(rng.gen_range(0..7));
    let time = NaiveTime::from_hms_opt(rng.gen_range(0..24), rng.gen_range(0..60), 0)
        .unwrap_or(NaiveTime::MIN);
    day.and_time(time).min(now)
}
