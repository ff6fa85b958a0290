//! Rule tables: keyword lists per category and the flight city-pair allow-list.
//!
//! `RULES` is scanned top to bottom and the first rule with a matching
//! keyword wins, so its order is part of the classifier's behavior.

use ag_core::category::TaskCategory;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy)]
pub struct ClassificationRule {
    pub category: TaskCategory,
    pub keywords: &'static [&'static str],
}

impl ClassificationRule {
    /// True if any keyword is a substring of the (already lower-cased) text.
    pub fn matches(&self, lower: &str) -> bool {
        contains_any(lower, self.keywords)
    }
}

/// Origin/destination pair of known city names.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CityPair {
    pub origin: String,
    pub destination: String,
}

pub(crate) fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| text.contains(kw))
}

/// Flight-domain keywords. Only consulted together with `CITY_PAIRS`.
pub const FLIGHT_KEYWORDS: &[&str] = &[
    "билет", "рейс", "полет", "авиа", "самолет", "flight", "ticket", "plane", "airport",
    "авиабилет", "перелет", "аэропорт", "вылет", "прилет", "бронирование",
];

/// Known (origin, destination) pairs, lower-case.
pub const CITY_PAIRS: &[(&str, &str)] = &[
    ("москва", "пекин"),
    ("москва", "шанхай"),
    ("москва", "токио"),
    ("москва", "нью-йорк"),
    ("москва", "лондон"),
    ("москва", "париж"),
    ("москва", "берлин"),
    ("санкт-петербург", "пекин"),
    ("санкт-петербург", "шанхай"),
    ("санкт-петербург", "токио"),
    ("москва", "стамбул"),
    ("москва", "дубай"),
    ("москва", "рим"),
    ("москва", "мадрид"),
    ("москва", "амстердам"),
    ("москва", "сеул"),
    ("москва", "бангкок"),
    ("москва", "сингапур"),
    ("москва", "дели"),
    ("москва", "тель-авив"),
];

/// Generic rules, evaluated after the flight special case.
pub const RULES: &[ClassificationRule] = &[
    ClassificationRule {
        category: TaskCategory::Weather,
        keywords: &[
            "погода", "температура", "осадки", "weather", "forecast", "temperature", "rain",
            "snow", "прогноз", "климат", "ветер", "облачность", "солнечно", "дождь", "снег",
        ],
    },
    ClassificationRule {
        category: TaskCategory::Translation,
        keywords: &[
            "перевод", "перевести", "translate", "translation", "переведи", "как будет",
            "как сказать", "как по-английски", "как по-русски", "как по-французски",
            "как по-немецки", "как по-испански", "как по-итальянски", "как по-китайски",
            "как по-японски",
        ],
    },
    ClassificationRule {
        category: TaskCategory::Calculation,
        keywords: &[
            "посчитай", "вычисли", "рассчитай", "calculate", "compute", "калькулятор", "сложи",
            "вычти", "умножь", "раздели", "корень", "степень", "процент", "сколько будет",
            "решить уравнение", "+", "-", "*", "/", "=", ">", "<", "≥", "≤", "≠", "±", "÷", "×",
        ],
    },
    ClassificationRule {
        category: TaskCategory::Coding,
        keywords: &[
            "код", "программа", "функция", "алгоритм", "code", "program", "function",
            "algorithm", "напиши код", "напиши программу", "напиши функцию", "разработай",
            "javascript", "python", "java", "c++", "c#", "ruby", "php", "swift", "kotlin", "go",
            "rust", "typescript",
        ],
    },
    ClassificationRule {
        category: TaskCategory::Summarization,
        keywords: &[
            "суммируй", "обобщи", "резюме", "краткое содержание", "summarize", "summary",
            "summarization", "сделай выжимку", "ключевые моменты", "основные идеи",
            "главные мысли", "тезисы",
        ],
    },
    ClassificationRule {
        category: TaskCategory::Research,
        keywords: &[
            "исследуй", "найди информацию", "изучи", "research", "find information",
            "investigate", "узнай", "поищи", "информация о", "данные о", "что известно о",
            "что такое",
        ],
    },
    ClassificationRule {
        category: TaskCategory::ContentCreation,
        keywords: &[
            "напиши", "создай", "сочини", "write", "create content", "compose", "draft",
            "статья", "эссе", "пост", "текст", "письмо", "сообщение", "история", "рассказ",
            "стихотворение", "поэма", "сценарий", "диалог", "описание", "инструкция",
        ],
    },
    ClassificationRule {
        category: TaskCategory::DataAnalysis,
        keywords: &[
            "анализ", "проанализируй", "analyze", "analysis", "данные", "статистика", "тренды",
            "паттерны", "корреляция", "регрессия", "кластеризация", "классификация",
            "прогнозирование",
        ],
    },
    ClassificationRule {
        category: TaskCategory::QuestionAnswering,
        keywords: &[
            "что", "кто", "где", "когда", "почему", "как", "сколько", "какой", "какая", "какое",
            "какие", "what", "who", "where", "when", "why", "how", "which", "whose", "whom",
            "объясни", "расскажи",
        ],
    },
    ClassificationRule {
        category: TaskCategory::Recommendation,
        keywords: &[
            "рекомендуй", "посоветуй", "предложи", "recommend", "suggest", "advise", "propose",
            "лучший", "лучшая", "лучшее", "лучшие", "топ", "рейтинг", "популярный",
            "популярная", "популярное", "популярные", "что посмотреть", "что почитать",
            "что послушать",
        ],
    },
    ClassificationRule {
        category: TaskCategory::StockPrice,
        keywords: &[
            "акции", "биржа", "котировки", "stock", "stocks", "share", "shares", "market",
            "exchange", "цена акций", "стоимость акций", "курс акций", "инвестиции",
            "инвестирование", "трейдинг", "nasdaq", "nyse", "мосбиржа", "ммвб", "ртс",
            "dow jones", "s&p 500", "ftse", "nikkei",
        ],
    },
    ClassificationRule {
        category: TaskCategory::News,
        keywords: &[
            "новости", "события", "news", "events", "headlines", "последние новости",
            "свежие новости", "что происходит", "что случилось", "что нового",
            "актуальные события", "текущие события",
        ],
    },
    ClassificationRule {
        category: TaskCategory::Definition,
        keywords: &[
            "определение", "дефиниция", "definition", "что значит", "что означает", "что такое",
            "значение", "смысл", "толкование", "объяснение", "термин", "понятие", "концепция",
        ],
    },
    ClassificationRule {
        category: TaskCategory::Comparison,
        keywords: &[
            "сравни", "сравнение", "compare", "comparison", "различия", "отличия", "сходства",
            "разница между", "отличие между", "чем отличается", "в чем разница", "против", "vs",
            "versus",
        ],
    },
    ClassificationRule {
        category: TaskCategory::Recipe,
        keywords: &[
            "рецепт", "recipe", "как приготовить", "как сделать", "приготовление", "кулинария",
            "блюдо", "еда", "пища", "готовка", "ингредиенты", "способ приготовления",
        ],
    },
    ClassificationRule {
        category: TaskCategory::MovieInfo,
        keywords: &[
            "фильм", "кино", "movie", "film", "cinema", "актер", "актриса", "режиссер", "сюжет",
            "жанр", "рейтинг", "отзывы", "критика", "премьера", "трейлер", "сериал", "шоу",
        ],
    },
    ClassificationRule {
        category: TaskCategory::MusicInfo,
        keywords: &[
            "музыка", "песня", "трек", "альбом", "music", "song", "track", "album",
            "исполнитель", "певец", "певица", "группа", "бэнд", "композитор", "жанр", "лирика",
            "текст песни",
        ],
    },
    ClassificationRule {
        category: TaskCategory::Sports,
        keywords: &[
            "спорт", "sport", "матч", "игра", "команда", "игрок", "счет", "результат", "турнир",
            "чемпионат", "футбол", "баскетбол", "хоккей", "теннис", "волейбол", "бейсбол",
            "гольф", "формула 1", "бокс", "мма", "ufc", "олимпиада", "олимпийские игры",
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_rule_is_lower_case() {
        for rule in RULES {
            for kw in rule.keywords {
                assert_eq!(*kw, kw.to_lowercase(), "{:?} keyword {kw}", rule.category);
            }
        }
    }

    #[test]
    fn general_and_flight_have_no_generic_rule() {
        assert!(RULES.iter().all(|r| r.category != TaskCategory::General));
        assert!(RULES.iter().all(|r| r.category != TaskCategory::FlightSearch));
        assert_eq!(RULES.len(), 18);
    }

    #[test]
    fn every_pair_starts_from_a_russian_hub() {
        assert_eq!(CITY_PAIRS.len(), 20);
        assert!(CITY_PAIRS
            .iter()
            .all(|(origin, _)| *origin == "москва" || *origin == "санкт-петербург"));
    }
}
