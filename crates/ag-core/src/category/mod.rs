//! Task categories: the closed set of intents a task can be classified into.

use crate::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum TaskCategory {
    General,
    FlightSearch,
    Weather,
    Translation,
    Calculation,
    Coding,
    Summarization,
    Research,
    ContentCreation,
    DataAnalysis,
    QuestionAnswering,
    Recommendation,
    StockPrice,
    News,
    Definition,
    Comparison,
    Recipe,
    MovieInfo,
    MusicInfo,
    Sports,
}

impl TaskCategory {
    /// Every category, in declaration order.
    pub const ALL: [TaskCategory; 20] = [
        TaskCategory::General,
        TaskCategory::FlightSearch,
        TaskCategory::Weather,
        TaskCategory::Translation,
        TaskCategory::Calculation,
        TaskCategory::Coding,
        TaskCategory::Summarization,
        TaskCategory::Research,
        TaskCategory::ContentCreation,
        TaskCategory::DataAnalysis,
        TaskCategory::QuestionAnswering,
        TaskCategory::Recommendation,
        TaskCategory::StockPrice,
        TaskCategory::News,
        TaskCategory::Definition,
        TaskCategory::Comparison,
        TaskCategory::Recipe,
        TaskCategory::MovieInfo,
        TaskCategory::MusicInfo,
        TaskCategory::Sports,
    ];

    /// Wire name, identical to the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskCategory::General => "general",
            TaskCategory::FlightSearch => "flight_search",
            TaskCategory::Weather => "weather",
            TaskCategory::Translation => "translation",
            TaskCategory::Calculation => "calculation",
            TaskCategory::Coding => "coding",
            TaskCategory::Summarization => "summarization",
            TaskCategory::Research => "research",
            TaskCategory::ContentCreation => "content_creation",
            TaskCategory::DataAnalysis => "data_analysis",
            TaskCategory::QuestionAnswering => "question_answering",
            TaskCategory::Recommendation => "recommendation",
            TaskCategory::StockPrice => "stock_price",
            TaskCategory::News => "news",
            TaskCategory::Definition => "definition",
            TaskCategory::Comparison => "comparison",
            TaskCategory::Recipe => "recipe",
            TaskCategory::MovieInfo => "movie_info",
            TaskCategory::MusicInfo => "music_info",
            TaskCategory::Sports => "sports",
        }
    }

    /// Human-readable description shown next to a result.
    pub fn label(&self) -> &'static str {
        match self {
            TaskCategory::General => "Общая задача",
            TaskCategory::FlightSearch => "Поиск авиабилетов",
            TaskCategory::Weather => "Прогноз погоды",
            TaskCategory::Translation => "Перевод текста",
            TaskCategory::Calculation => "Математические вычисления",
            TaskCategory::Coding => "Программирование",
            TaskCategory::Summarization => "Обобщение информации",
            TaskCategory::Research => "Исследование",
            TaskCategory::ContentCreation => "Создание контента",
            TaskCategory::DataAnalysis => "Анализ данных",
            TaskCategory::QuestionAnswering => "Ответы на вопросы",
            TaskCategory::Recommendation => "Рекомендации",
            TaskCategory::StockPrice => "Информация о акциях",
            TaskCategory::News => "Новости",
            TaskCategory::Definition => "Определение термина",
            TaskCategory::Comparison => "Сравнение",
            TaskCategory::Recipe => "Кулинарный рецепт",
            TaskCategory::MovieInfo => "Информация о фильмах",
            TaskCategory::MusicInfo => "Информация о музыке",
            TaskCategory::Sports => "Спортивная информация",
        }
    }

    /// Whether a structured payload generator exists for this category.
    pub fn has_payload(&self) -> bool {
        matches!(
            self,
            TaskCategory::FlightSearch
                | TaskCategory::Weather
                | TaskCategory::StockPrice
                | TaskCategory::Translation
                | TaskCategory::Calculation
                | TaskCategory::News
                | TaskCategory::Recipe
                | TaskCategory::MovieInfo
                | TaskCategory::MusicInfo
                | TaskCategory::Sports
        )
    }

    /// Progress message for a task of this category at `progress` percent.
    pub fn status_message(&self, progress: u8) -> &'static str {
        use TaskCategory::*;

        if progress < 30 {
            match self {
                FlightSearch => "Поиск доступных рейсов...",
                Weather => "Получение метеорологических данных...",
                Translation => "Анализ исходного текста...",
                Calculation => "Подготовка вычислений...",
                Coding => "Анализ требований к коду...",
                StockPrice => "Получение данных с биржи...",
                _ => "Анализ запроса...",
            }
        } else if progress < 60 {
            match self {
                FlightSearch => "Сравнение вариантов перелета...",
                Weather => "Анализ погодных условий...",
                Translation => "Выполнение перевода...",
                Calculation => "Выполнение вычислений...",
                Coding => "Написание кода...",
                Summarization => "Выделение ключевых моментов...",
                Research => "Сбор информации из источников...",
                StockPrice => "Анализ рыночных трендов...",
                _ => "Обработка компонентов задачи...",
            }
        } else if progress < 90 {
            match self {
                FlightSearch => "Подготовка результатов поиска...",
                Weather => "Формирование прогноза...",
                Translation => "Проверка качества перевода...",
                Calculation => "Проверка результатов...",
                Coding => "Тестирование кода...",
                ContentCreation => "Редактирование контента...",
                DataAnalysis => "Формирование выводов...",
                StockPrice => "Подготовка финансового отчета...",
                _ => "Генерация ответа...",
            }
        } else {
            "Завершение задачи..."
        }
    }
}

impl fmt::Display for TaskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskCategory {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        TaskCategory::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| CoreError::UnknownCategory(s.to_string()))
    }
}
