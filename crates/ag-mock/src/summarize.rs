//! Response summarizer: one Russian sentence group per category.
//!
//! Data categories describe their payload and fall back to a fixed
//! "not found" sentence when it is missing, empty or of another category.
//! Generic categories end with a clause that depends on the execution mode.

use ag_core::category::TaskCategory;
use ag_core::payload::{
    Calculation, Flight, MovieInfo, MusicInfo, NewsDigest, Recipe, SportsInfo, StockQuote,
    TaskPayload, Translation, WeatherReport,
};
use ag_core::task::TaskMode;
use regex::Regex;

use crate::format::{
    format_datetime, format_large_number, format_number, format_rub, truncate_chars,
};

const EXCERPT_CHARS: usize = 100;

const NO_FLIGHTS: &str = "К сожалению, не удалось найти рейсы по указанному маршруту. \
                          Попробуйте изменить даты или направление.";

/// Build the response text for a finished task. Never empty.
pub fn summarize(
    text: &str,
    mode: TaskMode,
    category: TaskCategory,
    payload: Option<&TaskPayload>,
) -> String {
    let payload = payload.filter(|p| p.category() == category && !p.is_empty());

    match (category, payload) {
        (TaskCategory::FlightSearch, Some(TaskPayload::FlightSearch(f))) => flights(f),
        (TaskCategory::FlightSearch, _) => NO_FLIGHTS.to_string(),

        (TaskCategory::Weather, Some(TaskPayload::Weather(w))) => weather(w),
        (TaskCategory::Weather, _) => {
            "К сожалению, не удалось получить данные о погоде для указанного местоположения."
                .to_string()
        }

        (TaskCategory::StockPrice, Some(TaskPayload::StockPrice(s))) => stock(s),
        (TaskCategory::StockPrice, _) => {
            "К сожалению, не удалось получить данные о котировках для указанной компании."
                .to_string()
        }

        (TaskCategory::Translation, Some(TaskPayload::Translation(t))) => translation(t),
        (TaskCategory::Translation, _) => {
            "К сожалению, не удалось выполнить перевод для указанного текста.".to_string()
        }

        (TaskCategory::Calculation, Some(TaskPayload::Calculation(c))) => calculation(c),
        (TaskCategory::Calculation, _) => {
            "К сожалению, не удалось выполнить вычисление для указанного выражения.".to_string()
        }

        (TaskCategory::News, Some(TaskPayload::News(n))) => news(n),
        (TaskCategory::News, _) => {
            "К сожалению, не удалось найти новости по вашему запросу.".to_string()
        }

        (TaskCategory::Recipe, Some(TaskPayload::Recipe(r))) => recipe(r),
        (TaskCategory::Recipe, _) => {
            "К сожалению, не удалось найти рецепт по вашему запросу.".to_string()
        }

        (TaskCategory::MovieInfo, Some(TaskPayload::MovieInfo(m))) => movie(m),
        (TaskCategory::MovieInfo, _) => {
            "К сожалению, не удалось найти информацию о запрошенном фильме.".to_string()
        }

        (TaskCategory::MusicInfo, Some(TaskPayload::MusicInfo(m))) => music(m),
        (TaskCategory::MusicInfo, _) => {
            "К сожалению, не удалось найти информацию о запрошенной музыке.".to_string()
        }

        (TaskCategory::Sports, Some(TaskPayload::Sports(s))) => sports(s),
        (TaskCategory::Sports, _) => {
            "К сожалению, не удалось найти спортивную информацию по вашему запросу.".to_string()
        }

        (TaskCategory::General, _) => format!(
            "Задача выполнена успешно. Я обработал ваш запрос: \"{text}\" используя режим \
             {mode}. Выполнение задействовало продвинутые возможности фреймворка агентов для \
             достижения оптимальных результатов. Все подзадачи были выполнены с высокой \
             точностью и эффективностью."
        ),

        (TaskCategory::Summarization, _) => with_closing(
            mode,
            "Я проанализировал контент и подготовил подробное резюме. Ключевые моменты \
             организованы в логическую структуру с выделением основных идей.",
            "Несколько специализированных агентов сотрудничали для обеспечения точности и \
             полноты.",
            "Анализ был выполнен с вниманием к деталям и контексту.",
        ),
        (TaskCategory::Research, _) => with_closing(
            mode,
            "Исследование завершено. Я собрал информацию из нескольких надежных источников, \
             перепроверил данные и составил подробный отчет.",
            "Исследовательская группа использовала специализированных агентов для различных \
             информационных доменов.",
            "Исследование проводилось систематически с тщательной проверкой источников.",
        ),
        (TaskCategory::ContentCreation, _) => with_closing(
            mode,
            "Создание контента завершено. Я разработал запрошенный контент, следуя лучшим \
             практикам структуры, ясности и вовлеченности. Стиль письма адаптирован к \
             соответствующей аудитории и цели.",
            "Несколько специализированных агентов внесли свой вклад в различные аспекты \
             процесса создания контента.",
            "Контент был создан с особым вниманием к качеству и согласованности.",
        ),
        (TaskCategory::DataAnalysis, _) => with_closing(
            mode,
            "Анализ завершен. Я тщательно изучил данные и выявил ключевые закономерности, \
             тенденции и выводы. Анализ включает как количественные показатели, так и \
             качественные наблюдения.",
            "Несколько специализированных агентов предоставили различные аналитические \
             перспективы.",
            "Анализ проводился с использованием комплексных методологий.",
        ),
        (TaskCategory::Coding, _) => with_closing(
            mode,
            "Задача разработки завершена. Код написан в соответствии с лучшими практиками, с \
             чистой архитектурой, соответствующими комментариями и обработкой ошибок.",
            "Несколько специализированных агентов занимались различными аспектами процесса \
             разработки.",
            "Разработка была завершена с вниманием к качеству и поддерживаемости.",
        ),
        (TaskCategory::QuestionAnswering, _) => with_closing(
            mode,
            &format!(
                "На основе доступной информации, ответ на ваш вопрос: \"{text}\" следующий: \
                 [Детальный ответ на вопрос пользователя с учетом контекста и доступных данных]."
            ),
            "Для формирования полного ответа были задействованы агенты с различными областями \
             знаний.",
            "Ответ сформирован на основе анализа релевантной информации.",
        ),
        (TaskCategory::Recommendation, _) => with_closing(
            mode,
            "На основе вашего запроса, вот мои рекомендации: [Список персонализированных \
             рекомендаций с обоснованием каждого выбора]. Эти рекомендации основаны на анализе \
             популярности, отзывов и соответствия вашим критериям.",
            "Различные агенты проанализировали разные аспекты для формирования оптимальных \
             рекомендаций.",
            "Рекомендации сформированы с учетом множества факторов для наилучшего соответствия \
             вашим потребностям.",
        ),
        (TaskCategory::Definition, _) => with_closing(
            mode,
            &format!(
                "Определение термина \"{}\": [Подробное определение с этимологией, контекстом \
                 использования и примерами].",
                definition_term(text)
            ),
            "Определение составлено с учетом различных источников и областей применения \
             термина.",
            "Определение основано на авторитетных источниках и включает все ключевые аспекты \
             понятия.",
        ),
        (TaskCategory::Comparison, _) => with_closing(
            mode,
            "Сравнительный анализ по вашему запросу: [Детальное сравнение с таблицей ключевых \
             параметров, преимуществ и недостатков каждого варианта]. Анализ учитывает \
             объективные характеристики и субъективные оценки пользователей.",
            "Различные аспекты сравнения были проанализированы специализированными агентами.",
            "Сравнение проведено по комплексной методике для обеспечения объективности \
             результатов.",
        ),
    }
}

// ---------------------------------------------------------------------------
// Data categories
// ---------------------------------------------------------------------------

fn flights(flights: &[Flight]) -> String {
    let (Some(cheapest), Some(fastest)) = (
        flights.iter().min_by_key(|f| f.price),
        flights.iter().min_by_key(|f| f.duration_minutes),
    ) else {
        return NO_FLIGHTS.to_string();
    };

    format!(
        "Найдено {} рейсов по маршруту {} - {}. Самый дешевый рейс: {} {} за {}, вылет {}. \
         Самый быстрый рейс: {} {}, длительность {}.",
        flights.len(),
        cheapest.origin,
        cheapest.destination,
        cheapest.airline,
        cheapest.flight_number,
        format_rub(cheapest.price),
        format_datetime(&cheapest.departure),
        fastest.airline,
        fastest.flight_number,
        fastest.duration_label(),
    )
}

fn weather(report: &WeatherReport) -> String {
    let c = &report.current;
    let mut out = format!(
        "Погода в {}: сейчас {}°C, {}. Ощущается как {}°C. Влажность: {}%, ветер: {} м/с.",
        report.location,
        c.temp,
        c.condition.to_lowercase(),
        c.feels_like,
        c.humidity,
        c.wind_speed,
    );
    if let Some(next) = report.forecast.get(1) {
        out.push_str(&format!(
            " Прогноз на ближайшие дни: {} - от {}°C до {}°C, {}.",
            next.label,
            next.temp_min,
            next.temp_max,
            next.condition.to_lowercase(),
        ));
    }
    out
}

fn stock(q: &StockQuote) -> String {
    let direction = if q.price_change >= 0.0 { "выросли" } else { "упали" };
    format!(
        "Акции {} ({}) сейчас торгуются по цене ${:.2}. За последний торговый день они {} на \
         {:.2}$ ({:.2}%). Рыночная капитализация компании составляет {}. 52-недельный \
         диапазон: ${:.2} - {:.2}.",
        q.company_name,
        q.symbol,
        q.current_price,
        direction,
        q.price_change.abs(),
        q.price_change_percent.abs(),
        format_large_number(q.market_cap as f64),
        q.week52_range.low,
        q.week52_range.high,
    )
}

fn translation(t: &Translation) -> String {
    format!(
        "Перевод текста \"{}\" с {} на {}: \"{}\"",
        t.original_text, t.source_lang, t.target_lang, t.translated_text
    )
}

fn calculation(c: &Calculation) -> String {
    let outcome = match (c.result, &c.error) {
        (Some(value), _) => format_number(value),
        (None, Some(err)) => format!("Ошибка вычисления ({err})"),
        (None, None) => "Ошибка вычисления".to_string(),
    };
    format!("Результат вычисления выражения \"{}\": {outcome}", c.expression)
}

fn news(digest: &NewsDigest) -> String {
    let headlines = digest
        .articles
        .iter()
        .take(2)
        .map(|a| format!("{} ({})", a.title, a.source))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "Последние новости по запросу \"{}\": {headlines}. Всего найдено {} новостей.",
        digest.query,
        digest.articles.len()
    )
}

fn recipe(r: &Recipe) -> String {
    format!(
        "Рецепт \"{}\": {} Время приготовления: {} минут. Основные ингредиенты: {}. Рецепт \
         состоит из {} шагов.",
        r.name,
        r.description,
        r.cook_minutes,
        r.ingredients
            .iter()
            .take(3)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", "),
        r.instructions.len()
    )
}

fn movie(m: &MovieInfo) -> String {
    format!(
        "Фильм \"{}\" ({}): режиссер - {}, жанр - {}, рейтинг - {:.1}/10. В главных ролях: {}. \
         Краткое описание: {}...",
        m.title,
        m.year,
        m.director,
        m.genres.join(", "),
        m.rating,
        m.cast.iter().take(3).map(String::as_str).collect::<Vec<_>>().join(", "),
        truncate_chars(&m.plot, EXCERPT_CHARS),
    )
}

fn music(info: &MusicInfo) -> String {
    match info {
        MusicInfo::Artist {
            name,
            genres,
            bio,
            popular_tracks,
        } => format!(
            "Исполнитель \"{name}\": жанры - {}. {}... Популярные треки: {}.",
            genres.join(", "),
            truncate_chars(bio, EXCERPT_CHARS),
            popular_tracks
                .iter()
                .map(|t| t.name.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        ),
        MusicInfo::Album {
            name,
            artist,
            year,
            genre,
            description,
            tracks,
        } => format!(
            "Альбом \"{name}\" исполнителя {artist} ({year}): жанр - {genre}, содержит {} \
             треков. {}...",
            tracks.len(),
            truncate_chars(description, EXCERPT_CHARS),
        ),
        MusicInfo::Track {
            name,
            artist,
            album,
            year,
            genre,
            description,
            ..
        } => format!(
            "Трек \"{name}\" исполнителя {artist} из альбома \"{album}\" ({year}): жанр - \
             {genre}. {}...",
            truncate_chars(description, EXCERPT_CHARS),
        ),
    }
}

fn sports(info: &SportsInfo) -> String {
    match info {
        SportsInfo::Match {
            team1,
            team2,
            score1,
            score2,
            status,
            league,
            events,
            ..
        } => {
            let key_events = events
                .iter()
                .take(2)
                .map(|e| format!("{}' - {}", e.minute, e.description))
                .collect::<Vec<_>>()
                .join(", ");
            format!(
                "Матч {team1} - {team2}: счет {score1}:{score2}, статус - {status}. Лига: \
                 {league}. Ключевые события: {key_events}."
            )
        }
        SportsInfo::Standings { table, .. } => {
            let top = table
                .iter()
                .take(3)
                .map(|row| format!("{}. {} - {} очков", row.position, row.name, row.points))
                .collect::<Vec<_>>()
                .join(", ");
            format!("Турнирная таблица: {top}.")
        }
        SportsInfo::Schedule { matches, .. } => {
            let upcoming = matches
                .iter()
                .take(2)
                .map(|m| {
                    format!(
                        "{} {} - {} vs {}",
                        m.date.format("%d.%m.%Y"),
                        m.time,
                        m.team1,
                        m.team2
                    )
                })
                .collect::<Vec<_>>()
                .join(", ");
            format!("Ближайшие матчи: {upcoming}.")
        }
    }
}

// ---------------------------------------------------------------------------
// Generic categories
// ---------------------------------------------------------------------------

/// `body` followed by the clause for the execution mode.
fn with_closing(mode: TaskMode, body: &str, multi_clause: &str, single_clause: &str) -> String {
    let clause = if mode == TaskMode::Multi {
        multi_clause
    } else {
        single_clause
    };
    format!("{body} {clause}")
}

/// The task text with the definition trigger phrases removed.
fn definition_term(text: &str) -> String {
    match Regex::new(r"(?i)что такое|определение|definition|what is") {
        Ok(re) => re.replace_all(text, "").trim().to_string(),
        Err(_) => text.trim().to_string(),
    }
}
