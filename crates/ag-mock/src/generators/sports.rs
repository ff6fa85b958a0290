use ag_classifier::SportsKind;
use ag_core::payload::{MatchEvent, ScheduledMatch, SportsInfo, StandingRow};
use chrono::{Duration, NaiveDate};
use rand::Rng;

use super::pick;

const LEAGUE: &str = "Премьер-лига";
const TEAM1: &str = "Команда 1";
const TEAM2: &str = "Команда 2";

const FINISHED: &str = "Завершен";
const LIVE: &str = "Идет сейчас";
const HALF_TIME: &str = "Перерыв";

/// (name, won, drawn, lost, goals for, goals against) over 10 games.
const TABLE: &[(&str, u8, u8, u8, u16, u16)] = &[
    ("Команда A", 8, 1, 1, 24, 7),
    ("Команда B", 7, 2, 1, 22, 10),
    ("Команда C", 6, 2, 2, 18, 12),
    ("Команда D", 5, 3, 2, 15, 10),
    ("Команда E", 4, 4, 2, 14, 11),
];

/// (days from today, kick-off, home, away, venue)
const FIXTURES: &[(i64, &str, &str, &str, &str)] = &[
    (3, "19:00", "Команда A", "Команда B", "Стадион 1"),
    (7, "17:30", "Команда C", "Команда A", "Стадион 2"),
    (14, "20:00", "Команда A", "Команда D", "Стадион 1"),
    (21, "18:45", "Команда E", "Команда A", "Стадион 3"),
];

pub fn generate<R: Rng + ?Sized>(
    rng: &mut R,
    today: NaiveDate,
    query: &str,
    kind: SportsKind,
) -> SportsInfo {
    match kind {
        SportsKind::Match => live_match(rng, query),
        SportsKind::Standings => SportsInfo::Standings {
            title: format!("Турнирная таблица: {query}"),
            table: standings(),
        },
        SportsKind::Schedule => SportsInfo::Schedule {
            title: format!("Расписание матчей: {query}"),
            matches: FIXTURES
                .iter()
                .map(|&(days, time, team1, team2, venue)| ScheduledMatch {
                    date: today + Duration::days(days),
                    time: time.to_string(),
                    team1: team1.to_string(),
                    team2: team2.to_string(),
                    league: LEAGUE.to_string(),
                    venue: venue.to_string(),
                })
                .collect(),
        },
    }
}

/// Score and status are drawn first; events are derived from them so the
/// feed never contradicts the scoreboard.
fn live_match<R: Rng + ?Sized>(rng: &mut R, query: &str) -> SportsInfo {
    let score1: u8 = rng.gen_range(0..5);
    let score2: u8 = rng.gen_range(0..5);
    let status = pick(rng, &[FINISHED, LIVE, HALF_TIME]);
    let last_minute: u8 = match status {
        FINISHED => 90,
        HALF_TIME => 45,
        _ => rng.gen_range(46..90),
    };

    let mut events = Vec::new();
    for _ in 0..score1 {
        events.push(MatchEvent {
            minute: rng.gen_range(1..=last_minute),
            description: format!("Гол! {TEAM1}"),
        });
    }
    for _ in 0..score2 {
        events.push(MatchEvent {
            minute: rng.gen_range(1..=last_minute),
            description: format!("Гол! {TEAM2}"),
        });
    }
    events.push(MatchEvent {
        minute: rng.gen_range(1..=last_minute),
        description: "Желтая карточка игроку Команды 2".to_string(),
    });
    if last_minute >= 45 {
        events.push(MatchEvent {
            minute: 45,
            description: "Конец первого тайма".to_string(),
        });
    }
    events.sort_by_key(|e| e.minute);

    SportsInfo::Match {
        title: format!("Матч: {query}"),
        team1: TEAM1.to_string(),
        team2: TEAM2.to_string(),
        score1,
        score2,
        status: status.to_string(),
        league: LEAGUE.to_string(),
        events,
    }
}

fn standings() -> Vec<StandingRow> {
    TABLE
        .iter()
        .zip(1u8..)
        .map(
            |(&(name, won, drawn, lost, goals_for, goals_against), position)| StandingRow {
                position,
                name: name.to_string(),
                played: won + drawn + lost,
                won,
                drawn,
                lost,
                goals_for,
                goals_against,
                points: 3 * u16::from(won) + u16::from(drawn),
            },
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
    }

    #[test]
    fn match_events_follow_the_score() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let SportsInfo::Match {
                score1,
                score2,
                status,
                events,
                ..
            } = generate(&mut rng, today(), "Зенит Спартак", SportsKind::Match)
            else {
                panic!("expected a match");
            };

            let goals1 = events.iter().filter(|e| e.description == "Гол! Команда 1").count();
            let goals2 = events.iter().filter(|e| e.description == "Гол! Команда 2").count();
            assert_eq!(goals1, usize::from(score1));
            assert_eq!(goals2, usize::from(score2));
            assert!(events.windows(2).all(|w| w[0].minute <= w[1].minute));
            if status == HALF_TIME {
                assert!(events.iter().all(|e| e.minute <= 45));
            }
        }
    }

    #[test]
    fn standings_are_consistent() {
        let mut rng = StdRng::seed_from_u64(0);
        let SportsInfo::Standings { title, table } =
            generate(&mut rng, today(), "РПЛ", SportsKind::Standings)
        else {
            panic!("expected standings");
        };
        assert_eq!(title, "Турнирная таблица: РПЛ");
        assert_eq!(table.len(), 5);
        for (i, row) in table.iter().enumerate() {
            assert_eq!(usize::from(row.position), i + 1);
            assert_eq!(row.played, 10);
            assert_eq!(row.points, 3 * u16::from(row.won) + u16::from(row.drawn));
        }
        assert!(table.windows(2).all(|w| w[0].points >= w[1].points));
    }

    #[test]
    fn schedule_is_upcoming() {
        let mut rng = StdRng::seed_from_u64(0);
        let SportsInfo::Schedule { matches, .. } =
            generate(&mut rng, today(), "КХЛ", SportsKind::Schedule)
        else {
            panic!("expected schedule");
        };
        assert_eq!(matches.len(), 4);
        assert!(matches.iter().all(|m| m.date > today()));
        assert!(matches.windows(2).all(|w| w[0].date < w[1].date));
    }
}
