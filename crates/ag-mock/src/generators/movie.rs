use ag_core::payload::{MovieInfo, Review};
use rand::Rng;

use super::{sample, strings};

const GENRES: &[&str] = &["Драма", "Комедия", "Боевик", "Триллер", "Фантастика"];

const CAST: &[&str] = &[
    "Известный Актер",
    "Популярная Актриса",
    "Характерный Актер",
    "Молодая Звезда",
    "Ветеран Кино",
];

pub fn generate<R: Rng + ?Sized>(rng: &mut R, title: &str) -> MovieInfo {
    MovieInfo {
        title: title.to_string(),
        year: rng.gen_range(2010..2024),
        director: "Известный Режиссер".to_string(),
        genres: sample(rng, GENRES, 2),
        // tenths, so the value never rounds up to 10.0
        rating: f32::from(rng.gen_range(60..100u8)) / 10.0,
        runtime_minutes: rng.gen_range(90..150),
        plot: format!(
            "\"{title}\" - это захватывающий фильм, который рассказывает историю о главном \
             герое, сталкивающемся с необычными обстоятельствами. По мере развития сюжета, \
             зритель погружается в мир интриг, эмоций и неожиданных поворотов."
        ),
        cast: strings(CAST),
        reviews: vec![
            Review {
                text: "Фильм поражает своей глубиной и проработкой персонажей. Режиссерская \
                       работа заслуживает особого внимания."
                    .to_string(),
                author: "Кинокритик".to_string(),
                source: "Известный журнал".to_string(),
            },
            Review {
                text: "Несмотря на некоторые недостатки сценария, актерская игра и визуальный \
                       ряд делают фильм достойным просмотра."
                    .to_string(),
                author: "Блогер".to_string(),
                source: "Популярный блог о кино".to_string(),
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn movie_ranges() {
        for seed in 0..30 {
            let mut rng = StdRng::seed_from_u64(seed);
            let movie = generate(&mut rng, "Солярис");
            assert!((2010..2024).contains(&movie.year));
            assert!((6.0..=9.9).contains(&movie.rating));
            assert!((90..150).contains(&movie.runtime_minutes));
            assert_eq!(movie.genres.len(), 2);
            assert_ne!(movie.genres[0], movie.genres[1]);
            assert!(movie.plot.starts_with("\"Солярис\""));
        }
    }
}
