use ag_classifier::MusicKind;
use ag_core::payload::{AlbumTrack, MusicInfo, PopularTrack};
use rand::Rng;

use super::{pick, sample};

const ARTIST_GENRES: &[&str] = &["Поп", "Рок", "Электроника"];
const GENRES: &[&str] = &["Поп", "Рок", "Электроника", "Хип-хоп", "Джаз"];

pub fn generate<R: Rng + ?Sized>(rng: &mut R, query: &str, kind: MusicKind) -> MusicInfo {
    match kind {
        MusicKind::Artist => MusicInfo::Artist {
            name: query.to_string(),
            genres: sample(rng, ARTIST_GENRES, 2),
            bio: format!(
                "{query} - известный исполнитель, начавший карьеру в начале 2000-х годов. За \
                 время творческой деятельности выпустил несколько успешных альбомов и синглов, \
                 получивших признание критиков и слушателей."
            ),
            popular_tracks: [
                ("Хит №1", "Альбом 1", 2015),
                ("Популярная песня", "Альбом 2", 2018),
                ("Новый сингл", "Альбом 3", 2022),
            ]
            .into_iter()
            .map(|(name, album, year)| PopularTrack {
                name: name.to_string(),
                album: album.to_string(),
                year,
            })
            .collect(),
        },
        MusicKind::Album => MusicInfo::Album {
            name: query.to_string(),
            artist: "Исполнитель".to_string(),
            year: rng.gen_range(2015..2024),
            genre: pick(rng, GENRES).to_string(),
            description: format!(
                "\"{query}\" - это альбом, который демонстрирует музыкальное развитие \
                 исполнителя. Он содержит разнообразные композиции, объединенные общей \
                 тематикой и настроением."
            ),
            tracks: [
                ("Трек 1", "3:45"),
                ("Трек 2", "4:12"),
                ("Трек 3", "3:21"),
                ("Трек 4", "5:07"),
                ("Трек 5", "3:58"),
            ]
            .into_iter()
            .map(|(name, duration)| AlbumTrack {
                name: name.to_string(),
                duration: duration.to_string(),
            })
            .collect(),
        },
        MusicKind::Track => MusicInfo::Track {
            name: query.to_string(),
            artist: "Исполнитель".to_string(),
            album: "Название альбома".to_string(),
            year: rng.gen_range(2018..2024),
            genre: pick(rng, GENRES).to_string(),
            description: format!(
                "\"{query}\" - это композиция, которая отличается запоминающейся мелодией и \
                 глубоким текстом. Песня быстро завоевала популярность среди слушателей."
            ),
            lyrics: lyrics(query),
        },
    }
}

fn lyrics(query: &str) -> String {
    format!(
        "Первый куплет:
Здесь будет текст первого куплета песни \"{query}\".
Строки с рифмами и смыслом, передающие основную идею.
Продолжение текста с развитием темы.
Завершение куплета с подводкой к припеву.

Припев:
Запоминающийся припев песни \"{query}\".
Повторяющиеся строки, которые легко запомнить.
Основной посыл композиции.
Еще одна строка припева.

Второй куплет:
Развитие истории, начатой в первом куплете.
Новые детали и образы в тексте песни.
Эмоциональное усиление перед следующим припевом.
Завершающие строки второго куплета.

[Повтор припева]

Бридж:
Изменение ритма и настроения.
Кульминационные строки песни.
Подготовка к финальному припеву.

[Финальный припев]

Аутро:
Завершающие строки песни \"{query}\".
Последний акцент на основной идее композиции."
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn kind_selects_variant() {
        let mut rng = StdRng::seed_from_u64(2);
        assert!(matches!(
            generate(&mut rng, "Земфира", MusicKind::Artist),
            MusicInfo::Artist { ref popular_tracks, .. } if popular_tracks.len() == 3
        ));
        assert!(matches!(
            generate(&mut rng, "Ночь", MusicKind::Album),
            MusicInfo::Album { ref tracks, year, .. } if tracks.len() == 5 && (2015..2024).contains(&year)
        ));
        match generate(&mut rng, "Кукушка", MusicKind::Track) {
            MusicInfo::Track { lyrics, year, .. } => {
                assert!(lyrics.contains("\"Кукушка\""));
                assert!((2018..2024).contains(&year));
            }
            other => panic!("expected track, got {other:?}"),
        }
    }
}
