use ag_classifier::TranslationRequest;
use ag_core::payload::Translation;

/// Phrase → (language code, translation).
const DICTIONARY: &[(&str, &[(&str, &str)])] = &[
    (
        "hello",
        &[
            ("ru", "привет"),
            ("fr", "bonjour"),
            ("de", "hallo"),
            ("es", "hola"),
            ("it", "ciao"),
            ("zh", "你好"),
            ("ja", "こんにちは"),
        ],
    ),
    (
        "goodbye",
        &[
            ("ru", "до свидания"),
            ("fr", "au revoir"),
            ("de", "auf wiedersehen"),
            ("es", "adiós"),
            ("it", "arrivederci"),
            ("zh", "再见"),
            ("ja", "さようなら"),
        ],
    ),
    (
        "thank you",
        &[
            ("ru", "спасибо"),
            ("fr", "merci"),
            ("de", "danke"),
            ("es", "gracias"),
            ("it", "grazie"),
            ("zh", "谢谢"),
            ("ja", "ありがとう"),
        ],
    ),
    (
        "how are you",
        &[
            ("ru", "как дела"),
            ("fr", "comment allez-vous"),
            ("de", "wie geht es dir"),
            ("es", "cómo estás"),
            ("it", "come stai"),
            ("zh", "你好吗"),
            ("ja", "お元気ですか"),
        ],
    ),
    (
        "good morning",
        &[
            ("ru", "доброе утро"),
            ("fr", "bonjour"),
            ("de", "guten morgen"),
            ("es", "buenos días"),
            ("it", "buongiorno"),
            ("zh", "早上好"),
            ("ja", "おはようございます"),
        ],
    ),
];

pub fn lookup(phrase: &str, target_lang: &str) -> Option<&'static str> {
    let phrase = phrase.trim().to_lowercase();
    DICTIONARY
        .iter()
        .find(|(p, _)| *p == phrase)
        .and_then(|(_, langs)| langs.iter().find(|(code, _)| *code == target_lang))
        .map(|(_, text)| *text)
}

/// Dictionary hit: exact translation, no alternatives. Otherwise a
/// bracketed placeholder with two alternatives.
pub fn generate(request: &TranslationRequest) -> Translation {
    let TranslationRequest {
        text,
        source_lang,
        target_lang,
    } = request;

    let (translated_text, alternatives) = match lookup(text, target_lang) {
        Some(hit) => (hit.to_string(), Vec::new()),
        None => (
            format!("[Перевод текста \"{text}\" с {source_lang} на {target_lang}]"),
            vec![
                "[Альтернативный перевод 1]".to_string(),
                "[Альтернативный перевод 2]".to_string(),
            ],
        ),
    };

    Translation {
        original_text: text.clone(),
        translated_text,
        source_lang: source_lang.clone(),
        target_lang: target_lang.clone(),
        alternatives,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(text: &str, target: &str) -> TranslationRequest {
        TranslationRequest {
            text: text.into(),
            source_lang: "en".into(),
            target_lang: target.into(),
        }
    }

    #[test]
    fn dictionary_hit_has_no_alternatives() {
        let t = generate(&request("Hello", "fr"));
        assert_eq!(t.translated_text, "bonjour");
        assert!(t.alternatives.is_empty());
        assert_eq!(t.original_text, "Hello");
    }

    #[test]
    fn unknown_phrase_gets_placeholder_and_two_alternatives() {
        let t = generate(&request("доброе утро", "en"));
        assert_eq!(t.translated_text, "[Перевод текста \"доброе утро\" с en на en]");
        assert_eq!(t.alternatives.len(), 2);
    }

    #[test]
    fn known_phrase_unknown_language_is_a_miss() {
        assert_eq!(lookup("hello", "pt"), None);
        assert_eq!(lookup(" Thank You ", "de"), Some("danke"));
    }
}
