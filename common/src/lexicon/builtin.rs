//! Lexicons bundled with gherkit.

use once_cell::sync::Lazy;

use super::{Keyword, Lexicon};

pub(super) static ENGLISH: Lazy<Lexicon> = Lazy::new(|| Lexicon {
    name: "default".to_owned(),
    locale: Some("en-GB".to_owned()),
    given: vec![Keyword::new("Given", "GIVEN")],
    when: vec![Keyword::new("When", "WHEN")],
    then: vec![Keyword::new("Then", "THEN")],
    and: vec![Keyword::new("And", "AND")],
    feature: "FEATURE".to_owned(),
    scenario: "SCENARIO".to_owned(),
    background: "BACKGROUND".to_owned(),
});

pub(super) static PORTUGUESE: Lazy<Lexicon> = Lazy::new(|| Lexicon {
    name: "pt-BR".to_owned(),
    locale: Some("pt-BR".to_owned()),
    given: vec![
        Keyword::new("Dado", "DADO"),
        Keyword::new("Dada", "DADA"),
        Keyword::new("Dados", "DADOS"),
        Keyword::new("Dadas", "DADAS"),
    ],
    when: vec![Keyword::new("Quando", "QUANDO")],
    then: vec![Keyword::new("Então", "ENTÃO"), Keyword::new("Entao", "ENTAO")],
    and: vec![Keyword::new("E", "E")],
    feature: "FUNCIONALIDADE".to_owned(),
    scenario: "CENARIO".to_owned(),
    background: "CONTEXTO".to_owned(),
});

pub(super) static EMOJI: Lazy<Lexicon> = Lazy::new(|| Lexicon {
    name: "emoji".to_owned(),
    locale: None,
    given: vec![Keyword::new("Given", "😐")],
    when: vec![Keyword::new("When", "🎬")],
    then: vec![Keyword::new("Then", "🙏")],
    and: vec![Keyword::new("And", "😂")],
    feature: "📚".to_owned(),
    scenario: "🥒📕".to_owned(),
    background: "💤".to_owned(),
});

const BUILTIN_NAMES: [&str; 3] = ["default", "pt-BR", "emoji"];

/// Names of the bundled lexicons.
#[must_use]
pub fn builtin_names() -> &'static [&'static str] {
    &BUILTIN_NAMES
}

/// Map a name or alias to the canonical built-in lexicon name.
///
/// Matching ignores case and surrounding whitespace. `en`, `en-GB`, and
/// `english` alias `default`; `pt` and `portuguese` alias `pt-BR`.
///
/// ```
/// use gherkit_common::lexicon::canonical_builtin_name;
///
/// assert_eq!(canonical_builtin_name(" English "), Some("default"));
/// assert_eq!(canonical_builtin_name("PT"), Some("pt-BR"));
/// assert_eq!(canonical_builtin_name("pirate"), None);
/// ```
#[must_use]
pub fn canonical_builtin_name(name: &str) -> Option<&'static str> {
    match name.trim().to_ascii_lowercase().as_str() {
        "default" | "en" | "en-gb" | "english" => Some("default"),
        "pt-br" | "pt" | "portuguese" => Some("pt-BR"),
        "emoji" => Some("emoji"),
        _ => None,
    }
}

pub(super) fn lookup(name: &str) -> Option<&'static Lexicon> {
    match canonical_builtin_name(name)? {
        "default" => Some(&*ENGLISH),
        "pt-BR" => Some(&*PORTUGUESE),
        "emoji" => Some(&*EMOJI),
        _ => None,
    }
}
