use camino::Utf8PathBuf;
use rstest::rstest;

use super::*;

const PIRATE: &str = concat!(
    "lexicon = \"pirate\"\n",
    "\n",
    "[[lexicons]]\n",
    "name = \"pirate\"\n",
    "locale = \"en-GB\"\n",
    "given = [[\"Avast\", \"AVAST\"]]\n",
    "when = [[\"Arr\", \"ARR\"]]\n",
    "then = [[\"Yo-ho\", \"YO-HO\"]]\n",
    "and = [[\"Aye\", \"AYE\"]]\n",
    "background = \"SHIP\"\n",
    "scenario = \"VOYAGE\"\n",
    "feature = \"TREASURE\"\n",
);

#[rstest]
fn defaults_are_empty() {
    let config = GherkitConfig::default();

    assert!(config.lexicon_name().is_none());
    assert!(config.lexicons.is_empty());
    assert_eq!(config.lexicon_names(), ["default", "pt-BR", "emoji"]);
}

#[rstest]
fn parses_custom_lexicons() {
    let config = GherkitConfig::from_toml_str(PIRATE)
        .unwrap_or_else(|error| panic!("configuration should parse: {error}"));

    let pirate = config
        .lexicon_named("Pirate")
        .unwrap_or_else(|error| panic!("pirate lexicon should resolve: {error}"));

    assert_eq!(config.lexicon_name(), Some("pirate"));
    assert_eq!(pirate.name(), "pirate");
    assert_eq!(pirate.locale(), Some("en-GB"));
    assert_eq!(pirate.padding_width(), 6);
    assert_eq!(config.lexicon_names().last().map(String::as_str), Some("pirate"));
}

#[rstest]
fn missing_labels_keep_english_defaults() {
    let source = concat!(
        "[[lexicons]]\n",
        "name = \"terse\"\n",
        "given = [[\"G\", \"G\"]]\n",
        "when = [[\"W\", \"W\"]]\n",
        "then = [[\"T\", \"T\"]]\n",
        "and = [[\"A\", \"A\"]]\n",
    );
    let config = GherkitConfig::from_toml_str(source)
        .unwrap_or_else(|error| panic!("configuration should parse: {error}"));
    let terse = config
        .lexicon_named("terse")
        .unwrap_or_else(|error| panic!("terse lexicon should resolve: {error}"));

    assert_eq!(
        gherkit_common::highlight::highlight("Scenario x", &terse),
        "  ⤷ SCENARIO x"
    );
}

#[rstest]
fn builtins_resolve_through_aliases() {
    let config = GherkitConfig::default();

    let portuguese = config
        .lexicon_named("portuguese")
        .unwrap_or_else(|error| panic!("alias should resolve: {error}"));

    assert_eq!(&portuguese, Lexicon::portuguese());
}

#[rstest]
fn unknown_names_are_reported() {
    let outcome = GherkitConfig::default().lexicon_named(" klingon ");

    assert!(
        matches!(outcome, Err(ConfigError::UnknownLexicon { ref name }) if name == "klingon"),
        "unexpected outcome: {outcome:?}"
    );
}

#[rstest]
fn rejects_unknown_fields() {
    let outcome = GherkitConfig::from_toml_str("lexicon = \"emoji\"\nshiny = true\n");

    assert!(matches!(outcome, Err(ConfigError::Parse(_))));
}

#[rstest]
fn rejects_invalid_custom_lexicons() {
    let source = concat!(
        "[[lexicons]]\n",
        "name = \"broken\"\n",
        "given = [[\"Given\", \"GIVEN\"]]\n",
    );

    let outcome = GherkitConfig::from_toml_str(source);

    assert!(
        matches!(
            outcome,
            Err(ConfigError::Lexicon(LexiconError::EmptyCategory {
                category: StepCategory::When,
                ..
            }))
        ),
        "unexpected outcome: {outcome:?}"
    );
}

#[rstest]
#[case("emoji")]
#[case("English")]
#[case("pirate")]
fn rejects_names_that_are_already_taken(#[case] name: &str) {
    let second = PIRATE
        .lines()
        .skip(2)
        .collect::<Vec<_>>()
        .join("\n")
        .replace("name = \"pirate\"", &format!("name = \"{name}\""));
    let source = format!("{PIRATE}\n{second}\n");

    let outcome = GherkitConfig::from_toml_str(&source);

    assert!(
        matches!(outcome, Err(ConfigError::DuplicateLexicon { .. })),
        "unexpected outcome: {outcome:?}"
    );
}

#[rstest]
fn reports_unreadable_files() {
    let path = Utf8PathBuf::from("/definitely/not/here/gherkit.toml");

    let outcome = GherkitConfig::load(&path);

    match outcome {
        Err(ConfigError::Read { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected a read error, got {other:?}"),
    }
}

#[rstest]
fn error_messages_name_the_problem() {
    let error = ConfigError::UnknownLexicon {
        name: "klingon".to_owned(),
    };

    assert_eq!(error.to_string(), "unknown lexicon `klingon`");
}
