use rstest::rstest;

use super::{Label, Lexicon, LexiconError, StepCategory, builtin_names};

fn complete(name: &str) -> super::LexiconBuilder {
    Lexicon::builder(name)
        .given("Given", "GIVEN")
        .when("When", "WHEN")
        .then("Then", "THEN")
        .and("And", "AND")
}

#[rstest]
fn builtins_satisfy_invariants() {
    for name in builtin_names() {
        let lexicon = Lexicon::builtin(name)
            .unwrap_or_else(|| panic!("built-in `{name}` should resolve"));
        assert_eq!(lexicon.validate(), Ok(()), "built-in `{name}` is invalid");
        assert_eq!(lexicon.name(), *name);
    }
}

#[rstest]
#[case("default", 6)]
#[case("pt-BR", 7)]
#[case("emoji", 2)]
fn padding_tracks_the_widest_display_form(#[case] name: &str, #[case] expected: usize) {
    let lexicon = Lexicon::builtin(name).unwrap_or_else(|| panic!("`{name}` is built in"));
    assert_eq!(lexicon.padding_width(), expected);
}

#[rstest]
#[case("Dados os pedidos", "DADOS", " os pedidos")]
#[case("Dado um pedido", "DADO", " um pedido")]
#[case("Então ela vê", "ENTÃO", " ela vê")]
#[case("E ela sai", "E", " ela sai")]
fn match_prefers_the_longest_keyword(
    #[case] line: &str,
    #[case] display: &str,
    #[case] rest: &str,
) {
    let (keyword, remainder) = Lexicon::portuguese()
        .match_step(line)
        .unwrap_or_else(|| panic!("`{line}` should open with a keyword"));
    assert_eq!(keyword.display(), display);
    assert_eq!(remainder, rest);
}

#[rstest]
#[case("Eles entram")]
#[case("Dadoss")]
#[case("quando minúsculo")]
fn match_requires_a_token_boundary(#[case] line: &str) {
    assert!(Lexicon::portuguese().match_step(line).is_none());
}

fn spaced() -> Lexicon {
    Lexicon::builder("spaced")
        .given("Given ", "GIVEN")
        .when("When", "WHEN")
        .then("Then ", "THEN")
        .and("* ", "*")
        .build()
        .unwrap_or_else(|error| panic!("lexicon should build: {error}"))
}

#[rstest]
#[case("Given a cart", "GIVEN", "a cart")]
#[case("* more", "*", "more")]
#[case("When it rains", "WHEN", " it rains")]
fn keywords_ending_in_a_separator_match_on_the_prefix(
    #[case] line: &str,
    #[case] display: &str,
    #[case] rest: &str,
) {
    let lexicon = spaced();
    let (keyword, remainder) = lexicon
        .match_step(line)
        .unwrap_or_else(|| panic!("`{line}` should match"));
    assert_eq!(keyword.display(), display);
    assert_eq!(remainder, rest);
}

#[rstest]
#[case("Givenchy")]
#[case("*more")]
#[case("Whenever")]
fn separator_keywords_still_need_their_separator(#[case] line: &str) {
    assert!(spaced().match_step(line).is_none());
}

#[rstest]
fn match_accepts_keyword_at_end_of_text() {
    let (keyword, rest) = Lexicon::english()
        .match_step("Then")
        .unwrap_or_else(|| panic!("bare keyword should match"));
    assert_eq!(keyword.display(), "THEN");
    assert!(rest.is_empty());
}

#[rstest]
#[case(StepCategory::Given)]
#[case(StepCategory::When)]
#[case(StepCategory::Then)]
#[case(StepCategory::And)]
fn rejects_empty_categories(#[case] missing: StepCategory) {
    let mut builder = Lexicon::builder("partial");
    for category in StepCategory::ALL {
        if category != missing {
            builder = builder.keyword(category, category.as_str(), "X");
        }
    }

    assert_eq!(
        builder.build(),
        Err(LexiconError::EmptyCategory {
            lexicon: "partial".to_owned(),
            category: missing,
        })
    );
}

#[rstest]
fn rejects_blank_names() {
    assert_eq!(complete("  ").build(), Err(LexiconError::EmptyName));
}

#[rstest]
fn rejects_blank_keywords() {
    let outcome = complete("blank").when(" ", "NOTHING").build();
    assert_eq!(
        outcome,
        Err(LexiconError::EmptyKeyword {
            lexicon: "blank".to_owned(),
            category: StepCategory::When,
        })
    );
}

#[rstest]
fn rejects_keywords_shared_between_categories() {
    let outcome = complete("shared").and("Given", "GIVEN").build();
    assert_eq!(
        outcome,
        Err(LexiconError::DuplicateKeyword {
            lexicon: "shared".to_owned(),
            keyword: "Given".to_owned(),
            first: StepCategory::Given,
            second: StepCategory::And,
        })
    );
}

#[rstest]
fn builder_defaults_labels_to_english() {
    let lexicon = complete("plain")
        .build()
        .unwrap_or_else(|error| panic!("lexicon should build: {error}"));

    assert_eq!(lexicon.label(Label::Feature), "FEATURE");
    assert_eq!(lexicon.label(Label::Scenario), "SCENARIO");
    assert_eq!(lexicon.label(Label::Background), "BACKGROUND");
    assert!(lexicon.locale().is_none());
}

#[rstest]
fn builder_applies_label_and_locale_overrides() {
    let lexicon = complete("custom")
        .locale("pt-BR")
        .feature_label("F")
        .scenario_label("S")
        .background_label("B")
        .build()
        .unwrap_or_else(|error| panic!("lexicon should build: {error}"));

    assert_eq!(lexicon.locale(), Some("pt-BR"));
    assert_eq!(lexicon.label(Label::Feature), "F");
    assert_eq!(lexicon.label(Label::Scenario), "S");
    assert_eq!(lexicon.label(Label::Background), "B");
}

#[rstest]
fn error_messages_name_the_lexicon() {
    let error = LexiconError::EmptyCategory {
        lexicon: "partial".to_owned(),
        category: StepCategory::Then,
    };
    assert_eq!(error.to_string(), "lexicon `partial` declares no Then keywords");
}
