//! Behaviour-driven coverage for step highlighting.
//!
//! Scenarios drive the built-in lexicons through multi-line step text and
//! check that custom lexicons missing a category never reach the highlighter.

use gherkit_common::highlight::highlight;
use gherkit_common::lexicon::{Lexicon, LexiconBuilder, LexiconError, StepCategory};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;

mod support;
use support::step_text::StepText;

#[derive(Default)]
struct HighlightWorld {
    lexicon: RefCell<Option<&'static Lexicon>>,
    builder: RefCell<Option<LexiconBuilder>>,
    input: RefCell<String>,
    output: RefCell<Option<String>>,
    built: RefCell<Option<Result<Lexicon, LexiconError>>>,
}

impl HighlightWorld {
    fn lexicon(&self) -> &'static Lexicon {
        self.lexicon
            .borrow()
            .unwrap_or_else(|| panic!("a lexicon should be selected"))
    }

    fn output(&self) -> String {
        self.output
            .borrow()
            .clone()
            .unwrap_or_else(|| panic!("text should have been highlighted"))
    }

    fn line(&self, index: usize) -> String {
        let output = self.output();
        output
            .lines()
            .nth(index.saturating_sub(1))
            .map(str::to_owned)
            .unwrap_or_else(|| panic!("line {index} missing from `{output}`"))
    }
}

#[fixture]
fn world() -> HighlightWorld {
    HighlightWorld::default()
}

#[given("the built-in lexicon {name}")]
fn given_builtin(world: &HighlightWorld, name: StepText) {
    let lexicon = Lexicon::builtin(name.as_str())
        .unwrap_or_else(|| panic!("`{}` should be built in", name.as_str()));
    *world.lexicon.borrow_mut() = Some(lexicon);
}

#[given("a custom lexicon missing its When keywords")]
fn given_partial_lexicon(world: &HighlightWorld) {
    let builder = Lexicon::builder("partial")
        .given("Given", "G")
        .then("Then", "T")
        .and("And", "A");
    *world.builder.borrow_mut() = Some(builder);
}

#[when("the step text {text} is highlighted")]
fn when_highlighted(world: &HighlightWorld, text: StepText) {
    let narrated = highlight(text.as_str(), world.lexicon());
    *world.input.borrow_mut() = text.into_inner();
    *world.output.borrow_mut() = Some(narrated);
}

#[when("the custom lexicon is built")]
fn when_built(world: &HighlightWorld) {
    let builder = world
        .builder
        .borrow_mut()
        .take()
        .unwrap_or_else(|| panic!("a builder should be prepared"));
    *world.built.borrow_mut() = Some(builder.build());
}

#[then("the highlighted text has {count} lines")]
fn then_line_count(world: &HighlightWorld, count: usize) {
    assert_eq!(world.output().lines().count(), count);
}

#[then("line {index} reads {expected}")]
fn then_line_reads(world: &HighlightWorld, index: usize, expected: StepText) {
    assert_eq!(world.line(index), expected.as_str());
}

#[then("the highlighted text equals the input")]
fn then_unchanged(world: &HighlightWorld) {
    assert_eq!(world.output(), *world.input.borrow());
}

#[then("construction fails for the When category")]
fn then_rejected(world: &HighlightWorld) {
    match world.built.borrow().as_ref() {
        Some(Err(LexiconError::EmptyCategory { category, .. })) => {
            assert_eq!(*category, StepCategory::When);
        }
        other => panic!("expected an empty When category, got {other:?}"),
    }
}

#[scenario(path = "tests/features/highlighting.feature", index = 0)]
fn scenario_english_lines(world: HighlightWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/highlighting.feature", index = 1)]
fn scenario_prose_untouched(world: HighlightWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/highlighting.feature", index = 2)]
fn scenario_portuguese_longest_match(world: HighlightWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/highlighting.feature", index = 3)]
fn scenario_emoji_labels(world: HighlightWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/highlighting.feature", index = 4)]
fn scenario_partial_lexicon_rejected(world: HighlightWorld) {
    let _ = world;
}
