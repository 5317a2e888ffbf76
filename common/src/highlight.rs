//! Single-pass keyword highlighting for narrated step text.
//!
//! [`highlight`] walks the text line by line. A line whose first word is a
//! step keyword of the lexicon is rewritten into a gutter, the keyword's
//! display form right-aligned to the lexicon's padding width, and the
//! [`STEP_MARKER`]. A line whose first word is `Feature`, `Scenario`, or
//! `Background` becomes the lexicon label behind a [`LABEL_MARKER`].
//! Everything else is copied verbatim.
//!
//! The scan never revisits emitted text, so a display form that happens to
//! contain another keyword cannot be substituted twice. It is not idempotent
//! either: highlighting already highlighted text is a caller error.

use crate::lexicon::{Label, Lexicon, ends_token};

/// Glyph appended to every decorated step keyword.
pub const STEP_MARKER: &str = "↘";

/// Glyph placed in front of every decorated label.
pub const LABEL_MARKER: &str = "⤷";

const GUTTER: &str = "    |";
const NESTED_LABEL_INDENT: &str = "  ";

/// Decorate `text` with the keywords and labels of `lexicon`.
///
/// ```
/// use gherkit_common::highlight::highlight;
/// use gherkit_common::lexicon::Lexicon;
///
/// let narrated = highlight("Given a cart\nThen it is empty", Lexicon::english());
/// assert_eq!(narrated, "    | GIVEN ↘ a cart\n    |  THEN ↘ it is empty");
///
/// let prose = "no keywords here";
/// assert_eq!(highlight(prose, Lexicon::english()), prose);
/// ```
#[must_use]
pub fn highlight(text: &str, lexicon: &Lexicon) -> String {
    let width = lexicon.padding_width();
    let mut output = String::with_capacity(text.len() + text.len() / 2);

    for line in text.split_inclusive('\n') {
        decorate_line(line, lexicon, width, &mut output);
    }

    output
}

fn decorate_line(line: &str, lexicon: &Lexicon, width: usize, output: &mut String) {
    let body = line.trim_start_matches([' ', '\t']);

    if let Some((label, rest)) = match_label(body) {
        if label != Label::Feature {
            output.push_str(NESTED_LABEL_INDENT);
        }
        output.push_str(LABEL_MARKER);
        output.push(' ');
        output.push_str(lexicon.label(label));
        output.push_str(rest);
        return;
    }

    if let Some((keyword, rest)) = lexicon.match_step(body) {
        output.push_str(GUTTER);
        push_right_aligned(output, keyword.display(), width);
        output.push(' ');
        output.push_str(STEP_MARKER);
        if rest.starts_with(|character: char| !character.is_whitespace()) {
            output.push(' ');
        }
        output.push_str(rest);
        return;
    }

    output.push_str(line);
}

fn match_label(body: &str) -> Option<(Label, &str)> {
    Label::ALL.into_iter().find_map(|label| {
        body.strip_prefix(label.token())
            .filter(|rest| ends_token(rest))
            .map(|rest| (label, rest))
    })
}

fn push_right_aligned(output: &mut String, value: &str, width: usize) {
    let padding = width.saturating_sub(value.chars().count());
    output.extend(std::iter::repeat_n(' ', padding));
    output.push_str(value);
}
