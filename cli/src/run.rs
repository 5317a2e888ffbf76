//! Command execution.
//!
//! Commands read from and write to injected streams so they can be exercised
//! without a terminal.

use std::env;
use std::fs;
use std::io::{Read, Write};

use camino::Utf8Path;
use gherkit::context::{GroupLabel, StaticContext, resolve_context};
use gherkit::narration::{NarratedStep, compose};
use gherkit::{GherkitConfig, LEXICON_ENV_VAR, Lexicon, StepStatus, resolve_lexicon};
use log::debug;

use crate::cli::{Cli, Command, LexiconsArgs, RenderArgs};
use crate::error::{CliError, Result};

/// Run the parsed command.
///
/// # Errors
///
/// Returns [`CliError`] when the configuration, the input, or the output
/// fails.
pub fn run(cli: &Cli, stdin: &mut dyn Read, stdout: &mut dyn Write) -> Result<()> {
    match &cli.command {
        Command::Render(args) => render(args, stdin, stdout),
        Command::Lexicons(args) => list_lexicons(args, stdout),
    }
}

fn load_config(path: Option<&Utf8Path>) -> Result<GherkitConfig> {
    path.map_or_else(
        || Ok(GherkitConfig::default()),
        |path| GherkitConfig::load(path).map_err(CliError::from),
    )
}

/// Pick the lexicon for a render.
///
/// An explicit name must exist; otherwise the environment and configuration
/// are consulted and unusable names fall through to the default.
fn select_lexicon(explicit: Option<&str>, config: &GherkitConfig) -> Result<Lexicon> {
    if let Some(name) = gherkit::config::normalise_name(explicit) {
        return Ok(config.lexicon_named(name)?);
    }

    let selection = resolve_lexicon(None, env::var(LEXICON_ENV_VAR).ok(), config);
    selection.log_outcome("gherkit::cli");
    Ok(selection.into_lexicon())
}

fn read_steps(input: Option<&Utf8Path>, stdin: &mut dyn Read) -> Result<String> {
    if let Some(path) = input {
        return fs::read_to_string(path).map_err(|source| CliError::ReadInput {
            path: path.to_owned(),
            source,
        });
    }

    let mut text = String::new();
    stdin
        .read_to_string(&mut text)
        .map_err(CliError::ReadStdin)?;
    Ok(text)
}

fn render(args: &RenderArgs, stdin: &mut dyn Read, stdout: &mut dyn Write) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let lexicon = select_lexicon(args.lexicon.as_deref(), &config)?;
    let text = read_steps(args.input.as_deref(), stdin)?;

    let mut provider = StaticContext::new();
    if let Some(name) = &args.scenario {
        provider = provider.with_display_name(name.as_str());
    }
    if let Some(feature) = &args.feature {
        provider = provider.with_label(GroupLabel::feature(feature.as_str()));
    }
    let context = resolve_context(Some(&provider));

    let narration = compose(
        &NarratedStep {
            text: &text,
            method_name: None,
            status: StepStatus::from_failed(args.failed),
            is_background: args.background,
            lexicon: &lexicon,
        },
        &context,
    );

    if narration.is_empty() {
        debug!(target: "gherkit::cli", "no step text to render");
        return Ok(());
    }
    writeln!(stdout, "{narration}")?;
    Ok(())
}

fn list_lexicons(args: &LexiconsArgs, stdout: &mut dyn Write) -> Result<()> {
    let config = load_config(args.config.as_deref())?;

    for name in config.lexicon_names() {
        let lexicon = config.lexicon_named(&name)?;
        writeln!(stdout, "{name}\t{}", lexicon.locale().unwrap_or("-"))?;
    }
    Ok(())
}
