//! CLI argument definitions for the `gherkit` binary.

use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand};

/// Render Gherkin-style narration for step text.
#[derive(Parser, Debug)]
#[command(name = "gherkit")]
#[command(version, about)]
#[command(after_help = concat!(
    "EXAMPLES:\n",
    "  Narrate steps from a file with the Portuguese lexicon:\n",
    "    $ gherkit render steps.txt --lexicon pt-BR\n\n",
    "  Narrate a failing scenario from stdin:\n",
    "    $ printf 'Given a\\nThen b' | gherkit render --scenario checkout --failed\n\n",
    "  List the lexicons a configuration file makes available:\n",
    "    $ gherkit lexicons --config gherkit.toml\n\n",
    "The GHERKIT_LEXICON environment variable selects the lexicon when --lexicon\n",
    "is not given.",
))]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print the narration for step text read from a file or stdin.
    Render(RenderArgs),

    /// List the selectable lexicons.
    Lexicons(LexiconsArgs),
}

/// Arguments for the render command.
#[derive(Args, Debug, Clone, Default)]
pub struct RenderArgs {
    /// File holding the step text; stdin when omitted.
    #[arg(value_name = "FILE")]
    pub input: Option<Utf8PathBuf>,

    /// Lexicon used for decoration.
    #[arg(short, long, value_name = "NAME")]
    pub lexicon: Option<String>,

    /// Configuration file with custom lexicons.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,

    /// Scenario name shown above the steps.
    #[arg(short, long, value_name = "NAME")]
    pub scenario: Option<String>,

    /// Feature description shown above the scenario.
    #[arg(short, long, value_name = "TEXT")]
    pub feature: Option<String>,

    /// Label the steps as a background.
    #[arg(short, long)]
    pub background: bool,

    /// Narrate the steps as failed.
    #[arg(long)]
    pub failed: bool,
}

/// Arguments for the lexicons command.
#[derive(Args, Debug, Clone, Default)]
pub struct LexiconsArgs {
    /// Configuration file with custom lexicons.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use rstest::rstest;

    #[rstest]
    fn render_defaults_to_stdin() {
        let cli = Cli::parse_from(["gherkit", "render"]);

        let Command::Render(args) = cli.command else {
            panic!("expected the render command");
        };
        assert!(args.input.is_none());
        assert!(args.lexicon.is_none());
        assert!(!args.background);
        assert!(!args.failed);
    }

    #[rstest]
    fn render_parses_every_option() {
        let cli = Cli::parse_from([
            "gherkit",
            "render",
            "steps.txt",
            "--lexicon",
            "emoji",
            "--config",
            "gherkit.toml",
            "--scenario",
            "checkout",
            "--feature",
            "Cart",
            "--background",
            "--failed",
        ]);

        let Command::Render(args) = cli.command else {
            panic!("expected the render command");
        };
        assert_eq!(args.input, Some(Utf8PathBuf::from("steps.txt")));
        assert_eq!(args.lexicon.as_deref(), Some("emoji"));
        assert_eq!(args.config, Some(Utf8PathBuf::from("gherkit.toml")));
        assert_eq!(args.scenario.as_deref(), Some("checkout"));
        assert_eq!(args.feature.as_deref(), Some("Cart"));
        assert!(args.background);
        assert!(args.failed);
    }

    #[rstest]
    fn lexicons_accepts_a_config() {
        let cli = Cli::parse_from(["gherkit", "lexicons", "-c", "gherkit.toml"]);

        assert!(matches!(
            cli.command,
            Command::Lexicons(LexiconsArgs { config: Some(_) })
        ));
    }

    #[rstest]
    fn a_subcommand_is_required() {
        assert!(Cli::try_parse_from(["gherkit"]).is_err());
    }
}
