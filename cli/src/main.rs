//! `gherkit` CLI entrypoint.
//!
//! Renders narration for step text so lexicons can be previewed outside a
//! test run.

use std::io::{self, Write};

use clap::Parser;
use gherkit_cli::cli::Cli;
use gherkit_cli::error::Result;
use gherkit_cli::run::run;

fn main() {
    let cli = Cli::parse();
    let mut stderr = io::stderr();
    let run_result = run(&cli, &mut io::stdin().lock(), &mut io::stdout().lock());
    let exit_code = exit_code_for_run_result(run_result, &mut stderr);
    if exit_code != 0 {
        std::process::exit(exit_code);
    }
}

fn exit_code_for_run_result(result: Result<()>, stderr: &mut dyn Write) -> i32 {
    match result {
        Ok(()) => 0,
        Err(err) => {
            write_stderr_line(stderr, err);
            1
        }
    }
}

fn write_stderr_line(stderr: &mut dyn Write, message: impl std::fmt::Display) {
    if writeln!(stderr, "{message}").is_err() {
        // Best-effort reporting; ignore write failures.
    }
}
