//! The goldmaster command-line interface.
//!
//! This module is the main entry point for all CLI commands and orchestrates
//! the core library functions.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::{fs, process};

use clap::Parser;
use miette::{IntoDiagnostic, Result, WrapErr};

use crate::cli::args::{Command, GoldArgs};
use crate::config::{Config, UPDATE_ENV_VAR};
use crate::errors::GoldenError;
use crate::{diff, escape, normalize, Golden, Outcome};

pub mod args;
pub mod output;

/// The main entry point for the CLI.
pub fn run() -> Result<()> {
    let args = GoldArgs::parse();

    // Dispatch to the appropriate subcommand handler.
    let matched = match args.command {
        Command::Check {
            name,
            root,
            input,
            update,
        } => handle_check(&name, root, input.as_deref(), update)?,
        Command::Diff { old, new, escape } => handle_diff(&old, &new, escape)?,
        Command::List { root } => handle_list(root)?,
    };

    if !matched {
        process::exit(1);
    }
    Ok(())
}

/// Handles the `check` subcommand. Returns `false` on a mismatch.
fn handle_check(
    name: &str,
    root: Option<PathBuf>,
    input: Option<&Path>,
    update: bool,
) -> Result<bool> {
    let mut config = Config::from_env();
    if update {
        config = config.with_update(true);
    }
    if let Some(root) = root {
        config = config.with_root(root);
    }
    let golden = Golden::new(config);

    let actual = read_input(input)?;
    match golden.check(name, &actual) {
        Ok(Outcome::Matched) => Ok(true),
        Ok(Outcome::Updated) => {
            let path = golden.path_for(name, None)?;
            println!("updated {}", path.display());
            Ok(true)
        }
        Err(GoldenError::Mismatch {
            path,
            expected,
            actual,
            diff,
        }) => {
            output::print_mismatch(&path, &expected, &actual, &diff).into_diagnostic()?;
            eprintln!("hint: rerun with --update or {UPDATE_ENV_VAR}=1 to accept the new output");
            Ok(false)
        }
        Err(err) => Err(err.into()),
    }
}

/// Handles the `diff` subcommand. Returns `false` if the files differ.
fn handle_diff(old: &Path, new: &Path, escape_first: bool) -> Result<bool> {
    let read = |path: &Path| -> Result<String> {
        let bytes = fs::read(path)
            .into_diagnostic()
            .wrap_err_with(|| format!("failed to read {}", path.display()))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    };
    let (mut a, mut b) = (read(old)?, read(new)?);
    if escape_first {
        a = escape::escape(&normalize::normalize(&a));
        b = escape::escape(&normalize::normalize(&b));
    }

    let old_label = old.display().to_string();
    let new_label = new.display().to_string();
    let rendered = diff::unified_diff(&old_label, &new_label, &a, &b);
    if rendered.is_empty() {
        return Ok(true);
    }
    output::print_diff(&rendered).into_diagnostic()?;
    Ok(false)
}

/// Handles the `list` subcommand.
fn handle_list(root: Option<PathBuf>) -> Result<bool> {
    let golden = Golden::new(Config::default());
    for name in golden.baselines(root.as_deref())? {
        println!("{name}");
    }
    Ok(true)
}

fn read_input(input: Option<&Path>) -> Result<Vec<u8>> {
    match input {
        Some(path) => fs::read(path)
            .into_diagnostic()
            .wrap_err_with(|| format!("failed to read {}", path.display())),
        None => {
            let mut buf = Vec::new();
            std::io::stdin()
                .read_to_end(&mut buf)
                .into_diagnostic()
                .wrap_err("failed to read stdin")?;
            Ok(buf)
        }
    }
}
