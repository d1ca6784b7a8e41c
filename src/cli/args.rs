//! Defines the command-line arguments and subcommands for the goldmaster CLI.
//!
//! This module uses the `clap` crate with its "derive" feature to create a
//! declarative and type-safe argument parsing structure.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "goldmaster",
    version,
    about = "Record and check golden files for test output."
)]
pub struct GoldArgs {
    #[command(subcommand)]
    pub command: Command,
}

/// An enumeration of all available CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compare output against the stored golden file for a test.
    Check {
        /// Test identifier; may contain `/` to nest golden files.
        #[arg(required = true)]
        name: String,
        /// Directory holding golden files (defaults to `testdata`).
        #[arg(short, long)]
        root: Option<PathBuf>,
        /// Read the output from this file instead of stdin.
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Overwrite the golden file instead of comparing.
        #[arg(short, long)]
        update: bool,
    },
    /// Show a unified diff between two files.
    Diff {
        /// The expected side.
        #[arg(required = true)]
        old: PathBuf,
        /// The actual side.
        #[arg(required = true)]
        new: PathBuf,
        /// Normalize line endings and escape control characters first.
        #[arg(short, long)]
        escape: bool,
    },
    /// List the golden files stored under a root.
    List {
        /// Directory holding golden files (defaults to `testdata`).
        #[arg(short, long)]
        root: Option<PathBuf>,
    },
}
