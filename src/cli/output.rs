//! Handles all user-facing output for the CLI.
//!
//! Diffs are printed through `termcolor` so color is dropped automatically
//! when stdout is not a terminal.

use std::io::{self, Write};
use std::path::Path;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Prints a unified diff to stdout, coloring each line by its prefix.
pub fn print_diff(diff: &str) -> io::Result<()> {
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    write_diff(&mut stdout, diff)
}

/// Writes a unified diff to any color-capable writer.
pub fn write_diff<W: WriteColor>(out: &mut W, diff: &str) -> io::Result<()> {
    for line in diff.lines() {
        out.set_color(&line_color(line))?;
        write!(out, "{line}")?;
        out.reset()?;
        writeln!(out)?;
    }
    Ok(())
}

/// Prints the expected and actual sections of a mismatch followed by the diff.
pub fn print_mismatch(path: &Path, expected: &str, actual: &str, diff: &str) -> io::Result<()> {
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    write_mismatch(&mut stdout, path, expected, actual, diff)
}

/// Writes a mismatch report to any color-capable writer.
pub fn write_mismatch<W: WriteColor>(
    out: &mut W,
    path: &Path,
    expected: &str,
    actual: &str,
    diff: &str,
) -> io::Result<()> {
    heading(out, &format!("golden file mismatch: {}", path.display()))?;
    heading(out, "expected (golden):")?;
    writeln!(out, "{expected}")?;
    heading(out, "actual (run):")?;
    writeln!(out, "{actual}")?;
    heading(out, "diff:")?;
    write_diff(out, diff)
}

fn heading<W: WriteColor>(out: &mut W, text: &str) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)).set_bold(true))?;
    write!(out, "{text}")?;
    out.reset()?;
    writeln!(out)
}

fn line_color(line: &str) -> ColorSpec {
    let mut spec = ColorSpec::new();
    if line.starts_with("+++") || line.starts_with("---") {
        spec.set_bold(true);
    } else if line.starts_with("@@") {
        spec.set_fg(Some(Color::Cyan));
    } else if line.starts_with('+') {
        spec.set_fg(Some(Color::Green));
    } else if line.starts_with('-') {
        spec.set_fg(Some(Color::Red));
    }
    spec
}
