//! Unified diff rendering.
//!
//! The line matching itself is delegated to the `difference` crate. Lines are
//! interned to numeric tokens first, so the line terminator takes part in the
//! comparison (`"x\n"` and a final unterminated `"x"` are different lines) and
//! empty lines cannot be confused with the crate's split handling.

use std::collections::HashMap;
use std::fmt::{self, Display, Formatter};

use difference::{Changeset, Difference};

// ============================================================================
// EDIT SCRIPT TYPES
// ============================================================================

/// Lines of unchanged context shown around each change.
pub const CONTEXT_LINES: usize = 3;

const NO_NEWLINE_MARKER: &str = "\\ No newline at end of file";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeTag {
    Equal,
    Delete,
    Insert,
}

impl ChangeTag {
    fn prefix(self) -> char {
        match self {
            ChangeTag::Equal => ' ',
            ChangeTag::Delete => '-',
            ChangeTag::Insert => '+',
        }
    }
}

/// One line of the edit script from the old text to the new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineChange<'a> {
    pub tag: ChangeTag,
    /// Zero-based line index in the old text, unless the line was inserted.
    pub old_index: Option<usize>,
    /// Zero-based line index in the new text, unless the line was deleted.
    pub new_index: Option<usize>,
    /// The line including its `\n` terminator, if it has one.
    pub line: &'a str,
}

impl<'a> LineChange<'a> {
    /// The line without its terminator.
    pub fn content(&self) -> &'a str {
        self.line.strip_suffix('\n').unwrap_or(self.line)
    }

    pub fn has_newline(&self) -> bool {
        self.line.ends_with('\n')
    }
}

/// A block of changes with surrounding context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hunk<'a> {
    pub old_start: usize,
    pub old_len: usize,
    pub new_start: usize,
    pub new_len: usize,
    pub changes: Vec<LineChange<'a>>,
}

impl Display for Hunk<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "@@ -{} +{} @@",
            Range(self.old_start, self.old_len),
            Range(self.new_start, self.new_len)
        )?;
        for change in &self.changes {
            writeln!(f, "{}{}", change.tag.prefix(), change.content())?;
            if !change.has_newline() {
                writeln!(f, "{NO_NEWLINE_MARKER}")?;
            }
        }
        Ok(())
    }
}

/// GNU-style hunk range: `start` alone for a single line, `start,len`
/// otherwise. An empty range names the line before it.
struct Range(usize, usize);

impl Display for Range {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.1 {
            1 => write!(f, "{}", self.0),
            len => write!(f, "{},{}", self.0, len),
        }
    }
}

// ============================================================================
// LINE MATCHING
// ============================================================================

/// Computes the line-level edit script turning `old` into `new`.
///
/// Lines shared at the start and end of both texts are emitted as equal
/// without going through the line matcher, so only the differing middle is
/// diffed.
pub fn changes<'a>(old: &'a str, new: &'a str) -> Vec<LineChange<'a>> {
    let old_lines: Vec<&str> = old.split_inclusive('\n').collect();
    let new_lines: Vec<&str> = new.split_inclusive('\n').collect();

    let prefix = old_lines
        .iter()
        .zip(&new_lines)
        .take_while(|(a, b)| a == b)
        .count();
    let suffix = old_lines[prefix..]
        .iter()
        .rev()
        .zip(new_lines[prefix..].iter().rev())
        .take_while(|(a, b)| a == b)
        .count();
    let old_end = old_lines.len() - suffix;
    let new_end = new_lines.len() - suffix;

    let mut out = Vec::with_capacity(old_lines.len().max(new_lines.len()));
    for k in 0..prefix {
        out.push(equal(&old_lines, k, k));
    }

    let mut ids: HashMap<&str, usize> = HashMap::new();
    let old_tokens = intern(&old_lines[prefix..old_end], &mut ids);
    let new_tokens = intern(&new_lines[prefix..new_end], &mut ids);
    let changeset = Changeset::new(&old_tokens, &new_tokens, "\n");

    let (mut i, mut j) = (prefix, prefix);
    for diff in &changeset.diffs {
        match diff {
            Difference::Same(tokens) => {
                for _ in split_tokens(tokens) {
                    out.push(equal(&old_lines, i, j));
                    i += 1;
                    j += 1;
                }
            }
            Difference::Rem(tokens) => {
                for _ in split_tokens(tokens) {
                    out.push(LineChange {
                        tag: ChangeTag::Delete,
                        old_index: Some(i),
                        new_index: None,
                        line: old_lines[i],
                    });
                    i += 1;
                }
            }
            Difference::Add(tokens) => {
                for _ in split_tokens(tokens) {
                    out.push(LineChange {
                        tag: ChangeTag::Insert,
                        old_index: None,
                        new_index: Some(j),
                        line: new_lines[j],
                    });
                    j += 1;
                }
            }
        }
    }

    for k in 0..suffix {
        out.push(equal(&old_lines, old_end + k, new_end + k));
    }
    out
}

fn equal<'a>(old_lines: &[&'a str], old_index: usize, new_index: usize) -> LineChange<'a> {
    LineChange {
        tag: ChangeTag::Equal,
        old_index: Some(old_index),
        new_index: Some(new_index),
        line: old_lines[old_index],
    }
}

fn intern<'a>(lines: &[&'a str], ids: &mut HashMap<&'a str, usize>) -> String {
    lines
        .iter()
        .map(|&line| {
            let next = ids.len();
            ids.entry(line).or_insert(next).to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn split_tokens(joined: &str) -> impl Iterator<Item = &str> {
    joined.split('\n').filter(|token| !token.is_empty())
}

// ============================================================================
// HUNKS AND RENDERING
// ============================================================================

/// Groups an edit script into hunks, keeping `context` unchanged lines around
/// each change. Changes closer than `2 * context` lines share a hunk.
pub fn hunks<'a>(changes: &[LineChange<'a>], context: usize) -> Vec<Hunk<'a>> {
    let changed: Vec<usize> = changes
        .iter()
        .enumerate()
        .filter(|(_, c)| c.tag != ChangeTag::Equal)
        .map(|(k, _)| k)
        .collect();
    let Some((&first, rest)) = changed.split_first() else {
        return Vec::new();
    };

    let mut ranges = Vec::new();
    let mut start = first.saturating_sub(context);
    let mut last = first;
    for &k in rest {
        if k - last - 1 > 2 * context {
            ranges.push((start, (last + 1 + context).min(changes.len())));
            start = k - context;
        }
        last = k;
    }
    ranges.push((start, (last + 1 + context).min(changes.len())));

    ranges
        .into_iter()
        .map(|(start, end)| {
            let before = &changes[..start];
            let old_before = before.iter().filter(|c| c.old_index.is_some()).count();
            let new_before = before.iter().filter(|c| c.new_index.is_some()).count();
            let slice = &changes[start..end];
            let old_len = slice.iter().filter(|c| c.old_index.is_some()).count();
            let new_len = slice.iter().filter(|c| c.new_index.is_some()).count();
            Hunk {
                old_start: if old_len == 0 { old_before } else { old_before + 1 },
                old_len,
                new_start: if new_len == 0 { new_before } else { new_before + 1 },
                new_len,
                changes: slice.to_vec(),
            }
        })
        .collect()
}

/// Renders a unified diff of `text_a` against `text_b`, labeling the sides
/// `label_a` and `label_b`. Returns an empty string for identical inputs.
pub fn unified_diff(label_a: &str, label_b: &str, text_a: &str, text_b: &str) -> String {
    if text_a == text_b {
        return String::new();
    }
    let changes = changes(text_a, text_b);
    let mut out = format!("--- {label_a}\n+++ {label_b}\n");
    for hunk in hunks(&changes, CONTEXT_LINES) {
        out.push_str(&hunk.to_string());
    }
    out
}
