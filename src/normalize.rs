//! Line-ending normalization for stored baselines.
//!
//! Baselines may be checked out with platform line endings, so content read
//! from disk is folded to `\n` before it is compared. The actual output of a
//! run is never passed through here.

use std::borrow::Cow;

/// Replaces every `\r\n` pair with a single `\n`.
///
/// A run of carriage returns that ends in a line feed folds entirely into that
/// line feed, so the result never contains `\r\n` and normalizing twice is the
/// same as normalizing once. A carriage return that is not followed by a line
/// feed is kept. This differs from a plain pairwise replace, which would turn
/// `"\r\r\n"` into `"\r\n"` rather than `"\n"`. Returns the input borrowed
/// when there is nothing to fold.
pub fn normalize(text: &str) -> Cow<'_, str> {
    if !text.contains("\r\n") {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len());
    let mut pending_cr = 0usize;
    for ch in text.chars() {
        match ch {
            '\r' => pending_cr += 1,
            '\n' => {
                pending_cr = 0;
                out.push('\n');
            }
            _ => {
                out.extend(std::iter::repeat('\r').take(pending_cr));
                pending_cr = 0;
                out.push(ch);
            }
        }
    }
    out.extend(std::iter::repeat('\r').take(pending_cr));
    Cow::Owned(out)
}
