//! Golden-file comparisons for test suites.
//!
//! A test hands its output to [`Golden::check`]. In update mode the output is
//! written to `<root>/<name>.golden`; otherwise the stored file is loaded,
//! line endings are normalized, both sides are escaped so control characters
//! are visible, and any difference is reported as a unified diff inside
//! [`GoldenError::Mismatch`].

pub use crate::config::{Config, DEFAULT_ROOT, UPDATE_ENV_VAR};
pub use crate::diff::unified_diff;
pub use crate::errors::{ErrorKind, GoldenError, Result};
pub use crate::escape::escape;
pub use crate::golden::{Golden, Outcome, GOLDEN_LABEL, RUN_LABEL};
pub use crate::name::GOLDEN_EXTENSION;
pub use crate::normalize::normalize;
pub use crate::output::Output;

pub mod cli;
pub mod config;
pub mod diff;
pub mod discovery;
pub mod errors;
pub mod escape;
pub mod golden;
pub mod name;
pub mod normalize;
pub mod output;
