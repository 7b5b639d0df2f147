/*!
 * Core types shared by the collector, reporter and tree renderer
 */

use std::fmt;

use serde::Serialize;

/// Why a qualifying file was left out of the document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// Content is empty or whitespace only (with `--ignore-empty`)
    Empty,
    /// Content is not valid UTF-8
    Undecodable,
    /// Content looks like it carries an API key
    SecretSuspected,
}

impl SkipReason {
    /// Human-readable reason shown next to a skipped path
    pub fn message(&self) -> &'static str {
        match self {
            Self::Empty => "Empty file",
            Self::Undecodable => "Unable to read as UTF-8",
            Self::SecretSuspected => {
                "Potential API key found. Run with --no-skip option to include"
            }
        }
    }

    /// Whether a skip for this reason is recorded in the skipped manifest.
    ///
    /// Empty and undecodable files are dropped silently.
    pub fn is_recorded(&self) -> bool {
        matches!(self, Self::SecretSuspected)
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Outcome of classifying one candidate file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InclusionDecision {
    /// Rendered into the document
    Included,
    /// Left out for the given reason
    Skipped(SkipReason),
}

/// A file recorded in the skipped manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedFile {
    /// Path relative to the walk root, `/`-separated
    pub path: String,
    /// Why the file was skipped
    pub reason: SkipReason,
}

impl SkippedFile {
    /// Path with the reason appended, as shown in the skipped-files tree
    pub fn display_label(&self) -> String {
        format!("{} ({})", self.path, self.reason)
    }
}

/// Result of a collection run
#[derive(Debug, Clone, Default)]
pub struct Aggregation {
    /// The aggregated document
    pub document: String,
    /// Included paths, in traversal order
    pub included: Vec<String>,
    /// Skipped paths with reasons, in traversal order
    pub skipped: Vec<SkippedFile>,
}
