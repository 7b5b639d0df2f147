/*!
 * Promptify - aggregate project files into one prompt-ready document
 *
 * Walks a directory, selects files by glob pattern, concatenates them into
 * a single formatted document, and reports its size in tokens. Files that
 * look like they carry API keys are left out unless asked otherwise.
 */

pub mod clipboard;
pub mod collector;
pub mod config;
pub mod error;
pub mod filter;
pub mod render;
pub mod report;
pub mod secrets;
pub mod tokenizer;
pub mod tree;
pub mod types;
pub mod writer;


// Re-export main components for easier access
pub use collector::{aggregate, classify, Collector};
pub use config::Config;
pub use error::{PromptifyError, Result};
pub use report::{compute_metadata, Metadata, Report, ReportFormat, Reporter};
pub use secrets::has_suspected_secret;
pub use tree::{render_tree, TreeNode};
pub use types::{Aggregation, InclusionDecision, SkipReason, SkippedFile};
pub use writer::{deliver, DeliveryOutcome};

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
