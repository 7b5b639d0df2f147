/*!
 * Configuration handling for promptify
 */

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use clap_complete::Shell;

use crate::ensure;
use crate::error::Result;
use crate::report::ReportFormat;
use crate::tokenizer::Model;

/// Patterns included when `--include` is not given
pub const DEFAULT_INCLUDE: &[&str] = &[
    "*.py", "*.html", "*.js", "*.css", "*.json", "*.yaml", "*.txt", "*.md",
];

/// Patterns always excluded, on top of `--exclude`
pub const DEFAULT_EXCLUDE: &[&str] = &["*.pyc", "*egg-info*", "*tmp*", ".DS_Store", ".env*"];

/// File whose presence marks a virtual-environment root
pub const DEFAULT_STOP_FILE: &str = "pyvenv.cfg";

/// Where the document goes when the clipboard fails and no `--output` is set
pub const FALLBACK_OUTPUT_FILE: &str = "output.promptify";

/// Command-line arguments for promptify
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "promptify",
    version = env!("CARGO_PKG_VERSION"),
    about = "Aggregate file contents based on include and exclude patterns",
    long_about = "Walks a directory, concatenates the files matching the include patterns into a single document, reports its token count and copies it to the clipboard."
)]
pub struct Args {
    /// Directory to walk
    #[clap(default_value = ".")]
    pub directory: String,

    /// File patterns to include
    #[clap(long, num_args = 1.., default_values = DEFAULT_INCLUDE)]
    pub include: Vec<String>,

    /// File patterns to exclude, in addition to the built-in defaults
    #[clap(long, num_args = 1..)]
    pub exclude: Vec<String>,

    /// Write the document to this file
    #[clap(long, short)]
    pub output: Option<String>,

    /// Ignore empty and whitespace-only files
    #[clap(long)]
    pub ignore_empty: bool,

    /// Include files even if they look like they contain an API key
    #[clap(long = "no-skip")]
    pub no_skip: bool,

    /// Model whose tokenizer is used for the token count
    #[clap(long, value_enum, default_value_t = Model::default())]
    pub model: Model,

    /// Report format
    #[clap(long, value_enum, default_value_t = ReportFormat::ConsoleTable)]
    pub format: ReportFormat,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[clap(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Silence log output
    #[clap(short, long)]
    pub quiet: bool,

    /// Generate shell completions
    #[clap(long = "generate", value_enum)]
    pub generate: Option<Shell>,
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Root of the walk
    pub target_dir: PathBuf,

    /// Explicit output file, if any
    pub output_file: Option<PathBuf>,

    /// Patterns a file must match one of
    pub include_patterns: Vec<String>,

    /// User-supplied exclude patterns
    pub exclude_patterns: Vec<String>,

    /// Built-in exclude patterns, merged with `exclude_patterns`
    pub default_excludes: Vec<String>,

    /// Sentinel file name that prunes a directory
    pub stop_file: String,

    /// Skip empty and whitespace-only files
    pub ignore_empty: bool,

    /// Disable the API key guard
    pub no_skip_secrets: bool,

    /// Model used for token counting
    pub model: Model,

    /// Report format
    pub report_format: ReportFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target_dir: PathBuf::from("."),
            output_file: None,
            include_patterns: DEFAULT_INCLUDE.iter().map(|s| s.to_string()).collect(),
            exclude_patterns: Vec::new(),
            default_excludes: DEFAULT_EXCLUDE.iter().map(|s| s.to_string()).collect(),
            stop_file: DEFAULT_STOP_FILE.to_string(),
            ignore_empty: false,
            no_skip_secrets: false,
            model: Model::default(),
            report_format: ReportFormat::ConsoleTable,
        }
    }
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args(args: Args) -> Self {
        Self {
            target_dir: PathBuf::from(args.directory),
            output_file: args.output.map(PathBuf::from),
            include_patterns: args.include,
            exclude_patterns: args.exclude,
            ignore_empty: args.ignore_empty,
            no_skip_secrets: args.no_skip,
            model: args.model,
            report_format: args.format,
            ..Self::default()
        }
    }

    /// User excludes followed by the built-in defaults
    pub fn effective_excludes(&self) -> Vec<String> {
        self.exclude_patterns
            .iter()
            .chain(self.default_excludes.iter())
            .cloned()
            .collect()
    }

    /// Validate the configuration
    ///
    /// Only the walk root is checked. An unwritable `--output` surfaces later
    /// as a delivery failure, after the report has been printed.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.target_dir.is_dir(),
            Config,
            "Target directory not found: {}",
            self.target_dir.display()
        );

        Ok(())
    }
}
