/*!
 * Directory walking, filtering and aggregation
 *
 * The walk is depth-first with entries sorted by file name at every level,
 * so the document is deterministic for an unchanged tree.
 */

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use indicatif::ProgressBar;
use walkdir::{DirEntry, WalkDir};

use crate::config::Config;
use crate::error::Result;
use crate::filter::PathFilter;
use crate::render::{join_blocks, render_block};
use crate::secrets::should_redact;
use crate::types::{Aggregation, InclusionDecision, SkipReason, SkippedFile};

/// Options that decide what happens to a qualifying file's content
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassifyOptions {
    /// Skip empty and whitespace-only files
    pub ignore_empty: bool,
    /// Keep files that look like they carry an API key
    pub no_skip_secrets: bool,
}

/// Decide what happens to a decoded file
pub fn classify(text: &str, options: ClassifyOptions) -> InclusionDecision {
    if options.ignore_empty && text.trim().is_empty() {
        InclusionDecision::Skipped(SkipReason::Empty)
    } else if !options.no_skip_secrets && should_redact(text) {
        InclusionDecision::Skipped(SkipReason::SecretSuspected)
    } else {
        InclusionDecision::Included
    }
}

/// Walks a directory and aggregates the qualifying files into one document
pub struct Collector {
    /// Collector configuration
    config: Config,
    /// Progress bar
    pub progress: Arc<ProgressBar>,
    /// Set from outside to stop the walk at the next file
    cancel: Option<Arc<AtomicBool>>,
}

impl Collector {
    /// Create a new collector
    pub fn new(config: Config, progress: Arc<ProgressBar>) -> Self {
        Self {
            config,
            progress,
            cancel: None,
        }
    }

    /// Stop collecting once `flag` is set; checked between files
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// Walk the target directory and build the aggregation
    pub fn collect(&self) -> Result<Aggregation> {
        let root = fs::canonicalize(&self.config.target_dir)?;
        let filter = PathFilter::new(
            &self.config.include_patterns,
            &self.config.effective_excludes(),
        )?;
        let output_file = self
            .config
            .output_file
            .as_deref()
            .and_then(|p| fs::canonicalize(p).ok());
        let options = ClassifyOptions {
            ignore_empty: self.config.ignore_empty,
            no_skip_secrets: self.config.no_skip_secrets,
        };

        log::info!("Collecting files under {}", root.display());

        let mut blocks = Vec::new();
        let mut aggregation = Aggregation::default();

        let walker = WalkDir::new(&root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !self.is_stop_dir(entry));

        for entry in walker {
            if self.is_cancelled() {
                log::warn!("Collection cancelled; returning partial result");
                break;
            }

            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    log::warn!("Skipping unreadable entry: {}", e);
                    continue;
                }
            };

            if entry.file_type().is_dir() || !entry.path().is_file() {
                continue;
            }

            let relative = relative_path(&root, entry.path());
            if !filter.qualifies(&relative) {
                log::trace!("Not selected: {}", relative);
                continue;
            }

            if output_file
                .as_ref()
                .is_some_and(|out| *out == canonical_or_self(entry.path()))
            {
                log::debug!("Not collecting the output file {}", relative);
                continue;
            }

            self.progress.inc(1);
            self.progress.set_message(format!("Current file: {}", relative));

            let bytes = match fs::read(entry.path()) {
                Ok(bytes) => bytes,
                Err(e) => {
                    log::warn!("Unable to read {}: {}. Skipping.", relative, e);
                    continue;
                }
            };

            let decision = match String::from_utf8(bytes) {
                Ok(text) => {
                    let decision = classify(&text, options);
                    if decision == InclusionDecision::Included {
                        blocks.push(render_block(&relative, &text));
                    }
                    decision
                }
                Err(_) => InclusionDecision::Skipped(SkipReason::Undecodable),
            };

            match decision {
                InclusionDecision::Included => aggregation.included.push(relative),
                InclusionDecision::Skipped(reason) => {
                    self.log_skip(&relative, reason);
                    if reason.is_recorded() {
                        aggregation.skipped.push(SkippedFile {
                            path: relative,
                            reason,
                        });
                    }
                }
            }
        }

        aggregation.document = join_blocks(&blocks);
        log::info!(
            "Collected {} files, skipped {}",
            aggregation.included.len(),
            aggregation.skipped.len()
        );
        Ok(aggregation)
    }

    /// A directory holding the stop file is pruned with everything under it
    fn is_stop_dir(&self, entry: &DirEntry) -> bool {
        let pruned =
            entry.file_type().is_dir() && entry.path().join(&self.config.stop_file).is_file();
        if pruned {
            log::debug!("Pruning virtual environment at {}", entry.path().display());
        }
        pruned
    }

    fn is_cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }

    fn log_skip(&self, relative: &str, reason: SkipReason) {
        let line = describe_skip(relative, reason);
        match reason {
            SkipReason::Undecodable => log::warn!("{}", line),
            SkipReason::SecretSuspected => log::info!("{}", line),
            SkipReason::Empty => log::debug!("{}", line),
        }
    }
}

/// Log line for a skipped file, worded by the reason's own message
fn describe_skip(relative: &str, reason: SkipReason) -> String {
    format!("Skipping {}: {}", relative, reason)
}

/// Aggregate the files under `root` with the built-in default excludes
pub fn aggregate(
    root: &Path,
    includes: &[String],
    excludes: &[String],
    ignore_empty: bool,
    no_skip_secrets: bool,
) -> Result<Aggregation> {
    let config = Config {
        target_dir: root.to_path_buf(),
        include_patterns: includes.to_vec(),
        exclude_patterns: excludes.to_vec(),
        ignore_empty,
        no_skip_secrets,
        ..Config::default()
    };
    Collector::new(config, Arc::new(ProgressBar::hidden())).collect()
}

/// `/`-separated path of `path` relative to `root`
fn relative_path(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

fn canonical_or_self(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}
