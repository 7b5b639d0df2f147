/*!
 * Reporting functionality for promptify
 *
 * Computes size metadata for the aggregated document and renders it,
 * together with tree views of the included and skipped files, either as
 * console tables (via `tabled`) or as JSON.
 */

use clap::ValueEnum;
use serde::Serialize;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Padding, Style},
    Table, Tabled,
};

use crate::error::Result;
use crate::tokenizer::TokenCounter;
use crate::tree::render_tree;
use crate::types::{Aggregation, SkippedFile};

/// Size metadata of a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Metadata {
    /// Identity of the counting scheme
    pub tokenizer: String,
    /// Number of tokens in the document
    pub token_count: usize,
    /// Number of non-whitespace characters in the document
    pub char_count: usize,
    /// Context window of the counting model, if known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_window: Option<usize>,
}

impl Metadata {
    /// Share of the context window the document uses, in percent
    pub fn context_usage(&self) -> Option<f64> {
        self.context_window
            .filter(|window| *window > 0)
            .map(|window| self.token_count as f64 / window as f64 * 100.0)
    }
}

/// Count characters that are not Unicode whitespace
pub fn count_non_whitespace(text: &str) -> usize {
    text.chars().filter(|c| !c.is_whitespace()).count()
}

/// Compute the metadata of `document` with the given counter
pub fn compute_metadata(document: &str, counter: &dyn TokenCounter) -> Metadata {
    Metadata {
        tokenizer: counter.name(),
        token_count: counter.num_tokens(document),
        char_count: count_non_whitespace(document),
        context_window: counter.context_window(),
    }
}

/// Everything shown to the user after a run
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// Document metadata
    pub metadata: Metadata,
    /// Included paths
    pub included: Vec<String>,
    /// Skipped paths with reasons
    pub skipped: Vec<SkippedFile>,
}

impl Report {
    /// Build a report from an aggregation and its metadata
    pub fn new(aggregation: &Aggregation, metadata: Metadata) -> Self {
        Self {
            metadata,
            included: aggregation.included.clone(),
            skipped: aggregation.skipped.clone(),
        }
    }
}

/// Format of the report output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Trees and a metadata table
    #[value(name = "table")]
    ConsoleTable,
    /// A single JSON object
    Json,
}

/// Report generator
pub struct Reporter {
    format: ReportFormat,
}

impl Reporter {
    /// Create a new reporter
    pub fn new(format: ReportFormat) -> Self {
        Self { format }
    }

    /// Generate the report text
    pub fn generate_report(&self, report: &Report) -> Result<String> {
        match self.format {
            ReportFormat::ConsoleTable => Ok(self.generate_console_report(report)),
            ReportFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        }
    }

    /// Print the report to stdout
    pub fn print_report(&self, report: &Report) -> Result<()> {
        println!("{}", self.generate_report(report)?);
        Ok(())
    }

    fn generate_console_report(&self, report: &Report) -> String {
        let mut sections = vec![format!(
            "Included files:\n{}",
            render_tree(&report.included).join("\n")
        )];

        if !report.skipped.is_empty() {
            let labels: Vec<String> = report.skipped.iter().map(|s| s.display_label()).collect();
            sections.push(format!(
                "Skipped files:\n{}",
                render_tree(&labels).join("\n")
            ));
        }

        sections.push(self.create_metadata_table(&report.metadata));
        sections.join("\n\n")
    }

    fn create_metadata_table(&self, metadata: &Metadata) -> String {
        #[derive(Tabled)]
        struct MetadataRow {
            #[tabled(rename = "Metric")]
            key: &'static str,

            #[tabled(rename = "Value")]
            value: String,
        }

        let mut rows = vec![
            MetadataRow {
                key: "Tokenizer",
                value: metadata.tokenizer.clone(),
            },
            MetadataRow {
                key: "Token Count",
                value: metadata.token_count.to_string(),
            },
            MetadataRow {
                key: "Character Count",
                value: metadata.char_count.to_string(),
            },
        ];

        if let (Some(usage), Some(window)) = (metadata.context_usage(), metadata.context_window) {
            rows.push(MetadataRow {
                key: "Context Usage",
                value: format!("{:.1}% of {} tokens", usage, window),
            });
        }

        let mut table = Table::new(rows);
        table
            .with(Style::rounded())
            .with(Padding::new(1, 1, 0, 0))
            .with(Modify::new(Columns::new(..)).with(Alignment::left()));

        table.to_string()
    }
}
