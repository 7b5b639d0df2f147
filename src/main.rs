/*!
 * Command-line interface for promptify
 */

use std::io;
use std::sync::Arc;
use std::time::Duration;

use clap::{CommandFactory, Parser};
use indicatif::{ProgressBar, ProgressStyle};

use promptify::clipboard::SystemClipboard;
use promptify::config::{Args, Config};
use promptify::report::{compute_metadata, Report, ReportFormat, Reporter};
use promptify::tokenizer::create_token_counter;
use promptify::writer::deliver;
use promptify::{Collector, Result};

fn main() {
    let args = Args::parse();

    if let Some(shell) = args.generate {
        clap_complete::generate(shell, &mut Args::command(), "promptify", &mut io::stdout());
        return;
    }

    setup_logging(args.quiet, args.verbose);

    // Failures are reported, never turned into a non-zero exit
    if let Err(e) = run(Config::from_args(args)) {
        eprintln!("Error: {}", e);
    }
}

fn setup_logging(quiet: bool, verbose: u8) {
    let level = if quiet {
        log::LevelFilter::Off
    } else {
        match verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    };
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .init();
}

fn run(config: Config) -> Result<()> {
    config.validate()?;

    let progress = ProgressBar::new_spinner();
    progress.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {pos} files {wide_msg:.dim}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    progress.enable_steady_tick(Duration::from_millis(100));

    let collector = Collector::new(config.clone(), Arc::new(progress.clone()));
    let aggregation = collector.collect();
    progress.finish_and_clear();
    let aggregation = aggregation?;

    let counter = create_token_counter(config.model)?;
    let metadata = compute_metadata(&aggregation.document, counter.as_ref());
    let report = Report::new(&aggregation, metadata);
    Reporter::new(config.report_format).print_report(&report)?;

    for outcome in deliver(
        &aggregation.document,
        &SystemClipboard,
        config.output_file.as_deref(),
    ) {
        if outcome.is_failure() {
            eprintln!("Warning: {}", outcome);
        } else if config.report_format == ReportFormat::Json {
            // Keep stdout parseable
            eprintln!("{}", outcome);
        } else {
            println!("{}", outcome);
        }
    }

    Ok(())
}
