//! pleiades-cli — Command-line interface for pleiades-core
//!
//! Retrieves a Pleiades places dump (by default the latest one from
//! atlantides.org), maps it into typed records and lets you inspect the
//! result from your terminal.
//!
//! Usage examples
//! --------------
//!
//! - Show overall stats
//!   $ pleiades stats
//!
//! - Use a local copy and tolerate malformed records
//!   $ pleiades -i ./pleiades-places-latest.json.gz --skip-invalid stats
//!
//! - Print the first 10 curated records as JSON lines
//!   $ pleiades dump --shape curated --limit 10
//!
//! - Show one place in full
//!   $ pleiades show 423025
//!
//! - Search by title or ancient name (accent-insensitive)
//!   $ pleiades search lugdunum
//!
//! - Give up on a slow download after ten minutes
//!   $ pleiades --timeout 600 stats
//!
//! Logging goes to stderr; set `RUST_LOG` or pass `-v`/`-vv`.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use clap::Parser;
use pleiades_core::{
    map_corpus_with, map_record, search_by_name, CorpusPolicy, CorpusReport, CorpusStats,
    AutoFetcher, MappedRecord, PlaceView, RawRecord, RecordShape, RetrievalAdapter,
};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_logging(args.verbose);

    let adapter = RetrievalAdapter::with_fetcher(fetcher(args.timeout))
        .compression(args.compression.into());
    let records = adapter
        .retrieve(&args.input)
        .with_context(|| format!("failed to load {}", args.input))?;
    tracing::info!(records = records.len(), input = %args.input, "dump loaded");

    let policy = if args.skip_invalid {
        CorpusPolicy::SkipInvalid
    } else {
        CorpusPolicy::FailFast
    };

    match args.command {
        Commands::Stats => {
            let report = map_corpus_with(&records, RecordShape::Curated, policy)?;
            let stats = CorpusStats::collect(&report.records);
            println!("Corpus statistics:");
            println!("  Raw records: {}", records.len());
            println!("  Mapped: {}", stats.records);
            println!("  Skipped: {}", report.failures.len());
            println!("  Names: {}", stats.names);
            println!("  With location: {}", stats.with_location);
            println!("  With connections: {}", stats.with_connections);
        }

        Commands::Dump { shape, limit } => {
            let end = limit.map_or(records.len(), |n| n.min(records.len()));
            let report = map_corpus_with(&records[..end], shape.into(), policy)?;
            for record in &report.records {
                println!("{}", to_json(record, false)?);
            }
            report_failures(&report);
        }

        Commands::Show { id, shape } => match find_raw(&records, &id) {
            Some(raw) => {
                let record = map_record(raw, shape.into())?;
                println!("{}", to_json(&record, true)?);
            }
            None => eprintln!("No place found for id: {id}"),
        },

        Commands::Search { query } => {
            let report = map_corpus_with(&records, RecordShape::Curated, policy)?;
            let hits = search_by_name(&report.records, &query);
            if hits.is_empty() {
                println!("No places found matching: {query}");
            } else {
                for place in hits {
                    let ancient = place
                        .principal_name()
                        .map(|n| n.name_attested.as_str())
                        .unwrap_or("-");
                    println!(
                        "{}: {} [{}]",
                        place.id().unwrap_or("?"),
                        place.title().unwrap_or("(untitled)"),
                        ancient
                    );
                }
            }
            report_failures(&report);
        }
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(feature = "fetch")]
fn fetcher(timeout: Option<u64>) -> AutoFetcher {
    let timeout = timeout.map(std::time::Duration::from_secs);
    AutoFetcher::with_http(pleiades_core::HttpFetcher::new(timeout))
}

#[cfg(not(feature = "fetch"))]
fn fetcher(_timeout: Option<u64>) -> AutoFetcher {
    AutoFetcher::new()
}

fn find_raw<'a>(records: &'a [RawRecord], id: &str) -> Option<&'a RawRecord> {
    records.iter().find(|r| r.id() == Some(id.trim()))
}

/// Serializes the record itself, without the shape tag.
fn to_json(record: &MappedRecord, pretty: bool) -> serde_json::Result<String> {
    match (record, pretty) {
        (MappedRecord::Full(r), false) => serde_json::to_string(r),
        (MappedRecord::Full(r), true) => serde_json::to_string_pretty(r),
        (MappedRecord::Curated(r), false) => serde_json::to_string(r),
        (MappedRecord::Curated(r), true) => serde_json::to_string_pretty(r),
    }
}

fn report_failures(report: &CorpusReport) {
    for failure in &report.failures {
        eprintln!(
            "skipped record #{} ({}): {}",
            failure.index,
            failure.record_id.as_deref().unwrap_or("no id"),
            failure.error
        );
    }
}
