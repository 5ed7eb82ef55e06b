use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::dedup::dedup_records;
use crate::export::{ExportConfig, export_batch};
use crate::extract::extract_records;
use crate::fallback;
use crate::fetch::{FetchConfig, Fetcher};
use crate::record::{MatchRecord, capture_timestamp};
use crate::sources::{SOURCES, SourceConfig};
use crate::summary::{self, RunSummary};

const DEFAULT_EXPORT_DIR: &str = "exports";
const DEFAULT_MIN_RECORDS: usize = 5;

pub const ERROR_REPORT_FILE: &str = "error_report.json";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub export_dir: PathBuf,
    pub min_records: usize,
    pub fetch: FetchConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let export_dir = env::var("EXPORT_DIR")
            .ok()
            .filter(|val| !val.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_EXPORT_DIR.to_string());
        let min_records = env::var("MIN_RECORDS")
            .ok()
            .and_then(|val| val.parse::<usize>().ok())
            .unwrap_or(DEFAULT_MIN_RECORDS)
            .clamp(1, 50);
        Self {
            export_dir: PathBuf::from(export_dir),
            min_records,
            fetch: FetchConfig::from_env(),
        }
    }
}

/// One full scrape run: every source in the registry, then the shared
/// dedup/fallback/export/summary tail.
pub fn run(config: &AppConfig) -> Result<RunSummary> {
    let fetcher = Fetcher::new(config.fetch.clone());
    let mut all = Vec::new();

    for (idx, source) in SOURCES.iter().enumerate() {
        if idx > 0 {
            fetcher.pause();
        }
        let records = scrape_source(&fetcher, source);
        println!("[INFO] {}: {} candidate records", source.name, records.len());
        all.extend(records);
    }

    finalize_batch(all, config)
}

/// Dedup, top up with sample data when short, export and summarize. Split out
/// from `run` so the tail can be exercised without any network.
pub fn finalize_batch(records: Vec<MatchRecord>, config: &AppConfig) -> Result<RunSummary> {
    let mut batch = dedup_records(records);

    if batch.len() < config.min_records {
        println!(
            "[WARN] only {} unique records scraped (minimum {}), adding sample data",
            batch.len(),
            config.min_records
        );
        fallback::top_up(&mut batch, config.min_records);
        batch = dedup_records(batch);
    }

    let export_config = ExportConfig::new(&config.export_dir);
    let files = export_batch(&batch, &export_config);
    for file in &files {
        println!("[INFO] wrote {}", file.display());
    }

    let summary = summary::build_summary(&batch, &files);
    summary::write_summary(&summary, &config.export_dir)?;
    summary::print_summary(&summary);
    Ok(summary)
}

/// Candidate URLs are tried in order with the courtesy delay; the first one
/// that yields records wins. A dead URL costs a log line, nothing more.
fn scrape_source(fetcher: &Fetcher, source: &SourceConfig) -> Vec<MatchRecord> {
    for (idx, url) in source.urls.iter().enumerate() {
        if idx > 0 {
            fetcher.pause();
        }
        match fetcher.get(url) {
            Ok(body) => {
                let records = extract_records(&body, source);
                if !records.is_empty() {
                    return records;
                }
            }
            Err(err) => println!("[WARN] {} fetch failed: {err:#}", source.name),
        }
    }
    Vec::new()
}

#[derive(Serialize)]
struct ErrorReport<'a> {
    status: &'static str,
    error: &'a str,
    timestamp: String,
}

/// Last-resort artifact: even a total failure leaves a file in the export
/// directory saying what went wrong.
pub fn write_error_report(dir: &Path, error: &str) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create export dir {}", dir.display()))?;
    let path = dir.join(ERROR_REPORT_FILE);
    let report = ErrorReport {
        status: "failed",
        error,
        timestamp: capture_timestamp(),
    };
    let json = serde_json::to_string_pretty(&report).context("serialize error report")?;
    fs::write(&path, json).with_context(|| format!("failed writing {}", path.display()))?;
    Ok(path)
}
