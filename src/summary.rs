use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::record::{MatchRecord, Provenance, capture_timestamp};

pub const SUMMARY_FILE: &str = "scrape_summary.json";

/// Aggregate counts for one run, written next to the exports and printed to
/// stdout. Zero counts are a valid summary, not an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub timestamp: String,
    pub total_matches: usize,
    pub real_matches: usize,
    pub synthetic_matches: usize,
    pub data_sources: usize,
    pub leagues_found: usize,
    pub source_breakdown: BTreeMap<String, usize>,
    pub league_breakdown: BTreeMap<String, usize>,
    pub status_breakdown: BTreeMap<String, usize>,
    pub files_created: usize,
    pub status: String,
}

pub fn build_summary(records: &[MatchRecord], files: &[PathBuf]) -> RunSummary {
    let mut source_breakdown: BTreeMap<String, usize> = BTreeMap::new();
    let mut league_breakdown: BTreeMap<String, usize> = BTreeMap::new();
    let mut status_breakdown: BTreeMap<String, usize> = BTreeMap::new();
    let mut real_matches = 0;

    for record in records {
        *source_breakdown.entry(record.source.clone()).or_insert(0) += 1;
        *league_breakdown.entry(record.league.clone()).or_insert(0) += 1;
        *status_breakdown.entry(record.status.clone()).or_insert(0) += 1;
        if record.provenance == Provenance::Scraped {
            real_matches += 1;
        }
    }

    RunSummary {
        timestamp: capture_timestamp(),
        total_matches: records.len(),
        real_matches,
        synthetic_matches: records.len() - real_matches,
        data_sources: source_breakdown.len(),
        leagues_found: league_breakdown.len(),
        source_breakdown,
        league_breakdown,
        status_breakdown,
        files_created: files.len(),
        status: "success".to_string(),
    }
}

pub fn write_summary(summary: &RunSummary, dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create summary dir {}", dir.display()))?;
    let path = dir.join(SUMMARY_FILE);
    let json = serde_json::to_string_pretty(summary).context("serialize run summary")?;
    fs::write(&path, json).with_context(|| format!("failed writing {}", path.display()))?;
    Ok(path)
}

pub fn print_summary(summary: &RunSummary) {
    let line = "=".repeat(60);
    println!("{line}");
    println!("MATCH SCRAPE SUMMARY");
    println!("{line}");
    println!("Generated:  {}", summary.timestamp);
    println!(
        "Matches:    {} total ({} real, {} sample)",
        summary.total_matches, summary.real_matches, summary.synthetic_matches
    );
    println!("Sources:    {}", summary.data_sources);
    println!("Leagues:    {}", summary.leagues_found);
    println!("Files:      {}", summary.files_created);

    if !summary.source_breakdown.is_empty() {
        println!("\nBy source:");
        for (source, count) in &summary.source_breakdown {
            println!("  {source}: {count}");
        }
    }
    if !summary.league_breakdown.is_empty() {
        println!("\nBy league:");
        for (league, count) in &summary.league_breakdown {
            println!("  {league}: {count}");
        }
    }
    println!("{line}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fallback;

    #[test]
    fn empty_batch_yields_zero_counts() {
        let summary = build_summary(&[], &[]);
        assert_eq!(summary.total_matches, 0);
        assert_eq!(summary.real_matches, 0);
        assert_eq!(summary.synthetic_matches, 0);
        assert_eq!(summary.data_sources, 0);
        assert_eq!(summary.status, "success");
    }

    #[test]
    fn synthetic_records_are_counted_separately() {
        let batch = fallback::recent_results();
        let summary = build_summary(&batch, &[]);
        assert_eq!(summary.total_matches, batch.len());
        assert_eq!(summary.real_matches, 0);
        assert_eq!(summary.synthetic_matches, batch.len());
        assert_eq!(
            summary.source_breakdown.get(fallback::RECENT_SOURCE),
            Some(&batch.len())
        );
    }
}
