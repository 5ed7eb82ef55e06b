use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use rust_xlsxwriter::{Workbook, Worksheet};
use serde::Serialize;

use crate::record::MatchRecord;

/// Column order and labels are contract: downstream spreadsheets key on them.
pub const COLUMNS: &[&str] = &[
    "League",
    "Home Team",
    "Away Team",
    "Home Score",
    "Away Score",
    "Final Score",
    "Status",
    "Match Time",
    "Date",
    "TV Info",
    "Source",
    "Data",
    "Scraped At",
];

const SHEET_NAME: &str = "Football Matches";
const FILE_STEM: &str = "livescore_real_data";
const MAX_COLUMN_WIDTH: usize = 50;

pub struct ExportConfig {
    pub dir: PathBuf,
    /// Timestamp baked into every filename so runs never overwrite each other.
    pub stamp: String,
}

impl ExportConfig {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            stamp: Utc::now().format("%Y%m%d_%H%M%S").to_string(),
        }
    }
}

/// Write the batch in every format. Formats are fault-isolated: one failing
/// writer is logged and the rest are still attempted. Returns the paths that
/// were actually written.
pub fn export_batch(records: &[MatchRecord], config: &ExportConfig) -> Vec<PathBuf> {
    if let Err(err) = fs::create_dir_all(&config.dir) {
        println!(
            "[WARN] could not create export dir {}: {err}",
            config.dir.display()
        );
        return Vec::new();
    }

    let rows = batch_rows(records);
    let mut written = Vec::new();

    let xlsx = config.dir.join(format!("{FILE_STEM}_{}.xlsx", config.stamp));
    match write_xlsx(&rows, &xlsx) {
        Ok(()) => written.push(xlsx),
        Err(err) => println!("[WARN] xlsx export failed: {err:#}"),
    }

    let csv = config.dir.join(format!("{FILE_STEM}_{}.csv", config.stamp));
    match write_csv(&rows, &csv) {
        Ok(()) => written.push(csv),
        Err(err) => println!("[WARN] csv export failed: {err:#}"),
    }

    let json = config.dir.join(format!("{FILE_STEM}_{}.json", config.stamp));
    match write_json(records, &json) {
        Ok(()) => written.push(json),
        Err(err) => println!("[WARN] json export failed: {err:#}"),
    }

    let html = config.dir.join(format!("livescore_report_{}.html", config.stamp));
    match write_html(&rows, &html) {
        Ok(()) => written.push(html),
        Err(err) => println!("[WARN] html export failed: {err:#}"),
    }

    written
}

/// Header row followed by one row per record, in export column order.
pub fn batch_rows(records: &[MatchRecord]) -> Vec<Vec<String>> {
    let mut rows = vec![COLUMNS.iter().map(|c| (*c).to_string()).collect()];
    rows.extend(records.iter().map(record_row));
    rows
}

fn record_row(record: &MatchRecord) -> Vec<String> {
    vec![
        record.league.clone(),
        record.home_team.clone(),
        record.away_team.clone(),
        opt_to_string(record.home_score),
        opt_to_string(record.away_score),
        record.final_score(),
        record.status.clone(),
        record.time.clone(),
        record.date.clone(),
        record.tv_info.clone().unwrap_or_default(),
        record.source.clone(),
        record.provenance.label().to_string(),
        record.scraped_at.clone(),
    ]
}

fn opt_to_string<T: std::fmt::Display>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn write_xlsx(rows: &[Vec<String>], path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;
    write_rows(sheet, rows)?;
    size_columns(sheet, rows)?;
    workbook
        .save(path)
        .with_context(|| format!("failed writing workbook to {}", path.display()))?;
    Ok(())
}

fn write_rows(worksheet: &mut Worksheet, rows: &[Vec<String>]) -> Result<()> {
    for (row_idx, row) in rows.iter().enumerate() {
        for (col_idx, value) in row.iter().enumerate() {
            worksheet
                .write_string(row_idx as u32, col_idx as u16, value)
                .with_context(|| format!("write cell ({row_idx},{col_idx})"))?;
        }
    }
    Ok(())
}

fn size_columns(worksheet: &mut Worksheet, rows: &[Vec<String>]) -> Result<()> {
    for col_idx in 0..COLUMNS.len() {
        let widest = rows
            .iter()
            .filter_map(|row| row.get(col_idx))
            .map(|value| value.chars().count())
            .max()
            .unwrap_or(0);
        let width = (widest + 2).min(MAX_COLUMN_WIDTH);
        worksheet.set_column_width(col_idx as u16, width as f64)?;
    }
    Ok(())
}

fn write_csv(rows: &[Vec<String>], path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("failed opening {}", path.display()))?;
    for row in rows {
        writer.write_record(row).context("write csv row")?;
    }
    writer.flush().context("flush csv")?;
    Ok(())
}

#[derive(Serialize)]
struct JsonEnvelope<'a> {
    platform: &'static str,
    version: &'static str,
    generated_at: String,
    total_matches: usize,
    matches: &'a [MatchRecord],
}

fn write_json(records: &[MatchRecord], path: &Path) -> Result<()> {
    let envelope = JsonEnvelope {
        platform: "matchday_scrape",
        version: env!("CARGO_PKG_VERSION"),
        generated_at: crate::record::capture_timestamp(),
        total_matches: records.len(),
        matches: records,
    };
    let json = serde_json::to_string_pretty(&envelope).context("serialize export json")?;
    fs::write(path, json).with_context(|| format!("failed writing {}", path.display()))?;
    Ok(())
}

fn write_html(rows: &[Vec<String>], path: &Path) -> Result<()> {
    let mut table = String::new();
    for (idx, row) in rows.iter().enumerate() {
        let tag = if idx == 0 { "th" } else { "td" };
        table.push_str("      <tr>");
        for value in row {
            table.push_str(&format!("<{tag}>{}</{tag}>", escape_html(value)));
        }
        table.push_str("</tr>\n");
    }

    let report = format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <title>Football Match Report</title>
  <style>
    body {{ font-family: Arial, sans-serif; margin: 2em; background: #f4f6f8; }}
    h1 {{ color: #1a3c6e; }}
    table {{ border-collapse: collapse; background: #fff; width: 100%; }}
    th, td {{ border: 1px solid #ccd4dd; padding: 6px 10px; text-align: left; }}
    th {{ background: #1a3c6e; color: #fff; }}
    tr:nth-child(even) td {{ background: #eef2f6; }}
  </style>
</head>
<body>
  <h1>Football Match Report</h1>
  <p>Generated {generated} ({count} matches)</p>
  <table>
{table}  </table>
</body>
</html>
"#,
        generated = crate::record::capture_timestamp(),
        count = rows.len().saturating_sub(1),
    );
    fs::write(path, report).with_context(|| format!("failed writing {}", path.display()))?;
    Ok(())
}

fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
