//! Multi-strategy extraction over fetched markup. The heuristics are
//! independent and their outputs are concatenated; overlap is collapsed by
//! the deduplicator, never here. A candidate that fails to parse is skipped
//! without disturbing its siblings.

use scraper::{ElementRef, Html, Selector};
use serde_json::Value;

use crate::normalize::normalize_team_name;
use crate::patterns::{self, plausible_score};
use crate::record::{MatchRecord, Provenance, capture_timestamp, display_date, display_time};
use crate::sources::SourceConfig;

/// Container text outside this window is navigation chrome or a whole-page
/// wrapper, not a single match.
const CONTAINER_TEXT_MIN: usize = 10;
const CONTAINER_TEXT_MAX: usize = 500;

const TEXT_SCAN_CAP: usize = 10;

/// Team names shorter than this after normalization are separator debris.
const MIN_TEAM_LEN: usize = 3;

pub fn extract_records(markup: &str, source: &SourceConfig) -> Vec<MatchRecord> {
    let doc = Html::parse_document(markup);
    let ctx = RecordContext::new(source);

    let mut out = Vec::new();
    out.extend(selector_scan(&doc, &ctx));
    out.extend(text_scan(&doc, &ctx));
    out.extend(script_scan(&doc, &ctx));
    out.extend(table_scan(&doc, &ctx));
    out.extend(attribute_scan(&doc, &ctx));
    out
}

/// Fixed metadata stamped onto every record a page yields.
struct RecordContext {
    source: String,
    league: String,
    container_hints: &'static [&'static str],
    date: String,
    time: String,
    scraped_at: String,
}

impl RecordContext {
    fn new(source: &SourceConfig) -> Self {
        Self {
            source: source.name.to_string(),
            league: source.league_hint.to_string(),
            container_hints: source.container_hints,
            date: display_date(),
            time: display_time(),
            scraped_at: capture_timestamp(),
        }
    }

    fn result(
        &self,
        home_raw: &str,
        away_raw: &str,
        home_score: u32,
        away_score: u32,
        status: &str,
    ) -> Option<MatchRecord> {
        let home_team = normalize_team_name(home_raw);
        let away_team = normalize_team_name(away_raw);
        if home_team.len() < MIN_TEAM_LEN || away_team.len() < MIN_TEAM_LEN {
            return None;
        }
        Some(MatchRecord {
            home_team,
            away_team,
            home_score: Some(home_score),
            away_score: Some(away_score),
            status: status.to_string(),
            league: self.league.clone(),
            date: self.date.clone(),
            time: self.time.clone(),
            tv_info: None,
            source: self.source.clone(),
            provenance: Provenance::Scraped,
            scraped_at: self.scraped_at.clone(),
        })
    }

    fn fixture(&self, home_raw: &str, away_raw: &str, kickoff: &str) -> Option<MatchRecord> {
        let home_team = normalize_team_name(home_raw);
        let away_team = normalize_team_name(away_raw);
        if home_team.len() < MIN_TEAM_LEN || away_team.len() < MIN_TEAM_LEN {
            return None;
        }
        Some(MatchRecord {
            home_team,
            away_team,
            home_score: None,
            away_score: None,
            status: "Scheduled".to_string(),
            league: self.league.clone(),
            date: self.date.clone(),
            time: kickoff.to_string(),
            tv_info: None,
            source: self.source.clone(),
            provenance: Provenance::Scraped,
            scraped_at: self.scraped_at.clone(),
        })
    }
}

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("static selector is valid")
}

fn element_text(element: ElementRef<'_>) -> String {
    let parts: Vec<&str> = element.text().map(str::trim).filter(|t| !t.is_empty()).collect();
    parts.join(" ")
}

fn has_container_hint(element: ElementRef<'_>, hints: &[&str]) -> bool {
    let hinted = |value: &str| {
        let lowered = value.to_lowercase();
        hints.iter().any(|hint| lowered.contains(hint))
    };
    element.value().classes().any(hinted)
        || element.value().attr("id").map(hinted).unwrap_or(false)
}

/// Heuristic 1: elements whose class or id hints at a match container; split
/// the element text around the first score pair to get the team names.
fn selector_scan(doc: &Html, ctx: &RecordContext) -> Vec<MatchRecord> {
    let any = selector("*");
    let mut out = Vec::new();

    for element in doc.select(&any) {
        if !has_container_hint(element, ctx.container_hints) {
            continue;
        }
        let text = element_text(element);
        if text.len() < CONTAINER_TEXT_MIN || text.len() > CONTAINER_TEXT_MAX {
            continue;
        }
        let Some((left, right, home_score, away_score)) = patterns::split_at_score(&text) else {
            continue;
        };
        if !plausible_score(home_score, away_score) {
            continue;
        }
        if let Some(record) = ctx.result(left, right, home_score, away_score, "FT") {
            out.push(record);
        }
    }

    out
}

/// Heuristic 2: score-shaped lines anywhere in the rendered page text,
/// independent of DOM structure.
fn text_scan(doc: &Html, ctx: &RecordContext) -> Vec<MatchRecord> {
    let page_text = element_text(doc.root_element());
    let mut out = Vec::new();

    for (home, home_score, away_score, away) in
        patterns::scan_text_matches(&page_text, TEXT_SCAN_CAP)
    {
        if !plausible_score(home_score, away_score) {
            continue;
        }
        if let Some(record) = ctx.result(&home, &away, home_score, away_score, "FT") {
            out.push(record);
        }
    }

    out
}

/// Heuristic 3: match-shaped key/value pairs inside script payloads. The
/// payloads are not standalone JSON, so this stays regex-based.
fn script_scan(doc: &Html, ctx: &RecordContext) -> Vec<MatchRecord> {
    let scripts = selector("script");
    let mut out = Vec::new();

    for element in doc.select(&scripts) {
        let payload: String = element.text().collect();
        if !payload.to_lowercase().contains("match") {
            continue;
        }
        for (home, away, home_score, away_score) in patterns::scan_script_pairs(&payload) {
            if let Some(record) = ctx.result(&home, &away, home_score, away_score, "Live") {
                out.push(record);
            }
        }
    }

    out
}

/// Heuristic 4: relaxed row schema — a time cell is the kickoff, a score cell
/// carries the scores, longer non-numeric cells are teams in encounter order.
fn table_scan(doc: &Html, ctx: &RecordContext) -> Vec<MatchRecord> {
    let rows = selector("table tr");
    let cells = selector("td, th");
    let mut out = Vec::new();

    for row in doc.select(&rows) {
        let mut kickoff: Option<String> = None;
        let mut score: Option<(u32, u32)> = None;
        let mut teams: Vec<String> = Vec::new();

        for cell in row.select(&cells) {
            let text = element_text(cell);
            let trimmed = text.trim();
            if trimmed.is_empty() {
                continue;
            }
            if kickoff.is_none()
                && let Some(time) = patterns::kickoff_time(trimmed)
            {
                kickoff = Some(time.to_string());
                continue;
            }
            if score.is_none()
                && let Some(pair) = patterns::cell_score(trimmed)
            {
                score = Some(pair);
                continue;
            }
            if trimmed.len() > 2 && !trimmed.chars().all(|c| c.is_ascii_digit()) {
                teams.push(trimmed.to_string());
            }
        }

        if teams.len() < 2 {
            continue;
        }
        let record = match score {
            Some((home_score, away_score)) => {
                let mut record = ctx.result(&teams[0], &teams[1], home_score, away_score, "FT");
                if let (Some(record), Some(time)) = (record.as_mut(), kickoff.as_ref()) {
                    record.time = time.clone();
                }
                record
            }
            None => match kickoff.as_deref() {
                Some(time) => ctx.fixture(&teams[0], &teams[1], time),
                None => None,
            },
        };
        if let Some(record) = record {
            out.push(record);
        }
    }

    out
}

/// Heuristic 5: elements carrying a `data-match` attribute with embedded
/// JSON; this one parses properly and defaults missing keys.
fn attribute_scan(doc: &Html, ctx: &RecordContext) -> Vec<MatchRecord> {
    let carriers = selector("[data-match]");
    let mut out = Vec::new();

    for element in doc.select(&carriers) {
        let Some(raw) = element.value().attr("data-match") else {
            continue;
        };
        let Ok(value) = serde_json::from_str::<Value>(raw) else {
            continue;
        };
        let home = pick_string(&value, &["homeTeam", "home"]).unwrap_or_else(|| "Unknown".to_string());
        let away = pick_string(&value, &["awayTeam", "away"]).unwrap_or_else(|| "Unknown".to_string());
        let home_score = pick_u32(&value, &["homeScore", "scoreHome"]).unwrap_or(0);
        let away_score = pick_u32(&value, &["awayScore", "scoreAway"]).unwrap_or(0);
        let status = pick_string(&value, &["status"]).unwrap_or_else(|| "Unknown".to_string());
        let league = pick_string(&value, &["league"]);

        let Some(mut record) = ctx.result(&home, &away, home_score, away_score, &status) else {
            continue;
        };
        if let Some(league) = league {
            record.league = normalize_display(&league);
        }
        out.push(record);
    }

    out
}

fn normalize_display(raw: &str) -> String {
    let trimmed = raw.trim();
    trimmed.chars().take(40).collect()
}

fn pick_string(value: &Value, keys: &[&str]) -> Option<String> {
    for key in keys {
        if let Some(Value::String(s)) = value.get(*key) {
            let trimmed = s.trim();
            if !trimmed.is_empty() {
                return Some(trimmed.to_string());
            }
        }
    }
    None
}

fn pick_u32(value: &Value, keys: &[&str]) -> Option<u32> {
    for key in keys {
        if let Some(v) = value.get(*key) {
            if let Some(num) = v.as_u64() {
                return Some(num as u32);
            }
            if let Some(s) = v.as_str()
                && let Ok(num) = s.parse::<u32>()
            {
                return Some(num);
            }
        }
    }
    None
}
