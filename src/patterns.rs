//! The small grammar shared by every extraction heuristic: score pairs,
//! kickoff times and the key/value shapes found in inline script payloads.
//! Each pattern is a named function so it can be tested on its own instead
//! of living inline at its call site.

use once_cell::sync::Lazy;
use regex::Regex;

/// Scores above this are assumed to be times or junk picked up from free text.
pub const MAX_PLAUSIBLE_SCORE: u32 = 10;

static SCORE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{1,3})\s*[-–:]\s*(\d{1,3})").expect("valid score regex"));

static CELL_SCORE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{1,3})\s*[-–:]\s*(\d{1,3})$").expect("valid cell score regex"));

static KICKOFF_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{1,2}:\d{2})$").expect("valid kickoff regex"));

static TEXT_MATCH_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([A-Za-z][A-Za-z\s&\.]*?)\s+(\d{1,2})\s*[-–]\s*(\d{1,2})\s+([A-Za-z][A-Za-z&\.]*)")
        .expect("valid text match regex")
});

static SCRIPT_CAMEL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#""homeTeam"\s*:\s*"([^"]+)".*?"awayTeam"\s*:\s*"([^"]+)".*?"homeScore"\s*:\s*(\d+).*?"awayScore"\s*:\s*(\d+)"#,
    )
    .expect("valid camel-case script regex")
});

static SCRIPT_SHORT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#""home"\s*:\s*"([^"]+)".*?"away"\s*:\s*"([^"]+)".*?"scoreHome"\s*:\s*(\d+).*?"scoreAway"\s*:\s*(\d+)"#,
    )
    .expect("valid short-key script regex")
});

pub fn plausible_score(home: u32, away: u32) -> bool {
    home < MAX_PLAUSIBLE_SCORE && away < MAX_PLAUSIBLE_SCORE
}

/// First "number separator number" pair anywhere in `text`.
pub fn find_score(text: &str) -> Option<(u32, u32)> {
    let caps = SCORE_RE.captures(text)?;
    let home = caps.get(1)?.as_str().parse().ok()?;
    let away = caps.get(2)?.as_str().parse().ok()?;
    Some((home, away))
}

/// Split `text` around the first score pair, returning the flanking fragments
/// as team-name candidates along with the parsed scores.
pub fn split_at_score(text: &str) -> Option<(&str, &str, u32, u32)> {
    let m = SCORE_RE.find(text)?;
    let (home, away) = find_score(m.as_str())?;
    Some((&text[..m.start()], &text[m.end()..], home, away))
}

/// A table cell whose entire content is a score pair.
pub fn cell_score(cell: &str) -> Option<(u32, u32)> {
    let caps = CELL_SCORE_RE.captures(cell.trim())?;
    let home = caps.get(1)?.as_str().parse().ok()?;
    let away = caps.get(2)?.as_str().parse().ok()?;
    Some((home, away))
}

/// A table cell whose entire content is an `HH:MM` kickoff time.
pub fn kickoff_time(cell: &str) -> Option<&str> {
    KICKOFF_RE
        .captures(cell.trim())
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// `Team A 2 - 1 Team B` shapes in rendered page text. Capped because whole
/// pages of navigation text can produce junk matches without bound.
pub fn scan_text_matches(text: &str, cap: usize) -> Vec<(String, u32, u32, String)> {
    let mut out = Vec::new();
    for caps in TEXT_MATCH_RE.captures_iter(text).take(cap) {
        let (Some(home), Some(hs), Some(aw), Some(away)) =
            (caps.get(1), caps.get(2), caps.get(3), caps.get(4))
        else {
            continue;
        };
        let (Ok(home_score), Ok(away_score)) = (hs.as_str().parse(), aw.as_str().parse()) else {
            continue;
        };
        out.push((
            home.as_str().to_string(),
            home_score,
            away_score,
            away.as_str().to_string(),
        ));
    }
    out
}

/// Key/value shapes resembling match JSON inside script payloads, which are
/// rarely standalone JSON and so get scanned rather than parsed.
pub fn scan_script_pairs(script: &str) -> Vec<(String, String, u32, u32)> {
    let mut out = Vec::new();
    for re in [&*SCRIPT_CAMEL_RE, &*SCRIPT_SHORT_RE] {
        for caps in re.captures_iter(script) {
            let (Some(home), Some(away), Some(hs), Some(aw)) =
                (caps.get(1), caps.get(2), caps.get(3), caps.get(4))
            else {
                continue;
            };
            let (Ok(home_score), Ok(away_score)) = (hs.as_str().parse(), aw.as_str().parse())
            else {
                continue;
            };
            out.push((
                home.as_str().to_string(),
                away.as_str().to_string(),
                home_score,
                away_score,
            ));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_scores_with_all_separators() {
        assert_eq!(find_score("Arsenal 2 - 1 Chelsea"), Some((2, 1)));
        assert_eq!(find_score("Arsenal 2–1 Chelsea"), Some((2, 1)));
        assert_eq!(find_score("Arsenal 2:1 Chelsea"), Some((2, 1)));
        assert_eq!(find_score("no score here"), None);
    }

    #[test]
    fn split_keeps_flanking_text() {
        let (left, right, home, away) = split_at_score("Arsenal 2 - 1 Chelsea").unwrap();
        assert_eq!(left.trim(), "Arsenal");
        assert_eq!(right.trim(), "Chelsea");
        assert_eq!((home, away), (2, 1));
    }

    #[test]
    fn kickoff_cell_must_be_exact() {
        assert_eq!(kickoff_time(" 15:30 "), Some("15:30"));
        assert_eq!(kickoff_time("15:30 GMT"), None);
        assert_eq!(kickoff_time("153:0"), None);
    }

    #[test]
    fn cell_score_rejects_surrounding_text() {
        assert_eq!(cell_score("2 - 1"), Some((2, 1)));
        assert_eq!(cell_score("2 - 1 (agg)"), None);
    }

    #[test]
    fn text_scan_is_capped() {
        let text = "Alpha 1 - 0 Beta\nGamma 2 - 2 Delta\nEpsilon 3 - 1 Zeta\n";
        assert_eq!(scan_text_matches(text, 2).len(), 2);
    }

    #[test]
    fn script_scan_handles_both_key_styles() {
        let camel = r#"{"homeTeam": "Liverpool", "awayTeam": "Chelsea", "homeScore": 1, "awayScore": 1}"#;
        let short = r#"{"home": "Inter", "away": "Roma", "scoreHome": 2, "scoreAway": 0}"#;
        assert_eq!(
            scan_script_pairs(camel),
            vec![("Liverpool".to_string(), "Chelsea".to_string(), 1, 1)]
        );
        assert_eq!(
            scan_script_pairs(short),
            vec![("Inter".to_string(), "Roma".to_string(), 2, 0)]
        );
    }
}
