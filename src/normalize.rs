use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::record::MAX_TEAM_NAME_LEN;

/// Canonical expansions for the shorthand the sports sites use. Values are
/// never keys themselves, which keeps normalization idempotent.
static ABBREVIATIONS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("Man City", "Manchester City"),
        ("Man Utd", "Manchester United"),
        ("Man United", "Manchester United"),
        ("Spurs", "Tottenham Hotspur"),
        ("Wolves", "Wolverhampton Wanderers"),
        ("Forest", "Nottingham Forest"),
        ("Barca", "Barcelona"),
        ("Atletico", "Atletico Madrid"),
        ("Inter", "Inter Milan"),
        ("Dortmund", "Borussia Dortmund"),
        ("Leverkusen", "Bayer Leverkusen"),
    ])
});

/// Canonical display form of a raw team-name fragment. Pure and total: any
/// input maps to some string, the empty string included. Callers enforce the
/// minimum-length floor.
pub fn normalize_team_name(raw: &str) -> String {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect();
    let collapsed = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");
    let expanded = ABBREVIATIONS
        .get(collapsed.as_str())
        .map(|full| (*full).to_string())
        .unwrap_or(collapsed);
    truncate_chars(&expanded, MAX_TEAM_NAME_LEN)
        .trim_end()
        .to_string()
}

fn truncate_chars(value: &str, max: usize) -> &str {
    match value.char_indices().nth(max) {
        Some((idx, _)) => &value[..idx],
        None => value,
    }
}
