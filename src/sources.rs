/// Per-site scrape configuration. One entry per website; the pipeline walks
/// the registry in order instead of carrying a scraper per site.
#[derive(Debug, Clone)]
pub struct SourceConfig {
    /// Tag written into every record produced from this source.
    pub name: &'static str,
    /// League label applied when the markup does not reveal one.
    pub league_hint: &'static str,
    /// Candidate URLs, tried in order until one yields records.
    pub urls: &'static [&'static str],
    /// Class/id substrings marking likely match containers on this site.
    pub container_hints: &'static [&'static str],
}

pub const SOURCES: &[SourceConfig] = &[
    SourceConfig {
        name: "espn.com",
        league_hint: "ESPN Football",
        urls: &["https://www.espn.com/soccer/scores"],
        container_hints: &["score", "match", "game"],
    },
    SourceConfig {
        name: "bbc.com",
        league_hint: "BBC Sport",
        urls: &["https://www.bbc.com/sport/football/scores-fixtures"],
        container_hints: &["fixture", "match", "score"],
    },
    SourceConfig {
        name: "skysports.com",
        league_hint: "Sky Sports",
        urls: &["https://www.skysports.com/football-results"],
        container_hints: &["fixture", "match", "event", "score"],
    },
    SourceConfig {
        name: "livescore.com",
        league_hint: "Livescore",
        urls: &[
            "https://www.livescore.com",
            "https://www.livescore.com/en/football",
            "https://www.livescore.com/en/football/live",
            "https://www.livescore.com/en/football/fixtures",
        ],
        container_hints: &["match", "fixture", "event", "game", "score"],
    },
];
