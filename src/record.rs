use chrono::Utc;
use serde::{Deserialize, Serialize};

pub const MAX_TEAM_NAME_LEN: usize = 40;

/// Whether a record came off a live page or out of the built-in sample tables.
/// Serialized into every export so downstream consumers never have to guess
/// from the free-text source tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Provenance {
    Scraped,
    Synthetic,
}

impl Provenance {
    pub fn label(self) -> &'static str {
        match self {
            Provenance::Scraped => "real",
            Provenance::Synthetic => "sample",
        }
    }
}

/// One scraped or synthesized match. Score fields are absent for fixtures
/// that have not kicked off yet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRecord {
    pub home_team: String,
    pub away_team: String,
    pub home_score: Option<u32>,
    pub away_score: Option<u32>,
    pub status: String,
    pub league: String,
    pub date: String,
    pub time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tv_info: Option<String>,
    pub source: String,
    pub provenance: Provenance,
    pub scraped_at: String,
}

impl MatchRecord {
    pub fn is_fixture(&self) -> bool {
        self.home_score.is_none() && self.away_score.is_none()
    }

    pub fn final_score(&self) -> String {
        match (self.home_score, self.away_score) {
            (Some(home), Some(away)) => format!("{home}-{away}"),
            _ => String::new(),
        }
    }

    /// Key the deduplicator collapses on: lowercased teams plus the score
    /// pair, or the kickoff time when no score exists yet.
    pub fn composite_key(&self) -> String {
        let tail = match (self.home_score, self.away_score) {
            (Some(home), Some(away)) => format!("{home}-{away}"),
            _ => self.time.clone(),
        };
        format!(
            "{}|{}|{}",
            self.home_team.to_lowercase(),
            self.away_team.to_lowercase(),
            tail
        )
    }

    pub fn is_self_match(&self) -> bool {
        self.home_team.eq_ignore_ascii_case(&self.away_team)
    }
}

pub fn capture_timestamp() -> String {
    Utc::now().format("%Y-%m-%dT%H:%M:%S").to_string()
}

pub fn display_date() -> String {
    Utc::now().format("%Y-%m-%d").to_string()
}

pub fn display_time() -> String {
    Utc::now().format("%H:%M").to_string()
}
