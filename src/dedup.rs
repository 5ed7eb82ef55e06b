use std::collections::HashSet;

use crate::record::MatchRecord;

/// Collapse records sharing a composite key, keeping first-seen order.
/// Self-matches are dropped outright and never claim a key, so a malformed
/// record cannot shadow a later legitimate one.
pub fn dedup_records(records: Vec<MatchRecord>) -> Vec<MatchRecord> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut out = Vec::new();

    for record in records {
        if record.is_self_match() {
            continue;
        }
        if seen.insert(record.composite_key()) {
            out.push(record);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{MatchRecord, Provenance};

    fn record(home: &str, away: &str, score: Option<(u32, u32)>, time: &str) -> MatchRecord {
        MatchRecord {
            home_team: home.to_string(),
            away_team: away.to_string(),
            home_score: score.map(|(h, _)| h),
            away_score: score.map(|(_, a)| a),
            status: if score.is_some() { "FT" } else { "Scheduled" }.to_string(),
            league: "Premier League".to_string(),
            date: "2026-08-26".to_string(),
            time: time.to_string(),
            tv_info: None,
            source: "test".to_string(),
            provenance: Provenance::Scraped,
            scraped_at: "2026-08-26T12:00:00".to_string(),
        }
    }

    #[test]
    fn keeps_first_seen_order() {
        let batch = vec![
            record("Arsenal", "Chelsea", Some((2, 1)), "15:00"),
            record("Liverpool", "Everton", Some((1, 0)), "15:00"),
            record("arsenal", "CHELSEA", Some((2, 1)), "15:00"),
        ];
        let out = dedup_records(batch);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].home_team, "Arsenal");
        assert_eq!(out[1].home_team, "Liverpool");
    }

    #[test]
    fn same_teams_different_scores_are_distinct() {
        let batch = vec![
            record("Arsenal", "Chelsea", Some((2, 1)), "15:00"),
            record("Arsenal", "Chelsea", Some((2, 2)), "15:00"),
        ];
        assert_eq!(dedup_records(batch).len(), 2);
    }

    #[test]
    fn fixtures_dedup_on_kickoff_time() {
        let batch = vec![
            record("Arsenal", "Chelsea", None, "15:00"),
            record("Arsenal", "Chelsea", None, "15:00"),
            record("Arsenal", "Chelsea", None, "19:45"),
        ];
        assert_eq!(dedup_records(batch).len(), 2);
    }

    #[test]
    fn self_matches_never_survive_or_claim_keys() {
        let batch = vec![
            record("Arsenal", "arsenal", Some((2, 1)), "15:00"),
            record("Arsenal", "Chelsea", Some((2, 1)), "15:00"),
        ];
        let out = dedup_records(batch);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].away_team, "Chelsea");
    }

    #[test]
    fn no_duplicate_keys_in_output() {
        let batch = vec![
            record("A Team", "B Team", Some((1, 1)), "15:00"),
            record("a team", "b team", Some((1, 1)), "16:00"),
            record("C Team", "C Team", Some((0, 0)), "15:00"),
            record("A Team", "B Team", None, "15:00"),
        ];
        let out = dedup_records(batch);
        let keys: HashSet<String> = out.iter().map(|r| r.composite_key()).collect();
        assert_eq!(keys.len(), out.len());
        assert!(out.iter().all(|r| !r.is_self_match()));
    }
}
