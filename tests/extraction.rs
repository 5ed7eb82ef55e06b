use std::fs;
use std::path::PathBuf;

use matchday_scrape::dedup::dedup_records;
use matchday_scrape::extract::extract_records;
use matchday_scrape::record::{MatchRecord, Provenance};
use matchday_scrape::sources::{SOURCES, SourceConfig};

fn read_fixture(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    fs::read_to_string(path).expect("fixture file should be readable")
}

fn test_source() -> &'static SourceConfig {
    &SOURCES[0]
}

fn scrape_fixture(name: &str) -> Vec<MatchRecord> {
    let markup = read_fixture(name);
    dedup_records(extract_records(&markup, test_source()))
}

fn find<'a>(batch: &'a [MatchRecord], home: &str, away: &str) -> Vec<&'a MatchRecord> {
    batch
        .iter()
        .filter(|r| r.home_team == home && r.away_team == away)
        .collect()
}

#[test]
fn match_container_yields_structured_record() {
    let batch = scrape_fixture("scores_page.html");
    let hits = find(&batch, "Arsenal", "Chelsea");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].home_score, Some(2));
    assert_eq!(hits[0].away_score, Some(1));
}

#[test]
fn overlapping_heuristics_collapse_to_one_record() {
    // "Liverpool 1 - 1 Chelsea" appears in a score container, in the page
    // text, and in a script payload; after dedup there is exactly one copy.
    let batch = scrape_fixture("scores_page.html");
    let hits = find(&batch, "Liverpool", "Chelsea");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].home_score, Some(1));
    assert_eq!(hits[0].away_score, Some(1));
}

#[test]
fn self_match_is_excluded() {
    let batch = scrape_fixture("scores_page.html");
    assert!(batch.iter().all(|r| !r.is_self_match()));
    assert!(find(&batch, "Arsenal", "Arsenal").is_empty());
}

#[test]
fn table_rows_yield_fixture_and_result() {
    let batch = scrape_fixture("scores_page.html");

    let fixture = find(&batch, "Everton", "Fulham");
    assert_eq!(fixture.len(), 1);
    assert!(fixture[0].is_fixture());
    assert_eq!(fixture[0].time, "15:30");
    assert_eq!(fixture[0].status, "Scheduled");

    let result = find(&batch, "Brentford", "Burnley");
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].home_score, Some(3));
    assert_eq!(result[0].away_score, Some(0));
}

#[test]
fn data_attribute_json_is_parsed_and_malformed_json_is_skipped() {
    // The malformed data-match sibling must not disturb the valid one.
    let batch = scrape_fixture("scores_page.html");
    let hits = find(&batch, "Real Madrid", "Getafe");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].home_score, Some(2));
    assert_eq!(hits[0].away_score, Some(0));
    assert_eq!(hits[0].status, "FT");
    assert_eq!(hits[0].league, "La Liga");
}

#[test]
fn script_scan_handles_alternate_key_names() {
    let markup = r#"<html><body>
      <script>var matchState = {"home": "Inter Milan", "away": "AS Roma", "scoreHome": 2, "scoreAway": 0};</script>
    </body></html>"#;
    let batch = dedup_records(extract_records(markup, test_source()));
    let hits = find(&batch, "Inter Milan", "AS Roma");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].home_score, Some(2));
    assert_eq!(hits[0].status, "Live");
}

#[test]
fn malformed_markup_yields_no_records_without_panicking() {
    for markup in [
        "",
        "<<<<>>>> not html",
        "<html><body><div class=\"match\">x</div></body></html>",
        "<table><tr><td>1</td></tr>",
    ] {
        let batch = extract_records(markup, test_source());
        assert!(batch.is_empty(), "unexpected records from {markup:?}");
    }
}

#[test]
fn records_carry_source_tag_and_scraped_provenance() {
    let batch = scrape_fixture("scores_page.html");
    assert!(!batch.is_empty());
    assert!(batch.iter().all(|r| r.source == test_source().name));
    assert!(batch.iter().all(|r| r.provenance == Provenance::Scraped));
    assert!(batch.iter().all(|r| !r.scraped_at.is_empty()));
}

#[test]
fn team_names_respect_length_bounds() {
    let batch = scrape_fixture("scores_page.html");
    for record in &batch {
        assert!(record.home_team.chars().count() <= 40);
        assert!(record.away_team.chars().count() <= 40);
        assert!(record.home_team.len() > 2);
        assert!(record.away_team.len() > 2);
    }
}
