use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use matchday_scrape::dedup::dedup_records;
use matchday_scrape::extract::extract_records;
use matchday_scrape::normalize::normalize_team_name;
use matchday_scrape::sources::SOURCES;

const SCORES_PAGE: &str = include_str!("../tests/fixtures/scores_page.html");

fn bench_extract(c: &mut Criterion) {
    c.bench_function("extract_records", |b| {
        b.iter(|| {
            let records = extract_records(black_box(SCORES_PAGE), &SOURCES[0]);
            black_box(records.len())
        })
    });
}

fn bench_extract_dedup(c: &mut Criterion) {
    c.bench_function("extract_and_dedup", |b| {
        b.iter(|| {
            let records = extract_records(black_box(SCORES_PAGE), &SOURCES[0]);
            black_box(dedup_records(records).len())
        })
    });
}

fn bench_normalize(c: &mut Criterion) {
    c.bench_function("normalize_team_name", |b| {
        b.iter(|| black_box(normalize_team_name(black_box("  Man City *** FC  "))))
    });
}

criterion_group!(benches, bench_extract, bench_extract_dedup, bench_normalize);
criterion_main!(benches);
