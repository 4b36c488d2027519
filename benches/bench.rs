// Criterion benchmarks for the Reclaim matching engine

use chrono::Utc;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use reclaim_algo::core::{distance_meters, score_pair, Matcher};
use reclaim_algo::models::{GeoPoint, Report, ReportStatus, ReportType, ScoringPoints};
use serde_json::{Map, Value};

const METERS_PER_DEG_LAT: f64 = 111_195.0;
const ORIGIN_LAT: f64 = 40.7128;
const ORIGIN_LON: f64 = -74.0060;

fn create_candidate(id: usize) -> Report {
    let mut attributes = Map::new();
    attributes.insert(
        "color".to_string(),
        Value::String(if id % 2 == 0 { "Brown" } else { "Black" }.to_string()),
    );
    attributes.insert(
        "brand".to_string(),
        Value::String(if id % 3 == 0 { "Gucci" } else { "Fossil" }.to_string()),
    );

    Report {
        id: id as i64 + 2,
        reporter_id: id as i64,
        report_type: ReportType::Lost,
        category_id: 1,
        title: format!("Lost wallet number {}", id),
        description: "Brown leather wallet, last seen at the park".to_string(),
        attributes,
        images: vec![],
        location: Some(GeoPoint {
            latitude: ORIGIN_LAT + (id as f64 * 25.0) / METERS_PER_DEG_LAT,
            longitude: ORIGIN_LON,
        }),
        status: ReportStatus::Pending,
        created_at: Utc::now(),
    }
}

fn create_source() -> Report {
    let mut attributes = Map::new();
    attributes.insert("color".to_string(), Value::String("Brown".to_string()));
    attributes.insert("brand".to_string(), Value::String("Gucci".to_string()));

    Report {
        id: 1,
        reporter_id: 1,
        report_type: ReportType::Found,
        category_id: 1,
        title: "Found wallet near park".to_string(),
        description: "Brown leather wallet with card slots".to_string(),
        attributes,
        images: vec![],
        location: Some(GeoPoint {
            latitude: ORIGIN_LAT,
            longitude: ORIGIN_LON,
        }),
        status: ReportStatus::Pending,
        created_at: Utc::now(),
    }
}

fn bench_distance(c: &mut Criterion) {
    let a = GeoPoint {
        latitude: ORIGIN_LAT,
        longitude: ORIGIN_LON,
    };
    let b = GeoPoint {
        latitude: 40.72,
        longitude: -74.01,
    };

    c.bench_function("distance_meters", |bencher| {
        bencher.iter(|| distance_meters(black_box(&a), black_box(&b)));
    });
}

fn bench_score_pair(c: &mut Criterion) {
    let source = create_source();
    let candidate = create_candidate(0);
    let points = ScoringPoints::default();

    c.bench_function("score_pair", |bencher| {
        bencher.iter(|| score_pair(black_box(&source), black_box(&candidate), &points));
    });
}

fn bench_find_matches(c: &mut Criterion) {
    let matcher = Matcher::with_defaults();
    let source = create_source();

    let mut group = c.benchmark_group("find_matches");
    for size in [100usize, 1000, 5000] {
        let candidates: Vec<Report> = (0..size).map(create_candidate).collect();

        group.bench_with_input(
            BenchmarkId::from_parameter(size),
            &candidates,
            |bencher, candidates| {
                bencher.iter(|| {
                    matcher.find_matches(black_box(&source), candidates.clone(), 100)
                });
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_distance,
    bench_score_pair,
    bench_find_matches
);
criterion_main!(benches);
