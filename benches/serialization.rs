use chrono::{TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde::Serialize;
use serde_omitjson::{omitempty, to_string, to_string_pretty, to_value, Timestamp};

#[derive(Serialize, Clone)]
struct User {
    id: u32,
    name: String,
    email: String,
    active: bool,
}

#[derive(Serialize, Clone)]
struct Event {
    id: u64,
    kind: String,
    #[serde(with = "omitempty")]
    started_at: Timestamp,
    #[serde(with = "omitempty")]
    finished_at: Timestamp,
    #[serde(with = "omitempty")]
    note: Option<String>,
    tags: Vec<String>,
}

fn user() -> User {
    User {
        id: 123,
        name: "Alice".to_string(),
        email: "alice@example.com".to_string(),
        active: true,
    }
}

fn events(size: usize) -> Vec<Event> {
    let start = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
    (0..size)
        .map(|i| Event {
            id: i as u64,
            kind: "deploy".to_string(),
            started_at: Timestamp::from(start),
            finished_at: if i % 2 == 0 {
                Timestamp::unset()
            } else {
                Timestamp::from(start)
            },
            note: None,
            tags: vec!["prod".to_string()],
        })
        .collect()
}

fn benchmark_serialize_simple(c: &mut Criterion) {
    let user = user();
    c.bench_function("serialize_simple_struct", |b| {
        b.iter(|| to_string(black_box(&user)))
    });
}

fn benchmark_serialize_omitting(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize_events");

    for size in [10, 100, 1000].iter() {
        let data = events(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| to_string(black_box(&data)))
        });
    }
    group.finish();
}

fn benchmark_pretty(c: &mut Criterion) {
    let data = events(100);
    c.bench_function("serialize_events_pretty", |b| {
        b.iter(|| to_string_pretty(black_box(&data)))
    });
}

fn benchmark_to_value(c: &mut Criterion) {
    let data = events(100);
    c.bench_function("events_to_value", |b| b.iter(|| to_value(black_box(&data))));
}

fn benchmark_comparison(c: &mut Criterion) {
    let users: Vec<User> = (0..100).map(|_| user()).collect();
    let mut group = c.benchmark_group("comparison");

    group.bench_function("omitjson_serialize", |b| {
        b.iter(|| to_string(black_box(&users)))
    });

    group.bench_function("serde_json_serialize", |b| {
        b.iter(|| serde_json::to_string(black_box(&users)))
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_serialize_simple,
    benchmark_serialize_omitting,
    benchmark_pretty,
    benchmark_to_value,
    benchmark_comparison
);
criterion_main!(benches);
