//! Performance benchmarks for aggregation and report building
//!
//! This keeps grouping and report composition linear in practice as the
//! record count grows

use chrono::{Days, NaiveDate};
use criterion::{criterion_group, criterion_main, Criterion};
use roimap::{aggregate_by_key, build_report, GroupKey, Record, ReportOptions};
use std::hint::black_box;

fn create_test_records(size: usize) -> Vec<Record> {
    let campaigns = ["email", "search", "social", "display", "affiliate"];
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

    (0..size)
        .map(|i| {
            let cost = 50.0 + (i % 97) as f64;
            let revenue = 40.0 + (i % 113) as f64 * 1.5;
            Record::new(cost, revenue)
                .with_campaign(campaigns[i % campaigns.len()])
                .with_conversions((i % 23) as u64)
                .with_date(start + Days::new((i % 30) as u64))
        })
        .collect()
}

fn bench_aggregate_by_campaign(c: &mut Criterion) {
    for size in [1_000, 10_000] {
        let records = create_test_records(size);
        c.bench_function(&format!("aggregate_by_campaign_{}", size), |b| {
            b.iter(|| aggregate_by_key(black_box(&records), |r| r.campaign.clone()));
        });
    }
}

fn bench_aggregate_by_date(c: &mut Criterion) {
    let records = create_test_records(10_000);
    c.bench_function("aggregate_by_date_10000", |b| {
        b.iter(|| aggregate_by_key(black_box(&records), |r| r.date));
    });
}

fn bench_build_report(c: &mut Criterion) {
    for size in [1_000, 10_000] {
        let records = create_test_records(size);
        let options = ReportOptions::default();
        c.bench_function(&format!("build_report_{}", size), |b| {
            b.iter(|| build_report(black_box(&records), &options));
        });
    }
}

fn bench_build_report_annualized(c: &mut Criterion) {
    let records = create_test_records(10_000);
    let options = ReportOptions {
        group_by: GroupKey::Campaign,
        holding_period_days: Some(90.0),
    };
    c.bench_function("build_report_annualized_10000", |b| {
        b.iter(|| build_report(black_box(&records), &options));
    });
}

criterion_group!(
    benches,
    bench_aggregate_by_campaign,
    bench_aggregate_by_date,
    bench_build_report,
    bench_build_report_annualized
);

criterion_main!(benches);
