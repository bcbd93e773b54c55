use chrono::{TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use datumvinder::{find_duration, find_first_time};

fn benchmark_duration(c: &mut Criterion) {
	c.bench_function("Duration at start", |b| {
		b.iter(|| find_duration(black_box("5 days 3 hours 10 minutes")))
	});
}

fn benchmark_duration_late(c: &mut Criterion) {
	c.bench_function("Duration late in sentence", |b| {
		b.iter(|| {
			find_duration(black_box(
				"zou je me eraan willen herinneren over 5 dagen, 3 uur en 10 minuten",
			))
		})
	});
}

fn benchmark_duration_absent(c: &mut Criterion) {
	c.bench_function("Duration absent", |b| {
		b.iter(|| find_duration(black_box("there are 4 apples and 12 pears in the basket")))
	});
}

fn benchmark_clock(c: &mut Criterion) {
	let now = Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap();
	c.bench_function("Clock time", |b| {
		b.iter(|| find_first_time(black_box("we vertrekken om 14:30"), now))
	});
}

criterion_group!(
	benches,
	benchmark_duration,
	benchmark_duration_late,
	benchmark_duration_absent,
	benchmark_clock
);
criterion_main!(benches);
