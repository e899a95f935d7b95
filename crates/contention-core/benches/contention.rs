use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

use contention_core::{AnalyzerConfig, ContentionAnalyzer, Mentorship, Participant, Schedule};

/// Deterministic spread of evening calls over a 4-week cycle, with a fixed share
/// left unscheduled.
fn mentorships(n: usize) -> Vec<Mentorship> {
    (0..n)
        .map(|i| {
            let k = i as i32;
            let schedule = (i % 10 != 0).then(|| {
                Schedule::new(k % 4, k % 7, 18 + k % 4, (k % 4) * 15)
            });
            Mentorship {
                id: format!("m{i}"),
                mentee: Participant::new(format!("mentee{i}"), None),
                mentor: Participant::new(format!("mentor{i}"), None),
                schedule,
            }
        })
        .collect()
}

fn bench_contention(c: &mut Criterion) {
    let analyzer = ContentionAnalyzer::new(&AnalyzerConfig::default()).unwrap();
    let mut group = c.benchmark_group("contention");

    for n in [100usize, 1_000, 10_000] {
        let ms = mentorships(n);

        group.bench_with_input(BenchmarkId::new("histogram", n), &ms, |b, ms| {
            b.iter(|| analyzer.histogram(black_box(ms)))
        });

        let histogram = analyzer.histogram(&ms);
        group.bench_with_input(BenchmarkId::new("rank", n), &ms, |b, ms| {
            b.iter(|| analyzer.rank(black_box(ms), black_box(&histogram)).len())
        });

        group.bench_with_input(BenchmarkId::new("report", n), &ms, |b, ms| {
            b.iter(|| analyzer.report(black_box(ms)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_contention);
criterion_main!(benches);
