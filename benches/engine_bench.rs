//! Criterion benchmarks over synthetic candidate sets.
//!
//! Candidates are generated deterministically (no RNG) so runs are
//! comparable across machines and revisions.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use siterank::engine::Engine;
use siterank::model::{AnalysisRequest, Candidate, PriorityFactor, RiskLevel};

fn synthetic_candidates(n: usize) -> Vec<Candidate> {
    (0..n)
        .map(|i| {
            let phase = i as f64;
            let risk = match i % 3 {
                0 => RiskLevel::Low,
                1 => RiskLevel::Medium,
                _ => RiskLevel::High,
            };
            Candidate::new(format!("site-{i:05}"), format!("Site {i}"), "Bench Region")
                .with_demand(5.0 + 4.0 * (phase * 0.7).sin())
                .with_cost_index(5.0 + 4.0 * (phase * 1.3).cos())
                .with_delivery_feasibility(5.0 + 4.0 * (phase * 0.4).sin())
                .with_competition_risk(risk)
                .with_sustainability(5.0 + 4.0 * (phase * 2.1).cos())
                .with_setup_cost(400_000.0 + 50_000.0 * ((i % 17) as f64))
                .with_service_radius_km(10.0 + (i % 40) as f64)
                .with_categories(["general"])
                .with_population(100_000 + (i as u64 * 37) % 5_000_000)
        })
        .collect()
}

fn bench_evaluate(c: &mut Criterion) {
    let engine = Engine::default();
    let request = AnalysisRequest::new(1_200_000.0, 45.0, "general", PriorityFactor::Demand);

    let mut group = c.benchmark_group("evaluate");
    for size in [100, 1_000, 10_000] {
        let candidates = synthetic_candidates(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &candidates, |b, cands| {
            b.iter(|| engine.evaluate(black_box(cands), black_box(&request)).unwrap());
        });
    }
    group.finish();
}

fn bench_stages(c: &mut Criterion) {
    use siterank::normalize::{self, MetricSpecs, RiskSeverity};

    let candidates = synthetic_candidates(1_000);
    let specs = MetricSpecs::default();
    let severity = RiskSeverity::default();

    c.bench_function("normalize_1000", |b| {
        b.iter(|| normalize::normalize(black_box(&candidates), &specs, &severity));
    });
}

criterion_group!(benches, bench_evaluate, bench_stages);
criterion_main!(benches);
