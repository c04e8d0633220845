//! Property-based invariants over the whole pipeline.

use proptest::prelude::*;

use siterank::engine::Engine;
use siterank::model::{
    AnalysisRequest, Candidate, CustomWeights, Dimension, PriorityFactor, RiskLevel,
};
use siterank::normalize::{self, MetricSpecs, RiskSeverity};
use siterank::weights::{self, WeightPresets, SUM_TOLERANCE};

fn arb_risk() -> impl Strategy<Value = RiskLevel> {
    prop_oneof![
        Just(RiskLevel::Low),
        Just(RiskLevel::Medium),
        Just(RiskLevel::High),
    ]
}

fn arb_priority() -> impl Strategy<Value = PriorityFactor> {
    prop_oneof![
        Just(PriorityFactor::Demand),
        Just(PriorityFactor::Cost),
        Just(PriorityFactor::Logistics),
        Just(PriorityFactor::Sustainability),
        Just(PriorityFactor::Balanced),
    ]
}

prop_compose! {
    /// A complete, always-eligible candidate with raw metrics on
    /// arbitrary (finite) scales.
    fn arb_candidate(index: usize)(
        demand in -100.0..100.0f64,
        cost in -100.0..100.0f64,
        delivery in -100.0..100.0f64,
        risk in arb_risk(),
        sustainability in -100.0..100.0f64,
        population in 0u64..20_000_000,
    ) -> Candidate {
        Candidate::new(format!("site-{index:03}"), format!("Site {index}"), "Region")
            .with_demand(demand)
            .with_cost_index(cost)
            .with_delivery_feasibility(delivery)
            .with_competition_risk(risk)
            .with_sustainability(sustainability)
            .with_setup_cost(100_000.0)
            .with_service_radius_km(10.0)
            .with_categories(["general"])
            .with_population(population)
    }
}

fn arb_candidates(max: usize) -> impl Strategy<Value = Vec<Candidate>> {
    (1usize..max).prop_flat_map(|n| (0..n).map(arb_candidate).collect::<Vec<_>>())
}

fn request(priority: PriorityFactor, top_n: usize) -> AnalysisRequest {
    AnalysisRequest::new(1_000_000.0, 50.0, "general", priority).with_top_n(top_n)
}

proptest! {
    #[test]
    fn prop_builtin_presets_sum_to_one(priority in arb_priority()) {
        let presets = WeightPresets::default();
        let resolved = weights::resolve(priority, None, &presets).unwrap();
        prop_assert!((resolved.sum() - 1.0).abs() <= SUM_TOLERANCE);
    }

    #[test]
    fn prop_custom_weights_resolve_to_unit_sum(
        demand in 0.0..10.0f64,
        cost in 0.0..10.0f64,
        delivery in 0.0..10.0f64,
        competition in 0.0..10.0f64,
        sustainability in 0.01..10.0f64,
    ) {
        let custom = CustomWeights::new()
            .with_demand(demand)
            .with_cost(cost)
            .with_delivery(delivery)
            .with_competition(competition)
            .with_sustainability(sustainability);
        let resolved =
            weights::resolve(PriorityFactor::Balanced, Some(&custom), &WeightPresets::default())
                .unwrap();
        prop_assert!((resolved.sum() - 1.0).abs() <= SUM_TOLERANCE);
        for dim in Dimension::ALL {
            prop_assert!(resolved.get(dim) >= 0.0);
        }
    }

    #[test]
    fn prop_normalized_scores_bounded(candidates in arb_candidates(12)) {
        let out = normalize::normalize(&candidates, &MetricSpecs::default(), &RiskSeverity::default());
        for entry in &out {
            for dim in Dimension::ALL {
                let score = entry.dimensions.get(dim);
                prop_assert!((0.0..=10.0).contains(&score), "{} score {score}", dim.as_str());
            }
        }
    }

    #[test]
    fn prop_composite_bounded_and_ordered(
        candidates in arb_candidates(12),
        priority in arb_priority(),
    ) {
        let response = Engine::default()
            .evaluate(&candidates, &request(priority, candidates.len()))
            .unwrap();
        for pair in response.ranked.windows(2) {
            prop_assert!(pair[0].exact_score >= pair[1].exact_score - 1e-9);
        }
        for entry in &response.ranked {
            prop_assert!((0.0..=10.0 + 1e-9).contains(&entry.exact_score));
            prop_assert_eq!(
                entry.composite_score,
                (entry.exact_score * 10.0).round() / 10.0
            );
        }
    }

    #[test]
    fn prop_evaluate_is_deterministic(
        candidates in arb_candidates(10),
        priority in arb_priority(),
        top_n in 1usize..15,
    ) {
        let engine = Engine::default();
        let req = request(priority, top_n);
        let first = engine.evaluate(&candidates, &req).unwrap();
        let second = engine.evaluate(&candidates, &req).unwrap();
        prop_assert_eq!(
            serde_json::to_vec(&first).unwrap(),
            serde_json::to_vec(&second).unwrap()
        );
    }

    #[test]
    fn prop_ranking_ignores_input_order(
        candidates in arb_candidates(10),
        priority in arb_priority(),
    ) {
        let engine = Engine::default();
        let req = request(priority, candidates.len());

        let forward = engine.evaluate(&candidates, &req).unwrap();
        let mut reversed_input = candidates.clone();
        reversed_input.reverse();
        let reversed = engine.evaluate(&reversed_input, &req).unwrap();

        let f: Vec<&str> = forward.ranked.iter().map(|e| e.candidate.id.as_str()).collect();
        let r: Vec<&str> = reversed.ranked.iter().map(|e| e.candidate.id.as_str()).collect();
        prop_assert_eq!(f, r);
    }

    #[test]
    fn prop_top_n_bounds_result(
        candidates in arb_candidates(15),
        top_n in 1usize..20,
    ) {
        let response = Engine::default()
            .evaluate(&candidates, &request(PriorityFactor::Balanced, top_n))
            .unwrap();
        prop_assert!(response.ranked.len() <= top_n);
        prop_assert!(response.ranked.len() <= candidates.len());
        for (i, entry) in response.ranked.iter().enumerate() {
            prop_assert_eq!(entry.rank, i + 1);
        }
    }
}
