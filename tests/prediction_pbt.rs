use oracle_core::{miners, scoring, rewards, CATALOG};
use oracle_data::{ClimateConditions, ClimateSynapse, GroundTruth, MinerPrediction, TaskType};
use proptest::prelude::*;

fn synapse(location: String, season: String, enso: String, seed: u64) -> ClimateSynapse {
    ClimateSynapse {
        task_type: TaskType::ShortTermForecast,
        location,
        target_date: "2026-02-25".to_string(),
        forecast_horizon_days: 7,
        variables: vec!["temperature".to_string()],
        conditions: ClimateConditions::new(&season, &enso),
        random_seed: Some(seed),
    }
}

fn prediction(temp: f64, precip: f64, risk: f64, latency: f64) -> MinerPrediction {
    MinerPrediction {
        miner_uid: 1,
        miner_hotkey: "5Fprop".to_string(),
        predicted_temp_celsius: temp,
        predicted_precip_mm: precip,
        predicted_humidity_pct: 70.0,
        predicted_wind_kmh: 12.0,
        risk_index: risk,
        confidence: 0.8,
        risk_factors: Vec::new(),
        response_time_ms: latency,
        data_sources: 6,
    }
}

fn arb_location() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Jakarta, Indonesia".to_string()),
        Just("Miami, Florida".to_string()),
        Just("Sahel Region, Africa".to_string()),
        Just("Nowhere, Atlantis".to_string()),
    ]
}

fn arb_season() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("monsoon_peak".to_string()),
        Just("hurricane_peak".to_string()),
        Just("winter".to_string()),
        Just("unheard_of_season".to_string()),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_generated_predictions_stay_in_range(
        seed in 0u64..1_000_000,
        location in arb_location(),
        season in arb_season(),
    ) {
        let synapse = synapse(location, season, "neutral".to_string(), seed);
        let responses = miners::generate_responses(
            TaskType::ShortTermForecast,
            &synapse,
            None,
            &CATALOG,
            6,
        );

        prop_assert_eq!(responses.len(), 6);
        for miner in &responses {
            prop_assert!((0.0..=1.0).contains(&miner.predicted_risk_index));
            prop_assert!(miner.predicted_precip_mm >= 0.0);
            prop_assert!((10.0..=100.0).contains(&miner.predicted_humidity_pct));
            prop_assert!(miner.predicted_wind_kmh >= 0.0);
            prop_assert!((0.0..=1.0).contains(&miner.confidence));
            prop_assert!(miner.score > 0.0 && miner.score < 1.0);
        }
    }

    #[test]
    fn prop_score_components_bounded(
        temp in -10.0f64..50.0,
        precip in 0.0f64..500.0,
        risk in 0.0f64..1.0,
        latency in 0.0f64..20_000.0,
        actual_temp in -10.0f64..50.0,
        actual_precip in 0.0f64..500.0,
        actual_risk in 0.0f64..1.0,
        extreme in any::<bool>(),
    ) {
        let truth = GroundTruth {
            actual_temp_celsius: actual_temp,
            actual_precip_mm: actual_precip,
            actual_risk_index: actual_risk,
            had_extreme_event: extreme,
            extreme_event_type: None,
        };
        let score = scoring::score_prediction(&prediction(temp, precip, risk, latency), &truth);

        prop_assert!((0.0..=1.0).contains(&score.temp_accuracy));
        prop_assert!((0.0..=1.0).contains(&score.precip_accuracy));
        prop_assert!((0.0..=1.0).contains(&score.risk_accuracy));
        prop_assert!((0.0..=1.0).contains(&score.latency_score));
        prop_assert!((0.0..=1.0).contains(&score.consistency));
        prop_assert!((0.0..=1.0).contains(&score.final_score));
    }

    #[test]
    fn prop_closer_temperature_never_scores_worse(
        actual in 0.0f64..40.0,
        near in 0.0f64..4.9,
        margin in 0.1f64..10.0,
    ) {
        let truth = GroundTruth {
            actual_temp_celsius: actual,
            actual_precip_mm: 100.0,
            actual_risk_index: 0.5,
            had_extreme_event: false,
            extreme_event_type: None,
        };
        let closer = scoring::score_prediction(
            &prediction(actual + near, 100.0, 0.5, 1000.0),
            &truth,
        );
        let farther = scoring::score_prediction(
            &prediction(actual + near + margin, 100.0, 0.5, 1000.0),
            &truth,
        );
        prop_assert!(closer.temp_accuracy >= farther.temp_accuracy);
    }

    #[test]
    fn prop_allocation_conserves_pool(
        scores in prop::collection::vec((1u64..100, 0.01f64..1.0), 1..12),
        pool in 0.01f64..10.0,
    ) {
        let shares = rewards::allocate(&scores, pool);
        let distributed: f64 = shares.iter().map(|(_, amount)| amount).sum();
        // 6-dp rounding per share bounds the drift.
        let tolerance = 1e-6 * scores.len() as f64;
        prop_assert!(
            (distributed - pool).abs() <= tolerance,
            "distributed {} vs pool {}", distributed, pool
        );
    }
}
