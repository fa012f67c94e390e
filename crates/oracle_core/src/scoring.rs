//! Prediction scoring.
//!
//! The weighted formula:
//!
//! ```text
//! final = 0.40*temp + 0.25*precip + 0.15*risk + 0.10*latency + 0.10*consistency
//! ```
//!
//! multiplied by 1.5 when the miner called an extreme event that
//! actually happened, clamped to 1.0. Component accuracies decay
//! linearly with absolute error over a per-variable tolerance band.

use oracle_data::{GroundTruth, MinerPrediction, ScoreBreakdown};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::rng::hotkey_rng;
use crate::round_dp;

pub const WEIGHT_TEMP: f64 = 0.40;
pub const WEIGHT_PRECIP: f64 = 0.25;
pub const WEIGHT_RISK: f64 = 0.15;
pub const WEIGHT_LATENCY: f64 = 0.10;
pub const WEIGHT_CONSISTENCY: f64 = 0.10;

/// Error tolerances: accuracy hits zero at these absolute deviations.
pub const TEMP_TOLERANCE_C: f64 = 5.0;
pub const PRECIP_TOLERANCE_MM: f64 = 200.0;
pub const RISK_TOLERANCE: f64 = 0.5;
pub const LATENCY_CEILING_MS: f64 = 10_000.0;

/// Risk level above which a prediction counts as calling an extreme
/// event.
pub const EXTREME_CALL_THRESHOLD: f64 = 0.6;
pub const EXTREME_BONUS_MULTIPLIER: f64 = 1.5;

fn linear_accuracy(predicted: f64, actual: f64, tolerance: f64) -> f64 {
    round_dp((1.0 - (predicted - actual).abs() / tolerance).max(0.0), 4)
}

fn weighted_sum(
    temp: f64,
    precip: f64,
    risk: f64,
    latency: f64,
    consistency: f64,
) -> f64 {
    WEIGHT_TEMP * temp
        + WEIGHT_PRECIP * precip
        + WEIGHT_RISK * risk
        + WEIGHT_LATENCY * latency
        + WEIGHT_CONSISTENCY * consistency
}

/// Scores one prediction against a known outcome.
///
/// Consistency stands in for an exponential moving average over past
/// rounds; it is drawn from a generator seeded by a stable hash of
/// the miner's hotkey, so a given miner always carries the same
/// consistency value.
#[must_use]
pub fn score_prediction(prediction: &MinerPrediction, truth: &GroundTruth) -> ScoreBreakdown {
    let temp_accuracy = linear_accuracy(
        prediction.predicted_temp_celsius,
        truth.actual_temp_celsius,
        TEMP_TOLERANCE_C,
    );
    let precip_accuracy = linear_accuracy(
        prediction.predicted_precip_mm,
        truth.actual_precip_mm,
        PRECIP_TOLERANCE_MM,
    );
    let risk_accuracy = linear_accuracy(
        prediction.risk_index,
        truth.actual_risk_index,
        RISK_TOLERANCE,
    );
    let latency_score = round_dp(
        (1.0 - prediction.response_time_ms / LATENCY_CEILING_MS).max(0.0),
        4,
    );
    let consistency = round_dp(
        hotkey_rng(&prediction.miner_hotkey).gen_range(0.65..0.95),
        4,
    );

    let extreme_event_bonus =
        prediction.risk_index > EXTREME_CALL_THRESHOLD && truth.had_extreme_event;

    let mut final_score = weighted_sum(
        temp_accuracy,
        precip_accuracy,
        risk_accuracy,
        latency_score,
        consistency,
    );
    if extreme_event_bonus {
        final_score *= EXTREME_BONUS_MULTIPLIER;
    }
    let final_score = round_dp(final_score.min(1.0), 4);

    ScoreBreakdown {
        temp_accuracy,
        precip_accuracy,
        risk_accuracy,
        latency_score,
        consistency,
        extreme_event_bonus,
        final_score,
    }
}

/// Estimated scoring for near-term challenges, where no ground truth
/// exists yet. Components are drawn from fixed uniform ranges; the
/// extreme-event bonus path is unavailable.
#[must_use]
pub fn estimated_score(rng: &mut ChaCha8Rng) -> ScoreBreakdown {
    let temp_accuracy = round_dp(rng.gen_range(0.5..0.95), 4);
    let precip_accuracy = round_dp(rng.gen_range(0.3..0.9), 4);
    let risk_accuracy = round_dp(rng.gen_range(0.4..0.85), 4);
    let latency_score = round_dp(rng.gen_range(0.7..0.99), 4);
    let consistency = round_dp(rng.gen_range(0.6..0.92), 4);

    let final_score = round_dp(
        weighted_sum(
            temp_accuracy,
            precip_accuracy,
            risk_accuracy,
            latency_score,
            consistency,
        ),
        4,
    );

    ScoreBreakdown {
        temp_accuracy,
        precip_accuracy,
        risk_accuracy,
        latency_score,
        consistency,
        extreme_event_bonus: false,
        final_score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::engine_rng;

    fn prediction(temp: f64, precip: f64, risk: f64, latency_ms: f64) -> MinerPrediction {
        MinerPrediction {
            miner_uid: 7,
            miner_hotkey: "5FGCpT9xP".to_string(),
            predicted_temp_celsius: temp,
            predicted_precip_mm: precip,
            predicted_humidity_pct: 80.0,
            predicted_wind_kmh: 14.0,
            risk_index: risk,
            confidence: 0.9,
            risk_factors: Vec::new(),
            response_time_ms: latency_ms,
            data_sources: 10,
        }
    }

    fn truth(temp: f64, precip: f64, risk: f64, extreme: bool) -> GroundTruth {
        GroundTruth {
            actual_temp_celsius: temp,
            actual_precip_mm: precip,
            actual_risk_index: risk,
            had_extreme_event: extreme,
            extreme_event_type: None,
        }
    }

    #[test]
    fn test_perfect_prediction_components() {
        let score = score_prediction(
            &prediction(29.4, 185.0, 0.5, 0.0),
            &truth(29.4, 185.0, 0.5, false),
        );
        assert_eq!(score.temp_accuracy, 1.0);
        assert_eq!(score.precip_accuracy, 1.0);
        assert_eq!(score.risk_accuracy, 1.0);
        assert_eq!(score.latency_score, 1.0);
        assert!(!score.extreme_event_bonus);
    }

    #[test]
    fn test_temp_accuracy_monotonic_and_saturating() {
        let gt = truth(30.0, 100.0, 0.5, false);
        let mut last = -1.0;
        for delta in [5.0, 4.0, 2.5, 1.0, 0.5, 0.0] {
            let score = score_prediction(&prediction(30.0 + delta, 100.0, 0.5, 1000.0), &gt);
            assert!(
                score.temp_accuracy > last || (delta == 0.0 && score.temp_accuracy == 1.0),
                "accuracy not increasing at delta {delta}"
            );
            assert!((0.0..=1.0).contains(&score.temp_accuracy));
            last = score.temp_accuracy;
        }
        // Beyond the tolerance band accuracy floors at zero.
        let far = score_prediction(&prediction(50.0, 100.0, 0.5, 1000.0), &gt);
        assert_eq!(far.temp_accuracy, 0.0);
    }

    #[test]
    fn test_extreme_bonus_multiplies_weighted_sum() {
        let with_event = score_prediction(
            &prediction(28.0, 120.0, 0.9, 2000.0),
            &truth(29.0, 140.0, 0.8, true),
        );
        assert!(with_event.extreme_event_bonus);

        let raw = WEIGHT_TEMP * with_event.temp_accuracy
            + WEIGHT_PRECIP * with_event.precip_accuracy
            + WEIGHT_RISK * with_event.risk_accuracy
            + WEIGHT_LATENCY * with_event.latency_score
            + WEIGHT_CONSISTENCY * with_event.consistency;
        let expected = round_dp((raw * EXTREME_BONUS_MULTIPLIER).min(1.0), 4);
        assert_eq!(with_event.final_score, expected);
    }

    #[test]
    fn test_bonus_gated_on_both_conditions() {
        // Event happened but the miner did not call it.
        let missed = score_prediction(
            &prediction(28.0, 120.0, 0.4, 2000.0),
            &truth(29.0, 140.0, 0.8, true),
        );
        assert!(!missed.extreme_event_bonus);
        // Miner called it but nothing happened.
        let false_alarm = score_prediction(
            &prediction(28.0, 120.0, 0.9, 2000.0),
            &truth(29.0, 140.0, 0.8, false),
        );
        assert!(!false_alarm.extreme_event_bonus);
    }

    #[test]
    fn test_consistency_stable_per_hotkey() {
        let gt = truth(29.0, 140.0, 0.5, false);
        let a = score_prediction(&prediction(28.0, 120.0, 0.5, 2000.0), &gt);
        let b = score_prediction(&prediction(31.0, 180.0, 0.6, 500.0), &gt);
        assert_eq!(a.consistency, b.consistency);
        assert!((0.65..=0.95).contains(&a.consistency));
    }

    #[test]
    fn test_estimated_score_has_no_bonus() {
        let mut rng = engine_rng(12345);
        for _ in 0..32 {
            let score = estimated_score(&mut rng);
            assert!(!score.extreme_event_bonus);
            assert!((0.0..=1.0).contains(&score.final_score));
            assert!((0.5..=0.95).contains(&score.temp_accuracy));
            assert!((0.3..=0.9).contains(&score.precip_accuracy));
        }
    }
}
