use serde::{Deserialize, Serialize};

use crate::types::{ChallengeType, ClimateSynapse, GroundTruth, MinerTier, TaskType};

/// One specialist miner's answer in a demo scenario run, including its
/// simulated model analysis and quality score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinerResponse {
    pub uid: u64,
    pub hotkey: String,
    pub name: String,
    pub tier: MinerTier,
    pub specialty: String,
    pub predicted_temp_celsius: f64,
    pub predicted_precip_mm: f64,
    pub predicted_risk_index: f64,
    pub predicted_humidity_pct: f64,
    pub predicted_wind_kmh: f64,
    pub confidence: f64,
    pub score: f64,
    pub response_time_s: f64,
    pub analysis: String,
    pub rank: u32,
    #[serde(default)]
    pub tao_earned: f64,
}

/// A contributing condition surfaced alongside a risk index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskFactor {
    pub factor: String,
    pub severity: f64,
    pub description: String,
}

/// A registered miner's prediction for one challenge.
/// Produced once per (miner, challenge) pair and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinerPrediction {
    pub miner_uid: u64,
    pub miner_hotkey: String,
    pub predicted_temp_celsius: f64,
    pub predicted_precip_mm: f64,
    pub predicted_humidity_pct: f64,
    pub predicted_wind_kmh: f64,
    pub risk_index: f64,
    pub confidence: f64,
    #[serde(default)]
    pub risk_factors: Vec<RiskFactor>,
    pub response_time_ms: f64,
    pub data_sources: u32,
}

/// Weighted accuracy components for one prediction.
/// Derived purely from a prediction and a ground truth (or the
/// estimated-scoring fallback); immutable once computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub temp_accuracy: f64,
    pub precip_accuracy: f64,
    pub risk_accuracy: f64,
    pub latency_score: f64,
    pub consistency: f64,
    pub extreme_event_bonus: bool,
    pub final_score: f64,
}

/// A scored and ranked miner within one challenge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinerScoreResult {
    pub miner_uid: u64,
    pub miner_hotkey: String,
    pub score: ScoreBreakdown,
    pub rank: u32,
    pub tau_earned: f64,
}

/// Per-validator roll-up over its boolean checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Consensus {
    Approved,
    Disputed,
}

/// Outcome of one labeled verification check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckOutcome {
    pub label: String,
    pub passed: bool,
}

/// One simulated validator's verification verdict for a challenge.
/// Independent of miner predictions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidatorCheck {
    pub uid: u64,
    pub hotkey: String,
    pub name: String,
    pub specialty: String,
    pub stake_tao: f64,
    pub vtrust: f64,
    pub checks_passed: u32,
    pub checks_total: u32,
    pub check_details: Vec<CheckOutcome>,
    pub consensus: Consensus,
}

/// Full record of one executed challenge cycle, appended to the
/// bounded network history. Terminal once recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChallengeResult {
    pub challenge_id: String,
    pub synapse: ClimateSynapse,
    pub task_type: TaskType,
    pub challenge_type: ChallengeType,
    #[serde(default)]
    pub ground_truth: Option<GroundTruth>,
    pub miner_predictions: Vec<MinerPrediction>,
    pub scores: Vec<MinerScoreResult>,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub tempo: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consensus_serializes_as_word() {
        assert_eq!(
            serde_json::to_string(&Consensus::Approved).unwrap(),
            "\"Approved\""
        );
        assert_eq!(
            serde_json::to_string(&Consensus::Disputed).unwrap(),
            "\"Disputed\""
        );
    }
}
