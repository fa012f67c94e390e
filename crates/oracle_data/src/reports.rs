use serde::{Deserialize, Serialize};

use crate::prediction::{ChallengeResult, MinerResponse, ValidatorCheck};
use crate::types::{ClimateSynapse, GroundTruth, MinerTier, TaskType};

/// Full structured output of one canned demo scenario run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoRun {
    pub scenario: String,
    pub title: String,
    pub subtitle: String,
    pub task_type: TaskType,
    pub synapse: ClimateSynapse,
    pub ground_truth: GroundTruth,
    pub miner_responses: Vec<MinerResponse>,
    pub miner_nodes_consulted: usize,
    pub validator_results: Vec<ValidatorCheck>,
    pub validator_nodes_consulted: usize,
    pub tao_reward_pool: f64,
    pub consensus_reached: bool,
    pub block_number: u64,
    pub tempo: u64,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub subnet_version: String,
}

/// Condensed leaderboard row embedded in tempo-cycle reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderboardRow {
    pub rank: u32,
    pub uid: u64,
    pub hotkey: String,
    pub tier: MinerTier,
    pub avg_score: f64,
    pub total_tau: f64,
}

/// Summary of one full tempo cycle: three challenges, scoring,
/// emission distribution, and the advanced block/tempo counters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TempoCycleReport {
    pub tempo_completed: u64,
    pub new_tempo: u64,
    pub block_height: u64,
    pub lead_validator_uid: u64,
    pub challenges_run: usize,
    pub challenge_types: Vec<String>,
    pub task_types: Vec<TaskType>,
    pub total_tao_distributed: f64,
    pub challenges: Vec<ChallengeResult>,
    pub updated_leaderboard: Vec<LeaderboardRow>,
}

/// One miner's row in a side-by-side comparison.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MinerComparison {
    pub miner_uid: u64,
    pub miner_hotkey: String,
    pub tier: MinerTier,
    pub model: String,
    pub predicted_temp_celsius: f64,
    pub predicted_precip_mm: f64,
    pub risk_index: f64,
    pub confidence: f64,
    pub response_time_ms: f64,
    pub data_sources: u32,
}

/// Aggregate statistics over a comparison round.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonAnalysis {
    pub avg_temp: f64,
    pub avg_precip: f64,
    pub avg_risk: f64,
    pub temp_spread: f64,
    pub highest_confidence_miner: Option<u64>,
    pub fastest_miner: Option<u64>,
}

/// Result of dispatching one challenge to every active miner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonReport {
    pub challenge: ClimateSynapse,
    pub total_miners_queried: usize,
    pub comparisons: Vec<MinerComparison>,
    pub analysis: ComparisonAnalysis,
}
