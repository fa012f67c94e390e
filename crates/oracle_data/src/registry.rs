use serde::{Deserialize, Serialize};

use crate::types::MinerTier;

/// A registered miner and its running performance stats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinerRecord {
    pub uid: u64,
    pub hotkey: String,
    pub coldkey: String,
    #[serde(default)]
    pub model_name: Option<String>,
    pub tier: MinerTier,
    pub stake: f64,
    pub is_active: bool,
    pub registered_block: u64,
    pub avg_score: f64,
    pub total_challenges: u64,
    pub total_tau_earned: f64,
}

/// A registered validator and its dispatch stats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidatorRecord {
    pub uid: u64,
    pub hotkey: String,
    pub coldkey: String,
    #[serde(default)]
    pub name: Option<String>,
    pub stake: f64,
    pub is_active: bool,
    pub registered_block: u64,
    pub challenges_sent: u64,
    pub last_weight_block: u64,
}

/// Registration payload for a new miner. New miners start with zero
/// stake and enter the immunity period.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MinerRegister {
    pub hotkey: String,
    pub coldkey: String,
    #[serde(default)]
    pub model_name: Option<String>,
    #[serde(default)]
    pub tier: MinerTier,
}

/// Registration payload for a new validator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidatorRegister {
    pub hotkey: String,
    pub coldkey: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub stake: f64,
}

/// Fixed subnet parameters reported by the network endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubnetHyperparameters {
    pub subnet_id: u32,
    pub max_uids: u32,
    pub immunity_period_blocks: u64,
    pub tempo_blocks: u64,
    pub owner_emission_share: f64,
    pub miner_emission_share: f64,
    pub validator_emission_share: f64,
}

impl Default for SubnetHyperparameters {
    fn default() -> Self {
        Self {
            subnet_id: 3,
            max_uids: 256,
            immunity_period_blocks: 5000,
            tempo_blocks: 360,
            owner_emission_share: 0.18,
            miner_emission_share: 0.41,
            validator_emission_share: 0.41,
        }
    }
}

/// Snapshot of the subnet as a whole.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkStatus {
    pub block_height: u64,
    pub current_tempo: u64,
    pub total_miners: usize,
    pub active_miners: usize,
    pub total_validators: usize,
    pub active_validators: usize,
    pub total_stake: f64,
    pub total_emission_per_tempo: f64,
    pub hyperparameters: SubnetHyperparameters,
    pub top_miners: Vec<MinerRecord>,
}

/// One row of the miner leaderboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub miner_uid: u64,
    pub miner_hotkey: String,
    pub tier: MinerTier,
    pub avg_score: f64,
    pub total_challenges: u64,
    pub total_tau_earned: f64,
    pub temp_accuracy_avg: f64,
    pub precip_accuracy_avg: f64,
    pub streak: u32,
}
