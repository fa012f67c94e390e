//! In-memory subnet registry.
//!
//! A synchronized key-value store with monotonic uid counters, the
//! chain counters (block height, tempo, emission), and a bounded
//! challenge history. All state lives for the process lifetime only.

use std::collections::{BTreeMap, VecDeque};

use oracle_data::{
    ChallengeResult, MinerRecord, MinerRegister, MinerTier, SubnetHyperparameters,
    ValidatorRecord, ValidatorRegister,
};
use oracle_core::{round_dp, SpecialistCatalog};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SubnetError};

/// Chain-level counters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChainState {
    pub block_height: u64,
    pub current_tempo: u64,
    pub total_emission_per_tempo: f64,
}

impl Default for ChainState {
    fn default() -> Self {
        Self {
            block_height: 2_847_391,
            current_tempo: 8_042,
            total_emission_per_tempo: 1.0,
        }
    }
}

/// The registry of everything registered on the simulated subnet.
///
/// Miners and validators are keyed by uid in ordered maps so that
/// dispatch order is deterministic.
#[derive(Debug, Clone)]
pub struct SubnetRegistry {
    miners: BTreeMap<u64, MinerRecord>,
    validators: BTreeMap<u64, ValidatorRecord>,
    challenges: VecDeque<ChallengeResult>,
    state: ChainState,
    hyperparameters: SubnetHyperparameters,
    next_miner_uid: u64,
    next_validator_uid: u64,
    history_limit: usize,
}

impl SubnetRegistry {
    #[must_use]
    pub fn new(history_limit: usize) -> Self {
        Self {
            miners: BTreeMap::new(),
            validators: BTreeMap::new(),
            challenges: VecDeque::new(),
            state: ChainState::default(),
            hyperparameters: SubnetHyperparameters::default(),
            next_miner_uid: 1,
            next_validator_uid: 1,
            history_limit,
        }
    }

    /// A registry pre-populated from the specialist catalog, so demo
    /// endpoints have a working population on a fresh process.
    #[must_use]
    pub fn with_default_population(history_limit: usize, catalog: &SpecialistCatalog) -> Self {
        let mut registry = Self::new(history_limit);
        let block = registry.state.block_height;

        for (i, specialist) in catalog.short_term_forecast.miners.iter().enumerate() {
            let (stake, avg_score, challenges) = match specialist.tier {
                MinerTier::High => (12_000.0 - 800.0 * i as f64, 0.86 - 0.02 * i as f64, 142),
                MinerTier::Mid => (7_500.0 - 400.0 * i as f64, 0.73 - 0.015 * i as f64, 118),
                MinerTier::Entry => (1_800.0, 0.52, 96),
            };
            let uid = registry.next_miner_uid;
            registry.next_miner_uid += 1;
            registry.miners.insert(
                uid,
                MinerRecord {
                    uid,
                    hotkey: specialist.hotkey.to_string(),
                    coldkey: format!("5C{}", &specialist.hotkey[2..]),
                    model_name: Some(specialist.name.to_string()),
                    tier: specialist.tier,
                    stake,
                    is_active: true,
                    registered_block: block.saturating_sub(25_000 + 1_000 * i as u64),
                    avg_score: round_dp(avg_score, 4),
                    total_challenges: challenges,
                    total_tau_earned: round_dp(avg_score * challenges as f64 * 0.0031, 6),
                },
            );
        }

        let validator_stakes = [15_400.0, 12_750.0, 9_800.0];
        for (j, specialist) in catalog
            .short_term_forecast
            .validators
            .iter()
            .take(validator_stakes.len())
            .enumerate()
        {
            let uid = registry.next_validator_uid;
            registry.next_validator_uid += 1;
            registry.validators.insert(
                uid,
                ValidatorRecord {
                    uid,
                    hotkey: specialist.hotkey.to_string(),
                    coldkey: format!("5C{}", &specialist.hotkey[2..]),
                    name: Some(specialist.name.to_string()),
                    stake: validator_stakes[j],
                    is_active: true,
                    registered_block: block.saturating_sub(90_000 + 5_000 * j as u64),
                    challenges_sent: 0,
                    last_weight_block: block.saturating_sub(360),
                },
            );
        }

        tracing::info!(
            miners = registry.miners.len(),
            validators = registry.validators.len(),
            "Seeded default subnet population"
        );
        registry
    }

    pub fn get_miners(&self) -> &BTreeMap<u64, MinerRecord> {
        &self.miners
    }

    pub fn get_miner(&self, uid: u64) -> Option<&MinerRecord> {
        self.miners.get(&uid)
    }

    /// Active miners in uid order.
    pub fn active_miners(&self) -> impl Iterator<Item = &MinerRecord> {
        self.miners.values().filter(|m| m.is_active)
    }

    /// Registers a new miner, assigning the next uid. Hotkey
    /// uniqueness is enforced here; duplicates are a conflict.
    pub fn add_miner(&mut self, registration: MinerRegister) -> Result<MinerRecord> {
        if self
            .miners
            .values()
            .any(|m| m.hotkey == registration.hotkey)
        {
            return Err(SubnetError::conflict("Hotkey already registered"));
        }

        let uid = self.next_miner_uid;
        self.next_miner_uid += 1;
        let record = MinerRecord {
            uid,
            hotkey: registration.hotkey,
            coldkey: registration.coldkey,
            model_name: registration.model_name,
            tier: registration.tier,
            stake: 0.0,
            is_active: true,
            registered_block: self.state.block_height,
            avg_score: 0.0,
            total_challenges: 0,
            total_tau_earned: 0.0,
        };
        self.miners.insert(uid, record.clone());
        tracing::info!(uid, hotkey = %record.hotkey, "Registered miner");
        Ok(record)
    }

    pub fn get_validators(&self) -> &BTreeMap<u64, ValidatorRecord> {
        &self.validators
    }

    pub fn get_validator(&self, uid: u64) -> Option<&ValidatorRecord> {
        self.validators.get(&uid)
    }

    pub fn active_validators(&self) -> impl Iterator<Item = &ValidatorRecord> {
        self.validators.values().filter(|v| v.is_active)
    }

    pub fn add_validator(&mut self, registration: ValidatorRegister) -> Result<ValidatorRecord> {
        if self
            .validators
            .values()
            .any(|v| v.hotkey == registration.hotkey)
        {
            return Err(SubnetError::conflict("Hotkey already registered"));
        }

        let uid = self.next_validator_uid;
        self.next_validator_uid += 1;
        let record = ValidatorRecord {
            uid,
            hotkey: registration.hotkey,
            coldkey: registration.coldkey,
            name: registration.name,
            stake: registration.stake,
            is_active: true,
            registered_block: self.state.block_height,
            challenges_sent: 0,
            last_weight_block: 0,
        };
        self.validators.insert(uid, record.clone());
        tracing::info!(uid, hotkey = %record.hotkey, "Registered validator");
        Ok(record)
    }

    pub fn get_state(&self) -> &ChainState {
        &self.state
    }

    pub fn hyperparameters(&self) -> &SubnetHyperparameters {
        &self.hyperparameters
    }

    pub fn advance_block(&mut self, n: u64) {
        self.state.block_height += n;
    }

    /// Advances the tempo counter; the block height moves by one full
    /// tempo's worth of blocks.
    pub fn advance_tempo(&mut self) {
        self.state.current_tempo += 1;
        self.state.block_height += self.hyperparameters.tempo_blocks;
    }

    /// Appends a finished challenge to the bounded history.
    pub fn add_challenge(&mut self, result: ChallengeResult) {
        self.challenges.push_back(result);
        while self.challenges.len() > self.history_limit {
            self.challenges.pop_front();
        }
    }

    /// The most recent challenges, newest first.
    #[must_use]
    pub fn get_challenges(&self, limit: usize) -> Vec<ChallengeResult> {
        self.challenges.iter().rev().take(limit).cloned().collect()
    }

    /// Folds one challenge outcome into a miner's running stats.
    pub fn update_miner_score(&mut self, uid: u64, score: f64, reward: f64) {
        if let Some(miner) = self.miners.get_mut(&uid) {
            let n = miner.total_challenges + 1;
            miner.avg_score =
                round_dp((miner.avg_score * miner.total_challenges as f64 + score) / n as f64, 4);
            miner.total_challenges = n;
            miner.total_tau_earned = round_dp(miner.total_tau_earned + reward, 6);
        }
    }

    /// Flips a miner's active flag. Inactive miners keep their uid
    /// and stats but are skipped by dispatch.
    pub fn set_miner_active(&mut self, uid: u64, active: bool) -> Result<()> {
        let miner = self
            .miners
            .get_mut(&uid)
            .ok_or_else(|| SubnetError::not_found(format!("Miner UID {uid} not found")))?;
        miner.is_active = active;
        Ok(())
    }

    /// Records challenges dispatched by a validator.
    pub fn record_challenge_sent(&mut self, uid: u64, count: u64, weight_block: u64) {
        if let Some(validator) = self.validators.get_mut(&uid) {
            validator.challenges_sent += count;
            validator.last_weight_block = weight_block;
        }
    }

    /// All miners sorted by average score, best first.
    #[must_use]
    pub fn leaderboard(&self) -> Vec<MinerRecord> {
        let mut miners: Vec<MinerRecord> = self.miners.values().cloned().collect();
        miners.sort_by(|a, b| {
            b.avg_score
                .partial_cmp(&a.avg_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        miners
    }

    /// Combined miner and validator stake.
    #[must_use]
    pub fn total_stake(&self) -> f64 {
        let miner_stake: f64 = self.miners.values().map(|m| m.stake).sum();
        let validator_stake: f64 = self.validators.values().map(|v| v.stake).sum();
        round_dp(miner_stake + validator_stake, 2)
    }
}
