//! Scenario and challenge-cycle orchestration.
//!
//! Composes the pure engine components into the two entry modes: the
//! canned demo scenarios and the freeform challenge cycle. A challenge
//! moves linearly through created, dispatched, scored, ranked,
//! rewarded, recorded; once recorded it is terminal and never mutated.

use oracle_core::{
    miners, rewards, rng, scenarios, scoring, validators, OracleConfig, SpecialistCatalog,
    round_dp, CATALOG,
};
use oracle_data::{
    ChallengeResult, ChallengeType, ClimateConditions, ClimateSynapse, ComparisonAnalysis,
    ComparisonReport, Consensus, DemoRun, GroundTruth, MinerComparison, MinerPrediction,
    MinerScoreResult, TaskType, TempoCycleReport,
};
use oracle_data::reports::LeaderboardRow;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{Result, SubnetError};
use crate::registry::SubnetRegistry;

/// Lifecycle of one challenge run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ChallengePhase {
    Created,
    Dispatched,
    Scored,
    Ranked,
    Rewarded,
    Recorded,
}

impl ChallengePhase {
    fn advance(self) -> Self {
        match self {
            ChallengePhase::Created => ChallengePhase::Dispatched,
            ChallengePhase::Dispatched => ChallengePhase::Scored,
            ChallengePhase::Scored => ChallengePhase::Ranked,
            ChallengePhase::Ranked => ChallengePhase::Rewarded,
            ChallengePhase::Rewarded | ChallengePhase::Recorded => ChallengePhase::Recorded,
        }
    }
}

/// Composes engine components into full simulation runs.
pub struct Orchestrator {
    config: OracleConfig,
    catalog: &'static SpecialistCatalog,
}

impl Orchestrator {
    #[must_use]
    pub fn new(config: OracleConfig) -> Self {
        Self {
            config,
            catalog: &CATALOG,
        }
    }

    #[must_use]
    pub fn config(&self) -> &OracleConfig {
        &self.config
    }

    /// Runs one pre-authored demo scenario end to end.
    ///
    /// Unknown keys are a not-found outcome. Everything that feeds the
    /// story (miner responses, validator checks, the reward pool) is
    /// seeded; block and tempo numbers are cosmetic and drawn fresh.
    pub fn run_demo_scenario(&self, key: &str) -> Result<DemoRun> {
        let scenario = scenarios::find_scenario(key)
            .ok_or_else(|| SubnetError::not_found(format!("Unknown scenario: {key}")))?;

        let mut miner_responses = miners::generate_responses(
            scenario.task_type,
            &scenario.synapse,
            Some(&scenario.ground_truth),
            self.catalog,
            self.config.demo_miner_count,
        );
        let validator_results = validators::generate_checks(
            scenario.task_type,
            self.catalog,
            self.config.demo_validator_count,
        );

        let total_tao = round_dp(
            rng::engine_rng(42).gen_range(self.config.demo_pool_min..self.config.demo_pool_max),
            4,
        );
        let miner_pool = total_tao * self.config.miner_emission_share;
        let weighted: Vec<(u64, f64)> =
            miner_responses.iter().map(|m| (m.uid, m.score)).collect();
        for (response, (_, amount)) in miner_responses
            .iter_mut()
            .zip(rewards::allocate(&weighted, miner_pool))
        {
            response.tao_earned = amount;
        }

        let consensus_reached = validator_results
            .iter()
            .all(|v| v.consensus == Consensus::Approved);

        let mut cosmetic = rand::thread_rng();
        let run = DemoRun {
            scenario: key.to_string(),
            title: scenario.title.to_string(),
            subtitle: scenario.subtitle.to_string(),
            task_type: scenario.task_type,
            synapse: scenario.synapse,
            ground_truth: scenario.ground_truth,
            miner_nodes_consulted: miner_responses.len(),
            miner_responses,
            validator_nodes_consulted: validator_results.len(),
            validator_results,
            tao_reward_pool: total_tao,
            consensus_reached,
            block_number: cosmetic.gen_range(2_800_000..=3_200_000),
            tempo: cosmetic.gen_range(7_900..=8_100),
            timestamp: chrono::Utc::now(),
            subnet_version: self.config.subnet_version.clone(),
        };
        tracing::info!(scenario = key, consensus = consensus_reached, "Demo scenario complete");
        Ok(run)
    }

    /// Runs one freeform challenge cycle on behalf of a validator.
    pub fn run_challenge(
        &self,
        registry: &mut SubnetRegistry,
        validator_uid: u64,
        task_type: TaskType,
        synapse: Option<ClimateSynapse>,
    ) -> Result<ChallengeResult> {
        if registry.get_validator(validator_uid).is_none() {
            return Err(SubnetError::not_found(format!(
                "Validator UID {validator_uid} not found"
            )));
        }

        let synapse = synapse.unwrap_or_else(|| self.quick_synapse(task_type));
        let is_historical =
            rand::thread_rng().gen::<f64>() < self.config.historical_probability;
        let emission_pool =
            registry.get_state().total_emission_per_tempo * self.config.miner_emission_share;

        let result = self.execute_challenge(registry, synapse, is_historical, emission_pool);

        let block = registry.get_state().block_height;
        registry.record_challenge_sent(validator_uid, 1, block);
        registry.advance_block(rand::thread_rng().gen_range(1..=5));
        Ok(result)
    }

    /// Runs a full tempo cycle: three challenges (two historical, one
    /// near-term) across all task types, then advances the tempo.
    pub fn run_tempo_cycle(&self, registry: &mut SubnetRegistry) -> Result<TempoCycleReport> {
        if registry.get_validators().is_empty() {
            return Err(SubnetError::precondition("No validators registered"));
        }
        let lead_uid = registry
            .active_validators()
            .max_by(|a, b| {
                a.stake
                    .partial_cmp(&b.stake)
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .map(|v| v.uid)
            .ok_or_else(|| SubnetError::precondition("No active validators"))?;

        let tempo_before = registry.get_state().current_tempo;
        let total_emission = registry.get_state().total_emission_per_tempo;
        let emission_per_challenge = total_emission * self.config.miner_emission_share / 3.0;

        let task_types = [
            TaskType::ShortTermForecast,
            TaskType::RiskIndex,
            TaskType::LongRangeTrend,
        ];
        let locations = ["Jakarta, Indonesia", "Miami, Florida", "Sahel Region, Africa"];
        let horizons = [7, 5, 90];

        let mut challenges = Vec::with_capacity(task_types.len());
        for (i, task_type) in task_types.into_iter().enumerate() {
            let mut picker = rand::thread_rng();
            let season = *["monsoon_peak", "hurricane_peak", "pre_monsoon"]
                .choose(&mut picker)
                .unwrap_or(&"normal");
            let enso = *["la_nina_moderate", "neutral"]
                .choose(&mut picker)
                .unwrap_or(&"neutral");
            let synapse = ClimateSynapse {
                task_type,
                location: locations[i % locations.len()].to_string(),
                target_date: "2026-02-25".to_string(),
                forecast_horizon_days: horizons[i],
                variables: standard_variables(),
                conditions: ClimateConditions::new(season, enso),
                random_seed: Some(picker.gen_range(10_000_000..=99_999_999)),
            };

            // First two challenges are historical, the last near-term.
            let is_historical = i < 2;
            challenges.push(self.execute_challenge(
                registry,
                synapse,
                is_historical,
                emission_per_challenge,
            ));
        }

        registry.advance_tempo();
        let block = registry.get_state().block_height;
        registry.record_challenge_sent(lead_uid, challenges.len() as u64, block);

        let updated_leaderboard = registry
            .leaderboard()
            .into_iter()
            .enumerate()
            .map(|(i, m)| LeaderboardRow {
                rank: i as u32 + 1,
                uid: m.uid,
                hotkey: shorten_hotkey(&m.hotkey),
                tier: m.tier,
                avg_score: m.avg_score,
                total_tau: m.total_tau_earned,
            })
            .collect();

        let report = TempoCycleReport {
            tempo_completed: tempo_before,
            new_tempo: registry.get_state().current_tempo,
            block_height: block,
            lead_validator_uid: lead_uid,
            challenges_run: challenges.len(),
            challenge_types: challenges
                .iter()
                .map(|c| c.challenge_type.as_str().to_string())
                .collect(),
            task_types: challenges.iter().map(|c| c.task_type).collect(),
            total_tao_distributed: round_dp(total_emission, 6),
            challenges,
            updated_leaderboard,
        };
        tracing::info!(
            tempo = report.new_tempo,
            lead_validator = lead_uid,
            "Tempo cycle complete"
        );
        Ok(report)
    }

    /// Dispatches the same challenge to every active miner and lines
    /// the predictions up side by side.
    #[must_use]
    pub fn compare_miners(
        &self,
        registry: &SubnetRegistry,
        synapse: ClimateSynapse,
    ) -> ComparisonReport {
        let seed = challenge_seed(&synapse);
        let mut comparisons: Vec<MinerComparison> = registry
            .active_miners()
            .map(|miner| {
                let mut miner_stream = rng::miner_rng(seed, miner.uid);
                let prediction =
                    miners::run_miner_prediction(&synapse, miner.tier, &mut miner_stream);
                MinerComparison {
                    miner_uid: miner.uid,
                    miner_hotkey: shorten_hotkey(&miner.hotkey),
                    tier: miner.tier,
                    model: miner
                        .model_name
                        .clone()
                        .unwrap_or_else(|| "unknown".to_string()),
                    predicted_temp_celsius: prediction.predicted_temp_celsius,
                    predicted_precip_mm: prediction.predicted_precip_mm,
                    risk_index: prediction.risk_index,
                    confidence: prediction.confidence,
                    response_time_ms: prediction.response_time_ms,
                    data_sources: prediction.data_sources,
                }
            })
            .collect();

        comparisons.sort_by(|a, b| {
            b.confidence
                .partial_cmp(&a.confidence)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let analysis = if comparisons.is_empty() {
            ComparisonAnalysis {
                avg_temp: 0.0,
                avg_precip: 0.0,
                avg_risk: 0.0,
                temp_spread: 0.0,
                highest_confidence_miner: None,
                fastest_miner: None,
            }
        } else {
            let n = comparisons.len() as f64;
            let temps: Vec<f64> = comparisons.iter().map(|c| c.predicted_temp_celsius).collect();
            let max_temp = temps.iter().cloned().fold(f64::MIN, f64::max);
            let min_temp = temps.iter().cloned().fold(f64::MAX, f64::min);
            ComparisonAnalysis {
                avg_temp: round_dp(temps.iter().sum::<f64>() / n, 1),
                avg_precip: round_dp(
                    comparisons.iter().map(|c| c.predicted_precip_mm).sum::<f64>() / n,
                    1,
                ),
                avg_risk: round_dp(comparisons.iter().map(|c| c.risk_index).sum::<f64>() / n, 2),
                temp_spread: round_dp(max_temp - min_temp, 1),
                highest_confidence_miner: comparisons.first().map(|c| c.miner_uid),
                fastest_miner: comparisons
                    .iter()
                    .min_by(|a, b| {
                        a.response_time_ms
                            .partial_cmp(&b.response_time_ms)
                            .unwrap_or(std::cmp::Ordering::Equal)
                    })
                    .map(|c| c.miner_uid),
            }
        };

        ComparisonReport {
            total_miners_queried: comparisons.len(),
            challenge: synapse,
            comparisons,
            analysis,
        }
    }

    /// Synthesizes a fresh challenge on behalf of a validator.
    pub fn generate_challenge(
        &self,
        registry: &mut SubnetRegistry,
        validator_uid: u64,
        task_type: TaskType,
    ) -> Result<ClimateSynapse> {
        if registry.get_validator(validator_uid).is_none() {
            return Err(SubnetError::not_found(format!(
                "Validator UID {validator_uid} not found"
            )));
        }

        let mut picker = rand::thread_rng();
        let location = *oracle_core::baseline::known_locations()
            .choose(&mut picker)
            .unwrap_or(&"Jakarta, Indonesia");
        let season = *oracle_core::baseline::known_seasons()
            .choose(&mut picker)
            .unwrap_or(&"normal");
        let enso = *oracle_core::baseline::known_enso_states()
            .choose(&mut picker)
            .unwrap_or(&"neutral");
        let horizon = match task_type {
            TaskType::ShortTermForecast => *[3, 5, 7].choose(&mut picker).unwrap_or(&7),
            TaskType::RiskIndex => *[3, 5].choose(&mut picker).unwrap_or(&5),
            TaskType::LongRangeTrend => *[30, 60, 90].choose(&mut picker).unwrap_or(&90),
        };

        let synapse = ClimateSynapse {
            task_type,
            location: location.to_string(),
            target_date: format!(
                "2026-{:02}-{:02}",
                picker.gen_range(1..=12),
                picker.gen_range(1..=28)
            ),
            forecast_horizon_days: horizon,
            variables: standard_variables(),
            conditions: ClimateConditions::new(season, enso),
            random_seed: Some(picker.gen_range(10_000_000..=99_999_999)),
        };

        let block = registry.get_state().block_height;
        registry.record_challenge_sent(validator_uid, 1, block);
        Ok(synapse)
    }

    /// Runs a single registered miner against a challenge.
    pub fn predict_for_miner(
        &self,
        registry: &SubnetRegistry,
        uid: u64,
        synapse: &ClimateSynapse,
    ) -> Result<MinerPrediction> {
        let miner = registry
            .get_miner(uid)
            .ok_or_else(|| SubnetError::not_found(format!("Miner UID {uid} not found")))?;
        let mut miner_stream = rng::miner_rng(challenge_seed(synapse), uid);
        let mut prediction = miners::run_miner_prediction(synapse, miner.tier, &mut miner_stream);
        prediction.miner_uid = uid;
        prediction.miner_hotkey = miner.hotkey.clone();
        Ok(prediction)
    }

    /// Drives one challenge through its whole lifecycle against the
    /// registered miner population.
    fn execute_challenge(
        &self,
        registry: &mut SubnetRegistry,
        synapse: ClimateSynapse,
        is_historical: bool,
        emission_pool: f64,
    ) -> ChallengeResult {
        let challenge_id = uuid::Uuid::new_v4().to_string()[..8].to_string();
        let seed = challenge_seed(&synapse);
        let mut challenge_stream = rng::engine_rng(seed);
        let mut phase = ChallengePhase::Created;
        tracing::debug!(challenge_id = %challenge_id, phase = ?phase, seed, "Challenge created");

        let (challenge_type, ground_truth) = if is_historical {
            (
                ChallengeType::Historical,
                Some(synthesize_ground_truth(
                    &mut challenge_stream,
                    self.config.extreme_event_probability,
                )),
            )
        } else {
            (ChallengeType::NearTerm, None)
        };

        phase = phase.advance();
        let predictions: Vec<MinerPrediction> = registry
            .active_miners()
            .map(|miner| {
                let mut miner_stream = rng::miner_rng(seed, miner.uid);
                let mut prediction =
                    miners::run_miner_prediction(&synapse, miner.tier, &mut miner_stream);
                prediction.miner_uid = miner.uid;
                prediction.miner_hotkey = miner.hotkey.clone();
                prediction
            })
            .collect();
        tracing::debug!(challenge_id = %challenge_id, phase = ?phase, miners = predictions.len(), "Challenge dispatched");

        phase = phase.advance();
        let mut scores: Vec<MinerScoreResult> = predictions
            .iter()
            .map(|prediction| {
                let breakdown = match &ground_truth {
                    Some(truth) => scoring::score_prediction(prediction, truth),
                    None => scoring::estimated_score(&mut challenge_stream),
                };
                MinerScoreResult {
                    miner_uid: prediction.miner_uid,
                    miner_hotkey: prediction.miner_hotkey.clone(),
                    score: breakdown,
                    rank: 0,
                    tau_earned: 0.0,
                }
            })
            .collect();
        tracing::debug!(challenge_id = %challenge_id, phase = ?phase, "Challenge scored");

        phase = phase.advance();
        scores.sort_by(|a, b| {
            b.score
                .final_score
                .partial_cmp(&a.score.final_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        for (i, entry) in scores.iter_mut().enumerate() {
            entry.rank = i as u32 + 1;
        }
        tracing::debug!(challenge_id = %challenge_id, phase = ?phase, "Challenge ranked");

        phase = phase.advance();
        let weighted: Vec<(u64, f64)> = scores
            .iter()
            .map(|s| (s.miner_uid, s.score.final_score))
            .collect();
        for (entry, (_, amount)) in scores.iter_mut().zip(rewards::allocate(&weighted, emission_pool))
        {
            entry.tau_earned = amount;
        }
        for entry in &scores {
            registry.update_miner_score(entry.miner_uid, entry.score.final_score, entry.tau_earned);
        }
        tracing::debug!(challenge_id = %challenge_id, phase = ?phase, pool = emission_pool, "Challenge rewarded");

        phase = phase.advance();
        let result = ChallengeResult {
            challenge_id: challenge_id.clone(),
            task_type: synapse.task_type,
            synapse,
            challenge_type,
            ground_truth,
            miner_predictions: predictions,
            scores,
            timestamp: chrono::Utc::now(),
            tempo: registry.get_state().current_tempo,
        };
        registry.add_challenge(result.clone());
        tracing::debug!(challenge_id = %challenge_id, phase = ?phase, "Challenge recorded");

        result
    }

    fn quick_synapse(&self, task_type: TaskType) -> ClimateSynapse {
        let mut picker = rand::thread_rng();
        let location = *["Jakarta, Indonesia", "Miami, Florida", "Sahel Region, Africa"]
            .choose(&mut picker)
            .unwrap_or(&"Jakarta, Indonesia");
        let season = *["monsoon_peak", "hurricane_peak", "normal"]
            .choose(&mut picker)
            .unwrap_or(&"normal");
        let enso = *["la_nina_moderate", "neutral"]
            .choose(&mut picker)
            .unwrap_or(&"neutral");
        ClimateSynapse {
            task_type,
            location: location.to_string(),
            target_date: "2026-02-25".to_string(),
            forecast_horizon_days: 7,
            variables: standard_variables(),
            conditions: ClimateConditions::new(season, enso),
            random_seed: Some(picker.gen_range(10_000_000..=99_999_999)),
        }
    }
}

/// The effective seed of a challenge: the synapse's own seed, else a
/// stable derivation from its location and date.
#[must_use]
pub fn challenge_seed(synapse: &ClimateSynapse) -> u64 {
    synapse
        .random_seed
        .unwrap_or_else(|| rng::derive_seed(&synapse.location, &synapse.target_date))
}

fn standard_variables() -> Vec<String> {
    vec![
        "temperature".to_string(),
        "precipitation".to_string(),
        "humidity".to_string(),
        "wind".to_string(),
    ]
}

fn shorten_hotkey(hotkey: &str) -> String {
    format!("{}...", &hotkey[..hotkey.len().min(16)])
}

fn synthesize_ground_truth(
    stream: &mut rand_chacha::ChaCha8Rng,
    extreme_probability: f64,
) -> GroundTruth {
    let actual_temp = round_dp(stream.gen_range(20.0..38.0), 1);
    let actual_precip = round_dp(stream.gen_range(10.0..250.0), 1);
    let actual_risk = round_dp(stream.gen_range(0.1..0.9), 2);
    let had_extreme_event = stream.gen::<f64>() < extreme_probability;
    let event_types: [Option<&str>; 4] =
        [Some("urban_flooding"), Some("heatwave"), Some("tropical_storm"), None];
    let extreme_event_type = event_types[stream.gen_range(0..event_types.len())]
        .map(str::to_string);

    GroundTruth {
        actual_temp_celsius: actual_temp,
        actual_precip_mm: actual_precip,
        actual_risk_index: actual_risk,
        had_extreme_event,
        extreme_event_type,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oracle_core::CATALOG;

    fn orchestrator() -> Orchestrator {
        Orchestrator::new(OracleConfig::default())
    }

    fn populated_registry() -> SubnetRegistry {
        SubnetRegistry::with_default_population(50, &CATALOG)
    }

    #[test]
    fn test_demo_scenario_unknown_key() {
        let err = orchestrator().run_demo_scenario("demo99").unwrap_err();
        assert!(matches!(err, SubnetError::NotFound(_)));
    }

    #[test]
    fn test_demo_scenario_shape() {
        let run = orchestrator().run_demo_scenario("demo1").unwrap();
        assert_eq!(run.miner_nodes_consulted, 6);
        assert_eq!(run.validator_nodes_consulted, 3);
        assert!((0.08..=0.42).contains(&run.tao_reward_pool));
        assert!((2_800_000..=3_200_000).contains(&run.block_number));
        let earned: f64 = run.miner_responses.iter().map(|m| m.tao_earned).sum();
        let pool = run.tao_reward_pool * 0.41;
        assert!((earned - pool).abs() < 1e-4, "earned {earned} vs pool {pool}");
    }

    #[test]
    fn test_run_challenge_requires_known_validator() {
        let mut registry = populated_registry();
        let err = orchestrator()
            .run_challenge(&mut registry, 99, TaskType::RiskIndex, None)
            .unwrap_err();
        assert!(matches!(err, SubnetError::NotFound(_)));
    }

    #[test]
    fn test_run_challenge_ranks_and_records() {
        let mut registry = populated_registry();
        let result = orchestrator()
            .run_challenge(&mut registry, 1, TaskType::ShortTermForecast, None)
            .unwrap();
        assert_eq!(result.miner_predictions.len(), 6);
        let ranks: Vec<u32> = result.scores.iter().map(|s| s.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(registry.get_challenges(10).len(), 1);
        assert_eq!(registry.get_validator(1).unwrap().challenges_sent, 1);
    }

    #[test]
    fn test_tempo_cycle_without_validators_is_precondition_failure() {
        let mut registry = SubnetRegistry::new(10);
        let err = orchestrator().run_tempo_cycle(&mut registry).unwrap_err();
        assert!(matches!(err, SubnetError::Precondition(_)));
    }

    #[test]
    fn test_tempo_cycle_advances_state() {
        let mut registry = populated_registry();
        let tempo_before = registry.get_state().current_tempo;
        let report = orchestrator().run_tempo_cycle(&mut registry).unwrap();
        assert_eq!(report.challenges_run, 3);
        assert_eq!(report.tempo_completed, tempo_before);
        assert_eq!(report.new_tempo, tempo_before + 1);
        assert_eq!(
            report.challenge_types,
            vec!["historical", "historical", "near_term"]
        );
        assert_eq!(registry.get_challenges(10).len(), 3);
    }

    #[test]
    fn test_compare_miners_sorted_by_confidence() {
        let registry = populated_registry();
        let synapse = orchestrator().quick_synapse(TaskType::ShortTermForecast);
        let report = orchestrator().compare_miners(&registry, synapse);
        assert_eq!(report.total_miners_queried, 6);
        for pair in report.comparisons.windows(2) {
            assert!(pair[0].confidence >= pair[1].confidence);
        }
        assert!(report.analysis.highest_confidence_miner.is_some());
    }

    #[test]
    fn test_compare_miners_empty_registry() {
        let registry = SubnetRegistry::new(10);
        let synapse = orchestrator().quick_synapse(TaskType::RiskIndex);
        let report = orchestrator().compare_miners(&registry, synapse);
        assert_eq!(report.total_miners_queried, 0);
        assert!(report.analysis.fastest_miner.is_none());
    }

    #[test]
    fn test_predict_for_miner_stamps_identity() {
        let registry = populated_registry();
        let synapse = orchestrator().quick_synapse(TaskType::ShortTermForecast);
        let prediction = orchestrator()
            .predict_for_miner(&registry, 2, &synapse)
            .unwrap();
        assert_eq!(prediction.miner_uid, 2);
        assert!(!prediction.miner_hotkey.is_empty());
    }

    #[test]
    fn test_generate_challenge_counts_dispatch() {
        let mut registry = populated_registry();
        let synapse = orchestrator()
            .generate_challenge(&mut registry, 1, TaskType::LongRangeTrend)
            .unwrap();
        assert!([30, 60, 90].contains(&synapse.forecast_horizon_days));
        assert!(synapse.random_seed.is_some());
        assert_eq!(registry.get_validator(1).unwrap().challenges_sent, 1);
    }

    #[test]
    fn test_challenge_phase_order() {
        let mut phase = ChallengePhase::Created;
        let expected = [
            ChallengePhase::Dispatched,
            ChallengePhase::Scored,
            ChallengePhase::Ranked,
            ChallengePhase::Rewarded,
            ChallengePhase::Recorded,
        ];
        for next in expected {
            phase = phase.advance();
            assert_eq!(phase, next);
        }
        // Recorded is terminal.
        assert_eq!(phase.advance(), ChallengePhase::Recorded);
    }
}
