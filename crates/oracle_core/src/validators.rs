//! Simulated validator verification panels.

use oracle_data::{CheckOutcome, Consensus, TaskType, ValidatorCheck};
use rand::Rng;

use crate::rng::{mask_hotkey, validator_rng};
use crate::round_dp;
use crate::specialists::SpecialistCatalog;

/// Pass probability for each individual check.
pub const CHECK_PASS_PROBABILITY: f64 = 0.85;

/// Minimum passed checks for an Approved consensus.
///
/// A fixed count, not a fraction of the configured check list: the
/// check tables currently carry three labels per task type, and the
/// pinning test below fails if that relationship changes.
pub const CONSENSUS_MIN_CHECKS: u32 = 2;

/// Generates the verification panel for a challenge.
///
/// Selects the first `count` validators of the task type's pool and
/// runs each one's fixed check list. Validator `j` draws from a
/// generator seeded `42 + j*13`, so the panel is reproducible.
#[must_use]
pub fn generate_checks(
    task_type: TaskType,
    catalog: &SpecialistCatalog,
    count: usize,
) -> Vec<ValidatorCheck> {
    let spec = catalog.for_task(task_type);
    let selected = &spec.validators[..count.min(spec.validators.len())];

    let mut verdicts = Vec::with_capacity(selected.len());
    for (j, validator) in selected.iter().enumerate() {
        let mut rng = validator_rng(j as u64);
        let stake = round_dp(rng.gen_range(5000.0..18000.0), 2);
        let vtrust = round_dp(rng.gen_range(0.88..0.99), 4);

        let mut checks_passed = 0u32;
        let mut check_details = Vec::with_capacity(spec.check_labels.len());
        for label in spec.check_labels {
            let passed = rng.gen::<f64>() < CHECK_PASS_PROBABILITY;
            if passed {
                checks_passed += 1;
            }
            check_details.push(CheckOutcome {
                label: (*label).to_string(),
                passed,
            });
        }

        verdicts.push(ValidatorCheck {
            uid: j as u64 + 1,
            hotkey: mask_hotkey(validator.hotkey),
            name: validator.name.to_string(),
            specialty: validator.specialty.to_string(),
            stake_tao: stake,
            vtrust,
            checks_passed,
            checks_total: spec.check_labels.len() as u32,
            check_details,
            consensus: if checks_passed >= CONSENSUS_MIN_CHECKS {
                Consensus::Approved
            } else {
                Consensus::Disputed
            },
        });
    }

    verdicts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::specialists::CATALOG;

    #[test]
    fn test_panel_is_deterministic() {
        let first = generate_checks(TaskType::RiskIndex, &CATALOG, 3);
        let second = generate_checks(TaskType::RiskIndex, &CATALOG, 3);
        assert_eq!(first, second);
    }

    #[test]
    fn test_panel_selection_is_positional() {
        let verdicts = generate_checks(TaskType::ShortTermForecast, &CATALOG, 2);
        assert_eq!(verdicts.len(), 2);
        assert_eq!(verdicts[0].name, "NOAA-StationVerifier");
        assert_eq!(verdicts[1].name, "ECMWF-EnsembleChecker");
    }

    #[test]
    fn test_stake_and_trust_ranges() {
        for verdict in generate_checks(TaskType::LongRangeTrend, &CATALOG, 3) {
            assert!((5000.0..=18000.0).contains(&verdict.stake_tao));
            assert!((0.88..=0.99).contains(&verdict.vtrust));
        }
    }

    #[test]
    fn test_consensus_matches_threshold() {
        for verdict in generate_checks(TaskType::ShortTermForecast, &CATALOG, 4) {
            let expected = if verdict.checks_passed >= CONSENSUS_MIN_CHECKS {
                Consensus::Approved
            } else {
                Consensus::Disputed
            };
            assert_eq!(verdict.consensus, expected);
        }
    }

    /// The Approved threshold is an absolute count. It only means
    /// "majority" while the check lists stay at three labels, so pin
    /// that relationship here.
    #[test]
    fn test_threshold_pinned_to_check_list_length() {
        for task in [
            TaskType::ShortTermForecast,
            TaskType::RiskIndex,
            TaskType::LongRangeTrend,
        ] {
            let labels = CATALOG.for_task(task).check_labels;
            assert_eq!(labels.len(), 3, "check list for {task:?} changed length");
            assert!(CONSENSUS_MIN_CHECKS > labels.len() as u32 / 2);
        }
    }
}
