//! # Oracle Core
//!
//! The deterministic prediction-and-scoring engine for the climate
//! oracle subnet simulator.
//!
//! This crate contains the simulation logic, including:
//! - Static climate baseline and regime-modifier tables
//! - Seeded RNG derivation for reproducible miner/validator streams
//! - Miner response generation with tier-quality noise profiles
//! - Validator verification check panels
//! - The weighted scoring formula with extreme-event bonus
//! - Proportional reward allocation over an emission pool
//!
//! Every component is a pure function of its inputs: identical seeds
//! produce bit-identical output within and across processes, which is
//! the load-bearing contract for the whole engine.
//!
//! ## Example
//!
//! ```
//! use oracle_core::rng;
//! use rand::Rng;
//!
//! // Two generators derived from the same seed and miner index
//! // produce identical streams.
//! let mut a = rng::miner_rng(42001, 3);
//! let mut b = rng::miner_rng(42001, 3);
//! assert_eq!(a.gen::<u64>(), b.gen::<u64>());
//! ```

/// Static climate baselines and season/ENSO regime modifiers
pub mod baseline;
/// Engine configuration with TOML overrides
pub mod config;
/// Simulated miner response generation
pub mod miners;
/// Seeded generator derivation and hotkey display masking
pub mod rng;
/// Proportional emission-pool allocation
pub mod rewards;
/// Pre-authored demo scenario definitions
pub mod scenarios;
/// Weighted prediction scoring with extreme-event bonus
pub mod scoring;
/// Per-task-type specialist miner/validator tables
pub mod specialists;
/// Simulated validator verification checks
pub mod validators;

pub use config::OracleConfig;
pub use specialists::{SpecialistCatalog, CATALOG};

/// Rounds `value` to `places` decimal places.
///
/// All engine outputs are rounded at fixed precisions (1-2 dp for
/// physical quantities, 4 dp for scores, 6 dp for TAO amounts) so that
/// serialized results are stable across runs.
#[must_use]
pub fn round_dp(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_dp() {
        assert_eq!(round_dp(0.123456789, 4), 0.1235);
        assert_eq!(round_dp(29.44, 1), 29.4);
        assert_eq!(round_dp(1.0000004, 6), 1.0);
    }
}
