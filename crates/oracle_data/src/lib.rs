//! # Oracle Data
//!
//! Shared data model for the climate oracle subnet simulator.
//!
//! Everything here is a plain serde-serializable value type with no
//! behavior beyond constructors and display helpers. The simulation
//! engine (`oracle_core`) and the registry/orchestrator (`oracle_subnet`)
//! both build on these types, and the HTTP layer serializes them
//! unchanged into response bodies.

/// Challenge and prediction payloads exchanged with simulated miners
pub mod prediction;
/// Subnet registry rows and network-level summaries
pub mod registry;
/// Aggregate result objects produced by the orchestrator
pub mod reports;
/// Task, tier, and condition enums plus the challenge synapse
pub mod types;

pub use prediction::{
    ChallengeResult, CheckOutcome, Consensus, MinerPrediction, MinerResponse, MinerScoreResult,
    RiskFactor, ScoreBreakdown, ValidatorCheck,
};
pub use registry::{
    LeaderboardEntry, MinerRecord, MinerRegister, NetworkStatus, SubnetHyperparameters,
    ValidatorRecord, ValidatorRegister,
};
pub use reports::{ComparisonAnalysis, ComparisonReport, DemoRun, MinerComparison, TempoCycleReport};
pub use types::{
    ChallengeType, ClimateConditions, ClimateSynapse, GroundTruth, MinerTier, TaskType,
};
