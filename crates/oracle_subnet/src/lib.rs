//! # Oracle Subnet
//!
//! The stateful half of the simulator: an in-memory registry of
//! miners, validators, chain counters, and challenge history, plus
//! the orchestrator that composes the `oracle_core` engine into full
//! demo-scenario and challenge-cycle runs.
//!
//! Execution is request-scoped and synchronous: each run completes
//! within one call with no suspension points. The engine components
//! it calls are pure, so the registry is the only thing that needs a
//! mutual-exclusion discipline at the boundary.

/// Structured error taxonomy for registry and orchestrator operations
pub mod error;
/// Scenario and challenge-cycle composition
pub mod orchestrator;
/// In-memory miner/validator/challenge registry
pub mod registry;

pub use error::{Result, SubnetError};
pub use orchestrator::Orchestrator;
pub use registry::{ChainState, SubnetRegistry};
