//! Climate oracle subnet demo server.
//!
//! Wires the `oracle_subnet` orchestrator and registry behind an axum
//! HTTP API. The engine itself is pure and synchronous; the shared
//! registry is the only mutable state, guarded by a mutex at this
//! boundary.

use std::sync::Mutex;

use oracle_core::{OracleConfig, CATALOG};
use oracle_subnet::{Orchestrator, SubnetRegistry};

pub mod routes;

/// Shared server state: the orchestrator (immutable config) and the
/// registry (the only mutable collaborator).
pub struct AppState {
    pub orchestrator: Orchestrator,
    pub registry: Mutex<SubnetRegistry>,
}

impl AppState {
    /// State with the default specialist population, ready to serve
    /// demo traffic.
    #[must_use]
    pub fn new(config: OracleConfig) -> Self {
        let registry =
            SubnetRegistry::with_default_population(config.challenge_history_limit, &CATALOG);
        Self {
            orchestrator: Orchestrator::new(config),
            registry: Mutex::new(registry),
        }
    }

    /// State with an empty registry. Used by tests that exercise
    /// registration and precondition paths.
    #[must_use]
    pub fn empty(config: OracleConfig) -> Self {
        Self {
            registry: Mutex::new(SubnetRegistry::new(config.challenge_history_limit)),
            orchestrator: Orchestrator::new(config),
        }
    }
}
