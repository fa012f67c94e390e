//! HTTP route handlers.
//!
//! Thin adapters between the axum transport layer and the subnet
//! orchestrator: extract, delegate, serialize. Engine errors map to
//! structured JSON error bodies (not-found 404, conflict 409,
//! precondition 400).

use std::sync::{Arc, MutexGuard, PoisonError};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use oracle_core::{miners, rng, round_dp, scenarios};
use oracle_data::{
    ClimateConditions, ClimateSynapse, LeaderboardEntry, MinerRecord, MinerRegister, MinerTier,
    NetworkStatus, SubnetHyperparameters, TaskType, ValidatorRecord, ValidatorRegister,
};
use oracle_subnet::{SubnetError, SubnetRegistry};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::AppState;

/// Builds the API router. Static assets are layered on in `main`.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/predict", post(predict))
        .route("/data-sources", get(data_sources))
        .route("/subnet-info", get(subnet_info))
        .route("/miners", get(list_miners))
        .route("/miners/register", post(register_miner))
        .route("/miners/:uid", get(get_miner))
        .route("/miners/:uid/predict", post(miner_predict))
        .route("/validators", get(list_validators))
        .route("/validators/register", post(register_validator))
        .route("/validators/:uid", get(get_validator))
        .route(
            "/validators/:uid/generate-challenge",
            post(generate_challenge),
        )
        .route("/validators/:uid/run-challenge", post(run_challenge))
        .route("/network/status", get(network_status))
        .route("/network/leaderboard", get(leaderboard))
        .route("/network/challenges", get(recent_challenges))
        .route("/network/hyperparameters", get(hyperparameters))
        .route("/network/emission-distribution", get(emission_distribution))
        .route("/demo/full-tempo-cycle", post(full_tempo_cycle))
        .route("/demo/compare-miners", post(compare_miners))
        .route("/api/demo-scenarios", get(list_demo_scenarios))
        .route("/api/demo/:scenario_key", get(run_demo))
        .with_state(state)
}

/// Structured error response.
struct ApiError {
    status: StatusCode,
    message: String,
}

impl From<SubnetError> for ApiError {
    fn from(err: SubnetError) -> Self {
        let status = match err {
            SubnetError::NotFound(_) => StatusCode::NOT_FOUND,
            SubnetError::Conflict(_) => StatusCode::CONFLICT,
            SubnetError::Precondition(_) => StatusCode::BAD_REQUEST,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(serde_json::json!({ "error": self.message })),
        )
            .into_response()
    }
}

fn lock_registry(state: &AppState) -> MutexGuard<'_, SubnetRegistry> {
    state.registry.lock().unwrap_or_else(PoisonError::into_inner)
}

// ── User-facing prediction ──

#[derive(Debug, Deserialize)]
struct ClimateQuery {
    location: String,
    date: String,
}

#[derive(Debug, Serialize)]
struct ClimateStatus {
    location: String,
    date: String,
    predicted_temp_celsius: f64,
    predicted_precip_mm: f64,
    predicted_humidity_pct: f64,
    predicted_wind_kmh: f64,
    risk_index: f64,
    confidence: f64,
    data_sources_used: u32,
    miners_consulted: usize,
    timestamp: chrono::DateTime<chrono::Utc>,
}

async fn predict(
    State(state): State<Arc<AppState>>,
    Json(query): Json<ClimateQuery>,
) -> Json<ClimateStatus> {
    let synapse = ClimateSynapse {
        task_type: TaskType::ShortTermForecast,
        location: query.location.clone(),
        target_date: query.date.clone(),
        forecast_horizon_days: 7,
        variables: vec!["temperature".to_string(), "precipitation".to_string()],
        conditions: ClimateConditions::new("normal", "neutral"),
        random_seed: None,
    };
    let mut stream = rng::engine_rng(rng::derive_seed(&query.location, &query.date));
    let result = miners::run_miner_prediction(&synapse, MinerTier::High, &mut stream);

    Json(ClimateStatus {
        location: query.location,
        date: query.date,
        predicted_temp_celsius: result.predicted_temp_celsius,
        predicted_precip_mm: result.predicted_precip_mm,
        predicted_humidity_pct: result.predicted_humidity_pct,
        predicted_wind_kmh: result.predicted_wind_kmh,
        risk_index: result.risk_index,
        confidence: result.confidence,
        data_sources_used: result.data_sources,
        miners_consulted: state.orchestrator.config().demo_miner_count,
        timestamp: chrono::Utc::now(),
    })
}

// ── Info ──

async fn data_sources() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "sources": [
            {"name": "NOAA", "type": "Weather Stations", "coverage": "30,000+ global stations"},
            {"name": "ECMWF", "type": "Numerical Weather Prediction", "coverage": "Global 0.25 degree grid"},
            {"name": "NASA POWER", "type": "Satellite Observations", "coverage": "Global daily"},
            {"name": "OpenMeteo", "type": "Open Weather API", "coverage": "Global hourly"}
        ],
        "total_stations": 30000,
        "update_frequency": "Every 6 hours"
    }))
}

async fn subnet_info() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "subnet_name": "AI Climate Oracle",
        "network": "Bittensor",
        "scoring_formula": "0.40*Temp + 0.25*Precip + 0.15*Risk + 0.10*Latency + 0.10*Consistency",
        "extreme_event_bonus": "1.5x",
        "challenge_split": {"historical": "70%", "near_term": "30%"},
        "emission_split": {"subnet_owner": "18%", "miners": "41%", "validators_stakers": "41%"},
        "consensus": "Yuma Consensus"
    }))
}

// ── Miners ──

async fn list_miners(State(state): State<Arc<AppState>>) -> Json<Vec<MinerRecord>> {
    let registry = lock_registry(&state);
    Json(registry.get_miners().values().cloned().collect())
}

async fn get_miner(
    State(state): State<Arc<AppState>>,
    Path(uid): Path<u64>,
) -> Result<Json<MinerRecord>, ApiError> {
    let registry = lock_registry(&state);
    registry
        .get_miner(uid)
        .cloned()
        .map(Json)
        .ok_or_else(|| SubnetError::not_found(format!("Miner UID {uid} not found")).into())
}

async fn register_miner(
    State(state): State<Arc<AppState>>,
    Json(registration): Json<MinerRegister>,
) -> Result<Json<MinerRecord>, ApiError> {
    let mut registry = lock_registry(&state);
    let record = registry.add_miner(registration)?;
    Ok(Json(record))
}

async fn miner_predict(
    State(state): State<Arc<AppState>>,
    Path(uid): Path<u64>,
    Json(synapse): Json<ClimateSynapse>,
) -> Result<Json<oracle_data::MinerPrediction>, ApiError> {
    let registry = lock_registry(&state);
    let prediction = state
        .orchestrator
        .predict_for_miner(&registry, uid, &synapse)?;
    Ok(Json(prediction))
}

// ── Validators ──

async fn list_validators(State(state): State<Arc<AppState>>) -> Json<Vec<ValidatorRecord>> {
    let registry = lock_registry(&state);
    Json(registry.get_validators().values().cloned().collect())
}

async fn get_validator(
    State(state): State<Arc<AppState>>,
    Path(uid): Path<u64>,
) -> Result<Json<ValidatorRecord>, ApiError> {
    let registry = lock_registry(&state);
    registry
        .get_validator(uid)
        .cloned()
        .map(Json)
        .ok_or_else(|| SubnetError::not_found(format!("Validator UID {uid} not found")).into())
}

async fn register_validator(
    State(state): State<Arc<AppState>>,
    Json(registration): Json<ValidatorRegister>,
) -> Result<Json<ValidatorRecord>, ApiError> {
    let mut registry = lock_registry(&state);
    let record = registry.add_validator(registration)?;
    Ok(Json(record))
}

#[derive(Debug, Deserialize)]
struct TaskTypeQuery {
    #[serde(default)]
    task_type: TaskType,
}

async fn generate_challenge(
    State(state): State<Arc<AppState>>,
    Path(uid): Path<u64>,
    Query(query): Query<TaskTypeQuery>,
) -> Result<Json<ClimateSynapse>, ApiError> {
    let mut registry = lock_registry(&state);
    let synapse = state
        .orchestrator
        .generate_challenge(&mut registry, uid, query.task_type)?;
    Ok(Json(synapse))
}

async fn run_challenge(
    State(state): State<Arc<AppState>>,
    Path(uid): Path<u64>,
    Query(query): Query<TaskTypeQuery>,
    synapse: Option<Json<ClimateSynapse>>,
) -> Result<Json<oracle_data::ChallengeResult>, ApiError> {
    let mut registry = lock_registry(&state);
    let result = state.orchestrator.run_challenge(
        &mut registry,
        uid,
        query.task_type,
        synapse.map(|Json(s)| s),
    )?;
    Ok(Json(result))
}

// ── Network ──

async fn network_status(State(state): State<Arc<AppState>>) -> Json<NetworkStatus> {
    let registry = lock_registry(&state);
    let chain = registry.get_state();
    let top_miners: Vec<MinerRecord> = registry.leaderboard().into_iter().take(5).collect();

    Json(NetworkStatus {
        block_height: chain.block_height,
        current_tempo: chain.current_tempo,
        total_miners: registry.get_miners().len(),
        active_miners: registry.active_miners().count(),
        total_validators: registry.get_validators().len(),
        active_validators: registry.active_validators().count(),
        total_stake: registry.total_stake(),
        total_emission_per_tempo: chain.total_emission_per_tempo,
        hyperparameters: registry.hyperparameters().clone(),
        top_miners,
    })
}

async fn leaderboard(State(state): State<Arc<AppState>>) -> Json<Vec<LeaderboardEntry>> {
    let registry = lock_registry(&state);
    // Cosmetic per-variable spreads around the average score come from
    // a fixed-seed stream so the board is stable between refreshes.
    let mut spread = rng::engine_rng(42);
    let entries = registry
        .leaderboard()
        .into_iter()
        .enumerate()
        .map(|(i, m)| {
            let temp_factor: f64 = spread.gen_range(0.9..1.1);
            let precip_factor: f64 = spread.gen_range(0.75..1.0);
            let streak_bonus: i64 = spread.gen_range(0..=5);
            LeaderboardEntry {
                rank: i as u32 + 1,
                miner_uid: m.uid,
                miner_hotkey: m.hotkey.clone(),
                tier: m.tier,
                avg_score: m.avg_score,
                total_challenges: m.total_challenges,
                total_tau_earned: m.total_tau_earned,
                temp_accuracy_avg: round_dp(m.avg_score * temp_factor, 3),
                precip_accuracy_avg: round_dp(m.avg_score * precip_factor, 3),
                streak: (((m.avg_score - 0.5) * 20.0) as i64 + streak_bonus).max(0) as u32,
            }
        })
        .collect();
    Json(entries)
}

#[derive(Debug, Deserialize)]
struct LimitQuery {
    #[serde(default = "default_challenge_limit")]
    limit: usize,
}

fn default_challenge_limit() -> usize {
    10
}

async fn recent_challenges(
    State(state): State<Arc<AppState>>,
    Query(query): Query<LimitQuery>,
) -> Json<Vec<oracle_data::ChallengeResult>> {
    let registry = lock_registry(&state);
    Json(registry.get_challenges(query.limit.clamp(1, 50)))
}

async fn hyperparameters(State(state): State<Arc<AppState>>) -> Json<SubnetHyperparameters> {
    let registry = lock_registry(&state);
    Json(registry.hyperparameters().clone())
}

async fn emission_distribution(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let registry = lock_registry(&state);
    let chain = registry.get_state();
    let hp = registry.hyperparameters();
    let total = chain.total_emission_per_tempo;
    let tempo = chain.current_tempo;

    let total_avg: f64 = registry
        .get_miners()
        .values()
        .map(|m| m.avg_score)
        .sum::<f64>()
        .max(1.0);
    let top_earnings: Vec<serde_json::Value> = registry
        .leaderboard()
        .into_iter()
        .take(5)
        .map(|m| {
            serde_json::json!({
                "uid": m.uid,
                "hotkey": format!("{}...", &m.hotkey[..m.hotkey.len().min(16)]),
                "tier": m.tier,
                "score": m.avg_score,
                "estimated_tao_this_tempo":
                    round_dp(total * hp.miner_emission_share * m.avg_score / total_avg, 6),
            })
        })
        .collect();

    Json(serde_json::json!({
        "tempo": tempo,
        "total_emission_tao": total,
        "distribution": {
            "subnet_owner": {"share": "18%", "amount_tao": round_dp(total * hp.owner_emission_share, 6)},
            "miners_total": {"share": "41%", "amount_tao": round_dp(total * hp.miner_emission_share, 6)},
            "validators_stakers_total": {"share": "41%", "amount_tao": round_dp(total * hp.validator_emission_share, 6)},
        },
        "top_miner_earnings": top_earnings,
    }))
}

// ── Demo simulation ──

async fn full_tempo_cycle(
    State(state): State<Arc<AppState>>,
) -> Result<Json<oracle_data::TempoCycleReport>, ApiError> {
    let mut registry = lock_registry(&state);
    let report = state.orchestrator.run_tempo_cycle(&mut registry)?;
    Ok(Json(report))
}

async fn compare_miners(
    State(state): State<Arc<AppState>>,
    Json(synapse): Json<ClimateSynapse>,
) -> Json<oracle_data::ComparisonReport> {
    let registry = lock_registry(&state);
    Json(state.orchestrator.compare_miners(&registry, synapse))
}

async fn list_demo_scenarios() -> Json<Vec<scenarios::ScenarioSummary>> {
    Json(scenarios::scenario_list())
}

async fn run_demo(
    State(state): State<Arc<AppState>>,
    Path(scenario_key): Path<String>,
) -> Result<Json<oracle_data::DemoRun>, ApiError> {
    let run = state.orchestrator.run_demo_scenario(&scenario_key)?;
    Ok(Json(run))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use oracle_core::OracleConfig;
    use tower::util::ServiceExt;

    fn create_app() -> Router {
        router(Arc::new(AppState::new(OracleConfig::default())))
    }

    fn create_empty_app() -> Router {
        router(Arc::new(AppState::empty(OracleConfig::default())))
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_demo1_full_run() {
        let app = create_app();
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/demo/demo1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["miner_nodes_consulted"], 6);
        assert_eq!(json["miner_responses"].as_array().unwrap().len(), 6);
        assert_eq!(json["synapse"]["random_seed"], 42001);
    }

    #[tokio::test]
    async fn test_unknown_demo_scenario_is_404() {
        let app = create_app();
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/demo/demo99")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_json(response).await;
        assert!(json["error"].as_str().unwrap().contains("demo99"));
    }

    #[tokio::test]
    async fn test_list_miners_seeded() {
        let app = create_app();
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/miners")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json.as_array().unwrap().len(), 6);
    }

    #[tokio::test]
    async fn test_unknown_miner_is_404() {
        let app = create_app();
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/miners/999")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_duplicate_hotkey_registration_conflict() {
        let app = create_app();
        let payload = r#"{"hotkey": "5Fnew1", "coldkey": "5Cnew1", "tier": "mid"}"#;
        let first = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/miners/register")
                    .header("content-type", "application/json")
                    .body(Body::from(payload))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(first.status(), StatusCode::OK);
        let json = body_json(first).await;
        assert_eq!(json["uid"], 7);

        let second = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/miners/register")
                    .header("content-type", "application/json")
                    .body(Body::from(payload))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(second.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_tempo_cycle_without_validators_is_400() {
        let app = create_empty_app();
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/demo/full-tempo-cycle")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert!(json["error"].as_str().unwrap().contains("validators"));
    }

    #[tokio::test]
    async fn test_predict_is_stable_for_location_and_date() {
        let payload = r#"{"location": "Tokyo, Japan", "date": "2026-03-10"}"#;
        let mut bodies = Vec::new();
        for _ in 0..2 {
            let response = create_app()
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/predict")
                        .header("content-type", "application/json")
                        .body(Body::from(payload))
                        .unwrap(),
                )
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
            let json = body_json(response).await;
            bodies.push((
                json["predicted_temp_celsius"].clone(),
                json["predicted_precip_mm"].clone(),
                json["risk_index"].clone(),
            ));
        }
        assert_eq!(bodies[0], bodies[1]);
    }

    #[tokio::test]
    async fn test_network_status_counts() {
        let app = create_app();
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/network/status")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["total_miners"], 6);
        assert_eq!(json["total_validators"], 3);
        assert_eq!(json["hyperparameters"]["max_uids"], 256);
        assert_eq!(json["top_miners"].as_array().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_run_challenge_records_history() {
        let app = create_app();
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/validators/1/run-challenge?task_type=risk_index")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["scores"].as_array().unwrap().len(), 6);
        assert_eq!(json["scores"][0]["rank"], 1);

        let history = app
            .oneshot(
                Request::builder()
                    .uri("/network/challenges?limit=5")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let json = body_json(history).await;
        assert_eq!(json.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_compare_miners_report() {
        let app = create_app();
        let synapse = r#"{
            "task_type": "short_term_forecast",
            "location": "Jakarta, Indonesia",
            "target_date": "2026-02-25",
            "forecast_horizon_days": 7,
            "variables": ["temperature"],
            "conditions": {"season": "monsoon_peak", "enso_state": "neutral"},
            "random_seed": 777
        }"#;
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/demo/compare-miners")
                    .header("content-type", "application/json")
                    .body(Body::from(synapse))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["total_miners_queried"], 6);
        assert!(json["analysis"]["highest_confidence_miner"].is_u64());
    }
}
