use serde::{Deserialize, Serialize};

/// The three challenge categories miners compete on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskType {
    #[default]
    ShortTermForecast,
    RiskIndex,
    LongRangeTrend,
}

impl TaskType {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskType::ShortTermForecast => "short_term_forecast",
            TaskType::RiskIndex => "risk_index",
            TaskType::LongRangeTrend => "long_range_trend",
        }
    }
}

/// Quality class of a simulated miner. Governs noise magnitude,
/// confidence, and latency of its predictions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MinerTier {
    Entry,
    #[default]
    Mid,
    High,
}

impl MinerTier {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            MinerTier::Entry => "entry",
            MinerTier::Mid => "mid",
            MinerTier::High => "high",
        }
    }
}

/// Seasonal and teleconnection context attached to a challenge.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ClimateConditions {
    pub season: String,
    pub enso_state: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mjo_phase: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sst_anomaly: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iod_state: Option<String>,
}

impl ClimateConditions {
    #[must_use]
    pub fn new(season: &str, enso_state: &str) -> Self {
        Self {
            season: season.to_string(),
            enso_state: enso_state.to_string(),
            mjo_phase: None,
            sst_anomaly: None,
            iod_state: None,
        }
    }
}

/// The challenge specification dispatched to miners.
///
/// Immutable once dispatched. `random_seed` pins the whole simulated
/// round; when absent the engine derives one from location and date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClimateSynapse {
    pub task_type: TaskType,
    pub location: String,
    pub target_date: String,
    pub forecast_horizon_days: u32,
    pub variables: Vec<String>,
    #[serde(default)]
    pub conditions: ClimateConditions,
    #[serde(default)]
    pub random_seed: Option<u64>,
}

/// Reference outcome used to score historical challenges.
/// Near-term challenges carry no ground truth and fall back to
/// estimated scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroundTruth {
    pub actual_temp_celsius: f64,
    pub actual_precip_mm: f64,
    pub actual_risk_index: f64,
    pub had_extreme_event: bool,
    #[serde(default)]
    pub extreme_event_type: Option<String>,
}

/// Whether a challenge is scored against a known outcome or estimated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChallengeType {
    Historical,
    NearTerm,
}

impl ChallengeType {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ChallengeType::Historical => "historical",
            ChallengeType::NearTerm => "near_term",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_type_wire_names() {
        let json = serde_json::to_string(&TaskType::ShortTermForecast).unwrap();
        assert_eq!(json, "\"short_term_forecast\"");
        let parsed: TaskType = serde_json::from_str("\"risk_index\"").unwrap();
        assert_eq!(parsed, TaskType::RiskIndex);
    }

    #[test]
    fn test_synapse_roundtrip_without_seed() {
        let synapse = ClimateSynapse {
            task_type: TaskType::LongRangeTrend,
            location: "Sahel Region, Africa".to_string(),
            target_date: "2026-06-01".to_string(),
            forecast_horizon_days: 90,
            variables: vec!["precipitation".to_string()],
            conditions: ClimateConditions::new("pre_monsoon", "la_nina_developing"),
            random_seed: None,
        };
        let json = serde_json::to_string(&synapse).unwrap();
        let back: ClimateSynapse = serde_json::from_str(&json).unwrap();
        assert_eq!(back, synapse);
    }
}
