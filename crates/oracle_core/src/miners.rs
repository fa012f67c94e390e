//! Simulated miner response generation.
//!
//! Prediction quality is parameterized by tier through a lookup table
//! of distribution profiles rather than branching at call sites. The
//! miner at pool position 0 always draws from a privileged override
//! profile, which guarantees a visible top performer in every run.

use oracle_data::{
    ClimateSynapse, GroundTruth, MinerPrediction, MinerResponse, MinerTier, RiskFactor, TaskType,
};
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use rand_distr::StandardNormal;

use crate::baseline::{self, RegimeModifier};
use crate::rng::{mask_hotkey, miner_rng};
use crate::round_dp;
use crate::specialists::SpecialistCatalog;

/// Noise and quality distribution parameters for one tier.
#[derive(Debug, Clone, Copy)]
pub struct TierProfile {
    pub temp_sigma: f64,
    pub precip_sigma: f64,
    pub risk_sigma: f64,
    pub score_range: (f64, f64),
    pub latency_range_s: (f64, f64),
}

const HIGH_PROFILE: TierProfile = TierProfile {
    temp_sigma: 0.5,
    precip_sigma: 12.0,
    risk_sigma: 0.04,
    score_range: (0.82, 0.97),
    latency_range_s: (0.3, 1.2),
};

const MID_PROFILE: TierProfile = TierProfile {
    temp_sigma: 1.2,
    precip_sigma: 25.0,
    risk_sigma: 0.08,
    score_range: (0.62, 0.82),
    latency_range_s: (0.8, 2.2),
};

const ENTRY_PROFILE: TierProfile = TierProfile {
    temp_sigma: 2.5,
    precip_sigma: 45.0,
    risk_sigma: 0.15,
    score_range: (0.40, 0.62),
    latency_range_s: (1.5, 3.5),
};

/// Override profile for the miner at pool position 0, regardless of
/// its nominal tier.
pub const TOP_PROFILE: TierProfile = TierProfile {
    temp_sigma: 0.2,
    precip_sigma: 5.0,
    risk_sigma: 0.02,
    score_range: (0.93, 0.99),
    latency_range_s: (0.2, 0.6),
};

/// The distribution profile for a tier.
#[must_use]
pub fn tier_profile(tier: MinerTier) -> &'static TierProfile {
    match tier {
        MinerTier::High => &HIGH_PROFILE,
        MinerTier::Mid => &MID_PROFILE,
        MinerTier::Entry => &ENTRY_PROFILE,
    }
}

/// Registry-path per-tier parameters: noise, confidence, latency in
/// milliseconds, and the simulated data-source fan-in.
#[derive(Debug, Clone, Copy)]
pub struct PredictionProfile {
    pub temp_sigma: f64,
    pub precip_sigma: f64,
    pub confidence_range: (f64, f64),
    pub latency_range_ms: (f64, f64),
    pub data_source_range: (u32, u32),
}

const HIGH_PREDICTION: PredictionProfile = PredictionProfile {
    temp_sigma: 0.5,
    precip_sigma: 10.0,
    confidence_range: (0.82, 0.96),
    latency_range_ms: (200.0, 800.0),
    data_source_range: (8, 15),
};

const MID_PREDICTION: PredictionProfile = PredictionProfile {
    temp_sigma: 1.2,
    precip_sigma: 22.0,
    confidence_range: (0.65, 0.82),
    latency_range_ms: (500.0, 2000.0),
    data_source_range: (4, 9),
};

const ENTRY_PREDICTION: PredictionProfile = PredictionProfile {
    temp_sigma: 2.5,
    precip_sigma: 40.0,
    confidence_range: (0.40, 0.65),
    latency_range_ms: (1500.0, 4000.0),
    data_source_range: (1, 5),
};

/// The registry-path profile for a tier.
#[must_use]
pub fn prediction_profile(tier: MinerTier) -> &'static PredictionProfile {
    match tier {
        MinerTier::High => &HIGH_PREDICTION,
        MinerTier::Mid => &MID_PREDICTION,
        MinerTier::Entry => &ENTRY_PREDICTION,
    }
}

fn gauss(rng: &mut ChaCha8Rng, sigma: f64) -> f64 {
    let z: f64 = rng.sample(StandardNormal);
    z * sigma
}

/// Reference climate values a batch of predictions is centered on:
/// the ground truth when known, else baseline adjusted by the season
/// and ENSO regime modifiers.
#[derive(Debug, Clone, Copy)]
struct ReferenceValues {
    temp: f64,
    precip: f64,
    risk: f64,
}

fn resolve_reference(
    synapse: &ClimateSynapse,
    ground_truth: Option<&GroundTruth>,
) -> ReferenceValues {
    let record = baseline::lookup_baseline(&synapse.location);
    let season = baseline::lookup_season(&synapse.conditions.season);
    let enso = baseline::lookup_enso(&synapse.conditions.enso_state);

    match ground_truth {
        Some(truth) => ReferenceValues {
            temp: truth.actual_temp_celsius,
            precip: truth.actual_precip_mm,
            risk: truth.actual_risk_index,
        },
        None => ReferenceValues {
            temp: record.base_temp + season.temp_delta,
            precip: record.base_precip_mm * season.precip_mult * enso.precip_mult,
            risk: record.risk_baseline + season.risk_increase + enso.risk_increase,
        },
    }
}

/// Generates one response per selected specialist miner.
///
/// Selection is positional: the first `min(count, pool_size)` entries
/// of the task type's ordered pool. Each miner draws from its own
/// generator derived from the challenge seed and its pool position,
/// so re-running with the same synapse reproduces the batch exactly.
/// The returned list is sorted by descending score with dense ranks
/// 1..N; ties keep generation order.
#[must_use]
pub fn generate_responses(
    task_type: TaskType,
    synapse: &ClimateSynapse,
    ground_truth: Option<&GroundTruth>,
    catalog: &SpecialistCatalog,
    count: usize,
) -> Vec<MinerResponse> {
    let spec = catalog.for_task(task_type);
    let selected = &spec.miners[..count.min(spec.miners.len())];
    let record = baseline::lookup_baseline(&synapse.location);
    let reference = resolve_reference(synapse, ground_truth);
    let base_seed = synapse
        .random_seed
        .unwrap_or_else(|| crate::rng::derive_seed(&synapse.location, &synapse.target_date));

    let mut responses: Vec<MinerResponse> = Vec::with_capacity(selected.len());
    for (i, miner) in selected.iter().enumerate() {
        let mut rng = miner_rng(base_seed, i as u64);
        let profile = tier_profile(miner.tier);

        let mut temp_error = gauss(&mut rng, profile.temp_sigma);
        let mut precip_error = gauss(&mut rng, profile.precip_sigma);
        let mut risk_error = gauss(&mut rng, profile.risk_sigma);
        let mut score = round_dp(
            rng.gen_range(profile.score_range.0..profile.score_range.1),
            4,
        );
        let mut response_time = round_dp(
            rng.gen_range(profile.latency_range_s.0..profile.latency_range_s.1),
            2,
        );

        // Position 0 always showcases a top performer.
        if i == 0 {
            score = round_dp(
                rng.gen_range(TOP_PROFILE.score_range.0..TOP_PROFILE.score_range.1),
                4,
            );
            response_time = round_dp(
                rng.gen_range(TOP_PROFILE.latency_range_s.0..TOP_PROFILE.latency_range_s.1),
                2,
            );
            temp_error = gauss(&mut rng, TOP_PROFILE.temp_sigma);
            precip_error = gauss(&mut rng, TOP_PROFILE.precip_sigma);
            risk_error = gauss(&mut rng, TOP_PROFILE.risk_sigma);
        }

        let predicted_temp = round_dp(reference.temp + temp_error, 1);
        let predicted_precip = round_dp((reference.precip + precip_error).max(0.0), 1);
        let predicted_risk = round_dp((reference.risk + risk_error).clamp(0.0, 1.0), 2);
        let predicted_humidity =
            round_dp((record.base_humidity + gauss(&mut rng, 5.0)).clamp(10.0, 100.0), 1);
        let predicted_wind = round_dp((record.base_wind_kmh + gauss(&mut rng, 4.0)).max(0.0), 1);
        let confidence = round_dp(
            if miner.tier == MinerTier::Entry {
                rng.gen_range(0.4..0.65)
            } else {
                rng.gen_range(0.6..0.95)
            },
            2,
        );

        let analysis = spec
            .analyses
            .get(i)
            .or(spec.analyses.last())
            .copied()
            .unwrap_or_default();

        responses.push(MinerResponse {
            uid: i as u64 + 1,
            hotkey: mask_hotkey(miner.hotkey),
            name: miner.name.to_string(),
            tier: miner.tier,
            specialty: miner.specialty.to_string(),
            predicted_temp_celsius: predicted_temp,
            predicted_precip_mm: predicted_precip,
            predicted_risk_index: predicted_risk,
            predicted_humidity_pct: predicted_humidity,
            predicted_wind_kmh: predicted_wind,
            confidence,
            score,
            response_time_s: response_time,
            analysis: analysis.to_string(),
            rank: i as u32 + 1,
            tao_earned: 0.0,
        });
    }

    // Stable sort: ties keep generation order.
    responses.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    for (i, response) in responses.iter_mut().enumerate() {
        response.rank = i as u32 + 1;
    }

    responses
}

fn title_case(key: &str) -> String {
    key.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn risk_factors(season_name: &str, season: &RegimeModifier, enso_name: &str, enso: &RegimeModifier) -> Vec<RiskFactor> {
    let mut factors = Vec::new();
    if season.risk_increase > 0.1 {
        factors.push(RiskFactor {
            factor: title_case(season_name),
            severity: round_dp(season.risk_increase * 5.0, 1),
            description: "Seasonal pattern increases climate risk".to_string(),
        });
    }
    if enso.risk_increase > 0.0 {
        factors.push(RiskFactor {
            factor: title_case(enso_name),
            severity: round_dp(enso.risk_increase * 5.0, 1),
            description: "ENSO state modifying regional patterns".to_string(),
        });
    }
    factors
}

/// Simulates one registered miner processing a challenge.
///
/// Unlike [`generate_responses`] this path has no ground truth to
/// anchor on: predictions are built from the baseline and regime
/// modifiers alone. The caller supplies the generator, and with it
/// the per-miner seed.
#[must_use]
pub fn run_miner_prediction(
    synapse: &ClimateSynapse,
    tier: MinerTier,
    rng: &mut ChaCha8Rng,
) -> MinerPrediction {
    let record = baseline::lookup_baseline(&synapse.location);
    let season = baseline::lookup_season(&synapse.conditions.season);
    let enso = baseline::lookup_enso(&synapse.conditions.enso_state);
    let profile = prediction_profile(tier);

    let noise_temp = gauss(rng, profile.temp_sigma);
    let noise_precip = gauss(rng, profile.precip_sigma);
    let confidence = round_dp(
        rng.gen_range(profile.confidence_range.0..profile.confidence_range.1),
        2,
    );
    let latency = round_dp(
        rng.gen_range(profile.latency_range_ms.0..profile.latency_range_ms.1),
        0,
    );
    let data_sources =
        rng.gen_range(profile.data_source_range.0..=profile.data_source_range.1);

    let predicted_temp = round_dp(record.base_temp + season.temp_delta + noise_temp, 1);
    let predicted_precip = round_dp(
        (record.base_precip_mm * season.precip_mult * enso.precip_mult + noise_precip).max(0.0),
        1,
    );
    let predicted_humidity =
        round_dp((record.base_humidity + gauss(rng, 5.0)).clamp(10.0, 100.0), 1);
    let predicted_wind = round_dp((record.base_wind_kmh + gauss(rng, 4.0)).max(0.0), 1);
    let risk_index = round_dp(
        (record.risk_baseline + season.risk_increase + enso.risk_increase + gauss(rng, 0.05))
            .clamp(0.0, 1.0),
        2,
    );

    MinerPrediction {
        miner_uid: 0,
        miner_hotkey: String::new(),
        predicted_temp_celsius: predicted_temp,
        predicted_precip_mm: predicted_precip,
        predicted_humidity_pct: predicted_humidity,
        predicted_wind_kmh: predicted_wind,
        risk_index,
        confidence,
        risk_factors: risk_factors(
            &synapse.conditions.season,
            season,
            &synapse.conditions.enso_state,
            enso,
        ),
        response_time_ms: latency,
        data_sources,
    }
}
