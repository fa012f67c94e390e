//! Static climate lookup tables.
//!
//! Baselines give the nominal climate of a location; regime modifiers
//! adjust it for the season and the ENSO/teleconnection state. Lookups
//! are total: unknown keys fall back to a fixed default record rather
//! than an error path, keeping the engine side-effect-free.

/// Nominal climate values for one location.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaselineRecord {
    pub base_temp: f64,
    pub base_precip_mm: f64,
    pub base_humidity: f64,
    pub base_wind_kmh: f64,
    pub risk_baseline: f64,
}

/// Additive/multiplicative adjustment applied on top of a baseline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegimeModifier {
    pub temp_delta: f64,
    pub precip_mult: f64,
    pub risk_increase: f64,
}

/// Fallback when a location is not in the table.
pub const DEFAULT_BASELINE: BaselineRecord = BaselineRecord {
    base_temp: 25.0,
    base_precip_mm: 100.0,
    base_humidity: 70.0,
    base_wind_kmh: 15.0,
    risk_baseline: 0.25,
};

/// No-op modifier used for unrecognized seasons and ENSO states.
pub const NEUTRAL_MODIFIER: RegimeModifier = RegimeModifier {
    temp_delta: 0.0,
    precip_mult: 1.0,
    risk_increase: 0.0,
};

const CLIMATE_BASELINES: &[(&str, BaselineRecord)] = &[
    (
        "Jakarta, Indonesia",
        BaselineRecord {
            base_temp: 28.5,
            base_precip_mm: 150.0,
            base_humidity: 82.0,
            base_wind_kmh: 15.0,
            risk_baseline: 0.35,
        },
    ),
    (
        "Miami, Florida",
        BaselineRecord {
            base_temp: 30.0,
            base_precip_mm: 120.0,
            base_humidity: 75.0,
            base_wind_kmh: 20.0,
            risk_baseline: 0.30,
        },
    ),
    (
        "Sahel Region, Africa",
        BaselineRecord {
            base_temp: 37.0,
            base_precip_mm: 60.0,
            base_humidity: 35.0,
            base_wind_kmh: 18.0,
            risk_baseline: 0.40,
        },
    ),
    (
        "Tokyo, Japan",
        BaselineRecord {
            base_temp: 22.0,
            base_precip_mm: 80.0,
            base_humidity: 65.0,
            base_wind_kmh: 12.0,
            risk_baseline: 0.20,
        },
    ),
    (
        "London, UK",
        BaselineRecord {
            base_temp: 14.0,
            base_precip_mm: 55.0,
            base_humidity: 78.0,
            base_wind_kmh: 22.0,
            risk_baseline: 0.15,
        },
    ),
    (
        "Sydney, Australia",
        BaselineRecord {
            base_temp: 25.0,
            base_precip_mm: 70.0,
            base_humidity: 60.0,
            base_wind_kmh: 16.0,
            risk_baseline: 0.22,
        },
    ),
];

const SEASON_IMPACTS: &[(&str, RegimeModifier)] = &[
    (
        "monsoon_peak",
        RegimeModifier {
            temp_delta: 1.0,
            precip_mult: 2.5,
            risk_increase: 0.25,
        },
    ),
    (
        "hurricane_peak",
        RegimeModifier {
            temp_delta: 1.5,
            precip_mult: 3.0,
            risk_increase: 0.35,
        },
    ),
    (
        "pre_monsoon",
        RegimeModifier {
            temp_delta: 2.0,
            precip_mult: 0.6,
            risk_increase: 0.20,
        },
    ),
    (
        "dry_season",
        RegimeModifier {
            temp_delta: 0.5,
            precip_mult: 0.3,
            risk_increase: 0.05,
        },
    ),
    (
        "winter",
        RegimeModifier {
            temp_delta: -5.0,
            precip_mult: 0.8,
            risk_increase: 0.10,
        },
    ),
    ("normal", NEUTRAL_MODIFIER),
];

const ENSO_IMPACTS: &[(&str, RegimeModifier)] = &[
    (
        "la_nina_moderate",
        RegimeModifier {
            temp_delta: 0.0,
            precip_mult: 1.3,
            risk_increase: 0.10,
        },
    ),
    (
        "la_nina_developing",
        RegimeModifier {
            temp_delta: 0.0,
            precip_mult: 0.8,
            risk_increase: 0.15,
        },
    ),
    (
        "el_nino_moderate",
        RegimeModifier {
            temp_delta: 0.0,
            precip_mult: 0.7,
            risk_increase: 0.12,
        },
    ),
    ("neutral", NEUTRAL_MODIFIER),
];

/// Returns the baseline for a known location, else [`DEFAULT_BASELINE`].
#[must_use]
pub fn lookup_baseline(location: &str) -> &'static BaselineRecord {
    CLIMATE_BASELINES
        .iter()
        .find(|(name, _)| *name == location)
        .map(|(_, record)| record)
        .unwrap_or(&DEFAULT_BASELINE)
}

/// Returns the modifier for a known season, else [`NEUTRAL_MODIFIER`].
#[must_use]
pub fn lookup_season(season: &str) -> &'static RegimeModifier {
    SEASON_IMPACTS
        .iter()
        .find(|(name, _)| *name == season)
        .map(|(_, modifier)| modifier)
        .unwrap_or(&NEUTRAL_MODIFIER)
}

/// Returns the modifier for a known ENSO state, else [`NEUTRAL_MODIFIER`].
#[must_use]
pub fn lookup_enso(state: &str) -> &'static RegimeModifier {
    ENSO_IMPACTS
        .iter()
        .find(|(name, _)| *name == state)
        .map(|(_, modifier)| modifier)
        .unwrap_or(&NEUTRAL_MODIFIER)
}

/// Known challenge locations, in table order.
#[must_use]
pub fn known_locations() -> Vec<&'static str> {
    CLIMATE_BASELINES.iter().map(|(name, _)| *name).collect()
}

/// Known season names, in table order.
#[must_use]
pub fn known_seasons() -> Vec<&'static str> {
    SEASON_IMPACTS.iter().map(|(name, _)| *name).collect()
}

/// Known ENSO state names, in table order.
#[must_use]
pub fn known_enso_states() -> Vec<&'static str> {
    ENSO_IMPACTS.iter().map(|(name, _)| *name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_location_exact_record() {
        let jakarta = lookup_baseline("Jakarta, Indonesia");
        assert_eq!(jakarta.base_temp, 28.5);
        assert_eq!(jakarta.base_precip_mm, 150.0);
        assert_eq!(jakarta.risk_baseline, 0.35);
    }

    #[test]
    fn test_unknown_location_falls_back_to_default() {
        let record = lookup_baseline("Atlantis");
        assert_eq!(*record, DEFAULT_BASELINE);
    }

    #[test]
    fn test_unknown_regimes_are_neutral() {
        assert_eq!(*lookup_season("eternal_autumn"), NEUTRAL_MODIFIER);
        assert_eq!(*lookup_enso("la_nina_extreme"), NEUTRAL_MODIFIER);
    }

    #[test]
    fn test_season_modifier_values() {
        let monsoon = lookup_season("monsoon_peak");
        assert_eq!(monsoon.temp_delta, 1.0);
        assert_eq!(monsoon.precip_mult, 2.5);
        assert_eq!(monsoon.risk_increase, 0.25);
        let winter = lookup_season("winter");
        assert_eq!(winter.temp_delta, -5.0);
    }
}
