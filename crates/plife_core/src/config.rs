use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_HEIGHT, DEFAULT_WIDTH, DISTANCE_LIMIT, DISTANCE_SCALE, SPAWN_MARGIN};

/// Simulation configuration: domain geometry and the force rule's
/// distance constants. Unlike [`crate::ParameterSet`] this is fixed for
/// the lifetime of a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Domain width in simulation units
    pub width: f64,
    /// Domain height in simulation units
    pub height: f64,
    /// Spawn inset from each edge
    pub margin: f64,
    /// Random seed for deterministic spawning and randomizing
    pub seed: u64,
    /// Interaction cutoff radius
    pub distance_limit: f64,
    /// Reference distance of the falloff power law
    pub distance_scale: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            margin: SPAWN_MARGIN,
            seed: 42,
            distance_limit: DISTANCE_LIMIT,
            distance_scale: DISTANCE_SCALE,
        }
    }
}

impl SimConfig {
    /// Parse a config from TOML text. Missing fields take their defaults.
    pub fn from_toml(content: &str) -> Result<Self, String> {
        let config: Self = toml::from_str(content).map_err(|e| format!("TOML error: {e}"))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject geometry the integrator cannot work with
    pub fn validate(&self) -> Result<(), String> {
        if !(self.width.is_finite() && self.width > 0.0) {
            return Err(format!("width must be positive and finite, got {}", self.width));
        }
        if !(self.height.is_finite() && self.height > 0.0) {
            return Err(format!("height must be positive and finite, got {}", self.height));
        }
        if !(self.distance_limit.is_finite() && self.distance_limit > 0.0) {
            return Err(format!(
                "distance_limit must be positive and finite, got {}",
                self.distance_limit
            ));
        }
        if !(self.distance_scale.is_finite() && self.distance_scale > 0.0) {
            return Err(format!(
                "distance_scale must be positive and finite, got {}",
                self.distance_scale
            ));
        }
        if !self.margin.is_finite() || self.margin < 0.0 {
            return Err(format!("margin must be non-negative, got {}", self.margin));
        }
        Ok(())
    }

    /// Half-open spawn interval along one axis of length `extent`.
    /// The margin is shrunk when it would leave no room, so the interval
    /// always lies strictly inside `[0, extent)`.
    pub fn spawn_span(&self, extent: f64) -> (f64, f64) {
        let margin = self.margin.min(extent * 0.25);
        (margin, extent - margin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = SimConfig::from_toml("width = 800.0\nseed = 7\n").unwrap();
        assert_eq!(config.width, 800.0);
        assert_eq!(config.seed, 7);
        assert_eq!(config.height, DEFAULT_HEIGHT);
        assert_eq!(config.distance_limit, DISTANCE_LIMIT);
    }

    #[test]
    fn test_invalid_geometry_rejected() {
        assert!(SimConfig::from_toml("width = 0.0").is_err());
        assert!(SimConfig::from_toml("height = -3.0").is_err());
        assert!(SimConfig::from_toml("margin = -1.0").is_err());
        assert!(SimConfig::from_toml("width = \"wide\"").is_err());
    }

    #[test]
    fn test_spawn_span_stays_inside() {
        let config = SimConfig {
            margin: 400.0,
            ..SimConfig::default()
        };
        let (lo, hi) = config.spawn_span(100.0);
        assert!(lo > 0.0 && lo < hi && hi < 100.0);

        let (lo, hi) = SimConfig::default().spawn_span(500.0);
        assert_eq!((lo, hi), (50.0, 450.0));
    }
}
