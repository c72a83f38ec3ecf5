//! Configuration for cave generation.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::seeds::CaveSeed;

/// Smallest grid side that still has a 3x3 interior for the smoother.
pub const MIN_GRID_SIZE: usize = 5;
/// Accepted range for [`CaveConfig::fill_percent`].
pub const FILL_PERCENT_RANGE: (u32, u32) = (40, 60);
/// Smallest brush that still joins rooms touching only at a corner.
pub const MIN_PASSAGE_RADIUS: i32 = 1;

/// Tuning parameters for one `create_map` call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaveConfig {
    /// Side length of the square grid.
    pub size: usize,

    /// Chance (percent) that an unconstrained cell starts open.
    pub fill_percent: u32,

    /// Seed for the random stream. Ignored when `use_random_seed` is set.
    pub seed: CaveSeed,

    /// Draw a fresh seed for every area.
    pub use_random_seed: bool,

    /// Smoothing passes applied before region cleanup.
    pub smooth_amount: u32,

    /// Open regions smaller than this are filled in.
    pub min_room_size: usize,

    /// Wall regions smaller than this are hollowed out.
    pub min_wall_size: usize,

    /// Brush radius used when carving passages between rooms.
    pub passage_radius: i32,
}

impl Default for CaveConfig {
    fn default() -> Self {
        Self {
            size: 50,
            fill_percent: 45,
            seed: CaveSeed::default(),
            use_random_seed: false,
            smooth_amount: 5,
            min_room_size: 20,
            min_wall_size: 20,
            passage_radius: 10,
        }
    }
}

impl CaveConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: CaveConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Reject parameters the pipeline cannot honor.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size < MIN_GRID_SIZE {
            return Err(ConfigError::GridTooSmall {
                size: self.size,
                min: MIN_GRID_SIZE,
            });
        }

        let (min, max) = FILL_PERCENT_RANGE;
        if !(min..=max).contains(&self.fill_percent) {
            return Err(ConfigError::FillPercentOutOfRange {
                value: self.fill_percent,
                min,
                max,
            });
        }

        let cells = self.size * self.size;
        for (name, value) in [
            ("min_room_size", self.min_room_size),
            ("min_wall_size", self.min_wall_size),
        ] {
            if value > cells {
                return Err(ConfigError::ThresholdTooLarge { name, value, cells });
            }
        }

        if self.passage_radius < 0 {
            return Err(ConfigError::NegativeRadius(self.passage_radius));
        }
        let max_radius = i32::try_from(self.size).unwrap_or(i32::MAX);
        if !(MIN_PASSAGE_RADIUS..=max_radius).contains(&self.passage_radius) {
            return Err(ConfigError::PassageRadiusOutOfRange {
                value: self.passage_radius,
                min: MIN_PASSAGE_RADIUS,
                max: max_radius,
            });
        }

        Ok(())
    }

    /// The seed this run will actually use.
    pub fn resolve_seed(&self) -> CaveSeed {
        if self.use_random_seed {
            CaveSeed::random()
        } else {
            self.seed.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(CaveConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_tiny_grid() {
        let config = CaveConfig { size: 4, ..Default::default() };
        assert!(matches!(config.validate(), Err(ConfigError::GridTooSmall { size: 4, .. })));
    }

    #[test]
    fn test_rejects_fill_percent_out_of_range() {
        let config = CaveConfig { fill_percent: 75, ..Default::default() };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::FillPercentOutOfRange { value: 75, .. })
        ));
    }

    #[test]
    fn test_rejects_thresholds_larger_than_grid() {
        let config = CaveConfig { size: 10, min_wall_size: 101, ..Default::default() };
        match config.validate() {
            Err(ConfigError::ThresholdTooLarge { name, cells, .. }) => {
                assert_eq!(name, "min_wall_size");
                assert_eq!(cells, 100);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_rejects_negative_radius() {
        let config = CaveConfig { passage_radius: -2, ..Default::default() };
        assert!(matches!(config.validate(), Err(ConfigError::NegativeRadius(-2))));
    }

    #[test]
    fn test_radius_must_fit_the_grid() {
        let zero = CaveConfig { passage_radius: 0, ..Default::default() };
        assert!(matches!(
            zero.validate(),
            Err(ConfigError::PassageRadiusOutOfRange { value: 0, min: 1, .. })
        ));

        let huge = CaveConfig { size: 50, passage_radius: 50_000, ..Default::default() };
        assert!(matches!(
            huge.validate(),
            Err(ConfigError::PassageRadiusOutOfRange { value: 50_000, max: 50, .. })
        ));

        let edge = CaveConfig { size: 50, passage_radius: 50, ..Default::default() };
        assert!(edge.validate().is_ok());
    }

    #[test]
    fn test_json_partial_override() {
        let config = CaveConfig::from_json_str(r#"{ "size": 64, "seed": "abc" }"#).unwrap();
        assert_eq!(config.size, 64);
        assert_eq!(config.seed, CaveSeed::from("abc"));
        assert_eq!(config.smooth_amount, 5);
    }

    #[test]
    fn test_json_invalid_values_fail_fast() {
        let err = CaveConfig::from_json_str(r#"{ "fill_percent": 10 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::FillPercentOutOfRange { .. }));

        let err = CaveConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_fixed_seed_resolves_to_itself() {
        let config = CaveConfig { seed: CaveSeed::from("test"), ..Default::default() };
        assert_eq!(config.resolve_seed(), CaveSeed::from("test"));
    }
}
