//! Runtime configuration. Knobs are externally mutable and the animation
//! loop reads them fresh each cycle, so changes apply to the next frame.

use std::time::Duration;

use serde::Deserialize;

use crate::Result;

/// Tuning knobs for the confetti field.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ConfettiConfig {
    /// Target steady-state particle population while streaming
    pub max_count: usize,
    /// Extra fall velocity added to every particle
    pub speed: f64,
    /// Minimum time between executed frames, in milliseconds
    pub frame_interval_ms: u64,
    /// Opacity baked into generated stroke colors, in [0, 1]
    pub alpha: f64,
    /// Stroke each flake with a two-stop gradient instead of a solid color
    pub gradient: bool,
}

impl Default for ConfettiConfig {
    fn default() -> Self {
        Self {
            max_count: 150,
            speed: 2.0,
            frame_interval_ms: 15,
            alpha: 1.0,
            gradient: false,
        }
    }
}

impl ConfettiConfig {
    /// Parse a config from a TOML document, clamping fields into range.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let mut config: ConfettiConfig = toml::from_str(text)?;
        config.clamp();
        Ok(config)
    }

    /// Clamp fields into their supported ranges: `max_count >= 1`,
    /// `alpha` in `[0, 1]`.
    pub fn clamp(&mut self) {
        self.max_count = self.max_count.max(1);
        self.alpha = self.alpha.clamp(0.0, 1.0);
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = ConfettiConfig::default();
        assert_eq!(config.max_count, 150);
        assert!((config.speed - 2.0).abs() < 1e-12);
        assert_eq!(config.frame_interval_ms, 15);
        assert!((config.alpha - 1.0).abs() < 1e-12);
        assert!(!config.gradient);
    }

    #[test]
    fn parse_partial_toml_keeps_defaults() {
        let config = ConfettiConfig::from_toml_str("max_count = 40\ngradient = true").unwrap();
        assert_eq!(config.max_count, 40);
        assert!(config.gradient);
        assert_eq!(config.frame_interval_ms, 15);
    }

    #[test]
    fn toml_integer_float_coercion() {
        // `speed = 5` is a TOML integer but deserializes into the f64 field
        let config = ConfettiConfig::from_toml_str("speed = 5").unwrap();
        assert!((config.speed - 5.0).abs() < 1e-12);
    }

    #[test]
    fn clamp_repairs_out_of_range_values() {
        let config = ConfettiConfig::from_toml_str("max_count = 0\nalpha = 3.5").unwrap();
        assert_eq!(config.max_count, 1);
        assert!((config.alpha - 1.0).abs() < 1e-12);

        let mut negative = ConfettiConfig {
            alpha: -0.25,
            ..Default::default()
        };
        negative.clamp();
        assert!(negative.alpha.abs() < 1e-12);
    }

    #[test]
    fn invalid_toml_is_an_error() {
        assert!(ConfettiConfig::from_toml_str("max_count = \"lots\"").is_err());
    }
}
