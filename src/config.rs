use crate::physics::math::Scalar;
use bevy::prelude::*;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Resource, Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    pub physics: PhysicsConfig,
    pub time: TimeConfig,
    pub trajectories: TrajectoryConfig,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct PhysicsConfig {
    pub gravitational_constant_base: Scalar,
    pub gravitational_constant_exponent: i32,
    pub substeps: u32,
    pub integrator: IntegratorType,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravitational_constant_base: 6.674,
            gravitational_constant_exponent: -11,
            substeps: 1,
            integrator: IntegratorType::default(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct TimeConfig {
    /// Simulated seconds represented by one multiplier unit per tick
    /// (1 = seconds, 86400 = days, 2678400 = months).
    pub factor: Scalar,
    /// User-facing speed value the factor is multiplied by.
    pub multiplier: Scalar,
}

impl Default for TimeConfig {
    fn default() -> Self {
        Self {
            factor: 1.0,
            multiplier: 1.0,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct TrajectoryConfig {
    pub capacity: usize,
}

impl Default for TrajectoryConfig {
    fn default() -> Self {
        Self { capacity: 128 }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum IntegratorType {
    #[default]
    SemiImplicitEuler,
    ExplicitEuler,
}

impl SimulationConfig {
    /// Load configuration from the user's platform config directory,
    /// falling back to defaults when no file exists.
    pub fn load_from_user_config() -> Self {
        match ProjectDirs::from("", "", "orrery") {
            Some(dirs) => Self::load_or_default(dirs.config_dir().join("config.toml")),
            None => Self::default(),
        }
    }

    /// Load configuration from a file, falling back to defaults if the file
    /// is missing or does not parse.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let builder = config::Config::builder().add_source(config::File::from(path).required(false));

        match builder.build() {
            Ok(settings) => match settings.try_deserialize() {
                Ok(config) => config,
                Err(e) => {
                    warn!(
                        "Failed to parse config file {}: {}. Using defaults.",
                        path.display(),
                        e
                    );
                    Self::default()
                }
            },
            Err(e) => {
                warn!(
                    "Failed to read config file {}: {}. Using defaults.",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_original_ui_values() {
        let config = SimulationConfig::default();

        assert_eq!(config.physics.gravitational_constant_base, 6.674);
        assert_eq!(config.physics.gravitational_constant_exponent, -11);
        assert_eq!(config.physics.substeps, 1);
        assert_eq!(config.trajectories.capacity, 128);
        assert_eq!(config.time.factor, 1.0);
        assert_eq!(config.time.multiplier, 1.0);
    }

    #[test]
    fn toml_round_trip_preserves_config() {
        let mut config = SimulationConfig::default();
        config.physics.substeps = 8;
        config.physics.integrator = IntegratorType::ExplicitEuler;
        config.time.factor = 86400.0;
        config.trajectories.capacity = 2048;

        let serialized = toml::to_string_pretty(&config).unwrap();
        let deserialized: SimulationConfig = toml::from_str(&serialized).unwrap();

        assert_eq!(config, deserialized);
    }

    #[test]
    fn partial_toml_fills_missing_sections_with_defaults() {
        let partial = "[physics]\nsubsteps = 4\n";
        let config: SimulationConfig = toml::from_str(partial).unwrap();

        assert_eq!(config.physics.substeps, 4);
        assert_eq!(config.physics.gravitational_constant_base, 6.674);
        assert_eq!(config.trajectories.capacity, 128);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let config = SimulationConfig::load_or_default("/nonexistent/orrery/config.toml");
        assert_eq!(config, SimulationConfig::default());
    }

    #[test]
    fn integrator_type_uses_snake_case_names() {
        let config: SimulationConfig =
            toml::from_str("[physics]\nintegrator = \"explicit_euler\"\n").unwrap();
        assert_eq!(config.physics.integrator, IntegratorType::ExplicitEuler);
    }
}
