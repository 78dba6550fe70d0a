use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use log::debug;
use serde::Deserialize;

use super::{ga_config::GaConfig, interval_config::IntervalConfig};
use crate::ga::population::PopulationBuilder;

#[derive(Debug, Deserialize)]
pub struct Ga2dConfig {
    pub output_path: String,
    #[serde(default = "Ga2dConfig::default_log_level")]
    pub log_level: String,
    pub log_directory: Option<String>,
    pub ga: GaConfig,
    pub interval: IntervalConfig,
}

impl Ga2dConfig {
    const ENV_VAR_PREFIX: &'static str = "ga2d";

    pub fn new(config_path: &str) -> Result<Self, ConfigError> {
        Self::build(Config::builder().add_source(File::with_name(config_path)))
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        let s = builder
            .add_source(
                Environment::with_prefix(Self::ENV_VAR_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        debug!("Using config: {:?}", s);

        s.try_deserialize()
    }

    fn default_log_level() -> String {
        "info".to_string()
    }

    /// Population parameters with the default trigonometric fitness over the
    /// configured intervals.
    pub fn population_builder(&self) -> PopulationBuilder {
        PopulationBuilder::new(self.ga.population_size, self.ga.chromosome_length)
            .mutation_probability(self.ga.mutation_probability)
            .crossover_probability(self.ga.crossover_probability)
            .interval_x(self.interval.x)
            .interval_y(self.interval.y)
            .maybe_seed(self.ga.seed)
    }
}
