use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct GaConfig {
    pub population_size: usize,
    pub chromosome_length: usize,
    pub mutation_probability: f64,
    pub crossover_probability: f64,
    pub epochs: usize,
    pub seed: Option<u64>,
}
