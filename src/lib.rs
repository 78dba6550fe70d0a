//! Binary-encoded genetic algorithm searching a two-dimensional real domain
//! for the input pair that maximizes a pluggable fitness function.
//!
//! A [`ga::population::Population`] evolves [`ga::chromosome::Chromosome`]s
//! through roulette-wheel selection, single-point crossover and bit-flip
//! mutation, keeping track of the best chromosome seen over all epochs.

pub mod config;
pub mod ga;
pub mod util;

#[cfg(test)]
mod common;

pub use ga::chromosome::Chromosome;
pub use ga::error::GaError;
pub use ga::fitness::{FitnessFunction, Interval, TrigonometricFitness};
pub use ga::population::{FitResult, Population, PopulationBuilder};
pub use ga::report::{EpochReport, EpochReporter, LogReporter, NoopReporter, WriterReporter};
