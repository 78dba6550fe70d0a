use serde::Deserialize;

use crate::ga::chromosome::Chromosome;

/// Scores a chromosome. Higher is better.
///
/// Implemented for every `Fn(&Chromosome) -> f64`, so plain closures can be
/// installed on a population directly.
pub trait FitnessFunction {
    fn fitness(&self, chromosome: &Chromosome) -> f64;
}

impl<F> FitnessFunction for F
where
    F: Fn(&Chromosome) -> f64,
{
    fn fitness(&self, chromosome: &Chromosome) -> f64 {
        self(chromosome)
    }
}

/// Closed real interval a decoded half is mapped into.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Interval {
    pub min: f64,
    pub max: f64,
}

impl Interval {
    pub fn new(min: f64, max: f64) -> Interval {
        Interval { min, max }
    }

    /// Maps `raw` from `0..=2^bits - 1` linearly onto `min..=max`.
    pub fn map(&self, raw: u64, bits: usize) -> f64 {
        let steps = ((1u128 << bits) - 1) as f64;

        self.min + raw as f64 * (self.max - self.min) / steps
    }
}

impl Default for Interval {
    fn default() -> Self {
        Interval::new(0.0, 1.0)
    }
}

impl From<(f64, f64)> for Interval {
    fn from((min, max): (f64, f64)) -> Self {
        Interval::new(min, max)
    }
}

/// The fitness used when no custom function is installed:
/// `3 + |ln(max(1, 3 + 5 sin x)) + tan y|` over the decoded phenotype.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TrigonometricFitness {
    pub x: Interval,
    pub y: Interval,
}

impl TrigonometricFitness {
    pub fn new(x: Interval, y: Interval) -> TrigonometricFitness {
        TrigonometricFitness { x, y }
    }

    /// The real-valued `(x, y)` pair the chromosome encodes.
    pub fn phenotype(&self, chromosome: &Chromosome) -> (f64, f64) {
        let (raw_x, raw_y) = chromosome.decode();
        let bits = chromosome.half_len();

        (self.x.map(raw_x, bits), self.y.map(raw_y, bits))
    }
}

impl FitnessFunction for TrigonometricFitness {
    fn fitness(&self, chromosome: &Chromosome) -> f64 {
        let (x, y) = self.phenotype(chromosome);

        3.0 + ((3.0 + x.sin() * 5.0).max(1.0).ln() + y.tan()).abs()
    }
}

#[cfg(test)]
mod fitness_tests {
    use super::*;

    const TOLERANCE: f64 = 1e-12;

    #[test]
    fn interval_map_test() {
        let interval = Interval::new(-5.0, 3.0);

        assert!((interval.map(0, 5) - -5.0).abs() < TOLERANCE);
        assert!((interval.map(31, 5) - 3.0).abs() < TOLERANCE);
        assert!((interval.map(1, 1) - 3.0).abs() < TOLERANCE);
        assert!((interval.map(u64::MAX, 64) - 3.0).abs() < 1e-9);
    }

    #[test]
    fn phenotype_test() {
        let fitness = TrigonometricFitness::new((-5.0, 3.0).into(), (2.0, 10.0).into());
        let chromosome: Chromosome = "0000011111".parse().unwrap();

        let (x, y) = fitness.phenotype(&chromosome);

        assert!((x - -5.0).abs() < TOLERANCE);
        assert!((y - 10.0).abs() < TOLERANCE);
    }

    #[test]
    fn trigonometric_fitness_test() {
        let fitness = TrigonometricFitness::new((-5.0, 3.0).into(), (2.0, 10.0).into());
        let chromosome: Chromosome = "0000000000".parse().unwrap();

        let x: f64 = -5.0;
        let y: f64 = 2.0;
        let expected = 3.0 + ((3.0 + x.sin() * 5.0).max(1.0).ln() + y.tan()).abs();

        assert!((chromosome.evaluate(&fitness) - expected).abs() < TOLERANCE);
        assert!(chromosome.evaluate(&fitness) >= 3.0);
    }

    #[test]
    fn closure_fitness_test() {
        let chromosome: Chromosome = "1011".parse().unwrap();
        let decoded_sum = |c: &Chromosome| {
            let (x, y) = c.decode();
            (x + y) as f64
        };

        assert_eq!(decoded_sum.fitness(&chromosome), 5.0);
    }
}
