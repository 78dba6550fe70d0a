use std::cmp::Ordering;
use std::fmt::{Display, Formatter};

use crate::ga::chromosome::Chromosome;

#[derive(PartialEq, Clone, Debug)]
pub struct ChromosomeWithFitness {
    pub chromosome: Chromosome,
    pub fitness: f64,
}

impl ChromosomeWithFitness {
    pub fn from_chromosome_and_fitness(chromosome: Chromosome, fitness: f64) -> ChromosomeWithFitness {
        ChromosomeWithFitness {
            chromosome,
            fitness,
        }
    }
}

impl PartialOrd for ChromosomeWithFitness {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.fitness.partial_cmp(&other.fitness)
    }
}

impl Display for ChromosomeWithFitness {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Chromosome {}\nValue {}", self.chromosome, self.fitness)
    }
}

/// Total order over fitness values with NaN ranked below every number.
pub fn compare_fitness(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => a.total_cmp(&b),
    }
}

/// Highest fitness, ties resolved to the first occurrence.
pub fn fittest(scored: &[ChromosomeWithFitness]) -> Option<&ChromosomeWithFitness> {
    scored.iter().reduce(|best, candidate| {
        if compare_fitness(candidate.fitness, best.fitness).is_gt() {
            candidate
        } else {
            best
        }
    })
}

/// Lowest fitness, ties resolved to the first occurrence.
pub fn least_fit(scored: &[ChromosomeWithFitness]) -> Option<&ChromosomeWithFitness> {
    scored.iter().reduce(|worst, candidate| {
        if compare_fitness(candidate.fitness, worst.fitness).is_lt() {
            candidate
        } else {
            worst
        }
    })
}
