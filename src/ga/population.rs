use itertools::Itertools;
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Uniform};

use crate::ga::chromosome::Chromosome;
use crate::ga::chromosome_with_fitness::{compare_fitness, fittest, least_fit, ChromosomeWithFitness};
use crate::ga::error::GaError;
use crate::ga::fitness::{FitnessFunction, Interval, TrigonometricFitness};
use crate::ga::report::{EpochReport, EpochReporter};
use crate::ga::selection::{cumulative_distribution, roulette_index};

/// Lower bound of the probability gate used by crossover and mutation.
///
/// Draws come from `[GATE_EPSILON, 1 + GATE_EPSILON)`, so a probability of 0
/// never fires and a probability of 1 misses about once per million draws.
pub const GATE_EPSILON: f64 = 1e-6;

/// Outcome of [`Population::fit`].
#[derive(Debug, Clone)]
pub struct FitResult {
    /// Best chromosome over all epochs.
    pub best: Chromosome,
    pub best_fitness: f64,
    /// 1-based epoch in which `best` first appeared.
    pub epoch: usize,
    /// Best-ever fitness after each epoch.
    pub fitness_history: Vec<f64>,
}

/// Parameters for a [`Population`].
///
/// ```ignore
/// let population = PopulationBuilder::new(10, 10)
///     .mutation_probability(0.1)
///     .crossover_probability(0.1)
///     .interval_x((-5.0, 3.0))
///     .interval_y((2.0, 10.0))
///     .seed(42)
///     .build()?;
/// ```
pub struct PopulationBuilder {
    size: usize,
    chromosome_length: usize,
    mutation_probability: f64,
    crossover_probability: f64,
    interval_x: Interval,
    interval_y: Interval,
    fitness_function: Option<Box<dyn FitnessFunction>>,
    seed: Option<u64>,
    chromosomes: Option<Vec<Chromosome>>,
}

impl PopulationBuilder {
    pub fn new(size: usize, chromosome_length: usize) -> PopulationBuilder {
        PopulationBuilder {
            size,
            chromosome_length,
            mutation_probability: 0.0,
            crossover_probability: 0.0,
            interval_x: Interval::default(),
            interval_y: Interval::default(),
            fitness_function: None,
            seed: None,
            chromosomes: None,
        }
    }

    pub fn mutation_probability(mut self, probability: f64) -> Self {
        self.mutation_probability = probability;
        self
    }

    pub fn crossover_probability(mut self, probability: f64) -> Self {
        self.crossover_probability = probability;
        self
    }

    pub fn interval_x<I: Into<Interval>>(mut self, interval: I) -> Self {
        self.interval_x = interval.into();
        self
    }

    pub fn interval_y<I: Into<Interval>>(mut self, interval: I) -> Self {
        self.interval_y = interval.into();
        self
    }

    /// Replaces the default [`TrigonometricFitness`].
    pub fn fitness_function<F: FitnessFunction + 'static>(mut self, fitness_function: F) -> Self {
        self.fitness_function = Some(Box::new(fitness_function));
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn maybe_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Starts from the given chromosomes instead of random ones. Size and
    /// chromosome length are taken from them.
    pub fn chromosomes(mut self, chromosomes: Vec<Chromosome>) -> Self {
        self.size = chromosomes.len();
        self.chromosome_length = chromosomes.first().map_or(0, Chromosome::len);
        self.chromosomes = Some(chromosomes);
        self
    }

    pub fn build(self) -> Result<Population, GaError> {
        if self.size == 0 {
            return Err(GaError::EmptyPopulation);
        }
        Chromosome::validate_length(self.chromosome_length)?;

        for (name, probability) in [
            ("mutation", self.mutation_probability),
            ("crossover", self.crossover_probability),
        ] {
            if !(0.0..=1.0).contains(&probability) {
                warn!("{} probability {} is outside [0, 1]", name, probability);
            }
        }

        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut population = Population {
            chromosomes: Vec::new(),
            chromosome_length: self.chromosome_length,
            mutation_probability: self.mutation_probability,
            crossover_probability: self.crossover_probability,
            default_fitness: TrigonometricFitness::new(self.interval_x, self.interval_y),
            custom_fitness: self.fitness_function,
            rng,
        };

        match self.chromosomes {
            Some(chromosomes) => {
                if let Some(other) = chromosomes.iter().find(|c| c.len() != self.chromosome_length) {
                    return Err(GaError::LengthMismatch {
                        left: self.chromosome_length,
                        right: other.len(),
                    });
                }
                population.chromosomes = chromosomes;
            }
            None => population.initialize(self.size, self.chromosome_length)?,
        }

        Ok(population)
    }
}

/// A fixed-size set of chromosomes evolved by roulette-wheel selection,
/// single-point crossover and bit-flip mutation.
pub struct Population {
    chromosomes: Vec<Chromosome>,
    chromosome_length: usize,
    mutation_probability: f64,
    crossover_probability: f64,
    default_fitness: TrigonometricFitness,
    custom_fitness: Option<Box<dyn FitnessFunction>>,
    rng: StdRng,
}

impl Population {
    /// Replaces the chromosomes with `size` random ones of `chromosome_length`
    /// genes each.
    pub fn initialize(&mut self, size: usize, chromosome_length: usize) -> Result<(), GaError> {
        if size == 0 {
            return Err(GaError::EmptyPopulation);
        }
        Chromosome::validate_length(chromosome_length)?;

        debug!(
            "Generating initial population - size: {}, chromosome_length: {}",
            size, chromosome_length
        );

        let rng = &mut self.rng;
        self.chromosomes = (0..size)
            .map(|_| Chromosome::random(chromosome_length, rng))
            .collect::<Result<Vec<_>, _>>()?;
        self.chromosome_length = chromosome_length;

        Ok(())
    }

    pub fn chromosomes(&self) -> &[Chromosome] {
        &self.chromosomes
    }

    pub fn len(&self) -> usize {
        self.chromosomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chromosomes.is_empty()
    }

    pub fn chromosome_length(&self) -> usize {
        self.chromosome_length
    }

    pub fn mutation_probability(&self) -> f64 {
        self.mutation_probability
    }

    pub fn crossover_probability(&self) -> f64 {
        self.crossover_probability
    }

    pub fn interval_x(&self) -> Interval {
        self.default_fitness.x
    }

    pub fn interval_y(&self) -> Interval {
        self.default_fitness.y
    }

    pub fn set_interval_x<I: Into<Interval>>(&mut self, interval: I) {
        self.default_fitness.x = interval.into();
    }

    pub fn set_interval_y<I: Into<Interval>>(&mut self, interval: I) {
        self.default_fitness.y = interval.into();
    }

    pub fn set_fitness_function<F: FitnessFunction + 'static>(&mut self, fitness_function: F) {
        self.custom_fitness = Some(Box::new(fitness_function));
    }

    /// The installed function, or the trigonometric default over the current
    /// intervals.
    pub fn fitness_function(&self) -> &dyn FitnessFunction {
        match &self.custom_fitness {
            Some(fitness_function) => fitness_function.as_ref(),
            None => &self.default_fitness,
        }
    }

    pub fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    /// Every chromosome with its fitness, in collection order.
    pub fn snapshot(&self) -> Vec<ChromosomeWithFitness> {
        let fitness_function = self.fitness_function();

        self.chromosomes
            .iter()
            .map(|c| ChromosomeWithFitness::from_chromosome_and_fitness(c.clone(), c.evaluate(fitness_function)))
            .collect()
    }

    pub fn get_best(&self) -> Result<ChromosomeWithFitness, GaError> {
        fittest(&self.snapshot()).cloned().ok_or(GaError::EmptyPopulation)
    }

    pub fn get_worst(&self) -> Result<ChromosomeWithFitness, GaError> {
        least_fit(&self.snapshot()).cloned().ok_or(GaError::EmptyPopulation)
    }

    /// Fitness-proportional resampling into a new generation of the same size.
    ///
    /// When any fitness is negative or not finite, or all of them are zero,
    /// every chromosome is drawn with equal probability instead.
    pub fn selection(&mut self) {
        let fitness_function = self.fitness_function();
        let fitness: Vec<f64> = self
            .chromosomes
            .iter()
            .map(|c| c.evaluate(fitness_function))
            .collect();

        let size = self.chromosomes.len();
        let rng = &mut self.rng;

        let new_generation: Vec<Chromosome> = match cumulative_distribution(&fitness) {
            Some(cdf) => (0..size)
                .map(|_| self.chromosomes[roulette_index(&cdf, rng.gen::<f64>())].clone())
                .collect(),
            None => {
                warn!("Fitness values admit no roulette wheel, falling back to uniform selection");
                (0..size)
                    .map(|_| self.chromosomes[rng.gen_range(0..size)].clone())
                    .collect()
            }
        };

        self.chromosomes = new_generation;
    }

    /// Pairs up gated chromosomes at random and applies single-point crossover
    /// to each pair in place.
    pub fn crossover(&mut self) -> Result<(), GaError> {
        let gate = Uniform::new(GATE_EPSILON, 1.0 + GATE_EPSILON);
        let probability = self.crossover_probability;
        let rng = &mut self.rng;

        let mut parents: Vec<usize> = (0..self.chromosomes.len())
            .filter(|_| gate.sample(rng) < probability)
            .collect();

        if parents.len() % 2 == 1 {
            parents.pop();
        }

        parents.shuffle(rng);

        debug!("Crossover pairs: {}", parents.len() / 2);

        let cut_positions = Uniform::new(0, self.chromosome_length);

        for (a, b) in parents.into_iter().tuples() {
            let cut = cut_positions.sample(rng);
            let (first, second) = pair_mut(&mut self.chromosomes, a, b);

            first.crossover(cut, second)?;
        }

        Ok(())
    }

    /// Flips every gene independently with the mutation probability.
    pub fn mutation(&mut self) -> Result<(), GaError> {
        let gate = Uniform::new(GATE_EPSILON, 1.0 + GATE_EPSILON);
        let probability = self.mutation_probability;
        let rng = &mut self.rng;
        let mut flipped = 0usize;

        for chromosome in self.chromosomes.iter_mut() {
            for position in 0..chromosome.len() {
                if gate.sample(rng) < probability {
                    chromosome.mutate(position)?;
                    flipped += 1;
                }
            }
        }

        debug!("Mutated genes: {}", flipped);

        Ok(())
    }

    /// Runs `epochs` generations of selection, crossover and mutation and
    /// returns the best chromosome seen across all of them.
    ///
    /// `reporter` receives every generation after its operators have run.
    pub fn fit(&mut self, epochs: usize, reporter: &mut dyn EpochReporter) -> Result<FitResult, GaError> {
        if epochs == 0 {
            return Err(GaError::NoEpochs);
        }

        info!(
            "Fitting population - size: {}, chromosome_length: {}, epochs: {}",
            self.chromosomes.len(),
            self.chromosome_length,
            epochs
        );

        let mut best: Option<(ChromosomeWithFitness, usize)> = None;
        let mut fitness_history = Vec::with_capacity(epochs);

        for epoch in 1..=epochs {
            self.selection();
            self.crossover()?;
            self.mutation()?;

            let snapshot = self.snapshot();
            let generation_best = fittest(&snapshot).ok_or(GaError::EmptyPopulation)?;

            reporter.report(&EpochReport {
                epoch,
                population: &snapshot,
                best: generation_best,
            })?;

            let improved = match &best {
                Some((best_so_far, _)) => {
                    compare_fitness(generation_best.fitness, best_so_far.fitness).is_gt()
                }
                None => true,
            };

            if improved {
                debug!(
                    "New best in epoch {}: {} ({})",
                    epoch, generation_best.chromosome, generation_best.fitness
                );
                best = Some((generation_best.clone(), epoch));
            }

            if let Some((best_so_far, _)) = &best {
                fitness_history.push(best_so_far.fitness);
            }
        }

        let (best, epoch) = best.ok_or(GaError::NoEpochs)?;

        info!(
            "Best chromosome: {}, value: {}, epoch: {}",
            best.chromosome, best.fitness, epoch
        );

        Ok(FitResult {
            best: best.chromosome,
            best_fitness: best.fitness,
            epoch,
            fitness_history,
        })
    }
}

/// Two distinct mutable elements of one slice.
fn pair_mut<T>(items: &mut [T], a: usize, b: usize) -> (&mut T, &mut T) {
    debug_assert_ne!(a, b);

    if a < b {
        let (left, right) = items.split_at_mut(b);
        (&mut left[a], &mut right[0])
    } else {
        let (left, right) = items.split_at_mut(a);
        (&mut right[0], &mut left[b])
    }
}
