use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

use rand::Rng;

use crate::ga::error::GaError;
use crate::ga::fitness::FitnessFunction;

/// A fixed-length binary genotype.
///
/// The first half of the genes encodes the `x` coordinate and the second half
/// the `y` coordinate, see [`Chromosome::decode`].
#[derive(Hash, PartialEq, Eq, Clone)]
pub struct Chromosome {
    genes: Vec<bool>,
}

impl Chromosome {
    /// Each half is decoded into a `u64`.
    pub const MAX_LENGTH: usize = 128;

    pub fn from_genes(genes: Vec<bool>) -> Result<Chromosome, GaError> {
        Self::validate_length(genes.len())?;

        Ok(Chromosome { genes })
    }

    /// Draws every gene from a fair coin flip.
    pub fn random<R: Rng + ?Sized>(length: usize, rng: &mut R) -> Result<Chromosome, GaError> {
        Self::validate_length(length)?;

        let genes = (0..length).map(|_| rng.gen::<bool>()).collect();

        Ok(Chromosome { genes })
    }

    pub(crate) fn validate_length(length: usize) -> Result<(), GaError> {
        if length == 0 || length % 2 != 0 || length > Self::MAX_LENGTH {
            return Err(GaError::InvalidChromosomeLength {
                length,
                max: Self::MAX_LENGTH,
            });
        }

        Ok(())
    }

    pub fn genes(&self) -> &[bool] {
        &self.genes
    }

    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Number of bits in each decoded half.
    pub fn half_len(&self) -> usize {
        self.genes.len() / 2
    }

    /// Splits the genes in half and reads each half as an unsigned integer.
    ///
    /// Scans from the midpoint backward: the gene just before the split is
    /// worth 1, the one before it 2, and so on, so the first gene of each half
    /// is the most significant bit. `1011` decodes to `(2, 3)`.
    pub fn decode(&self) -> (u64, u64) {
        let half = self.half_len();
        let mut x = 0u64;
        let mut y = 0u64;
        let mut power = 1u64;

        for i in (0..half).rev() {
            if self.genes[i] {
                x += power;
            }
            if self.genes[i + half] {
                y += power;
            }
            power <<= 1;
        }

        (x, y)
    }

    /// Scores this chromosome. Nothing is cached.
    pub fn evaluate<F: FitnessFunction + ?Sized>(&self, fitness_function: &F) -> f64 {
        fitness_function.fitness(self)
    }

    /// Flips the gene at `position`.
    pub fn mutate(&mut self, position: usize) -> Result<(), GaError> {
        let length = self.genes.len();
        let gene = self
            .genes
            .get_mut(position)
            .ok_or(GaError::GenePositionOutOfRange { position, length })?;

        *gene = !*gene;

        Ok(())
    }

    /// Single-point crossover: swaps every gene from `cut` to the end between
    /// `self` and `other`, in place on both.
    pub fn crossover(&mut self, cut: usize, other: &mut Chromosome) -> Result<(), GaError> {
        if self.genes.len() != other.genes.len() {
            return Err(GaError::LengthMismatch {
                left: self.genes.len(),
                right: other.genes.len(),
            });
        }
        if cut >= self.genes.len() {
            return Err(GaError::CutPositionOutOfRange {
                position: cut,
                length: self.genes.len(),
            });
        }

        self.genes[cut..].swap_with_slice(&mut other.genes[cut..]);

        Ok(())
    }
}

impl Display for Chromosome {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let result: String = self
            .genes
            .iter()
            .map(|&g| if g { '1' } else { '0' })
            .collect();

        write!(f, "{}", &result)
    }
}

impl Debug for Chromosome {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}", self)
    }
}

impl FromStr for Chromosome {
    type Err = GaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let genes = s
            .chars()
            .map(|character| match character {
                '0' => Ok(false),
                '1' => Ok(true),
                _ => Err(GaError::InvalidGene { character }),
            })
            .collect::<Result<Vec<bool>, GaError>>()?;

        Chromosome::from_genes(genes)
    }
}
