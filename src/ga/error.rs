/// Errors raised by the chromosome operators and the population engine.
#[derive(Debug, thiserror::Error)]
pub enum GaError {
    #[error("LengthMismatch: chromosomes must have equal length. left={left}, right={right}")]
    LengthMismatch { left: usize, right: usize },
    #[error("GenePositionOutOfRange: position={position}, length={length}")]
    GenePositionOutOfRange { position: usize, length: usize },
    #[error("CutPositionOutOfRange: position={position}, length={length}")]
    CutPositionOutOfRange { position: usize, length: usize },
    #[error("InvalidChromosomeLength: length must be even and in 2..={max}. length={length}")]
    InvalidChromosomeLength { length: usize, max: usize },
    #[error("InvalidGene: expected '0' or '1', found {character:?}")]
    InvalidGene { character: char },
    #[error("EmptyPopulation: population size must be positive")]
    EmptyPopulation,
    #[error("NoEpochs: at least one epoch is required")]
    NoEpochs,
    #[error("ReportError: {0}")]
    Report(#[from] std::io::Error),
}
