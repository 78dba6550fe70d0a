use std::fmt::{Display, Formatter};
use std::io::Write;

use log::{info, trace};

use crate::ga::chromosome_with_fitness::ChromosomeWithFitness;
use crate::ga::error::GaError;

/// State of one finished epoch, handed to an [`EpochReporter`].
#[derive(Debug, Clone, Copy)]
pub struct EpochReport<'a> {
    pub epoch: usize,
    pub population: &'a [ChromosomeWithFitness],
    pub best: &'a ChromosomeWithFitness,
}

impl Display for EpochReport<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Epoch {}", self.epoch)?;
        for scored in self.population {
            writeln!(f, "{}", scored)?;
        }
        writeln!(f, "Best chromosome: ")?;
        writeln!(f, "{}", self.best.chromosome)?;
        writeln!(f, "Value: {}", self.best.fitness)?;
        writeln!(f)
    }
}

/// Receives one report per epoch, in epoch order.
pub trait EpochReporter {
    fn report(&mut self, report: &EpochReport) -> Result<(), GaError>;
}

pub struct NoopReporter;

impl EpochReporter for NoopReporter {
    fn report(&mut self, _report: &EpochReport) -> Result<(), GaError> {
        Ok(())
    }
}

/// Logs a summary line per epoch and the full population at trace level.
pub struct LogReporter;

impl EpochReporter for LogReporter {
    fn report(&mut self, report: &EpochReport) -> Result<(), GaError> {
        info!(
            "Epoch {} - best chromosome: {}, value: {}",
            report.epoch, report.best.chromosome, report.best.fitness
        );
        trace!("{}", report);

        Ok(())
    }
}

/// Writes the text block of every epoch to `W`.
pub struct WriterReporter<W: Write> {
    writer: W,
}

impl<W: Write> WriterReporter<W> {
    pub fn new(writer: W) -> WriterReporter<W> {
        WriterReporter { writer }
    }

    pub fn get_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> EpochReporter for WriterReporter<W> {
    fn report(&mut self, report: &EpochReport) -> Result<(), GaError> {
        write!(self.writer, "{}", report)?;

        Ok(())
    }
}

/// Forwards every report to both reporters, first `A` then `B`.
impl<A: EpochReporter, B: EpochReporter> EpochReporter for (A, B) {
    fn report(&mut self, report: &EpochReport) -> Result<(), GaError> {
        self.0.report(report)?;
        self.1.report(report)
    }
}
