use std::fs::File;
use std::io::{BufWriter, Write};
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, LevelFilter};

use ga2d::config::ga2d_config::Ga2dConfig;
use ga2d::util::{self, args::Args};
use ga2d::{LogReporter, WriterReporter};

fn main() -> Result<()> {
    let args = Args::parse();

    let config = Ga2dConfig::new(&args.config_path)
        .with_context(|| format!("failed to load config from {}", args.config_path))?;

    let log_level = LevelFilter::from_str(&config.log_level)
        .with_context(|| format!("invalid log level {}", config.log_level))?;
    let _logger = util::setup(&log_level, config.log_directory.as_deref(), true)
        .context("failed to start logger")?;

    let output_path = args.output.as_deref().unwrap_or(&config.output_path);
    let mut population = config
        .population_builder()
        .maybe_seed(args.seed.or(config.ga.seed))
        .build()
        .context("invalid population parameters")?;

    let file = File::create(output_path)
        .with_context(|| format!("failed to create output file {}", output_path))?;
    let mut reporter = (LogReporter, WriterReporter::new(BufWriter::new(file)));

    write!(reporter.1.get_mut(), "#start\n\n")?;

    let result = population
        .fit(config.ga.epochs, &mut reporter)
        .context("optimization failed")?;

    let mut out = reporter.1.into_inner();
    writeln!(out, "Best chromosome: ")?;
    writeln!(out, "Epoch: {}", result.epoch)?;
    writeln!(out, "Chromosome: {}", result.best)?;
    write!(out, "Value: {}", result.best.evaluate(population.fitness_function()))?;
    write!(out, "\n\n#end\n\n")?;
    out.flush().context("failed to flush output file")?;

    info!(
        "Finished - best chromosome {} with value {} found in epoch {}, written to {}",
        result.best, result.best_fitness, result.epoch, output_path
    );

    Ok(())
}
