use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(short, long)]
    pub config_path: String,

    /// Overrides `output_path` from the config file
    #[arg(short, long)]
    pub output: Option<String>,

    /// Overrides `ga.seed` from the config file
    #[arg(short, long)]
    pub seed: Option<u64>,
}
