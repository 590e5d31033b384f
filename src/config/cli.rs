use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "aquapredict")]
#[command(about = "Fisheries decision-support API server")]
pub struct CliConfig {
    /// Listening port; falls back to the PORT environment variable, then 5000.
    #[arg(long)]
    pub port: Option<u16>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}
