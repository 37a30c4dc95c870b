use anyhow::Result;
use clap::Parser;
use zone_scout::{Cli, run_scan};

fn main() -> Result<()> {
    // A. Init Logging
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    // B. Parse Args
    let args = Cli::parse();
    #[cfg(debug_assertions)]
    log::info!("Parsed arguments: {:?}", args);

    // C. Run
    run_scan(&args)
}
