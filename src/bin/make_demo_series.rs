//! Writes the built-in demo series to a JSON observation file, so the main
//! binary's --input path can be exercised against known data:
//!
//! ```sh
//! cargo run --bin make_demo_series
//! cargo run -- --input demo_series.json
//! ```

use std::path::PathBuf;

use anyhow::Result;
use zone_scout::config::DEMO;
use zone_scout::data::{demo_series, save_observations};

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let observations = demo_series();
    let output_path = PathBuf::from(DEMO.output_path);
    save_observations(&output_path, &observations)?;

    println!(
        "✅ Wrote {} observations to {:?}",
        observations.len(),
        output_path
    );
    Ok(())
}
