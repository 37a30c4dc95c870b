//! JSON observation files.
//!
//! The on-disk format is a plain array of observations:
//! `[{"ts": 1704067200000, "lp": 100.0}, ...]`, with `ts` optional. Order in
//! the file is chronological order; nothing is re-sorted on load.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::domain::PriceObservation;

pub fn load_observations(path: &Path) -> Result<Vec<PriceObservation>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read observation file {:?}", path))?;
    let observations: Vec<PriceObservation> = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse observation file {:?}", path))?;

    log::debug!("Loaded {} observations from {:?}", observations.len(), path);
    Ok(observations)
}

pub fn save_observations(path: &Path, observations: &[PriceObservation]) -> Result<()> {
    let json = serde_json::to_string_pretty(observations)
        .context("Failed to serialize observations")?;
    fs::write(path, json).with_context(|| format!("Failed to write observation file {:?}", path))?;

    log::debug!("Wrote {} observations to {:?}", observations.len(), path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_file(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("zone_scout_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let path = temp_file("round_trip.json");
        let observations = vec![
            PriceObservation::at(1_704_067_200_000, 100.0),
            PriceObservation::at(1_704_153_600_000, 101.5),
            PriceObservation::new(99.25),
        ];

        save_observations(&path, &observations).expect("save should succeed");
        let loaded = load_observations(&path).expect("load should succeed");
        let _ = fs::remove_file(&path);

        assert_eq!(loaded, observations);
    }

    #[test]
    fn test_loading_bare_price_array_entries() {
        let path = temp_file("bare_entries.json");
        fs::write(&path, r#"[{"lp": 12.5}, {"ts": 1700000000000, "lp": 13.0}]"#)
            .expect("fixture write should succeed");

        let loaded = load_observations(&path).expect("load should succeed");
        let _ = fs::remove_file(&path);

        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].last_price, 12.5);
        assert_eq!(loaded[0].timestamp_ms, None);
        assert_eq!(loaded[1].timestamp_ms, Some(1_700_000_000_000));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = load_observations(Path::new("/nonexistent/zone_scout_missing.json"))
            .expect_err("missing file must fail");
        assert!(err.to_string().contains("Failed to read"));
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let path = temp_file("malformed.json");
        fs::write(&path, "{not json").expect("fixture write should succeed");

        let err = load_observations(&path).expect_err("malformed file must fail");
        let _ = fs::remove_file(&path);
        assert!(err.to_string().contains("Failed to parse"));
    }
}
