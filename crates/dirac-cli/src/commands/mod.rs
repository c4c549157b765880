pub mod practice;
pub mod run;
pub mod sample;
pub mod universes;

use std::path::Path;

use dirac_core::{GameConfig, StartingPositions};

/// Read and parse the starting positions from an input file.
fn load_starts(file: &Path) -> Result<StartingPositions, String> {
    let text = std::fs::read_to_string(file)
        .map_err(|e| format!("cannot read {}: {e}", file.display()))?;
    let starts =
        StartingPositions::parse(&text).map_err(|e| format!("{}: {e}", file.display()))?;
    log::info!(
        "loaded {}: player 1 on {}, player 2 on {}",
        file.display(),
        starts.player_one,
        starts.player_two
    );
    Ok(starts)
}

/// Build and validate a configuration that uses both scores.
fn config(threshold: u32, target: u32) -> Result<GameConfig, String> {
    let config = GameConfig::default()
        .with_win_threshold(threshold)
        .with_practice_target(target);
    config.validate().map_err(|e| e.to_string())?;
    Ok(config)
}

/// Percentage of `part` in `whole`, for display only.
fn percent(part: u128, whole: u128) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 * 100.0 / whole as f64
    }
}
