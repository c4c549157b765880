use std::path::Path;

use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::StdRng;

use dirac_core::config::check_win_threshold;
use dirac_mechanics::sample_universe;

pub fn run(file: &Path, seed: u64, threshold: u32) -> Result<(), String> {
    let threshold = check_win_threshold(threshold).map_err(|e| e.to_string())?;
    let starts = super::load_starts(file)?;
    let mut rng = StdRng::seed_from_u64(seed);
    let trace =
        sample_universe(&starts, threshold, &mut rng).map_err(|e| e.to_string())?;

    println!(
        "  {} {}",
        "Universe".bold(),
        format!("(seed={seed}, threshold {threshold})").dimmed()
    );
    for (i, turn) in trace.turns.iter().enumerate() {
        let faces: Vec<String> = turn.faces.iter().map(u32::to_string).collect();
        println!(
            "  {} {} rolls {} and moves to space {} for a total score of {}",
            format!("[turn {:>2}]", i + 1).dimmed(),
            turn.player,
            faces.join("+"),
            turn.landed,
            turn.score
        );
    }
    println!("  {} wins", trace.winner.to_string().green().bold());
    Ok(())
}
