use std::path::Path;

use colored::Colorize;

use dirac_core::config::check_practice_target;
use dirac_mechanics::PracticeGame;

pub fn run(file: &Path, target: u32) -> Result<(), String> {
    let target = check_practice_target(target).map_err(|e| e.to_string())?;
    let starts = super::load_starts(file)?;
    let outcome = PracticeGame::new(&starts, target)
        .map_err(|e| e.to_string())?
        .play();

    println!(
        "  {} {}",
        "Practice game".bold(),
        format!("(target {target})").dimmed()
    );
    println!(
        "  {} wins with {} points",
        outcome.winner.to_string().green().bold(),
        outcome.winning_score
    );
    println!("  Losing score: {}", outcome.losing_score);
    println!("  Die rolled:   {} times", outcome.rolls);
    println!("  Answer:       {}", outcome.answer().to_string().bold());
    Ok(())
}
