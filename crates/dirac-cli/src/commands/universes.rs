use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use serde::Serialize;

use dirac_core::config::check_win_threshold;
use dirac_core::{PlayerId, StartingPositions};
use dirac_mechanics::{WinCounts, count_by_sweep, count_from};

#[derive(Serialize)]
struct Report {
    starts: StartingPositions,
    threshold: u32,
    wins: WinCounts,
}

pub fn run(file: &Path, threshold: u32, json: bool, verify: bool) -> Result<(), String> {
    let threshold = check_win_threshold(threshold).map_err(|e| e.to_string())?;
    let starts = super::load_starts(file)?;
    let wins = count_from(&starts, threshold).map_err(|e| e.to_string())?;

    if verify {
        let swept = count_by_sweep(&starts, threshold).map_err(|e| e.to_string())?;
        if swept != wins {
            return Err(format!(
                "sweep disagrees: recursive ({}, {}), sweep ({}, {})",
                wins.player_one, wins.player_two, swept.player_one, swept.player_two
            ));
        }
        log::info!("sweep agrees with recursive count");
    }

    if json {
        let report = Report {
            starts,
            threshold,
            wins,
        };
        let out = serde_json::to_string_pretty(&report).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    let total = wins.total().ok_or("universe total overflow")?;
    println!(
        "  {} {}",
        "Dirac Dice".bold(),
        format!("(threshold {threshold}, {total} universes)").dimmed()
    );
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Player", "Start", "Universes won", "Share"]);
    for player in PlayerId::ALL {
        let won = wins.get(player);
        let name = if wins.leader() == Some(player) {
            player.to_string().green().bold().to_string()
        } else {
            player.to_string()
        };
        table.add_row(vec![
            name,
            starts.get(player).to_string(),
            won.to_string(),
            format!("{:.2}%", super::percent(won, total)),
        ]);
    }
    println!("{table}");
    println!();
    println!("  Most wins: {}", wins.max().to_string().bold());

    Ok(())
}
