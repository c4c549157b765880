use std::path::Path;

use dirac_mechanics::{PracticeGame, count_from};

pub fn run(file: &Path, task: u8, threshold: u32, target: u32) -> Result<(), String> {
    let config = super::config(threshold, target)?;
    let starts = super::load_starts(file)?;

    let result = match task {
        1 => PracticeGame::new(&starts, config.practice_target)
            .map_err(|e| e.to_string())?
            .play()
            .answer()
            .to_string(),
        2 => count_from(&starts, config.win_threshold)
            .map_err(|e| e.to_string())?
            .max()
            .to_string(),
        other => return Err(format!("unknown task {other}")),
    };

    let name = file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| file.display().to_string());
    println!("task={task}, file={name}, result={result}");
    Ok(())
}
