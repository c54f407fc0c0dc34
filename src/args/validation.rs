use std::{fs, path::PathBuf};

use crate::model::{HoleCount, MAX_PLAYERS, MIN_PLAYERS};

/// # Errors
///
/// Will return `Err` if the file is not readable
pub fn check_readable_file(file: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(file);
    if !path.is_file() || fs::metadata(&path).is_err() {
        return Err(format!("The file '{file}' is not readable."));
    }
    Ok(path)
}

/// # Errors
///
/// Will return `Err` unless the value is a number from 1 to 4
pub fn check_player_count(value: &str) -> Result<usize, String> {
    match value.trim().parse::<usize>() {
        Ok(n) if (MIN_PLAYERS..=MAX_PLAYERS).contains(&n) => Ok(n),
        _ => Err(format!(
            "Player count must be between {MIN_PLAYERS} and {MAX_PLAYERS}, got '{value}'."
        )),
    }
}

/// # Errors
///
/// Will return `Err` unless the value is 6, 9 or 18
pub fn check_hole_count(value: &str) -> Result<HoleCount, String> {
    value
        .trim()
        .parse::<usize>()
        .ok()
        .and_then(|n| HoleCount::try_from(n).ok())
        .ok_or_else(|| format!("Hole count must be 6, 9 or 18, got '{value}'."))
}
