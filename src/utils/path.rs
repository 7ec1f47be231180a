//! Path utilities: expand ~, csv suffix checks, file counting.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// True when the path names an existing regular file with a `.csv` suffix.
pub fn is_csv_file(path: &Path) -> bool {
    path.is_file() && path.to_string_lossy().ends_with(".csv")
}

/// Number of regular files directly inside `dir` (subdirectories are not counted).
///
/// Only a failing listing is an error; unreadable entries are skipped.
pub fn count_regular_files(dir: &Path) -> io::Result<usize> {
    let count = fs::read_dir(dir)?
        .filter_map(Result::ok)
        // follows symlinks; a dangling link is not a file
        .filter(|entry| entry.path().is_file())
        .count();
    Ok(count)
}
