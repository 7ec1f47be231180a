// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use std::io::{self, Write};
use std::path::Path;

/// Checks whether the export targets can be created or overwritten.
///
/// - No target exists → Ok
/// - Some target exists and `force` is set → Ok
/// - Some target exists and `force == false` → asks the user for confirmation.
pub(crate) fn ensure_writable(paths: &[&Path], force: bool) -> AppResult<()> {
    let existing: Vec<&&Path> = paths.iter().filter(|p| p.exists()).collect();
    if existing.is_empty() || force {
        return Ok(());
    }

    for path in &existing {
        warning(format!("The file '{}' already exists.", path.display()));
    }

    print!("Overwrite? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer).map_err(AppError::from)?;
    let ans = answer.trim().to_ascii_lowercase();

    if ans == "y" || ans == "yes" {
        info("Existing files will be overwritten.");
        Ok(())
    } else {
        Err(AppError::Export(
            "export cancelled: existing files not overwritten".to_string(),
        ))
    }
}
