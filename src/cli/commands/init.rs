use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;
use std::path::Path;

/// Handle the `init` command: write the default configuration to `path`
pub fn handle(path: &Path) -> AppResult<()> {
    Config::init_file(path)?;
    success(format!("Config file: {}", path.display()));
    Ok(())
}
