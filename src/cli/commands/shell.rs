use crate::config::Config;
use crate::core::Shell;
use crate::errors::AppResult;
use std::io;

/// Handle the interactive session on stdin/stdout
pub fn handle(cfg: &Config) -> AppResult<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    Shell::new(stdin.lock(), stdout.lock(), cfg).run()
}
