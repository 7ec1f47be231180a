use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::ExportLogic;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        file,
        prefix,
        force,
    } = cmd
    {
        ExportLogic::export(cfg, file, prefix, *force)?;
    }
    Ok(())
}
