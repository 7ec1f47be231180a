use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Report;
use crate::errors::{AppError, AppResult};
use crate::models::MovementCollection;
use crate::ui::messages::{header, warning};
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report {
        file,
        dir,
        limit,
        json,
    } = cmd
    {
        let path = expand_tilde(file);
        if !path.is_file() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("CSV file not found: {}", path.display()),
            )
            .into());
        }

        let file_count = dir
            .as_deref()
            .map(|d| MovementCollection::count_files_in_directory(expand_tilde(d)));
        let collection = MovementCollection::from_csv(&path, &cfg.columns);
        let report = Report::build(&collection, limit.unwrap_or(cfg.report_limit), file_count);

        if *json {
            let out = serde_json::to_string_pretty(&report)
                .map_err(|e| AppError::Other(format!("JSON serialization error: {e}")))?;
            println!("{out}");
            return Ok(());
        }

        if collection.is_empty() {
            warning(format!("No valid movements in {}", path.display()));
        }

        header(path.display());
        print!("{}", report.render());
    }
    Ok(())
}
