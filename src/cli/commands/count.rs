use crate::cli::parser::Commands;
use crate::errors::AppResult;
use crate::models::MovementCollection;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Count { dir } = cmd {
        let path = expand_tilde(dir);
        let count = MovementCollection::count_files_in_directory(&path);
        println!("Files found: {count}");
    }
    Ok(())
}
