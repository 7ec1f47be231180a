use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::export::{ensure_writable, notify_export_success};
use crate::models::MovementCollection;
use crate::models::collection::export_paths;
use crate::ui::messages::{info, warning};
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Load `file` and write `<prefix>_all.csv` / `<prefix>_work.csv`.
    ///
    /// - `prefix`: `None` uses `export_prefix` from the configuration
    /// - `force`: overwrite existing outputs without asking
    pub fn export(
        cfg: &Config,
        file: &str,
        prefix: &Option<String>,
        force: bool,
    ) -> AppResult<()> {
        let src = Path::new(file);

        // 1️⃣ Check input exists
        if !src.is_file() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("CSV file not found: {}", src.display()),
            )
            .into());
        }

        // 2️⃣ Load
        let collection = MovementCollection::from_csv(src, &cfg.columns);
        if collection.is_empty() {
            warning(format!("No valid movements in {}", src.display()));
        } else {
            info(format!("Loaded {} movements from {}", collection.len(), src.display()));
        }

        // 3️⃣ Confirm overwrite
        let prefix = prefix.as_deref().unwrap_or(&cfg.export_prefix);
        let (all_path, work_path) = export_paths(prefix);
        ensure_writable(&[Path::new(&all_path), Path::new(&work_path)], force)?;

        // 4️⃣ Write
        if !collection.save_to_csv(prefix, &cfg.columns) {
            return Err(AppError::Export(format!("cannot write {all_path} / {work_path}")));
        }

        notify_export_success("CSV", Path::new(&all_path));
        notify_export_success("CSV", Path::new(&work_path));
        Ok(())
    }
}
