//! Interactive session: asks for a directory and a CSV file, prints the
//! report and optionally exports the results.

use crate::config::Config;
use crate::core::report::Report;
use crate::errors::AppResult;
use crate::models::MovementCollection;
use crate::models::collection::export_paths;
use crate::utils::path::{expand_tilde, is_csv_file};
use std::env;
use std::io::{BufRead, Write};
use std::path::PathBuf;

pub struct Shell<'a, R, W> {
    input: R,
    output: W,
    cfg: &'a Config,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    pub fn new(input: R, output: W, cfg: &'a Config) -> Self {
        Self { input, output, cfg }
    }

    /// Run the whole session. End of input stops it without error.
    pub fn run(&mut self) -> AppResult<()> {
        writeln!(self.output, "=== Office movements ===")?;

        // 1️⃣ directory
        writeln!(self.output, "\nStep 1/3: Directory analysis")?;
        let Some(dir) = self.ask_directory()? else {
            return Ok(());
        };
        let file_count = MovementCollection::count_files_in_directory(&dir);
        writeln!(self.output, "Files found: {file_count}")?;

        // 2️⃣ csv
        writeln!(self.output, "\nStep 2/3: Movement data")?;
        let Some(csv_path) = self.ask_csv_file()? else {
            return Ok(());
        };
        let collection = MovementCollection::from_csv(&csv_path, &self.cfg.columns);

        if collection.is_empty() {
            writeln!(
                self.output,
                "No valid movements found in {}",
                csv_path.display()
            )?;
            return Ok(());
        }

        // 3️⃣ report
        writeln!(self.output, "\nStep 3/3: Movement analysis\n")?;
        let report = Report::build(&collection, self.cfg.report_limit, None);
        write!(self.output, "{}", report.render())?;

        // 4️⃣ optional export
        let answer = self.prompt("\nSave results? (y/n): ")?;
        if answer.is_some_and(|a| a.eq_ignore_ascii_case("y")) {
            let prefix = &self.cfg.export_prefix;
            let (all_path, work_path) = export_paths(prefix);
            if collection.save_to_csv(prefix, &self.cfg.columns) {
                writeln!(self.output, "Results saved to {all_path} and {work_path}")?;
            } else {
                writeln!(self.output, "Error: results could not be saved")?;
            }
        }

        Ok(())
    }

    /// Prompt until an existing directory is given. Blank means the current directory.
    pub fn ask_directory(&mut self) -> AppResult<Option<PathBuf>> {
        loop {
            let Some(answer) =
                self.prompt("Enter a directory path (or press Enter for the current one): ")?
            else {
                return Ok(None);
            };

            let path = if answer.is_empty() {
                env::current_dir()?
            } else {
                expand_tilde(&answer)
            };

            if path.is_dir() {
                return Ok(Some(path));
            }
            writeln!(self.output, "Error: '{}' is not a directory!", path.display())?;
        }
    }

    /// Prompt until an existing `.csv` file is given. Blank means `default_csv`.
    pub fn ask_csv_file(&mut self) -> AppResult<Option<PathBuf>> {
        let default = self.cfg.default_csv.clone();
        loop {
            let Some(answer) =
                self.prompt(&format!("Enter the CSV file path [default {default}]: "))?
            else {
                return Ok(None);
            };

            let path = if answer.is_empty() {
                expand_tilde(&default)
            } else {
                expand_tilde(&answer)
            };

            if is_csv_file(&path) {
                return Ok(Some(path));
            }
            writeln!(
                self.output,
                "Error: file '{}' must exist and have a .csv extension!",
                path.display()
            )?;
        }
    }

    /// Print `msg` and read one trimmed line; `None` at end of input.
    fn prompt(&mut self, msg: &str) -> AppResult<Option<String>> {
        write!(self.output, "{msg}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
