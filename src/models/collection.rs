use super::movement::{CsvRow, Movement};
use crate::config::ColumnLabels;
use crate::errors::{AppError, AppResult};
use crate::export::csv::{write_all, write_work};
use crate::utils::path::count_regular_files;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, error, info};

/// Ordered, growable set of movements.
///
/// Storage order is insertion (or import) order. The sorted and filtered
/// views borrow the records and never reorder the storage. Each call to
/// `iter()` or to a view starts an independent traversal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MovementCollection {
    movements: Vec<Movement>,
}

impl MovementCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_movements(movements: Vec<Movement>) -> Self {
        Self { movements }
    }

    pub fn len(&self) -> usize {
        self.movements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movements.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Movement> {
        self.movements.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Movement> {
        self.movements.get(index)
    }

    /// Positional access; fails when `index >= len()`.
    pub fn at(&self, index: usize) -> AppResult<&Movement> {
        self.movements.get(index).ok_or(AppError::IndexOutOfRange {
            index,
            len: self.movements.len(),
        })
    }

    pub fn add_movement(&mut self, movement: Movement) {
        self.movements.push(movement);
    }

    /// Most recent first. Movements with equal timestamps keep insertion order.
    pub fn sorted_by_date(&self) -> impl Iterator<Item = &Movement> {
        let mut sorted: Vec<&Movement> = self.movements.iter().collect();
        sorted.sort_by(|a, b| b.timestamp().cmp(&a.timestamp()));
        sorted.into_iter()
    }

    /// Lowest room first. Movements in the same room keep insertion order.
    pub fn sorted_by_room(&self) -> impl Iterator<Item = &Movement> {
        let mut sorted: Vec<&Movement> = self.movements.iter().collect();
        sorted.sort_by_key(|m| m.room());
        sorted.into_iter()
    }

    pub fn filter_workplace(&self, is_workplace: bool) -> impl Iterator<Item = &Movement> {
        self.movements
            .iter()
            .filter(move |m| m.is_workplace() == is_workplace)
    }

    /// Count regular files in `path`. Listing errors are logged and yield 0.
    pub fn count_files_in_directory(path: impl AsRef<Path>) -> usize {
        let path = path.as_ref();
        match count_regular_files(path) {
            Ok(n) => n,
            Err(e) => {
                error!("cannot list directory {}: {e}", path.display());
                0
            }
        }
    }

    /// Load movements from a CSV file, skipping invalid rows.
    ///
    /// An unreadable file is logged and gives an empty collection.
    pub fn from_csv(path: impl AsRef<Path>, columns: &ColumnLabels) -> Self {
        let path = path.as_ref();
        let loaded = File::open(path)
            .map_err(AppError::from)
            .and_then(|file| Self::from_reader(file, columns));

        match loaded {
            Ok(collection) => {
                debug!("loaded {} movements from {}", collection.len(), path.display());
                collection
            }
            Err(e) => {
                error!("cannot read {}: {e}", path.display());
                Self::new()
            }
        }
    }

    /// Parse header-led CSV from any reader.
    ///
    /// Rows that fail validation are dropped; short rows miss a column and
    /// are dropped too. I/O and UTF-8 errors abort the whole read.
    pub fn from_reader<R: Read>(reader: R, columns: &ColumnLabels) -> AppResult<Self> {
        let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
        let headers = rdr.headers()?.clone();

        let mut collection = Self::new();
        let mut skipped = 0usize;

        for result in rdr.records() {
            let record = result?;
            let row: CsvRow = headers
                .iter()
                .zip(record.iter())
                .map(|(label, value)| (label.to_string(), value.to_string()))
                .collect();

            match Movement::from_row(&row, columns) {
                Ok(movement) => collection.add_movement(movement),
                Err(_) => skipped += 1,
            }
        }

        if skipped > 0 {
            debug!("skipped {skipped} invalid rows");
        }

        Ok(collection)
    }

    /// Write `<prefix>_all.csv` and `<prefix>_work.csv`.
    ///
    /// Returns false on the first I/O failure; a file already written is
    /// left in place.
    pub fn save_to_csv(&self, prefix: &str, columns: &ColumnLabels) -> bool {
        let (all_path, work_path) = export_paths(prefix);

        let written = File::create(&all_path)
            .map_err(AppError::from)
            .and_then(|file| write_all(file, self, columns))
            .and_then(|_| File::create(&work_path).map_err(AppError::from))
            .and_then(|file| write_work(file, self, columns));

        match written {
            Ok(()) => {
                info!("results saved to {all_path} and {work_path}");
                true
            }
            Err(e) => {
                error!("cannot save results with prefix {prefix}: {e}");
                false
            }
        }
    }
}

/// File names written by `save_to_csv` for `prefix`.
pub fn export_paths(prefix: &str) -> (String, String) {
    (format!("{prefix}_all.csv"), format!("{prefix}_work.csv"))
}

impl FromIterator<Movement> for MovementCollection {
    fn from_iter<I: IntoIterator<Item = Movement>>(iter: I) -> Self {
        Self::from_movements(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a MovementCollection {
    type Item = &'a Movement;
    type IntoIter = std::slice::Iter<'a, Movement>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for MovementCollection {
    type Item = Movement;
    type IntoIter = std::vec::IntoIter<Movement>;

    fn into_iter(self) -> Self::IntoIter {
        self.movements.into_iter()
    }
}
