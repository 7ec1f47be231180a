// src/export/csv.rs

use crate::config::ColumnLabels;
use crate::errors::AppResult;
use crate::models::MovementCollection;
use csv::Writer;
use std::io::Write;

/// Writes every movement, in storage order, with the four input columns.
pub fn write_all<W: Write>(
    target: W,
    movements: &MovementCollection,
    columns: &ColumnLabels,
) -> AppResult<()> {
    let mut wtr = Writer::from_writer(target);

    wtr.write_record(columns.all_header())?;

    for m in movements {
        wtr.write_record(&[
            m.id().to_string(),
            m.timestamp_str(),
            m.is_workplace().to_string(),
            m.room().to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Writes workplace movements only, without the flag column.
pub fn write_work<W: Write>(
    target: W,
    movements: &MovementCollection,
    columns: &ColumnLabels,
) -> AppResult<()> {
    let mut wtr = Writer::from_writer(target);

    wtr.write_record(columns.work_header())?;

    for m in movements.filter_workplace(true) {
        wtr.write_record(&[m.id().to_string(), m.timestamp_str(), m.room().to_string()])?;
    }

    wtr.flush()?;
    Ok(())
}
