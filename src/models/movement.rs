use crate::config::ColumnLabels;
use crate::errors::{AppError, AppResult};
use crate::utils::time::{format_timestamp, parse_timestamp, serialize_timestamp};
use chrono::NaiveDateTime;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// One CSV data row keyed by header label.
pub type CsvRow = HashMap<String, String>;

/// A single room movement of an office worker.
///
/// Fields are only reachable through accessors: once built, a movement
/// cannot be changed, so every instance stays valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Movement {
    id: i64,
    #[serde(serialize_with = "serialize_timestamp")]
    timestamp: NaiveDateTime,
    is_workplace: bool,
    room: i64,
}

impl Movement {
    pub fn new(id: i64, timestamp: NaiveDateTime, is_workplace: bool, room: i64) -> Self {
        Self {
            id,
            timestamp,
            is_workplace,
            room,
        }
    }

    /// Build a movement from raw field text, validating every field.
    pub fn parse(id: &str, timestamp: &str, is_workplace: &str, room: &str) -> AppResult<Self> {
        let (id, timestamp, room) = (id.trim(), timestamp.trim(), room.trim());

        let id = id
            .parse::<i64>()
            .map_err(|_| AppError::InvalidId(id.to_string()))?;
        let timestamp = parse_timestamp(timestamp)
            .ok_or_else(|| AppError::InvalidTimestamp(timestamp.to_string()))?;
        let is_workplace = parse_workplace_flag(is_workplace)?;
        let room = room
            .parse::<i64>()
            .map_err(|_| AppError::InvalidRoom(room.to_string()))?;

        Ok(Self::new(id, timestamp, is_workplace, room))
    }

    /// Build a movement from a header-keyed CSV row.
    pub fn from_row(row: &CsvRow, columns: &ColumnLabels) -> AppResult<Self> {
        let field = |label: &str| {
            row.get(label)
                .map(String::as_str)
                .ok_or_else(|| AppError::MissingColumn(label.to_string()))
        };

        Self::parse(
            field(&columns.id)?,
            field(&columns.timestamp)?,
            field(&columns.workplace)?,
            field(&columns.room)?,
        )
    }

    /// True when `row` holds a complete, convertible movement.
    pub fn is_valid_row(row: &CsvRow, columns: &ColumnLabels) -> bool {
        Self::from_row(row, columns).is_ok()
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    pub fn timestamp_str(&self) -> String {
        format_timestamp(&self.timestamp)
    }

    pub fn is_workplace(&self) -> bool {
        self.is_workplace
    }

    pub fn room(&self) -> i64 {
        self.room
    }
}

impl fmt::Display for Movement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Movement(id={}, timestamp={}, is_workplace={}, room={})",
            self.id,
            self.timestamp_str(),
            self.is_workplace,
            self.room
        )
    }
}

/// Accepts `true` / `false` in any letter case.
pub fn parse_workplace_flag(s: &str) -> AppResult<bool> {
    let s = s.trim();
    match s.to_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(AppError::InvalidWorkplace(s.to_string())),
    }
}
