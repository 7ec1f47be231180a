//! Movement report: the data shown by `report` and by the interactive shell.

use crate::models::{Movement, MovementCollection};
use crate::utils::table::{Column, Table};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// Regular files found in the analysed directory, when one was given.
    pub file_count: Option<usize>,
    pub total: usize,
    pub recent: Vec<Movement>,
    pub by_room: Vec<Movement>,
    pub workplace: usize,
    pub non_workplace: usize,
}

impl Report {
    /// Collect the `limit` most recent movements, the `limit` movements with
    /// the lowest room numbers and the workplace totals.
    pub fn build(
        collection: &MovementCollection,
        limit: usize,
        file_count: Option<usize>,
    ) -> Self {
        Self {
            file_count,
            total: collection.len(),
            recent: collection.sorted_by_date().take(limit).cloned().collect(),
            by_room: collection.sorted_by_room().take(limit).cloned().collect(),
            workplace: collection.filter_workplace(true).count(),
            non_workplace: collection.filter_workplace(false).count(),
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        if let Some(n) = self.file_count {
            out.push_str(&format!("Files found: {n}\n\n"));
        }

        out.push_str(&format!("Latest {} movements (by date):\n", self.recent.len()));
        let mut recent = Table::new(vec![
            Column::new("Timestamp"),
            Column::new("Room"),
            Column::new("Workplace"),
        ]);
        for m in &self.recent {
            recent.add_row(vec![
                m.timestamp_str(),
                m.room().to_string(),
                yes_no(m.is_workplace()).to_string(),
            ]);
        }
        out.push_str(&recent.render());

        out.push_str(&format!("\nFirst {} movements (by room):\n", self.by_room.len()));
        let mut rooms = Table::new(vec![Column::new("Room"), Column::new("Timestamp")]);
        for m in &self.by_room {
            rooms.add_row(vec![m.room().to_string(), m.timestamp_str()]);
        }
        out.push_str(&rooms.render());

        out.push_str(&format!("\nWorkplace movements:     {}\n", self.workplace));
        out.push_str(&format!("Non-workplace movements: {}\n", self.non_workplace));

        out
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}
