use serde::{Deserialize, Serialize};

use crate::dates::{date_sort_key, DateKey};

/// A note as the backend serves it. Field names match the wire format
/// exactly; `date` stays a display string (`DD.MM.YYYY`) end to end and is
/// only interpreted when sorting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: String,
    pub title: String,
    pub desc: String,
    pub date: String,
}

impl Note {
    pub fn new(id: String, title: String, desc: String, date: String) -> Self {
        Note {
            id,
            title,
            desc,
            date,
        }
    }

    pub fn sort_key(&self) -> DateKey {
        date_sort_key(&self.date)
    }
}
