//! Schedule item entity
//!
//! Recurring financial chores grouped by frequency. The non-custom rows
//! ship with the seed; users add custom rows and can delete any row.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::Frequency;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleItem {
    pub id: String,
    pub frequency: Frequency,
    pub task: String,
    /// Free text the user fills in, e.g. "Apr 15 / Jun 15 / Sep 15 / Jan 15"
    pub my_dates: String,
    pub is_custom: bool,
    /// Dates the task was marked done, ISO `YYYY-MM-DD`
    pub completed_dates: BTreeSet<String>,
    pub helper_text: Option<String>,
}

impl ScheduleItem {
    pub fn completed_on(&self, date: &str) -> bool {
        self.completed_dates.contains(date)
    }
}

/// Creation record: an item missing only the generated id
#[derive(Debug, Clone, PartialEq)]
pub struct NewScheduleItem {
    pub frequency: Frequency,
    pub task: String,
    pub my_dates: String,
    pub is_custom: bool,
    pub completed_dates: BTreeSet<String>,
    pub helper_text: Option<String>,
}

impl NewScheduleItem {
    /// A user-created row with nothing completed yet
    pub fn custom(frequency: Frequency, task: impl Into<String>) -> Self {
        Self {
            frequency,
            task: task.into(),
            my_dates: String::new(),
            is_custom: true,
            completed_dates: BTreeSet::new(),
            helper_text: None,
        }
    }
}
