//! Clock port
//!
//! The single source of "today". Date stamps written by the store all
//! come through here so tests can pin time.

use chrono::NaiveDate;

pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;

    /// Today as the snapshot's `YYYY-MM-DD` string form
    fn today_iso(&self) -> String {
        self.today().format("%Y-%m-%d").to_string()
    }

    /// Today's month key, `YYYY-MM`
    fn this_month(&self) -> String {
        self.today().format("%Y-%m").to_string()
    }
}
