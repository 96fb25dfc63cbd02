use crate::types::Prayer;
use chrono::NaiveDate;
use std::collections::HashSet;

/// Per-day record of which prayers have already triggered a reminder.
/// Only the current date is kept; marking a new date drops the old entries,
/// so reminders recur daily and the ledger never grows.
#[derive(Debug, Default)]
pub struct ReminderLedger {
    date: Option<NaiveDate>,
    notified: HashSet<Prayer>,
}

impl ReminderLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_notified(&self, date: NaiveDate, prayer: Prayer) -> bool {
        self.date == Some(date) && self.notified.contains(&prayer)
    }

    pub fn mark_notified(&mut self, date: NaiveDate, prayer: Prayer) {
        if self.date != Some(date) {
            self.date = Some(date);
            self.notified.clear();
        }
        self.notified.insert(prayer);
    }
}
