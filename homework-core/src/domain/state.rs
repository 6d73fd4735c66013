//! Poller state
//!
//! Owned exclusively by the poll loop and kept in memory for the lifetime of
//! the process.

use std::collections::HashMap;

use serde_json::Value;

use super::homework::{PollResponse, WorkItem};

/// Cursor plus the last status code seen for every work item
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PollState {
    /// Timestamp passed as `from_date` on the next fetch
    pub cursor: i64,
    /// Last seen status code, keyed by work item name
    pub last_seen: HashMap<String, String>,
}

impl PollState {
    /// Creates an empty state starting at `cursor`
    pub fn new(cursor: i64) -> Self {
        Self {
            cursor,
            last_seen: HashMap::new(),
        }
    }

    /// Whether `item` differs from what was last recorded for it
    ///
    /// Items that are new, carry a different status code, or cannot be keyed
    /// at all count as changed. The last kind is left for the translator to
    /// reject with a precise reason.
    pub fn is_changed(&self, item: &Value) -> bool {
        match WorkItem::from_value(item) {
            Some(item) => self.last_seen.get(&item.name) != Some(&item.status),
            None => true,
        }
    }

    /// Returns the changed items, in response order
    pub fn diff<'a>(&self, items: &'a [Value]) -> Vec<&'a Value> {
        items.iter().filter(|item| self.is_changed(item)).collect()
    }

    /// Records a successfully processed response
    ///
    /// Advances the cursor and stores the status of every keyable item,
    /// whether or not it was reported as changed.
    pub fn commit(&mut self, response: &PollResponse) {
        self.cursor = response.cursor;
        for item in response.work_items.iter().filter_map(WorkItem::from_value) {
            self.last_seen.insert(item.name, item.status);
        }
    }
}
