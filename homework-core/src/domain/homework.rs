//! Homework domain types

use serde_json::Value;

/// Key holding the list of work items in a status API response
pub const HOMEWORKS_KEY: &str = "homeworks";
/// Key holding the cursor timestamp in a status API response
pub const CURSOR_KEY: &str = "current_date";
/// Key holding a work item's name
pub const NAME_KEY: &str = "homework_name";
/// Key holding a work item's review status code
pub const STATUS_KEY: &str = "status";

/// A structurally valid status API response
///
/// Produced by [`crate::validate`]. Work items are kept loosely typed: each one
/// is checked on its own when it gets translated, so a single malformed item
/// never invalidates the whole response.
#[derive(Debug, Clone, PartialEq)]
pub struct PollResponse {
    /// Items under `homeworks`, in response order
    pub work_items: Vec<Value>,
    /// Value of `current_date`
    pub cursor: i64,
}

/// A single submitted homework and its review status code
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WorkItem {
    pub name: String,
    pub status: String,
}

impl WorkItem {
    pub fn new(name: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: status.into(),
        }
    }

    /// Extracts name and status from a loosely typed item
    ///
    /// Returns `None` unless both fields are present and are strings.
    pub fn from_value(value: &Value) -> Option<Self> {
        let name = value.get(NAME_KEY)?.as_str()?;
        let status = value.get(STATUS_KEY)?.as_str()?;
        Some(Self::new(name, status))
    }
}
