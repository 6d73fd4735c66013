//! Review verdicts
//!
//! Maps review status codes to the messages shown to the user.

use std::fmt;
use std::str::FromStr;

use serde_json::Value;
use thiserror::Error;

use crate::domain::homework::{NAME_KEY, STATUS_KEY};

/// Review verdict for a homework
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Approved,
    Reviewing,
    Rejected,
}

impl Verdict {
    /// Every known verdict
    pub const ALL: [Verdict; 3] = [Verdict::Approved, Verdict::Reviewing, Verdict::Rejected];

    /// Status code used by the status API
    pub fn code(&self) -> &'static str {
        match self {
            Verdict::Approved => "approved",
            Verdict::Reviewing => "reviewing",
            Verdict::Rejected => "rejected",
        }
    }

    /// Human-readable message for this verdict
    pub fn message(&self) -> &'static str {
        match self {
            Verdict::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            Verdict::Reviewing => "Работа взята на проверку ревьюером.",
            Verdict::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl FromStr for Verdict {
    type Err = TranslateError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        Verdict::ALL
            .into_iter()
            .find(|verdict| verdict.code() == code)
            .ok_or_else(|| TranslateError::UnknownStatus(code.to_string()))
    }
}

/// Reason a work item could not be translated
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslateError {
    #[error("work item is missing the \"{field}\" field")]
    FieldMissing { field: &'static str },

    #[error("unknown review status \"{0}\"")]
    UnknownStatus(String),
}

/// Translates a work item into a status change message
///
/// The status field is checked before the name field; a field that is present
/// but not a string counts as missing.
pub fn translate(item: &Value) -> Result<String, TranslateError> {
    let status = string_field(item, STATUS_KEY)?;
    let name = string_field(item, NAME_KEY)?;
    let verdict: Verdict = status.parse()?;

    Ok(format!("Changed review status of \"{}\": {}", name, verdict))
}

fn string_field<'a>(item: &'a Value, field: &'static str) -> Result<&'a str, TranslateError> {
    item.get(field)
        .and_then(Value::as_str)
        .ok_or(TranslateError::FieldMissing { field })
}
