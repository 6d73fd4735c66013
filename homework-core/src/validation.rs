//! Response validation
//!
//! Structural checks on the decoded status API body, run before any business
//! logic looks at it.

use serde_json::Value;
use thiserror::Error;

use crate::domain::homework::{CURSOR_KEY, HOMEWORKS_KEY, PollResponse};

/// Reason a decoded response was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("response is not a mapping")]
    NotAMapping,

    #[error("response is missing the \"homeworks\" key")]
    MissingWorkItems,

    #[error("\"homeworks\" is not a list")]
    WorkItemsNotAList,

    #[error("response is missing the \"current_date\" key")]
    MissingCursor,

    #[error("\"current_date\" is not an integer")]
    CursorNotInteger,
}

/// Validates a decoded response body
///
/// Checks run in a fixed order and the first failure is returned. The input
/// is only borrowed; the returned response owns copies of the work items.
pub fn validate(raw: &Value) -> Result<PollResponse, ShapeError> {
    let map = raw.as_object().ok_or(ShapeError::NotAMapping)?;

    let work_items = map
        .get(HOMEWORKS_KEY)
        .ok_or(ShapeError::MissingWorkItems)?
        .as_array()
        .ok_or(ShapeError::WorkItemsNotAList)?;

    let cursor = map
        .get(CURSOR_KEY)
        .ok_or(ShapeError::MissingCursor)?
        .as_i64()
        .ok_or(ShapeError::CursorNotInteger)?;

    Ok(PollResponse {
        work_items: work_items.clone(),
        cursor,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_response() {
        let raw = json!({
            "homeworks": [{"homework_name": "hw1", "status": "approved"}],
            "current_date": 1000
        });

        let response = validate(&raw).unwrap();

        assert_eq!(response.cursor, 1000);
        assert_eq!(response.work_items.len(), 1);
    }

    #[test]
    fn test_empty_work_items_are_valid() {
        let response = validate(&json!({"homeworks": [], "current_date": 1000})).unwrap();
        assert!(response.work_items.is_empty());
        assert_eq!(response.cursor, 1000);
    }

    #[test]
    fn test_not_a_mapping() {
        let raw = json!([{"homeworks": [], "current_date": 1000}]);
        assert_eq!(validate(&raw), Err(ShapeError::NotAMapping));
    }

    #[test]
    fn test_missing_work_items() {
        let raw = json!({"current_date": 1000});
        assert_eq!(validate(&raw), Err(ShapeError::MissingWorkItems));
    }

    #[test]
    fn test_work_items_not_a_list() {
        let raw = json!({"homeworks": {"homework_name": "hw1"}, "current_date": 1000});
        assert_eq!(validate(&raw), Err(ShapeError::WorkItemsNotAList));
    }

    #[test]
    fn test_missing_cursor() {
        let raw = json!({"homeworks": []});
        assert_eq!(validate(&raw), Err(ShapeError::MissingCursor));
    }

    #[test]
    fn test_cursor_not_integer() {
        for cursor in [json!("1000"), json!(10.5), json!(null)] {
            let raw = json!({"homeworks": [], "current_date": cursor});
            assert_eq!(validate(&raw), Err(ShapeError::CursorNotInteger));
        }
    }

    #[test]
    fn test_validate_is_idempotent() {
        let raw = json!({
            "homeworks": [{"homework_name": "hw1", "status": "reviewing"}],
            "current_date": 42
        });
        let snapshot = raw.clone();

        let first = validate(&raw);
        let second = validate(&raw);

        assert_eq!(first, second);
        assert_eq!(raw, snapshot);
    }
}
