//! Homework Core
//!
//! Core types and pure logic for the homework status bot.
//!
//! This crate contains:
//! - Domain types: poll responses, work items and the poller's in-memory state
//! - Validation: structural checks on the decoded status API response
//! - Verdicts: translation of review status codes into user-facing messages
//!
//! Nothing in here performs I/O. Transport lives in `homework-client`,
//! orchestration in `homework-bot`.

pub mod domain;
pub mod validation;
pub mod verdict;

pub use domain::homework::{PollResponse, WorkItem};
pub use domain::state::PollState;
pub use validation::{ShapeError, validate};
pub use verdict::{TranslateError, Verdict, translate};
