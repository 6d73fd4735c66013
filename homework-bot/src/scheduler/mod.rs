//! Scheduler layer for the bot
//!
//! Owns the poll state and drives the fetch, validate, diff and notify cycle
//! at a fixed pace.

pub mod poller;

pub use poller::StatusPoller;
