//! Core domain types
//!
//! This module contains the structures the poller works with on every cycle.
//! `homework` holds the per-response types, `state` the poller-owned state that
//! outlives a single cycle.

pub mod homework;
pub mod state;
