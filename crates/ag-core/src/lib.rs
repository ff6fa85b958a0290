//! ag-core: Shared types for the agentdemo workspace
//!
//! This crate has zero internal crate dependencies and defines the
//! canonical types used across all other ag-* crates.

pub mod category;
pub mod payload;
pub mod prefs;
pub mod task;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("unknown task category: {0}")]
    UnknownCategory(String),
    #[error("unknown execution mode: {0}")]
    UnknownMode(String),
}

