//! Shared configuration, error and vocabulary types for the Cadence workspace.

pub mod config;
pub mod constants;
pub mod error;
pub mod types;
