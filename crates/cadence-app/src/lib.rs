//! HTTP surface for the supplement scheduling engine.

pub mod app;
pub mod catalog_handler;
pub mod config;
pub mod error;
