//! Catalog model and persistence.

pub mod catalog;
pub mod error;
pub mod model;
