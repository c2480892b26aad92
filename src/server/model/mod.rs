//! Server application models and type definitions.
//!
//! Application state shared with handlers and type aliases for the database entity models.

pub mod app;
pub mod db;
