//! Data access layer repositories.
//!
//! Repositories wrap the record store behind explicit capability methods. Each is constructed
//! over a borrowed `ConnectionTrait`, so callers pass either a pooled connection or a
//! transaction and nothing reaches for a global connection.

pub mod career_stats;
pub mod player;
