//! Test fixture modules for database record creation.
//!
//! - `player` - player records, their career stats and factory functions for stat lines

pub mod player;
