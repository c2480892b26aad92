//! JSON data transfer objects exchanged with API consumers.

pub mod api;
pub mod player;
pub mod stats;
