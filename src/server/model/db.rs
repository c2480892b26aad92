//! Database model type aliases.
//!
//! Short names for the SeaORM entity models so repositories and services don't need to import
//! from the generated `entity` crate directly.

/// Type alias for a player database model.
///
/// # Fields (from `entity::player::Model`)
/// - `id` - Primary key
/// - `name` - Unique display name
/// - `position` - Fielding position, see [`entity::sea_orm_active_enums::Position`]
/// - `description` - Optional free-text biography
/// - `created_at` - Timestamp when the player was created
/// - `updated_at` - Timestamp of the last player record update
pub type PlayerModel = entity::player::Model;

/// Type alias for a career stats database model.
///
/// Exactly one per player. Holds raw counting stats and the four fixed-point rates; derived
/// metrics are computed from it through [`StatLine`](crate::server::stats::StatLine) and never
/// stored.
pub type CareerStatsModel = entity::career_stats::Model;
