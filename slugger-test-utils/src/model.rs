//! Database model aliases used by fixtures and factories.

pub type PlayerModel = entity::player::Model;
pub type CareerStatsModel = entity::career_stats::Model;
