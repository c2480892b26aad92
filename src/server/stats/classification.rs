//! Hitter profile tags attached to unique statistical profiles.

use rust_decimal::Decimal;

use crate::server::stats::{DerivedStats, StatLine};

/// Tag awarded to a hitter whose derived metrics cross a fixed threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Power-speed number above 200
    ElitePowerSpeed,
    /// Isolated power above .250
    PowerHitter,
    /// More walks than strikeouts
    DisciplinedHitter,
    /// Stolen base success rate above 80%
    EfficientBaseStealer,
    /// Batting average above .300 with more than 400 home runs
    EliteAllAroundHitter,
}

impl Classification {
    /// Label shown to API clients.
    pub fn label(&self) -> &'static str {
        match self {
            Self::ElitePowerSpeed => "Elite Power-Speed",
            Self::PowerHitter => "Power Hitter",
            Self::DisciplinedHitter => "Disciplined Hitter",
            Self::EfficientBaseStealer => "Efficient Base Stealer",
            Self::EliteAllAroundHitter => "Elite All-Around Hitter",
        }
    }

    /// Every tag the stat line earns, in a fixed order. May be empty.
    pub fn classify(line: &StatLine, derived: &DerivedStats) -> Vec<Classification> {
        let mut tags = Vec::new();

        if derived.power_speed_number > 200.0 {
            tags.push(Self::ElitePowerSpeed);
        }
        if derived.isolated_power > 0.250 {
            tags.push(Self::PowerHitter);
        }
        if derived.walk_to_strikeout_ratio > 1.0 {
            tags.push(Self::DisciplinedHitter);
        }
        if derived.stolen_base_pct > 80.0 {
            tags.push(Self::EfficientBaseStealer);
        }
        if line.batting_avg > Decimal::new(300, 3) && line.home_runs > 400 {
            tags.push(Self::EliteAllAroundHitter);
        }

        tags
    }
}
