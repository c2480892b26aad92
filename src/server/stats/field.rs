//! Stat keys accepted from API clients.
//!
//! Each enum maps an external key to the column it reads so queries never build column names
//! from client input.

use entity::career_stats::Column as StatsColumn;

/// Stat a leaderboard can be ranked by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaderboardStat {
    /// `runs`
    Runs,
    /// `hits`
    Hits,
    /// `doubles`
    Doubles,
    /// `triples`
    Triples,
    /// `home_runs`
    HomeRuns,
    /// `rbis`
    Rbis,
    /// `walks`
    Walks,
    /// `strikeouts`
    Strikeouts,
    /// `stolen_bases`
    StolenBases,
    /// `batting_avg`
    BattingAvg,
    /// `on_base_pct`, also accepted as `obp`
    OnBasePct,
    /// `slugging_pct`, also accepted as `slugging`
    SluggingPct,
    /// `ops`
    Ops,
}

impl LeaderboardStat {
    /// Every rankable stat, in declaration order.
    pub const ALL: [LeaderboardStat; 13] = [
        Self::Runs,
        Self::Hits,
        Self::Doubles,
        Self::Triples,
        Self::HomeRuns,
        Self::Rbis,
        Self::Walks,
        Self::Strikeouts,
        Self::StolenBases,
        Self::BattingAvg,
        Self::OnBasePct,
        Self::SluggingPct,
        Self::Ops,
    ];

    /// Parse a client supplied stat key, `None` for unknown keys.
    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "slugging" => Some(Self::SluggingPct),
            "obp" => Some(Self::OnBasePct),
            key => Self::ALL.into_iter().find(|stat| stat.key() == key),
        }
    }

    /// Parse a stat key, falling back to home runs for unknown keys.
    pub fn resolve(key: &str) -> Self {
        Self::parse(key).unwrap_or(Self::HomeRuns)
    }

    /// Canonical key of the stat.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Runs => "runs",
            Self::Hits => "hits",
            Self::Doubles => "doubles",
            Self::Triples => "triples",
            Self::HomeRuns => "home_runs",
            Self::Rbis => "rbis",
            Self::Walks => "walks",
            Self::Strikeouts => "strikeouts",
            Self::StolenBases => "stolen_bases",
            Self::BattingAvg => "batting_avg",
            Self::OnBasePct => "on_base_pct",
            Self::SluggingPct => "slugging_pct",
            Self::Ops => "ops",
        }
    }

    /// Column the stat is stored in.
    pub fn column(&self) -> StatsColumn {
        match self {
            Self::Runs => StatsColumn::Runs,
            Self::Hits => StatsColumn::Hits,
            Self::Doubles => StatsColumn::Doubles,
            Self::Triples => StatsColumn::Triples,
            Self::HomeRuns => StatsColumn::HomeRuns,
            Self::Rbis => StatsColumn::Rbis,
            Self::Walks => StatsColumn::Walks,
            Self::Strikeouts => StatsColumn::Strikeouts,
            Self::StolenBases => StatsColumn::StolenBases,
            Self::BattingAvg => StatsColumn::BattingAvg,
            Self::OnBasePct => StatsColumn::OnBasePct,
            Self::SluggingPct => StatsColumn::SluggingPct,
            Self::Ops => StatsColumn::Ops,
        }
    }
}

/// Column the player list is sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListOrderField {
    /// Player name
    Name,
    /// Career home runs
    HomeRuns,
    /// Career batting average
    BattingAvg,
    /// Career OPS
    Ops,
    /// Career hits
    Hits,
    /// Career runs
    Runs,
    /// Career RBIs
    Rbis,
}

/// Parsed `ordering` query parameter of the player list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListOrdering {
    /// Column to sort by
    pub field: ListOrderField,
    /// `true` when the key was prefixed with `-`
    pub descending: bool,
}

impl Default for ListOrdering {
    fn default() -> Self {
        Self {
            field: ListOrderField::Name,
            descending: false,
        }
    }
}

impl ListOrdering {
    /// Parse an ordering key such as `-home_runs` or `career_stats__ops`.
    ///
    /// Unknown keys fall back to ascending name order.
    pub fn parse(key: &str) -> Self {
        let (descending, key) = match key.strip_prefix('-') {
            Some(key) => (true, key),
            None => (false, key),
        };
        let key = key.strip_prefix("career_stats__").unwrap_or(key);

        let field = match key {
            "name" => ListOrderField::Name,
            "home_runs" => ListOrderField::HomeRuns,
            "batting_avg" => ListOrderField::BattingAvg,
            "ops" => ListOrderField::Ops,
            "hits" => ListOrderField::Hits,
            "runs" => ListOrderField::Runs,
            "rbis" => ListOrderField::Rbis,
            _ => return Self::default(),
        };

        Self { field, descending }
    }

    /// Stats column to sort by, `None` when sorting by player name.
    pub fn stats_column(&self) -> Option<StatsColumn> {
        match self.field {
            ListOrderField::Name => None,
            ListOrderField::HomeRuns => Some(StatsColumn::HomeRuns),
            ListOrderField::BattingAvg => Some(StatsColumn::BattingAvg),
            ListOrderField::Ops => Some(StatsColumn::Ops),
            ListOrderField::Hits => Some(StatsColumn::Hits),
            ListOrderField::Runs => Some(StatsColumn::Runs),
            ListOrderField::Rbis => Some(StatsColumn::Rbis),
        }
    }
}

/// Integer stat that can be written through a stats update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountingStat {
    /// `games`
    Games,
    /// `at_bats`
    AtBats,
    /// `runs`
    Runs,
    /// `hits`
    Hits,
    /// `doubles`
    Doubles,
    /// `triples`
    Triples,
    /// `home_runs`
    HomeRuns,
    /// `rbis`
    Rbis,
    /// `walks`
    Walks,
    /// `strikeouts`
    Strikeouts,
    /// `stolen_bases`
    StolenBases,
    /// `caught_stealing`, the only nullable counting stat
    CaughtStealing,
}

impl CountingStat {
    /// Every writable counting stat.
    pub const ALL: [CountingStat; 12] = [
        Self::Games,
        Self::AtBats,
        Self::Runs,
        Self::Hits,
        Self::Doubles,
        Self::Triples,
        Self::HomeRuns,
        Self::Rbis,
        Self::Walks,
        Self::Strikeouts,
        Self::StolenBases,
        Self::CaughtStealing,
    ];

    /// Look up a counting stat by payload key.
    pub fn parse(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|stat| stat.key() == key)
    }

    /// Payload key of the stat.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Games => "games",
            Self::AtBats => "at_bats",
            Self::Runs => "runs",
            Self::Hits => "hits",
            Self::Doubles => "doubles",
            Self::Triples => "triples",
            Self::HomeRuns => "home_runs",
            Self::Rbis => "rbis",
            Self::Walks => "walks",
            Self::Strikeouts => "strikeouts",
            Self::StolenBases => "stolen_bases",
            Self::CaughtStealing => "caught_stealing",
        }
    }
}

/// Fixed-point rate that can be written through a stats update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateStat {
    /// `batting_avg`, at most 1
    BattingAvg,
    /// `on_base_pct`, at most 1
    OnBasePct,
    /// `slugging_pct`
    SluggingPct,
    /// `ops`
    Ops,
}

impl RateStat {
    /// Every writable rate.
    pub const ALL: [RateStat; 4] = [
        Self::BattingAvg,
        Self::OnBasePct,
        Self::SluggingPct,
        Self::Ops,
    ];

    /// Look up a rate by payload key.
    pub fn parse(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|stat| stat.key() == key)
    }

    /// Payload key of the rate.
    pub fn key(&self) -> &'static str {
        match self {
            Self::BattingAvg => "batting_avg",
            Self::OnBasePct => "on_base_pct",
            Self::SluggingPct => "slugging_pct",
            Self::Ops => "ops",
        }
    }

    /// Whether the rate is a proportion that cannot exceed 1.
    pub fn is_proportion(&self) -> bool {
        matches!(self, Self::BattingAvg | Self::OnBasePct)
    }
}
