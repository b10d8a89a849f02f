pub mod champion;
pub mod game;
pub mod game_type;
pub mod league;
pub mod pages;
pub mod stats;
pub mod team;

use chrono::{DateTime, Utc};

/// Epoch milliseconds as a UTC timestamp. Zero or out-of-range values map to the epoch.
pub fn timestamp(millis: i64) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(millis).unwrap_or_default()
}

pub use champion::{Champion, ChampionRanks};
pub use game::{FellowPlayer, RecentGame};
pub use game_type::GameType;
pub use league::{LeagueEntry, LeagueStanding, MiniSeries};
pub use pages::{Mastery, MasteryPage, RunePage, RuneSlot};
pub use stats::{ChampionStats, GameTypeSummary, RankedStats};
pub use team::{MessageOfDay, TeamMatch, TeamMember, TeamRecord, TeamStatDetail};
