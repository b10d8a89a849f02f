use crate::api::models::{ChampionStatsDto, PlayerStatsSummaryDto, PlayerStatsSummaryListDto, RankedStatsDto, RawStats};
use crate::error::Result;
use crate::model::game_type::GameType;
use crate::model::timestamp;
use chrono::{DateTime, Utc};
use log::warn;
use serde_json::Value;
use std::collections::BTreeMap;

/// Flattens a raw counter map to integers: booleans become 0/1, anything
/// that is not a number becomes 0.
pub fn normalize_stats(raw: RawStats) -> BTreeMap<String, i64> {
    raw.into_iter()
        .map(|(name, value)| {
            let count = match value {
                Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)).unwrap_or(0),
                Value::Bool(b) => i64::from(b),
                _ => 0,
            };
            (name, count)
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameTypeSummary {
    pub game_type: GameType,
    pub wins: i64,
    pub losses: i64,
    pub last_modified: DateTime<Utc>,
    pub aggregated_stats: BTreeMap<String, i64>,
}

impl GameTypeSummary {
    pub fn from_dto(dto: PlayerStatsSummaryDto) -> Result<Self> {
        Ok(GameTypeSummary {
            game_type: dto.player_stat_summary_type.parse()?,
            wins: dto.wins,
            losses: dto.losses,
            last_modified: timestamp(dto.modify_date),
            aggregated_stats: normalize_stats(dto.aggregated_stats),
        })
    }

    pub fn stat(&self, name: &str) -> i64 {
        self.aggregated_stats.get(name).copied().unwrap_or(0)
    }

    pub fn games_played(&self) -> i64 {
        self.wins + self.losses
    }
}

/// Index a summary response by game type. Summaries of types this crate does
/// not know are skipped.
pub fn summaries_by_type(list: PlayerStatsSummaryListDto) -> BTreeMap<GameType, GameTypeSummary> {
    let mut summaries = BTreeMap::new();
    for dto in list.player_stat_summaries {
        let kind = dto.player_stat_summary_type.clone();
        match GameTypeSummary::from_dto(dto) {
            Ok(summary) => {
                summaries.insert(summary.game_type, summary);
            }
            Err(_) => warn!("Skipping stat summary of unknown game type '{}'", kind),
        }
    }
    summaries
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChampionStats {
    pub id: i64,
    pub name: String,
    pub stats: BTreeMap<String, i64>,
}

impl ChampionStats {
    pub fn stat(&self, name: &str) -> i64 {
        self.stats.get(name).copied().unwrap_or(0)
    }
}

impl From<ChampionStatsDto> for ChampionStats {
    fn from(dto: ChampionStatsDto) -> Self {
        ChampionStats {
            id: dto.id,
            name: dto.name,
            stats: normalize_stats(dto.stats),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedStats {
    pub summoner_id: i64,
    pub last_modified: DateTime<Utc>,
    pub champions: Vec<ChampionStats>,
}

impl RankedStats {
    pub fn champion(&self, champion_id: i64) -> Option<&ChampionStats> {
        self.champions.iter().find(|c| c.id == champion_id)
    }
}

impl From<RankedStatsDto> for RankedStats {
    fn from(dto: RankedStatsDto) -> Self {
        RankedStats {
            summoner_id: dto.summoner_id,
            last_modified: timestamp(dto.modify_date),
            champions: dto.champions.into_iter().map(ChampionStats::from).collect(),
        }
    }
}
