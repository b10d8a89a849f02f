use crate::api::models::{FellowPlayerDto, GameDto};
use crate::model::stats::normalize_stats;
use crate::model::timestamp;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FellowPlayer {
    pub summoner_id: i64,
    pub team_id: i64,
    pub champion_id: i64,
}

/// One entry of a summoner's recent-games list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentGame {
    pub game_id: i64,
    pub game_mode: String,
    pub game_type: String,
    pub sub_type: String,
    pub map_id: i64,
    pub team_id: i64,
    pub champion_id: i64,
    pub spells: (i64, i64),
    pub level: i64,
    pub invalid: bool,
    pub played_at: DateTime<Utc>,
    pub fellow_players: Vec<FellowPlayer>,
    pub stats: BTreeMap<String, i64>,
}

impl RecentGame {
    pub fn won(&self) -> bool {
        self.stat("win") != 0
    }

    pub fn stat(&self, name: &str) -> i64 {
        self.stats.get(name).copied().unwrap_or(0)
    }
}

impl From<FellowPlayerDto> for FellowPlayer {
    fn from(dto: FellowPlayerDto) -> Self {
        FellowPlayer {
            summoner_id: dto.summoner_id,
            team_id: dto.team_id,
            champion_id: dto.champion_id,
        }
    }
}

impl From<GameDto> for RecentGame {
    fn from(dto: GameDto) -> Self {
        RecentGame {
            game_id: dto.game_id,
            game_mode: dto.game_mode,
            game_type: dto.game_type,
            sub_type: dto.sub_type,
            map_id: dto.map_id,
            team_id: dto.team_id,
            champion_id: dto.champion_id,
            spells: (dto.spell1, dto.spell2),
            level: dto.level,
            invalid: dto.invalid,
            played_at: timestamp(dto.create_date),
            fellow_players: dto.fellow_players.into_iter().map(FellowPlayer::from).collect(),
            stats: normalize_stats(dto.stats),
        }
    }
}
