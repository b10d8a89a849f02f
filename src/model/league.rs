use crate::api::models::{LeagueDto, LeagueEntryDto, MiniSeriesDto};
use crate::model::timestamp;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MiniSeries {
    pub wins: i64,
    pub losses: i64,
    pub target: i64,
    /// One char per game: W, L or N (not played)
    pub progress: String,
    pub time_left_to_play: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeagueEntry {
    pub player_or_team_id: String,
    pub player_or_team_name: String,
    pub league_name: String,
    pub queue_type: String,
    pub rank: String,
    pub tier: String,
    pub league_points: i64,
    pub wins: i64,
    pub losses: i64,
    pub fresh_blood: bool,
    pub hot_streak: bool,
    pub inactive: bool,
    pub veteran: bool,
    pub last_played: i64,
    pub time_until_decay: i64,
    pub mini_series: Option<MiniSeries>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeagueStanding {
    pub name: String,
    pub queue: String,
    pub tier: String,
    pub timestamp: DateTime<Utc>,
    pub participant_id: String,
    /// Same order as the response
    pub entries: Vec<LeagueEntry>,
}

impl LeagueStanding {
    pub fn entry_for(&self, player_or_team_id: &str) -> Option<&LeagueEntry> {
        self.entries.iter().find(|e| e.player_or_team_id == player_or_team_id)
    }
}

impl From<MiniSeriesDto> for MiniSeries {
    fn from(dto: MiniSeriesDto) -> Self {
        MiniSeries {
            wins: dto.wins,
            losses: dto.losses,
            target: dto.target,
            progress: dto.progress,
            time_left_to_play: dto.time_left_to_play,
        }
    }
}

impl From<LeagueEntryDto> for LeagueEntry {
    fn from(dto: LeagueEntryDto) -> Self {
        LeagueEntry {
            player_or_team_id: dto.player_or_team_id,
            player_or_team_name: dto.player_or_team_name,
            league_name: dto.league_name,
            queue_type: dto.queue_type,
            rank: dto.rank,
            tier: dto.tier,
            league_points: dto.league_points,
            wins: dto.wins,
            losses: dto.losses,
            fresh_blood: dto.is_fresh_blood,
            hot_streak: dto.is_hot_streak,
            inactive: dto.is_inactive,
            veteran: dto.is_veteran,
            last_played: dto.last_played,
            time_until_decay: dto.time_until_decay,
            mini_series: dto.mini_series.map(MiniSeries::from),
        }
    }
}

impl From<LeagueDto> for LeagueStanding {
    fn from(dto: LeagueDto) -> Self {
        LeagueStanding {
            name: dto.name,
            queue: dto.queue,
            tier: dto.tier,
            timestamp: timestamp(dto.timestamp),
            participant_id: dto.participant_id,
            entries: dto.entries.into_iter().map(LeagueEntry::from).collect(),
        }
    }
}
