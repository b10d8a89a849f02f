use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::BTreeMap;

/// Treats an explicit `null` the same as an absent field.
///
/// Pair with a container-level `#[serde(default)]` so that missing fields and
/// `null` fields both land on the zero value of their type.
pub fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Open-ended counter maps (`aggregatedStats`, champion `stats`, game `stats`).
pub type RawStats = BTreeMap<String, Value>;

// Summoner v1.3 response
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct SummonerDto {
    #[serde(deserialize_with = "nullable")]
    pub id: i64,
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub profile_icon_id: i64,
    #[serde(deserialize_with = "nullable")]
    pub summoner_level: i64,
    #[serde(deserialize_with = "nullable")]
    pub revision_date: i64,
}

// Champion v1.1 response
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ChampionListDto {
    #[serde(deserialize_with = "nullable")]
    pub champions: Vec<ChampionDto>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChampionDto {
    #[serde(deserialize_with = "nullable")]
    pub id: i64,
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub active: bool,
    #[serde(deserialize_with = "nullable")]
    pub bot_enabled: bool,
    #[serde(deserialize_with = "nullable")]
    pub bot_mm_enabled: bool,
    #[serde(deserialize_with = "nullable")]
    pub free_to_play: bool,
    #[serde(deserialize_with = "nullable")]
    pub ranked_play_enabled: bool,
    #[serde(deserialize_with = "nullable")]
    pub attack_rank: i64,
    #[serde(deserialize_with = "nullable")]
    pub defense_rank: i64,
    #[serde(deserialize_with = "nullable")]
    pub magic_rank: i64,
    #[serde(deserialize_with = "nullable")]
    pub difficulty_rank: i64,
}

// Stats v1.2 summary response
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayerStatsSummaryListDto {
    #[serde(deserialize_with = "nullable")]
    pub summoner_id: i64,
    #[serde(deserialize_with = "nullable")]
    pub player_stat_summaries: Vec<PlayerStatsSummaryDto>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayerStatsSummaryDto {
    #[serde(deserialize_with = "nullable")]
    pub player_stat_summary_type: String,
    #[serde(deserialize_with = "nullable")]
    pub wins: i64,
    #[serde(deserialize_with = "nullable")]
    pub losses: i64,
    #[serde(deserialize_with = "nullable")]
    pub modify_date: i64,
    #[serde(deserialize_with = "nullable")]
    pub aggregated_stats: RawStats,
}

// Stats v1.2 ranked response
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RankedStatsDto {
    #[serde(deserialize_with = "nullable")]
    pub summoner_id: i64,
    #[serde(deserialize_with = "nullable")]
    pub modify_date: i64,
    #[serde(deserialize_with = "nullable")]
    pub champions: Vec<ChampionStatsDto>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ChampionStatsDto {
    #[serde(deserialize_with = "nullable")]
    pub id: i64,
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub stats: RawStats,
}

// Game v1.3 recent games response
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecentGamesDto {
    #[serde(deserialize_with = "nullable")]
    pub summoner_id: i64,
    #[serde(deserialize_with = "nullable")]
    pub games: Vec<GameDto>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GameDto {
    #[serde(deserialize_with = "nullable")]
    pub game_id: i64,
    #[serde(deserialize_with = "nullable")]
    pub game_mode: String,
    #[serde(deserialize_with = "nullable")]
    pub game_type: String,
    #[serde(deserialize_with = "nullable")]
    pub sub_type: String,
    #[serde(deserialize_with = "nullable")]
    pub map_id: i64,
    #[serde(deserialize_with = "nullable")]
    pub team_id: i64,
    #[serde(deserialize_with = "nullable")]
    pub champion_id: i64,
    #[serde(deserialize_with = "nullable")]
    pub spell1: i64,
    #[serde(deserialize_with = "nullable")]
    pub spell2: i64,
    #[serde(deserialize_with = "nullable")]
    pub level: i64,
    #[serde(deserialize_with = "nullable")]
    pub invalid: bool,
    #[serde(deserialize_with = "nullable")]
    pub create_date: i64,
    #[serde(deserialize_with = "nullable")]
    pub fellow_players: Vec<FellowPlayerDto>,
    #[serde(deserialize_with = "nullable")]
    pub stats: RawStats,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FellowPlayerDto {
    #[serde(deserialize_with = "nullable")]
    pub summoner_id: i64,
    #[serde(deserialize_with = "nullable")]
    pub team_id: i64,
    #[serde(deserialize_with = "nullable")]
    pub champion_id: i64,
}

// Summoner v1.3 masteries/runes responses
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MasteryPagesDto {
    #[serde(deserialize_with = "nullable")]
    pub summoner_id: i64,
    #[serde(deserialize_with = "nullable")]
    pub pages: Vec<MasteryPageDto>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MasteryPageDto {
    #[serde(deserialize_with = "nullable")]
    pub id: i64,
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub current: bool,
    // v1.1 called these talents
    #[serde(alias = "talents", deserialize_with = "nullable")]
    pub masteries: Vec<MasteryDto>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MasteryDto {
    #[serde(deserialize_with = "nullable")]
    pub id: i64,
    #[serde(deserialize_with = "nullable")]
    pub rank: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RunePagesDto {
    #[serde(deserialize_with = "nullable")]
    pub summoner_id: i64,
    #[serde(deserialize_with = "nullable")]
    pub pages: Vec<RunePageDto>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RunePageDto {
    #[serde(deserialize_with = "nullable")]
    pub id: i64,
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub current: bool,
    #[serde(deserialize_with = "nullable")]
    pub slots: Vec<RuneSlotDto>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RuneSlotDto {
    #[serde(deserialize_with = "nullable")]
    pub rune_slot_id: i64,
    #[serde(deserialize_with = "nullable")]
    pub rune_id: i64,
}

// League v2.3 response
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LeagueDto {
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub queue: String,
    #[serde(deserialize_with = "nullable")]
    pub tier: String,
    #[serde(deserialize_with = "nullable")]
    pub timestamp: i64,
    #[serde(deserialize_with = "nullable")]
    pub participant_id: String,
    #[serde(deserialize_with = "nullable")]
    pub entries: Vec<LeagueEntryDto>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LeagueEntryDto {
    #[serde(deserialize_with = "nullable")]
    pub player_or_team_id: String,
    #[serde(deserialize_with = "nullable")]
    pub player_or_team_name: String,
    #[serde(deserialize_with = "nullable")]
    pub league_name: String,
    #[serde(deserialize_with = "nullable")]
    pub queue_type: String,
    #[serde(deserialize_with = "nullable")]
    pub rank: String,
    #[serde(deserialize_with = "nullable")]
    pub tier: String,
    #[serde(deserialize_with = "nullable")]
    pub league_points: i64,
    #[serde(deserialize_with = "nullable")]
    pub wins: i64,
    #[serde(deserialize_with = "nullable")]
    pub losses: i64,
    #[serde(deserialize_with = "nullable")]
    pub is_fresh_blood: bool,
    #[serde(deserialize_with = "nullable")]
    pub is_hot_streak: bool,
    #[serde(deserialize_with = "nullable")]
    pub is_inactive: bool,
    #[serde(deserialize_with = "nullable")]
    pub is_veteran: bool,
    #[serde(deserialize_with = "nullable")]
    pub last_played: i64,
    #[serde(deserialize_with = "nullable")]
    pub time_until_decay: i64,
    pub mini_series: Option<MiniSeriesDto>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MiniSeriesDto {
    #[serde(deserialize_with = "nullable")]
    pub wins: i64,
    #[serde(deserialize_with = "nullable")]
    pub losses: i64,
    #[serde(deserialize_with = "nullable")]
    pub target: i64,
    #[serde(deserialize_with = "nullable")]
    pub progress: String,
    #[serde(deserialize_with = "nullable")]
    pub time_left_to_play: i64,
}

/// The league resource returns one league or a list of leagues per summoner.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum LeagueSetDto {
    Many(Vec<LeagueDto>),
    One(LeagueDto),
}

impl LeagueSetDto {
    pub fn into_vec(self) -> Vec<LeagueDto> {
        match self {
            LeagueSetDto::Many(leagues) => leagues,
            LeagueSetDto::One(league) => vec![league],
        }
    }
}

// Team v2.2 response
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TeamDto {
    #[serde(deserialize_with = "nullable")]
    pub team_id: String,
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub tag: String,
    #[serde(deserialize_with = "nullable")]
    pub status: String,
    #[serde(deserialize_with = "nullable")]
    pub timestamp: i64,
    #[serde(deserialize_with = "nullable")]
    pub create_date: i64,
    #[serde(deserialize_with = "nullable")]
    pub modify_date: i64,
    #[serde(deserialize_with = "nullable")]
    pub last_game_date: i64,
    #[serde(deserialize_with = "nullable")]
    pub last_join_date: i64,
    #[serde(deserialize_with = "nullable")]
    pub second_last_join_date: i64,
    #[serde(deserialize_with = "nullable")]
    pub third_last_join_date: i64,
    #[serde(deserialize_with = "nullable")]
    pub last_joined_ranked_team_queue_date: i64,
    #[serde(deserialize_with = "nullable")]
    pub roster: RosterDto,
    #[serde(deserialize_with = "nullable")]
    pub match_history: Vec<TeamMatchDto>,
    pub message_of_day: Option<MessageOfDayDto>,
    #[serde(deserialize_with = "nullable")]
    pub team_stat_summary: TeamStatSummaryDto,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RosterDto {
    #[serde(deserialize_with = "nullable")]
    pub owner_id: i64,
    #[serde(deserialize_with = "nullable")]
    pub member_list: Vec<TeamMemberDto>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TeamMemberDto {
    #[serde(deserialize_with = "nullable")]
    pub player_id: i64,
    #[serde(deserialize_with = "nullable")]
    pub status: String,
    #[serde(deserialize_with = "nullable")]
    pub join_date: i64,
    #[serde(deserialize_with = "nullable")]
    pub invite_date: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TeamMatchDto {
    #[serde(deserialize_with = "nullable")]
    pub game_id: i64,
    #[serde(deserialize_with = "nullable")]
    pub map_id: i64,
    #[serde(deserialize_with = "nullable")]
    pub game_mode: String,
    #[serde(deserialize_with = "nullable")]
    pub date: i64,
    #[serde(deserialize_with = "nullable")]
    pub win: bool,
    #[serde(deserialize_with = "nullable")]
    pub invalid: bool,
    #[serde(deserialize_with = "nullable")]
    pub kills: i64,
    #[serde(deserialize_with = "nullable")]
    pub deaths: i64,
    #[serde(deserialize_with = "nullable")]
    pub assists: i64,
    #[serde(deserialize_with = "nullable")]
    pub opposing_team_name: String,
    #[serde(deserialize_with = "nullable")]
    pub opposing_team_kills: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MessageOfDayDto {
    #[serde(deserialize_with = "nullable")]
    pub message: String,
    #[serde(deserialize_with = "nullable")]
    pub create_date: i64,
    #[serde(deserialize_with = "nullable")]
    pub version: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TeamStatSummaryDto {
    #[serde(deserialize_with = "nullable")]
    pub team_stat_details: Vec<TeamStatDetailDto>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TeamStatDetailDto {
    #[serde(deserialize_with = "nullable")]
    pub team_stat_type: String,
    #[serde(deserialize_with = "nullable")]
    pub wins: i64,
    #[serde(deserialize_with = "nullable")]
    pub losses: i64,
    #[serde(deserialize_with = "nullable")]
    pub average_games_played: i64,
}
