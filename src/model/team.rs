use crate::api::models::{MessageOfDayDto, TeamDto, TeamMatchDto, TeamMemberDto, TeamStatDetailDto};
use crate::model::timestamp;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamMember {
    pub player_id: i64,
    pub status: String,
    pub join_date: DateTime<Utc>,
    pub invite_date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamMatch {
    pub game_id: i64,
    pub map_id: i64,
    pub game_mode: String,
    pub date: DateTime<Utc>,
    pub win: bool,
    pub invalid: bool,
    pub kills: i64,
    pub deaths: i64,
    pub assists: i64,
    pub opposing_team_name: String,
    pub opposing_team_kills: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageOfDay {
    pub message: String,
    pub created: DateTime<Utc>,
    pub version: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamStatDetail {
    pub team_stat_type: String,
    pub wins: i64,
    pub losses: i64,
    pub average_games_played: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamRecord {
    pub team_id: String,
    pub name: String,
    pub tag: String,
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub create_date: DateTime<Utc>,
    pub modify_date: DateTime<Utc>,
    pub last_game_date: DateTime<Utc>,
    pub last_join_date: DateTime<Utc>,
    pub second_last_join_date: DateTime<Utc>,
    pub third_last_join_date: DateTime<Utc>,
    pub last_joined_ranked_team_queue_date: DateTime<Utc>,
    pub owner_id: i64,
    pub roster: Vec<TeamMember>,
    pub match_history: Vec<TeamMatch>,
    pub message_of_day: Option<MessageOfDay>,
    pub stat_details: Vec<TeamStatDetail>,
}

impl TeamRecord {
    pub fn member_ids(&self) -> impl Iterator<Item = i64> + '_ {
        self.roster.iter().map(|m| m.player_id)
    }

    pub fn has_member(&self, player_id: i64) -> bool {
        self.member_ids().any(|id| id == player_id)
    }
}

impl From<TeamMemberDto> for TeamMember {
    fn from(dto: TeamMemberDto) -> Self {
        TeamMember {
            player_id: dto.player_id,
            status: dto.status,
            join_date: timestamp(dto.join_date),
            invite_date: timestamp(dto.invite_date),
        }
    }
}

impl From<TeamMatchDto> for TeamMatch {
    fn from(dto: TeamMatchDto) -> Self {
        TeamMatch {
            game_id: dto.game_id,
            map_id: dto.map_id,
            game_mode: dto.game_mode,
            date: timestamp(dto.date),
            win: dto.win,
            invalid: dto.invalid,
            kills: dto.kills,
            deaths: dto.deaths,
            assists: dto.assists,
            opposing_team_name: dto.opposing_team_name,
            opposing_team_kills: dto.opposing_team_kills,
        }
    }
}

impl From<MessageOfDayDto> for MessageOfDay {
    fn from(dto: MessageOfDayDto) -> Self {
        MessageOfDay {
            message: dto.message,
            created: timestamp(dto.create_date),
            version: dto.version,
        }
    }
}

impl From<TeamStatDetailDto> for TeamStatDetail {
    fn from(dto: TeamStatDetailDto) -> Self {
        TeamStatDetail {
            team_stat_type: dto.team_stat_type,
            wins: dto.wins,
            losses: dto.losses,
            average_games_played: dto.average_games_played,
        }
    }
}

impl From<TeamDto> for TeamRecord {
    fn from(dto: TeamDto) -> Self {
        TeamRecord {
            team_id: dto.team_id,
            name: dto.name,
            tag: dto.tag,
            status: dto.status,
            timestamp: timestamp(dto.timestamp),
            create_date: timestamp(dto.create_date),
            modify_date: timestamp(dto.modify_date),
            last_game_date: timestamp(dto.last_game_date),
            last_join_date: timestamp(dto.last_join_date),
            second_last_join_date: timestamp(dto.second_last_join_date),
            third_last_join_date: timestamp(dto.third_last_join_date),
            last_joined_ranked_team_queue_date: timestamp(dto.last_joined_ranked_team_queue_date),
            owner_id: dto.roster.owner_id,
            roster: dto.roster.member_list.into_iter().map(TeamMember::from).collect(),
            match_history: dto.match_history.into_iter().map(TeamMatch::from).collect(),
            message_of_day: dto.message_of_day.map(MessageOfDay::from),
            stat_details: dto
                .team_stat_summary
                .team_stat_details
                .into_iter()
                .map(TeamStatDetail::from)
                .collect(),
        }
    }
}
