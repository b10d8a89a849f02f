use crate::api::client::RiotApiClient;
use crate::api::models::SummonerDto;
use crate::catalog::ChampionCatalog;
use crate::error::{LeagueError, Result};
use crate::model::game::RecentGame;
use crate::model::game_type::GameType;
use crate::model::league::LeagueStanding;
use crate::model::pages::{MasteryPage, RunePage};
use crate::model::stats::{summaries_by_type, ChampionStats, GameTypeSummary, RankedStats};
use crate::model::team::TeamRecord;
use crate::model::timestamp;
use chrono::{DateTime, Utc};
use once_cell::sync::OnceCell;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;

/// A player profile plus the player-centric queries built on top of it.
///
/// `stats()` and `teams()` are fetched on first access and kept for the
/// lifetime of the value; there is no refresh. Look the summoner up again to
/// get fresh data. Everything else goes to the API on every call.
pub struct Summoner {
    client: Arc<RiotApiClient>,
    catalog: Arc<ChampionCatalog>,
    id: i64,
    name: String,
    profile_icon_id: i64,
    level: i64,
    revision_date: i64,
    stats: OnceCell<BTreeMap<GameType, GameTypeSummary>>,
    teams: OnceCell<Vec<TeamRecord>>,
}

impl Summoner {
    pub fn lookup(client: &Arc<RiotApiClient>, catalog: &Arc<ChampionCatalog>, name: &str) -> Result<Self> {
        let dto = client.summoner_by_name(name)?;
        Ok(Self::from_dto(client, catalog, dto))
    }

    /// Batch lookup in a single request. The result is keyed by the names
    /// exactly as passed in.
    pub fn lookup_many(
        client: &Arc<RiotApiClient>,
        catalog: &Arc<ChampionCatalog>,
        names: &[&str],
    ) -> Result<HashMap<String, Self>> {
        let found = client.summoners_by_names(names)?;
        Ok(found
            .into_iter()
            .map(|(name, dto)| (name, Self::from_dto(client, catalog, dto)))
            .collect())
    }

    pub fn by_id(client: &Arc<RiotApiClient>, catalog: &Arc<ChampionCatalog>, id: i64) -> Result<Self> {
        let dto = client.summoner_by_id(id)?;
        Ok(Self::from_dto(client, catalog, dto))
    }

    fn from_dto(client: &Arc<RiotApiClient>, catalog: &Arc<ChampionCatalog>, dto: SummonerDto) -> Self {
        Summoner {
            client: Arc::clone(client),
            catalog: Arc::clone(catalog),
            id: dto.id,
            name: dto.name,
            profile_icon_id: dto.profile_icon_id,
            level: dto.summoner_level,
            revision_date: dto.revision_date,
            stats: OnceCell::new(),
            teams: OnceCell::new(),
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn profile_icon_id(&self) -> i64 {
        self.profile_icon_id
    }

    pub fn level(&self) -> i64 {
        self.level
    }

    pub fn revision_date(&self) -> DateTime<Utc> {
        timestamp(self.revision_date)
    }

    pub fn stats(&self) -> Result<&BTreeMap<GameType, GameTypeSummary>> {
        self.stats.get_or_try_init(|| {
            let summaries = self.client.summary_stats(self.id)?;
            Ok::<_, LeagueError>(summaries_by_type(summaries))
        })
    }

    /// `None` when the summoner has never played `game_type`.
    pub fn stats_for_game_type(&self, game_type: GameType) -> Result<Option<&GameTypeSummary>> {
        Ok(self.stats()?.get(&game_type))
    }

    /// Always a fresh request.
    pub fn ranked_stats(&self) -> Result<RankedStats> {
        Ok(RankedStats::from(self.client.ranked_stats(self.id)?))
    }

    pub fn ranked_stats_for_champion(&self, champion_id: i64) -> Result<ChampionStats> {
        let ranked = self.ranked_stats()?;
        ranked
            .champions
            .into_iter()
            .find(|c| c.id == champion_id)
            .ok_or(LeagueError::ChampionStatsNotFound(champion_id))
    }

    pub fn ranked_stats_for_champion_by_name(&self, champion_name: &str) -> Result<ChampionStats> {
        let champion_id = self.catalog.resolve(&self.client, champion_name)?.id;
        self.ranked_stats_for_champion(champion_id)
    }

    pub fn match_history(&self) -> Result<Vec<RecentGame>> {
        let recent = self.client.match_history(self.id)?;
        Ok(recent.games.into_iter().map(RecentGame::from).collect())
    }

    pub fn masteries(&self) -> Result<Vec<MasteryPage>> {
        let pages = self.client.summoner_masteries(self.id)?;
        Ok(pages.pages.into_iter().map(MasteryPage::from).collect())
    }

    pub fn runes(&self) -> Result<Vec<RunePage>> {
        let pages = self.client.summoner_runes(self.id)?;
        Ok(pages.pages.into_iter().map(RunePage::from).collect())
    }

    pub fn league(&self) -> Result<Vec<LeagueStanding>> {
        let leagues = self.client.league_standing(self.id)?;
        Ok(leagues.into_iter().map(LeagueStanding::from).collect())
    }

    pub fn teams(&self) -> Result<&[TeamRecord]> {
        let teams = self.teams.get_or_try_init(|| {
            let records = self.client.team_records(self.id)?;
            Ok::<_, LeagueError>(records.into_iter().map(TeamRecord::from).collect())
        })?;
        Ok(teams)
    }
}

impl fmt::Debug for Summoner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Summoner")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("profile_icon_id", &self.profile_icon_id)
            .field("level", &self.level)
            .field("revision_date", &self.revision_date)
            .field("stats_loaded", &self.stats.get().is_some())
            .field("teams_loaded", &self.teams.get().is_some())
            .finish_non_exhaustive()
    }
}
