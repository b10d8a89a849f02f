use crate::api::endpoints::{Endpoint, StatsKind, SummonerResource};
use crate::api::models::*;
use crate::api::transport::{Transport, UreqTransport};
use crate::config::Config;
use crate::error::{LeagueError, Result};
use governor::{
    clock::{Clock, DefaultClock},
    state::{InMemoryState, NotKeyed},
    Quota, RateLimiter,
};
use log::debug;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use std::thread;

/// Lower-case with whitespace removed, the form the summoner resource uses to
/// key batch responses.
pub fn standardize_name(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

pub struct RiotApiClient {
    config: Config,
    transport: Arc<dyn Transport>,
    rate_limiter: Option<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>,
}

impl RiotApiClient {
    pub fn new(config: Config) -> Self {
        Self::with_transport(config, Arc::new(UreqTransport::new()))
    }

    pub fn with_transport(config: Config, transport: Arc<dyn Transport>) -> Self {
        let rate_limiter = config
            .requests_per_second
            .map(|rps| RateLimiter::direct(Quota::per_second(rps)));
        RiotApiClient {
            config,
            transport,
            rate_limiter,
        }
    }

    pub fn region(&self) -> &str {
        &self.config.region
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    // Pacing only: blocks until a permit is free, never re-issues a request.
    fn throttle(&self) {
        if let Some(limiter) = &self.rate_limiter {
            let clock = DefaultClock::default();
            while let Err(not_until) = limiter.check() {
                thread::sleep(not_until.wait_time_from(clock.now()));
            }
        }
    }

    fn execute_request(&self, endpoint: &Endpoint) -> Result<String> {
        self.throttle();

        let url = endpoint.url(&self.config.host, &self.config.region, &self.config.api_key);
        debug!("GET {}", endpoint.resource_url(&self.config.host, &self.config.region));

        let response = self.transport.get(&url)?;
        if !response.is_success() {
            debug!("{} returned HTTP {}", endpoint.path(), response.status);
            return Err(LeagueError::from_status(response.status, &endpoint.path()));
        }

        Ok(response.body)
    }

    fn get_json<T: DeserializeOwned>(&self, endpoint: &Endpoint) -> Result<T> {
        let body = self.execute_request(endpoint)?;
        serde_json::from_str(&body)
            .map_err(|e| LeagueError::DecodeFailure(format!("{}: {}", endpoint.path(), e)))
    }

    pub fn summoner_by_name(&self, name: &str) -> Result<SummonerDto> {
        let mut found = self.summoners_by_names(&[name])?;
        found
            .remove(name)
            .ok_or_else(|| LeagueError::PlayerNotFound(name.to_string()))
    }

    /// One request for the whole batch, keyed by the names as given.
    ///
    /// Every requested name must be present in the response; a name the
    /// remote omitted fails with `PlayerNotFound`.
    pub fn summoners_by_names(&self, names: &[&str]) -> Result<HashMap<String, SummonerDto>> {
        if names.is_empty() {
            return Ok(HashMap::new());
        }

        // Names that standardize alike are one summoner; request each once
        let mut unique: Vec<&str> = Vec::with_capacity(names.len());
        for &name in names {
            let wanted = standardize_name(name);
            if !unique.iter().any(|u| standardize_name(u) == wanted) {
                unique.push(name);
            }
        }

        let endpoint = Endpoint::SummonerByName(unique.iter().map(|n| n.to_string()).collect());
        let value: Value = self.get_json(&endpoint)?;

        // Older revisions answer a single name with the bare record
        if unique.len() == 1 && value.get("id").is_some_and(Value::is_number) {
            let dto: SummonerDto = serde_json::from_value(value)?;
            return Ok(names.iter().map(|n| (n.to_string(), dto.clone())).collect());
        }

        let raw: HashMap<String, SummonerDto> = serde_json::from_value(value)?;
        associate_names(names, raw)
    }

    pub fn summoner_id_by_name(&self, name: &str) -> Result<i64> {
        Ok(self.summoner_by_name(name)?.id)
    }

    /// `summoner/{id}[/{masteries|runes}]` as undecoded JSON.
    pub fn summoner_resource(&self, id: i64, resource: SummonerResource) -> Result<Value> {
        self.get_json(&Endpoint::Summoner { id, resource })
    }

    pub fn summoner_by_id(&self, id: i64) -> Result<SummonerDto> {
        let value = self.summoner_resource(id, SummonerResource::Profile)?;
        keyed_or_bare(value, id, "id")
    }

    pub fn summoner_masteries(&self, id: i64) -> Result<MasteryPagesDto> {
        let value = self.summoner_resource(id, SummonerResource::Masteries)?;
        keyed_or_bare(value, id, "pages")
    }

    pub fn summoner_runes(&self, id: i64) -> Result<RunePagesDto> {
        let value = self.summoner_resource(id, SummonerResource::Runes)?;
        keyed_or_bare(value, id, "pages")
    }

    pub fn summoner_stats(&self, summoner_id: i64, kind: StatsKind) -> Result<Value> {
        self.get_json(&Endpoint::Stats { summoner_id, kind })
    }

    pub fn summoner_stats_by_name(&self, name: &str, kind: StatsKind) -> Result<Value> {
        let id = self.summoner_id_by_name(name)?;
        self.summoner_stats(id, kind)
    }

    pub fn summary_stats(&self, summoner_id: i64) -> Result<PlayerStatsSummaryListDto> {
        self.get_json(&Endpoint::Stats { summoner_id, kind: StatsKind::Summary })
    }

    pub fn ranked_stats(&self, summoner_id: i64) -> Result<RankedStatsDto> {
        self.get_json(&Endpoint::Stats { summoner_id, kind: StatsKind::Ranked })
    }

    pub fn champions(&self) -> Result<ChampionListDto> {
        self.get_json(&Endpoint::Champions)
    }

    /// The remote keeps only its own most recent games; nothing is paginated here.
    pub fn match_history(&self, summoner_id: i64) -> Result<RecentGamesDto> {
        self.get_json(&Endpoint::RecentGames(summoner_id))
    }

    pub fn league_standing(&self, summoner_id: i64) -> Result<Vec<LeagueDto>> {
        let value: Value = self.get_json(&Endpoint::League(summoner_id))?;
        let leagues: LeagueSetDto = keyed_or_bare(value, summoner_id, "entries")?;
        Ok(leagues.into_vec())
    }

    pub fn team_records(&self, summoner_id: i64) -> Result<Vec<TeamDto>> {
        self.get_json(&Endpoint::Teams(summoner_id))
    }
}

/// Decodes `value[id]` when the response is keyed by summoner id. The bare
/// form is only accepted when it carries `marker`, the field every bare
/// record of that resource has; anything else means the summoner is absent.
fn keyed_or_bare<T: DeserializeOwned>(mut value: Value, id: i64, marker: &str) -> Result<T> {
    if let Some(map) = value.as_object_mut() {
        if let Some(inner) = map.remove(&id.to_string()) {
            return Ok(serde_json::from_value(inner)?);
        }
        if !map.contains_key(marker) {
            return Err(LeagueError::PlayerNotFound(format!("summoner/{}", id)));
        }
    }
    Ok(serde_json::from_value(value)?)
}

fn associate_names(
    names: &[&str],
    raw: HashMap<String, SummonerDto>,
) -> Result<HashMap<String, SummonerDto>> {
    let mut found = HashMap::with_capacity(names.len());

    for name in names {
        let wanted = standardize_name(name);
        let dto = raw
            .iter()
            .find(|(k, _)| standardize_name(k) == wanted)
            .or_else(|| raw.iter().find(|(_, dto)| standardize_name(&dto.name) == wanted))
            .map(|(_, dto)| dto.clone())
            .ok_or_else(|| LeagueError::PlayerNotFound(name.to_string()))?;
        found.insert(name.to_string(), dto);
    }

    Ok(found)
}
