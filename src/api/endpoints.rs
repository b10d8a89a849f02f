// Resource routing: every operation carries its own API version segment.

pub const SUMMONER_VERSION: &str = "v1.3";
pub const STATS_VERSION: &str = "v1.2";
pub const CHAMPION_VERSION: &str = "v1.1";
pub const GAME_VERSION: &str = "v1.3";
pub const LEAGUE_VERSION: &str = "v2.3";
pub const TEAM_VERSION: &str = "v2.2";

pub const NAME_SEPARATOR: &str = ",";

/// Second-level segment under `summoner/{id}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummonerResource {
    Profile,
    Masteries,
    Runes,
}

impl SummonerResource {
    pub fn segment(&self) -> Option<&'static str> {
        match self {
            SummonerResource::Profile => None,
            SummonerResource::Masteries => Some("masteries"),
            SummonerResource::Runes => Some("runes"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsKind {
    Summary,
    Ranked,
}

impl StatsKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatsKind::Summary => "summary",
            StatsKind::Ranked => "ranked",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    SummonerByName(Vec<String>),
    Summoner { id: i64, resource: SummonerResource },
    Stats { summoner_id: i64, kind: StatsKind },
    Champions,
    RecentGames(i64),
    League(i64),
    Teams(i64),
}

impl Endpoint {
    pub fn version(&self) -> &'static str {
        match self {
            Endpoint::SummonerByName(_) | Endpoint::Summoner { .. } => SUMMONER_VERSION,
            Endpoint::Stats { .. } => STATS_VERSION,
            Endpoint::Champions => CHAMPION_VERSION,
            Endpoint::RecentGames(_) => GAME_VERSION,
            Endpoint::League(_) => LEAGUE_VERSION,
            Endpoint::Teams(_) => TEAM_VERSION,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Endpoint::SummonerByName(names) => {
                let encoded: Vec<_> = names.iter().map(|n| urlencoding::encode(n)).collect();
                format!("summoner/by-name/{}", encoded.join(NAME_SEPARATOR))
            }
            Endpoint::Summoner { id, resource } => match resource.segment() {
                Some(segment) => format!("summoner/{}/{}", id, segment),
                None => format!("summoner/{}", id),
            },
            Endpoint::Stats { summoner_id, kind } => {
                format!("stats/by-summoner/{}/{}", summoner_id, kind.as_str())
            }
            Endpoint::Champions => "champion".to_string(),
            Endpoint::RecentGames(id) => format!("game/by-summoner/{}/recent", id),
            Endpoint::League(id) => format!("league/by-summoner/{}", id),
            Endpoint::Teams(id) => format!("team/by-summoner/{}", id),
        }
    }

    /// `{host}/api/lol/{region}/{version}/{path}` without the key.
    pub fn resource_url(&self, host: &str, region: &str) -> String {
        format!("{}/api/lol/{}/{}/{}", host, region, self.version(), self.path())
    }

    pub fn url(&self, host: &str, region: &str, api_key: &str) -> String {
        format!("{}?api_key={}", self.resource_url(host, region), api_key)
    }
}
