use league_stats::{
    ChampionCatalog, Config, GameType, HttpResponse, LeagueError, RiotApiClient, Summoner, Transport,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Serves canned bodies keyed by resource path (the URL minus host and query).
struct CannedApi {
    prefix: String,
    bodies: HashMap<String, (u16, String)>,
    seen: Mutex<Vec<String>>,
}

impl CannedApi {
    fn new(prefix: &str) -> Self {
        CannedApi {
            prefix: prefix.to_string(),
            bodies: HashMap::new(),
            seen: Mutex::new(Vec::new()),
        }
    }

    fn serve(mut self, path: &str, status: u16, body: &str) -> Self {
        self.bodies.insert(path.to_string(), (status, body.to_string()));
        self
    }

    fn seen(&self) -> Vec<String> {
        self.seen.lock().unwrap().clone()
    }
}

impl Transport for CannedApi {
    fn get(&self, url: &str) -> league_stats::Result<HttpResponse> {
        let (path, query) = url.split_once('?').unwrap_or((url, ""));
        assert_eq!(query, "api_key=secret");

        let path = path.strip_prefix(&self.prefix).unwrap_or(path).to_string();
        self.seen.lock().unwrap().push(path.clone());

        let (status, body) = self.bodies.get(&path).cloned().unwrap_or((404, String::new()));
        Ok(HttpResponse { status, body })
    }
}

const PREFIX: &str = "https://api.example.test/api/lol/euw/";

fn client(api: &Arc<CannedApi>) -> Arc<RiotApiClient> {
    let config = Config::new("secret", "EUW").with_host("https://api.example.test");
    Arc::new(RiotApiClient::with_transport(config, api.clone()))
}

#[test]
fn profile_flow_against_canned_api() {
    let api = Arc::new(
        CannedApi::new(PREFIX)
            .serve(
                "v1.3/summoner/by-name/Lux",
                200,
                r#"{"lux": {"id": 5, "name": "Lux", "profileIconId": 1, "summonerLevel": 30, "revisionDate": 0}}"#,
            )
            .serve(
                "v1.2/stats/by-summoner/5/summary",
                200,
                r#"{"summonerId": 5, "playerStatSummaries": [
                    {"playerStatSummaryType": "AramUnranked5x5", "wins": 12, "losses": 9, "modifyDate": 0,
                     "aggregatedStats": {"totalChampionKills": 140}}
                ]}"#,
            )
            .serve(
                "v1.1/champion",
                200,
                r#"{"champions": [{"id": 99, "name": "Lux", "active": true}]}"#,
            )
            .serve(
                "v1.2/stats/by-summoner/5/ranked",
                200,
                r#"{"summonerId": 5, "champions": [{"id": 99, "name": "Lux", "stats": {"totalSessionsPlayed": 4}}]}"#,
            ),
    );
    let client = client(&api);
    let catalog = Arc::new(ChampionCatalog::new());

    let lux = Summoner::lookup(&client, &catalog, "Lux").unwrap();
    assert_eq!(lux.id(), 5);

    let aram = lux.stats_for_game_type(GameType::AramUnranked5x5).unwrap().unwrap();
    assert_eq!((aram.wins, aram.losses), (12, 9));
    assert!(lux.stats_for_game_type(GameType::RankedSolo5x5).unwrap().is_none());

    let stats = lux.ranked_stats_for_champion_by_name("Lux").unwrap();
    assert_eq!(stats.stat("totalSessionsPlayed"), 4);
    assert_eq!(catalog.lookup("Lux").unwrap().id, 99);

    assert_eq!(
        api.seen(),
        vec![
            "v1.3/summoner/by-name/Lux",
            "v1.2/stats/by-summoner/5/summary",
            "v1.1/champion",
            "v1.2/stats/by-summoner/5/ranked",
        ]
    );
}

#[test]
fn rejected_key_surfaces_as_authentication_failure() {
    let api = Arc::new(CannedApi::new(PREFIX).serve("v1.1/champion", 401, r#"{"status": {"status_code": 401}}"#));
    let catalog = ChampionCatalog::new();

    let err = catalog.ensure_loaded(&client(&api)).unwrap_err();
    assert_eq!(err, LeagueError::AuthenticationFailed);
    assert!(!catalog.is_loaded());
}

#[test]
fn league_and_teams_use_their_own_versions() {
    let api = Arc::new(
        CannedApi::new(PREFIX)
            .serve(
                "v1.3/summoner/5",
                200,
                r#"{"5": {"id": 5, "name": "Lux"}}"#,
            )
            .serve("v2.3/league/by-summoner/5", 200, r#"{"5": [{"name": "Lux's Lancers", "tier": "PLATINUM", "entries": []}]}"#)
            .serve("v2.2/team/by-summoner/5", 200, "[]"),
    );
    let client = client(&api);
    let catalog = Arc::new(ChampionCatalog::new());

    let lux = Summoner::by_id(&client, &catalog, 5).unwrap();
    assert_eq!(lux.league().unwrap()[0].tier, "PLATINUM");
    assert!(lux.teams().unwrap().is_empty());
    assert!(lux.teams().unwrap().is_empty());

    assert_eq!(
        api.seen(),
        vec!["v1.3/summoner/5", "v2.3/league/by-summoner/5", "v2.2/team/by-summoner/5"]
    );
}
