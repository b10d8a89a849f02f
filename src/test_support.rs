use crate::api::transport::{HttpResponse, Transport};
use crate::config::Config;
use crate::error::{LeagueError, Result};
use std::sync::Mutex;
use std::thread;
use std::time::Duration;

pub const ASHE_ID: i64 = 101;
pub const GAREN_ID: i64 = 102;
pub const ASHE_CHAMPION_ID: i64 = 22;

pub fn test_config() -> Config {
    Config::new("TEST-KEY", "na").with_host("http://test.local")
}

enum Reply {
    Response(u16, String),
    Failure(String),
}

struct Route {
    fragment: String,
    reply: Reply,
}

/// Scripted transport. A request is answered by the longest route fragment
/// contained in its path; unmatched requests get a 404.
pub struct FakeTransport {
    routes: Vec<Route>,
    delay: Option<Duration>,
    requests: Mutex<Vec<String>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        FakeTransport {
            routes: Vec::new(),
            delay: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn route(mut self, fragment: &str, status: u16, body: &str) -> Self {
        self.routes.push(Route {
            fragment: fragment.to_string(),
            reply: Reply::Response(status, body.to_string()),
        });
        self
    }

    pub fn fail(mut self, fragment: &str, message: &str) -> Self {
        self.routes.push(Route {
            fragment: fragment.to_string(),
            reply: Reply::Failure(message.to_string()),
        });
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn hits(&self, fragment: &str) -> usize {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|url| url.contains(fragment))
            .count()
    }
}

impl Transport for FakeTransport {
    fn get(&self, url: &str) -> Result<HttpResponse> {
        self.requests.lock().unwrap().push(url.to_string());
        if let Some(delay) = self.delay {
            thread::sleep(delay);
        }

        let path = url.split('?').next().unwrap_or(url);
        let route = self
            .routes
            .iter()
            .filter(|r| path.contains(&r.fragment))
            .max_by_key(|r| r.fragment.len());

        match route.map(|r| &r.reply) {
            Some(Reply::Response(status, body)) => Ok(HttpResponse {
                status: *status,
                body: body.clone(),
            }),
            Some(Reply::Failure(message)) => Err(LeagueError::Transport(message.clone())),
            None => Ok(HttpResponse {
                status: 404,
                body: String::new(),
            }),
        }
    }
}

pub const ASHE_BY_NAME: &str = r#"{
  "ashe": {"id": 101, "name": "Ashe", "profileIconId": 28, "summonerLevel": 30, "revisionDate": 1387211146000}
}"#;

// Garen listed first on purpose
pub const ASHE_GAREN_BY_NAME: &str = r#"{
  "garen": {"id": 102, "name": "Garen", "profileIconId": 7, "summonerLevel": 22, "revisionDate": null},
  "ashe": {"id": 101, "name": "Ashe", "profileIconId": 28, "summonerLevel": 30, "revisionDate": 1387211146000}
}"#;

pub const ASHE_BY_ID: &str = r#"{
  "101": {"id": 101, "name": "Ashe", "profileIconId": 28, "summonerLevel": 30, "revisionDate": 1387211146000}
}"#;

pub const CHAMPIONS: &str = r#"{"champions": [
  {"id": 22, "name": "Ashe", "active": true, "attackRank": 7, "defenseRank": 3, "magicRank": 2, "difficultyRank": 4,
   "botEnabled": true, "freeToPlay": true, "botMmEnabled": true, "rankedPlayEnabled": true},
  {"id": 86, "name": "Garen", "active": true, "attackRank": 7, "defenseRank": 7, "magicRank": 1, "difficultyRank": 5,
   "botEnabled": true, "freeToPlay": false, "botMmEnabled": null, "rankedPlayEnabled": true},
  {"id": 17, "name": "Teemo", "active": false}
]}"#;

pub const ASHE_SUMMARY_STATS: &str = r#"{
  "summonerId": 101,
  "playerStatSummaries": [
    {"playerStatSummaryType": "Unranked", "wins": 120, "modifyDate": 1387211146000,
     "aggregatedStats": {"totalChampionKills": 900, "totalAssists": 1500, "totalTurretsKilled": null}},
    {"playerStatSummaryType": "RankedSolo5x5", "wins": 40, "losses": 35, "modifyDate": 1387211146000,
     "aggregatedStats": {"totalChampionKills": 310}},
    {"playerStatSummaryType": "SomethingNew", "wins": 1, "losses": 1, "modifyDate": 0, "aggregatedStats": {}}
  ]
}"#;

pub const ASHE_RANKED_STATS: &str = r#"{
  "summonerId": 101,
  "modifyDate": 1387211146000,
  "champions": [
    {"id": 22, "name": "Ashe", "stats": {"totalSessionsPlayed": 30, "totalSessionsWon": 18, "totalChampionKills": 210}},
    {"id": 86, "name": "Garen", "stats": {"totalSessionsPlayed": 5, "totalSessionsWon": null}},
    {"id": 0, "name": "Combined", "stats": {"totalSessionsPlayed": 35}}
  ]
}"#;

pub const ASHE_RECENT_GAMES: &str = r#"{
  "summonerId": 101,
  "games": [
    {"gameId": 9001, "gameMode": "CLASSIC", "gameType": "MATCHED_GAME", "subType": "RANKED_SOLO_5x5",
     "mapId": 1, "teamId": 100, "championId": 22, "spell1": 4, "spell2": 7, "level": 30, "invalid": false,
     "createDate": 1387211146000,
     "fellowPlayers": [{"summonerId": 102, "teamId": 200, "championId": 86}],
     "stats": {"win": true, "championsKilled": 8, "numDeaths": 3, "assists": 11}},
    {"gameId": 9002, "gameMode": "ARAM", "championId": 22,
     "stats": {"win": false, "championsKilled": 4}}
  ]
}"#;

pub const ASHE_MASTERIES: &str = r#"{
  "101": {"summonerId": 101, "pages": [
    {"id": 1, "name": "AD Carry", "current": true, "masteries": [{"id": 4111, "rank": 1}, {"id": 4112, "rank": 3}]},
    {"id": 2, "name": "Utility", "current": false, "masteries": null}
  ]}
}"#;

pub const ASHE_RUNES: &str = r#"{
  "101": {"summonerId": 101, "pages": [
    {"id": 11, "name": "Crit", "current": true, "slots": [{"runeSlotId": 1, "runeId": 5245}, {"runeSlotId": 2, "runeId": 5245}]}
  ]}
}"#;

pub const ASHE_LEAGUE: &str = r#"{
  "101": {
    "name": "Ashe's Archers",
    "queue": "RANKED_SOLO_5x5",
    "tier": "GOLD",
    "participantId": "101",
    "entries": [
      {"playerOrTeamId": "101", "playerOrTeamName": "Ashe", "rank": "II", "tier": "GOLD", "leaguePoints": 100,
       "wins": 40, "losses": null, "isHotStreak": true,
       "miniSeries": {"wins": 1, "losses": 0, "target": 2, "progress": "WNN", "timeLeftToPlay": 0}},
      {"playerOrTeamId": "102", "playerOrTeamName": "Garen", "rank": "III", "tier": "GOLD", "leaguePoints": 12,
       "wins": 20, "losses": 25, "isVeteran": true}
    ]
  }
}"#;

pub const ASHE_TEAMS: &str = r#"[
  {"teamId": "TEAM-1", "name": "Frost Archers", "tag": "FROST", "status": "RANKED", "createDate": 1387211146000,
   "roster": {"ownerId": 101, "memberList": [
     {"playerId": 101, "status": "MEMBER", "joinDate": 1387211146000},
     {"playerId": 102, "status": "MEMBER", "joinDate": null}
   ]},
   "matchHistory": [{"gameId": 7, "win": true, "kills": 30, "deaths": 12, "opposingTeamName": "Demacia"}],
   "messageOfDay": {"message": "Practice at 8", "version": 2},
   "teamStatSummary": {"teamStatDetails": [{"teamStatType": "RANKED_TEAM_5x5", "wins": 9, "losses": 3}]}}
]"#;
