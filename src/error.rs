use thiserror::Error;

pub type Result<T> = std::result::Result<T, LeagueError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LeagueError {
    #[error("Failed to authenticate key with API")]
    AuthenticationFailed,

    #[error("Player not found: {0}")]
    PlayerNotFound(String),

    #[error("Champion does not exist: {0}")]
    ChampionNotFound(String),

    #[error("Champion {0} not in summoner's ranked history")]
    ChampionStatsNotFound(i64),

    #[error("Request failed with HTTP status {status}")]
    UnknownRequestFailure { status: u16 },

    #[error("JSON decoding error: {0}")]
    DecodeFailure(String),

    #[error("HTTP transport error: {0}")]
    Transport(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl LeagueError {
    /// Maps a non-2xx status code onto the error taxonomy.
    ///
    /// `subject` names what was being requested and ends up in `PlayerNotFound`.
    pub fn from_status(status: u16, subject: &str) -> Self {
        match status {
            404 => LeagueError::PlayerNotFound(subject.to_string()),
            401 => LeagueError::AuthenticationFailed,
            _ => LeagueError::UnknownRequestFailure { status },
        }
    }
}

impl From<serde_json::Error> for LeagueError {
    fn from(e: serde_json::Error) -> Self {
        LeagueError::DecodeFailure(e.to_string())
    }
}
