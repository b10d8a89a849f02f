use crate::error::{LeagueError, Result};
use std::env;
use std::num::NonZeroU32;

pub const DEFAULT_HOST: &str = "http://prod.api.pvp.net";
pub const DEFAULT_REGION: &str = "na";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_key: String,
    pub region: String,
    pub host: String,
    pub requests_per_second: Option<NonZeroU32>,
}

impl Config {
    pub fn new(api_key: &str, region: &str) -> Self {
        Config {
            api_key: api_key.to_string(),
            region: region.to_lowercase(),
            host: DEFAULT_HOST.to_string(),
            requests_per_second: None,
        }
    }

    pub fn with_host(mut self, host: &str) -> Self {
        self.host = host.trim_end_matches('/').to_string();
        self
    }

    pub fn with_rate_limit(mut self, requests_per_second: NonZeroU32) -> Self {
        self.requests_per_second = Some(requests_per_second);
        self
    }

    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let api_key = env::var("RIOT_API_KEY").map_err(|_| {
            LeagueError::Config("RIOT_API_KEY not found in environment or .env file".to_string())
        })?;

        let region = env::var("RIOT_REGION").unwrap_or_else(|_| DEFAULT_REGION.to_string());
        let mut config = Config::new(&api_key, &region);

        if let Ok(host) = env::var("RIOT_API_HOST") {
            config = config.with_host(&host);
        }

        if let Ok(rps) = env::var("RIOT_REQUESTS_PER_SECOND") {
            config.requests_per_second = Some(parse_rate(&rps)?);
        }

        Ok(config)
    }
}

fn parse_rate(value: &str) -> Result<NonZeroU32> {
    value
        .trim()
        .parse::<NonZeroU32>()
        .map_err(|_| LeagueError::Config(format!("RIOT_REQUESTS_PER_SECOND must be a positive integer, got '{}'", value)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_lowercases_region_and_uses_default_host() {
        let config = Config::new("key", "EUW");
        assert_eq!(config.region, "euw");
        assert_eq!(config.host, DEFAULT_HOST);
        assert!(config.requests_per_second.is_none());
    }

    #[test]
    fn with_host_strips_trailing_slash() {
        let config = Config::new("key", "na").with_host("http://localhost:8080/");
        assert_eq!(config.host, "http://localhost:8080");
    }

    #[test]
    fn rate_must_be_positive() {
        assert_eq!(parse_rate(" 10 ").unwrap().get(), 10);
        assert!(matches!(parse_rate("0"), Err(LeagueError::Config(_))));
        assert!(matches!(parse_rate("fast"), Err(LeagueError::Config(_))));
    }
}
