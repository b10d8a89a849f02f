//! Typed client for the League of Legends stats web API.
//!
//! [`RiotApiClient`] routes each resource operation to its versioned endpoint
//! and maps failures onto [`LeagueError`]. [`ChampionCatalog`] memoizes the
//! champion list, and [`Summoner`] wraps both into player-centric queries.
//!
//! ```no_run
//! use league_stats::{ChampionCatalog, Config, GameType, RiotApiClient, Summoner};
//! use std::sync::Arc;
//!
//! # fn main() -> league_stats::Result<()> {
//! let client = Arc::new(RiotApiClient::new(Config::new("my-api-key", "na")));
//! let catalog = Arc::new(ChampionCatalog::new());
//!
//! let summoner = Summoner::lookup(&client, &catalog, "Ashe")?;
//! if let Some(solo) = summoner.stats_for_game_type(GameType::RankedSolo5x5)? {
//!     println!("{} W / {} L", solo.wins, solo.losses);
//! }
//! let ashe = summoner.ranked_stats_for_champion_by_name("Ashe")?;
//! println!("{} ranked games", ashe.stat("totalSessionsPlayed"));
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod model;
pub mod summoner;

#[cfg(test)]
mod test_support;

pub use api::client::RiotApiClient;
pub use api::endpoints::{Endpoint, StatsKind, SummonerResource};
pub use api::transport::{HttpResponse, Transport, UreqTransport};
pub use catalog::ChampionCatalog;
pub use config::Config;
pub use error::{LeagueError, Result};
pub use model::GameType;
pub use summoner::Summoner;
