mod display;

use anyhow::Context;
use clap::Parser;
use display::output::{
    display_champion_stats, display_error, display_info, display_league, display_match_history,
    display_profile, display_stat_summaries, display_success, display_teams,
};
use league_stats::{ChampionCatalog, Config, GameType, RiotApiClient, Summoner};
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(name = "League Stats")]
#[command(about = "Look up summoner profiles, stats, leagues and teams", long_about = None)]
struct Args {
    /// Summoner names (several names are looked up in one request)
    #[arg(required = true)]
    names: Vec<String>,

    /// Region (default: RIOT_REGION or na)
    #[arg(short, long)]
    region: Option<String>,

    /// Only show the summary for this game type (e.g. RankedSolo5x5)
    #[arg(short, long)]
    game_type: Option<String>,

    /// Show ranked stats for this champion
    #[arg(short, long)]
    champion: Option<String>,

    /// Show recent games
    #[arg(long)]
    history: bool,

    /// Show league standings
    #[arg(long)]
    league: bool,

    /// Show ranked teams
    #[arg(long)]
    teams: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(e) = run(args) {
        display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let mut config = Config::from_env()?;
    if let Some(region) = args.region {
        config.region = region.to_lowercase();
    }

    let game_type = args
        .game_type
        .as_deref()
        .map(str::parse::<GameType>)
        .transpose()?;

    display_info(&format!(
        "Fetching {} summoner(s) in region {}",
        args.names.len(),
        config.region
    ));

    let client = Arc::new(RiotApiClient::new(config));
    let catalog = Arc::new(ChampionCatalog::new());

    let names: Vec<&str> = args.names.iter().map(String::as_str).collect();
    let mut summoners = Summoner::lookup_many(&client, &catalog, &names)
        .context("summoner lookup failed")?;
    display_success(&format!("Found {} summoner(s)", summoners.len()));

    for name in &names {
        let Some(summoner) = summoners.remove(*name) else {
            continue;
        };
        display_profile(&summoner);

        match game_type {
            Some(kind) => match summoner.stats_for_game_type(kind)? {
                Some(summary) => display_stat_summaries(std::iter::once(summary)),
                None => display_info(&format!("No {} games played", kind)),
            },
            None => display_stat_summaries(summoner.stats()?.values()),
        }

        if let Some(champion) = &args.champion {
            let stats = summoner
                .ranked_stats_for_champion_by_name(champion)
                .with_context(|| format!("ranked stats for {}", champion))?;
            display_champion_stats(&stats);
        }

        if args.history {
            display_match_history(&summoner.match_history()?, &catalog);
        }

        if args.league {
            display_league(&summoner.league()?, summoner.id());
        }

        if args.teams {
            display_teams(summoner.teams()?);
        }
    }

    Ok(())
}
