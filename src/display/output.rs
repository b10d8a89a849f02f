use colored::*;
use league_stats::model::{ChampionStats, GameTypeSummary, LeagueStanding, RecentGame, TeamRecord};
use league_stats::{ChampionCatalog, Summoner};
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct SummaryRow {
    #[tabled(rename = "game type")]
    game_type: String,
    wins: String,
    losses: String,
    kills: String,
    assists: String,
    updated: String,
}

#[derive(Tabled)]
struct MatchRow {
    #[tabled(rename = "#")]
    number: String,
    champion: String,
    mode: String,
    result: String,
    kda: String,
}

#[derive(Tabled)]
struct LeagueRow {
    player: String,
    rank: String,
    lp: String,
    record: String,
    flags: String,
}

#[derive(Tabled)]
struct TeamRow {
    tag: String,
    name: String,
    members: String,
    record: String,
}

pub fn display_error(error: &str) {
    eprintln!("{} {}", "❌ Error:".red().bold(), error);
}

pub fn display_info(message: &str) {
    println!("{} {}", "ℹ️".cyan(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

pub fn display_profile(summoner: &Summoner) {
    println!(
        "\n{}",
        format!("🎮 {} (level {})", summoner.name(), summoner.level())
            .bold()
            .cyan()
    );
    println!("{}", "=".repeat(60).cyan());
    println!(
        "   id {} · icon {} · updated {}\n",
        summoner.id(),
        summoner.profile_icon_id(),
        summoner.revision_date().format("%Y-%m-%d %H:%M")
    );
}

pub fn display_stat_summaries<'a>(summaries: impl Iterator<Item = &'a GameTypeSummary>) {
    let rows: Vec<SummaryRow> = summaries
        .map(|s| SummaryRow {
            game_type: s.game_type.to_string(),
            wins: s.wins.to_string().green().to_string(),
            losses: s.losses.to_string().red().to_string(),
            kills: s.stat("totalChampionKills").to_string(),
            assists: s.stat("totalAssists").to_string(),
            updated: s.last_modified.format("%Y-%m-%d").to_string(),
        })
        .collect();

    if rows.is_empty() {
        println!("{}", "No stat summaries available".yellow());
        return;
    }

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}\n", table);
}

pub fn display_champion_stats(stats: &ChampionStats) {
    let played = stats.stat("totalSessionsPlayed");
    let won = stats.stat("totalSessionsWon");
    let win_rate = if played == 0 {
        0.0
    } else {
        won as f64 / played as f64 * 100.0
    };

    println!("{}", format!("🏆 Ranked stats: {}", stats.name).bold().yellow());
    println!(
        "   {} games · {} wins ({:.1}% WR) · {} kills · {} deaths\n",
        played,
        won,
        win_rate,
        stats.stat("totalChampionKills"),
        stats.stat("totalDeathsPerSession")
    );
}

pub fn display_match_history(games: &[RecentGame], catalog: &ChampionCatalog) {
    let wins = games.iter().filter(|g| g.won()).count();

    println!("{}", format!("📊 RECENT GAMES (Last {})", games.len()).bold().cyan());
    println!(
        "{} {} W / {} L\n",
        "📈 Overall:".bold(),
        wins.to_string().green(),
        (games.len() - wins).to_string().red()
    );

    let rows: Vec<MatchRow> = games
        .iter()
        .enumerate()
        .map(|(idx, game)| MatchRow {
            number: format!("{}", idx + 1),
            // Catalog is only populated if a champion lookup already happened
            champion: catalog
                .get_by_id(game.champion_id)
                .map(|c| c.name.clone())
                .unwrap_or_else(|| format!("#{}", game.champion_id)),
            mode: game.game_mode.clone(),
            result: if game.won() {
                "WIN".green().to_string()
            } else {
                "LOSS".red().to_string()
            },
            kda: format!(
                "{}/{}/{}",
                game.stat("championsKilled"),
                game.stat("numDeaths"),
                game.stat("assists")
            ),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}\n", table);
}

pub fn display_league(leagues: &[LeagueStanding], summoner_id: i64) {
    let own_id = summoner_id.to_string();

    for league in leagues {
        println!(
            "{}",
            format!("🛡️ {} · {} {}", league.name, league.tier, league.queue).bold().cyan()
        );

        let rows: Vec<LeagueRow> = league
            .entries
            .iter()
            .map(|e| {
                let mut flags = Vec::new();
                if e.hot_streak {
                    flags.push("🔥");
                }
                if e.veteran {
                    flags.push("veteran");
                }
                if e.fresh_blood {
                    flags.push("new");
                }
                if e.inactive {
                    flags.push("inactive");
                }
                let player = if e.player_or_team_id == own_id {
                    e.player_or_team_name.bold().to_string()
                } else {
                    e.player_or_team_name.clone()
                };
                LeagueRow {
                    player,
                    rank: format!("{} {}", e.tier, e.rank),
                    lp: match &e.mini_series {
                        Some(series) => format!("{} ({})", e.league_points, series.progress),
                        None => e.league_points.to_string(),
                    },
                    record: format!("{}W {}L", e.wins, e.losses),
                    flags: flags.join(" "),
                }
            })
            .collect();

        let mut table = Table::new(rows);
        table.with(Style::rounded());
        println!("{}\n", table);
    }
}

pub fn display_teams(teams: &[TeamRecord]) {
    if teams.is_empty() {
        println!("{}", "Not a member of any ranked team".yellow());
        return;
    }

    let rows: Vec<TeamRow> = teams
        .iter()
        .map(|t| {
            let (wins, losses) = t
                .stat_details
                .iter()
                .fold((0, 0), |(w, l), d| (w + d.wins, l + d.losses));
            TeamRow {
                tag: t.tag.clone(),
                name: t.name.clone(),
                members: t.roster.len().to_string(),
                record: format!("{}W {}L", wins, losses),
            }
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);

    for team in teams {
        if let Some(motd) = &team.message_of_day {
            println!("   [{}] {}", team.tag.bold(), motd.message);
        }
    }
    println!();
}
