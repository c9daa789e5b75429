use colored::Colorize;
use tracing::info;

use sd_core::{Lineup, Token};
use sd_engine::{Game, TeamSide};

use super::DataPaths;

pub fn run(
    paths: &DataPaths,
    games: u32,
    seed: u64,
    innings: u32,
    hand: usize,
) -> Result<(), String> {
    let (home, away) = super::load_teams(paths)?;
    if games == 0 {
        println!("  No games requested. Nothing to simulate.");
        return Ok(());
    }

    let mut away_runs = 0u32;
    let mut home_runs = 0u32;
    let mut home_wins = 0u32;

    for g in 0..games {
        let game_seed = seed.wrapping_add(u64::from(g));
        let mut game = super::new_game(home.clone(), away.clone(), game_seed, innings, hand);
        super::play_out(&mut game)?;

        let stat = game.stat();
        let away_line = stat.line(TeamSide::Away);
        let home_line = stat.line(TeamSide::Home);
        away_runs += away_line.runs;
        home_runs += home_line.runs;
        if stat.leader() == Some(TeamSide::Home) {
            home_wins += 1;
        }
        info!(
            game = g + 1,
            seed = game_seed,
            away = away_line.runs,
            home = home_line.runs,
            "game finished"
        );

        println!(
            "  {} {}",
            format!("Game {}", g + 1).bold().underline(),
            format!("(seed={game_seed}, {} batters logged)", batters_logged(&game)).dimmed()
        );
        println!("{}", super::line_score(&game));
        println!();
    }

    let n = f64::from(games);
    println!("  {}", "Summary".bold().underline());
    println!(
        "  {} {:.2} runs per game, {} wins",
        away.name(),
        f64::from(away_runs) / n,
        games - home_wins
    );
    println!(
        "  {} {:.2} runs per game, {} wins",
        home.name(),
        f64::from(home_runs) / n,
        home_wins
    );
    Ok(())
}

/// Every resolved batter ends with a `BP` for the next one.
fn batters_logged(game: &Game<Lineup>) -> usize {
    game.log()
        .iter()
        .filter(|t| **t == Token::BeforePitch)
        .count()
        .saturating_sub(1)
}
