use colored::Colorize;

use sd_core::Roster;
use sd_engine::{TeamSide, TurnState};

use super::DataPaths;

pub fn run(
    paths: &DataPaths,
    batters: usize,
    seed: u64,
    innings: u32,
    hand: usize,
) -> Result<(), String> {
    let (home, away) = super::load_teams(paths)?;
    let mut game = super::new_game(home, away, seed, innings, hand);

    println!(
        "  {} {} at {} {}",
        "Play".bold(),
        game.away().name(),
        game.home().name(),
        format!("(seed={seed})").dimmed()
    );

    for _ in 0..batters {
        if game.is_final() {
            break;
        }
        let stat = game.stat();
        let heading = format!(
            "{} {}, {} out",
            stat.half(),
            stat.inning(),
            stat.outs()
        );
        let batter = game.offense().current_batter().name.clone();
        let pitcher = game.defense().current_pitcher().name.clone();
        let start = game.log().len();

        loop {
            super::queue_playable(&mut game);
            let next = game.step().map_err(|e| e.to_string())?;
            if next == TurnState::BeforePitch {
                break;
            }
        }

        let tokens: Vec<String> = game
            .log()
            .since(start)
            .iter()
            .map(|t| super::paint(*t))
            .collect();
        let stat = game.stat();
        println!(
            "  {} {} vs {}: {}  {}",
            heading.dimmed(),
            batter.bold(),
            pitcher,
            tokens.join(" "),
            format!(
                "[{} {} - {} {}]",
                game.away().name(),
                stat.line(TeamSide::Away).runs,
                game.home().name(),
                stat.line(TeamSide::Home).runs
            )
            .dimmed()
        );
    }

    if game.is_final() {
        println!("  {}", "Final".bold().underline());
    }
    println!("{}", super::line_score(&game));
    Ok(())
}
