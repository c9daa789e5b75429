pub mod cards;
pub mod play;
pub mod simulate;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use tracing::debug;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use sd_core::{CardCatalog, Lineup, Outcome, Roster, Token};
use sd_engine::strategy::matches;
use sd_engine::{EventLog, Game, GameConfig, TeamSide};

const DEFAULT_HOME: &str = include_str!("../../../../data/harbor_city.json");
const DEFAULT_AWAY: &str = include_str!("../../../../data/summit_ridge.json");
const DEFAULT_CARDS: &str = include_str!("../../../../data/cards.json");

/// Optional overrides for the bundled teams and catalog.
pub struct DataPaths {
    pub home: Option<PathBuf>,
    pub away: Option<PathBuf>,
    pub cards: Option<PathBuf>,
}

/// Install the stderr log subscriber. `RUST_LOG` wins unless `--verbose`
/// was given.
pub fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}

fn read_or(path: Option<&Path>, bundled: &'static str) -> Result<String, String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|e| format!("cannot read {}: {e}", path.display())),
        None => Ok(bundled.to_string()),
    }
}

/// Load and validate a card catalog.
pub fn load_catalog(path: Option<&Path>) -> Result<CardCatalog, String> {
    let json = read_or(path, DEFAULT_CARDS)?;
    CardCatalog::from_json(&json).map_err(|e| e.to_string())
}

/// Load both teams against one shared catalog. Returns `(home, away)`.
pub fn load_teams(paths: &DataPaths) -> Result<(Lineup, Lineup), String> {
    let catalog = Arc::new(load_catalog(paths.cards.as_deref())?);
    let home = read_or(paths.home.as_deref(), DEFAULT_HOME)?;
    let away = read_or(paths.away.as_deref(), DEFAULT_AWAY)?;
    let home = Lineup::from_json(&home, Arc::clone(&catalog)).map_err(|e| e.to_string())?;
    let away = Lineup::from_json(&away, catalog).map_err(|e| e.to_string())?;
    Ok((home, away))
}

/// Build a game with the given settings.
pub fn new_game(
    home: Lineup,
    away: Lineup,
    seed: u64,
    innings: u32,
    hand: usize,
) -> Game<Lineup> {
    let config = GameConfig::default()
        .with_seed(seed)
        .with_innings(innings)
        .with_opening_hand(hand);
    Game::new(home, away, config)
}

/// Indices of held cards the side may play against the current log.
fn playable(roster: &Lineup, offense: bool, log: &EventLog) -> Vec<usize> {
    roster
        .hand()
        .iter()
        .enumerate()
        .filter(|(_, held)| {
            let usage = held.card.usage;
            let fits = if offense {
                usage.offense()
            } else {
                usage.defense()
            };
            fits && matches(&held.card.precondition, log)
        })
        .map(|(i, _)| i)
        .collect()
}

/// Both managers queue every card they are allowed to play right now.
pub fn queue_playable(game: &mut Game<Lineup>) {
    let offense = playable(game.offense(), true, game.log());
    let defense = playable(game.defense(), false, game.log());
    for i in offense {
        if game.offense_mut().queue_use(i) {
            debug!(card = %game.offense().hand()[i].card.name, "offense queues a card");
        }
    }
    for i in defense {
        if game.defense_mut().queue_use(i) {
            debug!(card = %game.defense().hand()[i].card.name, "defense queues a card");
        }
    }
}

/// Queue cards and step until the game is decided.
pub fn play_out(game: &mut Game<Lineup>) -> Result<(), String> {
    while !game.is_final() {
        queue_playable(game);
        game.step().map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// Line score: one column per inning, then runs and hits.
pub fn line_score(game: &Game<Lineup>) -> Table {
    let stat = game.stat();
    let away = stat.line(TeamSide::Away);
    let home = stat.line(TeamSide::Home);
    let innings = away.innings.len().max(home.innings.len());

    let mut header = vec!["Team".to_string()];
    header.extend((1..=innings).map(|i| i.to_string()));
    header.extend(["R".to_string(), "H".to_string()]);

    let mut table = Table::new();
    table
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);

    for (name, line) in [(game.away().name(), away), (game.home().name(), home)] {
        let mut row = vec![name.to_string()];
        row.extend((0..innings).map(|i| match line.innings.get(i) {
            Some(runs) => runs.to_string(),
            None => "X".to_string(),
        }));
        row.extend([line.runs.to_string(), line.hits.to_string()]);
        table.add_row(row);
    }
    table
}

/// Color a token by what it means for the batter.
pub fn paint(token: Token) -> String {
    let code = token.code();
    match token.outcome() {
        Some(Outcome::Walk) => code.yellow().to_string(),
        Some(outcome) if outcome.is_hit() => code.green().bold().to_string(),
        Some(_) => code.red().to_string(),
        None => code.dimmed().to_string(),
    }
}
