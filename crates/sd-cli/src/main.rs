//! CLI frontend for the Showdown at-bat engine.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "showdown",
    about = "Showdown: dice-and-chart tabletop baseball",
    version,
    propagate_version = true
)]
struct Cli {
    /// Print engine debug logging to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Where rosters and cards come from. Bundled data is used when a path is
/// left out.
#[derive(Args)]
struct DataArgs {
    /// Home team JSON file
    #[arg(long)]
    home: Option<PathBuf>,

    /// Away team JSON file
    #[arg(long)]
    away: Option<PathBuf>,

    /// Strategy card catalog JSON file
    #[arg(long)]
    cards: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play whole games and print the line scores
    Simulate {
        /// Number of games to play
        #[arg(short, long, default_value_t = 1)]
        games: u32,

        /// Seed for the first game; later games use seed+1, seed+2, ...
        #[arg(short, long, default_value_t = 42)]
        seed: u64,

        /// Scheduled innings
        #[arg(short, long, default_value_t = 9)]
        innings: u32,

        /// Cards each side draws before the first pitch
        #[arg(long, default_value_t = 3)]
        hand: usize,

        #[command(flatten)]
        data: DataArgs,
    },

    /// Play batter by batter and print each at-bat's log
    Play {
        /// Number of batters to play
        #[arg(short, long, default_value_t = 9)]
        batters: usize,

        /// Random seed
        #[arg(short, long, default_value_t = 42)]
        seed: u64,

        /// Scheduled innings
        #[arg(short, long, default_value_t = 9)]
        innings: u32,

        /// Cards each side draws before the first pitch
        #[arg(long, default_value_t = 3)]
        hand: usize,

        #[command(flatten)]
        data: DataArgs,
    },

    /// Validate a card catalog and list its cards
    Cards {
        /// Strategy card catalog JSON file
        #[arg(long)]
        cards: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();
    commands::init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Simulate {
            games,
            seed,
            innings,
            hand,
            data,
        } => commands::simulate::run(&data.into(), games, seed, innings, hand),
        Commands::Play {
            batters,
            seed,
            innings,
            hand,
            data,
        } => commands::play::run(&data.into(), batters, seed, innings, hand),
        Commands::Cards { cards } => commands::cards::run(cards.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

impl From<DataArgs> for commands::DataPaths {
    fn from(args: DataArgs) -> Self {
        Self {
            home: args.home,
            away: args.away,
            cards: args.cards,
        }
    }
}
