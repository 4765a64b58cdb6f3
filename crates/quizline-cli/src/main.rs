//! quizline CLI: the terminal front end for the quiz game.

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};

mod commands;
mod config;

#[derive(Parser)]
#[command(
    name = "quizline",
    version,
    about = "Terminal multiple-choice quiz game",
    args_conflicts_with_subcommands = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    play: PlayArgs,
}

#[derive(Args, Debug)]
pub struct PlayArgs {
    /// Question file (JSON list); falls back to built-in questions if unusable
    #[arg(long)]
    questions: Option<PathBuf>,

    /// High score file
    #[arg(long)]
    highscore: Option<PathBuf>,

    /// Seed for question and choice shuffling
    #[arg(long)]
    seed: Option<u64>,

    /// Config file path
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the quiz (default)
    Play(PlayArgs),

    /// Validate a question file
    Validate {
        /// Path to the question file
        #[arg(long)]
        questions: PathBuf,
    },

    /// Create a starter config and question file
    Init,

    /// Show or reset the stored high score
    Highscore {
        /// High score file
        #[arg(long)]
        highscore: Option<PathBuf>,

        /// Delete the stored high score
        #[arg(long)]
        reset: bool,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("quizline=warn".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Play(args)) => commands::play::execute(args),
        None => commands::play::execute(cli.play),
        Some(Commands::Validate { questions }) => commands::validate::execute(questions),
        Some(Commands::Init) => commands::init::execute(),
        Some(Commands::Highscore {
            highscore,
            reset,
            config,
        }) => commands::highscore::execute(highscore, reset, config),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
