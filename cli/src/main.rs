//! Codebreaker CLI - play the Codebreaker game against a remote service

use anyhow::Result;
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use codebreaker_commands::GlobalArgs;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv, -vvvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Base URL of the Codebreaker service
    #[arg(long, env = "CODEBREAKER_API_URL", global = true, value_name = "URL")]
    api_url: Option<String>,

    /// Settings file (default: ~/.codebreaker/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start a new game
    Start(StartArgs),
    /// Show a game and its guesses
    Show(GameArgs),
    /// Delete a game
    Delete(GameArgs),
    /// Submit a guess for a game
    Guess(GuessArgs),
    /// Show one guess of a game
    GuessInfo(GuessInfoArgs),
    /// Play interactively until the code is broken
    Play(PlayArgs),
}

// Simple command wrappers - just forward arguments

#[derive(Debug, Args)]
struct StartArgs {
    /// Symbols the code is drawn from (default from settings)
    #[arg(short, long)]
    pool: Option<String>,
    /// Code length (default from settings)
    #[arg(short, long, value_parser = clap::value_parser!(i32).range(1..))]
    length: Option<i32>,
}

#[derive(Debug, Args)]
struct GameArgs {
    /// Game ID
    game_id: String,
}

#[derive(Debug, Args)]
struct GuessArgs {
    /// Game ID
    game_id: String,
    /// Guessed symbols, e.g. ROYG
    text: String,
}

#[derive(Debug, Args)]
struct GuessInfoArgs {
    /// Game ID
    game_id: String,
    /// Guess ID
    guess_id: String,
}

#[derive(Debug, Args)]
struct PlayArgs {
    /// Continue an existing game instead of starting a new one
    #[arg(long, value_name = "GAME_ID")]
    resume: Option<String>,
}

/// Log filter for a `-v` count; `None` defers to `RUST_LOG`
const fn verbosity_filter(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}

fn init_tracing(verbose: u8) {
    let filter = match verbosity_filter(verbose) {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    init_tracing(cli.verbose);

    let global = GlobalArgs {
        api_url: cli.api_url,
        config: cli.config,
    };

    match cli.command {
        Commands::Start(args) => {
            codebreaker_commands::start::execute(codebreaker_commands::start::StartArgs {
                global,
                pool: args.pool,
                length: args.length,
            })
            .await
        }
        Commands::Show(args) => {
            codebreaker_commands::show::execute(codebreaker_commands::show::ShowArgs {
                global,
                game_id: args.game_id,
            })
            .await
        }
        Commands::Delete(args) => {
            codebreaker_commands::delete::execute(codebreaker_commands::delete::DeleteArgs {
                global,
                game_id: args.game_id,
            })
            .await
        }
        Commands::Guess(args) => {
            codebreaker_commands::guess::execute(codebreaker_commands::guess::GuessArgs {
                global,
                game_id: args.game_id,
                text: args.text,
            })
            .await
        }
        Commands::GuessInfo(args) => {
            codebreaker_commands::guess_info::execute(
                codebreaker_commands::guess_info::GuessInfoArgs {
                    global,
                    game_id: args.game_id,
                    guess_id: args.guess_id,
                },
            )
            .await
        }
        Commands::Play(args) => {
            codebreaker_commands::play::execute(codebreaker_commands::play::PlayArgs {
                global,
                resume: args.resume,
            })
            .await
        }
    }
}
