//! Guess-info command: print one stored guess of a game

use std::sync::Arc;

use anyhow::{Context, Result};

use codebreaker_runtime::CodebreakerService;
use codebreaker_runtime::deps::{MessageStyle, UserInterface};

use super::{GlobalArgs, SPINNER_TICK};
use crate::palette::CodePointInfo;
use crate::render::render_guess;
use crate::view_model::GameViewModel;

/// Dependencies for the guess-info command
pub struct GuessInfoDependencies {
    /// User interface for output
    pub ui: Arc<dyn UserInterface>,
    /// Codebreaker service
    pub service: Arc<dyn CodebreakerService>,
    /// Names and colours of the pool symbols
    pub info: CodePointInfo,
}

/// Guess-info command arguments (matches CLI parser)
#[derive(Debug, Clone)]
pub struct GuessInfoArgs {
    /// Connection and settings options
    pub global: GlobalArgs,
    /// Game the guess belongs to
    pub game_id: String,
    /// Guess to print
    pub guess_id: String,
}

/// Execute the guess-info command with injected dependencies
pub async fn execute_with_deps(
    game_id: &str,
    guess_id: &str,
    deps: Arc<GuessInfoDependencies>,
) -> Result<()> {
    let spinner = deps.ui.create_spinner();
    spinner.enable_steady_tick(SPINNER_TICK);
    spinner.set_message(&format!("Loading guess {guess_id}..."));

    let view_model = GameViewModel::new(Arc::clone(&deps.service));
    let loaded = async {
        let game = view_model
            .load_game(game_id)
            .await
            .with_context(|| format!("Failed to load game {game_id}"))?;
        let guess = view_model
            .load_guess(guess_id)
            .await
            .with_context(|| format!("Failed to load guess {guess_id} of game {game_id}"))?;
        anyhow::Ok((game, guess))
    }
    .await;
    spinner.finish_and_clear();
    let (game, guess) = loaded?;

    let position = game
        .guesses
        .iter()
        .position(|candidate| candidate.id == guess.id)
        .map_or_else(String::new, |index| {
            format!(" ({} of {})", index + 1, game.guesses.len())
        });

    deps.ui.print_styled(
        &format!("Guess {guess_id}{position} in game {game_id}"),
        MessageStyle::Bold,
    );
    if let Some(created) = guess.created {
        deps.ui
            .print(&format!("Submitted: {}", created.format("%Y-%m-%d %H:%M:%S UTC")));
    }
    deps.ui.print(&render_guess(&guess, &deps.info));
    if guess.solution == Some(true) {
        deps.ui
            .print_styled("✓ This guess broke the code", MessageStyle::Success);
    }

    Ok(())
}

/// Execute the guess-info command with default dependencies
pub async fn execute(args: GuessInfoArgs) -> Result<()> {
    use crate::ui::RealUserInterface;

    let deps = Arc::new(GuessInfoDependencies {
        ui: Arc::new(RealUserInterface),
        service: args.global.service()?,
        info: CodePointInfo::from_settings(&args.global.settings()?),
    });

    execute_with_deps(&args.game_id, &args.guess_id, deps).await
}

#[cfg(test)]
#[path = "guess_info_tests.rs"]
mod tests;
