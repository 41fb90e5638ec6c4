//! Guess command: submit one guess for a game

use std::sync::Arc;

use anyhow::{Context, Result};

use codebreaker_runtime::CodebreakerService;
use codebreaker_runtime::deps::{MessageStyle, UserInterface};

use super::{GlobalArgs, SPINNER_TICK, print_board};
use crate::palette::CodePointInfo;
use crate::render::render_guess;
use crate::view_model::GameViewModel;

/// Dependencies for the guess command
pub struct GuessDependencies {
    /// User interface for output
    pub ui: Arc<dyn UserInterface>,
    /// Codebreaker service
    pub service: Arc<dyn CodebreakerService>,
    /// Names and colours of the pool symbols
    pub info: CodePointInfo,
}

/// Guess command arguments (matches CLI parser)
#[derive(Debug, Clone)]
pub struct GuessArgs {
    /// Connection and settings options
    pub global: GlobalArgs,
    /// Game to guess in
    pub game_id: String,
    /// Guessed symbols
    pub text: String,
}

/// Execute the guess command with injected dependencies
pub async fn execute_with_deps(game_id: &str, text: &str, deps: Arc<GuessDependencies>) -> Result<()> {
    let spinner = deps.ui.create_spinner();
    spinner.enable_steady_tick(SPINNER_TICK);
    spinner.set_message(&format!("Submitting {text}..."));

    let view_model = GameViewModel::new(Arc::clone(&deps.service));
    let scored = async {
        view_model
            .load_game(game_id)
            .await
            .with_context(|| format!("Failed to load game {game_id}"))?;
        view_model
            .submit_guess(text)
            .await
            .with_context(|| format!("Failed to submit guess {text}"))
    }
    .await;
    spinner.finish_and_clear();
    let guess = scored?;

    deps.ui.print(&render_guess(&guess, &deps.info));
    deps.ui.print("");

    if let Some(game) = view_model.game() {
        print_board(deps.ui.as_ref(), &game, &deps.info);
    }

    if view_model.solved() == Some(true) {
        deps.ui.print("");
        deps.ui
            .print_styled("✓ Code broken!", MessageStyle::Success);
    }

    Ok(())
}

/// Execute the guess command with default dependencies
pub async fn execute(args: GuessArgs) -> Result<()> {
    use crate::ui::RealUserInterface;

    let deps = Arc::new(GuessDependencies {
        ui: Arc::new(RealUserInterface),
        service: args.global.service()?,
        info: CodePointInfo::from_settings(&args.global.settings()?),
    });

    execute_with_deps(&args.game_id, args.text.trim(), deps).await
}

#[cfg(test)]
#[path = "guess_tests.rs"]
mod tests;
