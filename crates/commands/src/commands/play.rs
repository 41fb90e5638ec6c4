//! Play command: an interactive game in the terminal
//!
//! Starts a new game (or resumes one with `--resume`), prints the symbol
//! palette, and prompts for guesses until the code is broken or the player
//! types `quit`. Guesses that fail validation or are rejected by the service
//! are reported and prompted for again.

use std::sync::Arc;

use anyhow::{Context, Result};

use codebreaker_runtime::deps::{MessageStyle, UserInterface};
use codebreaker_runtime::{CodebreakerService, ServiceError};

use super::{GlobalArgs, SPINNER_TICK, print_board, print_title};
use crate::palette::CodePointInfo;
use crate::render::render_palette;
use crate::settings::GameSettings;
use crate::view_model::GameViewModel;

const QUIT: &str = "quit";

/// Dependencies for the play command
pub struct PlayDependencies {
    /// User interface for prompts and output
    pub ui: Arc<dyn UserInterface>,
    /// Codebreaker service
    pub service: Arc<dyn CodebreakerService>,
    /// Title, default pool and length, symbol metadata
    pub settings: GameSettings,
}

/// Play command arguments (matches CLI parser)
#[derive(Debug, Clone, Default)]
pub struct PlayArgs {
    /// Connection and settings options
    pub global: GlobalArgs,
    /// Continue this game instead of starting one
    pub resume: Option<String>,
}

/// Execute the play command with injected dependencies
pub async fn execute_with_deps(resume: Option<&str>, deps: Arc<PlayDependencies>) -> Result<()> {
    if !deps.ui.is_interactive() {
        anyhow::bail!(
            "play needs an interactive terminal; use `codebreaker start` and `codebreaker guess` instead"
        );
    }

    let view_model = GameViewModel::new(Arc::clone(&deps.service));
    let outcome = run(&view_model, resume, &deps).await;
    view_model.shutdown();
    outcome
}

async fn run(view_model: &GameViewModel, resume: Option<&str>, deps: &PlayDependencies) -> Result<()> {
    let ui = deps.ui.as_ref();
    let info = CodePointInfo::from_settings(&deps.settings);

    print_title(ui, &deps.settings);

    let spinner = ui.create_spinner();
    spinner.enable_steady_tick(SPINNER_TICK);
    let opened = match resume {
        Some(game_id) => {
            spinner.set_message(&format!("Loading game {game_id}..."));
            view_model
                .load_game(game_id)
                .await
                .with_context(|| format!("Failed to load game {game_id}"))
        }
        None => {
            spinner.set_message("Starting a new game...");
            view_model
                .start_game(&deps.settings.pool, deps.settings.length)
                .await
                .context("Failed to start game")
        }
    };
    spinner.finish_and_clear();
    let game = opened?;
    let game_id = game.id.clone().unwrap_or_default();

    for line in render_palette(&info) {
        ui.print(&line);
    }
    ui.print("");

    subscribe(view_model, &deps.ui, &info);

    let prompt = format!(
        "Guess {} symbols from {} (or {QUIT})",
        game.length, game.pool
    );

    while view_model.solved() != Some(true) {
        let input = ui.prompt_input(&prompt, None)?;
        let input = input.trim();

        if input.is_empty() {
            continue;
        }

        if input.eq_ignore_ascii_case(QUIT) {
            ui.print_styled(
                &format!("Game {game_id} saved. Resume with: codebreaker play --resume {game_id}"),
                MessageStyle::Yellow,
            );
            return Ok(());
        }

        let spinner = ui.create_spinner();
        spinner.enable_steady_tick(SPINNER_TICK);
        spinner.set_message(&format!("Submitting {input}..."));
        let submitted = view_model.submit_guess(input).await;
        spinner.finish_and_clear();

        match submitted {
            // Already reported by the error observer
            Ok(_) | Err(ServiceError::InvalidGuess(_) | ServiceError::BadRequest(_)) => {}
            Err(error) => return Err(error).context("Failed to submit guess"),
        }
    }

    let count = view_model.game().map_or(0, |game| game.guesses.len());
    ui.print_styled(
        &format!(
            "✓ Code broken in {count} guess{}!",
            if count == 1 { "" } else { "es" }
        ),
        MessageStyle::Success,
    );

    Ok(())
}

/// Print the board on every game change and report failed guesses
fn subscribe(view_model: &GameViewModel, ui: &Arc<dyn UserInterface>, info: &CodePointInfo) {
    let board_ui = Arc::clone(ui);
    let board_info = info.clone();
    view_model.register_game_observer(move |game| {
        if let Some(game) = game {
            print_board(board_ui.as_ref(), game, &board_info);
            board_ui.print("");
        }
    });

    let error_ui = Arc::clone(ui);
    view_model.register_error_observer(move |error| {
        error_ui.print_styled(&format!("✗ {error}"), MessageStyle::Error);
    });
}

/// Execute the play command with default dependencies
pub async fn execute(args: PlayArgs) -> Result<()> {
    use crate::ui::RealUserInterface;

    let deps = Arc::new(PlayDependencies {
        ui: Arc::new(RealUserInterface),
        service: args.global.service()?,
        settings: args.global.settings()?,
    });

    execute_with_deps(args.resume.as_deref(), deps).await
}

#[cfg(test)]
#[path = "play_tests.rs"]
mod tests;
