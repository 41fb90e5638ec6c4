//! Start command: create a game and print its empty board

use std::sync::Arc;

use anyhow::{Context, Result};

use codebreaker_runtime::CodebreakerService;
use codebreaker_runtime::deps::{MessageStyle, UserInterface};

use super::{GlobalArgs, SPINNER_TICK, print_board, print_title};
use crate::palette::CodePointInfo;
use crate::settings::GameSettings;
use crate::view_model::GameViewModel;

/// Dependencies for the start command
pub struct StartDependencies {
    /// User interface for output
    pub ui: Arc<dyn UserInterface>,
    /// Codebreaker service
    pub service: Arc<dyn CodebreakerService>,
    /// Default pool, length and symbol metadata
    pub settings: GameSettings,
}

/// Start command arguments (matches CLI parser)
#[derive(Debug, Clone, Default)]
pub struct StartArgs {
    /// Connection and settings options
    pub global: GlobalArgs,
    /// Pool override
    pub pool: Option<String>,
    /// Code length override
    pub length: Option<i32>,
}

/// Execute the start command with injected dependencies
pub async fn execute_with_deps(
    pool: Option<String>,
    length: Option<i32>,
    deps: Arc<StartDependencies>,
) -> Result<()> {
    let pool = pool.unwrap_or_else(|| deps.settings.pool.clone());
    let length = length.unwrap_or(deps.settings.length);
    anyhow::ensure!(!pool.is_empty(), "Pool must not be empty");
    anyhow::ensure!(length > 0, "Length must be at least 1, got {length}");

    print_title(deps.ui.as_ref(), &deps.settings);

    let spinner = deps.ui.create_spinner();
    spinner.enable_steady_tick(SPINNER_TICK);
    spinner.set_message(&format!("Starting a game of {length} from {pool}..."));

    let view_model = GameViewModel::new(Arc::clone(&deps.service));
    let started = view_model.start_game(&pool, length).await;
    spinner.finish_and_clear();
    let game = started.context("Failed to start game")?;

    let info = CodePointInfo::from_settings(&deps.settings);
    print_board(deps.ui.as_ref(), &game, &info);
    deps.ui.print("");

    let game_id = game.id.as_deref().unwrap_or_default();
    deps.ui.print_styled(
        &format!("✓ Game {game_id} started"),
        MessageStyle::Success,
    );
    deps.ui
        .print(&format!("Guess with: codebreaker guess {game_id} <symbols>"));

    Ok(())
}

/// Execute the start command with default dependencies
pub async fn execute(args: StartArgs) -> Result<()> {
    use crate::ui::RealUserInterface;

    let deps = Arc::new(StartDependencies {
        ui: Arc::new(RealUserInterface),
        service: args.global.service()?,
        settings: args.global.settings()?,
    });

    execute_with_deps(args.pool, args.length, deps).await
}

#[cfg(test)]
#[path = "start_tests.rs"]
mod tests;
