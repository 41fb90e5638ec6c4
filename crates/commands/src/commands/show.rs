//! Show command: print a game with its guess history

use std::sync::Arc;

use anyhow::{Context, Result};

use codebreaker_runtime::CodebreakerService;
use codebreaker_runtime::deps::UserInterface;

use super::{GlobalArgs, SPINNER_TICK, print_board};
use crate::palette::CodePointInfo;
use crate::view_model::GameViewModel;

/// Dependencies for the show command
pub struct ShowDependencies {
    /// User interface for output
    pub ui: Arc<dyn UserInterface>,
    /// Codebreaker service
    pub service: Arc<dyn CodebreakerService>,
    /// Names and colours of the pool symbols
    pub info: CodePointInfo,
}

/// Show command arguments (matches CLI parser)
#[derive(Debug, Clone)]
pub struct ShowArgs {
    /// Connection and settings options
    pub global: GlobalArgs,
    /// Game to print
    pub game_id: String,
}

/// Execute the show command with injected dependencies
pub async fn execute_with_deps(game_id: &str, deps: Arc<ShowDependencies>) -> Result<()> {
    let spinner = deps.ui.create_spinner();
    spinner.enable_steady_tick(SPINNER_TICK);
    spinner.set_message(&format!("Loading game {game_id}..."));

    let view_model = GameViewModel::new(Arc::clone(&deps.service));
    let loaded = view_model.load_game(game_id).await;
    spinner.finish_and_clear();
    let game = loaded.with_context(|| format!("Failed to load game {game_id}"))?;

    print_board(deps.ui.as_ref(), &game, &deps.info);

    Ok(())
}

/// Execute the show command with default dependencies
pub async fn execute(args: ShowArgs) -> Result<()> {
    use crate::ui::RealUserInterface;

    let deps = Arc::new(ShowDependencies {
        ui: Arc::new(RealUserInterface),
        service: args.global.service()?,
        info: CodePointInfo::from_settings(&args.global.settings()?),
    });

    execute_with_deps(&args.game_id, deps).await
}

#[cfg(test)]
#[path = "show_tests.rs"]
mod tests;
