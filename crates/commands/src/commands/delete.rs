//! Delete command

use std::sync::Arc;

use anyhow::{Context, Result};

use codebreaker_runtime::CodebreakerService;
use codebreaker_runtime::deps::{MessageStyle, UserInterface};

use super::GlobalArgs;
use crate::view_model::GameViewModel;

/// Dependencies for the delete command
pub struct DeleteDependencies {
    /// User interface for output
    pub ui: Arc<dyn UserInterface>,
    /// Codebreaker service
    pub service: Arc<dyn CodebreakerService>,
}

/// Delete command arguments (matches CLI parser)
#[derive(Debug, Clone)]
pub struct DeleteArgs {
    /// Connection options
    pub global: GlobalArgs,
    /// Game to delete
    pub game_id: String,
}

/// Execute the delete command with injected dependencies
pub async fn execute_with_deps(game_id: &str, deps: Arc<DeleteDependencies>) -> Result<()> {
    let view_model = GameViewModel::new(Arc::clone(&deps.service));
    view_model
        .delete_game(game_id)
        .await
        .with_context(|| format!("Failed to delete game {game_id}"))?;

    deps.ui
        .print_styled(&format!("✓ Deleted game {game_id}"), MessageStyle::Success);
    Ok(())
}

/// Execute the delete command with default dependencies
pub async fn execute(args: DeleteArgs) -> Result<()> {
    use crate::ui::RealUserInterface;

    let deps = Arc::new(DeleteDependencies {
        ui: Arc::new(RealUserInterface),
        service: args.global.service()?,
    });

    execute_with_deps(&args.game_id, deps).await
}

#[cfg(test)]
#[path = "delete_tests.rs"]
mod tests;
