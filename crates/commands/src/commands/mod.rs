//! Codebreaker command implementations

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;

use codebreaker_runtime::api_client::resolve_api_config;
use codebreaker_runtime::api_client::types::Game;
use codebreaker_runtime::deps::{MessageStyle, UserInterface};
use codebreaker_runtime::{CodebreakerService, RealCodebreakerService, TIMEOUT_ENV_VAR};

use crate::palette::CodePointInfo;
use crate::render::render_game;
use crate::settings::GameSettings;

/// Delete a game
pub mod delete;
/// Print a stored guess
pub mod guess_info;
/// Submit one guess
pub mod guess;
/// Interactive game loop
pub mod play;
/// Print a game
pub mod show;
/// Start a game
pub mod start;

/// Options shared by every command
#[derive(Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Service base URL; the configured default when `None`
    pub api_url: Option<String>,
    /// Settings file; `~/.codebreaker/config.toml` when `None`
    pub config: Option<PathBuf>,
}

impl GlobalArgs {
    /// Connect to the service named by these options
    pub fn service(&self) -> Result<Arc<dyn CodebreakerService>> {
        let config = resolve_api_config(self.api_url.clone(), std::env::var(TIMEOUT_ENV_VAR).ok());
        Ok(Arc::new(RealCodebreakerService::from_config(config)?))
    }

    /// Load the game settings named by these options
    pub fn settings(&self) -> Result<GameSettings> {
        match &self.config {
            Some(path) => GameSettings::load_from(path),
            None => GameSettings::load(),
        }
    }
}

pub(crate) const SPINNER_TICK: Duration = Duration::from_millis(100);

/// Print the summary, history and slots of `game`
pub(crate) fn print_board(ui: &dyn UserInterface, game: &Game, info: &CodePointInfo) {
    for line in render_game(game, info) {
        ui.print(&line);
    }
}

/// Print the banner configured in the settings
pub(crate) fn print_title(ui: &dyn UserInterface, settings: &GameSettings) {
    ui.print_styled(&format!("→ {}", settings.title), MessageStyle::Cyan);
    ui.print("");
}
