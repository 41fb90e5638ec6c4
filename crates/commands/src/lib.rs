//! Command implementations for the Codebreaker CLI
//!
//! This crate contains the game view model shared by every front end, the
//! terminal rendering of boards and palettes, the user settings, and the
//! command implementations built on them.

/// Command implementations module
pub mod commands;

/// Symbol names, style classes and colours
pub mod palette;

/// Board and palette rendering
pub mod render;

/// User settings file
pub mod settings;

/// Terminal user interface
pub mod ui;

/// Observable game state
pub mod view_model;

#[cfg(test)]
pub mod test_helpers;

// Re-export all commands at the crate root for easier access
pub use commands::{GlobalArgs, delete, guess, guess_info, play, show, start};
pub use palette::CodePointInfo;
pub use settings::GameSettings;
pub use ui::RealUserInterface;
pub use view_model::GameViewModel;
