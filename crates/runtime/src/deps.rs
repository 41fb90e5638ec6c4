//! Dependency injection traits for testability
//!
//! This module provides trait abstractions for the Codebreaker service and
//! the terminal, allowing commands and the view model to be tested against
//! mocks.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use progenitor_client::ResponseValue;

use crate::api_client::{self, ApiConfig, Client as ApiClient, types};
use crate::error::ServiceError;

/// Codebreaker service operations
///
/// Every operation completes asynchronously; callers compose the returned
/// futures instead of blocking.
#[async_trait]
pub trait CodebreakerService: Send + Sync {
    /// Start a new game from the pool and length of `game`
    ///
    /// Completes with the created game, including its server-assigned id.
    async fn start_game(&self, game: &types::Game) -> Result<types::Game, ServiceError>;

    /// Get a game, including the guesses made so far
    async fn get_game(&self, game_id: &str) -> Result<types::Game, ServiceError>;

    /// Delete a game
    async fn delete_game(&self, game_id: &str) -> Result<(), ServiceError>;

    /// Submit a guess for `game` and complete with the scored guess
    async fn submit_guess(
        &self,
        game: &types::Game,
        guess: &types::Guess,
    ) -> Result<types::Guess, ServiceError>;

    /// Get a previously submitted guess of a game
    async fn get_guess(&self, game_id: &str, guess_id: &str)
    -> Result<types::Guess, ServiceError>;

    /// Release the service; every later call fails with [`ServiceError::ShutDown`]
    fn shutdown(&self);
}

/// User interface operations
pub trait UserInterface: Send + Sync {
    /// Create a spinner progress indicator
    fn create_spinner(&self) -> Box<dyn ProgressIndicator>;

    /// Print a message
    fn print(&self, message: &str);

    /// Print a styled message
    fn print_styled(&self, message: &str, style: MessageStyle);

    /// Check if running in interactive mode
    fn is_interactive(&self) -> bool;

    /// Prompt for text input
    fn prompt_input(&self, prompt: &str, default: Option<&str>) -> Result<String>;
}

/// Progress indicator trait
pub trait ProgressIndicator: Send + Sync {
    /// Set the message
    fn set_message(&self, message: &str);

    /// Finish and clear the progress
    fn finish_and_clear(&self);

    /// Enable steady tick
    fn enable_steady_tick(&self, duration: Duration);
}

/// Message styling options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    /// Unstyled text
    Normal,
    /// Bold text style
    Bold,
    /// Cyan colored text
    Cyan,
    /// Yellow colored text
    Yellow,
    /// Warning style (typically yellow)
    Warning,
    /// Error style (typically red)
    Error,
    /// Success style (typically green)
    Success,
}

// Production implementations

/// Production service backed by the generated API client
pub struct RealCodebreakerService {
    client: ApiClient,
    shut_down: AtomicBool,
}

impl RealCodebreakerService {
    /// Wrap an already configured client
    pub const fn new(client: ApiClient) -> Self {
        Self {
            client,
            shut_down: AtomicBool::new(false),
        }
    }

    /// Build the client from `config` and wrap it
    pub fn from_config(config: ApiConfig) -> Result<Self> {
        tracing::debug!("Connecting to Codebreaker service at {}", config.base_url);
        Ok(Self::new(api_client::create_client(config)?))
    }

    fn ensure_running(&self) -> Result<(), ServiceError> {
        if self.shut_down.load(Ordering::Acquire) {
            Err(ServiceError::ShutDown)
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl CodebreakerService for RealCodebreakerService {
    async fn start_game(&self, game: &types::Game) -> Result<types::Game, ServiceError> {
        self.ensure_running()?;
        tracing::debug!(pool = %game.pool, length = game.length, "POST /games");

        let started = self
            .client
            .start_game()
            .body(game.clone())
            .send()
            .await
            .map(ResponseValue::into_inner)
            .map_err(|e| ServiceError::from_api("start game", e))?;

        tracing::debug!(game_id = ?started.id, "Game started");
        Ok(started)
    }

    async fn get_game(&self, game_id: &str) -> Result<types::Game, ServiceError> {
        self.ensure_running()?;
        tracing::debug!("GET /games/{}", game_id);

        let game = self
            .client
            .get_game()
            .game_id(game_id)
            .send()
            .await
            .map(ResponseValue::into_inner)
            .map_err(|e| ServiceError::from_api(&format!("game {game_id}"), e))?;

        tracing::debug!(
            guesses = game.guesses.len(),
            solved = ?game.solved,
            "Game loaded"
        );
        Ok(game)
    }

    async fn delete_game(&self, game_id: &str) -> Result<(), ServiceError> {
        self.ensure_running()?;
        tracing::debug!("DELETE /games/{}", game_id);

        self.client
            .delete_game()
            .game_id(game_id)
            .send()
            .await
            .map(ResponseValue::into_inner)
            .map_err(|e| ServiceError::from_api(&format!("game {game_id}"), e))?;

        tracing::debug!(%game_id, "Game deleted");
        Ok(())
    }

    async fn submit_guess(
        &self,
        game: &types::Game,
        guess: &types::Guess,
    ) -> Result<types::Guess, ServiceError> {
        self.ensure_running()?;
        let game_id = game.id.as_deref().ok_or(ServiceError::NoActiveGame)?;
        tracing::debug!(text = %guess.text, "POST /games/{}/guesses", game_id);

        let scored = self
            .client
            .submit_guess()
            .game_id(game_id)
            .body(guess.clone())
            .send()
            .await
            .map(ResponseValue::into_inner)
            .map_err(|e| ServiceError::from_api(&format!("guess for game {game_id}"), e))?;

        tracing::debug!(
            exact = ?scored.exact_matches,
            near = ?scored.near_matches,
            solution = ?scored.solution,
            "Guess scored"
        );
        Ok(scored)
    }

    async fn get_guess(
        &self,
        game_id: &str,
        guess_id: &str,
    ) -> Result<types::Guess, ServiceError> {
        self.ensure_running()?;
        tracing::debug!("GET /games/{}/guesses/{}", game_id, guess_id);

        let guess = self
            .client
            .get_guess()
            .game_id(game_id)
            .guess_id(guess_id)
            .send()
            .await
            .map(ResponseValue::into_inner)
            .map_err(|e| ServiceError::from_api(&format!("guess {guess_id} of game {game_id}"), e))?;

        tracing::debug!(
            exact = ?guess.exact_matches,
            near = ?guess.near_matches,
            solution = ?guess.solution,
            "Guess loaded"
        );
        Ok(guess)
    }

    fn shutdown(&self) {
        if !self.shut_down.swap(true, Ordering::AcqRel) {
            tracing::debug!("Codebreaker service shut down");
        }
    }
}
