//! Observable game state between the Codebreaker service and the front end
//!
//! [`GameViewModel`] owns the current [`Game`], the most recent [`Guess`],
//! the solved flag and the last error. Front ends register observers for each
//! of these; an observer registered after a value is known is called with it
//! immediately. Observers run synchronously after the state has changed and
//! never while a lock is held, so they may call back into the view model's
//! accessors.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use codebreaker_runtime::api_client::types::{Game, Guess};
use codebreaker_runtime::{CodebreakerService, ServiceError};

/// Callback for game changes; `None` once the current game is deleted
pub type GameObserver = Arc<dyn Fn(Option<&Game>) + Send + Sync>;
/// Callback for the most recent guess
pub type GuessObserver = Arc<dyn Fn(&Guess) + Send + Sync>;
/// Callback for the solved state of the current game
pub type SolvedObserver = Arc<dyn Fn(bool) + Send + Sync>;
/// Callback for failed operations
pub type ErrorObserver = Arc<dyn Fn(&ServiceError) + Send + Sync>;

#[derive(Default)]
struct State {
    game: Option<Game>,
    guess: Option<Guess>,
    solved: Option<bool>,
    error: Option<ServiceError>,
}

#[derive(Default)]
struct Observers {
    game: Vec<GameObserver>,
    guess: Vec<GuessObserver>,
    solved: Vec<SolvedObserver>,
    error: Vec<ErrorObserver>,
}

/// View model coordinating game state between the service and the UI
pub struct GameViewModel {
    service: Arc<dyn CodebreakerService>,
    state: Mutex<State>,
    observers: Mutex<Observers>,
}

impl GameViewModel {
    /// Create a view model with no game loaded
    pub fn new(service: Arc<dyn CodebreakerService>) -> Self {
        Self {
            service,
            state: Mutex::new(State::default()),
            observers: Mutex::new(Observers::default()),
        }
    }

    /// Start a new game with the given pool and code length
    ///
    /// Game and solved observers are notified with the created game.
    pub async fn start_game(&self, pool: &str, length: i32) -> Result<Game, ServiceError> {
        let request = Game::try_from(Game::builder().pool(pool).length(length))
            .map_err(|e| ServiceError::InvalidRequest(e.to_string()));
        let request = self.settle(request)?;

        let game = self.settle(self.service.start_game(&request).await)?;
        tracing::info!(game_id = ?game.id, "Started game");
        self.publish_game(game.clone());
        Ok(game)
    }

    /// Load an existing game and make it the current game
    pub async fn load_game(&self, game_id: &str) -> Result<Game, ServiceError> {
        let game = self.settle(self.service.get_game(game_id).await)?;
        self.publish_game(game.clone());
        Ok(game)
    }

    /// Delete a game by id without touching the current game
    pub async fn delete_game(&self, game_id: &str) -> Result<(), ServiceError> {
        self.settle(self.service.delete_game(game_id).await)
    }

    /// Delete the current game, then clear it
    ///
    /// Game observers are notified with `None`.
    pub async fn delete_current_game(&self) -> Result<(), ServiceError> {
        let game_id = self.settle(self.current_game_id())?;
        self.settle(self.service.delete_game(&game_id).await)?;
        tracing::info!(%game_id, "Deleted game");
        self.set_game(None);
        Ok(())
    }

    /// Submit a guess for the current game
    ///
    /// The guess is checked against the game's length and pool before it is
    /// sent. When the scored guess is the solution the whole game is
    /// reloaded; otherwise the guess is appended to the current game's
    /// history and game observers are notified.
    pub async fn submit_guess(&self, text: &str) -> Result<Guess, ServiceError> {
        let current = self.state().game.clone();
        let game = self.settle(current.ok_or(ServiceError::NoActiveGame))?;
        self.settle(validate_guess(&game, text))?;

        let request = Guess::try_from(Guess::builder().text(text))
            .map_err(|e| ServiceError::InvalidRequest(e.to_string()));
        let request = self.settle(request)?;

        let scored = self.settle(self.service.submit_guess(&game, &request).await)?;
        self.set_guess(scored.clone());

        if scored.solution == Some(true) {
            let game_id = self.settle(game.id.clone().ok_or(ServiceError::NoActiveGame))?;
            self.load_game(&game_id).await?;
        } else {
            let mut game = game;
            game.guesses.push(scored.clone());
            self.set_game(Some(game));
        }

        Ok(scored)
    }

    /// Load a guess of the current game and publish it to guess observers
    pub async fn load_guess(&self, guess_id: &str) -> Result<Guess, ServiceError> {
        let game_id = self.settle(self.current_game_id())?;
        let guess = self.settle(self.service.get_guess(&game_id, guess_id).await)?;
        self.set_guess(guess.clone());
        Ok(guess)
    }

    /// Shut down the underlying service
    pub fn shutdown(&self) {
        self.service.shutdown();
    }

    /// The current game, if any
    pub fn game(&self) -> Option<Game> {
        self.state().game.clone()
    }

    /// The most recent guess, if any
    pub fn guess(&self) -> Option<Guess> {
        self.state().guess.clone()
    }

    /// Whether the current game is solved, once known
    pub fn solved(&self) -> Option<bool> {
        self.state().solved
    }

    /// The last recorded error, if any
    pub fn error(&self) -> Option<ServiceError> {
        self.state().error.clone()
    }

    /// Register a game observer; called at once if a game is loaded
    pub fn register_game_observer<F>(&self, observer: F)
    where
        F: Fn(Option<&Game>) + Send + Sync + 'static,
    {
        let observer: GameObserver = Arc::new(observer);
        self.observers().game.push(Arc::clone(&observer));
        let current = self.state().game.clone();
        if let Some(game) = current {
            observer(Some(&game));
        }
    }

    /// Register a guess observer; called at once if a guess is known
    pub fn register_guess_observer<F>(&self, observer: F)
    where
        F: Fn(&Guess) + Send + Sync + 'static,
    {
        let observer: GuessObserver = Arc::new(observer);
        self.observers().guess.push(Arc::clone(&observer));
        let current = self.state().guess.clone();
        if let Some(guess) = current {
            observer(&guess);
        }
    }

    /// Register a solved-state observer; called at once if the state is known
    pub fn register_solved_observer<F>(&self, observer: F)
    where
        F: Fn(bool) + Send + Sync + 'static,
    {
        let observer: SolvedObserver = Arc::new(observer);
        self.observers().solved.push(Arc::clone(&observer));
        let current = self.state().solved;
        if let Some(solved) = current {
            observer(solved);
        }
    }

    /// Register an error observer; called at once if an error was recorded
    pub fn register_error_observer<F>(&self, observer: F)
    where
        F: Fn(&ServiceError) + Send + Sync + 'static,
    {
        let observer: ErrorObserver = Arc::new(observer);
        self.observers().error.push(Arc::clone(&observer));
        let current = self.state().error.clone();
        if let Some(error) = current {
            observer(&error);
        }
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn observers(&self) -> MutexGuard<'_, Observers> {
        self.observers.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn current_game_id(&self) -> Result<String, ServiceError> {
        self.state()
            .game
            .as_ref()
            .and_then(|game| game.id.clone())
            .ok_or(ServiceError::NoActiveGame)
    }

    /// Record and broadcast the error of a failed step
    fn settle<T>(&self, result: Result<T, ServiceError>) -> Result<T, ServiceError> {
        result.map_err(|error| {
            tracing::debug!("Game operation failed: {}", error);
            self.set_error(&error);
            error
        })
    }

    fn publish_game(&self, game: Game) {
        let solved = game.solved.unwrap_or(false);
        self.set_game(Some(game));
        self.set_solved(solved);
    }

    fn set_game(&self, game: Option<Game>) {
        self.state().game.clone_from(&game);
        let observers = self.observers().game.clone();
        for observer in &observers {
            observer(game.as_ref());
        }
    }

    fn set_guess(&self, guess: Guess) {
        self.state().guess = Some(guess.clone());
        let observers = self.observers().guess.clone();
        for observer in &observers {
            observer(&guess);
        }
    }

    fn set_solved(&self, solved: bool) {
        self.state().solved = Some(solved);
        let observers = self.observers().solved.clone();
        for observer in &observers {
            observer(solved);
        }
    }

    fn set_error(&self, error: &ServiceError) {
        self.state().error = Some(error.clone());
        let observers = self.observers().error.clone();
        for observer in &observers {
            observer(error);
        }
    }
}

/// Check a guess against a game before it is sent
///
/// A guess must have exactly `game.length` symbols, all drawn from
/// `game.pool`, and the game must not be solved yet.
pub fn validate_guess(game: &Game, text: &str) -> Result<(), ServiceError> {
    if game.solved == Some(true) {
        return Err(ServiceError::InvalidGuess(
            "the game is already solved".to_string(),
        ));
    }

    let count = text.chars().count();
    if i64::try_from(count).ok() != Some(i64::from(game.length)) {
        return Err(ServiceError::InvalidGuess(format!(
            "expected {} symbols, got {}",
            game.length, count
        )));
    }

    if let Some(symbol) = text.chars().find(|symbol| !game.pool.contains(*symbol)) {
        return Err(ServiceError::InvalidGuess(format!(
            "'{}' is not one of {}",
            symbol, game.pool
        )));
    }

    Ok(())
}

#[cfg(test)]
#[path = "view_model_tests.rs"]
mod tests;
