//! Test helper utilities and mock implementations

use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use mockall::mock;
use serde_json::json;

use codebreaker_runtime::api_client::types;
use codebreaker_runtime::deps::*;
use codebreaker_runtime::ServiceError;

// Mock implementations using mockall
mock! {
    pub CodebreakerServiceMock {}

    #[async_trait]
    impl CodebreakerService for CodebreakerServiceMock {
        async fn start_game(&self, game: &types::Game) -> Result<types::Game, ServiceError>;
        async fn get_game(&self, game_id: &str) -> Result<types::Game, ServiceError>;
        async fn delete_game(&self, game_id: &str) -> Result<(), ServiceError>;
        async fn submit_guess(&self, game: &types::Game, guess: &types::Guess) -> Result<types::Guess, ServiceError>;
        async fn get_guess(&self, game_id: &str, guess_id: &str) -> Result<types::Guess, ServiceError>;
        fn shutdown(&self);
    }
}

/// A game as the service returns it
pub fn test_game(id: &str, pool: &str, length: i32, guesses: &[types::Guess]) -> types::Game {
    serde_json::from_value(json!({
        "id": id,
        "created": "2026-02-19T10:15:30Z",
        "pool": pool,
        "length": length,
        "solved": guesses.iter().any(|g| g.solution == Some(true)),
        "guesses": guesses,
    }))
    .unwrap()
}

/// A scored guess as the service returns it
pub fn test_guess(id: &str, text: &str, exact: i32, near: i32, solution: bool) -> types::Guess {
    serde_json::from_value(json!({
        "id": id,
        "created": "2026-02-19T10:16:00Z",
        "text": text,
        "exactMatches": exact,
        "nearMatches": near,
        "solution": solution,
    }))
    .unwrap()
}

/// Test UI implementation that captures output
pub struct TestUserInterface {
    pub output: Arc<Mutex<Vec<String>>>,
    pub styled_output: Arc<Mutex<Vec<(String, MessageStyle)>>>,
    inputs: Mutex<Vec<String>>,
    interactive: bool,
}

impl TestUserInterface {
    pub fn new() -> Self {
        Self {
            output: Arc::new(Mutex::new(Vec::new())),
            styled_output: Arc::new(Mutex::new(Vec::new())),
            inputs: Mutex::new(Vec::new()),
            interactive: false,
        }
    }

    /// Interactive UI answering prompts with `inputs`, in order
    pub fn with_inputs(inputs: &[&str]) -> Self {
        let mut ui = Self::new();
        ui.interactive = true;
        *ui.inputs.lock().unwrap() = inputs.iter().rev().map(|s| (*s).to_string()).collect();
        ui
    }

    pub fn get_output(&self) -> Vec<String> {
        self.output.lock().unwrap().clone()
    }

    pub fn get_styled_output(&self) -> Vec<(String, MessageStyle)> {
        self.styled_output.lock().unwrap().clone()
    }

    /// Output lines with terminal styling removed
    pub fn plain_output(&self) -> Vec<String> {
        self.get_output()
            .iter()
            .map(|line| console::strip_ansi_codes(line).into_owned())
            .collect()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.plain_output().iter().any(|line| line.contains(needle))
    }
}

impl UserInterface for TestUserInterface {
    fn create_spinner(&self) -> Box<dyn ProgressIndicator> {
        Box::new(TestProgressIndicator)
    }

    fn print(&self, message: &str) {
        self.output.lock().unwrap().push(message.to_string());
    }

    fn print_styled(&self, message: &str, style: MessageStyle) {
        // Add to both styled output and regular output for easier testing
        self.styled_output
            .lock()
            .unwrap()
            .push((message.to_string(), style));
        self.output.lock().unwrap().push(message.to_string());
    }

    fn is_interactive(&self) -> bool {
        self.interactive
    }

    fn prompt_input(&self, _prompt: &str, default: Option<&str>) -> Result<String> {
        match self.inputs.lock().unwrap().pop() {
            Some(input) => Ok(input),
            None => default
                .map(str::to_string)
                .ok_or_else(|| anyhow::anyhow!("No more test input")),
        }
    }
}

struct TestProgressIndicator;

impl ProgressIndicator for TestProgressIndicator {
    fn set_message(&self, _message: &str) {}

    fn finish_and_clear(&self) {}

    fn enable_steady_tick(&self, _duration: Duration) {}
}
