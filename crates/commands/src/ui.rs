//! Terminal front end: styled output, line prompts and request spinners

use std::time::Duration;

use anyhow::{Context, Result};
use console::{StyledObject, Term, style};
use dialoguer::Input;
use dialoguer::theme::ColorfulTheme;
use indicatif::{ProgressBar, ProgressStyle};

use codebreaker_runtime::deps::{MessageStyle, ProgressIndicator, UserInterface};

const SPINNER_TEMPLATE: &str = "{spinner:.cyan} {msg}";
const SPINNER_FRAMES: &str = "◐◓◑◒ ";

/// Apply a message style to `message`
fn styled(message: &str, msg_style: MessageStyle) -> StyledObject<&str> {
    let text = style(message);
    match msg_style {
        MessageStyle::Normal => text,
        MessageStyle::Bold => text.bold(),
        MessageStyle::Cyan => text.cyan(),
        MessageStyle::Yellow => text.yellow(),
        MessageStyle::Warning => text.yellow().bold(),
        MessageStyle::Error => text.red().bold(),
        MessageStyle::Success => text.green().bold(),
    }
}

/// Terminal user interface used by every command
pub struct RealUserInterface;

impl UserInterface for RealUserInterface {
    fn create_spinner(&self) -> Box<dyn ProgressIndicator> {
        let bar = ProgressBar::new_spinner();
        if let Ok(spinner) = ProgressStyle::default_spinner().template(SPINNER_TEMPLATE) {
            bar.set_style(spinner.tick_chars(SPINNER_FRAMES));
        }
        Box::new(Spinner(bar))
    }

    fn print(&self, message: &str) {
        println!("{message}");
    }

    fn print_styled(&self, message: &str, msg_style: MessageStyle) {
        println!("{}", styled(message, msg_style));
    }

    fn is_interactive(&self) -> bool {
        Term::stdout().is_term()
    }

    fn prompt_input(&self, prompt: &str, default: Option<&str>) -> Result<String> {
        let theme = ColorfulTheme::default();
        // Empty answers reach the caller, which decides whether to ask again
        let input = Input::<String>::with_theme(&theme)
            .with_prompt(prompt)
            .allow_empty(true);
        let input = match default {
            Some(value) => input.default(value.to_string()),
            None => input,
        };

        input
            .interact_text()
            .with_context(|| format!("Failed to read answer to '{prompt}'"))
    }
}

/// Spinner shown while a service request is in flight
struct Spinner(ProgressBar);

impl ProgressIndicator for Spinner {
    fn set_message(&self, message: &str) {
        self.0.set_message(message.to_string());
    }

    fn finish_and_clear(&self) {
        self.0.finish_and_clear();
    }

    fn enable_steady_tick(&self, duration: Duration) {
        self.0.enable_steady_tick(duration);
    }
}
