//! Text rendering of games, guesses and the symbol palette

use console::style;

use codebreaker_runtime::api_client::types::{Game, Guess};

use crate::palette::{CodePointInfo, mnemonic};

const EMPTY_SLOT: &str = "·";

/// Symbols of `text`, each coloured by its style class
pub fn render_symbols(text: &str, info: &CodePointInfo) -> String {
    text.chars()
        .map(|symbol| style(symbol).fg(info.color(symbol)).bold().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// One line of guess history: the symbols followed by the score
pub fn render_guess(guess: &Guess, info: &CodePointInfo) -> String {
    format!(
        "{}   exact: {}  near: {}",
        render_symbols(&guess.text, info),
        guess.exact_matches.unwrap_or(0),
        guess.near_matches.unwrap_or(0)
    )
}

/// One slot per code position, filled with the most recent guess
pub fn render_slots(game: &Game, info: &CodePointInfo) -> String {
    let last: Vec<char> = game
        .guesses
        .last()
        .map(|guess| guess.text.chars().collect())
        .unwrap_or_default();
    let length = usize::try_from(game.length).unwrap_or(0);

    (0..length)
        .map(|position| match last.get(position) {
            Some(&symbol) => format!("[{}]", style(symbol).fg(info.color(symbol)).bold()),
            None => format!("[{EMPTY_SLOT}]"),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Summary line, guess history and slots of a game
pub fn render_game(game: &Game, info: &CodePointInfo) -> Vec<String> {
    let state = if game.solved == Some(true) {
        style("solved").green().bold().to_string()
    } else {
        style("in progress").yellow().to_string()
    };

    let mut lines = vec![format!(
        "Game {} ({}): pool {}, length {}, {} guess{}",
        game.id.as_deref().unwrap_or("<unsaved>"),
        state,
        game.pool,
        game.length,
        game.guesses.len(),
        if game.guesses.len() == 1 { "" } else { "es" }
    )];

    lines.extend(
        game.guesses
            .iter()
            .enumerate()
            .map(|(index, guess)| format!("{:>3}. {}", index + 1, render_guess(guess, info))),
    );

    lines.push(render_slots(game, info));
    lines
}

/// One line per pool symbol: the coloured symbol and its name
pub fn render_palette(info: &CodePointInfo) -> Vec<String> {
    info.entries()
        .iter()
        .map(|entry| {
            let label = match mnemonic(&entry.name) {
                Some(first) => format!("[{first}]{}", &entry.name[first.len_utf8()..]),
                None => String::new(),
            };
            format!(
                "{}  {}",
                style(entry.symbol).fg(info.color(entry.symbol)).bold(),
                label
            )
        })
        .collect()
}
