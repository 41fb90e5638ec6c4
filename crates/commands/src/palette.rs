//! Display metadata for the symbols of a code pool

use console::Color;

use crate::settings::GameSettings;

/// One symbol of the pool with its display name and style class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteEntry {
    /// The symbol as it appears in codes and guesses
    pub symbol: char,
    /// Human readable name, e.g. "Red"
    pub name: String,
    /// Style class, mapped to a terminal colour by [`class_color`]
    pub class: String,
}

/// Lookup of names and style classes by pool symbol
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodePointInfo {
    entries: Vec<PaletteEntry>,
}

impl CodePointInfo {
    /// Pair each pool symbol with the name and class at the same position
    ///
    /// Pairing stops at the shortest of the three sequences.
    pub fn new<N, C>(pool: &str, names: N, classes: C) -> Self
    where
        N: IntoIterator,
        N::Item: Into<String>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        let entries = pool
            .chars()
            .zip(names)
            .zip(classes)
            .map(|((symbol, name), class)| PaletteEntry {
                symbol,
                name: name.into(),
                class: class.into(),
            })
            .collect();
        Self { entries }
    }

    /// Build from the pool, names and classes of the user settings
    pub fn from_settings(settings: &GameSettings) -> Self {
        Self::new(
            &settings.pool,
            settings.pool_names.iter().cloned(),
            settings.pool_classes.iter().cloned(),
        )
    }

    /// Entries in pool order
    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    /// Name of `symbol`, if it belongs to the pool
    pub fn name(&self, symbol: char) -> Option<&str> {
        self.entry(symbol).map(|entry| entry.name.as_str())
    }

    /// Style class of `symbol`, if it belongs to the pool
    pub fn style_class(&self, symbol: char) -> Option<&str> {
        self.entry(symbol).map(|entry| entry.class.as_str())
    }

    /// Terminal colour of `symbol`; symbols outside the pool are white
    pub fn color(&self, symbol: char) -> Color {
        self.style_class(symbol).map_or(Color::White, class_color)
    }

    fn entry(&self, symbol: char) -> Option<&PaletteEntry> {
        self.entries.iter().find(|entry| entry.symbol == symbol)
    }
}

/// First symbol of a name, used as its keyboard mnemonic
pub fn mnemonic(name: &str) -> Option<char> {
    name.chars().next()
}

/// Terminal colour for a style class
pub fn class_color(class: &str) -> Color {
    match class.trim().to_ascii_lowercase().as_str() {
        "red" => Color::Red,
        "orange" => Color::Color256(208),
        "yellow" => Color::Yellow,
        "green" => Color::Green,
        "blue" => Color::Blue,
        "indigo" => Color::Color256(54),
        "violet" | "purple" | "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "black" => Color::Black,
        _ => Color::White,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn info() -> CodePointInfo {
        CodePointInfo::new("RGB", ["Red", "Green", "Blue"], ["red", "green", "blue"])
    }

    #[test]
    fn test_lookup_by_symbol() {
        let info = info();
        assert_eq!(info.name('G'), Some("Green"));
        assert_eq!(info.style_class('B'), Some("blue"));
        assert_eq!(info.name('X'), None);
        assert_eq!(info.color('R'), Color::Red);
        assert_eq!(info.color('X'), Color::White);
    }

    #[test]
    fn test_pairing_stops_at_shortest() {
        let info = CodePointInfo::new("RGBY", ["Red", "Green"], ["red", "green", "blue"]);
        let symbols: Vec<char> = info.entries().iter().map(|e| e.symbol).collect();
        assert_eq!(symbols, vec!['R', 'G']);
    }

    #[test]
    fn test_from_settings_uses_defaults() {
        let settings = GameSettings::default();
        let info = CodePointInfo::from_settings(&settings);
        assert_eq!(info.entries().len(), settings.pool.chars().count());
    }

    #[rstest]
    #[case("Red", Some('R'))]
    #[case("élan", Some('é'))]
    #[case("", None)]
    fn test_mnemonic(#[case] name: &str, #[case] expected: Option<char>) {
        assert_eq!(mnemonic(name), expected);
    }

    #[rstest]
    #[case("red", Color::Red)]
    #[case(" Violet ", Color::Magenta)]
    #[case("orange", Color::Color256(208))]
    #[case("plaid", Color::White)]
    fn test_class_color(#[case] class: &str, #[case] expected: Color) {
        assert_eq!(class_color(class), expected);
    }
}
