//! Console commands typed by the user.

use std::str::FromStr;

use snackflow_bridge::showcase::Showcase;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// A demo button, by its menu number.
    Show(Showcase),
    PerformAction,
    Dismiss,
    Stop,
    Start,
    Rotate,
    Locale(String),
    Help,
    Quit,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("no snackbar number {0}, pick 1-{max}", max = Showcase::ALL.len())]
    UnknownShowcase(usize),
    #[error("`locale` needs a locale id, e.g. `locale my`")]
    MissingLocale,
    #[error("unknown command `{0}`, type `help` for the menu")]
    Unknown(String),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(word) = words.next() else {
            return Ok(Command::Help);
        };

        if let Ok(index) = word.parse::<usize>() {
            return Showcase::from_menu_index(index)
                .map(Command::Show)
                .ok_or(CommandError::UnknownShowcase(index));
        }

        match word.to_lowercase().as_str() {
            "a" => Ok(Command::PerformAction),
            "d" => Ok(Command::Dismiss),
            "stop" => Ok(Command::Stop),
            "start" => Ok(Command::Start),
            "rotate" => Ok(Command::Rotate),
            "locale" => words
                .next()
                .map(|locale| Command::Locale(locale.to_string()))
                .ok_or(CommandError::MissingLocale),
            "help" | "?" => Ok(Command::Help),
            "quit" | "q" | "exit" => Ok(Command::Quit),
            _ => Err(CommandError::Unknown(word.to_string())),
        }
    }
}
