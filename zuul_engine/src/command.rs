//! Command module
//!
//! Turns a raw input line into a [`Command`]: a recognized command word plus an optional
//! second word. The grammar is deliberately tiny; only the first two whitespace-separated
//! tokens are ever looked at.
use log::debug;
use variantly::Variantly;

/// The closed set of words the game understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Variantly)]
pub enum CommandWord {
    Help,
    Go,
    Quit,
    Look,
    Eat,
    Back,
    Test,
    Unknown,
}

/// Spelling of every recognized command word, in help-listing order.
pub const VOCABULARY: [(&str, CommandWord); 7] = [
    ("help", CommandWord::Help),
    ("go", CommandWord::Go),
    ("quit", CommandWord::Quit),
    ("look", CommandWord::Look),
    ("eat", CommandWord::Eat),
    ("back", CommandWord::Back),
    ("test", CommandWord::Test),
];

impl CommandWord {
    /// Classify a single token. Anything outside the vocabulary is `Unknown`.
    pub fn from_token(token: &str) -> Self {
        VOCABULARY
            .iter()
            .find(|(word, _)| *word == token)
            .map_or(CommandWord::Unknown, |(_, kind)| *kind)
    }

    /// Spelling of this command word, or `None` for `Unknown`.
    pub fn as_str(self) -> Option<&'static str> {
        VOCABULARY
            .iter()
            .find(|(_, kind)| *kind == self)
            .map(|(word, _)| *word)
    }
}

/// One parsed line of player input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub word: CommandWord,
    pub second_word: Option<String>,
}
impl Command {
    pub fn new(word: CommandWord, second_word: Option<String>) -> Self {
        Self { word, second_word }
    }

    pub fn is_unknown(&self) -> bool {
        self.word.is_unknown()
    }

    pub fn has_second_word(&self) -> bool {
        self.second_word.is_some()
    }
}

/// Parses an input string into a `Command`.
///
/// Tokens past the second are ignored. An empty line yields an unknown command with no
/// second word.
pub fn parse_command(input: &str) -> Command {
    let mut tokens = input.split_whitespace();
    let word = tokens.next().map_or(CommandWord::Unknown, CommandWord::from_token);
    let second_word = tokens.next().map(str::to_string);
    let command = Command::new(word, second_word);
    debug!("parsed {input:?} as {command:?}");
    command
}

/// All command words on one line, separated by spaces.
pub fn show_commands() -> String {
    VOCABULARY.iter().map(|(word, _)| *word).collect::<Vec<_>>().join(" ")
}
