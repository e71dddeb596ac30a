//! Terminal input for the Zuul REPL.
//!
//! Uses a rustyline editor with persistent history and tab completion when stdin is
//! a terminal, and plain line reads otherwise.

use std::fs;
use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};

use lazy_static::lazy_static;
use log::{info, warn};
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};

use crate::command::VOCABULARY;

/// What one read from the player produced.
pub enum InputEvent {
    Line(String),
    Eof,
    Interrupted,
}

lazy_static! {
    /// Command words in alphabetical order, as offered by tab completion.
    static ref COMMAND_TERMS: Vec<&'static str> = {
        let mut terms: Vec<_> = VOCABULARY.iter().map(|(word, _)| *word).collect();
        terms.sort_unstable();
        terms
    };
}

/// Completes command words, and script names after `test `.
struct ZuulHelper {
    script_root: PathBuf,
}

impl Helper for ZuulHelper {}
impl Highlighter for ZuulHelper {}
impl Validator for ZuulHelper {}
impl Hinter for ZuulHelper {
    type Hint = String;
}

impl Completer for ZuulHelper {
    type Candidate = Pair;

    fn complete(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> rustyline::Result<(usize, Vec<Pair>)> {
        Ok(completions(&self.script_root, &line[..pos]))
    }
}

/// Replacement start and candidates for the text left of the cursor.
fn completions(script_root: &Path, typed: &str) -> (usize, Vec<Pair>) {
    let word = typed.trim_start();
    let start = typed.len() - word.len();

    if let Some(rest) = word.strip_prefix("test")
        && rest.starts_with(char::is_whitespace)
    {
        let partial = rest.trim_start();
        let names = script_names(script_root).into_iter().filter(|name| name.starts_with(partial));
        return (typed.len() - partial.len(), names.map(candidate).collect());
    }
    if word.is_empty() || word.contains(char::is_whitespace) {
        return (start, Vec::new());
    }
    let terms = COMMAND_TERMS.iter().filter(|term| term.starts_with(word));
    (start, terms.map(|term| candidate((*term).to_string())).collect())
}

fn candidate(text: String) -> Pair {
    Pair {
        display: text.clone(),
        replacement: text,
    }
}

/// Plain files directly under the script root, sorted by name.
fn script_names(script_root: &Path) -> Vec<String> {
    let entries = match fs::read_dir(script_root) {
        Ok(entries) => entries,
        Err(err) => {
            warn!("cannot list scripts in {} for completion: {err}", script_root.display());
            return Vec::new();
        },
    };
    let mut names: Vec<String> = entries
        .filter_map(Result::ok)
        .filter(|entry| entry.path().is_file())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .collect();
    names.sort();
    names
}

/// Reads player input, through rustyline while it keeps working.
pub struct InputManager {
    editor: Option<Editor<ZuulHelper, DefaultHistory>>,
    history_path: Option<PathBuf>,
}

impl InputManager {
    pub fn new(script_root: &Path) -> Self {
        let history_path = history_file_path();
        let editor = if io::stdin().is_terminal() {
            match open_editor(script_root, history_path.as_deref()) {
                Ok(editor) => Some(editor),
                Err(err) => {
                    warn!("rustyline unavailable ({err}), reading plain stdin");
                    None
                },
            }
        } else {
            info!("stdin is not a terminal, reading plain stdin");
            None
        };
        Self { editor, history_path }
    }

    /// Read one line. If rustyline fails, it is dropped and the read is retried on
    /// plain stdin.
    ///
    /// # Errors
    /// Returns the error from plain stdin if that read fails too.
    pub fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        let Some(editor) = self.editor.as_mut() else {
            return read_plain(prompt);
        };
        match editor.readline(prompt) {
            Ok(line) => {
                remember(editor, self.history_path.as_deref(), &line);
                Ok(InputEvent::Line(line))
            },
            Err(err) => match convert_readline_error(err) {
                Ok(event) => Ok(event),
                Err(err) => {
                    warn!("rustyline failed ({err}), switching to plain stdin");
                    self.editor = None;
                    read_plain(prompt)
                },
            },
        }
    }
}

fn open_editor(script_root: &Path, history: Option<&Path>) -> rustyline::Result<Editor<ZuulHelper, DefaultHistory>> {
    let mut editor = Editor::new()?;
    editor.set_helper(Some(ZuulHelper {
        script_root: script_root.to_path_buf(),
    }));
    if let Some(path) = history {
        if let Some(dir) = path.parent()
            && let Err(err) = fs::create_dir_all(dir)
        {
            warn!("cannot create history directory {}: {err}", dir.display());
        }
        match editor.load_history(path) {
            Ok(()) => info!("loaded input history from {}", path.display()),
            Err(ReadlineError::Io(err)) if err.kind() == io::ErrorKind::NotFound => {},
            Err(err) => warn!("ignoring history at {}: {err}", path.display()),
        }
    }
    Ok(editor)
}

/// Add a non-blank line to the history and write the history out.
fn remember(editor: &mut Editor<ZuulHelper, DefaultHistory>, history: Option<&Path>, line: &str) {
    if line.trim().is_empty() {
        return;
    }
    let saved = editor
        .add_history_entry(line)
        .and_then(|_| history.map_or(Ok(()), |path| editor.save_history(path)));
    if let Err(err) = saved {
        warn!("input history not saved: {err}");
    }
}

fn read_plain(prompt: &str) -> io::Result<InputEvent> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(InputEvent::Eof);
    }
    let trimmed = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed);
    Ok(InputEvent::Line(line))
}

fn convert_readline_error(err: ReadlineError) -> io::Result<InputEvent> {
    match err {
        ReadlineError::Interrupted => Ok(InputEvent::Interrupted),
        ReadlineError::Eof => Ok(InputEvent::Eof),
        ReadlineError::Io(err) => Err(err),
        other => Err(io::Error::other(other)),
    }
}

fn history_file_path() -> Option<PathBuf> {
    dirs::data_dir()
        .or_else(dirs::data_local_dir)
        .map(|base| build_history_path(&base))
}

fn build_history_path(base: &Path) -> PathBuf {
    base.join("zuul_engine").join("history.txt")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn replacements(pairs: Vec<Pair>) -> Vec<String> {
        pairs.into_iter().map(|pair| pair.replacement).collect()
    }

    #[test]
    fn converts_readline_ctrl_c_to_interrupt() {
        let result = convert_readline_error(ReadlineError::Interrupted).unwrap();
        assert!(matches!(result, InputEvent::Interrupted));
    }

    #[test]
    fn converts_readline_eof() {
        let result = convert_readline_error(ReadlineError::Eof).unwrap();
        assert!(matches!(result, InputEvent::Eof));
    }

    #[test]
    fn history_path_appends_components() {
        let path = build_history_path(Path::new("/tmp/zuul-test"));
        assert!(path.ends_with(Path::new("zuul_engine/history.txt")));
    }

    #[test]
    fn command_terms_cover_vocabulary() {
        assert_eq!(COMMAND_TERMS.len(), VOCABULARY.len());
        assert!(COMMAND_TERMS.contains(&"back"));
        assert!(COMMAND_TERMS.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn first_word_completes_from_vocabulary() {
        let dir = tempfile::tempdir().unwrap();
        let (start, pairs) = completions(dir.path(), "  e");
        assert_eq!(start, 2);
        assert_eq!(replacements(pairs), vec!["eat"]);

        let (_, pairs) = completions(dir.path(), "go e");
        assert!(pairs.is_empty());
        let (_, pairs) = completions(dir.path(), "");
        assert!(pairs.is_empty());
    }

    #[test]
    fn test_completion_lists_matching_scripts() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("walk.txt"), "go east\n").unwrap();
        fs::write(dir.path().join("wander.txt"), "look\n").unwrap();
        fs::write(dir.path().join("other.txt"), "eat\n").unwrap();

        let (offset, pairs) = completions(dir.path(), "test wa");
        assert_eq!(offset, 5);
        assert_eq!(replacements(pairs), vec!["walk.txt", "wander.txt"]);
    }

    #[test]
    fn testing_is_not_the_test_command() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("walk.txt"), "go east\n").unwrap();
        let (_, pairs) = completions(dir.path(), "testing");
        assert!(pairs.is_empty());
    }
}
