//! REPL and command handling utilities.
//!
//! The game runs in a read-eval-print loop. This module and its submodules
//! implement the command handlers the [`GameEngine`] dispatches to.

mod input;
pub mod look;
pub mod movement;
pub mod script;
pub mod system;

pub use look::*;
pub use movement::*;
pub use script::*;
pub use system::*;

use crate::engine::GameEngine;
use crate::style::GameStyle;
use crate::view::{Presenter, View};

use anyhow::Result;
use log::info;

use input::{InputEvent, InputManager};

const PROMPT: &str = "> ";

/// Run the main read–eval–print loop until the player quits or input runs out.
///
/// End of input is treated as typing `quit`.
///
/// # Errors
/// - if reading from stdin fails in both the interactive and the plain backend
pub fn run_repl(engine: &mut GameEngine, view: &mut View) -> Result<()> {
    let mut input_manager = InputManager::new(&engine.config.script_root);
    let prompt = PROMPT.prompt_style().to_string();

    while engine.is_active() {
        let input = match input_manager.read_line(&prompt)? {
            InputEvent::Line(line) => line,
            InputEvent::Eof => "quit".to_string(),
            InputEvent::Interrupted => {
                view.println(&"Command canceled.".error_style().to_string());
                view.flush();
                continue;
            },
        };
        engine.interpret_command(view, &input);
        view.flush();
    }
    info!("leaving the REPL");
    Ok(())
}
