//! The command interpreter.
//!
//! [`GameEngine`] owns the world and turns each raw input line into at most one state
//! transition, writing everything the player should see through a [`Presenter`].

use crate::command::{CommandWord, parse_command};
use crate::config::EngineConfig;
use crate::repl::{
    eat_handler, go_back_handler, help_handler, look_handler, move_to_handler, quit_handler, test_handler,
};
use crate::view::Presenter;
use crate::world::ZuulWorld;

use anyhow::Result;
use log::error;

/// A running game session.
#[derive(Debug, Clone)]
pub struct GameEngine {
    pub world: ZuulWorld,
    pub config: EngineConfig,
    /// Number of `test` scripts currently being replayed.
    pub(crate) script_depth: usize,
}

impl GameEngine {
    pub fn new(world: ZuulWorld, config: EngineConfig) -> Self {
        Self {
            world,
            config,
            script_depth: 0,
        }
    }

    /// False once the player has quit. The caller should stop feeding input then.
    pub fn is_active(&self) -> bool {
        self.world.player.is_active()
    }

    /// Print out the opening message for the player.
    ///
    /// # Errors
    /// Returns an error if the player's room cannot be resolved.
    pub fn print_welcome(&self, view: &mut dyn Presenter) -> Result<()> {
        let room = self.world.player_room_ref()?;
        view.print("\n");
        view.println("Welcome to Adventure!");
        view.println("Adventure is a new, incredibly boring adventure game.");
        view.println("Type 'help' if you need help.");
        view.print("\n");
        view.println(&room.long_description());
        if let Some(image) = room.image() {
            view.show_image(image);
        }
        Ok(())
    }

    /// Replay the script `name` as a `test` command, without splitting the name on
    /// whitespace. Used for the script given on the command line.
    pub fn replay_script(&mut self, view: &mut dyn Presenter, name: &str) {
        if self.config.echo_input {
            view.println(&format!("test {name}"));
        }
        test_handler(self, view, Some(name));
        view.print("\n");
    }

    /// Echo, parse and execute one line of input.
    ///
    /// Every line ends with a blank separator line, whatever the outcome. Failures are
    /// reported to the player or logged; nothing is returned to the caller.
    pub fn interpret_command(&mut self, view: &mut dyn Presenter, line: &str) {
        if self.config.echo_input {
            view.println(line);
        }
        let command = parse_command(line);

        let result = match command.word {
            CommandWord::Help => {
                help_handler(view);
                Ok(())
            },
            CommandWord::Go => move_to_handler(&mut self.world, view, command.second_word.as_deref()),
            CommandWord::Quit => {
                quit_handler(&mut self.world, view, command.second_word.as_deref());
                Ok(())
            },
            CommandWord::Look => look_handler(&self.world, view),
            CommandWord::Eat => {
                eat_handler(view);
                Ok(())
            },
            CommandWord::Back => go_back_handler(&mut self.world, view, command.second_word.as_deref()),
            CommandWord::Test => {
                test_handler(self, view, command.second_word.as_deref());
                Ok(())
            },
            CommandWord::Unknown => {
                view.println("I don't know what you mean...");
                Ok(())
            },
        };
        if let Err(e) = result {
            error!("while interpreting {line:?}: {e:#}");
        }

        view.print("\n");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::View;
    use crate::loader::{LAB, OUTSIDE, THEATRE, load_world};

    fn engine() -> GameEngine {
        GameEngine::new(load_world().unwrap(), EngineConfig::default())
    }

    #[test]
    fn welcome_shows_start_room_and_image() {
        let engine = engine();
        let mut view = View::new();
        engine.print_welcome(&mut view).unwrap();
        assert_eq!(
            view.lines(),
            vec![
                "",
                "Welcome to Adventure!",
                "Adventure is a new, incredibly boring adventure game.",
                "Type 'help' if you need help.",
                "",
                "You are outside the main entrance of the university.",
                "Exits: east south west",
                "[image: outside.gif]",
            ]
        );
    }

    #[test]
    fn every_line_is_echoed_and_followed_by_a_blank() {
        let mut engine = engine();
        let mut view = View::new();
        engine.interpret_command(&mut view, "eat");
        assert_eq!(
            view.transcript(),
            "eat\nYou have eaten now and you are not hungry any more.\n\n"
        );
    }

    #[test]
    fn echo_can_be_disabled() {
        let mut engine = engine();
        engine.config.echo_input = false;
        let mut view = View::new();
        engine.interpret_command(&mut view, "xyzzy");
        assert_eq!(view.transcript(), "I don't know what you mean...\n\n");
    }

    #[test]
    fn unknown_command_leaves_state_alone() {
        let mut engine = engine();
        let before = engine.world.player.clone();
        let mut view = View::new();
        engine.interpret_command(&mut view, "dance east");
        assert_eq!(engine.world.player, before);
        assert!(view.lines().contains(&"I don't know what you mean...".to_string()));
    }

    #[test]
    fn go_and_back_dispatch_to_movement() {
        let mut engine = engine();
        let mut view = View::new();
        engine.interpret_command(&mut view, "go east");
        assert_eq!(engine.world.player.location, THEATRE);
        assert_eq!(engine.world.player.history, vec![OUTSIDE]);
        engine.interpret_command(&mut view, "back");
        assert_eq!(engine.world.player.location, OUTSIDE);
        assert!(engine.world.player.history.is_empty());
        engine.interpret_command(&mut view, "go south");
        assert_eq!(engine.world.player.location, LAB);
    }

    #[test]
    fn replay_script_keeps_whitespace_in_the_name() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("long walk.txt"), "go south\n").unwrap();
        let mut engine = engine();
        engine.config.script_root = dir.path().to_path_buf();
        let mut view = View::new();

        engine.replay_script(&mut view, "long walk.txt");
        assert_eq!(engine.world.player.location, LAB);
        assert_eq!(view.lines().first().map(String::as_str), Some("test long walk.txt"));
        assert!(!view.lines().contains(&"The file name is incorrect.".to_string()));
    }

    #[test]
    fn quit_deactivates() {
        let mut engine = engine();
        let mut view = View::new();
        engine.interpret_command(&mut view, "quit");
        assert!(!engine.is_active());
        assert!(!view.is_active());
    }
}
