//! `repl::system` module
//!
//! Contains handlers for commands about the game itself rather than the world.

use crate::command::show_commands;
use crate::view::Presenter;
use crate::world::ZuulWorld;

use log::info;

/// Print out some help information: a cryptic message and the list of command words.
pub fn help_handler(view: &mut dyn Presenter) {
    view.println("You are lost. You are alone. You wander");
    view.println("around at Monash Uni, Peninsula Campus.\n");
    view.print("Your command words are: ");
    view.println(&show_commands());
}

/// Quit the game, unless something follows the word "quit".
pub fn quit_handler(world: &mut ZuulWorld, view: &mut dyn Presenter, extra: Option<&str>) {
    if extra.is_some() {
        view.println("Quit what?");
        return;
    }
    info!(
        "player quit in room {} after leaving {} rooms behind",
        world.player.location.index(),
        world.player.history.len()
    );
    view.println("Thank you for playing.  Good bye.");
    world.player.deactivate();
    view.set_active(false);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::load_world;
    use crate::{View, ViewItem};

    #[test]
    fn help_lists_command_words() {
        let mut view = View::new();
        help_handler(&mut view);
        assert_eq!(
            view.lines(),
            vec![
                "You are lost. You are alone. You wander",
                "around at Monash Uni, Peninsula Campus.",
                "",
                "Your command words are: help go quit look eat back test",
            ]
        );
    }

    #[test]
    fn quit_with_second_word_keeps_playing() {
        let mut world = load_world().unwrap();
        let mut view = View::new();
        quit_handler(&mut world, &mut view, Some("now"));
        assert!(world.player.is_active());
        assert!(view.is_active());
        assert_eq!(view.lines(), vec!["Quit what?"]);
    }

    #[test]
    fn quit_alone_ends_the_session_once() {
        let mut world = load_world().unwrap();
        let mut view = View::new();
        quit_handler(&mut world, &mut view, None);
        assert!(!world.player.is_active());
        assert_eq!(view.lines(), vec!["Thank you for playing.  Good bye."]);
        assert_eq!(
            view.items.iter().filter(|item| **item == ViewItem::Active(false)).count(),
            1
        );
    }
}
