//! Observation handlers.
//!
//! Neither command here changes the world; they only describe it.

use crate::view::Presenter;
use crate::world::ZuulWorld;

use anyhow::Result;
use log::info;

/// Shows description of surroundings.
///
/// # Errors
/// Returns an error if the player's current room cannot be resolved.
pub fn look_handler(world: &ZuulWorld, view: &mut dyn Presenter) -> Result<()> {
    let room = world.player_room_ref()?;
    view.println(&room.long_description());
    info!("player looked around room {}", world.player.location.index());
    Ok(())
}

/// There is no hunger to satisfy; eating only produces a message.
pub fn eat_handler(view: &mut dyn Presenter) {
    view.println("You have eaten now and you are not hungry any more.");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::View;
    use crate::loader::load_world;

    #[test]
    fn look_repeats_room_description_without_image() {
        let world = load_world().unwrap();
        let mut view = View::new();
        look_handler(&world, &mut view).unwrap();
        assert_eq!(
            view.lines(),
            vec!["You are outside the main entrance of the university.", "Exits: east south west"]
        );
    }

    #[test]
    fn eat_is_only_a_message() {
        let mut view = View::new();
        eat_handler(&mut view);
        assert_eq!(view.lines(), vec!["You have eaten now and you are not hungry any more."]);
    }
}
