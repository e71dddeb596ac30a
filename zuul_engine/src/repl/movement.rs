//! `repl::movement` module
//!
//! Contains handlers for commands that change the player's location.

use crate::view::Presenter;
use crate::world::{RoomId, ZuulWorld};

use anyhow::Result;
use log::info;

/// Move the player through the exit named `direction`, if the current room has one.
///
/// # Errors
/// Returns an error if the player's room or the exit's target cannot be resolved.
pub fn move_to_handler(world: &mut ZuulWorld, view: &mut dyn Presenter, direction: Option<&str>) -> Result<()> {
    let Some(direction) = direction else {
        view.println("Go where?");
        return Ok(());
    };

    let Some(destination) = world.player_room_ref()?.exit(direction) else {
        view.println("There is no door!");
        info!("no exit '{direction}' from room {}", world.player.location.index());
        return Ok(());
    };

    let leaving = world.player.location;
    world.player.move_to(destination);
    info!(
        "player moved {direction} from room {} to room {}",
        leaving.index(),
        destination.index()
    );
    show_arrival(world, view, destination)
}

/// Return the player to the room they most recently walked out of.
///
/// # Errors
/// Returns an error if the room stepped back into cannot be resolved.
pub fn go_back_handler(world: &mut ZuulWorld, view: &mut dyn Presenter, extra: Option<&str>) -> Result<()> {
    if extra.is_some() {
        view.println("Back what?");
        return Ok(());
    }

    let Some(previous) = world.player.go_back() else {
        view.println("You can't go back!");
        return Ok(());
    };
    info!(
        "player went back to room {} ({} rooms left in history)",
        previous.index(),
        world.player.history.len()
    );
    view.print("\n");
    show_arrival(world, view, previous)
}

fn show_arrival(world: &ZuulWorld, view: &mut dyn Presenter, room_id: RoomId) -> Result<()> {
    let room = world.room(room_id)?;
    view.println(&room.long_description());
    if let Some(image) = room.image() {
        view.show_image(image);
    }
    Ok(())
}
