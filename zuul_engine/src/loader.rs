//! Builds the campus world the game is played in.
//!
//! The map is fixed: five rooms around the main entrance of the university. Rooms are
//! added in a known order so their ids are available as constants.

use crate::world::RoomId;
use crate::{Room, ZuulWorld};

use anyhow::{Context, Result};
use log::info;

pub const OUTSIDE: RoomId = RoomId::new(0);
pub const THEATRE: RoomId = RoomId::new(1);
pub const PUB: RoomId = RoomId::new(2);
pub const LAB: RoomId = RoomId::new(3);
pub const OFFICE: RoomId = RoomId::new(4);

/// Create all the rooms and link their exits together.
///
/// # Errors
/// Returns an error if a link refers to a room that was never added.
pub fn load_world() -> Result<ZuulWorld> {
    let mut outside = Room::new("outside the main entrance of the university", Some("outside.gif"));
    outside.add_item("caca", "A big shit", 10);
    outside.add_item("pipi", "It's quite sliding there...", 1);

    let mut world = ZuulWorld::new(outside);
    let theatre = world.add_room(Room::new("in a lecture theatre", Some("castle.gif")));
    let pub_room = world.add_room(Room::new("in the campus pub", Some("courtyard.gif")));
    let lab = world.add_room(Room::new("in a computing lab", Some("stairs.gif")));
    let office = world.add_room(Room::new("the computing admin office", Some("dungeon.gif")));
    let outside = world.start_room();

    let links = [
        (outside, "east", theatre),
        (outside, "south", lab),
        (outside, "west", pub_room),
        (theatre, "west", outside),
        (pub_room, "east", outside),
        (lab, "north", outside),
        (lab, "east", office),
        (office, "west", lab),
    ];
    for (from, direction, to) in links {
        world
            .link(from, direction, to)
            .with_context(|| format!("linking room {} {direction} to room {}", from.index(), to.index()))?;
    }

    info!("{} rooms added to ZuulWorld", world.room_count());
    Ok(world)
}
