//! Room definitions.
//!
//! Any location the player can stand in is represented as a "Room", whether it's a pub
//! or a lecture theatre. Rooms never own their neighbours: exits hold [`RoomId`] handles
//! into the arena kept by [`ZuulWorld`](crate::world::ZuulWorld), so the campus map can
//! contain cycles and shared targets freely.

use crate::world::RoomId;

use indexmap::IndexMap;
use std::collections::HashMap;

/// Something lying around in a room.
///
/// Items are recorded when the world is built but nothing in the game reads them back yet.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub description: String,
    pub weight: u32,
}

/// Any visitable location in the game world.
#[derive(Debug, Clone)]
pub struct Room {
    description: String,
    image: Option<String>,
    exits: IndexMap<String, RoomId>,
    items: HashMap<String, Item>,
}
impl Room {
    /// Create a room with no exits and no items.
    pub fn new(description: impl Into<String>, image: Option<&str>) -> Self {
        Self {
            description: description.into(),
            image: image.map(str::to_string),
            exits: IndexMap::new(),
            items: HashMap::new(),
        }
    }

    /// Short description, e.g. "in a lecture theatre".
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Image reference to show when the player arrives here, if any.
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    /// Register (or replace) the exit leading `direction`.
    ///
    /// Replacing an existing direction keeps its original position in the exit listing.
    pub fn set_exit(&mut self, direction: impl Into<String>, target: RoomId) {
        self.exits.insert(direction.into(), target);
    }

    /// Look up the room reached by going `direction`. Matching is exact and case-sensitive.
    pub fn exit(&self, direction: &str) -> Option<RoomId> {
        self.exits.get(direction).copied()
    }

    /// Directions that currently lead somewhere, in the order they were first added.
    pub fn exit_directions(&self) -> impl Iterator<Item = &str> {
        self.exits.keys().map(String::as_str)
    }

    /// Put an item in the room, replacing any item with the same name.
    pub fn add_item(&mut self, name: impl Into<String>, description: impl Into<String>, weight: u32) {
        self.items.insert(
            name.into(),
            Item {
                description: description.into(),
                weight,
            },
        );
    }

    /// Full description shown on arrival and on `look`.
    pub fn long_description(&self) -> String {
        format!("You are {}.\n{}", self.description, self.exit_string())
    }

    fn exit_string(&self) -> String {
        let mut line = String::from("Exits:");
        for direction in self.exit_directions() {
            line.push(' ');
            line.push_str(direction);
        }
        line
    }
}
