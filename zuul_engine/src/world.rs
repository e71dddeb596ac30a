//! Data structures representing the game world.
//!
//! This module defines [`ZuulWorld`], which owns every [`Room`] for the lifetime of the
//! game together with the [`Player`] whose position moves between them.

use crate::{Player, Room};

use anyhow::{Result, anyhow};
use log::info;

/// Handle to a room stored in a [`ZuulWorld`].
///
/// Handles are only meaningful for the world that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoomId(usize);
impl RoomId {
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    pub const fn index(self) -> usize {
        self.0
    }
}

/// Complete state of the running game.
///
/// Rooms are added while the world is built and are never removed, so every `RoomId`
/// handed out stays valid.
#[derive(Debug, Clone)]
pub struct ZuulWorld {
    rooms: Vec<Room>,
    pub player: Player,
}
impl ZuulWorld {
    /// Create a world from its first room, where the player starts.
    pub fn new(start: Room) -> Self {
        let world = Self {
            rooms: vec![start],
            player: Player::new(RoomId(0)),
        };
        info!("new 'ZuulWorld' created");
        world
    }

    /// Id of the room the player starts in.
    pub const fn start_room(&self) -> RoomId {
        RoomId(0)
    }

    /// Add a room to the arena and return its handle.
    pub fn add_room(&mut self, room: Room) -> RoomId {
        self.rooms.push(room);
        RoomId(self.rooms.len() - 1)
    }

    /// Link `from` to `to` in one direction only.
    ///
    /// # Errors
    /// - if either handle does not belong to this world
    pub fn link(&mut self, from: RoomId, direction: &str, to: RoomId) -> Result<()> {
        self.room(to)?;
        self.room_mut(from)?.set_exit(direction, to);
        Ok(())
    }

    /// Obtain a reference to a room.
    /// # Errors
    /// - if `id` does not belong to this world
    pub fn room(&self, id: RoomId) -> Result<&Room> {
        self.rooms
            .get(id.0)
            .ok_or_else(|| anyhow!("room id ({}) not found in world", id.0))
    }

    /// Obtain a mutable reference to a room.
    /// # Errors
    /// - if `id` does not belong to this world
    pub fn room_mut(&mut self, id: RoomId) -> Result<&mut Room> {
        self.rooms
            .get_mut(id.0)
            .ok_or_else(|| anyhow!("room id ({}) not found in world", id.0))
    }

    /// Obtain a reference to the room the player occupies.
    /// # Errors
    /// - if the player's room id is not found
    pub fn player_room_ref(&self) -> Result<&Room> {
        self.room(self.player.location)
    }

    /// Number of rooms in the world.
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }
}
