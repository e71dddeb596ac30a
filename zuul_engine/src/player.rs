//! Player -- the single session moving around the world.
use crate::world::RoomId;

use log::info;

/// Where the player is, where they have been, and whether they are still playing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub location: RoomId,
    /// Rooms left by walking through an exit, most recent last.
    pub history: Vec<RoomId>,
    active: bool,
}
impl Player {
    pub fn new(location: RoomId) -> Self {
        Self {
            location,
            history: Vec::new(),
            active: true,
        }
    }

    /// Walk into `destination`, remembering the room being left.
    pub fn move_to(&mut self, destination: RoomId) {
        self.history.push(self.location);
        self.location = destination;
    }

    /// Step back into the most recently departed room, if there is one.
    ///
    /// Returns the room stepped into. The room being left is not remembered.
    pub fn go_back(&mut self) -> Option<RoomId> {
        let previous = self.history.pop()?;
        self.location = previous;
        Some(previous)
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// End the session. Once ended it stays ended.
    pub fn deactivate(&mut self) {
        if self.active {
            info!("session deactivated in room {}", self.location.index());
        }
        self.active = false;
    }
}
