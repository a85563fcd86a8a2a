use cave_core::{Content, ObjectId, RoomId, WorldState};

use crate::config::SessionConfig;
use crate::dice::Dice;

/// Mutable context passed to each component during a turn.
pub struct Context<'a> {
    /// The immutable content dataset.
    pub content: &'a Content,
    /// The world state being mutated.
    pub state: &'a mut WorldState,
    /// The session's only random source.
    pub dice: &'a mut dyn Dice,
    /// Session tuning.
    pub config: &'a SessionConfig,
}

impl Context<'_> {
    /// The player's room.
    pub fn location(&self) -> RoomId {
        self.state.location()
    }

    /// Whether the object is carried or in the player's room.
    pub fn is_here(&self, object: ObjectId) -> bool {
        self.state.is_here(object)
    }

    /// Index of a seen dwarf standing in the player's room, if any.
    pub fn dwarf_here(&self) -> Option<usize> {
        let here = Some(self.location());
        self.state
            .threat
            .slots
            .iter()
            .position(|slot| slot.seen && slot.position == here)
    }
}
