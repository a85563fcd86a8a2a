use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::content::Content;
use crate::error::{CoreError, CoreResult};
use crate::id::{ObjectId, RoomId};

/// Where an object currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Place {
    /// In the player's hands.
    Carried,
    /// Off the map.
    Nowhere,
    /// Lying in a room.
    Room(RoomId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ObjectState {
    place: Place,
    prop: u8,
    fixed: bool,
}

/// Dwarf activation stage. Only ever moves forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThreatStage {
    /// The player has not yet reached the trigger room.
    #[default]
    Dormant,
    /// Waiting for the activation roll.
    Pending,
    /// Dwarves are roaming; `counter` advances every turn.
    Active {
        /// Turns since activation, offset by the initial stage value.
        counter: u32,
    },
}

/// One roaming dwarf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DwarfSlot {
    /// Current room, if the dwarf is on the map.
    pub position: Option<RoomId>,
    /// Room occupied on the previous turn.
    pub previous: Option<RoomId>,
    /// Whether the player has encountered this dwarf.
    pub seen: bool,
}

impl DwarfSlot {
    /// Clear the slot back to "unseen, off the map".
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// True when the dwarf occupied the same room on consecutive turns.
    pub fn stood_still(&self) -> bool {
        self.position.is_some() && self.position == self.previous
    }
}

/// State of the dwarf threat.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ThreatState {
    /// Activation stage.
    pub stage: ThreatStage,
    /// One entry per dwarf.
    pub slots: Vec<DwarfSlot>,
}

/// The mutable simulation state.
///
/// Owned exclusively by one session. Object locations are always exactly one
/// of carried, nowhere, or a room, and fixed objects are never carried.
#[derive(Debug, Clone)]
pub struct WorldState {
    location: RoomId,
    previous: RoomId,
    objects: BTreeMap<ObjectId, ObjectState>,
    visits: HashMap<RoomId, u32>,
    /// Whether the light source is switched on.
    pub lamp_on: bool,
    /// Dwarf stage and positions.
    pub threat: ThreatState,
    /// How many times WEST has been typed out in full.
    pub west_count: u32,
    /// Consecutive commands whose first word was not understood.
    pub trouble: u32,
}

impl WorldState {
    /// Initial state for a dataset: player at the start room, objects at
    /// their starting places, all flags cleared.
    pub fn new(content: &Content) -> Self {
        let objects = content
            .objects()
            .map(|def| {
                let place = def.location.map_or(Place::Nowhere, Place::Room);
                (
                    def.id,
                    ObjectState {
                        place,
                        prop: 0,
                        fixed: def.fixed,
                    },
                )
            })
            .collect();

        Self {
            location: content.start(),
            previous: content.start(),
            objects,
            visits: HashMap::new(),
            lamp_on: false,
            threat: ThreatState {
                stage: ThreatStage::Dormant,
                slots: vec![DwarfSlot::default(); content.threat().slots],
            },
            west_count: 0,
            trouble: 0,
        }
    }

    // -----------------------------------------------------------------------
    // Player
    // -----------------------------------------------------------------------

    /// The player's room.
    pub fn location(&self) -> RoomId {
        self.location
    }

    /// The room the player was in before the last move.
    pub fn previous_location(&self) -> RoomId {
        self.previous
    }

    /// Move the player.
    pub fn move_to(&mut self, room: RoomId) {
        self.previous = self.location;
        self.location = room;
    }

    // -----------------------------------------------------------------------
    // Objects
    // -----------------------------------------------------------------------

    /// Where an object is. Ids outside the dataset are nowhere.
    pub fn place(&self, object: ObjectId) -> Place {
        self.objects
            .get(&object)
            .map_or(Place::Nowhere, |state| state.place)
    }

    /// Whether the player holds the object.
    pub fn is_carried(&self, object: ObjectId) -> bool {
        self.place(object) == Place::Carried
    }

    /// Whether the object lies in the given room.
    pub fn is_at(&self, object: ObjectId, room: RoomId) -> bool {
        self.place(object) == Place::Room(room)
    }

    /// Whether the object is carried or lies in the player's room.
    pub fn is_here(&self, object: ObjectId) -> bool {
        self.is_carried(object) || self.is_at(object, self.location)
    }

    /// Whether the object can never be carried.
    pub fn is_fixed(&self, object: ObjectId) -> bool {
        self.objects.get(&object).is_some_and(|state| state.fixed)
    }

    /// Relocate an object. Refuses to carry a fixed object.
    pub fn put(&mut self, object: ObjectId, place: Place) -> CoreResult<()> {
        let state = self.object_mut(object)?;
        if place == Place::Carried && state.fixed {
            return Err(CoreError::FixedObject(object));
        }
        state.place = place;
        Ok(())
    }

    /// Pick an object up.
    pub fn carry(&mut self, object: ObjectId) -> CoreResult<()> {
        self.put(object, Place::Carried)
    }

    /// Put an object down in the player's room.
    pub fn drop_here(&mut self, object: ObjectId) -> CoreResult<()> {
        let room = self.location;
        self.put(object, Place::Room(room))
    }

    /// An object's state flag. Ids outside the dataset read as 0.
    pub fn prop(&self, object: ObjectId) -> u8 {
        self.objects.get(&object).map_or(0, |state| state.prop)
    }

    /// Set an object's state flag.
    pub fn set_prop(&mut self, object: ObjectId, prop: u8) -> CoreResult<()> {
        self.object_mut(object)?.prop = prop;
        Ok(())
    }

    /// Objects lying in a room, in id order.
    pub fn objects_at(&self, room: RoomId) -> impl Iterator<Item = ObjectId> + '_ {
        self.objects
            .iter()
            .filter(move |(_, state)| state.place == Place::Room(room))
            .map(|(id, _)| *id)
    }

    /// Objects the player holds, in id order.
    pub fn carried(&self) -> impl Iterator<Item = ObjectId> + '_ {
        self.objects
            .iter()
            .filter(|(_, state)| state.place == Place::Carried)
            .map(|(id, _)| *id)
    }

    /// Objects carried or in the player's room, in id order.
    pub fn in_scope(&self) -> impl Iterator<Item = ObjectId> + '_ {
        self.objects
            .iter()
            .filter(|(_, state)| {
                state.place == Place::Carried || state.place == Place::Room(self.location)
            })
            .map(|(id, _)| *id)
    }

    /// Every object and its place, in id order.
    pub fn places(&self) -> impl Iterator<Item = (ObjectId, Place)> + '_ {
        self.objects.iter().map(|(id, state)| (*id, state.place))
    }

    fn object_mut(&mut self, object: ObjectId) -> CoreResult<&mut ObjectState> {
        self.objects
            .get_mut(&object)
            .ok_or_else(|| CoreError::UnknownObject {
                object,
                context: "world state".to_string(),
            })
    }

    // -----------------------------------------------------------------------
    // Visits
    // -----------------------------------------------------------------------

    /// Abbreviation counter for a room; 0 means "show the long form".
    pub fn visits(&self, room: RoomId) -> u32 {
        self.visits.get(&room).copied().unwrap_or(0)
    }

    /// Advance a room's abbreviation counter, wrapping at `cycle`.
    pub fn record_visit(&mut self, room: RoomId, cycle: u32) {
        let count = self.visits.entry(room).or_insert(0);
        *count = (*count + 1) % cycle.max(1);
    }

    /// Force the long form on the next description of a room.
    pub fn forget_visits(&mut self, room: RoomId) {
        self.visits.insert(room, 0);
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn locations_stay_valid(moves in prop::collection::vec((0usize..32, 0u8..4), 0..64)) {
            let content = Content::builtin().unwrap();
            let mut state = WorldState::new(&content);
            let ids: Vec<ObjectId> = content.objects().map(|o| o.id).collect();
            let rooms: Vec<RoomId> = content.rooms().map(|r| r.id).collect();

            for (pick, op) in moves {
                let object = ids[pick % ids.len()];
                let room = rooms[pick % rooms.len()];
                let _ = match op {
                    0 => state.carry(object),
                    1 => state.put(object, Place::Room(room)),
                    2 => state.put(object, Place::Nowhere),
                    _ => {
                        state.move_to(room);
                        state.drop_here(object)
                    }
                };
            }

            for (object, place) in state.places() {
                match place {
                    Place::Carried => prop_assert!(!state.is_fixed(object)),
                    Place::Nowhere => {}
                    Place::Room(room) => prop_assert!(content.room(room).is_ok()),
                }
            }
        }
    }
}
