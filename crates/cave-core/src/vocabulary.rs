use serde::{Deserialize, Serialize};

use crate::id::{MotionCode, ObjectId};

/// An action verb the interpreter knows how to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verb {
    /// Pick an object up.
    Take,
    /// Put a carried object down.
    Drop,
    /// List carried objects.
    Inventory,
    /// Lock a grate-like object.
    Lock,
    /// Unlock a grate-like object.
    Unlock,
    /// Switch the light source on.
    Light,
    /// Switch the light source off.
    Extinguish,
    /// Ignite a consumable such as matches.
    Strike,
    /// Repeat the long room description.
    Look,
    /// Attack a creature or dwarf.
    Attack,
    /// Eat food.
    Eat,
    /// Drink water.
    Drink,
    /// Rub something.
    Rub,
    /// Pour out a liquid.
    Pour,
}

impl Verb {
    /// Verbs that never take an object and are never given an inferred one.
    pub fn is_intransitive(self) -> bool {
        matches!(self, Self::Inventory | Self::Look)
    }
}

/// What a vocabulary word stands for.
///
/// Serialized externally tagged, e.g. `{"motion": 1}`, `{"object": 2}`,
/// `{"verb": "take"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Word {
    /// A travel word.
    Motion(MotionCode),
    /// An object name.
    Object(ObjectId),
    /// An action verb.
    Verb(Verb),
}
