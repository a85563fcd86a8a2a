use serde::{Deserialize, Serialize};

use crate::id::{MessageId, MotionCode, ObjectId, RoomId};

/// One row of the travel table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TravelEdge {
    /// The room the player leaves.
    pub from: RoomId,
    /// The motion that follows this edge.
    pub motion: MotionCode,
    /// Where the edge leads.
    pub to: Destination,
}

/// Where a travel edge leads.
///
/// A bare number is a direct room; an object with a `rule` tag is evaluated
/// against the world state at traversal time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Destination {
    /// Always this room.
    Room(RoomId),
    /// Decided when the edge is taken.
    Rule(TravelRule),
}

/// A conditional destination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum TravelRule {
    /// Coin flip: `pass` with probability `chance`, otherwise `fail`.
    Random {
        /// Probability of reaching `pass`.
        chance: f64,
        /// Room reached when the flip succeeds.
        pass: RoomId,
        /// Room reached when the flip fails.
        fail: RoomId,
    },
    /// Branch on an object's state flag.
    Property {
        /// The object whose state is checked.
        object: ObjectId,
        /// The state value that opens the way.
        state: u8,
        /// Room reached when the object is in that state.
        pass: RoomId,
        /// Room reached otherwise; the player stays put when absent.
        #[serde(default)]
        fail: Option<RoomId>,
        /// Narrated when the player stays put.
        #[serde(default)]
        blocked: Option<MessageId>,
    },
}

impl Destination {
    /// Every room this destination can lead to.
    pub fn rooms(&self) -> Vec<RoomId> {
        match self {
            Self::Room(room) => vec![*room],
            Self::Rule(TravelRule::Random { pass, fail, .. }) => vec![*pass, *fail],
            Self::Rule(TravelRule::Property { pass, fail, .. }) => {
                std::iter::once(*pass).chain(*fail).collect()
            }
        }
    }
}
