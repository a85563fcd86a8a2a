//! Core types for the cave adventure interpreter: the content data contract
//! and the mutable world state.
//!
//! This crate knows nothing about parsing player input or narrating turns.
//! It loads a content dataset (rooms, objects, vocabulary, travel edges,
//! messages, dwarf schedule), validates that every cross-reference resolves,
//! and provides the [`WorldState`] store that the interpreter mutates.

/// Validated content dataset and its loaders.
pub mod content;
/// Error types used throughout the crate.
pub mod error;
/// Stable identifiers for rooms, objects, messages, and motions.
pub mod id;
/// The mutable simulation state shared by every interpreter component.
pub mod state;
/// Message text and the ids the interpreter relies on.
pub mod text;
/// Travel edges and conditional destinations.
pub mod travel;
/// Vocabulary words and action verbs.
pub mod vocabulary;

/// Re-export content types.
pub use content::{Content, ContentFile, Lighting, ObjectDef, Roles, Room, ThreatTable};
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export identifiers.
pub use id::{MessageId, MotionCode, ObjectId, RoomId};
/// Re-export state types.
pub use state::{DwarfSlot, Place, ThreatStage, ThreatState, WorldState};
/// Re-export text types.
pub use text::Text;
/// Re-export travel types.
pub use travel::{Destination, TravelEdge, TravelRule};
/// Re-export vocabulary types.
pub use vocabulary::{Verb, Word};
