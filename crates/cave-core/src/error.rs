use std::path::PathBuf;

use crate::id::{MessageId, MotionCode, ObjectId, RoomId};

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised while loading content or mutating the world state.
///
/// Everything here indicates a broken dataset or a programming error, never
/// a player mistake. Player mistakes are narrated, not returned.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The content document is not valid JSON or does not match the schema.
    #[error("malformed content: {0}")]
    Parse(#[from] serde_json::Error),

    /// A content file could not be read.
    #[error("cannot read {}: {source}", path.display())]
    Io {
        /// The file that failed to load.
        path: PathBuf,
        /// The underlying I/O failure.
        source: std::io::Error,
    },

    /// Two rooms share an id.
    #[error("room {0} is defined twice")]
    DuplicateRoom(RoomId),

    /// Two objects share an id.
    #[error("object {0} is defined twice")]
    DuplicateObject(ObjectId),

    /// Two messages share an id.
    #[error("message {0} is defined twice")]
    DuplicateMessage(MessageId),

    /// Two travel edges leave the same room on the same motion.
    #[error("room {room} has more than one edge for motion {motion}")]
    DuplicateEdge {
        /// The origin room.
        room: RoomId,
        /// The motion code used twice.
        motion: MotionCode,
    },

    /// Two vocabulary words are equal once case is ignored.
    #[error("word {0} is defined twice")]
    DuplicateWord(String),

    /// The dwarf slot count is zero or exceeds the schedule length.
    #[error("dwarf table has {slots} slots, expected between 1 and {schedule}")]
    InvalidSlotCount {
        /// The configured slot count.
        slots: usize,
        /// Length of the dwarf schedule.
        schedule: usize,
    },

    /// A table entry points at a room that does not exist.
    #[error("{context} references unknown room {room}")]
    UnknownRoom {
        /// The missing room.
        room: RoomId,
        /// Where the reference was found.
        context: String,
    },

    /// A table entry points at an object that does not exist.
    #[error("{context} references unknown object {object}")]
    UnknownObject {
        /// The missing object.
        object: ObjectId,
        /// Where the reference was found.
        context: String,
    },

    /// A table entry points at a message that does not exist.
    #[error("{context} references unknown message {message}")]
    UnknownMessage {
        /// The missing message.
        message: MessageId,
        /// Where the reference was found.
        context: String,
    },

    /// A random travel rule carries a probability outside `0.0..=1.0`.
    #[error("{context} has chance {chance}, expected a value between 0 and 1")]
    InvalidChance {
        /// The offending probability.
        chance: f64,
        /// Where the probability was found.
        context: String,
    },

    /// A fixed object was about to be carried.
    #[error("object {0} is fixed in place and cannot be carried")]
    FixedObject(ObjectId),
}
