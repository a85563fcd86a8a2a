use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! content_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub u32);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u32> for $name {
            fn from(value: u32) -> Self {
                Self(value)
            }
        }
    };
}

content_id!(
    /// Identifier of a room in the content dataset.
    RoomId
);

content_id!(
    /// Identifier of an object in the content dataset.
    ObjectId
);

content_id!(
    /// Identifier of a message in the content dataset.
    MessageId
);

content_id!(
    /// Code of a motion word. Several words may share one code.
    MotionCode
);
