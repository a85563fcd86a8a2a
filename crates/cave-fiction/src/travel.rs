//! Travel resolution along the travel graph.

use cave_core::text::msg;
use cave_core::{Destination, MessageId, MotionCode, RoomId, TravelRule};
use tracing::debug;

use crate::context::Context;

/// Outcome of trying to leave the current room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// The player ends up in this room.
    Moved(RoomId),
    /// The player stays put and hears this message.
    Blocked(MessageId),
}

/// Resolve `motion` from the player's room.
///
/// Does not move the player. Random rules consume exactly one draw.
pub fn resolve(ctx: &mut Context<'_>, motion: MotionCode) -> Route {
    let from = ctx.location();
    let Some(destination) = ctx.content.edge(from, motion) else {
        debug!(%from, %motion, "no travel edge");
        return Route::Blocked(msg::CANT_GO);
    };

    let route = match destination {
        Destination::Room(room) => Route::Moved(*room),
        Destination::Rule(TravelRule::Random { chance, pass, fail }) => {
            if ctx.dice.chance(*chance) {
                Route::Moved(*pass)
            } else {
                Route::Moved(*fail)
            }
        }
        Destination::Rule(TravelRule::Property {
            object,
            state,
            pass,
            fail,
            blocked,
        }) => {
            if ctx.state.prop(*object) == *state {
                Route::Moved(*pass)
            } else if let Some(room) = fail {
                Route::Moved(*room)
            } else {
                Route::Blocked(blocked.unwrap_or(msg::CANT_GO))
            }
        }
    };
    debug!(%from, %motion, ?route, "resolved travel");
    route
}
