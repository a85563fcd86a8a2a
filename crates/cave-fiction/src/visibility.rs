//! Whether the player can see.

use cave_core::{Content, CoreResult, Lighting, Place, Room, WorldState};

/// True when `room` is lit by daylight, or the lamp is on and either carried
/// or lying in that room.
pub fn can_see(room: &Room, lamp: Place, lamp_on: bool) -> bool {
    match room.light {
        Lighting::NaturalLight => true,
        Lighting::RequiresLightSource => {
            lamp_on && (lamp == Place::Carried || lamp == Place::Room(room.id))
        }
    }
}

/// Whether the player can see their current room.
pub fn player_can_see(content: &Content, state: &WorldState) -> CoreResult<bool> {
    let room = content.room(state.location())?;
    let lamp = state.place(content.roles().objects.lamp);
    Ok(can_see(room, lamp, state.lamp_on))
}
