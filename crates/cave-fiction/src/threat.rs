//! Dwarf threat state machine.
//!
//! The dwarves sleep until the player first reaches the trigger room, then
//! wait for a lucky roll to wake up. Once awake, each slot joins the hunt on
//! a staggered turn, walks its part of the schedule until it meets the
//! player, and from then on stays with them. A dwarf that was already in the
//! player's room last turn throws a knife.

use cave_core::{CoreResult, DwarfSlot, Place, ThreatStage};
use tracing::debug;

use crate::context::Context;

/// Slots whose gate value is below this have not started moving yet.
const GATE_START: u32 = 8;
/// Unseen slots whose gate value exceeds this drop out of the schedule.
const GATE_END: u32 = 23;
/// Counter value when the dwarves wake up.
const COUNTER_AT_ACTIVATION: u32 = 2;

/// What the dwarves did this turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Encounter {
    /// The dwarves woke up this turn.
    pub appeared: bool,
    /// Dwarves in the player's room.
    pub present: usize,
    /// Dwarves that threw a knife.
    pub attacking: usize,
    /// Knives that hit.
    pub hits: usize,
}

impl Encounter {
    /// Whether a knife hit the player, ending the game.
    pub fn defeated(&self) -> bool {
        self.hits > 0
    }
}

/// Advance the threat by one turn.
pub fn tick(ctx: &mut Context<'_>) -> CoreResult<Encounter> {
    let here = ctx.location();
    match ctx.state.threat.stage {
        ThreatStage::Dormant => {
            if here == ctx.content.threat().trigger {
                debug!(room = %here, "dwarves stirring");
                ctx.state.threat.stage = ThreatStage::Pending;
            }
            Ok(Encounter::default())
        }
        ThreatStage::Pending => {
            if !ctx.dice.chance(ctx.config.activation_chance) {
                return Ok(Encounter::default());
            }
            debug!(room = %here, "dwarves awake");
            ctx.state.threat.stage = ThreatStage::Active {
                counter: COUNTER_AT_ACTIVATION,
            };
            ctx.state.threat.slots.iter_mut().for_each(DwarfSlot::reset);
            ctx.state
                .put(ctx.content.roles().objects.axe, Place::Room(here))?;
            Ok(Encounter {
                appeared: true,
                ..Encounter::default()
            })
        }
        ThreatStage::Active { counter } => {
            let counter = counter + 1;
            ctx.state.threat.stage = ThreatStage::Active { counter };
            Ok(advance(ctx, counter))
        }
    }
}

fn advance(ctx: &mut Context<'_>, counter: u32) -> Encounter {
    let here = ctx.location();
    let deep = ctx.content.room(here).is_ok_and(|room| room.deep);
    let schedule = &ctx.content.threat().schedule;
    let mut encounter = Encounter::default();

    for index in 0..ctx.state.threat.slots.len() {
        let gate = 2 * index as u32 + counter;
        let slot = &mut ctx.state.threat.slots[index];
        if gate < GATE_START || (gate > GATE_END && !slot.seen) {
            continue;
        }

        slot.previous = slot.position;
        let scheduled = if slot.seen || !deep {
            None
        } else {
            schedule.get((gate - GATE_START) as usize)
        };
        if let Some(room) = scheduled {
            slot.position = Some(*room);
        }

        if slot.position == Some(here) || slot.previous == Some(here) {
            slot.seen = true;
            slot.position = Some(here);
            encounter.present += 1;
            if slot.stood_still() {
                encounter.attacking += 1;
                if ctx.dice.chance(ctx.config.hit_chance) {
                    encounter.hits += 1;
                }
            }
        }
    }

    if encounter.present > 0 {
        debug!(counter, ?encounter, "dwarf encounter");
    }
    encounter
}
