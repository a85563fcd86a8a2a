//! Verb effects on the world state.
//!
//! [`apply`] checks that the object is at hand, then runs the verb's rule.
//! A failed rule leaves the world untouched and reports why through its
//! narration. Only successful results end the turn.

use cave_core::text::msg;
use cave_core::{CoreResult, MessageId, ObjectId, Place, Verb};
use tracing::debug;

use crate::context::Context;

/// What a verb did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResult {
    /// Whether the world advanced. Successful actions end the turn.
    pub success: bool,
    /// Messages to narrate, in order.
    pub narration: Vec<MessageId>,
}

impl ActionResult {
    fn done(narration: impl Into<Vec<MessageId>>) -> Self {
        Self {
            success: true,
            narration: narration.into(),
        }
    }

    fn refused(message: MessageId) -> Self {
        Self {
            success: false,
            narration: vec![message],
        }
    }
}

/// Apply `verb` to `object`.
pub fn apply(ctx: &mut Context<'_>, verb: Verb, object: ObjectId) -> CoreResult<ActionResult> {
    if !ctx.is_here(object) {
        return Ok(ActionResult::refused(msg::NOT_HERE));
    }

    let roles = &ctx.content.roles().objects;
    let result = match verb {
        Verb::Take => take(ctx, object)?,
        Verb::Drop => put_down(ctx, object)?,
        Verb::Lock => lock(ctx, object, true)?,
        Verb::Unlock => lock(ctx, object, false)?,
        Verb::Light | Verb::Extinguish if object != roles.lamp => {
            ActionResult::refused(msg::NOT_A_LIGHT)
        }
        Verb::Light => {
            ctx.state.lamp_on = true;
            ActionResult::done([msg::LAMP_ON])
        }
        Verb::Extinguish => {
            ctx.state.lamp_on = false;
            ActionResult::done([msg::LAMP_OFF])
        }
        Verb::Strike if object == roles.matches => consume(ctx, object, msg::MATCH_FLARES)?,
        Verb::Attack => attack(ctx, object)?,
        Verb::Eat if object == roles.food => consume(ctx, object, msg::DELICIOUS)?,
        Verb::Drink if object == roles.water => consume(ctx, object, msg::BOTTLE_DRAINED)?,
        Verb::Rub if object == roles.lamp => ActionResult::refused(msg::RUB_LAMP),
        Verb::Pour if object == roles.water => {
            ctx.state.set_prop(object, 1)?;
            ActionResult::done([msg::POURED])
        }
        _ => ActionResult::refused(msg::OK),
    };
    debug!(?verb, %object, success = result.success, "applied verb");
    Ok(result)
}

fn take(ctx: &mut Context<'_>, object: ObjectId) -> CoreResult<ActionResult> {
    let roles = &ctx.content.roles().objects;
    if ctx.state.is_carried(object) {
        return Ok(ActionResult::refused(msg::ALREADY_CARRYING));
    }
    if ctx.state.is_fixed(object) {
        return Ok(ActionResult::refused(msg::CANT_TAKE));
    }
    if object == roles.bird && ctx.state.is_carried(roles.rod) {
        return Ok(ActionResult::refused(msg::BIRD_FRIGHTENED));
    }
    ctx.state.carry(object)?;
    Ok(ActionResult::done([msg::OK]))
}

fn put_down(ctx: &mut Context<'_>, object: ObjectId) -> CoreResult<ActionResult> {
    let roles = &ctx.content.roles().objects;
    if !ctx.state.is_carried(object) {
        return Ok(ActionResult::refused(msg::NOT_CARRYING));
    }

    let mut narration = Vec::new();
    let here = ctx.location();
    if object == roles.bird && ctx.state.is_at(roles.snake, here) && ctx.state.prop(roles.snake) == 0
    {
        debug!(room = %here, "bird drives the snake away");
        ctx.state.set_prop(roles.snake, 1)?;
        narration.push(msg::BIRD_VS_SNAKE);
    }
    ctx.state.drop_here(object)?;
    narration.push(msg::OK);
    Ok(ActionResult::done(narration))
}

fn lock(ctx: &mut Context<'_>, object: ObjectId, locking: bool) -> CoreResult<ActionResult> {
    let roles = &ctx.content.roles().objects;
    if object != roles.grate {
        return Ok(ActionResult::refused(msg::NOTHING_TO_LOCK));
    }
    if !ctx.is_here(roles.keys) {
        return Ok(ActionResult::refused(msg::NO_KEYS));
    }

    // prop 1 is unlocked
    let unlocked = ctx.state.prop(object) == 1;
    match (locking, unlocked) {
        (true, true) => {
            ctx.state.set_prop(object, 0)?;
            Ok(ActionResult::done([msg::NOW_LOCKED]))
        }
        (true, false) => Ok(ActionResult::refused(msg::ALREADY_LOCKED)),
        (false, false) => {
            ctx.state.set_prop(object, 1)?;
            Ok(ActionResult::done([msg::NOW_UNLOCKED]))
        }
        (false, true) => Ok(ActionResult::refused(msg::ALREADY_UNLOCKED)),
    }
}

fn attack(ctx: &mut Context<'_>, object: ObjectId) -> CoreResult<ActionResult> {
    if let Some(result) = fight_dwarf(ctx) {
        return Ok(result);
    }

    let roles = &ctx.content.roles().objects;
    if object == roles.snake {
        Ok(ActionResult::refused(msg::SNAKE_POINTLESS))
    } else if object == roles.bird {
        ctx.state.put(object, Place::Nowhere)?;
        Ok(ActionResult::done([msg::BIRD_DEAD]))
    } else {
        Ok(ActionResult::refused(msg::BAD_IDEA))
    }
}

/// Attack a dwarf standing in the player's room, if there is one.
///
/// Combat with a dwarf takes precedence over whatever object was named.
pub fn fight_dwarf(ctx: &mut Context<'_>) -> Option<ActionResult> {
    let slot = ctx.dwarf_here()?;
    let killed = ctx.dice.chance(ctx.config.kill_chance);
    debug!(slot, killed, "player attacks a dwarf");
    if killed {
        ctx.state.threat.slots[slot].reset();
        Some(ActionResult::done([msg::DWARF_KILLED]))
    } else {
        Some(ActionResult::done([msg::DWARF_DODGES]))
    }
}

fn consume(ctx: &mut Context<'_>, object: ObjectId, message: MessageId) -> CoreResult<ActionResult> {
    if ctx.state.prop(object) != 0 {
        return Ok(ActionResult::refused(msg::OK));
    }
    ctx.state.set_prop(object, 1)?;
    Ok(ActionResult::done([message]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SessionConfig;
    use crate::dice::ScriptedDice;
    use cave_core::{Content, DwarfSlot, RoomId, WorldState};

    struct Fixture {
        content: Content,
        state: WorldState,
        dice: ScriptedDice,
        config: SessionConfig,
    }

    impl Fixture {
        fn at(room: u32) -> Self {
            let content = Content::builtin().unwrap();
            let mut state = WorldState::new(&content);
            state.move_to(RoomId(room));
            Self {
                content,
                state,
                dice: ScriptedDice::default(),
                config: SessionConfig::default(),
            }
        }

        fn apply(&mut self, verb: Verb, object: ObjectId) -> ActionResult {
            let mut ctx = Context {
                content: &self.content,
                state: &mut self.state,
                dice: &mut self.dice,
                config: &self.config,
            };
            apply(&mut ctx, verb, object).unwrap()
        }

        fn role(&self, pick: fn(&cave_core::content::ObjectRoles) -> ObjectId) -> ObjectId {
            pick(&self.content.roles().objects)
        }
    }

    #[test]
    fn absent_object_is_not_here() {
        let mut fx = Fixture::at(1);
        let keys = fx.role(|r| r.keys);
        let result = fx.apply(Verb::Take, keys);
        assert!(!result.success);
        assert_eq!(result.narration, vec![msg::NOT_HERE]);
        assert_eq!(fx.state.place(keys), Place::Room(RoomId(3)));
    }

    #[test]
    fn take_then_drop_round_trip() {
        let mut fx = Fixture::at(3);
        let keys = fx.role(|r| r.keys);
        assert!(fx.apply(Verb::Take, keys).success);
        assert!(fx.state.is_carried(keys));

        let again = fx.apply(Verb::Take, keys);
        assert_eq!(again.narration, vec![msg::ALREADY_CARRYING]);

        assert!(fx.apply(Verb::Drop, keys).success);
        assert_eq!(fx.state.place(keys), Place::Room(RoomId(3)));
        assert_eq!(fx.apply(Verb::Drop, keys).narration, vec![msg::NOT_CARRYING]);
    }

    #[test]
    fn fixed_objects_cannot_be_taken() {
        let mut fx = Fixture::at(8);
        let grate = fx.role(|r| r.grate);
        let result = fx.apply(Verb::Take, grate);
        assert_eq!(result.narration, vec![msg::CANT_TAKE]);
        assert_eq!(fx.state.place(grate), Place::Room(RoomId(8)));
    }

    #[test]
    fn rod_frightens_the_bird() {
        let mut fx = Fixture::at(13);
        let (bird, rod) = (fx.role(|r| r.bird), fx.role(|r| r.rod));
        fx.state.carry(rod).unwrap();
        assert_eq!(fx.apply(Verb::Take, bird).narration, vec![msg::BIRD_FRIGHTENED]);

        fx.state.put(rod, Place::Nowhere).unwrap();
        assert!(fx.apply(Verb::Take, bird).success);
    }

    #[test]
    fn dropping_the_bird_drives_off_the_snake() {
        let mut fx = Fixture::at(19);
        let (bird, snake) = (fx.role(|r| r.bird), fx.role(|r| r.snake));
        fx.state.carry(bird).unwrap();
        let result = fx.apply(Verb::Drop, bird);
        assert_eq!(result.narration, vec![msg::BIRD_VS_SNAKE, msg::OK]);
        assert_eq!(fx.state.prop(snake), 1);
        assert_eq!(fx.state.place(bird), Place::Room(RoomId(19)));

        fx.state.carry(bird).unwrap();
        assert_eq!(fx.apply(Verb::Drop, bird).narration, vec![msg::OK]);
    }

    #[test]
    fn lock_needs_keys() {
        let mut fx = Fixture::at(8);
        let grate = fx.role(|r| r.grate);
        assert_eq!(fx.apply(Verb::Unlock, grate).narration, vec![msg::NO_KEYS]);
        assert_eq!(fx.state.prop(grate), 0);
    }

    #[test]
    fn lock_cycle_is_idempotent() {
        let mut fx = Fixture::at(8);
        let (grate, keys) = (fx.role(|r| r.grate), fx.role(|r| r.keys));
        fx.state.carry(keys).unwrap();

        assert_eq!(fx.apply(Verb::Lock, grate).narration, vec![msg::ALREADY_LOCKED]);
        assert_eq!(fx.apply(Verb::Unlock, grate).narration, vec![msg::NOW_UNLOCKED]);
        assert_eq!(fx.state.prop(grate), 1);

        let again = fx.apply(Verb::Unlock, grate);
        assert!(!again.success);
        assert_eq!(again.narration, vec![msg::ALREADY_UNLOCKED]);
        assert_eq!(fx.state.prop(grate), 1);

        assert_eq!(fx.apply(Verb::Lock, grate).narration, vec![msg::NOW_LOCKED]);
        assert_eq!(fx.state.prop(grate), 0);
    }

    #[test]
    fn only_the_grate_has_a_lock() {
        let mut fx = Fixture::at(3);
        let lamp = fx.role(|r| r.lamp);
        assert_eq!(fx.apply(Verb::Lock, lamp).narration, vec![msg::NOTHING_TO_LOCK]);
    }

    #[test]
    fn lamp_switches_on_and_off() {
        let mut fx = Fixture::at(3);
        let (lamp, keys) = (fx.role(|r| r.lamp), fx.role(|r| r.keys));
        assert!(fx.apply(Verb::Light, lamp).success);
        assert!(fx.state.lamp_on);
        assert!(fx.apply(Verb::Extinguish, lamp).success);
        assert!(!fx.state.lamp_on);
        assert_eq!(fx.apply(Verb::Light, keys).narration, vec![msg::NOT_A_LIGHT]);
    }

    #[test]
    fn food_is_eaten_once() {
        let mut fx = Fixture::at(3);
        let food = fx.role(|r| r.food);
        assert_eq!(fx.apply(Verb::Eat, food).narration, vec![msg::DELICIOUS]);
        let again = fx.apply(Verb::Eat, food);
        assert!(!again.success);
        assert_eq!(again.narration, vec![msg::OK]);
    }

    #[test]
    fn water_drinks_and_pours() {
        let mut fx = Fixture::at(3);
        let water = fx.role(|r| r.water);
        assert!(fx.apply(Verb::Drink, water).success);
        assert!(!fx.apply(Verb::Drink, water).success);
        assert_eq!(fx.apply(Verb::Pour, water).narration, vec![msg::POURED]);
        assert_eq!(fx.state.prop(water), 1);
    }

    #[test]
    fn striking_matches_sets_the_flag() {
        let mut fx = Fixture::at(17);
        let matches = fx.role(|r| r.matches);
        assert_eq!(fx.apply(Verb::Strike, matches).narration, vec![msg::MATCH_FLARES]);
        assert_eq!(fx.state.prop(matches), 1);

        let again = fx.apply(Verb::Strike, matches);
        assert!(!again.success);
        assert_eq!(again.narration, vec![msg::OK]);
    }

    #[test]
    fn rubbing_the_lamp_changes_nothing() {
        let mut fx = Fixture::at(3);
        let lamp = fx.role(|r| r.lamp);
        let result = fx.apply(Verb::Rub, lamp);
        assert!(!result.success);
        assert_eq!(result.narration, vec![msg::RUB_LAMP]);
    }

    #[test]
    fn attacking_creatures() {
        let mut fx = Fixture::at(19);
        let snake = fx.role(|r| r.snake);
        assert_eq!(fx.apply(Verb::Attack, snake).narration, vec![msg::SNAKE_POINTLESS]);

        let mut fx = Fixture::at(13);
        let bird = fx.role(|r| r.bird);
        assert_eq!(fx.apply(Verb::Attack, bird).narration, vec![msg::BIRD_DEAD]);
        assert_eq!(fx.state.place(bird), Place::Nowhere);
    }

    #[test]
    fn dwarf_combat_takes_precedence() {
        let mut fx = Fixture::at(13);
        let bird = fx.role(|r| r.bird);
        fx.state.threat.slots[0] = DwarfSlot {
            position: Some(RoomId(13)),
            previous: Some(RoomId(13)),
            seen: true,
        };
        fx.dice = ScriptedDice::new([0.1]);
        let result = fx.apply(Verb::Attack, bird);
        assert_eq!(result.narration, vec![msg::DWARF_KILLED]);
        assert_eq!(fx.state.threat.slots[0], DwarfSlot::default());
        assert_eq!(fx.state.place(bird), Place::Room(RoomId(13)));
    }

    #[test]
    fn unmatched_pair_is_acknowledged() {
        let mut fx = Fixture::at(3);
        let keys = fx.role(|r| r.keys);
        let result = fx.apply(Verb::Pour, keys);
        assert!(!result.success);
        assert_eq!(result.narration, vec![msg::OK]);
    }
}
