//! Contextual yes/no hints offered to stuck players.

use cave_core::text::msg;
use cave_core::{Content, MessageId, WorldState};

/// A hint: a question and the text shown when the player says yes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hint {
    /// Asked first.
    pub question: MessageId,
    /// Shown on yes.
    pub answer: MessageId,
}

/// The first hint whose situation matches the player's.
///
/// - At the grate while it is locked and no keys are at hand.
/// - Beside the bird while carrying the rod that frightens it.
/// - Before the unpacified snake while carrying the bird.
pub fn applicable(content: &Content, state: &WorldState) -> Option<Hint> {
    let roles = &content.roles().objects;
    let here = state.location();

    if state.is_at(roles.grate, here) && state.prop(roles.grate) == 0 && !state.is_here(roles.keys)
    {
        return Some(Hint {
            question: msg::HINT_GRATE_QUESTION,
            answer: msg::HINT_GRATE_ANSWER,
        });
    }
    if state.is_at(roles.bird, here) && state.is_carried(roles.rod) {
        return Some(Hint {
            question: msg::HINT_BIRD_QUESTION,
            answer: msg::HINT_BIRD_ANSWER,
        });
    }
    if state.is_at(roles.snake, here) && state.prop(roles.snake) == 0 && state.is_carried(roles.bird)
    {
        return Some(Hint {
            question: msg::HINT_SNAKE_QUESTION,
            answer: msg::HINT_SNAKE_ANSWER,
        });
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use cave_core::RoomId;

    fn setup(room: u32) -> (Content, WorldState) {
        let content = Content::builtin().unwrap();
        let mut state = WorldState::new(&content);
        state.move_to(RoomId(room));
        (content, state)
    }

    #[test]
    fn locked_grate_without_keys() {
        let (content, mut state) = setup(8);
        let hint = applicable(&content, &state).unwrap();
        assert_eq!(hint.question, msg::HINT_GRATE_QUESTION);

        state.carry(content.roles().objects.keys).unwrap();
        assert_eq!(applicable(&content, &state), None);
    }

    #[test]
    fn open_grate_needs_no_hint() {
        let (content, mut state) = setup(8);
        state.set_prop(content.roles().objects.grate, 1).unwrap();
        assert_eq!(applicable(&content, &state), None);
    }

    #[test]
    fn bird_with_rod() {
        let (content, mut state) = setup(13);
        assert_eq!(applicable(&content, &state), None);
        state.carry(content.roles().objects.rod).unwrap();
        assert_eq!(
            applicable(&content, &state).map(|h| h.answer),
            Some(msg::HINT_BIRD_ANSWER)
        );
    }

    #[test]
    fn snake_with_bird() {
        let (content, mut state) = setup(19);
        let roles = content.roles().objects.clone();
        state.carry(roles.bird).unwrap();
        assert_eq!(
            applicable(&content, &state).map(|h| h.question),
            Some(msg::HINT_SNAKE_QUESTION)
        );
        state.set_prop(roles.snake, 1).unwrap();
        assert_eq!(applicable(&content, &state), None);
    }

    #[test]
    fn nowhere_special() {
        let (content, state) = setup(1);
        assert_eq!(applicable(&content, &state), None);
    }
}
