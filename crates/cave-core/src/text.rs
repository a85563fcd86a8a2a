use serde::{Deserialize, Serialize};

use crate::id::MessageId;

/// Message text: a single line or a block of lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Text {
    /// One line of text.
    Line(String),
    /// Several lines printed in order.
    Lines(Vec<String>),
}

impl Text {
    /// Iterate over the lines of this text.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        let slice: &[String] = match self {
            Self::Line(line) => std::slice::from_ref(line),
            Self::Lines(lines) => lines,
        };
        slice.iter().map(String::as_str)
    }
}

/// Message ids the interpreter narrates directly.
///
/// Every dataset must define all of them; see [`REQUIRED`](msg::REQUIRED).
pub mod msg {
    use super::MessageId;

    /// The dwarves have woken up and an axe lands at the player's feet.
    pub const DWARVES_APPEAR: MessageId = MessageId(3);
    /// A single dwarf shares the room with the player.
    pub const ONE_DWARF: MessageId = MessageId(4);
    /// A single dwarf throws a knife.
    pub const ONE_KNIFE: MessageId = MessageId(5);
    /// One of several knives hit.
    pub const ONE_OF_THEM_HITS: MessageId = MessageId(6);
    /// None of several knives hit.
    pub const NONE_OF_THEM_HIT: MessageId = MessageId(7);
    /// A single knife missed.
    pub const KNIFE_MISSES: MessageId = MessageId(8);
    /// The single knife hit.
    pub const KNIFE_HITS: MessageId = MessageId(9);
    /// No travel edge for this motion.
    pub const CANT_GO: MessageId = MessageId(12);
    /// First "did not understand" variant.
    pub const HUH: MessageId = MessageId(13);
    /// Taking something already carried.
    pub const ALREADY_CARRYING: MessageId = MessageId(15);
    /// The room is dark.
    pub const PITCH_DARK: MessageId = MessageId(16);
    /// Tip printed after the tenth WEST.
    pub const WEST_TIP: MessageId = MessageId(17);
    /// Hint question in the bird chamber.
    pub const HINT_BIRD_QUESTION: MessageId = MessageId(18);
    /// Hint answer in the bird chamber.
    pub const HINT_BIRD_ANSWER: MessageId = MessageId(19);
    /// Hint question in front of the snake.
    pub const HINT_SNAKE_QUESTION: MessageId = MessageId(20);
    /// Hint answer in front of the snake.
    pub const HINT_SNAKE_ANSWER: MessageId = MessageId(21);
    /// Quit confirmation question.
    pub const QUIT_QUESTION: MessageId = MessageId(22);
    /// Farewell on quit or closed input.
    pub const GOODBYE: MessageId = MessageId(23);
    /// Terminal narration after the dwarves win.
    pub const GAME_OVER: MessageId = MessageId(24);
    /// Taking a fixed object.
    pub const CANT_TAKE: MessageId = MessageId(25);
    /// The bird will not be caught while the rod is carried.
    pub const BIRD_FRIGHTENED: MessageId = MessageId(27);
    /// LOCK or UNLOCK on something without a lock.
    pub const NOTHING_TO_LOCK: MessageId = MessageId(28);
    /// Dropping something not carried.
    pub const NOT_CARRYING: MessageId = MessageId(29);
    /// The bird drives off the snake.
    pub const BIRD_VS_SNAKE: MessageId = MessageId(30);
    /// The named object is neither carried nor in the room.
    pub const NOT_HERE: MessageId = MessageId(31);
    /// LOCK or UNLOCK without the keys.
    pub const NO_KEYS: MessageId = MessageId(33);
    /// UNLOCK on an unlocked grate.
    pub const ALREADY_UNLOCKED: MessageId = MessageId(34);
    /// The grate is now locked.
    pub const NOW_LOCKED: MessageId = MessageId(35);
    /// LOCK on a locked grate.
    pub const ALREADY_LOCKED: MessageId = MessageId(36);
    /// The grate is now unlocked.
    pub const NOW_UNLOCKED: MessageId = MessageId(37);
    /// LIGHT or EXTINGUISH on something other than the lamp.
    pub const NOT_A_LIGHT: MessageId = MessageId(38);
    /// The lamp is now on.
    pub const LAMP_ON: MessageId = MessageId(39);
    /// The lamp is now off.
    pub const LAMP_OFF: MessageId = MessageId(40);
    /// The match flares up.
    pub const MATCH_FLARES: MessageId = MessageId(41);
    /// Attacking the snake.
    pub const SNAKE_POINTLESS: MessageId = MessageId(43);
    /// Attacking anything else.
    pub const BAD_IDEA: MessageId = MessageId(44);
    /// The bird has been killed.
    pub const BIRD_DEAD: MessageId = MessageId(45);
    /// A dwarf was killed.
    pub const DWARF_KILLED: MessageId = MessageId(47);
    /// A dwarf dodged the attack.
    pub const DWARF_DODGES: MessageId = MessageId(48);
    /// Generic acknowledgement, also the catch-all failure.
    pub const OK: MessageId = MessageId(54);
    /// Second "did not understand" variant.
    pub const WHAT: MessageId = MessageId(60);
    /// Third "did not understand" variant.
    pub const UNKNOWN_WORD: MessageId = MessageId(61);
    /// Hint question at the grate.
    pub const HINT_GRATE_QUESTION: MessageId = MessageId(62);
    /// Hint answer at the grate.
    pub const HINT_GRATE_ANSWER: MessageId = MessageId(63);
    /// ENTER STREAM.
    pub const FEET_WET: MessageId = MessageId(70);
    /// Food eaten.
    pub const DELICIOUS: MessageId = MessageId(72);
    /// Water drunk.
    pub const BOTTLE_DRAINED: MessageId = MessageId(74);
    /// Rubbing the lamp.
    pub const RUB_LAMP: MessageId = MessageId(76);
    /// Water poured out.
    pub const POURED: MessageId = MessageId(78);
    /// INVENTORY with nothing carried.
    pub const EMPTY_HANDED: MessageId = MessageId(80);
    /// INVENTORY heading.
    pub const HOLDING: MessageId = MessageId(81);
    /// A yes/no question got some other answer.
    pub const ANSWER_YES_OR_NO: MessageId = MessageId(82);

    /// The variants picked at random when a word is not understood.
    pub const NOT_UNDERSTOOD: [MessageId; 3] = [WHAT, UNKNOWN_WORD, HUH];

    /// Every message a dataset must define.
    pub const REQUIRED: &[MessageId] = &[
        DWARVES_APPEAR,
        ONE_DWARF,
        ONE_KNIFE,
        ONE_OF_THEM_HITS,
        NONE_OF_THEM_HIT,
        KNIFE_MISSES,
        KNIFE_HITS,
        CANT_GO,
        HUH,
        ALREADY_CARRYING,
        PITCH_DARK,
        WEST_TIP,
        HINT_BIRD_QUESTION,
        HINT_BIRD_ANSWER,
        HINT_SNAKE_QUESTION,
        HINT_SNAKE_ANSWER,
        QUIT_QUESTION,
        GOODBYE,
        GAME_OVER,
        CANT_TAKE,
        BIRD_FRIGHTENED,
        NOTHING_TO_LOCK,
        NOT_CARRYING,
        BIRD_VS_SNAKE,
        NOT_HERE,
        NO_KEYS,
        ALREADY_UNLOCKED,
        NOW_LOCKED,
        ALREADY_LOCKED,
        NOW_UNLOCKED,
        NOT_A_LIGHT,
        LAMP_ON,
        LAMP_OFF,
        MATCH_FLARES,
        SNAKE_POINTLESS,
        BAD_IDEA,
        BIRD_DEAD,
        DWARF_KILLED,
        DWARF_DODGES,
        OK,
        WHAT,
        UNKNOWN_WORD,
        HINT_GRATE_QUESTION,
        HINT_GRATE_ANSWER,
        FEET_WET,
        DELICIOUS,
        BOTTLE_DRAINED,
        RUB_LAMP,
        POURED,
        EMPTY_HANDED,
        HOLDING,
        ANSWER_YES_OR_NO,
    ];
}
