//! Command interpreter and turn engine for the cave adventure.
//!
//! Reads two-word commands through a [`Console`], resolves them against the
//! content vocabulary, moves the player along the travel graph, applies verbs
//! to objects, runs the dwarf threat, and narrates everything back. All
//! randomness flows through one [`Dice`] so sessions can be replayed exactly.

/// Verb effects on the world state.
pub mod actions;
/// Session tuning knobs.
pub mod config;
/// Line-oriented input and output boundary.
pub mod console;
/// Borrowed view of everything a component needs during a turn.
pub mod context;
/// Injectable random source.
pub mod dice;
/// Error types for the interpreter.
pub mod error;
/// Contextual yes/no hints offered to stuck players.
pub mod hints;
/// Narration buffer and description rendering.
pub mod narrator;
/// Tokenizing input and resolving words to atoms.
pub mod parser;
/// Turn orchestration.
pub mod session;
/// Dwarf threat state machine.
pub mod threat;
/// Travel resolution along the travel graph.
pub mod travel;
/// Whether the player can see.
pub mod visibility;

pub use actions::ActionResult;
pub use config::SessionConfig;
pub use console::{Console, ScriptedConsole, StdConsole};
pub use context::Context;
pub use dice::{Dice, ScriptedDice, SeededDice};
pub use error::{FictionError, FictionResult};
pub use parser::{Atom, Input};
pub use session::{Ending, FictionSession};
pub use threat::Encounter;
pub use travel::Route;
