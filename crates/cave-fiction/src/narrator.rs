//! Narration buffer and description rendering.
//!
//! Every block of narration ends with a blank line, so consecutive messages
//! read as separate paragraphs.

use cave_core::text::msg;
use cave_core::{Content, CoreResult, MessageId, WorldState};

use crate::threat::Encounter;

/// Lines of narration waiting to be written.
#[derive(Debug)]
pub struct Narration<'a> {
    content: &'a Content,
    lines: Vec<String>,
}

impl<'a> Narration<'a> {
    /// An empty buffer narrating from `content`.
    pub fn new(content: &'a Content) -> Self {
        Self {
            content,
            lines: Vec::new(),
        }
    }

    /// Lines buffered so far.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Drain the buffer.
    pub fn take(&mut self) -> Vec<String> {
        std::mem::take(&mut self.lines)
    }

    /// A message from the content table.
    pub fn say(&mut self, id: MessageId) -> CoreResult<()> {
        self.push_message(id)?;
        self.blank();
        Ok(())
    }

    /// Several messages in order.
    pub fn say_all(&mut self, ids: &[MessageId]) -> CoreResult<()> {
        ids.iter().try_for_each(|id| self.say(*id))
    }

    /// A line composed by the interpreter.
    pub fn text(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
        self.blank();
    }

    /// The player's room: long form when the visit counter is 0 or there is
    /// no short form, short form otherwise.
    pub fn room(&mut self, state: &WorldState) -> CoreResult<()> {
        let here = state.location();
        let room = self.content.room(here)?;
        match &room.short {
            Some(short) if state.visits(here) != 0 || room.long.is_empty() => {
                self.lines.push(short.clone());
            }
            _ => self.lines.extend(room.long.iter().cloned()),
        }
        self.blank();
        Ok(())
    }

    /// Objects lying in the player's room, described by their state.
    pub fn objects(&mut self, state: &WorldState) -> CoreResult<()> {
        let mut any = false;
        for id in state.objects_at(state.location()) {
            let object = self.content.object(id)?;
            if let Some(text) = object.describe(state.prop(id)) {
                self.lines.push(text.to_string());
                any = true;
            }
        }
        if any {
            self.blank();
        }
        Ok(())
    }

    /// The carried objects by name.
    pub fn inventory(&mut self, state: &WorldState) -> CoreResult<()> {
        let carried: Vec<_> = state.carried().collect();
        if carried.is_empty() {
            return self.say(msg::EMPTY_HANDED);
        }
        self.push_message(msg::HOLDING)?;
        for id in carried {
            let name = &self.content.object(id)?.name;
            self.lines.push(format!("  {name}"));
        }
        self.blank();
        Ok(())
    }

    /// What the dwarves did this turn.
    pub fn encounter(&mut self, encounter: &Encounter) -> CoreResult<()> {
        if encounter.appeared {
            self.say(msg::DWARVES_APPEAR)?;
        }
        match encounter.present {
            0 => return Ok(()),
            1 => self.say(msg::ONE_DWARF)?,
            n => self.text(format!(
                "There are {n} threatening little dwarves in the room with you!"
            )),
        }

        match (encounter.attacking, encounter.hits) {
            (0, _) => {}
            (1, 0) => self.say_all(&[msg::ONE_KNIFE, msg::KNIFE_MISSES])?,
            (1, _) => self.say_all(&[msg::ONE_KNIFE, msg::KNIFE_HITS])?,
            (n, hits) => {
                self.text(format!("{n} of them throw knives at you!"));
                match hits {
                    0 => self.say(msg::NONE_OF_THEM_HIT)?,
                    1 => self.say(msg::ONE_OF_THEM_HITS)?,
                    h => self.text(format!("{h} of them get you!")),
                }
            }
        }

        if encounter.defeated() {
            self.say(msg::GAME_OVER)?;
        }
        Ok(())
    }

    fn push_message(&mut self, id: MessageId) -> CoreResult<()> {
        let text = self.content.message(id)?;
        self.lines.extend(text.lines().map(str::to_string));
        Ok(())
    }

    fn blank(&mut self) {
        self.lines.push(String::new());
    }
}
