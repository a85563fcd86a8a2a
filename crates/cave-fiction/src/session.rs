//! Turn orchestration.
//!
//! One turn runs the threat engine, describes the room (or warns that it is
//! dark), then reads commands until one of them advances the world. Commands
//! that fail, ask for clarification, or only report (such as INVENTORY) keep
//! the turn open.

use std::rc::Rc;

use cave_core::text::msg;
use cave_core::{Content, MessageId, MotionCode, ObjectId, Verb, WorldState};
use tracing::{debug, info};

use crate::actions::{self, ActionResult};
use crate::config::SessionConfig;
use crate::console::Console;
use crate::context::Context;
use crate::dice::{Dice, SeededDice};
use crate::error::FictionResult;
use crate::hints;
use crate::narrator::Narration;
use crate::parser::{self, Atom, Input};
use crate::threat;
use crate::travel::{self, Route};
use crate::visibility;

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ending {
    /// The player confirmed QUIT.
    Quit,
    /// A dwarf's knife found its mark.
    Defeated,
    /// The input stream closed.
    InputClosed,
}

/// What a command did to the current turn.
enum Step {
    /// Keep reading commands.
    Continue,
    /// Start the next turn.
    EndTurn,
    /// Stop the session.
    End(Ending),
}

/// A running adventure.
pub struct FictionSession {
    content: Rc<Content>,
    state: WorldState,
    dice: Box<dyn Dice>,
    config: SessionConfig,
}

impl FictionSession {
    /// Start a session with seeded dice.
    pub fn new(content: Content, config: SessionConfig) -> Self {
        let dice = SeededDice::new(config.seed);
        Self::with_dice(content, config, dice)
    }

    /// Start a session with a specific random source.
    pub fn with_dice(content: Content, config: SessionConfig, dice: impl Dice + 'static) -> Self {
        let state = WorldState::new(&content);
        Self {
            content: Rc::new(content),
            state,
            dice: Box::new(dice),
            config,
        }
    }

    /// The content dataset.
    pub fn content(&self) -> &Content {
        &self.content
    }

    /// The world state.
    pub fn state(&self) -> &WorldState {
        &self.state
    }

    /// Mutable access to the world state, for setting up scenarios.
    pub fn state_mut(&mut self) -> &mut WorldState {
        &mut self.state
    }

    /// The session configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Play turns until the session ends.
    pub fn play(&mut self, console: &mut dyn Console) -> FictionResult<Ending> {
        info!(title = self.content.title(), seed = self.config.seed, "session started");
        loop {
            if let Some(ending) = self.turn(console)? {
                info!(?ending, location = %self.state.location(), "session ended");
                return Ok(ending);
            }
        }
    }

    /// Run one turn. Returns the ending if the session is over.
    pub fn turn(&mut self, console: &mut dyn Console) -> FictionResult<Option<Ending>> {
        let content = Rc::clone(&self.content);
        let mut narration = Narration::new(&content);

        let encounter = {
            let mut ctx = Context {
                content: &self.content,
                state: &mut self.state,
                dice: self.dice.as_mut(),
                config: &self.config,
            };
            threat::tick(&mut ctx)?
        };
        narration.encounter(&encounter)?;
        if encounter.defeated() {
            flush(console, &mut narration)?;
            return Ok(Some(Ending::Defeated));
        }

        if visibility::player_can_see(&self.content, &self.state)? {
            narration.room(&self.state)?;
            narration.objects(&self.state)?;
        } else {
            narration.say(msg::PITCH_DARK)?;
        }
        let here = self.state.location();
        self.state.record_visit(here, self.config.abbreviation_cycle);
        flush(console, &mut narration)?;

        loop {
            let Some(line) = console.read_line()? else {
                narration.say(msg::GOODBYE)?;
                flush(console, &mut narration)?;
                return Ok(Some(Ending::InputClosed));
            };
            let Some(input) = Input::tokenize(&line) else {
                continue;
            };

            let step = self.command(&input, console, &mut narration)?;
            flush(console, &mut narration)?;
            match step {
                Step::Continue => {}
                Step::EndTurn => return Ok(None),
                Step::End(ending) => return Ok(Some(ending)),
            }
        }
    }

    fn command(
        &mut self,
        input: &Input,
        console: &mut dyn Console,
        narration: &mut Narration<'_>,
    ) -> FictionResult<Step> {
        let first = parser::resolve(&self.content, &input.first);
        let second = input
            .second
            .as_deref()
            .map(|word| parser::resolve(&self.content, word));
        debug!(input = %input.first, ?first, ?second, "command");

        if first == Atom::Unknown {
            return self.not_understood(console, narration);
        }
        self.state.trouble = 0;

        let roles = self.content.roles();
        if first == Atom::Motion(roles.motions.enter)
            && (second == Some(Atom::Motion(roles.motions.stream))
                || second == Some(Atom::Object(roles.objects.water)))
        {
            narration.say(msg::FEET_WET)?;
            return Ok(Step::Continue);
        }

        match (first, second) {
            (Atom::Motion(motion), _) => self.motion(motion, &input.first, console, narration),
            (Atom::Object(object), Some(Atom::Verb(verb))) => self.act(verb, object, narration),
            (Atom::Object(_), _) => {
                narration.text(format!("What do you want to do with the {}?", input.first));
                Ok(Step::Continue)
            }
            (Atom::Verb(Verb::Inventory), _) => {
                narration.inventory(&self.state)?;
                Ok(Step::Continue)
            }
            (Atom::Verb(Verb::Look), _) => {
                let here = self.state.location();
                self.state.forget_visits(here);
                Ok(Step::EndTurn)
            }
            (Atom::Verb(verb), Some(Atom::Object(object))) => self.act(verb, object, narration),
            (Atom::Verb(verb), None) => self.infer(verb, &input.first, narration),
            (Atom::Verb(_), Some(_)) => {
                narration.text(format!("{} what?", input.first));
                Ok(Step::Continue)
            }
            (Atom::Unknown, _) => Ok(Step::Continue),
        }
    }

    fn not_understood(
        &mut self,
        console: &mut dyn Console,
        narration: &mut Narration<'_>,
    ) -> FictionResult<Step> {
        self.state.trouble += 1;
        if self.state.trouble >= self.config.frustration_threshold {
            self.state.trouble = 0;
            if let Some(hint) = hints::applicable(&self.content, &self.state) {
                debug!(question = %hint.question, "offering hint");
                match ask(console, narration, hint.question)? {
                    Some(true) => narration.say(hint.answer)?,
                    Some(false) => narration.say(msg::OK)?,
                    None => return closed(narration),
                }
            }
        }
        let pick = self.dice.pick(msg::NOT_UNDERSTOOD.len());
        narration.say(msg::NOT_UNDERSTOOD[pick])?;
        Ok(Step::Continue)
    }

    fn motion(
        &mut self,
        motion: MotionCode,
        word: &str,
        console: &mut dyn Console,
        narration: &mut Narration<'_>,
    ) -> FictionResult<Step> {
        let motions = &self.content.roles().motions;
        if motion == motions.quit {
            return match ask(console, narration, msg::QUIT_QUESTION)? {
                Some(true) => {
                    narration.say(msg::GOODBYE)?;
                    Ok(Step::End(Ending::Quit))
                }
                Some(false) => Ok(Step::Continue),
                None => closed(narration),
            };
        }

        if motion == motions.west && word.len() > 1 {
            self.state.west_count += 1;
            if self.state.west_count == self.config.west_tip_after {
                narration.say(msg::WEST_TIP)?;
            }
        }

        let route = {
            let mut ctx = self.context();
            travel::resolve(&mut ctx, motion)
        };
        match route {
            Route::Moved(room) => {
                self.content.room(room)?;
                self.state.move_to(room);
                Ok(Step::EndTurn)
            }
            Route::Blocked(message) => {
                narration.say(message)?;
                Ok(Step::Continue)
            }
        }
    }

    fn act(
        &mut self,
        verb: Verb,
        object: ObjectId,
        narration: &mut Narration<'_>,
    ) -> FictionResult<Step> {
        let result = {
            let mut ctx = self.context();
            actions::apply(&mut ctx, verb, object)?
        };
        report(result, narration)
    }

    fn infer(&mut self, verb: Verb, word: &str, narration: &mut Narration<'_>) -> FictionResult<Step> {
        if verb == Verb::Attack {
            let fought = {
                let mut ctx = self.context();
                actions::fight_dwarf(&mut ctx)
            };
            if let Some(result) = fought {
                return report(result, narration);
            }
        }

        let in_scope: Vec<ObjectId> = self.state.in_scope().take(2).collect();
        match in_scope.as_slice() {
            [object] => {
                debug!(?verb, %object, "inferred object");
                self.act(verb, *object, narration)
            }
            _ => {
                narration.text(format!("{word} what?"));
                Ok(Step::Continue)
            }
        }
    }

    fn context(&mut self) -> Context<'_> {
        Context {
            content: &self.content,
            state: &mut self.state,
            dice: self.dice.as_mut(),
            config: &self.config,
        }
    }
}

fn report(result: ActionResult, narration: &mut Narration<'_>) -> FictionResult<Step> {
    narration.say_all(&result.narration)?;
    Ok(if result.success {
        Step::EndTurn
    } else {
        Step::Continue
    })
}

fn closed(narration: &mut Narration<'_>) -> FictionResult<Step> {
    narration.say(msg::GOODBYE)?;
    Ok(Step::End(Ending::InputClosed))
}

/// Ask a yes/no question until answered. `None` means the input closed.
fn ask(
    console: &mut dyn Console,
    narration: &mut Narration<'_>,
    question: MessageId,
) -> FictionResult<Option<bool>> {
    narration.say(question)?;
    flush(console, narration)?;
    loop {
        let Some(line) = console.read_line()? else {
            return Ok(None);
        };
        let Some(input) = Input::tokenize(&line) else {
            continue;
        };
        match input.first.as_str() {
            "YES" | "Y" => return Ok(Some(true)),
            "NO" | "N" => return Ok(Some(false)),
            _ => {
                narration.say(msg::ANSWER_YES_OR_NO)?;
                flush(console, narration)?;
            }
        }
    }
}

fn flush(console: &mut dyn Console, narration: &mut Narration<'_>) -> FictionResult<()> {
    for line in narration.take() {
        console.write_line(&line)?;
    }
    Ok(())
}
