use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::id::{MessageId, MotionCode, ObjectId, RoomId};
use crate::text::{Text, msg};
use crate::travel::{Destination, TravelEdge, TravelRule};
use crate::vocabulary::Word;

const BUILTIN: &str = include_str!("../data/colossal_cave.json");

/// Whether a room can be seen without a light source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Lighting {
    /// Daylight or some other ambient light.
    NaturalLight,
    /// Pitch dark unless a lit lamp is at hand.
    #[default]
    RequiresLightSource,
}

/// A room of the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// Stable room id.
    pub id: RoomId,
    /// Long description, shown on first visit and every few visits after.
    #[serde(default)]
    pub long: Vec<String>,
    /// Short description for repeat visits.
    #[serde(default)]
    pub short: Option<String>,
    /// Visibility class.
    #[serde(default)]
    pub light: Lighting,
    /// Deep rooms are where the dwarves roam.
    #[serde(default)]
    pub deep: bool,
}

/// Static definition of an object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectDef {
    /// Stable object id.
    pub id: ObjectId,
    /// Name used in the inventory listing.
    pub name: String,
    /// Starting room; absent means the object starts off the map.
    #[serde(default)]
    pub location: Option<RoomId>,
    /// Fixed objects can never be carried.
    #[serde(default)]
    pub fixed: bool,
    /// Default description when the object lies in a room.
    #[serde(default)]
    pub description: Option<String>,
    /// Descriptions that replace the default in a given state.
    #[serde(default)]
    pub states: BTreeMap<u8, String>,
}

impl ObjectDef {
    /// The description for the object in the given state, if it has one.
    pub fn describe(&self, state: u8) -> Option<&str> {
        self.states
            .get(&state)
            .or(self.description.as_ref())
            .map(String::as_str)
    }
}

/// Objects with special behavior in the interpreter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ObjectRoles {
    /// Unlocks the grate.
    pub keys: ObjectId,
    /// The light source.
    pub lamp: ObjectId,
    /// The lockable barrier.
    pub grate: ObjectId,
    /// Frightens the bird.
    pub rod: ObjectId,
    /// The capturable creature.
    pub bird: ObjectId,
    /// The antagonist creature pacified by the bird.
    pub snake: ObjectId,
    /// The flammable consumable.
    pub matches: ObjectId,
    /// Edible.
    pub food: ObjectId,
    /// Drinkable and pourable.
    pub water: ObjectId,
    /// Dropped when the dwarves wake up.
    pub axe: ObjectId,
}

/// Motions with special behavior in the interpreter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MotionRoles {
    /// Ends the session after confirmation.
    pub quit: MotionCode,
    /// Counted for the abbreviation tip.
    pub west: MotionCode,
    /// ENTER, combined with STREAM or WATER.
    pub enter: MotionCode,
    /// STREAM.
    pub stream: MotionCode,
}

/// Bindings from engine roles to dataset ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Roles {
    /// Object roles.
    pub objects: ObjectRoles,
    /// Motion roles.
    pub motions: MotionRoles,
}

/// Dwarf activation room and position schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThreatTable {
    /// Entering this room wakes the dwarves.
    pub trigger: RoomId,
    /// Number of dwarf slots.
    pub slots: usize,
    /// Positions visited by unseen dwarves, indexed by slot and turn.
    pub schedule: Vec<RoomId>,
}

/// A message row as stored in the content document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageDef {
    /// Stable message id.
    pub id: MessageId,
    /// The text to print.
    pub text: Text,
}

/// The content document as it appears on disk, before validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentFile {
    /// Title printed as the banner.
    pub title: String,
    /// The room the player starts in.
    pub start: RoomId,
    /// Room table.
    pub rooms: Vec<Room>,
    /// Object table.
    pub objects: Vec<ObjectDef>,
    /// Word table, case-insensitive.
    pub vocabulary: BTreeMap<String, Word>,
    /// Travel table.
    pub travel: Vec<TravelEdge>,
    /// Message table.
    pub messages: Vec<MessageDef>,
    /// Role bindings.
    pub roles: Roles,
    /// Dwarf configuration.
    pub threat: ThreatTable,
}

/// A validated content dataset.
///
/// Every id referenced anywhere in the dataset is guaranteed to resolve.
/// Immutable for the lifetime of a session.
#[derive(Debug, Clone)]
pub struct Content {
    title: String,
    start: RoomId,
    rooms: BTreeMap<RoomId, Room>,
    objects: BTreeMap<ObjectId, ObjectDef>,
    vocabulary: HashMap<String, Word>,
    travel: HashMap<(RoomId, MotionCode), Destination>,
    messages: HashMap<MessageId, Text>,
    roles: Roles,
    threat: ThreatTable,
}

impl Content {
    /// The dataset shipped with the interpreter.
    pub fn builtin() -> CoreResult<Self> {
        Self::from_json(BUILTIN)
    }

    /// Parse and validate a JSON content document.
    pub fn from_json(source: &str) -> CoreResult<Self> {
        let file: ContentFile = serde_json::from_str(source)?;
        Self::from_file(file)
    }

    /// Read, parse, and validate a JSON content file.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let source = std::fs::read_to_string(path).map_err(|source| CoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&source)
    }

    /// Index and validate a parsed content document.
    pub fn from_file(file: ContentFile) -> CoreResult<Self> {
        let mut rooms = BTreeMap::new();
        for room in file.rooms {
            let id = room.id;
            if rooms.insert(id, room).is_some() {
                return Err(CoreError::DuplicateRoom(id));
            }
        }

        let mut objects = BTreeMap::new();
        for object in file.objects {
            let id = object.id;
            if objects.insert(id, object).is_some() {
                return Err(CoreError::DuplicateObject(id));
            }
        }

        let mut messages = HashMap::new();
        for message in file.messages {
            if messages.insert(message.id, message.text).is_some() {
                return Err(CoreError::DuplicateMessage(message.id));
            }
        }

        let mut travel = HashMap::new();
        for edge in file.travel {
            if travel.insert((edge.from, edge.motion), edge.to).is_some() {
                return Err(CoreError::DuplicateEdge {
                    room: edge.from,
                    motion: edge.motion,
                });
            }
        }

        let mut vocabulary = HashMap::new();
        for (word, meaning) in file.vocabulary {
            let word = word.to_uppercase();
            if vocabulary.insert(word.clone(), meaning).is_some() {
                return Err(CoreError::DuplicateWord(word));
            }
        }

        let content = Self {
            title: file.title,
            start: file.start,
            rooms,
            objects,
            vocabulary,
            travel,
            messages,
            roles: file.roles,
            threat: file.threat,
        };
        content.validate()?;
        Ok(content)
    }

    fn validate(&self) -> CoreResult<()> {
        self.check_room(self.start, || "start room".to_string())?;

        for object in self.objects.values() {
            if let Some(room) = object.location {
                self.check_room(room, || format!("object {}", object.id))?;
            }
        }

        for ((from, motion), destination) in &self.travel {
            let context = || format!("travel edge from room {from} (motion {motion})");
            self.check_room(*from, context)?;
            for room in destination.rooms() {
                self.check_room(room, context)?;
            }
            match destination {
                Destination::Room(_) => {}
                Destination::Rule(TravelRule::Random { chance, .. }) => {
                    if !(0.0..=1.0).contains(chance) {
                        return Err(CoreError::InvalidChance {
                            chance: *chance,
                            context: context(),
                        });
                    }
                }
                Destination::Rule(TravelRule::Property {
                    object, blocked, ..
                }) => {
                    self.check_object(*object, context)?;
                    if let Some(message) = blocked {
                        self.check_message(*message, context)?;
                    }
                }
            }
        }

        for (word, meaning) in &self.vocabulary {
            if let Word::Object(object) = meaning {
                self.check_object(*object, || format!("vocabulary word {word}"))?;
            }
        }

        let roles = &self.roles.objects;
        for (role, object) in [
            ("keys", roles.keys),
            ("lamp", roles.lamp),
            ("grate", roles.grate),
            ("rod", roles.rod),
            ("bird", roles.bird),
            ("snake", roles.snake),
            ("matches", roles.matches),
            ("food", roles.food),
            ("water", roles.water),
            ("axe", roles.axe),
        ] {
            self.check_object(object, || format!("{role} role"))?;
        }

        self.check_room(self.threat.trigger, || "dwarf trigger".to_string())?;
        let slots = self.threat.slots;
        if slots == 0 || slots > self.threat.schedule.len() {
            return Err(CoreError::InvalidSlotCount {
                slots,
                schedule: self.threat.schedule.len(),
            });
        }
        for (index, room) in self.threat.schedule.iter().enumerate() {
            self.check_room(*room, || format!("dwarf schedule entry {index}"))?;
        }

        for message in msg::REQUIRED {
            self.check_message(*message, || "interpreter".to_string())?;
        }

        Ok(())
    }

    fn check_room(&self, room: RoomId, context: impl FnOnce() -> String) -> CoreResult<()> {
        if self.rooms.contains_key(&room) {
            Ok(())
        } else {
            Err(CoreError::UnknownRoom {
                room,
                context: context(),
            })
        }
    }

    fn check_object(&self, object: ObjectId, context: impl FnOnce() -> String) -> CoreResult<()> {
        if self.objects.contains_key(&object) {
            Ok(())
        } else {
            Err(CoreError::UnknownObject {
                object,
                context: context(),
            })
        }
    }

    fn check_message(
        &self,
        message: MessageId,
        context: impl FnOnce() -> String,
    ) -> CoreResult<()> {
        if self.messages.contains_key(&message) {
            Ok(())
        } else {
            Err(CoreError::UnknownMessage {
                message,
                context: context(),
            })
        }
    }

    // -----------------------------------------------------------------------
    // Lookups
    // -----------------------------------------------------------------------

    /// Title of the dataset.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The starting room.
    pub fn start(&self) -> RoomId {
        self.start
    }

    /// Role bindings.
    pub fn roles(&self) -> &Roles {
        &self.roles
    }

    /// Dwarf configuration.
    pub fn threat(&self) -> &ThreatTable {
        &self.threat
    }

    /// Look up a room.
    pub fn room(&self, id: RoomId) -> CoreResult<&Room> {
        self.rooms.get(&id).ok_or_else(|| CoreError::UnknownRoom {
            room: id,
            context: "lookup".to_string(),
        })
    }

    /// Look up an object definition.
    pub fn object(&self, id: ObjectId) -> CoreResult<&ObjectDef> {
        self.objects.get(&id).ok_or_else(|| CoreError::UnknownObject {
            object: id,
            context: "lookup".to_string(),
        })
    }

    /// Look up a message.
    pub fn message(&self, id: MessageId) -> CoreResult<&Text> {
        self.messages.get(&id).ok_or_else(|| CoreError::UnknownMessage {
            message: id,
            context: "lookup".to_string(),
        })
    }

    /// Look up a word, ignoring case.
    pub fn word(&self, token: &str) -> Option<Word> {
        self.vocabulary.get(&token.to_uppercase()).copied()
    }

    /// The travel edge leaving `room` on `motion`, if any.
    pub fn edge(&self, room: RoomId, motion: MotionCode) -> Option<&Destination> {
        self.travel.get(&(room, motion))
    }

    /// All rooms in id order.
    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.values()
    }

    /// All object definitions in id order.
    pub fn objects(&self) -> impl Iterator<Item = &ObjectDef> {
        self.objects.values()
    }

    /// Number of vocabulary words.
    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    /// Number of travel edges.
    pub fn travel_len(&self) -> usize {
        self.travel.len()
    }

    /// Number of messages.
    pub fn messages_len(&self) -> usize {
        self.messages.len()
    }
}
