//! Tokenizing player input and resolving words to atoms.

use cave_core::{Content, MotionCode, ObjectId, Verb, Word};

/// The meaning of one input word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Atom {
    /// A travel word.
    Motion(MotionCode),
    /// An object name.
    Object(ObjectId),
    /// An action verb.
    Verb(Verb),
    /// Not in the vocabulary.
    Unknown,
}

impl From<Word> for Atom {
    fn from(word: Word) -> Self {
        match word {
            Word::Motion(code) => Self::Motion(code),
            Word::Object(id) => Self::Object(id),
            Word::Verb(verb) => Self::Verb(verb),
        }
    }
}

/// Resolve one word against the vocabulary, ignoring case.
pub fn resolve(content: &Content, token: &str) -> Atom {
    content.word(token).map_or(Atom::Unknown, Atom::from)
}

/// One command line split into at most two upper-case words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input {
    /// The first word.
    pub first: String,
    /// The second word, if any. Anything after it is ignored.
    pub second: Option<String>,
}

impl Input {
    /// Split a line into words. Blank lines yield `None`.
    pub fn tokenize(line: &str) -> Option<Self> {
        let mut words = line.split_whitespace().map(str::to_uppercase);
        let first = words.next()?;
        Some(Self {
            first,
            second: words.next(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cave_core::RoomId;

    #[test]
    fn tokenize_upper_cases_two_words() {
        let input = Input::tokenize("  take   keys  now ").unwrap();
        assert_eq!(input.first, "TAKE");
        assert_eq!(input.second.as_deref(), Some("KEYS"));
    }

    #[test]
    fn tokenize_single_word() {
        let input = Input::tokenize("in").unwrap();
        assert_eq!(input.first, "IN");
        assert_eq!(input.second, None);
    }

    #[test]
    fn blank_lines_are_ignored() {
        assert_eq!(Input::tokenize(""), None);
        assert_eq!(Input::tokenize("   \t "), None);
    }

    #[test]
    fn resolve_each_kind() {
        let content = Content::builtin().unwrap();
        let keys = content.roles().objects.keys;
        assert_eq!(resolve(&content, "keys"), Atom::Object(keys));
        assert_eq!(resolve(&content, "CARRY"), Atom::Verb(Verb::Take));
        assert_eq!(resolve(&content, "plugh-ish"), Atom::Unknown);
        assert!(matches!(resolve(&content, "in"), Atom::Motion(_)));
    }

    #[test]
    fn synonyms_resolve_to_one_atom() {
        let content = Content::builtin().unwrap();
        assert_eq!(resolve(&content, "IN"), resolve(&content, "INSIDE"));
        assert_eq!(resolve(&content, "D"), resolve(&content, "DOWN"));
        assert_eq!(resolve(&content, "I"), resolve(&content, "INVENTORY"));
        assert_eq!(
            content.edge(RoomId(1), MotionCode(7)).map(|d| d.rooms()),
            Some(vec![RoomId(3)])
        );
    }
}
