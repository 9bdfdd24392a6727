use serde::{Deserialize, Serialize};

use crate::constants::{
    ADJECTIVE_TOLERANCE, ADVERB_TOLERANCE, DEFAULT_TOLERANCE, NOUN_TOLERANCE, VERB_TOLERANCE,
};

use super::code::SenseCode;

/// Coarse part-of-speech class derived from a thesaurus code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WordCategory {
    Noun,
    Verb,
    Adjective,
    Adverb,
    #[default]
    Other,
}

impl WordCategory {
    /// Maps the major class of a code to a category.
    ///
    /// `A`-`C` are people, things and time/space (nouns), `D`-`F` are abstract
    /// matters, activities and actions (verbs), `G`-`H` are states and
    /// properties (adjectives), `K` is auxiliary words (adverbs).
    pub fn from_code(code: &SenseCode) -> Self {
        match code.class() {
            Some('A' | 'B' | 'C') => Self::Noun,
            Some('D' | 'E' | 'F') => Self::Verb,
            Some('G' | 'H') => Self::Adjective,
            Some('K') => Self::Adverb,
            _ => Self::Other,
        }
    }

    /// Normalized position distance tolerated before the Gaussian falloff kicks in.
    pub fn tolerance(self) -> f64 {
        match self {
            Self::Verb => VERB_TOLERANCE,
            Self::Noun => NOUN_TOLERANCE,
            Self::Adjective => ADJECTIVE_TOLERANCE,
            Self::Adverb => ADVERB_TOLERANCE,
            Self::Other => DEFAULT_TOLERANCE,
        }
    }

    /// Returns a short label for logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Noun => "noun",
            Self::Verb => "verb",
            Self::Adjective => "adjective",
            Self::Adverb => "adverb",
            Self::Other => "other",
        }
    }
}

impl std::fmt::Display for WordCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
