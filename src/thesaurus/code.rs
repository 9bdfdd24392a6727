use std::fmt;
use std::str::FromStr;

use crate::constants::SENSE_CODE_MIN_LEN;

use super::error::ThesaurusError;

/// Hierarchical thesaurus code, e.g. `Aa01A01=`.
///
/// Levels are fixed-width slices of the code: `[0]`, `[1]`, `[2..4]`, `[4]`,
/// `[5..7]`. Anything past the fifth level (the trailing `=`, `#` or `@` marker
/// of an 8-character code) is kept as `suffix` so the full code can be rebuilt.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SenseCode {
    pub first_level: String,
    pub second_level: String,
    pub third_level: String,
    pub fourth_level: String,
    pub fifth_level: String,
    pub suffix: String,
}

impl SenseCode {
    /// Parses a code string. Fails if it has fewer than 7 characters or if a
    /// level boundary does not fall on a character boundary.
    pub fn parse(code: &str) -> Result<Self, ThesaurusError> {
        let malformed = || ThesaurusError::MalformedCode {
            code: code.to_string(),
            min_len: SENSE_CODE_MIN_LEN,
        };

        if code.len() < SENSE_CODE_MIN_LEN {
            return Err(malformed());
        }

        let level = |range: std::ops::Range<usize>| code.get(range).map(str::to_string);

        Ok(Self {
            first_level: level(0..1).ok_or_else(malformed)?,
            second_level: level(1..2).ok_or_else(malformed)?,
            third_level: level(2..4).ok_or_else(malformed)?,
            fourth_level: level(4..5).ok_or_else(malformed)?,
            fifth_level: level(5..7).ok_or_else(malformed)?,
            suffix: code.get(7..).ok_or_else(malformed)?.to_string(),
        })
    }

    /// First character of the first level, used for category inference.
    pub fn class(&self) -> Option<char> {
        self.first_level.chars().next()
    }

    /// Rebuilds the full code string this value was parsed from.
    pub fn to_code_string(&self) -> String {
        self.to_string()
    }
}

impl FromStr for SenseCode {
    type Err = ThesaurusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for SenseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}{}{}{}",
            self.first_level,
            self.second_level,
            self.third_level,
            self.fourth_level,
            self.fifth_level,
            self.suffix
        )
    }
}
