//! Coded synonym thesaurus (Cilin-style).
//!
//! The dictionary is a UTF-8 text file with one entry per line:
//!
//! ```text
//! Aa01A01= 人 士 人物 人士 人氏 人选
//! Ga01A01= 快乐 高兴 愉快
//! ```
//!
//! The first field is a [`SenseCode`], the remaining fields are the words filed
//! under it. Two lookups are derived from every line:
//!
//! - word → code (the last line a word appears on wins)
//! - full code string → words (the last line for a code wins)
//!
//! # Lifecycle
//!
//! A [`Thesaurus`] is built once and then only read. Reads take a shared lock;
//! loading takes the exclusive lock. [`Thesaurus::load_once`] is the
//! initialization gate for long-running hosts: only the first call touches the
//! file, concurrent callers wait for it, and a failed load leaves the thesaurus
//! empty (degraded mode: every word is [`WordCategory::Other`] and has no
//! synonyms).

pub mod category;
pub mod code;
pub mod error;


pub use category::WordCategory;
pub use code::SenseCode;
pub use error::{ThesaurusError, ThesaurusResult};

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::OnceLock;

use parking_lot::RwLock;
use serde::Serialize;
use tracing::{debug, info, warn};

/// Counters reported by a successful load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadStats {
    /// Lines read, including skipped ones.
    pub lines: usize,
    /// Lines registered as entries.
    pub entries: usize,
    /// Lines skipped as malformed.
    pub skipped: usize,
}

/// Result recorded by [`Thesaurus::load_once`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded(LoadStats),
    /// The file could not be read; lookups run without synonyms or categories.
    Degraded { reason: String },
}

impl LoadOutcome {
    pub fn is_degraded(&self) -> bool {
        matches!(self, LoadOutcome::Degraded { .. })
    }
}

#[derive(Debug, Default)]
struct Entries {
    words: HashMap<String, SenseCode>,
    codes: HashMap<String, Vec<String>>,
}

impl Entries {
    /// Registers one dictionary line. Returns `false` if the line was skipped.
    fn ingest_line(&mut self, line_no: usize, line: &str) -> bool {
        let mut fields = line
            .trim_end_matches('\r')
            .split(' ')
            .filter(|field| !field.is_empty());

        let Some(code_str) = fields.next() else {
            return false;
        };
        let words: Vec<String> = fields.map(str::to_string).collect();
        if words.is_empty() {
            return false;
        }

        let code = match SenseCode::parse(code_str) {
            Ok(code) => code,
            Err(e) => {
                debug!(line = line_no, error = %e, "Skipping thesaurus line");
                return false;
            }
        };

        for word in &words {
            self.words.insert(word.clone(), code.clone());
        }
        self.codes.insert(code_str.to_string(), words);
        true
    }

    fn merge(&mut self, other: Entries) {
        self.words.extend(other.words);
        self.codes.extend(other.codes);
    }
}

/// Read-mostly synonym thesaurus shared by all scorers.
pub struct Thesaurus {
    entries: RwLock<Entries>,
    init: OnceLock<LoadOutcome>,
}

impl std::fmt::Debug for Thesaurus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let entries = self.entries.read();
        f.debug_struct("Thesaurus")
            .field("words", &entries.words.len())
            .field("codes", &entries.codes.len())
            .field("init", &self.init.get())
            .finish()
    }
}

impl Default for Thesaurus {
    fn default() -> Self {
        Self::new()
    }
}

impl Thesaurus {
    /// Creates an empty thesaurus (degraded lookups until something is loaded).
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(Entries::default()),
            init: OnceLock::new(),
        }
    }

    /// Builds a thesaurus from dictionary text held in memory.
    pub fn parse(text: &str) -> Self {
        let mut entries = Entries::default();
        for (idx, line) in text.lines().enumerate() {
            entries.ingest_line(idx + 1, line);
        }
        Self {
            entries: RwLock::new(entries),
            init: OnceLock::new(),
        }
    }

    /// Builds a thesaurus from any buffered reader.
    pub fn from_reader<R: BufRead>(reader: R) -> ThesaurusResult<Self> {
        let (entries, stats) = read_entries(reader)?;
        debug!(
            entries = stats.entries,
            skipped = stats.skipped,
            "Thesaurus built from reader"
        );
        Ok(Self {
            entries: RwLock::new(entries),
            init: OnceLock::new(),
        })
    }

    /// Reads a dictionary file and merges its entries into this thesaurus.
    ///
    /// The file is parsed before the write lock is taken, so readers never see
    /// a half-loaded dictionary. On error nothing is merged.
    pub fn load<P: AsRef<Path>>(&self, path: P) -> ThesaurusResult<LoadStats> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ThesaurusError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let (parsed, stats) =
            read_entries(BufReader::new(file)).map_err(|e| match e {
                ThesaurusError::Read(source) => ThesaurusError::Io {
                    path: path.to_path_buf(),
                    source,
                },
                other => other,
            })?;

        let mut entries = self.entries.write();
        entries.merge(parsed);

        info!(
            path = %path.display(),
            lines = stats.lines,
            entries = stats.entries,
            skipped = stats.skipped,
            words = entries.words.len(),
            codes = entries.codes.len(),
            "Thesaurus loaded"
        );

        Ok(stats)
    }

    /// Loads `path` on the first call only and records the outcome.
    ///
    /// Later calls (with any path) return the recorded outcome. A failed load
    /// is logged and recorded as [`LoadOutcome::Degraded`].
    pub fn load_once<P: AsRef<Path>>(&self, path: P) -> &LoadOutcome {
        self.init.get_or_init(|| match self.load(path.as_ref()) {
            Ok(stats) => LoadOutcome::Loaded(stats),
            Err(e) => {
                warn!(
                    path = %path.as_ref().display(),
                    error = %e,
                    "Failed to load thesaurus, synonym and category features disabled"
                );
                LoadOutcome::Degraded {
                    reason: e.to_string(),
                }
            }
        })
    }

    /// Outcome of [`load_once`](Self::load_once), if it has run.
    pub fn load_outcome(&self) -> Option<&LoadOutcome> {
        self.init.get()
    }

    /// Returns the code a word was last filed under.
    pub fn sense_code(&self, word: &str) -> Option<SenseCode> {
        self.entries.read().words.get(word).cloned()
    }

    /// Returns the other words filed under the same full code as `word`.
    ///
    /// Empty if the word is unknown.
    pub fn synonyms(&self, word: &str) -> Vec<String> {
        let entries = self.entries.read();
        let Some(code) = entries.words.get(word) else {
            return Vec::new();
        };

        entries
            .codes
            .get(&code.to_code_string())
            .map(|words| words.iter().filter(|w| *w != word).cloned().collect())
            .unwrap_or_default()
    }

    /// Returns `true` if `candidate` is among [`synonyms`](Self::synonyms) of `word`.
    pub fn is_synonym(&self, word: &str, candidate: &str) -> bool {
        if word == candidate {
            return false;
        }

        let entries = self.entries.read();
        entries
            .words
            .get(word)
            .and_then(|code| entries.codes.get(&code.to_code_string()))
            .is_some_and(|words| words.iter().any(|w| w == candidate))
    }

    /// Returns the coarse category of a word ([`WordCategory::Other`] if unknown).
    pub fn category(&self, word: &str) -> WordCategory {
        self.entries
            .read()
            .words
            .get(word)
            .map(WordCategory::from_code)
            .unwrap_or_default()
    }

    /// Number of distinct words with a code.
    pub fn word_count(&self) -> usize {
        self.entries.read().words.len()
    }

    /// Number of distinct full codes.
    pub fn code_count(&self) -> usize {
        self.entries.read().codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().words.is_empty()
    }
}

fn read_entries<R: BufRead>(reader: R) -> ThesaurusResult<(Entries, LoadStats)> {
    let mut entries = Entries::default();
    let mut stats = LoadStats::default();

    for (idx, raw) in reader.split(b'\n').enumerate() {
        let raw = raw?;
        stats.lines += 1;

        let registered = match std::str::from_utf8(&raw) {
            Ok(line) => entries.ingest_line(idx + 1, line),
            Err(_) => {
                debug!(line = idx + 1, "Skipping non UTF-8 thesaurus line");
                false
            }
        };

        if registered {
            stats.entries += 1;
        } else {
            stats.skipped += 1;
        }
    }

    Ok((entries, stats))
}
