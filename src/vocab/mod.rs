//! Vocabulary files: lists of lexical entries to conjugate.
//!
//! TOML files group entries by family and accept short class tags:
//!
//! ```toml
//! [[verbs]]
//! meaning = "to swim"
//! kanji = "泳ぐ"
//! hiragana = "およぐ"
//! class = "u"
//!
//! [[adjectives]]
//! kanji = "元気"
//! hiragana = "げんき"
//! class = "na"
//! ```
//!
//! JSON files are a flat array of entries with full tags (`"class": "u-verb"`).


use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, debug_span, warn};

use crate::entry::{AdjectiveClass, LexicalEntry, VerbClass, WordClass};
use crate::error::ParseWordClassError;
use crate::kana::{is_hiragana_reading, is_japanese_word};
use crate::settings::{settings, VocabSettings};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Verbs,
    Adjectives,
    Json,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Section::Verbs => "[[verbs]]",
            Section::Adjectives => "[[adjectives]]",
            Section::Json => "JSON array",
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum VocabError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("{section} entry #{index} has an empty kanji field")]
    EmptyKanji { section: Section, index: usize },
    #[error("bad class for {kanji}: {source}")]
    Class {
        kanji: String,
        source: ParseWordClassError,
    },
    #[error("{kanji} is listed under {section} but tagged {class}")]
    ClassMismatch {
        kanji: String,
        section: Section,
        class: WordClass,
    },
    #[error("reading of {kanji} is not hiragana: {reading:?}")]
    InvalidReading { kanji: String, reading: String },
}

#[derive(Deserialize)]
struct VocabFile {
    #[serde(default)]
    verbs: Vec<RawEntry>,
    #[serde(default)]
    adjectives: Vec<RawEntry>,
}

#[derive(Deserialize)]
struct RawEntry {
    #[serde(default)]
    meaning: String,
    kanji: String,
    #[serde(default)]
    hiragana: String,
    class: String,
}

impl RawEntry {
    fn into_entry(self, section: Section) -> Result<LexicalEntry, VocabError> {
        let parsed: Result<WordClass, ParseWordClassError> = match section {
            Section::Verbs => self.class.parse::<VerbClass>().map(WordClass::from),
            Section::Adjectives => self.class.parse::<AdjectiveClass>().map(WordClass::from),
            Section::Json => self.class.parse::<WordClass>(),
        };
        let class = match parsed {
            Ok(class) => class,
            // A full tag from the other family is a misfiled entry, not a typo.
            Err(source) => {
                return Err(match self.class.parse::<WordClass>() {
                    Ok(class) => VocabError::ClassMismatch {
                        kanji: self.kanji,
                        section,
                        class,
                    },
                    Err(_) => VocabError::Class {
                        kanji: self.kanji,
                        source,
                    },
                })
            }
        };
        Ok(LexicalEntry::new(
            self.meaning,
            self.kanji,
            self.hiragana,
            class,
        ))
    }
}

/// An ordered list of entries loaded from one file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    entries: Vec<LexicalEntry>,
}

impl Vocabulary {
    pub fn new(entries: Vec<LexicalEntry>) -> Self {
        Self { entries }
    }

    /// Load a `.json` file as JSON, anything else as TOML.
    pub fn open(path: &Path) -> Result<Self, VocabError> {
        let content = fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json(&content)
        } else {
            Self::from_toml(&content)
        }
    }

    pub fn from_toml(toml_str: &str) -> Result<Self, VocabError> {
        Self::from_toml_with(toml_str, &settings().vocab)
    }

    pub fn from_toml_with(toml_str: &str, opts: &VocabSettings) -> Result<Self, VocabError> {
        let _span = debug_span!("vocab_load", format = "toml").entered();
        let file: VocabFile =
            toml::from_str(toml_str).map_err(|e| VocabError::Parse(e.to_string()))?;

        let mut entries = Vec::with_capacity(file.verbs.len() + file.adjectives.len());
        for (section, raws) in [
            (Section::Verbs, file.verbs),
            (Section::Adjectives, file.adjectives),
        ] {
            for (index, raw) in raws.into_iter().enumerate() {
                let entry = raw.into_entry(section)?;
                check_entry(&entry, section, index, opts)?;
                entries.push(entry);
            }
        }

        debug!(entry_count = entries.len());
        Ok(Self { entries })
    }

    pub fn from_json(json_str: &str) -> Result<Self, VocabError> {
        Self::from_json_with(json_str, &settings().vocab)
    }

    pub fn from_json_with(json_str: &str, opts: &VocabSettings) -> Result<Self, VocabError> {
        let _span = debug_span!("vocab_load", format = "json").entered();
        let raws: Vec<RawEntry> =
            serde_json::from_str(json_str).map_err(|e| VocabError::Parse(e.to_string()))?;

        let mut entries = Vec::with_capacity(raws.len());
        for (index, raw) in raws.into_iter().enumerate() {
            let entry = raw.into_entry(Section::Json)?;
            check_entry(&entry, Section::Json, index, opts)?;
            entries.push(entry);
        }

        debug!(entry_count = entries.len());
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[LexicalEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LexicalEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn verbs(&self) -> impl Iterator<Item = &LexicalEntry> {
        self.entries.iter().filter(|e| e.word_class.is_verb())
    }

    pub fn adjectives(&self) -> impl Iterator<Item = &LexicalEntry> {
        self.entries.iter().filter(|e| !e.word_class.is_verb())
    }
}

impl<'a> IntoIterator for &'a Vocabulary {
    type Item = &'a LexicalEntry;
    type IntoIter = std::slice::Iter<'a, LexicalEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

fn check_entry(
    entry: &LexicalEntry,
    section: Section,
    index: usize,
    opts: &VocabSettings,
) -> Result<(), VocabError> {
    if entry.kanji.is_empty() {
        return Err(VocabError::EmptyKanji { section, index });
    }
    if !is_japanese_word(&entry.kanji) {
        warn!(kanji = %entry.kanji, "dictionary form contains non-Japanese characters");
    }
    if !entry.hiragana.is_empty() && !is_hiragana_reading(&entry.hiragana) {
        if opts.require_hiragana_reading {
            return Err(VocabError::InvalidReading {
                kanji: entry.kanji.clone(),
                reading: entry.hiragana.clone(),
            });
        }
        warn!(kanji = %entry.kanji, reading = %entry.hiragana, "reading is not hiragana");
    }
    Ok(())
}
