//! Lexical entries and their word-class tags.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseWordClassError;

/// Verb conjugation classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerbClass {
    /// Consonant-stem (godan) verb: 書く, 泳ぐ, 待つ.
    U,
    /// Vowel-stem (ichidan) verb: 見る, 食べる.
    Ru,
    /// 来る, する and compounds ending in them.
    Irregular,
}

/// Adjective conjugation classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdjectiveClass {
    I,
    Na,
}

/// The class tag carried by an entry. The two domains never mix on one entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum WordClass {
    Verb(VerbClass),
    Adjective(AdjectiveClass),
}

impl VerbClass {
    pub const ALL: [VerbClass; 3] = [VerbClass::U, VerbClass::Ru, VerbClass::Irregular];

    pub fn as_str(self) -> &'static str {
        match self {
            VerbClass::U => "u-verb",
            VerbClass::Ru => "ru-verb",
            VerbClass::Irregular => "irregular-verb",
        }
    }
}

impl AdjectiveClass {
    pub const ALL: [AdjectiveClass; 2] = [AdjectiveClass::I, AdjectiveClass::Na];

    pub fn as_str(self) -> &'static str {
        match self {
            AdjectiveClass::I => "i-adjective",
            AdjectiveClass::Na => "na-adjective",
        }
    }
}

impl WordClass {
    pub fn as_str(self) -> &'static str {
        match self {
            WordClass::Verb(c) => c.as_str(),
            WordClass::Adjective(c) => c.as_str(),
        }
    }

    pub fn is_verb(self) -> bool {
        matches!(self, WordClass::Verb(_))
    }
}

impl From<VerbClass> for WordClass {
    fn from(c: VerbClass) -> Self {
        WordClass::Verb(c)
    }
}

impl From<AdjectiveClass> for WordClass {
    fn from(c: AdjectiveClass) -> Self {
        WordClass::Adjective(c)
    }
}

impl fmt::Display for VerbClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for AdjectiveClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for WordClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts the full tag (`u-verb`) and the short one (`u`, `godan`).
impl FromStr for VerbClass {
    type Err = ParseWordClassError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "u-verb" | "u" | "godan" => Ok(VerbClass::U),
            "ru-verb" | "ru" | "ichidan" => Ok(VerbClass::Ru),
            "irregular-verb" | "irregular" | "irr" => Ok(VerbClass::Irregular),
            _ => Err(ParseWordClassError(s.to_string())),
        }
    }
}

impl FromStr for AdjectiveClass {
    type Err = ParseWordClassError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "i-adjective" | "i" => Ok(AdjectiveClass::I),
            "na-adjective" | "na" => Ok(AdjectiveClass::Na),
            _ => Err(ParseWordClassError(s.to_string())),
        }
    }
}

/// Only full tags are accepted here: `i` alone could not be told apart from a
/// verb abbreviation once both domains share one namespace.
impl FromStr for WordClass {
    type Err = ParseWordClassError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        if let Some(c) = VerbClass::ALL.iter().find(|c| c.as_str() == normalized) {
            return Ok(WordClass::Verb(*c));
        }
        if let Some(c) = AdjectiveClass::ALL.iter().find(|c| c.as_str() == normalized) {
            return Ok(WordClass::Adjective(*c));
        }
        Err(ParseWordClassError(s.to_string()))
    }
}

impl TryFrom<String> for WordClass {
    type Error = ParseWordClassError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<WordClass> for String {
    fn from(c: WordClass) -> Self {
        c.as_str().to_string()
    }
}

/// A dictionary word as supplied by the caller.
///
/// Only `kanji` and `word_class` drive conjugation; `meaning` and `hiragana`
/// ride along for display.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LexicalEntry {
    #[serde(default)]
    pub meaning: String,
    pub kanji: String,
    #[serde(default)]
    pub hiragana: String,
    #[serde(rename = "class")]
    pub word_class: WordClass,
}

impl LexicalEntry {
    pub fn new(
        meaning: impl Into<String>,
        kanji: impl Into<String>,
        hiragana: impl Into<String>,
        word_class: impl Into<WordClass>,
    ) -> Self {
        Self {
            meaning: meaning.into(),
            kanji: kanji.into(),
            hiragana: hiragana.into(),
            word_class: word_class.into(),
        }
    }

    pub fn verb(
        meaning: impl Into<String>,
        kanji: impl Into<String>,
        hiragana: impl Into<String>,
        class: VerbClass,
    ) -> Self {
        Self::new(meaning, kanji, hiragana, class)
    }

    pub fn adjective(
        meaning: impl Into<String>,
        kanji: impl Into<String>,
        hiragana: impl Into<String>,
        class: AdjectiveClass,
    ) -> Self {
        Self::new(meaning, kanji, hiragana, class)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_verb_tags() {
        assert_eq!("u-verb".parse::<VerbClass>().unwrap(), VerbClass::U);
        assert_eq!("RU".parse::<VerbClass>().unwrap(), VerbClass::Ru);
        assert_eq!("ichidan".parse::<VerbClass>().unwrap(), VerbClass::Ru);
        assert_eq!(
            "irregular_verb".parse::<VerbClass>().unwrap(),
            VerbClass::Irregular
        );
        assert!("na".parse::<VerbClass>().is_err());
    }

    #[test]
    fn parse_adjective_tags() {
        assert_eq!("i".parse::<AdjectiveClass>().unwrap(), AdjectiveClass::I);
        assert_eq!(
            "na-adjective".parse::<AdjectiveClass>().unwrap(),
            AdjectiveClass::Na
        );
        assert!("u".parse::<AdjectiveClass>().is_err());
    }

    #[test]
    fn word_class_requires_full_tag() {
        assert_eq!(
            "ru-verb".parse::<WordClass>().unwrap(),
            WordClass::Verb(VerbClass::Ru)
        );
        assert_eq!(
            "i-adjective".parse::<WordClass>().unwrap(),
            WordClass::Adjective(AdjectiveClass::I)
        );
        let err = "i".parse::<WordClass>().unwrap_err();
        assert_eq!(err, ParseWordClassError("i".to_string()));
    }

    #[test]
    fn display_matches_parse() {
        for c in VerbClass::ALL {
            let wc = WordClass::from(c);
            assert_eq!(wc.to_string().parse::<WordClass>().unwrap(), wc);
        }
        for c in AdjectiveClass::ALL {
            let wc = WordClass::from(c);
            assert_eq!(wc.to_string().parse::<WordClass>().unwrap(), wc);
        }
    }

    #[test]
    fn entry_json_uses_class_tag() {
        let entry = LexicalEntry::verb("to see", "見る", "みる", VerbClass::Ru);
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains(r#""class":"ru-verb""#), "{json}");
        let back: LexicalEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }

    #[test]
    fn entry_json_rejects_unknown_tag() {
        let json = r#"{"kanji":"見る","class":"verb"}"#;
        assert!(serde_json::from_str::<LexicalEntry>(json).is_err());
    }
}
