//! Verb conjugation.
//!
//! Every form is derived from one of three primitives: the masu stem
//! ([`stem`]), the te-form ([`te_form`]) and the plain negative
//! ([`short_present_negative`]). The remaining forms append a fixed ending
//! or rewrite the last kana of a primitive.

mod tables;

use crate::entry::{LexicalEntry, VerbClass, WordClass};
use crate::error::ConjugationError;
use crate::kana::split_last;

use tables::{
    lookup, NEGATIVE_OVERRIDES, PAST_VOICING, TE_OVERRIDES, U_VERB_I_ROW, U_VERB_NEGATIVE,
    U_VERB_TE,
};

/// The two irregular verbs, with whatever precedes them (勉強 in 勉強する).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Irregular<'a> {
    Kuru(&'a str),
    Suru(&'a str),
}

fn irregular(kanji: &str) -> Result<Irregular<'_>, ConjugationError> {
    if let Some(prefix) = kanji.strip_suffix("来る") {
        return Ok(Irregular::Kuru(prefix));
    }
    if let Some(prefix) = kanji.strip_suffix("する") {
        return Ok(Irregular::Suru(prefix));
    }
    Err(ConjugationError::UnrecognizedIrregularForm {
        kanji: kanji.to_string(),
    })
}

fn verb_class(entry: &LexicalEntry) -> Result<VerbClass, ConjugationError> {
    match entry.word_class {
        WordClass::Verb(class) => Ok(class),
        class @ WordClass::Adjective(_) => Err(ConjugationError::UnrecognizedWordClass {
            kanji: entry.kanji.clone(),
            class,
        }),
    }
}

fn terminal_error(entry: &LexicalEntry, terminal: Option<char>) -> ConjugationError {
    ConjugationError::UnrecognizedTerminalCharacter {
        kanji: entry.kanji.clone(),
        class: entry.word_class,
        terminal,
    }
}

/// Ru-verb dictionary form without its る.
fn ru_base(entry: &LexicalEntry) -> Result<&str, ConjugationError> {
    entry
        .kanji
        .strip_suffix('る')
        .ok_or_else(|| terminal_error(entry, split_last(&entry.kanji).map(|(_, c)| c)))
}

/// U-verb dictionary form split into body and final kana.
fn u_split(entry: &LexicalEntry) -> Result<(&str, char), ConjugationError> {
    split_last(&entry.kanji).ok_or_else(|| terminal_error(entry, None))
}

/// Masu stem: 見る → 見, 書く → 書き, 勉強する → 勉強し.
pub fn stem(entry: &LexicalEntry) -> Result<String, ConjugationError> {
    match verb_class(entry)? {
        VerbClass::Ru => Ok(ru_base(entry)?.to_string()),
        VerbClass::Irregular => Ok(match irregular(&entry.kanji)? {
            Irregular::Kuru(prefix) => format!("{prefix}来"),
            Irregular::Suru(prefix) => format!("{prefix}し"),
        }),
        VerbClass::U => {
            let (body, last) = u_split(entry)?;
            let i_row =
                lookup(&U_VERB_I_ROW, last).ok_or_else(|| terminal_error(entry, Some(last)))?;
            Ok(format!("{body}{i_row}"))
        }
    }
}

/// Connective te-form, including the u-verb sound changes.
pub fn te_form(entry: &LexicalEntry) -> Result<String, ConjugationError> {
    match verb_class(entry)? {
        VerbClass::Ru => Ok(format!("{}て", ru_base(entry)?)),
        VerbClass::Irregular => Ok(match irregular(&entry.kanji)? {
            Irregular::Kuru(prefix) => format!("{prefix}来て"),
            Irregular::Suru(prefix) => format!("{prefix}して"),
        }),
        VerbClass::U => {
            if let Some(form) = lookup(&TE_OVERRIDES, entry.kanji.as_str()) {
                return Ok(form.to_string());
            }
            let (body, last) = u_split(entry)?;
            let ending =
                lookup(&U_VERB_TE, last).ok_or_else(|| terminal_error(entry, Some(last)))?;
            Ok(format!("{body}{ending}"))
        }
    }
}

pub fn formal_present_affirmative(entry: &LexicalEntry) -> Result<String, ConjugationError> {
    Ok(format!("{}ます", stem(entry)?))
}

pub fn formal_present_negative(entry: &LexicalEntry) -> Result<String, ConjugationError> {
    Ok(format!("{}ません", stem(entry)?))
}

pub fn formal_past_affirmative(entry: &LexicalEntry) -> Result<String, ConjugationError> {
    Ok(format!("{}ました", stem(entry)?))
}

pub fn formal_past_negative(entry: &LexicalEntry) -> Result<String, ConjugationError> {
    Ok(format!("{}ませんでした", stem(entry)?))
}

/// The dictionary form itself.
pub fn short_present_affirmative(entry: &LexicalEntry) -> Result<String, ConjugationError> {
    verb_class(entry)?;
    Ok(entry.kanji.clone())
}

/// Plain negative: 見る → 見ない, 泳ぐ → 泳がない, ある → ない.
pub fn short_present_negative(entry: &LexicalEntry) -> Result<String, ConjugationError> {
    match verb_class(entry)? {
        VerbClass::Ru => Ok(format!("{}ない", ru_base(entry)?)),
        VerbClass::Irregular => Ok(match irregular(&entry.kanji)? {
            Irregular::Kuru(prefix) => format!("{prefix}来ない"),
            Irregular::Suru(prefix) => format!("{prefix}しない"),
        }),
        VerbClass::U => {
            if let Some(form) = lookup(&NEGATIVE_OVERRIDES, entry.kanji.as_str()) {
                return Ok(form.to_string());
            }
            let (body, last) = u_split(entry)?;
            let ending =
                lookup(&U_VERB_NEGATIVE, last).ok_or_else(|| terminal_error(entry, Some(last)))?;
            Ok(format!("{body}{ending}"))
        }
    }
}

/// Plain past, read off the te-form: て → た, で → だ.
pub fn short_past_affirmative(entry: &LexicalEntry) -> Result<String, ConjugationError> {
    let te = te_form(entry)?;
    let voiced = split_last(&te).and_then(|(body, last)| {
        lookup(&PAST_VOICING, last).map(|past| format!("{body}{past}"))
    });
    voiced.ok_or_else(|| ConjugationError::MalformedDerivedForm {
        kanji: entry.kanji.clone(),
        derived: te,
        expected: "te-form ending in て or で",
    })
}

/// Plain past negative: the plain negative with い → かった.
pub fn short_past_negative(entry: &LexicalEntry) -> Result<String, ConjugationError> {
    let negative = short_present_negative(entry)?;
    match negative.strip_suffix('い') {
        Some(body) => Ok(format!("{body}かった")),
        None => Err(ConjugationError::MalformedDerivedForm {
            kanji: entry.kanji.clone(),
            derived: negative,
            expected: "negative ending in い",
        }),
    }
}
