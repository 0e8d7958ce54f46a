//! Adjective conjugation.
//!
//! Na-adjectives never change; the copula carries tense and polarity.
//! I-adjectives replace their final い. Formal forms are the short form plus
//! です, except the na past affirmative, which uses でした.


use crate::entry::{AdjectiveClass, LexicalEntry, WordClass};
use crate::error::ConjugationError;
use crate::kana::split_last;

fn adjective_class(entry: &LexicalEntry) -> Result<AdjectiveClass, ConjugationError> {
    match entry.word_class {
        WordClass::Adjective(class) => Ok(class),
        class @ WordClass::Verb(_) => Err(ConjugationError::UnrecognizedWordClass {
            kanji: entry.kanji.clone(),
            class,
        }),
    }
}

/// I-adjective without its final い: 大きい → 大き.
fn i_base(entry: &LexicalEntry) -> Result<&str, ConjugationError> {
    entry.kanji.strip_suffix('い').ok_or_else(|| {
        ConjugationError::UnrecognizedTerminalCharacter {
            kanji: entry.kanji.clone(),
            class: entry.word_class,
            terminal: split_last(&entry.kanji).map(|(_, c)| c),
        }
    })
}

pub fn formal_present_affirmative(entry: &LexicalEntry) -> Result<String, ConjugationError> {
    match adjective_class(entry)? {
        AdjectiveClass::I => {
            i_base(entry)?;
            Ok(format!("{}です", entry.kanji))
        }
        AdjectiveClass::Na => Ok(format!("{}です", entry.kanji)),
    }
}

pub fn formal_present_negative(entry: &LexicalEntry) -> Result<String, ConjugationError> {
    Ok(format!("{}です", short_present_negative(entry)?))
}

pub fn formal_past_affirmative(entry: &LexicalEntry) -> Result<String, ConjugationError> {
    match adjective_class(entry)? {
        AdjectiveClass::I => Ok(format!("{}です", short_past_affirmative(entry)?)),
        AdjectiveClass::Na => Ok(format!("{}でした", entry.kanji)),
    }
}

pub fn formal_past_negative(entry: &LexicalEntry) -> Result<String, ConjugationError> {
    Ok(format!("{}です", short_past_negative(entry)?))
}

pub fn short_present_affirmative(entry: &LexicalEntry) -> Result<String, ConjugationError> {
    match adjective_class(entry)? {
        AdjectiveClass::I => {
            i_base(entry)?;
            Ok(entry.kanji.clone())
        }
        AdjectiveClass::Na => Ok(format!("{}だ", entry.kanji)),
    }
}

pub fn short_present_negative(entry: &LexicalEntry) -> Result<String, ConjugationError> {
    match adjective_class(entry)? {
        AdjectiveClass::I => Ok(format!("{}くない", i_base(entry)?)),
        AdjectiveClass::Na => Ok(format!("{}じゃない", entry.kanji)),
    }
}

pub fn short_past_affirmative(entry: &LexicalEntry) -> Result<String, ConjugationError> {
    match adjective_class(entry)? {
        AdjectiveClass::I => Ok(format!("{}かった", i_base(entry)?)),
        AdjectiveClass::Na => Ok(format!("{}だった", entry.kanji)),
    }
}

pub fn short_past_negative(entry: &LexicalEntry) -> Result<String, ConjugationError> {
    match adjective_class(entry)? {
        AdjectiveClass::I => Ok(format!("{}くなかった", i_base(entry)?)),
        AdjectiveClass::Na => Ok(format!("{}じゃなかった", entry.kanji)),
    }
}
