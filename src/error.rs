use crate::entry::WordClass;

/// Why an entry could not be conjugated.
///
/// Every variant carries the dictionary form that was passed in. None of these
/// are transient: retrying the same entry yields the same error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConjugationError {
    /// The entry's class belongs to the other word family (e.g. an adjective
    /// handed to the verb engine), or the requested form does not exist for it.
    #[error("unrecognized word class {class} for {kanji}")]
    UnrecognizedWordClass { kanji: String, class: WordClass },

    /// The final character has no entry in the rule table for this class.
    #[error("unrecognized terminal character {terminal:?} in {kanji} ({class})")]
    UnrecognizedTerminalCharacter {
        kanji: String,
        class: WordClass,
        terminal: Option<char>,
    },

    /// An irregular verb that ends in neither 来る nor する.
    #[error("unrecognized irregular verb: {kanji}")]
    UnrecognizedIrregularForm { kanji: String },

    /// An intermediate form did not have the shape the next step requires.
    #[error("malformed derived form {derived} for {kanji}: expected {expected}")]
    MalformedDerivedForm {
        kanji: String,
        derived: String,
        expected: &'static str,
    },
}

impl ConjugationError {
    /// The dictionary form the failing call was given.
    pub fn kanji(&self) -> &str {
        match self {
            Self::UnrecognizedWordClass { kanji, .. }
            | Self::UnrecognizedTerminalCharacter { kanji, .. }
            | Self::UnrecognizedIrregularForm { kanji }
            | Self::MalformedDerivedForm { kanji, .. } => kanji,
        }
    }
}

/// A class tag string that names no known verb or adjective class.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown word class tag: {0:?}")]
pub struct ParseWordClassError(pub String);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::VerbClass;

    #[test]
    fn malformed_derived_form_display() {
        let err = ConjugationError::MalformedDerivedForm {
            kanji: "泳ぐ".to_string(),
            derived: "泳ぐ".to_string(),
            expected: "te-form ending in て or で",
        };
        assert_eq!(
            err.to_string(),
            "malformed derived form 泳ぐ for 泳ぐ: expected te-form ending in て or で"
        );
        assert_eq!(err.kanji(), "泳ぐ");
    }

    #[test]
    fn variant_display() {
        let terminal = ConjugationError::UnrecognizedTerminalCharacter {
            kanji: "見".to_string(),
            class: WordClass::Verb(VerbClass::Ru),
            terminal: Some('見'),
        };
        assert_eq!(
            terminal.to_string(),
            "unrecognized terminal character Some('見') in 見 (ru-verb)"
        );
        assert_eq!(terminal.kanji(), "見");

        let irregular = ConjugationError::UnrecognizedIrregularForm {
            kanji: "行く".to_string(),
        };
        assert_eq!(irregular.to_string(), "unrecognized irregular verb: 行く");
        assert_eq!(
            ParseWordClassError("x-verb".to_string()).to_string(),
            "unknown word class tag: \"x-verb\""
        );
    }
}
