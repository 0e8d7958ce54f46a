//! Japanese verb and adjective conjugation.
//!
//! Given a dictionary form and its word class, produce the formal and short,
//! present and past, affirmative and negative forms, plus the te-form for
//! verbs:
//!
//! ```
//! use katsuyou::{conjugate, Form, LexicalEntry, VerbClass};
//!
//! let oyogu = LexicalEntry::verb("to swim", "泳ぐ", "およぐ", VerbClass::U);
//! assert_eq!(conjugate(&oyogu, Form::Te).unwrap(), "泳いで");
//! assert_eq!(katsuyou::verb::short_present_negative(&oyogu).unwrap(), "泳がない");
//! ```

pub mod accuracy;
pub mod adjective;
pub mod entry;
pub mod error;
pub mod form;
pub mod kana;
pub mod settings;
mod trace_init;
pub mod verb;
pub mod vocab;

#[cfg(test)]
mod tests;

pub use entry::{AdjectiveClass, LexicalEntry, VerbClass, WordClass};
pub use error::{ConjugationError, ParseWordClassError};
pub use form::{conjugate, paradigm, paradigm_with, Form, Inflection, Paradigm};
pub use trace_init::{init_tracing, TraceGuard, TRACE_FILE_NAME};
pub use vocab::{VocabError, Vocabulary};
