//! Form selection across both engines, and whole-paradigm generation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, debug_span};

use crate::entry::{LexicalEntry, WordClass};
use crate::error::ConjugationError;
use crate::{adjective, verb};

/// An inflected form an entry can be asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Form {
    FormalPresentAffirmative,
    FormalPresentNegative,
    FormalPastAffirmative,
    FormalPastNegative,
    ShortPresentAffirmative,
    ShortPresentNegative,
    ShortPastAffirmative,
    ShortPastNegative,
    /// Verbs only.
    Te,
}

impl Form {
    pub const ALL: [Form; 9] = [
        Form::FormalPresentAffirmative,
        Form::FormalPresentNegative,
        Form::FormalPastAffirmative,
        Form::FormalPastNegative,
        Form::ShortPresentAffirmative,
        Form::ShortPresentNegative,
        Form::ShortPastAffirmative,
        Form::ShortPastNegative,
        Form::Te,
    ];

    /// Kebab-case identifier used in settings, corpora and on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Form::FormalPresentAffirmative => "formal-present-affirmative",
            Form::FormalPresentNegative => "formal-present-negative",
            Form::FormalPastAffirmative => "formal-past-affirmative",
            Form::FormalPastNegative => "formal-past-negative",
            Form::ShortPresentAffirmative => "short-present-affirmative",
            Form::ShortPresentNegative => "short-present-negative",
            Form::ShortPastAffirmative => "short-past-affirmative",
            Form::ShortPastNegative => "short-past-negative",
            Form::Te => "te",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Form::FormalPresentAffirmative => "formal present affirmative",
            Form::FormalPresentNegative => "formal present negative",
            Form::FormalPastAffirmative => "formal past affirmative",
            Form::FormalPastNegative => "formal past negative",
            Form::ShortPresentAffirmative => "short present affirmative",
            Form::ShortPresentNegative => "short present negative",
            Form::ShortPastAffirmative => "short past affirmative",
            Form::ShortPastNegative => "short past negative",
            Form::Te => "te-form",
        }
    }

    pub fn applies_to(self, class: WordClass) -> bool {
        match self {
            Form::Te => class.is_verb(),
            _ => true,
        }
    }
}

impl fmt::Display for Form {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown form: {0:?}")]
pub struct ParseFormError(pub String);

impl FromStr for Form {
    type Err = ParseFormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        let normalized = match normalized.as_str() {
            "te-form" => "te",
            other => other,
        };
        Form::ALL
            .into_iter()
            .find(|f| f.name() == normalized)
            .ok_or_else(|| ParseFormError(s.to_string()))
    }
}

/// Conjugate `entry` into `form`, dispatching on its word family.
pub fn conjugate(entry: &LexicalEntry, form: Form) -> Result<String, ConjugationError> {
    match entry.word_class {
        WordClass::Verb(_) => match form {
            Form::FormalPresentAffirmative => verb::formal_present_affirmative(entry),
            Form::FormalPresentNegative => verb::formal_present_negative(entry),
            Form::FormalPastAffirmative => verb::formal_past_affirmative(entry),
            Form::FormalPastNegative => verb::formal_past_negative(entry),
            Form::ShortPresentAffirmative => verb::short_present_affirmative(entry),
            Form::ShortPresentNegative => verb::short_present_negative(entry),
            Form::ShortPastAffirmative => verb::short_past_affirmative(entry),
            Form::ShortPastNegative => verb::short_past_negative(entry),
            Form::Te => verb::te_form(entry),
        },
        WordClass::Adjective(_) => match form {
            Form::FormalPresentAffirmative => adjective::formal_present_affirmative(entry),
            Form::FormalPresentNegative => adjective::formal_present_negative(entry),
            Form::FormalPastAffirmative => adjective::formal_past_affirmative(entry),
            Form::FormalPastNegative => adjective::formal_past_negative(entry),
            Form::ShortPresentAffirmative => adjective::short_present_affirmative(entry),
            Form::ShortPresentNegative => adjective::short_present_negative(entry),
            Form::ShortPastAffirmative => adjective::short_past_affirmative(entry),
            Form::ShortPastNegative => adjective::short_past_negative(entry),
            Form::Te => Err(ConjugationError::UnrecognizedWordClass {
                kanji: entry.kanji.clone(),
                class: entry.word_class,
            }),
        },
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Inflection {
    pub form: Form,
    pub surface: String,
}

/// Every requested form of one entry, in request order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Paradigm {
    pub entry: LexicalEntry,
    pub forms: Vec<Inflection>,
}

impl Paradigm {
    pub fn get(&self, form: Form) -> Option<&str> {
        self.forms
            .iter()
            .find(|i| i.form == form)
            .map(|i| i.surface.as_str())
    }
}

/// All forms that apply to the entry's class.
pub fn paradigm(entry: &LexicalEntry) -> Result<Paradigm, ConjugationError> {
    paradigm_with(entry, &Form::ALL)
}

/// The requested forms, skipping any that do not apply to the entry's class.
/// The first failing form aborts the whole paradigm.
pub fn paradigm_with(entry: &LexicalEntry, forms: &[Form]) -> Result<Paradigm, ConjugationError> {
    let _span = debug_span!("paradigm", kanji = %entry.kanji, class = %entry.word_class).entered();

    let mut out = Vec::with_capacity(forms.len());
    for &form in forms.iter().filter(|f| f.applies_to(entry.word_class)) {
        let surface = conjugate(entry, form).inspect_err(|e| {
            debug!(%form, error = %e, "conjugation failed");
        })?;
        out.push(Inflection { form, surface });
    }

    debug!(form_count = out.len());
    Ok(Paradigm {
        entry: entry.clone(),
        forms: out,
    })
}

/// Render a paradigm as an aligned two-column table.
pub fn format_text(paradigm: &Paradigm, show_meaning: bool) -> String {
    use unicode_width::UnicodeWidthStr;

    let entry = &paradigm.entry;
    let mut header = entry.kanji.clone();
    if !entry.hiragana.is_empty() && entry.hiragana != entry.kanji {
        header.push_str(&format!(" ({})", entry.hiragana));
    }
    header.push_str(&format!(" [{}]", entry.word_class));
    if show_meaning && !entry.meaning.is_empty() {
        header.push_str(&format!(" {}", entry.meaning));
    }

    let mut out = String::new();
    out.push_str(&header);
    out.push('\n');
    out.push_str(&"=".repeat(UnicodeWidthStr::width(header.as_str())));
    out.push('\n');

    let label_width = paradigm
        .forms
        .iter()
        .map(|i| i.form.label().len())
        .max()
        .unwrap_or(0);
    for inflection in &paradigm.forms {
        out.push_str(&format!(
            "  {:<width$}  {}\n",
            inflection.form.label(),
            inflection.surface,
            width = label_width,
        ));
    }
    out
}
