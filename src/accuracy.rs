//! Accuracy corpus: expected conjugations checked against the engines.
//!
//! A corpus is a TOML file of `[[cases]]`, one per word, each with a
//! `[cases.expected]` table mapping form names to expected surfaces.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, debug_span};

use crate::entry::{LexicalEntry, WordClass};
use crate::form::{conjugate, Form};

#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("corpus parse error: {0}")]
    Parse(String),
}

#[derive(Debug, Clone, Deserialize)]
pub struct Corpus {
    pub cases: Vec<Case>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Case {
    #[serde(default)]
    pub meaning: String,
    pub kanji: String,
    #[serde(default)]
    pub hiragana: String,
    pub class: WordClass,
    pub expected: BTreeMap<String, String>,
    #[serde(default)]
    pub skip: bool,
    #[serde(default)]
    pub note: Option<String>,
}

impl Case {
    pub fn entry(&self) -> LexicalEntry {
        LexicalEntry::new(
            self.meaning.clone(),
            self.kanji.clone(),
            self.hiragana.clone(),
            self.class,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Pass,
    Fail,
    Skip,
    /// The engine returned an error, or the form name is unknown.
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CaseResult {
    pub kanji: String,
    pub form: String,
    pub expected: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual: Option<String>,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub total: usize,
    pub pass: usize,
    pub fail: usize,
    pub skip: usize,
    pub error: usize,
    pub pass_rate: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub results: Vec<CaseResult>,
    pub summary: Summary,
}

impl Report {
    pub fn is_success(&self) -> bool {
        self.summary.fail == 0 && self.summary.error == 0
    }
}

pub fn parse_corpus(toml_str: &str) -> Result<Corpus, CorpusError> {
    toml::from_str(toml_str).map_err(|e| CorpusError::Parse(e.to_string()))
}

pub fn open_corpus(path: &Path) -> Result<Corpus, CorpusError> {
    parse_corpus(&fs::read_to_string(path)?)
}

/// Check every expected form of every case.
pub fn run(corpus: &Corpus) -> Report {
    let _span = debug_span!("accuracy_run", cases = corpus.cases.len()).entered();

    let mut results = Vec::new();
    for case in &corpus.cases {
        let entry = case.entry();
        for (form_name, expected) in &case.expected {
            let mut result = CaseResult {
                kanji: case.kanji.clone(),
                form: form_name.clone(),
                expected: expected.clone(),
                actual: None,
                status: Status::Skip,
                error: None,
                note: case.note.clone(),
            };
            if !case.skip {
                match form_name.parse::<Form>() {
                    Ok(form) => match conjugate(&entry, form) {
                        Ok(actual) => {
                            result.status = if actual == *expected {
                                Status::Pass
                            } else {
                                Status::Fail
                            };
                            result.actual = Some(actual);
                        }
                        Err(e) => {
                            result.status = Status::Error;
                            result.error = Some(e.to_string());
                        }
                    },
                    Err(e) => {
                        result.status = Status::Error;
                        result.error = Some(e.to_string());
                    }
                }
            }
            results.push(result);
        }
    }

    let summary = summarize(&results);
    debug!(
        pass = summary.pass,
        fail = summary.fail,
        error = summary.error,
        "accuracy run finished"
    );
    Report { results, summary }
}

fn summarize(results: &[CaseResult]) -> Summary {
    let count = |status: Status| results.iter().filter(|r| r.status == status).count();
    let pass = count(Status::Pass);
    let fail = count(Status::Fail);
    let skip = count(Status::Skip);
    let error = count(Status::Error);
    let run = pass + fail + error;
    let pass_rate = if run == 0 {
        "n/a".to_string()
    } else {
        format!("{:.1}%", pass as f64 * 100.0 / run as f64)
    };
    Summary {
        total: results.len(),
        pass,
        fail,
        skip,
        error,
        pass_rate,
    }
}

/// Human-readable report. Passing cases are listed only when `verbose`.
pub fn format_text(report: &Report, verbose: bool) -> String {
    let mut out = String::new();
    for r in &report.results {
        let line = match r.status {
            Status::Pass if !verbose => continue,
            Status::Pass => format!("PASS  {} {}: {}", r.kanji, r.form, r.expected),
            Status::Skip => format!("SKIP  {} {}", r.kanji, r.form),
            Status::Fail => format!(
                "FAIL  {} {}: expected {}, got {}",
                r.kanji,
                r.form,
                r.expected,
                r.actual.as_deref().unwrap_or("")
            ),
            Status::Error => format!(
                "ERROR {} {}: {}",
                r.kanji,
                r.form,
                r.error.as_deref().unwrap_or("")
            ),
        };
        out.push_str(&line);
        if let Some(note) = &r.note {
            if r.status != Status::Pass {
                out.push_str(&format!("  ({note})"));
            }
        }
        out.push('\n');
    }
    let s = &report.summary;
    out.push_str(&format!(
        "{} checks: {} pass, {} fail, {} error, {} skip ({})\n",
        s.total, s.pass, s.fail, s.error, s.skip, s.pass_rate
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_corpus_passes() {
        let corpus = parse_corpus(include_str!("../data/accuracy.toml")).unwrap();
        let report = run(&corpus);
        let failures: Vec<&CaseResult> = report
            .results
            .iter()
            .filter(|r| r.status != Status::Pass)
            .collect();
        assert!(failures.is_empty(), "{failures:#?}");
        assert!(report.is_success());
        assert!(report.summary.total > 90);
        assert_eq!(report.summary.pass_rate, "100.0%");
    }

    #[test]
    fn reports_each_status() {
        let toml = r#"
[[cases]]
kanji = "見る"
class = "ru-verb"
[cases.expected]
te = "見て"
short-past-affirmative = "見だ"
potential = "見られる"

[[cases]]
kanji = "行く"
class = "irregular-verb"
[cases.expected]
te = "行って"

[[cases]]
kanji = "来る"
class = "irregular-verb"
skip = true
note = "pending"
[cases.expected]
te = "来て"
"#;
        let report = run(&parse_corpus(toml).unwrap());
        let s = &report.summary;
        assert_eq!((s.total, s.pass, s.fail, s.error, s.skip), (5, 1, 1, 2, 1));
        assert_eq!(s.pass_rate, "25.0%");
        assert!(!report.is_success());

        let fail = report
            .results
            .iter()
            .find(|r| r.status == Status::Fail)
            .unwrap();
        assert_eq!(fail.actual.as_deref(), Some("見た"));

        let text = format_text(&report, false);
        assert!(text.contains("FAIL  見る short-past-affirmative: expected 見だ, got 見た"));
        assert!(text.contains("ERROR 行く te: unrecognized irregular verb: 行く"));
        assert!(text.contains("SKIP  来る te  (pending)"));
        assert!(!text.contains("PASS"));
        assert!(format_text(&report, true).contains("PASS  見る te: 見て"));
    }

    #[test]
    fn report_serializes_lowercase_status() {
        let toml = r#"
[[cases]]
kanji = "大きい"
class = "i-adjective"
[cases.expected]
short-present-negative = "大きくない"
"#;
        let report = run(&parse_corpus(toml).unwrap());
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["results"][0]["status"], "pass");
        assert_eq!(json["summary"]["pass_rate"], "100.0%");
        assert!(json["results"][0].get("error").is_none());
    }

    #[test]
    fn error_unknown_class_tag() {
        let toml = r#"
[[cases]]
kanji = "見る"
class = "ru"
[cases.expected]
te = "見て"
"#;
        assert!(matches!(parse_corpus(toml), Err(CorpusError::Parse(_))));
    }
}
