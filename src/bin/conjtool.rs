use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde::Serialize;

use katsuyou::accuracy;
use katsuyou::form::format_text;
use katsuyou::settings::{self, settings};
use katsuyou::{
    conjugate, paradigm_with, AdjectiveClass, Form, LexicalEntry, Paradigm, VerbClass, Vocabulary,
    WordClass,
};

#[derive(Parser)]
#[command(name = "conjtool", about = "Japanese verb and adjective conjugation")]
struct Cli {
    /// Settings TOML to use instead of the built-in defaults
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Directory for the JSONL trace log (requires the `trace` feature)
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Conjugate a single word
    Conjugate {
        /// Dictionary form, e.g. 泳ぐ
        kanji: String,
        /// Word class: u, ru, irregular, i, na (or the full tag, e.g. u-verb)
        #[arg(short, long)]
        class: String,
        /// Only produce this form (e.g. te, short-past-negative)
        #[arg(short, long)]
        form: Option<String>,
        /// Reading, shown in the table header
        #[arg(long, default_value = "")]
        hiragana: String,
        /// Gloss, shown in the table header
        #[arg(long, default_value = "")]
        meaning: String,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print the paradigm of every word in a vocabulary file (.toml or .json)
    Table {
        /// Path to the vocabulary file
        vocab_file: PathBuf,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Check conjugations against a TOML accuracy corpus
    Accuracy {
        /// Path to the accuracy corpus TOML file
        corpus_file: PathBuf,
        /// Show passing checks too (default: only failures, errors and skips)
        #[arg(long)]
        verbose: bool,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print the built-in default settings TOML
    Config,
}

type CmdResult = Result<ExitCode, String>;

fn print_json<T: Serialize>(value: &T) -> Result<(), String> {
    let out = if settings().display.json_pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    println!(
        "{}",
        out.map_err(|e| format!("JSON serialization failed: {e}"))?
    );
    Ok(())
}

fn load_settings(path: &Path) -> Result<(), String> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read settings {}: {e}", path.display()))?;
    settings::init_custom(content)
        .map_err(|e| format!("Invalid settings {}: {e}", path.display()))
}

/// Short tags are tried as verb classes first; `i` and `na` only name adjectives.
fn parse_class(tag: &str) -> Result<WordClass, String> {
    if let Ok(class) = tag.parse::<WordClass>() {
        return Ok(class);
    }
    if let Ok(class) = tag.parse::<VerbClass>() {
        return Ok(class.into());
    }
    if let Ok(class) = tag.parse::<AdjectiveClass>() {
        return Ok(class.into());
    }
    Err(format!("Unknown word class: {tag}"))
}

fn run_conjugate(entry: &LexicalEntry, form: Option<&str>, json: bool) -> CmdResult {
    if let Some(name) = form {
        let form: Form = name.parse().map_err(|e: katsuyou::form::ParseFormError| e.to_string())?;
        let surface = conjugate(entry, form).map_err(|e| e.to_string())?;
        if json {
            print_json(&katsuyou::Inflection { form, surface })?;
        } else {
            println!("{surface}");
        }
        return Ok(ExitCode::SUCCESS);
    }

    let display = &settings().display;
    let paradigm = paradigm_with(entry, &display.forms).map_err(|e| e.to_string())?;
    if json {
        print_json(&paradigm)?;
    } else {
        print!("{}", format_text(&paradigm, display.show_meaning));
    }
    Ok(ExitCode::SUCCESS)
}

fn run_table(vocab_file: &Path, json: bool) -> CmdResult {
    let vocab = Vocabulary::open(vocab_file).map_err(|e| {
        format!(
            "Failed to load vocabulary {}: {e}",
            vocab_file.display()
        )
    })?;
    let display = &settings().display;

    // A word that cannot be conjugated is reported and skipped; the rest still print.
    let mut failed = 0usize;
    let paradigms: Vec<Paradigm> = vocab
        .iter()
        .filter_map(|entry| match paradigm_with(entry, &display.forms) {
            Ok(p) => Some(p),
            Err(e) => {
                eprintln!("skipping {}: {e}", entry.kanji);
                failed += 1;
                None
            }
        })
        .collect();

    if json {
        print_json(&paradigms)?;
    } else {
        for (i, p) in paradigms.iter().enumerate() {
            if i > 0 {
                println!();
            }
            print!("{}", format_text(p, display.show_meaning));
        }
    }

    Ok(if failed > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

fn run_accuracy(corpus_file: &Path, verbose: bool, json: bool) -> CmdResult {
    let corpus = accuracy::open_corpus(corpus_file).map_err(|e| {
        format!(
            "Failed to load corpus {}: {e}",
            corpus_file.display()
        )
    })?;
    let report = accuracy::run(&corpus);
    if json {
        print_json(&report)?;
    } else {
        print!("{}", accuracy::format_text(&report, verbose));
    }
    Ok(if report.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn run(cli: Cli) -> CmdResult {
    if let Some(path) = &cli.config {
        load_settings(path)?;
    }

    match cli.command {
        Command::Conjugate {
            kanji,
            class,
            form,
            hiragana,
            meaning,
            json,
        } => {
            let entry = LexicalEntry::new(meaning, kanji, hiragana, parse_class(&class)?);
            run_conjugate(&entry, form.as_deref(), json)
        }
        Command::Table { vocab_file, json } => run_table(&vocab_file, json),
        Command::Accuracy {
            corpus_file,
            verbose,
            json,
        } => run_accuracy(&corpus_file, verbose, json),
        Command::Config => {
            print!("{}", settings::default_toml());
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Dropped on return, after the command's last event, which flushes the log.
    let _trace = cli.log_dir.as_deref().map(katsuyou::init_tracing);

    match run(cli) {
        Ok(code) => code,
        Err(msg) => {
            eprintln!("{msg}");
            ExitCode::FAILURE
        }
    }
}
