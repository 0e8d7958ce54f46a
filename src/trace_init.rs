//! JSONL trace log for diagnostics builds.
//!
//! Without the `trace` feature `init_tracing` does nothing and the library's
//! spans and events go nowhere.

use std::path::Path;

/// Keeps the background log writer alive. Buffered lines are written out when
/// this is dropped, so hold it until the last event of interest.
#[must_use = "dropping the guard stops the log writer"]
pub struct TraceGuard {
    #[cfg(feature = "trace")]
    _writer: Option<tracing_appender::non_blocking::WorkerGuard>,
}

/// File name of the log written under the directory passed to `init_tracing`.
pub const TRACE_FILE_NAME: &str = "katsuyou-trace.jsonl";

/// Install a global JSONL subscriber writing to `log_dir/katsuyou-trace.jsonl`.
///
/// The filter comes from `RUST_LOG`, defaulting to `katsuyou=debug`. Only the
/// first call installs anything; the guard returned by later calls is empty.
#[cfg(feature = "trace")]
pub fn init_tracing(log_dir: &Path) -> TraceGuard {
    use std::sync::atomic::{AtomicBool, Ordering};

    use tracing_subscriber::fmt::format::FmtSpan;
    use tracing_subscriber::EnvFilter;

    static INSTALLED: AtomicBool = AtomicBool::new(false);
    if INSTALLED.swap(true, Ordering::SeqCst) {
        return TraceGuard { _writer: None };
    }

    let appender = tracing_appender::rolling::never(log_dir, TRACE_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("katsuyou=debug"));
    let installed = tracing_subscriber::fmt()
        .json()
        .with_writer(writer)
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_env_filter(filter)
        .try_init();

    TraceGuard {
        _writer: installed.is_ok().then_some(guard),
    }
}

#[cfg(not(feature = "trace"))]
pub fn init_tracing(_log_dir: &Path) -> TraceGuard {
    TraceGuard {}
}

#[cfg(all(test, feature = "trace"))]
mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};

    use tracing_subscriber::fmt::MakeWriter;

    use super::*;
    use crate::entry::{LexicalEntry, VerbClass};
    use crate::settings::VocabSettings;
    use crate::{paradigm, Vocabulary};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Captured {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Captured {
        type Writer = Captured;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    #[test]
    fn trace_build_emits_vocab_warning() {
        let captured = Captured::default();
        let subscriber = tracing_subscriber::fmt()
            .json()
            .with_writer(captured.clone())
            .with_max_level(tracing::Level::DEBUG)
            .finish();

        let toml = r#"
[[verbs]]
kanji = "泳ぐ"
hiragana = "オヨグ"
class = "u"
"#;
        let lenient = VocabSettings {
            require_hiragana_reading: false,
        };
        let vocab = tracing::subscriber::with_default(subscriber, || {
            Vocabulary::from_toml_with(toml, &lenient)
        })
        .unwrap();
        assert_eq!(vocab.len(), 1);

        let text = captured.text();
        assert!(text.contains("reading is not hiragana"), "{text}");
        assert!(text.contains("オヨグ"), "{text}");
    }

    #[test]
    fn init_tracing_flushes_log_when_guard_drops() {
        let dir = tempfile::tempdir().unwrap();
        let guard = init_tracing(dir.path());
        let entry = LexicalEntry::verb("to swim", "泳ぐ", "およぐ", VerbClass::U);
        paradigm(&entry).unwrap();
        drop(guard);

        let log = std::fs::read_to_string(dir.path().join(TRACE_FILE_NAME)).unwrap();
        assert!(log.lines().count() >= 1, "{log}");
        assert!(log.contains("form_count"), "{log}");

        // A second install is refused and hands back an empty guard.
        let again = init_tracing(dir.path());
        assert!(again._writer.is_none());
    }
}
