//! End-to-end tests for the dispatch engine: fan-in completeness, failure
//! isolation, fire-and-forget semantics, and the built-in sinks.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use scribe::{
    Event, FilePlugin, HttpPlugin, HttpResponse, Level, LineWriter, Metadata, Plugin, PluginError,
    Scribe, ScribeConfig, Transport,
};

/// Counts invocations; a plugin may keep its own synchronized state.
struct CountPlugin {
    count: AtomicUsize,
}

impl CountPlugin {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            count: AtomicUsize::new(0),
        })
    }
}

#[async_trait]
impl Plugin for CountPlugin {
    async fn handle(&self, _event: &Event) -> Result<(), PluginError> {
        self.count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "count"
    }
}

/// Fails every invocation.
struct FlakyPlugin;

#[async_trait]
impl Plugin for FlakyPlugin {
    async fn handle(&self, _event: &Event) -> Result<(), PluginError> {
        Err(PluginError::fail("boom"))
    }

    fn name(&self) -> &'static str {
        "flaky"
    }
}

/// Panics on every invocation.
struct PanickyPlugin;

#[async_trait]
impl Plugin for PanickyPlugin {
    async fn handle(&self, _event: &Event) -> Result<(), PluginError> {
        panic!("kaboom");
    }

    fn name(&self) -> &'static str {
        "panicky"
    }
}

/// Records every event it sees.
struct RecordingPlugin {
    seen: Mutex<Vec<Event>>,
}

impl RecordingPlugin {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            seen: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl Plugin for RecordingPlugin {
    async fn handle(&self, event: &Event) -> Result<(), PluginError> {
        self.seen.lock().unwrap().push(event.clone());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "recording"
    }
}

/// Captures rendered lines instead of forwarding to the log facade.
struct CaptureWriter {
    lines: Mutex<Vec<(String, String)>>,
}

impl CaptureWriter {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            lines: Mutex::new(Vec::new()),
        })
    }
}

impl LineWriter for CaptureWriter {
    fn write_line(&self, label: &str, event: &Event) {
        self.lines
            .lock()
            .unwrap()
            .push((label.to_owned(), event.message.to_string()));
    }
}

fn upper_formatter(ev: &Event) -> Result<Option<String>, PluginError> {
    Ok(Some(format!(
        "{}: {}",
        ev.level.as_str().to_uppercase(),
        ev.message
    )))
}

#[tokio::test]
async fn awaited_handle_resolves_after_every_plugin() {
    let counter = CountPlugin::new();
    let scribe = Scribe::new(
        ScribeConfig::new("test.count"),
        vec![Arc::clone(&counter) as Arc<dyn Plugin>],
    );

    assert_eq!(counter.count.load(Ordering::SeqCst), 0);

    for _ in 0..3 {
        scribe.debug("Test", None, None).await.unwrap();
    }

    // Exactly once per call: never zero, never double-counted.
    assert_eq!(counter.count.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn failing_plugin_does_not_stop_siblings() {
    let counter = CountPlugin::new();
    let scribe = Scribe::new(
        ScribeConfig::new("test.isolation"),
        vec![
            Arc::new(FlakyPlugin) as Arc<dyn Plugin>,
            Arc::clone(&counter) as Arc<dyn Plugin>,
        ],
    );

    let err = scribe.info("Test", None, None).await.unwrap_err();

    assert_eq!(err.plugin(), "flaky");
    assert_eq!(err.as_label(), "dispatch_plugin_failed");
    // The sibling's effect happened even though the handle reports failure.
    assert_eq!(counter.count.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn panicking_plugin_is_isolated_and_attributed() {
    let counter = CountPlugin::new();
    let scribe = Scribe::new(
        ScribeConfig::new("test.panic"),
        vec![
            Arc::new(PanickyPlugin) as Arc<dyn Plugin>,
            Arc::clone(&counter) as Arc<dyn Plugin>,
        ],
    );

    let err = scribe.info("Test", None, None).await.unwrap_err();

    assert_eq!(err.plugin(), "panicky");
    assert_eq!(err.as_label(), "dispatch_plugin_panicked");
    // The panic stays inside the panicking plugin's invocation.
    assert_eq!(counter.count.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn skip_formatter_contributes_success_with_no_effect() {
    let dir = tempfile::tempdir().unwrap();
    let sink = FilePlugin::new(dir.path(), "skipped.log", |_| Ok(None));
    let path = sink.path().to_path_buf();

    let scribe = Scribe::new(
        ScribeConfig::new("test.skip"),
        vec![Arc::new(sink) as Arc<dyn Plugin>],
    );

    scribe.info("ignored", None, None).await.unwrap();

    assert!(!path.exists());
}

#[tokio::test]
async fn sequential_awaited_logs_append_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let sink = FilePlugin::new(dir.path(), "ordered.log", upper_formatter);
    let path = sink.path().to_path_buf();

    let scribe = Scribe::new(
        ScribeConfig::new("test.order"),
        vec![Arc::new(sink) as Arc<dyn Plugin>],
    );

    scribe.info("a", None, None).await.unwrap();
    scribe.info("b", None, None).await.unwrap();

    let lines = scribe::storage::read_lines(&path).await.unwrap();
    assert_eq!(lines, vec!["INFO: a".to_owned(), "INFO: b".to_owned()]);
}

#[tokio::test]
async fn file_sink_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let sink = FilePlugin::new(dir.path(), "scribe.test", upper_formatter);
    let path = sink.path().to_path_buf();

    let scribe = Scribe::new(
        ScribeConfig::new("Scribe.Tests"),
        vec![Arc::new(sink) as Arc<dyn Plugin>],
    );

    scribe.info("Test", None, None).await.unwrap();

    let lines = scribe::storage::read_lines(&path).await.unwrap();
    assert_eq!(lines, vec!["INFO: Test".to_owned()]);

    // Raw read succeeds while the file exists, and reports not-found after
    // deletion; the line-sequence read treats not-found as empty instead.
    tokio::fs::read(&path).await.unwrap();
    tokio::fs::remove_file(&path).await.unwrap();

    let err = tokio::fs::read(&path).await.unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
    assert!(scribe::storage::read_lines(&path).await.unwrap().is_empty());
}

#[tokio::test]
async fn level_helpers_set_matching_levels() {
    let recorder = RecordingPlugin::new();
    let scribe = Scribe::new(
        ScribeConfig::new("test.levels"),
        vec![Arc::clone(&recorder) as Arc<dyn Plugin>],
    );

    scribe.trace("m", None, None).await.unwrap();
    scribe.debug("m", None, None).await.unwrap();
    scribe.info("m", None, None).await.unwrap();
    scribe.notice("m", None, None).await.unwrap();
    scribe.warning("m", None, None).await.unwrap();
    scribe.error("m", None, None).await.unwrap();
    scribe.critical("m", None, None).await.unwrap();

    let seen = recorder.seen.lock().unwrap();
    let levels: Vec<Level> = seen.iter().map(|ev| ev.level).collect();
    assert_eq!(
        levels,
        vec![
            Level::Trace,
            Level::Debug,
            Level::Info,
            Level::Notice,
            Level::Warning,
            Level::Error,
            Level::Critical,
        ]
    );
}

#[tokio::test]
async fn dropped_handle_still_completes_plugins() {
    let counter = CountPlugin::new();
    let scribe = Scribe::new(
        ScribeConfig::new("test.detach"),
        vec![Arc::clone(&counter) as Arc<dyn Plugin>],
    );

    // Fire-and-forget: drop the handle immediately.
    drop(scribe.info("Test", None, None));

    let mut waited = Duration::ZERO;
    while counter.count.load(Ordering::SeqCst) == 0 {
        assert!(waited < Duration::from_secs(5), "plugin never ran");
        tokio::time::sleep(Duration::from_millis(10)).await;
        waited += Duration::from_millis(10);
    }

    assert_eq!(counter.count.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn line_writer_sees_every_event() {
    let writer = CaptureWriter::new();
    let scribe = Scribe::new(
        ScribeConfig::new("test.writer").with_writer(Arc::clone(&writer) as Arc<dyn LineWriter>),
        Vec::new(),
    );
    assert_eq!(scribe.label(), "test.writer");

    scribe.info("one", None, None).await.unwrap();
    scribe.error("two", None, None).await.unwrap();

    let lines = writer.lines.lock().unwrap();
    assert_eq!(
        *lines,
        vec![
            ("test.writer".to_owned(), "one".to_owned()),
            ("test.writer".to_owned(), "two".to_owned()),
        ]
    );
}

#[tokio::test]
async fn ambient_metadata_merges_under_explicit_keys() {
    let recorder = RecordingPlugin::new();
    let config = ScribeConfig::new("test.ambient").with_metadata_provider(|| {
        let mut meta = Metadata::new();
        meta.insert("host".into(), "web-1".into());
        meta.insert("env".into(), "ambient".into());
        meta
    });
    let scribe = Scribe::new(config, vec![Arc::clone(&recorder) as Arc<dyn Plugin>]);

    let mut explicit = Metadata::new();
    explicit.insert("env".into(), "explicit".into());
    scribe.info("m", Some(explicit), None).await.unwrap();

    let seen = recorder.seen.lock().unwrap();
    let meta = seen[0].metadata.as_ref().unwrap();
    assert_eq!(meta.get("host"), Some(&"web-1".into()));
    assert_eq!(meta.get("env"), Some(&"explicit".into()));
}

#[tokio::test]
async fn plugins_can_be_added_and_removed_between_calls() {
    let counter = CountPlugin::new();
    let mut scribe = Scribe::new(ScribeConfig::new("test.registry"), Vec::new());
    assert_eq!(scribe.plugin_count(), 0);

    scribe.push_plugin(Arc::clone(&counter) as Arc<dyn Plugin>);
    scribe.info("seen", None, None).await.unwrap();
    assert_eq!(counter.count.load(Ordering::SeqCst), 1);

    assert!(scribe.remove_plugin("count"));
    assert!(!scribe.remove_plugin("count"));

    scribe.info("unseen", None, None).await.unwrap();
    assert_eq!(counter.count.load(Ordering::SeqCst), 1);
}

/// Transport that always fails, standing in for an unreachable endpoint.
struct DownTransport;

#[async_trait]
impl Transport for DownTransport {
    async fn post(
        &self,
        _url: &str,
        _body: Vec<u8>,
        _headers: &[(String, String)],
    ) -> Result<HttpResponse, PluginError> {
        Err(PluginError::transport("connection refused"))
    }
}

#[tokio::test]
async fn http_failure_surfaces_while_file_sibling_writes() {
    let dir = tempfile::tempdir().unwrap();
    let sink = FilePlugin::new(dir.path(), "survivor.log", upper_formatter);
    let path = sink.path().to_path_buf();

    let http = HttpPlugin::json("https://logs.invalid/ingest")
        .with_transport(Arc::new(DownTransport) as Arc<dyn Transport>);

    let scribe = Scribe::new(
        ScribeConfig::new("test.http"),
        vec![
            Arc::new(http) as Arc<dyn Plugin>,
            Arc::new(sink) as Arc<dyn Plugin>,
        ],
    );

    let err = scribe.error("down", None, None).await.unwrap_err();
    assert_eq!(err.plugin(), "http");

    let lines = scribe::storage::read_lines(&path).await.unwrap();
    assert_eq!(lines, vec!["ERROR: down".to_owned()]);
}
