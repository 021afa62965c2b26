//! Stage events emitted through `tracing`.
//!
//! Each test installs its own thread-local subscriber that writes into a buffer,
//! so the assertions only see events from the chain under test.

use std::io;
use std::sync::{Arc, Mutex};

use pipekit_chain::{Chain, ChainSettings, TryChain};
use pretty_assertions::assert_eq;
use tracing::Level;

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Captured {
    fn text(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

fn capture<R>(f: impl FnOnce() -> R) -> (R, String) {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_max_level(Level::DEBUG)
        .with_ansi(false)
        .without_time()
        .finish();
    let out = tracing::subscriber::with_default(subscriber, f);
    (out, captured.text())
}

fn lines_with<'a>(logs: &'a str, needle: &str) -> Vec<&'a str> {
    logs.lines().filter(|l| l.contains(needle)).collect()
}

#[derive(Debug, PartialEq, thiserror::Error)]
#[error("too big: {0}")]
struct TooBig(u32);

fn three_stage_chain(settings: ChainSettings) -> Chain<u32> {
    Chain::with_settings("traced", settings)
        .stage("inc", |x: u32| x + 1)
        .unwrap()
        .stage("double", |x: u32| x * 2)
        .unwrap()
        .stage("dec", |x: u32| x - 1)
        .unwrap()
}

#[test]
fn one_event_per_stage_with_fields() {
    let chain = three_stage_chain(ChainSettings::default());
    let (out, logs) = capture(|| chain.run(4));
    assert_eq!(out, 9);

    let running = lines_with(&logs, "running stage");
    assert_eq!(running.len(), 3, "logs:\n{logs}");
    for (index, (line, stage)) in running.iter().zip(["inc", "double", "dec"]).enumerate() {
        assert!(line.contains("DEBUG"), "{line}");
        assert!(line.contains("chain=traced"), "{line}");
        assert!(line.contains(stage), "{line}");
        assert!(line.contains(&format!("index={index}")), "{line}");
    }
}

#[test]
fn tracing_disabled_emits_nothing() {
    let settings = ChainSettings {
        trace_stages: false,
        ..ChainSettings::default()
    };
    let chain = three_stage_chain(settings);
    let (out, logs) = capture(|| chain.run(4));
    assert_eq!(out, 9);
    assert!(lines_with(&logs, "running stage").is_empty(), "logs:\n{logs}");
}

#[test]
fn failing_stage_emits_one_failure_event() {
    let chain: TryChain<u32, TooBig> = TryChain::new("guarded")
        .stage("inc", |x: u32| Ok(x + 1))
        .unwrap()
        .stage("limit", |x| if x > 10 { Err(TooBig(x)) } else { Ok(x) })
        .unwrap()
        .stage("never", |x| Ok(x))
        .unwrap();

    let (out, logs) = capture(|| chain.run(10));
    let err = out.unwrap_err();
    assert_eq!(err.index, 1);

    assert_eq!(lines_with(&logs, "running stage").len(), 2, "logs:\n{logs}");
    let failed = lines_with(&logs, "stage failed");
    assert_eq!(failed.len(), 1, "logs:\n{logs}");
    assert!(failed[0].contains("chain=guarded"), "{}", failed[0]);
    assert!(failed[0].contains("index=1"), "{}", failed[0]);
    assert!(failed[0].contains("too big: 11"), "{}", failed[0]);
}

#[test]
fn successful_run_emits_no_failure_event() {
    let chain: TryChain<u32, TooBig> = TryChain::new("fine").stage("id", |x: u32| Ok(x)).unwrap();
    let (out, logs) = capture(|| chain.run(1));
    assert_eq!(out.unwrap(), 1);
    assert!(lines_with(&logs, "stage failed").is_empty(), "logs:\n{logs}");
}
