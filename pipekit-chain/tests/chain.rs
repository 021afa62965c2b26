use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use camino::Utf8PathBuf;
use fs_err as fs;
use pipekit_chain::{
    Chain, ChainError, ChainSettings, SETTINGS_FILE_NAME, TryChain, discover_settings,
    load_settings,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use tempfile::TempDir;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("pipekit_chain=debug"))
        .with_test_writer()
        .try_init();
}

fn temp_root() -> (TempDir, Utf8PathBuf) {
    let td = tempfile::tempdir().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(td.path().to_path_buf()).expect("utf8 tempdir");
    (td, root)
}

#[derive(Debug, PartialEq, thiserror::Error)]
enum ParseError {
    #[error("empty input")]
    Empty,
    #[error("not a number: {0}")]
    NotANumber(String),
}

#[test]
fn chain_runs_scenario_stages() {
    init_tracing();
    let chain = Chain::new("numbers")
        .stage("double", |v: Vec<i32>| v.into_iter().map(|x| x * 2).collect())
        .unwrap()
        .stage("at_least_four", |v: Vec<i32>| {
            v.into_iter().filter(|x| *x >= 4).collect()
        })
        .unwrap();

    assert_eq!(chain.run(vec![1, 2, 3]), vec![4, 6]);
    assert_eq!(chain.stage_names().collect::<Vec<_>>(), vec!["double", "at_least_four"]);
}

#[test]
fn chain_is_reusable_across_threads() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let chain = Arc::new(
        Chain::new("shared")
            .stage("count", move |x: u64| {
                counter.fetch_add(1, Ordering::SeqCst);
                x + 1
            })
            .unwrap(),
    );

    let handles: Vec<_> = (0..4u64)
        .map(|i| {
            let chain = Arc::clone(&chain);
            std::thread::spawn(move || chain.run(i))
        })
        .collect();
    let mut outs: Vec<u64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    outs.sort_unstable();

    assert_eq!(outs, vec![1, 2, 3, 4]);
    assert_eq!(calls.load(Ordering::SeqCst), 4);
}

#[test]
fn into_fn_behaves_like_run() {
    let shout = Chain::new("shout")
        .stage("upper", |s: String| s.to_uppercase())
        .unwrap()
        .stage("bang", |s: String| s + "!")
        .unwrap()
        .into_fn();
    assert_eq!(shout("hi".to_string()), "HI!");
    assert_eq!(shout("yo".to_string()), "YO!");
}

#[test]
fn try_chain_stops_at_first_failure() {
    init_tracing();
    let later = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&later);
    let chain = TryChain::new("parse")
        .stage("non_empty", |s: String| {
            if s.trim().is_empty() {
                Err(ParseError::Empty)
            } else {
                Ok(s)
            }
        })
        .unwrap()
        .stage("digits", |s: String| {
            if s.trim().chars().all(|c| c.is_ascii_digit()) {
                Ok(s)
            } else {
                Err(ParseError::NotANumber(s))
            }
        })
        .unwrap()
        .stage("after", move |s: String| {
            seen.fetch_add(1, Ordering::SeqCst);
            Ok(s)
        })
        .unwrap();

    let err = chain.run("  ".to_string()).unwrap_err();
    assert_eq!((err.index, err.stage.as_str()), (0, "non_empty"));
    assert_eq!(err.into_source(), ParseError::Empty);

    let err = chain.run("4x".to_string()).unwrap_err();
    assert_eq!(err.index, 1);
    assert_eq!(err.source, ParseError::NotANumber("4x".to_string()));

    assert_eq!(later.load(Ordering::SeqCst), 0);
    assert_eq!(chain.run("42".to_string()).unwrap(), "42");
    assert_eq!(later.load(Ordering::SeqCst), 1);
}

#[test]
fn settings_file_caps_chain() {
    let (_td, root) = temp_root();
    fs::write(
        root.join(SETTINGS_FILE_NAME),
        "[chain]\ntrace_stages = false\nmax_stages = 2\n",
    )
    .unwrap();

    let path = discover_settings(&root).expect("settings discovered");
    let settings = load_settings(&path).unwrap();
    assert_eq!(
        settings,
        ChainSettings {
            trace_stages: false,
            max_stages: Some(2),
        }
    );

    let mut chain = Chain::with_settings("capped", settings);
    chain.push("a", |x: i32| x).unwrap();
    chain.push("b", |x: i32| x).unwrap();
    assert!(matches!(
        chain.push("c", |x: i32| x),
        Err(ChainError::StageLimitExceeded { limit: 2, .. })
    ));
}

#[test]
fn missing_settings_file() {
    let (_td, root) = temp_root();
    assert_eq!(discover_settings(&root), None);

    let err = load_settings(&root.join(SETTINGS_FILE_NAME)).unwrap_err();
    assert!(err.to_string().contains("read settings file"));
}

#[test]
fn malformed_settings_file_names_path() {
    let (_td, root) = temp_root();
    let path = root.join(SETTINGS_FILE_NAME);
    fs::write(&path, "[chain\n").unwrap();

    let err = load_settings(&path).unwrap_err();
    assert!(format!("{err:#}").contains(path.as_str()));
}

proptest! {
    #[test]
    fn chain_matches_pipe_all(v in any::<i64>(), adds in prop::collection::vec(-100i64..100, 0..10)) {
        let mut chain = Chain::new("adds");
        for (i, n) in adds.iter().copied().enumerate() {
            chain.push(format!("add_{i}"), move |x: i64| x.wrapping_add(n)).unwrap();
        }
        let direct = pipekit::pipe_all(v, adds.iter().map(|n| move |x: i64| x.wrapping_add(*n)));
        prop_assert_eq!(chain.run(v), direct);
        prop_assert_eq!(chain.len(), adds.len());
    }
}
