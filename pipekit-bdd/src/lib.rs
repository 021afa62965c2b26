//! BDD harness (cucumber-rs).
//!
//! Feature files spell stage lists out as text, so scenarios run over a dynamic
//! [`Value`] and a fixed catalog of named stages. The pipe itself is a
//! `pipekit_chain::TryChain`, which keeps the per-stage contract of `pipekit`.

use std::sync::{Arc, Mutex, PoisonError};

use anyhow::Context;
use pipekit_chain::TryChain;
use thiserror::Error;
use tracing::debug;

/// A value flowing through a scenario pipe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Int(i64),
    Text(String),
    List(Vec<i64>),
}

impl Value {
    /// Parse a comma-separated list such as `1,2,3`.
    pub fn parse_list(list: &str) -> anyhow::Result<Self> {
        let items = list
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| s.parse::<i64>().with_context(|| format!("list item {s:?}")))
            .collect::<anyhow::Result<Vec<_>>>()?;
        Ok(Value::List(items))
    }

    fn kind(&self) -> &'static str {
        match self {
            Value::Int(_) => "a number",
            Value::Text(_) => "text",
            Value::List(_) => "a list",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StageFailure {
    /// The stage failed on purpose.
    #[error("{0}")]
    Raised(String),

    #[error("stage `{stage}` cannot take {got}")]
    WrongInput { stage: String, got: &'static str },

    #[error("stage `{stage}` overflowed")]
    Overflow { stage: String },
}

/// Names of the stages a pipe may be built from.
pub const CATALOG: &[&str] = &[
    "double",
    "increment",
    "to_text",
    "exclaim",
    "uppercase",
    "reverse",
    "double_each",
    "at_least_four",
    "join_dash",
    "boom",
];

/// Stage names in the order they ran.
pub type RunLog = Arc<Mutex<Vec<String>>>;

fn overflow(stage: &str) -> StageFailure {
    StageFailure::Overflow {
        stage: stage.to_string(),
    }
}

fn apply(stage: &str, value: Value) -> Result<Value, StageFailure> {
    match (stage, value) {
        ("double", Value::Int(n)) => n.checked_mul(2).map(Value::Int).ok_or_else(|| overflow(stage)),
        ("increment", Value::Int(n)) => n.checked_add(1).map(Value::Int).ok_or_else(|| overflow(stage)),
        ("to_text", Value::Int(n)) => Ok(Value::Text(n.to_string())),
        ("exclaim", Value::Text(s)) => Ok(Value::Text(s + "!")),
        ("uppercase", Value::Text(s)) => Ok(Value::Text(s.to_uppercase())),
        ("reverse", Value::Text(s)) => Ok(Value::Text(s.chars().rev().collect())),
        ("double_each", Value::List(v)) => v
            .into_iter()
            .map(|x| x.checked_mul(2))
            .collect::<Option<Vec<_>>>()
            .map(Value::List)
            .ok_or_else(|| overflow(stage)),
        ("at_least_four", Value::List(v)) => {
            Ok(Value::List(v.into_iter().filter(|x| *x >= 4).collect()))
        }
        ("join_dash", Value::List(v)) => Ok(Value::Text(
            v.iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("-"),
        )),
        ("boom", _) => Err(StageFailure::Raised("boom".to_string())),
        (stage, value) => Err(StageFailure::WrongInput {
            stage: stage.to_string(),
            got: value.kind(),
        }),
    }
}

/// Split `"a, b, c"` into stage names. An empty string means no stages.
pub fn parse_stage_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Build a pipe from catalog stage names. Every stage records itself in `log` when it runs.
///
/// Unknown names are rejected here, before any stage can run.
pub fn build_pipe(names: &[String], log: &RunLog) -> anyhow::Result<TryChain<Value, StageFailure>> {
    let mut chain: TryChain<Value, StageFailure> = TryChain::new("scenario");
    for name in names {
        if !CATALOG.contains(&name.as_str()) {
            anyhow::bail!("unknown stage `{name}`");
        }
        let log = Arc::clone(log);
        let stage = name.clone();
        chain.push(name.clone(), move |value| {
            log.lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(stage.clone());
            apply(&stage, value)
        })?;
    }
    debug!(stages = names.len(), "built scenario pipe");
    Ok(chain)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_stage_list_trims_and_skips_blanks() {
        assert_eq!(parse_stage_list(" a, b ,,c "), vec!["a", "b", "c"]);
        assert!(parse_stage_list("").is_empty());
    }

    #[test]
    fn parse_list_rejects_non_numbers() {
        assert_eq!(Value::parse_list("1, 2").unwrap(), Value::List(vec![1, 2]));
        assert!(Value::parse_list("1,x").is_err());
    }

    #[test]
    fn mismatched_input_is_a_stage_failure() {
        let err = apply("exclaim", Value::Int(1)).unwrap_err();
        assert_eq!(
            err,
            StageFailure::WrongInput {
                stage: "exclaim".to_string(),
                got: "a number",
            }
        );
    }

    #[test]
    fn build_pipe_logs_each_stage() {
        let log = RunLog::default();
        let names = parse_stage_list("increment, double");
        let pipe = build_pipe(&names, &log).unwrap();
        assert_eq!(pipe.run(Value::Int(3)).unwrap(), Value::Int(8));
        assert_eq!(*log.lock().unwrap(), names);
    }

    #[test]
    fn overflow_is_a_stage_failure() {
        assert_eq!(
            apply("double", Value::Int(i64::MAX)).unwrap_err(),
            StageFailure::Overflow {
                stage: "double".to_string()
            }
        );
        assert_eq!(
            apply("increment", Value::Int(i64::MAX)).unwrap_err(),
            StageFailure::Overflow {
                stage: "increment".to_string()
            }
        );
        assert!(apply("double_each", Value::List(vec![1, i64::MIN])).is_err());
        assert_eq!(
            apply("double_each", Value::List(vec![1, -2])).unwrap(),
            Value::List(vec![2, -4])
        );
    }

    #[test]
    fn run_log_survives_a_poisoned_lock() {
        let log = RunLog::default();
        let poisoner = Arc::clone(&log);
        let _ = std::thread::spawn::<_, ()>(move || {
            let _guard = poisoner.lock().unwrap();
            panic!("poison the run log");
        })
        .join();
        assert!(log.is_poisoned());

        let pipe = build_pipe(&parse_stage_list("increment"), &log).unwrap();
        assert_eq!(pipe.run(Value::Int(1)).unwrap(), Value::Int(2));

        let ran = log.lock().unwrap_or_else(PoisonError::into_inner);
        assert_eq!(*ran, vec!["increment".to_string()]);
    }
}
