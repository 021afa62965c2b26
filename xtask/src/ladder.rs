//! Generator for `pipekit/src/ladder.rs`, the fixed-arity `pipeN` functions.

use std::fmt::Write as _;

/// Value type parameters, one per position in the chain. Arity `n` uses `n + 1` of them.
const VALUE_TYPES: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

const HEADER: &str = "\
// @generated by `cargo xtask gen-ladder`. Do not edit by hand.

//! Fixed-arity pipe functions.
//!
//! `pipeN` threads a value through exactly `N` stages, left to right. Each stage's
//! output type is checked against the next stage's input type.
";

/// Highest arity the generator can emit with single-letter value types.
pub fn max_supported_arity() -> usize {
    VALUE_TYPES.len() - 1
}

/// Render the ladder source for arities `0..=max_arity`.
pub fn render(max_arity: usize) -> anyhow::Result<String> {
    anyhow::ensure!(
        max_arity <= max_supported_arity(),
        "max arity {max_arity} exceeds {}",
        max_supported_arity()
    );

    let mut out = String::from(HEADER);
    for arity in 0..=max_arity {
        out.push('\n');
        render_fn(&mut out, arity)?;
    }
    Ok(out)
}

fn value_type(pos: usize) -> char {
    char::from(VALUE_TYPES[pos])
}

fn doc_line(arity: usize) -> String {
    match arity {
        0 => "Returns `value` unchanged.".to_string(),
        1 => "Applies one stage to `value`.".to_string(),
        n => format!("Threads `value` through {n} stages, left to right."),
    }
}

fn render_fn(out: &mut String, arity: usize) -> std::fmt::Result {
    writeln!(out, "/// {}", doc_line(arity))?;
    writeln!(out, "#[inline]")?;

    if arity == 0 {
        writeln!(out, "pub fn pipe0<A>(value: A) -> A {{")?;
        writeln!(out, "    value")?;
        return writeln!(out, "}}");
    }

    let generics = (0..=arity)
        .map(|pos| value_type(pos).to_string())
        .chain((1..=arity).map(|i| format!("F{i}")))
        .collect::<Vec<_>>()
        .join(", ");
    writeln!(out, "pub fn pipe{arity}<{generics}>(")?;
    writeln!(out, "    value: A,")?;
    for i in 1..=arity {
        writeln!(out, "    f{i}: F{i},")?;
    }
    writeln!(out, ") -> {}", value_type(arity))?;

    writeln!(out, "where")?;
    for i in 1..=arity {
        writeln!(
            out,
            "    F{i}: FnOnce({}) -> {},",
            value_type(i - 1),
            value_type(i)
        )?;
    }

    writeln!(out, "{{")?;
    for i in 1..arity {
        writeln!(out, "    let value = f{i}(value);")?;
    }
    writeln!(out, "    f{arity}(value)")?;
    writeln!(out, "}}")
}
