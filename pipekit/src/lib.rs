//! Left-to-right function composition.
//!
//! A *stage* is a unary function. Piping a value through stages `f1, f2, ..., fN`
//! computes `fN(...f2(f1(value)))`: every stage runs exactly once, in source order,
//! and its output becomes the next stage's input. With no stages the value is
//! returned unchanged.
//!
//! # Entry points
//!
//! - [`pipe!`] — any number of stages, each with its own input and output type.
//! - [`pipe0`] .. [`pipe25`] — the same contract as plain functions of fixed arity.
//! - [`pipe_all`] — one generic function over a runtime sequence of stages that
//!   all map `T -> T`.
//! - [`Pipe`] — `value.pipe(stage)` for method-chaining style.
//! - [`try_pipe!`] and [`try_pipe_all`] — stages returning `Result`; the first
//!   `Err` is returned as-is and no later stage runs.
//!
//! ```
//! use pipekit::pipe;
//!
//! let shout = pipe!(5, |x| x * 2, |x: i32| x.to_string(), |s| s + "!");
//! assert_eq!(shout, "10!");
//! ```
//!
//! # Failure
//!
//! The combinators never fail on their own. A panicking stage unwinds straight
//! through them, so later stages do not run. Nothing is logged, wrapped or retried.

mod ext;
#[rustfmt::skip]
#[allow(clippy::too_many_arguments)]
mod ladder;
mod macros;
mod seq;

pub use ext::Pipe;
pub use ladder::*;
pub use seq::{pipe_all, try_pipe_all};

/// Highest arity covered by the `pipeN` functions.
///
/// [`pipe!`] has no such limit.
pub const MAX_ARITY: usize = 25;
