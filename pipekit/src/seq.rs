//! Runtime sequences of same-typed stages.
//!
//! These trade per-stage type flow for a stage list whose length is only known
//! at run time: every stage maps `T -> T`.

/// Threads `value` through every stage yielded by `stages`, in iteration order.
///
/// An empty sequence returns `value` unchanged.
///
/// ```
/// use pipekit::pipe_all;
///
/// let stages: [fn(i32) -> i32; 3] = [|x| x + 1, |x| x * 10, |x| x - 3];
/// assert_eq!(pipe_all(1, stages), 17);
/// assert_eq!(pipe_all(1, Vec::<fn(i32) -> i32>::new()), 1);
/// ```
pub fn pipe_all<T, I>(value: T, stages: I) -> T
where
    I: IntoIterator,
    I::Item: FnOnce(T) -> T,
{
    stages.into_iter().fold(value, |acc, stage| stage(acc))
}

/// Like [`pipe_all`], for stages that can fail.
///
/// Returns the first `Err` unchanged. Stages after the failing one are not
/// pulled from the iterator.
pub fn try_pipe_all<T, E, I>(value: T, stages: I) -> Result<T, E>
where
    I: IntoIterator,
    I::Item: FnOnce(T) -> Result<T, E>,
{
    stages.into_iter().try_fold(value, |acc, stage| stage(acc))
}
