/// Method-call form of a single stage.
///
/// `value.pipe(f)` is `f(value)`, so `v.pipe(f).pipe(g)` reads in the same
/// left-to-right order as `pipe!(v, f, g)`.
///
/// ```
/// use pipekit::Pipe;
///
/// let joined = vec![1, 2, 3]
///     .pipe(|v| v.into_iter().map(|x| x * 2).collect::<Vec<_>>())
///     .pipe(|v| v.into_iter().filter(|x| *x >= 4).collect::<Vec<_>>())
///     .pipe(|v| v.iter().map(ToString::to_string).collect::<Vec<_>>().join("-"));
/// assert_eq!(joined, "4-6");
/// ```
pub trait Pipe: Sized {
    fn pipe<B>(self, stage: impl FnOnce(Self) -> B) -> B {
        stage(self)
    }
}

impl<T> Pipe for T {}

#[cfg(test)]
mod tests {
    use super::Pipe;

    #[test]
    fn pipe_applies_stage() {
        assert_eq!(3.pipe(|x| x + 1), 4);
    }

    #[test]
    fn chained_calls_run_left_to_right() {
        let out = "ab".pipe(str::to_uppercase).pipe(|s| format!("<{s}>"));
        assert_eq!(out, "<AB>");
    }
}
