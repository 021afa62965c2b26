/// Threads a value through any number of stages, left to right.
///
/// `pipe!(v)` is `v`. `pipe!(v, f, g)` is `g(f(v))`. Each stage may change the
/// value's type; closure parameter types are inferred from the previous stage.
///
/// ```
/// use pipekit::pipe;
///
/// let out = pipe!(
///     "hello",
///     |s| s.to_uppercase(),
///     |s| s.chars().rev().collect::<String>(),
/// );
/// assert_eq!(out, "OLLEH");
/// assert_eq!(pipe!(42), 42);
/// ```
#[macro_export]
macro_rules! pipe {
    ($value:expr $(,)?) => {
        $crate::pipe0($value)
    };
    ($value:expr, $($stage:expr),+ $(,)?) => {{
        let value = $value;
        $(
            let value = $crate::pipe1(value, $stage);
        )+
        value
    }};
}

/// Threads a value through stages that return `Result`, stopping at the first `Err`.
///
/// The error is returned exactly as the failing stage produced it. Stages after
/// the failing one never run. `try_pipe!(v)` is `Ok(v)`.
///
/// ```
/// use pipekit::try_pipe;
///
/// let parsed: Result<u32, String> = try_pipe!(
///     " 21 ",
///     |s| Ok(s.trim()),
///     |s| s.parse::<u32>().map_err(|e| e.to_string()),
///     |n| Ok(n * 2),
/// );
/// assert_eq!(parsed, Ok(42));
/// ```
#[macro_export]
macro_rules! try_pipe {
    ($value:expr $(,)?) => {
        ::core::result::Result::Ok($value)
    };
    ($value:expr, $($stage:expr),+ $(,)?) => {{
        let value = ::core::result::Result::Ok($value);
        $(
            let value = ::core::result::Result::and_then(value, $stage);
        )+
        value
    }};
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    #[test]
    fn empty_pipe_is_identity() {
        assert_eq!(crate::pipe!(42), 42);
        assert_eq!(crate::pipe!("x",), "x");
    }

    #[test]
    fn stages_change_type() {
        let out = crate::pipe!(5, |x| x * 2, |x: i32| x.to_string(), |s| s + "!");
        assert_eq!(out, "10!");
    }

    #[test]
    fn stages_run_once_in_order() {
        let log = RefCell::new(Vec::new());
        let out = crate::pipe!(
            1,
            |x| {
                log.borrow_mut().push("a");
                x + 1
            },
            |x| {
                log.borrow_mut().push("b");
                x * 10
            },
        );
        assert_eq!(out, 20);
        assert_eq!(*log.borrow(), vec!["a", "b"]);
    }

    #[test]
    fn try_pipe_stops_at_first_error() {
        let reached = RefCell::new(false);
        let out: Result<i32, &str> = crate::try_pipe!(
            1,
            |_| Err("boom"),
            |x: i32| {
                *reached.borrow_mut() = true;
                Ok(x + 1)
            },
        );
        assert_eq!(out, Err("boom"));
        assert!(!*reached.borrow());
    }

    #[test]
    fn empty_try_pipe_is_ok() {
        let out: Result<&str, ()> = crate::try_pipe!("same");
        assert_eq!(out, Ok("same"));
    }
}
