use crate::attempt::{Attempt, Caught};
use crate::error::Panic;
use crate::maybe::Maybe;
use crate::truthy::Truthy;
use std::panic::{self, AssertUnwindSafe};
use tracing::debug;

/// Runs `fun`, returning its output as a [`Some`](Maybe::Some) value, or
/// [`Nothing`](Maybe::Nothing) if it panicked.
///
/// The panic is discarded, use [`try_attempt`] to keep it. Only unwinding panics raised inside
/// `fun` are caught, a process abort is never turned into a value. The panic hook still runs
/// before the panic is caught.
pub fn try_option<A, F>(fun: F) -> Maybe<A>
where
    F: FnOnce() -> A,
{
    try_attempt(fun).hush()
}

/// Runs `fun`, returning its output as a [`Success`](Attempt::Success), or the caught
/// [`Panic`] as a [`Failure`](Attempt::Failure).
pub fn try_attempt<A, F>(fun: F) -> Caught<A>
where
    F: FnOnce() -> A,
{
    match panic::catch_unwind(AssertUnwindSafe(fun)) {
        Ok(value) => Attempt::Success(value),
        Err(payload) => {
            let panic = Panic::new(payload);
            debug!("Wrapped call panicked: {}", panic);
            Attempt::Failure(panic)
        }
    }
}

/// Wraps `fun` so every call goes through [`try_option`]. Functions taking more than one
/// argument can be wrapped by taking a tuple.
pub fn option_fn<T, A, F>(mut fun: F) -> impl FnMut(T) -> Maybe<A>
where
    F: FnMut(T) -> A,
{
    move |arg| try_option(|| fun(arg))
}

/// Wraps `fun` so every call goes through [`try_attempt`].
pub fn attempt_fn<T, A, F>(mut fun: F) -> impl FnMut(T) -> Caught<A>
where
    F: FnMut(T) -> A,
{
    move |arg| try_attempt(|| fun(arg))
}

/// Converts a nullable value into a maybe. Only `None` is absent, `Some(0)` or `Some("")` are
/// kept.
pub fn from_nullable<A>(value: Option<A>) -> Maybe<A> {
    Maybe::from(value)
}

/// Converts a nullable value into a maybe, also treating falsy values as absent.
///
/// ```
/// use monadic_error::prelude::*;
///
/// assert_eq!(from_truthy(Some(1)), Maybe::Some(1));
/// assert_eq!(from_truthy(Some(0)), Maybe::Nothing);
/// assert_eq!(from_truthy(Some("")), Maybe::Nothing);
/// ```
pub fn from_truthy<A: Truthy>(value: Option<A>) -> Maybe<A> {
    from_nullable(value).filter(Truthy::is_truthy)
}

/// Converts a maybe into an attempt, using `failure` when there is no value.
pub fn note<F, A>(opt: Maybe<A>, failure: F) -> Attempt<F, A> {
    opt.note(failure)
}

/// Same as [`note`], but the failure is produced by `producer` only when there is no value.
pub fn note_with<F, A, P>(opt: Maybe<A>, producer: P) -> Attempt<F, A>
where
    P: FnOnce() -> F,
{
    opt.note_with(producer)
}

/// Converts an attempt into a maybe, silencing the failure.
pub fn hush<F, A>(attempt: Attempt<F, A>) -> Maybe<A> {
    attempt.hush()
}

/// Removes one level of nesting from a maybe of a maybe.
pub fn flatten<A>(opt: Maybe<Maybe<A>>) -> Maybe<A> {
    opt.flatten()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EmptyValueError;

    #[derive(Debug, PartialEq)]
    struct Reason(&'static str);

    #[test]
    fn try_attempt_keeps_the_panic() {
        let attempt = try_attempt(|| -> i32 { std::panic::panic_any(Reason("test")) });
        let panic = attempt.failure().unwrap();
        assert_eq!(panic.downcast_ref::<Reason>(), Some(&Reason("test")));
    }

    #[test]
    fn try_attempt_success() {
        assert_eq!(try_attempt(|| 7).hush(), Maybe::Some(7));
    }

    #[test]
    fn try_attempt_message() {
        let attempt = try_attempt(|| -> u8 { panic!("Test {}", 1) });
        assert_eq!(attempt.failure().unwrap().message(), Some("Test 1"));
    }

    #[test]
    fn try_option_discards_the_panic() {
        assert_eq!(try_option(|| -> i32 { panic!("Test") }), Maybe::Nothing);
        assert_eq!(try_option(|| 1), Maybe::Some(1));
    }

    #[test]
    fn unwrap_inside_try_attempt() {
        let attempt = try_attempt(|| Maybe::<i32>::Nothing.unwrap());
        assert!(attempt.failure().unwrap().is::<EmptyValueError>());
    }

    #[test]
    fn wrapped_functions() {
        let mut parse = option_fn(|s: &str| s.parse::<i32>().unwrap());
        assert_eq!(parse("4"), Maybe::Some(4));
        assert_eq!(parse("four"), Maybe::Nothing);

        let mut divide = attempt_fn(|(a, b): (i32, i32)| a / b);
        assert_eq!(divide((6, 3)).hush(), Maybe::Some(2));
        assert!(divide((1, 0)).is_failure());
    }

    #[test]
    fn wrapped_function_state_survives_panics() {
        let mut calls = 0;
        let mut counted = option_fn(|fail: bool| {
            calls += 1;
            assert!(!fail);
        });
        assert_eq!(counted(true), Maybe::Nothing);
        assert_eq!(counted(false), Maybe::Some(()));
        drop(counted);
        assert_eq!(calls, 2);
    }

    #[test]
    fn nullable() {
        assert_eq!(from_nullable(Some(1)), Maybe::Some(1));
        assert_eq!(from_nullable(Some(0)), Maybe::Some(0));
        assert_eq!(from_nullable::<i32>(None), Maybe::Nothing);
    }

    #[test]
    fn truthy() {
        assert_eq!(from_truthy(Some("a")), Maybe::Some("a"));
        assert_eq!(from_truthy(Some(false)), Maybe::Nothing);
        assert_eq!(from_truthy(Some(Vec::<u8>::new())), Maybe::Nothing);
        assert_eq!(from_truthy::<i32>(None), Maybe::Nothing);
    }

    #[test]
    fn note_and_hush() {
        assert_eq!(note(Maybe::Some(1), "x"), Attempt::Success(1));
        assert_eq!(note(Maybe::<i32>::Nothing, "x"), Attempt::Failure("x"));
        assert_eq!(hush(Attempt::<&str, i32>::Success(1)), Maybe::Some(1));
        assert_eq!(hush(Attempt::<&str, i32>::Failure("x")), Maybe::Nothing);
    }

    #[test]
    fn note_with_is_lazy() {
        let mut built = 0;
        let _ = note_with(Maybe::Some(1), || {
            built += 1;
            Reason("unused")
        });
        let noted = note_with(Maybe::<i32>::Nothing, || {
            built += 1;
            Reason("missing")
        });
        assert_eq!(noted, Attempt::Failure(Reason("missing")));
        assert_eq!(built, 1);
    }

    #[test]
    fn flatten_levels() {
        assert_eq!(flatten(Maybe::Some(Maybe::Some(5))), Maybe::Some(5));
        assert_eq!(flatten(Maybe::Some(Maybe::<i32>::Nothing)), Maybe::Nothing);
        assert_eq!(flatten(Maybe::<Maybe<i32>>::Nothing), Maybe::Nothing);
    }
}
