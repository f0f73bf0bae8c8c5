use crate::error::Panic;
use crate::maybe::Maybe;
use std::any::Any;
use std::fmt::{Debug, Display, Formatter, Result as FmtResult};
use std::panic;
use tracing::{debug, error};

/// The outcome of a computation which may fail with a value of type `F`, or succeed with a
/// value of type `S`.
///
/// Both tracks have their own set of combinators, and transforming one of them never changes
/// the type held by the other one.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Attempt<F, S> {
    /// The computation failed.
    Failure(F),
    /// The computation succeeded.
    Success(S),
}

/// An attempt whose failure is a caught panic, as returned by
/// [`try_attempt`](crate::utils::try_attempt) and the `#[attempt]` macro.
pub type Caught<S> = Attempt<Panic, S>;

use Attempt::*;

impl<F, S> Attempt<F, S> {
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Success(_))
    }

    #[inline]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    #[inline]
    pub fn as_ref(&self) -> Attempt<&F, &S> {
        match *self {
            Success(ref inner) => Success(inner),
            Failure(ref inner) => Failure(inner),
        }
    }

    /// Applies `fun` to the success value, failures are left untouched.
    #[inline]
    pub fn map<T, M>(self, fun: M) -> Attempt<F, T>
    where
        M: FnOnce(S) -> T,
    {
        match self {
            Success(inner) => Success(fun(inner)),
            Failure(inner) => Failure(inner),
        }
    }

    /// Sequences a step which may fail itself.
    ///
    /// The step must fail with the same type as this attempt, use
    /// [`map_failure`](Self::map_failure) first to bring both failures to a common type.
    #[inline]
    pub fn chain<T, M>(self, fun: M) -> Attempt<F, T>
    where
        M: FnOnce(S) -> Attempt<F, T>,
    {
        match self {
            Success(inner) => fun(inner),
            Failure(inner) => Failure(inner),
        }
    }

    /// Same as [`map`](Self::map), but for the failure track.
    #[inline]
    pub fn map_failure<G, M>(self, fun: M) -> Attempt<G, S>
    where
        M: FnOnce(F) -> G,
    {
        match self {
            Success(inner) => Success(inner),
            Failure(inner) => Failure(fun(inner)),
        }
    }

    /// Same as [`chain`](Self::chain), but for the failure track. This allows recovering from a
    /// failure, or replacing it with another one.
    #[inline]
    pub fn chain_failure<G, M>(self, fun: M) -> Attempt<G, S>
    where
        M: FnOnce(F) -> Attempt<G, S>,
    {
        match self {
            Success(inner) => Success(inner),
            Failure(inner) => fun(inner),
        }
    }

    /// Replaces the success value with `value`, a failure stays as it is.
    #[inline]
    pub fn lift<T>(self, value: T) -> Attempt<F, T> {
        self.map(|_| value)
    }

    /// Collapses both tracks into a single value.
    #[inline]
    pub fn fold<T, OnFailure, OnSuccess>(self, on_failure: OnFailure, on_success: OnSuccess) -> T
    where
        OnFailure: FnOnce(F) -> T,
        OnSuccess: FnOnce(S) -> T,
    {
        match self {
            Success(inner) => on_success(inner),
            Failure(inner) => on_failure(inner),
        }
    }

    /// Returns the success value, or `default` if this attempt failed.
    #[inline]
    pub fn unwrap_or(self, default: S) -> S {
        match self {
            Success(inner) => inner,
            Failure(_) => default,
        }
    }

    #[inline]
    pub fn unwrap_or_else<M>(self, fun: M) -> S
    where
        M: FnOnce(F) -> S,
    {
        match self {
            Success(inner) => inner,
            Failure(inner) => fun(inner),
        }
    }

    /// Returns the failure value, or `default` if this attempt succeeded.
    #[inline]
    pub fn unwrap_failure_or(self, default: F) -> F {
        match self {
            Success(_) => default,
            Failure(inner) => inner,
        }
    }

    /// Keeps the success value, discarding the failure, see [`hush`](crate::utils::hush).
    #[inline]
    pub fn hush(self) -> Maybe<S> {
        match self {
            Success(inner) => Maybe::Some(inner),
            Failure(_) => Maybe::Nothing,
        }
    }

    /// Keeps the failure value, discarding the success.
    #[inline]
    pub fn failure(self) -> Maybe<F> {
        match self {
            Success(_) => Maybe::Nothing,
            Failure(inner) => Maybe::Some(inner),
        }
    }

    /// Converts this attempt into a standard [`Result`].
    #[inline]
    pub fn into_result(self) -> Result<S, F> {
        match self {
            Success(inner) => Ok(inner),
            Failure(inner) => Err(inner),
        }
    }

    /// Returns the success value, otherwise raises the failure as a panic.
    ///
    /// A [`Panic`] failure, as produced by [`try_attempt`](crate::utils::try_attempt), is
    /// resumed with its original payload, without invoking the panic hook again. Any other
    /// failure is raised as a new panic whose payload is the failure itself, so it can be
    /// recovered by downcasting the payload returned by
    /// [`catch_unwind`](std::panic::catch_unwind).
    ///
    /// # Panics
    ///
    /// Panics if this attempt is a failure.
    #[track_caller]
    pub fn resolve_or_raise(self) -> S
    where
        F: Debug + Send + 'static,
    {
        match self {
            Success(inner) => inner,
            Failure(inner) => raise(inner),
        }
    }
}

#[track_caller]
fn raise<F>(failure: F) -> !
where
    F: Debug + Send + 'static,
{
    error!("Raising failed attempt: {:?}", failure);

    if !(&failure as &dyn Any).is::<Panic>() {
        panic::panic_any(failure)
    }

    let payload: Box<dyn Any + Send> = Box::new(failure);
    match payload.downcast::<Panic>() {
        Ok(native) => {
            debug!("Failure is a caught panic, resuming its original payload");
            native.resume()
        }
        Err(payload) => panic::resume_unwind(payload),
    }
}

impl<F, S> From<Result<S, F>> for Attempt<F, S> {
    fn from(value: Result<S, F>) -> Self {
        match value {
            Ok(inner) => Success(inner),
            Err(inner) => Failure(inner),
        }
    }
}

impl<F, S> From<Attempt<F, S>> for Result<S, F> {
    fn from(value: Attempt<F, S>) -> Self {
        value.into_result()
    }
}

impl<F: Display, S: Display> Display for Attempt<F, S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Success(inner) => write!(f, "Success({})", inner),
            Failure(inner) => write!(f, "Failure({})", inner),
        }
    }
}
