use crate::attempt::Attempt;
use crate::error::EmptyValueError;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::panic;
use tracing::error;

mod append {
    /// Tuples that can take one more element at their end, used by
    /// [`zip_flat`](super::Maybe::zip_flat) to avoid building nested tuples.
    pub trait Append<T> {
        type Output;
        fn append(self, value: T) -> Self::Output;
    }

    macro_rules! append {
        ($(($($name:ident),*)),* $(,)?) => {
            $(
                #[allow(non_snake_case)]
                impl<$($name,)* T> Append<T> for ($($name,)*) {
                    type Output = ($($name,)* T,);

                    fn append(self, value: T) -> Self::Output {
                        let ($($name,)*) = self;
                        ($($name,)* value,)
                    }
                }
            )*
        };
    }

    append![
        (),
        (A),
        (A, B),
        (A, B, C),
        (A, B, C, D),
        (A, B, C, D, E),
        (A, B, C, D, E, F),
        (A, B, C, D, E, F, G),
        (A, B, C, D, E, F, G, H),
        (A, B, C, D, E, F, G, H, I),
        (A, B, C, D, E, F, G, H, I, J),
        (A, B, C, D, E, F, G, H, I, J, K),
    ];
}

pub use append::Append;

/// A value of type `A`, or nothing at all.
///
/// Unlike a nullable value, presence is carried by the variant alone, so `Some(0)` or
/// `Some("")` are as present as any other value. Every combinator consumes the maybe and
/// returns a new one, none of them can fail except [`unwrap`](Self::unwrap).
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Maybe<A> {
    /// No value.
    #[default]
    Nothing,
    /// Some value of type `A`.
    Some(A),
}

use Maybe::*;

impl<A> Maybe<A> {
    /// Returns `true` if this is a [`Some`](Maybe::Some) value.
    #[inline]
    pub fn is_some(&self) -> bool {
        matches!(self, Some(_))
    }

    /// Returns `true` if this is [`Nothing`](Maybe::Nothing).
    #[inline]
    pub fn is_nothing(&self) -> bool {
        !self.is_some()
    }

    #[inline]
    pub fn as_ref(&self) -> Maybe<&A> {
        match *self {
            Some(ref inner) => Some(inner),
            Nothing => Nothing,
        }
    }

    #[inline]
    pub fn as_mut(&mut self) -> Maybe<&mut A> {
        match *self {
            Some(ref mut inner) => Some(inner),
            Nothing => Nothing,
        }
    }

    /// Applies `fun` to the held value. `fun` is never called on [`Nothing`](Maybe::Nothing).
    ///
    /// `fun` is expected not to fail, use [`chain`](Self::chain) for steps that may produce
    /// nothing themselves.
    #[inline]
    pub fn map<B, F>(self, fun: F) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Some(inner) => Some(fun(inner)),
            Nothing => Nothing,
        }
    }

    /// Sequences a step which itself returns a maybe, the result of `fun` is returned as is.
    #[inline]
    pub fn chain<B, F>(self, fun: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        match self {
            Some(inner) => fun(inner),
            Nothing => Nothing,
        }
    }

    /// Replaces the held value with `value`, keeping the shape of this maybe.
    #[inline]
    pub fn lift<B>(self, value: B) -> Maybe<B> {
        self.map(|_| value)
    }

    /// Keeps the value only if it satisfies `predicate`.
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&A) -> bool,
    {
        match self {
            Some(inner) if predicate(&inner) => Some(inner),
            _ => Nothing,
        }
    }

    /// Pairs two values together, only if both of them are present.
    #[inline]
    pub fn zip<B>(self, other: Maybe<B>) -> Maybe<(A, B)> {
        match (self, other) {
            (Some(a), Some(b)) => Some((a, b)),
            _ => Nothing,
        }
    }

    /// Same as [`zip`](Self::zip), but appends the other value to an already zipped tuple, so
    /// `a.zip(b).zip_flat(c)` holds `(a, b, c)` instead of `((a, b), c)`.
    #[inline]
    pub fn zip_flat<B>(self, other: Maybe<B>) -> Maybe<A::Output>
    where
        A: Append<B>,
    {
        self.zip(other).map(|(tuple, value)| tuple.append(value))
    }

    /// Returns the held value, or `default` if there is none.
    #[inline]
    pub fn unwrap_or(self, default: A) -> A {
        match self {
            Some(inner) => inner,
            Nothing => default,
        }
    }

    #[inline]
    pub fn unwrap_or_else<F>(self, fun: F) -> A
    where
        F: FnOnce() -> A,
    {
        match self {
            Some(inner) => inner,
            Nothing => fun(),
        }
    }

    /// Returns the held value.
    ///
    /// # Panics
    ///
    /// Panics with an [`EmptyValueError`] payload if there is no value.
    #[track_caller]
    pub fn unwrap(self) -> A {
        match self {
            Some(inner) => inner,
            Nothing => {
                error!("{}", EmptyValueError);
                panic::panic_any(EmptyValueError)
            }
        }
    }

    /// Attaches `failure` to an absent value, see [`note`](crate::utils::note).
    #[inline]
    pub fn note<F>(self, failure: F) -> Attempt<F, A> {
        match self {
            Some(inner) => Attempt::Success(inner),
            Nothing => Attempt::Failure(failure),
        }
    }

    /// Like [`note`](Self::note), but the failure is only built if the value is absent.
    #[inline]
    pub fn note_with<F, P>(self, producer: P) -> Attempt<F, A>
    where
        P: FnOnce() -> F,
    {
        match self {
            Some(inner) => Attempt::Success(inner),
            Nothing => Attempt::Failure(producer()),
        }
    }

    #[inline]
    pub fn iter(&self) -> std::option::IntoIter<&A> {
        self.as_ref().into_option().into_iter()
    }

    /// Converts this maybe into a standard [`Option`].
    #[inline]
    pub fn into_option(self) -> Option<A> {
        match self {
            Some(inner) => Option::Some(inner),
            Nothing => None,
        }
    }
}

impl<A> Maybe<Maybe<A>> {
    /// Removes one level of nesting.
    #[inline]
    pub fn flatten(self) -> Maybe<A> {
        self.chain(|inner| inner)
    }
}

impl<A> From<Option<A>> for Maybe<A> {
    fn from(value: Option<A>) -> Self {
        match value {
            Option::Some(inner) => Some(inner),
            None => Nothing,
        }
    }
}

impl<A> IntoIterator for Maybe<A> {
    type Item = A;
    type IntoIter = std::option::IntoIter<A>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

impl<A: Display> Display for Maybe<A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Some(inner) => write!(f, "Some({})", inner),
            Nothing => f.write_str("Nothing"),
        }
    }
}
