use std::any::Any;
use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::panic;
use thiserror::Error;

/// The payload of the panic raised when [`Maybe::unwrap`] is called on a
/// [`Nothing`](crate::maybe::Maybe::Nothing) value.
///
/// [`Maybe::unwrap`]: crate::maybe::Maybe::unwrap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("called unwrap on a Nothing value")]
pub struct EmptyValueError;

/// A panic caught while running a wrapped computation.
///
/// This is the failure side of a [`Caught`](crate::attempt::Caught) attempt, it owns the
/// original panic payload so it can be inspected, downcast or resumed as it was raised.
#[derive(Error)]
#[error("{}", self.message().unwrap_or("opaque panic payload"))]
pub struct Panic {
    payload: Box<dyn Any + Send>,
}

impl Panic {
    /// Creates a new panic from the payload returned by [`catch_unwind`](std::panic::catch_unwind).
    pub fn new(payload: Box<dyn Any + Send>) -> Self {
        Self { payload }
    }

    /// The message of this panic, if the payload was raised by `panic!` or is an
    /// [`EmptyValueError`].
    pub fn message(&self) -> Option<&str> {
        if let Some(message) = self.payload.downcast_ref::<&'static str>() {
            Some(message)
        } else if let Some(message) = self.payload.downcast_ref::<String>() {
            Some(message.as_str())
        } else if self.payload.is::<EmptyValueError>() {
            Some("called unwrap on a Nothing value")
        } else {
            None
        }
    }

    /// Whether the payload is of type `T`.
    pub fn is<T: Any>(&self) -> bool {
        self.payload.is::<T>()
    }

    /// Borrows the payload as a `T`, if it has that type.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.payload.downcast_ref()
    }

    /// Tries to take the payload out as a `T`, giving the panic back if the payload has
    /// another type.
    pub fn downcast<T: Any>(self) -> Result<T, Self> {
        self.payload
            .downcast::<T>()
            .map(|inner| *inner)
            .map_err(Self::new)
    }

    /// Takes the raw payload, as `catch_unwind` returned it.
    pub fn into_payload(self) -> Box<dyn Any + Send> {
        self.payload
    }

    /// Continues unwinding with the original payload, without invoking the panic hook again.
    pub fn resume(self) -> ! {
        panic::resume_unwind(self.payload)
    }
}

impl Debug for Panic {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self.message() {
            Some(message) => f.debug_tuple("Panic").field(&message).finish(),
            None => f.write_str("Panic(<opaque>)"),
        }
    }
}

impl From<Box<dyn Any + Send>> for Panic {
    fn from(payload: Box<dyn Any + Send>) -> Self {
        Self::new(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_from_str_payload() {
        let panic = Panic::new(Box::new("boom"));
        assert_eq!(panic.message(), Some("boom"));
        assert_eq!(panic.to_string(), "boom");
        assert_eq!(format!("{:?}", panic), "Panic(\"boom\")");
    }

    #[test]
    fn message_from_string_payload() {
        let panic = Panic::new(Box::new(String::from("formatted 3")));
        assert_eq!(panic.message(), Some("formatted 3"));
    }

    #[test]
    fn empty_value_payload() {
        let panic = Panic::new(Box::new(EmptyValueError));
        assert!(panic.is::<EmptyValueError>());
        assert_eq!(panic.to_string(), EmptyValueError.to_string());
    }

    #[test]
    fn opaque_payload() {
        let panic = Panic::new(Box::new(42u8));
        assert_eq!(panic.message(), None);
        assert_eq!(panic.to_string(), "opaque panic payload");
        assert_eq!(format!("{:?}", panic), "Panic(<opaque>)");
        assert_eq!(panic.downcast_ref::<u8>(), Some(&42));
    }

    #[test]
    fn downcast_gives_back_the_panic() {
        let panic = Panic::new(Box::new(7i32));
        let panic = panic.downcast::<String>().unwrap_err();
        assert_eq!(panic.downcast::<i32>().unwrap(), 7);
    }

    #[test]
    fn resume_keeps_the_payload() {
        let caught = panic::catch_unwind(|| Panic::new(Box::new(11u32)).resume()).unwrap_err();
        assert_eq!(caught.downcast_ref::<u32>(), Some(&11));
    }
}
