#![doc = include_str!("../README.md")]

pub mod attempt;
pub mod error;
pub mod maybe;
pub mod truthy;
pub mod utils;

#[cfg(feature = "macros")]
pub use monadic_error_macros as macros;

/// Useful exports to get started quickly
pub mod prelude {
    pub use crate::{
        attempt::{Attempt, Caught},
        error::{EmptyValueError, Panic},
        maybe::Maybe,
        truthy::Truthy,
        utils::{
            attempt_fn, flatten, from_nullable, from_truthy, hush, note, note_with, option_fn,
            try_attempt, try_option,
        },
    };
    #[cfg(feature = "macros")]
    pub use monadic_error_macros::*;
}
