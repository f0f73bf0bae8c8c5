use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

/// Values which can be judged as "empty", used by [`from_truthy`](crate::utils::from_truthy).
///
/// Zero numbers, `false`, empty strings and empty collections are falsy, everything else is
/// truthy.
pub trait Truthy {
    fn is_truthy(&self) -> bool;
}

macro_rules! truthy_number {
    ($($t:ty),* $(,)?) => {
        $(
            impl Truthy for $t {
                fn is_truthy(&self) -> bool {
                    *self != 0
                }
            }
        )*
    };
}

macro_rules! truthy_collection {
    ($($t:ty => [$($generics:tt)*]),* $(,)?) => {
        $(
            impl<$($generics)*> Truthy for $t {
                fn is_truthy(&self) -> bool {
                    !self.is_empty()
                }
            }
        )*
    };
}

truthy_number![i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize];

truthy_collection![
    str => [],
    String => [],
    [T] => [T],
    Vec<T> => [T],
    VecDeque<T> => [T],
    HashMap<K, V, S> => [K, V, S],
    HashSet<T, S> => [T, S],
    BTreeMap<K, V> => [K, V],
    BTreeSet<T> => [T],
];

impl Truthy for f32 {
    fn is_truthy(&self) -> bool {
        *self != 0.0
    }
}

impl Truthy for f64 {
    fn is_truthy(&self) -> bool {
        *self != 0.0
    }
}

impl Truthy for bool {
    fn is_truthy(&self) -> bool {
        *self
    }
}

impl Truthy for () {
    fn is_truthy(&self) -> bool {
        false
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

impl<T: Truthy + ?Sized> Truthy for Box<T> {
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

impl<T: Truthy> Truthy for Option<T> {
    fn is_truthy(&self) -> bool {
        self.as_ref().map_or(false, Truthy::is_truthy)
    }
}
