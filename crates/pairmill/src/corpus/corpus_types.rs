//! # Corpus Types
use core::{
    borrow::Borrow,
    fmt::{Debug, Display},
    hash::Hash,
    ops::{AddAssign, SubAssign},
};

use num_traits::{FromPrimitive, PrimInt, ToPrimitive};

/// A type that can be used as a word key.
///
/// `Borrow<str>` lets counters probe the table with `&str` before allocating a key.
pub trait WordKeyType:
    for<'a> From<&'a str> + AsRef<str> + Borrow<str> + Debug + Clone + Send + Sync + Eq + Hash + Ord
{
}

impl<T> WordKeyType for T where
    T: for<'a> From<&'a str> + AsRef<str> + Borrow<str> + Debug + Clone + Send + Sync + Eq + Hash + Ord
{
}

/// A type that can be used as a word or pair count.
pub trait CountType:
    'static
    + PrimInt
    + FromPrimitive
    + ToPrimitive
    + Hash
    + Default
    + Debug
    + Display
    + Send
    + Sync
    + AddAssign
    + SubAssign
{
}

impl<T> CountType for T where
    T: 'static
        + PrimInt
        + FromPrimitive
        + ToPrimitive
        + Hash
        + Default
        + Debug
        + Display
        + Send
        + Sync
        + AddAssign
        + SubAssign
{
}
