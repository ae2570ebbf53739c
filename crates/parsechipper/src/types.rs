//! # Common Types and Traits
use core::{
    fmt::{Debug, Display},
    hash::Hash,
};

use num_traits::{FromPrimitive, PrimInt, ToPrimitive, Unsigned};

use crate::errors::{PCResult, ParsechipperError};

/// A type that can be used as a subtoken id.
///
/// These are constrained to be unsigned primitive integers;
/// such that the OOV id of a vocabulary is representable by `T`.
pub trait TokenType:
    'static
    + PrimInt
    + FromPrimitive
    + ToPrimitive
    + Unsigned
    + Hash
    + Default
    + Debug
    + Display
    + Send
    + Sync
{
}

impl<T> TokenType for T where
    T: 'static
        + PrimInt
        + FromPrimitive
        + ToPrimitive
        + Unsigned
        + Hash
        + Default
        + Debug
        + Display
        + Send
        + Sync
{
}

/// Convert a table index into a token id.
///
/// ## Returns
/// [`ParsechipperError::VocabSizeOverflow`] when `index` does not fit `T`.
pub fn token_from_index<T: TokenType>(index: usize) -> PCResult<T> {
    T::from_usize(index).ok_or(ParsechipperError::VocabSizeOverflow { size: index + 1 })
}

/// Convert a token id back into a table index.
///
/// Ids which do not fit a `usize` yield `None`.
pub fn token_to_index<T: TokenType>(token: T) -> Option<usize> {
    token.to_usize()
}

cfg_if::cfg_if! {
    if #[cfg(feature = "ahash")] {
        /// Type Alias for hash maps in this crate.
        pub type PCHashMap<K, V> = ahash::AHashMap<K, V>;

        /// Type Alias for hash sets in this crate.
        pub type PCHashSet<V> = ahash::AHashSet<V>;
    } else {
        /// Type Alias for hash maps in this crate.
        pub type PCHashMap<K, V> = std::collections::HashMap<K, V>;

        /// Type Alias for hash sets in this crate.
        pub type PCHashSet<V> = std::collections::HashSet<V>;
    }
}

/// A set of token spellings.
///
/// ## Style Hints
/// Instance names should prefer `tokens`, or a category name (`nonterm_left`).
pub type TokenSet = PCHashSet<String>;

/// `{ String -> T }` map.
///
/// ## Style Hints
/// Instance names should prefer `token_map`, or `<segment>_ids`.
pub type TokenIdMap<T> = PCHashMap<String, T>;

/// `{ String -> String }` map.
///
/// ## Style Hints
/// Instance names should prefer `r_to_l`.
pub type TokenRenameMap = PCHashMap<String, String>;
