//! # Composite Token Splitting
//!
//! A composite token ``head_t1_rest...`` is split on [`SEGMENT_SEPARATOR`]:
//! * if `t1` is a head discriminator, the head becomes ``head_t1``
//!   and the tail is ``rest...``;
//! * otherwise the head stays `head`, and the tail is ``rest..., t1``.
//!
//! See [`HEAD_DISCRIMINATORS`](crate::vocab::special_tokens::HEAD_DISCRIMINATORS).

use crate::vocab::special_tokens::{SEGMENT_SEPARATOR, is_head_discriminator};

/// The head and tail fragments of a composite token.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CompositeSplit {
    /// The head fragment; possibly a two-segment compound.
    pub head: String,

    /// The tail fragments, in split order.
    pub tail: Vec<String>,
}

/// Does `token` contain a [`SEGMENT_SEPARATOR`]?
pub fn is_composite(token: &str) -> bool {
    token.contains(SEGMENT_SEPARATOR)
}

/// Split a composite token into its head and tail fragments.
///
/// ## Arguments
/// * `token` - a normalized token.
///
/// ## Returns
/// `None` if `token` is not composite.
pub fn split_composite(token: &str) -> Option<CompositeSplit> {
    let mut parts = token.split(SEGMENT_SEPARATOR);
    let head = parts.next()?;
    let t1 = parts.next()?;
    let mut tail: Vec<String> = parts.map(str::to_string).collect();

    let head = if is_head_discriminator(t1) {
        let mut compound = String::with_capacity(head.len() + 1 + t1.len());
        compound.push_str(head);
        compound.push(SEGMENT_SEPARATOR);
        compound.push_str(t1);
        compound
    } else {
        tail.push(t1.to_string());
        head.to_string()
    };

    Some(CompositeSplit { head, tail })
}
