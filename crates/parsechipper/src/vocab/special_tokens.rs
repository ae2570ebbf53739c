//! # Special Tokens and Markers

use crate::types::TokenSet;

/// The out-of-vocabulary marker stored at the OOV id.
pub const UNK_TOKEN: &str = "<UNK>";

/// Separator between the segments of a composite token.
pub const SEGMENT_SEPARATOR: char = '_';

/// Marker of right-context nonterminals.
pub const RIGHT_MARKER: char = '/';

/// Second segments which are absorbed into the head of a composite token.
pub const HEAD_DISCRIMINATORS: &[&str] = &["0", "1", "2", "subj"];

/// Nonterminals known to be absent from the parsing vocabulary.
///
/// Not consulted while compiling a vocabulary.
/// See [`missing_nonterminals`] for the full set with right-marked forms.
pub const MISSING_NONTERMINALS: &[&str] = &["NP-AGE", "ADVP-DUR"];

/// Is `segment` one of the [`HEAD_DISCRIMINATORS`]?
pub fn is_head_discriminator(segment: &str) -> bool {
    HEAD_DISCRIMINATORS.contains(&segment)
}

/// Prefix a nonterminal with the [`RIGHT_MARKER`].
pub fn right_marked(token: &str) -> String {
    let mut marked = String::with_capacity(token.len() + 1);
    marked.push(RIGHT_MARKER);
    marked.push_str(token);
    marked
}

/// Prefix a tail fragment with the [`SEGMENT_SEPARATOR`].
pub fn tail_marked(token: &str) -> String {
    let mut marked = String::with_capacity(token.len() + 1);
    marked.push(SEGMENT_SEPARATOR);
    marked.push_str(token);
    marked
}

/// The [`MISSING_NONTERMINALS`], together with their right-marked forms.
pub fn missing_nonterminals() -> TokenSet {
    MISSING_NONTERMINALS
        .iter()
        .flat_map(|t| [t.to_string(), right_marked(t)])
        .collect()
}
