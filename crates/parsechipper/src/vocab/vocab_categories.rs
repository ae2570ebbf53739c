//! # Vocabulary Categories
//!
//! Classification of normalized tokens into structural categories.

use crate::{
    types::{TokenRenameMap, TokenSet},
    vocab::{
        composite::{is_composite, split_composite},
        special_tokens::{RIGHT_MARKER, right_marked},
        token_category::TokenCategory,
    },
};

/// Is `token` a nonterminal?
///
/// Nonterminals are tokens equal to their own upper-case form.
pub fn is_nonterminal(token: &str) -> bool {
    token.to_uppercase() == token
}

/// The category sets of a vocabulary.
///
/// `full`, `head` and `tail` are the id-assigning partitions;
/// the nonterminal sets and `terminals` are derived views.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VocabCategories {
    /// Tokens without a segment separator.
    pub full: TokenSet,

    /// Head fragments of composite tokens.
    pub head: TokenSet,

    /// Tail fragments of composite tokens.
    pub tail: TokenSet,

    /// All upper-case tokens.
    pub nonterminals: TokenSet,

    /// Nonterminals without a right marker.
    pub nonterm_left: TokenSet,

    /// Nonterminals with a right marker.
    pub nonterm_right: TokenSet,

    /// `(head | full | tail) - nonterminals`.
    pub terminals: TokenSet,

    /// ``{ "/" + t -> t }`` for each `t` in `nonterm_left`.
    pub r_to_l: TokenRenameMap,
}

impl VocabCategories {
    /// Classify a collection of normalized tokens.
    ///
    /// ## Arguments
    /// * `tokens` - normalized tokens; duplicates are permitted.
    pub fn classify<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut cats = Self::default();
        let mut composites = TokenSet::default();

        for token in tokens {
            let token = token.as_ref();
            if token.is_empty() {
                log::debug!("empty vocabulary token");
            }

            if is_composite(token) {
                composites.insert(token.to_string());
            } else {
                cats.full.insert(token.to_string());
            }

            if is_nonterminal(token) {
                cats.nonterminals.insert(token.to_string());
            }
        }

        for token in &composites {
            let Some(split) = split_composite(token) else {
                continue;
            };
            if split.head.is_empty() || split.tail.iter().any(String::is_empty) {
                log::debug!("degenerate composite token: {token:?}");
            }

            cats.tail.extend(split.tail);
            cats.head.insert(split.head);
        }

        for token in &cats.nonterminals {
            if token.contains(RIGHT_MARKER) {
                cats.nonterm_right.insert(token.clone());
            } else {
                cats.nonterm_left.insert(token.clone());
            }
        }

        cats.terminals = cats
            .head
            .iter()
            .chain(cats.full.iter())
            .chain(cats.tail.iter())
            .filter(|t| !cats.nonterminals.contains(*t))
            .cloned()
            .collect();

        cats.r_to_l = cats
            .nonterm_left
            .iter()
            .map(|t| (right_marked(t), t.clone()))
            .collect();

        cats
    }

    /// Get the token set of a category.
    pub fn category(
        &self,
        category: TokenCategory,
    ) -> &TokenSet {
        match category {
            TokenCategory::Full => &self.full,
            TokenCategory::Head => &self.head,
            TokenCategory::Tail => &self.tail,
            TokenCategory::NontermLeft => &self.nonterm_left,
            TokenCategory::NontermRight => &self.nonterm_right,
        }
    }
}
