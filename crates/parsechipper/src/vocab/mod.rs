//! # Vocabulary
//!
//! This module provides the subtoken vocabulary compiler and related io mechanisms.
//!
//! ## Compilation
//!
//! Raw vocabulary lines are normalized (see [`crate::normalization`]),
//! then classified by [`VocabCategories`]:
//! * tokens without ``_`` are *full* tokens;
//! * tokens with ``_`` are split into *head* and *tail* fragments,
//!   see [`composite`];
//! * upper-case tokens are *nonterminals*; right-marked by a leading ``/``, or not.
//!
//! ## Ids
//!
//! [`SubtokenVocab`] assigns contiguous id ranges to the sorted full, head,
//! and tail sets; in that order, followed by the OOV id.
pub mod composite;
pub mod io;
pub mod resolver;
pub mod special_tokens;
pub mod subtoken_vocab;
pub mod token_category;
pub mod vocab_categories;
pub mod vocab_options;

#[doc(inline)]
pub use resolver::{DEFAULT_VOCAB_RESOLVER, VocabPathResolver};
#[doc(inline)]
pub use special_tokens::UNK_TOKEN;
#[doc(inline)]
pub use subtoken_vocab::SubtokenVocab;
#[doc(inline)]
pub use token_category::{IdSegment, TokenCategory};
#[doc(inline)]
pub use vocab_categories::VocabCategories;
#[doc(inline)]
pub use vocab_options::SubtokenVocabOptions;
