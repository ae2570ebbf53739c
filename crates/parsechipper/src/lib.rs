//! # `parsechipper` Parse-Tree Subtoken Vocabulary
//!
//! This crate compiles the fixed vocabulary used for subword encoding of
//! flattened parse trees.
//!
//! A vocabulary source lists grammar tokens, one per line: terminals,
//! nonterminals, and ``_``-joined composite tokens. Compilation:
//! 1. normalizes each line, see [`normalization`];
//! 2. classifies the tokens, see [`vocab::VocabCategories`];
//! 3. assigns sorted, contiguous id ranges, see [`vocab::SubtokenVocab`].
//!
//! ## Crate Features
//!
//! #### feature: ``ahash``
//!
//! This swaps all hash map and hash set implementations for ``ahash``.
//!
//! This is done by the ``types::PCHash{*}`` type alias machinery.
//!
//! ## Loading a Vocabulary
//!
//! ```rust,no_run
//! use parsechipper::{
//!     NormalizationVersion,
//!     vocab::{IdSegment, SubtokenVocab, SubtokenVocabOptions},
//! };
//!
//! fn example() -> parsechipper::PCResult<()> {
//!     let vocab: SubtokenVocab = SubtokenVocabOptions::default()
//!         .with_path(Some("parsing_vocab.txt"))
//!         .with_version(NormalizationVersion::V2)
//!         .load()?;
//!
//!     let word = vocab.preprocess_word("VP_lhþt");
//!     let id = vocab.token_id_or_oov(IdSegment::Full, &word);
//!     assert!(id <= vocab.oov_id());
//!     assert_eq!(vocab.token_str(vocab.oov_id()), Some("<UNK>"));
//!     Ok(())
//! }
//! ```
#![warn(missing_docs, unused)]

pub mod errors;
pub mod normalization;
pub mod types;
pub mod vocab;

#[doc(inline)]
pub use errors::{PCResult, ParsechipperError};
#[doc(inline)]
pub use normalization::NormalizationVersion;
#[doc(inline)]
pub use types::TokenType;
#[doc(inline)]
pub use vocab::{SubtokenVocab, SubtokenVocabOptions};
