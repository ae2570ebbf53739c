//! # Subtoken Vocabulary
//!
//! [`SubtokenVocab`] is the compiled, immutable vocabulary.
//!
//! Ids are assigned in three contiguous ranges:
//! * `[0, n_full)` - full tokens, sorted;
//! * `[n_full, n_full + n_head)` - head fragments, sorted;
//! * `[n_full + n_head, oov_id)` - tail fragments, sorted.
//!
//! The OOV id is `n_full + n_head + n_tail`.

use core::ops::Range;
use std::{io::BufRead, path::Path};

use crate::{
    errors::PCResult,
    normalization::NormalizationVersion,
    types::{TokenIdMap, TokenRenameMap, TokenSet, TokenType, token_from_index, token_to_index},
    vocab::{
        io::{load_vocab_lines_path, read_vocab_lines},
        special_tokens::{UNK_TOKEN, tail_marked},
        token_category::{IdSegment, TokenCategory},
        vocab_categories::VocabCategories,
    },
};

/// Sort a token set into id order.
fn sorted_tokens(tokens: &TokenSet) -> Vec<String> {
    let mut tokens: Vec<String> = tokens.iter().cloned().collect();
    tokens.sort_unstable();
    tokens
}

/// Build the `{ token -> id }` map for a sorted segment starting at `offset`.
fn segment_id_map<T: TokenType>(
    tokens: &[String],
    offset: usize,
) -> PCResult<TokenIdMap<T>> {
    tokens
        .iter()
        .enumerate()
        .map(|(idx, tok)| -> PCResult<(String, T)> {
            Ok((tok.clone(), token_from_index(offset + idx)?))
        })
        .collect()
}

/// A compiled subtoken vocabulary for flattened parse trees.
///
/// Built once, and read-only thereafter.
#[derive(Debug, Clone, PartialEq)]
pub struct SubtokenVocab<T: TokenType = u32> {
    version: NormalizationVersion,

    categories: VocabCategories,

    full_tokens: Vec<String>,
    head_tokens: Vec<String>,
    tail_tokens: Vec<String>,

    full_ids: TokenIdMap<T>,
    head_ids: TokenIdMap<T>,
    tail_ids: TokenIdMap<T>,

    id_table: Vec<String>,

    oov_id: T,
}

impl<T: TokenType> SubtokenVocab<T> {
    /// Compile a vocabulary from raw token lines.
    ///
    /// ## Arguments
    /// * `version` - the normalization rule set.
    /// * `lines` - raw vocabulary lines; each is normalized before use.
    ///
    /// ## Returns
    /// [`crate::ParsechipperError::VocabSizeOverflow`] if the OOV id does not fit `T`.
    pub fn from_lines<I, S>(
        version: NormalizationVersion,
        lines: I,
    ) -> PCResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tokens = lines
            .into_iter()
            .map(|line| version.preprocess_word(line.as_ref()));

        Self::from_categories(version, VocabCategories::classify(tokens))
    }

    /// Compile a vocabulary from a [`BufRead`] stream of token lines.
    pub fn from_reader<R: BufRead>(
        version: NormalizationVersion,
        reader: R,
    ) -> PCResult<Self> {
        Self::from_lines(version, read_vocab_lines(reader)?)
    }

    /// Compile a vocabulary from a token file.
    ///
    /// ## Returns
    /// [`crate::ParsechipperError::VocabRead`] if the file can't be opened or read.
    pub fn from_path<P: AsRef<Path>>(
        version: NormalizationVersion,
        path: P,
    ) -> PCResult<Self> {
        let path = path.as_ref();
        log::debug!("loading parsing vocabulary: {}", path.display());

        Self::from_lines(version, load_vocab_lines_path(path)?)
    }

    /// Assign ids to classified categories.
    ///
    /// ## Arguments
    /// * `version` - the normalization rule set the tokens were normalized with.
    /// * `categories` - the classified, normalized tokens.
    pub(crate) fn from_categories(
        version: NormalizationVersion,
        categories: VocabCategories,
    ) -> PCResult<Self> {
        let full_tokens = sorted_tokens(&categories.full);
        let head_tokens = sorted_tokens(&categories.head);
        let tail_tokens = sorted_tokens(&categories.tail);

        let n_full = full_tokens.len();
        let n_head = head_tokens.len();
        let n_tail = tail_tokens.len();
        let n_ids = n_full + n_head + n_tail;

        let oov_id = token_from_index(n_ids)?;

        let full_ids = segment_id_map(&full_tokens, 0)?;
        let head_ids = segment_id_map(&head_tokens, n_full)?;
        let tail_ids = segment_id_map(&tail_tokens, n_full + n_head)?;

        let mut id_table = Vec::with_capacity(n_ids + 1);
        id_table.extend(full_tokens.iter().cloned());
        id_table.extend(head_tokens.iter().cloned());
        id_table.extend(tail_tokens.iter().map(|t| tail_marked(t)));
        id_table.push(UNK_TOKEN.to_string());

        log::info!(
            "compiled parsing vocabulary (v{version}): {n_full} full, {n_head} head, {n_tail} tail, {} nonterminals; oov_id={oov_id}",
            categories.nonterminals.len(),
        );

        Ok(Self {
            version,
            categories,
            full_tokens,
            head_tokens,
            tail_tokens,
            full_ids,
            head_ids,
            tail_ids,
            id_table,
            oov_id,
        })
    }

    /// Convert to a different token type.
    pub fn to_token_type<G: TokenType>(&self) -> PCResult<SubtokenVocab<G>> {
        SubtokenVocab::<G>::from_categories(self.version, self.categories.clone())
    }

    /// The normalization rule set of this vocabulary.
    pub fn version(&self) -> NormalizationVersion {
        self.version
    }

    /// Normalize a word with this vocabulary's rule set.
    pub fn preprocess_word(
        &self,
        word: &str,
    ) -> String {
        self.version.preprocess_word(word)
    }

    /// The classified category sets.
    pub fn categories(&self) -> &VocabCategories {
        &self.categories
    }

    /// All nonterminals.
    pub fn nonterminals(&self) -> &TokenSet {
        &self.categories.nonterminals
    }

    /// Nonterminals without a right marker.
    pub fn nonterm_left(&self) -> &TokenSet {
        &self.categories.nonterm_left
    }

    /// Nonterminals with a right marker.
    pub fn nonterm_right(&self) -> &TokenSet {
        &self.categories.nonterm_right
    }

    /// Head, full and tail tokens which are not nonterminals.
    pub fn terminals(&self) -> &TokenSet {
        &self.categories.terminals
    }

    /// The token set of a category.
    pub fn category_tokens(
        &self,
        category: TokenCategory,
    ) -> &TokenSet {
        self.categories.category(category)
    }

    /// The ``{ "/" + t -> t }`` map over left nonterminals.
    pub fn r_to_l(&self) -> &TokenRenameMap {
        &self.categories.r_to_l
    }

    /// The left nonterminal for a right-marked spelling, if any.
    pub fn left_of(
        &self,
        right: &str,
    ) -> Option<&str> {
        self.categories.r_to_l.get(right).map(String::as_str)
    }

    /// The sorted full tokens, in id order.
    pub fn full_tokens(&self) -> &[String] {
        &self.full_tokens
    }

    /// The sorted head fragments, in id order.
    pub fn head_tokens(&self) -> &[String] {
        &self.head_tokens
    }

    /// The sorted tail fragments (unmarked), in id order.
    pub fn tail_tokens(&self) -> &[String] {
        &self.tail_tokens
    }

    /// The sorted tokens of a segment, in id order.
    pub fn segment_tokens(
        &self,
        segment: IdSegment,
    ) -> &[String] {
        match segment {
            IdSegment::Full => &self.full_tokens,
            IdSegment::Head => &self.head_tokens,
            IdSegment::Tail => &self.tail_tokens,
        }
    }

    /// The ``{ token -> id }`` map of a segment.
    pub fn token_map(
        &self,
        segment: IdSegment,
    ) -> &TokenIdMap<T> {
        match segment {
            IdSegment::Full => &self.full_ids,
            IdSegment::Head => &self.head_ids,
            IdSegment::Tail => &self.tail_ids,
        }
    }

    /// Look up the id of a token within a segment.
    ///
    /// Tail tokens are looked up without their ``_`` marker.
    pub fn token_id(
        &self,
        segment: IdSegment,
        token: &str,
    ) -> Option<T> {
        self.token_map(segment).get(token).copied()
    }

    /// Look up the id of a token within a segment; or the OOV id.
    pub fn token_id_or_oov(
        &self,
        segment: IdSegment,
        token: &str,
    ) -> T {
        self.token_id(segment, token).unwrap_or(self.oov_id)
    }

    /// Look up the spelling of an id.
    ///
    /// Tail fragments are spelled with a leading ``_``;
    /// the OOV id is spelled [`UNK_TOKEN`].
    pub fn token_str(
        &self,
        token: T,
    ) -> Option<&str> {
        self.id_table
            .get(token_to_index(token)?)
            .map(String::as_str)
    }

    /// The spelling table, indexed by id; the last entry is [`UNK_TOKEN`].
    pub fn id_table(&self) -> &[String] {
        &self.id_table
    }

    /// The id range of a segment.
    pub fn segment_range(
        &self,
        segment: IdSegment,
    ) -> Range<usize> {
        let n_full = self.full_tokens.len();
        let n_head = self.head_tokens.len();
        match segment {
            IdSegment::Full => 0..n_full,
            IdSegment::Head => n_full..n_full + n_head,
            IdSegment::Tail => n_full + n_head..self.len(),
        }
    }

    /// The segment of an id; `None` for the OOV id and beyond.
    pub fn segment_of(
        &self,
        token: T,
    ) -> Option<IdSegment> {
        let idx = token_to_index(token)?;
        [IdSegment::Full, IdSegment::Head, IdSegment::Tail]
            .into_iter()
            .find(|&segment| self.segment_range(segment).contains(&idx))
    }

    /// The out-of-vocabulary id.
    pub fn oov_id(&self) -> T {
        self.oov_id
    }

    /// The number of real (non-OOV) ids.
    pub fn len(&self) -> usize {
        self.id_table.len() - 1
    }

    /// Is the vocabulary empty of real ids?
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
