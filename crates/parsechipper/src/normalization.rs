//! # Word Normalization
//!
//! Vocabulary lines and lookup keys are normalized before use.
//! Two rule sets exist, selected by [`NormalizationVersion`]:
//!
//! * [`NormalizationVersion::V1`] - trim; then ``_lh_nt -> _lhnt``,
//!   ``_hvk -> _hk``, ``_hk_hk -> _hk``; in that order.
//! * [`NormalizationVersion::V2`] - trim; then ``_lhþt -> _lh_þt``.
//!
//! Replacements are literal, and apply to every occurrence.

use crate::errors::{PCResult, ParsechipperError};

/// Ordered literal replacements for [`NormalizationVersion::V1`].
pub const V1_REPLACEMENTS: &[(&str, &str)] = &[
    ("_lh_nt", "_lhnt"),
    ("_hvk", "_hk"),
    ("_hk_hk", "_hk"),
];

/// Ordered literal replacements for [`NormalizationVersion::V2`].
pub const V2_REPLACEMENTS: &[(&str, &str)] = &[("_lhþt", "_lh_þt")];

/// The normalization rule set applied to vocabulary words.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
pub enum NormalizationVersion {
    /// The original rule set.
    #[default]
    #[strum(serialize = "v1", to_string = "1")]
    V1,

    /// The `þt` split rule set.
    #[strum(serialize = "v2", to_string = "2")]
    V2,
}

impl TryFrom<u32> for NormalizationVersion {
    type Error = ParsechipperError;

    fn try_from(version: u32) -> PCResult<Self> {
        match version {
            1 => Ok(Self::V1),
            2 => Ok(Self::V2),
            _ => Err(ParsechipperError::UnsupportedVersion { version }),
        }
    }
}

impl From<NormalizationVersion> for u32 {
    fn from(version: NormalizationVersion) -> Self {
        match version {
            NormalizationVersion::V1 => 1,
            NormalizationVersion::V2 => 2,
        }
    }
}

/// Whether `c` is stripped from the ends of a word.
///
/// Unicode whitespace, plus the information separators U+001C to U+001F.
pub fn is_strip_char(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

impl NormalizationVersion {
    /// The ordered replacements of this rule set.
    pub fn replacements(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::V1 => V1_REPLACEMENTS,
            Self::V2 => V2_REPLACEMENTS,
        }
    }

    /// Normalize a single word.
    ///
    /// ## Arguments
    /// * `word` - the raw word; surrounding [`is_strip_char`] characters are ignored.
    ///
    /// ## Returns
    /// The trimmed word, with this version's replacements applied in order.
    pub fn preprocess_word(
        &self,
        word: &str,
    ) -> String {
        let word = word.trim_matches(is_strip_char);
        self.replacements()
            .iter()
            .fold(word.to_string(), |acc, &(from, to)| {
                if acc.contains(from) {
                    acc.replace(from, to)
                } else {
                    acc
                }
            })
    }
}
