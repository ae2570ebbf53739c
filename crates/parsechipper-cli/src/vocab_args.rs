use std::path::PathBuf;

use parsechipper::{NormalizationVersion, SubtokenVocab, SubtokenVocabOptions};

/// Vocabulary selection arg group.
#[derive(clap::Args, Debug)]
pub struct VocabArgs {
    /// Vocabulary file.
    ///
    /// Defaults to `$PARSECHIPPER_VOCAB`, then `parsing_vocab.txt` in the user data dir.
    #[arg(long, default_value = None)]
    vocab: Option<PathBuf>,

    /// Normalization version; "1" or "2".
    #[arg(long, default_value_t = NormalizationVersion::V1)]
    version: NormalizationVersion,
}

impl VocabArgs {
    /// Build the vocabulary options.
    pub fn options(&self) -> SubtokenVocabOptions {
        SubtokenVocabOptions::default()
            .with_path(self.vocab.clone())
            .with_version(self.version)
    }

    /// Load the vocabulary.
    pub fn load_vocab(&self) -> Result<SubtokenVocab, Box<dyn std::error::Error>> {
        Ok(self.options().load()?)
    }
}
