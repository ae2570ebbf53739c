//! Subtoken Vocabulary Options
//!
//! Construction parameters for a [`SubtokenVocab`].

use std::path::{Path, PathBuf};

use crate::{
    errors::{PCResult, ParsechipperError},
    normalization::NormalizationVersion,
    types::TokenType,
    vocab::{SubtokenVocab, resolver::VocabPathResolver},
};

/// Options for loading a [`SubtokenVocab`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SubtokenVocabOptions {
    /// The vocabulary path.
    ///
    /// When `None`, the path is resolved by `resolver`.
    pub path: Option<PathBuf>,

    /// The normalization rule set.
    pub version: NormalizationVersion,

    /// Resolution of the default vocabulary path.
    pub resolver: VocabPathResolver,
}

impl SubtokenVocabOptions {
    /// Gets the configured path.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Sets the configured path.
    pub fn set_path<P: Into<PathBuf>>(
        &mut self,
        path: Option<P>,
    ) {
        self.path = path.map(Into::into);
    }

    /// Sets the configured path.
    pub fn with_path<P: Into<PathBuf>>(
        mut self,
        path: Option<P>,
    ) -> Self {
        self.set_path(path);
        self
    }

    /// Gets the configured normalization version.
    pub fn version(&self) -> NormalizationVersion {
        self.version
    }

    /// Sets the configured normalization version.
    pub fn set_version(
        &mut self,
        version: NormalizationVersion,
    ) {
        self.version = version;
    }

    /// Sets the configured normalization version.
    pub fn with_version(
        mut self,
        version: NormalizationVersion,
    ) -> Self {
        self.set_version(version);
        self
    }

    /// Sets the default path resolver.
    pub fn with_resolver(
        mut self,
        resolver: VocabPathResolver,
    ) -> Self {
        self.resolver = resolver;
        self
    }

    /// Resolve the vocabulary path.
    ///
    /// ## Returns
    /// [`ParsechipperError::NoDefaultVocab`] if no path is configured,
    /// and the resolver finds none.
    pub fn resolve_path(&self) -> PCResult<PathBuf> {
        self.resolver
            .resolve_vocab_path(self.path.as_ref())
            .ok_or(ParsechipperError::NoDefaultVocab)
    }

    /// Load a [`SubtokenVocab`] with these options.
    pub fn load<T: TokenType>(&self) -> PCResult<SubtokenVocab<T>> {
        let path = self.resolve_path()?;
        log::info!("vocabulary: {} (v{})", path.display(), self.version);

        SubtokenVocab::from_path(self.version, path)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::vocab::token_category::IdSegment;

    const MISSING_RESOLVER: VocabPathResolver = VocabPathResolver {
        qualifier: "io",
        organization: "crates",
        application: "example",
        vocab_env_vars: &[],
        file_name: "parsechipper-test-does-not-exist.txt",
    };

    #[test]
    fn test_builders() {
        let options = SubtokenVocabOptions::default();
        assert_eq!(options.path(), None);
        assert_eq!(options.version(), NormalizationVersion::V1);

        let options = options
            .with_path(Some("/tmp/vocab.txt"))
            .with_version(NormalizationVersion::V2);
        assert_eq!(options.path(), Some(Path::new("/tmp/vocab.txt")));
        assert_eq!(options.version(), NormalizationVersion::V2);
        assert_eq!(options.resolve_path().unwrap(), PathBuf::from("/tmp/vocab.txt"));

        let options = options.with_path(None::<PathBuf>);
        assert_eq!(options.path(), None);
    }

    #[test]
    fn test_load() {
        let dir = tempdir::TempDir::new("vocab_options").unwrap();
        let path = dir.path().join("vocab.txt");
        {
            let mut f = std::fs::File::create(&path).unwrap();
            writeln!(f, "NP").unwrap();
            writeln!(f, "VP_lhþt").unwrap();
        }

        let vocab: SubtokenVocab = SubtokenVocabOptions::default()
            .with_path(Some(&path))
            .with_version(NormalizationVersion::V2)
            .load()
            .unwrap();

        assert_eq!(vocab.version(), NormalizationVersion::V2);
        assert_eq!(vocab.id_table(), &["NP", "VP", "_lh", "_þt", "<UNK>"]);
        assert_eq!(vocab.token_id(IdSegment::Tail, "lh"), Some(2));
    }

    #[test]
    fn test_load_missing_default() {
        let options = SubtokenVocabOptions::default().with_resolver(MISSING_RESOLVER);

        // Resolves into the data dir, but nothing is there.
        match options.load::<u32>() {
            Err(ParsechipperError::VocabRead { path, .. }) => {
                assert!(path.ends_with("parsechipper-test-does-not-exist.txt"));
            }
            Err(ParsechipperError::NoDefaultVocab) => {}
            other => panic!("unexpected: {other:?}"),
        }
    }
}
