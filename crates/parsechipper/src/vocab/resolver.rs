//! # Vocabulary Path Resolver
//!
//! Static configuration for locating the default parsing vocabulary.

use std::{
    env,
    path::{Path, PathBuf},
};

use directories_next::ProjectDirs;

/// Environment variable key to override the default vocabulary path.
pub const PARSECHIPPER_VOCAB: &str = "PARSECHIPPER_VOCAB";

/// The file name of the default vocabulary, within the data directory.
pub const DEFAULT_VOCAB_FILE_NAME: &str = "parsing_vocab.txt";

/// Default [`VocabPathResolver`] for parsechipper.
pub const DEFAULT_VOCAB_RESOLVER: VocabPathResolver = VocabPathResolver {
    qualifier: "is.mideind",
    organization: "",
    application: "parsechipper",
    vocab_env_vars: &[PARSECHIPPER_VOCAB],
    file_name: DEFAULT_VOCAB_FILE_NAME,
};

/// Static configuration for vocabulary path resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VocabPathResolver {
    /// The qualifier for [`ProjectDirs`].
    pub qualifier: &'static str,

    /// The organization for [`ProjectDirs`].
    pub organization: &'static str,

    /// The application for [`ProjectDirs`].
    pub application: &'static str,

    /// The resolution order for vocabulary path environment variables.
    pub vocab_env_vars: &'static [&'static str],

    /// The vocabulary file name within the data directory.
    pub file_name: &'static str,
}

impl Default for VocabPathResolver {
    fn default() -> Self {
        DEFAULT_VOCAB_RESOLVER
    }
}

impl VocabPathResolver {
    /// Get the [`ProjectDirs`] for this config.
    pub fn project_dirs(&self) -> Option<ProjectDirs> {
        ProjectDirs::from(self.qualifier, self.organization, self.application)
    }

    /// Resolve the vocabulary path for this config.
    ///
    /// Resolution Order:
    /// 1. `path`, if present.
    /// 2. ``env[$VAR]`` for each `self.vocab_env_vars`; in order.
    /// 3. `self.project_dirs().data_dir()` / `self.file_name`, if present.
    /// 4. `None`
    ///
    /// The resolved path is not checked for existence.
    pub fn resolve_vocab_path<P: AsRef<Path>>(
        &self,
        path: Option<P>,
    ) -> Option<PathBuf> {
        if let Some(path) = path.as_ref() {
            return Some(path.as_ref().to_path_buf());
        }

        for env_var in self.vocab_env_vars {
            if let Ok(path) = env::var(env_var) {
                log::debug!("vocabulary path from ${env_var}: {path}");
                return Some(PathBuf::from(path));
            }
        }

        if let Some(pds) = self.project_dirs() {
            return Some(pds.data_dir().join(self.file_name));
        }

        None
    }
}
