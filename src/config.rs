//! Config model
//!
//! Settings are read once at command start from a TOML file and passed
//! explicitly into the components that need them. There are no defaults here:
//! a missing key is an error, and the only defaulting happens in the CLI layer
//! when it decides which config path to load.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::Error;

/// Process-wide settings for one command invocation
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Directory containing `*.question.md` documents
    pub questions_path: PathBuf,

    /// Where the rendered FAQ is written
    pub output_path: PathBuf,

    /// Directory containing the FAQ and suggest templates
    pub templates_path: PathBuf,

    /// Absolute URL of the published FAQ, used to build suggestion links
    pub faq_url: String,
}

impl Config {
    /// Load and validate the config file at `path`
    pub fn load(path: &Path) -> Result<Config, Error> {
        let text = fs::read_to_string(path).map_err(|source| Error::from_read(path, source))?;

        let config: Config = toml::from_str(&text).map_err(|err| Error::Config {
            path: path.to_path_buf(),
            reason: err.to_string(),
        })?;

        config.validate(path)?;
        Ok(config)
    }

    /// Reject empty values; serde already rejects missing keys and non-strings
    fn validate(&self, path: &Path) -> Result<(), Error> {
        let empty_field = [
            ("questions_path", self.questions_path.as_os_str().is_empty()),
            ("output_path", self.output_path.as_os_str().is_empty()),
            ("templates_path", self.templates_path.as_os_str().is_empty()),
            ("faq_url", self.faq_url.is_empty()),
        ]
        .into_iter()
        .find_map(|(name, is_empty)| is_empty.then_some(name));

        match empty_field {
            Some(name) => Err(Error::Config {
                path: path.to_path_buf(),
                reason: format!("{name} must not be empty"),
            }),
            None => Ok(()),
        }
    }
}
