use crate::file_reader;
use crate::OperationSigner;
use crate::SigningAlgorithm;
use crate::UnsupportedAlgorithm;
use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

/// Configuration for one signing run.
///
/// The secret must only be available at build time (and to the server that
/// verifies requests); it is never logged nor written into the generated
/// artifact.
#[derive(Clone, Default, serde::Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SigningConfig {
    /// Key used for the HMAC. Required and non-empty.
    #[serde(default)]
    pub secret: String,

    /// Name of the hash function for the HMAC. Defaults to `sha256`.
    #[serde(default)]
    pub algorithm: Option<String>,
}

impl SigningConfig {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            algorithm: None,
        }
    }

    pub fn with_algorithm(mut self, algorithm: impl Into<String>) -> Self {
        self.algorithm = Some(algorithm.into());
        self
    }

    pub fn from_file(file_path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let file_path = file_path.as_ref();
        let content = file_reader::read_content(file_path)
            .map_err(|err| ConfigError::Read(Box::new(err)))?;
        Self::from_json_str(content.as_str())
    }

    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(content)
            .map_err(|err| ConfigError::Deserialize(err.to_string()))
    }

    pub fn signing_algorithm(&self) -> Result<SigningAlgorithm, ConfigError> {
        match self.algorithm.as_deref() {
            None => Ok(SigningAlgorithm::default()),
            Some(name) => Ok(name.parse()?),
        }
    }

    /// Checks that a secret is present and the algorithm is supported.
    pub fn check(&self) -> Result<(), ConfigError> {
        if self.secret.is_empty() {
            return Err(ConfigError::MissingSecret);
        }
        self.signing_algorithm()?;
        Ok(())
    }

    pub fn signer(&self) -> Result<OperationSigner, ConfigError> {
        self.check()?;
        Ok(OperationSigner::new(self.secret.as_bytes(), self.signing_algorithm()?))
    }
}

impl std::fmt::Debug for SigningConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SigningConfig")
            .field("secret", &"<redacted>")
            .field("algorithm", &self.algorithm)
            .finish()
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to deserialize signing configuration: {0}")]
    Deserialize(String),

    #[error(
        "The signature map must be written to a file with a `.json` \
        extension, got {path:?}"
    )]
    InvalidOutputExtension {
        path: PathBuf,
    },

    #[error("A signing secret is required but none (or an empty one) was configured")]
    MissingSecret,

    #[error("Failed to read signing configuration: {0}")]
    Read(Box<file_reader::ReadContentError>),

    #[error(transparent)]
    UnsupportedAlgorithm(#[from] UnsupportedAlgorithm),
}
