use crate::ast;
use crate::ConfigError;
use crate::OperationSigner;
use crate::SignError;
use crate::SignatureMap;
use crate::SigningConfig;
use thiserror::Error;

type Result<T> = std::result::Result<T, VerificationError>;

/// Request-time counterpart of [`generate`](crate::generate).
///
/// A received operation text is parsed, printed canonically and digested
/// with the same secret and algorithm that produced the signature map. The
/// digest comparison is constant-time.
#[derive(Debug)]
pub struct OperationVerifier {
    signatures: SignatureMap,
    signer: OperationSigner,
}

impl OperationVerifier {
    pub fn new(
        signatures: SignatureMap,
        config: &SigningConfig,
    ) -> std::result::Result<Self, ConfigError> {
        Ok(Self {
            signatures,
            signer: config.signer()?,
        })
    }

    pub fn signatures(&self) -> &SignatureMap {
        &self.signatures
    }

    /// Accepts `query_text` only if it digests to the value recorded for
    /// `operation_name`.
    pub fn verify(&self, operation_name: &str, query_text: &str) -> Result<()> {
        let recorded = self.signatures
            .get(operation_name)
            .ok_or_else(|| VerificationError::UnknownOperation(operation_name.to_string()))?;
        self.verify_presented_hash(query_text, recorded)
    }

    /// Accepts `query_text` only if it digests to `presented_hash` (e.g. the
    /// value of a request header), without consulting the signature map.
    pub fn verify_presented_hash(
        &self,
        query_text: &str,
        presented_hash: &str,
    ) -> Result<()> {
        let expected = hex::decode(presented_hash.trim())
            .map_err(|_| VerificationError::MalformedHash)?;
        let document = ast::parse_executable(query_text)
            .map_err(|err| VerificationError::Parse(err.to_string()))?;

        if self.signer.verify_document(&document, &expected)? {
            Ok(())
        } else {
            Err(VerificationError::Mismatch)
        }
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum VerificationError {
    #[error("The presented operation hash is not valid hex")]
    MalformedHash,

    #[error("The operation does not match its signature")]
    Mismatch,

    #[error("Failed to parse the received operation: {0}")]
    Parse(String),

    #[error(transparent)]
    Sign(#[from] SignError),

    #[error("No signature is recorded for operation `{0}`")]
    UnknownOperation(String),
}
