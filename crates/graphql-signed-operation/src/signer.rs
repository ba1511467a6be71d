use crate::ast;
use crate::canonical_printer;
use crate::SigningAlgorithm;
use hmac::digest::KeyInit;
use hmac::Hmac;
use hmac::Mac;
use thiserror::Error;

type Result<T> = std::result::Result<T, SignError>;

/// Computes the keyed digest of an operation and the fragments it requires.
///
/// The digest is an HMAC over the canonical print of the assembled
/// document, so it does not depend on formatting, on the order fragments
/// were supplied in, or on the files they came from.
#[derive(Clone)]
pub struct OperationSigner {
    algorithm: SigningAlgorithm,
    secret: Vec<u8>,
}

impl OperationSigner {
    pub fn new(secret: impl AsRef<[u8]>, algorithm: SigningAlgorithm) -> Self {
        Self {
            algorithm,
            secret: secret.as_ref().to_vec(),
        }
    }

    pub fn algorithm(&self) -> SigningAlgorithm {
        self.algorithm
    }

    /// Signs `operation` together with `fragments` and returns the lowercase
    /// hex digest.
    pub fn sign(
        &self,
        operation: &ast::OperationDefinition,
        fragments: &[&ast::FragmentDefinition],
    ) -> Result<String> {
        let document = canonical_printer::assemble_document(operation, fragments)
            .map_err(|err| SignError::Reparse {
                operation_name: ast::operation_name(operation)
                    .unwrap_or("<anonymous>")
                    .to_string(),
                message: err.to_string(),
            })?;
        let canonical = canonical_printer::print_canonical(&document);
        self.digest_hex(canonical.as_bytes())
    }

    /// Signs an already self-contained document.
    ///
    /// The document goes through the same print and re-parse step as
    /// [`sign`](Self::sign), so both produce the same digest for the same
    /// definitions.
    pub fn sign_document(&self, document: &ast::Document) -> Result<String> {
        let canonical = canonical_text(document)?;
        self.digest_hex(canonical.as_bytes())
    }

    /// Lowercase hex HMAC of raw bytes. No canonicalization happens here.
    pub(crate) fn digest_hex(&self, text: &[u8]) -> Result<String> {
        Ok(hex::encode(self.digest(text)?))
    }

    /// Checks `expected` against the digest of `document` in constant time.
    pub fn verify_document(
        &self,
        document: &ast::Document,
        expected: &[u8],
    ) -> Result<bool> {
        let canonical = canonical_text(document)?;
        let text = canonical.as_bytes();
        match self.algorithm {
            SigningAlgorithm::Md5 => verify::<Hmac<md5::Md5>>(&self.secret, text, expected),
            SigningAlgorithm::Sha1 => verify::<Hmac<sha1::Sha1>>(&self.secret, text, expected),
            SigningAlgorithm::Sha224 => verify::<Hmac<sha2::Sha224>>(&self.secret, text, expected),
            SigningAlgorithm::Sha256 => verify::<Hmac<sha2::Sha256>>(&self.secret, text, expected),
            SigningAlgorithm::Sha384 => verify::<Hmac<sha2::Sha384>>(&self.secret, text, expected),
            SigningAlgorithm::Sha512 => verify::<Hmac<sha2::Sha512>>(&self.secret, text, expected),
        }
    }

    fn digest(&self, text: &[u8]) -> Result<Vec<u8>> {
        match self.algorithm {
            SigningAlgorithm::Md5 => keyed_digest::<Hmac<md5::Md5>>(&self.secret, text),
            SigningAlgorithm::Sha1 => keyed_digest::<Hmac<sha1::Sha1>>(&self.secret, text),
            SigningAlgorithm::Sha224 => keyed_digest::<Hmac<sha2::Sha224>>(&self.secret, text),
            SigningAlgorithm::Sha256 => keyed_digest::<Hmac<sha2::Sha256>>(&self.secret, text),
            SigningAlgorithm::Sha384 => keyed_digest::<Hmac<sha2::Sha384>>(&self.secret, text),
            SigningAlgorithm::Sha512 => keyed_digest::<Hmac<sha2::Sha512>>(&self.secret, text),
        }
    }
}

impl std::fmt::Debug for OperationSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OperationSigner")
            .field("algorithm", &self.algorithm)
            .field("secret", &"<redacted>")
            .finish()
    }
}

fn canonical_text(document: &ast::Document) -> Result<String> {
    let reparsed = canonical_printer::reparse(document)
        .map_err(|err| SignError::Reparse {
            operation_name: document.definitions
                .iter()
                .find_map(|def| match def {
                    ast::Definition::Operation(op_def) => ast::operation_name(op_def),
                    ast::Definition::Fragment(_) => None,
                })
                .unwrap_or("<anonymous>")
                .to_string(),
            message: err.to_string(),
        })?;
    Ok(canonical_printer::print_canonical(&reparsed))
}

fn keyed_digest<M: Mac + KeyInit>(secret: &[u8], text: &[u8]) -> Result<Vec<u8>> {
    let mut mac = <M as KeyInit>::new_from_slice(secret)
        .map_err(|_| SignError::InvalidKey)?;
    mac.update(text);
    Ok(mac.finalize().into_bytes().to_vec())
}

fn verify<M: Mac + KeyInit>(secret: &[u8], text: &[u8], expected: &[u8]) -> Result<bool> {
    let mut mac = <M as KeyInit>::new_from_slice(secret)
        .map_err(|_| SignError::InvalidKey)?;
    mac.update(text);
    Ok(mac.verify_slice(expected).is_ok())
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum SignError {
    #[error("The signing secret cannot be used as an HMAC key")]
    InvalidKey,

    #[error(
        "The assembled document for operation `{operation_name}` could not \
        be parsed again: {message}"
    )]
    Reparse {
        operation_name: String,
        message: String,
    },
}
