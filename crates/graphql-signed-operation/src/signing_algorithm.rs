use std::str::FromStr;
use thiserror::Error;

/// Hash function underlying the HMAC used to sign operations.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum SigningAlgorithm {
    Md5,
    Sha1,
    Sha224,
    #[default]
    Sha256,
    Sha384,
    Sha512,
}

impl SigningAlgorithm {
    pub const ALL: [SigningAlgorithm; 6] = [
        Self::Md5,
        Self::Sha1,
        Self::Sha224,
        Self::Sha256,
        Self::Sha384,
        Self::Sha512,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Md5 => "md5",
            Self::Sha1 => "sha1",
            Self::Sha224 => "sha224",
            Self::Sha256 => "sha256",
            Self::Sha384 => "sha384",
            Self::Sha512 => "sha512",
        }
    }
}

impl std::fmt::Display for SigningAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SigningAlgorithm {
    type Err = UnsupportedAlgorithm;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let normalized = name.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|algo| algo.as_str() == normalized)
            .ok_or_else(|| UnsupportedAlgorithm(name.to_string()))
    }
}

#[derive(Clone, Debug, Error, Eq, PartialEq)]
#[error(
    "Unsupported signing algorithm `{0}` (expected one of: md5, sha1, \
    sha224, sha256, sha384, sha512)"
)]
pub struct UnsupportedAlgorithm(pub String);
