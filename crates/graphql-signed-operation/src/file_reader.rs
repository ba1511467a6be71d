use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

/// Reads a GraphQL document file from disk as UTF-8 text.
pub fn read_content(file_path: impl AsRef<Path>) -> Result<String, ReadContentError> {
    let file_path = file_path.as_ref();
    if !file_path.is_file() {
        return Err(ReadContentError::NotAFile(file_path.to_path_buf()));
    }

    let bytes = std::fs::read(file_path).map_err(|err| ReadContentError::Io {
        file_path: file_path.to_path_buf(),
        err,
    })?;

    String::from_utf8(bytes).map_err(|err| ReadContentError::InvalidUtf8 {
        file_path: file_path.to_path_buf(),
        err,
    })
}

#[derive(Debug, Error)]
pub enum ReadContentError {
    #[error("Document at {file_path:?} is not valid UTF-8: {err}")]
    InvalidUtf8 {
        file_path: PathBuf,
        err: std::string::FromUtf8Error,
    },

    #[error("Failed to read document at {file_path:?}: {err}")]
    Io {
        file_path: PathBuf,
        err: std::io::Error,
    },

    #[error("Document path is not a file: {0:?}")]
    NotAFile(PathBuf),
}
