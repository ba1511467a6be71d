use crate::ast;
use crate::file_reader;
use crate::SourceDocument;
use std::path::Path;
use thiserror::Error;

type Result<T> = std::result::Result<T, DocumentLoadError>;

/// Utility for collecting the [`SourceDocument`]s of one signing run.
///
/// Documents keep the order in which they were loaded; that order is the
/// order of the fragment pool and of the generated signature map.
///
/// Documents loaded from a string without an explicit origin are labelled
/// `str://0`, `str://1`, ... in load order.
#[derive(Debug, Default)]
pub struct DocumentSetBuilder {
    documents: Vec<SourceDocument>,
    str_load_counter: u16,
}

impl DocumentSetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn build(self) -> Vec<SourceDocument> {
        self.documents
    }

    pub fn load_ast(
        mut self,
        origin: impl Into<String>,
        document: ast::Document,
    ) -> Self {
        self.documents.push(SourceDocument::new(origin, document));
        self
    }

    pub fn load_file(self, file_path: impl AsRef<Path>) -> Result<Self> {
        let file_path = file_path.as_ref();
        let content = file_reader::read_content(file_path)?;
        self.load_str(Some(file_path.display().to_string()), content.as_str())
    }

    pub fn load_files<P: AsRef<Path>>(
        mut self,
        file_paths: impl IntoIterator<Item = P>,
    ) -> Result<Self> {
        for file_path in file_paths {
            self = self.load_file(file_path)?;
        }
        Ok(self)
    }

    pub fn load_str(
        mut self,
        origin: Option<String>,
        content: &str,
    ) -> Result<Self> {
        let origin = origin.unwrap_or_else(|| {
            let str_id = self.str_load_counter;
            self.str_load_counter += 1;
            format!("str://{str_id}")
        });

        let document = ast::parse_executable(content)
            .map_err(|err| DocumentLoadError::Parse {
                origin: origin.to_owned(),
                err: err.to_string(),
            })?;

        log::trace!(
            "Loaded {} definitions from `{origin}`.",
            document.definitions.len(),
        );
        Ok(self.load_ast(origin, document))
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

#[derive(Debug, Error)]
pub enum DocumentLoadError {
    #[error("Failed to parse GraphQL document `{origin}`: {err}")]
    Parse {
        origin: String,
        err: String,
    },

    #[error(transparent)]
    Read(#[from] file_reader::ReadContentError),
}
