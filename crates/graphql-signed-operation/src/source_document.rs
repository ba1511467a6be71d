use crate::ast;

/// A parsed executable document together with the label of where it came
/// from.
///
/// The origin label is only ever used to make error messages actionable
/// (typically it is a file path).
#[derive(Clone, Debug, PartialEq)]
pub struct SourceDocument {
    pub document: ast::Document,
    pub origin: String,
}

impl SourceDocument {
    pub fn new(origin: impl Into<String>, document: ast::Document) -> Self {
        Self {
            document,
            origin: origin.into(),
        }
    }

    pub fn fragments(&self) -> impl Iterator<Item = &ast::FragmentDefinition> {
        self.document.definitions.iter().filter_map(|def| match def {
            ast::Definition::Fragment(frag_def) => Some(frag_def),
            ast::Definition::Operation(_) => None,
        })
    }

    pub fn operations(&self) -> impl Iterator<Item = &ast::OperationDefinition> {
        self.document.definitions.iter().filter_map(|def| match def {
            ast::Definition::Operation(op_def) => Some(op_def),
            ast::Definition::Fragment(_) => None,
        })
    }
}
