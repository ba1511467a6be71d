use crate::ast;
use crate::DocumentSetBuilder;
use crate::SourceDocument;

pub fn parse(content: &str) -> ast::Document {
    ast::parse_executable(content).unwrap()
}

/// Loads each string as its own document, labelled `str://0`, `str://1`, ...
pub fn documents(contents: &[&str]) -> Vec<SourceDocument> {
    let mut builder = DocumentSetBuilder::new();
    for content in contents {
        builder = builder.load_str(None, content).unwrap();
    }
    builder.build()
}

pub fn first_operation(document: &ast::Document) -> &ast::OperationDefinition {
    document.definitions
        .iter()
        .find_map(|def| match def {
            ast::Definition::Operation(op_def) => Some(op_def),
            ast::Definition::Fragment(_) => None,
        })
        .unwrap()
}

pub fn fragment<'a>(
    document: &'a ast::Document,
    name: &str,
) -> &'a ast::FragmentDefinition {
    document.definitions
        .iter()
        .find_map(|def| match def {
            ast::Definition::Fragment(frag_def) if frag_def.name == name => Some(frag_def),
            _ => None,
        })
        .unwrap()
}

pub fn fragment_names(fragments: &[&ast::FragmentDefinition]) -> Vec<String> {
    fragments.iter().map(|frag| frag.name.clone()).collect()
}
