use crate::ast;
use crate::SourceDocument;
use std::collections::HashSet;
use thiserror::Error;

/// Every named fragment definition of a signing run, in document order and
/// then in-document order.
///
/// Fragment spreads are resolved against this pool rather than against the
/// document they appear in, so a fragment may be defined in any input
/// document.
#[derive(Clone, Debug, Default)]
pub struct FragmentPool<'doc> {
    fragments: Vec<&'doc ast::FragmentDefinition>,
}

impl<'doc> FragmentPool<'doc> {
    pub fn from_documents(documents: &'doc [SourceDocument]) -> Self {
        Self::from_fragments(documents.iter().flat_map(SourceDocument::fragments))
    }

    pub fn from_fragments(
        fragments: impl IntoIterator<Item = &'doc ast::FragmentDefinition>,
    ) -> Self {
        Self {
            fragments: fragments.into_iter().collect(),
        }
    }

    pub fn fragments(&self) -> &[&'doc ast::FragmentDefinition] {
        &self.fragments
    }

    /// Looks up a fragment by name. When the pool holds more than one
    /// fragment with the same name, the first one wins.
    pub fn get(&self, name: &str) -> Option<&'doc ast::FragmentDefinition> {
        self.fragments.iter().find(|frag| frag.name == name).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }
}

/// Returns every fragment `operation` depends on, transitively.
///
/// The returned list is the pool filtered down to the required names, so it
/// follows pool order rather than traversal order. Fragments that spread
/// themselves (directly or through other fragments) are visited once.
pub fn resolve_operation_fragments<'a>(
    operation: &'a ast::OperationDefinition,
    pool: &FragmentPool<'a>,
    origin: &str,
) -> Result<Vec<&'a ast::FragmentDefinition>, ResolveError> {
    let mut resolver = RequiredFragments {
        origin,
        pool,
        required: HashSet::new(),
    };

    resolver.visit_selection_set(
        DefinitionKind::Operation,
        ast::operation_name(operation).unwrap_or("<anonymous>"),
        ast::operation_selection_set(operation),
    )?;

    let fragments: Vec<_> = pool.fragments
        .iter()
        .filter(|frag| resolver.required.contains(frag.name.as_str()))
        .copied()
        .collect();

    log::trace!(
        "Operation `{}` in `{origin}` requires {} of {} pooled fragments.",
        ast::operation_name(operation).unwrap_or("<anonymous>"),
        fragments.len(),
        pool.len(),
    );
    Ok(fragments)
}

struct RequiredFragments<'a, 'p> {
    origin: &'p str,
    pool: &'p FragmentPool<'a>,
    required: HashSet<&'a str>,
}

impl<'a> RequiredFragments<'a, '_> {
    fn visit_selection_set(
        &mut self,
        owner_kind: DefinitionKind,
        owner_name: &str,
        selection_set: &'a ast::SelectionSet,
    ) -> Result<(), ResolveError> {
        for selection in &selection_set.items {
            match selection {
                ast::Selection::Field(field) => {
                    self.visit_selection_set(
                        owner_kind,
                        owner_name,
                        &field.selection_set,
                    )?;
                },

                ast::Selection::InlineFragment(inline) => {
                    self.visit_selection_set(
                        owner_kind,
                        owner_name,
                        &inline.selection_set,
                    )?;
                },

                ast::Selection::FragmentSpread(spread) => {
                    let fragment_name = spread.fragment_name.as_str();
                    // Marking before descending is what stops self-spreading
                    // fragments from recursing forever.
                    if !self.required.insert(fragment_name) {
                        continue;
                    }

                    let Some(frag_def) = self.pool.get(fragment_name) else {
                        return Err(ResolveError::MissingFragment {
                            definition_kind: owner_kind,
                            definition_name: owner_name.to_string(),
                            fragment_name: fragment_name.to_string(),
                            origin: self.origin.to_string(),
                        });
                    };

                    self.visit_selection_set(
                        DefinitionKind::Fragment,
                        frag_def.name.as_str(),
                        &frag_def.selection_set,
                    )?;
                },
            }
        }
        Ok(())
    }
}

/// The kind of definition that contained an unresolvable fragment spread.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DefinitionKind {
    Fragment,
    Operation,
}
impl std::fmt::Display for DefinitionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Fragment => "fragment",
            Self::Operation => "operation",
        })
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ResolveError {
    #[error(
        "Missing fragment `{fragment_name}` for {definition_kind} \
        `{definition_name}` in `{origin}`"
    )]
    MissingFragment {
        definition_kind: DefinitionKind,
        definition_name: String,
        fragment_name: String,
        origin: String,
    },
}
