//! Owned aliases over the `graphql_parser` executable-document AST.

pub use graphql_parser::query::ParseError;

pub type Definition = graphql_parser::query::Definition<'static, String>;
pub type Directive = graphql_parser::query::Directive<'static, String>;
pub type Document = graphql_parser::query::Document<'static, String>;
pub type Field = graphql_parser::query::Field<'static, String>;
pub type FragmentDefinition = graphql_parser::query::FragmentDefinition<'static, String>;
pub type FragmentSpread = graphql_parser::query::FragmentSpread<'static, String>;
pub type InlineFragment = graphql_parser::query::InlineFragment<'static, String>;
pub type OperationDefinition = graphql_parser::query::OperationDefinition<'static, String>;
pub type Selection = graphql_parser::query::Selection<'static, String>;
pub type SelectionSet = graphql_parser::query::SelectionSet<'static, String>;
pub type Type = graphql_parser::query::Type<'static, String>;
pub type TypeCondition = graphql_parser::query::TypeCondition<'static, String>;
pub type Value = graphql_parser::query::Value<'static, String>;
pub type VariableDefinition = graphql_parser::query::VariableDefinition<'static, String>;

/// Parse an executable document (operations and fragments) into an owned
/// AST.
pub fn parse_executable(content: &str) -> Result<Document, ParseError> {
    Ok(graphql_parser::query::parse_query::<String>(content)?.into_static())
}

/// Returns the name of an operation definition, if it has one.
///
/// Shorthand operations (`{ ... }`) never have a name.
pub fn operation_name(def: &OperationDefinition) -> Option<&str> {
    use OperationDefinition as OpDef;
    match def {
        OpDef::Query(query) => query.name.as_deref(),
        OpDef::Mutation(mutation) => mutation.name.as_deref(),
        OpDef::Subscription(subscription) => subscription.name.as_deref(),
        OpDef::SelectionSet(_) => None,
    }
}

pub fn operation_selection_set(def: &OperationDefinition) -> &SelectionSet {
    use OperationDefinition as OpDef;
    match def {
        OpDef::Query(query) => &query.selection_set,
        OpDef::Mutation(mutation) => &mutation.selection_set,
        OpDef::Subscription(subscription) => &subscription.selection_set,
        OpDef::SelectionSet(selection_set) => selection_set,
    }
}
