//! Deterministic printing of executable documents.
//!
//! Two documents that differ only in insignificant whitespace, in the order
//! of their definitions, in the order of the items of a selection set or in
//! the order of arguments print to the same text.
//!
//! Printed text always parses back to the same values: floats carry an
//! exponent, and strings are written as quoted strings with control
//! characters escaped (block strings included).

use crate::ast;

/// Builds one self-contained document out of an operation and the fragments
/// it requires.
///
/// The definitions are printed and the resulting text is parsed again, so
/// the document that gets signed is exactly what the printer produces.
pub fn assemble_document(
    operation: &ast::OperationDefinition,
    fragments: &[&ast::FragmentDefinition],
) -> Result<ast::Document, ast::ParseError> {
    let mut definitions = Vec::with_capacity(fragments.len() + 1);
    definitions.push(ast::Definition::Operation(operation.clone()));
    definitions.extend(
        fragments.iter().map(|frag| ast::Definition::Fragment((*frag).clone())),
    );

    reparse(&ast::Document { definitions })
}

/// Prints `document` (without reordering it) and parses the text again.
pub fn reparse(document: &ast::Document) -> Result<ast::Document, ast::ParseError> {
    ast::parse_executable(print_document(document).as_str())
}

/// Prints `document` canonically, as a single line.
pub fn print_canonical(document: &ast::Document) -> String {
    let mut document = document.clone();
    sort_document(&mut document);
    print_document(&document)
}

/// Prints `document` on a single line, in its current order.
pub fn print_document(document: &ast::Document) -> String {
    let mut out = String::new();
    for (idx, def) in document.definitions.iter().enumerate() {
        if idx > 0 {
            out.push(' ');
        }
        write_definition(&mut out, def);
    }
    out
}

/// Single-line print of one operation, used to point at it in diagnostics.
pub(crate) fn print_operation(operation: &ast::OperationDefinition) -> String {
    let mut out = String::new();
    write_operation(&mut out, operation);
    out
}

fn sort_document(document: &mut ast::Document) {
    for def in &mut document.definitions {
        match def {
            ast::Definition::Operation(op_def) => sort_operation(op_def),
            ast::Definition::Fragment(frag_def) => {
                sort_directive_args(&mut frag_def.directives);
                sort_selection_set(&mut frag_def.selection_set);
            },
        }
    }

    document.definitions.sort_by_cached_key(|def| {
        let mut printed = String::new();
        write_definition(&mut printed, def);
        match def {
            ast::Definition::Operation(op_def) => (
                0u8,
                ast::operation_name(op_def).unwrap_or_default().to_string(),
                printed,
            ),
            ast::Definition::Fragment(frag_def) => (
                1u8,
                frag_def.name.clone(),
                printed,
            ),
        }
    });
}

fn sort_operation(op_def: &mut ast::OperationDefinition) {
    use ast::OperationDefinition as OpDef;
    let (variable_definitions, directives, selection_set) = match op_def {
        OpDef::Query(query) => (
            &mut query.variable_definitions,
            &mut query.directives,
            &mut query.selection_set,
        ),
        OpDef::Mutation(mutation) => (
            &mut mutation.variable_definitions,
            &mut mutation.directives,
            &mut mutation.selection_set,
        ),
        OpDef::Subscription(subscription) => (
            &mut subscription.variable_definitions,
            &mut subscription.directives,
            &mut subscription.selection_set,
        ),
        OpDef::SelectionSet(selection_set) => {
            sort_selection_set(selection_set);
            return;
        },
    };

    variable_definitions.sort_by(|a, b| a.name.cmp(&b.name));
    sort_directive_args(directives);
    sort_selection_set(selection_set);
}

fn sort_selection_set(selection_set: &mut ast::SelectionSet) {
    for selection in &mut selection_set.items {
        match selection {
            ast::Selection::Field(field) => {
                sort_arguments(&mut field.arguments);
                sort_directive_args(&mut field.directives);
                sort_selection_set(&mut field.selection_set);
            },
            ast::Selection::FragmentSpread(spread) => {
                sort_directive_args(&mut spread.directives);
            },
            ast::Selection::InlineFragment(inline) => {
                sort_directive_args(&mut inline.directives);
                sort_selection_set(&mut inline.selection_set);
            },
        }
    }

    selection_set.items.sort_by_cached_key(|selection| {
        // The full print only breaks ties between equal keys.
        let mut printed = String::new();
        write_selection(&mut printed, selection);
        match selection {
            ast::Selection::Field(field) => (
                0u8,
                field.alias.as_ref().unwrap_or(&field.name).clone(),
                field.name.clone(),
                printed,
            ),
            ast::Selection::FragmentSpread(spread) => (
                1u8,
                spread.fragment_name.clone(),
                String::new(),
                printed,
            ),
            ast::Selection::InlineFragment(inline) => {
                let type_name = match &inline.type_condition {
                    Some(ast::TypeCondition::On(type_name)) => type_name.clone(),
                    None => String::new(),
                };
                (2u8, type_name, String::new(), printed)
            },
        }
    });
}

// Directive order is left as written: it can carry meaning. Only the
// arguments of each directive are ordered.
fn sort_directive_args(directives: &mut [ast::Directive]) {
    for directive in directives {
        sort_arguments(&mut directive.arguments);
    }
}

fn sort_arguments(arguments: &mut [(String, ast::Value)]) {
    arguments.sort_by(|(a, _), (b, _)| a.cmp(b));
}

fn write_definition(out: &mut String, def: &ast::Definition) {
    match def {
        ast::Definition::Operation(op_def) => write_operation(out, op_def),
        ast::Definition::Fragment(frag_def) => {
            out.push_str("fragment ");
            out.push_str(&frag_def.name);
            let ast::TypeCondition::On(type_name) = &frag_def.type_condition;
            out.push_str(" on ");
            out.push_str(type_name);
            write_directives(out, &frag_def.directives);
            out.push(' ');
            write_selection_set(out, &frag_def.selection_set);
        },
    }
}

fn write_operation(out: &mut String, op_def: &ast::OperationDefinition) {
    use ast::OperationDefinition as OpDef;
    let (keyword, name, variable_definitions, directives, selection_set) = match op_def {
        OpDef::Query(query) => (
            "query",
            &query.name,
            &query.variable_definitions,
            &query.directives,
            &query.selection_set,
        ),
        OpDef::Mutation(mutation) => (
            "mutation",
            &mutation.name,
            &mutation.variable_definitions,
            &mutation.directives,
            &mutation.selection_set,
        ),
        OpDef::Subscription(subscription) => (
            "subscription",
            &subscription.name,
            &subscription.variable_definitions,
            &subscription.directives,
            &subscription.selection_set,
        ),
        OpDef::SelectionSet(selection_set) => {
            write_selection_set(out, selection_set);
            return;
        },
    };

    out.push_str(keyword);
    if let Some(name) = name {
        out.push(' ');
        out.push_str(name);
    }
    if !variable_definitions.is_empty() {
        out.push('(');
        for (idx, var_def) in variable_definitions.iter().enumerate() {
            if idx > 0 {
                out.push_str(", ");
            }
            out.push('$');
            out.push_str(&var_def.name);
            out.push_str(": ");
            write_type(out, &var_def.var_type);
            if let Some(default_value) = &var_def.default_value {
                out.push_str(" = ");
                write_value(out, default_value);
            }
        }
        out.push(')');
    }
    write_directives(out, directives);
    out.push(' ');
    write_selection_set(out, selection_set);
}

fn write_selection_set(out: &mut String, selection_set: &ast::SelectionSet) {
    out.push('{');
    for selection in &selection_set.items {
        out.push(' ');
        write_selection(out, selection);
    }
    out.push_str(" }");
}

fn write_selection(out: &mut String, selection: &ast::Selection) {
    match selection {
        ast::Selection::Field(field) => {
            if let Some(alias) = &field.alias {
                out.push_str(alias);
                out.push_str(": ");
            }
            out.push_str(&field.name);
            write_arguments(out, &field.arguments);
            write_directives(out, &field.directives);
            if !field.selection_set.items.is_empty() {
                out.push(' ');
                write_selection_set(out, &field.selection_set);
            }
        },

        ast::Selection::FragmentSpread(spread) => {
            out.push_str("...");
            out.push_str(&spread.fragment_name);
            write_directives(out, &spread.directives);
        },

        ast::Selection::InlineFragment(inline) => {
            out.push_str("...");
            if let Some(ast::TypeCondition::On(type_name)) = &inline.type_condition {
                out.push_str(" on ");
                out.push_str(type_name);
            }
            write_directives(out, &inline.directives);
            out.push(' ');
            write_selection_set(out, &inline.selection_set);
        },
    }
}

fn write_directives(out: &mut String, directives: &[ast::Directive]) {
    for directive in directives {
        out.push_str(" @");
        out.push_str(&directive.name);
        write_arguments(out, &directive.arguments);
    }
}

fn write_arguments(out: &mut String, arguments: &[(String, ast::Value)]) {
    if arguments.is_empty() {
        return;
    }
    out.push('(');
    for (idx, (name, value)) in arguments.iter().enumerate() {
        if idx > 0 {
            out.push_str(", ");
        }
        out.push_str(name);
        out.push_str(": ");
        write_value(out, value);
    }
    out.push(')');
}

fn write_type(out: &mut String, var_type: &ast::Type) {
    match var_type {
        ast::Type::NamedType(name) => out.push_str(name),
        ast::Type::ListType(inner) => {
            out.push('[');
            write_type(out, inner);
            out.push(']');
        },
        ast::Type::NonNullType(inner) => {
            write_type(out, inner);
            out.push('!');
        },
    }
}

fn write_value(out: &mut String, value: &ast::Value) {
    match value {
        ast::Value::Variable(name) => {
            out.push('$');
            out.push_str(name);
        },
        ast::Value::Float(float) => write_float(out, *float),
        ast::Value::String(string) => write_string(out, string),
        ast::Value::List(items) => {
            out.push('[');
            for (idx, item) in items.iter().enumerate() {
                if idx > 0 {
                    out.push_str(", ");
                }
                write_value(out, item);
            }
            out.push(']');
        },
        ast::Value::Object(fields) => {
            out.push('{');
            for (idx, (name, field_value)) in fields.iter().enumerate() {
                if idx > 0 {
                    out.push_str(", ");
                }
                out.push_str(name);
                out.push_str(": ");
                write_value(out, field_value);
            }
            out.push('}');
        },
        ast::Value::Int(_)
        | ast::Value::Boolean(_)
        | ast::Value::Null
        | ast::Value::Enum(_) => out.push_str(&value.to_string()),
    }
}

/// Writes the shortest exponent form that reads back to the same `f64`.
///
/// Non-negative exponents get an explicit `+`: graphql-parser rejects an
/// exponent whose first digit is `0` or `9`.
fn write_float(out: &mut String, float: f64) {
    if float.is_infinite() {
        out.push_str(if float > 0.0 { "1e+999" } else { "-1e+999" });
        return;
    }

    let formatted = format!("{float:e}");
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            out.push_str(mantissa);
            out.push_str("e+");
            out.push_str(exponent);
        },
        _ => out.push_str(&formatted),
    }
}

fn write_string(out: &mut String, string: &str) {
    out.push('"');
    for ch in string.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            // graphql-parser reads `\b` back as U+0010, so no short escape
            // other than the ones above is used.
            ch if ch.is_control() => {
                out.push_str(&format!("\\u{:04X}", u32::from(ch)));
            },
            ch => out.push(ch),
        }
    }
    out.push('"');
}
