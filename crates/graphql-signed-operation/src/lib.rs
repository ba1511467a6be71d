//! Build-time signing of GraphQL operations for the "trusted documents"
//! pattern.
//!
//! Given a set of executable documents, every named operation is resolved
//! against the global pool of fragment definitions, assembled into a single
//! self-contained document, printed canonically and signed with a keyed
//! digest. The result is a [`SignatureMap`] from operation name to hex
//! digest that a server can later use to reject operations it has never
//! seen.

pub mod ast;
mod canonical_printer;
mod config;
mod document_set_builder;
pub mod file_reader;
mod fragment_resolver;
mod generator;
mod signature_map;
mod signer;
mod signing_algorithm;
mod source_document;
mod verifier;

pub use canonical_printer::assemble_document;
pub use canonical_printer::print_canonical;
pub use canonical_printer::print_document;
pub use canonical_printer::reparse;
pub use config::ConfigError;
pub use config::SigningConfig;
pub use document_set_builder::DocumentLoadError;
pub use document_set_builder::DocumentSetBuilder;
pub use fragment_resolver::resolve_operation_fragments;
pub use fragment_resolver::DefinitionKind;
pub use fragment_resolver::FragmentPool;
pub use fragment_resolver::ResolveError;
pub use generator::generate;
pub use generator::generate_artifact;
pub use generator::validate;
pub use generator::GenerateError;
pub use signature_map::SignatureMap;
pub use signer::OperationSigner;
pub use signer::SignError;
pub use signing_algorithm::SigningAlgorithm;
pub use signing_algorithm::UnsupportedAlgorithm;
pub use source_document::SourceDocument;
pub use verifier::OperationVerifier;
pub use verifier::VerificationError;

#[cfg(test)]
mod tests;
