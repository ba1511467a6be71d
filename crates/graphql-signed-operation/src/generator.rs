use crate::ast;
use crate::canonical_printer;
use crate::fragment_resolver;
use crate::ConfigError;
use crate::FragmentPool;
use crate::ResolveError;
use crate::SignError;
use crate::SignatureMap;
use crate::SigningConfig;
use crate::SourceDocument;
use rayon::prelude::*;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

type Result<T> = std::result::Result<T, GenerateError>;

/// Pre-flight check run before any document is resolved or signed.
///
/// Fails if `output_target` does not end in `.json` or if `config` has no
/// usable secret or algorithm.
pub fn validate(
    config: &SigningConfig,
    output_target: impl AsRef<Path>,
) -> std::result::Result<(), ConfigError> {
    let output_target = output_target.as_ref();
    if output_target.extension().and_then(|ext| ext.to_str()) != Some("json") {
        return Err(ConfigError::InvalidOutputExtension {
            path: output_target.to_path_buf(),
        });
    }
    config.check()
}

/// Signs every operation of `documents` and returns the resulting map.
///
/// Either every operation is signed or an error is returned; there is no
/// partial result.
pub fn generate(
    documents: &[SourceDocument],
    config: &SigningConfig,
) -> Result<SignatureMap> {
    let signer = config.signer()?;
    let pool = FragmentPool::from_documents(documents);
    log::debug!(
        "Signing operations of {} documents ({} pooled fragments) with {}.",
        documents.len(),
        pool.len(),
        signer.algorithm(),
    );

    // Name, fragment and uniqueness checks run in input order so that the
    // first reported failure does not depend on scheduling.
    let mut origins_by_name: HashMap<&str, &str> = HashMap::new();
    let mut jobs = vec![];
    for document in documents {
        let origin = document.origin.as_str();
        for operation in document.operations() {
            let Some(operation_name) = ast::operation_name(operation) else {
                return Err(GenerateError::MissingOperationName {
                    origin: origin.to_string(),
                    operation: operation_excerpt(operation),
                });
            };

            let fragments = fragment_resolver::resolve_operation_fragments(
                operation,
                &pool,
                origin,
            )?;

            if let Some(first_origin) = origins_by_name.insert(operation_name, origin) {
                return Err(GenerateError::DuplicateOperationName {
                    operation_name: operation_name.to_string(),
                    first_origin: first_origin.to_string(),
                    second_origin: origin.to_string(),
                });
            }

            jobs.push(SigningJob {
                fragments,
                operation,
                operation_name,
            });
        }
    }

    let digests = jobs
        .par_iter()
        .map(|job| signer.sign(job.operation, &job.fragments))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let mut signatures = SignatureMap::new();
    for (job, digest) in jobs.iter().zip(digests) {
        log::trace!(
            "Signed operation `{}` with {} fragments.",
            job.operation_name,
            job.fragments.len(),
        );
        signatures.insert(job.operation_name.to_string(), digest);
    }

    log::debug!("Signed {} operations.", signatures.len());
    Ok(signatures)
}

/// Same as [`generate`], serialized into the JSON artifact text.
pub fn generate_artifact(
    documents: &[SourceDocument],
    config: &SigningConfig,
) -> Result<String> {
    generate(documents, config)?
        .to_json_pretty()
        .map_err(|err| GenerateError::Serialize(err.to_string()))
}

const OPERATION_EXCERPT_MAX_CHARS: usize = 80;

fn operation_excerpt(operation: &ast::OperationDefinition) -> String {
    let printed = canonical_printer::print_operation(operation);
    if printed.chars().count() <= OPERATION_EXCERPT_MAX_CHARS {
        return printed;
    }
    let mut excerpt: String = printed
        .chars()
        .take(OPERATION_EXCERPT_MAX_CHARS - 3)
        .collect();
    excerpt.push_str("...");
    excerpt
}

struct SigningJob<'a> {
    fragments: Vec<&'a ast::FragmentDefinition>,
    operation: &'a ast::OperationDefinition,
    operation_name: &'a str,
}

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(
        "Operation `{operation_name}` is defined more than once (first in \
        `{first_origin}`, again in `{second_origin}`); operation names must \
        be unique"
    )]
    DuplicateOperationName {
        operation_name: String,
        first_origin: String,
        second_origin: String,
    },

    #[error("Invalid signing configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),

    #[error(transparent)]
    MissingFragment(#[from] ResolveError),

    #[error(
        "An operation in `{origin}` has no name; every signed operation \
        requires an operation name: `{operation}`"
    )]
    MissingOperationName {
        origin: String,
        operation: String,
    },

    #[error("Failed to serialize the signature map: {0}")]
    Serialize(String),

    #[error(transparent)]
    Sign(#[from] SignError),
}
