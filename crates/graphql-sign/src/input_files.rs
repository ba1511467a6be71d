use anyhow::Context;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

#[derive(Debug, Default, PartialEq)]
pub(crate) struct DiscoveredFiles {
    pub file_paths: Vec<PathBuf>,
    pub num_skipped: usize,
}

/// Collects the GraphQL files at or under each of `input_paths`.
///
/// Directories are walked recursively in file-name order and filtered by
/// `graphql_file_exts` (with or without a leading dot). A file reachable
/// from more than one input path is only listed once.
pub(crate) fn discover_graphql_files(
    input_paths: &[PathBuf],
    graphql_file_exts: &[String],
) -> anyhow::Result<DiscoveredFiles> {
    let exts: HashSet<&str> = graphql_file_exts.iter()
        .map(|ext| ext.trim_start_matches('.'))
        .collect();

    log::debug!("Scanning {} input paths...", input_paths.len());
    let mut discovered = DiscoveredFiles::default();
    let mut seen = HashSet::new();
    for input_path in input_paths {
        let walker = WalkDir::new(input_path)
            .follow_links(true)
            .sort_by_file_name();
        for entry in walker {
            let entry = entry.with_context(|| {
                format!("Failed to scan {input_path:?} for GraphQL files")
            })?;
            let path = entry.path();
            if !entry.file_type().is_file() {
                continue;
            }
            if !has_graphql_ext(path, &exts) {
                log::trace!("Skipping non-graphql file {path:?}.");
                discovered.num_skipped += 1;
                continue;
            }
            let canonical = std::fs::canonicalize(path)
                .with_context(|| format!("Failed to resolve {path:?}"))?;
            if seen.insert(canonical) {
                discovered.file_paths.push(path.to_path_buf());
            }
        }
    }

    // A lone file argument is taken as an explicit request to load it, even
    // when its extension is not one of `graphql_file_exts`.
    if discovered.file_paths.is_empty()
        && let [only_path] = input_paths
        && only_path.is_file() {
        log::warn!(
            "Loading {only_path:?} even though its extension is not one of: {}",
            graphql_file_exts.join(", "),
        );
        discovered.num_skipped = 0;
        discovered.file_paths.push(only_path.clone());
    }

    log::debug!("Found {} GraphQL files.", discovered.file_paths.len());
    Ok(discovered)
}

fn has_graphql_ext(path: &Path, exts: &HashSet<&str>) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| exts.contains(ext))
}
