use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use walkdir::DirEntry;
use walkdir::WalkDir;

/// File extensions searched for when no other set is specified.
pub const DEFAULT_FRAGMENT_EXTENSIONS: &[&str] = &[
    "graphql",
    "graphqls",
    "json",
];

/// Normalizes a user-provided set of file extensions: strips any leading `.`,
/// lowercases, and drops empty or duplicate entries while preserving order.
pub fn normalize_extensions<S: AsRef<str>>(
    extensions: impl IntoIterator<Item = S>,
) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut normalized_exts = vec![];
    for ext in extensions {
        let ext = ext.as_ref()
            .trim()
            .trim_start_matches('.')
            .to_ascii_lowercase();
        if ext.is_empty() {
            continue;
        }
        if seen.insert(ext.to_owned()) {
            normalized_exts.push(ext);
        }
    }
    normalized_exts
}

/// Recursively finds all fragment files at or under `dir`.
///
/// Only files with one of the given (normalized) `extensions` are returned.
/// Hidden files and directories (names starting with `.`) are not descended
/// into. The returned paths are sorted so that glue order is stable across
/// runs. A missing directory yields no files rather than an error.
pub fn discover_fragment_files(
    dir: &Path,
    extensions: &[String],
) -> Vec<PathBuf> {
    if !dir.is_dir() {
        log::debug!("No fragment directory exists at {dir:?}.");
        return vec![];
    }

    let mut file_paths = vec![];
    let walker =
        WalkDir::new(dir)
            .follow_links(true)
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                log::warn!(
                    "Skipping an unreadable entry while searching for \
                    fragments under {dir:?}: {err}"
                );
                continue;
            },
        };

        let path = entry.path();
        if !entry.file_type().is_file() {
            log::trace!("Skipping non-file: {path:?}.");
            continue;
        }

        if has_extension(path, extensions) {
            log::trace!("Found fragment file at {path:?}.");
            file_paths.push(entry.into_path());
        } else {
            log::trace!("Skipping file with unrecognized extension: {path:?}.");
        }
    }

    file_paths.sort();
    log::debug!(
        "Found {} fragment files under {dir:?}.",
        file_paths.len(),
    );
    file_paths
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
        .is_some_and(|ext| extensions.contains(&ext))
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name()
        .to_str()
        .is_some_and(|name| name.starts_with('.'))
}
