use crate::file_reader;
use std::path::Path;
use std::path::PathBuf;

/// Name of the optional project-level config file, looked up in the base
/// directory.
pub const APP_CONFIG_FILE_NAME: &str = "appconfig.json";

/// Fragment directory used when neither an explicit path nor an
/// `appconfig.json` override is given.
pub const DEFAULT_SCHEMA_DIR: &str = "schema";

/// Where a [`ResolvedSchemaPath`] came from.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum SchemaPathSource {
    /// The path was passed in explicitly by the caller.
    Explicit,

    /// The path came from `graphql.schema` in `appconfig.json`.
    AppConfig,

    /// Neither of the above was present, so [`DEFAULT_SCHEMA_DIR`] was used.
    Default,
}

/// The directory to search for fragments, along with how it was chosen.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ResolvedSchemaPath {
    pub dir: PathBuf,
    pub source: SchemaPathSource,
}

#[derive(Debug, serde::Deserialize)]
struct AppConfig {
    graphql: Option<AppConfigGraphQLSection>,
}

#[derive(Debug, serde::Deserialize)]
struct AppConfigGraphQLSection {
    schema: Option<String>,
}

/// Decides which directory to search for fragments.
///
/// An explicit (non-empty) path always wins and `appconfig.json` is not even
/// read. Otherwise `graphql.schema` from `<base_dir>/appconfig.json` is used
/// if present, and [`DEFAULT_SCHEMA_DIR`] if not. Relative paths are resolved
/// against `base_dir`.
pub fn resolve_schema_path(
    base_dir: &Path,
    explicit_path: Option<&Path>,
) -> ResolvedSchemaPath {
    if let Some(explicit_path) = explicit_path
        && !explicit_path.as_os_str().is_empty() {
        return ResolvedSchemaPath {
            dir: base_dir.join(explicit_path),
            source: SchemaPathSource::Explicit,
        };
    }

    if let Some(config_path) = read_app_config_schema_path(base_dir) {
        return ResolvedSchemaPath {
            dir: base_dir.join(config_path),
            source: SchemaPathSource::AppConfig,
        };
    }

    ResolvedSchemaPath {
        dir: base_dir.join(DEFAULT_SCHEMA_DIR),
        source: SchemaPathSource::Default,
    }
}

/// Reads `graphql.schema` out of `<base_dir>/appconfig.json`.
///
/// A missing file, a file that can't be read or parsed, or a missing (or
/// empty) `graphql.schema` entry all mean "no override" and yield `None`.
pub fn read_app_config_schema_path(base_dir: &Path) -> Option<String> {
    let config_path = base_dir.join(APP_CONFIG_FILE_NAME);
    if !config_path.exists() {
        log::trace!("No {APP_CONFIG_FILE_NAME} found at {config_path:?}.");
        return None;
    }

    let content = match file_reader::read_content(&config_path) {
        Ok(content) => content,
        Err(err) => {
            log::warn!("Ignoring {APP_CONFIG_FILE_NAME}: {err}");
            return None;
        },
    };

    let app_config: AppConfig = match serde_json::from_str(content.as_str()) {
        Ok(app_config) => app_config,
        Err(err) => {
            log::warn!(
                "Ignoring {config_path:?} because it could not be parsed: {err}"
            );
            return None;
        },
    };

    let schema_path = app_config.graphql
        .and_then(|graphql| graphql.schema)
        .filter(|schema_path| !schema_path.is_empty());

    if let Some(schema_path) = &schema_path {
        log::debug!(
            "Using schema path `{schema_path}` from {config_path:?}."
        );
    }
    schema_path
}
