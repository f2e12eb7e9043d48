use crate::FragmentLoadError;
use crate::SchemaPathSource;
use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GlueError {
    #[error("Unable to load the fragment at {file_path:?}: {err}")]
    FragmentLoadError {
        file_path: PathBuf,
        #[source]
        err: FragmentLoadError,
    },

    /// None of the discovered fragments contributed any schema text.
    #[error("{}", missing_schema_message(.path, .path_source))]
    MissingSchema {
        path: PathBuf,
        path_source: SchemaPathSource,
    },

    #[error("Unable to determine the current working directory: {0}")]
    WorkingDirectoryUnavailable(#[source] std::io::Error),
}

fn missing_schema_message(
    path: &Path,
    path_source: &SchemaPathSource,
) -> String {
    match path_source {
        SchemaPathSource::AppConfig => format!(
            "Missing GraphQL Schema: No schemas found under the path '{}' \
            defined in the appconfig.json",
            path.display(),
        ),

        SchemaPathSource::Explicit | SchemaPathSource::Default => format!(
            "Missing GraphQL Schema: No schemas found under the path '{}'",
            path.display(),
        ),
    }
}
