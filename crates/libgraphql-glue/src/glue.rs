use crate::config;
use crate::discovery;
use crate::FileFragmentLoader;
use crate::FragmentLoader;
use crate::GlueError;
use crate::GluedSchema;
use crate::SchemaGlue;
use std::path::Path;

type Result<T> = std::result::Result<T, GlueError>;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GlueOptions {
    /// Extensions of the files to treat as fragments. Normalized by
    /// [`discovery::normalize_extensions`].
    pub fragment_extensions: Vec<String>,
}
impl GlueOptions {
    pub fn new<S: AsRef<str>>(
        fragment_extensions: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            fragment_extensions: discovery::normalize_extensions(
                fragment_extensions,
            ),
        }
    }
}
impl std::default::Default for GlueOptions {
    fn default() -> Self {
        Self::new(discovery::DEFAULT_FRAGMENT_EXTENSIONS.iter().copied())
    }
}

/// Glues all fragment files found under `schema_dir` (or, when `None`, the
/// directory named by `appconfig.json` or `./schema`) into one schema,
/// relative to the current working directory.
pub fn glue(
    schema_dir: Option<&Path>,
) -> Result<GluedSchema<serde_json::Value>> {
    let base_dir = std::env::current_dir()
        .map_err(GlueError::WorkingDirectoryUnavailable)?;

    glue_with(
        base_dir.as_path(),
        schema_dir,
        &GlueOptions::default(),
        &FileFragmentLoader,
    )
}

/// Resolves the fragment directory relative to `base_dir`, discovers
/// fragment files beneath it, loads each with `loader` and glues them
/// together in path order.
pub fn glue_with<R, L: FragmentLoader<R>>(
    base_dir: &Path,
    schema_dir: Option<&Path>,
    options: &GlueOptions,
    loader: &L,
) -> Result<GluedSchema<R>> {
    let resolved_path = config::resolve_schema_path(base_dir, schema_dir);
    log::debug!(
        "Searching for fragments under {:?} ({:?}).",
        resolved_path.dir,
        resolved_path.source,
    );

    let file_paths = discovery::discover_fragment_files(
        resolved_path.dir.as_path(),
        options.fragment_extensions.as_slice(),
    );

    let mut schema_glue = SchemaGlue::new();
    for file_path in file_paths {
        let fragment = loader.load_fragment(file_path.as_path())
            .map_err(|err| GlueError::FragmentLoadError {
                file_path: file_path.to_owned(),
                err,
            })?;
        schema_glue = schema_glue.add_fragment(fragment);
    }

    schema_glue.build(&resolved_path)
}
