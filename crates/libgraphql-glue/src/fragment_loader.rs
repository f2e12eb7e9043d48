use crate::file_reader;
use crate::Fragment;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

type Result<T> = std::result::Result<T, FragmentLoadError>;

/// File extensions whose content is taken verbatim as a fragment's schema.
pub const SDL_FILE_EXTENSIONS: &[&str] = &["graphql", "graphqls"];

/// Turns a discovered file path into a [`Fragment`].
///
/// Any `Fn(&Path) -> Result<Fragment<R>, FragmentLoadError>` is a
/// `FragmentLoader`, which makes it easy to glue in-memory fragments:
///
/// ```
/// use libgraphql_glue::Fragment;
/// use libgraphql_glue::FragmentLoadError;
/// use libgraphql_glue::FragmentLoader;
/// use std::path::Path;
///
/// let loader = |_: &Path| -> Result<Fragment<&str>, FragmentLoadError> {
///     Ok(Fragment::from_sdl("type Post { id: ID }"))
/// };
/// let fragment = loader.load_fragment(Path::new("post.json")).unwrap();
/// assert_eq!(fragment.schema.as_deref(), Some("type Post { id: ID }"));
/// ```
pub trait FragmentLoader<R> {
    fn load_fragment(&self, file_path: &Path) -> Result<Fragment<R>>;
}
impl<R, F> FragmentLoader<R> for F
where
    F: Fn(&Path) -> Result<Fragment<R>>,
{
    fn load_fragment(&self, file_path: &Path) -> Result<Fragment<R>> {
        self(file_path)
    }
}

/// Loads fragments from disk.
///
/// Files with one of the [`SDL_FILE_EXTENSIONS`] contribute their whole
/// content as schema text. Every other file is parsed as a JSON fragment
/// document (see [`Fragment::from_json_value`]), with resolvers kept as raw
/// [`serde_json::Value`]s. An empty (or whitespace-only) JSON file is an
/// empty fragment.
#[derive(Clone, Copy, Debug, Default)]
pub struct FileFragmentLoader;
impl FragmentLoader<serde_json::Value> for FileFragmentLoader {
    fn load_fragment(
        &self,
        file_path: &Path,
    ) -> Result<Fragment<serde_json::Value>> {
        let content = file_reader::read_content(file_path)?;

        if is_sdl_file(file_path) {
            log::trace!("Loading {file_path:?} as a schema-only fragment.");
            return Ok(Fragment::from_sdl(content));
        }

        if content.trim().is_empty() {
            log::debug!("{file_path:?} is empty, so it contributes nothing.");
            return Ok(Fragment::new());
        }

        log::trace!("Loading {file_path:?} as a JSON fragment.");
        let value: serde_json::Value = serde_json::from_str(content.as_str())
            .map_err(|err| FragmentLoadError::JsonParseError {
                file_path: file_path.to_path_buf(),
                err: Arc::new(err),
            })?;

        Ok(Fragment::from_json_value(value))
    }
}

fn is_sdl_file(file_path: &Path) -> bool {
    file_path.extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
        .is_some_and(|ext| SDL_FILE_EXTENSIONS.contains(&ext.as_str()))
}

#[derive(Clone, Debug, Error)]
pub enum FragmentLoadError {
    #[error("Failure while trying to read a fragment file from disk: {0}")]
    FileReadError(Arc<file_reader::ReadContentError>),

    #[error("Error parsing JSON fragment {file_path:?}: {err}")]
    JsonParseError {
        file_path: PathBuf,
        err: Arc<serde_json::Error>,
    },

    /// For use by custom [`FragmentLoader`]s.
    #[error("{0}")]
    Other(String),
}
impl std::convert::From<file_reader::ReadContentError> for FragmentLoadError {
    fn from(value: file_reader::ReadContentError) -> Self {
        Self::FileReadError(Arc::new(value))
    }
}
