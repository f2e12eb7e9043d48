use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

type Result<T> = std::result::Result<T, ReadContentError>;

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Reads a fragment or config file as UTF-8 text. A leading byte-order mark
/// is not part of the returned content.
pub fn read_content(file_path: &Path) -> Result<String> {
    let bytes = std::fs::read(file_path)
        .map_err(|err| ReadContentError::FileReadError {
            file_path: file_path.to_path_buf(),
            err,
        })?;

    let content = String::from_utf8(bytes)
        .map_err(|err| ReadContentError::FileDecodeError {
            file_path: file_path.to_path_buf(),
            err,
        })?;

    Ok(match content.strip_prefix(BYTE_ORDER_MARK) {
        Some(without_bom) => without_bom.to_string(),
        None => content,
    })
}

#[derive(Debug, Error)]
pub enum ReadContentError {
    #[error("Unable to decode {file_path:?} as UTF-8: {err}")]
    FileDecodeError {
        file_path: PathBuf,
        err: std::string::FromUtf8Error,
    },

    #[error("Unable to read {file_path:?}: {err}")]
    FileReadError {
        file_path: PathBuf,
        err: std::io::Error,
    },
}
