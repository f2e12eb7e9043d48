use crate::output_utils;
use std::process::ExitCode;

#[derive(Debug)]
pub(crate) struct CommandResult {
    pub exit_code: ExitCode,
    pub stderr: Option<String>,
    pub stdout: Option<String>,
}

impl CommandResult {
    /// A failed run, reported on stderr behind a red cross.
    pub fn failure(fmt_args: std::fmt::Arguments<'_>) -> Self {
        Self {
            exit_code: ExitCode::FAILURE,
            stderr: Some(format!("{} {fmt_args}", output_utils::RED_X)),
            stdout: None,
        }
    }

    /// A successful run whose stdout is exactly `output`.
    pub fn output(output: String) -> Self {
        Self {
            exit_code: ExitCode::SUCCESS,
            stderr: None,
            stdout: Some(output),
        }
    }

    /// A successful run, reported on stdout behind a green check.
    pub fn success(fmt_args: std::fmt::Arguments<'_>) -> Self {
        Self::output(format!("{} {fmt_args}", output_utils::GREEN_CHECK))
    }
}
