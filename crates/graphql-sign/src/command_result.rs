use std::process::ExitCode;

#[derive(Debug)]
pub(crate) struct CommandResult {
    pub exit_code: ExitCode,
    pub stderr: Option<String>,
    pub stdout: Option<String>,
}

impl CommandResult {
    /// A failed command; the error chain is rendered on stderr.
    pub fn failure(err: anyhow::Error) -> Self {
        Self {
            exit_code: ExitCode::FAILURE,
            stderr: Some(format!("{} {err:#}", crate::output_utils::RED_X)),
            stdout: None,
        }
    }

    pub fn success(fmt_args: std::fmt::Arguments<'_>) -> Self {
        Self {
            exit_code: ExitCode::SUCCESS,
            stderr: None,
            stdout: Some(format!("{} {fmt_args}", crate::output_utils::GREEN_CHECK)),
        }
    }
}

impl From<anyhow::Result<String>> for CommandResult {
    fn from(result: anyhow::Result<String>) -> Self {
        match result {
            Ok(summary) => Self::success(format_args!("{summary}")),
            Err(err) => Self::failure(err),
        }
    }
}
