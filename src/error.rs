use std::process::ExitStatus;
use thiserror::Error;

/// Failure of a single external tool invocation.
///
/// Every variant is recovered inside [`crate::git::query_command`]; nothing
/// here can fail a consumer's build.
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("failed to launch command: {0}")]
    Launch(#[from] std::io::Error),

    #[error("command exited with {0}")]
    Status(ExitStatus),

    #[error("command output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

pub type Result<T> = std::result::Result<T, CommandError>;
