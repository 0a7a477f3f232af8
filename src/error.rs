use std::io;
use thiserror::Error;

/// Failures the command layer reports to the user without aborting.
///
/// Anything else (unreadable store, malformed JSON, missing home directory)
/// travels as a plain `anyhow::Error` and ends the process with a non-zero
/// status.
#[derive(Debug, Error)]
pub enum SeeError {
    #[error("alias '{0}' not found")]
    NotFound(String),
    #[error("usage: {0}")]
    Arity(&'static str),
    #[error("unknown option '{0}', type see -h for help")]
    UnknownOption(String),
    #[error(transparent)]
    Launch(#[from] LaunchError),
}

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("unsupported platform: {0}")]
    Unsupported(String),
    #[error("failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Error)]
#[error("unable to resolve home directory")]
pub struct ConfigError;
