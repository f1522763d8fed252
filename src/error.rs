use std::io;

use log::SetLoggerError;
use thiserror::Error;

use crate::grid::GridError;

/// Errors that abort the application before or during a session.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("could not open log file {path}: {source}")]
    LogFile {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("logger already initialised: {0}")]
    Logger(#[from] SetLoggerError),
    #[error("invalid grid: {0}")]
    Grid(#[from] GridError),
}
