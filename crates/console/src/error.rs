use core_types::CoreError;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConsoleError {
    /// The user typed something that failed a precondition check. The menu
    /// reports it and carries on.
    #[error("{0}")]
    Invalid(#[from] CoreError),

    /// Standard input reached end of file.
    #[error("input closed")]
    InputClosed,

    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),
}
