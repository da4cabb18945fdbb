use thiserror::Error;

use crate::extract::State;

#[derive(Error, Debug)]
pub enum ExtractError {
    /// Input ran out mid-function. File-scoped: the scanner reports it and
    /// moves on to the next file.
    #[error("unexpected end of input while {state}")]
    UnexpectedEof { state: State },
}
