mod extract;
mod io;
mod process;

pub use extract::ExtractError;
pub use io::IoError;
pub use process::ProcessError;

use thiserror::Error;

use crate::buffer::AllocError;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] IoError),

    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error(transparent)]
    Process(#[from] ProcessError),

    #[error(transparent)]
    Alloc(#[from] AllocError),
}

pub type Result<T> = std::result::Result<T, Error>;
