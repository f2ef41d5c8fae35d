use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("browser launch failed: {0}")]
    Launch(String),
}

pub type Result<T> = std::result::Result<T, Error>;
