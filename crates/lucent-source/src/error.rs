use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Process(#[from] lucent_core::Error),

    #[error("neither Mercurial (hg) nor curl is available to fetch the source")]
    NoFetchStrategy,

    #[error("download failed: {0}")]
    Download(String),

    #[error("failed to apply patch {name}: {source}")]
    Patch {
        name: String,
        source: lucent_core::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
