use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The first token did not name a known mode. Leading dashes are dropped when displayed.
    #[error("invalid option -- '{}'", .0.trim_start_matches('-'))]
    InvalidOption(String),

    #[error("invalid argument for option -- '{0}'")]
    InvalidArgument(&'static str),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Usage errors exit with 2, anything that happens after parsing with 1.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::InvalidOption(_) | Error::InvalidArgument(_) => 2,
            Error::Io(_) => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
