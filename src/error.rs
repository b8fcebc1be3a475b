use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("cannot read material file {}: {source}", path.display())]
    MaterialUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings file {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    #[error("invalid texture pattern: {0}")]
    Pattern(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
