use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NcrError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error in {path}: {message}")]
    TomlParse { path: PathBuf, message: String },

    #[error("Config file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("Malformed character reference '{reference}' at byte {offset}")]
    MalformedReference { offset: usize, reference: String },

    #[error("Character reference at byte {offset} names invalid code point {value:#x}")]
    InvalidCodePoint { offset: usize, value: u32 },

    #[error("Unknown entity: {name}")]
    UnknownEntity { name: String },
}

pub type Result<T> = std::result::Result<T, NcrError>;
