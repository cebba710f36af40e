use std::io;
use std::path::PathBuf;
use std::string::FromUtf8Error;

use thiserror::Error;

use crate::mode::AccessMode;

pub type FileResult<T> = Result<T, FileError>;

#[derive(Error, Debug)]
pub enum FileError {
    #[error("invalid mode {0:?} (expected one of \"r\", \"w\", \"a\", \"r+\", \"w+\")")]
    InvalidMode(String),
    #[error("path must not be empty")]
    EmptyPath,
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("file {} is not writable in mode \"{mode}\"", .path.display())]
    NotWritable { path: PathBuf, mode: AccessMode },
    #[error("file {} is not readable in mode \"{mode}\"", .path.display())]
    NotReadable { path: PathBuf, mode: AccessMode },
    #[error("handle for {} was already released", .0.display())]
    Released(PathBuf),
    #[error("read bytes are not valid UTF-8: {0}")]
    Decode(#[from] FromUtf8Error),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
