use std::fmt;
use std::str::FromStr;

use crate::error::FileError;

/// Symbolic access policy selected by the caller at construction time.
///
/// Resolved once from a mode string; every later operation dispatches on the
/// enum and never compares strings again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessMode {
    /// `"r"`: read-only; the file must already exist.
    Read,
    /// `"w"`: write-only; created if absent.
    Write,
    /// `"a"`: write-only at end-of-file; created if absent.
    Append,
    /// `"r+"` / `"w+"`: read and write; created if absent.
    ///
    /// The two spellings are equivalent and collapse into this one variant.
    ReadWrite,
}

impl AccessMode {
    pub fn allows_read(&self) -> bool {
        matches!(self, Self::Read | Self::ReadWrite)
    }

    pub fn allows_write(&self) -> bool {
        *self != Self::Read
    }

    /// Whether acquisition may create the file when the path does not exist.
    pub fn creates_if_missing(&self) -> bool {
        self.allows_write()
    }
}

impl FromStr for AccessMode {
    type Err = FileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "r" => Ok(Self::Read),
            "w" => Ok(Self::Write),
            "a" => Ok(Self::Append),
            "r+" | "w+" => Ok(Self::ReadWrite),
            _ => Err(FileError::InvalidMode(s.to_string())),
        }
    }
}

impl fmt::Display for AccessMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Read => "r",
            Self::Write => "w",
            Self::Append => "a",
            Self::ReadWrite => "r+",
        };
        f.write_str(s)
    }
}
