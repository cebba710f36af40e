//! Scoped file handles over raw OS file operations.
//!
//! A [`FileHandle`] owns at most one descriptor for the duration of a
//! well-defined scope: a symbolic [`AccessMode`] is resolved once at
//! construction, the descriptor is opened (and created, when the mode allows
//! it) on acquire, and release is guaranteed on every exit path by the
//! [`ScopedFile`] guard. All text I/O is UTF-8.
//!
//! ```no_run
//! use scopedfile::{FileResult, ScopedFile};
//!
//! fn main() -> FileResult<()> {
//!     let mut file = ScopedFile::open("out.txt", "w+")?;
//!     file.write("Hello, World!\n")?;
//!     let text = file.read(64)?;
//!     println!("{text}");
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod handle;
pub mod mode;
pub mod scope;

pub use error::{FileError, FileResult};
pub use handle::{DEFAULT_READ_SIZE, FileHandle};
pub use mode::AccessMode;
pub use scope::{ScopedFile, with_file};
