use std::ops::{Deref, DerefMut};
use std::path::Path;

use crate::error::FileResult;
use crate::handle::FileHandle;
use crate::mode::AccessMode;

/// Ownership guard tying a [`FileHandle`]'s release to scope exit.
///
/// Construction acquires the descriptor; dropping the guard releases it, even
/// when the scope unwinds through an error. Release is idempotent, so an
/// explicit [`release`](FileHandle::release) before the drop is tolerated.
#[derive(Debug)]
pub struct ScopedFile {
    handle: FileHandle,
}

impl ScopedFile {
    /// Constructs a handle from a mode string and acquires it in one step.
    pub fn open(path: impl AsRef<Path>, mode: &str) -> FileResult<Self> {
        let mut handle = FileHandle::new(path, mode)?;
        handle.acquire()?;
        Ok(Self { handle })
    }

    /// Like [`open`](Self::open), for callers that already resolved the mode.
    pub fn open_with_mode(path: impl AsRef<Path>, mode: AccessMode) -> FileResult<Self> {
        let mut handle = FileHandle::with_mode(path, mode)?;
        handle.acquire()?;
        Ok(Self { handle })
    }
}

impl Deref for ScopedFile {
    type Target = FileHandle;

    fn deref(&self) -> &Self::Target {
        &self.handle
    }
}

impl DerefMut for ScopedFile {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.handle
    }
}

impl Drop for ScopedFile {
    fn drop(&mut self) {
        self.handle.release();
    }
}

/// Runs `op` against a freshly acquired handle, releasing on every exit path.
pub fn with_file<T>(
    path: impl AsRef<Path>,
    mode: &str,
    op: impl FnOnce(&mut FileHandle) -> FileResult<T>,
) -> FileResult<T> {
    let mut scope = ScopedFile::open(path, mode)?;
    op(&mut scope)
}
