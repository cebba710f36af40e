use std::fs::{File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::{FileError, FileResult};
use crate::mode::AccessMode;

/// Read window used by [`FileHandle::read_default`].
pub const DEFAULT_READ_SIZE: usize = 1024;

/// Exclusive owner of at most one OS descriptor between acquire and release.
///
/// The lifecycle is strictly linear: constructed, acquired, released. A
/// released handle cannot be acquired again; construct a new one for a new
/// scope. In read-write mode the handle keeps independent read and write
/// cursors (both starting at offset 0), so data written earlier in the scope
/// can be read back without a positioning API. Append mode always writes at
/// end-of-file.
#[derive(Debug)]
pub struct FileHandle {
    path: PathBuf,
    mode: AccessMode,
    descriptor: Option<File>,
    released: bool,
    read_pos: u64,
    write_pos: u64,
}

impl FileHandle {
    /// Validates `mode` and resolves `path` to an absolute form.
    ///
    /// No I/O is performed until [`acquire`](Self::acquire); an unrecognized
    /// mode or an empty path fails here, before the filesystem is touched.
    pub fn new(path: impl AsRef<Path>, mode: &str) -> FileResult<Self> {
        Self::with_mode(path, mode.parse()?)
    }

    /// Like [`new`](Self::new), for callers that already resolved the mode.
    pub fn with_mode(path: impl AsRef<Path>, mode: AccessMode) -> FileResult<Self> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(FileError::EmptyPath);
        }
        // Resolves against the working directory without touching the
        // filesystem; existence is checked at acquire time.
        let path = std::path::absolute(path)?;
        Ok(Self {
            path,
            mode,
            descriptor: None,
            released: false,
            read_pos: 0,
            write_pos: 0,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn mode(&self) -> AccessMode {
        self.mode
    }

    pub fn is_open(&self) -> bool {
        self.descriptor.is_some()
    }

    /// Opens the underlying file, creating it when the mode allows creation.
    ///
    /// A read-only acquire of a missing path fails with [`FileError::NotFound`]
    /// and never creates it. Acquiring an already-open handle is a no-op;
    /// acquiring after [`release`](Self::release) fails with
    /// [`FileError::Released`].
    pub fn acquire(&mut self) -> FileResult<()> {
        if self.descriptor.is_some() {
            return Ok(());
        }
        if self.released {
            return Err(FileError::Released(self.path.clone()));
        }
        let mut options = OpenOptions::new();
        options
            .read(self.mode.allows_read())
            .create(self.mode.creates_if_missing());
        match self.mode {
            AccessMode::Append => {
                options.append(true);
            }
            AccessMode::Write | AccessMode::ReadWrite => {
                options.write(true);
            }
            AccessMode::Read => {}
        }
        let file = options.open(&self.path).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                FileError::NotFound(self.path.clone())
            } else {
                FileError::Io(e)
            }
        })?;
        self.descriptor = Some(file);
        Ok(())
    }

    /// Closes the held descriptor; a no-op when none is held.
    ///
    /// Idempotent and infallible: release runs during failure unwinding and
    /// must never mask the original error. Dropping a [`File`] swallows close
    /// errors, so write-capable handles are flushed first and a flush failure
    /// is logged instead of propagated.
    pub fn release(&mut self) {
        let Some(file) = self.descriptor.take() else {
            return;
        };
        self.released = true;
        if self.mode.allows_write() {
            if let Err(e) = file.sync_all() {
                warn!(path = %self.path.display(), error = %e, "flush on release failed");
            }
        }
    }

    /// Writes `data` as UTF-8 bytes through the held descriptor.
    ///
    /// Fails with [`FileError::NotWritable`] when the mode forbids writing or
    /// the handle is not currently acquired; the descriptor (if any) stays
    /// open in either case.
    pub fn write(&mut self, data: &str) -> FileResult<()> {
        let pos = self.write_pos;
        let append = self.mode == AccessMode::Append;
        let bytes = data.as_bytes();
        let file = self.writable()?;
        if append {
            file.write_all(bytes)?;
        } else {
            file.seek(SeekFrom::Start(pos))?;
            file.write_all(bytes)?;
            self.write_pos = pos + bytes.len() as u64;
        }
        Ok(())
    }

    /// Reads up to `max_bytes` from the read cursor and decodes them as UTF-8.
    ///
    /// Returns an empty string at end-of-file. Fails with
    /// [`FileError::Decode`] when the byte window ends mid-codepoint; the read
    /// cursor does not advance then, so retrying with a larger window re-reads
    /// from the same offset.
    pub fn read(&mut self, max_bytes: usize) -> FileResult<String> {
        let pos = self.read_pos;
        let file = self.readable()?;
        file.seek(SeekFrom::Start(pos))?;
        let mut buffer = vec![0u8; max_bytes];
        let mut filled = 0;
        while filled < max_bytes {
            match file.read(&mut buffer[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
        buffer.truncate(filled);
        let text = String::from_utf8(buffer)?;
        self.read_pos = pos + filled as u64;
        Ok(text)
    }

    /// [`read`](Self::read) with the fixed [`DEFAULT_READ_SIZE`] window.
    pub fn read_default(&mut self) -> FileResult<String> {
        self.read(DEFAULT_READ_SIZE)
    }

    fn writable(&mut self) -> FileResult<&mut File> {
        if self.mode.allows_write() {
            if let Some(file) = self.descriptor.as_mut() {
                return Ok(file);
            }
        }
        Err(FileError::NotWritable {
            path: self.path.clone(),
            mode: self.mode,
        })
    }

    fn readable(&mut self) -> FileResult<&mut File> {
        if self.mode.allows_read() {
            if let Some(file) = self.descriptor.as_mut() {
                return Ok(file);
            }
        }
        Err(FileError::NotReadable {
            path: self.path.clone(),
            mode: self.mode,
        })
    }
}
