//! Writing planned files to disk.

use std::fs::{self, File};
use std::io::{self, BufWriter, Read};

use tracing::debug;

use treegen_core::{FileSpec, GenError};

/// Materializes [`FileSpec`]s as files on disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileWriter {
    sync: bool,
}

impl FileWriter {
    /// Create a writer; `sync` forces each file to stable storage.
    pub fn new(sync: bool) -> Self {
        Self { sync }
    }

    /// Whether files are synced before closing.
    pub fn syncs(&self) -> bool {
        self.sync
    }

    /// Write one file of `spec.size` bytes taken from `content`.
    ///
    /// The parent directory is created if needed. An existing file at the
    /// same path is truncated and overwritten.
    pub fn write<C: Read + ?Sized>(&self, spec: &FileSpec, content: &mut C) -> Result<u64, GenError> {
        let path = spec.path();
        debug!("Making {} size {}", path.display(), spec.size);

        fs::create_dir_all(&spec.dir).map_err(|source| GenError::CreateDirectory {
            path: spec.dir.clone(),
            source,
        })?;

        let file = File::create(&path).map_err(|source| GenError::CreateFile {
            path: path.clone(),
            source,
        })?;
        let mut out = BufWriter::new(file);

        let mut limited = (&mut *content).take(spec.size);
        let written = io::copy(&mut limited, &mut out).map_err(|source| GenError::Write {
            path: path.clone(),
            size: spec.size,
            source,
        })?;
        if written != spec.size {
            return Err(GenError::ShortWrite {
                path,
                expected: spec.size,
                written,
            });
        }

        // Unwrapping flushes the buffer.
        let file = out.into_inner().map_err(|err| GenError::Close {
            path: path.clone(),
            source: err.into_error(),
        })?;

        if self.sync {
            file.sync_all()
                .map_err(|source| GenError::Sync { path, source })?;
        }

        Ok(written)
    }
}
