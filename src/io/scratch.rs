//! Scoped scratch files for handing images to the external tool.
//!
//! A `ScratchFile` owns one uniquely named file created through the `tempfile`
//! crate. The file is removed by `release`, or by `Drop` if the owner never
//! released it, so every exit path of a transform cleans up after itself.
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

#[derive(Debug)]
pub struct ScratchFile {
    path: PathBuf,
    file: Option<NamedTempFile>,
}

impl ScratchFile {
    /// Create an empty file named `<prefix><random>.<extension>` in `dir`, or in
    /// the OS temp directory when `dir` is `None`.
    pub fn allocate(prefix: &str, extension: &str, dir: Option<&Path>) -> io::Result<Self> {
        let suffix = format!(".{}", extension.trim_start_matches('.'));
        let mut builder = tempfile::Builder::new();
        builder.prefix(prefix).suffix(&suffix);
        let file = match dir {
            Some(dir) => builder.tempfile_in(dir)?,
            None => builder.tempfile()?,
        };
        let path = file.path().to_path_buf();
        debug!("Allocated scratch file {:?}", path);
        Ok(Self {
            path,
            file: Some(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_released(&self) -> bool {
        self.file.is_none()
    }

    /// Writable handle to the file; fails once the file has been released.
    pub fn as_file_mut(&mut self) -> io::Result<&mut File> {
        match self.file.as_mut() {
            Some(file) => Ok(file.as_file_mut()),
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("scratch file {:?} already released", self.path),
            )),
        }
    }

    /// Delete the file. Calling this again, or after something else removed
    /// the file, is a no-op.
    pub fn release(&mut self) -> io::Result<()> {
        let Some(file) = self.file.take() else {
            return Ok(());
        };
        match file.close() {
            Ok(()) => {
                debug!("Released scratch file {:?}", self.path);
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }
}
