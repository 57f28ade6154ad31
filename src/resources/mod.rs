use std::path::{Path, PathBuf};

pub mod error;
pub mod fs;
pub mod path;

pub use error::{ReadTarget, ResourceError};
pub use fs::{FileSystem, NativeFileSystem, OpenMode};

/// Loads bundled resource files from beneath `base_dir`.
///
/// Every load is all-or-nothing: either the whole file comes back, exactly
/// as long as it was when opened, or nothing does and a single error is
/// logged naming the file.
#[derive(Debug, Clone)]
pub struct Resources<F = NativeFileSystem> {
    base_dir: PathBuf,
    fs: F,
}

impl Resources {
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self::with_file_system(base_dir, NativeFileSystem)
    }
}

impl<F: FileSystem> Resources<F> {
    pub fn with_file_system(base_dir: impl AsRef<Path>, fs: F) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_owned(),
            fs,
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn resolve(&self, filename: impl AsRef<Path>) -> PathBuf {
        path::resolve(&self.base_dir, filename)
    }

    /// Whole file as bytes, or `None` if it couldn't be opened or read.
    pub fn read_binary(&self, filename: impl AsRef<Path>) -> Option<Vec<u8>> {
        self.load_binary(filename).ok()
    }

    /// Whole file as text, or `None` if it couldn't be opened or read.
    ///
    /// The bytes are copied as-is, never lossily converted. A `String` can
    /// only hold UTF-8, so a file that isn't UTF-8 also comes back as `None`
    /// (use [`Resources::read_binary`] for those).
    pub fn read_string(&self, filename: impl AsRef<Path>) -> Option<String> {
        self.load_string(filename).ok()
    }

    pub fn load_binary(&self, filename: impl AsRef<Path>) -> Result<Vec<u8>, ResourceError> {
        self.read_whole(filename.as_ref(), ReadTarget::Raw)
            .inspect_err(report)
    }

    pub fn load_string(&self, filename: impl AsRef<Path>) -> Result<String, ResourceError> {
        let filename = filename.as_ref();
        self.read_whole(filename, ReadTarget::String)
            .and_then(|bytes| {
                String::from_utf8(bytes).map_err(|source| ResourceError::InvalidUtf8 {
                    filename: filename.display().to_string(),
                    source,
                })
            })
            .inspect_err(report)
    }

    fn read_whole(&self, filename: &Path, target: ReadTarget) -> Result<Vec<u8>, ResourceError> {
        let name = || filename.display().to_string();
        let path = self.resolve(filename);

        let mut handle = self
            .fs
            .open(&path, OpenMode::ReadBinary)
            .map_err(|source| ResourceError::Open {
                filename: name(),
                source,
            })?;

        let size = self
            .fs
            .size(&mut handle)
            .map_err(|source| ResourceError::Size {
                filename: name(),
                target,
                source,
            })?;
        let len = usize::try_from(size).map_err(|_| ResourceError::TooLarge {
            filename: name(),
            target,
            size,
        })?;

        let mut buffer = Vec::new();
        buffer
            .try_reserve_exact(len)
            .map_err(|_| ResourceError::TooLarge {
                filename: name(),
                target,
                size,
            })?;
        buffer.resize(len, 0u8);
        let read = self
            .fs
            .read(&mut handle, &mut buffer)
            .map_err(|source| ResourceError::Io {
                filename: name(),
                target,
                source,
            })?;
        if read != len {
            return Err(ResourceError::Read {
                filename: name(),
                target,
                expected: size,
                read,
            });
        }

        log::debug!("Loaded {len} bytes from {}", path.display());
        Ok(buffer)
    }
}

fn report(err: &ResourceError) {
    log::error!("{err}");
    match err {
        ResourceError::Read { expected, read, .. } => {
            log::debug!("Expected {expected} bytes, got {read}");
        }
        ResourceError::TooLarge { size, .. } => {
            log::debug!("{size} bytes does not fit in memory");
        }
        _ => {
            if let Some(source) = std::error::Error::source(err) {
                log::debug!("Caused by: {source}");
            }
        }
    }
}
