use std::{
    fs::File,
    io::{self, Read},
    path::Path,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenMode {
    ReadBinary,
}

/// The file operations resource loading is built on.
///
/// `Handle` is scoped: dropping it releases whatever the implementation
/// opened, so callers can bail out at any point without leaking it.
pub trait FileSystem {
    type Handle;

    fn open(&self, path: &Path, mode: OpenMode) -> io::Result<Self::Handle>;

    /// Size of the underlying file in bytes, as it is on disk right now.
    fn size(&self, handle: &mut Self::Handle) -> io::Result<u64>;

    /// One bulk read into `buf`. Returns how many bytes were transferred,
    /// which is less than `buf.len()` only if the file ran out or failed.
    fn read(&self, handle: &mut Self::Handle, buf: &mut [u8]) -> io::Result<usize>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NativeFileSystem;

impl FileSystem for NativeFileSystem {
    type Handle = File;

    fn open(&self, path: &Path, mode: OpenMode) -> io::Result<File> {
        match mode {
            OpenMode::ReadBinary => File::open(path),
        }
    }

    fn size(&self, handle: &mut File) -> io::Result<u64> {
        Ok(handle.metadata()?.len())
    }

    fn read(&self, handle: &mut File, buf: &mut [u8]) -> io::Result<usize> {
        let mut filled = 0;
        while filled < buf.len() {
            match handle.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) if filled > 0 => {
                    log::debug!("Bulk read stopped after {filled} bytes: {e}");
                    break;
                }
                Err(e) => return Err(e),
            }
        }
        Ok(filled)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn size_reports_on_disk_length() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"0123456789").unwrap();
        file.flush().unwrap();

        let fs = NativeFileSystem;
        let mut handle = fs.open(file.path(), OpenMode::ReadBinary).unwrap();
        assert_eq!(fs.size(&mut handle).unwrap(), 10);
    }

    #[test]
    fn read_fills_the_whole_buffer() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"hello world!").unwrap();
        file.flush().unwrap();

        let fs = NativeFileSystem;
        let mut handle = fs.open(file.path(), OpenMode::ReadBinary).unwrap();
        let mut buf = vec![0; 12];
        assert_eq!(fs.read(&mut handle, &mut buf).unwrap(), 12);
        assert_eq!(buf, b"hello world!");
    }

    #[test]
    fn read_past_end_reports_short_count() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"abc").unwrap();
        file.flush().unwrap();

        let fs = NativeFileSystem;
        let mut handle = fs.open(file.path(), OpenMode::ReadBinary).unwrap();
        let mut buf = vec![0; 8];
        assert_eq!(fs.read(&mut handle, &mut buf).unwrap(), 3);
    }

    #[test]
    fn open_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = NativeFileSystem
            .open(&dir.path().join("missing.fx"), OpenMode::ReadBinary)
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
