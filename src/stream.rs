use std::io::{self, ErrorKind, SeekFrom};
use std::path::Path;

/// How a [`Stream`] is opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// read only, the file must exist
    Read,
    /// read and write, the file must exist
    ReadWrite,
    /// read and write, the file is created if missing and truncated otherwise
    Create,
}

impl Mode {
    /// Whether writes are allowed in this mode.
    pub fn is_writable(self) -> bool {
        !matches!(self, Mode::Read)
    }
}

/// The capability set of a byte-addressable backend.
///
/// All offsets are physical offsets of the backend itself. Implementors are
/// expected to fill the whole buffer in [`Stream::read`] unless the end of
/// the data has been reached; a short read is interpreted as end of stream.
pub trait Stream {
    fn open(&mut self, path: &Path, mode: Mode) -> io::Result<()>;

    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize>;

    /// Writes at most `buf.len()` bytes and returns how many were accepted.
    /// `Ok(0)` for a non-empty `buf` means the backend cannot take more data.
    fn write(&mut self, buf: &[u8]) -> io::Result<usize>;

    fn tell(&mut self) -> io::Result<u64>;

    /// Moves the backend cursor and returns the new position.
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64>;

    fn close(&mut self) -> io::Result<()>;

    /// Kind of the last error this stream reported, if any.
    fn error(&self) -> Option<ErrorKind>;
}

impl<S> Stream for Box<S>
where
    S: Stream + ?Sized,
{
    fn open(&mut self, path: &Path, mode: Mode) -> io::Result<()> {
        (**self).open(path, mode)
    }

    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        (**self).read(buf)
    }

    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        (**self).write(buf)
    }

    fn tell(&mut self) -> io::Result<u64> {
        (**self).tell()
    }

    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        (**self).seek(pos)
    }

    fn close(&mut self) -> io::Result<()> {
        (**self).close()
    }

    fn error(&self) -> Option<ErrorKind> {
        (**self).error()
    }
}

impl<S> Stream for &mut S
where
    S: Stream + ?Sized,
{
    fn open(&mut self, path: &Path, mode: Mode) -> io::Result<()> {
        (**self).open(path, mode)
    }

    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        (**self).read(buf)
    }

    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        (**self).write(buf)
    }

    fn tell(&mut self) -> io::Result<u64> {
        (**self).tell()
    }

    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        (**self).seek(pos)
    }

    fn close(&mut self) -> io::Result<()> {
        (**self).close()
    }

    fn error(&self) -> Option<ErrorKind> {
        (**self).error()
    }
}

/// Remembers the kind of a failed result in `last`.
pub(crate) fn track<T>(last: &mut Option<ErrorKind>, res: io::Result<T>) -> io::Result<T> {
    if let Err(why) = &res {
        *last = Some(why.kind());
    }
    res
}

/// Keeps reading until `buf` is full or `read` returns 0.
pub(crate) fn read_full<F>(buf: &mut [u8], mut read: F) -> io::Result<usize>
where
    F: FnMut(&mut [u8]) -> io::Result<usize>,
{
    let mut bytes_read = 0;
    while bytes_read < buf.len() {
        match read(&mut buf[bytes_read..]) {
            Ok(0) => break,
            Ok(bytes) => bytes_read += bytes,
            Err(why) if why.kind() == ErrorKind::Interrupted => continue,
            Err(why) => return Err(why),
        }
    }
    Ok(bytes_read)
}

pub(crate) fn not_open() -> io::Error {
    io::Error::new(ErrorKind::NotConnected, "stream is not open")
}
