//! In-memory [`Stream`] backend

use std::io::{self, Cursor, ErrorKind, Read, Seek, SeekFrom, Write};
use std::path::Path;

use crate::stream::{not_open, read_full, track, Mode, Stream};

/// A growable byte vector behind the [`Stream`] interface.
///
/// A new `MemStream` is already open in [`Mode::ReadWrite`]; the path passed
/// to [`Stream::open`] is ignored. Writing past the end zero-fills the gap,
/// just like a sparse file would.
#[derive(Debug)]
pub struct MemStream {
    data: Cursor<Vec<u8>>,
    mode: Option<Mode>,
    last_error: Option<ErrorKind>,
}

impl MemStream {
    pub fn new() -> Self {
        Self::from(Vec::new())
    }

    pub fn get_ref(&self) -> &[u8] {
        self.data.get_ref()
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.data.into_inner()
    }

    fn with_data<T, F>(&mut self, write: bool, op: F) -> io::Result<T>
    where
        F: FnOnce(&mut Cursor<Vec<u8>>) -> io::Result<T>,
    {
        let res = match self.mode {
            None => Err(not_open()),
            Some(mode) if write && !mode.is_writable() => Err(io::Error::new(
                ErrorKind::PermissionDenied,
                "stream is opened read only",
            )),
            Some(_) => op(&mut self.data),
        };
        track(&mut self.last_error, res)
    }
}

impl Default for MemStream {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Vec<u8>> for MemStream {
    fn from(data: Vec<u8>) -> Self {
        Self {
            data: Cursor::new(data),
            mode: Some(Mode::ReadWrite),
            last_error: None,
        }
    }
}

impl From<&[u8]> for MemStream {
    fn from(data: &[u8]) -> Self {
        Self::from(data.to_vec())
    }
}

impl Stream for MemStream {
    fn open(&mut self, _path: &Path, mode: Mode) -> io::Result<()> {
        if mode == Mode::Create {
            self.data.get_mut().clear();
        }
        self.data.set_position(0);
        self.mode = Some(mode);
        self.last_error = None;
        Ok(())
    }

    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.with_data(false, |data| read_full(buf, |dst| data.read(dst)))
    }

    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.with_data(true, |data| data.write(buf))
    }

    fn tell(&mut self) -> io::Result<u64> {
        self.with_data(false, |data| Ok(data.position()))
    }

    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.with_data(false, |data| data.seek(pos))
    }

    fn close(&mut self) -> io::Result<()> {
        self.mode = None;
        Ok(())
    }

    fn error(&self) -> Option<ErrorKind> {
        self.last_error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_only_rejects_writes() {
        let mut stream = MemStream::from(&b"abc"[..]);
        stream.open(Path::new("mem"), Mode::Read).unwrap();
        let err = stream.write(b"x").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::PermissionDenied);
        assert_eq!(stream.error(), Some(ErrorKind::PermissionDenied));
        assert_eq!(stream.get_ref(), b"abc");
    }

    #[test]
    fn closed_stream_is_not_connected() {
        let mut stream = MemStream::new();
        stream.close().unwrap();
        let mut buf = [0; 4];
        assert_eq!(
            stream.read(&mut buf).unwrap_err().kind(),
            ErrorKind::NotConnected
        );
    }

    #[test]
    fn create_truncates() {
        let mut stream = MemStream::from(vec![1, 2, 3]);
        stream.open(Path::new("mem"), Mode::Create).unwrap();
        assert!(stream.get_ref().is_empty());
        assert_eq!(stream.write(b"xy").unwrap(), 2);
        assert_eq!(stream.tell().unwrap(), 2);
    }

    #[test]
    fn write_past_end_fills_gap() {
        let mut stream = MemStream::new();
        stream.seek(SeekFrom::Start(3)).unwrap();
        stream.write(b"z").unwrap();
        assert_eq!(stream.into_inner(), vec![0, 0, 0, b'z']);
    }
}
