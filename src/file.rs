//! [`Stream`] backend for files in the local filesystem

use std::fs::{File, OpenOptions};
use std::io::{self, ErrorKind, Read, Seek, SeekFrom, Write};
use std::path::Path;

use crate::stream::{not_open, read_full, track, Mode, Stream};

/// A [`File`] behind the [`Stream`] interface.
#[derive(Debug, Default)]
pub struct FileStream {
    file: Option<File>,
    last_error: Option<ErrorKind>,
}

impl FileStream {
    /// Creates a stream which has to be opened with [`Stream::open`] before use.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.file.is_some()
    }

    fn with_file<T, F>(&mut self, op: F) -> io::Result<T>
    where
        F: FnOnce(&mut File) -> io::Result<T>,
    {
        let res = match self.file.as_mut() {
            Some(file) => op(file),
            None => Err(not_open()),
        };
        track(&mut self.last_error, res)
    }
}

impl From<File> for FileStream {
    fn from(file: File) -> Self {
        Self {
            file: Some(file),
            last_error: None,
        }
    }
}

impl Stream for FileStream {
    fn open(&mut self, path: &Path, mode: Mode) -> io::Result<()> {
        let mut options = OpenOptions::new();
        match mode {
            Mode::Read => options.read(true),
            Mode::ReadWrite => options.read(true).write(true),
            Mode::Create => options.read(true).write(true).create(true).truncate(true),
        };
        let file = track(&mut self.last_error, options.open(path))?;
        self.file = Some(file);
        self.last_error = None;
        Ok(())
    }

    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.with_file(|file| read_full(buf, |dst| file.read(dst)))
    }

    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.with_file(|file| file.write(buf))
    }

    fn tell(&mut self) -> io::Result<u64> {
        self.with_file(|file| file.stream_position())
    }

    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.with_file(|file| file.seek(pos))
    }

    fn close(&mut self) -> io::Result<()> {
        match self.file.take() {
            Some(mut file) => track(&mut self.last_error, file.flush()),
            None => Ok(()),
        }
    }

    fn error(&self) -> Option<ErrorKind> {
        self.last_error
    }
}
