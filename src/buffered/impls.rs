use std::io::{self, ErrorKind, Read, Seek, SeekFrom, Write};
use std::path::Path;

use crate::observer::Observer;
use crate::stream::{Mode, Stream};

use super::BufStream;

/// A [`BufStream`] is a [`Stream`] itself, so buffered streams can be stacked.
impl<S, O> Stream for BufStream<S, O>
where
    S: Stream,
    O: Observer,
{
    fn open(&mut self, path: &Path, mode: Mode) -> io::Result<()> {
        Ok(BufStream::open(self, path, mode)?)
    }

    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        Ok(BufStream::read(self, buf)?)
    }

    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Ok(BufStream::write(self, buf)?)
    }

    fn tell(&mut self) -> io::Result<u64> {
        Ok(BufStream::tell(self)?)
    }

    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        Ok(BufStream::seek(self, pos)?)
    }

    fn close(&mut self) -> io::Result<()> {
        Ok(BufStream::close(self)?)
    }

    fn error(&self) -> Option<ErrorKind> {
        BufStream::error(self)
    }
}

impl<S, O> Read for BufStream<S, O>
where
    S: Stream,
    O: Observer,
{
    fn read(&mut self, dst: &mut [u8]) -> io::Result<usize> {
        Ok(BufStream::read(self, dst)?)
    }
}

impl<S, O> Write for BufStream<S, O>
where
    S: Stream,
    O: Observer,
{
    fn write(&mut self, src: &[u8]) -> io::Result<usize> {
        Ok(BufStream::write(self, src)?)
    }

    fn flush(&mut self) -> io::Result<()> {
        BufStream::flush(self)?;
        Ok(())
    }
}

impl<S, O> Seek for BufStream<S, O>
where
    S: Stream,
    O: Observer,
{
    fn seek(&mut self, seek_from: SeekFrom) -> io::Result<u64> {
        Ok(BufStream::seek(self, seek_from)?)
    }

    fn stream_position(&mut self) -> io::Result<u64> {
        Ok(self.position())
    }
}
