//! Instrumented backend shared by the integration tests
#![allow(dead_code)]

use std::io::{self, ErrorKind, SeekFrom};
use std::path::Path;

use buf_stream::{BufStream, Config, MemStream, Mode, Stream};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Calls {
    pub reads: usize,
    pub writes: usize,
    pub seeks: usize,
    pub tells: usize,
    pub closes: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fail {
    Read,
    Write,
    Seek,
}

/// Counts the calls reaching the wrapped stream and injects faults.
pub struct Probe<S> {
    pub inner: S,
    pub calls: Calls,
    /// upper limit of bytes taken per write call
    pub max_write: Option<usize>,
    /// total number of bytes accepted before every write returns 0
    pub accept: Option<usize>,
    pub fail: Option<Fail>,
    last_error: Option<ErrorKind>,
}

impl<S> Probe<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            calls: Calls::default(),
            max_write: None,
            accept: None,
            fail: None,
            last_error: None,
        }
    }

    fn check(&mut self, op: Fail) -> io::Result<()> {
        if self.fail == Some(op) {
            self.last_error = Some(ErrorKind::Other);
            return Err(io::Error::new(ErrorKind::Other, format!("{:?} failed", op)));
        }
        Ok(())
    }
}

impl<S> Stream for Probe<S>
where
    S: Stream,
{
    fn open(&mut self, path: &Path, mode: Mode) -> io::Result<()> {
        self.inner.open(path, mode)
    }

    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.calls.reads += 1;
        self.check(Fail::Read)?;
        self.inner.read(buf)
    }

    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.calls.writes += 1;
        self.check(Fail::Write)?;
        let mut len = buf.len();
        if let Some(max) = self.max_write {
            len = len.min(max);
        }
        if let Some(accept) = self.accept.as_mut() {
            len = len.min(*accept);
            *accept -= len;
        }
        if len == 0 {
            return Ok(0);
        }
        self.inner.write(&buf[..len])
    }

    fn tell(&mut self) -> io::Result<u64> {
        self.calls.tells += 1;
        self.inner.tell()
    }

    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.calls.seeks += 1;
        self.check(Fail::Seek)?;
        self.inner.seek(pos)
    }

    fn close(&mut self) -> io::Result<()> {
        self.calls.closes += 1;
        self.inner.close()
    }

    fn error(&self) -> Option<ErrorKind> {
        self.last_error.or_else(|| self.inner.error())
    }
}

pub type Probed = BufStream<Probe<MemStream>, ()>;

/// A buffered in-memory stream holding `data`, positioned at 0.
pub fn probed(data: &[u8], capacity: usize) -> Probed {
    BufStream::with_config(
        Probe::new(MemStream::from(data)),
        Config { capacity },
        (),
    )
    .unwrap()
}

pub fn calls(stream: &Probed) -> Calls {
    stream.get_ref().calls
}

/// Bytes that reached the backend so far.
pub fn content(stream: &Probed) -> &[u8] {
    stream.get_ref().inner.get_ref()
}
