//! The buffering adapter
//!
//! [`BufStream`] keeps two independent linear caches in front of a
//! [`Stream`]: one for reading, one for writing. `position` always holds the
//! physical position of the backend, and the logical position seen by the
//! caller is derived from it:
//!
//!  - while the read cache holds data, the backend sits right behind the end
//!    of that data, so unread bytes have to be subtracted
//!  - while the write cache holds data, the backend sits at the start of that
//!    data, so the write cursor has to be added
//!
//! Only one of both caches holds data when a public method returns.

mod impls;
mod read;
mod seek;
mod write;

use std::io::{ErrorKind, SeekFrom};
use std::path::Path;

use log::warn;

use crate::cache::{Cache, CacheStats, Stats};
use crate::consts::DEFAULT_CAPACITY;
use crate::error::{Error, Result};
use crate::file::FileStream;
use crate::observer::{Event, LogObserver, Observer};
use crate::stream::{Mode, Stream};

/// Initialization parameters of a [`BufStream`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// size in bytes of the read cache and of the write cache
    pub capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

pub struct BufStream<S, O = LogObserver>
where
    S: Stream,
    O: Observer,
{
    inner: S,
    observer: O,
    read: Cache,
    write: Cache,
    position: u64,
}

impl<S> BufStream<S>
where
    S: Stream,
{
    /// Wraps `inner` using the default capacity and reporting to the [`log`] facade.
    /// `inner` is expected to be positioned at offset 0.
    pub fn new(inner: S) -> Self {
        Self::build(inner, DEFAULT_CAPACITY, LogObserver)
    }

    /// Creates a new BufStream with a specified `capacity`, which is used for
    /// both the read and the write cache.
    pub fn with_capacity(inner: S, capacity: usize) -> Result<Self> {
        Self::with_config(inner, Config { capacity }, LogObserver)
    }
}

impl BufStream<FileStream> {
    /// Opens the file at `path` and wraps it.
    pub fn open_file(path: impl AsRef<Path>, mode: Mode) -> Result<Self> {
        let mut stream = Self::new(FileStream::new());
        stream.open(path, mode)?;
        Ok(stream)
    }
}

impl<S, O> BufStream<S, O>
where
    S: Stream,
    O: Observer,
{
    pub fn with_config(inner: S, config: Config, observer: O) -> Result<Self> {
        if config.capacity == 0 {
            return Err(Error::ZeroCapacity);
        }
        Ok(Self::build(inner, config.capacity, observer))
    }

    fn build(inner: S, capacity: usize, observer: O) -> Self {
        Self {
            inner,
            observer,
            read: Cache::new(capacity),
            write: Cache::new(capacity),
            position: 0,
        }
    }

    /// Opens `path` on the wrapped stream and starts over with empty caches.
    /// Pending writes for a previously opened stream are flushed first.
    pub fn open(&mut self, path: impl AsRef<Path>, mode: Mode) -> Result<()> {
        if !self.write.is_empty() {
            self.flush()?;
        }
        self.inner.open(path.as_ref(), mode)?;
        self.read.clear();
        self.write.clear();
        self.read.stats = CacheStats::default();
        self.write.stats = CacheStats::default();
        self.position = 0;
        self.observer.on_event(&Event::Open);
        Ok(())
    }

    /// Flushes pending writes and closes the wrapped stream. The stream is
    /// closed even if flushing fails; the flush error is reported then.
    pub fn close(&mut self) -> Result<()> {
        let flushed = self.flush_out();
        self.read.clear();
        self.write.clear();
        self.observer.on_event(&Event::Close {
            stats: self.stats(),
        });
        let closed = self.inner.close();
        flushed?;
        closed?;
        Ok(())
    }

    /// Returns the logical position, after asking the backend for its
    /// physical position.
    pub fn tell(&mut self) -> Result<u64> {
        self.position = self.inner.tell()?;
        Ok(self.position())
    }

    /// Returns the logical position as tracked by the adapter, without any
    /// call to the backend.
    pub fn position(&self) -> u64 {
        let mut position = self.position;
        if !self.read.is_empty() {
            position -= self.read.remaining() as u64;
        }
        if !self.write.is_empty() {
            position += self.write.pos() as u64;
        }
        position
    }

    /// Kind of the last error of the wrapped stream.
    pub fn error(&self) -> Option<ErrorKind> {
        self.inner.error()
    }

    pub fn capacity(&self) -> usize {
        self.read.capacity()
    }

    pub fn stats(&self) -> Stats {
        Stats {
            read: self.read.stats,
            write: self.write.stats,
        }
    }

    pub fn get_ref(&self) -> &S {
        &self.inner
    }

    /// Gives mutable access to the wrapped stream. Moving its cursor breaks
    /// the position bookkeeping of the adapter.
    pub fn get_mut(&mut self) -> &mut S {
        &mut self.inner
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Empties both caches after bringing the backend to the logical
    /// position, so that following calls start from a clean state.
    fn invalidate(&mut self) -> Result<()> {
        let flushed = if self.write.is_empty() {
            Ok(())
        } else {
            self.flush().map(drop)
        };
        let rewound = self.rewind_read();
        self.read.clear();
        self.write.clear();
        flushed.and(rewound)
    }

    /// Drops the read cache and moves the backend back behind the last byte
    /// the caller has consumed. If that seek fails, the logical position
    /// falls back to the unchanged physical one.
    fn rewind_read(&mut self) -> Result<()> {
        let unread = self.read.remaining() as u64;
        self.read.clear();
        if unread > 0 {
            self.seek_physical(self.position - unread)?;
        }
        Ok(())
    }

    fn seek_physical(&mut self, offset: u64) -> Result<()> {
        self.position = self.inner.seek(SeekFrom::Start(offset))?;
        Ok(())
    }
}

impl<S, O> Drop for BufStream<S, O>
where
    S: Stream,
    O: Observer,
{
    fn drop(&mut self) {
        if !self.write.is_empty() {
            let pending = self.write.len();
            if let Err(why) = self.flush() {
                warn!("BufStream dropped, lost {} pending bytes: {}", pending, why);
            }
        }
    }
}
