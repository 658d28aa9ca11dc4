use std::io::{self, ErrorKind};

use crate::error::{Error, Result};
use crate::observer::{Event, Observer};
use crate::stream::Stream;

use super::BufStream;

impl<S, O> BufStream<S, O>
where
    S: Stream,
    O: Observer,
{
    /// Copies `src` into the write cache, flushing it whenever it runs full.
    ///
    /// Returns `src.len()`, or `0` if the backend stopped accepting data
    /// while flushing. The latter is fatal for the stream: the cache keeps
    /// whatever could not be written.
    pub fn write(&mut self, src: &[u8]) -> Result<usize> {
        if !self.read.is_empty() {
            self.switch_to_write()?;
        }

        let mut written = 0;
        while written < src.len() {
            let bytes = self.write.put(&src[written..]);
            if bytes == 0 {
                if self.flush_cache()? == 0 {
                    return Ok(0);
                }
                continue;
            }
            written += bytes;
        }
        Ok(written)
    }

    /// Writes the whole write cache to the backend and returns the number of
    /// bytes written. Afterwards the backend is at the logical position.
    ///
    /// If the backend fails or stops accepting data, both caches are cleared
    /// and the error is returned.
    pub fn flush(&mut self) -> Result<usize> {
        if self.write.is_empty() {
            return Ok(0);
        }
        let logical = self.position();
        let written = self.flush_out()?;
        if self.position != logical {
            self.seek_physical(logical)?;
        }
        Ok(written)
    }

    /// Like [`BufStream::flush`], but leaves the backend behind the end of
    /// the written data.
    pub(super) fn flush_out(&mut self) -> Result<usize> {
        let written = self.flush_cache()?;
        if !self.write.is_empty() {
            let rejected = self.write.len();
            self.read.clear();
            self.write.clear();
            return Err(rejected_error(rejected));
        }
        Ok(written)
    }

    /// Writes the write cache until it is empty or the backend accepts no
    /// more data. Bytes written are dropped from the cache, so a rejected
    /// tail stays buffered.
    fn flush_cache(&mut self) -> Result<usize> {
        let mut total = 0;
        while !self.write.is_empty() {
            let res = self.inner.write(self.write.filled());
            self.write.stats.misses += 1;
            let written = match res {
                Ok(0) => break,
                Ok(written) => written,
                Err(why) => {
                    self.read.clear();
                    self.write.clear();
                    return Err(why.into());
                }
            };

            self.write.consume(written);
            self.position += written as u64;
            total += written;
            self.observer.on_event(&Event::Flush {
                written,
                position: self.position,
            });
        }
        Ok(total)
    }

    fn switch_to_write(&mut self) -> Result<()> {
        self.rewind_read()?;
        self.observer.on_event(&Event::SwitchToWrite {
            position: self.position,
        });
        Ok(())
    }
}

fn rejected_error(bytes: usize) -> Error {
    io::Error::new(
        ErrorKind::WriteZero,
        format!("backend rejected {} buffered bytes", bytes),
    )
    .into()
}
