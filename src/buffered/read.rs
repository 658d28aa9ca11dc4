use crate::error::Result;
use crate::observer::{Event, Observer};
use crate::stream::Stream;

use super::BufStream;

impl<S, O> BufStream<S, O>
where
    S: Stream,
    O: Observer,
{
    /// Copies up to `dst.len()` bytes into `dst`, returning how many were copied.
    ///
    /// Less than `dst.len()` bytes are returned only at the end of the data,
    /// which is not an error. Pending writes are flushed before reading, so
    /// the read observes them.
    pub fn read(&mut self, dst: &mut [u8]) -> Result<usize> {
        if !self.write.is_empty() {
            self.switch_to_read()?;
        }

        let mut bytes_read = 0;
        while bytes_read < dst.len() {
            if self.read.remaining() == 0 && self.fill()? == 0 {
                break;
            }
            bytes_read += self.read.take(&mut dst[bytes_read..]);

            // a cache that could not be filled completely holds the end of the data
            if self.read.remaining() == 0 && self.read.len() < self.read.capacity() {
                break;
            }
        }
        Ok(bytes_read)
    }

    /// Replaces the (consumed) read cache with the next bytes of the backend.
    fn fill(&mut self) -> Result<usize> {
        let requested = self.read.capacity();
        let res = self.inner.read(self.read.fill_target());
        self.read.stats.misses += 1;
        let bytes = res?;

        self.read.set_filled(bytes);
        self.position += bytes as u64;
        self.observer.on_event(&Event::Fill {
            requested,
            read: bytes,
            position: self.position,
        });
        Ok(bytes)
    }

    fn switch_to_read(&mut self) -> Result<()> {
        self.flush()?;
        self.observer.on_event(&Event::SwitchToRead {
            position: self.position,
        });
        Ok(())
    }
}
