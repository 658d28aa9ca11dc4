use std::io::SeekFrom;

use crate::error::{Error, Result};
use crate::observer::{Event, Observer};
use crate::stream::Stream;

use super::BufStream;

impl<S, O> BufStream<S, O>
where
    S: Stream,
    O: Observer,
{
    /// Moves the logical position and returns it.
    ///
    /// Targets inside the buffered write window or the buffered read window
    /// only move the respective cursor. Everything else flushes the write
    /// cache, drops both caches and seeks the backend.
    ///
    /// The end of the stream is only known while writes are pending: then
    /// [`SeekFrom::End`] is relative to the end of the buffered write window.
    /// Without pending writes `SeekFrom::End` fails with
    /// [`Error::UnresolvedSeek`], and so does an end relative target outside
    /// the write window. A failing seek leaves both caches empty.
    pub fn seek(&mut self, target: SeekFrom) -> Result<u64> {
        let offset = match target {
            SeekFrom::Start(offset) => offset,
            SeekFrom::Current(delta) => offset_from(self.position(), delta)?,
            SeekFrom::End(delta) => {
                if self.write.is_empty() {
                    return self.unresolved(target);
                }
                offset_from(self.position + self.write.len() as u64, delta)?
            }
        };

        if self.seek_buffered(offset) {
            self.observer.on_event(&Event::Seek {
                target,
                physical: false,
            });
            return Ok(offset);
        }
        if let SeekFrom::End(_) = target {
            return self.unresolved(target);
        }

        let flushed = self.flush_out();
        self.read.clear();
        self.write.clear();
        flushed?;

        self.seek_physical(offset)?;
        self.observer.on_event(&Event::Seek {
            target,
            physical: true,
        });
        Ok(offset)
    }

    /// Moves a cursor if `offset` lies inside one of the buffered windows.
    fn seek_buffered(&mut self, offset: u64) -> bool {
        if !self.write.is_empty() {
            let start = self.position;
            if offset >= start && offset <= start + self.write.len() as u64 {
                self.write.set_pos((offset - start) as usize);
                return true;
            }
        }
        if !self.read.is_empty() {
            let start = self.position - self.read.len() as u64;
            if offset >= start && offset <= self.position {
                self.read.set_pos((offset - start) as usize);
                return true;
            }
        }
        false
    }

    fn unresolved(&mut self, target: SeekFrom) -> Result<u64> {
        self.invalidate()?;
        Err(Error::UnresolvedSeek(target))
    }
}

fn offset_from(base: u64, delta: i64) -> Result<u64> {
    let offset = i128::from(base) + i128::from(delta);
    if offset < 0 || offset > i128::from(u64::MAX) {
        return Err(Error::InvalidSeek(offset));
    }
    Ok(offset as u64)
}
