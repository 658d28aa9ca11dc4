//! Fixed size linear cache used for both the read and the write side

use std::cmp::min;

/// Hit and miss counters of one cache.
///
/// A hit is a byte served from (or accepted into) the cache, a miss is a
/// call to the backend needed to refill or flush it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
}

impl CacheStats {
    /// Percentage of hits among all cache accesses, `None` if the cache was never used.
    pub fn efficiency(&self) -> Option<f64> {
        let total = self.hits + self.misses;
        if total == 0 {
            None
        } else {
            Some(self.hits as f64 / total as f64 * 100.0)
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub read: CacheStats,
    pub write: CacheStats,
}

pub(crate) struct Cache {
    buffer: Box<[u8]>,
    len: usize,
    pos: usize,
    pub(crate) stats: CacheStats,
}

impl Cache {
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            buffer: vec![0; capacity].into_boxed_slice(),
            len: 0,
            pos: 0,
            stats: CacheStats::default(),
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// number of valid bytes in the cache
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// valid bytes behind the cursor
    pub(crate) fn remaining(&self) -> usize {
        self.len - self.pos
    }

    pub(crate) fn set_pos(&mut self, pos: usize) {
        assert!(pos <= self.len);
        self.pos = pos;
    }

    pub(crate) fn clear(&mut self) {
        self.len = 0;
        self.pos = 0;
    }

    /// Hands out the whole buffer for a refill; `set_filled` has to follow.
    pub(crate) fn fill_target(&mut self) -> &mut [u8] {
        self.clear();
        &mut self.buffer[..]
    }

    pub(crate) fn set_filled(&mut self, len: usize) {
        assert!(len <= self.capacity());
        self.len = len;
        self.pos = 0;
    }

    /// Copies cached bytes behind the cursor into `dst`, advancing the cursor.
    pub(crate) fn take(&mut self, dst: &mut [u8]) -> usize {
        let bytes = min(dst.len(), self.remaining());
        dst[..bytes].copy_from_slice(&self.buffer[self.pos..self.pos + bytes]);
        self.pos += bytes;
        self.stats.hits += bytes as u64;
        bytes
    }

    /// Copies as much of `src` as fits behind the cursor, overwriting
    /// cached bytes and growing `len` where the cursor passes it.
    pub(crate) fn put(&mut self, src: &[u8]) -> usize {
        let bytes = min(src.len(), self.capacity() - self.pos);
        self.buffer[self.pos..self.pos + bytes].copy_from_slice(&src[..bytes]);
        self.pos += bytes;
        if self.pos > self.len {
            self.len = self.pos;
        }
        self.stats.hits += bytes as u64;
        bytes
    }

    /// the valid part of the cache
    pub(crate) fn filled(&self) -> &[u8] {
        &self.buffer[..self.len]
    }

    /// Drops the first `bytes` valid bytes, moving the rest to the front.
    pub(crate) fn consume(&mut self, bytes: usize) {
        assert!(bytes <= self.len);
        self.buffer.copy_within(bytes..self.len, 0);
        self.len -= bytes;
        self.pos = self.pos.saturating_sub(bytes);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_overwrites_and_extends() {
        let mut cache = Cache::new(8);
        assert_eq!(cache.put(b"abcd"), 4);
        cache.set_pos(2);
        assert_eq!(cache.put(b"XYZ"), 3);
        assert_eq!(cache.filled(), b"abXYZ");
        assert_eq!(cache.pos(), 5);
        assert_eq!(cache.len(), 5);
    }

    #[test]
    fn put_stops_at_capacity() {
        let mut cache = Cache::new(4);
        assert_eq!(cache.put(b"abcdef"), 4);
        assert_eq!(cache.put(b"ef"), 0);
        assert_eq!(cache.stats.hits, 4);
    }

    #[test]
    fn take_serves_remaining_bytes() {
        let mut cache = Cache::new(4);
        cache.fill_target()[..3].copy_from_slice(b"xyz");
        cache.set_filled(3);
        let mut dst = [0; 2];
        assert_eq!(cache.take(&mut dst), 2);
        assert_eq!(&dst, b"xy");
        assert_eq!(cache.remaining(), 1);
        assert_eq!(cache.take(&mut dst), 1);
        assert_eq!(dst[0], b'z');
        assert_eq!(cache.take(&mut dst), 0);
    }

    #[test]
    fn consume_keeps_tail() {
        let mut cache = Cache::new(8);
        cache.put(b"abcdef");
        cache.consume(4);
        assert_eq!(cache.filled(), b"ef");
        assert_eq!(cache.pos(), 2);
    }

    #[test]
    fn efficiency() {
        assert_eq!(CacheStats::default().efficiency(), None);
        let stats = CacheStats { hits: 3, misses: 1 };
        assert_eq!(stats.efficiency(), Some(75.0));
    }
}
