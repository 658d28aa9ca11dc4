//! This crate provides a buffered access to any byte-addressable [`Stream`], such as a file,
//! with read and write caching and a seek implementation which avoids calls to the backend
//! whenever possible. [`BufStream`] behaves byte for byte like the unbuffered stream,
//! including interleaved reads and writes.
//!
//! [`BufStream`] keeps two caches of the same capacity (65535 bytes unless configured
//! otherwise, see [`Config`] and the `BUF_STREAM_CAPACITY` build variable):
//!
//!  - The read cache is refilled with one backend read whenever it is exhausted.
//!  - The write cache collects writes and is flushed with as few backend writes as possible.
//!  - Seeking inside the buffered read or write window only moves a cursor.
//!  - We don't know the end of the stream, so [`SeekFrom::End`](std::io::SeekFrom::End) only
//!    works while writes are pending, relative to the end of the buffered data.
//!
//! # Small writes are collected until the cache runs full
//! ```rust
//! use buf_stream::{BufStream, MemStream};
//!
//! let mut stream = BufStream::with_capacity(MemStream::new(), 4).unwrap();
//!
//! assert_eq!(stream.write(b"AB").unwrap(), 2);
//! assert!(stream.get_ref().get_ref().is_empty());
//!
//! /* "ABCD" is flushed, "E" stays in the cache */
//! assert_eq!(stream.write(b"CDE").unwrap(), 3);
//! assert_eq!(stream.get_ref().get_ref(), b"ABCD");
//!
//! stream.close().unwrap();
//! assert_eq!(stream.get_ref().get_ref(), b"ABCDE");
//! ```
//!
//! # Seeking inside the current buffer does not touch the backend
//! ```rust
//! use std::io::SeekFrom;
//! use buf_stream::{BufStream, MemStream};
//! # let mut arr: [u8; 256] = [0; 256];
//! # for (elem, val) in arr.iter_mut().zip(0..=255) { *elem = val; }
//! let backend = MemStream::from(&arr[..]); // values from \x00 .. \xff
//! let mut stream = BufStream::with_capacity(backend, 16).unwrap();
//!
//! let mut buffer: [u8; 7] = [0; 7];
//! assert_eq!(stream.read(&mut buffer).unwrap(), buffer.len());
//! assert_eq!(&buffer, &arr[0..7]);
//!
//! /* seeking backwards inside the current buffer */
//! assert_eq!(stream.seek(SeekFrom::Current(-4)).unwrap(), 3);
//! assert_eq!(stream.read(&mut buffer).unwrap(), 7);
//! assert_eq!(&buffer, &arr[3..10]);
//!
//! /* everything else is a physical seek */
//! assert_eq!(stream.seek(SeekFrom::Start(139)).unwrap(), 139);
//! assert_eq!(stream.read(&mut buffer).unwrap(), 7);
//! assert_eq!(&buffer, &arr[139..146]);
//! assert_eq!(stream.tell().unwrap(), 146);
//! ```
//!
//! # Writing after reading writes behind the last byte read
//! ```rust
//! use buf_stream::{BufStream, MemStream};
//!
//! let mut stream = BufStream::with_capacity(MemStream::from(&b"HELLOWORLD"[..]), 8).unwrap();
//!
//! let mut buffer = [0; 3];
//! stream.read(&mut buffer).unwrap();
//! assert_eq!(&buffer, b"HEL");
//!
//! stream.write(b"X").unwrap();
//! stream.close().unwrap();
//! assert_eq!(stream.get_ref().get_ref(), b"HELXOWORLD");
//! ```
//!
//! # Any backend implementing [`Stream`] can be buffered
//! ```rust
//! use std::io::{Read, Write};
//! use buf_stream::{BufStream, Mode};
//!
//! let dir = tempfile::tempdir().unwrap();
//! let path = dir.path().join("data.bin");
//!
//! let mut stream = BufStream::open_file(&path, Mode::Create).unwrap();
//! write!(stream, "hello {}", "world").unwrap();
//! stream.close().unwrap();
//!
//! let mut stream = BufStream::open_file(&path, Mode::Read).unwrap();
//! let mut content = String::new();
//! stream.read_to_string(&mut content).unwrap();
//! assert_eq!(content, "hello world");
//! ```

mod buffered;
mod cache;
mod consts;
mod error;
mod file;
mod mem;
mod observer;
mod stream;

pub use crate::buffered::{BufStream, Config};
pub use crate::cache::{CacheStats, Stats};
pub use crate::consts::DEFAULT_CAPACITY;
pub use crate::error::{Error, Result};
pub use crate::file::FileStream;
pub use crate::mem::MemStream;
pub use crate::observer::{Event, LogObserver, Observer};
pub use crate::stream::{Mode, Stream};
