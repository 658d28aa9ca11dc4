//! Diagnostics hooks of [`BufStream`](crate::BufStream)

use std::io::SeekFrom;

use log::{debug, trace};

use crate::cache::Stats;

/// Something that happened inside a [`BufStream`](crate::BufStream).
///
/// Positions are physical positions of the backend after the event.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Open,
    /// the read cache was refilled
    Fill {
        requested: usize,
        read: usize,
        position: u64,
    },
    /// one physical write of the write cache
    Flush { written: usize, position: u64 },
    /// unread bytes of the read cache were dropped before writing
    SwitchToWrite { position: u64 },
    /// pending writes were flushed before reading
    SwitchToRead { position: u64 },
    /// `physical` tells whether the backend had to be sought
    Seek { target: SeekFrom, physical: bool },
    Close { stats: Stats },
}

pub trait Observer {
    fn on_event(&mut self, event: &Event);
}

impl Observer for () {
    fn on_event(&mut self, _event: &Event) {}
}

impl<O> Observer for &mut O
where
    O: Observer + ?Sized,
{
    fn on_event(&mut self, event: &Event) {
        (**self).on_event(event)
    }
}

/// Reports events through the [`log`] facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl Observer for LogObserver {
    fn on_event(&mut self, event: &Event) {
        match event {
            Event::Open => trace!("open"),
            Event::Fill {
                requested,
                read,
                position,
            } => trace!("filled [read {}/{} pos {}]", read, requested, position),
            Event::Flush { written, position } => {
                trace!("write flush [written {} pos {}]", written, position)
            }
            Event::SwitchToWrite { position } => {
                debug!("switch from read to write [pos {}]", position)
            }
            Event::SwitchToRead { position } => {
                debug!("switch from write to read [pos {}]", position)
            }
            Event::Seek { target, physical } => {
                trace!("seek [{:?} physical {}]", target, physical)
            }
            Event::Close { stats } => {
                if let Some(efficiency) = stats.read.efficiency() {
                    debug!("read efficiency {:.02}%", efficiency);
                }
                if let Some(efficiency) = stats.write.efficiency() {
                    debug!("write efficiency {:.02}%", efficiency);
                }
            }
        }
    }
}
