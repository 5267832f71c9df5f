#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use vitrine_core::error::{Result, VitrineError};
use vitrine_core::gesture::PointerId;
use vitrine_core::host::{PointerCapture, ViewerHost};
use vitrine_core::track::Card;
use vitrine_core::viewer::{MediaItem, MediaList};

/// Observable host state shared between a test and the component under test.
#[derive(Debug, Default)]
pub struct HostLog {
    pub scroll_suspended: bool,
    pub suspend_calls: usize,
    pub restore_calls: usize,
    pub captured: Vec<PointerId>,
    pub fullscreen: bool,
    pub fail_fullscreen: bool,
}

/// Host that records every acquisition and release.
#[derive(Clone, Debug, Default)]
pub struct RecordingHost {
    pub log: Rc<RefCell<HostLog>>,
}

impl RecordingHost {
    pub fn failing_fullscreen() -> Self {
        let host = Self::default();
        host.log.borrow_mut().fail_fullscreen = true;
        host
    }
}

impl PointerCapture for RecordingHost {
    fn capture(&mut self, pointer: PointerId) {
        self.log.borrow_mut().captured.push(pointer);
    }

    fn release(&mut self, pointer: PointerId) {
        self.log.borrow_mut().captured.retain(|p| *p != pointer);
    }
}

impl ViewerHost for RecordingHost {
    fn suspend_scroll(&mut self) {
        let mut log = self.log.borrow_mut();
        log.scroll_suspended = true;
        log.suspend_calls += 1;
    }

    fn restore_scroll(&mut self) {
        let mut log = self.log.borrow_mut();
        log.scroll_suspended = false;
        log.restore_calls += 1;
    }

    fn request_fullscreen(&mut self) -> Result<()> {
        let mut log = self.log.borrow_mut();
        if log.fail_fullscreen {
            return Err(VitrineError::Fullscreen("not allowed".into()));
        }
        log.fullscreen = true;
        Ok(())
    }

    fn exit_fullscreen(&mut self) -> Result<()> {
        self.log.borrow_mut().fullscreen = false;
        Ok(())
    }
}

/// Build a media list of `n` items.
pub fn media(n: usize) -> MediaList {
    (0..n)
        .map(|i| MediaItem::new(format!("https://cdn.example.com/p/{i}.jpg"), format!("Product {i}")))
        .collect::<Vec<_>>()
        .into()
}

/// Minimal card keyed by an integer.
#[derive(Clone, Debug, PartialEq)]
pub struct Tile(pub u32);

impl Card for Tile {
    type Key = u32;

    fn key(&self) -> u32 {
        self.0
    }
}

pub fn tiles(n: u32) -> Vec<Tile> {
    (0..n).map(Tile).collect()
}
