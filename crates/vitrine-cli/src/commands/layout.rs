use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use vitrine_core::clock::SystemClock;
use vitrine_core::host::NoopHost;
use vitrine_core::track::{Card, SlideTrack};

use crate::report;

#[derive(Args)]
pub struct LayoutArgs {
    /// Viewport width in pixels
    #[arg(short, long)]
    pub width: f32,

    /// Number of cards in the carousel
    #[arg(short = 'n', long, default_value_t = 10)]
    pub items: usize,

    /// Config file (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

struct Slot(usize);

impl Card for Slot {
    type Key = usize;

    fn key(&self) -> usize {
        self.0
    }
}

pub fn run(args: &LayoutArgs) -> Result<()> {
    let config = super::resolve_config(args.config.as_deref())?;
    let per_view = config.track.breakpoints.items_per_view(args.width);

    let slots = (0..args.items).map(Slot).collect();
    let mut track = SlideTrack::new(config.track, slots, SystemClock::new(), NoopHost);
    track.set_items_per_view(per_view);
    track.set_viewport_width(args.width);

    report::print_layout(args.width, &track);
    Ok(())
}
