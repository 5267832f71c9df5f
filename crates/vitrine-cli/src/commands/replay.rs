use std::cell::Cell;
use std::path::PathBuf;
use std::rc::Rc;

use anyhow::{Context, Result};
use clap::Args;
use serde::Deserialize;
use tracing::info;
use vitrine_core::clock::{Clock, ManualClock};
use vitrine_core::config::VitrineConfig;
use vitrine_core::geometry::{Size, Vec2};
use vitrine_core::gesture::{Key, PointerEvent, PointerId};
use vitrine_core::host::NoopHost;
use vitrine_core::track::{horizontal, DragOutcome, SlideTrack};
use vitrine_core::viewer::{media_list, MediaItem, MediaList, MediaViewport};

use crate::report;

#[derive(Args)]
pub struct ReplayArgs {
    /// Session script (TOML)
    pub script: PathBuf,

    /// Config file (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// A scripted session: the media list, the environment geometry and the
/// input steps to feed.
#[derive(Debug, Deserialize)]
struct Script {
    /// Explicit media items; if empty, `generated` placeholder items are used.
    #[serde(default)]
    media: Vec<MediaItem>,
    #[serde(default)]
    generated: usize,
    #[serde(default = "default_viewport_width")]
    viewport_width: f32,
    #[serde(default = "default_container")]
    container: Size,
    #[serde(default)]
    natural: Option<Size>,
    #[serde(default, rename = "step")]
    steps: Vec<Step>,
}

fn default_viewport_width() -> f32 {
    1280.0
}

fn default_container() -> Size {
    Size::new(1280.0, 720.0)
}

#[derive(Debug, Deserialize)]
struct Step {
    /// Time to let pass before this step.
    #[serde(default)]
    wait_ms: u64,
    #[serde(flatten)]
    action: Action,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
enum Action {
    Open { index: i64 },
    Close,
    GoTo { index: i64 },
    Next,
    Prev,
    ZoomIn,
    ZoomOut,
    ToggleZoom,
    Pan { dx: f32, dy: f32 },
    Fullscreen,
    Key { key: String },
    Tap { x: f32, y: f32 },
    Drag { from: Vec2, to: Vec2 },
    ImageLoaded { width: f32, height: f32 },
    Resize { width: f32, height: f32 },
    TrackNext,
    TrackPrev,
    TrackGoTo { index: i64 },
    TrackWidth { width: f32 },
    TrackDrag { from: f32, to: f32 },
    TrackAutoplay { enabled: bool },
    Wait,
}

impl Action {
    fn label(&self) -> String {
        match self {
            Self::Open { index } => format!("open {index}"),
            Self::GoTo { index } => format!("go_to {index}"),
            Self::Pan { dx, dy } => format!("pan {dx} {dy}"),
            Self::Key { key } => format!("key {key}"),
            Self::Tap { x, y } => format!("tap {x} {y}"),
            Self::TrackGoTo { index } => format!("track_go_to {index}"),
            Self::TrackWidth { width } => format!("track_width {width}"),
            Self::TrackDrag { from, to } => format!("track_drag {from}->{to}"),
            Self::ImageLoaded { width, height } => format!("image_loaded {width}x{height}"),
            Self::Resize { width, height } => format!("resize {width}x{height}"),
            Self::TrackAutoplay { enabled } => format!("track_autoplay {enabled}"),
            Self::Close => "close".into(),
            Self::Next => "next".into(),
            Self::Prev => "prev".into(),
            Self::ZoomIn => "zoom_in".into(),
            Self::ZoomOut => "zoom_out".into(),
            Self::ToggleZoom => "toggle_zoom".into(),
            Self::Fullscreen => "fullscreen".into(),
            Self::Drag { .. } => "drag".into(),
            Self::TrackNext => "track_next".into(),
            Self::TrackPrev => "track_prev".into(),
            Self::Wait => "wait".into(),
        }
    }
}

struct Session {
    media: MediaList,
    viewer: MediaViewport<NoopHost, ManualClock>,
    track: SlideTrack<MediaItem, ManualClock>,
    clock: ManualClock,
    config: VitrineConfig,
    natural: Option<Size>,
    closed_count: Rc<Cell<usize>>,
}

const POINTER: PointerId = PointerId(1);

impl Session {
    fn new(script: &Script, config: VitrineConfig) -> Result<Self> {
        let items = if script.media.is_empty() {
            (0..script.generated)
                .map(|i| MediaItem::new(format!("media/{i}.jpg"), format!("Item {}", i + 1)))
                .collect()
        } else {
            script.media.clone()
        };
        let media = media_list(items).context("Script needs `media` entries or `generated > 0`")?;

        let clock = ManualClock::new(0);
        let mut viewer = MediaViewport::new(config.viewer.clone(), NoopHost, clock.clone());
        viewer.set_container_size(script.container);

        let closed_count = Rc::new(Cell::new(0));
        let counter = closed_count.clone();
        viewer.set_on_close(move || counter.set(counter.get() + 1));

        let mut track = SlideTrack::new(config.track.clone(), media.to_vec(), clock.clone(), NoopHost);
        track.set_viewport_width(script.viewport_width);
        track.set_items_per_view(config.track.breakpoints.items_per_view(script.viewport_width));

        Ok(Self {
            media,
            viewer,
            track,
            clock,
            config,
            natural: script.natural,
            closed_count,
        })
    }

    fn open(&mut self, index: i64) {
        self.viewer.open(self.media.clone(), index);
        self.image_loaded();
    }

    fn image_loaded(&mut self) {
        if let Some(size) = self.natural {
            self.viewer.set_natural_size(size);
        }
    }

    fn apply(&mut self, action: &Action) -> Option<DragOutcome> {
        match action {
            Action::Open { index } => self.open(*index),
            Action::Close => self.viewer.close(),
            Action::GoTo { index } => {
                self.viewer.go_to(*index);
                self.image_loaded();
            }
            Action::Next => {
                self.viewer.next();
                self.image_loaded();
            }
            Action::Prev => {
                self.viewer.prev();
                self.image_loaded();
            }
            Action::ZoomIn => self.viewer.zoom_in(),
            Action::ZoomOut => self.viewer.zoom_out(),
            Action::ToggleZoom => self.viewer.toggle_zoom(),
            Action::Pan { dx, dy } => self.viewer.pan(*dx, *dy),
            Action::Fullscreen => self.viewer.toggle_fullscreen(),
            Action::Key { key } => {
                self.viewer.handle_key(Key::from_name(key));
                self.image_loaded();
            }
            Action::Tap { x, y } => {
                let pos = Vec2::new(*x, *y);
                self.viewer.handle_pointer(PointerEvent::Down { id: POINTER, pos });
                self.viewer.handle_pointer(PointerEvent::Up { id: POINTER, pos });
            }
            Action::Drag { from, to } => {
                self.viewer.handle_pointer(PointerEvent::Down { id: POINTER, pos: *from });
                self.viewer.handle_pointer(PointerEvent::Move { id: POINTER, pos: *to });
                self.viewer.handle_pointer(PointerEvent::Up { id: POINTER, pos: *to });
            }
            Action::ImageLoaded { width, height } => {
                self.natural = Some(Size::new(*width, *height));
                self.image_loaded();
            }
            Action::Resize { width, height } => {
                self.viewer.set_container_size(Size::new(*width, *height));
            }
            Action::TrackNext => self.track.next(),
            Action::TrackPrev => self.track.prev(),
            Action::TrackGoTo { index } => self.track.go_to(*index),
            Action::TrackWidth { width } => {
                self.track.set_viewport_width(*width);
                let per_view = self.config.track.breakpoints.items_per_view(*width);
                self.track.set_items_per_view(per_view);
            }
            Action::TrackDrag { from, to } => return self.track_drag(*from, *to),
            Action::TrackAutoplay { enabled } => self.track.set_autoplay(*enabled),
            Action::Wait => {}
        }
        None
    }

    /// Drag across the track; a tap on a card opens the viewer on it.
    fn track_drag(&mut self, from: f32, to: f32) -> Option<DragOutcome> {
        self.track.handle_pointer(PointerEvent::Down { id: POINTER, pos: horizontal(from) });
        self.track.handle_pointer(PointerEvent::Move { id: POINTER, pos: horizontal(to) });
        let outcome = self.track.handle_pointer(PointerEvent::Up { id: POINTER, pos: horizontal(to) });
        if outcome == Some(DragOutcome::Tap) {
            if let Some(index) = self.track.card_at(from) {
                self.open(index as i64);
            }
        }
        outcome
    }
}

pub fn run(args: &ReplayArgs) -> Result<()> {
    let config = super::resolve_config(args.config.as_deref())?;
    let text = std::fs::read_to_string(&args.script)
        .with_context(|| format!("Failed to read script {}", args.script.display()))?;
    let script: Script = toml::from_str(&text)
        .with_context(|| format!("Failed to parse script {}", args.script.display()))?;

    let mut session = Session::new(&script, config)?;
    info!(steps = script.steps.len(), media = session.media.len(), "Replaying session");

    report::print_header(&format!("Replay: {}", args.script.display()));
    for step in &script.steps {
        session.clock.advance(step.wait_ms);
        session.track.poll_autoplay();
        let outcome = session.apply(&step.action);
        report::print_step(
            session.clock.now_ms(),
            &step.action.label(),
            &session.viewer,
            &session.track,
            outcome,
        );
    }
    println!();
    println!("  Viewer closed {} time(s)", session.closed_count.get());

    Ok(())
}
