use std::path::PathBuf;
use std::sync::mpsc;
use std::time::Duration;

use tracing::{info, warn};
use vitrine_core::clock::SystemClock;
use vitrine_core::config::VitrineConfig;
use vitrine_core::track::SlideTrack;
use vitrine_core::viewer::{MediaItem, MediaViewport};

use crate::host::{DragCapture, EguiHost};
use crate::messages::{WorkerCommand, WorkerResult};
use crate::panels;
use crate::states::{GalleryState, LoadedImage, UIState};
use crate::worker;

pub type Track = SlideTrack<MediaItem, SystemClock, DragCapture>;
pub type Viewer = MediaViewport<EguiHost, SystemClock>;

pub struct VitrineApp {
    pub cmd_tx: mpsc::Sender<WorkerCommand>,
    pub result_tx: mpsc::Sender<WorkerResult>,
    pub result_rx: mpsc::Receiver<WorkerResult>,
    pub config: VitrineConfig,
    pub gallery: GalleryState,
    pub track: Track,
    pub viewer: Viewer,
    pub ui_state: UIState,
}

impl VitrineApp {
    pub fn new(ctx: &egui::Context, initial_folder: Option<PathBuf>) -> Self {
        let (result_tx, result_rx) = mpsc::channel();
        let cmd_tx = worker::spawn_worker(result_tx.clone(), ctx.clone());

        let config = VitrineConfig::default();
        let app = Self {
            cmd_tx,
            result_tx,
            result_rx,
            track: build_track(&config, Vec::new()),
            viewer: build_viewer(&config),
            config,
            gallery: GalleryState::default(),
            ui_state: UIState::default(),
        };
        if let Some(path) = initial_folder {
            app.send_command(WorkerCommand::LoadFolder { path });
        }
        app
    }

    /// Drain all pending results from the worker.
    fn poll_results(&mut self, ctx: &egui::Context) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                WorkerResult::FolderListed { folder, media } => {
                    self.ui_state
                        .add_log(format!("Opened: {} ({} images)", folder.display(), media.len()));
                    self.viewer.close();
                    self.track.set_items(media.clone());
                    self.gallery.replace(folder, media);
                }
                WorkerResult::ImageDecoded {
                    source,
                    image,
                    original_size,
                } => {
                    let texture = ctx.load_texture(
                        source.clone(),
                        image,
                        egui::TextureOptions::LINEAR,
                    );
                    self.gallery.images.insert(
                        source,
                        LoadedImage {
                            texture,
                            original_size,
                        },
                    );
                }
                WorkerResult::ConfigImported { config } => self.apply_config(ctx, config),
                WorkerResult::Error { message } => {
                    self.ui_state.add_log(format!("ERROR: {message}"));
                }
                WorkerResult::Log { message } => {
                    self.ui_state.add_log(message);
                }
            }
        }
    }

    /// Rebuild both components under a new configuration.
    pub fn apply_config(&mut self, ctx: &egui::Context, config: VitrineConfig) {
        if let Err(e) = config.validate() {
            warn!("Rejected config: {e}");
            self.ui_state.add_log(format!("ERROR: {e}"));
            return;
        }
        // Release fullscreen and capture before the old viewer goes away.
        self.viewer.close();
        self.flush_host_commands(ctx);

        self.track = build_track(&config, self.gallery.media.to_vec());
        self.viewer = build_viewer(&config);
        self.config = config;
        info!("Config applied");
        self.ui_state.add_log("Config applied".into());
    }

    pub fn open_viewer(&mut self, index: usize) {
        self.viewer.open(self.gallery.media.clone(), index as i64);
    }

    pub fn send_command(&self, cmd: WorkerCommand) {
        let _ = self.cmd_tx.send(cmd);
    }

    fn flush_host_commands(&mut self, ctx: &egui::Context) {
        for cmd in self.viewer.host_mut().take_commands() {
            ctx.send_viewport_cmd(cmd);
        }
    }

    /// Follow fullscreen changes the window made on its own.
    fn sync_fullscreen(&mut self, ctx: &egui::Context) {
        let Some(active) = ctx.input(|i| i.viewport().fullscreen) else {
            return;
        };
        let host = self.viewer.host_mut();
        host.observe_fullscreen(active);
        if host.fullscreen_target().is_some() {
            return;
        }
        if let Some(state) = self.viewer.state() {
            if state.is_fullscreen != active {
                self.viewer.fullscreen_changed(active);
            }
        }
    }

    fn schedule_autoplay(&mut self, ctx: &egui::Context) {
        self.track.poll_autoplay();
        if let Some(ms) = self.track.autoplay_remaining_ms() {
            ctx.request_repaint_after(Duration::from_millis(ms));
        }
    }
}

impl eframe::App for VitrineApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results(ctx);
        self.sync_fullscreen(ctx);
        self.schedule_autoplay(ctx);

        panels::menu_bar::show(ctx, self);
        panels::status::show(ctx, self);
        panels::carousel::show(ctx, self);
        panels::lightbox::show(ctx, self);

        self.flush_host_commands(ctx);

        if self.ui_state.show_about {
            egui::Window::new("About Vitrine")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("Vitrine");
                        ui.label("Product media carousel and viewer");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.ui_state.show_about = false;
                        }
                    });
                });
        }
    }
}

fn build_track(config: &VitrineConfig, media: Vec<MediaItem>) -> Track {
    SlideTrack::new(config.track.clone(), media, SystemClock::new(), DragCapture::default())
}

fn build_viewer(config: &VitrineConfig) -> Viewer {
    MediaViewport::new(config.viewer.clone(), EguiHost::default(), SystemClock::new())
}
