use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::consts::{
    BREAKPOINT_MOBILE_PX, BREAKPOINT_TABLET_PX, COMMIT_THRESHOLD_PERCENT, COMMIT_THRESHOLD_PX,
    DEFAULT_AUTOPLAY_INTERVAL_MS, DEFAULT_CARD_GAP_PX, DEFAULT_ITEMS_PER_VIEW, DOUBLE_TAP_WINDOW_MS,
    DOUBLE_TAP_ZOOM, MAX_ZOOM, MIN_ZOOM, ZOOM_STEP,
};
use crate::error::{Result, VitrineError};

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct VitrineConfig {
    #[serde(default)]
    pub viewer: ViewerConfig,
    #[serde(default)]
    pub track: TrackConfig,
}

impl VitrineConfig {
    pub fn validate(&self) -> Result<()> {
        self.viewer.validate()?;
        self.track.validate()
    }
}

/// Zoom and gesture parameters of the full-screen viewer.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub zoom_step: f32,
    pub min_zoom: f32,
    pub max_zoom: f32,
    /// Level a double activation jumps to from the contained view.
    pub double_tap_zoom: f32,
    pub double_tap_window_ms: u64,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            zoom_step: ZOOM_STEP,
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
            double_tap_zoom: DOUBLE_TAP_ZOOM,
            double_tap_window_ms: DOUBLE_TAP_WINDOW_MS,
        }
    }
}

impl ViewerConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.min_zoom >= 1.0) {
            return Err(invalid(format!("min_zoom must be >= 1.0 (got {})", self.min_zoom)));
        }
        if !(self.max_zoom > self.min_zoom) {
            return Err(invalid(format!(
                "max_zoom ({}) must be greater than min_zoom ({})",
                self.max_zoom, self.min_zoom
            )));
        }
        if !(self.zoom_step > 0.0) {
            return Err(invalid(format!("zoom_step must be positive (got {})", self.zoom_step)));
        }
        if !(self.double_tap_zoom > self.min_zoom && self.double_tap_zoom <= self.max_zoom) {
            return Err(invalid(format!(
                "double_tap_zoom ({}) must lie in ({}, {}]",
                self.double_tap_zoom, self.min_zoom, self.max_zoom
            )));
        }
        if self.double_tap_window_ms == 0 {
            return Err(invalid("double_tap_window_ms must be positive".into()));
        }
        Ok(())
    }
}

/// Carousel behaviour.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackConfig {
    pub autoplay: bool,
    pub autoplay_interval_ms: u64,
    pub commit_threshold_px: f32,
    /// Percentage (0..100) of the viewport width.
    pub commit_threshold_percent: f32,
    pub card_gap_px: f32,
    /// Limit the track to `max_slides * items_per_view` cards.
    pub max_slides: Option<usize>,
    pub breakpoints: Breakpoints,
}

impl Default for TrackConfig {
    fn default() -> Self {
        Self {
            autoplay: false,
            autoplay_interval_ms: DEFAULT_AUTOPLAY_INTERVAL_MS,
            commit_threshold_px: COMMIT_THRESHOLD_PX,
            commit_threshold_percent: COMMIT_THRESHOLD_PERCENT,
            card_gap_px: DEFAULT_CARD_GAP_PX,
            max_slides: None,
            breakpoints: Breakpoints::default(),
        }
    }
}

impl TrackConfig {
    pub fn validate(&self) -> Result<()> {
        if self.autoplay_interval_ms == 0 {
            return Err(invalid("autoplay_interval_ms must be positive".into()));
        }
        if !(self.commit_threshold_px >= 0.0) || !(self.commit_threshold_percent >= 0.0) {
            return Err(invalid("commit thresholds must be non-negative".into()));
        }
        if !(self.card_gap_px >= 0.0) {
            return Err(invalid(format!("card_gap_px must be non-negative (got {})", self.card_gap_px)));
        }
        if self.max_slides == Some(0) {
            return Err(invalid("max_slides must be at least 1 when set".into()));
        }
        self.breakpoints.validate()
    }
}

/// Responsive rule: widths strictly below `below_width` show `items` cards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Breakpoint {
    pub below_width: f32,
    pub items: usize,
}

/// Width-to-items-per-view table. Rules are matched narrowest first.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Breakpoints {
    pub rules: Vec<Breakpoint>,
    pub default_items: usize,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            rules: vec![
                Breakpoint {
                    below_width: BREAKPOINT_MOBILE_PX,
                    items: 1,
                },
                Breakpoint {
                    below_width: BREAKPOINT_TABLET_PX,
                    items: 2,
                },
            ],
            default_items: DEFAULT_ITEMS_PER_VIEW,
        }
    }
}

impl Breakpoints {
    pub fn items_per_view(&self, width: f32) -> usize {
        let mut rules: Vec<&Breakpoint> = self.rules.iter().collect();
        rules.sort_by(|a, b| a.below_width.total_cmp(&b.below_width));
        rules
            .into_iter()
            .find(|r| width < r.below_width)
            .map_or(self.default_items, |r| r.items)
            .max(1)
    }

    pub fn validate(&self) -> Result<()> {
        if self.default_items == 0 || self.rules.iter().any(|r| r.items == 0) {
            return Err(invalid("breakpoint item counts must be at least 1".into()));
        }
        Ok(())
    }
}

/// Read, parse and validate a TOML config file.
pub fn load_config(path: &Path) -> Result<VitrineConfig> {
    let text = std::fs::read_to_string(path)?;
    let config: VitrineConfig = toml::from_str(&text)?;
    config.validate()?;
    debug!(path = %path.display(), "Loaded config");
    Ok(config)
}

fn invalid(msg: String) -> VitrineError {
    VitrineError::InvalidConfig(msg)
}
