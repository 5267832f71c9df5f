use crate::consts::DOUBLE_TAP_WINDOW_MS;

/// Classification of a single activation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TapKind {
    Single,
    Double,
}

/// Detects double activations from timestamps supplied by a clock.
///
/// A double is reported when an activation follows the previous one by
/// strictly less than the window. The detector then forgets the pair, so a
/// third quick activation starts a new sequence instead of toggling again.
#[derive(Clone, Debug)]
pub struct TapDetector {
    window_ms: u64,
    last_tap_ms: Option<u64>,
}

impl Default for TapDetector {
    fn default() -> Self {
        Self::new(DOUBLE_TAP_WINDOW_MS)
    }
}

impl TapDetector {
    pub fn new(window_ms: u64) -> Self {
        Self {
            window_ms,
            last_tap_ms: None,
        }
    }

    pub fn window_ms(&self) -> u64 {
        self.window_ms
    }

    pub fn register(&mut self, now_ms: u64) -> TapKind {
        match self.last_tap_ms {
            Some(last) if now_ms.saturating_sub(last) < self.window_ms => {
                self.last_tap_ms = None;
                TapKind::Double
            }
            _ => {
                self.last_tap_ms = Some(now_ms);
                TapKind::Single
            }
        }
    }

    pub fn reset(&mut self) {
        self.last_tap_ms = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_taps_inside_window_are_double() {
        let mut taps = TapDetector::default();
        assert_eq!(taps.register(1_000), TapKind::Single);
        assert_eq!(taps.register(1_250), TapKind::Double);
    }

    #[test]
    fn test_window_boundary_is_exclusive() {
        let mut taps = TapDetector::default();
        taps.register(0);
        assert_eq!(taps.register(300), TapKind::Single);
    }

    #[test]
    fn test_late_third_tap_is_fresh() {
        let mut taps = TapDetector::default();
        taps.register(0);
        assert_eq!(taps.register(200), TapKind::Double);
        assert_eq!(taps.register(600), TapKind::Single);
    }

    #[test]
    fn test_quick_third_tap_starts_new_sequence() {
        let mut taps = TapDetector::default();
        taps.register(0);
        taps.register(100);
        assert_eq!(taps.register(200), TapKind::Single);
        assert_eq!(taps.register(250), TapKind::Double);
    }

    #[test]
    fn test_reset_forgets_pending_tap() {
        let mut taps = TapDetector::new(500);
        taps.register(0);
        taps.reset();
        assert_eq!(taps.register(10), TapKind::Single);
    }
}
