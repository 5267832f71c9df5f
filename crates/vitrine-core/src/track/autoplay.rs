/// Fixed-interval timer polled against an injected clock.
///
/// Ticks are scheduled from the previous due time rather than from the poll
/// time, so a late poll does not stretch the following interval.
#[derive(Clone, Debug)]
pub struct AutoplayTimer {
    interval_ms: u64,
    next_due_ms: Option<u64>,
}

impl AutoplayTimer {
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            next_due_ms: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.next_due_ms.is_some()
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// (Re)start the interval at `now_ms`.
    pub fn start(&mut self, now_ms: u64) {
        self.next_due_ms = Some(now_ms.saturating_add(self.interval_ms));
    }

    pub fn cancel(&mut self) {
        self.next_due_ms = None;
    }

    /// Number of ticks that became due up to `now_ms`.
    pub fn poll(&mut self, now_ms: u64) -> u64 {
        let Some(due) = self.next_due_ms else {
            return 0;
        };
        if now_ms < due {
            return 0;
        }
        let ticks = 1 + (now_ms - due) / self.interval_ms;
        self.next_due_ms = Some(due + ticks * self.interval_ms);
        ticks
    }

    /// Time left until the next tick, for scheduling a repaint.
    pub fn remaining_ms(&self, now_ms: u64) -> Option<u64> {
        self.next_due_ms.map(|due| due.saturating_sub(now_ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_running_until_started() {
        let mut timer = AutoplayTimer::new(1000);
        assert!(!timer.is_running());
        assert_eq!(timer.poll(50_000), 0);
    }

    #[test]
    fn test_ticks_on_interval() {
        let mut timer = AutoplayTimer::new(1000);
        timer.start(0);
        assert_eq!(timer.poll(999), 0);
        assert_eq!(timer.poll(1000), 1);
        assert_eq!(timer.poll(1500), 0);
        assert_eq!(timer.remaining_ms(1500), Some(500));
    }

    #[test]
    fn test_late_poll_catches_up_without_drift() {
        let mut timer = AutoplayTimer::new(1000);
        timer.start(0);
        assert_eq!(timer.poll(3_200), 3);
        assert_eq!(timer.remaining_ms(3_200), Some(800));
    }

    #[test]
    fn test_cancel_stops_ticks() {
        let mut timer = AutoplayTimer::new(1000);
        timer.start(0);
        timer.cancel();
        assert_eq!(timer.poll(5_000), 0);
        assert_eq!(timer.remaining_ms(5_000), None);
    }
}
