use std::time::{Duration, Instant};

/// Scanner re-arm gate.
///
/// After a scan is accepted the scanner stays disarmed for `rearm_after`, so
/// a camera that keeps reading the same code does not toggle the attendee
/// back and forth. This is a UI debounce only.
#[derive(Debug, Clone)]
pub struct ScanDebouncer {
    rearm_after: Duration,
    disarmed_until: Option<Instant>,
}

impl ScanDebouncer {
    pub fn new(rearm_after: Duration) -> Self {
        Self {
            rearm_after,
            disarmed_until: None,
        }
    }

    pub fn is_armed(&self, now: Instant) -> bool {
        self.disarmed_until.is_none_or(|until| now >= until)
    }

    /// Returns whether a scan at `now` should be processed, and disarms if so.
    pub fn accept(&mut self, now: Instant) -> bool {
        if !self.is_armed(now) {
            return false;
        }

        self.disarmed_until = Some(now + self.rearm_after);
        true
    }
}

impl Default for ScanDebouncer {
    fn default() -> Self {
        Self::new(Duration::from_secs(2))
    }
}
