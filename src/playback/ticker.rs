//! Cancellable single-shot timer driven by the host loop

use std::time::{Duration, Instant};

/// At most one pending deadline; rescheduling always replaces it
#[derive(Debug, Clone)]
pub struct Ticker {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Ticker {
    pub fn new(delay: Duration) -> Self {
        Ticker {
            delay,
            deadline: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn set_delay(&mut self, delay: Duration) {
        self.delay = delay;
    }

    /// Cancel any pending tick and schedule one `delay` after `now`
    pub fn schedule(&mut self, now: Instant) {
        self.cancel();
        self.deadline = Some(now + self.delay);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Consume the pending tick if its deadline has passed
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Time left before the pending tick fires
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline.map(|d| d.saturating_duration_since(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_once_after_deadline() {
        let start = Instant::now();
        let mut ticker = Ticker::new(Duration::from_millis(100));
        ticker.schedule(start);
        assert!(!ticker.fire(start + Duration::from_millis(99)));
        assert!(ticker.fire(start + Duration::from_millis(100)));
        assert!(!ticker.fire(start + Duration::from_millis(300)));
        assert!(!ticker.is_pending());
    }

    #[test]
    fn test_reschedule_replaces_deadline() {
        let start = Instant::now();
        let mut ticker = Ticker::new(Duration::from_millis(100));
        ticker.schedule(start);
        ticker.schedule(start + Duration::from_millis(50));
        assert!(!ticker.fire(start + Duration::from_millis(120)));
        assert_eq!(
            ticker.remaining(start + Duration::from_millis(120)),
            Some(Duration::from_millis(30))
        );
        ticker.cancel();
        assert!(!ticker.fire(start + Duration::from_secs(10)));
    }
}
