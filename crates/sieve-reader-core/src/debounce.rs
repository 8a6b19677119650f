//! Trailing-edge debounce slot.
//!
//! The slot does not own a timer. The caller schedules one for
//! [`Debounce::quiet_period`], arms the slot with the timer's handle and
//! cancels whatever handle [`Debounce::arm`] hands back. When a timer fires,
//! [`Debounce::fire`] yields the latest pending value exactly once.

use std::time::Duration;

#[derive(Debug)]
pub struct Debounce<H, V> {
    quiet: Duration,
    pending: Option<(H, V)>,
}

impl<H, V> Debounce<H, V> {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            pending: None,
        }
    }

    pub fn from_millis(ms: u32) -> Self {
        Self::new(Duration::from_millis(u64::from(ms)))
    }

    pub fn quiet_period(&self) -> Duration {
        self.quiet
    }

    /// Record a new value under a freshly scheduled timer. Returns the
    /// superseded timer handle, which must be cancelled.
    pub fn arm(&mut self, handle: H, value: V) -> Option<H> {
        self.pending.replace((handle, value)).map(|(h, _)| h)
    }

    /// The timer fired: take the pending value.
    pub fn fire(&mut self) -> Option<V> {
        self.pending.take().map(|(_, v)| v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn burst_applies_last_value_once() {
        let mut slot: Debounce<u32, String> = Debounce::from_millis(200);
        assert_eq!(slot.quiet_period(), Duration::from_millis(200));

        assert_eq!(slot.arm(1, "p".into()), None);
        assert_eq!(slot.arm(2, "pr".into()), Some(1));
        assert_eq!(slot.arm(3, "pri".into()), Some(2));

        assert_eq!(slot.fire().as_deref(), Some("pri"));
        assert_eq!(slot.fire(), None);
    }
}
