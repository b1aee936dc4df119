use std::time::Duration;

/// Identifies one scheduled debounce firing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DebounceTicket(u64);

/// A cancellable, restartable delay. Scheduling supersedes any pending
/// ticket; only the most recent ticket is allowed to fire.
#[derive(Debug, Clone)]
pub struct Debouncer {
    window: Duration,
    issued: u64,
    armed: Option<u64>,
}

impl Debouncer {
    pub fn new(window: Duration) -> Self {
        Self { window, issued: 0, armed: None }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    pub fn schedule(&mut self) -> DebounceTicket {
        self.issued += 1;
        self.armed = Some(self.issued);
        DebounceTicket(self.issued)
    }

    pub fn cancel(&mut self) {
        self.armed = None;
    }

    pub fn is_pending(&self) -> bool {
        self.armed.is_some()
    }

    /// Called when `ticket`'s delay has elapsed. Returns true exactly once,
    /// and only for the ticket that is still armed.
    pub fn fire(&mut self, ticket: DebounceTicket) -> bool {
        if self.armed == Some(ticket.0) {
            self.armed = None;
            true
        } else {
            false
        }
    }
}

/// Waits out the debounce window for `ticket`.
pub async fn wait(ticket: DebounceTicket, window: Duration) -> DebounceTicket {
    tokio::time::sleep(window).await;
    ticket
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_latest_ticket_fires() {
        let mut d = Debouncer::new(Duration::from_millis(300));
        let first = d.schedule();
        let second = d.schedule();
        assert!(!d.fire(first));
        assert!(d.fire(second));
        assert!(!d.fire(second), "a ticket fires at most once");
    }

    #[test]
    fn cancel_disarms() {
        let mut d = Debouncer::new(Duration::from_millis(300));
        let t = d.schedule();
        d.cancel();
        assert!(!d.is_pending());
        assert!(!d.fire(t));
    }

    #[tokio::test(start_paused = true)]
    async fn wait_sleeps_for_window() {
        let start = tokio::time::Instant::now();
        let mut d = Debouncer::new(Duration::from_millis(300));
        let t = d.schedule();
        let fired = wait(t, d.window()).await;
        assert_eq!(fired, t);
        assert!(start.elapsed() >= Duration::from_millis(300));
    }
}
