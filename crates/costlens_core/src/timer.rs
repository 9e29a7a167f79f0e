//! Fixed-delay loading flag.
//!
//! A metric change shows a short loading state. Each start supersedes the
//! previous one: a pending deadline is replaced and completion callbacks
//! carrying an older token are ignored.

use jiff::{SignedDuration, Timestamp};

pub const DEFAULT_LOADING_DELAY: SignedDuration = SignedDuration::from_millis(800);

/// Identifies one run of the timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken(u64);

#[derive(Debug, Clone)]
pub struct LoadingTimer {
    delay: SignedDuration,
    generation: u64,
    deadline: Option<Timestamp>,
}

impl Default for LoadingTimer {
    fn default() -> Self {
        Self::new(DEFAULT_LOADING_DELAY)
    }
}

impl LoadingTimer {
    pub fn new(delay: SignedDuration) -> Self {
        Self {
            delay,
            generation: 0,
            deadline: None,
        }
    }

    /// Start (or restart) the timer, cancelling any pending run
    pub fn start(&mut self, now: Timestamp) -> TimerToken {
        self.generation += 1;
        self.deadline = Some(now.checked_add(self.delay).unwrap_or(Timestamp::MAX));
        TimerToken(self.generation)
    }

    /// Completion callback from a host timer. Returns true if it cleared the
    /// flag, false for a stale token.
    pub fn complete(&mut self, token: TimerToken) -> bool {
        if token.0 == self.generation && self.deadline.is_some() {
            self.deadline = None;
            true
        } else {
            false
        }
    }

    pub fn cancel(&mut self) {
        self.generation += 1;
        self.deadline = None;
    }

    /// Whether the loading flag is still set at `now`
    pub fn is_active(&self, now: Timestamp) -> bool {
        self.deadline.is_some_and(|deadline| now < deadline)
    }

    /// Clear the flag if the deadline has passed. Returns true when it did.
    pub fn poll(&mut self, now: Timestamp) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
