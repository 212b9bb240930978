//! Scheduler module - the periodic timer as an injected capability
//!
//! A game never owns a timer. The session asks its scheduler to `start`,
//! `stop` or `reschedule`; the binary polls an [`IntervalScheduler`] from its
//! event loop, and tests use a [`ManualScheduler`] that only records calls.

use std::time::{Duration, Instant};

/// At most one active periodic timer.
pub trait Scheduler {
    /// Start ticking every `period`. Restarts the phase if already running.
    fn start(&mut self, period: Duration);

    /// Stop ticking. Idempotent; no tick is due after this returns.
    fn stop(&mut self);

    /// Change the period of a running timer (stop + start with the new period).
    /// A stopped timer stays stopped but remembers the period.
    fn reschedule(&mut self, period: Duration);

    fn is_running(&self) -> bool;

    /// Current period (the last one passed to `start` or `reschedule`)
    fn period(&self) -> Duration;
}

/// Deadline-based timer for a single-threaded poll loop.
#[derive(Debug, Clone)]
pub struct IntervalScheduler {
    period: Duration,
    next_due: Option<Instant>,
}

impl IntervalScheduler {
    pub fn new() -> Self {
        Self {
            period: Duration::ZERO,
            next_due: None,
        }
    }

    /// True (at most once per period) when a tick is due at `now`.
    ///
    /// Missed periods are not replayed: the next deadline is measured from
    /// `now`, so a stalled loop never fires a burst of ticks.
    pub fn poll_due(&mut self, now: Instant) -> bool {
        match self.next_due {
            Some(due) if now >= due => {
                self.next_due = Some(now + self.period);
                true
            }
            _ => false,
        }
    }

    /// How long the loop may block waiting for input before the next tick.
    /// `idle` is returned while stopped.
    pub fn timeout(&self, now: Instant, idle: Duration) -> Duration {
        match self.next_due {
            Some(due) => due.saturating_duration_since(now),
            None => idle,
        }
    }

    fn arm(&mut self, now: Instant) {
        self.next_due = Some(now + self.period);
    }
}

impl Default for IntervalScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for IntervalScheduler {
    fn start(&mut self, period: Duration) {
        self.period = period;
        self.arm(Instant::now());
    }

    fn stop(&mut self) {
        self.next_due = None;
    }

    fn reschedule(&mut self, period: Duration) {
        self.period = period;
        if self.next_due.is_some() {
            self.arm(Instant::now());
        }
    }

    fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    fn period(&self) -> Duration {
        self.period
    }
}

/// One recorded scheduler request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerCall {
    Start(Duration),
    Stop,
    Reschedule(Duration),
}

/// Test double: records every request and never fires on its own.
#[derive(Debug, Clone, Default)]
pub struct ManualScheduler {
    running: bool,
    period: Duration,
    calls: Vec<SchedulerCall>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[SchedulerCall] {
        &self.calls
    }

    pub fn take_calls(&mut self) -> Vec<SchedulerCall> {
        std::mem::take(&mut self.calls)
    }
}

impl Scheduler for ManualScheduler {
    fn start(&mut self, period: Duration) {
        self.running = true;
        self.period = period;
        self.calls.push(SchedulerCall::Start(period));
    }

    fn stop(&mut self) {
        self.running = false;
        self.calls.push(SchedulerCall::Stop);
    }

    fn reschedule(&mut self, period: Duration) {
        self.period = period;
        self.calls.push(SchedulerCall::Reschedule(period));
    }

    fn is_running(&self) -> bool {
        self.running
    }

    fn period(&self) -> Duration {
        self.period
    }
}
