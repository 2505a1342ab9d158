use std::time::{Duration, Instant};

/// Source of the current time for cooldown deadlines
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Wall clock used by the running application
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// One-shot cancellable timer.
///
/// Arming sets a deadline `duration` from now. The owner polls it with
/// [`Cooldown::fire_if_due`]; the deadline fires at most once per arm.
/// Dropping the cooldown cancels any pending deadline.
#[derive(Debug)]
pub struct Cooldown<C: Clock> {
    clock: C,
    duration: Duration,
    deadline: Option<Instant>,
}

impl<C: Clock> Cooldown<C> {
    pub fn new(clock: C, duration: Duration) -> Self {
        Self {
            clock,
            duration,
            deadline: None,
        }
    }

    /// Starts (or restarts) the cooldown window
    pub fn arm(&mut self) {
        self.deadline = Some(self.clock.now() + self.duration);
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Clears the deadline if it has passed. Returns true exactly once per arm.
    pub fn fire_if_due(&mut self) -> bool {
        let due = self
            .deadline
            .is_some_and(|deadline| self.clock.now() >= deadline);
        if due {
            self.deadline = None;
        }
        due
    }

    pub fn cancel(&mut self) {
        if self.deadline.take().is_some() {
            log::trace!("cooldown cancelled before expiry");
        }
    }
}

impl<C: Clock> Drop for Cooldown<C> {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Manually advanced clock for deterministic timing tests
#[cfg(test)]
#[derive(Debug, Clone)]
pub struct ManualClock {
    origin: Instant,
    elapsed: std::rc::Rc<std::cell::Cell<Duration>>,
}

#[cfg(test)]
impl ManualClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            elapsed: std::rc::Rc::new(std::cell::Cell::new(Duration::ZERO)),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.elapsed.set(self.elapsed.get() + by);
    }
}

#[cfg(test)]
impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.origin + self.elapsed.get()
    }
}
