use std::cell::Cell;
use std::time::Duration;

/// Source of "now" for stroke timestamps and decay.
///
/// Times are offsets from an arbitrary origin fixed when the clock is built;
/// only differences between two readings are meaningful.
pub trait Clock {
    fn now(&self) -> Duration;
}

/// Wall clock backed by `instant`, which maps to `performance.now()` on wasm.
#[derive(Clone, Copy, Debug)]
pub struct InstantClock {
    origin: instant::Instant,
}

impl InstantClock {
    pub fn new() -> Self {
        Self {
            origin: instant::Instant::now(),
        }
    }
}

impl Default for InstantClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for InstantClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Hand-driven clock for replaying decay deterministically.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<Duration>,
}

impl ManualClock {
    pub fn at_ms(ms: u64) -> Self {
        Self {
            now: Cell::new(Duration::from_millis(ms)),
        }
    }

    pub fn set_ms(&self, ms: u64) {
        self.now.set(Duration::from_millis(ms));
    }

    pub fn advance_ms(&self, ms: u64) {
        self.now.set(self.now.get() + Duration::from_millis(ms));
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

impl<C: Clock + ?Sized> Clock for std::rc::Rc<C> {
    fn now(&self) -> Duration {
        (**self).now()
    }
}
