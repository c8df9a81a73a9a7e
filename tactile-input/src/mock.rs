//! Host test doubles for pins and clocks

use core::cell::Cell;

use tactile_hal::{Clock, Edge, EdgeInterrupt, InputPin, Instant, Level};

/// Pin whose level is driven by the test
pub struct MockPin {
    level: Cell<Level>,
    armed: Cell<Option<Edge>>,
    listen_calls: Cell<u32>,
}

impl MockPin {
    /// Idle pin: pulled up, interrupt disarmed
    pub fn new() -> Self {
        Self {
            level: Cell::new(Level::High),
            armed: Cell::new(None),
            listen_calls: Cell::new(0),
        }
    }

    pub fn set_level(&self, level: Level) {
        self.level.set(level);
    }

    pub fn armed(&self) -> Option<Edge> {
        self.armed.get()
    }

    pub fn listen_calls(&self) -> u32 {
        self.listen_calls.get()
    }
}

impl InputPin for &MockPin {
    fn level(&mut self) -> Level {
        self.level.get()
    }
}

impl EdgeInterrupt for &MockPin {
    fn listen(&mut self, edge: Edge) {
        self.armed.set(Some(edge));
        self.listen_calls.set(self.listen_calls.get() + 1);
    }

    fn unlisten(&mut self) {
        self.armed.set(None);
    }

    fn is_listening(&self) -> bool {
        self.armed.get().is_some()
    }
}

/// Clock advanced manually by the test
pub struct MockClock {
    now: Cell<u32>,
}

impl MockClock {
    pub fn starting_at(ms: u32) -> Self {
        Self { now: Cell::new(ms) }
    }

    pub fn advance(&self, ms: u32) {
        self.now.set(self.now.get().wrapping_add(ms));
    }
}

impl Clock for MockClock {
    fn now(&self) -> Instant {
        Instant::from_millis(self.now.get())
    }
}
