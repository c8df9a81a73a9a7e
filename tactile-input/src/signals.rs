//! State shared between the interrupt handler and the main loop
//!
//! The interrupt side is the only writer of the press/release fields; the
//! main loop only clears pending flags and sets the long-press latch. Every
//! access happens inside one short critical section over a `Copy` snapshot,
//! so the pressed flag and press timestamp are never observed half-updated.

use core::cell::Cell;

use critical_section::Mutex;
use tactile_hal::{Clock, Edge, EdgeInterrupt, InputPin, Instant, Level};

/// Debounced level change recorded by the edge handler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Transition {
    /// Released → pressed
    Pressed,
    /// Pressed → released
    Released,
}

/// Raw state of one button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SignalState {
    /// Debounced logical state (not the raw pin level)
    pub pressed: bool,
    /// Time of the last press, only set while pressed
    pub press_start: Option<Instant>,
    pub down_pending: bool,
    pub up_pending: bool,
    pub click_pending: bool,
    /// A long press was reported for the current press cycle
    pub long_press_handled: bool,
}

impl SignalState {
    pub(crate) const IDLE: Self = Self {
        pressed: false,
        press_start: None,
        down_pending: false,
        up_pending: false,
        click_pending: false,
        long_press_handled: false,
    };

    /// Apply an observed pin level (active-low)
    ///
    /// Only the transition that matches the observed level can fire, so at
    /// most one transition happens per call.
    fn apply_level(&mut self, level: Level, now: Instant) -> Option<Transition> {
        if self.pressed && level == Level::High {
            self.pressed = false;
            self.press_start = None;
            self.up_pending = true;
            if !self.long_press_handled {
                self.click_pending = true;
            }
            return Some(Transition::Released);
        }

        if !self.pressed && level == Level::Low {
            self.pressed = true;
            self.press_start = Some(now);
            self.down_pending = true;
            self.long_press_handled = false;
            return Some(Transition::Pressed);
        }

        None
    }
}

/// Pending flags drained by one poll
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct Pending {
    pub down: bool,
    pub click: bool,
    pub up: bool,
}

/// Button state shared between interrupt and main context
///
/// `const`-constructible so it can live in a `static`.
pub struct ButtonSignals {
    state: Mutex<Cell<SignalState>>,
}

impl Default for ButtonSignals {
    fn default() -> Self {
        Self::new()
    }
}

impl ButtonSignals {
    /// Create idle button state
    pub const fn new() -> Self {
        Self {
            state: Mutex::new(Cell::new(SignalState::IDLE)),
        }
    }

    /// Record an observed pin level
    ///
    /// Interrupt-safe: no allocation, no blocking beyond the critical
    /// section, no user code.
    pub fn on_edge(&self, level: Level, now: Instant) -> Option<Transition> {
        self.update(|state| state.apply_level(level, now))
    }

    /// Current debounced state
    pub fn is_pressed(&self) -> bool {
        self.snapshot().pressed
    }

    /// Time the current press started, `None` while released
    pub fn press_start(&self) -> Option<Instant> {
        self.snapshot().press_start
    }

    /// Clear all transient state
    pub fn reset(&self) {
        self.update(|state| *state = SignalState::IDLE);
    }

    /// Take and clear the pending down/click/up flags in one step
    pub(crate) fn take_pending(&self) -> Pending {
        self.update(|state| {
            let pending = Pending {
                down: state.down_pending,
                click: state.click_pending,
                up: state.up_pending,
            };
            state.down_pending = false;
            state.click_pending = false;
            state.up_pending = false;
            pending
        })
    }

    /// Latch the long press if the current press has been held long enough
    ///
    /// Returns `true` exactly once per qualifying press cycle. A negative
    /// elapsed time never qualifies.
    pub(crate) fn try_latch_long_press(&self, now: Instant, threshold_ms: u32) -> bool {
        let threshold = i32::try_from(threshold_ms).unwrap_or(i32::MAX);
        self.update(|state| {
            if !state.pressed || state.long_press_handled {
                return false;
            }
            match state.press_start {
                Some(start) if now.since(start) > threshold => {
                    state.long_press_handled = true;
                    true
                }
                _ => false,
            }
        })
    }

    pub(crate) fn snapshot(&self) -> SignalState {
        critical_section::with(|cs| self.state.borrow(cs).get())
    }

    fn update<R>(&self, f: impl FnOnce(&mut SignalState) -> R) -> R {
        critical_section::with(|cs| {
            let cell = self.state.borrow(cs);
            let mut state = cell.get();
            let result = f(&mut state);
            cell.set(state);
            result
        })
    }
}

/// Interrupt-context half of a button
///
/// Owns the input line. Arms the interrupt on both edges when created and
/// disarms it when dropped. Call [`EdgeListener::on_interrupt`] from the
/// line's interrupt handler.
pub struct EdgeListener<'s, P, C>
where
    P: InputPin + EdgeInterrupt,
    C: Clock,
{
    signals: &'s ButtonSignals,
    pin: P,
    clock: C,
}

impl<'s, P, C> EdgeListener<'s, P, C>
where
    P: InputPin + EdgeInterrupt,
    C: Clock,
{
    /// Take ownership of the pin and arm its interrupt
    pub fn new(signals: &'s ButtonSignals, mut pin: P, clock: C) -> Self {
        pin.listen(Edge::Both);
        Self {
            signals,
            pin,
            clock,
        }
    }

    /// Handle one edge interrupt
    ///
    /// The line's own interrupt is disabled while the state is updated so
    /// the handler cannot re-enter itself.
    pub fn on_interrupt(&mut self) -> Option<Transition> {
        self.pin.unlisten();
        let level = self.pin.level();
        let transition = self.signals.on_edge(level, self.clock.now());
        self.pin.listen(Edge::Both);
        transition
    }

    /// The underlying input line
    pub fn pin(&self) -> &P {
        &self.pin
    }
}

impl<P, C> Drop for EdgeListener<'_, P, C>
where
    P: InputPin + EdgeInterrupt,
    C: Clock,
{
    fn drop(&mut self) {
        self.pin.unlisten();
    }
}
