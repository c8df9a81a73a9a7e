//! Main-loop half of a button
//!
//! [`Button`] holds the user callbacks and the long-press threshold. It
//! drains the flags recorded by the interrupt handler and invokes the
//! callbacks from the caller's own context.
//!
//! Callback semantics:
//!
//! | Callback        | Fires when                                              |
//! |-----------------|---------------------------------------------------------|
//! | `on_down`       | The button went down (always)                           |
//! | `on_click`      | The button went up and no long press was reported       |
//! | `on_long_press` | First poll after the hold time exceeds the threshold    |
//! | `on_up`         | The button went up (always)                             |
//!
//! Long presses are only detected while an `on_long_press` callback is
//! registered; without one every release is a click.

use heapless::Vec;
use tactile_hal::Clock;

use crate::config::{ButtonConfig, ConfigError};
use crate::events::ButtonEvent;
use crate::signals::ButtonSignals;

/// Callback invoked from [`Button::poll`] with the application context
pub type Callback<Ctx> = fn(&mut Ctx);

/// Events delivered by one poll, in delivery order
pub type FiredEvents = Vec<ButtonEvent, 4>;

/// Main-loop half of a button
///
/// `Ctx` is the application state handed to every callback.
pub struct Button<'s, C: Clock, Ctx = ()> {
    signals: &'s ButtonSignals,
    clock: C,
    config: ButtonConfig,
    on_down: Option<Callback<Ctx>>,
    on_up: Option<Callback<Ctx>>,
    on_click: Option<Callback<Ctx>>,
    on_long_press: Option<Callback<Ctx>>,
}

impl<'s, C: Clock, Ctx> Button<'s, C, Ctx> {
    /// Create a button with no callbacks registered
    pub fn new(
        signals: &'s ButtonSignals,
        clock: C,
        config: ButtonConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            signals,
            clock,
            config,
            on_down: None,
            on_up: None,
            on_click: None,
            on_long_press: None,
        })
    }

    /// Register the button-down callback
    pub fn with_on_down(mut self, callback: Callback<Ctx>) -> Self {
        self.on_down = Some(callback);
        self
    }

    /// Register the button-up callback
    pub fn with_on_up(mut self, callback: Callback<Ctx>) -> Self {
        self.on_up = Some(callback);
        self
    }

    /// Register the click callback
    pub fn with_on_click(mut self, callback: Callback<Ctx>) -> Self {
        self.on_click = Some(callback);
        self
    }

    /// Register the long-press callback
    pub fn with_on_long_press(mut self, callback: Callback<Ctx>) -> Self {
        self.on_long_press = Some(callback);
        self
    }

    /// Set or clear the button-down callback
    pub fn set_on_down(&mut self, callback: Option<Callback<Ctx>>) {
        self.on_down = callback;
    }

    /// Set or clear the button-up callback
    pub fn set_on_up(&mut self, callback: Option<Callback<Ctx>>) {
        self.on_up = callback;
    }

    /// Set or clear the click callback
    pub fn set_on_click(&mut self, callback: Option<Callback<Ctx>>) {
        self.on_click = callback;
    }

    /// Set or clear the long-press callback
    pub fn set_on_long_press(&mut self, callback: Option<Callback<Ctx>>) {
        self.on_long_press = callback;
    }

    /// Change the long-press threshold
    pub fn set_long_press_threshold(&mut self, long_press_ms: u32) -> Result<(), ConfigError> {
        let config = ButtonConfig::with_long_press_ms(long_press_ms);
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Current configuration
    pub fn config(&self) -> &ButtonConfig {
        &self.config
    }

    /// Debounced pressed state
    pub fn is_pressed(&self) -> bool {
        self.signals.is_pressed()
    }

    /// How long the current press has lasted, `None` while released
    pub fn held_for(&self) -> Option<u32> {
        let start = self.signals.press_start()?;
        Some(self.clock.now().since(start).max(0) as u32)
    }

    /// Clear all transient state, keeping the registered callbacks
    pub fn reset(&mut self) {
        self.signals.reset();
    }

    /// Deliver pending events
    ///
    /// Call this from the main loop, ideally every 10 ms or faster; long
    /// press timing is only as precise as the poll interval. Events pile up
    /// between polls, so one call can deliver down, click, long press and up
    /// together. Returns the events delivered, whether or not a callback was
    /// registered for them.
    pub fn poll(&mut self, ctx: &mut Ctx) -> FiredEvents {
        let mut fired = FiredEvents::new();
        let pending = self.signals.take_pending();

        if pending.down {
            Self::fire(self.on_down, ctx, ButtonEvent::Down, &mut fired);
        }

        if pending.click {
            Self::fire(self.on_click, ctx, ButtonEvent::Click, &mut fired);
        }

        if self.on_long_press.is_some()
            && self
                .signals
                .try_latch_long_press(self.clock.now(), self.config.long_press_ms)
        {
            Self::fire(self.on_long_press, ctx, ButtonEvent::LongPress, &mut fired);
        }

        if pending.up {
            Self::fire(self.on_up, ctx, ButtonEvent::Up, &mut fired);
        }

        fired
    }

    fn fire(
        callback: Option<Callback<Ctx>>,
        ctx: &mut Ctx,
        event: ButtonEvent,
        fired: &mut FiredEvents,
    ) {
        #[cfg(feature = "defmt")]
        defmt::trace!("button: {}", event);

        if let Some(callback) = callback {
            callback(ctx);
        }
        // At most one of each event per poll
        let _ = fired.push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{MockClock, MockPin};
    use crate::signals::EdgeListener;
    use proptest::prelude::*;
    use tactile_hal::Level;

    #[derive(Default)]
    struct Recorder {
        events: std::vec::Vec<ButtonEvent>,
    }

    fn record_down(r: &mut Recorder) {
        r.events.push(ButtonEvent::Down);
    }

    fn record_up(r: &mut Recorder) {
        r.events.push(ButtonEvent::Up);
    }

    fn record_click(r: &mut Recorder) {
        r.events.push(ButtonEvent::Click);
    }

    fn record_long_press(r: &mut Recorder) {
        r.events.push(ButtonEvent::LongPress);
    }

    fn full_button<'a>(
        signals: &'a ButtonSignals,
        clock: &'a MockClock,
        long_press_ms: u32,
    ) -> Button<'a, &'a MockClock, Recorder> {
        Button::new(signals, clock, ButtonConfig::with_long_press_ms(long_press_ms))
            .unwrap()
            .with_on_down(record_down)
            .with_on_up(record_up)
            .with_on_click(record_click)
            .with_on_long_press(record_long_press)
    }

    fn press(pin: &MockPin, listener: &mut EdgeListener<'_, &MockPin, &MockClock>) {
        pin.set_level(Level::Low);
        listener.on_interrupt();
    }

    fn release(pin: &MockPin, listener: &mut EdgeListener<'_, &MockPin, &MockClock>) {
        pin.set_level(Level::High);
        listener.on_interrupt();
    }

    #[test]
    fn test_short_press_clicks() {
        let signals = ButtonSignals::new();
        let pin = MockPin::new();
        let clock = MockClock::starting_at(0);
        let mut listener = EdgeListener::new(&signals, &pin, &clock);
        let mut button = full_button(&signals, &clock, 1500);
        let mut rec = Recorder::default();

        press(&pin, &mut listener);
        assert_eq!(button.poll(&mut rec).as_slice(), &[ButtonEvent::Down]);
        clock.advance(200);
        button.poll(&mut rec);
        release(&pin, &mut listener);
        button.poll(&mut rec);

        assert_eq!(
            rec.events,
            [ButtonEvent::Down, ButtonEvent::Click, ButtonEvent::Up]
        );
    }

    #[test]
    fn test_long_press_fires_once_and_suppresses_click() {
        let signals = ButtonSignals::new();
        let pin = MockPin::new();
        let clock = MockClock::starting_at(0);
        let mut listener = EdgeListener::new(&signals, &pin, &clock);
        let mut button = full_button(&signals, &clock, 1500);
        let mut rec = Recorder::default();

        press(&pin, &mut listener);
        button.poll(&mut rec);
        for _ in 0..40 {
            clock.advance(100);
            button.poll(&mut rec);
        }
        release(&pin, &mut listener);
        button.poll(&mut rec);

        assert_eq!(
            rec.events,
            [ButtonEvent::Down, ButtonEvent::LongPress, ButtonEvent::Up]
        );
    }

    #[test]
    fn test_long_press_fires_on_first_poll_past_threshold() {
        let signals = ButtonSignals::new();
        let pin = MockPin::new();
        let clock = MockClock::starting_at(0);
        let mut listener = EdgeListener::new(&signals, &pin, &clock);
        let mut button = full_button(&signals, &clock, 1500);
        let mut rec = Recorder::default();

        press(&pin, &mut listener);
        button.poll(&mut rec);
        clock.advance(1500);
        assert!(button.poll(&mut rec).is_empty());
        clock.advance(1);
        assert_eq!(button.poll(&mut rec).as_slice(), &[ButtonEvent::LongPress]);
    }

    #[test]
    fn test_press_between_polls_is_not_lost() {
        let signals = ButtonSignals::new();
        let pin = MockPin::new();
        let clock = MockClock::starting_at(0);
        let mut listener = EdgeListener::new(&signals, &pin, &clock);
        let mut button = full_button(&signals, &clock, 1500);
        let mut rec = Recorder::default();

        press(&pin, &mut listener);
        clock.advance(3);
        release(&pin, &mut listener);

        let fired = button.poll(&mut rec);
        assert_eq!(
            fired.as_slice(),
            &[ButtonEvent::Down, ButtonEvent::Click, ButtonEvent::Up]
        );
        assert_eq!(rec.events, fired.as_slice());
    }

    #[test]
    fn test_without_long_press_callback_every_release_clicks() {
        let signals = ButtonSignals::new();
        let pin = MockPin::new();
        let clock = MockClock::starting_at(0);
        let mut listener = EdgeListener::new(&signals, &pin, &clock);
        let mut button: Button<'_, _, Recorder> =
            Button::new(&signals, &clock, ButtonConfig::default())
                .unwrap()
                .with_on_click(record_click);
        let mut rec = Recorder::default();

        press(&pin, &mut listener);
        button.poll(&mut rec);
        clock.advance(10_000);
        button.poll(&mut rec);
        release(&pin, &mut listener);
        button.poll(&mut rec);

        assert_eq!(rec.events, [ButtonEvent::Click]);
    }

    #[test]
    fn test_events_reported_without_callbacks() {
        let signals = ButtonSignals::new();
        let pin = MockPin::new();
        let clock = MockClock::starting_at(0);
        let mut listener = EdgeListener::new(&signals, &pin, &clock);
        let mut button: Button<'_, _, ()> =
            Button::new(&signals, &clock, ButtonConfig::default()).unwrap();

        press(&pin, &mut listener);
        release(&pin, &mut listener);
        assert_eq!(
            button.poll(&mut ()).as_slice(),
            &[ButtonEvent::Down, ButtonEvent::Click, ButtonEvent::Up]
        );
        assert!(button.poll(&mut ()).is_empty());
    }

    #[test]
    fn test_reset_then_poll_fires_nothing() {
        let signals = ButtonSignals::new();
        let pin = MockPin::new();
        let clock = MockClock::starting_at(0);
        let mut listener = EdgeListener::new(&signals, &pin, &clock);
        let mut button = full_button(&signals, &clock, 1500);
        let mut rec = Recorder::default();

        press(&pin, &mut listener);
        clock.advance(5000);
        button.reset();
        assert!(button.poll(&mut rec).is_empty());
        assert!(rec.events.is_empty());
        assert!(!button.is_pressed());
    }

    #[test]
    fn test_reset_keeps_callbacks() {
        let signals = ButtonSignals::new();
        let pin = MockPin::new();
        let clock = MockClock::starting_at(0);
        let mut listener = EdgeListener::new(&signals, &pin, &clock);
        let mut button = full_button(&signals, &clock, 1500);
        let mut rec = Recorder::default();

        button.reset();
        press(&pin, &mut listener);
        button.poll(&mut rec);
        assert_eq!(rec.events, [ButtonEvent::Down]);
    }

    #[test]
    fn test_cleared_callback_is_not_invoked() {
        let signals = ButtonSignals::new();
        let pin = MockPin::new();
        let clock = MockClock::starting_at(0);
        let mut listener = EdgeListener::new(&signals, &pin, &clock);
        let mut button = full_button(&signals, &clock, 1500);
        let mut rec = Recorder::default();

        button.set_on_down(None);
        button.set_on_click(None);
        press(&pin, &mut listener);
        release(&pin, &mut listener);
        button.poll(&mut rec);
        assert_eq!(rec.events, [ButtonEvent::Up]);
    }

    #[test]
    fn test_callback_can_be_replaced() {
        fn count(n: &mut u32) {
            *n += 1;
        }

        let signals = ButtonSignals::new();
        let pin = MockPin::new();
        let clock = MockClock::starting_at(0);
        let mut listener = EdgeListener::new(&signals, &pin, &clock);
        let mut button: Button<'_, _, u32> =
            Button::new(&signals, &clock, ButtonConfig::default()).unwrap();
        button.set_on_click(Some(count));

        let mut clicks = 0;
        for _ in 0..3 {
            press(&pin, &mut listener);
            release(&pin, &mut listener);
            button.poll(&mut clicks);
        }
        assert_eq!(clicks, 3);
    }

    #[test]
    fn test_long_press_across_clock_wrap() {
        let signals = ButtonSignals::new();
        let pin = MockPin::new();
        let clock = MockClock::starting_at(u32::MAX - 100);
        let mut listener = EdgeListener::new(&signals, &pin, &clock);
        let mut button = full_button(&signals, &clock, 1500);
        let mut rec = Recorder::default();

        press(&pin, &mut listener);
        button.poll(&mut rec);
        clock.advance(50);
        button.poll(&mut rec);
        // Past the wrap, still short of the threshold
        clock.advance(100);
        button.poll(&mut rec);
        assert_eq!(rec.events, [ButtonEvent::Down]);

        clock.advance(1400);
        button.poll(&mut rec);
        assert_eq!(rec.events, [ButtonEvent::Down, ButtonEvent::LongPress]);
        assert_eq!(button.held_for(), Some(1550));
    }

    #[test]
    fn test_held_for() {
        let signals = ButtonSignals::new();
        let pin = MockPin::new();
        let clock = MockClock::starting_at(1000);
        let mut listener = EdgeListener::new(&signals, &pin, &clock);
        let button: Button<'_, _, ()> =
            Button::new(&signals, &clock, ButtonConfig::default()).unwrap();

        assert_eq!(button.held_for(), None);
        press(&pin, &mut listener);
        clock.advance(250);
        assert_eq!(button.held_for(), Some(250));
        release(&pin, &mut listener);
        assert_eq!(button.held_for(), None);
    }

    #[test]
    fn test_invalid_threshold_rejected() {
        let signals = ButtonSignals::new();
        let clock = MockClock::starting_at(0);
        let result: Result<Button<'_, _, ()>, _> =
            Button::new(&signals, &clock, ButtonConfig::with_long_press_ms(0));
        assert_eq!(result.err(), Some(ConfigError::ZeroThreshold));

        let mut button: Button<'_, _, ()> =
            Button::new(&signals, &clock, ButtonConfig::default()).unwrap();
        assert_eq!(
            button.set_long_press_threshold(0),
            Err(ConfigError::ZeroThreshold)
        );
        assert_eq!(button.config().long_press_ms, 1500);
        assert!(button.set_long_press_threshold(800).is_ok());
        assert_eq!(button.config().long_press_ms, 800);
    }

    /// One press cycle: hold time and how many polls happen during the hold
    fn press_cycle() -> impl Strategy<Value = (u32, u32)> {
        (0u32..4000, 1u32..6)
    }

    proptest! {
        #[test]
        fn prop_each_press_ends_in_exactly_one_gesture(
            threshold in 1u32..2500,
            start in any::<u32>(),
            cycles in proptest::collection::vec(press_cycle(), 1..12),
        ) {
            let signals = ButtonSignals::new();
            let pin = MockPin::new();
            let clock = MockClock::starting_at(start);
            let mut listener = EdgeListener::new(&signals, &pin, &clock);
            let mut button = full_button(&signals, &clock, threshold);
            let mut rec = Recorder::default();
            let mut expected = std::vec::Vec::new();

            for (hold_ms, polls) in cycles {
                press(&pin, &mut listener);
                button.poll(&mut rec);

                let step = hold_ms / polls;
                for i in 0..polls {
                    let advance = if i == polls - 1 { hold_ms - step * (polls - 1) } else { step };
                    clock.advance(advance);
                    button.poll(&mut rec);
                }

                release(&pin, &mut listener);
                button.poll(&mut rec);
                clock.advance(20);
                button.poll(&mut rec);

                expected.push(ButtonEvent::Down);
                if hold_ms > threshold {
                    expected.push(ButtonEvent::LongPress);
                } else {
                    expected.push(ButtonEvent::Click);
                }
                expected.push(ButtonEvent::Up);
            }

            prop_assert_eq!(rec.events, expected);
        }
    }
}
