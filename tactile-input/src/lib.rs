//! Interrupt-driven push-button driver
//!
//! Detects button down, button up, click and long-press gestures on an
//! active-low momentary switch. The work is split across two execution
//! contexts that share one [`ButtonSignals`] value:
//!
//! ```text
//!  GPIO edge ──► EdgeListener::on_interrupt()      (interrupt context)
//!                     │  flags + timestamp
//!                     ▼
//!               ButtonSignals  (critical-section protected)
//!                     │
//!                     ▼
//!  main loop ──► Button::poll(&mut ctx) ──► callbacks   (main context)
//! ```
//!
//! The interrupt side never allocates, blocks or calls user code. All
//! callbacks run from [`Button::poll`], which should be called every 10 ms
//! or so.
//!
//! # Example
//!
//! ```ignore
//! static SIGNALS: ButtonSignals = ButtonSignals::new();
//!
//! // In the GPIO interrupt handler:
//! listener.on_interrupt();
//!
//! // In the main loop:
//! let mut button = Button::new(&SIGNALS, clock, ButtonConfig::default())?
//!     .with_on_click(|app: &mut App| app.next_page())
//!     .with_on_long_press(|app: &mut App| app.open_menu());
//! loop {
//!     button.poll(&mut app);
//! }
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod button;
pub mod config;
pub mod events;
pub mod signals;

#[cfg(test)]
mod mock;

pub use button::{Button, Callback, FiredEvents};
pub use config::{ButtonConfig, ConfigError, DEFAULT_LONG_PRESS_MS};
pub use events::ButtonEvent;
pub use signals::{ButtonSignals, EdgeListener, Transition};
