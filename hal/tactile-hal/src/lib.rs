//! Tactile Hardware Abstraction Layer
//!
//! This crate defines the narrow collaborator traits the button and display
//! crates are written against. A board support crate implements them for a
//! specific chip; tests implement them with plain `Cell`s.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application main loop + interrupt      │
//! └─────────────────────────────────────────┘
//!          │                      │
//!          ▼                      ▼
//! ┌─────────────────┐    ┌─────────────────┐
//! │  tactile-input  │    │ tactile-display │
//! └─────────────────┘    └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────────────────────────────┐
//! │  tactile-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::InputPin`] - Digital input level
//! - [`gpio::EdgeInterrupt`] - Edge-triggered interrupt registration
//! - [`time::Clock`] - Wrapping millisecond clock
//!
//! # Features
//!
//! - `embedded-hal`: [`gpio::HalInput`] adapts `embedded-hal` 1.0 input pins
//! - `embassy-time`: [`time::EmbassyClock`] reads the embassy time driver
//! - `defmt`: `defmt::Format` for the public types

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod gpio;
pub mod time;

// Re-export key traits at crate root for convenience
pub use gpio::{Edge, EdgeInterrupt, InputPin, Level, Line};
pub use time::{Clock, Instant};
