//! Seven-segment digit rendering for raster displays
//!
//! This crate provides:
//! - `RasterSurface` trait for anything that can fill rectangles (frame buffers, display drivers)
//! - `SevenSegmentDigit`, a single decimal digit drawn from seven rectangles
//! - `MultiDigitDisplay`, a row of digits with leading-zero suppression,
//!   auto-centering and a decimal point
//!
//! # Architecture
//!
//! The surface is never owned by the renderers. Every draw call borrows it
//! mutably, so several displays can share one frame buffer from the main
//! loop.
//!
//! ```text
//! MultiDigitDisplay::display(&mut surface, 42, Some(1))
//!        │ digit values + x anchors
//!        ▼
//! SevenSegmentDigit::display(&mut surface, 4)   ×N
//!        │ lit rectangles, then unlit rectangles
//!        ▼
//! RasterSurface::fill_rect(..)
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod backend;
pub mod config;
pub mod multi_digit;
pub mod segment;

#[cfg(test)]
mod mock;

// Re-export key types
pub use backend::{Color, DisplayError, RasterSurface};
pub use config::{ConfigError, MultiDigitConfig, MAX_DIGITS};
pub use multi_digit::MultiDigitDisplay;
pub use segment::{Rect, Segment, Segments, SevenSegmentDigit, DIGIT_SEGMENTS};
