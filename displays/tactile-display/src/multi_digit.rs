//! Multi-digit seven-segment display
//!
//! Lays out a row of [`SevenSegmentDigit`]s and renders non-negative
//! integers across them, most significant digit first. Numbers with more
//! digits than positions are truncated to their least significant digits.

use heapless::Vec;

use crate::backend::{Color, DisplayError, RasterSurface};
use crate::config::{ConfigError, MultiDigitConfig, MAX_DIGITS};
use crate::segment::{Rect, SevenSegmentDigit};

/// Per-position digit values, `None` for suppressed positions
type DigitValues = [Option<u8>; MAX_DIGITS];

/// A row of seven-segment digits sharing one bounding box
#[derive(Debug, Clone)]
pub struct MultiDigitDisplay {
    config: MultiDigitConfig,
    digits: Vec<SevenSegmentDigit, MAX_DIGITS>,
    /// Last rendered number
    number: u32,
    /// Positions drawn by the last render (all of them unless auto-centering)
    digits_drawn: usize,
    /// Shift applied to the active digits by auto-centering
    x_offset: i32,
    /// Decimal point drawn by the last render
    separator: Option<Rect>,
}

impl MultiDigitDisplay {
    /// Create a display, laying the digits out left to right
    pub fn new(config: MultiDigitConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut digits = Vec::new();
        let pitch = config.pitch() as i32;
        for i in 0..config.digit_count {
            let digit = SevenSegmentDigit::new(
                config.x + i as i32 * pitch,
                config.y,
                config.digit_width,
                config.digit_height,
                config.thickness,
            )?;
            digits.push(digit).map_err(|_| ConfigError::TooManyDigits)?;
        }

        Ok(Self {
            config,
            digits,
            number: 0,
            digits_drawn: config.digit_count,
            x_offset: 0,
            separator: None,
        })
    }

    /// Render a number, optionally with a decimal point
    ///
    /// `decimal_index` counts digit positions from the right: `Some(0)`
    /// places the point right of the last digit, `Some(1)` one digit
    /// further left. It is only drawn when it falls inside the drawn digits.
    pub fn display<S: RasterSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        number: u32,
        decimal_index: Option<usize>,
    ) -> Result<(), DisplayError> {
        self.number = number;
        let (values, shown) = self.digit_values(number);

        #[cfg(feature = "defmt")]
        defmt::debug!("display: {} ({} digits drawn)", number, shown);

        // Forget the old point only once it is gone from the surface
        if let Some(old) = self.separator {
            old.fill(surface, Color::Off)?;
            self.separator = None;
        }

        if self.config.auto_center {
            self.digits_drawn = shown;
            self.center(surface)?;
        }

        let auto_center = self.config.auto_center;
        for (digit, value) in self.digits.iter_mut().zip(values.iter()) {
            match value {
                Some(v) => digit.display(surface, *v)?,
                // Centered digits move, so stale positions are covered by the clear
                None if !auto_center => digit.blank(surface)?,
                None => {}
            }
        }

        if let Some(index) = decimal_index {
            self.draw_separator(surface, index)?;
        }
        Ok(())
    }

    /// Last rendered number
    pub fn number(&self) -> u32 {
        self.number
    }

    /// Number of positions drawn by the last render
    pub fn digits_drawn(&self) -> usize {
        self.digits_drawn
    }

    /// Width of the bounding box
    pub fn width(&self) -> u32 {
        self.config.total_width()
    }

    /// Height of the bounding box
    pub fn height(&self) -> u32 {
        self.config.digit_height
    }

    pub fn config(&self) -> &MultiDigitConfig {
        &self.config
    }

    /// Digit at a position, counted from the left
    pub fn digit(&self, index: usize) -> Option<&SevenSegmentDigit> {
        self.digits.get(index)
    }

    /// Split a number into per-position values, most significant first
    ///
    /// A position is shown when anything remains of the number at that
    /// point, when leading zeros are enabled, or when it is the last one.
    fn digit_values(&self, number: u32) -> (DigitValues, usize) {
        let count = self.config.digit_count;
        let mut values = [None; MAX_DIGITS];
        let mut shown = 0;
        let mut remaining = number;

        for i in (0..count).rev() {
            if remaining > 0 || self.config.show_leading_zeros || i == count - 1 {
                values[i] = Some((remaining % 10) as u8);
                shown += 1;
            }
            remaining /= 10;
        }
        (values, shown)
    }

    /// Clear the bounding box and re-anchor the active digits
    fn center<S: RasterSurface + ?Sized>(
        &mut self,
        surface: &mut S,
    ) -> Result<(), DisplayError> {
        let cfg = self.config;
        // Segment shapes do not tile, so clear everything before moving digits
        surface.fill_rect(cfg.x, cfg.y, self.width(), self.height(), Color::Off, true)?;
        for digit in self.digits.iter_mut() {
            digit.mark_cleared();
        }

        let pitch = cfg.pitch() as i32;
        let unused = (cfg.digit_count - self.digits_drawn) as i32;
        self.x_offset = unused * pitch / 2;

        let first = cfg.digit_count - self.digits_drawn;
        for (i, digit) in self.digits[first..].iter_mut().enumerate() {
            digit.set_x(cfg.x + self.x_offset + i as i32 * pitch)?;
        }
        Ok(())
    }

    fn draw_separator<S: RasterSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        index: usize,
    ) -> Result<(), DisplayError> {
        if index > self.digits_drawn {
            return Ok(());
        }

        let cfg = self.config;
        let pitch = cfg.pitch() as i32;
        let spacing = cfg.digit_spacing as i32;
        let t = cfg.thickness;

        // Gap to the right of the last drawn digit, then step left
        let steps = (self.digits_drawn - index) as i32;
        let dx = self.x_offset + steps * pitch - spacing + (spacing - t as i32) / 2;
        let x = cfg
            .x
            .checked_add(dx)
            .ok_or(DisplayError::InvalidCoordinates)?;
        let y = cfg.y + (cfg.digit_height - t) as i32;

        let rect = Rect::new(x, y, t, t);
        rect.fill(surface, Color::On)?;
        self.separator = Some(rect);
        Ok(())
    }
}
