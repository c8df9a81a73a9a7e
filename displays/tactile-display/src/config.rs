//! Display configuration
//!
//! Geometry is validated once at construction so rendering never has to
//! deal with degenerate rectangles.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum number of digits in one display (enough for any `u32`)
pub const MAX_DIGITS: usize = 10;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Display with zero digits
    NoDigits,
    /// More than [`MAX_DIGITS`] digits
    TooManyDigits,
    /// Zero width, height or segment thickness
    ZeroSize,
    /// Segments would not fit inside the digit box
    ThicknessTooLarge,
    /// Geometry does not fit in the `i32` coordinate space
    OutOfRange,
}

/// Check that a digit box can hold all seven segments
///
/// Horizontal segments are `width - thickness` wide and vertical segments
/// `height / 2 - thickness / 2 - 1` tall; both must be at least one pixel.
pub fn validate_digit_geometry(
    width: u32,
    height: u32,
    thickness: u32,
) -> Result<(), ConfigError> {
    if width == 0 || height == 0 || thickness == 0 {
        return Err(ConfigError::ZeroSize);
    }
    if width > i32::MAX as u32 || height > i32::MAX as u32 {
        return Err(ConfigError::OutOfRange);
    }
    if thickness >= width || thickness / 2 + 1 >= height / 2 {
        return Err(ConfigError::ThicknessTooLarge);
    }
    Ok(())
}

/// Multi-digit display configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MultiDigitConfig {
    /// Left edge of the bounding box
    pub x: i32,
    /// Top edge of the bounding box
    pub y: i32,
    /// Number of digit positions
    pub digit_count: usize,
    /// Width of one digit in pixels
    pub digit_width: u32,
    /// Height of one digit in pixels
    pub digit_height: u32,
    /// Gap between digits in pixels
    pub digit_spacing: u32,
    /// Segment stroke thickness in pixels
    pub thickness: u32,
    /// Render zero-valued leading positions
    pub show_leading_zeros: bool,
    /// Center the drawn digits within the bounding box
    pub auto_center: bool,
}

impl Default for MultiDigitConfig {
    fn default() -> Self {
        Self {
            x: 0,
            y: 0,
            digit_count: 2,
            digit_width: 15,
            digit_height: 30,
            digit_spacing: 6,
            thickness: 4,
            show_leading_zeros: true,
            auto_center: false,
        }
    }
}

impl MultiDigitConfig {
    /// Validate digit count and geometry
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.digit_count == 0 {
            return Err(ConfigError::NoDigits);
        }
        if self.digit_count > MAX_DIGITS {
            return Err(ConfigError::TooManyDigits);
        }
        validate_digit_geometry(self.digit_width, self.digit_height, self.thickness)?;

        // Every anchor, the bounding box and the gap after the last digit
        // (where a decimal point goes) must be representable.
        let span = self
            .digit_width
            .checked_add(self.digit_spacing)
            .and_then(|pitch| pitch.checked_mul(self.digit_count as u32))
            .filter(|span| *span <= i32::MAX as u32)
            .ok_or(ConfigError::OutOfRange)?;
        self.x
            .checked_add(span as i32)
            .and(self.y.checked_add(self.digit_height as i32))
            .ok_or(ConfigError::OutOfRange)?;
        Ok(())
    }

    /// Horizontal distance between the anchors of adjacent digits
    pub fn pitch(&self) -> u32 {
        self.digit_width.saturating_add(self.digit_spacing)
    }

    /// Width of the bounding box covering all digit positions
    pub fn total_width(&self) -> u32 {
        let count = self.digit_count as u32;
        self.digit_width
            .saturating_mul(count)
            .saturating_add(self.digit_spacing.saturating_mul(count.saturating_sub(1)))
    }
}
