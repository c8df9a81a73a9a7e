//! Raster surface trait
//!
//! Defines the interface the renderers draw through.

/// Display backend errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// The surface failed to draw
    Surface,
    /// A position falls outside the `i32` coordinate space
    InvalidCoordinates,
    /// Digit value outside 0-9
    InvalidDigit(u8),
}

/// Two-level pixel color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Color {
    /// Background / unlit segment
    #[default]
    Off,
    /// Foreground / lit segment
    On,
}

impl From<bool> for Color {
    fn from(on: bool) -> Self {
        if on {
            Color::On
        } else {
            Color::Off
        }
    }
}

impl Color {
    /// Check if this is the foreground color
    pub fn is_on(&self) -> bool {
        *self == Color::On
    }
}

/// Raster surface trait
///
/// Provides a hardware-agnostic rectangle primitive. Implementations wrap a
/// frame buffer or talk to a display controller directly. Surfaces are
/// expected to clip rectangles that extend past their edges.
pub trait RasterSurface {
    /// Draw a rectangle
    ///
    /// - `x`, `y`: Top-left corner in pixels
    /// - `width`, `height`: Size in pixels
    /// - `color`: Pixel color
    /// - `filled`: Fill the whole area, or only draw the outline
    fn fill_rect(
        &mut self,
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        color: Color,
        filled: bool,
    ) -> Result<(), DisplayError>;
}

impl<S: RasterSurface + ?Sized> RasterSurface for &mut S {
    fn fill_rect(
        &mut self,
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        color: Color,
        filled: bool,
    ) -> Result<(), DisplayError> {
        (**self).fill_rect(x, y, width, height, color, filled)
    }
}
