//! Seven-segment digit
//!
//! Segment layout:
//! ```text
//!    AAAAA
//!   F     B
//!   F     B
//!    GGGGG
//!   E     C
//!   E     C
//!    DDDDD
//! ```
//!
//! Every segment is one filled rectangle derived from the digit box and the
//! stroke thickness. Vertical segments are shortened by half a stroke at the
//! outer ends so they meet the horizontal segments without gaps.

use crate::backend::{Color, DisplayError, RasterSurface};
use crate::config::{validate_digit_geometry, ConfigError};

/// Axis-aligned rectangle in surface pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Fill this rectangle on a surface
    pub fn fill<S: RasterSurface + ?Sized>(
        &self,
        surface: &mut S,
        color: Color,
    ) -> Result<(), DisplayError> {
        surface.fill_rect(self.x, self.y, self.width, self.height, color, true)
    }
}

/// One of the seven strokes of a digit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Segment {
    /// Top horizontal
    A,
    /// Upper right vertical
    B,
    /// Lower right vertical
    C,
    /// Bottom horizontal
    D,
    /// Lower left vertical
    E,
    /// Upper left vertical
    F,
    /// Middle horizontal
    G,
}

impl Segment {
    /// All segments in drawing order
    pub const ALL: [Segment; 7] = [
        Segment::A,
        Segment::B,
        Segment::C,
        Segment::D,
        Segment::E,
        Segment::F,
        Segment::G,
    ];

    const fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

/// Set of lit segments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Segments(u8);

impl Segments {
    /// No segments lit
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Build a set from a list of segments
    pub const fn from_list(list: &[Segment]) -> Self {
        let mut bits = 0;
        let mut i = 0;
        while i < list.len() {
            bits |= list[i].bit();
            i += 1;
        }
        Self(bits)
    }

    /// Lit segments for a decimal digit, `None` outside 0-9
    pub fn for_digit(digit: u8) -> Option<Self> {
        DIGIT_SEGMENTS.get(digit as usize).copied()
    }

    /// Check if a segment is lit
    pub const fn contains(&self, segment: Segment) -> bool {
        self.0 & segment.bit() != 0
    }

    /// Number of lit segments
    pub const fn count(&self) -> u32 {
        self.0.count_ones()
    }
}

use Segment::{A, B, C, D, E, F, G};

/// Lit segments for digits 0-9
pub const DIGIT_SEGMENTS: [Segments; 10] = [
    Segments::from_list(&[A, B, C, D, E, F]),
    Segments::from_list(&[B, C]),
    Segments::from_list(&[A, B, D, E, G]),
    Segments::from_list(&[A, B, C, D, G]),
    Segments::from_list(&[B, C, F, G]),
    Segments::from_list(&[A, C, D, F, G]),
    Segments::from_list(&[A, C, D, E, F, G]),
    Segments::from_list(&[A, B, C]),
    Segments::from_list(&[A, B, C, D, E, F, G]),
    Segments::from_list(&[A, B, C, D, F, G]),
];

/// A single seven-segment digit at a fixed position on a surface
#[derive(Debug, Clone)]
pub struct SevenSegmentDigit {
    x: i32,
    y: i32,
    width: u32,
    height: u32,
    thickness: u32,
    /// Last drawn value, `None` when blank or never drawn
    value: Option<u8>,
}

impl SevenSegmentDigit {
    /// Create a digit with its top-left corner at `(x, y)`
    ///
    /// The whole digit box must lie inside the `i32` coordinate space.
    pub fn new(
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        thickness: u32,
    ) -> Result<Self, ConfigError> {
        validate_digit_geometry(width, height, thickness)?;
        if x.checked_add(width as i32).is_none() || y.checked_add(height as i32).is_none() {
            return Err(ConfigError::OutOfRange);
        }
        Ok(Self {
            x,
            y,
            width,
            height,
            thickness,
            value: None,
        })
    }

    /// Draw a digit value (0-9)
    ///
    /// Out-of-range values are rejected before anything is drawn.
    pub fn display<S: RasterSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        value: u8,
    ) -> Result<(), DisplayError> {
        let segments = Segments::for_digit(value).ok_or(DisplayError::InvalidDigit(value))?;
        self.draw_segments(surface, segments)?;
        self.value = Some(value);
        Ok(())
    }

    /// Draw every segment unlit
    pub fn blank<S: RasterSurface + ?Sized>(
        &mut self,
        surface: &mut S,
    ) -> Result<(), DisplayError> {
        self.draw_segments(surface, Segments::empty())?;
        self.value = None;
        Ok(())
    }

    /// Record that the area under this digit was cleared externally
    pub(crate) fn mark_cleared(&mut self) {
        self.value = None;
    }

    /// Move the horizontal anchor; takes effect on the next draw
    ///
    /// Fails with [`DisplayError::InvalidCoordinates`] if the digit box
    /// would extend past `i32::MAX`; the anchor is left unchanged.
    pub fn set_x(&mut self, x: i32) -> Result<(), DisplayError> {
        x.checked_add(self.width as i32)
            .ok_or(DisplayError::InvalidCoordinates)?;
        self.x = x;
        Ok(())
    }

    /// Last drawn value
    pub fn value(&self) -> Option<u8> {
        self.value
    }

    /// Top-left corner
    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    /// Rectangle occupied by a segment at the current position
    pub fn segment_rect(&self, segment: Segment) -> Rect {
        let t = self.thickness;
        let half_t = (t / 2) as i32;
        let half_h = (self.height / 2) as i32;

        let horiz_x = self.x + half_t;
        let horiz_w = self.width - t;
        let vert_h = self.height / 2 - t / 2 - 1;
        let top_vert_y = self.y + half_t;
        let bottom_vert_y = self.y + half_h + 1;
        let right_x = self.x + (self.width - t) as i32;

        match segment {
            Segment::A => Rect::new(horiz_x, self.y, horiz_w, t),
            Segment::B => Rect::new(right_x, top_vert_y, t, vert_h),
            Segment::C => Rect::new(right_x, bottom_vert_y, t, vert_h),
            Segment::D => Rect::new(horiz_x, self.y + (self.height - t) as i32, horiz_w, t),
            Segment::E => Rect::new(self.x, bottom_vert_y, t, vert_h),
            Segment::F => Rect::new(self.x, top_vert_y, t, vert_h),
            Segment::G => Rect::new(horiz_x, self.y + half_h - half_t, horiz_w, t),
        }
    }

    /// Two passes: lit segments first, then unlit ones, so the shared
    /// corners always end up looking the same for a given digit.
    fn draw_segments<S: RasterSurface + ?Sized>(
        &self,
        surface: &mut S,
        segments: Segments,
    ) -> Result<(), DisplayError> {
        for lit in [true, false] {
            for segment in Segment::ALL {
                if segments.contains(segment) == lit {
                    self.segment_rect(segment).fill(surface, Color::from(lit))?;
                }
            }
        }
        Ok(())
    }
}
