//! Recording raster surface for host tests

use crate::backend::{Color, DisplayError, RasterSurface};
use crate::segment::Rect;

/// One recorded `fill_rect` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FillOp {
    pub rect: Rect,
    pub color: Color,
    pub filled: bool,
}

/// Surface that records every call and keeps a small pixel grid
pub struct RecordingSurface {
    pub ops: std::vec::Vec<FillOp>,
    width: usize,
    height: usize,
    pixels: std::vec::Vec<bool>,
    fail_after: Option<usize>,
}

impl RecordingSurface {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            ops: std::vec::Vec::new(),
            width,
            height,
            pixels: std::vec![false; width * height],
            fail_after: None,
        }
    }

    /// Fail every call after `count` successful ones
    pub fn failing_after(mut self, count: usize) -> Self {
        self.fail_after = Some(count);
        self
    }

    /// Change the failure budget on a surface already in use
    pub fn set_fail_after(&mut self, count: Option<usize>) {
        self.fail_after = count;
    }

    pub fn is_lit(&self, x: usize, y: usize) -> bool {
        self.pixels[y * self.width + x]
    }

    pub fn lit_count(&self) -> usize {
        self.pixels.iter().filter(|p| **p).count()
    }

    /// Any lit pixel within the column range `[x0, x1)`
    pub fn any_lit_in_columns(&self, x0: usize, x1: usize) -> bool {
        (0..self.height).any(|y| (x0..x1.min(self.width)).any(|x| self.is_lit(x, y)))
    }

    pub fn clear_ops(&mut self) {
        self.ops.clear();
    }

    fn set(&mut self, x: i32, y: i32, on: bool) {
        if x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height {
            self.pixels[y as usize * self.width + x as usize] = on;
        }
    }
}

impl RasterSurface for RecordingSurface {
    fn fill_rect(
        &mut self,
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        color: Color,
        filled: bool,
    ) -> Result<(), DisplayError> {
        if let Some(remaining) = self.fail_after {
            if remaining == 0 {
                return Err(DisplayError::Surface);
            }
            self.fail_after = Some(remaining - 1);
        }

        self.ops.push(FillOp {
            rect: Rect::new(x, y, width, height),
            color,
            filled,
        });

        let (w, h) = (width as i32, height as i32);
        for py in y..y + h {
            for px in x..x + w {
                let edge = px == x || px == x + w - 1 || py == y || py == y + h - 1;
                if filled || edge {
                    self.set(px, py, color.is_on());
                }
            }
        }
        Ok(())
    }
}
