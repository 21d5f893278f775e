//! In-memory pixel buffer in the controller's page layout
//!
//! Each byte holds 8 vertically stacked pixels of one page (a band of 8 rows),
//! least significant bit on top. Bytes are ordered column by column within a
//! page and page by page down the panel, which is exactly the order the
//! controller consumes them in horizontal addressing mode. The whole buffer can
//! therefore be sent in one data write.

use crate::{BUFFER_LEN, HEIGHT, WIDTH};

/// Display rotation
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DisplayRotation {
    /// No rotation
    #[default]
    Rotate0,
    /// Rotate by 90 degrees clockwise
    Rotate90,
    /// Rotate by 180 degrees clockwise
    Rotate180,
    /// Rotate 270 degrees clockwise
    Rotate270,
}

/// Monochrome 128x64 frame, packed the way the controller stores it
#[derive(Clone)]
pub struct PixelBuffer {
    buffer: [u8; BUFFER_LEN],
    rotation: DisplayRotation,
}

impl Default for PixelBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl PixelBuffer {
    /// An all-off buffer with no rotation
    pub const fn new() -> Self {
        PixelBuffer {
            buffer: [0x00; BUFFER_LEN],
            rotation: DisplayRotation::Rotate0,
        }
    }

    /// Returns the buffer
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    /// Returns a mutable buffer
    pub fn buffer_mut(&mut self) -> &mut [u8] {
        &mut self.buffer
    }

    /// Sets the rotation applied to coordinates passed to the pixel accessors
    pub fn set_rotation(&mut self, rotation: DisplayRotation) {
        self.rotation = rotation;
    }

    /// Get the current rotation
    pub fn rotation(&self) -> DisplayRotation {
        self.rotation
    }

    /// Logical (width, height) under the current rotation
    pub fn dimensions(&self) -> (u32, u32) {
        match self.rotation {
            DisplayRotation::Rotate0 | DisplayRotation::Rotate180 => (WIDTH, HEIGHT),
            DisplayRotation::Rotate90 | DisplayRotation::Rotate270 => (HEIGHT, WIDTH),
        }
    }

    /// Turn the pixel at logical `(x, y)` on or off. Points outside the
    /// panel are ignored.
    pub fn set_pixel(&mut self, x: i32, y: i32, on: bool) {
        let Some((index, bit)) = self.locate(x, y) else {
            return;
        };
        if on {
            self.buffer[index] |= bit;
        } else {
            self.buffer[index] &= !bit;
        }
    }

    /// State of the pixel at logical `(x, y)`, `None` outside the panel
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<bool> {
        self.locate(x, y)
            .map(|(index, bit)| self.buffer[index] & bit != 0)
    }

    /// Switch every pixel off
    pub fn clear(&mut self) {
        self.fill(false);
    }

    /// Switch every pixel on or off
    pub fn fill(&mut self, on: bool) {
        let byte = if on { 0xFF } else { 0x00 };
        self.buffer.fill(byte);
    }

    fn locate(&self, x: i32, y: i32) -> Option<(usize, u8)> {
        if outside_display(x, y, self.rotation) {
            return None;
        }
        Some(find_position(x as u32, y as u32, self.rotation))
    }
}

// Checks if a pos is outside the panel
fn outside_display(x: i32, y: i32, rotation: DisplayRotation) -> bool {
    if x < 0 || y < 0 {
        return true;
    }
    let (x, y) = (x as u32, y as u32);
    match rotation {
        DisplayRotation::Rotate0 | DisplayRotation::Rotate180 => x >= WIDTH || y >= HEIGHT,
        DisplayRotation::Rotate90 | DisplayRotation::Rotate270 => y >= WIDTH || x >= HEIGHT,
    }
}

fn find_rotation(x: u32, y: u32, rotation: DisplayRotation) -> (u32, u32) {
    match rotation {
        DisplayRotation::Rotate0 => (x, y),
        DisplayRotation::Rotate90 => (WIDTH - 1 - y, x),
        DisplayRotation::Rotate180 => (WIDTH - 1 - x, HEIGHT - 1 - y),
        DisplayRotation::Rotate270 => (y, HEIGHT - 1 - x),
    }
}

#[rustfmt::skip]
//returns index position in the u8-slice and the bit-position inside that u8
fn find_position(x: u32, y: u32, rotation: DisplayRotation) -> (usize, u8) {
    let (nx, ny) = find_rotation(x, y, rotation);
    (
        (nx + WIDTH * (ny / 8)) as usize,
        1 << (ny % 8)
    )
}
