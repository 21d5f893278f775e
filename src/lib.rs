//! SPD0301 OLED Display Driver
//!
//! Driver for 128x64 monochrome OLED panels built on the SPD0301 controller,
//! connected over a 4-wire SPI bus (SCK/MOSI plus DC, CS and RST lines).
//!
//! ## Architecture
//!
//! The driver owns a [`PixelBuffer`](buffer::PixelBuffer) laid out the way the
//! controller stores pixels: 8 pages of 8 rows, one byte per column per page,
//! least significant bit on top. Drawing only touches this buffer. A call to
//! `flush()` sends the entire buffer to the panel as one data write, which the
//! controller places correctly because it is configured for horizontal
//! addressing. Control commands (contrast, sleep, wake) go straight to the
//! controller and never touch the buffer.
//!
//! ## Usage
//!
//! ```rust, ignore
//! use spd0301::prelude::*;
//! use embedded_graphics::{prelude::*, primitives::*, pixelcolor::BinaryColor};
//!
//! // Resets the panel and runs the init sequence
//! let mut display = Spd0301::new(spi_bus, dc, rst, cs, &mut delay)?;
//!
//! Circle::new(Point::new(40, 8), 48)
//!     .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 2))
//!     .draw(&mut display)?;
//!
//! display.flush()?;
//!
//! display.set_contrast(0x20)?;
//! display.sleep()?;
//! display.wake()?;
//! ```
//!
#![cfg_attr(not(test), no_std)]
#![deny(missing_docs)]
#![allow(clippy::pedantic)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

pub mod buffer;
mod cmd;
pub mod driver;
pub mod error;
mod flag;
#[cfg(feature = "graphics")]
pub mod graphics;
mod interface;

/// Panel width in pixels
pub const WIDTH: u32 = 128;

/// Panel height in pixels
pub const HEIGHT: u32 = 64;

/// Number of 8-row pages
pub const PAGES: u32 = HEIGHT / 8;

/// Size of the frame buffer in bytes
pub const BUFFER_LEN: usize = (WIDTH * HEIGHT / 8) as usize;

const _: () = assert!(HEIGHT % 8 == 0, "pages are 8 rows tall");

/// Useful exports
pub mod prelude {
    pub use crate::buffer::{DisplayRotation, PixelBuffer};
    pub use crate::driver::{InitStep, PowerState, Spd0301, DEFAULT_INIT_SEQUENCE};
    pub use crate::error::{Error, InterfaceError};
}
