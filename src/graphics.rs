//! Graphics support via `embedded-graphics`
//!
//! `BinaryColor::On` lights a pixel, `BinaryColor::Off` blanks it.

use core::convert::Infallible;

use embedded_graphics::{pixelcolor::BinaryColor, prelude::*};
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;

use crate::buffer::PixelBuffer;
use crate::driver::Spd0301;

impl DrawTarget for PixelBuffer {
    type Error = Infallible;
    type Color = BinaryColor;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.set_pixel(point.x, point.y, color.is_on());
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill(color.is_on());
        Ok(())
    }
}

impl OriginDimensions for PixelBuffer {
    fn size(&self) -> Size {
        let (width, height) = self.dimensions();
        Size::new(width, height)
    }
}

// Drawing on the driver only touches its buffer; call `flush` to show it.
impl<SPI, DC, RST, CS> DrawTarget for Spd0301<SPI, DC, RST, CS>
where
    SPI: SpiBus,
    DC: OutputPin,
    RST: OutputPin<Error = DC::Error>,
    CS: OutputPin<Error = DC::Error>,
{
    type Error = Infallible;
    type Color = BinaryColor;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        self.pixels_mut().draw_iter(pixels)
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        DrawTarget::clear(self.pixels_mut(), color)
    }
}

impl<SPI, DC, RST, CS> OriginDimensions for Spd0301<SPI, DC, RST, CS>
where
    SPI: SpiBus,
    DC: OutputPin,
    RST: OutputPin<Error = DC::Error>,
    CS: OutputPin<Error = DC::Error>,
{
    fn size(&self) -> Size {
        self.pixels().size()
    }
}
