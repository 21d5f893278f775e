//! Errors surfaced by the driver

use core::fmt;

/// Failure of one driver operation.
///
/// The underlying bus or pin error is carried unmodified. Nothing is retried;
/// an operation that returns an error may have left the controller part-way
/// through a command sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error<SpiE, PinE> {
    /// The SPI bus failed to clock out a byte sequence
    Spi(SpiE),
    /// One of the DC, CS or RST lines could not be driven
    Pin(PinE),
}

impl<SpiE: fmt::Debug, PinE: fmt::Debug> fmt::Display for Error<SpiE, PinE> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Spi(e) => write!(f, "SPI transfer failed: {e:?}"),
            Error::Pin(e) => write!(f, "control line failed: {e:?}"),
        }
    }
}

impl<SpiE: fmt::Debug, PinE: fmt::Debug> core::error::Error for Error<SpiE, PinE> {}

/// Error produced by a driver built on the bus `SPI` and pins sharing the
/// error type of `DC`
pub type InterfaceError<SPI, DC> = Error<
    <SPI as embedded_hal::spi::ErrorType>::Error,
    <DC as embedded_hal::digital::ErrorType>::Error,
>;
