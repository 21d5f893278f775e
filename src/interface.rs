//! Command/data transport to the controller
//!
//! The controller samples the DC line together with each byte: low selects the
//! command phase, high the data phase. Chip-select is driven here rather than
//! by an `SpiDevice` so that DC is restored to the data level before CS is
//! released, which is the framing the panel was brought up with.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;

use crate::error::{Error, InterfaceError};

use log::debug;

/// Time RST is held at each level during a hardware reset
const RESET_PULSE_MS: u32 = 10;
/// Settle time after RST is released before the first command
const RESET_SETTLE_MS: u32 = 50;

/// The connection interface for the SPD0301: an SPI bus plus DC, RST and CS lines
pub(crate) struct SpiDisplayInterface<SPI, DC, RST, CS> {
    /// SPI bus, only ever written to
    spi: SPI,
    /// Data/Command line. Low for commands, high for data
    dc: DC,
    /// Pin for resetting. Active low
    rst: RST,
    /// Chip select. Active low
    cs: CS,
}

impl<SPI, DC, RST, CS> SpiDisplayInterface<SPI, DC, RST, CS>
where
    SPI: SpiBus,
    DC: OutputPin,
    RST: OutputPin<Error = DC::Error>,
    CS: OutputPin<Error = DC::Error>,
{
    /// Create and initialize the interface
    pub fn new(spi: SPI, dc: DC, rst: RST, cs: CS) -> Self {
        SpiDisplayInterface { spi, dc, rst, cs }
    }

    /// Send a single command byte.
    ///
    /// DC goes back to the data level after every byte, so consecutive
    /// commands each toggle the line.
    pub fn cmd(&mut self, command: u8) -> Result<(), InterfaceError<SPI, DC>> {
        self.dc.set_low().map_err(Error::Pin)?;
        self.cs.set_low().map_err(Error::Pin)?;
        self.write(&[command])?;
        self.dc.set_high().map_err(Error::Pin)?;
        self.cs.set_high().map_err(Error::Pin)
    }

    /// Send a command followed by its argument bytes, each framed as a command
    pub fn cmd_with_args(
        &mut self,
        command: u8,
        args: &[u8],
    ) -> Result<(), InterfaceError<SPI, DC>> {
        self.cmd(command)?;
        for &arg in args {
            self.cmd(arg)?;
        }
        Ok(())
    }

    /// Send data in a single bus write
    pub fn data(&mut self, data: &[u8]) -> Result<(), InterfaceError<SPI, DC>> {
        self.dc.set_high().map_err(Error::Pin)?;
        self.cs.set_low().map_err(Error::Pin)?;
        self.write(data)?;
        self.cs.set_high().map_err(Error::Pin)
    }

    fn write(&mut self, bytes: &[u8]) -> Result<(), InterfaceError<SPI, DC>> {
        self.spi.write(bytes).map_err(Error::Spi)?;
        self.spi.flush().map_err(Error::Spi)
    }

    /// Reset the controller: RST high, low, high again.
    ///
    /// The hold times are a conservative superset of the datasheet minimums.
    pub fn hard_reset(
        &mut self,
        delay: &mut impl DelayNs,
    ) -> Result<(), InterfaceError<SPI, DC>> {
        debug!("hard reset");
        self.rst.set_high().map_err(Error::Pin)?;
        delay.delay_ms(RESET_PULSE_MS);
        self.rst.set_low().map_err(Error::Pin)?;
        delay.delay_ms(RESET_PULSE_MS);
        self.rst.set_high().map_err(Error::Pin)?;
        delay.delay_ms(RESET_SETTLE_MS);
        Ok(())
    }

    /// Hand back the bus and pins
    pub fn release(self) -> (SPI, DC, RST, CS) {
        (self.spi, self.dc, self.rst, self.cs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use embedded_hal_mock::eh1::delay::NoopDelay;
    use embedded_hal_mock::eh1::digital::{
        Mock as PinMock, State as PinState, Transaction as PinTransaction,
    };
    use embedded_hal_mock::eh1::spi::{Mock as SpiMock, Transaction as SpiTransaction};

    fn framed_cmd_dc(count: usize) -> Vec<PinTransaction> {
        let mut txns = vec![];
        for _ in 0..count {
            txns.push(PinTransaction::set(PinState::Low));
            txns.push(PinTransaction::set(PinState::High));
        }
        txns
    }

    #[test]
    fn cmd_toggles_dc_and_cs_around_one_byte() {
        let spi = SpiMock::new(&[
            SpiTransaction::write_vec(vec![0xAE]),
            SpiTransaction::flush(),
        ]);
        let dc = PinMock::new(&framed_cmd_dc(1));
        let cs = PinMock::new(&framed_cmd_dc(1));
        let rst = PinMock::new(&[]);

        let mut iface = SpiDisplayInterface::new(spi, dc, rst, cs);
        iface.cmd(0xAE).unwrap();

        let (mut spi, mut dc, mut rst, mut cs) = iface.release();
        spi.done();
        dc.done();
        rst.done();
        cs.done();
    }

    #[test]
    fn cmd_with_args_frames_every_byte() {
        let spi = SpiMock::new(&[
            SpiTransaction::write_vec(vec![0x81]),
            SpiTransaction::flush(),
            SpiTransaction::write_vec(vec![0x72]),
            SpiTransaction::flush(),
        ]);
        let dc = PinMock::new(&framed_cmd_dc(2));
        let cs = PinMock::new(&framed_cmd_dc(2));
        let rst = PinMock::new(&[]);

        let mut iface = SpiDisplayInterface::new(spi, dc, rst, cs);
        iface.cmd_with_args(0x81, &[0x72]).unwrap();

        let (mut spi, mut dc, mut rst, mut cs) = iface.release();
        spi.done();
        dc.done();
        rst.done();
        cs.done();
    }

    #[test]
    fn data_is_one_write_with_dc_high() {
        let payload = [0x01, 0x02, 0x03, 0x04];
        let spi = SpiMock::new(&[
            SpiTransaction::write_vec(payload.to_vec()),
            SpiTransaction::flush(),
        ]);
        // DC is only raised, never lowered, in the data phase
        let dc = PinMock::new(&[PinTransaction::set(PinState::High)]);
        let cs = PinMock::new(&[
            PinTransaction::set(PinState::Low),
            PinTransaction::set(PinState::High),
        ]);
        let rst = PinMock::new(&[]);

        let mut iface = SpiDisplayInterface::new(spi, dc, rst, cs);
        iface.data(&payload).unwrap();

        let (mut spi, mut dc, mut rst, mut cs) = iface.release();
        spi.done();
        dc.done();
        rst.done();
        cs.done();
    }

    #[test]
    fn hard_reset_pulses_rst() {
        let spi = SpiMock::new(&[]);
        let dc = PinMock::new(&[]);
        let cs = PinMock::new(&[]);
        let rst = PinMock::new(&[
            PinTransaction::set(PinState::High),
            PinTransaction::set(PinState::Low),
            PinTransaction::set(PinState::High),
        ]);

        let mut iface = SpiDisplayInterface::new(spi, dc, rst, cs);
        iface.hard_reset(&mut NoopDelay).unwrap();

        let (mut spi, mut dc, mut rst, mut cs) = iface.release();
        spi.done();
        dc.done();
        rst.done();
        cs.done();
    }
}
