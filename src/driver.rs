//! Driver for interacting with the SPD0301 display controller

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;

use crate::buffer::PixelBuffer;
use crate::error::InterfaceError;
use crate::interface::SpiDisplayInterface;
use crate::{cmd::Cmd, flag::Flag};

use log::debug;

/// Wait before the first reset pulse, after the buffer is in place
const POWER_ON_SETTLE_MS: u32 = 100;

/// Default init sequence, brings a freshly reset panel up in horizontal
/// addressing mode. Output stays off until the final command.
pub const DEFAULT_INIT_SEQUENCE: &[InitStep] = &[
    InitStep::Cmd(Cmd::DISPLAY_OFF),
    InitStep::CmdArgs(Cmd::MEMORY_ADDRESSING_MODE, &[Flag::ADDRESSING_HORIZONTAL]),
    // start line 0
    InitStep::Cmd(Cmd::DISPLAY_START_LINE),
    InitStep::CmdArgs(Cmd::CONTRAST, &[Flag::CONTRAST_VCC_15V]),
    InitStep::Cmd(Cmd::SEGMENT_REMAP),
    // show RAM contents, not the all-on test pattern
    InitStep::Cmd(Cmd::DISPLAY_FROM_RAM),
    InitStep::Cmd(Cmd::NORMAL_DISPLAY),
    InitStep::CmdArgs(Cmd::MULTIPLEX_RATIO, &[Flag::MULTIPLEX_64]),
    InitStep::Cmd(Cmd::COM_SCAN_DEC),
    InitStep::CmdArgs(Cmd::DISPLAY_OFFSET, &[Flag::NO_OFFSET]),
    InitStep::CmdArgs(Cmd::CLOCK_DIVIDE, &[Flag::CLOCK_DIVIDE_TUNED]),
    InitStep::CmdArgs(Cmd::PRECHARGE_PERIOD, &[Flag::PRECHARGE_2_2]),
    InitStep::CmdArgs(Cmd::COM_PINS_CONFIG, &[Flag::COM_PINS_ALT_NO_REMAP]),
    InitStep::CmdArgs(Cmd::VCOMH_DESELECT, &[Flag::VCOMH_084_VCC]),
    InitStep::Cmd(Cmd::DISPLAY_ON),
];

/// Steps that an init sequence can contain.
/// Keep variants minimal and serializable as static arrays.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InitStep {
    /// Send a bare command byte
    Cmd(u8),
    /// Send a command followed by its arguments. The arguments travel in the
    /// command phase, one framed byte each.
    CmdArgs(u8, &'static [u8]),
    /// Block for the given number of milliseconds
    DelayMs(u8),
}

/// What the driver last told the controller to do.
///
/// This mirrors the commands sent; it is never read back from the panel and
/// does not gate any operation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PowerState {
    /// Not yet reset and programmed
    #[default]
    Uninitialized,
    /// Output enabled
    On,
    /// Output blanked with RAM retained
    Sleeping,
}

/// A 128x64 SPD0301 panel together with its frame buffer.
///
/// Drawing happens on the owned [`PixelBuffer`]; nothing reaches the panel
/// until [`flush`](Self::flush). Control commands bypass the buffer.
pub struct Spd0301<SPI, DC, RST, CS> {
    pixels: PixelBuffer,
    interface: SpiDisplayInterface<SPI, DC, RST, CS>,
    init_sequence: &'static [InitStep],
    state: PowerState,
}

impl<SPI, DC, RST, CS> Spd0301<SPI, DC, RST, CS>
where
    SPI: SpiBus,
    DC: OutputPin,
    RST: OutputPin<Error = DC::Error>,
    CS: OutputPin<Error = DC::Error>,
{
    /// Create the driver from a configured SPI bus and pins, then reset and
    /// program the panel with [`DEFAULT_INIT_SEQUENCE`].
    ///
    /// If the reset or any init command fails, the bus and pins are dropped
    /// along with the unfinished driver and only the error is returned.
    pub fn new(
        spi: SPI,
        dc: DC,
        rst: RST,
        cs: CS,
        delay: &mut impl DelayNs,
    ) -> Result<Self, InterfaceError<SPI, DC>> {
        Self::with_init_sequence(spi, dc, rst, cs, DEFAULT_INIT_SEQUENCE, delay)
    }

    /// Create with a custom init sequence
    ///
    /// Fails the same way as [`new`](Self::new), consuming the bus and pins.
    pub fn with_init_sequence(
        spi: SPI,
        dc: DC,
        rst: RST,
        cs: CS,
        init_sequence: &'static [InitStep],
        delay: &mut impl DelayNs,
    ) -> Result<Self, InterfaceError<SPI, DC>> {
        debug!("creating new Spd0301 instance");
        let mut display = Spd0301 {
            pixels: PixelBuffer::new(),
            interface: SpiDisplayInterface::new(spi, dc, rst, cs),
            init_sequence,
            state: PowerState::Uninitialized,
        };
        delay.delay_ms(POWER_ON_SETTLE_MS);
        display.init(delay)?;
        Ok(display)
    }

    /// Hardware reset followed by the init sequence.
    ///
    /// Runs once from the constructors; call again to bring a panel back after
    /// it lost power. The buffer is left as is.
    pub fn init(&mut self, delay: &mut impl DelayNs) -> Result<(), InterfaceError<SPI, DC>> {
        debug!("initializing spd0301");
        self.state = PowerState::Uninitialized;
        self.interface.hard_reset(delay)?;
        for step in self.init_sequence {
            debug!("init step: {:?}", step);
            match *step {
                InitStep::Cmd(c) => self.interface.cmd(c)?,
                InitStep::CmdArgs(c, args) => self.interface.cmd_with_args(c, args)?,
                InitStep::DelayMs(ms) => delay.delay_ms(u32::from(ms)),
            }
        }
        debug!("init sequence complete");
        self.state = PowerState::On;
        Ok(())
    }

    /// Send the whole buffer to the controller in one data write
    pub fn flush(&mut self) -> Result<(), InterfaceError<SPI, DC>> {
        debug!("flushing buffer to spd0301");
        self.interface.data(self.pixels.buffer())
    }

    /// Blank the buffer and send it
    pub fn clear(&mut self) -> Result<(), InterfaceError<SPI, DC>> {
        debug!("clearing spd0301");
        self.pixels.clear();
        self.flush()
    }

    /// Set the contrast, 0 to 255
    pub fn set_contrast(&mut self, level: u8) -> Result<(), InterfaceError<SPI, DC>> {
        debug!("set_contrast: {}", level);
        self.interface.cmd_with_args(Cmd::CONTRAST, &[level])
    }

    /// Blank the output. The controller keeps its RAM, so [`wake`](Self::wake)
    /// shows the last flushed frame again.
    pub fn sleep(&mut self) -> Result<(), InterfaceError<SPI, DC>> {
        debug!("spd0301 display off");
        self.interface.cmd(Cmd::DISPLAY_OFF)?;
        self.state = PowerState::Sleeping;
        Ok(())
    }

    /// Enable the output again
    pub fn wake(&mut self) -> Result<(), InterfaceError<SPI, DC>> {
        debug!("spd0301 display on");
        self.interface.cmd(Cmd::DISPLAY_ON)?;
        self.state = PowerState::On;
        Ok(())
    }

    /// Last power state commanded by this driver
    pub fn power_state(&self) -> PowerState {
        self.state
    }

    /// The frame buffer
    pub fn pixels(&self) -> &PixelBuffer {
        &self.pixels
    }

    /// The frame buffer, for drawing
    pub fn pixels_mut(&mut self) -> &mut PixelBuffer {
        &mut self.pixels
    }

    /// Turn one pixel on or off in the buffer
    pub fn set_pixel(&mut self, x: i32, y: i32, on: bool) {
        self.pixels.set_pixel(x, y, on);
    }

    /// Read one pixel back from the buffer
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<bool> {
        self.pixels.get_pixel(x, y)
    }

    /// Consume the driver and return the bus and pins
    pub fn release(self) -> (SPI, DC, RST, CS) {
        self.interface.release()
    }
}
