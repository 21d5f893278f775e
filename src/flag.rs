pub struct Flag;
#[allow(dead_code)]
impl Flag {
    pub const ADDRESSING_HORIZONTAL: u8 = 0x00;
    pub const ADDRESSING_VERTICAL: u8 = 0x01;
    pub const ADDRESSING_PAGE: u8 = 0x02;
    /// Operating contrast for a 15V VCC supply
    pub const CONTRAST_VCC_15V: u8 = 0x72;
    /// 0x3F = 63, i.e. a ratio of 64 rows
    pub const MULTIPLEX_64: u8 = 0x3F;
    pub const NO_OFFSET: u8 = 0x00;
    /// freq/ratio setpoint lifted from vendor example code
    pub const CLOCK_DIVIDE_TUNED: u8 = 0xB0;
    pub const PRECHARGE_2_2: u8 = 0x22;
    /// 0x02 base + 0x10 alternative COM pin config, no L/R remap (0x20)
    pub const COM_PINS_ALT_NO_REMAP: u8 = 0x12;
    /// ~0.84 x Vcc. 0x34 is the reset default, ~0.78 x Vcc
    pub const VCOMH_084_VCC: u8 = 0x3C;
}
