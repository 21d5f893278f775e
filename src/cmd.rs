pub struct Cmd;
#[allow(dead_code)]
impl Cmd {
    pub const MEMORY_ADDRESSING_MODE: u8 = 0x20;
    pub const DISPLAY_START_LINE: u8 = 0x40;
    pub const CONTRAST: u8 = 0x81;
    pub const SEGMENT_REMAP: u8 = 0xA1;
    pub const DISPLAY_FROM_RAM: u8 = 0xA4;
    pub const DISPLAY_ALL_ON: u8 = 0xA5;
    pub const NORMAL_DISPLAY: u8 = 0xA6;
    pub const INVERSE_DISPLAY: u8 = 0xA7;
    pub const MULTIPLEX_RATIO: u8 = 0xA8;
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;
    pub const COM_SCAN_DEC: u8 = 0xC8;
    pub const DISPLAY_OFFSET: u8 = 0xD3;
    pub const CLOCK_DIVIDE: u8 = 0xD5;
    pub const PRECHARGE_PERIOD: u8 = 0xD9;
    pub const COM_PINS_CONFIG: u8 = 0xDA;
    pub const VCOMH_DESELECT: u8 = 0xDB;
}
