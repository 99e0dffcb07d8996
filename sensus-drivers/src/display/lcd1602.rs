//! HD44780 character LCD behind a PCF8574 I2C backpack
//!
//! The backpack maps its eight port pins onto the LCD's 4-bit interface:
//!
//! ```text
//! P7 P6 P5 P4   P3 P2 P1 P0
//! D7 D6 D5 D4   BL EN RW RS
//! ```
//!
//! Every LCD byte therefore goes out as two nibbles, and each nibble as
//! two I2C writes: one with the enable bit set, one with it cleared. The
//! controller latches the nibble on that falling enable edge.

use heapless::String;

use sensus_core::config::LcdConfig;
use sensus_core::traits::display::{CharacterDisplay, DisplayError, DisplayValue};
use sensus_hal::i2c::I2cBus;
use sensus_hal::time::DelayUs;

/// PCF8574 control bits
mod backpack {
    /// Register select: 0 command, 1 data
    pub const RS: u8 = 0x01;
    /// Enable strobe; the LCD latches on the falling edge
    pub const EN: u8 = 0x04;
    /// Backlight transistor
    pub const BACKLIGHT: u8 = 0x08;
}

/// HD44780 command set
mod commands {
    pub const CLEAR_DISPLAY: u8 = 0x01;
    pub const RETURN_HOME: u8 = 0x02;
    pub const ENTRY_MODE_SET: u8 = 0x04;
    pub const DISPLAY_CONTROL: u8 = 0x08;
    pub const SHIFT: u8 = 0x10;
    pub const FUNCTION_SET: u8 = 0x20;
    pub const SET_DDRAM_ADDR: u8 = 0x80;

    // Entry mode flags
    pub const ENTRY_LEFT: u8 = 0x02;

    // Display control flags
    pub const DISPLAY_ON: u8 = 0x04;

    // Shift flags
    pub const SHIFT_DISPLAY: u8 = 0x08;
    pub const SHIFT_RIGHT: u8 = 0x04;

    // Function set flags
    pub const TWO_LINE: u8 = 0x08;
    pub const FONT_5X8: u8 = 0x00;
}

/// DDRAM start address per row.
///
/// Rows 0 and 2 share a controller line, as do 1 and 3, which is why the
/// offsets interleave rather than increase monotonically.
const ROW_OFFSETS: [u8; 4] = [0x00, 0x40, 0x14, 0x54];

/// Rendering buffer for [`DisplayValue`]; wider than any supported row
const VALUE_BUF: usize = 32;

/// Character LCD driver
pub struct Lcd1602<I2C, D> {
    i2c: I2C,
    delay: D,
    config: LcdConfig,
    backlight_on: bool,
    display_on: bool,
}

impl<I2C, D> Lcd1602<I2C, D>
where
    I2C: I2cBus,
    D: DelayUs,
{
    /// Driver for a 16x2 display at the factory address
    pub fn new(i2c: I2C, delay: D) -> Self {
        Self::with_config(i2c, delay, LcdConfig::default())
    }

    /// Driver with an explicit address and geometry
    pub fn with_config(i2c: I2C, delay: D, config: LcdConfig) -> Self {
        Self {
            i2c,
            delay,
            config,
            backlight_on: true,
            display_on: true,
        }
    }

    /// Bring the controller up in 4-bit mode.
    ///
    /// The reset dance is mandated by the HD44780 datasheet: three 8-bit
    /// function-set nibbles force a known state regardless of what mode
    /// the controller was left in, then one more switches it to 4-bit.
    pub fn init(&mut self) -> Result<(), DisplayError> {
        self.delay.delay_ms(50);

        self.write_nibble(0x03, false)?;
        self.delay.delay_ms(5);
        self.write_nibble(0x03, false)?;
        self.delay.delay_us(150);
        self.write_nibble(0x03, false)?;
        self.delay.delay_us(150);
        self.write_nibble(0x02, false)?;
        self.delay.delay_us(150);

        let lines = if self.config.rows > 1 {
            commands::TWO_LINE
        } else {
            0
        };
        self.command(commands::FUNCTION_SET | lines | commands::FONT_5X8)?;
        self.display_on = true;
        self.command(commands::DISPLAY_CONTROL | self.display_control_flags())?;
        self.clear()?;
        self.command(commands::ENTRY_MODE_SET | commands::ENTRY_LEFT)?;
        Ok(())
    }

    /// Whether the display output is currently on
    pub fn is_display_on(&self) -> bool {
        self.display_on
    }

    /// Whether the backlight is currently on
    pub fn is_backlight_on(&self) -> bool {
        self.backlight_on
    }

    fn display_control_flags(&self) -> u8 {
        if self.display_on {
            commands::DISPLAY_ON
        } else {
            0
        }
    }

    /// Release the bus and delay provider
    pub fn release(self) -> (I2C, D) {
        (self.i2c, self.delay)
    }

    fn command(&mut self, cmd: u8) -> Result<(), DisplayError> {
        self.write_byte(cmd, false)
    }

    fn write_byte(&mut self, value: u8, is_data: bool) -> Result<(), DisplayError> {
        self.write_nibble(value >> 4, is_data)?;
        self.write_nibble(value & 0x0F, is_data)
    }

    fn write_nibble(&mut self, nibble: u8, is_data: bool) -> Result<(), DisplayError> {
        let mut byte = (nibble & 0x0F) << 4;
        if is_data {
            byte |= backpack::RS;
        }
        if self.backlight_on {
            byte |= backpack::BACKLIGHT;
        }

        // Latch on the falling enable edge
        self.write_raw(byte | backpack::EN)?;
        self.delay.delay_us(1);
        self.write_raw(byte)?;
        self.delay.delay_us(50);
        Ok(())
    }

    fn write_raw(&mut self, byte: u8) -> Result<(), DisplayError> {
        self.i2c
            .write(self.config.address, &[byte])
            .map_err(|_| DisplayError::Bus)
    }
}

impl<I2C, D> CharacterDisplay for Lcd1602<I2C, D>
where
    I2C: I2cBus,
    D: DelayUs,
{
    fn clear(&mut self) -> Result<(), DisplayError> {
        self.command(commands::CLEAR_DISPLAY)?;
        // Clear and home are the two slow commands
        self.delay.delay_ms(2);
        Ok(())
    }

    fn home(&mut self) -> Result<(), DisplayError> {
        self.command(commands::RETURN_HOME)?;
        self.delay.delay_ms(2);
        Ok(())
    }

    fn set_cursor(&mut self, row: u8, col: u8) -> Result<(), DisplayError> {
        if row >= self.config.rows || col >= self.config.cols {
            return Err(DisplayError::InvalidPosition);
        }
        let addr = ROW_OFFSETS[row as usize] + col;
        self.command(commands::SET_DDRAM_ADDR | addr)
    }

    fn write_str(&mut self, text: &str) -> Result<(), DisplayError> {
        for byte in text.bytes() {
            self.write_byte(byte, true)?;
        }
        Ok(())
    }

    fn write_value(&mut self, value: &DisplayValue<'_>) -> Result<(), DisplayError> {
        let mut buf: String<VALUE_BUF> = String::new();
        // Anything wider than the buffer is wider than the glass; show
        // the prefix that fits
        let _ = value.render(&mut buf);
        self.write_str(&buf)
    }

    fn scroll_left(&mut self) -> Result<(), DisplayError> {
        self.command(commands::SHIFT | commands::SHIFT_DISPLAY)
    }

    fn scroll_right(&mut self) -> Result<(), DisplayError> {
        self.command(commands::SHIFT | commands::SHIFT_DISPLAY | commands::SHIFT_RIGHT)
    }

    fn set_backlight(&mut self, on: bool) -> Result<(), DisplayError> {
        self.backlight_on = on;
        // No enable strobe: only the backlight line changes
        self.write_raw(if on { backpack::BACKLIGHT } else { 0 })
    }

    fn set_display_enabled(&mut self, on: bool) -> Result<(), DisplayError> {
        self.display_on = on;
        self.command(commands::DISPLAY_CONTROL | self.display_control_flags())
    }
}
