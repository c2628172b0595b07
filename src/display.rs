//! Core display operations

use core::ffi::CStr;

use embedded_hal::delay::DelayNs;

use crate::address::{AddressTracker, Line, ddram_address};
use crate::command::{CLEAR_DISPLAY, LINE_FEED, NUL, RETURN_HOME};
use crate::config::Config;
use crate::error::Error;
use crate::instruction::{
    DdramAddress, Direction, DisplayControl, EntryMode, Font, FunctionSet, Lines, ShiftControl,
    ShiftTarget,
};
use crate::interface::{ParallelBus, ReadWrite, RegisterSelect};

type DisplayResult<B> = core::result::Result<(), Error<B>>;

/// Core display driver for HD44780U
///
/// Owns the bus, the delay provider, the last value written to each
/// instruction register and the tracked DDRAM address. Every public
/// operation is a blocking bus transaction.
///
/// The tracked address always advances by one per written character, also
/// in decrement entry mode.
pub struct Lcd<B, D>
where
    B: ParallelBus,
    D: DelayNs,
{
    /// Hardware interface
    bus: B,
    /// Delay provider for power-on and settle waits
    delay: D,
    /// Display configuration
    config: Config,
    entry: EntryMode,
    display: DisplayControl,
    shifter: ShiftControl,
    format: FunctionSet,
    tracker: AddressTracker,
}

impl<B, D> Lcd<B, D>
where
    B: ParallelBus,
    D: DelayNs,
{
    /// Create a new Lcd instance
    ///
    /// Nothing is sent until [`init`](Self::init).
    pub fn new(bus: B, delay: D, config: Config) -> Self {
        Self {
            bus,
            delay,
            entry: config.entry_mode,
            display: config.display_control,
            shifter: ShiftControl::new(),
            format: config.function_set,
            tracker: AddressTracker::new(),
            config,
        }
    }

    /// Release the bus and delay provider
    pub fn release(self) -> (B, D) {
        (self.bus, self.delay)
    }

    /// Wait out power-on and write the configured registers
    ///
    /// Leaves the display cleared with the cursor at line one's start.
    pub fn init(&mut self) -> DisplayResult<B> {
        log::debug!("Initializing HD44780U");

        self.bus
            .set_read_write(ReadWrite::Write)
            .map_err(Error::Interface)?;
        self.bus
            .set_register_select(RegisterSelect::Instruction)
            .map_err(Error::Interface)?;
        self.bus.set_data_lines(0).map_err(Error::Interface)?;

        // Warm up
        self.delay.delay_ms(self.config.power_on_delay_ms);

        self.format = self.config.function_set;
        self.send_instruction(self.format.instruction())?;

        self.display = self.config.display_control;
        self.send_instruction(self.display.instruction())?;

        self.clear()?;

        // Clear forced increment mode, restore the configured entry mode
        self.entry = self.config.entry_mode;
        self.send_instruction(self.entry.instruction())?;

        self.home()?;

        log::debug!("HD44780U initialization complete");
        Ok(())
    }

    /// Blank every cell and move the cursor to line one's start
    pub fn clear(&mut self) -> DisplayResult<B> {
        log::debug!("Clearing display");
        self.send_instruction(CLEAR_DISPLAY)?;
        self.tracker.reset();
        self.entry = self.entry.with_increment(true);
        Ok(())
    }

    /// Move the cursor to line one's start and undo display shifts
    pub fn home(&mut self) -> DisplayResult<B> {
        log::debug!("Returning home");
        self.send_instruction(RETURN_HOME)?;
        self.tracker.reset();
        Ok(())
    }

    /// Address counter increments after each write
    pub fn entry_increment(&mut self) -> DisplayResult<B> {
        self.set_entry_mode(self.entry.with_increment(true))
    }

    /// Address counter decrements after each write
    pub fn entry_decrement(&mut self) -> DisplayResult<B> {
        self.set_entry_mode(self.entry.with_increment(false))
    }

    /// Shift the display along with each write
    pub fn entry_shift_on(&mut self) -> DisplayResult<B> {
        self.set_entry_mode(self.entry.with_shift(true))
    }

    /// Keep the display still on write
    pub fn entry_shift_off(&mut self) -> DisplayResult<B> {
        self.set_entry_mode(self.entry.with_shift(false))
    }

    /// Show the cursor
    pub fn cursor_on(&mut self) -> DisplayResult<B> {
        self.set_display_control(self.display.with_cursor(true))
    }

    /// Hide the cursor
    pub fn cursor_off(&mut self) -> DisplayResult<B> {
        self.set_display_control(self.display.with_cursor(false))
    }

    /// Blink the character under the cursor
    pub fn blink_on(&mut self) -> DisplayResult<B> {
        self.set_display_control(self.display.with_blink(true))
    }

    /// Stop blinking
    pub fn blink_off(&mut self) -> DisplayResult<B> {
        self.set_display_control(self.display.with_blink(false))
    }

    /// Turn the screen on
    pub fn screen_on(&mut self) -> DisplayResult<B> {
        self.set_display_control(self.display.with_screen(true))
    }

    /// Turn the screen off, DDRAM is kept
    pub fn screen_off(&mut self) -> DisplayResult<B> {
        self.set_display_control(self.display.with_screen(false))
    }

    /// Move the cursor one cell right
    pub fn cursor_right(&mut self) -> DisplayResult<B> {
        self.shift(ShiftTarget::Cursor, Direction::Right)
    }

    /// Move the cursor one cell left
    pub fn cursor_left(&mut self) -> DisplayResult<B> {
        self.shift(ShiftTarget::Cursor, Direction::Left)
    }

    /// Scroll the display window right
    pub fn move_right(&mut self) -> DisplayResult<B> {
        self.shift(ShiftTarget::Screen, Direction::Right)
    }

    /// Scroll the display window left
    pub fn move_left(&mut self) -> DisplayResult<B> {
        self.shift(ShiftTarget::Screen, Direction::Left)
    }

    /// Drive one display line
    pub fn format_one_line(&mut self) -> DisplayResult<B> {
        self.set_function(self.format.with_lines(Lines::One))
    }

    /// Drive two display lines
    pub fn format_two_line(&mut self) -> DisplayResult<B> {
        self.set_function(self.format.with_lines(Lines::Two))
    }

    /// Use the 5x8 font
    pub fn font_5x8(&mut self) -> DisplayResult<B> {
        self.set_function(self.format.with_font(Font::Font5x8))
    }

    /// Use the 5x10 font
    ///
    /// Sent as-is whatever the line count. [`Builder::build`](crate::Builder::build)
    /// rejects 5x10 with two lines, this setter does not; the controller
    /// keeps drawing 5x8 characters in two-line mode.
    pub fn font_5x10(&mut self) -> DisplayResult<B> {
        self.set_function(self.format.with_font(Font::Font5x10))
    }

    /// Move the cursor to a logical position
    ///
    /// Positions `0..=15` are line one and `16..=31` line two; anything
    /// larger wraps around.
    pub fn goto_position(&mut self, position: u8) -> DisplayResult<B> {
        let address = ddram_address(position);
        log::trace!("Cursor to position {position} (DDRAM {:#04x})", address.value());
        self.send_instruction(address.instruction())?;
        self.tracker.set(address);
        Ok(())
    }

    /// Move the cursor to line one's start
    pub fn goto_line_one(&mut self) -> DisplayResult<B> {
        self.goto_line(Line::One)
    }

    /// Move the cursor to line two's start
    pub fn goto_line_two(&mut self) -> DisplayResult<B> {
        self.goto_line(Line::Two)
    }

    /// Write one character code
    ///
    /// A cursor left past the end of a line is first moved to the start of
    /// the next one. A line feed moves from line one to line two, and from
    /// line two (or a full screen) clears the display; it never occupies a
    /// cell.
    pub fn write_byte(&mut self, byte: u8) -> DisplayResult<B> {
        let correction = self.tracker.correction();
        if let Some(line) = correction {
            log::debug!(
                "Wrapping from DDRAM {:#04x} to {:?}",
                self.tracker.address().value(),
                line
            );
            self.goto_line(line)?;
        }

        if byte == LINE_FEED {
            return self.line_feed(correction == Some(Line::One));
        }

        self.send_data(byte)?;
        self.tracker.advance();
        Ok(())
    }

    /// Write an integer character code, keeping its low byte
    pub fn write_int(&mut self, value: i32) -> DisplayResult<B> {
        self.write_byte(value as u8)
    }

    /// Write a null-terminated run of character codes
    ///
    /// Stops at the first NUL, or at the end of the slice if there is none.
    pub fn write_bytes(&mut self, bytes: &[u8]) -> DisplayResult<B> {
        for &byte in bytes.iter().take_while(|&&byte| byte != NUL) {
            self.write_byte(byte)?;
        }
        Ok(())
    }

    /// Write a string byte by byte, stopping at a NUL
    pub fn write_str(&mut self, text: &str) -> DisplayResult<B> {
        self.write_bytes(text.as_bytes())
    }

    /// Write a C string
    pub fn write_c_str(&mut self, text: &CStr) -> DisplayResult<B> {
        self.write_bytes(text.to_bytes())
    }

    /// Tracked DDRAM address
    pub fn address(&self) -> DdramAddress {
        self.tracker.address()
    }

    /// Logical position of the cursor, `None` while it sits past a line end
    pub fn position(&self) -> Option<u8> {
        self.tracker.position()
    }

    /// Last entry mode sent
    pub fn entry_mode(&self) -> EntryMode {
        self.entry
    }

    /// Last display control sent
    pub fn display_control(&self) -> DisplayControl {
        self.display
    }

    /// Last shift instruction sent
    pub fn shift_control(&self) -> ShiftControl {
        self.shifter
    }

    /// Last function set sent
    pub fn function_set(&self) -> FunctionSet {
        self.format
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    fn goto_line(&mut self, line: Line) -> DisplayResult<B> {
        self.goto_position(line.start())
    }

    /// `screen_full` is set when the cursor had run past line two before
    /// being wrapped back to line one.
    fn line_feed(&mut self, screen_full: bool) -> DisplayResult<B> {
        if self.tracker.is_on_line_one() && !screen_full {
            log::debug!("Line feed to line two");
            self.goto_line(Line::Two)
        } else {
            log::debug!("Line feed past line one, clearing");
            self.clear()?;
            self.goto_line(Line::One)
        }
    }

    fn set_entry_mode(&mut self, entry: EntryMode) -> DisplayResult<B> {
        self.send_instruction(entry.instruction())?;
        self.entry = entry;
        Ok(())
    }

    fn set_display_control(&mut self, display: DisplayControl) -> DisplayResult<B> {
        self.send_instruction(display.instruction())?;
        self.display = display;
        Ok(())
    }

    fn set_function(&mut self, format: FunctionSet) -> DisplayResult<B> {
        self.send_instruction(format.instruction())?;
        self.format = format;
        Ok(())
    }

    fn shift(&mut self, target: ShiftTarget, direction: Direction) -> DisplayResult<B> {
        let shifter = self.shifter.with_target(target).with_direction(direction);
        self.send_instruction(shifter.instruction())?;
        self.shifter = shifter;
        if target == ShiftTarget::Cursor {
            self.tracker.shift_cursor(direction);
        }
        Ok(())
    }

    /// Latch an instruction, then hand the bus back in data mode
    fn send_instruction(&mut self, instruction: u8) -> DisplayResult<B> {
        log::trace!("Instruction {instruction:#04x}");
        self.bus
            .set_register_select(RegisterSelect::Instruction)
            .map_err(Error::Interface)?;
        self.strobe(instruction)?;
        self.bus
            .set_register_select(RegisterSelect::Data)
            .map_err(Error::Interface)
    }

    fn send_data(&mut self, data: u8) -> DisplayResult<B> {
        log::trace!("Data {data:#04x}");
        self.bus
            .set_register_select(RegisterSelect::Data)
            .map_err(Error::Interface)?;
        self.strobe(data)
    }

    fn strobe(&mut self, value: u8) -> DisplayResult<B> {
        self.bus.set_data_lines(value).map_err(Error::Interface)?;
        self.bus.pulse_enable().map_err(Error::Interface)?;
        self.delay.delay_ms(self.config.settle_delay_ms);
        Ok(())
    }
}

impl<B, D> core::fmt::Write for Lcd<B, D>
where
    B: ParallelBus,
    D: DelayNs,
{
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        self.write_bytes(s.as_bytes()).map_err(|_| core::fmt::Error)
    }
}
