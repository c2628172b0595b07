//! Instruction register encodings
//!
//! Each HD44780U instruction family is modelled as an immutable value type
//! holding its flags as named fields. [`instruction`](EntryMode::instruction)
//! computes the byte from the documented bit positions, so identity bits are
//! always set and unused or don't-care bits are always zero, whatever the
//! history of the value.
//!
//! Setters consume the value and return an updated copy. They are total and
//! idempotent: applying the same setter twice yields the same byte as once.
//!
//! ## Example
//!
//! ```
//! use hd44780u::instruction::DisplayControl;
//!
//! let display = DisplayControl::new().with_screen(true).with_cursor(true);
//! assert_eq!(display.instruction(), 0b0000_1110);
//!
//! let blinking = display.with_blink(true);
//! assert_eq!(blinking.instruction(), 0b0000_1111);
//! assert_eq!(blinking.with_blink(true), blinking);
//! ```

use crate::command::{
    CURSOR_DISPLAY_SHIFT, DISPLAY_CONTROL, ENTRY_MODE_SET, FUNCTION_SET, SET_CGRAM_ADDRESS,
    SET_DDRAM_ADDRESS,
};

/// Direction the address counter (or the display) moves in
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    /// Towards lower addresses
    #[default]
    Left,
    /// Towards higher addresses
    Right,
}

/// What a cursor/display shift instruction moves
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ShiftTarget {
    /// Move the cursor only, DDRAM address counter follows
    #[default]
    Cursor,
    /// Move the whole display window, address counter unchanged
    Screen,
}

/// Number of display lines configured by function set
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Lines {
    /// One display line
    #[default]
    One,
    /// Two display lines
    Two,
}

/// Character font configured by function set
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Font {
    /// 5x8 dots
    #[default]
    Font5x8,
    /// 5x10 dots, only available with [`Lines::One`]
    Font5x10,
}

/// Entry mode set register
///
/// Bit 1 (I/D) selects increment (1) or decrement (0) of the address
/// counter after each data write; bit 0 (S) shifts the display along with it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EntryMode {
    increment: bool,
    shift: bool,
}

impl EntryMode {
    const INCREMENT_BIT: u8 = 1 << 1;
    const SHIFT_BIT: u8 = 1 << 0;

    /// Increment on, display shift off
    pub const fn new() -> Self {
        Self {
            increment: true,
            shift: false,
        }
    }

    /// Select increment (`true`) or decrement (`false`)
    pub const fn with_increment(self, increment: bool) -> Self {
        Self { increment, ..self }
    }

    /// Enable or disable display shift on write
    pub const fn with_shift(self, shift: bool) -> Self {
        Self { shift, ..self }
    }

    /// Whether the address counter increments
    pub const fn increment(self) -> bool {
        self.increment
    }

    /// Whether the display shifts on write
    pub const fn shift(self) -> bool {
        self.shift
    }

    /// Encode as an instruction byte
    pub const fn instruction(self) -> u8 {
        let mut byte = ENTRY_MODE_SET;
        if self.increment {
            byte |= Self::INCREMENT_BIT;
        }
        if self.shift {
            byte |= Self::SHIFT_BIT;
        }
        byte
    }
}

impl Default for EntryMode {
    fn default() -> Self {
        Self::new()
    }
}

/// Display on/off control register
///
/// Bit 2 (D) turns the screen on, bit 1 (C) shows the cursor and bit 0 (B)
/// blinks the character under the cursor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DisplayControl {
    screen: bool,
    cursor: bool,
    blink: bool,
}

impl DisplayControl {
    const SCREEN_BIT: u8 = 1 << 2;
    const CURSOR_BIT: u8 = 1 << 1;
    const BLINK_BIT: u8 = 1 << 0;

    /// Screen, cursor and blink all off
    pub const fn new() -> Self {
        Self {
            screen: false,
            cursor: false,
            blink: false,
        }
    }

    /// Turn the screen on or off
    pub const fn with_screen(self, screen: bool) -> Self {
        Self { screen, ..self }
    }

    /// Show or hide the cursor
    pub const fn with_cursor(self, cursor: bool) -> Self {
        Self { cursor, ..self }
    }

    /// Enable or disable cursor blink
    pub const fn with_blink(self, blink: bool) -> Self {
        Self { blink, ..self }
    }

    /// Whether the screen is on
    pub const fn screen(self) -> bool {
        self.screen
    }

    /// Whether the cursor is shown
    pub const fn cursor(self) -> bool {
        self.cursor
    }

    /// Whether the cursor blinks
    pub const fn blink(self) -> bool {
        self.blink
    }

    /// Encode as an instruction byte
    pub const fn instruction(self) -> u8 {
        let mut byte = DISPLAY_CONTROL;
        if self.screen {
            byte |= Self::SCREEN_BIT;
        }
        if self.cursor {
            byte |= Self::CURSOR_BIT;
        }
        if self.blink {
            byte |= Self::BLINK_BIT;
        }
        byte
    }
}

/// Cursor or display shift register
///
/// Bit 3 (S/C) selects the display (1) or the cursor (0), bit 2 (R/L) the
/// direction. Bits 1..0 are don't care and always encoded as zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShiftControl {
    target: ShiftTarget,
    direction: Direction,
}

impl ShiftControl {
    const SCREEN_BIT: u8 = 1 << 3;
    const RIGHT_BIT: u8 = 1 << 2;

    /// Cursor shift to the left
    pub const fn new() -> Self {
        Self {
            target: ShiftTarget::Cursor,
            direction: Direction::Left,
        }
    }

    /// Select what moves
    pub const fn with_target(self, target: ShiftTarget) -> Self {
        Self { target, ..self }
    }

    /// Select the direction
    pub const fn with_direction(self, direction: Direction) -> Self {
        Self { direction, ..self }
    }

    /// What moves
    pub const fn target(self) -> ShiftTarget {
        self.target
    }

    /// Which way it moves
    pub const fn direction(self) -> Direction {
        self.direction
    }

    /// Encode as an instruction byte
    pub const fn instruction(self) -> u8 {
        let mut byte = CURSOR_DISPLAY_SHIFT;
        if matches!(self.target, ShiftTarget::Screen) {
            byte |= Self::SCREEN_BIT;
        }
        if matches!(self.direction, Direction::Right) {
            byte |= Self::RIGHT_BIT;
        }
        byte
    }
}

impl Default for ShiftControl {
    fn default() -> Self {
        Self::new()
    }
}

/// Function set register
///
/// Bit 4 (DL) selects the 8-bit bus and is always set by this driver, bit 3
/// (N) the line count and bit 2 (F) the font. Bits 1..0 are don't care and
/// always encoded as zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FunctionSet {
    lines: Lines,
    font: Font,
}

impl FunctionSet {
    const EIGHT_BIT_BUS: u8 = 1 << 4;
    const TWO_LINE_BIT: u8 = 1 << 3;
    const FONT_5X10_BIT: u8 = 1 << 2;

    /// 8-bit bus, one line, 5x8 font
    pub const fn new() -> Self {
        Self {
            lines: Lines::One,
            font: Font::Font5x8,
        }
    }

    /// Select the line count
    pub const fn with_lines(self, lines: Lines) -> Self {
        Self { lines, ..self }
    }

    /// Select the font
    pub const fn with_font(self, font: Font) -> Self {
        Self { font, ..self }
    }

    /// Configured line count
    pub const fn lines(self) -> Lines {
        self.lines
    }

    /// Configured font
    pub const fn font(self) -> Font {
        self.font
    }

    /// Encode as an instruction byte
    pub const fn instruction(self) -> u8 {
        let mut byte = FUNCTION_SET | Self::EIGHT_BIT_BUS;
        if matches!(self.lines, Lines::Two) {
            byte |= Self::TWO_LINE_BIT;
        }
        if matches!(self.font, Font::Font5x10) {
            byte |= Self::FONT_5X10_BIT;
        }
        byte
    }
}

impl Default for FunctionSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Set CGRAM address instruction
///
/// Only the low six bits of the address are kept.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CgramAddress(u8);

impl CgramAddress {
    /// Mask of the 6-bit address field
    pub const MASK: u8 = 0x3F;

    /// Create from a raw address, discarding bits above the field
    pub const fn new(address: u8) -> Self {
        Self(address & Self::MASK)
    }

    /// The address field
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Encode as an instruction byte
    pub const fn instruction(self) -> u8 {
        SET_CGRAM_ADDRESS | self.0
    }
}

/// Set DDRAM address instruction
///
/// Only the low seven bits of the address are kept. The same value is used
/// as the driver's record of the controller's address counter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct DdramAddress(u8);

impl DdramAddress {
    /// Mask of the 7-bit address field
    pub const MASK: u8 = 0x7F;

    /// Create from a raw address, discarding bits above the field
    pub const fn new(address: u8) -> Self {
        Self(address & Self::MASK)
    }

    /// The address field
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Encode as an instruction byte
    pub const fn instruction(self) -> u8 {
        SET_DDRAM_ADDRESS | self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_mode_default_is_increment_without_shift() {
        assert_eq!(EntryMode::default().instruction(), 0b0000_0110);
    }

    #[test]
    fn test_entry_mode_flags_are_independent() {
        let entry = EntryMode::new().with_increment(false);
        assert_eq!(entry.instruction(), 0b0000_0100);

        let entry = entry.with_shift(true);
        assert_eq!(entry.instruction(), 0b0000_0101);
        assert!(!entry.increment());
        assert!(entry.shift());
    }

    #[test]
    fn test_display_control_each_setter_flips_one_bit() {
        let base = DisplayControl::new();
        assert_eq!(base.instruction(), 0b0000_1000);

        let cases = [
            (base.with_screen(true), 0b100),
            (base.with_cursor(true), 0b010),
            (base.with_blink(true), 0b001),
        ];
        for (register, bit) in cases {
            assert_eq!(register.instruction() ^ base.instruction(), bit);
        }
    }

    #[test]
    fn test_display_control_setters_are_idempotent() {
        let once = DisplayControl::new().with_blink(true);
        let twice = once.with_blink(true);
        assert_eq!(once.instruction(), twice.instruction());
    }

    #[test]
    fn test_blink_off_leaves_cursor_alone() {
        let display = DisplayControl::new()
            .with_screen(true)
            .with_cursor(true)
            .with_blink(true)
            .with_blink(false);
        assert!(display.cursor());
        assert_eq!(display.instruction(), 0b0000_1110);
    }

    #[test]
    fn test_shift_control_encodings() {
        let cursor_left = ShiftControl::new();
        let cursor_right = cursor_left.with_direction(Direction::Right);
        let screen_left = cursor_left.with_target(ShiftTarget::Screen);
        let screen_right = screen_left.with_direction(Direction::Right);

        assert_eq!(cursor_left.instruction(), 0x10);
        assert_eq!(cursor_right.instruction(), 0x14);
        assert_eq!(screen_left.instruction(), 0x18);
        assert_eq!(screen_right.instruction(), 0x1C);
    }

    #[test]
    fn test_shift_control_dont_care_bits_are_zero() {
        let shift = ShiftControl::new()
            .with_target(ShiftTarget::Screen)
            .with_direction(Direction::Right);
        assert_eq!(shift.instruction() & 0b11, 0);
        assert_eq!(shift.instruction() & 0xE0, 0);
    }

    #[test]
    fn test_register_defaults_match_field_defaults() {
        let shift = ShiftControl::default();
        assert_eq!(shift.target(), ShiftTarget::default());
        assert_eq!(shift.direction(), Direction::default());

        let format = FunctionSet::default();
        assert_eq!(format.lines(), Lines::default());
        assert_eq!(format.font(), Font::default());
        assert_eq!(format.instruction(), 0x30);
    }

    #[test]
    fn test_function_set_always_selects_eight_bit_bus() {
        assert_eq!(FunctionSet::new().instruction(), 0b0011_0000);
        assert_eq!(
            FunctionSet::new().with_lines(Lines::Two).instruction(),
            0b0011_1000
        );
        assert_eq!(
            FunctionSet::new().with_font(Font::Font5x10).instruction(),
            0b0011_0100
        );
    }

    #[test]
    fn test_cgram_address_masks_to_six_bits() {
        assert_eq!(CgramAddress::new(0x3F).instruction(), 0x7F);
        assert_eq!(CgramAddress::new(0xFF).value(), 0x3F);
        assert_eq!(CgramAddress::new(0x08).instruction(), 0x48);
    }

    #[test]
    fn test_ddram_address_masks_to_seven_bits() {
        assert_eq!(DdramAddress::new(0x40).instruction(), 0xC0);
        assert_eq!(DdramAddress::new(0xFF).value(), 0x7F);
        assert_eq!(DdramAddress::new(0x00).instruction(), 0x80);
    }
}
