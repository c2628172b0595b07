//! HD44780U instruction opcodes
//!
//! This module defines the fixed instruction bytes and the identity bits of
//! every instruction family understood by the HD44780U. Instructions are
//! latched with the register-select line in instruction mode; character codes
//! are latched with it in data mode.
//!
//! ## Instruction Layout
//!
//! The highest set bit of an instruction byte selects the command family.
//! Everything below it is a flag or an address field:
//!
//! | Instruction      | Identity | Payload bits                 |
//! |------------------|----------|------------------------------|
//! | Clear display    | `0x01`   | none                         |
//! | Return home      | `0x02`   | bit 0 don't care             |
//! | Entry mode set   | `0x04`   | I/D, S                       |
//! | Display control  | `0x08`   | D, C, B                      |
//! | Cursor/display shift | `0x10` | S/C, R/L, two don't care  |
//! | Function set     | `0x20`   | DL, N, F, two don't care     |
//! | Set CGRAM address | `0x40`  | 6-bit address                |
//! | Set DDRAM address | `0x80`  | 7-bit address                |
//!
//! ## Example
//!
//! ```
//! use hd44780u::command;
//!
//! assert_eq!(command::CLEAR_DISPLAY, 0x01);
//! assert_eq!(command::SET_DDRAM_ADDRESS | 0x40, 0xC0);
//! ```

/// Clear display instruction (0x01)
///
/// Writes spaces to all DDRAM cells, resets the address counter to 0 and
/// forces increment entry mode. Needs 1.52ms to complete.
pub const CLEAR_DISPLAY: u8 = 0x01;

/// Return home instruction (0x02)
///
/// Resets the address counter to 0 and undoes any display shift. DDRAM
/// contents are unchanged. Needs 1.52ms to complete.
pub const RETURN_HOME: u8 = 0x02;

/// Entry mode set identity bit (0x04)
pub const ENTRY_MODE_SET: u8 = 0x04;

/// Display on/off control identity bit (0x08)
pub const DISPLAY_CONTROL: u8 = 0x08;

/// Cursor or display shift identity bit (0x10)
pub const CURSOR_DISPLAY_SHIFT: u8 = 0x10;

/// Function set identity bit (0x20)
pub const FUNCTION_SET: u8 = 0x20;

/// Set CGRAM address identity bit (0x40)
pub const SET_CGRAM_ADDRESS: u8 = 0x40;

/// Set DDRAM address identity bit (0x80)
pub const SET_DDRAM_ADDRESS: u8 = 0x80;

/// Line feed character code
///
/// Never written to DDRAM; the text writer turns it into a line transition.
pub const LINE_FEED: u8 = 0x0A;

/// Terminator of null-terminated character runs
pub const NUL: u8 = 0x00;
