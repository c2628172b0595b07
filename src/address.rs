//! DDRAM address tracking
//!
//! The HD44780U address counter is never read back, so the driver keeps its
//! own copy in an [`AddressTracker`]. Callers address the two visible lines
//! as one linear range of logical positions:
//!
//! | Line | Logical positions | DDRAM addresses |
//! |------|-------------------|-----------------|
//! | 1    | `0..=15`          | `0x00..=0x0F`   |
//! | 2    | `16..=31`         | `0x40..=0x4F`   |
//!
//! ## Example
//!
//! ```
//! use hd44780u::address::{ddram_address, logical_position};
//!
//! assert_eq!(ddram_address(3).value(), 0x03);
//! assert_eq!(ddram_address(16).value(), 0x40);
//! assert_eq!(ddram_address(31).value(), 0x4F);
//! assert_eq!(logical_position(ddram_address(20)), Some(20));
//! ```

use crate::instruction::{DdramAddress, Direction};

/// Visible characters per line
pub const LINE_LENGTH: u8 = 16;
/// First logical position of line one
pub const LINE_ONE_START: u8 = 0;
/// First logical position of line two
pub const LINE_TWO_START: u8 = LINE_LENGTH;
/// Number of logical positions across both lines
pub const POSITIONS: u8 = 2 * LINE_LENGTH;

/// First DDRAM address of line one
pub const DDRAM_LINE_ONE_START: u8 = 0x00;
/// Last visible DDRAM address of line one
pub const DDRAM_LINE_ONE_END: u8 = 0x0F;
/// First DDRAM address of line two
pub const DDRAM_LINE_TWO_START: u8 = 0x40;
/// Last visible DDRAM address of line two
pub const DDRAM_LINE_TWO_END: u8 = 0x4F;

// Last addresses of the controller's counter ranges in two-line mode.
const COUNTER_LINE_ONE_END: u8 = 0x27;
const COUNTER_LINE_TWO_END: u8 = 0x67;

/// One of the two display lines
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Line {
    /// Upper line
    One,
    /// Lower line
    Two,
}

impl Line {
    /// Logical position of the first cell on this line
    pub const fn start(self) -> u8 {
        match self {
            Self::One => LINE_ONE_START,
            Self::Two => LINE_TWO_START,
        }
    }
}

/// Map a logical position to its DDRAM address
///
/// Positions past the last cell wrap around modulo [`POSITIONS`], so the
/// result always lies in one of the two visible DDRAM ranges.
pub const fn ddram_address(position: u8) -> DdramAddress {
    let position = position % POSITIONS;
    if position < LINE_TWO_START {
        DdramAddress::new(DDRAM_LINE_ONE_START + position)
    } else {
        DdramAddress::new(DDRAM_LINE_TWO_START + (position - LINE_TWO_START))
    }
}

/// Map a DDRAM address back to a logical position
///
/// Returns `None` for addresses outside the visible cells.
pub const fn logical_position(address: DdramAddress) -> Option<u8> {
    match address.value() {
        a @ DDRAM_LINE_ONE_START..=DDRAM_LINE_ONE_END => Some(a - DDRAM_LINE_ONE_START),
        a @ DDRAM_LINE_TWO_START..=DDRAM_LINE_TWO_END => {
            Some(a - DDRAM_LINE_TWO_START + LINE_TWO_START)
        }
        _ => None,
    }
}

/// Software copy of the controller's DDRAM address counter
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AddressTracker {
    address: DdramAddress,
}

impl AddressTracker {
    /// Tracker at address 0
    pub const fn new() -> Self {
        Self {
            address: DdramAddress::new(DDRAM_LINE_ONE_START),
        }
    }

    /// Current tracked address
    pub const fn address(&self) -> DdramAddress {
        self.address
    }

    /// Logical position of the tracked address, if it is a visible cell
    pub const fn position(&self) -> Option<u8> {
        logical_position(self.address)
    }

    /// Back to address 0
    pub fn reset(&mut self) {
        self.address = DdramAddress::new(DDRAM_LINE_ONE_START);
    }

    /// Overwrite the tracked address
    pub fn set(&mut self, address: DdramAddress) {
        self.address = address;
    }

    /// Step past a written cell
    pub fn advance(&mut self) {
        self.address = DdramAddress::new(self.address.value().wrapping_add(1));
    }

    /// Whether the tracked address is on line one
    pub const fn is_on_line_one(&self) -> bool {
        self.address.value() <= DDRAM_LINE_ONE_END
    }

    /// Line the writer must jump to before the next cell, if any
    ///
    /// An address in the gap between the two lines continues on line two; an
    /// address past line two wraps back to line one.
    pub const fn correction(&self) -> Option<Line> {
        let address = self.address.value();
        if address > DDRAM_LINE_ONE_END && address < DDRAM_LINE_TWO_START {
            Some(Line::Two)
        } else if address > DDRAM_LINE_TWO_END {
            Some(Line::One)
        } else {
            None
        }
    }

    /// Follow a cursor shift instruction
    ///
    /// Mirrors the two-line counter: line one spans `0x00..=0x27`, line two
    /// `0x40..=0x67`, and moving off either end lands on the other line.
    pub fn shift_cursor(&mut self, direction: Direction) {
        let address = self.address.value();
        let next = match direction {
            Direction::Right => match address {
                COUNTER_LINE_ONE_END => DDRAM_LINE_TWO_START,
                a if a >= COUNTER_LINE_TWO_END => DDRAM_LINE_ONE_START,
                a => a + 1,
            },
            Direction::Left => match address {
                DDRAM_LINE_ONE_START => COUNTER_LINE_TWO_END,
                DDRAM_LINE_TWO_START => COUNTER_LINE_ONE_END,
                a => a - 1,
            },
        };
        self.address = DdramAddress::new(next);
    }
}
