//! HD44780U Character LCD Driver
//!
//! A driver for HD44780U-compatible character LCD controllers (16x2 modules
//! such as the LCD1602) wired over the 8-bit parallel bus.
//!
//! ## Features
//!
//! - `no_std` compatible
//! - `embedded-hal` v1.0 support
//! - Typed instruction registers with bit-accurate encodings
//! - Software tracking of the DDRAM address counter
//! - Automatic line wrapping and line feed handling for two-line text
//! - `core::fmt::Write` support
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use core::fmt::Write;
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::OutputPin;
//! use hd44780u::{Builder, Interface, Lcd};
//!
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! let data = [MockPin, MockPin, MockPin, MockPin, MockPin, MockPin, MockPin, MockPin];
//! let interface = Interface::new(data, MockPin, MockPin, MockPin);
//! let config = match Builder::new().cursor(true).build() {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//!
//! let mut lcd = Lcd::new(interface, MockDelay, config);
//! let _ = lcd.init();
//! let _ = lcd.write_str("HELLO\nWORLD");
//! let _ = lcd.goto_position(27);
//! let _ = write!(lcd, "{}C", 21);
//! ```

#![no_std]

#[cfg(test)]
extern crate alloc;

/// DDRAM address tracking and logical positions
pub mod address;
/// HD44780U instruction opcodes
pub mod command;
/// Display configuration types and builder
pub mod config;
/// Core display operations
pub mod display;
/// Error types for the driver
pub mod error;
/// Instruction register encodings
pub mod instruction;
/// Hardware interface abstraction
pub mod interface;

pub use address::{AddressTracker, Line};
pub use config::{Builder, Config, DEFAULT_POWER_ON_DELAY_MS, DEFAULT_SETTLE_DELAY_MS};
pub use display::Lcd;
pub use error::{BuilderError, Error, MIN_SETTLE_DELAY_MS};
pub use instruction::{
    CgramAddress, DdramAddress, Direction, DisplayControl, EntryMode, Font, FunctionSet, Lines,
    ShiftControl, ShiftTarget,
};
pub use interface::{Interface, InterfaceError, ParallelBus, ReadWrite, RegisterSelect};
