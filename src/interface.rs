//! Hardware interface abstraction
//!
//! This module provides the [`ParallelBus`] trait and the [`Interface`] struct
//! for driving the HD44780U over its 8-bit parallel bus.
//!
//! ## Hardware Requirements
//!
//! The HD44780U in 8-bit mode requires 11 GPIO outputs:
//! - **DB0-DB7**: Data lines
//! - **RS**: Register select (low=instruction, high=data)
//! - **RW**: Read/write (low=write); this driver never reads
//! - **E**: Enable, the controller latches on the falling edge
//!
//! ## Example
//!
//! ```rust,no_run
//! use hd44780u::{Interface, ParallelBus, ReadWrite, RegisterSelect};
//! # use core::convert::Infallible;
//! # use embedded_hal::digital::OutputPin;
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! let data = [MockPin, MockPin, MockPin, MockPin, MockPin, MockPin, MockPin, MockPin];
//! let mut interface = Interface::new(data, MockPin, MockPin, MockPin);
//!
//! // Latch a clear display instruction
//! let _ = interface.set_read_write(ReadWrite::Write);
//! let _ = interface.set_register_select(RegisterSelect::Instruction);
//! let _ = interface.set_data_lines(0x01);
//! let _ = interface.pulse_enable();
//! ```

use core::fmt::Debug;
use embedded_hal::digital::OutputPin;

type InterfaceResult<T, E> = core::result::Result<T, E>;

/// Register addressed by the next strobe
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegisterSelect {
    /// Instruction register (RS low)
    Instruction,
    /// Data register (RS high)
    Data,
}

/// Bus direction
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReadWrite {
    /// Controller reads the data lines (RW low)
    Write,
    /// Controller drives the data lines (RW high)
    Read,
}

/// Trait for the parallel bus to the HD44780U controller
///
/// Each call must take effect before it returns. Timing between strobes is
/// the caller's job; implementations only move pins.
///
/// ## Implementing
///
/// For most cases, use the provided [`Interface`] struct. Implement this
/// trait yourself for port-wide writes, I/O expanders or inverted wiring.
pub trait ParallelBus {
    /// Error type for bus operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Present a byte on DB0-DB7
    fn set_data_lines(&mut self, value: u8) -> InterfaceResult<(), Self::Error>;

    /// Drive the RS line
    fn set_register_select(&mut self, select: RegisterSelect) -> InterfaceResult<(), Self::Error>;

    /// Raise and then lower E, latching the data lines
    fn pulse_enable(&mut self) -> InterfaceResult<(), Self::Error>;

    /// Drive the RW line
    fn set_read_write(&mut self, direction: ReadWrite) -> InterfaceResult<(), Self::Error>;
}

/// Errors that can occur at the interface level
#[derive(Debug)]
pub enum InterfaceError<PinErr> {
    /// GPIO pin error
    Pin(PinErr),
}

impl<PinErr: Debug> core::fmt::Display for InterfaceError<PinErr> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Pin(e) => write!(f, "Pin error: {e:?}"),
        }
    }
}

impl<PinErr: Debug> core::error::Error for InterfaceError<PinErr> {}

/// Pin-per-line bus implementation
///
/// Implements [`ParallelBus`] for embedded-hal v1.0 output pins. The data
/// pins are passed as an array ordered DB0 to DB7, so they must share one
/// type; most HALs offer a type-erased pin for this.
///
/// ## Type Parameters
///
/// * `DATA` - Data pins implementing [`OutputPin`]
/// * `RS` - Register select pin implementing [`OutputPin`]
/// * `RW` - Read/write pin implementing [`OutputPin`]
/// * `EN` - Enable pin implementing [`OutputPin`]
pub struct Interface<DATA, RS, RW, EN> {
    /// Data pins, DB0 first
    data: [DATA; 8],
    /// Register select pin (low=instruction, high=data)
    rs: RS,
    /// Read/write pin (low=write)
    rw: RW,
    /// Enable pin
    en: EN,
}

impl<DATA, RS, RW, EN> Interface<DATA, RS, RW, EN>
where
    DATA: OutputPin,
    RS: OutputPin,
    RW: OutputPin,
    EN: OutputPin,
{
    /// Create a new Interface
    ///
    /// # Arguments
    ///
    /// * `data` - Data pins DB0..DB7
    /// * `rs` - Register select pin
    /// * `rw` - Read/write pin
    /// * `en` - Enable pin
    pub fn new(data: [DATA; 8], rs: RS, rw: RW, en: EN) -> Self {
        Self { data, rs, rw, en }
    }

    /// Give the pins back
    pub fn release(self) -> ([DATA; 8], RS, RW, EN) {
        (self.data, self.rs, self.rw, self.en)
    }
}

impl<DATA, RS, RW, EN, PinErr> ParallelBus for Interface<DATA, RS, RW, EN>
where
    DATA: OutputPin<Error = PinErr>,
    RS: OutputPin<Error = PinErr>,
    RW: OutputPin<Error = PinErr>,
    EN: OutputPin<Error = PinErr>,
    PinErr: Debug,
{
    type Error = InterfaceError<PinErr>;

    fn set_data_lines(&mut self, value: u8) -> InterfaceResult<(), Self::Error> {
        for (bit, pin) in self.data.iter_mut().enumerate() {
            if value & (1 << bit) != 0 {
                pin.set_high().map_err(InterfaceError::Pin)?;
            } else {
                pin.set_low().map_err(InterfaceError::Pin)?;
            }
        }
        Ok(())
    }

    fn set_register_select(&mut self, select: RegisterSelect) -> InterfaceResult<(), Self::Error> {
        let result = match select {
            RegisterSelect::Instruction => self.rs.set_low(),
            RegisterSelect::Data => self.rs.set_high(),
        };
        result.map_err(InterfaceError::Pin)
    }

    fn pulse_enable(&mut self) -> InterfaceResult<(), Self::Error> {
        self.en.set_high().map_err(InterfaceError::Pin)?;
        self.en.set_low().map_err(InterfaceError::Pin)?;
        Ok(())
    }

    fn set_read_write(&mut self, direction: ReadWrite) -> InterfaceResult<(), Self::Error> {
        let result = match direction {
            ReadWrite::Write => self.rw.set_low(),
            ReadWrite::Read => self.rw.set_high(),
        };
        result.map_err(InterfaceError::Pin)
    }
}
