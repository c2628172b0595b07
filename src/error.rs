//! Error types for the driver
//!
//! This module defines error types for configuration building ([`BuilderError`])
//! and display operations ([`Error`]).
//!
//! The HD44780U never acknowledges an instruction, so a missed latch or a
//! loose wire cannot be detected. The only runtime failures the driver can
//! report are the ones the bus implementation returns.
//!
//! ## Error Types
//!
//! - [`BuilderError`] - Errors during configuration construction
//! - [`Error`] - Runtime errors during display operations
//! - [`InterfaceError`](crate::interface::InterfaceError) - Low-level pin errors
//!
//! ## Example
//!
//! ```
//! use hd44780u::{Builder, BuilderError};
//!
//! let result = Builder::new().settle_delay_ms(0).build();
//! assert!(matches!(result, Err(BuilderError::SettleDelayTooShort { provided: 0 })));
//! ```

use crate::interface::ParallelBus;

/// Shortest accepted settle delay in milliseconds
///
/// Clear display and return home take up to 1.52ms to execute.
pub const MIN_SETTLE_DELAY_MS: u32 = 2;

/// Errors that can occur when interacting with the display
///
/// Generic over the bus type to preserve the specific error type.
#[derive(Debug)]
pub enum Error<B: ParallelBus> {
    /// Bus error
    ///
    /// Wraps the underlying hardware error from the [`ParallelBus`] implementation.
    Interface(B::Error),
}

impl<B: ParallelBus> core::fmt::Display for Error<B> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(e) => write!(f, "Interface error: {e:?}"),
        }
    }
}

impl<B: ParallelBus + core::fmt::Debug> core::error::Error for Error<B> {}

/// Errors that can occur when building configuration
#[derive(Debug, PartialEq)]
pub enum BuilderError {
    /// Settle delay shorter than [`MIN_SETTLE_DELAY_MS`]
    SettleDelayTooShort {
        /// Requested delay in milliseconds
        provided: u32,
    },
    /// The 5x10 font was combined with two display lines
    ///
    /// The controller only drives 5x10 characters in one-line mode.
    FontUnsupportedForLines,
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::SettleDelayTooShort { provided } => write!(
                f,
                "Settle delay too short: {provided}ms (min {MIN_SETTLE_DELAY_MS}ms)"
            ),
            Self::FontUnsupportedForLines => {
                write!(f, "5x10 font is only available with one line")
            }
        }
    }
}

impl core::error::Error for BuilderError {}
