//! Display configuration types and builder

pub use crate::error::{BuilderError, MIN_SETTLE_DELAY_MS};
use crate::instruction::{DisplayControl, EntryMode, Font, FunctionSet, Lines};

/// Default wait after power-on before the first instruction, in milliseconds
pub const DEFAULT_POWER_ON_DELAY_MS: u32 = 100;

/// Default wait after every strobe, in milliseconds
pub const DEFAULT_SETTLE_DELAY_MS: u32 = 2;

/// Display configuration
///
/// Holds the register state written by [`Lcd::init`](crate::Lcd::init) and
/// the bus timings. Use [`Builder`] to create a Config.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Entry mode written during init
    pub entry_mode: EntryMode,
    /// Display control written during init
    pub display_control: DisplayControl,
    /// Function set written during init
    pub function_set: FunctionSet,
    /// Wait after power-on before the first instruction
    pub power_on_delay_ms: u32,
    /// Wait after each instruction or data strobe
    pub settle_delay_ms: u32,
}

impl Default for Config {
    fn default() -> Self {
        Builder::default().into_config()
    }
}

/// Builder for constructing display configuration
///
/// Defaults match a 16x2 module: two lines, 5x8 font, increment without
/// display shift, screen on with the cursor hidden.
///
/// # Example
///
/// ```
/// use hd44780u::{Builder, Lines};
///
/// let config = match Builder::new().lines(Lines::Two).cursor(true).build() {
///     Ok(config) => config,
///     Err(_) => return,
/// };
/// assert!(config.display_control.cursor());
/// ```
#[must_use]
pub struct Builder {
    increment: bool,
    shift: bool,
    screen: bool,
    cursor: bool,
    blink: bool,
    lines: Lines,
    font: Font,
    power_on_delay_ms: u32,
    settle_delay_ms: u32,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            increment: true,
            shift: false,
            screen: true,
            cursor: false,
            blink: false,
            lines: Lines::Two,
            font: Font::Font5x8,
            power_on_delay_ms: DEFAULT_POWER_ON_DELAY_MS,
            settle_delay_ms: DEFAULT_SETTLE_DELAY_MS,
        }
    }
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment (`true`) or decrement the address counter on write
    pub fn increment(mut self, increment: bool) -> Self {
        self.increment = increment;
        self
    }

    /// Shift the display on write
    pub fn shift(mut self, shift: bool) -> Self {
        self.shift = shift;
        self
    }

    /// Turn the screen on after init
    pub fn screen(mut self, screen: bool) -> Self {
        self.screen = screen;
        self
    }

    /// Show the cursor after init
    pub fn cursor(mut self, cursor: bool) -> Self {
        self.cursor = cursor;
        self
    }

    /// Blink the cursor after init
    pub fn blink(mut self, blink: bool) -> Self {
        self.blink = blink;
        self
    }

    /// Set the line count
    pub fn lines(mut self, lines: Lines) -> Self {
        self.lines = lines;
        self
    }

    /// Set the font
    pub fn font(mut self, font: Font) -> Self {
        self.font = font;
        self
    }

    /// Set the power-on warm-up delay
    pub fn power_on_delay_ms(mut self, value: u32) -> Self {
        self.power_on_delay_ms = value;
        self
    }

    /// Set the per-strobe settle delay
    ///
    /// Clear and return home need 1.52ms, so anything below
    /// [`MIN_SETTLE_DELAY_MS`] is rejected by [`build`](Self::build).
    pub fn settle_delay_ms(mut self, value: u32) -> Self {
        self.settle_delay_ms = value;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::SettleDelayTooShort` if the settle delay is
    /// below [`MIN_SETTLE_DELAY_MS`], and
    /// `BuilderError::FontUnsupportedForLines` if the 5x10 font is combined
    /// with two lines.
    pub fn build(self) -> Result<Config, BuilderError> {
        if self.settle_delay_ms < MIN_SETTLE_DELAY_MS {
            return Err(BuilderError::SettleDelayTooShort {
                provided: self.settle_delay_ms,
            });
        }
        if self.font == Font::Font5x10 && self.lines == Lines::Two {
            return Err(BuilderError::FontUnsupportedForLines);
        }
        Ok(self.into_config())
    }

    fn into_config(self) -> Config {
        Config {
            entry_mode: EntryMode::new()
                .with_increment(self.increment)
                .with_shift(self.shift),
            display_control: DisplayControl::new()
                .with_screen(self.screen)
                .with_cursor(self.cursor)
                .with_blink(self.blink),
            function_set: FunctionSet::new()
                .with_lines(self.lines)
                .with_font(self.font),
            power_on_delay_ms: self.power_on_delay_ms,
            settle_delay_ms: self.settle_delay_ms,
        }
    }
}
