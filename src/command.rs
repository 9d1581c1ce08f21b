//! Command byte encoding for the HT16K33.
//!
//! Every command the chip accepts is a single byte whose high nibble selects
//! the command class and whose low bits carry a mode or data field. The only
//! multi-byte transaction is the display data write, which is the
//! [`DISPLAY_DATA`] address byte followed by the 16 bytes of display RAM.
//!
//! | Command        | Base   | Modifier                                 |
//! |----------------|--------|------------------------------------------|
//! | Display data   | `0x00` | followed by 16 raw buffer bytes          |
//! | System setup   | `0x20` | bit 0: oscillator enable                 |
//! | Key data       | `0x40` | unused                                   |
//! | Interrupt flag | `0x60` | unused                                   |
//! | Display setup  | `0x80` | bit 0: display on, bits 1-2: blink rate  |
//! | Row/Int mode   | `0xA0` | bits 0-1: [`Mode`]                       |
//! | Dimming        | `0xE0` | bits 0-3: duty cycle 0-15                |

use bitfield::bitfield;

/// Display RAM address pointer, first byte of a display data write.
pub const DISPLAY_DATA: u8 = 0x00;
/// System setup command base.
pub const SYSTEM_SETUP: u8 = 0x20;
/// Key data RAM address pointer.
pub const KEY_DATA: u8 = 0x40;
/// Interrupt flag address pointer.
pub const INT_FLAG: u8 = 0x60;
/// Display setup command base.
pub const DISPLAY_SETUP: u8 = 0x80;
/// ROW/INT set command base.
pub const ROW_INT: u8 = 0xA0;
/// Dimming set command base.
pub const DIMMING: u8 = 0xE0;

/// Highest duty cycle accepted by the dimming command.
pub const MAX_BRIGHTNESS: u8 = 15;

bitfield! {
    /// System setup register.
    ///
    /// The bit layout is as follows:
    /// - Bits 7-4: command (`0b0010`)
    /// - Bit 0: internal oscillator enable
    #[derive(Clone, Copy, PartialEq, Eq)]
    #[repr(transparent)]
    pub struct SystemSetup(u8);
    impl Debug;
    pub oscillator, set_oscillator: 0;
}

impl SystemSetup {
    /// System setup command with the oscillator off (standby).
    #[must_use]
    pub const fn new() -> Self {
        Self(SYSTEM_SETUP)
    }

    /// System setup command with the oscillator set as given.
    #[must_use]
    pub fn with_oscillator(on: bool) -> Self {
        let mut cmd = Self::new();
        cmd.set_oscillator(on);
        cmd
    }

    /// The encoded command byte.
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }
}

impl Default for SystemSetup {
    fn default() -> Self {
        Self::new()
    }
}

bitfield! {
    /// Display setup register.
    ///
    /// The bit layout is as follows:
    /// - Bits 7-4: command (`0b1000`)
    /// - Bits 2-1: blink rate
    /// - Bit 0: display on
    #[derive(Clone, Copy, PartialEq, Eq)]
    #[repr(transparent)]
    pub struct DisplaySetup(u8);
    impl Debug;
    pub blink, set_blink: 2, 1;
    pub display_on, set_display_on: 0;
}

impl DisplaySetup {
    /// Display setup command with the display off and blinking disabled.
    #[must_use]
    pub const fn new() -> Self {
        Self(DISPLAY_SETUP)
    }

    /// Display setup command for the given output state and blink rate.
    #[must_use]
    pub fn with(on: bool, blink: BlinkRate) -> Self {
        let mut cmd = Self::new();
        cmd.set_display_on(on);
        cmd.set_blink(blink as u8);
        cmd
    }

    /// The encoded command byte.
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }
}

impl Default for DisplaySetup {
    fn default() -> Self {
        Self::new()
    }
}

bitfield! {
    /// Dimming set register.
    ///
    /// The bit layout is as follows:
    /// - Bits 7-4: command (`0b1110`)
    /// - Bits 3-0: PWM duty cycle, `0` is 1/16 and `15` is 16/16
    #[derive(Clone, Copy, PartialEq, Eq)]
    #[repr(transparent)]
    pub struct Dimming(u8);
    impl Debug;
    pub duty, set_duty: 3, 0;
}

impl Dimming {
    /// Dimming command for the given brightness.
    #[must_use]
    pub fn new(level: Brightness) -> Self {
        let mut cmd = Self(DIMMING);
        cmd.set_duty(level.get());
        cmd
    }

    /// The encoded command byte.
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }
}

/// ROW/INT pin configuration.
///
/// In [`Mode::Row`] every matrix line drives LEDs. The interrupt variants
/// give up ROW15 to signal key presses, with the given polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Mode {
    /// ROW/INT pin is a row driver output
    Row = 0x00,
    /// ROW/INT pin is an active low interrupt output
    InterruptActiveLow = 0x01,
    /// ROW/INT pin is an active high interrupt output
    InterruptActiveHigh = 0x03,
}

impl Mode {
    /// The ROW/INT command byte selecting this mode.
    #[must_use]
    pub const fn command(self) -> u8 {
        ROW_INT | self as u8
    }
}

/// Blink rate carried in bits 1-2 of the display setup command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum BlinkRate {
    /// Steady output
    #[default]
    Off = 0b00,
    /// 2 Hz
    TwoHz = 0b01,
    /// 1 Hz
    OneHz = 0b10,
    /// 0.5 Hz
    HalfHz = 0b11,
}

/// PWM duty cycle in the range `0..=15`.
///
/// Level `0` is the dimmest setting, not off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Brightness(u8);

impl Brightness {
    /// Dimmest duty cycle (1/16).
    pub const MIN: Self = Self(0);
    /// Brightest duty cycle (16/16).
    pub const MAX: Self = Self(MAX_BRIGHTNESS);

    /// Returns `None` when `level` is above [`MAX_BRIGHTNESS`].
    #[must_use]
    pub const fn new(level: u8) -> Option<Self> {
        if level > MAX_BRIGHTNESS {
            None
        } else {
            Some(Self(level))
        }
    }

    /// The raw duty cycle.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Brightness {
    type Error = u8;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Self::new(level).ok_or(level)
    }
}
