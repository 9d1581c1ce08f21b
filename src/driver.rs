//! HT16K33 display controller.
//!
//! [`Ht16k33`] owns a 16-byte copy of the chip's display RAM and turns
//! high-level requests into command bytes on an [`Interface`].
//!
//! # Write sequencing
//! - [`Ht16k33::initialize`] sends two single-byte commands in order: system
//!   setup with the oscillator on (`0x21`), then display setup with the output
//!   on and blinking off (`0x81`). Nothing is rolled back if the second write
//!   fails; both commands are idempotent, so calling `initialize` again is the
//!   recovery path.
//! - [`Ht16k33::set_buffer`] only touches memory.
//! - [`Ht16k33::show`] sends the display RAM address byte (`0x00`) followed
//!   by the 16 buffer bytes as one transaction, so the chip auto-increments
//!   through the whole RAM in a single write.
//! - Mode, brightness and blink commands are one byte each.
//!
//! # Example
//! ```rust,ignore
//! use ht16k33_matrix::{Brightness, Ht16k33, I2cInterface, DEFAULT_ADDRESS};
//!
//! let mut display = Ht16k33::new(I2cInterface::new(i2c, DEFAULT_ADDRESS));
//! display.initialize()?;
//! display.set_brightness(8)?;
//! display.set_and_show(&[0x02; 16])?;
//! ```

use crate::command::{BlinkRate, Brightness, Dimming, DisplaySetup, Mode, SystemSetup};
use crate::command::{DISPLAY_DATA, MAX_BRIGHTNESS};
use crate::error::Error;
use crate::interface::{ConnectError, Config, Connector, Interface};
use crate::{Buffer, BUFFER_LEN};

/// Name reported by a freshly created driver.
pub const DEFAULT_NAME: &str = "HT16K33";

/// Driver for the HT16K33 LED controller.
///
/// The buffer starts zeroed and is only ever replaced wholesale; composing
/// individual LEDs is left to the caller (see [`Matrix`](crate::Matrix)).
///
/// ## Type Parameters
///
/// * `I` - Bus transport implementing [`Interface`]
pub struct Ht16k33<I> {
    interface: I,
    pub(crate) name: &'static str,
    buffer: Buffer,
}

impl<I: Interface> Ht16k33<I> {
    /// Create a driver on an open connection.
    ///
    /// No bus traffic happens until [`initialize`](Self::initialize).
    pub fn new(interface: I) -> Self {
        Self {
            interface,
            name: DEFAULT_NAME,
            buffer: [0; BUFFER_LEN],
        }
    }

    /// Open a connection through `connector` and create a driver on it.
    ///
    /// # Errors
    ///
    /// Returns whatever [`Connector::connect`] reports; the device is not
    /// contacted.
    pub fn connect<C>(connector: C, config: &Config) -> Result<Self, ConnectError<C::Error>>
    where
        C: Connector<Connection = I>,
    {
        connector.connect(config).map(Self::new)
    }

    /// Enable the oscillator, then switch the display on with blinking off.
    ///
    /// Must be called once before anything is shown.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Interface`] from the first write that fails. If the
    /// oscillator write fails the display write is not attempted.
    pub fn initialize(&mut self) -> Result<(), Error<I>> {
        #[cfg(feature = "defmt")]
        defmt::debug!("ht16k33: initialize");
        self.command(SystemSetup::with_oscillator(true).bits())?;
        self.command(DisplaySetup::with(true, BlinkRate::Off).bits())
    }

    /// Configure the ROW/INT pin.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Interface`] if the write fails.
    pub fn set_mode(&mut self, mode: Mode) -> Result<(), Error<I>> {
        self.command(mode.command())
    }

    /// Replace the display buffer with a copy of `leds`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferLength`] unless `leds` is exactly
    /// [`BUFFER_LEN`] bytes; the stored buffer is left as it was.
    pub fn set_buffer(&mut self, leds: &[u8]) -> Result<(), Error<I>> {
        let leds: &Buffer = leds
            .try_into()
            .map_err(|_| Error::buffer_length(leds.len()))?;
        self.buffer = *leds;
        Ok(())
    }

    /// The display buffer as it will be sent by the next [`show`](Self::show).
    pub fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    /// Zero the display buffer. Nothing is sent.
    pub fn clear(&mut self) {
        self.buffer = [0; BUFFER_LEN];
    }

    /// Write the display buffer to the chip's display RAM.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Interface`] if the write fails. The stored buffer is
    /// unchanged and what the chip shows is unknown.
    pub fn show(&mut self) -> Result<(), Error<I>> {
        let mut frame = [0u8; BUFFER_LEN + 1];
        frame[0] = DISPLAY_DATA;
        frame[1..].copy_from_slice(&self.buffer);
        #[cfg(feature = "defmt")]
        defmt::trace!("ht16k33: show {=[u8]:x}", &self.buffer[..]);
        self.interface.write(&frame).map_err(Error::Interface)
    }

    /// [`set_buffer`](Self::set_buffer) followed by [`show`](Self::show).
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferLength`] without writing anything, or
    /// [`Error::Interface`] if the write fails.
    pub fn set_and_show(&mut self, leds: &[u8]) -> Result<(), Error<I>> {
        self.set_buffer(leds)?;
        self.show()
    }

    /// Set the PWM duty cycle, `0` (dimmest) to `15` (brightest).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Brightness`] without writing anything if `level` is
    /// above 15, or [`Error::Interface`] if the write fails.
    pub fn set_brightness(&mut self, level: u8) -> Result<(), Error<I>> {
        let level = Brightness::new(level).ok_or(Error::Brightness(level))?;
        self.set_dimming(level)
    }

    /// Typed form of [`set_brightness`](Self::set_brightness).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Interface`] if the write fails.
    pub fn set_dimming(&mut self, level: Brightness) -> Result<(), Error<I>> {
        debug_assert!(level.get() <= MAX_BRIGHTNESS);
        self.command(Dimming::new(level).bits())
    }

    /// Switch the display output and blink rate.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Interface`] if the write fails.
    pub fn set_display(&mut self, on: bool, blink: BlinkRate) -> Result<(), Error<I>> {
        self.command(DisplaySetup::with(on, blink).bits())
    }

    /// Stop the oscillator. Display RAM is retained by the chip and
    /// [`initialize`](Self::initialize) brings the output back.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Interface`] if the write fails.
    pub fn standby(&mut self) -> Result<(), Error<I>> {
        self.command(SystemSetup::with_oscillator(false).bits())
    }

    /// Key scan is not implemented.
    ///
    /// # Errors
    ///
    /// Always returns [`Error::Unsupported`]; nothing is read from the bus.
    pub fn read_input(&mut self) -> Result<[u8; 6], Error<I>> {
        Err(Error::Unsupported)
    }

    /// Consume the driver and give the interface back.
    pub fn release(self) -> I {
        self.interface
    }

    fn command(&mut self, byte: u8) -> Result<(), Error<I>> {
        #[cfg(feature = "defmt")]
        defmt::trace!("ht16k33: command {=u8:#x}", byte);
        self.interface.write_byte(byte).map_err(Error::Interface)
    }
}

impl<I> core::fmt::Debug for Ht16k33<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Ht16k33")
            .field("name", &self.name)
            .field("buffer", &self.buffer)
            .finish_non_exhaustive()
    }
}

#[cfg(feature = "defmt")]
impl<I> defmt::Format for Ht16k33<I> {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Ht16k33(name: {}, buffer: {=[u8]:x})", self.name, &self.buffer[..]);
    }
}
