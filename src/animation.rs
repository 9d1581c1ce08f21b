//! Frame generators and a tick-driven player.
//!
//! An [`Animation`] mutates a 16-byte frame once per tick. [`Player`] binds
//! one to a driver: every [`Player::tick`] advances the animation and pushes
//! the frame with [`Ht16k33::set_and_show`]. How often `tick` is called is
//! up to the host (a timer interrupt, an async ticker, or [`Player::run`]
//! with a blocking delay).
//!
//! # Example
//! ```rust,ignore
//! use ht16k33_matrix::animation::{HexCounter, Player};
//! use ht16k33_matrix::{Device, Ht16k33, I2cInterface, DEFAULT_ADDRESS};
//!
//! let driver = Ht16k33::new(I2cInterface::new(i2c, DEFAULT_ADDRESS));
//! let mut player = Player::new(driver, HexCounter::new(), [0x02; 16]);
//! player.start()?;
//! player.run(&mut delay, 100, u32::MAX)?;
//! ```

use embedded_hal::delay::DelayNs;

use crate::device::Device;
use crate::driver::Ht16k33;
use crate::error::Error;
use crate::glyph;
use crate::interface::Interface;
use crate::Buffer;

/// Produces successive frames.
pub trait Animation {
    /// Advance one step, updating `frame` in place.
    fn next_frame(&mut self, frame: &mut Buffer);
}

impl<F: FnMut(&mut Buffer)> Animation for F {
    fn next_frame(&mut self, frame: &mut Buffer) {
        self(frame);
    }
}

/// 16-bit counter shown as four hex digits.
///
/// Digits go to bytes 0, 2, 4 and 6 (the first byte of COM0-COM3), most
/// significant first. The counter wraps at `0xFFFF`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HexCounter {
    count: u16,
}

impl HexCounter {
    /// Counter starting at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self { count: 0 }
    }

    /// Counter starting at `count`.
    #[must_use]
    pub const fn starting_at(count: u16) -> Self {
        Self { count }
    }

    /// Value shown by the next frame.
    #[must_use]
    pub const fn count(&self) -> u16 {
        self.count
    }
}

impl Animation for HexCounter {
    fn next_frame(&mut self, frame: &mut Buffer) {
        let [hi, lo] = self.count.to_be_bytes();
        frame[0] = glyph::nibble(hi >> 4);
        frame[2] = glyph::nibble(hi);
        frame[4] = glyph::nibble(lo >> 4);
        frame[6] = glyph::nibble(lo);
        self.count = self.count.wrapping_add(1);
    }
}

/// Fills the whole frame with each glyph of a sequence in turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphCycle<'a> {
    glyphs: &'a [u8],
    index: usize,
}

impl<'a> GlyphCycle<'a> {
    /// Cycle through `glyphs`. An empty sequence leaves frames untouched.
    #[must_use]
    pub const fn new(glyphs: &'a [u8]) -> Self {
        Self { glyphs, index: 0 }
    }
}

impl GlyphCycle<'static> {
    /// Cycle through the hex digit glyphs `0`-`F`.
    #[must_use]
    pub const fn hex() -> Self {
        Self::new(&glyph::NIBBLE)
    }
}

impl Animation for GlyphCycle<'_> {
    fn next_frame(&mut self, frame: &mut Buffer) {
        let Some(&glyph) = self.glyphs.get(self.index) else {
            return;
        };
        frame.fill(glyph);
        self.index = (self.index + 1) % self.glyphs.len();
    }
}

/// Rotates every byte of the frame left by one bit per step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rotator;

impl Animation for Rotator {
    fn next_frame(&mut self, frame: &mut Buffer) {
        for byte in frame.iter_mut() {
            *byte = byte.rotate_left(1);
        }
    }
}

/// Drives an [`Animation`] on an [`Ht16k33`].
pub struct Player<I, A> {
    driver: Ht16k33<I>,
    animation: A,
    frame: Buffer,
}

impl<I: Interface, A: Animation> Player<I, A> {
    /// Bind `animation` to `driver`. `frame` is shown by [`Device::start`]
    /// and is the starting point for the first tick.
    pub fn new(driver: Ht16k33<I>, animation: A, frame: Buffer) -> Self {
        Self {
            driver,
            animation,
            frame,
        }
    }

    /// Advance the animation and show the new frame.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Interface`] if the frame could not be written. The
    /// animation has already advanced; the next tick shows the frame after.
    pub fn tick(&mut self) -> Result<(), Error<I>> {
        self.animation.next_frame(&mut self.frame);
        self.driver.set_and_show(&self.frame)
    }

    /// Tick `ticks` times, waiting `period_ms` after each frame.
    ///
    /// # Errors
    ///
    /// Stops at and returns the first failing tick.
    pub fn run<D: DelayNs>(
        &mut self,
        delay: &mut D,
        period_ms: u32,
        ticks: u32,
    ) -> Result<(), Error<I>> {
        for _ in 0..ticks {
            self.tick()?;
            delay.delay_ms(period_ms);
        }
        Ok(())
    }

    /// The frame most recently handed to the driver.
    pub fn frame(&self) -> &Buffer {
        &self.frame
    }

    /// The driver, for commands outside the animation (brightness, blink).
    pub fn driver(&mut self) -> &mut Ht16k33<I> {
        &mut self.driver
    }

    /// Split back into driver and animation.
    pub fn release(self) -> (Ht16k33<I>, A) {
        (self.driver, self.animation)
    }
}

impl<I: Interface, A: Animation> Device for Player<I, A> {
    type Error = Error<I>;

    fn name(&self) -> &'static str {
        self.driver.name()
    }

    fn set_name(&mut self, name: &'static str) {
        self.driver.set_name(name);
    }

    fn start(&mut self) -> Result<(), Self::Error> {
        self.driver.start()?;
        self.driver.set_and_show(&self.frame)
    }

    fn halt(&mut self) -> Result<(), Self::Error> {
        self.driver.halt()
    }
}
