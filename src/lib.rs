//! Driver for the Holtek HT16K33 16x8 LED matrix controller.
//!
//! ## How the HT16K33 Works
//!
//! The HT16K33 is a RAM-mapped LED controller with a built-in oscillator,
//! PWM dimming and a key scan matrix. It keeps its own copy of the display
//! and multiplexes the LEDs without any help from the host, so the host only
//! writes when the picture changes.
//!
//! ### Signal names
//! - **ROW0-ROW15** – Anode drivers, one per matrix column
//! - **COM0-COM7** – Cathode drivers, one per matrix row
//! - **ROW/INT** – Either a row driver or the key scan interrupt output
//! - **SDA / SCL** – I²C data and clock, 7-bit address `0x70`-`0x77`
//!
//! ### Display RAM
//! 16 bytes, two per COM line. Byte `2n` holds ROW0-ROW7 of COMn and byte
//! `2n + 1` holds ROW8-ROW15, least significant bit first. A display data
//! write starts with the RAM address (`0x00`) and the chip auto-increments
//! through the remaining bytes, so the whole picture goes out in a single
//! 17-byte I²C transaction.
//!
//! ### Commands
//! Everything else is a one-byte command; see [`command`] for the encoding.
//! Bringing the chip up takes exactly two of them, in order:
//! 1. System setup with the oscillator enabled (`0x21`)
//! 2. Display setup with the output on and blinking off (`0x81`)
//!
//! ## Crate layout
//!
//! - [`Ht16k33`] – the display controller: owns the 16-byte buffer and
//!   sequences commands over an [`Interface`]
//! - [`interface`] – transport seam, with [`I2cInterface`] for any
//!   embedded-hal v1.0 I²C bus and [`Connector`] for opening connections
//! - [`Device`] – name/start/halt lifecycle used by host schedulers
//! - [`Matrix`] – `embedded-graphics` draw target that composes pixels into
//!   a buffer the driver accepts
//! - [`glyph`] and [`animation`] – seven-segment tables and frame generators
//!   for driving the display from a periodic tick
//!
//! ## Example
//! ```rust
//! use embedded_hal_mock::eh1::i2c::{Mock, Transaction};
//! use ht16k33_matrix::{Ht16k33, I2cInterface, DEFAULT_ADDRESS};
//!
//! let mut frame = vec![0x00];
//! frame.extend_from_slice(&[0x02; 16]);
//! let expectations = [
//!     Transaction::write(DEFAULT_ADDRESS, vec![0x21]),
//!     Transaction::write(DEFAULT_ADDRESS, vec![0x81]),
//!     Transaction::write(DEFAULT_ADDRESS, frame),
//! ];
//!
//! let mut display = Ht16k33::new(I2cInterface::new(Mock::new(&expectations), DEFAULT_ADDRESS));
//! display.initialize().unwrap();
//! display.set_and_show(&[0x02; 16]).unwrap();
//!
//! display.release().release().done();
//! ```
//!
//! ## Available Feature Flags
//!
//! ### `defmt` Feature
//! Implements `defmt::Format` for the public types and emits `defmt` trace
//! messages for every command sent. No functional changes.
#![no_std]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

pub mod animation;
pub mod command;
mod device;
mod driver;
mod error;
pub mod glyph;
pub mod interface;
mod matrix;

pub use command::{BlinkRate, Brightness, Mode};
pub use device::Device;
pub use driver::{Ht16k33, DEFAULT_NAME};
pub use error::Error;
pub use interface::{
    Config, ConnectError, Connector, I2cConnector, I2cInterface, Interface, DEFAULT_ADDRESS,
};
pub use matrix::{Matrix, HEIGHT, WIDTH};

/// Size of the display RAM in bytes.
pub const BUFFER_LEN: usize = 16;

/// One full image of the display RAM.
pub type Buffer = [u8; BUFFER_LEN];
