//! Bus transport abstraction
//!
//! The driver only ever needs two primitives from the bus: write a single
//! command byte, and write a contiguous byte sequence as one transaction.
//! [`Interface`] captures exactly that, and [`I2cInterface`] implements it
//! on top of an embedded-hal v1.0 [`I2c`] bus bound to one 7-bit address.
//!
//! Opening a connection is a separate step modelled by [`Connector`]: given a
//! [`Config`] (bus number and device address) it hands back an
//! [`Interface`] or fails before any command is sent.
//!
//! ## Example
//!
//! ```rust,ignore
//! use ht16k33_matrix::{Config, Connector, I2cConnector};
//!
//! // `i2c` is the HAL's I2C peripheral, exposed here as bus 1
//! let connector = I2cConnector::new(i2c, 1);
//! let interface = connector.connect(&Config::default().with_address(0x71))?;
//! ```

use core::fmt::Debug;

use embedded_hal::i2c::I2c;

/// Default 7-bit address of the HT16K33 (all address pins low).
pub const DEFAULT_ADDRESS: u8 = 0x70;

/// Highest valid 7-bit bus address.
pub const MAX_ADDRESS: u8 = 0x7F;

/// Byte-level write access to one device on the bus.
///
/// Implement this on your own type to drive the controller through a
/// transport other than [`I2cInterface`].
pub trait Interface {
    /// Error type for bus operations
    type Error: Debug;

    /// Write a single command byte.
    ///
    /// # Errors
    ///
    /// Returns the transport error if the write was not acknowledged.
    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error>;

    /// Write `bytes` as one transaction.
    ///
    /// # Errors
    ///
    /// Returns the transport error if the write was not acknowledged.
    fn write(&mut self, bytes: &[u8]) -> Result<(), Self::Error>;
}

impl<T: Interface + ?Sized> Interface for &mut T {
    type Error = T::Error;

    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        T::write_byte(self, byte)
    }

    fn write(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        T::write(self, bytes)
    }
}

/// Where to find the controller.
///
/// Resolved once when connecting; the driver never changes it afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// Bus number, `None` selects the connector's default bus
    pub bus: Option<u8>,
    /// 7-bit device address
    pub address: u8,
}

impl Config {
    /// Default address on the default bus.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            bus: None,
            address: DEFAULT_ADDRESS,
        }
    }

    /// Use `address` instead of [`DEFAULT_ADDRESS`].
    #[must_use]
    pub const fn with_address(mut self, address: u8) -> Self {
        self.address = address;
        self
    }

    /// Use bus number `bus` instead of the connector's default.
    #[must_use]
    pub const fn with_bus(mut self, bus: u8) -> Self {
        self.bus = Some(bus);
        self
    }

    /// The bus to open, falling back to `default_bus`.
    #[must_use]
    pub fn bus_or(&self, default_bus: u8) -> u8 {
        self.bus.unwrap_or(default_bus)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors that can occur while opening a connection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConnectError<E> {
    /// The connector has no bus with this number
    UnknownBus(u8),
    /// The address does not fit in 7 bits
    InvalidAddress(u8),
    /// Connector specific failure (device unreachable, bus not available)
    Bus(E),
}

impl<E: Debug> core::fmt::Display for ConnectError<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConnectError::UnknownBus(bus) => write!(f, "Unknown bus {bus}"),
            ConnectError::InvalidAddress(address) => {
                write!(f, "Invalid 7-bit address {address:#04x}")
            }
            ConnectError::Bus(e) => write!(f, "Bus error: {e:?}"),
        }
    }
}

impl<E: Debug> core::error::Error for ConnectError<E> {}

/// Opens connections to a device at (address, bus).
pub trait Connector {
    /// Connection handle returned on success
    type Connection: Interface;
    /// Connector specific error
    type Error: Debug;

    /// Bus used when the [`Config`] does not name one.
    fn default_bus(&self) -> u8;

    /// Open a connection to the device described by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectError::InvalidAddress`] for addresses above
    /// [`MAX_ADDRESS`], [`ConnectError::UnknownBus`] when the bus does not
    /// exist, and [`ConnectError::Bus`] when the device is unreachable.
    fn connect(self, config: &Config) -> Result<Self::Connection, ConnectError<Self::Error>>;
}

/// [`Interface`] over an embedded-hal [`I2c`] bus.
///
/// ## Type Parameters
///
/// * `I2C` - I2C bus implementing [`I2c`]
pub struct I2cInterface<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C: I2c> I2cInterface<I2C> {
    /// Bind `i2c` to the device at `address`.
    ///
    /// No bus traffic happens here.
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// The 7-bit address writes are sent to.
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Give the bus back.
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C: I2c> Interface for I2cInterface<I2C> {
    type Error = I2C::Error;

    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        self.i2c.write(self.address, &[byte])
    }

    fn write(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        self.i2c.write(self.address, bytes)
    }
}

impl<I2C> core::fmt::Debug for I2cInterface<I2C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("I2cInterface")
            .field("address", &self.address)
            .finish_non_exhaustive()
    }
}

/// [`Connector`] for a single, already configured I2C bus.
///
/// On a microcontroller the bus number is only a label: the bus is whichever
/// peripheral was handed in. Asking for any other number fails.
pub struct I2cConnector<I2C> {
    i2c: I2C,
    bus: u8,
}

impl<I2C: I2c> I2cConnector<I2C> {
    /// Expose `i2c` as bus number `bus`.
    pub fn new(i2c: I2C, bus: u8) -> Self {
        Self { i2c, bus }
    }
}

impl<I2C: I2c> Connector for I2cConnector<I2C> {
    type Connection = I2cInterface<I2C>;
    type Error = core::convert::Infallible;

    fn default_bus(&self) -> u8 {
        self.bus
    }

    fn connect(self, config: &Config) -> Result<Self::Connection, ConnectError<Self::Error>> {
        if config.address > MAX_ADDRESS {
            return Err(ConnectError::InvalidAddress(config.address));
        }
        let bus = config.bus_or(self.default_bus());
        if bus != self.bus {
            return Err(ConnectError::UnknownBus(bus));
        }
        Ok(I2cInterface::new(self.i2c, config.address))
    }
}
