//! Lifecycle contract shared by the driver and the things built on it.
//!
//! A host scheduler only needs to know how to name a device, start it once,
//! and halt it on shutdown. [`Ht16k33`] starts by running
//! [`initialize`](Ht16k33::initialize); halting is a no-op because the chip
//! has no power-down sequence worth running here.

use crate::driver::Ht16k33;
use crate::error::Error;
use crate::interface::Interface;

/// A named device with a start/halt lifecycle.
pub trait Device {
    /// Error returned by [`start`](Self::start) and [`halt`](Self::halt)
    type Error;

    /// Identity used by the host; has no effect on the bus.
    fn name(&self) -> &'static str;

    /// Rename the device.
    fn set_name(&mut self, name: &'static str);

    /// Bring the device to its ready state.
    ///
    /// # Errors
    ///
    /// Returns the first failure while starting.
    fn start(&mut self) -> Result<(), Self::Error>;

    /// Stop using the device.
    ///
    /// # Errors
    ///
    /// Implementations in this crate always succeed.
    fn halt(&mut self) -> Result<(), Self::Error>;
}

impl<I: Interface> Device for Ht16k33<I> {
    type Error = Error<I>;

    fn name(&self) -> &'static str {
        self.name
    }

    fn set_name(&mut self, name: &'static str) {
        self.name = name;
    }

    fn start(&mut self) -> Result<(), Self::Error> {
        self.initialize()
    }

    fn halt(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::vec;

    use super::*;
    use crate::driver::tests::Recorder;

    #[test]
    fn test_name_roundtrip() {
        let mut driver = Ht16k33::new(Recorder::default());
        assert_eq!(driver.name(), "HT16K33");

        driver.set_name("table");
        assert_eq!(driver.name(), "table");
        assert!(driver.release().writes.is_empty());
    }

    #[test]
    fn test_start_initializes() {
        let mut driver = Ht16k33::new(Recorder::default());
        driver.start().unwrap();
        assert_eq!(driver.release().writes, vec![vec![0x21], vec![0x81]]);
    }

    #[test]
    fn test_start_surfaces_failure() {
        let mut driver = Ht16k33::new(Recorder::failing_at(0));
        assert!(matches!(driver.start(), Err(Error::Interface(_))));
        assert!(driver.release().writes.is_empty());
    }

    #[test]
    fn test_halt_is_noop() {
        let mut driver = Ht16k33::new(Recorder::failing_at(0));
        driver.halt().unwrap();
        assert!(driver.release().writes.is_empty());
    }
}
