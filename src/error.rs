//! Error types for the driver
//!
//! Validation errors ([`Error::BufferLength`], [`Error::Brightness`]) are
//! detected before anything is written to the bus, so a rejected call never
//! leaves a partial transaction behind. Transport failures are handed back
//! untouched in [`Error::Interface`].

use crate::interface::Interface;
use crate::BUFFER_LEN;

/// Errors that can occur when talking to the controller
///
/// Generic over the interface type to preserve the specific error type.
#[derive(Debug)]
pub enum Error<I: Interface> {
    /// Bus write failed
    ///
    /// Wraps the error returned by the [`Interface`] implementation.
    Interface(I::Error),
    /// Display data must be exactly [`BUFFER_LEN`] bytes
    BufferLength {
        /// Required length in bytes
        expected: usize,
        /// Provided length in bytes
        actual: usize,
    },
    /// Duty cycle above [`MAX_BRIGHTNESS`](crate::command::MAX_BRIGHTNESS)
    Brightness(u8),
    /// The operation is not implemented by this driver (key scan)
    Unsupported,
}

impl<I: Interface> Error<I> {
    pub(crate) fn buffer_length(actual: usize) -> Self {
        Error::BufferLength {
            expected: BUFFER_LEN,
            actual,
        }
    }
}

impl<I: Interface> PartialEq for Error<I>
where
    I::Error: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Error::Interface(a), Error::Interface(b)) => a == b,
            (
                Error::BufferLength { expected, actual },
                Error::BufferLength {
                    expected: other_expected,
                    actual: other_actual,
                },
            ) => expected == other_expected && actual == other_actual,
            (Error::Brightness(a), Error::Brightness(b)) => a == b,
            (Error::Unsupported, Error::Unsupported) => true,
            _ => false,
        }
    }
}

impl<I: Interface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Interface(e) => write!(f, "Interface error: {e:?}"),
            Error::BufferLength { expected, actual } => {
                write!(f, "Display data must be {expected} bytes, got {actual}")
            }
            Error::Brightness(level) => write!(f, "Brightness {level} out of range 0..=15"),
            Error::Unsupported => write!(f, "Operation not supported"),
        }
    }
}

impl<I: Interface + core::fmt::Debug> core::error::Error for Error<I> {}

#[cfg(feature = "defmt")]
impl<I: Interface> defmt::Format for Error<I>
where
    I::Error: defmt::Format,
{
    fn format(&self, f: defmt::Formatter) {
        match self {
            Error::Interface(e) => defmt::write!(f, "Interface({})", e),
            Error::BufferLength { expected, actual } => {
                defmt::write!(f, "BufferLength(expected: {}, actual: {})", expected, actual);
            }
            Error::Brightness(level) => defmt::write!(f, "Brightness({})", level),
            Error::Unsupported => defmt::write!(f, "Unsupported"),
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::format;

    use super::*;

    #[derive(Debug)]
    struct Nack;

    impl Interface for Nack {
        type Error = &'static str;

        fn write_byte(&mut self, _byte: u8) -> Result<(), Self::Error> {
            Err("nack")
        }

        fn write(&mut self, _bytes: &[u8]) -> Result<(), Self::Error> {
            Err("nack")
        }
    }

    #[test]
    fn test_display_messages() {
        let err: Error<Nack> = Error::buffer_length(3);
        assert_eq!(format!("{err}"), "Display data must be 16 bytes, got 3");

        let err: Error<Nack> = Error::Brightness(16);
        assert_eq!(format!("{err}"), "Brightness 16 out of range 0..=15");

        let err: Error<Nack> = Error::Interface("nack");
        assert_eq!(format!("{err}"), "Interface error: \"nack\"");

        let err: Error<Nack> = Error::Unsupported;
        assert_eq!(format!("{err}"), "Operation not supported");
    }

    #[test]
    fn test_equality() {
        assert_eq!(Error::<Nack>::buffer_length(0), Error::buffer_length(0));
        assert_ne!(Error::<Nack>::buffer_length(0), Error::buffer_length(1));
        assert_ne!(Error::<Nack>::Brightness(16), Error::Unsupported);
        assert_eq!(Error::<Nack>::Interface("nack"), Error::Interface("nack"));
    }

    #[test]
    fn test_is_core_error() {
        fn assert_error<E: core::error::Error>(_: &E) {}
        assert_error(&Error::<Nack>::Unsupported);
    }
}
