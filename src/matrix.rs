//! Pixel-addressed image of the 16x8 display RAM.
//!
//! The driver only ever takes whole 16-byte buffers. [`Matrix`] is where
//! individual LEDs get composed: it implements the `embedded-graphics`
//! [`DrawTarget`] so shapes and text can be drawn into it, and
//! [`Matrix::as_bytes`] hands the result to
//! [`Ht16k33::set_buffer`](crate::Ht16k33::set_buffer).
//!
//! # Wiring
//! The chip has 16 ROW outputs and 8 COM outputs. Display RAM holds two bytes
//! per COM line: the first byte covers ROW0-ROW7 (LSB is ROW0) and the second
//! covers ROW8-ROW15. `Matrix` treats ROW as the x axis and COM as the y axis,
//! so pixel `(x, y)` lives in byte `2 * y + x / 8`, bit `x % 8`.
//!
//! # Example
//! ```rust
//! use embedded_graphics::pixelcolor::BinaryColor;
//! use embedded_graphics::prelude::*;
//! use embedded_graphics::primitives::{Line, PrimitiveStyle};
//! use ht16k33_matrix::Matrix;
//!
//! let mut matrix = Matrix::new();
//! Line::new(Point::new(0, 0), Point::new(15, 0))
//!     .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
//!     .draw(&mut matrix)
//!     .unwrap();
//!
//! assert_eq!(&matrix.as_bytes()[..2], &[0xFF, 0xFF]);
//! ```

use core::convert::Infallible;

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::{DrawTarget, OriginDimensions, Point, Size};

use crate::{Buffer, BUFFER_LEN};

/// Number of ROW outputs (matrix width).
pub const WIDTH: usize = 16;
/// Number of COM outputs (matrix height).
pub const HEIGHT: usize = 8;

/// 16x8 monochrome image laid out like the chip's display RAM.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct Matrix {
    bytes: Buffer,
}

impl Matrix {
    /// All LEDs off.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            bytes: [0; BUFFER_LEN],
        }
    }

    /// Wrap an existing display RAM image.
    #[must_use]
    pub const fn from_bytes(bytes: Buffer) -> Self {
        Self { bytes }
    }

    /// The image in display RAM order.
    #[must_use]
    pub const fn as_bytes(&self) -> &Buffer {
        &self.bytes
    }

    /// Switch every LED off.
    pub fn erase(&mut self) {
        self.bytes = [0; BUFFER_LEN];
    }

    /// Set a pixel. Points outside the matrix are ignored.
    pub fn set_pixel(&mut self, p: Point, color: BinaryColor) {
        if p.x < 0 || p.y < 0 {
            return;
        }
        self.set_pixel_internal(p.x as usize, p.y as usize, color);
    }

    /// Read a pixel. Points outside the matrix read as off.
    #[must_use]
    pub fn pixel(&self, p: Point) -> BinaryColor {
        if p.x < 0 || p.y < 0 {
            return BinaryColor::Off;
        }
        let (x, y) = (p.x as usize, p.y as usize);
        if x >= WIDTH || y >= HEIGHT {
            return BinaryColor::Off;
        }
        let (index, bit) = Self::location(x, y);
        BinaryColor::from(self.bytes[index] & (1 << bit) != 0)
    }

    fn set_pixel_internal(&mut self, x: usize, y: usize, color: BinaryColor) {
        if x >= WIDTH || y >= HEIGHT {
            return;
        }
        let (index, bit) = Self::location(x, y);
        match color {
            BinaryColor::On => self.bytes[index] |= 1 << bit,
            BinaryColor::Off => self.bytes[index] &= !(1 << bit),
        }
    }

    const fn location(x: usize, y: usize) -> (usize, u8) {
        (y * 2 + x / 8, (x % 8) as u8)
    }
}

impl From<Buffer> for Matrix {
    fn from(bytes: Buffer) -> Self {
        Self::from_bytes(bytes)
    }
}

impl AsRef<[u8]> for Matrix {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl OriginDimensions for Matrix {
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}

impl DrawTarget for Matrix {
    type Color = BinaryColor;

    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = embedded_graphics::Pixel<Self::Color>>,
    {
        for pixel in pixels {
            self.set_pixel(pixel.0, pixel.1);
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        let fill = match color {
            BinaryColor::On => 0xFF,
            BinaryColor::Off => 0x00,
        };
        self.bytes = [fill; BUFFER_LEN];
        Ok(())
    }
}

impl core::fmt::Debug for Matrix {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Matrix")
            .field("width", &WIDTH)
            .field("height", &HEIGHT)
            .field("bytes", &self.bytes)
            .finish()
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Matrix {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Matrix<{}, {}> {=[u8]:x}", WIDTH, HEIGHT, &self.bytes[..]);
    }
}
