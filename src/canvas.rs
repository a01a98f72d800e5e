//! The grayscale canvas the glyph is composited onto.

use crate::error::Error;

/// Maximum canvas dimension on either axis.
pub const MAX_CANVAS_DIM: u32 = 256;

/// A `width × height` grid of 8-bit coverage values.
///
/// Row-major with the top row first. Every cell starts at zero (black) and
/// only [`Self::put`] writes cells, so anything the glyph copy does not
/// touch stays black in the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Canvas {
    /// Allocate a zeroed canvas.
    ///
    /// Dimensions over `MAX_CANVAS_DIM` are a defined error rather than a
    /// silent truncation.
    pub fn new(width: u32, height: u32) -> Result<Self, Error> {
        if width > MAX_CANVAS_DIM || height > MAX_CANVAS_DIM {
            return Err(Error::CanvasTooLarge { width, height });
        }
        Ok(Self {
            width,
            height,
            pixels: vec![0; (width * height) as usize],
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw samples, row-major, top-to-bottom.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Write one sample.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` lies outside the canvas; callers bounds-check
    /// before writing.
    pub fn put(&mut self, x: u32, y: u32, value: u8) {
        assert!(x < self.width && y < self.height);
        self.pixels[(y * self.width + x) as usize] = value;
    }

    /// Read one sample.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` lies outside the canvas.
    pub fn get(&self, x: u32, y: u32) -> u8 {
        assert!(x < self.width && y < self.height);
        self.pixels[(y * self.width + x) as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_canvas_is_all_zero() {
        let canvas = Canvas::new(5, 3).expect("allocate");
        assert_eq!(canvas.width(), 5);
        assert_eq!(canvas.height(), 3);
        assert_eq!(canvas.pixels().len(), 15);
        assert!(canvas.pixels().iter().all(|&p| p == 0));
    }

    #[test]
    fn put_writes_row_major() {
        let mut canvas = Canvas::new(4, 2).expect("allocate");
        canvas.put(2, 1, 200);
        assert_eq!(canvas.get(2, 1), 200);
        assert_eq!(canvas.pixels()[6], 200);
    }

    #[test]
    fn maximum_dimensions_are_accepted() {
        let canvas = Canvas::new(MAX_CANVAS_DIM, MAX_CANVAS_DIM).expect("allocate");
        assert_eq!(canvas.pixels().len(), (MAX_CANVAS_DIM * MAX_CANVAS_DIM) as usize);
    }

    #[test]
    fn oversize_canvas_is_rejected() {
        let result = Canvas::new(MAX_CANVAS_DIM + 1, 10);
        assert!(matches!(
            result,
            Err(Error::CanvasTooLarge { width: 257, height: 10 })
        ));
    }

    #[test]
    #[should_panic(expected = "x < self.width")]
    fn put_outside_canvas_panics() {
        let mut canvas = Canvas::new(2, 2).expect("allocate");
        canvas.put(2, 0, 1);
    }
}
