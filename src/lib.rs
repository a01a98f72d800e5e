//! Single-glyph renderer.
//!
//! Reads a JSON glyph spec, picks the first face in a font collection that
//! covers the requested character, rasterizes the glyph at the requested
//! pixel size, composites it onto a fixed-size canvas, and serializes the
//! canvas as a binary PGM image.

pub mod canvas;
pub mod compose;
pub mod error;
pub mod font;
pub mod pgm;
pub mod spec;

pub use canvas::Canvas;
pub use error::Error;
pub use font::FaceCollection;
pub use spec::GlyphSpec;
