//! Glyph placement and compositing onto the canvas.
//!
//! The rasterizer reports glyph bearings in a y-up coordinate system while
//! the canvas is top-left-origin, so placement computes the bitmap's edges
//! in y-up canvas units and the copy loop flips rows. The whole glyph must
//! land inside the canvas: one out-of-bounds sample (negative included)
//! aborts the render instead of clipping.

use crate::canvas::Canvas;
use crate::error::Error;
use crate::font::FaceCollection;
use crate::spec::GlyphSpec;

/// One rasterized glyph bitmap, placed in canvas coordinates.
///
/// `pitch` is the row stride in bytes and may exceed `width` when the source
/// buffer carries alignment padding. The buffer is row-major with row 0 at
/// the glyph's top.
pub struct RenderedGlyph {
    pub width: usize,
    pub height: usize,
    pub pitch: usize,
    pub buffer: Vec<u8>,
    /// Left edge of the bitmap, in canvas pixels from x = 0.
    pub left: i64,
    /// Top edge of the bitmap, in pixels above the canvas bottom (y-up).
    pub top: i64,
}

/// Select a face for the spec's character, rasterize the glyph, and
/// composite it onto a fresh canvas.
///
/// Fails if no face covers the character or if any sample would fall
/// outside the canvas; a partial canvas never escapes.
pub fn render(collection: &FaceCollection, spec: &GlyphSpec) -> Result<Canvas, Error> {
    let ch = spec.character()?;
    let (face_index, glyph_index) = collection.select(ch).ok_or(Error::GlyphNotFound { ch })?;
    log::debug!("face {face_index} maps {ch:?} to glyph {glyph_index}");

    let glyph = rasterize(collection.face(face_index), glyph_index, spec);
    let mut canvas = Canvas::new(spec.width, spec.height)?;
    draw(&glyph, &mut canvas)?;
    Ok(canvas)
}

/// Rasterize `glyph_index` at the spec's pixel size and place the bitmap
/// relative to the spec's origin.
fn rasterize(face: &fontdue::Font, glyph_index: u16, spec: &GlyphSpec) -> RenderedGlyph {
    let (metrics, buffer) = face.rasterize_indexed(glyph_index, spec.pixel_size as f32);
    let (left, top) = placement(spec, metrics.xmin, metrics.ymin, metrics.height);
    log::debug!(
        "rasterized {}x{} bitmap, bearings ({}, {}), placed at left {left}, top {top}",
        metrics.width,
        metrics.height,
        metrics.xmin,
        metrics.ymin,
    );
    RenderedGlyph {
        width: metrics.width,
        height: metrics.height,
        pitch: metrics.width,
        buffer,
        left,
        top,
    }
}

/// Bitmap edges in canvas units for a glyph with bearings (`xmin`, `ymin`)
/// and `rows` rows, rendered at the spec's origin.
///
/// The origin sits `origin_y` rows below the canvas top; `ymin + rows` is
/// the bitmap's top edge above the baseline.
fn placement(spec: &GlyphSpec, xmin: i32, ymin: i32, rows: usize) -> (i64, i64) {
    let left = spec.origin_x as i64 + xmin as i64;
    let top = (spec.height as i64 - spec.origin_y as i64) + ymin as i64 + rows as i64;
    (left, top)
}

/// Copy the glyph's coverage bytes onto the canvas.
fn draw(glyph: &RenderedGlyph, canvas: &mut Canvas) -> Result<(), Error> {
    let width = canvas.width() as i64;
    let height = canvas.height() as i64;
    let top_row = height - glyph.top;

    for y in 0..glyph.height {
        for x in 0..glyph.width {
            let value = glyph.buffer[y * glyph.pitch + x];
            let dst_x = glyph.left + x as i64;
            let dst_y = top_row + y as i64;
            if dst_x < 0 || dst_y < 0 || dst_x >= width || dst_y >= height {
                return Err(Error::OutOfBounds {
                    x: dst_x,
                    y: dst_y,
                    width: canvas.width(),
                    height: canvas.height(),
                });
            }
            canvas.put(dst_x as u32, dst_y as u32, value);
        }
    }
    Ok(())
}
