//! Font collection loading and face selection.
//!
//! Provides `FaceCollection` (the ordered faces of one font file) and
//! `select_face()`, the first-match-wins coverage scan.

mod collection;

pub use collection::{FaceCollection, MAX_FACES};

/// Char-to-glyph-index probing, the one rasterizer query selection needs.
///
/// Implemented for `fontdue::Font`; tests substitute a table-backed fake.
pub trait CharMap {
    /// Glyph index for `ch` within this face. 0 means the face has no glyph.
    fn glyph_index(&self, ch: char) -> u16;
}

impl CharMap for fontdue::Font {
    fn glyph_index(&self, ch: char) -> u16 {
        self.lookup_glyph_index(ch)
    }
}

/// Find the first face that covers `ch`, in collection order.
///
/// Returns the face index and the glyph index within that face. First match
/// wins: no scoring, no default face. `None` means no face covers `ch`,
/// which callers treat as a hard failure.
pub fn select_face<F: CharMap>(faces: &[F], ch: char) -> Option<(usize, u16)> {
    for (i, face) in faces.iter().enumerate() {
        let glyph = face.glyph_index(ch);
        if glyph != 0 {
            return Some((i, glyph));
        }
    }
    None
}
