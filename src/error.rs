//! Error taxonomy for the render pipeline.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::canvas::MAX_CANVAS_DIM;
use crate::font::MAX_FACES;
use crate::spec::{MAX_PATH_LEN, MAX_SPEC_LEN};

/// Any failure in the single-shot pipeline.
///
/// Every variant is terminal: there is no retry, no partial result, and no
/// fallback substitution anywhere in the pipeline.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read glyph spec {path:?}: {source}")]
    SpecRead { path: PathBuf, source: io::Error },

    #[error("glyph spec {path:?} exceeds {MAX_SPEC_LEN} bytes")]
    SpecTooLarge { path: PathBuf },

    #[error("malformed glyph spec: {0}")]
    SpecParse(#[from] serde_json::Error),

    #[error("font-path must be non-empty and at most {MAX_PATH_LEN} bytes")]
    BadFontPath,

    #[error("char-id {0:#x} is not a Unicode scalar value")]
    BadCharId(u32),

    #[error("{0} must be greater than zero")]
    ZeroField(&'static str),

    #[error("failed to read font file {path:?}: {source}")]
    FontRead { path: PathBuf, source: io::Error },

    #[error("font collection has {count} faces, more than the {MAX_FACES} supported")]
    TooManyFaces { count: u32 },

    #[error("failed to parse face {index}: {reason}")]
    FaceParse { index: u32, reason: &'static str },

    #[error("no face in the collection has a glyph for {ch:?}")]
    GlyphNotFound { ch: char },

    #[error("canvas {width}x{height} exceeds the {MAX_CANVAS_DIM}x{MAX_CANVAS_DIM} maximum")]
    CanvasTooLarge { width: u32, height: u32 },

    #[error("glyph sample at ({x}, {y}) falls outside the {width}x{height} canvas")]
    OutOfBounds {
        x: i64,
        y: i64,
        width: u32,
        height: u32,
    },

    #[error("failed to write image: {0}")]
    Write(#[from] io::Error),
}
