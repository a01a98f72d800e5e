//! Binary PGM (P5) serialization of the canvas.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::canvas::Canvas;

/// Maximum sample value declared in the header.
const MAX_VALUE: u32 = 255;

/// Serialize `canvas` as binary PGM.
///
/// The header is four ASCII lines — `P5`, width, height, 255 — followed by
/// exactly `width * height` raw samples, top-to-bottom, left-to-right, no
/// padding. Write failures propagate immediately; nothing cleans up a
/// partially written destination.
pub fn write<W: Write>(canvas: &Canvas, out: &mut W) -> io::Result<()> {
    write!(
        out,
        "P5\n{}\n{}\n{MAX_VALUE}\n",
        canvas.width(),
        canvas.height()
    )?;
    out.write_all(canvas.pixels())?;
    out.flush()
}

/// Write the canvas to the file at `path`, creating or truncating it.
pub fn write_to_file(canvas: &Canvas, path: &Path) -> io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    write(canvas, &mut out)
}

/// Write the canvas to standard output.
pub fn write_to_stdout(canvas: &Canvas) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write(canvas, &mut out)
}
