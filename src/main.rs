use std::path::Path;
use std::process::ExitCode;

use draw_glyph::{Error, FaceCollection, GlyphSpec, compose, pgm};

const USAGE: &str = "usage: draw-glyph GLYPHSPEC [OUTFILE]";

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.iter().any(|a| a == "--version" || a == "-V") {
        println!("draw-glyph {}", env!("CARGO_PKG_VERSION"));
        return ExitCode::SUCCESS;
    }

    if args.iter().any(|a| a == "--help" || a == "-h") {
        println!("draw-glyph {}", env!("CARGO_PKG_VERSION"));
        println!("Renders a single glyph from a font collection to a PGM image\n");
        println!("{USAGE}\n");
        println!("GLYPHSPEC is a JSON file naming the font, character, pixel size,");
        println!("canvas dimensions, and glyph origin. Without OUTFILE the image is");
        println!("written to standard output.");
        return ExitCode::SUCCESS;
    }

    let Some(spec_path) = args.first() else {
        eprintln!("{USAGE}");
        return ExitCode::FAILURE;
    };

    match run(Path::new(spec_path), args.get(1).map(Path::new)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("draw-glyph: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(spec_path: &Path, out_path: Option<&Path>) -> Result<(), Error> {
    let spec = GlyphSpec::load(spec_path)?;
    let collection = FaceCollection::load(&spec.font_path)?;
    let canvas = compose::render(&collection, &spec)?;

    match out_path {
        Some(path) => pgm::write_to_file(&canvas, path)?,
        None => pgm::write_to_stdout(&canvas)?,
    }
    Ok(())
}
