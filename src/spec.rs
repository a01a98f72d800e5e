//! Glyph spec parsing and validation.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::Error;

/// Upper bound on the spec file size in bytes.
pub const MAX_SPEC_LEN: u64 = 512;
/// Upper bound on the `font-path` value in bytes.
pub const MAX_PATH_LEN: usize = 255;

/// A validated single-glyph render request.
///
/// All seven fields are required in the source JSON and unknown keys are
/// rejected, so a spec either fully describes a render or fails before any
/// font work begins. `origin_x`/`origin_y` position the glyph origin on the
/// canvas and may be negative.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct GlyphSpec {
    pub font_path: PathBuf,
    pub char_id: u32,
    pub pixel_size: u32,
    pub width: u32,
    pub height: u32,
    pub origin_x: i32,
    pub origin_y: i32,
}

impl GlyphSpec {
    /// Read and parse the spec file at `path`.
    ///
    /// The read itself stops at `MAX_SPEC_LEN + 1` bytes, so a file over
    /// the bound is rejected no matter what its metadata claimed.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let file = File::open(path).map_err(|source| Error::SpecRead {
            path: path.to_owned(),
            source,
        })?;
        let mut bytes = Vec::new();
        file.take(MAX_SPEC_LEN + 1)
            .read_to_end(&mut bytes)
            .map_err(|source| Error::SpecRead {
                path: path.to_owned(),
                source,
            })?;
        if bytes.len() as u64 > MAX_SPEC_LEN {
            return Err(Error::SpecTooLarge {
                path: path.to_owned(),
            });
        }
        Self::from_json(&bytes)
    }

    /// Parse a spec from raw JSON bytes and validate field ranges.
    pub fn from_json(bytes: &[u8]) -> Result<Self, Error> {
        let spec: Self = serde_json::from_slice(bytes)?;
        spec.validate()?;
        Ok(spec)
    }

    /// The character to render.
    pub fn character(&self) -> Result<char, Error> {
        char::from_u32(self.char_id).ok_or(Error::BadCharId(self.char_id))
    }

    fn validate(&self) -> Result<(), Error> {
        let path_len = self.font_path.as_os_str().len();
        if path_len == 0 || path_len > MAX_PATH_LEN {
            return Err(Error::BadFontPath);
        }
        self.character()?;
        if self.pixel_size == 0 {
            return Err(Error::ZeroField("pixel-size"));
        }
        if self.width == 0 {
            return Err(Error::ZeroField("width"));
        }
        if self.height == 0 {
            return Err(Error::ZeroField("height"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_SPEC: &str = r#"{
        "font-path": "F.ttc",
        "char-id": 38,
        "pixel-size": 18,
        "width": 32,
        "height": 32,
        "origin-x": 4,
        "origin-y": 4
    }"#;

    #[test]
    fn parses_complete_spec() {
        let spec = GlyphSpec::from_json(FULL_SPEC.as_bytes()).expect("parse");
        assert_eq!(spec.font_path, PathBuf::from("F.ttc"));
        assert_eq!(spec.char_id, 38);
        assert_eq!(spec.pixel_size, 18);
        assert_eq!(spec.width, 32);
        assert_eq!(spec.height, 32);
        assert_eq!(spec.origin_x, 4);
        assert_eq!(spec.origin_y, 4);
    }

    #[test]
    fn missing_key_is_rejected() {
        let json = r#"{"font-path": "F.ttc", "char-id": 38}"#;
        let result = GlyphSpec::from_json(json.as_bytes());
        assert!(matches!(result, Err(Error::SpecParse(_))));
    }

    #[test]
    fn unknown_key_is_rejected() {
        let json = r#"{
            "font-path": "F.ttc",
            "char-id": 38,
            "pixel-size": 18,
            "width": 32,
            "height": 32,
            "origin-x": 4,
            "origin-y": 4,
            "dpi": 300
        }"#;
        let result = GlyphSpec::from_json(json.as_bytes());
        assert!(matches!(result, Err(Error::SpecParse(_))));
    }

    #[test]
    fn mistyped_value_is_rejected() {
        let json = FULL_SPEC.replace("38", "\"&\"");
        let result = GlyphSpec::from_json(json.as_bytes());
        assert!(matches!(result, Err(Error::SpecParse(_))));
    }

    #[test]
    fn float_for_integer_is_rejected() {
        let json = FULL_SPEC.replace("\"pixel-size\": 18", "\"pixel-size\": 18.5");
        let result = GlyphSpec::from_json(json.as_bytes());
        assert!(matches!(result, Err(Error::SpecParse(_))));
    }

    #[test]
    fn negative_origin_is_allowed() {
        let json = FULL_SPEC.replace("\"origin-x\": 4", "\"origin-x\": -3");
        let spec = GlyphSpec::from_json(json.as_bytes()).expect("parse");
        assert_eq!(spec.origin_x, -3);
    }

    #[test]
    fn negative_char_id_is_rejected() {
        let json = FULL_SPEC.replace("\"char-id\": 38", "\"char-id\": -1");
        let result = GlyphSpec::from_json(json.as_bytes());
        assert!(matches!(result, Err(Error::SpecParse(_))));
    }

    #[test]
    fn surrogate_char_id_is_rejected() {
        let json = FULL_SPEC.replace("\"char-id\": 38", "\"char-id\": 55296");
        let result = GlyphSpec::from_json(json.as_bytes());
        assert!(matches!(result, Err(Error::BadCharId(0xD800))));
    }

    #[test]
    fn zero_pixel_size_is_rejected() {
        let json = FULL_SPEC.replace("\"pixel-size\": 18", "\"pixel-size\": 0");
        let result = GlyphSpec::from_json(json.as_bytes());
        assert!(matches!(result, Err(Error::ZeroField("pixel-size"))));
    }

    #[test]
    fn zero_canvas_dimension_is_rejected() {
        let json = FULL_SPEC.replace("\"height\": 32", "\"height\": 0");
        let result = GlyphSpec::from_json(json.as_bytes());
        assert!(matches!(result, Err(Error::ZeroField("height"))));
    }

    #[test]
    fn overlong_font_path_is_rejected() {
        let long = "a".repeat(MAX_PATH_LEN + 1);
        let json = FULL_SPEC.replace("F.ttc", &long);
        let result = GlyphSpec::from_json(json.as_bytes());
        assert!(matches!(result, Err(Error::BadFontPath)));
    }

    #[test]
    fn empty_font_path_is_rejected() {
        let json = FULL_SPEC.replace("F.ttc", "");
        let result = GlyphSpec::from_json(json.as_bytes());
        assert!(matches!(result, Err(Error::BadFontPath)));
    }

    #[test]
    fn character_decodes_char_id() {
        let spec = GlyphSpec::from_json(FULL_SPEC.as_bytes()).expect("parse");
        assert_eq!(spec.character().expect("scalar"), '&');
    }

    #[test]
    fn load_reads_spec_file() {
        let path = std::env::temp_dir().join(format!("draw_glyph_spec_{}.json", std::process::id()));
        std::fs::write(&path, FULL_SPEC).expect("write fixture");
        let result = GlyphSpec::load(&path);
        std::fs::remove_file(&path).ok();
        let spec = result.expect("load");
        assert_eq!(spec.char_id, 38);
    }

    #[test]
    fn load_rejects_file_over_size_bound() {
        let path =
            std::env::temp_dir().join(format!("draw_glyph_spec_big_{}.json", std::process::id()));
        std::fs::write(&path, vec![b' '; MAX_SPEC_LEN as usize + 1]).expect("write fixture");
        let result = GlyphSpec::load(&path);
        std::fs::remove_file(&path).ok();
        assert!(matches!(result, Err(Error::SpecTooLarge { .. })));
    }

    #[test]
    fn load_reports_missing_file() {
        let path = std::env::temp_dir().join("draw_glyph_spec_missing.json");
        let result = GlyphSpec::load(&path);
        assert!(matches!(result, Err(Error::SpecRead { .. })));
    }
}
