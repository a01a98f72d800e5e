//! Face collection — owns every parsed face of one font file.

use std::fs;
use std::path::Path;

use crate::error::Error;
use crate::font::select_face;

/// Maximum number of faces read from one collection file.
pub const MAX_FACES: u32 = 32;

/// The ordered faces of a single font file.
///
/// Order is the file's internal face-index order and determines selection
/// priority. Each face owns its parsed data; everything is released when the
/// collection is dropped.
pub struct FaceCollection {
    faces: Vec<fontdue::Font>,
}

impl FaceCollection {
    /// Load every face in the file at `path`.
    ///
    /// The face count comes from the collection header; a plain
    /// (non-collection) font file yields one face. Collections with more
    /// than `MAX_FACES` faces are rejected, as is any face that fails to
    /// parse.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let data = fs::read(path).map_err(|source| Error::FontRead {
            path: path.to_owned(),
            source,
        })?;

        let count = ttf_parser::fonts_in_collection(&data).unwrap_or(1);
        if count > MAX_FACES {
            return Err(Error::TooManyFaces { count });
        }

        let mut faces = Vec::with_capacity(count as usize);
        for index in 0..count {
            let settings = fontdue::FontSettings {
                collection_index: index,
                ..fontdue::FontSettings::default()
            };
            let face = fontdue::Font::from_bytes(data.as_slice(), settings)
                .map_err(|reason| Error::FaceParse { index, reason })?;
            faces.push(face);
        }

        let collection = Self { faces };
        log::debug!("loaded {} face(s) from {}", collection.len(), path.display());
        Ok(collection)
    }

    /// Number of faces in the collection.
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// First face covering `ch`, as (face index, glyph index).
    pub fn select(&self, ch: char) -> Option<(usize, u16)> {
        select_face(&self.faces, ch)
    }

    /// Face by index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range; indices come from [`Self::select`].
    pub fn face(&self, index: usize) -> &fontdue::Font {
        &self.faces[index]
    }
}
