//! Texture loading: decodes image files into upload-ready RGBA8 pixels and
//! keeps them in a table addressed by name or `TextureId`.
//!
//! The renderer consumes textures by handle, never by raw file paths.

use cottage_common::TextureId;
use std::path::{Path, PathBuf};

/// Errors from texture loading. All of them are fatal at startup.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("texture file not found: {}", .0.display())]
    Missing(PathBuf),
    #[error("failed to decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("{} has {channels} channels; only 3 (RGB) and 4 (RGBA) are supported", .path.display())]
    UnsupportedChannels { path: PathBuf, channels: u8 },
    #[error("unknown texture '{0}'")]
    UnknownTexture(String),
}

/// Decoded texture ready for GPU upload.
#[derive(Debug, Clone)]
pub struct TextureData {
    pub width: u32,
    pub height: u32,
    /// Channel count of the source image (3 or 4).
    pub channels: u8,
    /// RGBA8 pixels, bottom row first.
    pub pixels: Vec<u8>,
}

impl TextureData {
    /// Load an image file.
    ///
    /// Rows are flipped so the first row is the bottom of the picture,
    /// matching mesh texture coordinates with v = 0 at the bottom edge.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, AssetError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(AssetError::Missing(path.to_path_buf()));
        }
        let img = image::open(path).map_err(|source| AssetError::Decode {
            path: path.to_path_buf(),
            source,
        })?;

        let channels = img.color().channel_count();
        if channels != 3 && channels != 4 {
            return Err(AssetError::UnsupportedChannels {
                path: path.to_path_buf(),
                channels,
            });
        }

        let rgba = img.flipv().to_rgba8();
        let (width, height) = rgba.dimensions();
        tracing::debug!(
            "loaded texture {} ({width}x{height}, {channels} channels)",
            path.display()
        );

        Ok(Self {
            width,
            height,
            channels,
            pixels: rgba.into_raw(),
        })
    }

    /// Solid-color texture, mostly for tests and placeholders.
    pub fn solid(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let pixels = rgba
            .iter()
            .copied()
            .cycle()
            .take((width * height * 4) as usize)
            .collect();
        Self {
            width,
            height,
            channels: 4,
            pixels,
        }
    }

    /// Bytes per row of the RGBA8 pixel data.
    pub fn bytes_per_row(&self) -> u32 {
        self.width * 4
    }
}

/// Application-wide texture table. Ids follow load order.
#[derive(Debug, Clone, Default)]
pub struct TextureTable {
    entries: Vec<(String, TextureData)>,
}

impl TextureTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every `(name, file)` pair from `dir`, in order. Stops at the
    /// first failure.
    pub fn load_all<'a>(
        dir: impl AsRef<Path>,
        sources: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Result<Self, AssetError> {
        let dir = dir.as_ref();
        let mut table = Self::new();
        for (name, file) in sources {
            let data = TextureData::load(dir.join(file))?;
            table.insert(name, data);
        }
        tracing::info!("loaded {} textures from {}", table.len(), dir.display());
        Ok(table)
    }

    /// Add a texture and return its id.
    pub fn insert(&mut self, name: impl Into<String>, data: TextureData) -> TextureId {
        let id = TextureId(self.entries.len() as u32);
        self.entries.push((name.into(), data));
        id
    }

    pub fn get(&self, id: TextureId) -> Option<&TextureData> {
        self.entries.get(id.index()).map(|(_, data)| data)
    }

    pub fn id_of(&self, name: &str) -> Result<TextureId, AssetError> {
        self.entries
            .iter()
            .position(|(n, _)| n == name)
            .map(|i| TextureId(i as u32))
            .ok_or_else(|| AssetError::UnknownTexture(name.to_string()))
    }

    /// Textures in id order.
    pub fn iter(&self) -> impl Iterator<Item = (TextureId, &str, &TextureData)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, (name, data))| (TextureId(i as u32), name.as_str(), data))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub fn crate_info() -> &'static str {
    "cottage-assets v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma, Rgb, RgbImage, Rgba, RgbaImage};

    #[test]
    fn rgb_texture_expands_to_rgba() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wall.png");
        RgbImage::from_pixel(4, 2, Rgb([10, 20, 30])).save(&path).unwrap();

        let tex = TextureData::load(&path).unwrap();
        assert_eq!((tex.width, tex.height, tex.channels), (4, 2, 3));
        assert_eq!(tex.pixels.len(), 4 * 2 * 4);
        assert_eq!(&tex.pixels[..4], &[10, 20, 30, 255]);
        assert_eq!(tex.bytes_per_row(), 16);
    }

    #[test]
    fn rows_are_flipped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stripes.png");
        let mut img = RgbaImage::new(1, 2);
        img.put_pixel(0, 0, Rgba([255, 0, 0, 255])); // top
        img.put_pixel(0, 1, Rgba([0, 0, 255, 255])); // bottom
        img.save(&path).unwrap();

        let tex = TextureData::load(&path).unwrap();
        assert_eq!(tex.channels, 4);
        assert_eq!(&tex.pixels[..4], &[0, 0, 255, 255]);
        assert_eq!(&tex.pixels[4..], &[255, 0, 0, 255]);
    }

    #[test]
    fn grayscale_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gray.png");
        GrayImage::from_pixel(2, 2, Luma([128])).save(&path).unwrap();

        let err = TextureData::load(&path).unwrap_err();
        assert!(matches!(
            err,
            AssetError::UnsupportedChannels { channels: 1, .. }
        ));
    }

    #[test]
    fn missing_file_is_reported() {
        let err = TextureData::load("/nonexistent/rockyGround.jpg").unwrap_err();
        assert!(matches!(err, AssetError::Missing(_)));
        assert!(err.to_string().contains("rockyGround.jpg"));
    }

    #[test]
    fn garbage_file_fails_to_decode() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"not an image").unwrap();
        assert!(matches!(
            TextureData::load(&path),
            Err(AssetError::Decode { .. })
        ));
    }

    #[test]
    fn load_all_keeps_order_and_names() {
        let dir = tempfile::tempdir().unwrap();
        for file in ["a.png", "b.png"] {
            RgbImage::new(1, 1).save(dir.path().join(file)).unwrap();
        }

        let table = TextureTable::load_all(dir.path(), [("first", "a.png"), ("second", "b.png")])
            .unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.id_of("first").unwrap(), TextureId(0));
        assert_eq!(table.id_of("second").unwrap(), TextureId(1));
        assert!(table.id_of("third").is_err());
        let names: Vec<_> = table.iter().map(|(_, name, _)| name).collect();
        assert_eq!(names, ["first", "second"]);
    }

    #[test]
    fn load_all_stops_at_first_missing() {
        let dir = tempfile::tempdir().unwrap();
        RgbImage::new(1, 1).save(dir.path().join("a.png")).unwrap();

        let err = TextureTable::load_all(dir.path(), [("a", "a.png"), ("b", "missing.png")])
            .unwrap_err();
        assert!(err.to_string().contains("missing.png"));
    }

    #[test]
    fn solid_texture() {
        let tex = TextureData::solid(2, 2, [1, 2, 3, 4]);
        assert_eq!(tex.pixels.len(), 16);
        assert_eq!(&tex.pixels[12..], &[1, 2, 3, 4]);
        let mut table = TextureTable::new();
        let id = table.insert("placeholder", tex);
        assert_eq!(table.get(id).map(|t| t.width), Some(2));
        assert!(table.get(TextureId(5)).is_none());
    }
}
