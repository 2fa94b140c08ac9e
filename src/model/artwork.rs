use image::RgbaImage;

use crate::error::RenderError;

/// Raw encoded artwork bytes (PNG, JPEG or BMP), decoded on demand.
///
/// The bytes come from whatever storage layer owns the card data; the
/// renderer only needs to turn them into an RGBA bitmap.
#[derive(Debug, Clone)]
pub struct Artwork {
    bytes: Vec<u8>,
}

impl Artwork {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Decode the stored bytes into an RGBA bitmap.
    pub fn decode(&self) -> Result<RgbaImage, RenderError> {
        image::load_from_memory(&self.bytes)
            .map(|img| img.to_rgba8())
            .map_err(|e| RenderError::ArtworkDecode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_rejects_garbage() {
        let artwork = Artwork::new(vec![0, 1, 2, 3]);
        assert!(matches!(
            artwork.decode(),
            Err(RenderError::ArtworkDecode(_))
        ));
    }

    #[test]
    fn test_decode_roundtrip() {
        let img = RgbaImage::from_pixel(4, 3, image::Rgba([10, 20, 30, 255]));
        let mut bytes = std::io::Cursor::new(Vec::new());
        img.write_to(&mut bytes, image::ImageFormat::Png)
            .expect("encode failed");

        let artwork = Artwork::new(bytes.into_inner());
        let decoded = artwork.decode().expect("decode failed");
        assert_eq!(decoded.dimensions(), (4, 3));
        assert_eq!(decoded.get_pixel(0, 0), &image::Rgba([10, 20, 30, 255]));
    }
}
