use crate::error::{ExtractError, Result};
use crate::tokens::BoundingBox;

/// A decoded RGBA8 raster: row-major, origin top-left, 4 bytes per pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Wrap interleaved RGBA bytes. Fails when the length is not
    /// `width * height * 4` or the raster has no pixels.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(ExtractError::Render(format!(
                "image has no pixels ({width}x{height})"
            )));
        }
        let expected = width as usize * height as usize * 4;
        if data.len() != expected {
            return Err(ExtractError::Render(format!(
                "pixel data has {} bytes, expected {expected} for {width}x{height}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Build a raster from opaque RGB pixels given row by row.
    pub fn from_rgb(width: u32, height: u32, pixels: &[[u8; 3]]) -> Result<Self> {
        let data = pixels
            .iter()
            .flat_map(|&[r, g, b]| [r, g, b, 255])
            .collect();
        Self::new(width, height, data)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// RGBA of the pixel at `(x, y)`. Coordinates must be in bounds.
    pub fn rgba(&self, x: u32, y: u32) -> [u8; 4] {
        let i = (y as usize * self.width as usize + x as usize) * 4;
        [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]
    }

    /// Copy out the part of `bbox` that lies inside the raster.
    /// Returns `None` when the intersection is empty.
    pub fn crop(&self, bbox: &BoundingBox) -> Option<PixelBuffer> {
        let x0 = bbox.x.min(self.width);
        let y0 = bbox.y.min(self.height);
        let x1 = bbox.x.saturating_add(bbox.width).min(self.width);
        let y1 = bbox.y.saturating_add(bbox.height).min(self.height);
        if x1 <= x0 || y1 <= y0 {
            return None;
        }

        let row_bytes = (x1 - x0) as usize * 4;
        let mut data = Vec::with_capacity(row_bytes * (y1 - y0) as usize);
        for y in y0..y1 {
            let start = (y as usize * self.width as usize + x0 as usize) * 4;
            data.extend_from_slice(&self.data[start..start + row_bytes]);
        }
        Some(PixelBuffer {
            width: x1 - x0,
            height: y1 - y0,
            data,
        })
    }
}

impl TryFrom<image::RgbaImage> for PixelBuffer {
    type Error = ExtractError;

    fn try_from(img: image::RgbaImage) -> Result<Self> {
        let (width, height) = img.dimensions();
        Self::new(width, height, img.into_raw())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient(width: u32, height: u32) -> PixelBuffer {
        let pixels: Vec<[u8; 3]> = (0..height)
            .flat_map(|y| (0..width).map(move |x| [x as u8, y as u8, 0]))
            .collect();
        PixelBuffer::from_rgb(width, height, &pixels).unwrap()
    }

    #[test]
    fn rejects_length_mismatch() {
        let err = PixelBuffer::new(2, 2, vec![0; 15]).unwrap_err();
        assert!(matches!(err, ExtractError::Render(_)));
    }

    #[test]
    fn rejects_empty_raster() {
        assert!(PixelBuffer::new(0, 10, Vec::new()).is_err());
    }

    #[test]
    fn rgba_reads_row_major() {
        let buf = gradient(4, 3);
        assert_eq!(buf.rgba(3, 2), [3, 2, 0, 255]);
        assert_eq!(buf.pixel_count(), 12);
    }

    #[test]
    fn crop_inside() {
        let buf = gradient(10, 10);
        let sub = buf
            .crop(&BoundingBox {
                x: 2,
                y: 3,
                width: 4,
                height: 2,
            })
            .unwrap();
        assert_eq!((sub.width(), sub.height()), (4, 2));
        assert_eq!(sub.rgba(0, 0), [2, 3, 0, 255]);
        assert_eq!(sub.rgba(3, 1), [5, 4, 0, 255]);
    }

    #[test]
    fn crop_clamps_to_bounds() {
        let buf = gradient(10, 10);
        let sub = buf
            .crop(&BoundingBox {
                x: 8,
                y: 8,
                width: 50,
                height: 50,
            })
            .unwrap();
        assert_eq!((sub.width(), sub.height()), (2, 2));
    }

    #[test]
    fn crop_outside_is_none() {
        let buf = gradient(10, 10);
        let outside = BoundingBox {
            x: 20,
            y: 0,
            width: 5,
            height: 5,
        };
        assert!(buf.crop(&outside).is_none());
    }

    #[test]
    fn from_rgba_image() {
        let img = image::RgbaImage::from_pixel(3, 2, image::Rgba([1, 2, 3, 4]));
        let buf = PixelBuffer::try_from(img).unwrap();
        assert_eq!(buf.rgba(2, 1), [1, 2, 3, 4]);
    }
}
