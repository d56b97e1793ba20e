//! A 2D debug image represented as a flat array of RGBA pixels.

use hashbrown::HashSet;

/// Row-major RGBA image, one pixel per tile.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DebugImage {
    pub width: u32,
    pub height: u32,
    /// Length = `width * height * 4`.
    pub pixels: Vec<u8>,
}

impl DebugImage {
    /// Create a transparent black image.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize * 4],
        }
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 4
    }

    /// Set a single pixel's RGBA value.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    pub fn set_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        let idx = self.offset(x, y);
        self.pixels[idx..idx + 4].copy_from_slice(&rgba);
    }

    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    pub fn get_pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let idx = self.offset(x, y);
        [
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ]
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Count the distinct colors (ignoring alpha).
    pub fn unique_color_count(&self) -> usize {
        self.pixels
            .chunks_exact(4)
            .map(|c| (c[0], c[1], c[2]))
            .collect::<HashSet<_>>()
            .len()
    }

    /// Consume the image, returning its raw RGBA buffer.
    pub fn into_raw(self) -> Vec<u8> {
        self.pixels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_image_correct_dimensions() {
        let image = DebugImage::new(257, 128);
        assert_eq!(image.dimensions(), (257, 128));
        assert_eq!(image.pixels.len(), 257 * 128 * 4);
    }

    #[test]
    fn test_set_pixel_layout() {
        let mut image = DebugImage::new(10, 10);
        image.set_pixel(3, 5, [255, 128, 64, 255]);

        let idx = (5 * 10 + 3) * 4;
        assert_eq!(&image.pixels[idx..idx + 4], &[255, 128, 64, 255]);
        assert_eq!(image.get_pixel(3, 5), [255, 128, 64, 255]);
    }

    #[test]
    fn test_unique_color_count() {
        let mut image = DebugImage::new(4, 1);
        image.set_pixel(0, 0, [255, 0, 0, 255]);
        image.set_pixel(1, 0, [0, 255, 0, 255]);
        image.set_pixel(2, 0, [255, 0, 0, 10]);
        image.set_pixel(3, 0, [0, 0, 255, 255]);
        assert_eq!(image.unique_color_count(), 3);
    }
}
