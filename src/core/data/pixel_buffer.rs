use crate::core::data::surface_size::SurfaceSize;

pub const CHANNELS: usize = 4;

/// Row-major RGBA frame with the origin at the top-left corner.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    size: SurfaceSize,
    data: Vec<u8>,
}

impl PixelBuffer {
    #[must_use]
    pub fn new(size: SurfaceSize) -> Self {
        Self {
            size,
            data: vec![0; size.pixel_count() * CHANNELS],
        }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.size.width()
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.size.height()
    }

    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub(crate) fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    #[must_use]
    pub fn row_stride(&self) -> usize {
        self.size.width() as usize * CHANNELS
    }

    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if !self.size.contains(x, y) {
            return None;
        }

        let index = self.index_of(x, y);
        let mut rgba = [0; 4];
        rgba.copy_from_slice(&self.data[index..index + CHANNELS]);
        Some(rgba)
    }

    fn index_of(&self, x: u32, y: u32) -> usize {
        (y as usize * self.size.width() as usize + x as usize) * CHANNELS
    }
}
