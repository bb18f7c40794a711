use crate::aliases::{Color, Vec2, Vec3};
use crate::texture::Texture;
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading texture assets.
#[derive(Error, Debug)]
pub enum TextureError {
    #[error("failed to decode texture image: {0}")]
    Decode(#[from] image::ImageError),
}

pub type TextureResult<T> = Result<T, TextureError>;

/// Nearest-sample lookup into a decoded RGB image.
pub struct ImageTexture {
    data: Vec<u8>, // RGBRGBRGB..., row-major from the top-left pixel
    width: usize,
    height: usize,
}

impl ImageTexture {
    pub fn open(path: &Path) -> TextureResult<Self> {
        let img = image::open(path)?.to_rgb8();
        let (width, height) = img.dimensions();
        log::debug!(
            "decoded texture image {} ({}x{})",
            path.display(),
            width,
            height
        );
        Ok(Self::from_rgb8(
            img.into_raw(),
            width as usize,
            height as usize,
        ))
    }

    /// Raw RGB bytes, row-major starting at the top-left pixel.
    pub fn from_rgb8(data: Vec<u8>, width: usize, height: usize) -> Self {
        assert_eq!(data.len(), width * height * 3);
        ImageTexture {
            data,
            width,
            height,
        }
    }
}

impl Texture for ImageTexture {
    fn value(&self, uv: &Vec2, _p: &Vec3) -> Color {
        // v runs bottom-up while image rows run top-down.
        let i = ((uv[0] * self.width as f32) as usize).min(self.width - 1);
        let j = (((1.0 - uv[1]) * self.height as f32) as usize).min(self.height - 1);
        let px = 3 * (i + j * self.width);
        Color::new(
            self.data[px] as f32 / 255.0,
            self.data[px + 1] as f32 / 255.0,
            self.data[px + 2] as f32 / 255.0,
        )
    }
}
