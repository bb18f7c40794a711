use crate::aliases::{Color, Vec2, Vec3};
use crate::texture::Texture;

/// Solid color as a texture.
pub struct ConstantTexture(Color);

impl ConstantTexture {
    pub fn new(color: &Color) -> Self {
        ConstantTexture(*color)
    }
    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        ConstantTexture(Color::new(r, g, b))
    }
}

impl Texture for ConstantTexture {
    fn value(&self, _uv: &Vec2, _p: &Vec3) -> Color {
        self.0
    }
}
