use crate::aliases::{Color, Vec2, Vec3};
use crate::texture::Texture;
use std::f32::consts::PI;
use std::sync::Arc;

/// 3-d checker pattern alternating between two child textures, with a
/// spatial period and phase offset.
pub struct CheckerTexture {
    even: Arc<dyn Texture>,
    odd: Arc<dyn Texture>,
    period: f32,
    phase: Vec3,
}

impl CheckerTexture {
    pub fn new(even: Arc<dyn Texture>, odd: Arc<dyn Texture>, period: f32, phase: &Vec3) -> Self {
        CheckerTexture {
            even,
            odd,
            period,
            phase: *phase,
        }
    }
}

impl Texture for CheckerTexture {
    fn value(&self, uv: &Vec2, p: &Vec3) -> Color {
        let x = PI * p / self.period + self.phase;
        let sines = f32::sin(x[0]) * f32::sin(x[1]) * f32::sin(x[2]);
        if sines < 0.0 {
            self.odd.value(uv, p)
        } else {
            self.even.value(uv, p)
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::aliases::{Color, Vec2, Vec3};
    use crate::texture::checker::CheckerTexture;
    use crate::texture::constant::ConstantTexture;
    use crate::texture::Texture;
    use std::sync::Arc;

    #[test]
    fn adjacent_cells_alternate() {
        let white = Arc::new(ConstantTexture::rgb(1.0, 1.0, 1.0));
        let black = Arc::new(ConstantTexture::rgb(0.0, 0.0, 0.0));
        let checker = CheckerTexture::new(white, black, 1.0, &Vec3::new(0.0, 0.0, 0.0));
        let uv = Vec2::new(0.0, 0.0);
        let a = checker.value(&uv, &Vec3::new(0.5, 0.5, 0.5));
        let b = checker.value(&uv, &Vec3::new(1.5, 0.5, 0.5));
        assert_eq!(a, Color::new(1.0, 1.0, 1.0));
        assert_eq!(b, Color::new(0.0, 0.0, 0.0));
    }
}
