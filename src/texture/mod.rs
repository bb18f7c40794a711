pub mod checker;
pub mod constant;
pub mod image;
pub mod noise;

use crate::aliases::{Color, Vec2, Vec3};

/// Spatially varying color lookup. Shared between materials via
/// `Arc<dyn Texture>`; textures never reference materials back.
pub trait Texture: Send + Sync {
    // (u,v) for 2d textures, p for 3d textures
    fn value(&self, uv: &Vec2, p: &Vec3) -> Color;
}
