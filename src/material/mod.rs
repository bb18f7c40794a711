pub mod dielectric;
pub mod diffuse_light;
pub mod isotropic;
pub mod lambertian;
pub mod metal;

use crate::aliases::{Color, RandGen, Vec2, Vec3};
use crate::hit_record::HitRecord;
use crate::ray::Ray;
use crate::scatter_record::ScatterRecord;

/// How a surface redirects light. Implementations are immutable after
/// construction; every call is independent given the RNG draws.
pub trait Material: Send + Sync {
    /// Calculates the scattered ray and attenuation, or
    /// None when the surface absorbs the ray.
    fn scatter(&self, ray: &Ray, rec: &HitRecord, rng: &mut RandGen) -> Option<ScatterRecord>;
    /// Light emitted at a surface point. Non-zero only for lights.
    fn emitted(&self, _uv: &Vec2, _p: &Vec3) -> Color {
        Color::new(0.0, 0.0, 0.0)
    }
}
