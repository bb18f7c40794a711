use nalgebra as na;

pub type Vec3 = na::Vector3<f32>;
pub type Vec2 = na::Vector2<f32>;
/// Spectral attenuation or radiance. Not clamped at this layer.
pub type Color = Vec3;
/// Scatter calls draw from a caller-supplied generator so that each
/// rendering worker owns a statistically independent stream.
pub type RandGen = dyn rand::RngCore;
