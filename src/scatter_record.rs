use crate::aliases::Color;
use crate::ray::Ray;

/// Outcome of a scatter event: the continued ray and the per-channel
/// factor applied to whatever radiance it eventually carries back.
pub struct ScatterRecord {
    pub attenuation: Color,
    pub ray: Ray,
}
