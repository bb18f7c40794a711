use crate::aliases::{Color, RandGen, Vec3};
use crate::hit_record::HitRecord;
use crate::material::Material;
use crate::ray::Ray;
use crate::sample::rnd_scalar;
use crate::scatter_record::ScatterRecord;

/// Mirror reflection about the normal.
/// * `n` - must be unit length
pub fn reflect(v: &Vec3, n: &Vec3) -> Vec3 {
    debug_assert!((n.norm() - 1.0).abs() < 1e-3);
    v - 2.0 * v.dot(n) * n
}

/// Snell's law refraction. The caller is responsible for ruling out total
/// internal reflection first.
/// * `uv`, `n` - must be unit length
pub fn refract(uv: &Vec3, n: &Vec3, ratio: f32) -> Vec3 {
    debug_assert!((uv.norm() - 1.0).abs() < 1e-3);
    debug_assert!((n.norm() - 1.0).abs() < 1e-3);
    let cos_theta = (-uv.dot(n)).min(1.0);
    let out_perp = ratio * (uv + cos_theta * n);
    let out_parallel = -(1.0 - out_perp.norm_squared()).abs().sqrt() * n;
    out_perp + out_parallel
}

/// Schlick's approximation of the Fresnel reflectance.
pub fn reflectance(cosine: f32, ratio: f32) -> f32 {
    let r0 = ((1.0 - ratio) / (1.0 + ratio)).powi(2);
    r0 + (1.0 - r0) * (1.0 - cosine).powi(5)
}

/// Clear refractive medium. Reflection and transmission are chosen
/// stochastically with Fresnel weights rather than splitting energy.
pub struct Dielectric {
    pub eta: f32,
}

impl Dielectric {
    pub fn new(eta: f32) -> Self {
        assert!(eta > 0.0, "refractive index must be positive, got {}", eta);
        Dielectric { eta }
    }
}

impl Material for Dielectric {
    fn scatter(&self, ray: &Ray, rec: &HitRecord, rng: &mut RandGen) -> Option<ScatterRecord> {
        let ratio = if rec.front_face {
            1.0 / self.eta
        } else {
            self.eta
        };
        let unit_dir = ray.direction.normalize();
        let cos_theta = (-unit_dir.dot(&rec.normal)).min(1.0);
        let sin_theta = (1.0 - cos_theta * cos_theta).sqrt();

        let cannot_refract = ratio * sin_theta > 1.0;
        let direction = if cannot_refract || reflectance(cos_theta, ratio) > rnd_scalar(rng) {
            reflect(&unit_dir, &rec.normal)
        } else {
            refract(&unit_dir, &rec.normal, ratio)
        };
        Some(ScatterRecord {
            attenuation: Color::new(1.0, 1.0, 1.0),
            ray: Ray::new(&rec.point, &direction, ray.time),
        })
    }
}
