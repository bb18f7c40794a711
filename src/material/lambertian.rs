use crate::aliases::{Color, RandGen};
use crate::hit_record::HitRecord;
use crate::material::Material;
use crate::ray::Ray;
use crate::sample::rnd_unit_vector;
use crate::scatter_record::ScatterRecord;
use crate::texture::constant::ConstantTexture;
use crate::texture::Texture;
use crate::util::near_zero;
use std::sync::Arc;

/// Ideal diffuse reflector.
pub struct Lambertian {
    pub albedo: Arc<dyn Texture>,
}

impl Lambertian {
    pub fn new(albedo: Arc<dyn Texture>) -> Self {
        Lambertian { albedo }
    }
    pub fn with_color(color: &Color) -> Self {
        Lambertian {
            albedo: Arc::new(ConstantTexture::new(color)),
        }
    }
}

impl Material for Lambertian {
    fn scatter(&self, ray: &Ray, rec: &HitRecord, rng: &mut RandGen) -> Option<ScatterRecord> {
        // A unit sphere tangent at the hit point, sampled uniformly,
        // yields a cosine-weighted direction over the hemisphere.
        let mut direction = rec.normal + rnd_unit_vector(rng);

        // The sample can land exactly opposite the normal.
        if near_zero(&direction) {
            direction = rec.normal;
        }
        Some(ScatterRecord {
            attenuation: self.albedo.value(&rec.tex_coord, &rec.point),
            ray: Ray::new(&rec.point, &direction, ray.time),
        })
    }
}
