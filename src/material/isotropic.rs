use crate::aliases::{Color, RandGen};
use crate::hit_record::HitRecord;
use crate::material::Material;
use crate::ray::Ray;
use crate::sample::rnd_unit_vector;
use crate::scatter_record::ScatterRecord;
use crate::texture::constant::ConstantTexture;
use crate::texture::Texture;
use std::sync::Arc;

/// Uniform scatterer for participating media. There is no surface to bias
/// against, so the outgoing direction covers the whole sphere.
pub struct Isotropic {
    pub albedo: Arc<dyn Texture>,
}

impl Isotropic {
    pub fn new(albedo: Arc<dyn Texture>) -> Self {
        Isotropic { albedo }
    }
    pub fn with_color(color: &Color) -> Self {
        Isotropic {
            albedo: Arc::new(ConstantTexture::new(color)),
        }
    }
}

impl Material for Isotropic {
    fn scatter(&self, ray: &Ray, rec: &HitRecord, rng: &mut RandGen) -> Option<ScatterRecord> {
        Some(ScatterRecord {
            attenuation: self.albedo.value(&rec.tex_coord, &rec.point),
            ray: Ray::new(&rec.point, &rnd_unit_vector(rng), ray.time),
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::aliases::{Color, Vec2, Vec3};
    use crate::hit_record::HitRecord;
    use crate::material::isotropic::Isotropic;
    use crate::material::Material;
    use crate::ray::Ray;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn scatters_unit_directions_over_the_full_sphere() {
        let fog = Isotropic::with_color(&Color::new(0.7, 0.7, 0.7));
        let rec = HitRecord {
            t: 1.0,
            point: Vec3::new(0.0, 0.0, 0.0),
            tex_coord: Vec2::new(0.0, 0.0),
            normal: Vec3::new(0.0, 1.0, 0.0),
            front_face: true,
            material: &fog,
        };
        let ray_in = Ray::new(&Vec3::new(0.0, 1.0, 0.0), &Vec3::new(0.0, -1.0, 0.0), 0.0);
        let mut rng = StdRng::seed_from_u64(23);
        let axis = Vec3::new(0.0, 1.0, 0.0);
        let (mut above, mut below) = (0usize, 0usize);
        for _ in 0..2000 {
            let s = fog.scatter(&ray_in, &rec, &mut rng).unwrap();
            assert!((s.ray.direction.norm() - 1.0).abs() < 1e-4);
            assert_eq!(s.attenuation, Color::new(0.7, 0.7, 0.7));
            if s.ray.direction.dot(&axis) > 0.0 {
                above += 1;
            } else {
                below += 1;
            }
        }
        // Uniform sampling must populate both hemispheres.
        assert!(above > 500 && below > 500, "above {} below {}", above, below);
    }
}
