use crate::aliases::{Color, RandGen};
use crate::hit_record::HitRecord;
use crate::material::dielectric::reflect;
use crate::material::Material;
use crate::ray::Ray;
use crate::sample::rnd_unit_vector;
use crate::scatter_record::ScatterRecord;

/// Specular reflector. `fuzz` perturbs the mirror direction by a random
/// unit vector scaled into [0, 1]; zero is a perfect mirror.
pub struct Metal {
    pub albedo: Color,
    pub fuzz: f32,
}

impl Metal {
    /// Out-of-range fuzz is saturated into [0, 1], not rejected.
    pub fn new(albedo: &Color, fuzz: f32) -> Self {
        let clamped = fuzz.clamp(0.0, 1.0);
        if clamped != fuzz {
            log::warn!("metal fuzz {} outside [0, 1], clamped to {}", fuzz, clamped);
        }
        Metal {
            albedo: *albedo,
            fuzz: clamped,
        }
    }
}

impl Material for Metal {
    fn scatter(&self, ray: &Ray, rec: &HitRecord, rng: &mut RandGen) -> Option<ScatterRecord> {
        let reflected = reflect(&ray.direction.normalize(), &rec.normal);
        let direction = reflected + self.fuzz * rnd_unit_vector(rng);

        // Fuzz can push the ray below the surface; such rays are absorbed.
        if direction.dot(&rec.normal) <= 0.0 {
            return None;
        }
        Some(ScatterRecord {
            attenuation: self.albedo,
            ray: Ray::new(&rec.point, &direction, ray.time),
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::aliases::{Color, Vec2, Vec3};
    use crate::hit_record::HitRecord;
    use crate::material::metal::Metal;
    use crate::material::Material;
    use crate::ray::Ray;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn record<'a>(normal: Vec3, material: &'a dyn Material) -> HitRecord<'a> {
        HitRecord {
            t: 1.0,
            point: Vec3::new(0.0, 0.0, 0.0),
            tex_coord: Vec2::new(0.0, 0.0),
            normal,
            front_face: true,
            material,
        }
    }

    #[test]
    fn zero_fuzz_is_an_exact_mirror() {
        let mat = Metal::new(&Color::new(0.9, 0.6, 0.2), 0.0);
        let rec = record(Vec3::new(0.0, 1.0, 0.0), &mat);
        let ray_in = Ray::new(&Vec3::new(-2.0, 2.0, 0.0), &Vec3::new(2.0, -2.0, 0.0), 0.25);
        let mut rng = StdRng::seed_from_u64(5);
        let s = mat.scatter(&ray_in, &rec, &mut rng).unwrap();
        let expected = Vec3::new(1.0, 1.0, 0.0).normalize();
        assert!((s.ray.direction - expected).norm() < 1e-6);
        assert_eq!(s.attenuation, Color::new(0.9, 0.6, 0.2));
        assert_eq!(s.ray.time, 0.25);
    }

    #[test]
    fn fuzz_below_the_surface_is_absorbed() {
        // Constant 0.25 draws fix the fuzz perturbation at the downward
        // unit vector -(1,1,1)/sqrt(3); a grazing reflection cannot
        // survive it.
        let mut rng = StepRng::new(0x4000_0000, 0);
        let mat = Metal::new(&Color::new(0.9, 0.9, 0.9), 1.0);
        let rec = record(Vec3::new(0.0, 1.0, 0.0), &mat);
        let ray_in = Ray::new(&Vec3::new(-1.0, 1e-3, 0.0), &Vec3::new(1.0, -1e-3, 0.0), 0.0);
        assert!(mat.scatter(&ray_in, &rec, &mut rng).is_none());
    }

    #[test]
    fn oversized_fuzz_saturates_to_one() {
        let mat = Metal::new(&Color::new(0.5, 0.5, 0.5), 7.3);
        assert_eq!(mat.fuzz, 1.0);
        let mat = Metal::new(&Color::new(0.5, 0.5, 0.5), -0.5);
        assert_eq!(mat.fuzz, 0.0);
    }
}
