use crate::aliases::{Vec2, Vec3};
use crate::material::Material;
use crate::ray::Ray;

/// Where and how a ray struck a surface. Produced by the intersection
/// subsystem, consumed read-only by materials.
#[derive(Clone, Copy)]
pub struct HitRecord<'a> {
    pub t: f32,
    pub point: Vec3,
    pub tex_coord: Vec2,
    /// Unit length, oriented against the incoming ray.
    pub normal: Vec3,
    /// True when the ray origin lies on the outward-normal side.
    pub front_face: bool,
    pub material: &'a dyn Material,
}

impl<'a> HitRecord<'a> {
    /// Builds a record from the outward geometric normal, flipping it to
    /// oppose the ray so the orientation invariant holds by construction.
    /// * `outward_normal` - must be unit length.
    pub fn new(
        ray: &Ray,
        t: f32,
        point: &Vec3,
        tex_coord: &Vec2,
        outward_normal: &Vec3,
        material: &'a dyn Material,
    ) -> Self {
        debug_assert!((outward_normal.norm() - 1.0).abs() < 1e-3);
        let front_face = ray.direction.dot(outward_normal) < 0.0;
        let normal = if front_face {
            *outward_normal
        } else {
            -*outward_normal
        };
        HitRecord {
            t,
            point: *point,
            tex_coord: *tex_coord,
            normal,
            front_face,
            material,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::aliases::{Vec2, Vec3};
    use crate::hit_record::HitRecord;
    use crate::material::lambertian::Lambertian;
    use crate::ray::Ray;

    #[test]
    fn normal_is_oriented_against_the_ray() {
        let material = Lambertian::with_color(&Vec3::new(0.5, 0.5, 0.5));
        let outward = Vec3::new(0.0, 1.0, 0.0);
        let point = Vec3::new(0.0, 1.0, 0.0);
        let uv = Vec2::new(0.0, 0.0);

        let from_outside = Ray::new(&Vec3::new(0.0, 2.0, 0.0), &Vec3::new(0.0, -1.0, 0.0), 0.0);
        let rec = HitRecord::new(&from_outside, 1.0, &point, &uv, &outward, &material);
        assert!(rec.front_face);
        assert!((rec.normal - outward).norm() < 1e-6);

        let from_inside = Ray::new(&Vec3::new(0.0, 0.0, 0.0), &Vec3::new(0.0, 1.0, 0.0), 0.0);
        let rec = HitRecord::new(&from_inside, 1.0, &point, &uv, &outward, &material);
        assert!(!rec.front_face);
        assert!((rec.normal + outward).norm() < 1e-6);
    }
}
