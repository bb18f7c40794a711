use crate::aliases::{RandGen, Vec3};
use rand::Rng;

/// Uniform scalar in [0, 1).
pub fn rnd_scalar(mut rng: &mut RandGen) -> f32 {
    rng.gen()
}

/// Uniform random point inside the open unit ball, by rejection.
pub fn rnd_in_unit_sphere(mut rng: &mut RandGen) -> Vec3 {
    loop {
        let p = Vec3::new(
            2.0 * rng.gen::<f32>() - 1.0,
            2.0 * rng.gen::<f32>() - 1.0,
            2.0 * rng.gen::<f32>() - 1.0,
        );
        if p.norm_squared() < 1.0 {
            return p;
        }
    }
}

/// Uniform random direction on the unit sphere.
/// Samples the ball and normalizes, rejecting lengths too small to
/// normalize safely.
pub fn rnd_unit_vector(rng: &mut RandGen) -> Vec3 {
    loop {
        let p = rnd_in_unit_sphere(&mut *rng);
        let len_sq = p.norm_squared();
        if len_sq > 1e-12 {
            return p / len_sq.sqrt();
        }
    }
}
