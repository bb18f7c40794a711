use crate::aliases::{Color, RandGen, Vec2, Vec3};
use crate::sample::{rnd_scalar, rnd_unit_vector};
use crate::texture::Texture;
use std::sync::Arc;

/// Gradient lattice noise over a 256-cell permuted grid.
pub struct Perlin {
    perm_x: [u8; 256],
    perm_y: [u8; 256],
    perm_z: [u8; 256],
    gradients: [Vec3; 256], // random unit vectors
}

impl Perlin {
    pub fn new(rng: &mut RandGen) -> Self {
        let mut gradients = [Vec3::zeros(); 256];
        for g in gradients.iter_mut() {
            *g = rnd_unit_vector(&mut *rng);
        }
        Perlin {
            perm_x: Self::generate_perm(&mut *rng),
            perm_y: Self::generate_perm(&mut *rng),
            perm_z: Self::generate_perm(rng),
            gradients,
        }
    }

    fn generate_perm(rng: &mut RandGen) -> [u8; 256] {
        let mut perm = [0u8; 256];
        for (i, v) in perm.iter_mut().enumerate() {
            *v = i as u8;
        }
        // Fisher-Yates over the identity permutation.
        for i in (1..256usize).rev() {
            let j = (rnd_scalar(&mut *rng) * (i + 1) as f32) as usize;
            perm.swap(i, j);
        }
        perm
    }

    /// Returns values in [-1, 1].
    pub fn noise(&self, p: &Vec3) -> f32 {
        let base = Vec3::new(p[0].floor(), p[1].floor(), p[2].floor());
        let frac = p - base;
        let (i, j, k) = (base[0] as i32, base[1] as i32, base[2] as i32);
        let mut corners = [[[Vec3::zeros(); 2]; 2]; 2];
        for di in 0..2i32 {
            for dj in 0..2i32 {
                for dk in 0..2i32 {
                    let idx = self.perm_x[((i + di) & 255) as usize]
                        ^ self.perm_y[((j + dj) & 255) as usize]
                        ^ self.perm_z[((k + dk) & 255) as usize];
                    corners[di as usize][dj as usize][dk as usize] =
                        self.gradients[idx as usize];
                }
            }
        }
        Self::interpolate(&corners, &frac)
    }

    /// Sum of progressively smaller, higher-frequency noise octaves.
    pub fn turbulence(&self, p: &Vec3) -> f32 {
        const OCTAVES: usize = 7;
        let mut accum = 0.0;
        let mut q = *p;
        let mut weight = 1.0;
        for _ in 0..OCTAVES {
            accum += weight * self.noise(&q);
            weight *= 0.5;
            q *= 2.0;
        }
        accum.abs()
    }

    fn interpolate(corners: &[[[Vec3; 2]; 2]; 2], frac: &Vec3) -> f32 {
        // Hermite-smoothed trilinear blend of the corner gradient dots.
        let mut smooth = Vec3::zeros();
        for c in 0..3 {
            smooth[c] = frac[c] * frac[c] * (3.0 - 2.0 * frac[c]);
        }
        let mut accum = 0.0;
        for i in 0..2usize {
            for j in 0..2usize {
                for k in 0..2usize {
                    let corner = Vec3::new(i as f32, j as f32, k as f32);
                    let weight = frac - corner;
                    accum += (i as f32 * smooth[0] + (1.0 - i as f32) * (1.0 - smooth[0]))
                        * (j as f32 * smooth[1] + (1.0 - j as f32) * (1.0 - smooth[1]))
                        * (k as f32 * smooth[2] + (1.0 - k as f32) * (1.0 - smooth[2]))
                        * corners[i][j][k].dot(&weight);
                }
            }
        }
        accum
    }
}

/// Marble-like pattern: a sine along z displaced by turbulence.
pub struct NoiseTexture {
    perlin: Arc<Perlin>,
    scale: f32,
}

impl NoiseTexture {
    pub fn new(scale: f32, rng: &mut RandGen) -> Self {
        NoiseTexture {
            perlin: Arc::new(Perlin::new(rng)),
            scale,
        }
    }
}

impl Texture for NoiseTexture {
    fn value(&self, _uv: &Vec2, p: &Vec3) -> Color {
        let marble = f32::sin(self.scale * p[2] + 10.0 * self.perlin.turbulence(p));
        Color::new(1.0, 1.0, 1.0) * 0.5 * (1.0 + marble)
    }
}
