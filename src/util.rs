use crate::aliases::Vec3;

pub const NEAR_ZERO_EPS: f32 = 1e-6;

/// True when every component is below `NEAR_ZERO_EPS` in magnitude.
/// Used to reject degenerate scatter directions.
pub fn near_zero(v: &Vec3) -> bool {
    v[0].abs() < NEAR_ZERO_EPS && v[1].abs() < NEAR_ZERO_EPS && v[2].abs() < NEAR_ZERO_EPS
}
