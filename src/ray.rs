use crate::aliases::Vec3;

#[derive(Clone, Copy)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
    pub time: f32, // time at which the ray is generated (utilized for motion blurring)
}

impl Ray {
    pub fn new(origin: &Vec3, direction: &Vec3, time: f32) -> Self {
        Ray {
            origin: *origin,
            direction: *direction,
            time,
        }
    }
    pub fn evaluate(&self, t: f32) -> Vec3 {
        self.origin + t * self.direction
    }
}

#[cfg(test)]
mod tests {
    use crate::aliases::Vec3;
    use crate::ray::Ray;

    #[test]
    fn evaluate_walks_along_direction() {
        let ray = Ray::new(&Vec3::new(1.0, 0.0, -1.0), &Vec3::new(0.0, 2.0, 0.0), 0.5);
        let p = ray.evaluate(1.5);
        assert!((p - Vec3::new(1.0, 3.0, -1.0)).norm() < 1e-6);
    }
}
