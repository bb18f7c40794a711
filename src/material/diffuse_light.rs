use crate::aliases::{Color, RandGen, Vec2, Vec3};
use crate::hit_record::HitRecord;
use crate::material::Material;
use crate::ray::Ray;
use crate::scatter_record::ScatterRecord;
use crate::texture::Texture;
use std::sync::Arc;

/// Emits and absorbs; never scatters.
pub struct DiffuseLight {
    pub emit: Arc<dyn Texture>,
}

impl DiffuseLight {
    pub fn new(emit: Arc<dyn Texture>) -> Self {
        DiffuseLight { emit }
    }
}

impl Material for DiffuseLight {
    fn scatter(&self, _ray: &Ray, _rec: &HitRecord, _rng: &mut RandGen) -> Option<ScatterRecord> {
        None
    }
    fn emitted(&self, uv: &Vec2, p: &Vec3) -> Color {
        self.emit.value(uv, p)
    }
}
