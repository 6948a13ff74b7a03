use bytemuck::{Pod, Zeroable};
use glam::Vec3;

use crate::{Material, MAX_SPHERES};

/// One bounding sphere; `index` is the sphere's slot in [`Spheres`] and the
/// identifier leaf hitboxes refer back to.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
    pub index: i32,
    pub _pad: [i32; 3],
    pub material: Material,
}

impl Sphere {
    pub fn new(center: Vec3, radius: f32, index: i32, material: Material) -> Self {
        Self {
            center,
            radius,
            index,
            _pad: [0; 3],
            material,
        }
    }

    /// Smallest x-coordinate of the sphere's bounding box; the builder's
    /// sort key.
    pub fn min_x(&self) -> f32 {
        self.center.x - self.radius
    }
}

/// The sphere uniform block: `count` live spheres at the front of a
/// fixed-capacity array.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Spheres {
    pub count: i32,
    pub _pad: [i32; 3],
    pub spheres: [Sphere; MAX_SPHERES],
}

impl Spheres {
    pub fn spheres(&self) -> &[Sphere] {
        &self.spheres[..self.count as usize]
    }
}

impl Default for Spheres {
    fn default() -> Self {
        Zeroable::zeroed()
    }
}
