use std::ops::Add;

use glam::Vec3;

use crate::gpu;

/// Axis-aligned bounding box.
///
/// Kept as min/max corners while merging; the hitbox layout wants the
/// center/half-extent form, which [`Self::center()`] and
/// [`Self::half_extent()`] re-derive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    min: Vec3,
    max: Vec3,
}

impl BoundingBox {
    /// Bounding box of a sphere: a cube of half-extent `radius`.
    pub fn of_sphere(sphere: &gpu::Sphere) -> Self {
        Self {
            min: sphere.center - Vec3::splat(sphere.radius),
            max: sphere.center + Vec3::splat(sphere.radius),
        }
    }

    pub fn of_node(node: &gpu::HitBox) -> Self {
        Self {
            min: node.min(),
            max: node.max(),
        }
    }

    pub fn grow(&mut self, p: Vec3) {
        self.min = self.min.min(p);
        self.max = self.max.max(p);
    }

    pub fn min(&self) -> Vec3 {
        self.min
    }

    pub fn max(&self) -> Vec3 {
        self.max
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) / 2.0
    }

    pub fn half_extent(&self) -> Vec3 {
        self.center() - self.min
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self {
            min: Vec3::splat(f32::MAX),
            max: Vec3::splat(f32::MIN),
        }
    }
}

impl Add<Self> for BoundingBox {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self::Output {
        self.grow(rhs.min);
        self.grow(rhs.max);
        self
    }
}
