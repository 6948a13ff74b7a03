use glam::Vec3;

use crate::{gpu, Bvh, Error, UniformBufferable};

/// The sphere scene, kept in the exact uniform-block form the shader
/// consumes.
///
/// Each added sphere gets the next free slot as its identifier; leaf
/// hitboxes refer back to spheres through that identifier, so the scene must
/// not be reordered once a [`Bvh`] has been built from it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    spheres: gpu::Spheres,
}

impl Scene {
    /// Adds a sphere and returns its identifier.
    pub fn add(
        &mut self,
        center: Vec3,
        radius: f32,
        material: gpu::Material,
    ) -> Result<i32, Error> {
        let index = self.spheres.count;

        if index as usize == gpu::MAX_SPHERES {
            return Err(Error::CapacityExceeded {
                count: gpu::MAX_SPHERES + 1,
                max: gpu::MAX_SPHERES,
            });
        }

        self.spheres.spheres[index as usize] =
            gpu::Sphere::new(center, radius, index, material);

        self.spheres.count += 1;

        Ok(index)
    }

    pub fn spheres(&self) -> &[gpu::Sphere] {
        self.spheres.spheres()
    }

    /// Builds the threaded hierarchy for the current spheres.
    pub fn build_bvh(&self) -> Result<Bvh, Error> {
        let mut bvh = Bvh::default();

        bvh.rebuild(self.spheres())?;

        Ok(bvh)
    }
}

impl UniformBufferable for Scene {
    fn data(&self) -> &[u8] {
        bytemuck::bytes_of(&self.spheres)
    }
}
