mod bounding_box;
mod bvh_builder;
mod bvh_threader;

use std::fmt;

pub use self::bounding_box::*;
pub use self::bvh_builder::MAX_BVH_SPHERES;
use crate::{gpu, Error, UniformBufferable};

/// The threaded bounding-volume hierarchy over a scene's spheres, in the
/// exact uniform-block form the shader consumes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Bvh {
    hitboxes: gpu::HitBoxes,
}

impl Bvh {
    /// Rebuilds the hierarchy from scratch.
    ///
    /// On failure the previous contents are left untouched; a partially
    /// written hierarchy is never observable.
    pub fn rebuild(&mut self, spheres: &[gpu::Sphere]) -> Result<(), Error> {
        let mut hitboxes = gpu::HitBoxes::default();

        bvh_builder::build(spheres, &mut hitboxes)?;
        bvh_threader::thread(&mut hitboxes);

        log::debug!(
            "Built hitbox hierarchy; spheres={}, nodes={}",
            spheres.len(),
            hitboxes.count,
        );

        self.hitboxes = hitboxes;

        Ok(())
    }

    /// Index of the root node; the builder always places it at slot 0.
    pub fn root(&self) -> i32 {
        0
    }

    pub fn nodes(&self) -> &[gpu::HitBox] {
        self.hitboxes.nodes()
    }
}

impl UniformBufferable for Bvh {
    fn data(&self) -> &[u8] {
        bytemuck::bytes_of(&self.hitboxes)
    }
}

/// Renders the hierarchy as a Graphviz digraph; handy when eyeballing the
/// `next`/`exit` links.
impl fmt::Display for Bvh {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "digraph G {{")?;

        for node in self.nodes() {
            let id = node.index;

            if node.is_leaf() {
                writeln!(f, "  n{id} [label=\"leaf({})\"]", node.sphere)?;
            } else {
                writeln!(f, "  n{id} [label=\"node({} .. {})\"]", node.min(), node.max())?;
                writeln!(f, "  n{id} -> n{} [label=\"left\"]", node.left)?;
                writeln!(f, "  n{id} -> n{} [label=\"right\"]", node.right)?;
            }

            if node.next != gpu::HitBox::NONE {
                writeln!(f, "  n{id} -> n{} [label=\"next\"]", node.next)?;
            }

            if node.exit != gpu::HitBox::NONE {
                writeln!(f, "  n{id} -> n{} [label=\"exit\"]", node.exit)?;
            }
        }

        writeln!(f, "}}")
    }
}
