//! Recursive construction of the hitbox hierarchy.
//!
//! Spheres are sorted once by the smallest x-coordinate of their bounding
//! box and recursively bisected at the midpoint; every recursion step is
//! handed a contiguous range of that ordering, so no re-sorting is needed.
//! This is a deliberately simple split heuristic (no SAH, no alternating
//! axes) that matches what the shader-side traversal was tuned against.
//!
//! Node indices are reserved at the entry of each recursion step, before the
//! children are built; the resulting numbering is a pre-order walk with the
//! root at slot 0, which is exactly the discipline the threading pass in
//! [`super::bvh_threader`] relies on.

use glam::Vec3;

use super::BoundingBox;
use crate::{gpu, Error};

/// Maximum sphere count the node capacity admits (`2 * n - 1` nodes for `n`
/// spheres).
pub const MAX_BVH_SPHERES: usize = (gpu::MAX_HIT_BOXES + 1) / 2;

/// Builds the hierarchy for `spheres` into `out` and returns the root's
/// index (always 0).
///
/// `out` is expected to be empty; nothing is written if the preconditions
/// fail.
pub fn build(spheres: &[gpu::Sphere], out: &mut gpu::HitBoxes) -> Result<i32, Error> {
    if spheres.is_empty() {
        return Err(Error::EmptyScene);
    }

    if spheres.len() > MAX_BVH_SPHERES {
        return Err(Error::CapacityExceeded {
            count: spheres.len(),
            max: MAX_BVH_SPHERES,
        });
    }

    let mut spheres = spheres.to_vec();

    spheres.sort_by(|a, b| a.min_x().total_cmp(&b.min_x()));

    Ok(build_subtree(&spheres, out, gpu::HitBox::NONE))
}

fn build_subtree(spheres: &[gpu::Sphere], out: &mut gpu::HitBoxes, parent: i32) -> i32 {
    // Reserved before recursing, so children end up with higher indices
    let index = out.count;

    out.count += 1;

    let mut node = gpu::HitBox {
        index,
        parent,
        ..Default::default()
    };

    if let [sphere] = spheres {
        node.center = sphere.center;
        node.bias = Vec3::splat(sphere.radius);
        node.left = gpu::HitBox::NONE;
        node.right = gpu::HitBox::NONE;
        node.sphere = sphere.index;
    } else {
        let mid = spheres.len() / 2;
        let left = build_subtree(&spheres[..mid], out, index);
        let right = build_subtree(&spheres[mid..], out, index);

        let bb = BoundingBox::of_node(&out.nodes[left as usize])
            + BoundingBox::of_node(&out.nodes[right as usize]);

        node.center = bb.center();
        node.bias = bb.half_extent();
        node.left = left;
        node.right = right;
        node.sphere = gpu::HitBox::NONE;
    }

    out.nodes[index as usize] = node;

    index
}
