use bytemuck::{Pod, Zeroable};
use glam::Vec3;

use crate::MAX_HIT_BOXES;

/// One node of the flattened bounding-volume hierarchy.
///
/// `center` and `bias` describe the node's axis-aligned box as
/// `[center - bias, center + bias]`. A leaf wraps exactly one sphere
/// (`sphere >= 0`, `left == right == NONE`); an internal node wraps exactly
/// two children (`sphere == NONE`). `next` and `exit` are filled in by the
/// threading pass and stay zeroed until then.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct HitBox {
    pub center: Vec3,
    pub _pad0: f32,
    pub bias: Vec3,
    pub index: i32,
    pub left: i32,
    pub right: i32,
    pub parent: i32,
    pub next: i32,
    pub exit: i32,
    pub sphere: i32,
    pub _pad1: [i32; 2],
}

impl HitBox {
    /// Sentinel for "no node" in any of the link fields.
    pub const NONE: i32 = -1;

    pub fn is_leaf(&self) -> bool {
        self.left == Self::NONE && self.right == Self::NONE
    }

    pub fn min(&self) -> Vec3 {
        self.center - self.bias
    }

    pub fn max(&self) -> Vec3 {
        self.center + self.bias
    }
}

/// The hitbox uniform block: `count` live nodes at the front of a
/// fixed-capacity array, root at slot 0.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct HitBoxes {
    pub count: i32,
    pub _pad: [i32; 3],
    pub nodes: [HitBox; MAX_HIT_BOXES],
}

impl HitBoxes {
    pub fn nodes(&self) -> &[HitBox] {
        &self.nodes[..self.count as usize]
    }
}

impl Default for HitBoxes {
    fn default() -> Self {
        Zeroable::zeroed()
    }
}

#[cfg(test)]
mod tests {
    use std::mem;

    use super::*;

    #[test]
    fn layout() {
        assert_eq!(64, mem::size_of::<HitBox>());
        assert_eq!(0, bytemuck::offset_of!(HitBox, center));
        assert_eq!(16, bytemuck::offset_of!(HitBox, bias));
        assert_eq!(28, bytemuck::offset_of!(HitBox, index));
        assert_eq!(32, bytemuck::offset_of!(HitBox, left));
        assert_eq!(36, bytemuck::offset_of!(HitBox, right));
        assert_eq!(40, bytemuck::offset_of!(HitBox, parent));
        assert_eq!(44, bytemuck::offset_of!(HitBox, next));
        assert_eq!(48, bytemuck::offset_of!(HitBox, exit));
        assert_eq!(52, bytemuck::offset_of!(HitBox, sphere));

        assert_eq!(16 + 30 * 64, mem::size_of::<HitBoxes>());
        assert_eq!(16, bytemuck::offset_of!(HitBoxes, nodes));
    }
}
