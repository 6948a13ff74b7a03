//! Structs shared between the renderer and the ray-tracing compute shader.
//!
//! Everything here is `#[repr(C)]` and follows the shader's std140-flavored
//! layout; the uniform blocks are uploaded byte-for-byte, so field offsets
//! and paddings are load-bearing and locked down by tests.

mod hit_box;
mod material;
mod sphere;

pub use self::hit_box::*;
pub use self::material::*;
pub use self::sphere::*;

/// Capacity of the hitbox uniform block.
///
/// Since a hierarchy over `n` spheres needs `2 * n - 1` nodes, this caps the
/// sphere count at `(MAX_HIT_BOXES + 1) / 2`.
pub const MAX_HIT_BOXES: usize = 30;

/// Capacity of the sphere uniform block.
pub const MAX_SPHERES: usize = 30;
