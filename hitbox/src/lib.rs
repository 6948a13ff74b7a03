//! Bounding-volume hierarchy construction for the sphere ray tracer.
//!
//! The compute shader has no call stack, so the hierarchy is handed over as
//! a flat, pre-order-indexed array in which every node carries precomputed
//! `next` and `exit` links (a threaded BVH): `next` is the node to visit
//! after this one, `exit` the node to jump to when this node's whole subtree
//! can be skipped.
//!
//! The usual flow is [`Scene`] -> [`Bvh`] -> uniform upload:
//!
//! ```
//! use glam::vec3;
//! use hitbox::{gpu, Scene, UniformBufferable};
//!
//! let mut scene = Scene::default();
//!
//! scene.add(vec3(0.0, -1000.0, 0.0), 1000.0, gpu::Material::diffuse(vec3(0.5, 0.5, 0.5)))?;
//! scene.add(vec3(0.0, 1.0, 0.0), 1.0, gpu::Material::dielectric(1.0 / 1.5))?;
//!
//! let bvh = scene.build_bvh()?;
//!
//! let _sphere_bytes = scene.data();
//! let _hitbox_bytes = bvh.data();
//! # Ok::<_, hitbox::Error>(())
//! ```

mod buffers;
mod bvh;
mod error;
mod scene;

pub use hitbox_gpu as gpu;

pub use self::buffers::*;
pub use self::bvh::*;
pub use self::error::*;
pub use self::scene::*;
