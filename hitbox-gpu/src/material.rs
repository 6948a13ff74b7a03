use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// Material record attached to each sphere; interpreted by the shader.
///
/// `fuzz` is only meaningful for metals, `refraction` (eta-in / eta-out) only
/// for dielectrics; the constructors keep the unused fields at the neutral
/// values the shader expects (`fuzz = 0`, `refraction = 1`).
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Material {
    pub ty: i32,
    pub _pad0: [i32; 3],
    pub attenuation: Vec3,
    pub fuzz: f32,
    pub refraction: f32,
    pub _pad1: [f32; 3],
}

impl Material {
    pub const DIFFUSE: i32 = 0;
    pub const METAL: i32 = 1;
    pub const DIELECTRIC: i32 = 2;

    pub fn diffuse(attenuation: Vec3) -> Self {
        Self {
            ty: Self::DIFFUSE,
            attenuation,
            fuzz: 0.0,
            refraction: 1.0,
            ..Zeroable::zeroed()
        }
    }

    pub fn metal(attenuation: Vec3, fuzz: f32) -> Self {
        Self {
            ty: Self::METAL,
            attenuation,
            fuzz,
            refraction: 1.0,
            ..Zeroable::zeroed()
        }
    }

    pub fn dielectric(refraction: f32) -> Self {
        Self {
            ty: Self::DIELECTRIC,
            attenuation: Vec3::ONE,
            fuzz: 0.0,
            refraction,
            ..Zeroable::zeroed()
        }
    }
}
