//! Matrices rebuilt every frame from the current parameters.

use glam::{Mat4, Vec3};

pub const FIELD_OF_VIEW_DEGREES: f32 = 45.0;
pub const Z_NEAR: f32 = 0.1;
pub const Z_FAR: f32 = 100.0;
/// Height of the cat demo's eye above the ground plane.
pub const EYE_HEIGHT: f32 = 1.5;

/// Width over height, falling back to square while the canvas has no layout yet.
pub fn aspect_ratio(width: f64, height: f64) -> f32 {
    if height > 0.0 && width > 0.0 {
        (width / height) as f32
    } else {
        1.0
    }
}

/// Perspective projection with GL clip-space depth (-1..1).
pub fn projection(aspect: f32) -> Mat4 {
    Mat4::perspective_rh_gl(FIELD_OF_VIEW_DEGREES.to_radians(), aspect, Z_NEAR, Z_FAR)
}

/// Camera on the +Z axis at `distance`, raised by [`EYE_HEIGHT`], looking at the origin.
pub fn view(distance: f32) -> Mat4 {
    Mat4::look_at_rh(Vec3::new(0.0, EYE_HEIGHT, distance), Vec3::ZERO, Vec3::Y)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatPart {
    Body,
    Head,
    FrontLeftLeg,
    BackLeftLeg,
    FrontRightLeg,
    BackRightLeg,
    Tail,
}

impl CatPart {
    /// Draw order.
    pub const ALL: [CatPart; 7] = [
        CatPart::Body,
        CatPart::Head,
        CatPart::FrontLeftLeg,
        CatPart::BackLeftLeg,
        CatPart::FrontRightLeg,
        CatPart::BackRightLeg,
        CatPart::Tail,
    ];

    /// Offset from the cat's origin, in the parent (rotated) frame.
    pub fn offset(self) -> Vec3 {
        match self {
            CatPart::Body => Vec3::ZERO,
            CatPart::Head => Vec3::new(1.0, 0.6, 0.0),
            CatPart::FrontLeftLeg => Vec3::new(0.5, -0.6, 0.2),
            CatPart::BackLeftLeg => Vec3::new(-0.5, -0.6, 0.2),
            CatPart::FrontRightLeg => Vec3::new(0.5, -0.6, -0.2),
            CatPart::BackRightLeg => Vec3::new(-0.5, -0.6, -0.2),
            CatPart::Tail => Vec3::new(-1.0, 0.4, 0.0),
        }
    }

    pub fn scale(self) -> Vec3 {
        match self {
            CatPart::Body => Vec3::new(1.5, 0.8, 0.8),
            CatPart::Head => Vec3::splat(0.7),
            CatPart::FrontLeftLeg
            | CatPart::BackLeftLeg
            | CatPart::FrontRightLeg
            | CatPart::BackRightLeg => Vec3::new(0.3, 0.5, 0.3),
            CatPart::Tail => Vec3::new(0.8, 0.2, 0.2),
        }
    }

    /// Translate then scale, relative to `parent`.
    pub fn model(self, parent: Mat4) -> Mat4 {
        parent * Mat4::from_translation(self.offset()) * Mat4::from_scale(self.scale())
    }
}

/// Shared parent transform for every part: a spin about +Y.
pub fn cat_parent(angle: f32) -> Mat4 {
    Mat4::from_rotation_y(angle)
}

/// One MVP matrix per [`CatPart::ALL`] entry, in the same order.
pub fn cat_mvps(aspect: f32, camera_distance: f32, angle: f32) -> [Mat4; 7] {
    let view_projection = projection(aspect) * view(camera_distance);
    let parent = cat_parent(angle);
    CatPart::ALL.map(|part| view_projection * part.model(parent))
}

/// Sandbox transform: spin about Z, then scale X and Y by `scale`.
pub fn triangle_transform(angle: f32, scale: f32) -> Mat4 {
    Mat4::from_rotation_z(angle) * Mat4::from_scale(Vec3::new(scale, scale, 1.0))
}
