//! Projection-surface transform value object.
//!
//! The rendering layer consumes this as an ordered list of world-axis
//! rotation steps plus an anisotropic scale triple, composing them into its
//! own scene-graph representation. [`ProjectionTransform::to_matrix`] is a
//! convenience for consumers that want a single matrix.

use glam::{DMat4, DVec3};

/// World axis a rotation step turns about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// The world X axis (toward 90°E).
    X,
    /// The world Y axis (the polar axis).
    Y,
    /// The world Z axis (toward the prime meridian).
    Z,
}

/// One extrinsic rotation about a world axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationStep {
    /// Axis of rotation.
    pub axis: Axis,
    /// Signed angle in radians.
    pub angle_rad: f64,
}

impl RotationStep {
    /// A rotation step about the given axis.
    #[must_use]
    pub fn new(axis: Axis, angle_rad: f64) -> Self {
        Self { axis, angle_rad }
    }

    fn matrix(self) -> DMat4 {
        match self.axis {
            Axis::X => DMat4::from_rotation_x(self.angle_rad),
            Axis::Y => DMat4::from_rotation_y(self.angle_rad),
            Axis::Z => DMat4::from_rotation_z(self.angle_rad),
        }
    }
}

/// The rigid transform aligning a canonical projection surface to a zone:
/// rotations applied in order, then an anisotropic scale in the surface's
/// local frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionTransform {
    /// World-axis rotations in application order (base alignment first).
    pub rotations: Vec<RotationStep>,
    /// Local-frame scale; the component along the surface's generating axis
    /// stays 1.
    pub scale: DVec3,
}

impl ProjectionTransform {
    /// An identity transform to extend step by step.
    #[must_use]
    pub fn identity() -> Self {
        Self {
            rotations: Vec::new(),
            scale: DVec3::ONE,
        }
    }

    /// Append an extrinsic rotation about a world axis.
    pub fn push_rotation(&mut self, axis: Axis, angle_rad: f64) {
        self.rotations.push(RotationStep::new(axis, angle_rad));
    }

    /// Compose everything into one matrix: each successive rotation
    /// premultiplies (extrinsic, world axes), the scale applies first in
    /// the surface's local frame.
    #[must_use]
    pub fn to_matrix(&self) -> DMat4 {
        let rotation = self
            .rotations
            .iter()
            .fold(DMat4::IDENTITY, |acc, step| step.matrix() * acc);
        rotation * DMat4::from_scale(self.scale)
    }
}

impl Default for ProjectionTransform {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    fn assert_vec_close(a: DVec3, b: DVec3) {
        assert!((a - b).length() < 1e-9, "expected {a} ~= {b}");
    }

    #[test]
    fn identity_maps_points_unchanged() {
        let t = ProjectionTransform::identity();
        let p = DVec3::new(1.0, 2.0, 3.0);
        assert_vec_close(t.to_matrix().transform_point3(p), p);
    }

    #[test]
    fn rotations_compose_extrinsically() {
        // +90° about X then +90° about Z, both in world axes:
        // +Y -> +Z (X rotation leaves Z-result alone afterward)...
        let mut t = ProjectionTransform::identity();
        t.push_rotation(Axis::X, FRAC_PI_2);
        t.push_rotation(Axis::Z, FRAC_PI_2);
        let m = t.to_matrix();
        // X rot: (0,1,0) -> (0,0,1); Z rot leaves (0,0,1) fixed.
        assert_vec_close(m.transform_point3(DVec3::Y), DVec3::Z);
        // X rot: (1,0,0) fixed; Z rot: (1,0,0) -> (0,1,0).
        assert_vec_close(m.transform_point3(DVec3::X), DVec3::Y);
    }

    #[test]
    fn scale_applies_in_local_frame_before_rotation() {
        let mut t = ProjectionTransform::identity();
        t.scale = DVec3::new(0.5, 1.0, 0.5);
        t.push_rotation(Axis::Z, FRAC_PI_2);
        let m = t.to_matrix();
        // Local (1,0,0) scales to (0.5,0,0), then rotates to (0,0.5,0).
        assert_vec_close(
            m.transform_point3(DVec3::X),
            DVec3::new(0.0, 0.5, 0.0),
        );
        // Local Y is unscaled and rotates onto -X.
        assert_vec_close(m.transform_point3(DVec3::Y), DVec3::NEG_X);
    }
}
