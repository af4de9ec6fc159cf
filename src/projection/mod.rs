//! Projection-surface alignment: transform value objects and per-kind
//! alignment strategies.

mod aligner;
mod transform;

pub use aligner::{
    align_zone, Alignment, AlignmentReport, SurfaceAligner,
    TransverseMercatorAligner,
};
pub use transform::{Axis, ProjectionTransform, RotationStep};
