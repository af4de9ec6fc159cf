//! Projection-surface alignment strategies.
//!
//! The Transverse Mercator strategy aligns a canonical cylinder (axis along
//! local Y, tangent circle of radius equal to the ellipsoid semi-major axis,
//! centered at the origin) to a zone's central meridian, latitude of origin,
//! and scale factor. Lambert Conformal Conic and Oblique Mercator zones are
//! surfaced as an explicit unsupported error until their strategies exist;
//! they plug in as siblings without changing the caller interface.

use std::f64::consts::FRAC_PI_2;

use glam::DVec3;

use super::transform::{Axis, ProjectionTransform};
use crate::angle;
use crate::error::StateplaneError;
use crate::zones::{ProjectionKind, ProjectionParams, TmParams, ZoneRecord};

/// The signed values an alignment derived from a record, for human-readable
/// reporting alongside the raw transform.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AlignmentReport {
    /// Signed central meridian in degrees (east positive), when parsable.
    pub central_meridian_deg: Option<f64>,
    /// Signed latitude of origin in degrees (north positive), when
    /// parsable.
    pub latitude_of_origin_deg: Option<f64>,
    /// Derived scale factor `1 - 1/D`, when the record carries a usable
    /// denominator.
    pub scale_factor: Option<f64>,
}

/// A derived surface alignment: the transform for the rendering layer plus
/// the report for display.
#[derive(Debug, Clone, PartialEq)]
pub struct Alignment {
    /// Ordered rotations and scale to apply to the canonical surface.
    pub transform: ProjectionTransform,
    /// The signed angles and scale factor that produced it.
    pub report: AlignmentReport,
}

/// A per-projection-kind alignment strategy.
pub trait SurfaceAligner {
    /// The projection kind this strategy handles.
    fn kind(&self) -> ProjectionKind;

    /// Derive the alignment for a zone record.
    ///
    /// # Errors
    ///
    /// [`StateplaneError::UnsupportedProjection`] when the record's
    /// parameters belong to a different projection kind.
    fn align(&self, record: &ZoneRecord) -> Result<Alignment, StateplaneError>;
}

/// Aligns the canonical Transverse Mercator cylinder.
#[derive(Debug, Clone, Copy, Default)]
pub struct TransverseMercatorAligner;

impl SurfaceAligner for TransverseMercatorAligner {
    fn kind(&self) -> ProjectionKind {
        ProjectionKind::TransverseMercator
    }

    fn align(&self, record: &ZoneRecord) -> Result<Alignment, StateplaneError> {
        let ProjectionParams::TransverseMercator(tm) = &record.params else {
            return Err(StateplaneError::UnsupportedProjection(record.kind()));
        };
        Ok(align_cylinder(&record.code, tm))
    }
}

/// Align a projection surface to a zone, dispatching on its projection kind.
///
/// # Errors
///
/// [`StateplaneError::UnsupportedProjection`] for LCC and OM zones, whose
/// surface strategies are not implemented.
pub fn align_zone(record: &ZoneRecord) -> Result<Alignment, StateplaneError> {
    match record.kind() {
        ProjectionKind::TransverseMercator => {
            TransverseMercatorAligner.align(record)
        }
        kind => Err(StateplaneError::UnsupportedProjection(kind)),
    }
}

/// Build the cylinder alignment for TM parameters.
///
/// Every step degrades gracefully: an absent or unparsable parameter
/// contributes no rotation or scale, and the remaining steps still apply.
fn align_cylinder(code: &str, tm: &TmParams) -> Alignment {
    let mut transform = ProjectionTransform::identity();
    let mut report = AlignmentReport::default();

    // Base alignment: the canonical cylinder axis into the polar-axis
    // convention (+Y pole, +Z prime meridian).
    transform.push_rotation(Axis::X, FRAC_PI_2);
    transform.push_rotation(Axis::Z, FRAC_PI_2);

    // Central meridian turns the cylinder about the polar axis. The negated
    // angle is a fixed convention of the base alignment above: positive
    // rotation in this frame runs opposite geographic east.
    match angle::parse(tm.central_meridian.as_deref()).signed_degrees() {
        Some(deg) => {
            transform.push_rotation(Axis::Z, -deg.to_radians());
            report.central_meridian_deg = Some(deg);
        }
        None => {
            log::debug!("zone {code}: central meridian unparsable; skipping");
        }
    }

    // Latitude of origin tilts the tangent line off the equator.
    match angle::parse(tm.latitude_of_origin.as_deref()).signed_degrees() {
        Some(deg) => {
            transform.push_rotation(Axis::Y, deg.to_radians());
            report.latitude_of_origin_deg = Some(deg);
        }
        None => {
            log::debug!("zone {code}: latitude of origin unparsable; skipping");
        }
    }

    // Scale shrinks the cylinder cross-section so it cuts the ellipsoid as
    // a secant; the axial length (local Y) is unaffected.
    match tm.scale_factor_denominator.and_then(|d| d.scale_factor()) {
        Some(factor) => {
            transform.scale = DVec3::new(factor, 1.0, factor);
            report.scale_factor = Some(factor);
        }
        None => {
            log::debug!("zone {code}: no scale denominator; cylinder stays tangent");
        }
    }

    Alignment { transform, report }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geodesy::Datum;
    use crate::zones;

    fn tm_record(json: &str) -> ZoneRecord {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn alaska3_alignment_matches_convention() {
        // CM 146°W, lat0 54°N, 1/10000: +146° about Z, +54° about Y,
        // scale (0.9999, 1, 0.9999).
        let record = zones::lookup("5003", Datum::Nad83).unwrap();
        let alignment = align_zone(record).unwrap();

        let steps = &alignment.transform.rotations;
        assert_eq!(steps.len(), 4);
        assert_eq!(steps[0].axis, Axis::X);
        assert!((steps[0].angle_rad - FRAC_PI_2).abs() < 1e-12);
        assert_eq!(steps[1].axis, Axis::Z);
        assert!((steps[1].angle_rad - FRAC_PI_2).abs() < 1e-12);
        assert_eq!(steps[2].axis, Axis::Z);
        assert!((steps[2].angle_rad - 146.0f64.to_radians()).abs() < 1e-12);
        assert_eq!(steps[3].axis, Axis::Y);
        assert!((steps[3].angle_rad - 54.0f64.to_radians()).abs() < 1e-12);

        let scale = alignment.transform.scale;
        assert!((scale.x - 0.9999).abs() < 1e-12);
        assert!((scale.y - 1.0).abs() < 1e-12);
        assert!((scale.z - 0.9999).abs() < 1e-12);

        assert_eq!(alignment.report.central_meridian_deg, Some(-146.0));
        assert_eq!(alignment.report.latitude_of_origin_deg, Some(54.0));
        assert!((alignment.report.scale_factor.unwrap() - 0.9999).abs() < 1e-12);
    }

    #[test]
    fn eastern_meridian_would_rotate_negative() {
        let record = tm_record(
            r#"{ "name": "East test", "projection": "TM",
                 "centralMeridian": "85 50 E",
                 "latitudeOfOrigin": "30 30 N" }"#,
        );
        let alignment = align_zone(&record).unwrap();
        let cm_step = alignment.transform.rotations[2];
        assert_eq!(cm_step.axis, Axis::Z);
        assert!(cm_step.angle_rad < 0.0);
    }

    #[test]
    fn missing_parameters_are_skipped_not_fatal() {
        let record = tm_record(
            r#"{ "name": "Bare", "projection": "TM" }"#,
        );
        let alignment = align_zone(&record).unwrap();
        // Only the two base rotations remain.
        assert_eq!(alignment.transform.rotations.len(), 2);
        assert_eq!(alignment.transform.scale, DVec3::ONE);
        assert_eq!(alignment.report, AlignmentReport::default());
    }

    #[test]
    fn unparsable_angle_is_skipped() {
        let record = tm_record(
            r#"{ "name": "Odd", "projection": "TM",
                 "centralMeridian": "somewhere west",
                 "latitudeOfOrigin": "54 00 N",
                 "scaleFactorDenominator": 10000 }"#,
        );
        let alignment = align_zone(&record).unwrap();
        assert_eq!(alignment.report.central_meridian_deg, None);
        assert_eq!(alignment.report.latitude_of_origin_deg, Some(54.0));
        // Three rotations: base pair plus latitude of origin.
        assert_eq!(alignment.transform.rotations.len(), 3);
    }

    #[test]
    fn lcc_zone_is_unsupported() {
        let record = zones::lookup("0401", Datum::Nad83).unwrap();
        let err = align_zone(record).unwrap_err();
        assert!(matches!(
            err,
            StateplaneError::UnsupportedProjection(
                ProjectionKind::LambertConformalConic
            )
        ));
    }

    #[test]
    fn om_zone_is_unsupported() {
        let record = zones::lookup("5001", Datum::Nad83).unwrap();
        assert!(matches!(
            align_zone(record),
            Err(StateplaneError::UnsupportedProjection(
                ProjectionKind::ObliqueMercator
            ))
        ));
    }

    #[test]
    fn tm_aligner_rejects_foreign_params() {
        let record = zones::lookup("0401", Datum::Nad83).unwrap();
        assert!(TransverseMercatorAligner.align(record).is_err());
    }
}
