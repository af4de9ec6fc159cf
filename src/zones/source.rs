//! Zone information resolution: database record vs zone-boundary feed.
//!
//! The zone-boundary GeoJSON feed only carries a FIPS code and a display
//! name. When the parameter database has a record for that code the record
//! wins; otherwise the feed properties stand alone and the visualization
//! falls back to name-only display.

use serde::Deserialize;

use super::record::{ProjectionParams, ZoneRecord};
use super::repository;
use crate::angle;
use crate::geodesy::Datum;

/// The properties the zone-boundary feed attaches to each zone polygon.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FeedProperties {
    /// Regional FIPS code as the feed spells it (not yet zero-padded).
    #[serde(alias = "FIPSZONE")]
    pub fips: String,
    /// Zone display name.
    #[serde(alias = "ZONENAME", alias = "ZONE")]
    pub name: String,
}

/// Resolved zone information with explicit provenance.
#[derive(Debug, Clone, PartialEq)]
pub enum ZoneInfo {
    /// A full parameter record from the embedded database.
    Database(&'static ZoneRecord),
    /// Feed properties only; no database record for this code.
    Feed(FeedProperties),
}

impl ZoneInfo {
    /// Resolve feed properties against the parameter database for a datum.
    /// The database record takes precedence when present.
    #[must_use]
    pub fn resolve(feed: FeedProperties, datum: Datum) -> Self {
        match repository::lookup(feed.fips.as_str(), datum) {
            Some(record) => Self::Database(record),
            None => {
                log::debug!(
                    "no {datum} parameter record for zone {}; using feed properties",
                    feed.fips
                );
                Self::Feed(feed)
            }
        }
    }

    /// The zone display name, whichever source it came from.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Database(record) => &record.name,
            Self::Feed(feed) => &feed.name,
        }
    }

    /// Human-readable summary lines for popup display. Angle fields render
    /// through the DMS codec; absent fields render as `"not specified"`.
    #[must_use]
    pub fn describe(&self) -> Vec<String> {
        match self {
            Self::Feed(feed) => {
                vec![feed.name.clone(), format!("FIPS {}", feed.fips)]
            }
            Self::Database(record) => describe_record(record),
        }
    }
}

fn describe_record(record: &ZoneRecord) -> Vec<String> {
    let mut lines = vec![
        record.name.clone(),
        format!("Projection: {}", record.kind()),
    ];
    match &record.params {
        ProjectionParams::TransverseMercator(tm) => {
            lines.push(format!(
                "Central meridian: {}",
                angle::parse(tm.central_meridian.as_deref())
            ));
            lines.push(format!(
                "Latitude of origin: {}",
                angle::parse(tm.latitude_of_origin.as_deref())
            ));
            if let Some(factor) = tm
                .scale_factor_denominator
                .and_then(|d| d.scale_factor())
            {
                lines.push(format!("Scale factor: {factor:.6}"));
            }
        }
        ProjectionParams::LambertConformalConic(lcc) => {
            lines.push(format!(
                "Longitude of origin: {}",
                angle::parse(lcc.longitude_of_origin.as_deref())
            ));
            lines.push(format!(
                "Standard parallels: {}, {}",
                angle::parse(lcc.standard_parallel_1.as_deref()),
                angle::parse(lcc.standard_parallel_2.as_deref())
            ));
        }
        ProjectionParams::ObliqueMercator(om) => {
            lines.push(format!(
                "Center: {}, {}",
                angle::parse(om.latitude_of_center.as_deref()),
                angle::parse(om.longitude_of_center.as_deref())
            ));
        }
    }
    lines
}
