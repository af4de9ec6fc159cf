//! Zone parameter records, the embedded repository, and feed fallback.

mod record;
mod repository;
mod source;

pub use record::{
    LccParams, OmParams, ProjectionKind, ProjectionParams, ScaleDenominator,
    TmParams, Units, ZoneRecord,
};
pub use repository::{lookup, lookup_by_datum_name, record_count, ZoneCode};
pub use source::{FeedProperties, ZoneInfo};
