//! Read-only zone parameter repository.
//!
//! The defining-parameter tables for both datums are embedded at compile
//! time and parsed once on first access. Lookup never fails: an unknown
//! datum or code is an absence, not an error.

use std::sync::OnceLock;

use rustc_hash::FxHashMap;

use super::record::ZoneRecord;
use crate::geodesy::Datum;

static TABLES: OnceLock<FxHashMap<Datum, FxHashMap<String, ZoneRecord>>> =
    OnceLock::new();

const SPCS83_JSON: &str = include_str!("../../data/spcs83.json");
const SPCS27_JSON: &str = include_str!("../../data/spcs27.json");

/// A regional zone code before normalization.
///
/// Callers hand codes over as strings (from GeoJSON feed properties) or as
/// numbers (FIPS integers); both normalize to the 4-digit zero-padded form
/// the tables are keyed by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ZoneCode {
    /// A textual code, possibly shorter than 4 characters.
    Text(String),
    /// A numeric FIPS code.
    Number(u32),
}

impl ZoneCode {
    /// The canonical 4-character zero-padded key.
    #[must_use]
    pub fn normalized(&self) -> String {
        match self {
            Self::Number(n) => format!("{n:04}"),
            Self::Text(text) => {
                let trimmed = text.trim();
                if trimmed.len() >= 4 {
                    trimmed.to_owned()
                } else {
                    format!("{trimmed:0>4}")
                }
            }
        }
    }
}

impl From<u32> for ZoneCode {
    fn from(n: u32) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for ZoneCode {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<String> for ZoneCode {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

/// Resolve a zone parameter record for a regional code within a datum.
///
/// Returns `None` for a code the datum's table does not carry.
pub fn lookup(
    code: impl Into<ZoneCode>,
    datum: Datum,
) -> Option<&'static ZoneRecord> {
    let key = code.into().normalized();
    tables().get(&datum)?.get(&key)
}

/// Resolve with a datum given by name, as the zone-boundary feed spells it.
///
/// An unknown datum name resolves to `None`, matching the treatment of an
/// unknown code.
pub fn lookup_by_datum_name(
    code: impl Into<ZoneCode>,
    datum_name: &str,
) -> Option<&'static ZoneRecord> {
    let datum: Datum = datum_name.parse().ok()?;
    lookup(code, datum)
}

/// Number of records loaded for a datum. Zero for a datum whose embedded
/// table failed to parse.
#[must_use]
pub fn record_count(datum: Datum) -> usize {
    tables().get(&datum).map_or(0, FxHashMap::len)
}

fn tables() -> &'static FxHashMap<Datum, FxHashMap<String, ZoneRecord>> {
    TABLES.get_or_init(|| {
        let mut tables = FxHashMap::default();
        let _ = tables.insert(Datum::Nad83, load_table(Datum::Nad83, SPCS83_JSON));
        let _ = tables.insert(Datum::Nad27, load_table(Datum::Nad27, SPCS27_JSON));
        tables
    })
}

/// Parse one embedded dataset. A malformed dataset is a build defect; it is
/// reported and yields an empty table rather than failing lookups.
fn load_table(datum: Datum, json: &str) -> FxHashMap<String, ZoneRecord> {
    match serde_json::from_str::<FxHashMap<String, ZoneRecord>>(json) {
        Ok(mut records) => {
            for (code, record) in &mut records {
                record.code.clone_from(code);
            }
            log::debug!("loaded {} {datum} zone records", records.len());
            records
        }
        Err(err) => {
            log::error!("embedded {datum} zone dataset failed to parse: {err}");
            FxHashMap::default()
        }
    }
}
