//! Canonical entity keys for counties and the national aggregate.
//!
//! Source tables spell the same county several ways (diacritics, casing,
//! stray whitespace) and mark nationwide rows with a handful of labels.
//! Everything downstream groups and joins on the canonical key produced
//! here, so normalization happens exactly once, at the table boundary.

use std::fmt;

use serde::Serialize;

/// Canonical key of the nationwide aggregate pseudo-entity
pub const NATIONAL_AGGREGATE: &str = "Romania";

/// Canonical keys of the six counties of the Centru development region
pub const FOCUS_COUNTIES: [&str; 6] = ["Alba", "Brasov", "Covasna", "Harghita", "Mures", "Sibiu"];

/// Diacritic-folded spellings that mark a nationwide aggregate row
const AGGREGATE_LABELS: [&str; 3] = ["TOTAL", "MEDIA ROMANIA", "ROMANIA"];

/// Folded spelling to canonical key for the focus counties
const COUNTY_TABLE: [(&str, &str); 6] = [
    ("ALBA", "Alba"),
    ("BRASOV", "Brasov"),
    ("COVASNA", "Covasna"),
    ("HARGHITA", "Harghita"),
    ("MURES", "Mures"),
    ("SIBIU", "Sibiu"),
];

/// Canonical identifier of a county or of the national aggregate.
///
/// Keys are produced by [`canonicalize`]; two raw labels compare equal
/// exactly when they refer to the same entity.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct EntityKey(String);

impl EntityKey {
    fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The canonical label as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for the nationwide aggregate pseudo-entity
    pub fn is_aggregate(&self) -> bool {
        self.0 == NATIONAL_AGGREGATE
    }

    /// True for one of the six Centru-region counties
    pub fn is_focus_county(&self) -> bool {
        FOCUS_COUNTIES.contains(&self.0.as_str())
    }
}

impl fmt::Display for EntityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for EntityKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Maps a raw entity label to its canonical key.
///
/// Matching is insensitive to case, Romanian diacritics and surrounding or
/// repeated whitespace. Aggregate labels ("TOTAL", "Media Romania" and
/// spelling variants) map to [`NATIONAL_AGGREGATE`], which is distinct from
/// every county. Labels that match neither an aggregate spelling nor a focus
/// county pass through unchanged apart from trimming.
pub fn canonicalize(name: &str) -> EntityKey {
    let folded = fold(name);
    if AGGREGATE_LABELS.contains(&folded.as_str()) {
        return EntityKey::new(NATIONAL_AGGREGATE);
    }
    for (variant, canonical) in COUNTY_TABLE {
        if folded == variant {
            return EntityKey::new(canonical);
        }
    }
    EntityKey::new(name.trim())
}

/// Uppercases, strips Romanian diacritics and collapses whitespace runs
fn fold(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for (i, word) in name.split_whitespace().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        for ch in word.chars() {
            out.push(match ch {
                'ă' | 'Ă' | 'â' | 'Â' => 'A',
                'î' | 'Î' => 'I',
                'ș' | 'Ș' | 'ş' | 'Ş' => 'S',
                'ț' | 'Ț' | 'ţ' | 'Ţ' => 'T',
                _ => ch.to_ascii_uppercase(),
            });
        }
    }
    out
}
