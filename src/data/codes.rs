use std::collections::BTreeSet;

use thiserror::Error;

use super::model::SectorRecord;

// ---------------------------------------------------------------------------
// NAICS code expansion
// ---------------------------------------------------------------------------

/// Error for a hyphenated classification code whose bounds cannot be
/// expanded (non-numeric, or upper bound below lower).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot expand code range '{0}'")]
pub struct BadCodeRange(pub String);

/// Expand one sector code into the individual codes it covers.
///
/// Some sectors carry a single code (`"11"` → `["11"]`), others an
/// inclusive range (`"31-33"` → `["31", "32", "33"]`). Range bounds are
/// stringified back without re-padding. A range that does not parse is a
/// data defect and is returned as an error rather than expanded to
/// something nonsensical.
pub fn expand_code(code: &str) -> Result<Vec<String>, BadCodeRange> {
    let Some((low, high)) = code.split_once('-') else {
        return Ok(vec![code.to_string()]);
    };

    let bad = || BadCodeRange(code.to_string());
    let low: u32 = low.trim().parse().map_err(|_| bad())?;
    let high: u32 = high.trim().parse().map_err(|_| bad())?;
    if low > high {
        return Err(bad());
    }

    Ok((low..=high).map(|n| n.to_string()).collect())
}

// ---------------------------------------------------------------------------
// Sector name → code resolution
// ---------------------------------------------------------------------------

/// Resolve the sector names a user picked into the set of NAICS code
/// prefixes they denote.
///
/// Records whose name is not selected are ignored; duplicate codes (one
/// sector split over several rows) collapse via the set. A record with an
/// unexpandable code is skipped with a warning rather than guessed at;
/// [`super::model::Catalog`] already rejects such data at load time.
pub fn resolve_sector_codes(
    selected: &BTreeSet<String>,
    sectors: &[SectorRecord],
) -> BTreeSet<String> {
    let distinct_codes: BTreeSet<&str> = sectors
        .iter()
        .filter(|s| selected.contains(&s.naics_name))
        .map(|s| s.naics.as_str())
        .collect();

    let mut resolved = BTreeSet::new();
    for code in distinct_codes {
        match expand_code(code) {
            Ok(expanded) => resolved.extend(expanded),
            Err(err) => log::warn!("skipping sector code: {err}"),
        }
    }
    resolved
}

// ---------------------------------------------------------------------------
// Industry ↔ sector code matching
// ---------------------------------------------------------------------------

/// Whether an industry code falls under any of the resolved sector codes.
///
/// Matching is by string prefix, not equality: sector codes are shorter
/// than industry codes, so sector `"31"` must cover industry `"3118"`.
pub fn matches_any_code(naics: &str, codes: &BTreeSet<String>) -> bool {
    codes.iter().any(|code| naics.starts_with(code.as_str()))
}
