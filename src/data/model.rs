use std::collections::BTreeSet;

use serde::Deserialize;
use thiserror::Error;

use super::codes::{expand_code, BadCodeRange};

// ---------------------------------------------------------------------------
// Records – one row each of the three BLS source tables
// ---------------------------------------------------------------------------

/// The BLS placeholder for a figure that was not published. It is kept
/// verbatim in the record fields and shown verbatim in the UI.
pub const NOT_AVAILABLE: &str = "#";

/// One industry × entry-level-education row of the BLS OES wage table.
///
/// Wage and employment figures keep the human formatting of the source data
/// (thousands separators, `"#"` for "estimate not available"). Comparisons
/// must go through [`super::salary`], never parse these fields directly.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct IndustryRecord {
    /// NAICS industry code, more specific (longer) than a sector code.
    pub naics: String,
    pub naics_name: String,
    /// Typical entry-level education requirement for this row.
    pub education_category: String,
    /// Median annual wage, e.g. `"46,940"`.
    pub a_median: String,
    /// 25th percentile annual wage, or `"#"` when not available.
    pub a_pct25: String,
    /// 75th percentile annual wage, or `"#"` when not available.
    pub a_pct75: String,
    /// National employment count at this level, e.g. `"163,540"`.
    pub tot_emp: String,
}

/// One NAICS sector. `naics` is either a single two-digit code (`"11"`) or
/// an inclusive range (`"31-33"`). A sector name may span several records.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SectorRecord {
    pub naics: String,
    pub naics_name: String,
}

/// One education level of the ordered BLS catalog. `rank` runs from least
/// schooling (1) upward; filtering only needs the category string, the
/// ordering drives the dropdown.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EducationRecord {
    pub education_category: String,
    pub rank: u8,
}

// ---------------------------------------------------------------------------
// Catalog – the complete loaded dataset
// ---------------------------------------------------------------------------

/// Problems detected while assembling a [`Catalog`].
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("sector '{name}': {source}")]
    InvalidSectorCode {
        name: String,
        #[source]
        source: BadCodeRange,
    },
}

/// The three read-only record collections the session searches over, with
/// the derived indexes the UI needs.
#[derive(Debug, Clone)]
pub struct Catalog {
    /// All industry rows, in source order.
    pub industries: Vec<IndustryRecord>,
    /// Sector name → code mapping rows.
    pub sectors: Vec<SectorRecord>,
    /// Education levels, sorted ascending by `rank`.
    pub education: Vec<EducationRecord>,
    /// Unique sector display names, sorted — the checkbox list.
    pub sector_names: Vec<String>,
}

impl Catalog {
    /// Assemble a catalog from freshly parsed rows.
    ///
    /// Fails fast on a sector code that cannot be expanded (non-numeric or
    /// inverted range) so bad data is caught at load time, not mid-search.
    /// Industry codes that fall under no sector are not fatal — the sector
    /// filter silently never matches them — but each one is logged so the
    /// mismatch is visible.
    pub fn from_parts(
        industries: Vec<IndustryRecord>,
        sectors: Vec<SectorRecord>,
        mut education: Vec<EducationRecord>,
    ) -> Result<Self, CatalogError> {
        let mut all_codes: BTreeSet<String> = BTreeSet::new();
        for sector in &sectors {
            let expanded =
                expand_code(&sector.naics).map_err(|source| CatalogError::InvalidSectorCode {
                    name: sector.naics_name.clone(),
                    source,
                })?;
            all_codes.extend(expanded);
        }

        for industry in &industries {
            if !all_codes.iter().any(|code| industry.naics.starts_with(code)) {
                log::warn!(
                    "industry {} ({}) falls under no sector code",
                    industry.naics,
                    industry.naics_name
                );
            }
        }

        let sector_names: Vec<String> = sectors
            .iter()
            .map(|s| s.naics_name.clone())
            .collect::<BTreeSet<String>>()
            .into_iter()
            .collect();

        education.sort_by_key(|lvl| lvl.rank);

        Ok(Catalog {
            industries,
            sectors,
            education,
            sector_names,
        })
    }

    /// Number of industry rows.
    pub fn len(&self) -> usize {
        self.industries.len()
    }

    /// Whether the catalog holds no industry rows.
    pub fn is_empty(&self) -> bool {
        self.industries.is_empty()
    }
}
