use std::cmp::Ordering;

use super::model::IndustryRecord;
use super::salary::parse_amount;

// ---------------------------------------------------------------------------
// Ranking – highest median wage first
// ---------------------------------------------------------------------------

/// Compare two industry rows by parsed median annual wage, highest first.
///
/// A wage that does not parse compares as the lowest possible value, so
/// rows with missing or malformed medians sink to the bottom; the stored
/// string is never touched. Equal wages compare `Equal` and leave the
/// tie to the sort's input order.
pub fn by_wage_descending(a: &IndustryRecord, b: &IndustryRecord) -> Ordering {
    let a_wage = parse_amount(&a.a_median).unwrap_or(i64::MIN);
    let b_wage = parse_amount(&b.a_median).unwrap_or(i64::MIN);
    b_wage.cmp(&a_wage)
}

/// Order a working set of industry indices by descending median wage.
///
/// `sort_by` is a stable sort; combined with the comparator's `Equal` on
/// ties this keeps equal-wage rows in their original relative order, so
/// the ranking is deterministic.
pub fn rank_by_wage(industries: &[IndustryRecord], mut working: Vec<usize>) -> Vec<usize> {
    working.sort_by(|&a, &b| by_wage_descending(&industries[a], &industries[b]));
    working
}
