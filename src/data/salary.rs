// ---------------------------------------------------------------------------
// Salary strings – parsing and threshold comparison
// ---------------------------------------------------------------------------

/// Parse a human-formatted dollar amount (`"46,940"`, `"52000"`) into a
/// comparable integer. Returns `None` for anything that is not a plain
/// integer after stripping thousands separators — including the empty
/// string and the `"#"` not-available sentinel — so malformed data can
/// never satisfy a comparison.
pub fn parse_amount(raw: &str) -> Option<i64> {
    raw.trim().replace(',', "").parse::<i64>().ok()
}

/// Whether `salary` is at or above `minimum`. Both operands go through
/// [`parse_amount`]; if either fails to parse the answer is `false`
/// (fail closed).
pub fn meets_minimum(minimum: &str, salary: &str) -> bool {
    match (parse_amount(minimum), parse_amount(salary)) {
        (Some(min), Some(sal)) => sal >= min,
        _ => false,
    }
}
