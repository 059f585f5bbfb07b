use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::de::DeserializeOwned;

use super::model::{Catalog, EducationRecord, IndustryRecord, SectorRecord};

// ---------------------------------------------------------------------------
// Bundled catalog
// ---------------------------------------------------------------------------

// BLS May-2023 OES extracts shipped inside the binary so the app runs with
// no files on disk. File → Open can swap in a newer drop at runtime.
const INDUSTRIES_CSV: &str = include_str!("../../data/industries.csv");
const SECTORS_CSV: &str = include_str!("../../data/sectors.csv");
const EDUCATION_CSV: &str = include_str!("../../data/education.csv");

/// Parse the catalog that ships with the application.
pub fn bundled() -> Result<Catalog> {
    let industries = parse_csv(INDUSTRIES_CSV).context("bundled industries.csv")?;
    let sectors = parse_csv(SECTORS_CSV).context("bundled sectors.csv")?;
    let education = parse_csv(EDUCATION_CSV).context("bundled education.csv")?;

    let catalog = Catalog::from_parts(industries, sectors, education)?;
    log::info!(
        "bundled catalog: {} industries, {} sectors, {} education levels",
        catalog.industries.len(),
        catalog.sectors.len(),
        catalog.education.len()
    );
    Ok(catalog)
}

// ---------------------------------------------------------------------------
// Replacement catalog from a data directory
// ---------------------------------------------------------------------------

/// Load a replacement catalog from a directory.
///
/// The directory must hold the three datasets `industries`, `sectors` and
/// `education`, each as a `.csv` or `.json` file (CSV wins when both
/// exist). Column/field names follow the BLS extracts, e.g. for
/// industries: `naics,naics_name,education_category,a_median,a_pct25,
/// a_pct75,tot_emp`.
pub fn load_dir(dir: &Path) -> Result<Catalog> {
    let industries: Vec<IndustryRecord> = load_table(dir, "industries")?;
    let sectors: Vec<SectorRecord> = load_table(dir, "sectors")?;
    let education: Vec<EducationRecord> = load_table(dir, "education")?;

    let catalog = Catalog::from_parts(industries, sectors, education)?;
    log::info!(
        "catalog from {}: {} industries, {} sectors, {} education levels",
        dir.display(),
        catalog.industries.len(),
        catalog.sectors.len(),
        catalog.education.len()
    );
    Ok(catalog)
}

/// Locate `<stem>.csv` or `<stem>.json` under `dir` and parse it.
fn load_table<T: DeserializeOwned>(dir: &Path, stem: &str) -> Result<Vec<T>> {
    let csv_path = dir.join(format!("{stem}.csv"));
    if csv_path.is_file() {
        let text = std::fs::read_to_string(&csv_path)
            .with_context(|| format!("reading {}", csv_path.display()))?;
        return parse_csv(&text).with_context(|| format!("parsing {}", csv_path.display()));
    }

    let json_path = dir.join(format!("{stem}.json"));
    if json_path.is_file() {
        let text = std::fs::read_to_string(&json_path)
            .with_context(|| format!("reading {}", json_path.display()))?;
        return parse_json(&text).with_context(|| format!("parsing {}", json_path.display()));
    }

    bail!("no {stem}.csv or {stem}.json in {}", dir.display());
}

// ---------------------------------------------------------------------------
// Format parsers
// ---------------------------------------------------------------------------

/// Parse one dataset from CSV text. First row is the header; dollar and
/// employment figures stay quoted strings (`"46,940"`), the `"#"`
/// sentinel included.
fn parse_csv<T: DeserializeOwned>(text: &str) -> Result<Vec<T>> {
    let mut reader = csv::Reader::from_reader(text.as_bytes());
    let mut rows = Vec::new();
    for (row_no, result) in reader.deserialize::<T>().enumerate() {
        let row = result.with_context(|| format!("CSV row {}", row_no + 1))?;
        rows.push(row);
    }
    Ok(rows)
}

/// Parse one dataset from records-oriented JSON: a top-level array of
/// objects keyed by the CSV column names, e.g.
///
/// ```json
/// [
///   {
///     "naics": "3118",
///     "naics_name": "Bakeries and Tortilla Manufacturing",
///     "education_category": "No formal educational credential",
///     "a_median": "34,950",
///     "a_pct25": "29,390",
///     "a_pct75": "43,230",
///     "tot_emp": "292,100"
///   }
/// ]
/// ```
fn parse_json<T: DeserializeOwned>(text: &str) -> Result<Vec<T>> {
    serde_json::from_str(text).context("parsing JSON records")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_industry_rows_from_csv() {
        let text = "\
naics,naics_name,education_category,a_median,a_pct25,a_pct75,tot_emp
3118,Bakeries and Tortilla Manufacturing,No formal educational credential,\"34,950\",\"29,390\",\"43,230\",\"292,100\"
5413,Architectural and Engineering Services,Bachelor's degree,\"91,740\",#,#,\"1,037,110\"
";
        let rows: Vec<IndustryRecord> = parse_csv(text).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].naics, "3118");
        assert_eq!(rows[0].a_median, "34,950");
        assert_eq!(rows[1].a_pct25, "#");
    }

    #[test]
    fn parses_sector_and_education_rows_from_csv() {
        let sectors: Vec<SectorRecord> = parse_csv(
            "naics,naics_name\n31-33,Manufacturing\n11,\"Agriculture, Forestry, Fishing and Hunting\"\n",
        )
        .unwrap();
        assert_eq!(sectors[0].naics, "31-33");
        assert_eq!(
            sectors[1].naics_name,
            "Agriculture, Forestry, Fishing and Hunting"
        );

        let education: Vec<EducationRecord> =
            parse_csv("education_category,rank\nBachelor's degree,5\n").unwrap();
        assert_eq!(education[0].rank, 5);
    }

    #[test]
    fn rejects_csv_with_missing_columns() {
        let text = "naics,naics_name\n3118,Bakeries\n";
        assert!(parse_csv::<IndustryRecord>(text).is_err());
    }

    #[test]
    fn parses_records_oriented_json() {
        let text = r#"[{"naics": "52", "naics_name": "Finance and Insurance"}]"#;
        let rows: Vec<SectorRecord> = parse_json(text).unwrap();
        assert_eq!(rows[0].naics, "52");
    }

    #[test]
    fn bundled_catalog_loads_and_validates() {
        let catalog = bundled().unwrap();
        assert!(!catalog.is_empty());
        assert!(!catalog.sectors.is_empty());
        assert!(!catalog.education.is_empty());
        assert!(catalog.sector_names.contains(&"Manufacturing".to_string()));
    }

    #[test]
    fn loads_a_catalog_directory_with_mixed_formats() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("industries.csv"),
            "naics,naics_name,education_category,a_median,a_pct25,a_pct75,tot_emp\n\
             3118,Bakeries,No formal educational credential,\"34,950\",#,#,\"292,100\"\n",
        )
        .unwrap();
        std::fs::write(
            dir.path().join("sectors.json"),
            r#"[{"naics": "31-33", "naics_name": "Manufacturing"}]"#,
        )
        .unwrap();
        std::fs::write(
            dir.path().join("education.csv"),
            "education_category,rank\nNo formal educational credential,1\n",
        )
        .unwrap();

        let catalog = load_dir(dir.path()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.sector_names, vec!["Manufacturing"]);
    }

    #[test]
    fn missing_dataset_file_is_reported_by_name() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_dir(dir.path()).unwrap_err();
        assert!(err.to_string().contains("industries"));
    }
}
