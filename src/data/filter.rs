use std::collections::BTreeSet;

use super::codes::{matches_any_code, resolve_sector_codes};
use super::model::Catalog;
use super::rank::rank_by_wage;
use super::salary::meets_minimum;

// ---------------------------------------------------------------------------
// Tri-state criteria
// ---------------------------------------------------------------------------

/// One wizard answer.
///
/// Distinguishes "question not reached yet" from "user moved past it":
/// an explicit skip — or an answered-but-empty value — means "no
/// constraint", while a pending question blocks the search from running
/// at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Answer<T> {
    /// Question not answered yet.
    #[default]
    Pending,
    /// Question explicitly skipped; its filter must not apply.
    Skipped,
    /// Question answered. An empty value is a valid answer and also
    /// constrains nothing.
    Value(T),
}

impl<T> Answer<T> {
    /// Whether the question has been resolved either way.
    pub fn is_resolved(&self) -> bool {
        !matches!(self, Answer::Pending)
    }

    /// The answered value, if one was given.
    pub fn provided(&self) -> Option<&T> {
        match self {
            Answer::Value(value) => Some(value),
            _ => None,
        }
    }
}

/// The three search criteria collected by the wizard, each independently
/// tri-state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchCriteria {
    pub education: Answer<String>,
    pub min_salary: Answer<String>,
    pub sectors: Answer<BTreeSet<String>>,
}

impl SearchCriteria {
    /// Whether every question has been answered or skipped, i.e. the
    /// search may run.
    pub fn is_complete(&self) -> bool {
        self.education.is_resolved() && self.min_salary.is_resolved() && self.sectors.is_resolved()
    }
}

// ---------------------------------------------------------------------------
// The search pipeline
// ---------------------------------------------------------------------------

/// Filter the catalog's industries by the supplied criteria, then rank the
/// survivors by descending median wage. This is the one entry point the
/// session calls once all three criteria are resolved.
///
/// Stages apply in a fixed order per row — education (exact category
/// match), sector (selected names resolved to NAICS prefixes, matched by
/// prefix), minimum salary (threshold on the parsed median) — and a stage
/// participates only when its criterion holds a non-empty value. The pass
/// is stable and keeps each row at most once, however many sector codes
/// cover it.
///
/// Pure function of its inputs: same catalog and criteria, same result.
pub fn search(catalog: &Catalog, criteria: &SearchCriteria) -> Vec<usize> {
    let education = criteria.education.provided().filter(|lvl| !lvl.is_empty());
    let min_salary = criteria.min_salary.provided().filter(|min| !min.is_empty());
    let sector_codes = criteria
        .sectors
        .provided()
        .filter(|names| !names.is_empty())
        .map(|names| resolve_sector_codes(names, &catalog.sectors));

    let working: Vec<usize> = catalog
        .industries
        .iter()
        .enumerate()
        .filter(|(_, row)| {
            if let Some(level) = education {
                if row.education_category != *level {
                    return false;
                }
            }
            if let Some(codes) = &sector_codes {
                if !matches_any_code(&row.naics, codes) {
                    return false;
                }
            }
            if let Some(minimum) = min_salary {
                if !meets_minimum(minimum, &row.a_median) {
                    return false;
                }
            }
            true
        })
        .map(|(i, _)| i)
        .collect();

    rank_by_wage(&catalog.industries, working)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{IndustryRecord, SectorRecord};

    fn row(naics: &str, name: &str, education: &str, median: &str) -> IndustryRecord {
        IndustryRecord {
            naics: naics.to_string(),
            naics_name: name.to_string(),
            education_category: education.to_string(),
            a_median: median.to_string(),
            a_pct25: "#".to_string(),
            a_pct75: "#".to_string(),
            tot_emp: "1,000".to_string(),
        }
    }

    fn sector(naics: &str, name: &str) -> SectorRecord {
        SectorRecord {
            naics: naics.to_string(),
            naics_name: name.to_string(),
        }
    }

    fn catalog() -> Catalog {
        Catalog::from_parts(
            vec![
                row(
                    "3112",
                    "Bakeries",
                    "High school diploma or equivalent",
                    "45,000",
                ),
                row(
                    "4451",
                    "Grocery Stores",
                    "No formal educational credential",
                    "31,250",
                ),
                row("5413", "Engineering Services", "Bachelor's degree", "91,740"),
            ],
            vec![
                sector("31-33", "Manufacturing"),
                sector("44-45", "Retail Trade"),
                sector("45", "Retail Trade"),
                sector("54", "Professional, Scientific, and Technical Services"),
            ],
            Vec::new(),
        )
        .unwrap()
    }

    fn value(s: &str) -> Answer<String> {
        Answer::Value(s.to_string())
    }

    fn sectors(list: &[&str]) -> Answer<BTreeSet<String>> {
        Answer::Value(list.iter().map(|s| s.to_string()).collect())
    }

    fn result_names(catalog: &Catalog, criteria: &SearchCriteria) -> Vec<String> {
        search(catalog, criteria)
            .into_iter()
            .map(|i| catalog.industries[i].naics_name.clone())
            .collect()
    }

    #[test]
    fn criteria_complete_only_once_every_question_resolved() {
        let mut criteria = SearchCriteria::default();
        assert!(!criteria.is_complete());

        criteria.education = Answer::Skipped;
        criteria.min_salary = value("40000");
        assert!(!criteria.is_complete());

        criteria.sectors = Answer::Value(BTreeSet::new());
        assert!(criteria.is_complete());
    }

    #[test]
    fn matching_criteria_select_and_rank() {
        let catalog = catalog();
        let criteria = SearchCriteria {
            education: value("High school diploma or equivalent"),
            min_salary: value("40000"),
            sectors: sectors(&["Manufacturing"]),
        };
        assert_eq!(result_names(&catalog, &criteria), vec!["Bakeries"]);
    }

    #[test]
    fn raising_the_minimum_empties_the_result() {
        let catalog = catalog();
        let criteria = SearchCriteria {
            education: value("High school diploma or equivalent"),
            min_salary: value("50000"),
            sectors: sectors(&["Manufacturing"]),
        };
        assert!(search(&catalog, &criteria).is_empty());
    }

    #[test]
    fn skipped_and_empty_answers_constrain_nothing() {
        let catalog = catalog();
        let all_skipped = SearchCriteria {
            education: Answer::Skipped,
            min_salary: Answer::Skipped,
            sectors: Answer::Skipped,
        };
        let all_empty = SearchCriteria {
            education: value(""),
            min_salary: value(""),
            sectors: Answer::Value(BTreeSet::new()),
        };

        let baseline = search(&catalog, &all_skipped);
        assert_eq!(baseline.len(), catalog.len());
        assert_eq!(search(&catalog, &all_empty), baseline);

        // Ranked by wage even with no filter applied.
        assert_eq!(
            result_names(&catalog, &all_skipped),
            vec!["Engineering Services", "Bakeries", "Grocery Stores"]
        );
    }

    #[test]
    fn education_match_is_exact() {
        let catalog = catalog();
        let criteria = SearchCriteria {
            education: value("High school diploma"),
            min_salary: Answer::Skipped,
            sectors: Answer::Skipped,
        };
        assert!(search(&catalog, &criteria).is_empty());
    }

    #[test]
    fn overlapping_sector_code_rows_match_each_row_once() {
        let catalog = catalog();
        let criteria = SearchCriteria {
            education: Answer::Skipped,
            min_salary: Answer::Skipped,
            // Retail Trade resolves to {44, 45} from two catalog rows; the
            // grocery row must still appear exactly once.
            sectors: sectors(&["Retail Trade"]),
        };
        assert_eq!(result_names(&catalog, &criteria), vec!["Grocery Stores"]);
    }

    #[test]
    fn search_is_a_pure_function_of_its_inputs() {
        let catalog = catalog();
        let criteria = SearchCriteria {
            education: Answer::Skipped,
            min_salary: value("30000"),
            sectors: sectors(&["Manufacturing", "Retail Trade"]),
        };
        assert_eq!(search(&catalog, &criteria), search(&catalog, &criteria));
    }
}
