use std::collections::BTreeSet;

use crate::color::ColorMap;
use crate::data::filter::{search, Answer, SearchCriteria};
use crate::data::model::Catalog;

// ---------------------------------------------------------------------------
// Session state
// ---------------------------------------------------------------------------

/// Which part of the session the user is looking at. The wizard only
/// moves forward; "Start over" begins a fresh session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Education,
    Salary,
    Sectors,
    Results,
}

/// The full session state, independent of rendering.
pub struct AppState {
    /// Loaded catalog; read-only until File → Open replaces it wholesale.
    pub catalog: Catalog,

    /// Wizard answers collected so far.
    pub criteria: SearchCriteria,

    /// Current wizard screen.
    pub screen: Screen,

    /// Ranked industry indices into `catalog.industries`. `None` until the
    /// search has run; `Some(vec![])` is a real "nothing matched" outcome.
    /// Never recomputed within a session.
    pub results: Option<Vec<usize>>,

    /// Education category → colour for the results chart.
    pub color_map: ColorMap,

    /// Status / error message shown in the top bar.
    pub status_message: Option<String>,

    // Draft widget buffers, promoted into `criteria` on submit.
    pub draft_education: String,
    pub draft_salary: String,
    pub draft_sectors: BTreeSet<String>,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        let color_map = education_color_map(&catalog);
        Self {
            catalog,
            criteria: SearchCriteria::default(),
            screen: Screen::Education,
            results: None,
            color_map,
            status_message: None,
            draft_education: String::new(),
            draft_salary: String::new(),
            draft_sectors: BTreeSet::new(),
        }
    }

    /// Swap in a newly loaded catalog and start a fresh session on it.
    pub fn set_catalog(&mut self, catalog: Catalog) {
        self.color_map = education_color_map(&catalog);
        self.catalog = catalog;
        self.status_message = None;
        self.reset_session();
    }

    /// Forget all answers and results; back to the first question.
    pub fn reset_session(&mut self) {
        self.criteria = SearchCriteria::default();
        self.screen = Screen::Education;
        self.results = None;
        self.draft_education.clear();
        self.draft_salary.clear();
        self.draft_sectors.clear();
    }

    // ---- Wizard answers ----

    /// Record the education answer from its draft buffer. Submitting with
    /// nothing selected is a valid "no constraint" answer.
    pub fn answer_education(&mut self) {
        if self.criteria.education.is_resolved() {
            return;
        }
        self.criteria.education = Answer::Value(self.draft_education.clone());
        self.advance();
    }

    /// Record the minimum-salary answer from its draft buffer.
    pub fn answer_min_salary(&mut self) {
        if self.criteria.min_salary.is_resolved() {
            return;
        }
        self.criteria.min_salary = Answer::Value(self.draft_salary.trim().to_string());
        self.advance();
    }

    /// Record the checked sector set (possibly empty).
    pub fn answer_sectors(&mut self) {
        if self.criteria.sectors.is_resolved() {
            return;
        }
        self.criteria.sectors = Answer::Value(self.draft_sectors.clone());
        self.advance();
    }

    /// Record an explicit skip of the sector question.
    pub fn skip_sectors(&mut self) {
        if self.criteria.sectors.is_resolved() {
            return;
        }
        self.criteria.sectors = Answer::Skipped;
        self.advance();
    }

    fn advance(&mut self) {
        self.screen = match self.screen {
            Screen::Education => Screen::Salary,
            Screen::Salary => Screen::Sectors,
            Screen::Sectors | Screen::Results => Screen::Results,
        };
        self.run_search_if_ready();
    }

    // ---- Search trigger ----

    /// Run the search the first time every question is resolved. Once
    /// `results` is `Some` this is a no-op: the ranking is immutable for
    /// the rest of the session, even on an empty outcome.
    pub fn run_search_if_ready(&mut self) {
        if self.results.is_none() && self.criteria.is_complete() {
            let ranked = search(&self.catalog, &self.criteria);
            log::info!(
                "search complete: {} of {} industries match",
                ranked.len(),
                self.catalog.len()
            );
            self.results = Some(ranked);
        }
    }

    /// Whether the education question ended up unconstrained (skipped or
    /// answered empty); the results list then names each row's level.
    pub fn education_unconstrained(&self) -> bool {
        match &self.criteria.education {
            Answer::Value(level) => level.is_empty(),
            _ => true,
        }
    }
}

/// Colour assignment over every education category the catalog mentions,
/// whether in the education table or only on industry rows.
fn education_color_map(catalog: &Catalog) -> ColorMap {
    let categories: BTreeSet<String> = catalog
        .education
        .iter()
        .map(|lvl| lvl.education_category.clone())
        .chain(
            catalog
                .industries
                .iter()
                .map(|row| row.education_category.clone()),
        )
        .collect();
    ColorMap::new(&categories)
}
