use std::collections::BTreeMap;

use eframe::egui::{RichText, ScrollArea, Ui};
use egui_plot::{Bar, BarChart, Plot};

use crate::data::{model, salary};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Results screen (central panel)
// ---------------------------------------------------------------------------

/// How many industries the results screen shows at most.
const DISPLAY_LIMIT: usize = 10;

/// Render the ranked industries for a finished session.
pub fn results_panel(ui: &mut Ui, state: &mut AppState) {
    // Clone the ranking so the start-over buttons below can mutate state.
    let ranked = match &state.results {
        Some(indices) => indices.clone(),
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Answer the questions to see industry results.");
            });
            return;
        }
    };

    if ranked.is_empty() {
        ui.add_space(24.0);
        ui.vertical_centered(|ui: &mut Ui| {
            ui.heading("No results match your criteria!");
            ui.add_space(8.0);
            ui.label("Try again with a lower salary, or with more sectors ticked.");
            ui.add_space(8.0);
            if ui.button("Start over").clicked() {
                state.reset_session();
            }
        });
        return;
    }

    let shown = &ranked[..ranked.len().min(DISPLAY_LIMIT)];

    ui.add_space(8.0);
    ui.heading(format!(
        "The top {} highest-paying industries available to you are…",
        shown.len()
    ));
    ui.add_space(8.0);

    wage_chart(ui, state, shown);
    ui.add_space(8.0);
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for &idx in shown {
                industry_entry(ui, state, idx);
                ui.separator();
            }

            ui.add_space(8.0);
            if ui.button("Start over").clicked() {
                state.reset_session();
            }
            ui.add_space(8.0);
        });
}

// ---------------------------------------------------------------------------
// Wage chart
// ---------------------------------------------------------------------------

/// Bar chart of median wages, one bar per industry in rank order, coloured by
/// the typical education level for entry.
fn wage_chart(ui: &mut Ui, state: &AppState, shown: &[usize]) {
    // One chart per education level so the legend carries the level names.
    let mut by_level: BTreeMap<String, Vec<Bar>> = BTreeMap::new();
    for (pos, &idx) in shown.iter().enumerate() {
        let row = &state.catalog.industries[idx];
        let wage = salary::parse_amount(&row.a_median).unwrap_or(0) as f64;
        by_level
            .entry(row.education_category.clone())
            .or_default()
            .push(Bar::new(pos as f64 + 1.0, wage).name(&row.naics_name));
    }

    let charts: Vec<BarChart> = by_level
        .into_iter()
        .map(|(level, bars)| {
            let color = state.color_map.color_for(&level);
            BarChart::new(bars).name(level).color(color)
        })
        .collect();

    Plot::new("wage_chart")
        .legend(egui_plot::Legend::default())
        .height(220.0)
        .x_axis_label("Rank")
        .y_axis_label("Median annual wage ($)")
        .allow_boxed_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .show(ui, |plot_ui| {
            for chart in charts {
                plot_ui.bar_chart(chart);
            }
        });
}

// ---------------------------------------------------------------------------
// Industry entries
// ---------------------------------------------------------------------------

fn industry_entry(ui: &mut Ui, state: &AppState, idx: usize) {
    let row = &state.catalog.industries[idx];

    ui.horizontal(|ui: &mut Ui| {
        ui.strong(format!("${}", row.a_median));
        ui.label(&row.naics_name);
        ui.hyperlink_to(
            "Learn more",
            format!("https://www.bls.gov/oes/2023/may/naics4_{}.htm", row.naics),
        );
    });

    // Education level varies per row when that question went unanswered.
    if state.education_unconstrained() {
        ui.label(
            RichText::new(format!(
                "(This salary is for the {} education level.)",
                row.education_category
            ))
            .weak(),
        );
    }

    ui.label(format!("People employed in this industry: {}", row.tot_emp));

    if row.a_pct25 != model::NOT_AVAILABLE && row.a_pct75 != model::NOT_AVAILABLE {
        ui.label(format!(
            "Most salaries range from ${} to ${} a year.",
            row.a_pct25, row.a_pct75
        ));
    }
}
