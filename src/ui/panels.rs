use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::state::{AppState, Screen};

// ---------------------------------------------------------------------------
// Wizard screens (central panel)
// ---------------------------------------------------------------------------

/// Render the question screen the session is currently on.
pub fn wizard_panel(ui: &mut Ui, state: &mut AppState) {
    ui.add_space(8.0);
    ui.heading("Wayfinder");
    ui.label(
        "Explore career paths available to you right now, no matter how much \
         schooling you have. Answer the questions below, or skip them to see \
         industry results.",
    );
    ui.separator();
    ui.add_space(8.0);

    match state.screen {
        Screen::Education => education_screen(ui, state),
        Screen::Salary => salary_screen(ui, state),
        Screen::Sectors => sectors_screen(ui, state),
        // The results screen has its own panel; nothing to draw here.
        Screen::Results => {}
    }
}

fn education_screen(ui: &mut Ui, state: &mut AppState) {
    ui.strong("My highest level of education is…");
    ui.add_space(4.0);

    // Clone what we need so we can mutate state inside the loop. Most
    // schooling first; the source table is ranked the other way round.
    let levels: Vec<String> = state
        .catalog
        .education
        .iter()
        .rev()
        .map(|lvl| lvl.education_category.clone())
        .collect();

    let selected_text = if state.draft_education.is_empty() {
        "Select one".to_string()
    } else {
        state.draft_education.clone()
    };
    egui::ComboBox::from_id_salt("education_level")
        .selected_text(selected_text)
        .show_ui(ui, |ui: &mut Ui| {
            for level in &levels {
                if ui
                    .selectable_label(state.draft_education == *level, level)
                    .clicked()
                {
                    state.draft_education = level.clone();
                }
            }
        });

    ui.add_space(12.0);
    if ui.button("Next").clicked() {
        state.answer_education();
    }
}

fn salary_screen(ui: &mut Ui, state: &mut AppState) {
    ui.strong("I want my minimum yearly salary to be…");
    ui.add_space(4.0);

    ui.horizontal(|ui: &mut Ui| {
        ui.label("$");
        ui.text_edit_singleline(&mut state.draft_salary);
    });
    ui.label(RichText::new("Whole number with no commas; leave blank to skip.").weak());

    ui.add_space(12.0);
    if ui.button("Next").clicked() {
        state.answer_min_salary();
    }
}

fn sectors_screen(ui: &mut Ui, state: &mut AppState) {
    ui.strong("I'm interested in these sectors:");
    ui.add_space(4.0);

    // Clone the names so the checkbox loop can mutate the draft set.
    let names = state.catalog.sector_names.clone();

    ScrollArea::vertical()
        .max_height(ui.available_height() - 60.0)
        .auto_shrink([false, true])
        .show(ui, |ui: &mut Ui| {
            for name in &names {
                let mut checked = state.draft_sectors.contains(name);
                if ui.checkbox(&mut checked, name).changed() {
                    if checked {
                        state.draft_sectors.insert(name.clone());
                    } else {
                        state.draft_sectors.remove(name);
                    }
                }
            }
        });

    ui.add_space(12.0);
    ui.horizontal(|ui: &mut Ui| {
        if ui.button("Next").clicked() {
            state.answer_sectors();
        }
        if ui.button("Skip →").clicked() {
            state.skip_sectors();
        }
    });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / status bar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open data folder…").clicked() {
                open_data_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(format!(
            "{} industries · {} sectors · May 2023 BLS data",
            state.catalog.len(),
            state.catalog.sector_names.len()
        ));

        if state.screen == Screen::Results {
            ui.separator();
            if ui.button("Start over").clicked() {
                state.reset_session();
            }
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Data folder dialog
// ---------------------------------------------------------------------------

/// Let the user point the app at a replacement catalog directory, e.g. a
/// newer BLS release. A successful load starts a fresh session.
pub fn open_data_dialog(state: &mut AppState) {
    let folder = rfd::FileDialog::new()
        .set_title("Open BLS data folder")
        .pick_folder();

    if let Some(dir) = folder {
        match crate::data::loader::load_dir(&dir) {
            Ok(catalog) => {
                state.set_catalog(catalog);
            }
            Err(e) => {
                log::error!("Failed to load data folder: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
