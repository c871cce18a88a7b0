use eframe::{self, egui};
use egui::ViewportBuilder;
use log::error;

use crate::command::command_for_tag;
use crate::export::{export_json, import_json};
use crate::io::read_cards_csv;
use crate::models::{CardRecord, StandardTag};
use crate::placeholder::placeholder_set;
use crate::tag_store::{CardTag, TagKind, TagSummary};

use super::state::AppState;

/// Main application window
#[derive(Default)]
pub struct TaggerApp {
    state: AppState,
}

/// Launches the GUI application
pub fn launch_gui() -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default().with_inner_size([1000.0, 700.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Karuta Card Tagger",
        options,
        Box::new(|_cc| Ok(Box::new(TaggerApp::default()))),
    )
}

impl eframe::App for TaggerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.top_bar(ctx);
        self.status_bar(ctx);
        self.central(ctx);
        if self.state.show_tag_modal {
            self.tag_selection_modal(ctx);
        }
    }
}

impl TaggerApp {
    fn top_bar(&mut self, ctx: &egui::Context) {
        let state = &mut self.state;
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Karuta Card Tagger");
                ui.separator();

                if ui.button("Open CSV…").clicked() {
                    if let Some(path) = rfd::FileDialog::new()
                        .add_filter("CSV files", &["csv"])
                        .pick_file()
                    {
                        state.csv_path = path.display().to_string();
                        load_collection(state);
                    }
                }
                if !state.csv_path.is_empty() {
                    ui.small(&state.csv_path);
                }
                if ui.button("Export Tags").clicked() {
                    export_tags_to_file(state);
                }
                if ui.button("Import Tags").clicked() {
                    import_tags_from_file(state);
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!("{} / {} cards", state.visible.len(), state.catalog.len()));
                });
            });
        });
    }

    fn status_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(&self.state.status);
            });
        });
    }

    fn central(&mut self, ctx: &egui::Context) {
        let state = &mut self.state;
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.columns(2, |columns| {
                card_list(&mut columns[0], state);
                detail_panel(&mut columns[1], state);
            });
        });
    }

    fn tag_selection_modal(&mut self, ctx: &egui::Context) {
        let state = &mut self.state;
        let tags = state.tags.all_tags();
        let mut close = false;

        egui::Window::new("Select a Tag")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label("Choose which tag to generate the command for:");
                ui.add_space(4.0);
                egui::ScrollArea::vertical().max_height(240.0).show(ui, |ui| {
                    for (index, tag) in tags.iter().enumerate() {
                        let label = format!("{} ({} cards)", tag_label(&tag.name), tag.count);
                        if ui.selectable_label(state.modal_selection == index, label).clicked() {
                            state.modal_selection = index;
                        }
                    }
                });
                ui.add_space(6.0);
                ui.horizontal(|ui| {
                    if ui.button("Generate").clicked() {
                        if let Some(tag) = tags.get(state.modal_selection) {
                            generate_command(state, tag);
                        }
                        close = true;
                    }
                    if ui.button("Cancel").clicked() {
                        close = true;
                    }
                });
            });

        if close {
            state.show_tag_modal = false;
        }
    }
}

fn card_list(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading("Cards");
    ui.add_space(4.0);

    ui.horizontal(|ui| {
        ui.label("Search:");
        let response = ui.add(
            egui::TextEdit::singleline(&mut state.search_input)
                .desired_width(200.0)
                .hint_text("Character or series…"),
        );
        if response.changed() {
            let input = state.search_input.clone();
            state.catalog.set_search_text(&input);
            state.refresh_visible();
            if input.is_empty() {
                state.set_status(format!("Showing all {} cards", state.visible.len()));
            } else {
                state.set_status(format!(
                    "Found {} cards matching '{input}'",
                    state.visible.len()
                ));
            }
        }
    });

    ui.horizontal(|ui| {
        let mut sort_enabled = state.catalog.sort_enabled();
        if ui.checkbox(&mut sort_enabled, "Sort by burn value").changed() {
            state.catalog.set_sort_enabled(sort_enabled);
            state.refresh_visible();
        }
        ui.add_enabled_ui(sort_enabled, |ui| {
            let mut ascending = state.catalog.sort_ascending();
            let desc_changed = ui.radio_value(&mut ascending, false, "High to low").changed();
            let asc_changed = ui.radio_value(&mut ascending, true, "Low to high").changed();
            if desc_changed || asc_changed {
                state.catalog.set_sort_ascending(ascending);
                state.refresh_visible();
            }
        });
    });

    ui.horizontal(|ui| {
        let mut hide_tagged = state.catalog.hide_tagged();
        if ui.checkbox(&mut hide_tagged, "Hide tagged cards").changed() {
            state.catalog.set_hide_tagged(hide_tagged);
            state.refresh_visible();
            if hide_tagged {
                state.set_status(format!("Hiding tagged cards, {} remain", state.visible.len()));
            } else {
                state.set_status(format!("Showing all {} cards", state.visible.len()));
            }
        }
    });

    ui.add_space(4.0);
    let mut clicked_code = None;
    egui::ScrollArea::vertical().id_salt("card_list_scroll").show(ui, |ui| {
        if state.visible.is_empty() {
            ui.label("No cards found");
        }
        for card in &state.visible {
            let selected = state.selected_code.as_deref() == Some(card.code.as_str());
            if ui.selectable_label(selected, card.list_label()).clicked() {
                clicked_code = Some(card.code.clone());
            }
        }
    });

    if let Some(code) = clicked_code {
        select_card(state, &code);
    }
}

fn detail_panel(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading("Card Details");
    ui.add_space(4.0);

    let selected = state.selected_card().cloned();
    match selected {
        Some(card) => {
            card_details(ui, &card);
            placeholder_panel(ui, state, &card);
            ui.separator();
            tag_controls(ui, state, &card);
        }
        None => {
            ui.label("Select a card from the list to see its details");
        }
    }

    ui.separator();
    command_section(ui, state);
}

fn card_details(ui: &mut egui::Ui, card: &CardRecord) {
    egui::Grid::new("card_details").num_columns(2).spacing([12.0, 4.0]).show(ui, |ui| {
        ui.strong("Character");
        ui.label(&card.character);
        ui.end_row();
        ui.strong("Series");
        ui.label(&card.series);
        ui.end_row();
        ui.strong("Code");
        ui.label(&card.code);
        ui.end_row();
        ui.strong("Burn Value");
        ui.label(card.burn_display());
        ui.end_row();
        if card.edition > 0 {
            ui.strong("Edition");
            ui.label(card.edition.to_string());
            ui.end_row();
        }
        if card.wishlists > 0 {
            ui.strong("Wishlists");
            ui.label(card.wishlists.to_string());
            ui.end_row();
        }
        if !card.dye.is_empty() {
            ui.strong("Dye");
            ui.label(&card.dye);
            ui.end_row();
        }
        if !card.frame.is_empty() {
            ui.strong("Frame");
            ui.label(&card.frame);
            ui.end_row();
        }
    });
    ui.add_space(6.0);
}

fn placeholder_panel(ui: &mut egui::Ui, state: &mut AppState, card: &CardRecord) {
    ui.horizontal(|ui| {
        if ui.button("Generate Art").clicked() {
            state.placeholders = placeholder_set(&card.character, &card.series);
            state.placeholder_index = 0;
            state.set_status(format!("Showing image 1 of {}", state.placeholders.len()));
        }
        if ui.button("Next Image").clicked() && !state.placeholders.is_empty() {
            state.placeholder_index = (state.placeholder_index + 1) % state.placeholders.len();
            state.set_status(format!(
                "Showing image {} of {}",
                state.placeholder_index + 1,
                state.placeholders.len()
            ));
        }
    });

    let size = egui::vec2(ui.available_width().min(280.0), 150.0);
    let (rect, _response) = ui.allocate_exact_size(size, egui::Sense::hover());
    match state.placeholders.get(state.placeholder_index) {
        Some(art) => {
            let (r, g, b) = art.rgb();
            ui.painter().rect_filled(rect, 6.0, egui::Color32::from_rgb(r, g, b));
            ui.painter().text(
                rect.center() - egui::vec2(0.0, 12.0),
                egui::Align2::CENTER_CENTER,
                &card.character,
                egui::FontId::proportional(18.0),
                egui::Color32::WHITE,
            );
            ui.painter().text(
                rect.center() + egui::vec2(0.0, 12.0),
                egui::Align2::CENTER_CENTER,
                &card.series,
                egui::FontId::proportional(13.0),
                egui::Color32::WHITE,
            );
        }
        None => {
            ui.painter().rect_filled(rect, 6.0, egui::Color32::from_gray(40));
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                "Generate Art to see placeholder images",
                egui::FontId::proportional(13.0),
                egui::Color32::GRAY,
            );
        }
    }
}

fn tag_controls(ui: &mut egui::Ui, state: &mut AppState, card: &CardRecord) {
    ui.label("Tag this card:");
    ui.horizontal_wrapped(|ui| {
        for tag in StandardTag::all() {
            if ui.button(tag.label()).clicked() {
                apply_tag(state, tag.as_str(), &card.code, false);
            }
        }
    });

    ui.horizontal(|ui| {
        ui.label("Custom:");
        ui.add(
            egui::TextEdit::singleline(&mut state.custom_tag_input)
                .desired_width(140.0)
                .hint_text("tag name"),
        );
        if ui.button("Add").clicked() {
            let name = state.custom_tag_input.trim().to_string();
            if name.is_empty() {
                state.set_status("Enter a custom tag name first");
            } else {
                apply_tag(state, &name, &card.code, true);
                state.custom_tag_input.clear();
            }
        }
    });

    ui.add_space(4.0);
    current_tags(ui, state, card);
}

fn current_tags(ui: &mut egui::Ui, state: &mut AppState, card: &CardRecord) {
    ui.label("Current tags:");
    let tags = state.tags.tags_for_card(&card.code);
    if tags.is_empty() {
        ui.weak("None");
        return;
    }

    let mut removal: Option<CardTag> = None;
    ui.horizontal_wrapped(|ui| {
        for tag in &tags {
            let label = format!("{} ✕", tag_label(&tag.name));
            if ui.button(label).on_hover_text("Remove this tag").clicked() {
                removal = Some(tag.clone());
            }
        }
    });
    if ui.small_button("Clear tags on this card").clicked() {
        state.tags.clear_card(&card.code);
        state.refresh_visible();
        state.set_status(format!("Removed all tags from card {}", card.code));
        return;
    }

    if let Some(tag) = removal {
        remove_tag(state, &tag, &card.code);
    }
}

fn command_section(ui: &mut egui::Ui, state: &mut AppState) {
    ui.label("Karuta command:");
    ui.add(
        egui::TextEdit::multiline(&mut state.command_output)
            .desired_width(f32::INFINITY)
            .desired_rows(2)
            .font(egui::TextStyle::Monospace),
    );
    ui.horizontal(|ui| {
        if ui.button("Generate Command").clicked() {
            if state.tags.all_tags().is_empty() {
                state.set_status("No tags available, tag some cards first");
            } else {
                state.modal_selection = 0;
                state.show_tag_modal = true;
            }
        }
        if ui.button("Copy").clicked() {
            if state.command_output.is_empty() {
                state.set_status("No command generated yet");
            } else {
                ui.ctx().copy_text(state.command_output.clone());
                state.set_status("Command copied to clipboard");
            }
        }
        if ui.button("Clear All Tags").clicked() {
            let confirmed = rfd::MessageDialog::new()
                .set_title("Clear tags")
                .set_description("Remove every tag from every card?")
                .set_buttons(rfd::MessageButtons::OkCancel)
                .show();
            if matches!(confirmed, rfd::MessageDialogResult::Ok) {
                state.tags.clear_all();
                state.command_output.clear();
                state.refresh_visible();
                state.set_status("All tags cleared");
            }
        }
    });
}

fn select_card(state: &mut AppState, code: &str) {
    match state.catalog.select_card(code) {
        Ok(card) => {
            let message = format!("Selected card: {} from {}", card.character, card.series);
            state.selected_code = Some(code.to_string());
            state.placeholders.clear();
            state.placeholder_index = 0;
            state.set_status(message);
        }
        Err(e) => state.set_status(e.to_string()),
    }
}

fn apply_tag(state: &mut AppState, tag: &str, code: &str, custom: bool) {
    match state.tags.tag_card(tag, code, custom) {
        Ok(()) => {
            state.refresh_visible();
            state.set_status(format!("Card {code} tagged as '{tag}'"));
        }
        Err(e) => state.set_status(e.to_string()),
    }
}

fn remove_tag(state: &mut AppState, tag: &CardTag, code: &str) {
    let custom = tag.kind == TagKind::Custom;
    match state.tags.untag_card(&tag.name, code, custom) {
        Ok(()) => {
            state.refresh_visible();
            state.set_status(format!("Removed tag '{}' from card {code}", tag.name));
        }
        Err(e) => state.set_status(e.to_string()),
    }
}

fn generate_command(state: &mut AppState, tag: &TagSummary) {
    let custom = tag.kind == TagKind::Custom;
    match command_for_tag(&state.tags, &tag.name, custom) {
        Ok(command) => {
            state.command_output = command;
            state.set_status(format!(
                "Generated command for {} cards tagged as '{}'",
                tag.count, tag.name
            ));
        }
        Err(e) => state.set_status(e.to_string()),
    }
}

fn load_collection(state: &mut AppState) {
    match read_cards_csv(&state.csv_path) {
        Ok(records) => {
            let count = records.len();
            state.catalog.load_cards(records);
            state.selected_code = None;
            state.placeholders.clear();
            state.placeholder_index = 0;
            state.refresh_visible();
            state.set_status(format!("Loaded {count} cards"));
        }
        Err(e) => {
            error!("Error loading CSV: {e}");
            state.set_status(format!("Error loading CSV: {e}"));
        }
    }
}

fn export_tags_to_file(state: &mut AppState) {
    let json = match export_json(&state.tags) {
        Ok(json) => json,
        Err(e) => {
            state.set_status(format!("Error exporting tags: {e}"));
            return;
        }
    };
    if let Some(path) = rfd::FileDialog::new()
        .set_file_name("karuta_tags.json")
        .add_filter("JSON files", &["json"])
        .save_file()
    {
        match std::fs::write(&path, json) {
            Ok(()) => state.set_status("Tags exported to JSON file"),
            Err(e) => state.set_status(format!("Error writing {}: {e}", path.display())),
        }
    }
}

fn import_tags_from_file(state: &mut AppState) {
    if let Some(path) = rfd::FileDialog::new().add_filter("JSON files", &["json"]).pick_file() {
        match std::fs::read_to_string(&path) {
            Ok(json) => match import_json(&mut state.tags, &json) {
                Ok(()) => {
                    state.refresh_visible();
                    state.set_status("Tags imported successfully");
                }
                Err(e) => state.set_status(format!("Error importing tags: {e}")),
            },
            Err(e) => state.set_status(format!("Error reading {}: {e}", path.display())),
        }
    }
}

/// Display form of a tag name: underscores out, upper-cased
fn tag_label(name: &str) -> String {
    name.replace('_', " ").to_uppercase()
}
