use log::info;

use crate::catalog::CardCatalog;
use crate::models::CardRecord;
use crate::placeholder::PlaceholderArt;
use crate::tag_store::TagStore;

/// Everything the running app owns: the tagging core plus widget state
pub struct AppState {
    pub catalog: CardCatalog,
    pub tags: TagStore,

    /// Path of the last loaded collection CSV, empty before the first load
    pub csv_path: String,
    /// Text buffer behind the search box; the catalog holds the applied value
    pub search_input: String,

    /// Cloned snapshot of the visible pipeline, refreshed after every
    /// mutating action rather than recomputed each frame.
    pub visible: Vec<CardRecord>,
    pub selected_code: Option<String>,

    pub custom_tag_input: String,
    pub command_output: String,
    pub status: String,

    pub show_tag_modal: bool,
    pub modal_selection: usize,

    pub placeholders: Vec<PlaceholderArt>,
    pub placeholder_index: usize,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            catalog: CardCatalog::new(),
            tags: TagStore::new(),
            csv_path: String::new(),
            search_input: String::new(),
            visible: Vec::new(),
            selected_code: None,
            custom_tag_input: String::new(),
            command_output: String::new(),
            status: "Ready - load a collection CSV to begin".to_string(),
            show_tag_modal: false,
            modal_selection: 0,
            placeholders: Vec::new(),
            placeholder_index: 0,
        }
    }
}

impl AppState {
    /// Re-derives the visible list snapshot from the catalog and tag store
    pub fn refresh_visible(&mut self) {
        self.visible = self.catalog.visible_cards(&self.tags).into_iter().cloned().collect();
    }

    /// Updates the status line and mirrors it to the log
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = message.into();
        info!("{}", self.status);
    }

    /// The currently selected card, looked up independent of visibility
    pub fn selected_card(&self) -> Option<&CardRecord> {
        let code = self.selected_code.as_deref()?;
        self.catalog.select_card(code).ok()
    }
}
