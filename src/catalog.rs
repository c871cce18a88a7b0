//! The loaded card list and its derived visible subset.

use std::cmp::Ordering;

use log::debug;

use crate::error::{TaggerError, TaggerResult};
use crate::models::CardRecord;
use crate::tag_store::TagStore;

/// The full card list plus the current view parameters.
///
/// The visible list is derived on demand: search filter, then tag-hide
/// filter, then sort, always recomputed from the full list rather than
/// patched incrementally. Loading a new file replaces the list wholesale
/// and leaves the view parameters as they are.
#[derive(Debug, Clone, Default)]
pub struct CardCatalog {
    cards: Vec<CardRecord>,
    search_text: String,
    hide_tagged: bool,
    sort_enabled: bool,
    sort_ascending: bool,
}

impl CardCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the card list with a freshly decoded one
    pub fn load_cards(&mut self, records: Vec<CardRecord>) {
        debug!("Catalog loaded with {} cards", records.len());
        self.cards = records;
    }

    /// Every loaded card in load order, ignoring view parameters
    pub fn cards(&self) -> &[CardRecord] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn set_search_text(&mut self, text: &str) {
        self.search_text = text.to_string();
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn set_hide_tagged(&mut self, hide: bool) {
        self.hide_tagged = hide;
    }

    pub fn hide_tagged(&self) -> bool {
        self.hide_tagged
    }

    pub fn set_sort_enabled(&mut self, enabled: bool) {
        self.sort_enabled = enabled;
    }

    pub fn sort_enabled(&self) -> bool {
        self.sort_enabled
    }

    pub fn set_sort_ascending(&mut self, ascending: bool) {
        self.sort_ascending = ascending;
    }

    pub fn sort_ascending(&self) -> bool {
        self.sort_ascending
    }

    /// Looks a card up by code in the full list, visible or not.
    ///
    /// With duplicate codes the first record wins; tag operations treat all
    /// records sharing a code alike, so the distinction never surfaces.
    pub fn select_card(&self, code: &str) -> TaggerResult<&CardRecord> {
        self.cards
            .iter()
            .find(|card| card.code == code)
            .ok_or_else(|| TaggerError::NotFound(code.to_string()))
    }

    /// Applies search, tag-hide and sort to the full list.
    ///
    /// The search needle matches case-insensitively against character or
    /// series. The tag-hide stage reads the store's current contents, so
    /// callers must re-derive the list after tag mutations even when the
    /// view parameters did not change.
    pub fn visible_cards<'a>(&'a self, tags: &TagStore) -> Vec<&'a CardRecord> {
        let needle = self.search_text.to_lowercase();

        let mut visible: Vec<&CardRecord> = self
            .cards
            .iter()
            .filter(|card| {
                needle.is_empty()
                    || card.character.to_lowercase().contains(&needle)
                    || card.series.to_lowercase().contains(&needle)
            })
            .filter(|card| !self.hide_tagged || !tags.is_tagged(&card.code))
            .collect();

        if self.sort_enabled {
            // Stable sort: cards with equal burn values keep their relative
            // load order in both directions.
            visible.sort_by(|a, b| {
                let ordering = sort_burn(a).partial_cmp(&sort_burn(b)).unwrap_or(Ordering::Equal);
                if self.sort_ascending {
                    ordering
                } else {
                    ordering.reverse()
                }
            });
        }

        visible
    }
}

/// NaN burn values sort as zero, matching the decoder's parse-failure default
fn sort_burn(card: &CardRecord) -> f64 {
    if card.burn_value.is_nan() {
        0.0
    } else {
        card.burn_value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(code: &str, character: &str, series: &str, burn: f64) -> CardRecord {
        CardRecord {
            code: code.to_string(),
            character: character.to_string(),
            series: series.to_string(),
            burn_value: burn,
            ..CardRecord::default()
        }
    }

    fn sample_catalog() -> CardCatalog {
        let mut catalog = CardCatalog::new();
        catalog.load_cards(vec![
            card("1", "Asuka", "Evangelion", 5.0),
            card("2", "Rem", "Re:Zero", 9.0),
            card("3", "Megumin", "Konosuba", 1.0),
        ]);
        catalog
    }

    fn visible_codes(catalog: &CardCatalog, tags: &TagStore) -> Vec<String> {
        catalog.visible_cards(tags).into_iter().map(|c| c.code.clone()).collect()
    }

    // ==================== Search Tests ====================

    #[test]
    fn test_empty_search_shows_all_cards() {
        let catalog = sample_catalog();
        assert_eq!(visible_codes(&catalog, &TagStore::new()), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_search_matches_character_case_insensitively() {
        let mut catalog = sample_catalog();
        catalog.set_search_text("ASUKA");
        assert_eq!(visible_codes(&catalog, &TagStore::new()), vec!["1"]);
    }

    #[test]
    fn test_search_matches_series_substring() {
        let mut catalog = sample_catalog();
        catalog.set_search_text("zero");
        assert_eq!(visible_codes(&catalog, &TagStore::new()), vec!["2"]);
    }

    #[test]
    fn test_search_without_match_yields_empty_list() {
        let mut catalog = sample_catalog();
        catalog.set_search_text("nothing here");
        assert!(catalog.visible_cards(&TagStore::new()).is_empty());
    }

    // ==================== Tag-Hide Tests ====================

    #[test]
    fn test_hide_tagged_removes_tagged_cards() {
        let mut catalog = sample_catalog();
        let mut tags = TagStore::new();
        tags.tag_card("waifus", "1", false).unwrap();
        catalog.set_hide_tagged(true);
        assert_eq!(visible_codes(&catalog, &tags), vec!["2", "3"]);
    }

    #[test]
    fn test_hide_tagged_counts_custom_tags() {
        let mut catalog = sample_catalog();
        let mut tags = TagStore::new();
        tags.tag_card("event", "2", true).unwrap();
        catalog.set_hide_tagged(true);
        assert_eq!(visible_codes(&catalog, &tags), vec!["1", "3"]);
    }

    #[test]
    fn test_hidden_cards_return_when_toggle_is_off() {
        let mut catalog = sample_catalog();
        let mut tags = TagStore::new();
        tags.tag_card("waifus", "1", false).unwrap();
        catalog.set_hide_tagged(true);
        catalog.set_hide_tagged(false);
        assert_eq!(visible_codes(&catalog, &tags).len(), 3);
    }

    // ==================== Sort Tests ====================

    #[test]
    fn test_sort_ascending_by_burn_value() {
        let mut catalog = sample_catalog();
        catalog.set_sort_enabled(true);
        catalog.set_sort_ascending(true);
        assert_eq!(visible_codes(&catalog, &TagStore::new()), vec!["3", "1", "2"]);
    }

    #[test]
    fn test_sort_descending_by_burn_value() {
        let mut catalog = sample_catalog();
        catalog.set_sort_enabled(true);
        catalog.set_sort_ascending(false);
        assert_eq!(visible_codes(&catalog, &TagStore::new()), vec!["2", "1", "3"]);
    }

    #[test]
    fn test_sort_disabled_preserves_load_order() {
        let catalog = sample_catalog();
        assert_eq!(visible_codes(&catalog, &TagStore::new()), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_sort_keeps_load_order_on_equal_burn_values() {
        let mut catalog = CardCatalog::new();
        catalog.load_cards(vec![
            card("a", "A", "S", 3.0),
            card("b", "B", "S", 3.0),
            card("c", "C", "S", 1.0),
        ]);
        catalog.set_sort_enabled(true);
        catalog.set_sort_ascending(true);
        assert_eq!(visible_codes(&catalog, &TagStore::new()), vec!["c", "a", "b"]);
        catalog.set_sort_ascending(false);
        assert_eq!(visible_codes(&catalog, &TagStore::new()), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_nan_burn_value_sorts_as_zero() {
        let mut catalog = CardCatalog::new();
        catalog.load_cards(vec![
            card("a", "A", "S", 2.0),
            card("b", "B", "S", f64::NAN),
            card("c", "C", "S", -1.0),
        ]);
        catalog.set_sort_enabled(true);
        catalog.set_sort_ascending(true);
        assert_eq!(visible_codes(&catalog, &TagStore::new()), vec!["c", "b", "a"]);
    }

    // ==================== Pipeline Tests ====================

    #[test]
    fn test_search_and_sort_compose() {
        let mut catalog = CardCatalog::new();
        catalog.load_cards(vec![
            card("1", "Rem", "Re:Zero", 9.0),
            card("2", "Ram", "Re:Zero", 4.0),
            card("3", "Megumin", "Konosuba", 1.0),
        ]);
        catalog.set_search_text("re:zero");
        catalog.set_sort_enabled(true);
        catalog.set_sort_ascending(true);
        assert_eq!(visible_codes(&catalog, &TagStore::new()), vec!["2", "1"]);
    }

    #[test]
    fn test_load_cards_keeps_view_parameters() {
        let mut catalog = sample_catalog();
        catalog.set_search_text("rem");
        catalog.set_hide_tagged(true);
        catalog.load_cards(vec![card("9", "Rem", "Re:Zero", 2.0)]);
        assert_eq!(catalog.search_text(), "rem");
        assert!(catalog.hide_tagged());
        assert_eq!(visible_codes(&catalog, &TagStore::new()), vec!["9"]);
    }

    // ==================== Selection Tests ====================

    #[test]
    fn test_select_card_by_code() {
        let catalog = sample_catalog();
        let card = catalog.select_card("2").unwrap();
        assert_eq!(card.character, "Rem");
    }

    #[test]
    fn test_select_card_unknown_code_fails() {
        let catalog = sample_catalog();
        let err = catalog.select_card("404").unwrap_err();
        assert!(matches!(err, TaggerError::NotFound(_)));
    }

    #[test]
    fn test_select_card_ignores_visibility() {
        let mut catalog = sample_catalog();
        catalog.set_search_text("megumin");
        // "1" is filtered out of the visible list but still selectable
        assert!(catalog.select_card("1").is_ok());
    }

    #[test]
    fn test_select_card_duplicate_codes_first_wins() {
        let mut catalog = CardCatalog::new();
        catalog.load_cards(vec![
            card("dup", "First", "S1", 1.0),
            card("dup", "Second", "S2", 2.0),
        ]);
        assert_eq!(catalog.select_card("dup").unwrap().character, "First");
    }
}
