//! Karuta `kt` batch-command generation.

use std::collections::BTreeSet;

use crate::error::{TaggerError, TaggerResult};
use crate::models::StandardTag;
use crate::tag_store::{normalize_custom, TagStore};

/// Builds the bulk-tag command for one tag: `kt <tag> <code1,code2,...>`.
///
/// Codes are joined in lexicographic order, so the same set always yields
/// the same command string. An empty set is an error; Karuta rejects a
/// `kt` invocation without card codes.
pub fn format_tag_command(tag: &str, codes: &BTreeSet<String>) -> TaggerResult<String> {
    if codes.is_empty() {
        return Err(TaggerError::EmptyTagSet(tag.to_string()));
    }
    let joined = codes.iter().map(String::as_str).collect::<Vec<_>>().join(",");
    Ok(format!("kt {tag} {joined}"))
}

/// Reads the tag's current card set from the store and formats the command.
/// The tag name is canonicalized first so the emitted command always uses
/// the stored spelling.
pub fn command_for_tag(store: &TagStore, tag: &str, custom: bool) -> TaggerResult<String> {
    let name = if custom {
        normalize_custom(tag)
    } else {
        match StandardTag::parse(tag) {
            Some(standard) => standard.as_str().to_string(),
            None => return Err(TaggerError::InvalidTag(tag.to_string())),
        }
    };
    let codes = store.cards_for_tag(&name, custom);
    format_tag_command(&name, &codes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(values: &[&str]) -> BTreeSet<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    // ==================== format_tag_command Tests ====================

    #[test]
    fn test_command_joins_codes_in_sorted_order() {
        let command = format_tag_command("waifus", &codes(&["7", "3"])).unwrap();
        assert_eq!(command, "kt waifus 3,7");
    }

    #[test]
    fn test_command_single_code_has_no_separator() {
        let command = format_tag_command("burnburn", &codes(&["v4k"])).unwrap();
        assert_eq!(command, "kt burnburn v4k");
    }

    #[test]
    fn test_command_empty_set_fails() {
        let err = format_tag_command("waifus", &BTreeSet::new()).unwrap_err();
        assert!(matches!(err, TaggerError::EmptyTagSet(_)));
    }

    // ==================== command_for_tag Tests ====================

    #[test]
    fn test_command_for_standard_tag() {
        let mut store = TagStore::new();
        store.tag_card("waifus", "b2", false).unwrap();
        store.tag_card("waifus", "a1", false).unwrap();
        let command = command_for_tag(&store, "waifus", false).unwrap();
        assert_eq!(command, "kt waifus a1,b2");
    }

    #[test]
    fn test_command_for_custom_tag_uses_normalized_name() {
        let mut store = TagStore::new();
        store.tag_card("Pulls", "x1", true).unwrap();
        let command = command_for_tag(&store, "  Pulls ", true).unwrap();
        assert_eq!(command, "kt pulls x1");
    }

    #[test]
    fn test_command_for_untagged_standard_tag_fails() {
        let store = TagStore::new();
        let err = command_for_tag(&store, "worker", false).unwrap_err();
        assert!(matches!(err, TaggerError::EmptyTagSet(_)));
    }

    #[test]
    fn test_command_for_unknown_standard_name_fails() {
        let store = TagStore::new();
        let err = command_for_tag(&store, "bogus", false).unwrap_err();
        assert!(matches!(err, TaggerError::InvalidTag(_)));
    }

    #[test]
    fn test_command_casing_is_canonicalized() {
        let mut store = TagStore::new();
        store.tag_card("SLIDETRADE", "t1", false).unwrap();
        let command = command_for_tag(&store, "SlideTrade", false).unwrap();
        assert_eq!(command, "kt slidetrade t1");
    }
}
