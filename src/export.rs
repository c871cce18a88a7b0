//! JSON export and import of tag state.
//!
//! The document carries two top-level mappings, `standardTags` and
//! `customTags`, from tag name to a sorted array of card codes. Only tags
//! that hold cards are written. Import replaces the whole store, or on any
//! error leaves it untouched.

use std::collections::{BTreeMap, BTreeSet};

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::{TaggerError, TaggerResult};
use crate::models::StandardTag;
use crate::tag_store::{normalize_custom, TagStore};

/// Serialized tag state, the shape of a `karuta_tags.json` document.
///
/// Export always writes both mappings. On import either may be absent, but
/// a document missing both is rejected as `InvalidFormat`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagExport {
    pub standard_tags: Option<BTreeMap<String, Vec<String>>>,
    pub custom_tags: Option<BTreeMap<String, Vec<String>>>,
}

/// Snapshot of the store's non-empty tags
pub fn export_tags(store: &TagStore) -> TagExport {
    let standard = store
        .standard_sets()
        .iter()
        .filter(|(_, codes)| !codes.is_empty())
        .map(|(tag, codes)| (tag.as_str().to_string(), codes.iter().cloned().collect()))
        .collect();
    let custom = store
        .custom_sets()
        .iter()
        .map(|(name, codes)| (name.clone(), codes.iter().cloned().collect()))
        .collect();
    TagExport {
        standard_tags: Some(standard),
        custom_tags: Some(custom),
    }
}

/// Pretty-printed JSON of the store's current tag state
pub fn export_json(store: &TagStore) -> TaggerResult<String> {
    Ok(serde_json::to_string_pretty(&export_tags(store))?)
}

/// Parses a JSON document and replaces the store's state with it
pub fn import_json(store: &mut TagStore, json: &str) -> TaggerResult<()> {
    let data: TagExport = serde_json::from_str(json)?;
    import_tags(store, &data)
}

/// Replaces the store's state with `data`.
///
/// Unknown standard tag names are skipped with a warning. Custom names go
/// through the same normalization as `tag_card`; entries that end up
/// nameless or without codes are dropped, and entries whose normalized
/// names collide are unioned. The store is only touched once the
/// replacement maps are fully built, so a failed import changes nothing.
pub fn import_tags(store: &mut TagStore, data: &TagExport) -> TaggerResult<()> {
    if data.standard_tags.is_none() && data.custom_tags.is_none() {
        return Err(TaggerError::InvalidFormat);
    }

    let mut standard: BTreeMap<StandardTag, BTreeSet<String>> = BTreeMap::new();
    if let Some(entries) = &data.standard_tags {
        for (name, codes) in entries {
            match StandardTag::parse(name) {
                Some(tag) => {
                    standard.entry(tag).or_default().extend(codes.iter().cloned());
                }
                None => warn!("Ignoring unknown standard tag '{name}' in import"),
            }
        }
    }

    let mut custom: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
    if let Some(entries) = &data.custom_tags {
        for (name, codes) in entries {
            let normalized = normalize_custom(name);
            if normalized.is_empty() || codes.is_empty() {
                warn!("Ignoring unusable custom tag entry '{name}' in import");
                continue;
            }
            custom.entry(normalized).or_default().extend(codes.iter().cloned());
        }
    }

    store.replace_all(standard, custom);
    Ok(())
}
