//! Tag state for a loaded collection.
//!
//! The store maps tag names to sets of card codes, for both the fixed
//! standard vocabulary and user-created custom tags. It knows nothing about
//! the UI; callers mutate it through the operations below and re-derive
//! their views from the query results.

use std::collections::{BTreeMap, BTreeSet};

use log::debug;

use crate::error::{TaggerError, TaggerResult};
use crate::models::StandardTag;

/// Classification of a tag name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    Standard,
    Custom,
}

/// A tag attached to a specific card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardTag {
    pub name: String,
    pub kind: TagKind,
}

/// A tag together with its current card count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagSummary {
    pub name: String,
    pub kind: TagKind,
    pub count: usize,
}

/// Mapping from tag name to the set of tagged card codes.
///
/// Standard tags always have an entry, possibly empty; a custom tag entry
/// exists exactly as long as it holds at least one code. Custom names are
/// normalized to trimmed lower-case on the way in and enumerate in
/// lexicographic order.
#[derive(Debug, Clone)]
pub struct TagStore {
    standard: BTreeMap<StandardTag, BTreeSet<String>>,
    custom: BTreeMap<String, BTreeSet<String>>,
}

impl Default for TagStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TagStore {
    /// Creates a store with every standard tag present and empty
    pub fn new() -> Self {
        let standard = StandardTag::all().iter().map(|tag| (*tag, BTreeSet::new())).collect();
        Self {
            standard,
            custom: BTreeMap::new(),
        }
    }

    /// Adds `code` to the set for `tag`.
    ///
    /// Non-custom names must belong to the standard vocabulary; anything
    /// else is rejected without touching the store. Custom entries are
    /// created on first use, and a custom name that normalizes to nothing
    /// is rejected. Tagging an already tagged card is a no-op.
    pub fn tag_card(&mut self, tag: &str, code: &str, custom: bool) -> TaggerResult<()> {
        if custom {
            let name = normalize_custom(tag);
            if name.is_empty() {
                return Err(TaggerError::InvalidTag(tag.to_string()));
            }
            self.custom.entry(name).or_default().insert(code.to_string());
        } else {
            let standard = lookup_standard(tag)?;
            self.standard.entry(standard).or_default().insert(code.to_string());
        }
        debug!("Tagged card {code} as '{tag}'");
        Ok(())
    }

    /// Removes `code` from the set for `tag`.
    ///
    /// Removing an absent code (or from an unknown custom tag) is a no-op.
    /// A custom tag whose set empties is deleted outright.
    pub fn untag_card(&mut self, tag: &str, code: &str, custom: bool) -> TaggerResult<()> {
        if custom {
            let name = normalize_custom(tag);
            if let Some(codes) = self.custom.get_mut(&name) {
                codes.remove(code);
                if codes.is_empty() {
                    self.custom.remove(&name);
                }
            }
        } else {
            let standard = lookup_standard(tag)?;
            self.standard.entry(standard).or_default().remove(code);
        }
        Ok(())
    }

    /// Removes `code` from every tag, dropping custom entries it empties
    pub fn clear_card(&mut self, code: &str) {
        for codes in self.standard.values_mut() {
            codes.remove(code);
        }
        self.custom.retain(|_, codes| {
            codes.remove(code);
            !codes.is_empty()
        });
    }

    /// Empties every standard set and discards all custom tags
    pub fn clear_all(&mut self) {
        for codes in self.standard.values_mut() {
            codes.clear();
        }
        self.custom.clear();
        debug!("Cleared all tags");
    }

    /// Tags attached to `code`: standard tags first in vocabulary order,
    /// then custom tags in lexicographic order.
    pub fn tags_for_card(&self, code: &str) -> Vec<CardTag> {
        let mut tags = Vec::new();
        for (tag, codes) in &self.standard {
            if codes.contains(code) {
                tags.push(CardTag {
                    name: tag.as_str().to_string(),
                    kind: TagKind::Standard,
                });
            }
        }
        for (name, codes) in &self.custom {
            if codes.contains(code) {
                tags.push(CardTag {
                    name: name.clone(),
                    kind: TagKind::Custom,
                });
            }
        }
        tags
    }

    /// True if the card carries at least one tag of any kind
    pub fn is_tagged(&self, code: &str) -> bool {
        self.standard.values().any(|codes| codes.contains(code))
            || self.custom.values().any(|codes| codes.contains(code))
    }

    /// Every tag that currently holds cards, with counts. Standard tags
    /// come first in vocabulary order; empty standard tags are omitted
    /// because the listing feeds tag pickers, where an empty tag has
    /// nothing to offer.
    pub fn all_tags(&self) -> Vec<TagSummary> {
        let mut tags = Vec::new();
        for (tag, codes) in &self.standard {
            if !codes.is_empty() {
                tags.push(TagSummary {
                    name: tag.as_str().to_string(),
                    kind: TagKind::Standard,
                    count: codes.len(),
                });
            }
        }
        for (name, codes) in &self.custom {
            tags.push(TagSummary {
                name: name.clone(),
                kind: TagKind::Custom,
                count: codes.len(),
            });
        }
        tags
    }

    /// The codes currently tagged as `tag`; empty for unknown names
    pub fn cards_for_tag(&self, tag: &str, custom: bool) -> BTreeSet<String> {
        if custom {
            self.custom.get(&normalize_custom(tag)).cloned().unwrap_or_default()
        } else {
            StandardTag::parse(tag)
                .and_then(|standard| self.standard.get(&standard))
                .cloned()
                .unwrap_or_default()
        }
    }

    pub(crate) fn standard_sets(&self) -> &BTreeMap<StandardTag, BTreeSet<String>> {
        &self.standard
    }

    pub(crate) fn custom_sets(&self) -> &BTreeMap<String, BTreeSet<String>> {
        &self.custom
    }

    /// Wholesale state replacement used by the import codec. Restores the
    /// five standard entries and drops empty custom entries afterwards, so
    /// the store's shape invariants hold no matter what was passed in.
    pub(crate) fn replace_all(
        &mut self,
        mut standard: BTreeMap<StandardTag, BTreeSet<String>>,
        mut custom: BTreeMap<String, BTreeSet<String>>,
    ) {
        for tag in StandardTag::all() {
            standard.entry(*tag).or_default();
        }
        custom.retain(|_, codes| !codes.is_empty());
        self.standard = standard;
        self.custom = custom;
    }
}

fn lookup_standard(tag: &str) -> TaggerResult<StandardTag> {
    StandardTag::parse(tag).ok_or_else(|| TaggerError::InvalidTag(tag.to_string()))
}

/// Custom tag names are stored trimmed and lower-cased
pub(crate) fn normalize_custom(name: &str) -> String {
    name.trim().to_lowercase()
}
