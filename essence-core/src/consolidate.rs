use serde::Serialize;
use std::collections::BTreeSet;
use tracing::trace;

use crate::catalogue::{Area, Item, RarityTier};
use crate::lock::{items_under_pattern, Lock, LockMode, LockPattern};

/// Items of a group, split by star rating.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct ByRarity {
    pub six: Vec<Item>,
    pub five: Vec<Item>,
    pub four: Vec<Item>,
    pub other: Vec<Item>,
}

impl ByRarity {
    fn push(&mut self, item: Item) {
        match item.tier() {
            RarityTier::Six => self.six.push(item),
            RarityTier::Five => self.five.push(item),
            RarityTier::Four => self.four.push(item),
            RarityTier::Other => self.other.push(item),
        }
    }

    /// Non-empty tiers, highest first.
    pub fn tiers(&self) -> impl Iterator<Item = (RarityTier, &[Item])> {
        [
            (RarityTier::Six, self.six.as_slice()),
            (RarityTier::Five, self.five.as_slice()),
            (RarityTier::Four, self.four.as_slice()),
            (RarityTier::Other, self.other.as_slice()),
        ]
        .into_iter()
        .filter(|(_, items)| !items.is_empty())
    }
}

/// Lock patterns of one area that all drop exactly the same items.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct PatternGroup {
    pub lock: Lock,
    /// Distinct sorted base triples, in order of first contribution.
    pub base_choices_list: Vec<[String; 3]>,
    /// Base values present in every triple of the group.
    pub required_choices: Vec<String>,
    /// Per triple, what is left after removing `required_choices`.
    pub variable_choices_list: Vec<Vec<String>>,
    pub items: Vec<Item>,
    pub by_rarity: ByRarity,
    /// Raw patterns folded into this group, duplicates included.
    pub pattern_count: usize,
}

impl PatternGroup {
    pub fn mode(&self) -> LockMode {
        self.lock.mode()
    }
}

#[derive(Eq, PartialEq)]
struct Signature {
    mode: LockMode,
    names: Vec<String>,
}

struct Draft<'c> {
    signature: Signature,
    lock: Lock,
    triples: Vec<[String; 3]>,
    items: Vec<&'c Item>,
    pattern_count: usize,
}

/// Fold `patterns` into groups keyed by mode and dropped item set.
///
/// Patterns that drop nothing are discarded. Groups come out ordered by
/// descending `pattern_count`; ties keep first-seen order.
pub fn consolidate(area: &Area, items: &[Item], patterns: &[LockPattern]) -> Vec<PatternGroup> {
    let mut drafts: Vec<Draft<'_>> = Vec::new();

    for pattern in patterns {
        let matched = items_under_pattern(area, items, pattern);
        if matched.is_empty() {
            trace!(area = %area.name, base = ?pattern.base_choices, mode = pattern.lock.mode().as_str(), "pattern drops nothing");
            continue;
        }

        let signature = Signature {
            mode: pattern.lock.mode(),
            names: matched
                .iter()
                .map(|i| i.name.clone())
                .collect::<BTreeSet<_>>()
                .into_iter()
                .collect(),
        };

        let mut triple = pattern.base_choices.clone();
        triple.sort();

        if let Some(draft) = drafts.iter_mut().find(|d| d.signature == signature) {
            draft.triples.push(triple);
            draft.pattern_count += 1;
        } else {
            drafts.push(Draft {
                signature,
                lock: pattern.lock.clone(),
                triples: vec![triple],
                items: matched,
                pattern_count: 1,
            });
        }
    }

    // Vec::sort_by is stable.
    drafts.sort_by(|a, b| b.pattern_count.cmp(&a.pattern_count));
    drafts.into_iter().map(finish).collect()
}

fn finish(draft: Draft<'_>) -> PatternGroup {
    let mut base_choices_list: Vec<[String; 3]> = Vec::new();
    for triple in draft.triples {
        if !base_choices_list.contains(&triple) {
            base_choices_list.push(triple);
        }
    }

    let required_choices = required_choices(&base_choices_list);
    let variable_choices_list = base_choices_list
        .iter()
        .map(|triple| {
            triple
                .iter()
                .filter(|c| !required_choices.contains(c))
                .cloned()
                .collect()
        })
        .collect();

    let mut seen = BTreeSet::new();
    let mut group_items = Vec::new();
    let mut by_rarity = ByRarity::default();
    for item in draft.items {
        if seen.insert(item.name.as_str()) {
            group_items.push(item.clone());
            by_rarity.push(item.clone());
        }
    }

    PatternGroup {
        lock: draft.lock,
        base_choices_list,
        required_choices,
        variable_choices_list,
        items: group_items,
        by_rarity,
        pattern_count: draft.pattern_count,
    }
}

/// Intersection of all triples, sorted.
fn required_choices(triples: &[[String; 3]]) -> Vec<String> {
    let Some((first, rest)) = triples.split_first() else {
        return Vec::new();
    };
    let mut common: BTreeSet<&String> = first.iter().collect();
    for triple in rest {
        common.retain(|c| triple.contains(c));
    }
    common.into_iter().cloned().collect()
}
