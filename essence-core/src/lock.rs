use serde::{Deserialize, Serialize};

use crate::catalogue::{Area, Item};
use crate::wanted::Wanted;

/// Which non-base slot is fixed while the other rolls from the area pool.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LockMode {
    AdditionalFixed,
    SkillFixed,
}

impl LockMode {
    pub fn as_str(self) -> &'static str {
        match self {
            LockMode::AdditionalFixed => "additional-fixed",
            LockMode::SkillFixed => "skill-fixed",
        }
    }
}

/// The fixed slot of a pattern and the value it is fixed to.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(tag = "mode", content = "value")]
pub enum Lock {
    #[serde(rename = "additional-fixed")]
    Additional(String),
    #[serde(rename = "skill-fixed")]
    Skill(String),
}

impl Lock {
    pub fn mode(&self) -> LockMode {
        match self {
            Lock::Additional(_) => LockMode::AdditionalFixed,
            Lock::Skill(_) => LockMode::SkillFixed,
        }
    }

    pub fn value(&self) -> &str {
        match self {
            Lock::Additional(v) | Lock::Skill(v) => v,
        }
    }
}

/// One hypothetical slot configuration for an area.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct LockPattern {
    /// Three distinct base values, the wanted one first.
    pub base_choices: [String; 3],
    pub lock: Lock,
}

/// All `k`-element subsets of `items`, in backtracking order.
pub fn combinations<T: Clone>(items: &[T], k: usize) -> Vec<Vec<T>> {
    fn walk<T: Clone>(items: &[T], k: usize, start: usize, path: &mut Vec<T>, out: &mut Vec<Vec<T>>) {
        if path.len() == k {
            out.push(path.clone());
            return;
        }
        for i in start..items.len() {
            path.push(items[i].clone());
            walk(items, k, i + 1, path, out);
            path.pop();
        }
    }

    let mut out = Vec::new();
    walk(items, k, 0, &mut Vec::with_capacity(k), &mut out);
    out
}

/// Every lock configuration under which `area` could drop `wanted`.
///
/// Additional-fixed patterns come first, then skill-fixed ones, each in
/// base-triple order.
pub fn enumerate(area: &Area, wanted: &Wanted) -> Vec<LockPattern> {
    if !area.base.contains(&wanted.base) {
        return Vec::new();
    }

    // Both modes need the wanted additional and skill reachable: one is
    // fixed, the other has to be able to roll.
    if !area.additional.contains(&wanted.additional) || !area.skill.contains(&wanted.skill) {
        return Vec::new();
    }

    let others: Vec<&str> = area.base.iter().filter(|b| *b != wanted.base).collect();
    let triples: Vec<[String; 3]> = combinations(&others, 2)
        .into_iter()
        .map(|pair| [wanted.base.clone(), pair[0].to_string(), pair[1].to_string()])
        .collect();

    let locks = [
        Lock::Additional(wanted.additional.clone()),
        Lock::Skill(wanted.skill.clone()),
    ];

    let mut patterns = Vec::with_capacity(triples.len() * locks.len());
    for lock in &locks {
        for triple in &triples {
            patterns.push(LockPattern {
                base_choices: triple.clone(),
                lock: lock.clone(),
            });
        }
    }
    patterns
}

/// Catalogue items `area` can drop under `pattern`.
pub fn items_under_pattern<'c>(area: &Area, items: &'c [Item], pattern: &LockPattern) -> Vec<&'c Item> {
    items
        .iter()
        .filter(|item| pattern.base_choices.iter().any(|b| *b == item.base))
        .filter(|item| match &pattern.lock {
            Lock::Additional(fixed) => item.additional == *fixed && area.skill.contains(&item.skill),
            Lock::Skill(fixed) => item.skill == *fixed && area.additional.contains(&item.additional),
        })
        .collect()
}
