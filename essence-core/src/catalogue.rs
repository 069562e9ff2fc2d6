use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;
use tracing::warn;

use crate::tables::{AREA_TABLES, WEAPONS};
use crate::{EssenceError, Result};

/// The three roles an attribute value can play on a weapon or in an area pool.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Base,
    Additional,
    Skill,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Base, Category::Additional, Category::Skill];

    /// Literal label used in `Label:value` input entries.
    pub fn label(self) -> &'static str {
        match self {
            Category::Base => "Base",
            Category::Additional => "Additional",
            Category::Skill => "Skill",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Category::ALL.into_iter().find(|c| c.label() == label)
    }
}

/// Ordered set of values an area can roll for one category.
///
/// Duplicates are dropped on construction (first occurrence wins), so
/// iteration order is stable and deterministic.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct Pool {
    values: Vec<String>,
}

impl Pool {
    pub fn new<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut out: Vec<String> = Vec::new();
        for value in values {
            let value = value.into();
            if !out.contains(&value) {
                out.push(value);
            }
        }
        Pool { values: out }
    }

    pub fn contains(&self, value: &str) -> bool {
        self.values.iter().any(|v| v == value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl From<Vec<String>> for Pool {
    fn from(values: Vec<String>) -> Self {
        let raw_len = values.len();
        let pool = Pool::new(values);
        if pool.len() != raw_len {
            warn!(
                dropped = raw_len - pool.len(),
                "duplicate pool entries dropped while loading tables"
            );
        }
        pool
    }
}

impl From<Pool> for Vec<String> {
    fn from(pool: Pool) -> Self {
        pool.values
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Area {
    pub name: String,
    pub base: Pool,
    pub additional: Pool,
    pub skill: Pool,
}

impl Area {
    pub fn pool(&self, category: Category) -> &Pool {
        match category {
            Category::Base => &self.base,
            Category::Additional => &self.additional,
            Category::Skill => &self.skill,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WeaponClass {
    Sword,
    Greatsword,
    Polearm,
    Handcannon,
    ArtsUnit,
}

impl WeaponClass {
    pub fn label(self) -> &'static str {
        match self {
            WeaponClass::Sword => "Sword",
            WeaponClass::Greatsword => "Greatsword",
            WeaponClass::Polearm => "Polearm",
            WeaponClass::Handcannon => "Handcannon",
            WeaponClass::ArtsUnit => "Arts Unit",
        }
    }
}

/// Display bucket for an item's star rating.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RarityTier {
    Six,
    Five,
    Four,
    Other,
}

impl RarityTier {
    pub fn from_stars(stars: u8) -> Self {
        match stars {
            6 => RarityTier::Six,
            5 => RarityTier::Five,
            4 => RarityTier::Four,
            _ => RarityTier::Other,
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            RarityTier::Six => "6-star",
            RarityTier::Five => "5-star",
            RarityTier::Four => "4-star",
            RarityTier::Other => "?-star",
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub rarity: u8,
    pub class: WeaponClass,
    pub base: String,
    pub additional: String,
    pub skill: String,
}

impl Item {
    pub fn tier(&self) -> RarityTier {
        RarityTier::from_stars(self.rarity)
    }
}

/// Static areas table plus weapon catalogue. Read-only once built.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Catalogue {
    areas: Vec<Area>,
    items: Vec<Item>,
}

impl Catalogue {
    pub fn new(areas: Vec<Area>, items: Vec<Item>) -> Result<Self> {
        let mut seen = BTreeSet::new();
        for area in &areas {
            if !seen.insert(area.name.as_str()) {
                return Err(EssenceError::Tables(format!(
                    "duplicate area name: {}",
                    area.name
                )));
            }
        }
        // Groups identify weapons by name, so a repeated name would hide one.
        let mut seen = BTreeSet::new();
        for item in &items {
            if !seen.insert(item.name.as_str()) {
                return Err(EssenceError::Tables(format!(
                    "duplicate item name: {}",
                    item.name
                )));
            }
        }
        Ok(Catalogue { areas, items })
    }

    /// Tables compiled into the crate.
    pub fn builtin() -> &'static Catalogue {
        static BUILTIN: OnceLock<Catalogue> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            let areas = AREA_TABLES
                .iter()
                .map(|t| Area {
                    name: t.name.to_string(),
                    base: Pool::new(t.base.iter().copied()),
                    additional: Pool::new(t.additional.iter().copied()),
                    skill: Pool::new(t.skill.iter().copied()),
                })
                .collect();
            let items = WEAPONS
                .iter()
                .map(|w| Item {
                    name: w.name.to_string(),
                    rarity: w.rarity,
                    class: w.class,
                    base: w.base.to_string(),
                    additional: w.additional.to_string(),
                    skill: w.skill.to_string(),
                })
                .collect();
            Catalogue { areas, items }
        })
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: Catalogue = serde_json::from_str(json)?;
        Catalogue::new(raw.areas, raw.items)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)?;
        Catalogue::from_json_str(&data)
    }

    pub fn areas(&self) -> &[Area] {
        &self.areas
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// True when `value` appears in any area's pool, for any category.
    pub fn knows_value(&self, value: &str) -> bool {
        self.areas
            .iter()
            .any(|a| Category::ALL.iter().any(|&c| a.pool(c).contains(value)))
    }

    /// Sorted union of every area's pool for `category`.
    pub fn values(&self, category: Category) -> Vec<&str> {
        let set: BTreeSet<&str> = self
            .areas
            .iter()
            .flat_map(|a| a.pool(category).iter())
            .collect();
        set.into_iter().collect()
    }
}
