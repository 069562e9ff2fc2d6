//! Lock-pattern calculator for essence drops.
//!
//! Given the base / additional / skill combination a player wants, work out
//! for every area which slot locks could make that combination drop, and
//! which catalogue weapons each lock would also produce.

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

mod catalogue;
mod collection;
mod consolidate;
mod lock;
mod normalize;
pub mod report;
mod tables;
mod wanted;

pub use catalogue::{Area, Catalogue, Category, Item, Pool, RarityTier, WeaponClass};
pub use collection::Collection;
pub use consolidate::{consolidate, ByRarity, PatternGroup};
pub use lock::{combinations, enumerate, items_under_pattern, Lock, LockMode, LockPattern};
pub use normalize::{normalize, BOOST_SUFFIX, UP_SUFFIX};
pub use wanted::{entries, parse_wanted, Wanted, DELIMITER};

#[derive(Debug, Error)]
pub enum EssenceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("tables error: {0}")]
    Tables(String),
    #[error("invalid input: enter exactly 3 entries (one each of Base, Additional, Skill)")]
    EntryCount(usize),
    #[error("invalid input: {0}")]
    Format(String),
    #[error("invalid input (Base/Additional/Skill only): {0}")]
    UnknownCategory(String),
    #[error("invalid input: exactly one each of Base, Additional, Skill is required")]
    Cardinality,
}

pub type Result<T> = std::result::Result<T, EssenceError>;

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct AreaResult {
    pub area_name: String,
    pub groups: Vec<PatternGroup>,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Calculation {
    pub wanted: Wanted,
    pub results: Vec<AreaResult>,
}

/// Validate raw `Label:value` entries, then evaluate every area.
pub fn run<S: AsRef<str>>(input: &[S], catalogue: &Catalogue) -> Result<Calculation> {
    let wanted = parse_wanted(input, catalogue)?;
    let results = calculate(&wanted, catalogue);
    Ok(Calculation { wanted, results })
}

/// Evaluate every area, in table order, for an already validated target.
pub fn calculate(wanted: &Wanted, catalogue: &Catalogue) -> Vec<AreaResult> {
    catalogue
        .areas()
        .iter()
        .map(|area| {
            let patterns = enumerate(area, wanted);
            let groups = consolidate(area, catalogue.items(), &patterns);
            debug!(
                area = %area.name,
                patterns = patterns.len(),
                groups = groups.len(),
                "area evaluated"
            );
            AreaResult {
                area_name: area.name.clone(),
                groups,
            }
        })
        .collect()
}
