use serde::{Deserialize, Serialize};

use crate::catalogue::{Catalogue, Category};
use crate::normalize::normalize;
use crate::{EssenceError, Result};

/// Separator between the category label and its value in an input entry.
pub const DELIMITER: char = ':';

/// The attribute combination the user is after.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Wanted {
    pub base: String,
    pub additional: String,
    pub skill: String,
}

impl Wanted {
    pub fn value(&self, category: Category) -> &str {
        match category {
            Category::Base => &self.base,
            Category::Additional => &self.additional,
            Category::Skill => &self.skill,
        }
    }
}

/// Build the three `Label:value` entries a front end submits.
pub fn entries(base: &str, additional: &str, skill: &str) -> [String; 3] {
    [
        format!("{}{DELIMITER}{base}", Category::Base.label()),
        format!("{}{DELIMITER}{additional}", Category::Additional.label()),
        format!("{}{DELIMITER}{skill}", Category::Skill.label()),
    ]
}

/// Parse exactly three `Label:value` entries, one per category, in any order.
///
/// Each entry holds exactly one delimiter.
pub fn parse_wanted<S: AsRef<str>>(input: &[S], catalogue: &Catalogue) -> Result<Wanted> {
    if input.len() != 3 {
        return Err(EssenceError::EntryCount(input.len()));
    }

    let mut base = None;
    let mut additional = None;
    let mut skill = None;
    let mut seen = [0usize; 3];

    for raw in input {
        let entry = raw.as_ref().trim();
        let (label, value) = entry
            .split_once(DELIMITER)
            .map(|(l, v)| (l.trim(), v.trim()))
            .filter(|(l, v)| !l.is_empty() && !v.is_empty() && !v.contains(DELIMITER))
            .ok_or_else(|| EssenceError::Format(entry.to_string()))?;

        let category = Category::from_label(label)
            .ok_or_else(|| EssenceError::UnknownCategory(entry.to_string()))?;

        let value = normalize(category, value, catalogue);
        match category {
            Category::Base => {
                seen[0] += 1;
                base = Some(value);
            }
            Category::Additional => {
                seen[1] += 1;
                additional = Some(value);
            }
            Category::Skill => {
                seen[2] += 1;
                skill = Some(value);
            }
        }
    }

    match (base, additional, skill) {
        (Some(base), Some(additional), Some(skill)) if seen == [1, 1, 1] => Ok(Wanted {
            base,
            additional,
            skill,
        }),
        _ => Err(EssenceError::Cardinality),
    }
}
