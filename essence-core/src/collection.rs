use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Names of weapons the player already owns.
///
/// Purely in-memory; serializes as a plain list so callers can store it
/// wherever they like.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Collection {
    owned: BTreeSet<String>,
}

impl Collection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_owned(&self, name: &str) -> bool {
        self.owned.contains(name)
    }
}

impl<S: Into<String>> FromIterator<S> for Collection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Collection {
            owned: iter.into_iter().map(Into::into).collect(),
        }
    }
}
