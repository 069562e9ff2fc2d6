use crate::catalogue::{Catalogue, Category};

/// Canonical suffix carried by base and additional values.
pub const BOOST_SUFFIX: &str = "Boost";

/// Alternate spelling some additional values use instead of [`BOOST_SUFFIX`].
pub const UP_SUFFIX: &str = "Up";

/// Map a user-typed label onto the spelling the area tables use.
///
/// Values that already appear verbatim in any pool are returned untouched,
/// before any suffix rule is applied. Otherwise base values gain the
/// `Boost` suffix, additional values gain it unless they end in `Boost` or
/// `Up`, and skills pass through. Never fails; an unknown value simply
/// matches nothing later on.
pub fn normalize(category: Category, raw: &str, catalogue: &Catalogue) -> String {
    let key = raw.trim();

    if key.is_empty() || catalogue.knows_value(key) {
        return key.to_string();
    }

    match category {
        Category::Base => with_suffix(key, &[BOOST_SUFFIX]),
        Category::Additional => with_suffix(key, &[BOOST_SUFFIX, UP_SUFFIX]),
        Category::Skill => key.to_string(),
    }
}

fn with_suffix(key: &str, accepted: &[&str]) -> String {
    if accepted.iter().any(|s| key.ends_with(s)) {
        key.to_string()
    } else {
        format!("{key} {BOOST_SUFFIX}")
    }
}
