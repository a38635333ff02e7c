//! The static fact catalog: ten categories, each with an ordered list of
//! curated fact cards. Read-only at runtime.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::model::{Category, Fact};

mod animals;
mod architecture;
mod chemistry;
mod energy;
mod environment;
mod health;
mod music;
mod physics;
mod space;
mod technology;

static CATALOG: LazyLock<BTreeMap<Category, Vec<Fact>>> = LazyLock::new(|| {
    BTreeMap::from([
        (Category::Animals, animals::facts()),
        (Category::Architecture, architecture::facts()),
        (Category::Chemistry, chemistry::facts()),
        (Category::Energy, energy::facts()),
        (Category::Environment, environment::facts()),
        (Category::Health, health::facts()),
        (Category::Music, music::facts()),
        (Category::Physics, physics::facts()),
        (Category::Space, space::facts()),
        (Category::Technology, technology::facts()),
    ])
});

/// The ordered fact list for a category.
#[must_use]
pub fn facts_by_category(category: Category) -> &'static [Fact] {
    CATALOG
        .get(&category)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

/// Every fact in the catalog, in canonical category order.
pub fn all_facts() -> impl Iterator<Item = &'static Fact> {
    CATALOG.values().flatten()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_category_has_facts() {
        for category in Category::ALL {
            assert!(
                !facts_by_category(category).is_empty(),
                "no facts for {category}"
            );
        }
    }

    #[test]
    fn fact_ids_are_globally_unique() {
        let mut seen = HashSet::new();
        for fact in all_facts() {
            assert!(seen.insert(fact.id().clone()), "duplicate id {}", fact.id());
        }
    }

    #[test]
    fn facts_are_numbered_sequentially_within_each_category() {
        for category in Category::ALL {
            for (index, fact) in facts_by_category(category).iter().enumerate() {
                assert_eq!(fact.category(), category);
                assert_eq!(fact.fact_number() as usize, index + 1);
            }
        }
    }
}
