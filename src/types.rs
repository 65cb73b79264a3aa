//! The manifest data model shared by the scan and generate stages.
//!
//! A [`Manifest`] maps category names to item filenames. Unlike a plain hash
//! map it keeps insertion order, which is what the generated JavaScript
//! object shows. Re-inserting an existing category keeps the key where it
//! was first inserted and only replaces (or extends) its value.

use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

/// What happens when two directories produce the same category name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum CollisionPolicy {
    /// The directory visited last wins; earlier items are dropped.
    #[default]
    Overwrite,
    /// Items of every same-named directory are concatenated in visit order.
    Merge,
}

/// One category and the item filenames recorded for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub items: Vec<String>,
}

/// Ordered category → items mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    categories: Vec<Category>,
}

impl Manifest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `items` under `name` according to `policy`.
    ///
    /// A new name is appended at the end. An existing name keeps its
    /// position; its items are replaced ([`CollisionPolicy::Overwrite`]) or
    /// extended ([`CollisionPolicy::Merge`]).
    pub fn insert(&mut self, name: String, items: Vec<String>, policy: CollisionPolicy) {
        match self.categories.iter_mut().find(|c| c.name == name) {
            Some(existing) => match policy {
                CollisionPolicy::Overwrite => existing.items = items,
                CollisionPolicy::Merge => existing.items.extend(items),
            },
            None => self.categories.push(Category { name, items }),
        }
    }

    /// Items recorded for a category, if the category exists.
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.categories
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.items.as_slice())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Category names in manifest order.
    pub fn names(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.name.as_str()).collect()
    }

    /// Total number of item filenames across all categories.
    pub fn item_count(&self) -> usize {
        self.categories.iter().map(|c| c.items.len()).sum()
    }
}

impl Serialize for Manifest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.categories.len()))?;
        for category in &self.categories {
            map.serialize_entry(&category.name, &category.items)?;
        }
        map.end()
    }
}
