//! # Category Entity
//!
//! Article categories (product groups) and the id → name lookup table.

use crate::domain::value_objects::CategoryId;
use std::collections::HashMap;

/// An article category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    id: CategoryId,
    name: String,
}

impl Category {
    /// Creates a category.
    #[must_use]
    pub fn new(id: CategoryId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Returns the category id.
    #[inline]
    #[must_use]
    pub fn id(&self) -> &CategoryId {
        &self.id
    }

    /// Returns the display name.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Mapping from category id to display name.
///
/// Lookups never fail; an unknown id simply has no name.
///
/// # Examples
///
/// ```
/// use article_ek_proxy::domain::entities::category::{Category, CategoryMap};
/// use article_ek_proxy::domain::value_objects::CategoryId;
///
/// let map = CategoryMap::from_categories(vec![Category::new(CategoryId::new("1"), "CPU")]);
/// assert_eq!(map.name_of(&CategoryId::new("1")), Some("CPU"));
/// assert_eq!(map.name_of(&CategoryId::new("2")), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryMap {
    names: HashMap<CategoryId, String>,
}

impl CategoryMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the map from a category list. Later duplicates win.
    #[must_use]
    pub fn from_categories(categories: impl IntoIterator<Item = Category>) -> Self {
        let names = categories
            .into_iter()
            .map(|c| (c.id, c.name))
            .collect();
        Self { names }
    }

    /// Looks up the display name of a category.
    #[must_use]
    pub fn name_of(&self, id: &CategoryId) -> Option<&str> {
        self.names.get(id).map(String::as_str)
    }

    /// Returns the number of categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if the map holds no categories.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_duplicates_win() {
        let map = CategoryMap::from_categories(vec![
            Category::new(CategoryId::new("1"), "old"),
            Category::new(CategoryId::new("1"), "new"),
        ]);
        assert_eq!(map.len(), 1);
        assert_eq!(map.name_of(&CategoryId::new("1")), Some("new"));
    }

    #[test]
    fn empty_map() {
        let map = CategoryMap::new();
        assert!(map.is_empty());
        assert_eq!(map.name_of(&CategoryId::new("x")), None);
    }
}
