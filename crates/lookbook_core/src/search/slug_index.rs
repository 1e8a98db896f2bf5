//! Slug index built from a freshly fetched collection.

use crate::model::entity::DirectoryEntry;
use log::warn;
use std::collections::HashMap;

/// Slug → entity index. The first entity carrying a slug wins.
///
/// Colliding slugs are counted but not disambiguated.
#[derive(Debug, Clone)]
pub struct SlugIndex<E> {
    entries: Vec<E>,
    positions: HashMap<String, usize>,
    collisions: usize,
}

impl<E: DirectoryEntry> SlugIndex<E> {
    pub fn build(entries: Vec<E>) -> Self {
        let mut positions = HashMap::with_capacity(entries.len());
        let mut collisions = 0;
        for (position, entry) in entries.iter().enumerate() {
            if positions.contains_key(entry.slug()) {
                collisions += 1;
                continue;
            }
            positions.insert(entry.slug().to_string(), position);
        }
        if collisions > 0 {
            warn!(
                "event=slug_collision module=search status=warn collisions={}",
                collisions
            );
        }
        Self {
            entries,
            positions,
            collisions,
        }
    }

    pub fn get(&self, slug: &str) -> Option<&E> {
        self.positions
            .get(slug)
            .and_then(|position| self.entries.get(*position))
    }

    /// Consumes the index and returns the entity for `slug`.
    pub fn into_entry(mut self, slug: &str) -> Option<E> {
        let position = self.positions.get(slug).copied()?;
        Some(self.entries.swap_remove(position))
    }

    pub fn collisions(&self) -> usize {
        self.collisions
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::SlugIndex;
    use crate::model::entity::DirectoryEntry;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: &'static str,
        slug: &'static str,
    }

    impl DirectoryEntry for Row {
        fn id(&self) -> &str {
            self.id
        }

        fn display_name(&self) -> &str {
            self.slug
        }

        fn slug(&self) -> &str {
            self.slug
        }
    }

    #[test]
    fn first_entity_wins_on_collision() {
        let index = SlugIndex::build(vec![
            Row { id: "rec1", slug: "jane-doe" },
            Row { id: "rec2", slug: "john-roe" },
            Row { id: "rec3", slug: "jane-doe" },
        ]);
        assert_eq!(index.collisions(), 1);
        assert_eq!(index.len(), 2);
        assert_eq!(index.get("jane-doe").map(|row| row.id), Some("rec1"));
        assert_eq!(index.into_entry("jane-doe").map(|row| row.id), Some("rec1"));
    }

    #[test]
    fn missing_slug_is_none() {
        let index = SlugIndex::build(vec![Row { id: "rec1", slug: "a" }]);
        assert!(index.get("b").is_none());
        assert!(index.into_entry("b").is_none());
    }
}
