//! Favorite listings, synchronised to a [`KeyValueStorage`] backend.
//!
//! The in-memory set is updated first and the whole set is written back
//! under [`FAVORITES_KEY`] after every change.

pub mod storage;

pub use storage::{FileStorage, KeyValueStorage, MemoryStorage};

use crate::error::{HomefinderError, Result};
use crate::models::Property;
use tracing::{info, warn};

/// Storage key holding the JSON array of favorite ids
pub const FAVORITES_KEY: &str = "favorites";

pub struct FavoritesStore<S: KeyValueStorage> {
    storage: S,
    ids: Vec<String>,
}

impl<S: KeyValueStorage> FavoritesStore<S> {
    /// Restore the set from storage; unreadable or malformed data yields an empty set
    pub fn load(storage: S) -> Self {
        let ids = match storage.get_item(FAVORITES_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<String>>(&raw) {
                Ok(mut ids) => {
                    let mut seen = std::collections::HashSet::new();
                    ids.retain(|id| seen.insert(id.clone()));
                    ids
                }
                Err(e) => {
                    warn!("Ignoring malformed favorites data: {}", e);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("Could not read favorites, starting empty: {}", e);
                Vec::new()
            }
        };

        Self { storage, ids }
    }

    /// Favorite ids in the order they were added
    pub fn favorites(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.ids.iter().any(|fav| fav == id)
    }

    /// Returns whether the set changed
    pub fn add_to_favorites(&mut self, property: &Property) -> Result<bool> {
        if self.is_favorite(&property.id) {
            return Ok(false);
        }
        self.ids.push(property.id.clone());
        self.persist()?;
        info!("Added to favorites: {}", property.title);
        Ok(true)
    }

    /// Returns whether the set changed
    pub fn remove_from_favorites(&mut self, id: &str) -> Result<bool> {
        let before = self.ids.len();
        self.ids.retain(|fav| fav != id);
        if self.ids.len() == before {
            return Ok(false);
        }
        self.persist()?;
        info!("Removed from favorites: {}", id);
        Ok(true)
    }

    /// Heart-button behaviour; returns the new membership
    pub fn toggle(&mut self, property: &Property) -> Result<bool> {
        if self.is_favorite(&property.id) {
            self.remove_from_favorites(&property.id)?;
            Ok(false)
        } else {
            self.add_to_favorites(property)?;
            Ok(true)
        }
    }

    /// Favorited properties in listing order
    pub fn favorite_properties<'a>(&self, properties: &'a [Property]) -> Vec<&'a Property> {
        properties.iter().filter(|p| self.is_favorite(&p.id)).collect()
    }

    fn persist(&self) -> Result<()> {
        let json = serde_json::to_string(&self.ids)
            .map_err(|e| HomefinderError::Storage(format!("failed to encode favorites: {}", e)))?;
        self.storage.set_item(FAVORITES_KEY, &json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::property;
    use std::sync::Arc;

    #[test]
    fn add_and_remove_are_idempotent() {
        let mut store = FavoritesStore::load(MemoryStorage::new());
        let p = property("1", "Austin", 100);

        assert!(store.add_to_favorites(&p).unwrap());
        assert!(!store.add_to_favorites(&p).unwrap());
        assert!(store.is_favorite("1"));
        assert_eq!(store.len(), 1);

        assert!(store.remove_from_favorites("1").unwrap());
        assert!(!store.remove_from_favorites("1").unwrap());
        assert!(!store.is_favorite("1"));
        assert!(store.is_empty());
    }

    #[test]
    fn every_mutation_is_persisted() {
        let storage = Arc::new(MemoryStorage::new());
        let mut store = FavoritesStore::load(Arc::clone(&storage));
        store.add_to_favorites(&property("1", "Austin", 1)).unwrap();
        store.add_to_favorites(&property("2", "Austin", 1)).unwrap();
        assert_eq!(
            storage.get_item(FAVORITES_KEY).unwrap().as_deref(),
            Some(r#"["1","2"]"#)
        );

        store.remove_from_favorites("1").unwrap();
        assert_eq!(
            storage.get_item(FAVORITES_KEY).unwrap().as_deref(),
            Some(r#"["2"]"#)
        );
    }

    #[test]
    fn reload_restores_membership() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FavoritesStore::load(FileStorage::new(dir.path()));
        store.add_to_favorites(&property("7", "Austin", 1)).unwrap();
        store.add_to_favorites(&property("3", "Austin", 1)).unwrap();

        let reloaded = FavoritesStore::load(FileStorage::new(dir.path()));
        assert_eq!(reloaded.favorites(), store.favorites());
        assert!(reloaded.is_favorite("7"));
        assert!(reloaded.is_favorite("3"));
    }

    #[test]
    fn malformed_storage_starts_empty() {
        let storage = MemoryStorage::new();
        storage.set_item(FAVORITES_KEY, "{oops").unwrap();
        assert!(FavoritesStore::load(storage).is_empty());

        let storage = MemoryStorage::new();
        storage.set_item(FAVORITES_KEY, r#"["1","1","2"]"#).unwrap();
        assert_eq!(FavoritesStore::load(storage).favorites(), ["1", "2"]);
    }

    #[test]
    fn unreadable_storage_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("favorites.json")).unwrap();
        let storage = FileStorage::new(dir.path());
        assert!(storage.get_item(FAVORITES_KEY).is_err());
        assert!(FavoritesStore::load(storage).is_empty());
    }

    #[test]
    fn toggle_flips_membership() {
        let mut store = FavoritesStore::load(MemoryStorage::new());
        let p = property("5", "Austin", 1);
        assert!(store.toggle(&p).unwrap());
        assert!(store.is_favorite("5"));
        assert!(!store.toggle(&p).unwrap());
        assert!(!store.is_favorite("5"));
    }

    #[test]
    fn favorite_properties_follow_listing_order() {
        let props: Vec<_> = ["a", "b", "c"].iter().map(|id| property(id, "Austin", 1)).collect();
        let mut store = FavoritesStore::load(MemoryStorage::new());
        store.add_to_favorites(&props[2]).unwrap();
        store.add_to_favorites(&props[0]).unwrap();
        let ids: Vec<_> = store
            .favorite_properties(&props)
            .into_iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, vec!["a", "c"]);
    }
}
