use std::collections::HashMap;

use parking_lot::RwLock;

use crate::{
    entity::Entity,
    error::{StoreError, StoreResult},
};

/// All stored values of one entity kind, keyed by id.
///
/// Each collection has its own lock, so operations on different kinds never
/// contend, while operations on the same kind see each other fully applied.
#[derive(Debug)]
pub struct Collection<E: Entity> {
    entries: RwLock<HashMap<String, E>>,
}

impl<E: Entity> Collection<E> {
    pub fn new() -> Self {
        Collection {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// A clone of the value stored under `id`.
    pub fn get(&self, id: &str) -> StoreResult<E> {
        self.entries.read().get(id).cloned().ok_or_else(|| {
            tracing::trace!(kind = %E::KIND, id, "lookup missed");
            StoreError::not_found(E::KIND, id)
        })
    }

    /// Clones of every stored value. The order is unspecified.
    pub fn get_all(&self) -> Vec<E> {
        self.entries.read().values().cloned().collect()
    }

    /// Stores `entity` under its id, replacing whatever was there.
    pub fn add(&self, entity: E) -> E {
        let replaced = self
            .entries
            .write()
            .insert(entity.id().to_owned(), entity.clone())
            .is_some();

        tracing::debug!(kind = %E::KIND, id = entity.id(), replaced, "stored entity");

        entity
    }

    pub fn clear(&self) {
        let removed = std::mem::take(&mut *self.entries.write()).len();

        tracing::debug!(kind = %E::KIND, removed, "cleared collection");
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.read().contains_key(id)
    }
}

impl<E: Entity> Default for Collection<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    use crate::{
        entity::{Entity, Movie, Song},
        error::StoreError,
    };

    use super::Collection;

    #[test]
    fn add_then_get() -> Result<(), anyhow::Error> {
        let movies = Collection::new();

        let added = movies.add(Movie::new("m1", "Nolan"));

        assert_eq!(added, Movie::new("m1", "Nolan"));
        assert_eq!(movies.get("m1")?, added);
        assert!(movies.contains("m1"));
        assert_eq!(movies.len(), 1);

        Ok(())
    }

    #[test]
    fn add_overwrites_same_id() -> Result<(), anyhow::Error> {
        let movies = Collection::new();

        movies.add(Movie::new("m1", "A"));
        movies.add(Movie::new("m1", "B"));

        assert_eq!(movies.get("m1")?.director, "B");
        assert_eq!(movies.get_all(), vec![Movie::new("m1", "B")]);

        Ok(())
    }

    #[test]
    fn missing_id_is_not_found() {
        let songs = Collection::<Song>::new();

        assert_eq!(
            songs.get("nope"),
            Err(StoreError::NotFound {
                kind: Song::KIND,
                id: "nope".to_owned(),
            })
        );
    }

    #[test]
    fn clear_empties_everything() {
        let songs = Collection::new();

        songs.add(Song::new("s1", "Adele"));
        songs.add(Song::new("s2", "Sia"));
        songs.clear();

        assert!(songs.is_empty());
        assert!(songs.get_all().is_empty());
        assert!(songs.get("s1").is_err());
    }

    #[test]
    fn collection_is_shareable_across_threads() {
        let songs = std::sync::Arc::new(Collection::new());

        let handles = (0..4)
            .map(|i| {
                let songs = songs.clone();
                std::thread::spawn(move || {
                    songs.add(Song::new(format!("s{i}"), "Adele"));
                })
            })
            .collect::<Vec<_>>();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(songs.len(), 4);
    }
}
