use crate::{
    collection::Collection,
    entity::{Entity, EntityKind},
    error::StoreResult,
};

/// A schema of entity kinds, each backed by its own [`Collection`].
///
/// Usually implemented by [`entity_store`](macro@crate::entity_store) rather than by hand.
pub trait Store {
    /// The kinds held by this store, in declaration order.
    const KINDS: &'static [EntityKind];
}

/// The store has a collection for entities of type `E`.
pub trait Holds<E: Entity>: Store {
    fn collection(&self) -> &Collection<E>;
}

/// Kind-generic access to any [`Store`].
///
/// The named accessors generated for a schema (`get_movie`, `clear_songs`, ...)
/// are shorthands for these, with the kind picked by the type parameter.
pub trait StoreEx: Store {
    fn collection_of<E: Entity>(&self) -> &Collection<E>
    where
        Self: Holds<E>,
    {
        Holds::<E>::collection(self)
    }

    fn get<E: Entity>(&self, id: &str) -> StoreResult<E>
    where
        Self: Holds<E>,
    {
        self.collection_of::<E>().get(id)
    }

    fn get_all<E: Entity>(&self) -> Vec<E>
    where
        Self: Holds<E>,
    {
        self.collection_of::<E>().get_all()
    }

    fn add<E: Entity>(&self, entity: E) -> E
    where
        Self: Holds<E>,
    {
        self.collection_of::<E>().add(entity)
    }

    fn clear<E: Entity>(&self)
    where
        Self: Holds<E>,
    {
        self.collection_of::<E>().clear()
    }

    fn count<E: Entity>(&self) -> usize
    where
        Self: Holds<E>,
    {
        self.collection_of::<E>().len()
    }

    fn contains<E: Entity>(&self, id: &str) -> bool
    where
        Self: Holds<E>,
    {
        self.collection_of::<E>().contains(id)
    }
}

impl<S: Store> StoreEx for S {}

#[cfg(test)]
mod test {
    use crate::{
        entity::{Entity, Movie, Song},
        error::StoreError,
        DataStore,
    };

    use super::*;

    #[test]
    fn lists_kinds_in_declaration_order() {
        assert_eq!(DataStore::KINDS, &[Movie::KIND, Song::KIND]);
    }

    #[test]
    fn generic_access_matches_named_accessors() -> Result<(), anyhow::Error> {
        let store = DataStore::new();

        store.add(Movie::new("m1", "Nolan"));
        store.add_song(Song::new("s1", "Adele"));

        assert_eq!(store.get_movie("m1")?, store.get::<Movie>("m1")?);
        assert_eq!(store.get_all_songs(), store.get_all::<Song>());
        assert_eq!(store.count::<Movie>(), 1);
        assert!(store.contains::<Song>("s1"));
        assert!(!store.contains::<Movie>("s1"));

        Ok(())
    }

    #[test]
    fn generic_clear_only_touches_one_kind() {
        let store = DataStore::new();

        store.add(Movie::new("m1", "Nolan"));
        store.add(Song::new("s1", "Adele"));
        store.clear::<Song>();

        assert_eq!(store.count::<Song>(), 0);
        assert_eq!(store.count::<Movie>(), 1);
        assert_eq!(
            store.get::<Song>("s1"),
            Err(StoreError::not_found(Song::KIND, "s1"))
        );
    }
}
