//! # entity-store
//!
//! `entity-store` is a small, type-safe, in-memory store for values addressed by a string id.
//! The store's surface is generated from a schema: declare which entity kinds it holds, and
//! every kind gets the same four accessors, with predictable names.
//!
//! It is not intended for persistence, querying, or anything beyond keeping values in memory
//! for the life of the process.
//!
//! # Quick example
//!
//! ```
//! use entity_store::{DataStore, Movie, Song, StoreError};
//!
//! let store = DataStore::new();
//!
//! store.add_movie(Movie::new("m1", "Nolan"));
//! store.add_song(Song::new("s1", "Adele"));
//!
//! assert_eq!(store.get_movie("m1")?.director, "Nolan");
//! assert_eq!(store.get_all_songs().len(), 1);
//!
//! store.clear_movies();
//! assert!(matches!(store.get_movie("m1"), Err(StoreError::NotFound { .. })));
//! # Ok::<(), StoreError>(())
//! ```
//!
//! # Main concepts
//!
//! ## Entity
//!
//! An [`Entity`] is any `Clone` value with a string id and a static [`EntityKind`].
//! Within one kind, an id addresses at most one value: adding a value under an id
//! that is already taken replaces the old one.
//!
//! ## Collection
//!
//! A [`Collection`] keeps every value of one kind. Collections are independent:
//! clearing one never touches another, and each has its own lock, so a store can be
//! shared between threads.
//!
//! ## Schema
//!
//! The [`entity_store`](macro@entity_store) attribute turns a struct whose fields name entity kinds into a store.
//! For a field `movie: Movie` it generates `get_all_movies`, `get_movie`, `add_movie`
//! and `clear_movies`:
//!
//! ```
//! use entity_store::{entity_store, Entity, EntityKind};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! pub struct Person {
//!     id: String,
//! }
//!
//! impl Entity for Person {
//!     const KIND: EntityKind = EntityKind::new("person", "people");
//!
//!     fn id(&self) -> &str {
//!         &self.id
//!     }
//! }
//!
//! #[entity_store]
//! pub struct Directory {
//!     #[plural = "people"]
//!     person: Person,
//! }
//!
//! let directory = Directory::new();
//! directory.add_person(Person { id: "p1".to_owned() });
//! assert_eq!(directory.get_all_people().len(), 1);
//! ```
//!
//! Field names and plurals must spell the entity's [`EntityKind`], so method names, error
//! messages and [`Store::KINDS`] always agree. Leaving out the `#[plural]` above, or naming
//! the field `film: Movie`, is a compile error:
//!
//! ```compile_fail
//! use entity_store::{entity_store, Movie};
//!
//! #[entity_store]
//! pub struct Cinema {
//!     film: Movie,
//! }
//! ```
//!
//! ## Generic access
//!
//! Every generated store also implements [`Store`] and [`Holds`] for each of its kinds, which
//! gives it the kind-generic methods of [`StoreEx`]: `store.get::<Movie>("m1")`,
//! `store.add(song)`, `store.clear::<Song>()`.

extern crate self as entity_store;

pub mod collection;
pub mod entity;
pub mod error;
pub mod model;
pub mod store;

pub use entity_store_macros::entity_store;

pub use crate::{
    collection::Collection,
    entity::{Entity, EntityKind, Movie, Song},
    error::{StoreError, StoreResult},
    model::DataStore,
    store::{Holds, Store, StoreEx},
};
