use crate::{
    entity::{Movie, Song},
    entity_store,
};

/// Movies and songs, each kept in its own collection.
///
/// See the crate docs for the generated accessors.
#[entity_store]
#[derive(Debug)]
pub struct DataStore {
    movie: Movie,
    song: Song,
}
