use derive_more::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Names a kind of entity, in singular and plural form.
///
/// Displays as the singular name, e.g. `movie`.
#[derive(Debug, Clone, Copy, Display, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[display(fmt = "{}", name)]
pub struct EntityKind {
    name: &'static str,
    plural: &'static str,
}

impl EntityKind {
    pub const fn new(name: &'static str, plural: &'static str) -> Self {
        EntityKind { name, plural }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn plural(&self) -> &'static str {
        self.plural
    }

    /// Whether this kind is spelled exactly `name`/`plural`.
    ///
    /// Usable in `const` context, where generated stores check that their
    /// method names agree with the kinds they hold.
    pub const fn is_named(&self, name: &str, plural: &str) -> bool {
        const_str_eq(self.name, name) && const_str_eq(self.plural, plural)
    }
}

const fn const_str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }

    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }

    true
}

/// A value that can be kept in a [`Collection`](crate::collection::Collection).
///
/// The id must be unique within the entity's kind; adding a second value
/// with the same id replaces the first.
pub trait Entity: Clone {
    const KIND: EntityKind;

    fn id(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Movie {
    pub id: String,
    pub director: String,
}

impl Movie {
    pub fn new(id: impl Into<String>, director: impl Into<String>) -> Self {
        Movie {
            id: id.into(),
            director: director.into(),
        }
    }
}

impl Entity for Movie {
    const KIND: EntityKind = EntityKind::new("movie", "movies");

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Song {
    pub id: String,
    pub singer: String,
}

impl Song {
    pub fn new(id: impl Into<String>, singer: impl Into<String>) -> Self {
        Song {
            id: id.into(),
            singer: singer.into(),
        }
    }
}

impl Entity for Song {
    const KIND: EntityKind = EntityKind::new("song", "songs");

    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn kind_displays_singular_name() {
        assert_eq!(Movie::KIND.to_string(), "movie");
        assert_eq!(Song::KIND.plural(), "songs");
    }

    #[test]
    fn is_named_compares_both_spellings() {
        assert!(Movie::KIND.is_named("movie", "movies"));
        assert!(!Movie::KIND.is_named("film", "movies"));
        assert!(!Movie::KIND.is_named("movie", "movie"));
        assert!(!EntityKind::new("person", "people").is_named("person", "persons"));
    }

    #[test]
    #[cfg(feature = "serde")]
    fn deserializes_from_json() -> Result<(), anyhow::Error> {
        let movie: Movie =
            serde_json::from_value(serde_json::json!({"id": "m1", "director": "Nolan"}))?;

        assert_eq!(movie, Movie::new("m1", "Nolan"));
        assert_eq!(movie.id(), "m1");

        Ok(())
    }
}
