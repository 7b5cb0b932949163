use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;

use crate::normalize;

/// Descriptive record for one framework type (linear, matrix, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameworkTypeInfo {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "normalize::one_or_many")]
    pub characteristics: Vec<String>,
    #[serde(default)]
    pub ideal_steps: String,
    /// Well-known frameworks of this type, as advertised by the backend.
    #[serde(default, deserialize_with = "normalize::one_or_many")]
    pub examples: Vec<String>,
}

/// A reference framework shown in the examples gallery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExampleEntry {
    pub name: String,
    #[serde(default, deserialize_with = "normalize::one_or_many")]
    pub elements: Vec<String>,
}

/// Read-only mapping keyed by framework type, in the order the server sent it.
///
/// Card grids are rendered in catalog order, so a plain `HashMap` would
/// reshuffle them between runs.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog<T> {
    entries: Vec<(String, T)>,
}

pub type TypeCatalog = Catalog<FrameworkTypeInfo>;
pub type ExampleCatalog = Catalog<ExampleEntry>;

impl<T> Default for Catalog<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T> Catalog<T> {
    pub fn get(&self, key: &str) -> Option<&T> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, T> FromIterator<(K, T)> for Catalog<T> {
    fn from_iter<I: IntoIterator<Item = (K, T)>>(iter: I) -> Self {
        let mut catalog = Catalog::default();
        for (key, value) in iter {
            let key = key.into();
            // Later duplicates win, same as a JSON object
            if let Some(slot) = catalog.entries.iter_mut().find(|(k, _)| *k == key) {
                slot.1 = value;
            } else {
                catalog.entries.push((key, value));
            }
        }
        catalog
    }
}

impl<T: Serialize> Serialize for Catalog<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Catalog<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CatalogVisitor<T>(PhantomData<T>);

        impl<'de, T: Deserialize<'de>> Visitor<'de> for CatalogVisitor<T> {
            type Value = Catalog<T>;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map keyed by framework type")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut pairs = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, value)) = access.next_entry::<String, T>()? {
                    pairs.push((key, value));
                }
                Ok(pairs.into_iter().collect())
            }
        }

        deserializer.deserialize_map(CatalogVisitor(PhantomData))
    }
}
