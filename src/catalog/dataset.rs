//! Cafe Dataset Module
//!
//! Read-only mapping from a lowercase city key to its ordered cafe names.

use std::collections::HashMap;

// == Cafe Dataset ==
/// Immutable lookup table of cafes per city.
///
/// Order within a city is the display order and is never changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CafeDataset {
    cities: HashMap<String, Vec<String>>,
}

impl CafeDataset {
    // == Constructors ==
    /// Creates an empty dataset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) a city and its cafes.
    ///
    /// The city key is stored lowercased; lookups are exact.
    pub fn with_city<C, I, S>(mut self, city: C, cafes: I) -> Self
    where
        C: AsRef<str>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cities.insert(
            city.as_ref().to_lowercase(),
            cafes.into_iter().map(Into::into).collect(),
        );
        self
    }

    /// The seed table served by the binary.
    pub fn builtin() -> Self {
        Self::new()
            .with_city(
                "moscow",
                [
                    "Мир кофе",
                    "Сладкоежка",
                    "Кофе и завтраки",
                    "Сытый студент",
                    "Вилка и ложка",
                ],
            )
            .with_city("tula", ["Дом чая", "Пряничный двор", "Самоварная"])
    }

    // == Lookup ==
    /// Ordered cafes for `city`, or `None` when the city is unknown.
    pub fn cafes(&self, city: &str) -> Option<&[String]> {
        self.cities.get(city).map(Vec::as_slice)
    }

    /// Returns true if `city` is a known key.
    pub fn contains_city(&self, city: &str) -> bool {
        self.cities.contains_key(city)
    }

    /// Known city keys, sorted.
    pub fn cities(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.cities.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// Number of cities.
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    /// Returns true if no city is known.
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }
}

impl<C, V> FromIterator<(C, V)> for CafeDataset
where
    C: AsRef<str>,
    V: IntoIterator,
    V::Item: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (C, V)>>(iter: T) -> Self {
        iter.into_iter()
            .fold(Self::new(), |dataset, (city, cafes)| {
                dataset.with_city(city, cafes)
            })
    }
}
