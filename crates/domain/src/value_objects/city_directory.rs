//! City name directory
//!
//! The weather provider expects romanized city names while users typically
//! ask in Chinese. The directory maps the common cases; anything it does not
//! know passes through unchanged and is left for the provider to resolve.

use std::collections::HashMap;

/// Built-in mappings from localized city names to provider identifiers
const BUILTIN_CITIES: [(&str, &str); 15] = [
    ("上海", "Shanghai"),
    ("北京", "Beijing"),
    ("广州", "Guangzhou"),
    ("深圳", "Shenzhen"),
    ("杭州", "Hangzhou"),
    ("南京", "Nanjing"),
    ("成都", "Chengdu"),
    ("武汉", "Wuhan"),
    ("西安", "Xian"),
    ("重庆", "Chongqing"),
    ("天津", "Tianjin"),
    ("苏州", "Suzhou"),
    ("厦门", "Xiamen"),
    ("青岛", "Qingdao"),
    ("大连", "Dalian"),
];

/// Lookup table from localized city names to provider-recognized names
#[derive(Debug, Clone)]
pub struct CityDirectory {
    entries: HashMap<String, String>,
}

impl CityDirectory {
    /// Create a directory with the built-in city table
    #[must_use]
    pub fn with_builtin() -> Self {
        Self {
            entries: BUILTIN_CITIES
                .iter()
                .map(|&(name, resolved)| (name.to_string(), resolved.to_string()))
                .collect(),
        }
    }

    /// Create an empty directory (every name passes through)
    #[must_use]
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Resolve a localized name to the provider form
    ///
    /// Unknown names are returned unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use domain::value_objects::CityDirectory;
    ///
    /// let cities = CityDirectory::with_builtin();
    /// assert_eq!(cities.resolve("上海"), "Shanghai");
    /// assert_eq!(cities.resolve("Paris"), "Paris");
    /// ```
    #[must_use]
    pub fn resolve<'a>(&'a self, name: &'a str) -> &'a str {
        self.entries.get(name).map_or(name, String::as_str)
    }

    /// Whether the directory has an explicit entry for this name
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Add or override entries, e.g. from configuration
    pub fn extend<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (String, String)>,
    {
        self.entries.extend(entries);
    }

    /// Number of explicit entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the directory has no explicit entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for CityDirectory {
    fn default() -> Self {
        Self::with_builtin()
    }
}
