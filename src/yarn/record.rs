//! Parsed yarn.lock data model

use super::source::Source;
use serde::Serialize;
use std::collections::BTreeMap;
use std::collections::btree_map;

/// One resolved package entry.
///
/// String fields stay empty when the stanza did not carry them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PackageRecord {
    pub version: String,
    pub resolved: String,
    pub integrity: String,
    /// Dependency name -> version constraint
    pub dependencies: BTreeMap<String, String>,
}

impl PackageRecord {
    /// Classify where this package was fetched from
    pub fn source(&self) -> Source {
        Source::from_resolved(&self.resolved)
    }
}

/// Package key (as written in the stanza header) -> record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LockfileDatabase {
    entries: BTreeMap<String, PackageRecord>,
}

impl LockfileDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a finished record. A record already stored under `key` is
    /// replaced wholesale and returned.
    pub fn insert(&mut self, key: String, record: PackageRecord) -> Option<PackageRecord> {
        self.entries.insert(key, record)
    }

    pub fn get(&self, key: &str) -> Option<&PackageRecord> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, PackageRecord> {
        self.entries.iter()
    }

    /// Entries whose key names `name`, compared case-insensitively.
    ///
    /// `lodash` matches `lodash@^4.17.0`; `@types/node` matches
    /// `@types/node@^18.0.0`.
    pub fn find_by_name<'a>(
        &'a self,
        name: &str,
    ) -> impl Iterator<Item = (&'a str, &'a PackageRecord)> + use<'a> {
        let wanted = name.to_lowercase();
        self.entries
            .iter()
            .filter(move |(key, _)| package_name(key).to_lowercase() == wanted)
            .map(|(key, record)| (key.as_str(), record))
    }

    /// Keep only the entries for which `keep` returns true
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&str, &PackageRecord) -> bool,
    {
        self.entries.retain(|key, record| keep(key, record));
    }

    /// Total number of dependency constraints across all records
    pub fn dependency_count(&self) -> usize {
        self.entries.values().map(|r| r.dependencies.len()).sum()
    }
}

impl<'a> IntoIterator for &'a LockfileDatabase {
    type Item = (&'a String, &'a PackageRecord);
    type IntoIter = btree_map::Iter<'a, String, PackageRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Extract the package name from a key like `lodash@^4.17.0` or
/// `@types/node@^18.0.0`.
///
/// Keys without a version separator are returned whole.
pub fn package_name(key: &str) -> &str {
    // Scoped packages (@scope/name@range): the separator is the @ after the slash
    if key.starts_with('@') {
        let Some(slash) = key.find('/') else {
            return key;
        };
        match key[slash + 1..].find('@') {
            Some(at) => &key[..slash + 1 + at],
            None => key,
        }
    } else {
        match key.find('@') {
            Some(at) => &key[..at],
            None => key,
        }
    }
}
