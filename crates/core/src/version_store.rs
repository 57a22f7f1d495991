use serde::Serialize;

use crate::{Properties, StoreError};

pub const VERSION_MAJOR: &str = "version_major";
pub const VERSION_MINOR: &str = "version_minor";
pub const VERSION_PATCH: &str = "version_patch";
pub const VERSION_BUILD: &str = "version_build";
pub const VERSION_STORE: &str = "version_store";

/// Counter values held by a version store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionCounters {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    pub build: u32,
    pub store: u32,
}

/// Persisted build counters backed by a properties file.
///
/// The counters are parsed once from the underlying properties; setters keep both views in
/// sync so the store can be written back without losing unrelated keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionStore {
    file_name: String,
    properties: Properties,
    counters: VersionCounters,
}

impl VersionStore {
    /// # Errors
    /// Returns error if a counter key is missing or holds something other than a non-negative
    /// integer.
    pub fn from_properties(file_name: &str, properties: Properties) -> Result<Self, StoreError> {
        let counters = VersionCounters {
            major: parse_counter(file_name, &properties, VERSION_MAJOR)?,
            minor: parse_counter(file_name, &properties, VERSION_MINOR)?,
            patch: parse_counter(file_name, &properties, VERSION_PATCH)?,
            build: parse_counter(file_name, &properties, VERSION_BUILD)?,
            store: parse_counter(file_name, &properties, VERSION_STORE)?,
        };
        Ok(Self {
            file_name: file_name.to_string(),
            properties,
            counters,
        })
    }

    /// Fresh store for a new module.
    #[must_use]
    pub fn initial(file_name: &str, major: u32, minor: u32) -> Self {
        let counters = VersionCounters {
            major,
            minor,
            patch: 0,
            build: 0,
            store: 1,
        };
        let properties = [
            (VERSION_MAJOR, major),
            (VERSION_MINOR, minor),
            (VERSION_PATCH, counters.patch),
            (VERSION_BUILD, counters.build),
            (VERSION_STORE, counters.store),
        ]
        .into_iter()
        .map(|(key, value)| (key, value.to_string()))
        .collect();
        Self {
            file_name: file_name.to_string(),
            properties,
            counters,
        }
    }

    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    #[must_use]
    pub const fn counters(&self) -> VersionCounters {
        self.counters
    }

    #[must_use]
    pub const fn properties(&self) -> &Properties {
        &self.properties
    }

    pub fn set_patch(&mut self, patch: u32) {
        self.counters.patch = patch;
        self.properties.set(VERSION_PATCH, patch.to_string());
    }

    pub fn set_build(&mut self, build: u32) {
        self.counters.build = build;
        self.properties.set(VERSION_BUILD, build.to_string());
    }

    pub fn set_store(&mut self, store: u32) {
        self.counters.store = store;
        self.properties.set(VERSION_STORE, store.to_string());
    }
}

fn parse_counter(file_name: &str, properties: &Properties, key: &str) -> Result<u32, StoreError> {
    let value = properties.get(key).ok_or_else(|| StoreError::MissingKey {
        file: file_name.to_string(),
        key: key.to_string(),
    })?;
    value
        .trim()
        .parse::<u32>()
        .map_err(|_| StoreError::InvalidNumber {
            key: key.to_string(),
            value: value.to_string(),
        })
}
