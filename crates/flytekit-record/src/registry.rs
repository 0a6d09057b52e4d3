//! TypeRegistry: lookup table of generated realizations
//!
//! Plays the role of a class path: realizations are found by the name the
//! naming convention derives from a record's type name. The global registry
//! is assembled once from the registrations `#[derive(Record)]` submits at
//! link time and is read-only afterwards, so it can be shared freely across
//! threads.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use tracing::{debug, warn};

use crate::generated::GeneratedType;
use crate::record::Generated;

/// Link-time registration of a generated realization.
///
/// Submitted by `#[derive(Record)]` through `inventory::submit!`.
pub struct GeneratedEntry {
    build: fn() -> GeneratedType,
}

impl GeneratedEntry {
    /// Create an entry from the realization's descriptor function
    pub const fn new(build: fn() -> GeneratedType) -> Self {
        GeneratedEntry { build }
    }
}

inventory::collect!(GeneratedEntry);

static GLOBAL: Lazy<TypeRegistry> = Lazy::new(|| {
    let mut registry = TypeRegistry::new();
    for entry in inventory::iter::<GeneratedEntry> {
        registry.register((entry.build)());
    }
    debug!(count = registry.len(), "built global type registry");
    registry
});

/// Generated realizations keyed by registered name.
#[derive(Debug, Clone)]
pub struct TypeRegistry {
    types: HashMap<String, GeneratedType>,
}

impl TypeRegistry {
    /// Create a registry holding only the realization of the `()` marker
    pub fn new() -> Self {
        let mut registry = TypeRegistry {
            types: HashMap::new(),
        };
        registry.register_type::<()>();
        registry
    }

    /// The process-wide registry of every derived record
    pub fn global() -> &'static TypeRegistry {
        &GLOBAL
    }

    /// Register a realization. The first registration of a name wins;
    /// returns `false` if the name was already taken.
    pub fn register(&mut self, generated: GeneratedType) -> bool {
        if self.types.contains_key(generated.name()) {
            warn!(
                name = generated.name(),
                constructs = generated.constructs_name(),
                "duplicate generated type ignored"
            );
            return false;
        }
        self.types.insert(generated.name().to_string(), generated);
        true
    }

    /// Register the realization of `T`
    pub fn register_type<T: Generated>(&mut self) -> bool {
        self.register(T::generated())
    }

    /// Look up a realization by registered name
    pub fn get(&self, name: &str) -> Option<&GeneratedType> {
        self.types.get(name)
    }

    /// Check if a name is registered
    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// Number of registered realizations
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.types.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
