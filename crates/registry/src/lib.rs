//! Symbol type registry.
//!
//! A [`SymbolRegistry`] pairs each declarative [`SymbolSpec`] with the
//! constructor that instantiates the symbol, owns the library identity
//! (name plus extensibility version), and builds the discovery
//! [`Manifest`] a host fetches.

pub mod manifest;
pub mod spec;

pub use manifest::{camel_case, Manifest, ManifestEntry};
pub use spec::{
    ConfigGroup, ConfigProp, ConfigPropKind, DataParams, DataShape, SymbolSpec, SystemInput,
    DISPLAY_CATEGORY, EXT_VERSION,
};

use tracing::debug;

use vizlet_core::{Result, Symbol, VizletError};

/// Constructor for one symbol type.
pub type SymbolCtor = fn() -> Box<dyn Symbol>;

struct Registered {
    spec: SymbolSpec,
    ctor: SymbolCtor,
}

impl std::fmt::Debug for Registered {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registered").field("spec", &self.spec.name).finish()
    }
}

/// All symbol types exported by one plugin library.
#[derive(Debug)]
pub struct SymbolRegistry {
    library: String,
    version: u32,
    entries: Vec<Registered>,
}

impl SymbolRegistry {
    /// Empty registry for the library `name` (e.g. the crate name of the
    /// plugin bundle).
    pub fn new(library: &str) -> Self {
        Self { library: library.to_string(), version: EXT_VERSION, entries: Vec::new() }
    }

    pub fn library(&self) -> &str {
        &self.library
    }

    /// Extensibility contract version this registry speaks.
    pub fn version(&self) -> u32 {
        self.version
    }

    /// Register a symbol type. Names are unique within a registry;
    /// a duplicate is rejected, keeping the first registration.
    pub fn register(&mut self, spec: SymbolSpec, ctor: SymbolCtor) -> Result<()> {
        if self.entries.iter().any(|e| e.spec.name == spec.name) {
            return Err(VizletError::Registry(format!(
                "symbol type '{}' is already registered",
                spec.name
            )));
        }
        debug!(name = %spec.name, "registered symbol type");
        self.entries.push(Registered { spec, ctor });
        Ok(())
    }

    /// Instantiate a fresh symbol of the named type.
    pub fn create(&self, name: &str) -> Option<Box<dyn Symbol>> {
        self.entries.iter().find(|e| e.spec.name == name).map(|e| (e.ctor)())
    }

    /// Spec of the named type, if registered.
    pub fn spec(&self, name: &str) -> Option<&SymbolSpec> {
        self.entries.iter().find(|e| e.spec.name == name).map(|e| &e.spec)
    }

    /// All registered specs, in registration order.
    pub fn specs(&self) -> impl Iterator<Item = &SymbolSpec> {
        self.entries.iter().map(|e| &e.spec)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Discovery manifest for this library, served under `base_url`.
    pub fn manifest(&self, base_url: &str) -> Manifest {
        Manifest::for_library(&self.library, base_url)
    }
}
