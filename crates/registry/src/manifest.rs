//! The discovery document a host fetches to find plugin bundles.

use serde::{Deserialize, Serialize};

/// One installable plugin library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestEntry {
    /// camelCased library name, e.g. `vizletSymbols`.
    pub name: String,
    /// Absolute URL of the library bundle.
    pub path: String,
}

/// Top-level manifest document: `{"extensions": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    pub extensions: Vec<ManifestEntry>,
}

impl Manifest {
    /// Manifest advertising a single library served under `base_url`.
    pub fn for_library(library: &str, base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        Self {
            extensions: vec![ManifestEntry {
                name: camel_case(library),
                path: format!("{base}/{library}.js"),
            }],
        }
    }
}

/// Convert a kebab/snake/space separated name to camelCase.
pub fn camel_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper_next = false;
    for ch in name.chars() {
        if matches!(ch, '-' | '_' | ' ') {
            upper_next = !out.is_empty();
        } else if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.extend(ch.to_lowercase());
        }
    }
    out
}
