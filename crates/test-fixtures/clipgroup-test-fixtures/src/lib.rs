//! Named property-store snapshots shared by the clipgroup test suites.
//!
//! `fixtures/manifest.json` maps a snapshot name either to a file path or to a path plus the
//! ticks-per-frame of the document the snapshot came from.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::Deserialize;

static MANIFEST: Lazy<Manifest> = Lazy::new(|| {
    let raw = include_str!("../../../../fixtures/manifest.json");
    serde_json::from_str(raw).expect("fixtures manifest should parse")
});

#[derive(Debug, Deserialize)]
struct Manifest {
    stores: HashMap<String, StoreEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum StoreEntry {
    Path(String),
    Detailed {
        path: String,
        #[serde(default)]
        ticks_per_frame: Option<i32>,
    },
}

impl StoreEntry {
    fn file(&self) -> PathBuf {
        let rel = match self {
            StoreEntry::Path(path) | StoreEntry::Detailed { path, .. } => path,
        };
        Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("../../../fixtures")
            .join(rel)
    }
}

fn entry(name: &str) -> Result<&'static StoreEntry> {
    MANIFEST
        .stores
        .get(name)
        .ok_or_else(|| anyhow!("unknown store fixture '{name}'"))
}

/// Property store snapshots: JSON objects mapping property keys to a string or an array of
/// strings, as a host document root would hold them.
pub mod stores {
    use super::*;

    pub fn keys() -> Vec<String> {
        MANIFEST.stores.keys().cloned().collect()
    }

    /// Deserialize the snapshot, typically into `clipgroup_core::MemoryStore`.
    pub fn load<T: DeserializeOwned>(name: &str) -> Result<T> {
        let file = entry(name)?.file();
        let text = fs::read_to_string(&file)
            .with_context(|| format!("failed to read store fixture at {}", file.display()))?;
        serde_json::from_str(&text).with_context(|| format!("failed to parse store fixture {name}"))
    }

    /// Ticks per frame of the document the snapshot was taken from, if recorded.
    pub fn ticks_per_frame(name: &str) -> Result<Option<i32>> {
        Ok(match entry(name)? {
            StoreEntry::Path(_) => None,
            StoreEntry::Detailed {
                ticks_per_frame, ..
            } => *ticks_per_frame,
        })
    }
}
