//! clipgroup-core
//!
//! Animation groups: named, time-bounded sets of scene node handles that an exporter uses to
//! split a document's timeline into clips. Groups live in the host document's flat
//! string-keyed property store, one text record per group plus an index array of their keys.
//!
//! The host is reached only through two injected pieces:
//! - [`PropertyStore`] for reading and writing properties on the document root,
//! - [`TimeContext`] for ticks per frame and the default animation range.
//!
//! Each [`AnimationGroup`] tracks whether it differs from its stored record, so
//! [`AnimationGroupList::save_to_data`] only rewrites records that changed.

pub mod codec;
pub mod config;
pub mod error;
pub mod group;
pub mod ids;
pub mod list;
pub mod store;
pub mod time;

// Re-exports for hosts
pub use config::Config;
pub use error::GroupError;
pub use group::AnimationGroup;
pub use ids::GroupId;
pub use list::{AnimationGroupList, EntryError};
pub use store::{MemoryStore, PropertyStore, StoredProperty};
pub use time::{TickRange, TimeContext};

/// Result type for group persistence
pub type Result<T> = core::result::Result<T, GroupError>;
