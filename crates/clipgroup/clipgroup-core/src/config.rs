//! Configuration for group list persistence.

use serde::{Deserialize, Serialize};

/// Property key holding the ordered list of group keys in documents written by the exporter.
pub const DEFAULT_INDEX_KEY: &str = "babylonjs_AnimationList";

/// Display name given to freshly created groups.
pub const DEFAULT_GROUP_NAME: &str = "Animation";

/// Keys and defaults used by [`crate::AnimationGroupList`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Store key of the index property.
    pub index_key: String,
    /// Name assigned by `AnimationGroupList::create_group`.
    pub default_group_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            index_key: DEFAULT_INDEX_KEY.to_string(),
            default_group_name: DEFAULT_GROUP_NAME.to_string(),
        }
    }
}
