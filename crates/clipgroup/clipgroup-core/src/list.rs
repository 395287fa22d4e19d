//! Ordered collection of animation groups synchronized with the property store.
//!
//! Persisted layout: one text-array index property (see [`Config::index_key`]) holding every
//! group's key in list order, plus one record property per group.

use log::{debug, warn};
use std::ops::{Deref, DerefMut};

use crate::config::Config;
use crate::error::GroupError;
use crate::group::AnimationGroup;
use crate::ids::GroupId;
use crate::store::PropertyStore;
use crate::time::TimeContext;

/// A per-entry failure collected by [`AnimationGroupList::load_from_data_lenient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryError {
    pub key: String,
    pub error: GroupError,
}

#[derive(Debug)]
pub struct AnimationGroupList {
    groups: Vec<AnimationGroup>,
    ctx: TimeContext,
    config: Config,
}

impl AnimationGroupList {
    pub fn new(ctx: TimeContext) -> Self {
        Self::with_config(ctx, Config::default())
    }

    pub fn with_config(ctx: TimeContext, config: Config) -> Self {
        Self {
            groups: Vec::new(),
            ctx,
            config,
        }
    }

    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[inline]
    pub fn context(&self) -> &TimeContext {
        &self.ctx
    }

    /// Append a fresh group named after the configured default and return it.
    pub fn create_group(&mut self) -> &mut AnimationGroup {
        let group = AnimationGroup::with_name(self.ctx, self.config.default_group_name.as_str());
        self.groups.push(group);
        let last = self.groups.len() - 1;
        &mut self.groups[last]
    }

    pub fn push(&mut self, group: AnimationGroup) {
        self.groups.push(group);
    }

    pub fn insert(&mut self, index: usize, group: AnimationGroup) {
        self.groups.insert(index, group);
    }

    /// Remove from the list only. The stored record stays behind until deleted; see
    /// [`Self::remove_and_delete`].
    pub fn remove(&mut self, index: usize) -> AnimationGroup {
        self.groups.remove(index)
    }

    /// Remove from the list and delete the group's record from the store.
    pub fn remove_and_delete(
        &mut self,
        index: usize,
        store: &mut dyn PropertyStore,
    ) -> AnimationGroup {
        let mut group = self.groups.remove(index);
        group.delete_from_data(store);
        group
    }

    pub fn clear(&mut self) {
        self.groups.clear();
    }

    pub fn position(&self, id: GroupId) -> Option<usize> {
        self.groups.iter().position(|g| g.id() == id)
    }

    pub fn find(&self, id: GroupId) -> Option<&AnimationGroup> {
        self.groups.iter().find(|g| g.id() == id)
    }

    pub fn find_mut(&mut self, id: GroupId) -> Option<&mut AnimationGroup> {
        self.groups.iter_mut().find(|g| g.id() == id)
    }

    /// True if any entry has unsaved changes.
    pub fn is_dirty(&self) -> bool {
        self.groups.iter().any(AnimationGroup::is_dirty)
    }

    /// Keys of all entries in list order, as written to the index property.
    pub fn property_names(&self) -> Vec<String> {
        self.groups.iter().map(AnimationGroup::property_name).collect()
    }

    /// Replace the contents with the groups listed in the index property.
    ///
    /// Stops at the first entry that fails to decode. An entry whose key parsed is appended
    /// in whatever state decoding reached before the error is returned; entries after it
    /// are not loaded.
    pub fn load_from_data(&mut self, store: &dyn PropertyStore) -> Result<(), GroupError> {
        self.groups.clear();
        let keys = store.get_string_array(&self.config.index_key);
        self.groups.reserve(keys.len());

        for key in &keys {
            let mut group = AnimationGroup::new(self.ctx);
            let result = group.load_from_data(key, store);
            if !matches!(result, Err(GroupError::InvalidIdentifier { .. })) {
                self.groups.push(group);
            }
            result?;
        }

        debug!(
            "loaded {} animation groups from '{}'",
            self.groups.len(),
            self.config.index_key
        );
        Ok(())
    }

    /// Like [`Self::load_from_data`] but keeps going past failing entries.
    ///
    /// Entries with an unparsable key are skipped; entries with bad record data are kept
    /// (dirty, partially decoded). Every failure is returned in index order.
    pub fn load_from_data_lenient(&mut self, store: &dyn PropertyStore) -> Vec<EntryError> {
        self.groups.clear();
        let keys = store.get_string_array(&self.config.index_key);
        self.groups.reserve(keys.len());

        let mut errors = Vec::new();
        for key in keys {
            let mut group = AnimationGroup::new(self.ctx);
            match group.load_from_data(&key, store) {
                Ok(()) => self.groups.push(group),
                Err(error) => {
                    warn!("animation group '{key}' failed to load: {error}");
                    if !matches!(error, GroupError::InvalidIdentifier { .. }) {
                        self.groups.push(group);
                    }
                    errors.push(EntryError { key, error });
                }
            }
        }
        errors
    }

    /// Save every dirty entry, then rewrite the index with the keys of all entries in list
    /// order. Clean entries are not written. Records of groups removed from the list
    /// without [`Self::remove_and_delete`] stay in the store.
    pub fn save_to_data(&mut self, store: &mut dyn PropertyStore) -> Result<(), GroupError> {
        let mut names = Vec::with_capacity(self.groups.len());
        for group in &mut self.groups {
            if group.is_dirty() {
                group.save_to_data(store)?;
            }
            names.push(group.property_name());
        }

        store.set_string_array(&self.config.index_key, &names);
        debug!(
            "wrote {} keys to animation group index '{}'",
            names.len(),
            self.config.index_key
        );
        Ok(())
    }
}

impl Deref for AnimationGroupList {
    type Target = [AnimationGroup];

    fn deref(&self) -> &Self::Target {
        &self.groups
    }
}

impl DerefMut for AnimationGroupList {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.groups
    }
}

impl<'a> IntoIterator for &'a AnimationGroupList {
    type Item = &'a AnimationGroup;
    type IntoIter = std::slice::Iter<'a, AnimationGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

impl<'a> IntoIterator for &'a mut AnimationGroupList {
    type Item = &'a mut AnimationGroup;
    type IntoIter = std::slice::IterMut<'a, AnimationGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn create_group_uses_configured_name() {
        let cfg = Config {
            default_group_name: "Clip".to_string(),
            ..Config::default()
        };
        let mut list = AnimationGroupList::with_config(TimeContext::default(), cfg);
        let id = list.create_group().id();
        assert_eq!(list.len(), 1);
        assert_eq!(list.find(id).map(AnimationGroup::name), Some("Clip"));
        assert_eq!(list.position(id), Some(0));
        assert!(list.is_dirty());
    }

    #[test]
    fn empty_store_loads_empty_list() {
        let store = MemoryStore::new();
        let mut list = AnimationGroupList::new(TimeContext::default());
        list.create_group();
        list.load_from_data(&store).unwrap();
        assert!(list.is_empty());
    }

    #[test]
    fn save_of_empty_list_writes_empty_index() {
        let mut store = MemoryStore::new();
        let mut list = AnimationGroupList::new(TimeContext::default());
        list.save_to_data(&mut store).unwrap();
        assert_eq!(store.write_count(), 1);
        assert!(store.contains_key(crate::config::DEFAULT_INDEX_KEY));
        assert!(store
            .get_string_array(crate::config::DEFAULT_INDEX_KEY)
            .is_empty());
    }
}
