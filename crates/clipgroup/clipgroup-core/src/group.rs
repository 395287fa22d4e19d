//! A single animation group: a named, time-bounded set of scene node references that the
//! export pipeline turns into one clip.
//!
//! Ticks are the authoritative time representation; frames are derived through the
//! group's [`TimeContext`]. Every setter returns early when the new value equals the
//! current one, so `dirty` only flips on an observable change.

use log::{debug, warn};
use std::fmt;

use crate::codec::{self, FIELD_TICKS_END, FIELD_TICKS_START};
use crate::config::DEFAULT_GROUP_NAME;
use crate::error::GroupError;
use crate::ids::GroupId;
use crate::store::PropertyStore;
use crate::time::TimeContext;

#[derive(Debug, PartialEq, Eq)]
pub struct AnimationGroup {
    id: GroupId,
    name: String,
    ticks_start: i32,
    ticks_end: i32,
    node_refs: Vec<u32>,
    dirty: bool,
    ctx: TimeContext,
    /// Key the record was loaded from when it differs from the canonical id text.
    legacy_key: Option<String>,
}

impl AnimationGroup {
    /// New group with a fresh id, the default name and the host's current animation range.
    pub fn new(ctx: TimeContext) -> Self {
        Self::with_name(ctx, DEFAULT_GROUP_NAME)
    }

    pub fn with_name(ctx: TimeContext, name: impl Into<String>) -> Self {
        let range = ctx.anim_range();
        Self {
            id: GroupId::new(),
            name: name.into(),
            ticks_start: range.start,
            ticks_end: range.end,
            node_refs: Vec::new(),
            dirty: true,
            ctx,
            legacy_key: None,
        }
    }

    /// Copy of `other`, identifier included. The copy is always dirty.
    pub fn copy_of(other: &AnimationGroup) -> Self {
        let mut group = Self::new(other.ctx);
        group.deep_copy_from(other);
        group
    }

    /// Overwrite every field with `other`'s, identifier included, and mark dirty.
    pub fn deep_copy_from(&mut self, other: &AnimationGroup) {
        self.id = other.id;
        self.name.clone_from(&other.name);
        self.ticks_start = other.ticks_start;
        self.ticks_end = other.ticks_end;
        self.node_refs.clone_from(&other.node_refs);
        self.ctx = other.ctx;
        self.legacy_key.clone_from(&other.legacy_key);
        self.dirty = true;
    }

    #[inline]
    pub fn id(&self) -> GroupId {
        self.id
    }

    /// Store key this group is persisted under.
    pub fn property_name(&self) -> String {
        self.id.to_string()
    }

    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    #[inline]
    pub fn context(&self) -> &TimeContext {
        &self.ctx
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Names are not validated here; reserved characters are rejected by [`Self::save_to_data`].
    pub fn set_name(&mut self, name: impl Into<String>) {
        let name = name.into();
        if name == self.name {
            return;
        }
        self.name = name;
        self.dirty = true;
    }

    #[inline]
    pub fn ticks_start(&self) -> i32 {
        self.ticks_start
    }

    #[inline]
    pub fn ticks_end(&self) -> i32 {
        self.ticks_end
    }

    pub fn frame_start(&self) -> i32 {
        self.ctx.ticks_to_frame(self.ticks_start)
    }

    pub fn frame_end(&self) -> i32 {
        self.ctx.ticks_to_frame(self.ticks_end)
    }

    /// Compared in frames: a start that already rounds to `frame` keeps its ticks.
    pub fn set_frame_start(&mut self, frame: i32) {
        if frame == self.frame_start() {
            return;
        }
        self.ticks_start = self.ctx.frame_to_ticks(frame);
        self.dirty = true;
    }

    pub fn set_frame_end(&mut self, frame: i32) {
        if frame == self.frame_end() {
            return;
        }
        self.ticks_end = self.ctx.frame_to_ticks(frame);
        self.dirty = true;
    }

    pub fn set_frame_range(&mut self, start: i32, end: i32) {
        self.set_frame_start(start);
        self.set_frame_end(end);
    }

    pub fn node_refs(&self) -> &[u32] {
        &self.node_refs
    }

    /// Order matters: a permutation of the current handles is a change.
    pub fn set_node_refs(&mut self, refs: &[u32]) {
        if self.node_refs.as_slice() == refs {
            return;
        }
        self.node_refs.clear();
        self.node_refs.extend_from_slice(refs);
        self.dirty = true;
    }

    /// Write this group's record under [`Self::property_name`] and clear `dirty`.
    /// A record loaded from a non-canonical key is moved to the canonical one.
    ///
    /// Fails with [`GroupError::FormatError`] without touching the store when the name
    /// holds a space, '=' or ';'.
    pub fn save_to_data(&mut self, store: &mut dyn PropertyStore) -> Result<(), GroupError> {
        codec::validate_name(&self.name)?;

        let key = self.property_name();
        let value = codec::encode(&self.name, self.ticks_start, self.ticks_end, &self.node_refs);
        store.set_string(&key, &value);
        if let Some(old) = self.legacy_key.take() {
            store.delete_property(&old);
            debug!("animation group record moved from {old} to {key}");
        }
        self.dirty = false;
        debug!("animation group {key} saved ({} nodes)", self.node_refs.len());
        Ok(())
    }

    /// Adopt `key` as identifier and decode the record stored under it.
    ///
    /// An absent record only sets the identifier. On any failure the group stays dirty
    /// and keeps what was decoded before the failing field; unparsable node handles are
    /// skipped, the rest are kept, and the call reports [`GroupError::PartialParseError`].
    ///
    /// A key in any layout other than the lowercase hyphenated one leaves the group dirty,
    /// so the next save rewrites the record under [`Self::property_name`].
    pub fn load_from_data(
        &mut self,
        key: &str,
        store: &dyn PropertyStore,
    ) -> Result<(), GroupError> {
        self.id = GroupId::parse(key)?;
        self.dirty = true;
        let canonical = self.id.to_string();
        self.legacy_key = (key != canonical).then(|| key.to_string());

        let Some(value) = store.get_string(key) else {
            debug!("animation group {key} has no stored record");
            return Ok(());
        };

        let fields = codec::split_fields(key, &value)?;
        self.name = fields[0].to_string();
        self.ticks_start = codec::parse_ticks(key, FIELD_TICKS_START, fields[1])?;
        self.ticks_end = codec::parse_ticks(key, FIELD_TICKS_END, fields[2])?;

        let parsed = codec::parse_node_refs(&fields[3..]);
        self.node_refs = parsed.refs;
        if parsed.failed > 0 {
            warn!(
                "animation group {key}: {} node ids could not be parsed, kept {}",
                parsed.failed,
                self.node_refs.len()
            );
            return Err(GroupError::PartialParseError {
                key: key.to_string(),
                failed: parsed.failed,
            });
        }

        self.dirty = self.legacy_key.is_some();
        debug!("animation group {key} loaded as {}", self);
        Ok(())
    }

    /// Remove the stored record. The in-memory group no longer has a persisted counterpart.
    pub fn delete_from_data(&mut self, store: &mut dyn PropertyStore) {
        let key = self.property_name();
        store.delete_property(&key);
        if let Some(old) = self.legacy_key.take() {
            store.delete_property(&old);
        }
        self.dirty = true;
        debug!("animation group {key} deleted from store");
    }
}

impl fmt::Display for AnimationGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, {})",
            self.name,
            self.frame_start(),
            self.frame_end()
        )
    }
}
