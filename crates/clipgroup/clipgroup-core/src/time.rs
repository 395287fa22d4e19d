//! Host time context: frame/tick conversion and the document's default animation range.

use serde::{Deserialize, Serialize};

use crate::error::GroupError;

/// Inclusive range in host ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TickRange {
    pub start: i32,
    pub end: i32,
}

impl TickRange {
    #[inline]
    pub fn new(start: i32, end: i32) -> Self {
        Self { start, end }
    }
}

/// Read-only values the host document provides. Copied into every group at construction,
/// later changes on the host side are not observed by existing groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeContext {
    ticks_per_frame: i32,
    anim_range: TickRange,
}

impl TimeContext {
    pub const DEFAULT_TICKS_PER_FRAME: i32 = 160;

    pub fn new(ticks_per_frame: i32, anim_range: TickRange) -> Result<Self, GroupError> {
        if ticks_per_frame <= 0 {
            return Err(GroupError::InvalidTimeContext { ticks_per_frame });
        }
        Ok(Self {
            ticks_per_frame,
            anim_range,
        })
    }

    /// Context whose default range is given in frames instead of ticks.
    pub fn from_frames(ticks_per_frame: i32, start: i32, end: i32) -> Result<Self, GroupError> {
        let ctx = Self::new(ticks_per_frame, TickRange::new(0, 0))?;
        Ok(Self {
            anim_range: TickRange::new(ctx.frame_to_ticks(start), ctx.frame_to_ticks(end)),
            ..ctx
        })
    }

    #[inline]
    pub fn ticks_per_frame(&self) -> i32 {
        self.ticks_per_frame
    }

    #[inline]
    pub fn anim_range(&self) -> TickRange {
        self.anim_range
    }

    /// Nearest frame, halves rounded away from zero.
    #[inline]
    pub fn ticks_to_frame(&self, ticks: i32) -> i32 {
        (ticks as f64 / self.ticks_per_frame as f64).round() as i32
    }

    #[inline]
    pub fn frame_to_ticks(&self, frame: i32) -> i32 {
        frame.saturating_mul(self.ticks_per_frame)
    }
}

impl Default for TimeContext {
    fn default() -> Self {
        let tpf = Self::DEFAULT_TICKS_PER_FRAME;
        Self {
            ticks_per_frame: tpf,
            anim_range: TickRange::new(0, 100 * tpf),
        }
    }
}
