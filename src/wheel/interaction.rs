//! Score interaction policy
//!
//! Incremental policy: pressing inside the colored part of a slice lowers
//! its score by one, pressing in the empty band above it raises it by one.
//! Hit testing yields exactly one region per press, so one press is one
//! mutation regardless of how the shell delivers it (mouse, touch, keys).

use glam::Vec2;

use super::area::AreaId;
use super::state::{Mutation, ScoreChange, WheelState};
use crate::geometry::{SliceHit, SliceRegion, WheelGeometry, hit_test};

/// Keyboard / control-panel score command for a known area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreCommand {
    Increment,
    Decrement,
    /// Absolute value from a slider; clamped to [0, 10]
    Set(i32),
}

impl ScoreCommand {
    pub fn to_change(self) -> ScoreChange {
        match self {
            ScoreCommand::Increment => ScoreChange::Delta(1),
            ScoreCommand::Decrement => ScoreChange::Delta(-1),
            ScoreCommand::Set(score) => ScoreChange::Set(score),
        }
    }
}

/// Input delivered by the shell for one event
#[derive(Debug, Clone, PartialEq)]
pub enum Interaction {
    /// Pointer press at a canvas position
    Press(Vec2),
    /// Direct command on an area
    Command { area: AreaId, command: ScoreCommand },
    /// Turn the wheel by one slice
    Rotate,
}

/// What an interaction did
#[derive(Debug, Clone, PartialEq)]
pub enum InteractionResult {
    /// A score mutation was attempted (possibly a clamped no-op)
    Scored {
        area: AreaId,
        hit: Option<SliceHit>,
        mutation: Mutation,
    },
    /// The wheel was rotated to this angle
    Rotated { rotation_deg: f32 },
    /// The press landed outside every slice
    Missed,
}

impl InteractionResult {
    /// Whether the shell needs to re-render
    pub fn needs_render(&self) -> bool {
        match self {
            InteractionResult::Scored { mutation, .. } => mutation.is_change(),
            InteractionResult::Rotated { .. } => true,
            InteractionResult::Missed => false,
        }
    }
}

/// Score change for a press in the given region
pub fn change_for_region(region: SliceRegion) -> ScoreChange {
    match region {
        SliceRegion::Filled => ScoreChange::Delta(-1),
        SliceRegion::Unfilled => ScoreChange::Delta(1),
    }
}

/// Apply one interaction. `geometry` must carry the state's current rotation.
pub fn apply(
    state: &mut WheelState,
    geometry: &WheelGeometry,
    input: &Interaction,
) -> InteractionResult {
    match input {
        Interaction::Press(point) => {
            let Some(hit) = hit_test(geometry, state.areas(), *point) else {
                return InteractionResult::Missed;
            };
            let mutation = state.change_score(&hit.area_id, change_for_region(hit.region));
            log::debug!(
                "Press on slice {} ({:?}, level {}): {:?}",
                hit.index,
                hit.region,
                hit.level,
                mutation
            );
            InteractionResult::Scored {
                area: hit.area_id.clone(),
                hit: Some(hit),
                mutation,
            }
        }
        Interaction::Command { area, command } => {
            let mutation = state.change_score(area, command.to_change());
            InteractionResult::Scored {
                area: area.clone(),
                hit: None,
                mutation,
            }
        }
        Interaction::Rotate => InteractionResult::Rotated {
            rotation_deg: state.rotate(),
        },
    }
}
