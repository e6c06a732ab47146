//! Immutable area snapshots handed to asynchronous collaborators

use serde::{Deserialize, Serialize};

use crate::coach::{ActionPlanRequest, AreaScore, SuggestionRequest};
use crate::wheel::{LifeArea, WheelState};

/// Copy of the area sequence at one point in time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaSnapshot {
    pub areas: Vec<LifeArea>,
    pub rotation_deg: f32,
}

impl AreaSnapshot {
    pub fn capture(state: &WheelState) -> Self {
        Self {
            areas: state.areas().to_vec(),
            rotation_deg: state.rotation_deg(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Rebuild a wheel (areas and rotation) from this snapshot
    pub fn restore(&self, seed: u64) -> WheelState {
        WheelState::from_areas(seed, self.areas.clone()).with_rotation(self.rotation_deg)
    }

    pub fn suggestion_request(&self, language: &str) -> SuggestionRequest {
        SuggestionRequest::new(&self.areas, language)
    }

    pub fn action_plan_request(&self, language: &str) -> ActionPlanRequest {
        ActionPlanRequest::new(self.areas.iter().map(AreaScore::from).collect(), language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Catalog;
    use crate::wheel::{Color, ScoreChange};

    #[test]
    fn test_json_round_trip_preserves_fields() {
        let mut state = WheelState::seeded(17, &Catalog::builtin("pt"));
        let first = state.areas()[0].id.clone();
        state.change_score(&first, ScoreChange::Set(0));
        state.push_area("Spirituality", 10, Color::from("#8A2BE2"));
        state.rotate();

        let snapshot = AreaSnapshot::capture(&state);
        let back = AreaSnapshot::from_json(&snapshot.to_json().unwrap()).unwrap();
        assert_eq!(back, snapshot);
        assert_eq!(back.areas, state.areas());
    }

    #[test]
    fn test_snapshot_is_detached_from_live_state() {
        let mut state = WheelState::seeded(1, &Catalog::builtin("en"));
        let snapshot = AreaSnapshot::capture(&state);
        let id = state.areas()[0].id.clone();
        state.change_score(&id, ScoreChange::Delta(-3));
        state.remove_area(&id);

        assert_eq!(snapshot.areas.len(), 8);
        assert_eq!(snapshot.areas[0].score, 7);
    }

    #[test]
    fn test_restore_and_requests() {
        let mut state = WheelState::seeded(5, &Catalog::builtin("en"));
        state.rotate();
        state.rotate();
        let snapshot = AreaSnapshot::capture(&state);
        let restored = AreaSnapshot::from_json(&snapshot.to_json().unwrap())
            .unwrap()
            .restore(99);
        assert_eq!(restored.areas(), state.areas());
        assert_eq!(restored.rotation_deg(), 90.0);

        let request = snapshot.suggestion_request("en");
        assert_eq!(request.areas.len(), 8);
        assert_eq!(request.areas[0].name, "Career");
        assert_eq!(snapshot.action_plan_request("en").focus_areas()[0].name, "Fun & Recreation");
    }
}
