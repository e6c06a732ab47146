//! Wheel state and its mutations
//!
//! The ordered area list is the single source of truth. Slice angles are
//! derived from positions in this list, so removing an area shifts every
//! later slice one position counter-clockwise.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::area::{AreaId, Color, LifeArea, clamp_score};
use super::template::{NEW_AREA_KEY, initial_areas, palette_color};
use crate::i18n::Translator;

/// Requested score update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreChange {
    /// Set an absolute score
    Set(i32),
    /// Add to the current score
    Delta(i32),
}

/// What a mutation did to the state
///
/// None of these are failures: out-of-range scores are clamped and stale
/// ids are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    /// Applied as requested
    Applied,
    /// Requested score was outside [0, 10]; the clamped value was stored
    Clamped,
    /// The field already held the requested (or clamped) value
    Unchanged,
    /// No area has this id
    UnknownArea,
}

impl Mutation {
    /// Whether the state may have changed and needs a re-render
    pub fn is_change(&self) -> bool {
        matches!(self, Mutation::Applied | Mutation::Clamped)
    }
}

/// Mutable wheel state: areas plus cosmetic rotation
#[derive(Debug, Clone)]
pub struct WheelState {
    /// Seed of the id generator
    pub seed: u64,
    areas: Vec<LifeArea>,
    /// Accumulated wheel rotation in degrees (never wrapped)
    rotation_deg: f32,
    rng: Pcg32,
}

impl WheelState {
    /// Empty wheel
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            areas: Vec::new(),
            rotation_deg: 0.0,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Wheel seeded with the default areas, names translated by `t`
    pub fn seeded(seed: u64, t: &dyn Translator) -> Self {
        let mut state = Self::new(seed);
        for (name, score, color) in initial_areas(t) {
            state.push_area(name, score as i32, Color::from(color));
        }
        log::info!("Seeded wheel with {} areas", state.areas.len());
        state
    }

    /// Wheel holding the given areas (scores are clamped)
    pub fn from_areas(seed: u64, areas: Vec<LifeArea>) -> Self {
        let mut state = Self::new(seed);
        state.areas = areas
            .into_iter()
            .map(|mut a| {
                a.score = clamp_score(a.score as i32);
                a
            })
            .collect();
        state
    }

    /// Same wheel turned to `rotation_deg`
    pub fn with_rotation(mut self, rotation_deg: f32) -> Self {
        self.rotation_deg = rotation_deg;
        self
    }

    pub fn areas(&self) -> &[LifeArea] {
        &self.areas
    }

    pub fn area(&self, id: &AreaId) -> Option<&LifeArea> {
        self.areas.iter().find(|a| &a.id == id)
    }

    /// Slice index of an area
    pub fn position(&self, id: &AreaId) -> Option<usize> {
        self.areas.iter().position(|a| &a.id == id)
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }

    pub fn rotation_deg(&self) -> f32 {
        self.rotation_deg
    }

    /// Degrees added by one `rotate()` (None for an empty wheel)
    pub fn rotation_step(&self) -> Option<f32> {
        if self.areas.is_empty() {
            None
        } else {
            Some(360.0 / self.areas.len() as f32)
        }
    }

    /// Allocate a new area id
    pub fn next_area_id(&mut self) -> AreaId {
        loop {
            let id = AreaId::generate(&mut self.rng);
            if self.area(&id).is_none() {
                return id;
            }
        }
    }

    /// Append an area with a fresh id
    pub fn push_area(&mut self, name: impl Into<String>, score: i32, color: Color) -> AreaId {
        let id = self.next_area_id();
        self.areas.push(LifeArea::new(id.clone(), name, score, color));
        id
    }

    /// Append a default "new area" with the next palette color
    pub fn add_area(&mut self, t: &dyn Translator) -> AreaId {
        let color = Color::from(palette_color(self.areas.len()));
        let id = self.next_area_id();
        self.areas
            .push(LifeArea::with_defaults(id.clone(), t.lookup(NEW_AREA_KEY), color));
        log::debug!("Added area {} at slice {}", id, self.areas.len() - 1);
        id
    }

    /// Remove an area; later slices shift left by one
    pub fn remove_area(&mut self, id: &AreaId) -> Mutation {
        let before = self.areas.len();
        self.areas.retain(|a| &a.id != id);
        if self.areas.len() == before {
            log::debug!("Ignoring removal of unknown area {}", id);
            Mutation::UnknownArea
        } else {
            log::debug!("Removed area {}, {} left", id, self.areas.len());
            Mutation::Applied
        }
    }

    pub fn rename(&mut self, id: &AreaId, name: impl Into<String>) -> Mutation {
        let name = name.into();
        self.update(id, |area| {
            if area.name == name {
                Mutation::Unchanged
            } else {
                area.name = name;
                Mutation::Applied
            }
        })
    }

    pub fn recolor(&mut self, id: &AreaId, color: Color) -> Mutation {
        self.update(id, |area| {
            if area.color == color {
                Mutation::Unchanged
            } else {
                area.color = color;
                Mutation::Applied
            }
        })
    }

    /// Change one area's score, clamped to [0, 10]
    pub fn change_score(&mut self, id: &AreaId, change: ScoreChange) -> Mutation {
        self.update(id, |area| {
            let requested = match change {
                ScoreChange::Set(score) => score,
                ScoreChange::Delta(delta) => (area.score as i32).saturating_add(delta),
            };
            let score = clamp_score(requested);
            let changed = score != area.score;
            area.score = score;

            if !changed {
                Mutation::Unchanged
            } else if requested != score as i32 {
                Mutation::Clamped
            } else {
                Mutation::Applied
            }
        })
    }

    /// Advance the rotation by one slice width; returns the new angle
    pub fn rotate(&mut self) -> f32 {
        if let Some(step) = self.rotation_step() {
            self.rotation_deg += step;
        }
        self.rotation_deg
    }

    fn update(&mut self, id: &AreaId, f: impl FnOnce(&mut LifeArea) -> Mutation) -> Mutation {
        match self.areas.iter_mut().find(|a| &a.id == id) {
            Some(area) => f(area),
            None => {
                log::debug!("Ignoring update of unknown area {}", id);
                Mutation::UnknownArea
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::DEFAULT_SCORE;
    use crate::i18n::Catalog;
    use proptest::prelude::*;

    fn two_areas() -> (WheelState, AreaId, AreaId) {
        let mut state = WheelState::new(1);
        let career = state.push_area("Career", 7, Color::from("#FF6384"));
        let health = state.push_area("Health", 8, Color::from("#FFCE56"));
        (state, career, health)
    }

    #[test]
    fn test_seeded_state() {
        let state = WheelState::seeded(42, &Catalog::builtin("en"));
        assert_eq!(state.len(), 8);
        assert_eq!(state.areas()[0].name, "Career");
        assert_eq!(state.areas()[3].score, 9);

        // Same seed, same ids
        let again = WheelState::seeded(42, &Catalog::builtin("en"));
        assert_eq!(state.areas()[0].id, again.areas()[0].id);
    }

    #[test]
    fn test_change_score_touches_only_target() {
        let (mut state, career, health) = two_areas();
        assert_eq!(state.change_score(&career, ScoreChange::Delta(-1)), Mutation::Applied);
        assert_eq!(state.area(&career).unwrap().score, 6);
        assert_eq!(state.area(&health).unwrap().score, 8);
        assert_eq!(state.areas()[0].id, career);
        assert_eq!(state.areas()[1].id, health);
    }

    #[test]
    fn test_change_score_clamps() {
        let (mut state, career, _) = two_areas();
        assert_eq!(state.change_score(&career, ScoreChange::Set(99)), Mutation::Clamped);
        assert_eq!(state.area(&career).unwrap().score, 10);
        assert_eq!(state.change_score(&career, ScoreChange::Set(10)), Mutation::Unchanged);

        assert_eq!(state.change_score(&career, ScoreChange::Delta(-20)), Mutation::Clamped);
        assert_eq!(state.area(&career).unwrap().score, 0);
    }

    #[test]
    fn test_step_past_bound_is_unchanged() {
        let (mut state, career, _) = two_areas();
        state.change_score(&career, ScoreChange::Set(10));
        let at_top = state.change_score(&career, ScoreChange::Delta(1));
        assert_eq!(at_top, Mutation::Unchanged);
        assert!(!at_top.is_change());
        assert_eq!(state.area(&career).unwrap().score, 10);

        state.change_score(&career, ScoreChange::Set(0));
        let at_bottom = state.change_score(&career, ScoreChange::Delta(-1));
        assert_eq!(at_bottom, Mutation::Unchanged);
        assert_eq!(state.area(&career).unwrap().score, 0);
    }

    #[test]
    fn test_unknown_id_is_ignored() {
        let (mut state, _, _) = two_areas();
        let before = state.areas().to_vec();
        let stale = AreaId::new("gone");
        assert_eq!(state.change_score(&stale, ScoreChange::Delta(1)), Mutation::UnknownArea);
        assert_eq!(state.rename(&stale, "x"), Mutation::UnknownArea);
        assert_eq!(state.recolor(&stale, Color::from("#000")), Mutation::UnknownArea);
        assert_eq!(state.remove_area(&stale), Mutation::UnknownArea);
        assert_eq!(state.areas(), before.as_slice());
    }

    #[test]
    fn test_add_appends_with_palette() {
        let mut state = WheelState::seeded(3, &Catalog::builtin("en"));
        let existing: Vec<_> = state.areas().iter().map(|a| a.id.clone()).collect();
        let id = state.add_area(&Catalog::builtin("en"));

        assert_eq!(state.len(), 9);
        assert_eq!(state.position(&id), Some(8));
        assert!(!existing.contains(&id));
        let added = state.area(&id).unwrap();
        assert_eq!(added.name, "New Area");
        assert_eq!(added.score, DEFAULT_SCORE);
        assert_eq!(added.color.as_str(), "#8A2BE2");
    }

    #[test]
    fn test_remove_shifts_later_areas() {
        let mut state = WheelState::new(5);
        let a = state.push_area("A", 1, Color::from("#111111"));
        let b = state.push_area("B", 2, Color::from("#222222"));
        let c = state.push_area("C", 3, Color::from("#333333"));

        assert_eq!(state.remove_area(&b), Mutation::Applied);
        assert_eq!(state.position(&a), Some(0));
        assert_eq!(state.position(&c), Some(1));
        assert_eq!(state.area(&c).unwrap().score, 3);
    }

    #[test]
    fn test_rename_and_recolor() {
        let (mut state, career, _) = two_areas();
        assert_eq!(state.rename(&career, "Work"), Mutation::Applied);
        assert_eq!(state.rename(&career, "Work"), Mutation::Unchanged);
        assert_eq!(state.recolor(&career, Color::from("#000000")), Mutation::Applied);
        let area = state.area(&career).unwrap();
        assert_eq!(area.name, "Work");
        assert_eq!(area.color.as_str(), "#000000");
        assert_eq!(area.score, 7);
    }

    #[test]
    fn test_rotate_empty_is_noop() {
        let mut state = WheelState::new(0);
        assert_eq!(state.rotate(), 0.0);
        assert_eq!(state.rotation_step(), None);
    }

    proptest! {
        #[test]
        fn prop_full_turn_after_n_rotations(n in 1usize..40) {
            let mut state = WheelState::new(9);
            for i in 0..n {
                state.push_area(format!("Area {i}"), 5, Color::from("#123456"));
            }
            let scores: Vec<u8> = state.areas().iter().map(|a| a.score).collect();
            for _ in 0..n {
                state.rotate();
            }
            let turns = state.rotation_deg() / 360.0;
            prop_assert!((turns - turns.round()).abs() < 1e-4);
            prop_assert!((turns.round() - 1.0).abs() < f32::EPSILON);
            let after: Vec<u8> = state.areas().iter().map(|a| a.score).collect();
            prop_assert_eq!(scores, after);
        }

        #[test]
        fn prop_scores_stay_in_range(
            start in 0i32..=10,
            deltas in proptest::collection::vec(-15i32..15, 0..30),
        ) {
            let mut state = WheelState::new(2);
            let id = state.push_area("A", start, Color::from("#abcdef"));
            for d in deltas {
                state.change_score(&id, ScoreChange::Delta(d));
                let score = state.area(&id).unwrap().score;
                prop_assert!(score <= 10);
            }
        }
    }
}
