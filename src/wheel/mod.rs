//! Wheel state and interaction
//!
//! - `area`: Area records, ids and colors
//! - `template`: Seed areas and palette
//! - `state`: The ordered area list and its mutations
//! - `interaction`: Press/command/rotate handling
//! - `session`: State bundled with settings and translations

pub mod area;
pub mod interaction;
pub mod session;
pub mod state;
pub mod template;

pub use area::{AreaId, Color, LifeArea, clamp_score};
pub use interaction::{Interaction, InteractionResult, ScoreCommand};
pub use session::WheelSession;
pub use state::{Mutation, ScoreChange, WheelState};
