//! Radial chart geometry
//!
//! Pure functions from (areas, frame, rotation) to drawable primitives.
//! Nothing in here mutates state or fails on valid input:
//! - Scores are clamped before they get here
//! - An empty area list yields an empty scene
//! - Angle math never divides by a zero slice count

pub mod chart;
pub mod hit;
pub mod path;
pub mod sector;

pub use chart::{
    ChartScene, Divider, GridCircle, Label, SliceOutline, SlicePrimitive, WheelGeometry,
};
pub use hit::{SliceHit, SliceRegion, hit_test, level_at, slice_index_at};
pub use path::{Path, PathCommand};
pub use sector::SliceSector;
