//! Life area entity and its value types

use std::fmt;

use rand::RngCore;
use serde::{Deserialize, Serialize};
use uuid::Builder;

use crate::consts::{DEFAULT_SCORE, MAX_SCORE, MIN_SCORE};

/// Clamp any requested score into [0, 10]
#[inline]
pub fn clamp_score(score: i32) -> u8 {
    score.clamp(MIN_SCORE as i32, MAX_SCORE as i32) as u8
}

/// Opaque area identifier, stable across re-renders and reorderings
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AreaId(String);

impl AreaId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Random UUID-v4 id drawn from `rng`
    pub fn generate(rng: &mut impl RngCore) -> Self {
        let mut bytes = [0u8; 16];
        rng.fill_bytes(&mut bytes);
        Self(Builder::from_random_bytes(bytes).into_uuid().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AreaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// CSS color string used for both fill and stroke of a slice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(String);

/// Used when a color string cannot be parsed
const FALLBACK_RGBA: [f32; 4] = [0.8, 0.8, 0.8, 1.0];

impl Color {
    pub fn new(color: impl Into<String>) -> Self {
        Self(color.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse `#rgb` / `#rrggbb` into RGBA floats (0.0 - 1.0)
    pub fn to_rgba(&self) -> Option<[f32; 4]> {
        let hex = self.0.trim().strip_prefix('#')?;
        if !hex.is_ascii() {
            return None;
        }
        let channel = |s: &str| u8::from_str_radix(s, 16).ok().map(|v| v as f32 / 255.0);

        match hex.len() {
            6 => Some([
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
                1.0,
            ]),
            3 => {
                let expand = |i: usize| channel(&hex[i..i + 1].repeat(2));
                Some([expand(0)?, expand(1)?, expand(2)?, 1.0])
            }
            _ => None,
        }
    }

    /// RGBA with the given alpha, grey when unparseable
    pub fn rgba_or_fallback(&self, alpha: f32) -> [f32; 4] {
        let [r, g, b, _] = self.to_rgba().unwrap_or(FALLBACK_RGBA);
        [r, g, b, alpha]
    }
}

impl From<&str> for Color {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// One scored category of the wheel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifeArea {
    pub id: AreaId,
    /// Display label, user-editable, not unique
    pub name: String,
    /// Always within [0, 10]
    pub score: u8,
    pub color: Color,
}

impl LifeArea {
    pub fn new(id: AreaId, name: impl Into<String>, score: i32, color: Color) -> Self {
        Self {
            id,
            name: name.into(),
            score: clamp_score(score),
            color,
        }
    }

    /// A freshly added area with the default score
    pub fn with_defaults(id: AreaId, name: impl Into<String>, color: Color) -> Self {
        Self::new(id, name, DEFAULT_SCORE as i32, color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_clamp_score() {
        assert_eq!(clamp_score(-3), 0);
        assert_eq!(clamp_score(0), 0);
        assert_eq!(clamp_score(7), 7);
        assert_eq!(clamp_score(11), 10);
        assert_eq!(clamp_score(i32::MAX), 10);
    }

    #[test]
    fn test_generated_ids_are_uuid_shaped_and_distinct() {
        let mut rng = Pcg32::seed_from_u64(7);
        let a = AreaId::generate(&mut rng);
        let b = AreaId::generate(&mut rng);
        assert_ne!(a, b);

        let s = a.as_str();
        assert_eq!(s.len(), 36);
        assert_eq!(s.chars().filter(|c| *c == '-').count(), 4);
        assert_eq!(&s[14..15], "4");
        assert!(matches!(&s[19..20], "8" | "9" | "a" | "b"));

        let parsed = uuid::Uuid::parse_str(s).unwrap();
        assert_eq!(parsed.get_version_num(), 4);
    }

    #[test]
    fn test_generated_ids_follow_the_seed() {
        let a = AreaId::generate(&mut Pcg32::seed_from_u64(42));
        let b = AreaId::generate(&mut Pcg32::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_color_parsing() {
        let rgba = Color::from("#FF6384").to_rgba().unwrap();
        assert!((rgba[0] - 1.0).abs() < 1e-6);
        assert!((rgba[1] - 99.0 / 255.0).abs() < 1e-6);
        assert!((rgba[2] - 132.0 / 255.0).abs() < 1e-6);

        let short = Color::from("#fff").to_rgba().unwrap();
        assert_eq!(short, [1.0, 1.0, 1.0, 1.0]);

        assert!(Color::from("hsl(10, 50%, 50%)").to_rgba().is_none());
        assert_eq!(Color::from("nope").rgba_or_fallback(0.5)[3], 0.5);
    }

    #[test]
    fn test_new_area_clamps_score() {
        let area = LifeArea::new(AreaId::new("a"), "Career", 42, Color::from("#000000"));
        assert_eq!(area.score, 10);
        let area = LifeArea::with_defaults(AreaId::new("b"), "New", Color::from("#000000"));
        assert_eq!(area.score, DEFAULT_SCORE);
    }
}
