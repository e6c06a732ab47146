//! Vector outlines
//!
//! Paths use absolute coordinates and a command set that maps 1:1 onto SVG
//! path data, so any collaborator can replay them without recomputing
//! geometry.

use std::fmt::Write;

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// One drawing command
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum PathCommand {
    MoveTo { to: Vec2 },
    LineTo { to: Vec2 },
    /// Circular arc from the current point to `to`
    ArcTo {
        radius: f32,
        large_arc: bool,
        /// Clockwise on screen (SVG sweep-flag 1)
        clockwise: bool,
        to: Vec2,
    },
    Close,
}

/// A sequence of drawing commands; empty means nothing is drawn
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(mut self, to: Vec2) -> Self {
        self.commands.push(PathCommand::MoveTo { to });
        self
    }

    pub fn line_to(mut self, to: Vec2) -> Self {
        self.commands.push(PathCommand::LineTo { to });
        self
    }

    pub fn arc_to(mut self, radius: f32, large_arc: bool, to: Vec2) -> Self {
        self.commands.push(PathCommand::ArcTo {
            radius,
            large_arc,
            clockwise: true,
            to,
        });
        self
    }

    pub fn close(mut self) -> Self {
        self.commands.push(PathCommand::Close);
        self
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Whether the path ends with a close command
    pub fn is_closed(&self) -> bool {
        matches!(self.commands.last(), Some(PathCommand::Close))
    }

    /// SVG path data (`d` attribute)
    pub fn to_svg_data(&self) -> String {
        let mut d = String::new();
        for cmd in &self.commands {
            if !d.is_empty() {
                d.push(' ');
            }
            // Writing into a String cannot fail
            let _ = match cmd {
                PathCommand::MoveTo { to } => write!(d, "M {} {}", num(to.x), num(to.y)),
                PathCommand::LineTo { to } => write!(d, "L {} {}", num(to.x), num(to.y)),
                PathCommand::ArcTo {
                    radius,
                    large_arc,
                    clockwise,
                    to,
                } => write!(
                    d,
                    "A {r} {r} 0 {} {} {} {}",
                    *large_arc as u8,
                    *clockwise as u8,
                    num(to.x),
                    num(to.y),
                    r = num(*radius)
                ),
                PathCommand::Close => write!(d, "Z"),
            };
        }
        d
    }
}

/// Compact number formatting: at most 3 decimals, no trailing zeros
pub fn num(value: f32) -> String {
    let s = format!("{value:.3}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_formatting() {
        assert_eq!(num(300.0), "300");
        assert_eq!(num(12.5), "12.5");
        assert_eq!(num(1.0 / 3.0), "0.333");
        assert_eq!(num(-0.0001), "0");
    }

    #[test]
    fn test_svg_data() {
        let path = Path::new()
            .move_to(Vec2::new(300.0, 300.0))
            .line_to(Vec2::new(300.0, 132.0))
            .arc_to(168.0, false, Vec2::new(468.0, 300.0))
            .close();
        assert!(path.is_closed());
        assert_eq!(
            path.to_svg_data(),
            "M 300 300 L 300 132 A 168 168 0 0 1 468 300 Z"
        );
    }

    #[test]
    fn test_empty_path() {
        let path = Path::new();
        assert!(path.is_empty());
        assert!(!path.is_closed());
        assert_eq!(path.to_svg_data(), "");
    }

    #[test]
    fn test_serialized_commands() {
        let path = Path::new().move_to(Vec2::new(1.0, 2.0)).close();
        let json = serde_json::to_string(&path).unwrap();
        assert_eq!(json, r#"[{"op":"move_to","to":[1.0,2.0]},{"op":"close"}]"#);
        let back: Path = serde_json::from_str(&json).unwrap();
        assert_eq!(back, path);
    }
}
