//! Seed areas and the add-area palette

use crate::i18n::Translator;

/// A template entry: translation key, starting score, color
pub struct AreaTemplate {
    pub key: &'static str,
    pub score: u8,
    pub color: &'static str,
}

/// Areas every new wheel starts with
pub const INITIAL_AREAS: [AreaTemplate; 8] = [
    AreaTemplate {
        key: "areas.career",
        score: 7,
        color: "#FF6384",
    },
    AreaTemplate {
        key: "areas.finances",
        score: 5,
        color: "#36A2EB",
    },
    AreaTemplate {
        key: "areas.health",
        score: 8,
        color: "#FFCE56",
    },
    AreaTemplate {
        key: "areas.friendsFamily",
        score: 9,
        color: "#4BC0C0",
    },
    AreaTemplate {
        key: "areas.romance",
        score: 6,
        color: "#9966FF",
    },
    AreaTemplate {
        key: "areas.personalGrowth",
        score: 7,
        color: "#FF9F40",
    },
    AreaTemplate {
        key: "areas.funRecreation",
        score: 4,
        color: "#FF6384",
    },
    AreaTemplate {
        key: "areas.environment",
        score: 8,
        color: "#36A2EB",
    },
];

/// Colors cycled through when the user adds areas
pub const PALETTE: [&str; 12] = [
    "#FF6384", "#36A2EB", "#FFCE56", "#4BC0C0", "#9966FF", "#FF9F40", "#C9CBCF", "#E7E9ED",
    "#8A2BE2", "#7FFF00", "#D2691E", "#FF7F50",
];

/// Translation key for the name of a freshly added area
pub const NEW_AREA_KEY: &str = "areas.newArea";

/// Palette color for the area that will land at position `count`
pub fn palette_color(count: usize) -> &'static str {
    PALETTE[count % PALETTE.len()]
}

/// Translated (name, score, color) triples for the seed areas
pub fn initial_areas(t: &dyn Translator) -> Vec<(String, u8, &'static str)> {
    INITIAL_AREAS
        .iter()
        .map(|a| (t.lookup(a.key), a.score, a.color))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Catalog;

    #[test]
    fn test_initial_areas_translated() {
        let areas = initial_areas(&Catalog::builtin("pt"));
        assert_eq!(areas.len(), 8);
        assert_eq!(areas[0], ("Carreira".to_string(), 7, "#FF6384"));
        assert_eq!(areas[6].1, 4);
    }

    #[test]
    fn test_palette_wraps() {
        assert_eq!(palette_color(0), "#FF6384");
        assert_eq!(palette_color(8), "#8A2BE2");
        assert_eq!(palette_color(12), "#FF6384");
    }
}
