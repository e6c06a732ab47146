//! Paginated score report layout
//!
//! Page one carries the chart image followed by the first table rows;
//! later pages carry table rows only.

use serde::{Deserialize, Serialize};

use super::snapshot::AreaSnapshot;
use crate::i18n::Translator;

/// One line of the score table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRow {
    pub name: String,
    pub score: u8,
    pub color: String,
}

/// One page of the report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportPage {
    /// 1-based page number
    pub number: usize,
    /// Whether the chart image goes on this page
    pub has_chart: bool,
    pub rows: Vec<ScoreRow>,
    pub footer: String,
}

/// Report ready to be embedded into a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportLayout {
    pub title: String,
    /// Table column headers (area, score)
    pub headers: (String, String),
    pub pages: Vec<ReportPage>,
}

impl ReportLayout {
    /// Lay out the score table of `snapshot`
    pub fn build(snapshot: &AreaSnapshot, t: &dyn Translator, rows_per_page: usize) -> Self {
        let rows_per_page = rows_per_page.max(1);
        let rows: Vec<ScoreRow> = snapshot
            .areas
            .iter()
            .map(|a| ScoreRow {
                name: a.name.clone(),
                score: a.score,
                color: a.color.as_str().to_string(),
            })
            .collect();

        let mut chunks: Vec<Vec<ScoreRow>> = rows
            .chunks(rows_per_page)
            .map(<[ScoreRow]>::to_vec)
            .collect();
        if chunks.is_empty() {
            chunks.push(Vec::new());
        }

        let total = chunks.len();
        let total_text = total.to_string();
        let pages = chunks
            .into_iter()
            .enumerate()
            .map(|(i, rows)| {
                let number = i + 1;
                ReportPage {
                    number,
                    has_chart: i == 0,
                    rows,
                    footer: t.lookup_with(
                        "report.page",
                        &[("page", &number.to_string()), ("total", &total_text)],
                    ),
                }
            })
            .collect();

        Self {
            title: t.lookup("report.title"),
            headers: (t.lookup("report.area"), t.lookup("report.score")),
            pages,
        }
    }

    pub fn row_count(&self) -> usize {
        self.pages.iter().map(|p| p.rows.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Catalog;
    use crate::wheel::{Color, WheelState};

    fn snapshot(n: usize) -> AreaSnapshot {
        let mut state = WheelState::new(4);
        for i in 0..n {
            state.push_area(format!("Area {i}"), (i % 11) as i32, Color::from("#36A2EB"));
        }
        AreaSnapshot::capture(&state)
    }

    #[test]
    fn test_single_page() {
        let report = ReportLayout::build(&snapshot(8), &Catalog::builtin("en"), 20);
        assert_eq!(report.title, "My Wheel of Life");
        assert_eq!(report.headers, ("Area".to_string(), "Score".to_string()));
        assert_eq!(report.pages.len(), 1);
        assert!(report.pages[0].has_chart);
        assert_eq!(report.pages[0].footer, "Page 1 of 1");
        assert_eq!(report.pages[0].rows[3].score, 3);
    }

    #[test]
    fn test_paginates_rows() {
        let report = ReportLayout::build(&snapshot(25), &Catalog::builtin("pt"), 10);
        assert_eq!(report.pages.len(), 3);
        assert_eq!(report.row_count(), 25);
        assert!(!report.pages[1].has_chart);
        assert_eq!(report.pages[2].rows.len(), 5);
        assert_eq!(report.pages[2].footer, "Página 3 de 3");
    }

    #[test]
    fn test_empty_snapshot_still_has_a_page() {
        let report = ReportLayout::build(&snapshot(0), &Catalog::builtin("en"), 0);
        assert_eq!(report.pages.len(), 1);
        assert_eq!(report.row_count(), 0);
    }
}
