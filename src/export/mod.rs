//! Chart export
//!
//! The core prepares everything an export needs (scene, SVG, snapshot and
//! report layout). Turning the SVG into pixels and writing the final
//! document are done by collaborators behind the `Rasterizer` and
//! `DocumentSink` traits.

pub mod report;
pub mod snapshot;
pub mod svg;

use std::future::Future;

use crate::error::{ExportError, ExportResult};
use crate::geometry::ChartScene;

pub use report::{ReportLayout, ReportPage, ScoreRow};
pub use snapshot::AreaSnapshot;
pub use svg::{SvgStyle, escape_xml, render_svg};

/// RGBA8 image produced by a rasterizer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl Bitmap {
    /// Wrap raw pixels, checking the buffer length
    pub fn new(width: u32, height: u32, rgba: Vec<u8>) -> ExportResult<Self> {
        let expected = width as usize * height as usize * 4;
        if width == 0 || height == 0 || rgba.len() != expected {
            return Err(ExportError::Raster(format!(
                "expected {}x{} RGBA ({} bytes), got {} bytes",
                width,
                height,
                expected,
                rgba.len()
            )));
        }
        Ok(Self { width, height, rgba })
    }
}

/// Turns an SVG chart into pixels
pub trait Rasterizer {
    fn rasterize(&self, svg: &str, size: u32) -> impl Future<Output = ExportResult<Bitmap>>;
}

/// Writes the final document (PDF or similar) and returns its bytes
pub trait DocumentSink {
    fn write(&self, report: &ReportLayout, chart: &Bitmap) -> ExportResult<Vec<u8>>;
}

/// Everything prepared for one export
#[derive(Debug, Clone)]
pub struct ChartExport {
    pub scene: ChartScene,
    pub snapshot: AreaSnapshot,
    pub svg: String,
    pub report: ReportLayout,
}

impl ChartExport {
    pub fn is_empty(&self) -> bool {
        self.snapshot.areas.is_empty()
    }
}

/// Rasterize the chart and hand it with the report to the sink
pub async fn export_document<R: Rasterizer, D: DocumentSink>(
    export: &ChartExport,
    rasterizer: &R,
    sink: &D,
    image_size: u32,
) -> ExportResult<Vec<u8>> {
    if export.is_empty() {
        log::warn!("Refusing to export an empty wheel");
        return Err(ExportError::EmptyChart);
    }

    log::info!(
        "Exporting {} areas over {} report pages",
        export.snapshot.areas.len(),
        export.report.pages.len()
    );
    let bitmap = rasterizer.rasterize(&export.svg, image_size).await?;
    let bytes = sink.write(&export.report, &bitmap)?;
    log::info!("Export finished ({} bytes)", bytes.len());
    Ok(bytes)
}
