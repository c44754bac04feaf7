//! Paints [`GraphGeometry`] onto a plotters drawing area and writes PNG or SVG files.

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use thiserror::Error;

use crate::graph::GraphGeometry;
use crate::palette::Rgb;

const BACKGROUND: RGBColor = RGBColor(0xF5, 0xF2, 0xE8);
const LABEL: RGBColor = RGBColor(0x6B, 0x6B, 0x6B);
const LINE_WIDTH: u32 = 3;
const MARKER_HALF: i32 = 6;
const DASH: f64 = 6.0;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("drawing failed: {0}")]
    Drawing(String),
    #[error("cannot infer chart format from {0}")]
    UnknownFormat(PathBuf),
}

fn drawing<E: std::fmt::Display>(err: E) -> ChartError {
    ChartError::Drawing(err.to_string())
}

/// Output format for the score graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ChartFormat {
    Png,
    Svg,
}

impl ChartFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        match path
            .extension()
            .and_then(|s| s.to_str())
            .map(|s| s.to_ascii_lowercase())
        {
            Some(ext) if ext == "png" => Some(Self::Png),
            Some(ext) if ext == "svg" => Some(Self::Svg),
            _ => None,
        }
    }
}

/// Knobs for chart painting.
#[derive(Clone, Copy, Debug)]
pub struct ChartOptions {
    /// Axis labels and the placeholder message need a usable system font.
    pub draw_labels: bool,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self { draw_labels: true }
    }
}

fn rgb(color: Rgb) -> RGBColor {
    RGBColor(color.r, color.g, color.b)
}

fn px(point: (f64, f64)) -> (i32, i32) {
    (point.0.round() as i32, point.1.round() as i32)
}

/// Paints the graph onto `root`. The area is expected to match the geometry size.
pub fn draw_geometry<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    geometry: &GraphGeometry,
    options: ChartOptions,
) -> Result<(), ChartError> {
    root.fill(&BACKGROUND).map_err(drawing)?;

    if let Some(message) = &geometry.placeholder {
        if options.draw_labels {
            let style = TextStyle::from(("monospace", 14).into_font())
                .color(&LABEL)
                .pos(Pos::new(HPos::Center, VPos::Center));
            let center = px((geometry.width / 2.0, geometry.height / 2.0));
            root.draw(&Text::new(message.clone(), center, style))
                .map_err(drawing)?;
        }
        return Ok(());
    }

    let (left, right) = (geometry.plot_left, geometry.plot_right);
    for &y in &geometry.gridlines {
        root.draw(&PathElement::new(
            vec![px((left, y)), px((right, y))],
            BLACK.mix(0.1).stroke_width(1),
        ))
        .map_err(drawing)?;
    }

    if let Some(y) = geometry.zero_line {
        let style = BLACK.mix(0.3).stroke_width(2);
        let mut x = left;
        while x < right {
            let end = (x + DASH).min(right);
            root.draw(&PathElement::new(vec![px((x, y)), px((end, y))], style))
                .map_err(drawing)?;
            x += DASH * 2.0;
        }
    }

    for line in &geometry.lines {
        let color = rgb(line.color.primary);
        let points: Vec<(i32, i32)> = line.points.iter().copied().map(px).collect();
        root.draw(&PathElement::new(
            points.clone(),
            color.stroke_width(LINE_WIDTH),
        ))
        .map_err(drawing)?;
        for (x, y) in points {
            root.draw(&Rectangle::new(
                [(x - MARKER_HALF, y - MARKER_HALF), (x + MARKER_HALF, y + MARKER_HALF)],
                BACKGROUND.filled(),
            ))
            .map_err(drawing)?;
            root.draw(&Rectangle::new(
                [
                    (x - MARKER_HALF + 1, y - MARKER_HALF + 1),
                    (x + MARKER_HALF - 1, y + MARKER_HALF - 1),
                ],
                color.stroke_width(2),
            ))
            .map_err(drawing)?;
        }
    }

    if options.draw_labels {
        let font = ("monospace", 12).into_font();
        let x_style = TextStyle::from(font.clone())
            .color(&LABEL)
            .pos(Pos::new(HPos::Center, VPos::Bottom));
        for label in &geometry.x_labels {
            root.draw(&Text::new(
                label.text.clone(),
                px((label.x, label.y)),
                x_style.clone(),
            ))
            .map_err(drawing)?;
        }
        let y_style = TextStyle::from(font)
            .color(&LABEL)
            .pos(Pos::new(HPos::Right, VPos::Bottom));
        for label in &geometry.y_labels {
            root.draw(&Text::new(
                label.text.clone(),
                px((label.x, label.y)),
                y_style.clone(),
            ))
            .map_err(drawing)?;
        }
    }
    Ok(())
}

fn size(geometry: &GraphGeometry) -> (u32, u32) {
    (geometry.width.max(1.0) as u32, geometry.height.max(1.0) as u32)
}

/// Writes the graph to `path` in the given format.
pub fn render_to_file(
    path: &Path,
    format: ChartFormat,
    geometry: &GraphGeometry,
    options: ChartOptions,
) -> Result<(), ChartError> {
    match format {
        ChartFormat::Png => {
            let root = BitMapBackend::new(path, size(geometry)).into_drawing_area();
            draw_geometry(&root, geometry, options)?;
            root.present().map_err(drawing)?;
        }
        ChartFormat::Svg => {
            let root = SVGBackend::new(path, size(geometry)).into_drawing_area();
            draw_geometry(&root, geometry, options)?;
            root.present().map_err(drawing)?;
        }
    }
    Ok(())
}

/// Like [`render_to_file`], inferring the format from the file extension.
pub fn render_to_path(
    path: &Path,
    geometry: &GraphGeometry,
    options: ChartOptions,
) -> Result<(), ChartError> {
    let format =
        ChartFormat::from_path(path).ok_or_else(|| ChartError::UnknownFormat(path.to_path_buf()))?;
    render_to_file(path, format, geometry, options)
}

/// Renders the graph as an in-memory SVG document.
pub fn render_svg(geometry: &GraphGeometry, options: ChartOptions) -> Result<String, ChartError> {
    let mut buffer = String::new();
    {
        let root = SVGBackend::with_string(&mut buffer, size(geometry)).into_drawing_area();
        draw_geometry(&root, geometry, options)?;
        root.present().map_err(drawing)?;
    }
    Ok(buffer)
}
