//! Figure description handed to the rendering sink.
//!
//! ## Purpose
//!
//! This module defines the plot-agnostic description of a chart: named data
//! series with a rendering mode, plus a layout with titles. Sessions build
//! a [`Figure`] and hand it to a [`RenderSink`], which owns the actual
//! drawing surface.
//!
//! ## Design notes
//!
//! * **Opaque sink**: The crate never draws; it only describes.
//! * **Serializable**: All types derive `Serialize` with the `serde` feature.
//!
//! ## Non-goals
//!
//! * This module does not manage drawing surfaces, colour schemes or DOM state.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{string::String, vec::Vec};
#[cfg(feature = "std")]
use std::{string::String, vec::Vec};

// ============================================================================
// Series
// ============================================================================

/// How a series is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TraceKind {
    /// Histogram binned by the renderer from raw x values.
    Histogram,
    /// Vertical bars at each x.
    Bar,
    /// Connected line.
    Lines,
    /// Unconnected markers.
    Markers,
    /// Connected line with a marker at each point.
    LinesMarkers,
}

/// Histogram normalisation requested from the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum HistNorm {
    /// Bar areas sum to one.
    ProbabilityDensity,
}

/// Outline drawn around bars or histogram bins.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Outline {
    /// Line width in pixels.
    pub width: f64,
    /// Line colour.
    pub color: &'static str,
}

/// One named data series.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Series<T> {
    /// Legend name.
    pub name: String,
    /// Rendering mode.
    pub kind: TraceKind,
    /// X values (raw samples for histograms).
    pub x: Vec<T>,
    /// Y values; `None` for histograms.
    pub y: Option<Vec<T>>,
    /// Line or marker colour.
    pub color: Option<&'static str>,
    /// Fill opacity in [0, 1].
    pub opacity: Option<f64>,
    /// Bar outline.
    pub outline: Option<Outline>,
    /// Histogram normalisation.
    pub hist_norm: Option<HistNorm>,
}

impl<T> Series<T> {
    /// Create a series with x and y values and no styling.
    pub fn xy(name: impl Into<String>, kind: TraceKind, x: Vec<T>, y: Vec<T>) -> Self {
        Self {
            name: name.into(),
            kind,
            x,
            y: Some(y),
            color: None,
            opacity: None,
            outline: None,
            hist_norm: None,
        }
    }

    /// Create a histogram over raw values.
    pub fn histogram(name: impl Into<String>, values: Vec<T>) -> Self {
        Self {
            name: name.into(),
            kind: TraceKind::Histogram,
            x: values,
            y: None,
            color: None,
            opacity: None,
            outline: None,
            hist_norm: None,
        }
    }

    /// Set the colour.
    pub fn color(mut self, color: &'static str) -> Self {
        self.color = Some(color);
        self
    }

    /// Set the opacity.
    pub fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }

    /// Set the bar outline.
    pub fn outline(mut self, width: f64, color: &'static str) -> Self {
        self.outline = Some(Outline { width, color });
        self
    }

    /// Set the histogram normalisation.
    pub fn hist_norm(mut self, norm: HistNorm) -> Self {
        self.hist_norm = Some(norm);
        self
    }

    /// Number of points in the series.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Whether the series holds no points.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

// ============================================================================
// Layout
// ============================================================================

/// How overlapping bar series are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BarMode {
    /// Bars are drawn over each other.
    Overlay,
}

/// Titles and chart-wide options.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Layout {
    /// Chart title.
    pub title: String,
    /// X axis title.
    pub x_axis: String,
    /// Y axis title.
    pub y_axis: String,
    /// Gap between adjacent bars as a fraction of bar width.
    pub bar_gap: Option<f64>,
    /// Bar combination mode.
    pub bar_mode: Option<BarMode>,
}

impl Layout {
    /// Create a layout with the given titles.
    pub fn new(
        title: impl Into<String>,
        x_axis: impl Into<String>,
        y_axis: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            x_axis: x_axis.into(),
            y_axis: y_axis.into(),
            bar_gap: None,
            bar_mode: None,
        }
    }

    /// Set the bar gap.
    pub fn bar_gap(mut self, gap: f64) -> Self {
        self.bar_gap = Some(gap);
        self
    }

    /// Set the bar mode.
    pub fn bar_mode(mut self, mode: BarMode) -> Self {
        self.bar_mode = Some(mode);
        self
    }
}

// ============================================================================
// Figure and Sink
// ============================================================================

/// A complete chart description.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Figure<T> {
    /// Series in drawing order.
    pub series: Vec<Series<T>>,
    /// Chart layout.
    pub layout: Layout,
}

impl<T> Figure<T> {
    /// Look up a series by legend name.
    pub fn series_named(&self, name: &str) -> Option<&Series<T>> {
        self.series.iter().find(|s| s.name == name)
    }
}

/// Destination for figures and summary text.
pub trait RenderSink<T> {
    /// Replace the displayed chart with `figure`.
    fn render(&mut self, figure: &Figure<T>);

    /// Replace the displayed summary text.
    fn show_summary(&mut self, _text: &str) {}
}
