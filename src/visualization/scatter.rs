//! SVG scatter plot of configuration rows
//!
//! Renders the first feature column against row index and highlights the
//! selected row. The output is a standalone SVG file, so the plot works in
//! non-interactive environments.

use crate::error::{PiperankError, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

const POINT_COLOR: &str = "#78aaff";
const HIGHLIGHT_COLOR: &str = "#e05252";
const AXIS_COLOR: &str = "#666666";
const N_TICKS: usize = 5;

/// Scatter plot writer
#[derive(Debug, Clone)]
pub struct ScatterPlot {
    width: u32,
    height: u32,
    margin: u32,
    title: String,
    x_label: String,
    y_label: String,
}

impl Default for ScatterPlot {
    fn default() -> Self {
        Self::new()
    }
}

impl ScatterPlot {
    /// Create a plot with default geometry
    pub fn new() -> Self {
        Self {
            width: 800,
            height: 500,
            margin: 60,
            title: "Configuration distribution".to_string(),
            x_label: "configuration index".to_string(),
            y_label: "feature value".to_string(),
        }
    }

    /// Set the canvas size in pixels
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the plot title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the y-axis label (typically the first feature column's name)
    pub fn with_y_label(mut self, label: impl Into<String>) -> Self {
        self.y_label = label.into();
        self
    }

    /// Write the scatter of `values` (one per row, plotted against row
    /// index) to `path`, highlighting `selected`.
    pub fn write_svg(&self, path: impl AsRef<Path>, values: &[f64], selected: usize) -> Result<()> {
        if values.is_empty() {
            return Err(PiperankError::EmptyInput);
        }
        if selected >= values.len() {
            return Err(PiperankError::Data(format!(
                "selected index {selected} out of range for {} rows",
                values.len()
            )));
        }

        let file = File::create(path)?;
        let mut w = BufWriter::new(file);

        let (min, max) = value_range(values);
        let span = if (max - min).abs() < f64::EPSILON {
            1.0
        } else {
            max - min
        };
        let plot_w = (self.width - 2 * self.margin) as f64;
        let plot_h = (self.height - 2 * self.margin) as f64;
        let x_of = |i: usize| {
            self.margin as f64 + plot_w * i as f64 / (values.len().saturating_sub(1).max(1)) as f64
        };
        let y_of = |v: f64| self.height as f64 - self.margin as f64 - plot_h * (v - min) / span;

        writeln!(
            w,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {0} {1}">"#,
            self.width, self.height
        )?;
        writeln!(w, r#"  <rect width="100%" height="100%" fill="white"/>"#)?;
        writeln!(
            w,
            r#"  <text x="{}" y="30" text-anchor="middle" font-size="16" font-family="sans-serif">{}</text>"#,
            self.width / 2,
            xml_escape(&self.title)
        )?;

        self.write_axes(&mut w)?;
        self.write_ticks(&mut w, values.len(), min, span)?;

        for (i, &v) in values.iter().enumerate() {
            if i == selected {
                continue;
            }
            writeln!(
                w,
                r#"  <circle cx="{:.1}" cy="{:.1}" r="3.5" fill="{POINT_COLOR}" fill-opacity="0.6"/>"#,
                x_of(i),
                y_of(v)
            )?;
        }
        // Selected row drawn last so it sits on top.
        writeln!(
            w,
            r#"  <circle cx="{:.1}" cy="{:.1}" r="7" fill="{HIGHLIGHT_COLOR}"/>"#,
            x_of(selected),
            y_of(values[selected])
        )?;
        writeln!(
            w,
            r#"  <text x="{:.1}" y="{:.1}" font-size="12" font-family="sans-serif" fill="{HIGHLIGHT_COLOR}">optimal ({selected})</text>"#,
            x_of(selected) + 10.0,
            y_of(values[selected]) - 10.0
        )?;

        writeln!(w, "</svg>")?;
        w.flush()?;
        Ok(())
    }

    fn write_axes(&self, w: &mut impl Write) -> std::io::Result<()> {
        let m = self.margin;
        writeln!(
            w,
            r#"  <line x1="{m}" y1="{}" x2="{}" y2="{0}" stroke="{AXIS_COLOR}"/>"#,
            self.height - m,
            self.width - m
        )?;
        writeln!(
            w,
            r#"  <line x1="{m}" y1="{m}" x2="{m}" y2="{}" stroke="{AXIS_COLOR}"/>"#,
            self.height - m
        )?;
        writeln!(
            w,
            r#"  <text x="{}" y="{}" text-anchor="middle" font-size="13" font-family="sans-serif">{}</text>"#,
            self.width / 2,
            self.height - m / 4,
            xml_escape(&self.x_label)
        )?;
        writeln!(
            w,
            r#"  <text x="{}" y="{}" text-anchor="middle" font-size="13" font-family="sans-serif" transform="rotate(-90 {0} {1})">{}</text>"#,
            m / 3,
            self.height / 2,
            xml_escape(&self.y_label)
        )
    }

    fn write_ticks(
        &self,
        w: &mut impl Write,
        n_rows: usize,
        min: f64,
        span: f64,
    ) -> std::io::Result<()> {
        let m = self.margin as f64;
        let plot_w = (self.width - 2 * self.margin) as f64;
        let plot_h = (self.height - 2 * self.margin) as f64;
        let baseline = self.height as f64 - m;

        for t in 0..=N_TICKS {
            let frac = t as f64 / N_TICKS as f64;

            let x = m + plot_w * frac;
            let idx = ((n_rows.saturating_sub(1)) as f64 * frac).round() as usize;
            writeln!(
                w,
                r#"  <line x1="{x:.1}" y1="{baseline:.1}" x2="{x:.1}" y2="{:.1}" stroke="{AXIS_COLOR}"/>"#,
                baseline + 5.0
            )?;
            writeln!(
                w,
                r#"  <text x="{x:.1}" y="{:.1}" text-anchor="middle" font-size="11" font-family="sans-serif">{idx}</text>"#,
                baseline + 18.0
            )?;

            let y = baseline - plot_h * frac;
            let value = min + span * frac;
            writeln!(
                w,
                r#"  <line x1="{:.1}" y1="{y:.1}" x2="{m:.1}" y2="{y:.1}" stroke="{AXIS_COLOR}"/>"#,
                m - 5.0
            )?;
            writeln!(
                w,
                r#"  <text x="{:.1}" y="{y:.1}" text-anchor="end" font-size="11" font-family="sans-serif">{value:.2}</text>"#,
                m - 8.0
            )?;
        }
        Ok(())
    }
}

fn value_range(values: &[f64]) -> (f64, f64) {
    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    (min, max)
}

fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_svg_with_highlight() {
        let file = tempfile::Builder::new().suffix(".svg").tempfile().unwrap();
        let values = vec![1.0, 2.0, 5.0, 3.0];

        ScatterPlot::new()
            .with_y_label("载荷")
            .write_svg(file.path(), &values, 2)
            .unwrap();

        let content = std::fs::read_to_string(file.path()).unwrap();
        assert!(content.starts_with("<svg"));
        assert!(content.contains("circle"));
        assert!(content.contains(HIGHLIGHT_COLOR));
        assert!(content.contains("optimal (2)"));
        assert!(content.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_empty_values_fail() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let err = ScatterPlot::new()
            .write_svg(file.path(), &[], 0)
            .unwrap_err();
        assert!(matches!(err, PiperankError::EmptyInput));
    }

    #[test]
    fn test_selected_out_of_range_fails() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let err = ScatterPlot::new()
            .write_svg(file.path(), &[1.0, 2.0], 5)
            .unwrap_err();
        assert!(matches!(err, PiperankError::Data(_)));
    }

    #[test]
    fn test_constant_values_do_not_divide_by_zero() {
        let file = tempfile::Builder::new().suffix(".svg").tempfile().unwrap();
        ScatterPlot::new()
            .write_svg(file.path(), &[2.0, 2.0, 2.0], 0)
            .unwrap();
        let content = std::fs::read_to_string(file.path()).unwrap();
        assert!(content.contains("</svg>"));
    }
}
