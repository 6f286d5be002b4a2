//! Visualization module — scatter rendering of ranked configurations.

mod scatter;

pub use scatter::ScatterPlot;
