// File: crates/gapminder-core/src/lib.rs
// Summary: Core library entry point; exports dataset loading, chart builders, tooltip lifecycle and rendering.

pub mod axis;
pub mod data;
pub mod error;
pub mod extent;
pub mod geometry;
pub mod grid;
pub mod line;
pub mod render;
pub mod scale;
pub mod scatter;
pub mod scene;
pub mod svg;
pub mod text;
pub mod theme;
pub mod tooltip;
pub mod types;

pub use axis::{Axis, TickFormat};
pub use data::{Dataset, Field, MissingPolicy, Row};
pub use error::{Result, VizError};
pub use extent::{AxisLimits, Extent};
pub use line::{LineChart, LineConfig};
pub use render::RenderOptions;
pub use scale::LinearScale;
pub use scatter::{ScatterConfig, ScatterPlot, ScatterPoint};
pub use scene::{Node, Scene, TextAnchor, TextNode};
pub use text::TextShaper;
pub use theme::Theme;
pub use tooltip::{compose, HoverChange, Tooltip, TooltipController};
