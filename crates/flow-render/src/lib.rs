pub mod canvas;
pub mod layout;
pub mod painter;
pub mod palette;

pub use canvas::{
    ChartCanvas, DrawCommand, LinePattern, LineStyle, Point, Rect, RecordingCanvas, Rgba,
    TextStyle,
};
pub use layout::{ChartLayout, LEGEND_HEIGHT, MARGIN};
pub use painter::{operating_point_label, paint};
