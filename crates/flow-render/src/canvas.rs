//! Draw-callback seam between the chart painter and a UI toolkit.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    pub fn bottom_left(&self) -> Point {
        Point::new(self.left, self.bottom())
    }

    pub fn bottom_right(&self) -> Point {
        Point::new(self.right(), self.bottom())
    }

    pub fn top_left(&self) -> Point {
        Point::new(self.left, self.top)
    }

    pub fn is_drawable(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba(pub u8, pub u8, pub u8, pub u8);

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self(r, g, b, 255)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinePattern {
    Solid,
    Dashed,
    Dotted,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle {
    pub color: Rgba,
    pub width: f64,
    pub pattern: LinePattern,
}

impl LineStyle {
    pub const fn solid(color: Rgba, width: f64) -> Self {
        Self {
            color,
            width,
            pattern: LinePattern::Solid,
        }
    }

    pub const fn dashed(color: Rgba, width: f64) -> Self {
        Self {
            color,
            width,
            pattern: LinePattern::Dashed,
        }
    }

    pub const fn dotted(color: Rgba, width: f64) -> Self {
        Self {
            color,
            width,
            pattern: LinePattern::Dotted,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub color: Rgba,
    pub size: f64,
    pub bold: bool,
}

impl TextStyle {
    pub const fn regular(color: Rgba, size: f64) -> Self {
        Self {
            color,
            size,
            bold: false,
        }
    }

    pub const fn bold(color: Rgba, size: f64) -> Self {
        Self {
            color,
            size,
            bold: true,
        }
    }
}

/// Immediate-mode drawing surface. Coordinates are pixels with the origin at
/// the top-left; text is anchored at its bottom-left corner.
pub trait ChartCanvas {
    fn line(&mut self, from: Point, to: Point, style: LineStyle);
    fn polyline(&mut self, points: &[Point], style: LineStyle);
    /// Fill a convex quadrilateral.
    fn fill_quad(&mut self, corners: [Point; 4], fill: Rgba);
    fn fill_rect(&mut self, rect: Rect, fill: Rgba, outline: LineStyle);
    fn circle(&mut self, center: Point, radius: f64, fill: Rgba, outline: LineStyle);
    fn text(&mut self, at: Point, text: &str, style: TextStyle);
}

/// One recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Line {
        from: Point,
        to: Point,
        style: LineStyle,
    },
    Polyline {
        points: Vec<Point>,
        style: LineStyle,
    },
    FillQuad {
        corners: [Point; 4],
        fill: Rgba,
    },
    FillRect {
        rect: Rect,
        fill: Rgba,
        outline: LineStyle,
    },
    Circle {
        center: Point,
        radius: f64,
        fill: Rgba,
        outline: LineStyle,
    },
    Text {
        at: Point,
        text: String,
        style: TextStyle,
    },
}

/// Canvas that keeps every call, for tests and headless inspection.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    pub commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn circles(&self) -> impl Iterator<Item = (Point, f64, Rgba)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Circle {
                center,
                radius,
                fill,
                ..
            } => Some((*center, *radius, *fill)),
            _ => None,
        })
    }
}

impl ChartCanvas for RecordingCanvas {
    fn line(&mut self, from: Point, to: Point, style: LineStyle) {
        self.commands.push(DrawCommand::Line { from, to, style });
    }

    fn polyline(&mut self, points: &[Point], style: LineStyle) {
        self.commands.push(DrawCommand::Polyline {
            points: points.to_vec(),
            style,
        });
    }

    fn fill_quad(&mut self, corners: [Point; 4], fill: Rgba) {
        self.commands.push(DrawCommand::FillQuad { corners, fill });
    }

    fn fill_rect(&mut self, rect: Rect, fill: Rgba, outline: LineStyle) {
        self.commands.push(DrawCommand::FillRect {
            rect,
            fill,
            outline,
        });
    }

    fn circle(&mut self, center: Point, radius: f64, fill: Rgba, outline: LineStyle) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            fill,
            outline,
        });
    }

    fn text(&mut self, at: Point, text: &str, style: TextStyle) {
        self.commands.push(DrawCommand::Text {
            at,
            text: text.to_string(),
            style,
        });
    }
}
