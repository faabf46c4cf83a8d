use egui::{epaint::Shape, Align2, Color32, FontFamily, FontId, Painter, Pos2, Stroke};
use flow_render::{ChartCanvas, LinePattern, LineStyle, Point, Rect, Rgba, TextStyle};

const DASH: (f32, f32) = (8.0, 4.0);
const DOT: (f32, f32) = (2.0, 3.0);

/// [`ChartCanvas`] backed by an egui painter; chart pixels are offset by the
/// top-left of the allocated region.
pub struct EguiCanvas<'a> {
    painter: &'a Painter,
    origin: Pos2,
}

impl<'a> EguiCanvas<'a> {
    pub fn new(painter: &'a Painter, origin: Pos2) -> Self {
        Self { painter, origin }
    }

    fn pos(&self, p: Point) -> Pos2 {
        Pos2::new(self.origin.x + p.x as f32, self.origin.y + p.y as f32)
    }

    fn stroke(style: LineStyle) -> Stroke {
        Stroke::new(style.width as f32, color(style.color))
    }

    fn stroke_path(&self, path: &[Pos2], style: LineStyle) {
        let stroke = Self::stroke(style);
        match style.pattern {
            LinePattern::Solid => {
                self.painter.add(Shape::line(path.to_vec(), stroke));
            }
            LinePattern::Dashed => self
                .painter
                .extend(Shape::dashed_line(path, stroke, DASH.0, DASH.1)),
            LinePattern::Dotted => self
                .painter
                .extend(Shape::dashed_line(path, stroke, DOT.0, DOT.1)),
        }
    }
}

fn color(rgba: Rgba) -> Color32 {
    Color32::from_rgba_unmultiplied(rgba.0, rgba.1, rgba.2, rgba.3)
}

impl ChartCanvas for EguiCanvas<'_> {
    fn line(&mut self, from: Point, to: Point, style: LineStyle) {
        self.stroke_path(&[self.pos(from), self.pos(to)], style);
    }

    fn polyline(&mut self, points: &[Point], style: LineStyle) {
        let path: Vec<Pos2> = points.iter().map(|p| self.pos(*p)).collect();
        self.stroke_path(&path, style);
    }

    fn fill_quad(&mut self, corners: [Point; 4], fill: Rgba) {
        let points = corners.iter().map(|p| self.pos(*p)).collect();
        self.painter
            .add(Shape::convex_polygon(points, color(fill), Stroke::NONE));
    }

    fn fill_rect(&mut self, rect: Rect, fill: Rgba, outline: LineStyle) {
        let min = self.pos(Point::new(rect.left, rect.top));
        let max = self.pos(Point::new(rect.right(), rect.bottom()));
        self.painter.rect(
            egui::Rect::from_min_max(min, max),
            0.0,
            color(fill),
            Self::stroke(outline),
        );
    }

    fn circle(&mut self, center: Point, radius: f64, fill: Rgba, outline: LineStyle) {
        self.painter.circle(
            self.pos(center),
            radius as f32,
            color(fill),
            Self::stroke(outline),
        );
    }

    fn text(&mut self, at: Point, text: &str, style: TextStyle) {
        // Proportional is the only family bundled by default; bold text is
        // rendered slightly larger instead.
        let size = if style.bold { style.size + 1.0 } else { style.size };
        self.painter.text(
            self.pos(at),
            Align2::LEFT_BOTTOM,
            text,
            FontId::new(size as f32, FontFamily::Proportional),
            color(style.color),
        );
    }
}
