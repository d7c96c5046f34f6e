use crate::tree::{
    line_count, FractalRenderer, Point, Rgb, Segment, Segments, DEFAULT_ORDER, MAX_ORDER,
    PANEL_HEIGHT, PANEL_WIDTH,
};
use eframe::egui::{containers::*, widgets::*, *};

#[derive(Debug, Default)]
pub struct FractalTree {
    renderer: FractalRenderer,
    segments: Segments,
    line_count: usize,
}

impl FractalTree {
    pub const NAME: &'static str = "Fractal Tree";

    pub fn new(order: u32) -> Self {
        Self {
            renderer: FractalRenderer::new(order),
            ..Default::default()
        }
    }

    /// Draws the settings popup and the tree into the remaining space.
    pub fn ui(&mut self, ui: &mut Ui) {
        let painter = Painter::new(
            ui.ctx().clone(),
            ui.layer_id(),
            ui.available_rect_before_wrap(),
        );
        ui.expand_to_include_rect(painter.clip_rect());

        Frame::popup(ui.style())
            .stroke(Stroke::none())
            .show(ui, |ui| {
                ui.set_max_width(250.0);
                CollapsingHeader::new("Settings").show(ui, |ui| self.options_ui(ui));
            });

        self.paint(&painter);
    }

    fn options_ui(&mut self, ui: &mut Ui) {
        let mut order = self.renderer.order();
        ui.label(format!("Line count: {}", line_count(order)));
        ui.label(format!("Painted line count: {}", self.line_count));
        ui.horizontal(|ui| {
            ui.label("Order :");
            ui.add(
                DragValue::new(&mut order)
                    .speed(1.0)
                    .clamp_range(1..=MAX_ORDER),
            );
            if ui.button("+").clicked() && order < MAX_ORDER {
                order += 1;
            }
            if ui.button("-").clicked() && order > 1 {
                order -= 1;
            }
        });
        if ui.button("reset").clicked() {
            order = DEFAULT_ORDER;
        }
        if let Err(err) = self.renderer.try_set_order(order) {
            tracing::warn!(%err, "order not applied");
        }
    }

    fn paint(&mut self, painter: &Painter) {
        let rect = painter.clip_rect();
        painter.rect_filled(rect, 0.0, Color32::BLACK);

        let to_screen = panel_to_screen(rect);

        self.segments.clear();
        self.renderer.render_pass(&mut self.segments);

        let shapes: Vec<Shape> = self
            .segments
            .iter()
            .filter_map(|segment| segment_shape(segment, to_screen, rect))
            .collect();
        self.line_count = shapes.len();
        painter.extend(shapes);
    }
}

/// Fits the panel into the largest square centered in `rect`.
fn panel_to_screen(rect: Rect) -> emath::RectTransform {
    let side = rect.width().min(rect.height());
    emath::RectTransform::from_to(
        Rect::from_min_size(Pos2::ZERO, vec2(PANEL_WIDTH as f32, PANEL_HEIGHT as f32)),
        Rect::from_center_size(rect.center(), vec2(side, side)),
    )
}

fn to_pos2(point: Point) -> Pos2 {
    pos2(point.x as f32, point.y as f32)
}

fn to_color32(color: Rgb) -> Color32 {
    Color32::from_rgb(color.r, color.g, color.b)
}

fn segment_shape(segment: &Segment, to_screen: emath::RectTransform, clip: Rect) -> Option<Shape> {
    let line = [
        to_screen * to_pos2(segment.start),
        to_screen * to_pos2(segment.end),
    ];

    // culling
    clip.intersects(Rect::from_two_pos(line[0], line[1]))
        .then(|| Shape::line_segment(line, (1.0, to_color32(segment.color))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{LEFT, TOP};

    #[test]
    fn test_panel_fits_wide_rect() {
        let to_screen = panel_to_screen(Rect::from_min_size(Pos2::ZERO, vec2(800.0, 400.0)));

        assert_eq!(to_screen * pos2(0.0, 0.0), pos2(200.0, 0.0));
        assert_eq!(to_screen * pos2(400.0, 400.0), pos2(600.0, 400.0));
    }

    #[test]
    fn test_panel_fits_tall_rect() {
        let to_screen = panel_to_screen(Rect::from_min_size(Pos2::ZERO, vec2(200.0, 300.0)));

        assert_eq!(to_screen * pos2(0.0, 0.0), pos2(0.0, 50.0));
        assert_eq!(to_screen * pos2(400.0, 400.0), pos2(200.0, 250.0));
    }

    #[test]
    fn test_segments_outside_clip_are_culled() {
        let clip = Rect::from_min_size(Pos2::ZERO, vec2(400.0, 400.0));
        let to_screen = panel_to_screen(clip);
        let inside = Segment {
            start: LEFT,
            end: TOP,
            color: Rgb::GREEN,
        };
        let outside = Segment {
            start: Point::new(500.0, 500.0),
            end: Point::new(600.0, 520.0),
            color: Rgb::GREEN,
        };

        assert!(segment_shape(&inside, to_screen, clip).is_some());
        assert!(segment_shape(&outside, to_screen, clip).is_none());
    }

    #[test]
    fn test_colors_convert() {
        assert_eq!(to_color32(Rgb::new(1, 2, 3)), Color32::from_rgb(1, 2, 3));
        assert_eq!(to_color32(Rgb::GREEN), Color32::from_rgb(0, 255, 0));
    }

    #[test]
    fn test_new_keeps_order() {
        let view = FractalTree::new(3);

        assert_eq!(view.renderer.order(), 3);
        assert_eq!(view.line_count, 0);
    }
}
