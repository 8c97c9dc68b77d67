use std::convert::Infallible;

use macroquad::prelude::*;
use volley_trajectory::core::presenter::{Canvas, LineStyle, Rgba};
use volley_trajectory::core::window::DisplayPoint;

use crate::constants::SURFACE_BORDER;

pub(crate) fn to_color(color: Rgba) -> Color {
    Color::new(
        f32::from(color.r) / 255.0,
        f32::from(color.g) / 255.0,
        f32::from(color.b) / 255.0,
        color.a as f32,
    )
}

pub(crate) fn draw_ui_text(
    text: &str,
    x: f32,
    y: f32,
    font_size: u16,
    color: Color,
    font: Option<&Font>,
) {
    draw_text_ex(
        text,
        x,
        y,
        TextParams {
            font,
            font_size,
            color,
            ..Default::default()
        },
    );
}

// Segment of `a -> b` inside `[0, width] x [0, height]`, if any.
pub(crate) fn clip_segment(
    a: DisplayPoint,
    b: DisplayPoint,
    width: f64,
    height: f64,
) -> Option<(DisplayPoint, DisplayPoint)> {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let mut t0 = 0.0f64;
    let mut t1 = 1.0f64;

    for (p, q) in [(-dx, a.x), (dx, width - a.x), (-dy, a.y), (dy, height - a.y)] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else if r < t0 {
            return None;
        } else {
            t1 = t1.min(r);
        }
    }

    let at = |t: f64| DisplayPoint {
        x: a.x + t * dx,
        y: a.y + t * dy,
    };
    Some((at(t0), at(t1)))
}

pub(crate) fn inside_surface(p: DisplayPoint, width: f64, height: f64) -> bool {
    (0.0..=width).contains(&p.x) && (0.0..=height).contains(&p.y)
}

// Presenter output drawn into the window rectangle at `origin`, clipped to
// the surface size.
pub(crate) struct ScreenCanvas {
    origin: Vec2,
    width: f64,
    height: f64,
    background: Color,
}

impl ScreenCanvas {
    pub(crate) fn new(origin: Vec2, width: f64, height: f64, background: Rgba) -> Self {
        Self {
            origin,
            width,
            height,
            background: to_color(background),
        }
    }

    fn to_screen(&self, p: DisplayPoint) -> Vec2 {
        self.origin + vec2(p.x as f32, p.y as f32)
    }
}

impl Canvas for ScreenCanvas {
    type Error = Infallible;

    fn clear(&mut self, width: f64, height: f64) -> Result<(), Self::Error> {
        self.width = width;
        self.height = height;
        let (w, h) = (width as f32, height as f32);
        draw_rectangle(self.origin.x, self.origin.y, w, h, self.background);
        draw_rectangle_lines(self.origin.x, self.origin.y, w, h, 2.0, SURFACE_BORDER);
        Ok(())
    }

    fn stroke_polyline(
        &mut self,
        points: &[DisplayPoint],
        style: LineStyle,
    ) -> Result<(), Self::Error> {
        let color = to_color(style.color);
        for pair in points.windows(2) {
            let Some((a, b)) = clip_segment(pair[0], pair[1], self.width, self.height) else {
                continue;
            };
            let a = self.to_screen(a);
            let b = self.to_screen(b);
            draw_line(a.x, a.y, b.x, b.y, style.width as f32, color);
        }
        Ok(())
    }

    fn fill_circle(
        &mut self,
        center: DisplayPoint,
        radius: f64,
        fill: Rgba,
    ) -> Result<(), Self::Error> {
        if !inside_surface(center, self.width, self.height) {
            return Ok(());
        }
        let c = self.to_screen(center);
        draw_circle(c.x, c.y, radius as f32, to_color(fill));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use volley_trajectory::core::ballistics::PhysicalInputs;
    use volley_trajectory::core::config::ViewConfig;
    use volley_trajectory::core::controller::TrajectoryController;
    use volley_trajectory::core::presenter::{DrawOp, RecordingCanvas};

    fn pt(x: f64, y: f64) -> DisplayPoint {
        DisplayPoint { x, y }
    }

    #[test]
    fn segment_inside_is_unchanged() {
        let clipped = clip_segment(pt(10.0, 20.0), pt(100.0, 200.0), 500.0, 300.0);
        assert_eq!(clipped, Some((pt(10.0, 20.0), pt(100.0, 200.0))));
    }

    #[test]
    fn segment_outside_is_dropped() {
        assert_eq!(clip_segment(pt(600.0, 10.0), pt(900.0, 50.0), 500.0, 300.0), None);
        assert_eq!(clip_segment(pt(10.0, -5.0), pt(400.0, -1.0), 500.0, 300.0), None);
    }

    #[test]
    fn segment_crossing_edge_stops_at_it() {
        let (a, b) = clip_segment(pt(400.0, 100.0), pt(600.0, 100.0), 500.0, 300.0)
            .expect("part of the segment is visible");
        assert_eq!(a, pt(400.0, 100.0));
        assert_eq!(b, pt(500.0, 100.0));
    }

    #[test]
    fn far_attack_stays_on_surface() {
        let cfg = ViewConfig::default();
        let controller = TrajectoryController::new(PhysicalInputs::new(15.0, 5.01, 5.0));
        let mut canvas = RecordingCanvas::new();
        let Ok(_) = controller.render(&mut canvas, cfg.surface(), &cfg.path_style());

        let Some(DrawOp::Polyline { points, .. }) = canvas.ops.get(1) else {
            panic!("expected a polyline");
        };
        let visible: Vec<_> = points
            .windows(2)
            .filter_map(|pair| clip_segment(pair[0], pair[1], 500.0, 300.0))
            .collect();
        assert!(visible.len() < points.len() - 1);
        for (a, b) in visible {
            assert!(inside_surface(a, 500.0, 300.0));
            assert!(inside_surface(b, 500.0, 300.0));
        }
        let landing = controller.solution().and_then(|s| s.landing()).expect("solves");
        assert!(landing.x * cfg.scale > 500.0);
    }

    #[test]
    fn markers_off_surface_are_skipped() {
        assert!(inside_surface(pt(0.0, 300.0), 500.0, 300.0));
        assert!(!inside_surface(pt(75150.0, 250.0), 500.0, 300.0));
        assert!(!inside_surface(pt(10.0, -0.5), 500.0, 300.0));
    }
}
