use std::convert::Infallible;

use serde::Deserialize;
use tracing::trace;

use crate::core::ballistics::{Point, apex_point, landing_point};
use crate::core::window::{DisplayPoint, to_display};

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    #[serde(default = "opaque")]
    pub a: f64,
}

fn opaque() -> f64 {
    1.0
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineStyle {
    pub color: Rgba,
    pub width: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Surface {
    pub width: f64,
    pub height: f64,
    pub scale: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PathStyle {
    pub line: LineStyle,
    pub apex_fill: Rgba,
    pub landing_fill: Rgba,
    pub marker_radius: f64,
}

pub trait Canvas {
    type Error;

    fn clear(&mut self, width: f64, height: f64) -> Result<(), Self::Error>;

    fn stroke_polyline(
        &mut self,
        points: &[DisplayPoint],
        style: LineStyle,
    ) -> Result<(), Self::Error>;

    fn fill_circle(
        &mut self,
        center: DisplayPoint,
        radius: f64,
        fill: Rgba,
    ) -> Result<(), Self::Error>;
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Markers {
    pub apex: Point,
    pub landing: Point,
}

impl Markers {
    pub fn from_samples(samples: &[Point]) -> Option<Self> {
        Some(Self {
            apex: apex_point(samples)?,
            landing: landing_point(samples)?,
        })
    }
}

/// Clears the surface, then draws the path with its apex and landing
/// markers. An empty path only clears.
pub fn render<C: Canvas>(
    canvas: &mut C,
    samples: &[Point],
    surface: Surface,
    style: &PathStyle,
) -> Result<Option<Markers>, C::Error> {
    canvas.clear(surface.width, surface.height)?;

    let Some(markers) = Markers::from_samples(samples) else {
        return Ok(None);
    };

    let mapped: Vec<DisplayPoint> = samples
        .iter()
        .map(|p| to_display(*p, surface.height, surface.scale))
        .collect();
    canvas.stroke_polyline(&mapped, style.line)?;

    let apex = to_display(markers.apex, surface.height, surface.scale);
    canvas.fill_circle(apex, style.marker_radius, style.apex_fill)?;

    let landing = to_display(markers.landing, surface.height, surface.scale);
    canvas.fill_circle(landing, style.marker_radius, style.landing_fill)?;

    trace!(
        apex_x = apex.x,
        apex_y = apex.y,
        landing_x = landing.x,
        landing_y = landing.y,
        "rendered attack path"
    );

    Ok(Some(markers))
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Clear {
        width: f64,
        height: f64,
    },
    Polyline {
        points: Vec<DisplayPoint>,
        style: LineStyle,
    },
    Circle {
        center: DisplayPoint,
        radius: f64,
        fill: Rgba,
    },
}

#[derive(Clone, Debug, Default)]
pub struct RecordingCanvas {
    pub ops: Vec<DrawOp>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn circles(&self) -> impl Iterator<Item = (DisplayPoint, Rgba)> + '_ {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Circle { center, fill, .. } => Some((*center, *fill)),
            _ => None,
        })
    }
}

impl Canvas for RecordingCanvas {
    type Error = Infallible;

    fn clear(&mut self, width: f64, height: f64) -> Result<(), Self::Error> {
        // Everything drawn before is gone from the surface.
        self.ops.clear();
        self.ops.push(DrawOp::Clear { width, height });
        Ok(())
    }

    fn stroke_polyline(
        &mut self,
        points: &[DisplayPoint],
        style: LineStyle,
    ) -> Result<(), Self::Error> {
        self.ops.push(DrawOp::Polyline {
            points: points.to_vec(),
            style,
        });
        Ok(())
    }

    fn fill_circle(
        &mut self,
        center: DisplayPoint,
        radius: f64,
        fill: Rgba,
    ) -> Result<(), Self::Error> {
        self.ops.push(DrawOp::Circle {
            center,
            radius,
            fill,
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLUE: Rgba = Rgba::rgb(0, 0, 255);
    const RED: Rgba = Rgba::rgb(255, 0, 0);
    const GREEN: Rgba = Rgba::rgb(0, 128, 0);

    fn surface() -> Surface {
        Surface {
            width: 500.0,
            height: 300.0,
            scale: 10.0,
        }
    }

    fn style() -> PathStyle {
        PathStyle {
            line: LineStyle {
                color: BLUE,
                width: 2.0,
            },
            apex_fill: RED,
            landing_fill: GREEN,
            marker_radius: 5.0,
        }
    }

    #[test]
    fn empty_path_only_clears() {
        let mut canvas = RecordingCanvas::new();
        let Ok(markers) = render(&mut canvas, &[], surface(), &style());

        assert_eq!(markers, None);
        assert_eq!(
            canvas.ops,
            vec![DrawOp::Clear {
                width: 500.0,
                height: 300.0
            }]
        );
    }

    #[test]
    fn draws_path_then_apex_then_landing() {
        let samples = [
            Point::new(0.0, 2.0),
            Point::new(1.0, 4.0),
            Point::new(2.0, 4.0),
            Point::new(3.0, 1.0),
        ];
        let mut canvas = RecordingCanvas::new();
        let Ok(markers) = render(&mut canvas, &samples, surface(), &style());

        assert_eq!(
            markers,
            Some(Markers {
                apex: Point::new(1.0, 4.0),
                landing: Point::new(3.0, 1.0),
            })
        );
        assert_eq!(canvas.ops.len(), 4);
        match &canvas.ops[1] {
            DrawOp::Polyline { points, style } => {
                assert_eq!(points.len(), 4);
                assert_eq!(points[0], DisplayPoint { x: 0.0, y: 280.0 });
                assert_eq!(style.color, BLUE);
            }
            other => panic!("expected polyline, got {other:?}"),
        }
        let circles: Vec<_> = canvas.circles().collect();
        assert_eq!(
            circles,
            vec![
                (DisplayPoint { x: 10.0, y: 260.0 }, RED),
                (DisplayPoint { x: 30.0, y: 290.0 }, GREEN),
            ]
        );
    }

    #[test]
    fn single_sample_is_both_markers() {
        let mut canvas = RecordingCanvas::new();
        let Ok(markers) = render(&mut canvas, &[Point::new(0.0, 2.5)], surface(), &style());

        let markers = markers.expect("one sample is enough for markers");
        assert_eq!(markers.apex, markers.landing);
        assert_eq!(canvas.circles().count(), 2);
    }

    #[test]
    fn clearing_drops_previous_drawing() {
        let mut canvas = RecordingCanvas::new();
        let Ok(_) = render(&mut canvas, &[Point::new(0.0, 1.0)], surface(), &style());
        let Ok(_) = render(&mut canvas, &[], surface(), &style());

        assert_eq!(canvas.ops.len(), 1);
        assert_eq!(canvas.circles().count(), 0);
    }
}
