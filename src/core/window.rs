use crate::core::ballistics::Point;

const X_PADDING_RATIO: f64 = 0.06;
const Y_PADDING_RATIO: f64 = 0.10;

// origin top-left, y grows downward
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DisplayPoint {
    pub x: f64,
    pub y: f64,
}

impl DisplayPoint {
    pub fn to_pixel(self) -> (i32, i32) {
        (self.x.round() as i32, self.y.round() as i32)
    }
}

pub fn to_display(point: Point, surface_height: f64, scale: f64) -> DisplayPoint {
    DisplayPoint {
        x: point.x * scale,
        y: surface_height - (point.y * scale),
    }
}

/// Largest scale, capped at `max_scale`, that keeps every sample (plus a
/// small margin) on a `surface_width` x `surface_height` surface.
pub fn fit_scale(
    samples: &[Point],
    surface_width: f64,
    surface_height: f64,
    max_scale: f64,
) -> f64 {
    let raw_max_x = samples.iter().fold(0.0f64, |acc, p| acc.max(p.x)).max(1.0);
    let raw_max_y = samples.iter().fold(0.0f64, |acc, p| acc.max(p.y)).max(1.0);
    let x_span = raw_max_x * (1.0 + X_PADDING_RATIO);
    let y_span = raw_max_y * (1.0 + Y_PADDING_RATIO);

    max_scale
        .min(surface_width.max(1.0) / x_span)
        .min(surface_height.max(1.0) / y_span)
}
