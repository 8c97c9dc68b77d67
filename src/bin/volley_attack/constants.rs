use macroquad::prelude::Color;

pub const INITIAL_WINDOW_WIDTH: i32 = 960;
pub const INITIAL_WINDOW_HEIGHT: i32 = 640;
pub const MSAA_SAMPLES: i32 = 4;
pub const UI_FONT_PATH: &str = "assets/fonts/Lato-Regular.ttf";

pub const PANEL_X: f32 = 18.0;
pub const PANEL_Y: f32 = 90.0;
pub const PANEL_W: f32 = 360.0;
pub const PANEL_H: f32 = 340.0;

pub const SURFACE_LEFT: f32 = 410.0;
pub const SURFACE_TOP: f32 = 120.0;

pub const TITLE_Y: f32 = 46.0;

pub const DISTANCE_RANGE_M: (f32, f32) = (0.5, 15.0);
pub const DEPTH_RANGE_M: (f32, f32) = (0.0, 18.0);
pub const HEIGHT_RANGE_M: (f32, f32) = (0.0, 5.0);

pub const WINDOW_BG: Color = Color::new(0.98, 0.98, 0.99, 1.0);
pub const SURFACE_BORDER: Color = Color::new(0.82, 0.84, 0.87, 1.0);
