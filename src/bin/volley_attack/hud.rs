use macroquad::prelude::*;
use volley_trajectory::core::presenter::Markers;

use crate::constants::{PANEL_H, PANEL_X, PANEL_Y, SURFACE_LEFT, SURFACE_TOP, TITLE_Y};
use crate::render::draw_ui_text;
use crate::state::AppRuntime;

pub(crate) fn draw_hud(
    state: &AppRuntime,
    markers: Option<Markers>,
    scale: f64,
    font: Option<&Font>,
) {
    draw_header(font);
    draw_result_block(state, font);
    draw_marker_block(state, markers, scale, font);
}

fn draw_header(font: Option<&Font>) {
    draw_ui_text(
        "Volleyball Attack Trajectory",
        PANEL_X,
        TITLE_Y,
        30,
        Color::from_rgba(30, 30, 35, 255),
        font,
    );
    draw_ui_text(
        "Drag sliders to change the attack | R reset | F toggle fit",
        SURFACE_LEFT,
        SURFACE_TOP - 16.0,
        18,
        DARKGRAY,
        font,
    );
}

fn draw_result_block(state: &AppRuntime, font: Option<&Font>) {
    let x = PANEL_X;
    let y = PANEL_Y + PANEL_H + 34.0;
    match state.controller.outcome() {
        Ok(solution) => {
            draw_ui_text(
                &format!("Initial speed: {}", solution.speed_label()),
                x,
                y,
                24,
                Color::from_rgba(30, 30, 35, 255),
                font,
            );
            draw_ui_text(
                &format!("Launch angle: {}", solution.angle_label()),
                x,
                y + 30.0,
                24,
                Color::from_rgba(30, 30, 35, 255),
                font,
            );
            draw_ui_text(
                &format!("Flight time: {:.2} s", solution.time_of_flight_s),
                x,
                y + 56.0,
                20,
                BLUE,
                font,
            );
        }
        Err(err) => {
            draw_ui_text("Cannot solve this attack", x, y, 24, MAROON, font);
            draw_ui_text(&err.to_string(), x, y + 28.0, 16, MAROON, font);
        }
    }
    draw_ui_text(
        &format!(
            "Revision {} solved at {}",
            state.controller.revision(),
            state.controller.solved_at().format("%H:%M:%S")
        ),
        x,
        y + 86.0,
        16,
        DARKGRAY,
        font,
    );
}

fn draw_marker_block(
    state: &AppRuntime,
    markers: Option<Markers>,
    scale: f64,
    font: Option<&Font>,
) {
    let x = SURFACE_LEFT;
    let y = SURFACE_TOP + state.config.surface_height as f32 + 30.0;
    let Some(markers) = markers else {
        return;
    };
    draw_ui_text(
        &format!(
            "Apex: x = {:.2} m, y = {:.2} m | Landing: x = {:.2} m, y = {:.2} m",
            markers.apex.x, markers.apex.y, markers.landing.x, markers.landing.y
        ),
        x,
        y,
        18,
        DARKGRAY,
        font,
    );
    draw_ui_text(
        &format!("Scale: {scale:.2} px/m"),
        x,
        y + 24.0,
        16,
        DARKGRAY,
        font,
    );
}
