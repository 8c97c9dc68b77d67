use macroquad::prelude::*;
use tracing::{info, warn};
use volley_trajectory::core::config::ViewConfig;
use volley_trajectory::core::window::fit_scale;

use crate::constants::{
    INITIAL_WINDOW_HEIGHT, INITIAL_WINDOW_WIDTH, MSAA_SAMPLES, SURFACE_LEFT, SURFACE_TOP,
    UI_FONT_PATH, WINDOW_BG,
};
use crate::controls::{apply_actions, draw_control_panel, hotkey_actions};
use crate::hud::draw_hud;
use crate::render::ScreenCanvas;
use crate::state::AppRuntime;

pub(crate) fn window_conf() -> Conf {
    Conf {
        window_title: "Volleyball Attack Trajectory".to_string(),
        window_width: INITIAL_WINDOW_WIDTH,
        window_height: INITIAL_WINDOW_HEIGHT,
        high_dpi: true,
        sample_count: MSAA_SAMPLES,
        ..Default::default()
    }
}

fn current_scale(state: &AppRuntime) -> f64 {
    let config = &state.config;
    match state.controller.solution() {
        Some(solution) if config.auto_fit => fit_scale(
            &solution.samples,
            config.surface_width,
            config.surface_height,
            config.scale,
        ),
        _ => config.scale,
    }
}

pub(crate) async fn run() {
    let ui_font = match load_ttf_font(UI_FONT_PATH).await {
        Ok(font) => Some(font),
        Err(err) => {
            warn!("Could not load '{UI_FONT_PATH}': {err}. Falling back to default font.");
            None
        }
    };

    let mut state = AppRuntime::new(ViewConfig::load());
    info!(inputs = ?state.controller.inputs(), "attack view ready");

    loop {
        clear_background(WINDOW_BG);

        let actions = hotkey_actions().merge(draw_control_panel(&mut state));
        apply_actions(&mut state, actions);
        state.sync_inputs();

        let scale = current_scale(&state);
        let mut surface = state.config.surface();
        surface.scale = scale;

        let mut canvas = ScreenCanvas::new(
            vec2(SURFACE_LEFT, SURFACE_TOP),
            surface.width,
            surface.height,
            state.config.palette.background,
        );
        let Ok(markers) =
            state
                .controller
                .render(&mut canvas, surface, &state.config.path_style());

        draw_hud(&state, markers, scale, ui_font.as_ref());

        next_frame().await;
    }
}
