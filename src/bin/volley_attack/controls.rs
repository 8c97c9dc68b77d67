use macroquad::prelude::*;
use macroquad::ui::{hash, root_ui, widgets};

use crate::constants::{
    DEPTH_RANGE_M, DISTANCE_RANGE_M, HEIGHT_RANGE_M, PANEL_H, PANEL_W, PANEL_X, PANEL_Y,
};
use crate::state::AppRuntime;

#[derive(Default, Clone, Copy)]
pub(crate) struct FrameActions {
    pub(crate) reset: bool,
    pub(crate) toggle_fit: bool,
    pub(crate) apply_entries: bool,
}

impl FrameActions {
    pub(crate) fn merge(self, other: Self) -> Self {
        Self {
            reset: self.reset || other.reset,
            toggle_fit: self.toggle_fit || other.toggle_fit,
            apply_entries: self.apply_entries || other.apply_entries,
        }
    }
}

pub(crate) fn hotkey_actions() -> FrameActions {
    FrameActions {
        reset: is_key_pressed(KeyCode::R),
        toggle_fit: is_key_pressed(KeyCode::F),
        apply_entries: is_key_pressed(KeyCode::Enter),
    }
}

pub(crate) fn draw_control_panel(state: &mut AppRuntime) -> FrameActions {
    let mut actions = FrameActions::default();
    widgets::Window::new(hash!(), vec2(PANEL_X, PANEL_Y), vec2(PANEL_W, PANEL_H))
        .label("Attack Parabola")
        .ui(&mut *root_ui(), |ui| {
            ui.slider(
                hash!(),
                "Distance to net (m)",
                DISTANCE_RANGE_M.0..DISTANCE_RANGE_M.1,
                &mut state.panel.distance_m,
            );
            ui.slider(
                hash!(),
                "Attack depth (m)",
                DEPTH_RANGE_M.0..DEPTH_RANGE_M.1,
                &mut state.panel.depth_m,
            );
            ui.slider(
                hash!(),
                "Attack height (m)",
                HEIGHT_RANGE_M.0..HEIGHT_RANGE_M.1,
                &mut state.panel.height_m,
            );
            ui.separator();
            ui.input_text(hash!(), "Distance (m)", &mut state.entries.distance);
            ui.input_text(hash!(), "Depth (m)", &mut state.entries.depth);
            ui.input_text(hash!(), "Height (m)", &mut state.entries.height);
            if ui.button(None, "Apply (Enter)") {
                actions.apply_entries = true;
            }
            if let Some(err) = &state.entry_error {
                ui.label(None, err);
            }
            ui.separator();
            if ui.button(None, "Reset (R)") {
                actions.reset = true;
            }
            if ui.button(None, "Toggle Fit (F)") {
                actions.toggle_fit = true;
            }
            ui.label(
                None,
                if state.config.auto_fit {
                    "Scale: fit to surface"
                } else {
                    "Scale: fixed"
                },
            );
        });

    actions
}

pub(crate) fn apply_actions(state: &mut AppRuntime, actions: FrameActions) {
    if actions.apply_entries {
        state.apply_entries();
    }
    if actions.reset {
        state.reset_inputs();
    }
    if actions.toggle_fit {
        state.config.auto_fit = !state.config.auto_fit;
    }
}
