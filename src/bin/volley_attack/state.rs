use volley_trajectory::core::ballistics::PhysicalInputs;
use volley_trajectory::core::config::ViewConfig;
use volley_trajectory::core::controller::TrajectoryController;

#[derive(Clone, Copy, PartialEq)]
pub(crate) struct InputPanel {
    pub(crate) distance_m: f32,
    pub(crate) depth_m: f32,
    pub(crate) height_m: f32,
}

impl InputPanel {
    pub(crate) fn from_inputs(inputs: PhysicalInputs) -> Self {
        Self {
            distance_m: inputs.distance_m as f32,
            depth_m: inputs.depth_m as f32,
            height_m: inputs.height_m as f32,
        }
    }

    pub(crate) fn to_inputs(self) -> PhysicalInputs {
        PhysicalInputs::new(
            f64::from(self.distance_m),
            f64::from(self.depth_m),
            f64::from(self.height_m),
        )
    }
}

// Text typed into the numeric fields, applied on demand.
#[derive(Clone, Default, PartialEq, Debug)]
pub(crate) struct FieldEntries {
    pub(crate) distance: String,
    pub(crate) depth: String,
    pub(crate) height: String,
}

impl FieldEntries {
    pub(crate) fn from_inputs(inputs: PhysicalInputs) -> Self {
        Self {
            distance: format!("{}", inputs.distance_m),
            depth: format!("{}", inputs.depth_m),
            height: format!("{}", inputs.height_m),
        }
    }
}

pub(crate) struct AppRuntime {
    pub(crate) config: ViewConfig,
    pub(crate) controller: TrajectoryController,
    pub(crate) panel: InputPanel,
    pub(crate) entries: FieldEntries,
    pub(crate) entry_error: Option<String>,
}

impl AppRuntime {
    pub(crate) fn new(config: ViewConfig) -> Self {
        let inputs = config.initial_inputs;
        Self {
            config,
            controller: TrajectoryController::new(inputs),
            panel: InputPanel::from_inputs(inputs),
            entries: FieldEntries::from_inputs(inputs),
            entry_error: None,
        }
    }

    pub(crate) fn sync_inputs(&mut self) {
        if InputPanel::from_inputs(self.controller.inputs()) == self.panel {
            return;
        }
        let _ = self.controller.set_inputs(self.panel.to_inputs());
        self.entries = FieldEntries::from_inputs(self.controller.inputs());
        self.entry_error = None;
    }

    pub(crate) fn apply_entries(&mut self) {
        match PhysicalInputs::parse(
            &self.entries.distance,
            &self.entries.depth,
            &self.entries.height,
        ) {
            Ok(inputs) => {
                let _ = self.controller.set_inputs(inputs);
                self.panel = InputPanel::from_inputs(inputs);
                self.entry_error = None;
            }
            Err(err) => self.entry_error = Some(err.to_string()),
        }
    }

    pub(crate) fn reset_inputs(&mut self) {
        let inputs = self.config.initial_inputs;
        self.panel = InputPanel::from_inputs(inputs);
        self.entries = FieldEntries::from_inputs(inputs);
        self.entry_error = None;
        let _ = self.controller.set_inputs(inputs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typed_values_solve_at_full_precision() {
        let mut state = AppRuntime::new(ViewConfig::default());
        state.entries.height = "3.1".to_string();
        state.apply_entries();
        state.sync_inputs();

        assert_eq!(state.entry_error, None);
        assert_eq!(state.controller.inputs(), PhysicalInputs::new(3.0, 6.0, 3.1));
        assert_eq!(state.controller.revision(), 1);
    }

    #[test]
    fn bad_text_keeps_previous_solution() {
        let mut state = AppRuntime::new(ViewConfig::default());
        state.entries.depth = "deep".to_string();
        state.apply_entries();

        assert_eq!(
            state.entry_error.as_deref(),
            Some("Invalid depth: 'deep'. Expected a number.")
        );
        assert_eq!(state.controller.revision(), 0);
        assert!(state.controller.solution().is_some());
    }

    #[test]
    fn slider_change_refreshes_text_fields() {
        let mut state = AppRuntime::new(ViewConfig::default());
        state.panel.distance_m = 4.0;
        state.sync_inputs();
        state.sync_inputs();

        assert_eq!(state.controller.revision(), 1);
        assert_eq!(state.entries.distance, "4");
    }
}
