use chrono::{DateTime, Local};
use tracing::warn;

use crate::core::ballistics::{PhysicalInputs, TrajectorySolution, solve};
use crate::core::error::DomainError;
use crate::core::presenter::{Canvas, Markers, PathStyle, Surface, render};

/// Owns the current inputs and the solution computed from them.
pub struct TrajectoryController {
    inputs: PhysicalInputs,
    outcome: Result<TrajectorySolution, DomainError>,
    revision: u64,
    solved_at: DateTime<Local>,
}

impl TrajectoryController {
    pub fn new(inputs: PhysicalInputs) -> Self {
        let controller = Self {
            inputs,
            outcome: solve(inputs),
            revision: 0,
            solved_at: Local::now(),
        };
        controller.log_rejection();
        controller
    }

    pub fn inputs(&self) -> PhysicalInputs {
        self.inputs
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn solved_at(&self) -> DateTime<Local> {
        self.solved_at
    }

    pub fn outcome(&self) -> Result<&TrajectorySolution, &DomainError> {
        self.outcome.as_ref()
    }

    pub fn solution(&self) -> Option<&TrajectorySolution> {
        self.outcome.as_ref().ok()
    }

    pub fn error(&self) -> Option<&DomainError> {
        self.outcome.as_ref().err()
    }

    pub fn set_inputs(
        &mut self,
        inputs: PhysicalInputs,
    ) -> Result<&TrajectorySolution, &DomainError> {
        self.inputs = inputs;
        self.outcome = solve(inputs);
        self.revision += 1;
        self.solved_at = Local::now();
        self.log_rejection();
        self.outcome.as_ref()
    }

    pub fn set_distance(&mut self, distance_m: f64) -> Result<&TrajectorySolution, &DomainError> {
        self.set_inputs(PhysicalInputs {
            distance_m,
            ..self.inputs
        })
    }

    pub fn set_depth(&mut self, depth_m: f64) -> Result<&TrajectorySolution, &DomainError> {
        self.set_inputs(PhysicalInputs {
            depth_m,
            ..self.inputs
        })
    }

    pub fn set_height(&mut self, height_m: f64) -> Result<&TrajectorySolution, &DomainError> {
        self.set_inputs(PhysicalInputs {
            height_m,
            ..self.inputs
        })
    }

    pub fn render<C: Canvas>(
        &self,
        canvas: &mut C,
        surface: Surface,
        style: &PathStyle,
    ) -> Result<Option<Markers>, C::Error> {
        let samples = self.solution().map_or(&[][..], |s| s.samples.as_slice());
        render(canvas, samples, surface, style)
    }

    pub fn status_line(&self) -> String {
        let stamp = self.solved_at.format("%H:%M:%S");
        match &self.outcome {
            Ok(solution) => format!(
                "Initial speed: {} | Launch angle: {} | solved at {stamp}",
                solution.speed_label(),
                solution.angle_label()
            ),
            Err(err) => format!("Cannot solve attack: {err} | at {stamp}"),
        }
    }

    fn log_rejection(&self) {
        if let Err(err) = &self.outcome {
            warn!(
                distance_m = self.inputs.distance_m,
                depth_m = self.inputs.depth_m,
                height_m = self.inputs.height_m,
                "rejected attack inputs: {err}"
            );
        }
    }
}

impl Default for TrajectoryController {
    fn default() -> Self {
        Self::new(PhysicalInputs::default())
    }
}
