use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    #[error("{field} must be a finite number, got {value}")]
    NonFiniteInput { field: &'static str, value: f64 },

    #[error("distance to the net must be positive, got {0} m")]
    NonPositiveDistance(f64),

    #[error(
        "no real launch speed: distance * tan(angle) - height is {0:.4} m, the attack cannot clear it"
    )]
    NonPositiveDenominator(f64),

    #[error("launch solution is not finite (speed = {speed} m/s, angle = {angle_deg} deg)")]
    NonFiniteSolution { speed: f64, angle_deg: f64 },

    #[error("flight time must be positive, got {0} s")]
    NonPositiveFlightTime(f64),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("Invalid {field}: '{value}'. Expected a number.")]
    NotANumber { field: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RenderError {
    #[error("drawing backend failed: {0}")]
    Backend(String),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("could not parse view config: {0}")]
    Parse(String),

    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },
}
