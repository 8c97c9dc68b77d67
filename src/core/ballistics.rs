use serde::Deserialize;
use tracing::debug;

use crate::core::error::{DomainError, InputError};

pub const EARTH_GRAVITY_MPS2: f64 = 9.8;
pub const SAMPLE_STEPS: usize = 100; // 101 points including t = 0

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct PhysicalInputs {
    pub distance_m: f64,
    pub depth_m: f64,
    pub height_m: f64,
}

impl Default for PhysicalInputs {
    fn default() -> Self {
        Self::new(3.0, 6.0, 2.5)
    }
}

impl PhysicalInputs {
    pub const fn new(distance_m: f64, depth_m: f64, height_m: f64) -> Self {
        Self {
            distance_m,
            depth_m,
            height_m,
        }
    }

    pub fn parse(distance: &str, depth: &str, height: &str) -> Result<Self, InputError> {
        Ok(Self {
            distance_m: parse_f64(distance, "distance")?,
            depth_m: parse_f64(depth, "depth")?,
            height_m: parse_f64(height, "height")?,
        })
    }

    fn validate(&self) -> Result<(), DomainError> {
        for (field, value) in [
            ("distance", self.distance_m),
            ("depth", self.depth_m),
            ("height", self.height_m),
        ] {
            if !value.is_finite() {
                return Err(DomainError::NonFiniteInput { field, value });
            }
        }
        if self.distance_m <= 0.0 {
            return Err(DomainError::NonPositiveDistance(self.distance_m));
        }
        Ok(())
    }
}

fn parse_f64(value: &str, field: &'static str) -> Result<f64, InputError> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| InputError::NotANumber {
            field,
            value: value.to_string(),
        })
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TrajectorySolution {
    pub angle_deg: f64,
    pub speed_mps: f64,
    pub time_of_flight_s: f64,
    pub samples: Vec<Point>,
}

impl TrajectorySolution {
    pub fn apex(&self) -> Option<Point> {
        apex_point(&self.samples)
    }

    pub fn landing(&self) -> Option<Point> {
        landing_point(&self.samples)
    }

    pub fn max_height(&self) -> f64 {
        self.apex().map_or(0.0, |p| p.y)
    }

    pub fn range(&self) -> f64 {
        self.landing().map_or(0.0, |p| p.x)
    }

    pub fn speed_label(&self) -> String {
        format!("{:.2} m/s", self.speed_mps)
    }

    pub fn angle_label(&self) -> String {
        format!("{:.2}°", self.angle_deg)
    }
}

/// Highest sample; the first one wins on ties.
pub fn apex_point(samples: &[Point]) -> Option<Point> {
    let (first, rest) = samples.split_first()?;
    Some(
        rest.iter()
            .copied()
            .fold(*first, |max, p| if p.y > max.y { p } else { max }),
    )
}

pub fn landing_point(samples: &[Point]) -> Option<Point> {
    samples.last().copied()
}

#[derive(Clone, Copy, Debug)]
struct Launch {
    theta_rad: f64,
    speed_mps: f64,
    height_m: f64,
}

fn velocity_components(launch: Launch) -> (f64, f64) {
    let vx = launch.speed_mps * launch.theta_rad.cos();
    let vy = launch.speed_mps * launch.theta_rad.sin();
    (vx, vy)
}

fn trajectory_at_time(launch: Launch, time_s: f64) -> Point {
    let (vx, vy) = velocity_components(launch);
    let x = vx * time_s;
    let y = launch.height_m + (vy * time_s) - (0.5 * EARTH_GRAVITY_MPS2 * time_s * time_s);
    Point::new(x, y)
}

fn sample_trajectory(launch: Launch, time_of_flight_s: f64, steps: usize) -> Vec<Point> {
    (0..=steps)
        .map(|i| {
            let t = (i as f64 * time_of_flight_s) / steps as f64;
            trajectory_at_time(launch, t)
        })
        .collect()
}

/// Launch angle is `atan(depth / distance)`, kept as is. Inputs without a
/// real finite speed are rejected whole; no partial samples.
pub fn solve(inputs: PhysicalInputs) -> Result<TrajectorySolution, DomainError> {
    inputs.validate()?;

    let theta = (inputs.depth_m / inputs.distance_m).atan();
    let denominator = inputs.distance_m * theta.tan() - inputs.height_m;
    if denominator.is_nan() || denominator <= 0.0 {
        return Err(DomainError::NonPositiveDenominator(denominator));
    }

    let speed = ((inputs.distance_m.powi(2) * EARTH_GRAVITY_MPS2)
        / (2.0 * theta.cos().powi(2) * denominator))
        .sqrt();
    let angle_deg = theta.to_degrees();
    if !speed.is_finite() || !angle_deg.is_finite() {
        return Err(DomainError::NonFiniteSolution { speed, angle_deg });
    }

    let time_of_flight = (2.0 * speed * theta.sin()) / EARTH_GRAVITY_MPS2;
    if time_of_flight.is_nan() || time_of_flight <= 0.0 {
        return Err(DomainError::NonPositiveFlightTime(time_of_flight));
    }

    let launch = Launch {
        theta_rad: theta,
        speed_mps: speed,
        height_m: inputs.height_m,
    };
    let samples = sample_trajectory(launch, time_of_flight, SAMPLE_STEPS);

    debug!(
        angle_deg,
        speed_mps = speed,
        time_of_flight_s = time_of_flight,
        "solved attack trajectory"
    );

    Ok(TrajectorySolution {
        angle_deg,
        speed_mps: speed,
        time_of_flight_s: time_of_flight,
        samples,
    })
}
