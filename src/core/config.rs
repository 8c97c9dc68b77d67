use serde::Deserialize;
use tracing::warn;

use crate::core::ballistics::PhysicalInputs;
use crate::core::error::ConfigError;
use crate::core::presenter::{LineStyle, PathStyle, Rgba, Surface};

pub const CONFIG_ENV_VAR: &str = "VOLLEY_VIEW_CONFIG";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub surface_width: f64,
    pub surface_height: f64,
    pub scale: f64, // px per meter
    pub auto_fit: bool,
    pub marker_radius: f64,
    pub line_width: f64,
    pub palette: Palette,
    pub initial_inputs: PhysicalInputs,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            surface_width: 500.0,
            surface_height: 300.0,
            scale: 10.0,
            auto_fit: false,
            marker_radius: 5.0,
            line_width: 2.0,
            palette: Palette::default(),
            initial_inputs: PhysicalInputs::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub background: Rgba,
    pub path: Rgba,
    pub apex: Rgba,
    pub landing: Rgba,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Rgba::rgb(243, 244, 246),
            path: Rgba::rgb(0, 0, 255),
            apex: Rgba::rgb(255, 0, 0),
            landing: Rgba::rgb(0, 128, 0),
        }
    }
}

impl ViewConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads the config from `VOLLEY_VIEW_CONFIG`. Falls back to defaults if
    /// the variable is unset or does not hold a usable config.
    pub fn load() -> Self {
        match std::env::var(CONFIG_ENV_VAR) {
            Ok(content) => match Self::from_toml_str(&content) {
                Ok(cfg) => cfg,
                Err(e) => {
                    warn!("Ignoring {CONFIG_ENV_VAR}: {e}, using defaults");
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("surface_width", self.surface_width),
            ("surface_height", self.surface_height),
            ("scale", self.scale),
            ("marker_radius", self.marker_radius),
            ("line_width", self.line_width),
        ] {
            if value.is_nan() || value <= 0.0 {
                return Err(ConfigError::NonPositive { field, value });
            }
        }
        Ok(())
    }

    pub fn surface(&self) -> Surface {
        Surface {
            width: self.surface_width,
            height: self.surface_height,
            scale: self.scale,
        }
    }

    pub fn path_style(&self) -> PathStyle {
        PathStyle {
            line: LineStyle {
                color: self.palette.path,
                width: self.line_width,
            },
            apex_fill: self.palette.apex,
            landing_fill: self.palette.landing,
            marker_radius: self.marker_radius,
        }
    }
}
