pub mod ballistics;
pub mod config;
pub mod controller;
pub mod error;
pub mod presenter;
pub mod raster;
pub mod window;
