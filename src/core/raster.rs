use plotters::coord::Shift;
use plotters::prelude::*;

use crate::core::ballistics::Point;
use crate::core::config::ViewConfig;
use crate::core::error::RenderError;
use crate::core::presenter::{Canvas, LineStyle, Markers, Rgba, render};
use crate::core::window::DisplayPoint;

fn to_plotters(color: Rgba) -> RGBAColor {
    RGBAColor(color.r, color.g, color.b, color.a)
}

pub struct PlottersCanvas<DB: DrawingBackend> {
    area: DrawingArea<DB, Shift>,
    background: Rgba,
}

impl<DB: DrawingBackend> PlottersCanvas<DB> {
    pub fn new(area: DrawingArea<DB, Shift>, background: Rgba) -> Self {
        Self { area, background }
    }

    pub fn finish(self) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
        self.area.present()
    }
}

impl<DB: DrawingBackend> Canvas for PlottersCanvas<DB> {
    type Error = DrawingAreaErrorKind<DB::ErrorType>;

    fn clear(&mut self, _width: f64, _height: f64) -> Result<(), Self::Error> {
        self.area.fill(&to_plotters(self.background))
    }

    fn stroke_polyline(
        &mut self,
        points: &[DisplayPoint],
        style: LineStyle,
    ) -> Result<(), Self::Error> {
        let coords: Vec<(i32, i32)> = points.iter().map(|p| p.to_pixel()).collect();
        let stroke = to_plotters(style.color).stroke_width(style.width.round().max(1.0) as u32);
        self.area.draw(&PathElement::new(coords, stroke))
    }

    fn fill_circle(
        &mut self,
        center: DisplayPoint,
        radius: f64,
        fill: Rgba,
    ) -> Result<(), Self::Error> {
        let radius = radius.round().max(1.0) as i32;
        self.area
            .draw(&Circle::new(center.to_pixel(), radius, to_plotters(fill).filled()))
    }
}

pub fn render_to_rgb(
    samples: &[Point],
    config: &ViewConfig,
    scale: f64,
) -> Result<(Vec<u8>, Option<Markers>), RenderError> {
    let width = config.surface_width.round().max(1.0) as u32;
    let height = config.surface_height.round().max(1.0) as u32;
    let mut buffer = vec![0u8; (width as usize) * (height as usize) * 3];

    let markers = {
        let backend = BitMapBackend::with_buffer(&mut buffer, (width, height));
        let mut canvas =
            PlottersCanvas::new(backend.into_drawing_area(), config.palette.background);
        let mut surface = config.surface();
        surface.scale = scale;
        let markers = render(&mut canvas, samples, surface, &config.path_style())
            .map_err(|e| RenderError::Backend(e.to_string()))?;
        canvas
            .finish()
            .map_err(|e| RenderError::Backend(e.to_string()))?;
        markers
    };

    Ok((buffer, markers))
}
