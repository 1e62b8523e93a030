// Coordinate helpers shared by the input wiring and the render sink

#[cfg(test)]
#[path = "util_test.rs"]
mod util_test;

use web_sys::Window;

use crate::geometry::Point;

/// Window size in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}

pub fn viewport(window: &Window) -> Viewport {
    let fallback = Viewport::default();
    Viewport {
        width: window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(fallback.width),
        height: window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(fallback.height),
    }
}

/// Make `x` and `y` relative to the viewport.
pub fn relative_point(x: f64, y: f64, viewport: Viewport) -> Point {
    Point::new(x / viewport.width.max(1.0), y / viewport.height.max(1.0))
}

/// CSS transform putting an element's middle on a normalized position.
pub fn centered_translate(at: Point, viewport: Viewport, el_width: f64, el_height: f64) -> String {
    let abs_x = at.x * viewport.width - el_width / 2.0;
    let abs_y = at.y * viewport.height - el_height / 2.0;
    format!("translate({abs_x:.2}px, {abs_y:.2}px)")
}

pub fn thing_element_id(id: usize) -> String {
    format!("thing-{id}")
}
