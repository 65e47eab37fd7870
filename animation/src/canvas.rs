use std::collections::BTreeMap;

use curve::{Curve, Point};

use crate::geometry::Coord;
use crate::render::{DotStyle, LineStyle, RenderSurface, TextStyle};

/// Radius of the light dots marking every curve point.
pub const CURVE_DOT_RADIUS: f64 = 2.0;

/// Radius of highlighted points: operands, results and moving dots.
pub const POINT_DOT_RADIUS: f64 = 4.0;

/// How multiples of the base point are labelled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LabelOptions {
    /// Name of the base point: `P` gives `P`, `2P`, `13P`.
    pub base_label: String,
    /// Also print `(x, y)` under each label.
    pub coords: bool,
}

impl Default for LabelOptions {
    fn default() -> Self {
        LabelOptions {
            base_label: "P".to_string(),
            coords: false,
        }
    }
}

impl LabelOptions {
    pub fn named(base_label: &str) -> Self {
        LabelOptions {
            base_label: base_label.to_string(),
            ..Self::default()
        }
    }

    pub fn with_coords(mut self) -> Self {
        self.coords = true;
        self
    }

    pub fn text(&self, multiple: u64) -> String {
        if multiple == 1 {
            self.base_label.clone()
        } else {
            format!("{multiple}{}", self.base_label)
        }
    }
}

/// A render surface bound to a curve, with the curve plot cached as baseline.
pub struct Canvas<S: RenderSurface> {
    surface: S,
    curve: Curve,
    baseline: Option<S::Snapshot>,
}

impl<S: RenderSurface> Canvas<S> {
    pub fn new(surface: S, curve: Curve) -> Self {
        Canvas {
            surface,
            curve,
            baseline: None,
        }
    }

    pub fn curve(&self) -> &Curve {
        &self.curve
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Return the surface to the plain curve plot.
    ///
    /// The plot is drawn and snapshotted on first use; later resets restore
    /// the snapshot. Returns whether the cached baseline was used.
    pub fn reset(&mut self) -> bool {
        if let Some(baseline) = &self.baseline {
            self.surface.restore(baseline);
            return true;
        }

        self.surface.clear();
        for point in self.curve.points() {
            self.dot_with_radius(&point, CURVE_DOT_RADIUS, &DotStyle::CURVE);
        }
        self.baseline = Some(self.surface.snapshot());
        log::debug!("cached curve baseline for p = {}", self.curve.modulus());
        false
    }

    /// Forget the cached baseline so the next reset redraws the curve.
    pub fn invalidate_baseline(&mut self) {
        self.baseline = None;
    }

    pub fn dot(&mut self, point: &Point, style: &DotStyle) {
        self.dot_with_radius(point, POINT_DOT_RADIUS, style);
    }

    fn dot_with_radius(&mut self, point: &Point, radius: f64, style: &DotStyle) {
        if let Some(center) = Coord::of(point) {
            self.surface.draw_dot(center, radius, style);
        }
    }

    pub fn dot_at(&mut self, center: Coord, style: &DotStyle) {
        self.surface.draw_dot(center, POINT_DOT_RADIUS, style);
    }

    pub fn line(&mut self, from: Coord, to: Coord, style: &LineStyle) {
        self.surface.draw_line(from, to, style);
    }

    /// Label `point` as `multiple` times the base. Infinity has no position
    /// and is skipped.
    pub fn label_point(&mut self, multiple: u64, point: &Point, labels: &LabelOptions) {
        let Some(at) = Coord::of(point) else {
            return;
        };
        self.surface
            .draw_text(&labels.text(multiple), at, TextStyle::Label);
        if labels.coords {
            self.surface
                .draw_text(&point.to_string(), at, TextStyle::Coordinates);
        }
    }

    /// Draw and label every point in `points`.
    pub fn draw_and_label_points(&mut self, points: &BTreeMap<u64, Point>, labels: &LabelOptions) {
        for (multiple, point) in points {
            self.dot(point, &DotStyle::BASE);
            self.label_point(*multiple, point, labels);
        }
    }

    /// The ∞ symbol, centred on the plot.
    pub fn infinity_symbol(&mut self) {
        let centre = self.centre();
        self.surface.draw_text("∞", centre, TextStyle::Infinity);
    }

    /// Reset the plot and show a line of text across it.
    pub fn banner(&mut self, text: &str) {
        self.reset();
        let centre = self.centre();
        self.surface.draw_text(text, centre, TextStyle::Banner);
    }

    fn centre(&self) -> Coord {
        let half = self.curve.modulus() as f64 / 2.0;
        Coord::new(half, half)
    }
}
