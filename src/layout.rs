//! Radial placement of tick marks around the dial
//!
//! Tick `0` sits at 12 o'clock and angles grow clockwise. Each placement is a
//! top-left translation inside the container plus a rotation about the image
//! centre, ready to be applied to an image view.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Measured size and padding of the dial container, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContainerMetrics {
    pub width: i32,
    pub height: i32,
    #[serde(default)]
    pub padding_left: i32,
    #[serde(default)]
    pub padding_top: i32,
    #[serde(default)]
    pub padding_right: i32,
    #[serde(default)]
    pub padding_bottom: i32,
}

impl ContainerMetrics {
    /// Container without padding
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// All sizes and paddings are non-negative
    pub fn is_well_formed(&self) -> bool {
        [
            self.width,
            self.height,
            self.padding_left,
            self.padding_top,
            self.padding_right,
            self.padding_bottom,
        ]
        .iter()
        .all(|v| *v >= 0)
    }

    pub fn with_padding(mut self, left: i32, top: i32, right: i32, bottom: i32) -> Self {
        self.padding_left = left;
        self.padding_top = top;
        self.padding_right = right;
        self.padding_bottom = bottom;
        self
    }
}

/// Intrinsic size of one tick image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickImage {
    pub width: i32,
    pub height: i32,
}

impl TickImage {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub fn is_well_formed(&self) -> bool {
        self.width >= 0 && self.height >= 0
    }

    fn half_extent(&self) -> f32 {
        self.width.max(self.height) as f32 / 2.0
    }
}

/// Where the dial circle sits vertically inside its container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DialAnchor {
    /// Circle touches the bottom edge of the content area
    #[default]
    Bottom,
    /// Circle centred in the content area
    Center,
}

/// Circle the ticks are laid out on. Derived from the metrics, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LayoutGeometry {
    pub center_x: i32,
    pub center_y: i32,
    pub radius: i32,
}

impl LayoutGeometry {
    /// Arithmetic runs in `i64` and the results saturate into `i32`, so any
    /// metrics produce a geometry.
    pub fn from_metrics(metrics: &ContainerMetrics, anchor: DialAnchor) -> Self {
        let width = i64::from(metrics.width);
        let height = i64::from(metrics.height);
        let left = i64::from(metrics.padding_left);
        let top = i64::from(metrics.padding_top);

        let inner_w = width - left - i64::from(metrics.padding_right);
        let inner_h = height - top - i64::from(metrics.padding_bottom);
        let radius = saturate((inner_w / 2).min(inner_h / 2).max(0));

        // Horizontal centre only subtracts the left padding.
        let center_x = width / 2 - left;
        let center_y = match anchor {
            DialAnchor::Bottom => inner_h - i64::from(radius),
            DialAnchor::Center => height / 2 - top,
        };

        Self {
            center_x: saturate(center_x),
            center_y: saturate(center_y),
            radius,
        }
    }
}

fn saturate(value: i64) -> i32 {
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Translation and rotation for a single tick mark
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub translate_x: f32,
    pub translate_y: f32,
    pub rotation_deg: f32,
}

/// Computes tick placements for a fixed tick count and anchor
#[derive(Debug, Clone, Copy)]
pub struct RadialLayoutEngine {
    tick_count: usize,
    anchor: DialAnchor,
}

impl RadialLayoutEngine {
    pub fn new(tick_count: usize, anchor: DialAnchor) -> Self {
        Self { tick_count, anchor }
    }

    pub fn tick_count(&self) -> usize {
        self.tick_count
    }

    pub fn anchor(&self) -> DialAnchor {
        self.anchor
    }

    /// Place every tick evenly on the circle inscribed in `metrics`
    pub fn compute_placements(&self, metrics: &ContainerMetrics, image: &TickImage) -> Vec<Placement> {
        let geometry = LayoutGeometry::from_metrics(metrics, self.anchor);
        debug!(
            "Dial geometry: center=({}, {}), radius={}, image={}x{}",
            geometry.center_x, geometry.center_y, geometry.radius, image.width, image.height
        );

        if self.tick_count == 0 {
            return Vec::new();
        }

        let step = 360.0_f32 / self.tick_count as f32;
        let mut angle_deg = 0.0_f32;
        let mut placements = Vec::with_capacity(self.tick_count);
        for _ in 0..self.tick_count {
            placements.push(place_tick(&geometry, image, angle_deg));
            angle_deg += step;
        }
        placements
    }
}

/// Bottom-anchored placements, the default dial arrangement
pub fn compute_placements(metrics: &ContainerMetrics, image: &TickImage, tick_count: usize) -> Vec<Placement> {
    RadialLayoutEngine::new(tick_count, DialAnchor::Bottom).compute_placements(metrics, image)
}

fn place_tick(geometry: &LayoutGeometry, image: &TickImage, angle_deg: f32) -> Placement {
    // Distance from the circle origin to the image centre.
    let center_radius = (geometry.radius as f32 - image.half_extent()).max(0.0);

    // Shift by -90 degrees so that angle 0 points up.
    let radians = ((angle_deg - 90.0) / 180.0) as f64 * PI;
    let center_x = round_half_up(center_radius as f64 * radians.cos()) + geometry.center_x as f64;
    let center_y = round_half_up(center_radius as f64 * radians.sin()) + geometry.center_y as f64;

    Placement {
        translate_x: center_x as f32 - image.width as f32 / 2.0,
        translate_y: center_y as f32 - image.height as f32 / 2.0,
        rotation_deg: angle_deg,
    }
}

fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Tick placements created once, when the container size first becomes known
#[derive(Debug)]
pub struct DialLayout {
    engine: RadialLayoutEngine,
    placements: Option<Vec<Placement>>,
}

impl DialLayout {
    pub fn new(engine: RadialLayoutEngine) -> Self {
        Self {
            engine,
            placements: None,
        }
    }

    /// Handle a "size known" event.
    ///
    /// Only the first event creates placements; later ones return the stored
    /// placements untouched. The flag is `true` when this call created them.
    pub fn on_size_known(&mut self, metrics: &ContainerMetrics, image: &TickImage) -> (&[Placement], bool) {
        let created = self.placements.is_none();
        if created {
            debug!(
                "Container size known: {}x{}, padding l={} t={} r={} b={}",
                metrics.width,
                metrics.height,
                metrics.padding_left,
                metrics.padding_top,
                metrics.padding_right,
                metrics.padding_bottom
            );
        }
        let engine = self.engine;
        let placements = self
            .placements
            .get_or_insert_with(|| engine.compute_placements(metrics, image));
        (placements.as_slice(), created)
    }

    pub fn placements(&self) -> Option<&[Placement]> {
        self.placements.as_deref()
    }

    pub fn is_laid_out(&self) -> bool {
        self.placements.is_some()
    }
}
