mod annotation;
mod scene;
mod segment;
mod tracer;

use crate::core::vector;
use crate::error::TraceError;
use crate::ray_intersection::Ray;
use crate::utils;
use nalgebra::{Point2, Vector2};
use serde::{Deserialize, Serialize};

pub use annotation::HitAnnotation;
pub use scene::Scene;
pub use segment::{RaySegment, SegmentKind, TraceSummary};
pub use tracer::Tracer;

/// Step the emitter's angle snaps to when it is re-aimed.
pub const ANGLE_SNAP: f64 = 5.0;

/// Tunable limits and decay factors of the tracer.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TraceOptions {
    pub max_bounces: u32,
    pub min_intensity: f64,
    /// Reflected and transmitted fractions at or below this spawn no ray.
    pub branch_cutoff: f64,
    /// Length of the segment drawn for a ray that leaves the scene.
    pub miss_length: f64,
    /// Length rays are extended to when testing them against the obstacle.
    pub probe_length: f64,
    pub air_decay: f64,
    pub tir_decay: f64,
    /// Flat intensity added to every transmitted ray. This does not conserve
    /// energy; set it to 0 for physically plausible intensities.
    pub refraction_boost: f64,
}

impl Default for TraceOptions {
    fn default() -> Self {
        Self {
            max_bounces: 10,
            min_intensity: 0.01,
            branch_cutoff: 0.01,
            miss_length: 1000.0,
            probe_length: 10_000.0,
            air_decay: 0.99,
            tir_decay: 0.98,
            refraction_boost: 0.05,
        }
    }
}

impl TraceOptions {
    pub fn validate(&self) -> Result<(), TraceError> {
        let values = [
            self.min_intensity,
            self.branch_cutoff,
            self.miss_length,
            self.probe_length,
            self.air_decay,
            self.tir_decay,
            self.refraction_boost,
        ];
        if !values.iter().all(|value| value.is_finite()) {
            return Err(TraceError::InvalidOptions("values must be finite"));
        }
        if self.probe_length <= 0.0 {
            return Err(TraceError::InvalidOptions("probe_length must be positive"));
        }
        if self.miss_length <= 0.0 {
            return Err(TraceError::InvalidOptions("miss_length must be positive"));
        }
        if self.min_intensity < 0.0 || self.branch_cutoff < 0.0 {
            return Err(TraceError::InvalidOptions(
                "min_intensity and branch_cutoff must not be negative",
            ));
        }
        if self.air_decay < 0.0 || self.tir_decay < 0.0 {
            return Err(TraceError::InvalidOptions("decay factors must not be negative"));
        }

        Ok(())
    }
}

/// Point light source with a launch angle in degrees.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Emitter {
    pub position: Point2<f64>,
    pub angle: f64,
}

impl Default for Emitter {
    fn default() -> Self {
        Self {
            position: Point2::new(100.0, 350.0),
            angle: 45.0,
        }
    }
}

impl Emitter {
    pub fn new(position: Point2<f64>, angle: f64) -> Self {
        Self { position, angle }
    }

    pub fn direction(&self) -> Vector2<f64> {
        utils::angle_to_direction(self.angle)
    }

    pub fn ray(&self) -> Ray {
        Ray::new(self.position, self.direction())
    }

    /// Points the emitter at `target`, rounding the angle to a multiple of `snap` degrees.
    pub fn aim_at(&mut self, target: &Point2<f64>, snap: f64) {
        let direction = vector::normalize(&(*target - self.position));
        self.angle = utils::snap_angle(utils::direction_to_angle(&direction), snap);
    }
}
