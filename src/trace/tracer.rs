use super::{Emitter, RaySegment, SegmentKind, TraceOptions};
use crate::core::{vector, Material, MaterialTable, Rectangle, AIR, MIRROR};
use crate::error::TraceError;
use crate::ray_intersection::{Intersectable, Ray};
use crate::utils;
use indicatif::{ParallelProgressIterator, ProgressBar, ProgressStyle};
use log::{debug, trace};
use nalgebra::{Point2, Vector2};
use rayon::prelude::*;

#[derive(Copy, Clone, Debug)]
struct Medium<'a> {
    name: &'a str,
    material: Material,
}

impl Medium<'_> {
    fn is_air(&self) -> bool {
        self.name == AIR
    }

    fn is_mirror(&self) -> bool {
        self.name == MIRROR
    }
}

fn relabel(segments: Vec<RaySegment>, kind: SegmentKind) -> impl Iterator<Item = RaySegment> {
    segments
        .into_iter()
        .map(move |segment| segment.with_kind(kind))
}

/// Traces a ray against a single rectangular obstacle, following every
/// reflected and refracted branch until the bounce or intensity budget runs out.
#[derive(Clone, Debug)]
pub struct Tracer {
    options: TraceOptions,
    materials: MaterialTable,
    obstacle: Rectangle,
    air: Material,
}

impl Tracer {
    pub fn new(
        options: TraceOptions,
        materials: MaterialTable,
        obstacle: Rectangle,
    ) -> Result<Self, TraceError> {
        options.validate()?;
        materials.validate()?;
        if !obstacle.is_valid() {
            return Err(TraceError::InvalidObstacle);
        }
        let air = *materials.get(AIR)?;

        Ok(Self {
            options,
            materials,
            obstacle,
            air,
        })
    }

    pub fn options(&self) -> &TraceOptions {
        &self.options
    }

    pub fn materials(&self) -> &MaterialTable {
        &self.materials
    }

    pub fn obstacle(&self) -> &Rectangle {
        &self.obstacle
    }

    fn medium(&self, name: &str) -> Result<Medium<'_>, TraceError> {
        let (name, material) = self.materials.get_entry(name)?;
        Ok(Medium {
            name,
            material: *material,
        })
    }

    fn air(&self) -> Medium<'static> {
        Medium {
            name: AIR,
            material: self.air,
        }
    }

    /// Traces a full-intensity ray launched from `origin` along `direction`,
    /// which is expected to be unit length.
    pub fn trace(
        &self,
        origin: Point2<f64>,
        direction: Vector2<f64>,
        current: &str,
        target: &str,
    ) -> Result<Vec<RaySegment>, TraceError> {
        self.trace_from(origin, direction, current, target, 1.0, 0)
    }

    /// Traces from an arbitrary point of an existing path.
    pub fn trace_from(
        &self,
        origin: Point2<f64>,
        direction: Vector2<f64>,
        current: &str,
        target: &str,
        intensity: f64,
        depth: u32,
    ) -> Result<Vec<RaySegment>, TraceError> {
        let ray = Ray::new(origin, direction);
        if !ray.is_finite() || !intensity.is_finite() {
            return Err(TraceError::NonFiniteInput);
        }
        let (current, target) = (self.medium(current)?, self.medium(target)?);

        let segments = self.trace_ray(&ray, current, target, intensity, depth);
        debug!(
            "traced {} -> {} from ({:.1}, {:.1}): {} segments",
            current.name,
            target.name,
            origin.x,
            origin.y,
            segments.len()
        );

        Ok(segments)
    }

    pub fn trace_emitter(
        &self,
        emitter: &Emitter,
        medium: &str,
    ) -> Result<Vec<RaySegment>, TraceError> {
        self.trace(emitter.position, emitter.direction(), AIR, medium)
    }

    /// Traces one ray per launch angle in parallel. Results follow the order of `angles`.
    pub fn sweep(
        &self,
        origin: Point2<f64>,
        angles: &[f64],
        current: &str,
        target: &str,
        use_progress: bool,
    ) -> Result<Vec<Vec<RaySegment>>, TraceError> {
        if !vector::is_finite(&origin.coords) || angles.iter().any(|angle| !angle.is_finite()) {
            return Err(TraceError::NonFiniteInput);
        }
        let (current, target) = (self.medium(current)?, self.medium(target)?);

        let trace_angle = |&angle: &f64| {
            let ray = Ray::new(origin, utils::angle_to_direction(angle));
            self.trace_ray(&ray, current, target, 1.0, 0)
        };

        let traces: Vec<Vec<RaySegment>> = if use_progress {
            let progress = build_progress_bar(angles.len());
            let traces = angles
                .par_iter()
                .progress_with(progress.clone())
                .map(trace_angle)
                .collect();
            progress.finish();

            traces
        } else {
            angles.par_iter().map(trace_angle).collect()
        };

        Ok(traces)
    }

    fn trace_ray(
        &self,
        ray: &Ray,
        current: Medium<'_>,
        target: Medium<'_>,
        intensity: f64,
        depth: u32,
    ) -> Vec<RaySegment> {
        let options = &self.options;

        if depth >= options.max_bounces || intensity < options.min_intensity {
            trace!(
                "ray stopped at depth {} with intensity {:.4}",
                depth,
                intensity
            );
            return Vec::new();
        }

        let intersection = match self.obstacle.intersect(ray, options.probe_length) {
            Some(intersection) => intersection,
            None => {
                return vec![RaySegment {
                    start: ray.origin,
                    end: ray.at(options.miss_length),
                    kind: SegmentKind::Incident,
                    intensity,
                    incident_angle: None,
                    medium: current.name.to_string(),
                    depth,
                }];
            }
        };

        let point = intersection.point;
        let normal = intersection.normal.into_inner();
        let kind = if depth == 0 || current.is_air() {
            SegmentKind::Incident
        } else {
            SegmentKind::Refracted
        };

        let mut segments = vec![RaySegment {
            start: ray.origin,
            end: point,
            kind,
            intensity,
            incident_angle: (depth == 0).then(|| utils::incidence_angle(&ray.direction, &normal)),
            medium: current.name.to_string(),
            depth,
        }];

        let next_depth = depth + 1;

        if current.is_air() && target.is_air() {
            let continued = Ray::new(point, ray.direction);
            segments.extend(self.trace_ray(
                &continued,
                current,
                self.air(),
                intensity * options.air_decay,
                next_depth,
            ));

            return segments;
        }

        let reflected = Ray::new(point, utils::reflect(&ray.direction, &normal));

        if target.is_mirror() {
            trace!("mirror bounce at ({:.1}, {:.1})", point.x, point.y);
            let branch = self.trace_ray(
                &reflected,
                current,
                current,
                intensity * target.material.reflectance,
                next_depth,
            );
            segments.extend(relabel(branch, SegmentKind::Reflected));

            return segments;
        }

        let (n1, n2) = (
            current.material.refractive_index,
            target.material.refractive_index,
        );
        let cos_theta1 = -ray.direction.dot(&normal);
        // Light bouncing back inside the obstacle is still drawn as part of the refracted path
        let bounce_kind = if current.is_air() {
            SegmentKind::Reflected
        } else {
            SegmentKind::Refracted
        };

        if utils::is_total_internal_reflection(n1, n2, cos_theta1) {
            trace!("total internal reflection at ({:.1}, {:.1})", point.x, point.y);
            let branch = self.trace_ray(
                &reflected,
                current,
                current,
                intensity * options.tir_decay,
                next_depth,
            );
            segments.extend(relabel(branch, bounce_kind));

            return segments;
        }

        let reflectance = utils::fresnel_reflectance(n1, n2, cos_theta1.abs());

        if reflectance > options.branch_cutoff {
            let branch = self.trace_ray(
                &reflected,
                current,
                current,
                intensity * reflectance,
                next_depth,
            );
            segments.extend(relabel(branch, bounce_kind));
        }

        if 1.0 - reflectance > options.branch_cutoff {
            if let Some(direction) = utils::refract(&ray.direction, &normal, n1, n2) {
                // Assumes the ray leaves into air at the next surface it meets
                let refracted = Ray::new(point, direction);
                let branch = self.trace_ray(
                    &refracted,
                    target,
                    self.air(),
                    intensity * (1.0 - reflectance) + options.refraction_boost,
                    next_depth,
                );
                segments.extend(relabel(branch, SegmentKind::Refracted));
            }
        }

        segments
    }
}

fn build_progress_bar(len: usize) -> ProgressBar {
    let progress = ProgressBar::new(len as u64);
    progress.set_style(ProgressStyle::default_bar().template(
        "[{elapsed_precise} elapsed] [{eta_precise} left] {bar:40} {pos}/{len} angles",
    ));

    progress
}
