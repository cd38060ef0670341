#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(
    clippy::cast_lossless,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::missing_errors_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::too_many_lines,
    clippy::wildcard_imports
)]

pub mod core;
mod error;
pub mod logger;
mod ray_intersection;
pub mod trace;
pub mod utils;

pub use crate::core::{Material, MaterialTable, Rectangle, Side, AIR, MIRROR};
pub use crate::error::TraceError;
pub use crate::ray_intersection::{Intersectable, Intersection, Ray};
pub use crate::trace::{
    Emitter, HitAnnotation, RaySegment, Scene, SegmentKind, TraceOptions, TraceSummary, Tracer,
    ANGLE_SNAP,
};
