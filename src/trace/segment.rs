use crate::core::vector;
use itertools::Itertools;
use nalgebra::{Point2, Vector2};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentKind {
    Incident,
    Reflected,
    Refracted,
}

/// One drawable piece of a traced light path.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RaySegment {
    pub start: Point2<f64>,
    pub end: Point2<f64>,
    pub kind: SegmentKind,
    pub intensity: f64,
    /// Only set on the segment that reaches the obstacle first.
    pub incident_angle: Option<f64>,
    pub medium: String,
    pub depth: u32,
}

impl RaySegment {
    pub fn length(&self) -> f64 {
        nalgebra::distance(&self.start, &self.end)
    }

    pub fn direction(&self) -> Vector2<f64> {
        vector::normalize(&(self.end - self.start))
    }

    pub fn with_kind(self, kind: SegmentKind) -> Self {
        Self { kind, ..self }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct TraceSummary {
    pub segments: usize,
    pub incident: usize,
    pub reflected: usize,
    pub refracted: usize,
    pub max_depth: Option<u32>,
    pub total_length: f64,
}

impl TraceSummary {
    pub fn from_segments(segments: &[RaySegment]) -> Self {
        let counts = segments.iter().map(|segment| segment.kind).counts();
        let count = |kind| counts.get(&kind).copied().unwrap_or(0);

        Self {
            segments: segments.len(),
            incident: count(SegmentKind::Incident),
            reflected: count(SegmentKind::Reflected),
            refracted: count(SegmentKind::Refracted),
            max_depth: segments.iter().map(|segment| segment.depth).max(),
            total_length: segments
                .iter()
                .map(RaySegment::length)
                .fold(0.0, |total, length| total + length),
        }
    }
}

impl fmt::Display for TraceSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} segments ({} incident, {} reflected, {} refracted), depth {}, length {:.1}",
            self.segments,
            self.incident,
            self.reflected,
            self.refracted,
            self.max_depth
                .map_or_else(|| "-".to_string(), |depth| depth.to_string()),
            self.total_length
        )
    }
}
