use super::{RaySegment, SegmentKind};
use crate::core::{Rectangle, Side};
use nalgebra::{Point2, Vector2};
use serde::Serialize;

/// Half length of the normal line drawn through the first hit.
pub const NORMAL_LINE_LENGTH: f64 = 50.0;
/// How far a hit point may sit from a face and still count as on it.
pub const FACE_TOLERANCE: f64 = 2.0;

/// Where the emitted ray first meets the obstacle, for labelling.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HitAnnotation {
    pub point: Point2<f64>,
    pub incident_angle: f64,
    pub side: Option<Side>,
    pub normal_line: [Point2<f64>; 2],
}

impl HitAnnotation {
    pub fn from_segments(segments: &[RaySegment], obstacle: &Rectangle) -> Option<Self> {
        segments.iter().find_map(|segment| match segment.incident_angle {
            Some(incident_angle)
                if segment.kind == SegmentKind::Incident && obstacle.contains(&segment.end) =>
            {
                Some(Self::new(segment.end, incident_angle, obstacle))
            }
            _ => None,
        })
    }

    fn new(point: Point2<f64>, incident_angle: f64, obstacle: &Rectangle) -> Self {
        let side = obstacle.side_at(&point, FACE_TOLERANCE);
        let axis = match side {
            Some(Side::Left | Side::Right) => Vector2::x(),
            Some(Side::Top | Side::Bottom) | None => Vector2::y(),
        };

        Self {
            point,
            incident_angle,
            side,
            normal_line: [
                point - axis * NORMAL_LINE_LENGTH,
                point + axis * NORMAL_LINE_LENGTH,
            ],
        }
    }

    pub fn label(&self) -> String {
        format!("{:.1}°", self.incident_angle)
    }
}
