use crate::ray_intersection::{Intersectable, Intersection, Ray};
use nalgebra::{Point2, Unit, Vector2};
use serde::{Deserialize, Serialize};

/// Determinants below this are treated as parallel lines.
const PARALLEL_EPSILON: f64 = 1e-10;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::Top, Side::Right, Side::Bottom, Side::Left];

    pub fn normal(self) -> Unit<Vector2<f64>> {
        match self {
            Side::Top => -Vector2::y_axis(),
            Side::Right => Vector2::x_axis(),
            Side::Bottom => Vector2::y_axis(),
            Side::Left => -Vector2::x_axis(),
        }
    }
}

#[derive(Copy, Clone, Debug)]
pub struct Edge {
    pub side: Side,
    pub start: Point2<f64>,
    pub end: Point2<f64>,
}

impl Edge {
    pub fn normal(&self) -> Unit<Vector2<f64>> {
        self.side.normal()
    }

    // Parametric intersection of the segment `from`..`to` with this edge.
    fn intersect_segment(&self, from: &Point2<f64>, to: &Point2<f64>) -> Option<Point2<f64>> {
        let (x1, y1) = (from.x, from.y);
        let (x2, y2) = (to.x, to.y);
        let (x3, y3) = (self.start.x, self.start.y);
        let (x4, y4) = (self.end.x, self.end.y);

        let denom = (x1 - x2) * (y3 - y4) - (y1 - y2) * (x3 - x4);
        if denom.abs() < PARALLEL_EPSILON {
            return None;
        }

        let t = ((x1 - x3) * (y3 - y4) - (y1 - y3) * (x3 - x4)) / denom;
        let u = -((x1 - x2) * (y1 - y3) - (y1 - y2) * (x1 - x3)) / denom;

        if t > 0.0 && (0.0..=1.0).contains(&u) {
            Some(Point2::new(x1 + t * (x2 - x1), y1 + t * (y2 - y1)))
        } else {
            None
        }
    }
}

/// Axis-aligned rectangle in screen coordinates (y grows downwards).
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Rectangle {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Default for Rectangle {
    fn default() -> Self {
        Self {
            x: 400.0,
            y: 275.0,
            width: 200.0,
            height: 150.0,
        }
    }
}

impl Rectangle {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn min(&self) -> Point2<f64> {
        Point2::new(self.x, self.y)
    }

    pub fn max(&self) -> Point2<f64> {
        Point2::new(self.x + self.width, self.y + self.height)
    }

    pub fn center(&self) -> Point2<f64> {
        nalgebra::center(&self.min(), &self.max())
    }

    /// Edges in top, right, bottom, left order, wound clockwise on screen.
    pub fn edges(&self) -> [Edge; 4] {
        let (min, max) = (self.min(), self.max());
        let top_right = Point2::new(max.x, min.y);
        let bottom_left = Point2::new(min.x, max.y);

        [
            Edge {
                side: Side::Top,
                start: min,
                end: top_right,
            },
            Edge {
                side: Side::Right,
                start: top_right,
                end: max,
            },
            Edge {
                side: Side::Bottom,
                start: max,
                end: bottom_left,
            },
            Edge {
                side: Side::Left,
                start: bottom_left,
                end: min,
            },
        ]
    }

    /// Inclusive containment test.
    pub fn contains(&self, point: &Point2<f64>) -> bool {
        let (min, max) = (self.min(), self.max());
        (min.x..=max.x).contains(&point.x) && (min.y..=max.y).contains(&point.y)
    }

    /// The face `point` lies on, within `tolerance`, checked top, bottom, left, right.
    pub fn side_at(&self, point: &Point2<f64>, tolerance: f64) -> Option<Side> {
        let (min, max) = (self.min(), self.max());

        if (point.y - min.y).abs() < tolerance {
            Some(Side::Top)
        } else if (point.y - max.y).abs() < tolerance {
            Some(Side::Bottom)
        } else if (point.x - min.x).abs() < tolerance {
            Some(Side::Left)
        } else if (point.x - max.x).abs() < tolerance {
            Some(Side::Right)
        } else {
            None
        }
    }

    pub fn is_valid(&self) -> bool {
        [self.x, self.y, self.width, self.height]
            .iter()
            .all(|c| c.is_finite())
            && self.width >= 0.0
            && self.height >= 0.0
    }
}

impl Intersectable for Rectangle {
    fn intersect(&self, ray: &Ray, reach: f64) -> Option<Intersection> {
        let far = ray.at(reach);

        self.edges()
            .iter()
            .filter_map(|edge| {
                edge.intersect_segment(&ray.origin, &far).map(|point| {
                    Intersection::new(point, edge.side, nalgebra::distance(&ray.origin, &point))
                })
            })
            // `min_by` keeps the first of equal elements, so corner ties go to the lower edge index
            .min_by(|a, b| a.distance.total_cmp(&b.distance))
    }
}
