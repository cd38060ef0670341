use crate::core::{vector, Side};
use nalgebra::{Point2, Unit, Vector2};

pub trait Intersectable {
    /// Closest hit of `ray` against this object. The ray is probed as a segment
    /// `reach` units long before the parametric test.
    fn intersect(&self, ray: &Ray, reach: f64) -> Option<Intersection>;
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray {
    pub origin: Point2<f64>,
    pub direction: Vector2<f64>,
}

impl Ray {
    pub fn new(origin: Point2<f64>, direction: Vector2<f64>) -> Self {
        Self { origin, direction }
    }

    pub fn at(&self, distance: f64) -> Point2<f64> {
        vector::advance(&self.origin, &self.direction, distance)
    }

    pub fn is_finite(&self) -> bool {
        vector::is_finite(&self.origin.coords) && vector::is_finite(&self.direction)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Intersection {
    pub point: Point2<f64>,
    pub normal: Unit<Vector2<f64>>,
    pub side: Side,
    pub distance: f64,
}

impl Intersection {
    pub fn new(point: Point2<f64>, side: Side, distance: f64) -> Self {
        Self {
            point,
            normal: side.normal(),
            side,
            distance,
        }
    }
}
