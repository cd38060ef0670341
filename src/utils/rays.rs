use crate::core::vector;
use nalgebra::Vector2;

pub fn reflect(incident: &Vector2<f64>, normal: &Vector2<f64>) -> Vector2<f64> {
    incident - 2.0 * incident.dot(normal) * normal
}

/// Refracted direction across an interface from index `n1` into `n2`, with
/// `normal` facing against `incident`. `None` means total internal reflection.
pub fn refract(
    incident: &Vector2<f64>,
    normal: &Vector2<f64>,
    n1: f64,
    n2: f64,
) -> Option<Vector2<f64>> {
    let cos_theta1 = -incident.dot(normal);
    let sin2_theta2 = n1 * n1 * (1.0 - cos_theta1 * cos_theta1) / (n2 * n2);

    if sin2_theta2 > 1.0 {
        return None;
    }

    let cos_theta2 = (1.0 - sin2_theta2).sqrt();
    let eta = n1 / n2;

    Some(incident * eta + normal * (eta * cos_theta1 - cos_theta2))
}

/// Unit direction for an angle in degrees, measured from +x towards +y.
pub fn angle_to_direction(degrees: f64) -> Vector2<f64> {
    let radians = degrees.to_radians();
    vector::normalize(&Vector2::new(radians.cos(), radians.sin()))
}

pub fn direction_to_angle(direction: &Vector2<f64>) -> f64 {
    direction.y.atan2(direction.x).to_degrees()
}

pub fn snap_angle(degrees: f64, step: f64) -> f64 {
    if step <= 0.0 {
        return degrees;
    }

    (degrees / step).round() * step
}

/// Angles from `start` up to and including `end` in increments of `step`.
pub fn angle_range(start: f64, end: f64, step: f64) -> Vec<f64> {
    if step <= 0.0 || end < start {
        return vec![start];
    }

    let count = ((end - start) / step + 1e-9).floor() as usize + 1;
    (0..count).map(|i| start + step * i as f64).collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_relative_eq;
    use rand::Rng;

    fn angle_between(a: &Vector2<f64>, b: &Vector2<f64>) -> f64 {
        vector::normalize(a)
            .dot(&vector::normalize(b))
            .clamp(-1.0, 1.0)
            .acos()
    }

    #[test]
    fn it_reflects_vectors() {
        let reflected = reflect(&Vector2::new(1.0, 0.0), &Vector2::new(-1.0, 0.0));
        assert_relative_eq!(reflected, Vector2::new(-1.0, 0.0));

        let incident = Vector2::new(1.0, 1.0).normalize();
        let reflected = reflect(&incident, &Vector2::new(0.0, -1.0));
        assert_relative_eq!(reflected, Vector2::new(1.0, -1.0).normalize());
    }

    #[test]
    fn it_obeys_the_law_of_reflection() {
        let mut rng = rand::thread_rng();

        for _ in 0..10_000 {
            let incident = angle_to_direction(rng.gen::<f64>() * 360.0);
            let normal = angle_to_direction(rng.gen::<f64>() * 360.0);
            let reflected = reflect(&incident, &normal);

            assert_relative_eq!(reflected.norm(), 1.0, epsilon = 1e-9);
            assert_relative_eq!(
                angle_between(&-incident, &normal),
                angle_between(&reflected, &normal),
                epsilon = 1e-6
            );
        }
    }

    #[test]
    fn it_does_not_bend_at_normal_incidence() {
        let refracted =
            refract(&Vector2::new(1.0, 0.0), &Vector2::new(-1.0, 0.0), 1.000_293, 1.52).unwrap();
        assert_relative_eq!(refracted, Vector2::new(1.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn it_obeys_snells_law() {
        let normal = Vector2::new(0.0, -1.0);
        let (n1, n2) = (1.0, 1.33);

        for degrees in [5.0, 20.0, 45.0, 60.0, 85.0] {
            let incident = angle_to_direction(90.0 - degrees);
            let refracted = refract(&incident, &normal, n1, n2).unwrap();

            assert_relative_eq!(refracted.norm(), 1.0, epsilon = 1e-9);
            let theta2 = angle_between(&refracted, &-normal);
            assert_relative_eq!(
                n1 * degrees.to_radians().sin(),
                n2 * theta2.sin(),
                epsilon = 1e-9
            );
        }
    }

    #[test]
    fn it_detects_total_internal_reflection() {
        let normal = Vector2::new(1.0, 0.0);
        let (n1, n2) = (1.52, 1.0);

        for degrees in [0.0, 10.0, 30.0, 41.0, 41.1] {
            let incident = angle_to_direction(degrees);
            assert!(refract(&incident, &normal, n1, n2).is_some(), "{}", degrees);
        }
        for degrees in [41.2, 45.0, 60.0, 89.0] {
            let incident = angle_to_direction(degrees);
            assert!(refract(&incident, &normal, n1, n2).is_none(), "{}", degrees);
        }
    }

    #[test]
    fn it_converts_between_angles_and_directions() {
        assert_relative_eq!(angle_to_direction(0.0), Vector2::new(1.0, 0.0));
        assert_relative_eq!(angle_to_direction(90.0), Vector2::new(0.0, 1.0), epsilon = 1e-12);
        assert_relative_eq!(angle_to_direction(180.0), Vector2::new(-1.0, 0.0), epsilon = 1e-12);

        for degrees in [-170.0, -45.0, 0.0, 30.0, 135.0] {
            assert_relative_eq!(
                direction_to_angle(&angle_to_direction(degrees)),
                degrees,
                epsilon = 1e-9
            );
        }
    }

    #[test]
    fn it_snaps_angles() {
        assert_eq!(snap_angle(43.0, 5.0), 45.0);
        assert_eq!(snap_angle(42.0, 5.0), 40.0);
        assert_eq!(snap_angle(-12.6, 5.0), -15.0);
        assert_eq!(snap_angle(12.34, 0.0), 12.34);
    }

    #[test]
    fn it_builds_angle_ranges() {
        assert_eq!(angle_range(0.0, 10.0, 5.0), vec![0.0, 5.0, 10.0]);
        assert_eq!(angle_range(-1.0, 0.0, 0.5), vec![-1.0, -0.5, 0.0]);
        assert_eq!(angle_range(0.0, 1.0, 0.3).len(), 4);
        assert_eq!(angle_range(3.0, 1.0, 1.0), vec![3.0]);
    }
}
