use crate::core::vector;
use nalgebra::Vector2;

/// Angle in degrees between the reversed ray direction and the surface normal.
pub fn incidence_angle(direction: &Vector2<f64>, normal: &Vector2<f64>) -> f64 {
    let cos_theta = vector::normalize(&-direction).dot(normal);
    cos_theta.clamp(-1.0, 1.0).acos().to_degrees()
}

/// Squared sine of the transmitted angle given by Snell's law.
pub fn transmitted_sin2(n1: f64, n2: f64, cos_theta1: f64) -> f64 {
    n1 * n1 * (1.0 - cos_theta1 * cos_theta1) / (n2 * n2)
}

pub fn is_total_internal_reflection(n1: f64, n2: f64, cos_theta1: f64) -> bool {
    transmitted_sin2(n1, n2, cos_theta1) > 1.0
}

// Unpolarized Fresnel reflectance, the mean of the s and p terms
pub fn fresnel_reflectance(n1: f64, n2: f64, cos_theta1: f64) -> f64 {
    let sin_theta1 = (1.0 - cos_theta1 * cos_theta1).max(0.0).sqrt();
    let sin_theta2 = n1 / n2 * sin_theta1;

    if sin_theta2 > 1.0 {
        return 1.0;
    }

    let cos_theta2 = (1.0 - sin_theta2 * sin_theta2).sqrt();

    let rs = ((n1 * cos_theta1 - n2 * cos_theta2) / (n1 * cos_theta1 + n2 * cos_theta2)).powi(2);
    let rp = ((n1 * cos_theta2 - n2 * cos_theta1) / (n1 * cos_theta2 + n2 * cos_theta1)).powi(2);

    (rs + rp) / 2.0
}

/// Critical angle in degrees going from `n1` into `n2`, if one exists.
pub fn critical_angle(n1: f64, n2: f64) -> Option<f64> {
    if n1 > n2 {
        Some((n2 / n1).asin().to_degrees())
    } else {
        None
    }
}
