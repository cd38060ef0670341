mod physical_material_equations;
mod rays;

pub use physical_material_equations::{
    critical_angle, fresnel_reflectance, incidence_angle, is_total_internal_reflection,
    transmitted_sin2,
};
pub use rays::{angle_range, angle_to_direction, direction_to_angle, reflect, refract, snap_angle};
