use crate::error::TraceError;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Name of the ambient medium the emitter sits in.
pub const AIR: &str = "air";
/// Name of the perfectly reflective medium; only its reflectance matters.
pub const MIRROR: &str = "mirror";

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Material {
    pub refractive_index: f64,
    pub reflectance: f64,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            refractive_index: 1.0,
            reflectance: 0.0,
        }
    }
}

impl Material {
    pub const fn new(refractive_index: f64, reflectance: f64) -> Self {
        Self {
            refractive_index,
            reflectance,
        }
    }

    fn validate(&self, name: &str) -> Result<(), TraceError> {
        let invalid = |reason| TraceError::InvalidMaterial {
            name: name.to_string(),
            reason,
        };

        if !self.refractive_index.is_finite() || self.refractive_index <= 0.0 {
            return Err(invalid("refractive index must be finite and positive"));
        }
        if !(0.0..=1.0).contains(&self.reflectance) {
            return Err(invalid("reflectance must be within [0, 1]"));
        }

        Ok(())
    }
}

static BUILTIN_MATERIALS: Lazy<MaterialTable> = Lazy::new(|| {
    [
        (AIR, Material::new(1.000_293, 0.04)),
        ("water", Material::new(1.333, 0.02)),
        ("glass", Material::new(1.52, 0.04)),
        ("flint_glass", Material::new(1.62, 0.05)),
        ("diamond", Material::new(2.42, 0.17)),
        ("oil", Material::new(1.47, 0.03)),
        (MIRROR, Material::new(1.0, 0.95)),
    ]
    .into_iter()
    .collect()
});

/// Lookup table from medium name to its optical properties.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MaterialTable(BTreeMap<String, Material>);

impl Default for MaterialTable {
    fn default() -> Self {
        BUILTIN_MATERIALS.clone()
    }
}

impl<S: Into<String>> FromIterator<(S, Material)> for MaterialTable {
    fn from_iter<I: IntoIterator<Item = (S, Material)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(name, m)| (name.into(), m)).collect())
    }
}

impl MaterialTable {
    pub fn empty() -> Self {
        Self(BTreeMap::new())
    }

    pub fn insert(&mut self, name: &str, material: Material) {
        self.0.insert(name.to_string(), material);
    }

    pub fn get(&self, name: &str) -> Result<&Material, TraceError> {
        self.0
            .get(name)
            .ok_or_else(|| TraceError::UnknownMedium(name.to_string()))
    }

    /// Looks `name` up and returns the key as stored in the table alongside it.
    pub fn get_entry(&self, name: &str) -> Result<(&str, &Material), TraceError> {
        self.0
            .get_key_value(name)
            .map(|(name, material)| (name.as_str(), material))
            .ok_or_else(|| TraceError::UnknownMedium(name.to_string()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Checks every entry and that the ambient medium is present.
    pub fn validate(&self) -> Result<(), TraceError> {
        self.get(AIR)?;
        for (name, material) in &self.0 {
            material.validate(name)?;
        }

        Ok(())
    }
}
