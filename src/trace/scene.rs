use super::{Emitter, RaySegment, TraceOptions, Tracer, ANGLE_SNAP};
use crate::core::{MaterialTable, Rectangle};
use crate::error::TraceError;
use serde::{Deserialize, Serialize};

/// Everything needed to trace one emitter against one obstacle.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Scene {
    pub options: TraceOptions,
    pub emitter: Emitter,
    pub obstacle: Rectangle,
    /// Medium the obstacle is made of.
    pub medium: String,
    pub materials: MaterialTable,
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            options: TraceOptions::default(),
            emitter: Emitter::default(),
            obstacle: Rectangle::default(),
            medium: "glass".to_string(),
            materials: MaterialTable::default(),
        }
    }
}

impl Scene {
    pub fn new(options: TraceOptions, emitter: Emitter, obstacle: Rectangle, medium: &str) -> Self {
        Self {
            options,
            emitter,
            obstacle,
            medium: medium.to_string(),
            ..Scene::default()
        }
    }

    /// Re-aims the emitter at the center of the obstacle.
    pub fn aim_at_obstacle(&mut self) {
        self.emitter.aim_at(&self.obstacle.center(), ANGLE_SNAP);
    }

    pub fn build_tracer(&self) -> Result<Tracer, TraceError> {
        let tracer = Tracer::new(self.options, self.materials.clone(), self.obstacle)?;
        self.materials.get(&self.medium)?;

        Ok(tracer)
    }

    pub fn trace(&self) -> Result<Vec<RaySegment>, TraceError> {
        self.build_tracer()?.trace_emitter(&self.emitter, &self.medium)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::Material;
    use crate::trace::SegmentKind;
    use approx::assert_relative_eq;
    use nalgebra::Point2;
    use serde_json::json;
    use std::fs::{self, File};
    use std::path::Path;

    #[test]
    fn it_traces_a_default_scene() {
        let segments = Scene::default().trace().unwrap();

        assert_eq!(segments[0].kind, SegmentKind::Incident);
        assert_relative_eq!(segments[0].start, Point2::new(100.0, 350.0));
    }

    #[test]
    fn it_traces_a_scene_from_json() {
        let scene_json = json!({
            "options": { "max_bounces": 4 },
            "emitter": { "position": [100, 350], "angle": 0 },
            "obstacle": { "x": 400, "y": 275, "width": 200, "height": 150 },
            "medium": "diamond"
        });

        let scene: Result<Scene, serde_json::error::Error> = serde_json::from_value(scene_json);
        assert!(scene.is_ok(), "failed to deserialize scene");

        let segments = scene.unwrap().trace().unwrap();
        assert_relative_eq!(segments[0].end, Point2::new(400.0, 350.0), epsilon = 1e-9);
        assert!(segments.iter().all(|segment| segment.depth < 4));
    }

    #[test]
    fn it_accepts_custom_materials() {
        let scene_json = json!({
            "medium": "ice",
            "materials": {
                "air": { "refractive_index": 1.0 },
                "ice": { "refractive_index": 1.31, "reflectance": 0.02 }
            }
        });

        let scene: Scene = serde_json::from_value(scene_json).unwrap();
        assert_eq!(scene.materials.get("ice").unwrap(), &Material::new(1.31, 0.02));
        assert!(scene.trace().is_ok());
    }

    #[test]
    fn it_rejects_unknown_fields() {
        assert!(serde_json::from_value::<Scene>(json!({ "camera": {} })).is_err());
    }

    #[test]
    fn it_rejects_unknown_media() {
        let scene = Scene {
            medium: "unobtainium".to_string(),
            ..Scene::default()
        };

        assert_eq!(
            scene.build_tracer().unwrap_err(),
            TraceError::UnknownMedium("unobtainium".to_string())
        );
    }

    #[test]
    fn it_aims_at_the_obstacle() {
        let mut scene = Scene::new(
            TraceOptions::default(),
            Emitter::new(Point2::new(500.0, 50.0), 0.0),
            Rectangle::default(),
            "water",
        );
        scene.aim_at_obstacle();

        assert_relative_eq!(scene.emitter.angle, 90.0);
        let segments = scene.trace().unwrap();
        assert_relative_eq!(segments[0].end, Point2::new(500.0, 275.0), epsilon = 1e-9);
    }

    #[test]
    fn it_loads_the_bundled_scenes() {
        let scene_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("scenes");
        let mut scene_count = 0;

        for entry in fs::read_dir(&scene_dir).unwrap() {
            let scene_path = entry.unwrap().path();
            if scene_path.extension().map_or(true, |ext| ext != "json") {
                continue;
            }

            let scene_file = File::open(&scene_path).unwrap();
            let scene: Scene = serde_json::from_reader(scene_file)
                .unwrap_or_else(|e| panic!("failed to parse {}: {}", scene_path.display(), e));
            let segments = scene
                .trace()
                .unwrap_or_else(|e| panic!("failed to trace {}: {}", scene_path.display(), e));

            assert!(!segments.is_empty(), "{}", scene_path.display());
            assert_relative_eq!(segments[0].start, scene.emitter.position);
            scene_count += 1;
        }

        assert_eq!(scene_count, 5);
    }
}
