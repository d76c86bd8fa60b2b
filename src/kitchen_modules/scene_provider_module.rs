use std::path::{Path, PathBuf};
use nalgebra::{Vector3, Vector4};
use serde::{Serialize, Deserialize};
use walkdir::WalkDir;
use crate::kitchen_modules::kitchen_layout_module::{KitchenLayout, KitchenStyle};
use crate::utils::utils_errors::KitchenGenError;
use crate::utils::utils_files::FileUtils;

/// A task-specific pose assignment for one named object, as produced by the benchmark
/// suite.  Orientation is a quaternion in w x y z order.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ObjectPlacement {
    pub name: String,
    pub cat: String,
    pub pos: Vector3<f64>,
    pub quat: Vector4<f64>
}

/// A base scene document plus the ordered object placements that go with it.
#[derive(Clone, Debug)]
pub struct GeneratedKitchenScene {
    pub xml: String,
    pub object_placements: Vec<ObjectPlacement>
}

/// Seam to the external benchmark suite: given a task, layout, and style, hand back the
/// base kitchen scene and the placements the suite chose for the task's objects.
pub trait KitchenSceneProvider {
    fn generate_scene(&self, task: &str, layout: KitchenLayout, style: KitchenStyle) -> Result<GeneratedKitchenScene, KitchenGenError>;
}

/// Provider backed by scene snapshots exported from the benchmark suite ahead of time.
/// The snapshot directory holds one subdirectory per task, with one
/// `layout<L>_style<S>` directory per generated combination containing `scene.xml`
/// and `placements.json`.
#[derive(Clone, Debug)]
pub struct SceneSnapshotProvider {
    snapshots_dir: PathBuf
}
impl SceneSnapshotProvider {
    pub fn new(snapshots_dir: &Path) -> Self {
        Self {
            snapshots_dir: snapshots_dir.to_path_buf()
        }
    }
    /// Lists the task names that have at least one exported snapshot.
    pub fn available_tasks(&self) -> Vec<String> {
        let mut out_vec = vec![];
        for entry_res in WalkDir::new(&self.snapshots_dir).min_depth(1).max_depth(1) {
            if let Ok(entry) = entry_res {
                if entry.file_type().is_dir() {
                    if let Some(name) = entry.file_name().to_str() {
                        out_vec.push(name.to_string());
                    }
                }
            }
        }
        out_vec.sort();
        return out_vec;
    }
    fn snapshot_dir(&self, task: &str, layout: KitchenLayout, style: KitchenStyle) -> PathBuf {
        let mut p = self.snapshots_dir.clone();
        p.push(task);
        p.push(format!("layout{}_style{}", layout.to_idx(), style.to_idx()));
        return p;
    }
}
impl KitchenSceneProvider for SceneSnapshotProvider {
    fn generate_scene(&self, task: &str, layout: KitchenLayout, style: KitchenStyle) -> Result<GeneratedKitchenScene, KitchenGenError> {
        let dir = self.snapshot_dir(task, layout, style);
        if !dir.exists() {
            return Err(KitchenGenError::new_generic_error_string(format!("no scene snapshot for task {:?} at {:?}.", task, dir), file!(), line!()));
        }
        let xml = FileUtils::read_file_contents_to_string(&dir.join("scene.xml"))?;
        let object_placements: Vec<ObjectPlacement> = FileUtils::load_object_from_json_file(&dir.join("placements.json"))?;
        return Ok(GeneratedKitchenScene { xml, object_placements });
    }
}
