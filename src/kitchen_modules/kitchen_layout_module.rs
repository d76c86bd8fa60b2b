use serde::{Serialize, Deserialize};
use strum::IntoEnumIterator;
use strum_macros::EnumIter;
use crate::utils::utils_errors::KitchenGenError;

/// One of the ten predefined kitchen floor-plan variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, EnumIter)]
pub enum KitchenLayout {
    OneWall,
    OneWallWithIsland,
    LShaped,
    LShapedWithIsland,
    Galley,
    UShaped,
    UShapedWithIsland,
    GShaped,
    GShapedLarge,
    Wraparound
}
impl KitchenLayout {
    pub fn from_idx(idx: usize) -> Result<Self, KitchenGenError> {
        let all: Vec<Self> = Self::iter().collect();
        if idx >= all.len() {
            return Err(KitchenGenError::new_idx_out_of_bound_error(idx, all.len(), file!(), line!()));
        }
        return Ok(all[idx]);
    }
    pub fn to_idx(&self) -> usize {
        return match self {
            KitchenLayout::OneWall => { 0 }
            KitchenLayout::OneWallWithIsland => { 1 }
            KitchenLayout::LShaped => { 2 }
            KitchenLayout::LShapedWithIsland => { 3 }
            KitchenLayout::Galley => { 4 }
            KitchenLayout::UShaped => { 5 }
            KitchenLayout::UShapedWithIsland => { 6 }
            KitchenLayout::GShaped => { 7 }
            KitchenLayout::GShapedLarge => { 8 }
            KitchenLayout::Wraparound => { 9 }
        }
    }
    pub fn display_name(&self) -> &'static str {
        return match self {
            KitchenLayout::OneWall => { "One wall" }
            KitchenLayout::OneWallWithIsland => { "One wall w/ island" }
            KitchenLayout::LShaped => { "L-shaped" }
            KitchenLayout::LShapedWithIsland => { "L-shaped w/ island" }
            KitchenLayout::Galley => { "Galley" }
            KitchenLayout::UShaped => { "U-shaped" }
            KitchenLayout::UShapedWithIsland => { "U-shaped w/ island" }
            KitchenLayout::GShaped => { "G-shaped" }
            KitchenLayout::GShapedLarge => { "G-shaped (large)" }
            KitchenLayout::Wraparound => { "Wraparound" }
        }
    }
    pub fn all_display_names() -> Vec<String> {
        return Self::iter().map(|l| l.display_name().to_string()).collect();
    }
    pub fn num_layouts() -> usize {
        return Self::iter().count();
    }
}

/// One of the visual theme variants applied to a layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, EnumIter)]
pub enum KitchenStyle {
    Industrial,
    Scandinavian,
    Coastal,
    Modern1,
    Modern2,
    Traditional1,
    Traditional2,
    Farmhouse,
    Rustic,
    Mediterranean,
    Transitional
}
impl KitchenStyle {
    pub fn from_idx(idx: usize) -> Result<Self, KitchenGenError> {
        let all: Vec<Self> = Self::iter().collect();
        if idx >= all.len() {
            return Err(KitchenGenError::new_idx_out_of_bound_error(idx, all.len(), file!(), line!()));
        }
        return Ok(all[idx]);
    }
    pub fn to_idx(&self) -> usize {
        return match self {
            KitchenStyle::Industrial => { 0 }
            KitchenStyle::Scandinavian => { 1 }
            KitchenStyle::Coastal => { 2 }
            KitchenStyle::Modern1 => { 3 }
            KitchenStyle::Modern2 => { 4 }
            KitchenStyle::Traditional1 => { 5 }
            KitchenStyle::Traditional2 => { 6 }
            KitchenStyle::Farmhouse => { 7 }
            KitchenStyle::Rustic => { 8 }
            KitchenStyle::Mediterranean => { 9 }
            KitchenStyle::Transitional => { 10 }
        }
    }
    pub fn display_name(&self) -> &'static str {
        return match self {
            KitchenStyle::Industrial => { "Industrial" }
            KitchenStyle::Scandinavian => { "Scandinavian" }
            KitchenStyle::Coastal => { "Coastal" }
            KitchenStyle::Modern1 => { "Modern 1" }
            KitchenStyle::Modern2 => { "Modern 2" }
            KitchenStyle::Traditional1 => { "Traditional 1" }
            KitchenStyle::Traditional2 => { "Traditional 2" }
            KitchenStyle::Farmhouse => { "Farmhouse" }
            KitchenStyle::Rustic => { "Rustic" }
            KitchenStyle::Mediterranean => { "Mediterranean" }
            KitchenStyle::Transitional => { "Transitional" }
        }
    }
    pub fn all_display_names() -> Vec<String> {
        return Self::iter().map(|s| s.display_name().to_string()).collect();
    }
    pub fn num_styles() -> usize {
        return Self::iter().count();
    }
}

/// How a layout or style index is resolved at generation time.  `Fixed` passes the
/// given index through, `Random` samples uniformly over the valid range, and
/// `Interactive` runs the console wizard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SceneSelection {
    Fixed(usize),
    Random,
    Interactive
}

/// The position and orientation at which the substituted robot's base body is placed.
/// Both fields are whitespace-separated numeric strings (3 floats / 4 floats in
/// w x y z order); neither is validated for normalization.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RobotSpawnPose {
    pub pos: String,
    pub quat: String
}
impl RobotSpawnPose {
    pub fn new(pos: &str, quat: &str) -> Self {
        Self {
            pos: pos.to_string(),
            quat: quat.to_string()
        }
    }
}

/// Immutable mapping from kitchen layout to the default robot spawn pose.  Constructed
/// once and passed by reference into the scene composer; callers may build their own
/// table to override the defaults.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LayoutSpawnPoseTable {
    poses: Vec<RobotSpawnPose>
}
impl LayoutSpawnPoseTable {
    pub fn new(poses: Vec<RobotSpawnPose>) -> Result<Self, KitchenGenError> {
        if poses.len() != KitchenLayout::num_layouts() {
            return Err(KitchenGenError::new_generic_error_string(format!("LayoutSpawnPoseTable needs {} poses, was given {}.", KitchenLayout::num_layouts(), poses.len()), file!(), line!()));
        }
        return Ok(Self { poses });
    }
    pub fn get(&self, layout: KitchenLayout) -> &RobotSpawnPose {
        return &self.poses[layout.to_idx()];
    }
}
impl Default for LayoutSpawnPoseTable {
    fn default() -> Self {
        Self {
            poses: vec![
                RobotSpawnPose::new("2.25 -0.8 0", "1 0 0 0"),
                RobotSpawnPose::new("4.55 -0.8 0", "1 0 0 0"),
                RobotSpawnPose::new("3.05 -0.8 0", "1 0 0 0"),
                RobotSpawnPose::new("1.5 -3 0", "0.7071068 0 0 0.7071068"),
                RobotSpawnPose::new("2 -4.24761 0", "0.7071068 0 0 0.7071068"),
                RobotSpawnPose::new("3 -1 0", "1 0 0 0"),
                RobotSpawnPose::new("3.2 -3.1 0.92", "1 0 0 0"),
                RobotSpawnPose::new("3.2 -3.1 0.93", "1 0 0 0"),
                RobotSpawnPose::new("2.2 -4 0.92", "1 0 0 0"),
                RobotSpawnPose::new("4 -1.7 0", "1 0 0 0")
            ]
        }
    }
}

/// Home configuration of the substituted robot, usable as a `<keyframe>` entry.
pub const HOME_KEYFRAME_QPOS: &str = "0 0 0 -2.3561945 0 1.57079 -0.7853 0.04 0.04 0 0 0 -2.3561945 0 1.57079 -0.7853 0.04 0.04";
pub const HOME_KEYFRAME_CTRL: &str = "0 0 0 -2.3561945 0 1.57079 -0.7853 255 0 0 0 -2.3561945 0 1.57079 -0.7853 255";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_idx_round_trip() {
        for idx in 0..KitchenLayout::num_layouts() {
            let layout = KitchenLayout::from_idx(idx).expect("error");
            assert_eq!(layout.to_idx(), idx);
        }
        assert!(KitchenLayout::from_idx(10).is_err());
    }

    #[test]
    fn test_style_idx_round_trip() {
        for idx in 0..KitchenStyle::num_styles() {
            let style = KitchenStyle::from_idx(idx).expect("error");
            assert_eq!(style.to_idx(), idx);
        }
        assert!(KitchenStyle::from_idx(11).is_err());
    }

    #[test]
    fn test_default_pose_table() {
        let table = LayoutSpawnPoseTable::default();
        assert_eq!(table.get(KitchenLayout::OneWall), &RobotSpawnPose::new("2.25 -0.8 0", "1 0 0 0"));
        assert_eq!(table.get(KitchenLayout::Wraparound), &RobotSpawnPose::new("4 -1.7 0", "1 0 0 0"));
    }

    #[test]
    fn test_pose_table_wrong_length_is_an_error() {
        assert!(LayoutSpawnPoseTable::new(vec![RobotSpawnPose::new("0 0 0", "1 0 0 0")]).is_err());
    }
}
