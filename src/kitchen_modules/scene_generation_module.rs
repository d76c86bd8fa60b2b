use std::collections::HashMap;
use std::path::PathBuf;
use nalgebra::{Vector3, Vector4};
use serde::{Serialize, Deserialize};
use crate::kitchen_modules::kitchen_layout_module::{KitchenLayout, KitchenStyle, LayoutSpawnPoseTable, RobotSpawnPose, SceneSelection};
use crate::kitchen_modules::robot_description_module::RobotDescriptionModule;
use crate::kitchen_modules::scene_provider_module::KitchenSceneProvider;
use crate::utils::utils_console::{kitchengen_print, ConsoleInputUtils, PrintColor, PrintMode};
use crate::utils::utils_errors::KitchenGenError;
use crate::utils::utils_files::FileUtils;
use crate::utils::utils_sampling::SimpleSamplers;
use crate::utils::utils_xml::SceneXmlUtils;

/// Task used when the caller does not name one.
pub const DEFAULT_TASK: &str = "PnPCounterToCab";
/// Name of the base body of the suite's own robot, removed during composition.
pub const SUITE_ROBOT_BASE_BODY_NAME: &str = "robot0_base";

/// Placement record returned per patched object body.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlacementInfo {
    pub cat: String,
    pub pos: Vector3<f64>,
    pub quat: Vector4<f64>
}

/// Inputs to a single scene composition.
#[derive(Clone, Debug)]
pub struct KitchenModelRequest {
    pub task: String,
    pub layout: SceneSelection,
    pub style: SceneSelection,
    pub robot_spawn_pose: Option<RobotSpawnPose>,
    pub write_to_file: Option<PathBuf>
}
impl Default for KitchenModelRequest {
    fn default() -> Self {
        Self {
            task: DEFAULT_TASK.to_string(),
            layout: SceneSelection::Interactive,
            style: SceneSelection::Interactive,
            robot_spawn_pose: None,
            write_to_file: None
        }
    }
}

/// The composed scene: final document string, per-body placement info, and the
/// configuration the composition resolved to.
#[derive(Clone, Debug)]
pub struct KitchenModelOutput {
    pub xml: String,
    pub object_placements_info: HashMap<String, PlacementInfo>,
    pub layout: KitchenLayout,
    pub style: KitchenStyle,
    pub robot_spawn_pose: RobotSpawnPose,
    pub robot_xml_path: PathBuf
}

/// Composes a simulation-ready kitchen scene for a task: asks the scene provider for
/// the base scene and object placements, applies the placement and cleanup edits,
/// swaps the suite's robot for the substitute robot description, and optionally
/// persists the final document.
pub struct KitchenModelGeneratorModule {
    scene_provider: Box<dyn KitchenSceneProvider>,
    robot_description: RobotDescriptionModule,
    spawn_pose_table: LayoutSpawnPoseTable
}
impl KitchenModelGeneratorModule {
    pub fn new(scene_provider: Box<dyn KitchenSceneProvider>, robot_description: RobotDescriptionModule) -> Self {
        return Self::new_with_spawn_pose_table(scene_provider, robot_description, LayoutSpawnPoseTable::default());
    }
    pub fn new_with_spawn_pose_table(scene_provider: Box<dyn KitchenSceneProvider>, robot_description: RobotDescriptionModule, spawn_pose_table: LayoutSpawnPoseTable) -> Self {
        Self {
            scene_provider,
            robot_description,
            spawn_pose_table
        }
    }
    pub fn generate(&self, request: &KitchenModelRequest) -> Result<KitchenModelOutput, KitchenGenError> {
        let layout = Self::resolve_layout(&request.layout)?;
        let style = Self::resolve_style(&request.style)?;

        kitchengen_print("Initializing environment...", PrintMode::Println, PrintColor::Yellow, false);
        let scene = self.scene_provider.generate_scene(request.task.as_str(), layout, style)?;
        kitchengen_print(format!("Showing configuration:\n    Layout: {} {}\n    Style: {} {}", layout.to_idx(), layout.display_name(), style.to_idx(), style.display_name()).as_str(), PrintMode::Println, PrintColor::Green, false);

        kitchengen_print(format!("\nMaking Object Placements for task [{}]...\n", request.task).as_str(), PrintMode::Println, PrintColor::Yellow, false);
        let mut xml = scene.xml;
        let mut object_placements_info = HashMap::new();
        for (i, placement) in scene.object_placements.iter().enumerate() {
            let body_name = format!("{}_main", placement.name);
            kitchengen_print(format!("Placing [Object {}] (category: {}, body_name: {}) at pos: {} quat: {}", i, placement.cat, body_name, Self::rounded_vec_string(placement.pos.as_slice()), Self::rounded_vec_string(placement.quat.as_slice())).as_str(), PrintMode::Println, PrintColor::None, false);
            xml = SceneXmlUtils::set_body_pose(xml.as_str(), "body", body_name.as_str(), placement.pos.as_slice(), placement.quat.as_slice())?;
            object_placements_info.insert(body_name, PlacementInfo {
                cat: placement.cat.clone(),
                pos: placement.pos,
                quat: placement.quat
            });
        }

        let (cleaned_xml, original_robot_attributes) = Self::custom_cleanups(xml.as_str())?;
        xml = cleaned_xml;
        if let Some(attributes) = &original_robot_attributes {
            kitchengen_print(format!("original pos: {:?}", attributes.get("pos")).as_str(), PrintMode::Println, PrintColor::None, false);
            kitchengen_print(format!("original quat: {:?}", attributes.get("quat")).as_str(), PrintMode::Println, PrintColor::None, false);
        }

        let robot_spawn_pose = match &request.robot_spawn_pose {
            Some(pose) => { pose.clone() }
            None => { self.spawn_pose_table.get(layout).clone() }
        };

        kitchengen_print("\nMaking Robot Placement...\n", PrintMode::Println, PrintColor::Yellow, false);
        kitchengen_print(format!("Adding robot to kitchen at pos: {} quat: {}", robot_spawn_pose.pos, robot_spawn_pose.quat).as_str(), PrintMode::Println, PrintColor::None, false);
        let robot_xml_path = self.robot_description.write_patched(Some(&robot_spawn_pose))?;
        xml = SceneXmlUtils::insert_after_root_open_tag(xml.as_str(), format!("<include file=\"{}\"/>", robot_xml_path.display()).as_str())?;

        if let Some(write_to_file) = &request.write_to_file {
            FileUtils::write_string_to_file(xml.as_str(), write_to_file)?;
            kitchengen_print(format!("Model saved to {:?}", write_to_file).as_str(), PrintMode::Println, PrintColor::Green, false);
        }

        return Ok(KitchenModelOutput {
            xml,
            object_placements_info,
            layout,
            style,
            robot_spawn_pose,
            robot_xml_path
        });
    }
    fn resolve_layout(selection: &SceneSelection) -> Result<KitchenLayout, KitchenGenError> {
        return match selection {
            SceneSelection::Fixed(idx) => { KitchenLayout::from_idx(*idx) }
            SceneSelection::Random => {
                let idx = SimpleSamplers::uniform_idx_sample(KitchenLayout::num_layouts(), None);
                kitchengen_print(format!("Randomly choosing layout... id: {}", idx).as_str(), PrintMode::Println, PrintColor::Yellow, false);
                KitchenLayout::from_idx(idx)
            }
            SceneSelection::Interactive => {
                let mut options = KitchenLayout::all_display_names();
                options.push("Random".to_string());
                let random_row = options.len() - 1;
                let chosen = ConsoleInputUtils::choose_option(&options, "kitchen layout", Some(random_row));
                if chosen == random_row {
                    Self::resolve_layout(&SceneSelection::Random)
                } else {
                    KitchenLayout::from_idx(chosen)
                }
            }
        }
    }
    fn resolve_style(selection: &SceneSelection) -> Result<KitchenStyle, KitchenGenError> {
        return match selection {
            SceneSelection::Fixed(idx) => { KitchenStyle::from_idx(*idx) }
            SceneSelection::Random => {
                let idx = SimpleSamplers::uniform_idx_sample(KitchenStyle::num_styles(), None);
                kitchengen_print(format!("Randomly choosing style... id: {}", idx).as_str(), PrintMode::Println, PrintColor::Yellow, false);
                KitchenStyle::from_idx(idx)
            }
            SceneSelection::Interactive => {
                let mut options = KitchenStyle::all_display_names();
                options.push("Random".to_string());
                let random_row = options.len() - 1;
                let chosen = ConsoleInputUtils::choose_option(&options, "kitchen style", Some(random_row));
                if chosen == random_row {
                    Self::resolve_style(&SceneSelection::Random)
                } else {
                    KitchenStyle::from_idx(chosen)
                }
            }
        }
    }
    /// Strips the suite's control surface from the base scene: the highlight boxes
    /// around geoms/sites of interest become fully transparent, `actuator`/`sensor`/
    /// `option` subtrees are dropped, and the suite's robot base body is removed.
    /// Returns the removed robot body's original attributes when it was present.
    fn custom_cleanups(xml_str: &str) -> Result<(String, Option<HashMap<String, String>>), KitchenGenError> {
        let xml = SceneXmlUtils::replace_attribute_value(xml_str, "geom", "rgba", "0.5 0 0 0.5", "0.5 0 0 0")?;
        let xml = SceneXmlUtils::replace_attribute_value(xml.as_str(), "geom", "rgba", "0.5 0 0 1", "0.5 0 0 0")?;
        let xml = SceneXmlUtils::replace_attribute_value(xml.as_str(), "site", "rgba", "0.5 0 0 1", "0.5 0 0 0")?;
        let xml = SceneXmlUtils::replace_attribute_value(xml.as_str(), "site", "rgba", "0.3 0.4 1 0.5", "0.3 0.4 1 0")?;

        let xml = SceneXmlUtils::remove_subelements_by_tag(xml.as_str(), "actuator")?;
        let xml = SceneXmlUtils::remove_subelements_by_tag(xml.as_str(), "sensor")?;
        let xml = SceneXmlUtils::remove_subelements_by_tag(xml.as_str(), "option")?;

        let (xml, removed_robot_attributes) = SceneXmlUtils::remove_element_by_tag_and_name(xml.as_str(), "body", SUITE_ROBOT_BASE_BODY_NAME)?;
        return Ok((xml, removed_robot_attributes));
    }
    fn rounded_vec_string(v: &[f64]) -> String {
        let strings: Vec<String> = v.iter().map(|x| format!("{:.2}", x)).collect();
        return format!("[{}]", strings.join(" "));
    }
}
