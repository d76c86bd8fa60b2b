use std::path::PathBuf;
use clap::Parser;
use kitchengen::kitchen_modules::kitchen_layout_module::{RobotSpawnPose, SceneSelection};
use kitchengen::kitchen_modules::robot_description_module::RobotDescriptionModule;
use kitchengen::kitchen_modules::scene_generation_module::{KitchenModelGeneratorModule, KitchenModelRequest, DEFAULT_TASK};
use kitchengen::kitchen_modules::scene_provider_module::SceneSnapshotProvider;
use kitchengen::utils::utils_console::{kitchengen_print, PrintColor, PrintMode};

/// Generates a kitchen scene model for a given task, layout, and style.  Omitted
/// layout/style indices go through the console wizard.
#[derive(Parser)]
#[command(name = "generate_kitchen_model")]
struct Cli {
    /// Task name
    #[arg(long, default_value = DEFAULT_TASK)]
    task: String,
    /// Kitchen layout (choose number 0-9)
    #[arg(long)]
    layout: Option<usize>,
    /// Kitchen style (choose number 0-10)
    #[arg(long)]
    style: Option<usize>,
    /// Write the final model xml to this path
    #[arg(long)]
    write_to_file: Option<PathBuf>,
    /// Root directory holding scene snapshots and the robot description
    #[arg(long, default_value = "assets")]
    assets_dir: PathBuf,
    /// Robot description xml (defaults to <assets-dir>/franka_emika_panda/panda_bimanual.xml)
    #[arg(long)]
    robot_xml: Option<PathBuf>,
    /// Explicit robot spawn position "x y z" (overrides the layout default)
    #[arg(long)]
    robot_pos: Option<String>,
    /// Explicit robot spawn orientation "w x y z" (overrides the layout default)
    #[arg(long)]
    robot_quat: Option<String>,
}

fn main () {
    let cli = Cli::parse();

    let robot_xml = match cli.robot_xml {
        Some(p) => { p }
        None => { cli.assets_dir.join("franka_emika_panda").join("panda_bimanual.xml") }
    };
    let asset_dir = match robot_xml.parent() {
        Some(parent) => { parent.join("assets") }
        None => { PathBuf::from("assets") }
    };
    let robot_description = RobotDescriptionModule::new(&robot_xml, &asset_dir);
    let scene_provider = SceneSnapshotProvider::new(&cli.assets_dir.join("scenes"));

    let robot_spawn_pose = match (&cli.robot_pos, &cli.robot_quat) {
        (Some(pos), Some(quat)) => { Some(RobotSpawnPose::new(pos.as_str(), quat.as_str())) }
        _ => { None }
    };

    let request = KitchenModelRequest {
        task: cli.task,
        layout: selection_from_idx(cli.layout),
        style: selection_from_idx(cli.style),
        robot_spawn_pose,
        write_to_file: cli.write_to_file,
    };

    let generator = KitchenModelGeneratorModule::new(Box::new(scene_provider), robot_description);
    let output = generator.generate(&request).expect("error");

    #[cfg(feature = "mujoco")]
    {
        use kitchengen::kitchen_modules::mujoco_model_module::MujocoCompileUtils;
        MujocoCompileUtils::model_from_xml_string(output.xml.as_str()).expect("error");
    }

    kitchengen_print(format!("Generated model with {} object placements.", output.object_placements_info.len()).as_str(), PrintMode::Println, PrintColor::Green, true);
}

fn selection_from_idx(idx: Option<usize>) -> SceneSelection {
    return match idx {
        Some(idx) => { SceneSelection::Fixed(idx) }
        None => { SceneSelection::Interactive }
    }
}
