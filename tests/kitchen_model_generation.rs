use std::path::Path;
use kitchengen::kitchen_modules::kitchen_layout_module::{KitchenLayout, KitchenStyle, RobotSpawnPose, SceneSelection};
use kitchengen::kitchen_modules::robot_description_module::RobotDescriptionModule;
use kitchengen::kitchen_modules::scene_generation_module::{KitchenModelGeneratorModule, KitchenModelRequest};
use kitchengen::kitchen_modules::scene_provider_module::{ObjectPlacement, SceneSnapshotProvider};
use kitchengen::utils::utils_files::FileUtils;
use nalgebra::{Vector3, Vector4};
use tempfile::tempdir;

const SCENE_XML: &str = r#"<mujoco model="base">
    <option timestep="0.002"/>
    <worldbody>
        <body name="counter_main" pos="2 0 0.9">
            <geom name="counter_top" rgba="0.5 0 0 0.5"/>
            <site name="counter_site" rgba="0.5 0 0 1"/>
        </body>
        <body name="mug_1_main" pos="0 0 0">
            <geom name="mug_geom" type="mesh"/>
        </body>
        <body name="robot0_base" pos="0.5 -0.8 0" quat="0.707107 0 0 0.707107">
            <body name="robot0_link1">
                <geom name="robot0_geom"/>
            </body>
        </body>
    </worldbody>
    <actuator>
        <motor joint="robot0_joint1"/>
    </actuator>
    <sensor>
        <force site="counter_site"/>
    </sensor>
</mujoco>"#;

const ROBOT_XML: &str = r#"<mujoco model="panda_bimanual">
    <compiler angle="radian" assetdir="assets"/>
    <asset>
        <mesh name="link0" file="link0.stl"/>
    </asset>
    <worldbody>
        <body name="base_link" childclass="panda">
            <geom mesh="link0"/>
        </body>
    </worldbody>
</mujoco>"#;

fn setup_generator(root: &Path, task: &str, layout: KitchenLayout, style: KitchenStyle) -> KitchenModelGeneratorModule {
    let snapshot_dir = root.join("scenes").join(task).join(format!("layout{}_style{}", layout.to_idx(), style.to_idx()));
    FileUtils::write_string_to_file(SCENE_XML, &snapshot_dir.join("scene.xml")).expect("error");
    let placements = vec![ObjectPlacement {
        name: "mug_1".to_string(),
        cat: "mug".to_string(),
        pos: Vector3::new(1.5, -0.25, 0.95),
        quat: Vector4::new(1.0, 0.0, 0.0, 0.0)
    }];
    FileUtils::save_object_to_file_as_json(&placements, &snapshot_dir.join("placements.json")).expect("error");

    let robot_xml_path = root.join("franka_emika_panda").join("panda_bimanual.xml");
    FileUtils::write_string_to_file(ROBOT_XML, &robot_xml_path).expect("error");
    let robot_description = RobotDescriptionModule::new(&robot_xml_path, &root.join("franka_emika_panda").join("assets"));

    let scene_provider = SceneSnapshotProvider::new(&root.join("scenes"));
    return KitchenModelGeneratorModule::new(Box::new(scene_provider), robot_description);
}

#[test]
fn test_layout_default_spawn_pose_and_robot_swap() {
    let root = tempdir().expect("error");
    let generator = setup_generator(root.path(), "PnPCounterToCab", KitchenLayout::OneWall, KitchenStyle::Industrial);

    let request = KitchenModelRequest {
        task: "PnPCounterToCab".to_string(),
        layout: SceneSelection::Fixed(0),
        style: SceneSelection::Fixed(0),
        ..Default::default()
    };
    let output = generator.generate(&request).expect("error");

    // with no explicit pose, the layout 0 table entry wins
    assert_eq!(output.robot_spawn_pose, RobotSpawnPose::new("2.25 -0.8 0", "1 0 0 0"));

    // exactly one inclusion reference to the patched robot document, no suite robot left
    assert_eq!(output.xml.matches("<include").count(), 1);
    assert!(output.xml.contains("panda_bimanual_temp_abs.xml"));
    assert!(!output.xml.contains("robot0_base"));
    assert!(!output.xml.contains("robot0_link1"));

    // the patched robot document carries the resolved pose and absolute asset paths
    let robot_xml = FileUtils::read_file_contents_to_string(&output.robot_xml_path).expect("error");
    assert!(robot_xml.contains(r#"pos="2.25 -0.8 0" quat="1 0 0 0""#));
    let abs_mesh = root.path().join("franka_emika_panda").join("assets").join("link0.stl");
    assert!(robot_xml.contains(format!("file=\"{}\"", abs_mesh.display()).as_str()));

    // object placement applied to the <object>_main body and reported
    assert!(output.xml.contains(r#"<body name="mug_1_main" pos="1.5 -0.25 0.95" quat="1 0 0 0">"#));
    let info = output.object_placements_info.get("mug_1_main").expect("error");
    assert_eq!(info.pos, Vector3::new(1.5, -0.25, 0.95));

    // visualization artifacts and the control surface are gone
    assert!(output.xml.contains(r#"rgba="0.5 0 0 0""#));
    assert!(!output.xml.contains("<actuator>"));
    assert!(!output.xml.contains("<sensor>"));
    assert!(!output.xml.contains("<option"));
}

#[test]
fn test_explicit_spawn_pose_overrides_layout_default() {
    let root = tempdir().expect("error");
    let generator = setup_generator(root.path(), "PnPCounterToCab", KitchenLayout::LShapedWithIsland, KitchenStyle::Scandinavian);

    let request = KitchenModelRequest {
        task: "PnPCounterToCab".to_string(),
        layout: SceneSelection::Fixed(3),
        style: SceneSelection::Fixed(1),
        robot_spawn_pose: Some(RobotSpawnPose::new("9 9 9", "0 1 0 0")),
        ..Default::default()
    };
    let output = generator.generate(&request).expect("error");

    assert_eq!(output.robot_spawn_pose, RobotSpawnPose::new("9 9 9", "0 1 0 0"));
    let robot_xml = FileUtils::read_file_contents_to_string(&output.robot_xml_path).expect("error");
    assert!(robot_xml.contains(r#"pos="9 9 9" quat="0 1 0 0""#));
}

#[test]
fn test_final_document_is_persisted_when_requested() {
    let root = tempdir().expect("error");
    let generator = setup_generator(root.path(), "PnPCounterToCab", KitchenLayout::OneWall, KitchenStyle::Industrial);

    let out_path = root.path().join("scene_panda_bimanual_kitchen.xml");
    let request = KitchenModelRequest {
        task: "PnPCounterToCab".to_string(),
        layout: SceneSelection::Fixed(0),
        style: SceneSelection::Fixed(0),
        write_to_file: Some(out_path.clone()),
        ..Default::default()
    };
    let output = generator.generate(&request).expect("error");

    let written = FileUtils::read_file_contents_to_string(&out_path).expect("error");
    assert_eq!(written, output.xml);
}

#[test]
fn test_missing_snapshot_aborts_composition() {
    let root = tempdir().expect("error");
    let generator = setup_generator(root.path(), "PnPCounterToCab", KitchenLayout::OneWall, KitchenStyle::Industrial);

    let request = KitchenModelRequest {
        task: "OpenDrawer".to_string(),
        layout: SceneSelection::Fixed(0),
        style: SceneSelection::Fixed(0),
        ..Default::default()
    };
    assert!(generator.generate(&request).is_err());
}
