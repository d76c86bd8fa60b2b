use std::path::{Path, PathBuf};
use quick_xml::events::{BytesStart, Event};
use quick_xml::{Reader, Writer};
use crate::kitchen_modules::kitchen_layout_module::RobotSpawnPose;
use crate::utils::utils_console::{kitchengen_print, PrintColor, PrintMode};
use crate::utils::utils_errors::KitchenGenError;
use crate::utils::utils_files::FileUtils;
use crate::utils::utils_math::string_to_vec;
use crate::utils::utils_xml::SceneXmlUtils;

/// Default name of the robot description's base body element.
pub const DEFAULT_BASE_BODY_NAME: &str = "base_link";

/// Prepares a standalone robot description document for inclusion into a composed
/// scene: asset references are rewritten to absolute filesystem paths and the spawn
/// pose is injected into the base body.  The patched document is materialized at a
/// temp path because the downstream engine consumes documents by file inclusion only.
#[derive(Clone, Debug)]
pub struct RobotDescriptionModule {
    robot_xml_path: PathBuf,
    asset_dir: PathBuf,
    base_body_name: String,
    temp_xml_path: PathBuf
}
impl RobotDescriptionModule {
    pub fn new(robot_xml_path: &Path, asset_dir: &Path) -> Self {
        let stem = robot_xml_path.file_stem().and_then(|s| s.to_str()).unwrap_or("robot");
        let temp_xml_path = robot_xml_path.with_file_name(format!("{}_temp_abs.xml", stem));
        return Self::new_with_options(robot_xml_path, asset_dir, DEFAULT_BASE_BODY_NAME, &temp_xml_path);
    }
    pub fn new_with_options(robot_xml_path: &Path, asset_dir: &Path, base_body_name: &str, temp_xml_path: &Path) -> Self {
        Self {
            robot_xml_path: robot_xml_path.to_path_buf(),
            asset_dir: asset_dir.to_path_buf(),
            base_body_name: base_body_name.to_string(),
            temp_xml_path: temp_xml_path.to_path_buf()
        }
    }
    pub fn robot_xml_path(&self) -> &Path {
        return &self.robot_xml_path;
    }
    pub fn temp_xml_path(&self) -> &Path {
        return &self.temp_xml_path;
    }
    /// Returns the patched document string without touching disk: asset references are
    /// absolute and, when a pose is given, the base body carries `pos`/`quat`
    /// attributes.  A robot document without the expected base body is left without a
    /// pose (silent no-op).
    pub fn patched_document(&self, pose: Option<&RobotSpawnPose>) -> Result<String, KitchenGenError> {
        let xml = FileUtils::read_file_contents_to_string(&self.robot_xml_path)?;
        let mut xml = self.rewrite_asset_paths(xml.as_str())?;
        if let Some(pose) = pose {
            let pos = string_to_vec(pose.pos.as_str())?;
            let quat = string_to_vec(pose.quat.as_str())?;
            xml = SceneXmlUtils::set_body_pose(xml.as_str(), "body", self.base_body_name.as_str(), &pos, &quat)?;
        }
        return Ok(xml);
    }
    /// Writes the patched document to the module's temp path (overwriting any previous
    /// contents) and returns that path.
    pub fn write_patched(&self, pose: Option<&RobotSpawnPose>) -> Result<PathBuf, KitchenGenError> {
        let xml = self.patched_document(pose)?;
        FileUtils::write_string_to_file(xml.as_str(), &self.temp_xml_path)?;
        kitchengen_print(format!("Saved absolute-path robot xml: {:?}", self.temp_xml_path).as_str(), PrintMode::Println, PrintColor::None, false);
        return Ok(self.temp_xml_path.clone());
    }
    /// Attribute-scoped rewrite of asset references: `assetdir`/`meshdir`/`texturedir`
    /// on compiler elements and every `file` attribute become absolute paths under the
    /// module's asset directory.  Values that are already absolute are left alone, as
    /// is any other text that happens to contain the same substring.
    fn rewrite_asset_paths(&self, xml_str: &str) -> Result<String, KitchenGenError> {
        let mut reader = Reader::from_str(xml_str);
        let mut writer = Writer::new(Vec::new());
        loop {
            let event_res = reader.read_event();
            match event_res {
                Ok(Event::Start(e)) => {
                    match self.rewritten_asset_element(&e)? {
                        Some(rewritten) => {
                            let write_res = writer.write_event(Event::Start(rewritten));
                            if let Err(e) = write_res { return Err(KitchenGenError::new_generic_error_string(e.to_string(), file!(), line!())); }
                        }
                        None => {
                            let write_res = writer.write_event(Event::Start(e));
                            if let Err(e) = write_res { return Err(KitchenGenError::new_generic_error_string(e.to_string(), file!(), line!())); }
                        }
                    }
                }
                Ok(Event::Empty(e)) => {
                    match self.rewritten_asset_element(&e)? {
                        Some(rewritten) => {
                            let write_res = writer.write_event(Event::Empty(rewritten));
                            if let Err(e) = write_res { return Err(KitchenGenError::new_generic_error_string(e.to_string(), file!(), line!())); }
                        }
                        None => {
                            let write_res = writer.write_event(Event::Empty(e));
                            if let Err(e) = write_res { return Err(KitchenGenError::new_generic_error_string(e.to_string(), file!(), line!())); }
                        }
                    }
                }
                Ok(Event::Eof) => { break; }
                Ok(e) => {
                    let write_res = writer.write_event(e);
                    if let Err(e) = write_res { return Err(KitchenGenError::new_generic_error_string(e.to_string(), file!(), line!())); }
                }
                Err(e) => { return Err(KitchenGenError::new_xml_parse_error(e.to_string().as_str(), file!(), line!())); }
            }
        }
        let out_res = String::from_utf8(writer.into_inner());
        return match out_res {
            Ok(s) => { Ok(s) }
            Err(e) => { Err(KitchenGenError::new_generic_error_string(e.to_string(), file!(), line!())) }
        }
    }
    fn rewritten_asset_element(&self, e: &BytesStart) -> Result<Option<BytesStart<'static>>, KitchenGenError> {
        let mut updates: Vec<(String, String)> = vec![];
        if e.name().as_ref() == b"compiler" {
            for key in ["assetdir", "meshdir", "texturedir"] {
                let value_option = SceneXmlUtils::attribute_value(e, key)?;
                if let Some(value) = value_option {
                    if !Path::new(value.as_str()).is_absolute() {
                        updates.push((key.to_string(), self.asset_dir.to_string_lossy().into_owned()));
                    }
                }
            }
        }
        let file_option = SceneXmlUtils::attribute_value(e, "file")?;
        if let Some(file_value) = file_option {
            if !Path::new(file_value.as_str()).is_absolute() {
                updates.push(("file".to_string(), self.asset_dir.join(file_value.as_str()).to_string_lossy().into_owned()));
            }
        }
        if updates.is_empty() { return Ok(None); }
        let updates_ref: Vec<(&str, &str)> = updates.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
        let rewritten = SceneXmlUtils::with_attribute_values_set(e, &updates_ref)?;
        return Ok(Some(rewritten));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const ROBOT_XML: &str = r#"<mujoco model="panda_bimanual">
    <compiler angle="radian" assetdir="assets"/>
    <asset>
        <mesh name="link0" file="link0.stl"/>
        <mesh name="assets" file="/opt/shared/link1.stl"/>
        <texture name="metal" file="textures/metal.png"/>
    </asset>
    <worldbody>
        <body name="base_link" childclass="panda">
            <geom mesh="link0"/>
        </body>
    </worldbody>
</mujoco>"#;

    fn module_in(dir: &Path) -> RobotDescriptionModule {
        let robot_xml_path = dir.join("panda_bimanual.xml");
        FileUtils::write_string_to_file(ROBOT_XML, &robot_xml_path).expect("error");
        return RobotDescriptionModule::new(&robot_xml_path, &dir.join("assets"));
    }

    #[test]
    fn test_asset_paths_become_absolute() {
        let dir = tempdir().expect("error");
        let module = module_in(dir.path());
        let out = module.patched_document(None).expect("error");

        let assets = dir.path().join("assets");
        assert!(out.contains(format!("assetdir=\"{}\"", assets.display()).as_str()));
        assert!(out.contains(format!("file=\"{}\"", assets.join("link0.stl").display()).as_str()));
        assert!(out.contains(format!("file=\"{}\"", assets.join("textures/metal.png").display()).as_str()));
        // already-absolute references and unrelated attributes that merely contain the
        // same substring stay untouched
        assert!(out.contains(r#"file="/opt/shared/link1.stl""#));
        assert!(out.contains(r#"name="assets""#));
    }

    #[test]
    fn test_pose_injection_on_base_body() {
        let dir = tempdir().expect("error");
        let module = module_in(dir.path());
        let pose = RobotSpawnPose::new("2.25 -0.8 0", "1 0 0 0");
        let out = module.patched_document(Some(&pose)).expect("error");
        assert!(out.contains(r#"<body name="base_link" childclass="panda" pos="2.25 -0.8 0" quat="1 0 0 0">"#));
    }

    #[test]
    fn test_missing_base_body_is_a_silent_no_op() {
        let dir = tempdir().expect("error");
        let robot_xml_path = dir.path().join("armless.xml");
        FileUtils::write_string_to_file("<mujoco model=\"armless\"><worldbody><body name=\"torso\"/></worldbody></mujoco>", &robot_xml_path).expect("error");
        let module = RobotDescriptionModule::new(&robot_xml_path, &dir.path().join("assets"));
        let pose = RobotSpawnPose::new("1 2 3", "1 0 0 0");
        let out = module.patched_document(Some(&pose)).expect("error");
        assert!(!out.contains("pos="));
    }

    #[test]
    fn test_write_patched_materializes_temp_file() {
        let dir = tempdir().expect("error");
        let module = module_in(dir.path());
        let written = module.write_patched(None).expect("error");
        assert_eq!(written, dir.path().join("panda_bimanual_temp_abs.xml"));
        let contents = FileUtils::read_file_contents_to_string(&written).expect("error");
        assert!(contents.contains("assetdir"));
    }
}
