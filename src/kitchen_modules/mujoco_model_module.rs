use mujoco_rs::wrappers::MjModel;
use crate::utils::utils_errors::KitchenGenError;

/// Compiles composed scene documents into engine model handles.  Only available with
/// the `mujoco` feature, which links against the MuJoCo runtime.
pub struct MujocoCompileUtils;
impl MujocoCompileUtils {
    pub fn model_from_xml_string(xml: &str) -> Result<MjModel, KitchenGenError> {
        let model_res = MjModel::from_xml_string(xml);
        return match model_res {
            Ok(model) => { Ok(model) }
            Err(e) => { Err(KitchenGenError::new_generic_error_string(format!("could not compile the scene document into a model: {:?}", e), file!(), line!())) }
        }
    }
}
