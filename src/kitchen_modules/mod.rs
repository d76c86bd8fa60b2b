pub mod kitchen_layout_module;
#[cfg(feature = "mujoco")]
pub mod mujoco_model_module;
pub mod robot_description_module;
pub mod scene_generation_module;
pub mod scene_provider_module;
