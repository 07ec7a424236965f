pub mod assembly;
pub mod hazard_scene;

pub use assembly::{Assembly, AssemblyAction};
pub use hazard_scene::{HazardAction, HazardScene, SceneStage};
