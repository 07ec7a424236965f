pub mod app;
pub mod assembly_view;
pub mod completion_banner;
pub mod feedback_panel;
pub mod hazard_scene_view;
pub mod progress_counter;
