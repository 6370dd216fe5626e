pub mod hotkeys;
pub mod scene;

pub use hotkeys::display_hotkeys;
pub use scene::setup_scene;
