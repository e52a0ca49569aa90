pub mod dialogs;
pub mod file_dialogs;
pub mod main_window;
pub mod menu;
pub mod style_map;
pub mod text_surface;
pub mod theme;
pub mod toolbar;
pub mod welcome;
