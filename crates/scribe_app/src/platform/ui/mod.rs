pub mod constants;
pub mod cursor;
pub mod keymap;
pub mod render;
pub mod theme;
