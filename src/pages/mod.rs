pub mod editor;
pub mod settings;
