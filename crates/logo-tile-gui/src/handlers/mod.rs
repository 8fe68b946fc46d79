pub mod logo;
pub mod settings;
pub mod tile;
