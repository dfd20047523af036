//! Configuration: filesystem paths and household settings

pub mod paths;
pub mod settings;

pub use paths::{KitchenPaths, DATA_DIR_ENV};
pub use settings::Settings;
