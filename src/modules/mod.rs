pub mod config;
pub mod logger;

pub use config::load_app_config;
