pub mod app;
pub mod db;

pub use app::{AppConfig, ConfigError, Environment};
