//! Configuration loading from `.passvault.toml`.

pub mod settings;

pub use settings::Settings;
