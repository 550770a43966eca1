// Configuration module
// Optional TOML settings from ~/.dijabeto/config.toml

mod loader;
mod settings;

pub use loader::load;
pub use settings::Settings;
