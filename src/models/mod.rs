// Module exports for models

pub mod availability;
pub mod provider;
pub mod settings;
pub mod slot;
