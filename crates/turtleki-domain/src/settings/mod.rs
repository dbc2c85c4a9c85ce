mod aggregate;
mod repository;

pub use aggregate::{Difficulty, SettingsState};
pub use repository::SettingsRepository;
