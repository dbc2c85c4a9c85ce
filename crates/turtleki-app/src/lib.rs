pub mod application;
pub mod bootstrap;

pub use bootstrap::TurtleKiApp;
