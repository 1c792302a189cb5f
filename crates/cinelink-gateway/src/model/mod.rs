mod health;
mod menu;

pub use health::HealthResponse;
pub use menu::MenuResponse;
