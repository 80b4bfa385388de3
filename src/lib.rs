pub mod aggregate;
pub mod app;
pub mod chart;
pub mod config;
pub mod controller;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod page;
pub mod predict;
pub mod render;
pub mod session;
pub mod state;
pub mod ui;

pub use app::router;
pub use config::Settings;
pub use state::AppState;
